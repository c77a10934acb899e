// SPDX-FileCopyrightText: 2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use entity_uuid::{UsesUuid, UuidVersion};
use uuid::Uuid;

#[derive(UsesUuid, Debug, Default)]
#[uuid(version = "v7")]
pub struct Event {
    pub uuid: Option<String>,
    pub name: String,
}

fn main() {
    assert_eq!(Event::UUID_ATTRIBUTE.version(), UuidVersion::V7);

    let mut event = Event::default();
    event.ensure_uuid();

    let parsed = Uuid::try_parse(event.uuid().expect("generated")).expect("valid uuid");
    assert_eq!(parsed.get_version_num(), 7);
}
