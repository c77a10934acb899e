// SPDX-FileCopyrightText: 2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use entity_uuid::UsesUuid;

#[derive(UsesUuid, Debug, Default)]
pub struct Tagged<T: Default> {
    pub uuid: Option<String>,
    pub payload: T,
}

fn main() {
    let mut tagged = Tagged::<u32>::default();
    tagged.ensure_uuid();
    assert!(tagged.uuid().is_some());
    assert_eq!(tagged.payload, 0);
}
