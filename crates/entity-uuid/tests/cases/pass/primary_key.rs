// SPDX-FileCopyrightText: 2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use entity_uuid::UsesUuid;

#[derive(UsesUuid, Debug, Default)]
#[uuid(primary_key)]
pub struct Post {
    pub uuid: String,
    pub title: String,
}

fn main() {
    let spec = Post::UUID_ATTRIBUTE.key_spec().expect("uuid is the key");
    assert_eq!(spec.name, "uuid");
    assert!(!spec.auto_increment);

    let mut post = Post::default();
    post.ensure_uuid();
    assert_eq!(post.key(), post.uuid());
    assert!(post.key().is_some());
}
