// SPDX-FileCopyrightText: 2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use entity_uuid::{UsesUuid, is_valid_uuid};

#[derive(UsesUuid, Debug, Default)]
pub struct Post {
    pub uuid: Option<String>,
    pub title: String,
}

fn main() {
    assert_eq!(Post::uuid_attribute_name(), "uuid");
    assert!(!Post::UUID_ATTRIBUTE.is_primary_key());

    let mut post = Post::default();
    assert!(post.uuid().is_none());
    assert!(post.key().is_none());

    post.ensure_uuid();
    assert!(post.uuid().is_some_and(is_valid_uuid));
}
