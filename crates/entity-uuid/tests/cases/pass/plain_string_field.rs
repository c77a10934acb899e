// SPDX-FileCopyrightText: 2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use entity_uuid::{UsesUuid, is_valid_uuid};

/// `String` storage: an empty string counts as unset.
#[derive(UsesUuid, Debug, Default)]
pub struct Post {
    pub uuid: String,
    pub title: String,
}

fn main() {
    let mut post = Post::default();
    assert!(post.uuid().is_none());

    post.ensure_uuid();
    assert!(post.uuid().is_some_and(is_valid_uuid));
    assert!(!post.uuid.is_empty());
}
