// SPDX-FileCopyrightText: 2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use entity_uuid::UsesUuid;

#[derive(UsesUuid, Debug, Default)]
#[uuid(attribute = "post_uuid")]
pub struct Post {
    pub post_uuid: Option<String>,
    pub title: String,
}

fn main() {
    assert_eq!(Post::uuid_attribute_name(), "post_uuid");

    let mut post = Post::default();
    post.set_uuid("67e55044-10b1-426f-9247-bb680e5fe0c8")
        .expect("valid uuid");
    assert_eq!(post.post_uuid.as_deref(), post.uuid());
}
