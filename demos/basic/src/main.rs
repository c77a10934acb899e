// SPDX-FileCopyrightText: 2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Minimal walkthrough of the UUID attribute concern.
//!
//! Run with logs enabled to watch generation happen:
//!
//! ```bash
//! RUST_LOG=debug cargo run -p demo-basic
//! ```

use entity_uuid::{ByUuid, InvalidInput, UsesUuid, before_insert, filter_by_uuid};

#[derive(UsesUuid, Debug, Default)]
struct Post {
    uuid:  Option<String>,
    title: String
}

#[derive(UsesUuid, Debug, Default)]
#[uuid(primary_key, version = "v7")]
struct Session {
    uuid: String,
    user: String
}

fn main() -> Result<(), InvalidInput> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // A record created without a UUID gets one from the pre-insert hook.
    let mut post = Post {
        title: "hello".to_string(),
        ..Post::default()
    };
    before_insert(&mut post);
    tracing::info!(uuid = post.uuid(), title = %post.title, "post ready for insert");

    // An explicitly assigned valid UUID survives the hook untouched.
    let mut pinned = Post::default();
    pinned.set_uuid("67e55044-10b1-426f-9247-bb680e5fe0c8")?;
    before_insert(&mut pinned);
    assert_eq!(pinned.uuid(), Some("67e55044-10b1-426f-9247-bb680e5fe0c8"));

    // Invalid input is rejected outright.
    let rejected = pinned.set_uuid("foobar").unwrap_err();
    tracing::warn!(error = %rejected, "explicit setter rejected");

    // The UUID attribute as a time-ordered primary key.
    let mut session = Session {
        user: "ada".to_string(),
        ..Session::default()
    };
    session.ensure_uuid();
    let spec = Session::UUID_ATTRIBUTE.key_spec().expect("uuid is the key");
    tracing::info!(
        key = session.key(),
        key_name = spec.name,
        user = %session.user,
        "session keyed by uuid"
    );

    // Composing a WHERE clause the way a host repository would.
    let filter: ByUuid = vec![
        session.key().expect("key assigned").to_string(),
        uuid::Uuid::new_v4().to_string(),
    ]
    .into();
    let mut conditions = vec!["revoked_at IS NULL".to_string()];
    let next_param = filter_by_uuid(&mut conditions, "uuid", &filter, 1);
    let sql = format!("SELECT * FROM sessions WHERE {}", conditions.join(" AND "));
    tracing::info!(%sql, next_param, "by-uuid scope rendered");

    Ok(())
}
