pub mod fakes;
pub mod ssr;

pub mod helpers {
    use crate::api::{AuthUser, Session, UserId};
    use chrono::{TimeZone, Utc};
    use serde_json::{json, Value};

    pub fn session_for(user_id: &str) -> Session {
        Session {
            access_token: format!("token-{}", user_id),
            refresh_token: Some(format!("refresh-{}", user_id)),
            expires_at: Some(Utc::now().timestamp() + 3600),
            user: AuthUser {
                id: UserId::new(user_id),
                email: Some(format!("{}@example.com", user_id)),
                user_metadata: Value::Null,
            },
        }
    }

    pub fn expired_session_for(user_id: &str) -> Session {
        Session {
            expires_at: Some(Utc::now().timestamp() - 60),
            ..session_for(user_id)
        }
    }

    /// A post row shaped like the joined feed select returns it.
    pub fn post_row(id: &str, user_id: &str, content: &str, minute: u32) -> Value {
        let created_at = Utc
            .with_ymd_and_hms(2025, 3, 1, 10, minute, 0)
            .single()
            .unwrap_or_else(Utc::now);
        json!({
            "id": id,
            "user_id": user_id,
            "content": content,
            "image_url": null,
            "created_at": created_at.to_rfc3339(),
            "profiles": {
                "username": user_id,
                "full_name": null,
                "avatar_url": null
            },
            "likes": [],
            "comments": []
        })
    }

    pub fn profile_row(user_id: &str, username: &str) -> Value {
        json!({
            "id": user_id,
            "username": username,
            "full_name": "Original Name",
            "avatar_url": null,
            "bio": "original bio"
        })
    }
}
