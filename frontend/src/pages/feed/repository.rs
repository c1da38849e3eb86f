use serde_json::Value;
use std::rc::Rc;

use crate::api::{decode_rows, DataService, Direction, NewPost, Post, Query, QueryError, UserId};

pub const POSTS: &str = "posts";

/// Every post with its author summary and engagement ids, newest first.
pub fn feed_query() -> Query {
    Query::table(POSTS)
        .embed("profiles", ["username", "full_name", "avatar_url"])
        .embed("likes", ["id"])
        .embed("comments", ["id"])
        .order_by("created_at", Direction::Descending)
}

#[derive(Clone)]
pub struct FeedRepository {
    data: Rc<dyn DataService>,
}

impl FeedRepository {
    pub fn new(data: Rc<dyn DataService>) -> Self {
        Self { data }
    }

    pub async fn fetch_posts(&self) -> Result<Vec<Post>, QueryError> {
        let rows = self.data.select(&feed_query()).await?;
        decode_rows(POSTS, rows)
    }

    pub async fn create_post(&self, user_id: &UserId, content: &str) -> Result<(), QueryError> {
        let record = NewPost {
            user_id: user_id.clone(),
            content: content.to_string(),
        };
        let record: Value =
            serde_json::to_value(record).map_err(|err| QueryError::decode(POSTS, err))?;
        self.data.insert(POSTS, record).await
    }
}
