use std::rc::Rc;

use crate::api::{
    decode_rows, DataService, Filter, Profile, ProfilePatch, Query, QueryError, UserId,
};

pub const PROFILES: &str = "profiles";

pub fn profile_query(id: &UserId) -> Query {
    Query::table(PROFILES).eq("id", id.as_str()).single()
}

#[derive(Clone)]
pub struct ProfileRepository {
    data: Rc<dyn DataService>,
}

impl ProfileRepository {
    pub fn new(data: Rc<dyn DataService>) -> Self {
        Self { data }
    }

    pub async fn fetch_profile(&self, id: &UserId) -> Result<Profile, QueryError> {
        let rows = self.data.select(&profile_query(id)).await?;
        decode_rows::<Profile>(PROFILES, rows)?
            .into_iter()
            .next()
            .ok_or_else(|| QueryError::NotFound(PROFILES.to_string()))
    }

    /// Writes the editable columns back. The username is never sent.
    pub async fn save_profile(&self, id: &UserId, patch: &ProfilePatch) -> Result<(), QueryError> {
        let patch = serde_json::to_value(patch).map_err(|err| QueryError::decode(PROFILES, err))?;
        self.data
            .update(PROFILES, patch, &[Filter::eq("id", id.as_str())])
            .await
    }
}
