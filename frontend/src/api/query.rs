//! Typed select descriptors.
//!
//! A [`Query`] names a collection, the columns to return, the related
//! collections to embed, row filters and ordering. The data client renders it
//! into request parameters; joins are resolved by the backend.

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::QueryError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Embed {
    pub relation: String,
    pub columns: Vec<String>,
}

impl Embed {
    fn render(&self) -> String {
        format!("{}({})", self.relation, self.columns.join(","))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    pub column: String,
    pub value: String,
}

impl Filter {
    pub fn eq(column: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            value: value.into(),
        }
    }

    pub fn to_param(&self) -> (String, String) {
        (self.column.clone(), format!("eq.{}", self.value))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub column: String,
    pub direction: Direction,
}

impl Order {
    fn render(&self) -> String {
        let suffix = match self.direction {
            Direction::Ascending => "asc",
            Direction::Descending => "desc",
        };
        format!("{}.{}", self.column, suffix)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    collection: String,
    columns: Vec<String>,
    embeds: Vec<Embed>,
    filters: Vec<Filter>,
    order: Option<Order>,
    single: bool,
}

impl Query {
    pub fn table(collection: impl Into<String>) -> Self {
        Self {
            collection: collection.into(),
            columns: Vec::new(),
            embeds: Vec::new(),
            filters: Vec::new(),
            order: None,
            single: false,
        }
    }

    pub fn columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns.extend(columns.into_iter().map(Into::into));
        self
    }

    pub fn embed<I, S>(mut self, relation: impl Into<String>, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.embeds.push(Embed {
            relation: relation.into(),
            columns: columns.into_iter().map(Into::into).collect(),
        });
        self
    }

    pub fn filter(mut self, filter: Filter) -> Self {
        self.filters.push(filter);
        self
    }

    pub fn eq(self, column: impl Into<String>, value: impl Into<String>) -> Self {
        self.filter(Filter::eq(column, value))
    }

    pub fn order_by(mut self, column: impl Into<String>, direction: Direction) -> Self {
        self.order = Some(Order {
            column: column.into(),
            direction,
        });
        self
    }

    /// Expect exactly one row; zero rows is reported as
    /// [`QueryError::NotFound`].
    pub fn single(mut self) -> Self {
        self.single = true;
        self
    }

    pub fn collection(&self) -> &str {
        &self.collection
    }

    pub fn embeds(&self) -> &[Embed] {
        &self.embeds
    }

    pub fn filters(&self) -> &[Filter] {
        &self.filters
    }

    pub fn order(&self) -> Option<&Order> {
        self.order.as_ref()
    }

    pub fn is_single(&self) -> bool {
        self.single
    }

    pub fn select_clause(&self) -> String {
        let mut parts: Vec<String> = if self.columns.is_empty() {
            vec!["*".to_string()]
        } else {
            self.columns.clone()
        };
        parts.extend(self.embeds.iter().map(Embed::render));
        parts.join(",")
    }

    pub fn to_params(&self) -> Vec<(String, String)> {
        let mut params = vec![("select".to_string(), self.select_clause())];
        params.extend(self.filters.iter().map(Filter::to_param));
        if let Some(order) = &self.order {
            params.push(("order".to_string(), order.render()));
        }
        params
    }
}

pub fn decode_rows<T: DeserializeOwned>(
    collection: &str,
    rows: Vec<Value>,
) -> Result<Vec<T>, QueryError> {
    rows.into_iter()
        .map(|row| serde_json::from_value(row).map_err(|err| QueryError::decode(collection, err)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn select_clause_defaults_to_all_columns() {
        assert_eq!(Query::table("profiles").select_clause(), "*");
    }

    #[test]
    fn select_clause_renders_embeds_after_columns() {
        let query = Query::table("posts")
            .columns(["*"])
            .embed("profiles", ["username", "full_name", "avatar_url"])
            .embed("likes", ["id"])
            .embed("comments", ["id"]);
        assert_eq!(
            query.select_clause(),
            "*,profiles(username,full_name,avatar_url),likes(id),comments(id)"
        );
    }

    #[test]
    fn params_include_filters_and_order() {
        let query = Query::table("profiles")
            .eq("id", "u1")
            .order_by("created_at", Direction::Descending);
        assert_eq!(
            query.to_params(),
            vec![
                ("select".to_string(), "*".to_string()),
                ("id".to_string(), "eq.u1".to_string()),
                ("order".to_string(), "created_at.desc".to_string()),
            ]
        );
    }

    #[test]
    fn single_flag_is_opt_in() {
        assert!(!Query::table("profiles").is_single());
        assert!(Query::table("profiles").single().is_single());
    }

    #[test]
    fn decode_rows_reports_collection_on_failure() {
        #[derive(Debug, serde::Deserialize)]
        struct Row {
            #[allow(dead_code)]
            id: String,
        }
        let err = decode_rows::<Row>("posts", vec![json!({ "nope": 1 })]).unwrap_err();
        assert!(matches!(err, QueryError::Decode { ref collection, .. } if collection == "posts"));
    }
}
