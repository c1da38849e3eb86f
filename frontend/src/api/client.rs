use async_trait::async_trait;
use reqwest::{header::HeaderValue, Client, RequestBuilder, Response, StatusCode};
use serde_json::Value;
use std::{cell::RefCell, rc::Rc};

use super::{
    service::DataService,
    types::RestErrorBody,
    Filter, Query, QueryError,
};
use crate::config;

const SINGLE_OBJECT: &str = "application/vnd.pgrst.object+json";
const RETURN_MINIMAL: &str = "return=minimal";

/// HTTP access to the managed backend. Clones share the bearer token, so the
/// session layer can rotate it for every screen at once.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    endpoint: Option<(String, String)>,
    access_token: Rc<RefCell<Option<String>>>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            endpoint: None,
            access_token: Rc::new(RefCell::new(None)),
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: Some((base_url.into(), anon_key.into())),
            access_token: Rc::new(RefCell::new(None)),
        }
    }

    pub(super) fn http_client(&self) -> &Client {
        &self.client
    }

    pub(super) async fn resolved_endpoint(&self) -> (String, String) {
        if let Some((base, key)) = &self.endpoint {
            (base.trim_end_matches('/').to_string(), key.clone())
        } else {
            let cfg = config::await_runtime_config().await;
            (cfg.backend_url.trim_end_matches('/').to_string(), cfg.anon_key)
        }
    }

    pub fn set_access_token(&self, token: Option<String>) {
        *self.access_token.borrow_mut() = token;
    }

    pub fn access_token(&self) -> Option<String> {
        self.access_token.borrow().clone()
    }

    /// Attach the project key and the caller's bearer token, falling back to
    /// the anonymous key when signed out.
    pub(super) fn authorize(&self, request: RequestBuilder, anon_key: &str) -> RequestBuilder {
        let bearer = self
            .access_token()
            .unwrap_or_else(|| anon_key.to_string());
        request
            .header("apikey", anon_key)
            .bearer_auth(bearer)
    }

    async fn rest_request(
        &self,
        collection: &str,
        build: impl FnOnce(&Client, String) -> RequestBuilder,
    ) -> Result<Response, QueryError> {
        let (base, anon_key) = self.resolved_endpoint().await;
        let url = format!("{}/rest/v1/{}", base, collection);
        let request = self.authorize(build(&self.client, url), &anon_key);
        request
            .send()
            .await
            .map_err(|err| QueryError::Network(err.to_string()))
    }
}

async fn status_error(response: Response) -> QueryError {
    let status = response.status();
    let body = response.json::<RestErrorBody>().await.ok();
    if status == StatusCode::UNAUTHORIZED {
        let reason = body
            .map(|body| body.full_message())
            .unwrap_or_else(|| "missing or expired token".to_string());
        return QueryError::Unauthenticated(reason);
    }
    let status = status.as_u16();
    match body {
        Some(body) => QueryError::Status {
            status,
            message: body.full_message(),
            code: body.code,
        },
        None => QueryError::Status {
            status,
            message: format!("request failed with status {}", status),
            code: None,
        },
    }
}

#[async_trait(?Send)]
impl DataService for ApiClient {
    async fn select(&self, query: &Query) -> Result<Vec<Value>, QueryError> {
        let collection = query.collection().to_string();
        let params = query.to_params();
        let single = query.is_single();
        let response = self
            .rest_request(&collection, |client, url| {
                let request = client.get(url).query(&params);
                if single {
                    request.header("Accept", HeaderValue::from_static(SINGLE_OBJECT))
                } else {
                    request
                }
            })
            .await?;

        let status = response.status();
        if single && status == StatusCode::NOT_ACCEPTABLE {
            log::debug!("single-row select on {} matched no rows", collection);
            return Err(QueryError::NotFound(collection));
        }
        if !status.is_success() {
            return Err(status_error(response).await);
        }

        let body: Value = response
            .json()
            .await
            .map_err(|err| QueryError::decode(&collection, err))?;
        match body {
            Value::Array(rows) => Ok(rows),
            Value::Object(_) if single => Ok(vec![body]),
            other => Err(QueryError::decode(
                &collection,
                format!("expected rows, got {}", other),
            )),
        }
    }

    async fn insert(&self, collection: &str, record: Value) -> Result<(), QueryError> {
        let response = self
            .rest_request(collection, |client, url| {
                client
                    .post(url)
                    .header("Prefer", RETURN_MINIMAL)
                    .json(&record)
            })
            .await?;
        if response.status().is_success() {
            Ok(())
        } else {
            Err(status_error(response).await)
        }
    }

    async fn update(
        &self,
        collection: &str,
        patch: Value,
        filters: &[Filter],
    ) -> Result<(), QueryError> {
        let params: Vec<(String, String)> = filters.iter().map(Filter::to_param).collect();
        let response = self
            .rest_request(collection, |client, url| {
                client
                    .patch(url)
                    .query(&params)
                    .header("Prefer", RETURN_MINIMAL)
                    .json(&patch)
            })
            .await?;
        if response.status().is_success() {
            Ok(())
        } else {
            Err(status_error(response).await)
        }
    }
}
