use chrono::Utc;
use reqwest::Response;
use serde_json::json;

use super::{
    client::ApiClient,
    types::{
        AuthErrorBody, PasswordCredentials, Session, SignUpMetadata, SignUpRequest,
        SignUpResponse, TokenResponse,
    },
    AuthError,
};

async fn rejected(response: Response) -> AuthError {
    let status = response.status().as_u16();
    let message = response
        .json::<AuthErrorBody>()
        .await
        .ok()
        .and_then(AuthErrorBody::into_message)
        .unwrap_or_else(|| format!("auth request failed with status {}", status));
    AuthError::Rejected { status, message }
}

impl ApiClient {
    async fn auth_url(&self, path: &str) -> (String, String) {
        let (base, anon_key) = self.resolved_endpoint().await;
        (format!("{}/auth/v1/{}", base, path), anon_key)
    }

    async fn token_grant(
        &self,
        grant_type: &str,
        body: serde_json::Value,
    ) -> Result<Session, AuthError> {
        let (url, anon_key) = self.auth_url("token").await;
        let response = self
            .http_client()
            .post(url)
            .query(&[("grant_type", grant_type)])
            .header("apikey", anon_key)
            .json(&body)
            .send()
            .await
            .map_err(|err| AuthError::Network(err.to_string()))?;

        if !response.status().is_success() {
            return Err(rejected(response).await);
        }
        let token: TokenResponse = response
            .json()
            .await
            .map_err(|err| AuthError::Decode(err.to_string()))?;
        Ok(token.into_session(Utc::now()))
    }

    pub async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Session, AuthError> {
        let credentials = PasswordCredentials {
            email: email.to_string(),
            password: password.to_string(),
        };
        let body =
            serde_json::to_value(credentials).map_err(|err| AuthError::Decode(err.to_string()))?;
        self.token_grant("password", body).await
    }

    pub async fn refresh_session(&self, refresh_token: &str) -> Result<Session, AuthError> {
        self.token_grant("refresh_token", json!({ "refresh_token": refresh_token }))
            .await
    }

    pub async fn sign_up(
        &self,
        email: &str,
        password: &str,
        username: &str,
    ) -> Result<Option<Session>, AuthError> {
        let (url, anon_key) = self.auth_url("signup").await;
        let request = SignUpRequest {
            email: email.to_string(),
            password: password.to_string(),
            data: SignUpMetadata {
                username: username.to_string(),
            },
        };
        let response = self
            .http_client()
            .post(url)
            .header("apikey", anon_key)
            .json(&request)
            .send()
            .await
            .map_err(|err| AuthError::Network(err.to_string()))?;

        if !response.status().is_success() {
            return Err(rejected(response).await);
        }
        match response
            .json::<SignUpResponse>()
            .await
            .map_err(|err| AuthError::Decode(err.to_string()))?
        {
            SignUpResponse::Session(token) => Ok(Some(token.into_session(Utc::now()))),
            SignUpResponse::User(_) => Ok(None),
        }
    }

    /// Revoke the given access token on the server.
    pub async fn revoke(&self, access_token: &str) -> Result<(), AuthError> {
        let (url, anon_key) = self.auth_url("logout").await;
        let response = self
            .http_client()
            .post(url)
            .header("apikey", anon_key)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|err| AuthError::Network(err.to_string()))?;
        if response.status().is_success() {
            Ok(())
        } else {
            Err(rejected(response).await)
        }
    }
}
