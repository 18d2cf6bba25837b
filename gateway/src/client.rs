//! HTTP plumbing shared by every endpoint.

use bytes::Bytes;
use common::{file_name::file_name_from_content_disposition, user::Session};
use reqwest::{Method, RequestBuilder, Response, StatusCode, header};
use serde::{Serialize, de::DeserializeOwned};

use crate::{config::GatewayConfig, error::ApiError};


const JSON: &str = "application/json";

pub const AUTHORIZATION_HEADER: &str = "Authorization";
pub const USER_ID_HEADER: &str = "X-User-ID";
pub const USER_ROLE_HEADER: &str = "X-User-Role";
pub const USER_EMAIL_HEADER: &str = "X-User-Email";

/// A binary body plus the metadata needed to save it.
#[derive(Debug, Clone, PartialEq)]
pub struct DownloadedFile {
    pub bytes: Bytes,
    /// From `Content-Disposition`, when the backend sent one.
    pub file_name: Option<String>,
    pub content_type: Option<String>,
}

#[derive(serde::Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Headers that identify the signed-in user. Empty without a session.
pub fn identity_headers(session: Option<&Session>) -> Vec<(&'static str, String)> {
    let Some(session) = session else { return Vec::new() };
    let mut headers = Vec::with_capacity(4);
    if let Some(token) = session.token.as_deref().filter(|t| !t.is_empty()) {
        headers.push((AUTHORIZATION_HEADER, format!("Bearer {token}")));
    }
    headers.push((USER_ID_HEADER, session.user_id.clone()));
    headers.push((USER_ROLE_HEADER, session.role.as_str().to_string()));
    headers.push((USER_EMAIL_HEADER, session.email.clone()));
    headers
}

/// Encodes one path segment (ids, invitation codes).
pub fn segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: GatewayConfig,
    session: Option<Session>,
}

impl ApiClient {
    pub fn new(config: GatewayConfig) -> Self {
        Self { http: reqwest::Client::new(), config, session: None }
    }

    pub fn with_session(mut self, session: Option<Session>) -> Self {
        self.session = session;
        self
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    /// Thumbnail image rendered by the backend for one page of a material.
    pub fn thumbnail_url(&self, material_id: &str, page_num: u32) -> String {
        self.url(&format!("/storage/thumbnails/{}/page_{}.jpg", segment(material_id), page_num))
    }

    fn request(&self, method: Method, path: &str, accept: &'static str) -> RequestBuilder {
        let mut builder = self
            .http
            .request(method, self.url(path))
            .header(header::ACCEPT, accept);
        for (name, value) in identity_headers(self.session.as_ref()) {
            builder = builder.header(name, value);
        }
        // the backend also keeps a cookie session
        #[cfg(target_arch = "wasm32")]
        {
            builder = builder.fetch_credentials_include();
        }
        builder
    }

    async fn send(&self, builder: RequestBuilder, method: &Method, path: &str) -> Result<Response, ApiError> {
        tracing::debug!("{method} {path}");
        let response = builder.send().await.map_err(|e| {
            tracing::warn!("{method} {path}: request failed: {e}");
            ApiError::Network(e.to_string())
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response
            .bytes()
            .await
            .ok()
            .and_then(|body| serde_json::from_slice::<ErrorBody>(&body).ok())
            .and_then(|body| body.message);
        tracing::warn!("{method} {path}: backend answered {status}: {message:?}");

        Err(match status {
            StatusCode::UNAUTHORIZED => ApiError::Unauthorized { message },
            StatusCode::FORBIDDEN => ApiError::Forbidden { message },
            StatusCode::NOT_FOUND => ApiError::NotFound { message },
            other => ApiError::Backend { status: other.as_u16(), message },
        })
    }

    async fn decode<T: DeserializeOwned>(response: Response, path: &str) -> Result<T, ApiError> {
        let body = response.bytes().await.map_err(|e| ApiError::Network(e.to_string()))?;
        serde_json::from_slice(&body).map_err(|e| {
            tracing::error!("{path}: response does not match schema: {e}");
            ApiError::Decode { endpoint: path.to_string(), message: e.to_string() }
        })
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let method = Method::GET;
        let response = self.send(self.request(method.clone(), path, JSON), &method, path).await?;
        Self::decode(response, path).await
    }

    pub(crate) async fn get_json_with_query<T: DeserializeOwned, Q: Serialize + ?Sized>(&self, path: &str, query: &Q) -> Result<T, ApiError> {
        let method = Method::GET;
        let response = self.send(self.request(method.clone(), path, JSON).query(query), &method, path).await?;
        Self::decode(response, path).await
    }

    pub(crate) async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        let method = Method::POST;
        let response = self.send(self.request(method.clone(), path, JSON).json(body), &method, path).await?;
        Self::decode(response, path).await
    }

    /// POST without a body, for action endpoints (`/read`, `/join`, `/invite`).
    pub(crate) async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let method = Method::POST;
        let builder = self.request(method.clone(), path, JSON).header(header::CONTENT_TYPE, JSON).body("{}");
        let response = self.send(builder, &method, path).await?;
        Self::decode(response, path).await
    }

    pub(crate) async fn post_multipart<T: DeserializeOwned>(&self, path: &str, form: reqwest::multipart::Form) -> Result<T, ApiError> {
        let method = Method::POST;
        let response = self.send(self.request(method.clone(), path, JSON).multipart(form), &method, path).await?;
        Self::decode(response, path).await
    }

    pub(crate) async fn get_bytes(&self, path: &str) -> Result<DownloadedFile, ApiError> {
        let method = Method::GET;
        let builder = self.request(method.clone(), path, "*/*");
        let response = self.send(builder, &method, path).await?;

        let file_name = response
            .headers()
            .get(header::CONTENT_DISPOSITION)
            .and_then(|v| v.to_str().ok())
            .and_then(file_name_from_content_disposition);
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let bytes = response.bytes().await.map_err(|e| ApiError::Network(e.to_string()))?;
        tracing::debug!("{path}: received {} bytes", bytes.len());

        Ok(DownloadedFile { bytes, file_name, content_type })
    }
}


#[cfg(test)]
mod tests {
    use common::user::Role;

    use super::*;

    fn session(token: Option<&str>) -> Session {
        Session {
            user_id: "u1".to_string(),
            role: Role::Student,
            name: "Hong".to_string(),
            email: "hong@student.ac.kr".to_string(),
            token: token.map(str::to_string),
        }
    }

    #[test]
    fn no_session_no_identity() {
        assert!(identity_headers(None).is_empty());
    }

    #[test]
    fn identity_headers_with_token() {
        let s = session(Some("abc"));
        let headers = identity_headers(Some(&s));
        assert_eq!(
            headers,
            vec![
                (AUTHORIZATION_HEADER, "Bearer abc".to_string()),
                (USER_ID_HEADER, "u1".to_string()),
                (USER_ROLE_HEADER, "student".to_string()),
                (USER_EMAIL_HEADER, "hong@student.ac.kr".to_string()),
            ]
        );
    }

    #[test]
    fn bearer_is_skipped_without_token() {
        let s = session(None);
        let headers = identity_headers(Some(&s));
        assert!(headers.iter().all(|(name, _)| *name != AUTHORIZATION_HEADER));
        assert_eq!(headers.len(), 3);
    }

    #[test]
    fn thumbnail_url_encodes_the_id() {
        let client = ApiClient::new(GatewayConfig::new("http://localhost/api"));
        assert_eq!(client.thumbnail_url("m 1", 3), "http://localhost/api/storage/thumbnails/m%201/page_3.jpg");
    }
}
