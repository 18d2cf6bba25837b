//! Login, signup and logout.

use common::user::{LoginRequest, LoginResponse, MessageResponse, Session, SignupRequest};

use crate::{client::ApiClient, error::ApiError};


/// Returns the session to persist. A 401 here means bad credentials, not
/// an expired session.
pub async fn login(client: &ApiClient, request: &LoginRequest) -> Result<Session, ApiError> {
    let response: LoginResponse = client.post_json("/auth/login", request).await.map_err(|e| match e {
        ApiError::Unauthorized { message } => ApiError::InvalidCredentials { message },
        other => other,
    })?;
    tracing::info!("signed in as {} ({})", response.user.user_id, response.user.role);
    Ok(response.user)
}

pub async fn signup(client: &ApiClient, request: &SignupRequest) -> Result<MessageResponse, ApiError> {
    client.post_json("/auth/signup", request).await
}

pub async fn logout(client: &ApiClient) -> Result<(), ApiError> {
    let _: MessageResponse = client.post_empty("/auth/logout").await?;
    Ok(())
}
