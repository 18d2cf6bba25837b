//! Gateway configuration.
//!
//! The base address comes from `COURSE_API_BASE_URL`. Browser builds have no
//! process environment, so the value baked in at compile time is used there;
//! native builds may override it at run time.

use std::str::FromStr;

use crate::error::ApiError;


pub const DEFAULT_BASE_URL: &str = "https://course.o-r.kr/api";
pub const BASE_URL_VAR: &str = "COURSE_API_BASE_URL";
pub const AUTH_EXPIRY_POLICY_VAR: &str = "COURSE_AUTH_EXPIRY_POLICY";

#[derive(Debug, thiserror::Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

/// What happens locally when the backend answers 401 to a signed-in request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthExpiryPolicy {
    /// Keep the stored session; the user sees the error and may retry.
    #[default]
    KeepSession,
    /// Forget the stored session and send the user to the login screen.
    ClearSessionAndRedirect,
}

/// What the screen does with a failed request under the active policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpiryReaction {
    /// Show the error and keep going.
    ToastOnly,
    /// Drop the session, say so once, and go to the login screen.
    SignOutAndRedirect,
    /// The session is already gone; another request reported the expiry.
    AlreadySignedOut,
}

impl AuthExpiryPolicy {
    pub fn reaction(&self, error: &ApiError, signed_in: bool) -> ExpiryReaction {
        if !error.is_auth_expired() || *self == AuthExpiryPolicy::KeepSession {
            return ExpiryReaction::ToastOnly;
        }
        if signed_in { ExpiryReaction::SignOutAndRedirect } else { ExpiryReaction::AlreadySignedOut }
    }
}

impl FromStr for AuthExpiryPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "keep" => Ok(AuthExpiryPolicy::KeepSession),
            "clear" => Ok(AuthExpiryPolicy::ClearSessionAndRedirect),
            other => Err(ConfigError::InvalidValue(AUTH_EXPIRY_POLICY_VAR.to_string(), other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GatewayConfig {
    pub base_url: String,
    pub auth_expiry_policy: AuthExpiryPolicy,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl GatewayConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            auth_expiry_policy: AuthExpiryPolicy::default(),
        }
    }

    pub fn with_auth_expiry_policy(mut self, policy: AuthExpiryPolicy) -> Self {
        self.auth_expiry_policy = policy;
        self
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url = std::env::var(BASE_URL_VAR)
            .ok()
            .or_else(|| option_env!("COURSE_API_BASE_URL").map(str::to_string))
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        reqwest::Url::parse(&base_url)
            .map_err(|e| ConfigError::InvalidValue(BASE_URL_VAR.to_string(), format!("{base_url}: {e}")))?;

        let auth_expiry_policy = match std::env::var(AUTH_EXPIRY_POLICY_VAR)
            .ok()
            .or_else(|| option_env!("COURSE_AUTH_EXPIRY_POLICY").map(str::to_string))
        {
            Some(value) => value.parse()?,
            None => AuthExpiryPolicy::default(),
        };

        Ok(Self::new(base_url).with_auth_expiry_policy(auth_expiry_policy))
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_dropped() {
        assert_eq!(GatewayConfig::new("http://localhost:5000/api/").base_url, "http://localhost:5000/api");
    }

    #[test]
    fn policy_parses_both_spellings() {
        assert_eq!("keep".parse::<AuthExpiryPolicy>(), Ok(AuthExpiryPolicy::KeepSession));
        assert_eq!(" CLEAR ".parse::<AuthExpiryPolicy>(), Ok(AuthExpiryPolicy::ClearSessionAndRedirect));
        assert!("logout".parse::<AuthExpiryPolicy>().is_err());
    }

    #[test]
    fn expired_session_is_cleared_only_under_clear_policy() {
        let expired = ApiError::Unauthorized { message: None };
        assert_eq!(
            AuthExpiryPolicy::ClearSessionAndRedirect.reaction(&expired, true),
            ExpiryReaction::SignOutAndRedirect
        );
        assert_eq!(AuthExpiryPolicy::KeepSession.reaction(&expired, true), ExpiryReaction::ToastOnly);
    }

    #[test]
    fn rejected_login_never_signs_out() {
        let rejected = ApiError::InvalidCredentials { message: Some("Wrong password.".to_string()) };
        assert_eq!(AuthExpiryPolicy::ClearSessionAndRedirect.reaction(&rejected, true), ExpiryReaction::ToastOnly);
        let forbidden = ApiError::Forbidden { message: None };
        assert_eq!(AuthExpiryPolicy::ClearSessionAndRedirect.reaction(&forbidden, true), ExpiryReaction::ToastOnly);
    }

    #[test]
    fn concurrent_expiries_sign_out_once() {
        let expired = ApiError::Unauthorized { message: None };
        let policy = AuthExpiryPolicy::ClearSessionAndRedirect;
        assert_eq!(policy.reaction(&expired, true), ExpiryReaction::SignOutAndRedirect);
        // the first report signed the user out
        assert_eq!(policy.reaction(&expired, false), ExpiryReaction::AlreadySignedOut);
    }

    #[test]
    fn default_keeps_the_session() {
        let config = GatewayConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.auth_expiry_policy, AuthExpiryPolicy::KeepSession);
    }
}
