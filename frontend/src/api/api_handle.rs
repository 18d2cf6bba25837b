//! Access to the gateway from components, and the one place API errors are
//! turned into user feedback.

use std::future::Future;

use dioxus::logger::tracing;
use dioxus::prelude::*;
use gateway::{ApiClient, ApiError, ExpiryReaction};

use crate::{
    data_definitions::{session_state::SessionState, toast_service::ToastService},
    routes::Route,
};


#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ApiHandle {
    base: Signal<ApiClient>,
    session: SessionState,
    toasts: ToastService,
}

impl ApiHandle {
    pub fn new(base: Signal<ApiClient>, session: SessionState, toasts: ToastService) -> Self {
        Self { base, session, toasts }
    }

    /// A client carrying the current session's identity headers.
    pub fn client(&self) -> ApiClient {
        self.base.peek().clone().with_session(self.session.current())
    }

    pub fn thumbnail_url(&self, material_id: &str, page_num: u32) -> String {
        self.base.peek().thumbnail_url(material_id, page_num)
    }

    pub fn toasts(&self) -> ToastService {
        self.toasts
    }

    /// Toasts the error and applies the configured reaction to an expired
    /// session. `fallback` is shown when the backend sent no message.
    pub fn report_error(&self, error: &ApiError, fallback: &str) {
        tracing::warn!("api call failed: {error}");
        if let ApiError::Validation(e) = error {
            self.toasts.warning(e.to_string());
            return;
        }
        let policy = self.base.peek().config().auth_expiry_policy;
        match policy.reaction(error, self.session.current().is_some()) {
            ExpiryReaction::ToastOnly => self.toasts.danger(error.user_message_or(fallback)),
            ExpiryReaction::SignOutAndRedirect => {
                let mut session = self.session;
                session.sign_out();
                self.toasts.warning(error.user_message());
                navigator().replace(Route::LoginPage {});
            }
            ExpiryReaction::AlreadySignedOut => {}
        }
    }
}

pub fn use_api() -> ApiHandle {
    use_context::<ApiHandle>()
}

/// A resource fed by the gateway. Failures are reported once, when they
/// arrive; the caller renders the `Err` as an empty state.
pub fn use_api_resource<T, F, Fut>(fallback: &'static str, mut make: F) -> Resource<Result<T, ApiError>>
where
    T: 'static,
    F: FnMut(ApiClient) -> Fut + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let api = use_api();
    use_resource(move || {
        let request = make(api.client());
        async move {
            let result = request.await;
            if let Err(e) = &result {
                api.report_error(e, fallback);
            }
            result
        }
    })
}
