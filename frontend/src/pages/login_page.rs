use common::validation::validate_login;
use dioxus::prelude::*;
use gateway::{ApiError, api::auth};

use crate::api::api_handle::use_api;
use crate::data_definitions::session_state::use_session_state;
use crate::pages::signup_page::AuthCard;
use crate::routes::Route;


#[component]
pub fn LoginPage() -> Element {
    let api = use_api();
    let mut session = use_session_state();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut submitting = use_signal(|| false);

    let submit = move |e: FormEvent| {
        e.prevent_default();
        let request = match validate_login(&email.read(), &password.read()) {
            Ok(request) => request,
            Err(e) => return api.report_error(&ApiError::from(e), ""),
        };
        let client = api.client();
        submitting.set(true);
        spawn(async move {
            match auth::login(&client, &request).await {
                Ok(user) => {
                    api.toasts().success(format!("Welcome, {}!", user.name));
                    session.sign_in(user);
                    navigator().replace(Route::MainPage {});
                }
                Err(e) => {
                    submitting.set(false);
                    api.report_error(&e, "Login failed. Check your email and password.");
                }
            }
        });
    };

    rsx! {
        Title { "Log in" }
        AuthCard {
            title: "Log in",
            form {
                style: "display: flex; flex-direction: column; gap: 12px;",
                onsubmit: submit,
                label { "Email" }
                input {
                    class: "course-input",
                    r#type: "email",
                    value: "{email}",
                    oninput: move |e| email.set(e.value()),
                }
                label { "Password" }
                input {
                    class: "course-input",
                    r#type: "password",
                    value: "{password}",
                    oninput: move |e| password.set(e.value()),
                }
                button {
                    class: "course-button",
                    r#type: "submit",
                    disabled: submitting(),
                    if submitting() { "Logging in..." } else { "Log in" }
                }
            }
            div {
                style: "text-align: center; color: #5A6172;",
                "No account yet? "
                Link { to: Route::SignupPage {}, "Sign up" }
            }
        }
    }
}
