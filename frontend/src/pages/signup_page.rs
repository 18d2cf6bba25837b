use common::{
    user::Role,
    validation::{SignupForm, validate_signup},
};
use dioxus::prelude::*;
use gateway::{ApiError, api::auth};

use crate::api::api_handle::use_api;
use crate::routes::Route;


#[component]
pub fn SignupPage() -> Element {
    let api = use_api();
    let mut form = use_signal(SignupForm::default);
    let mut submitting = use_signal(|| false);

    let submit = move |e: FormEvent| {
        e.prevent_default();
        let request = match validate_signup(&form.read()) {
            Ok(request) => request,
            Err(e) => return api.report_error(&ApiError::from(e), ""),
        };
        let client = api.client();
        submitting.set(true);
        spawn(async move {
            match auth::signup(&client, &request).await {
                Ok(response) => {
                    let message = response.message.unwrap_or_else(|| "Account created. Please log in.".to_string());
                    api.toasts().success(message);
                    navigator().push(Route::LoginPage {});
                }
                Err(e) => {
                    submitting.set(false);
                    api.report_error(&e, "Sign-up failed.");
                }
            }
        });
    };

    let role = form.read().role;
    rsx! {
        Title { "Sign up" }
        AuthCard {
            title: "Create an account",
            form {
                style: "display: flex; flex-direction: column; gap: 12px;",
                onsubmit: submit,
                label { "Name" }
                input {
                    class: "course-input",
                    value: "{form.read().name}",
                    oninput: move |e| form.write().name = e.value(),
                }
                label { "Email" }
                input {
                    class: "course-input",
                    r#type: "email",
                    value: "{form.read().email}",
                    oninput: move |e| form.write().email = e.value(),
                }
                label { "Password" }
                input {
                    class: "course-input",
                    r#type: "password",
                    value: "{form.read().password}",
                    oninput: move |e| form.write().password = e.value(),
                }
                label { "Confirm password" }
                input {
                    class: "course-input",
                    r#type: "password",
                    value: "{form.read().confirm_password}",
                    oninput: move |e| form.write().confirm_password = e.value(),
                }
                label { "I am a" }
                select {
                    class: "course-input",
                    value: "{role.as_str()}",
                    onchange: move |e| {
                        form.write().role = if e.value() == Role::Professor.as_str() { Role::Professor } else { Role::Student };
                    },
                    option { value: Role::Student.as_str(), "{Role::Student.label()}" }
                    option { value: Role::Professor.as_str(), "{Role::Professor.label()}" }
                }
                if role == Role::Professor {
                    div {
                        style: "font-size: 13px; color: #B45309;",
                        "Professor accounts are created by the administrators."
                    }
                }
                button {
                    class: "course-button",
                    r#type: "submit",
                    disabled: submitting(),
                    if submitting() { "Creating account..." } else { "Sign up" }
                }
            }
            div {
                style: "text-align: center; color: #5A6172;",
                "Already registered? "
                Link { to: Route::LoginPage {}, "Log in" }
            }
        }
    }
}

/// Centered card used by the login and signup screens.
#[component]
pub fn AuthCard(title: String, children: Element) -> Element {
    rsx! {
        div {
            style: "
                width: 100%;
                min-height: 100%;
                display: flex;
                align-items: center;
                justify-content: center;
                padding: 40px 16px;
            ",
            div {
                style: "
                    width: 100%;
                    max-width: 420px;
                    background-color: white;
                    border: 1px solid #DADDE3;
                    border-radius: 10px;
                    padding: 32px;
                    display: flex;
                    flex-direction: column;
                    gap: 18px;
                ",
                h1 { style: "margin: 0px; font-size: 26px; text-align: center;", "{title}" }
                {children}
            }
        }
    }
}
