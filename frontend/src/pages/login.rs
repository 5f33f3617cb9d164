use shared::{LoginRequest, RegisterRequest};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, MouseEvent};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::context::AuthAction;
use crate::hooks::use_auth;
use crate::services::api::ApiClient;
use crate::services::logging::Logger;

#[function_component(Login)]
pub fn login() -> Html {
    let auth = use_auth();
    let navigator = use_navigator().expect("page rendered under BrowserRouter");

    let registering = use_state(|| false);
    let username = use_state(String::new);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let is_submitting = use_state(|| false);
    let error_message = use_state(|| None::<String>);
    let info_message = use_state(|| None::<String>);

    let on_username_change = {
        let username = username.clone();
        let error_message = error_message.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            username.set(input.value());
            error_message.set(None);
        })
    };

    let on_email_change = {
        let email = email.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let on_password_change = {
        let password = password.clone();
        let error_message = error_message.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
            error_message.set(None);
        })
    };

    let toggle_mode = {
        let registering = registering.clone();
        let error_message = error_message.clone();
        let info_message = info_message.clone();
        Callback::from(move |_: MouseEvent| {
            registering.set(!*registering);
            error_message.set(None);
            info_message.set(None);
        })
    };

    let on_submit = {
        let auth = auth.clone();
        let navigator = navigator.clone();
        let registering = registering.clone();
        let username = username.clone();
        let email = email.clone();
        let password = password.clone();
        let is_submitting = is_submitting.clone();
        let error_message = error_message.clone();
        let info_message = info_message.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if username.trim().is_empty() || password.is_empty() {
                error_message.set(Some("Username and password are required".to_string()));
                return;
            }

            let auth = auth.clone();
            let navigator = navigator.clone();
            let register_mode = *registering;
            let registering = registering.clone();
            let username_value = (*username).trim().to_string();
            let email_value = (*email).trim().to_string();
            let password_value = (*password).clone();
            let is_submitting = is_submitting.clone();
            let error_message = error_message.clone();
            let info_message = info_message.clone();

            spawn_local(async move {
                is_submitting.set(true);
                error_message.set(None);
                info_message.set(None);

                let api_client = ApiClient::new();

                if register_mode {
                    let request = RegisterRequest {
                        username: username_value,
                        email: if email_value.is_empty() {
                            None
                        } else {
                            Some(email_value)
                        },
                        password: password_value,
                    };

                    match api_client.register(&request).await {
                        Ok(response) => {
                            info_message.set(Some(format!(
                                "{} Sign in with your new account.",
                                response.msg
                            )));
                            registering.set(false);
                        }
                        Err(e) => {
                            Logger::warn_with_component("login", &e.to_string());
                            error_message.set(Some(e.to_string()));
                        }
                    }
                } else {
                    let request = LoginRequest {
                        username: username_value,
                        password: password_value,
                    };

                    match api_client.login(&request).await {
                        Ok(response) => {
                            let target = if response.role == shared::UserRole::Finance {
                                Route::FinanceDashboard
                            } else {
                                Route::StudentDashboard
                            };
                            auth.dispatch(AuthAction::LoggedIn(Box::new(response)));
                            navigator.push(&target);
                        }
                        Err(e) => {
                            Logger::warn_with_component("login", &e.to_string());
                            error_message.set(Some(e.to_string()));
                        }
                    }
                }

                is_submitting.set(false);
            });
        })
    };

    html! {
        <div class="page-centered">
            <div class="login-card">
                <h1>{if *registering { "Create account" } else { "Sign in" }}</h1>

                {if let Some(error) = (*error_message).clone() {
                    html! { <div class="form-message error">{error}</div> }
                } else {
                    html! {}
                }}

                {if let Some(message) = (*info_message).clone() {
                    html! { <div class="form-message success">{message}</div> }
                } else {
                    html! {}
                }}

                <form class="login-form" onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="login-username">{"Username"}</label>
                        <input
                            type="text"
                            id="login-username"
                            value={(*username).clone()}
                            onchange={on_username_change}
                            disabled={*is_submitting}
                            autofocus=true
                        />
                    </div>

                    {if *registering {
                        html! {
                            <div class="form-group">
                                <label for="login-email">{"Email (optional)"}</label>
                                <input
                                    type="email"
                                    id="login-email"
                                    value={(*email).clone()}
                                    onchange={on_email_change}
                                    disabled={*is_submitting}
                                />
                            </div>
                        }
                    } else {
                        html! {}
                    }}

                    <div class="form-group">
                        <label for="login-password">{"Password"}</label>
                        <input
                            type="password"
                            id="login-password"
                            value={(*password).clone()}
                            onchange={on_password_change}
                            disabled={*is_submitting}
                        />
                    </div>

                    <button type="submit" class="btn btn-primary" disabled={*is_submitting}>
                        {match (*is_submitting, *registering) {
                            (true, _) => "Working...",
                            (false, true) => "Create account",
                            (false, false) => "Sign in",
                        }}
                    </button>
                </form>

                <button class="btn btn-link" onclick={toggle_mode} disabled={*is_submitting}>
                    {if *registering {
                        "Already registered? Sign in"
                    } else {
                        "New student? Create an account"
                    }}
                </button>
            </div>
        </div>
    }
}
