use gloo::timers::callback::Timeout;
use headline_frontend_common::{AppConfig, AuthApiService, Notice, NoticeKind};
use tracing::{info, warn};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::components::{AuthCard, SubmitButton, TextField};
use crate::form_status::FormStatus;

#[function_component(SignupPage)]
pub fn signup_page() -> Html {
    let navigator = use_navigator();

    let username = use_state(String::new);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let status = use_state(FormStatus::default);

    let field = |handle: &UseStateHandle<String>| {
        let handle = handle.clone();
        Callback::from(move |value: String| handle.set(value))
    };
    let on_username = field(&username);
    let on_email = field(&email);
    let on_password = field(&password);

    let onsubmit = {
        let username = username.clone();
        let email = email.clone();
        let password = password.clone();
        let status = status.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if !status.accepts_submit() {
                return;
            }

            let username = (*username).clone();
            let email = (*email).clone();
            let password = (*password).clone();
            let status = status.clone();
            let navigator = navigator.clone();

            status.set(FormStatus::Submitting);

            spawn_local(async move {
                match AuthApiService::new()
                    .signup(username, email.clone(), password)
                    .await
                {
                    Ok(()) => {
                        info!(email = %email, "Signup successful");
                        status.set(FormStatus::Redirecting(
                            "Signup successful! Redirecting to login...".to_string(),
                        ));
                        Timeout::new(AppConfig::SIGNUP_REDIRECT_DELAY_MS, move || {
                            if let Some(navigator) = navigator {
                                navigator.push(&Route::Login);
                            }
                        })
                        .forget();
                    }
                    Err(err) => {
                        warn!(error = %err, "Signup failed");
                        status.set(FormStatus::Failed(err.user_message()));
                    }
                }
            });
        })
    };

    html! {
        <AuthCard title="Create Your Account">
            <form class="mt-8 space-y-6" {onsubmit}>
                <div class="space-y-4">
                    <TextField
                        id="username"
                        label="Username"
                        placeholder="Username"
                        value={(*username).clone()}
                        on_change={on_username}
                    />
                    <TextField
                        id="email"
                        label="Email address"
                        input_type="email"
                        placeholder="Email address"
                        value={(*email).clone()}
                        on_change={on_email}
                    />
                    <TextField
                        id="password"
                        label="Password"
                        input_type="password"
                        placeholder="Password"
                        value={(*password).clone()}
                        on_change={on_password}
                    />
                </div>

                if let Some(message) = status.error().map(str::to_string) {
                    <Notice kind={NoticeKind::Error} message={message} />
                }

                <SubmitButton label="Sign Up" loading={status.is_busy()} />

                if let Some(message) = status.success().map(str::to_string) {
                    <Notice kind={NoticeKind::Success} message={message} />
                }
            </form>

            <p class="text-center text-sm text-gray-600">
                {"Already have an account? "}
                <Link<Route> to={Route::Login} classes="font-medium text-blue-600 hover:text-blue-500">
                    {"Log in"}
                </Link<Route>>
            </p>
        </AuthCard>
    }
}
