use gloo::timers::callback::Timeout;
use headline_frontend_common::{
    AppConfig, AuthApiService, Notice, NoticeKind, SessionAction, use_session,
};
use tracing::{info, warn};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::components::{AuthCard, SubmitButton, TextField};
use crate::form_status::FormStatus;

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let session = use_session();
    let navigator = use_navigator();

    let email = use_state(String::new);
    let password = use_state(String::new);
    let status = use_state(FormStatus::default);

    let on_email = {
        let email = email.clone();
        Callback::from(move |value: String| email.set(value))
    };
    let on_password = {
        let password = password.clone();
        Callback::from(move |value: String| password.set(value))
    };

    let onsubmit = {
        let email = email.clone();
        let password = password.clone();
        let status = status.clone();
        let session = session.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if !status.accepts_submit() {
                return;
            }

            let email = (*email).clone();
            let password = (*password).clone();
            let status = status.clone();
            let session = session.clone();
            let navigator = navigator.clone();

            status.set(FormStatus::Submitting);

            spawn_local(async move {
                match AuthApiService::new().login(&email, &password).await {
                    Ok(signed_in) => {
                        info!(email = %email, "Login successful");
                        status.set(FormStatus::Redirecting(
                            "Login successful! Redirecting...".to_string(),
                        ));
                        // The guard would leave the page as soon as the context
                        // flips, so the session is published with the redirect
                        Timeout::new(AppConfig::LOGIN_REDIRECT_DELAY_MS, move || {
                            session.dispatch(SessionAction::LoggedIn(signed_in));
                            if let Some(navigator) = navigator {
                                navigator.push(&Route::Chat);
                            }
                        })
                        .forget();
                    }
                    Err(err) => {
                        warn!(error = %err, "Login failed");
                        status.set(FormStatus::Failed(err.user_message()));
                    }
                }
            });
        })
    };

    let error_message = status
        .error()
        .map(str::to_string)
        .or_else(|| session.notice.clone());
    let success_message = status.success().map(str::to_string);

    html! {
        <AuthCard title="Welcome Back!">
            <form class="mt-8 space-y-6" {onsubmit}>
                <div class="space-y-4">
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

                if let Some(message) = error_message {
                    <Notice kind={NoticeKind::Error} message={message} />
                }

                <SubmitButton label="Log In" loading={status.is_busy()} />

                if let Some(message) = success_message {
                    <Notice kind={NoticeKind::Success} message={message} />
                }
            </form>

            <p class="text-center text-sm text-gray-600">
                {"Don't have an account? "}
                <Link<Route> to={Route::Signup} classes="font-medium text-blue-600 hover:text-blue-500">
                    {"Sign up"}
                </Link<Route>>
            </p>
        </AuthCard>
    }
}
