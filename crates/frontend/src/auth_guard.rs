//! Session guards for routes

use headline_frontend_common::{SessionState, Spinner, use_session};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;

#[derive(Properties, PartialEq)]
pub struct GuardProps {
    pub children: Children,
}

/// What a protected route shows for a given session state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Access {
    Checking,
    Granted,
    ToLogin,
}

fn protected_access(state: &SessionState) -> Access {
    if state.is_loading {
        Access::Checking
    } else if state.is_authenticated() {
        Access::Granted
    } else {
        Access::ToLogin
    }
}

/// Renders its children only with a usable session; otherwise sends the
/// user to the login page
#[function_component(RequireSession)]
pub fn require_session(props: &GuardProps) -> Html {
    let session = use_session();

    match protected_access(&session) {
        Access::Checking => html! {
            <div class="flex flex-col items-center justify-center min-h-screen bg-gradient-to-br from-purple-500 via-pink-500 to-blue-500">
                <Spinner text={AttrValue::from("Checking your session...")} />
            </div>
        },
        Access::Granted => html! { <>{ props.children.clone() }</> },
        Access::ToLogin => html! { <Redirect<Route> to={Route::Login} /> },
    }
}

/// Login and signup are skipped when the user already has a session
#[function_component(RedirectIfAuthenticated)]
pub fn redirect_if_authenticated(props: &GuardProps) -> Html {
    let session = use_session();

    if session.is_authenticated() {
        return html! { <Redirect<Route> to={Route::Chat} /> };
    }

    html! { <>{ props.children.clone() }</> }
}
