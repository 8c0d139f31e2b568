//! Global session context and provider
//!
//! The provider runs the stored-session check once when it mounts and keeps
//! the result in a reducer, so every page reads the same answer instead of
//! re-reading `localStorage` itself. Storage writes happen in the services;
//! the reducer only mirrors their outcome.

use std::rc::Rc;

use headline_core::{BootstrapOutcome, Session, SessionError};
use headline_http::flows::SESSION_EXPIRED_MESSAGE;
use tracing::{error, info};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::AuthApiService;

/// Session state seen by the UI
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionState {
    pub session: Option<Session>,
    /// The on-mount check has not finished
    pub is_loading: bool,
    /// A token refresh started from the UI is in flight
    pub is_refreshing: bool,
    /// Why the user was signed out, if it was not their choice
    pub notice: Option<String>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            session: None,
            is_loading: true,
            is_refreshing: false,
            notice: None,
        }
    }
}

impl SessionState {
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        !self.is_loading && self.session.is_some()
    }

    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.session.as_ref().map(Session::display_name)
    }
}

pub enum SessionAction {
    Bootstrapped(BootstrapOutcome),
    RefreshStarted,
    /// Storage contents after a refresh attempt
    Refreshed(Option<Session>),
    LoggedIn(Session),
    LoggedOut { notice: Option<String> },
}

pub type SessionContext = UseReducerHandle<SessionState>;

impl Reducible for SessionState {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            SessionAction::Bootstrapped(outcome) => {
                let notice = match &outcome {
                    BootstrapOutcome::Cleared(SessionError::Storage { .. })
                    | BootstrapOutcome::LoggedOut
                    | BootstrapOutcome::LoggedIn(_)
                    | BootstrapOutcome::Refreshed(_) => None,
                    BootstrapOutcome::Cleared(_) => Some(SESSION_EXPIRED_MESSAGE.to_string()),
                };
                Rc::new(Self {
                    session: outcome.session().cloned(),
                    is_loading: false,
                    is_refreshing: false,
                    notice,
                })
            }
            SessionAction::RefreshStarted => Rc::new(Self {
                is_refreshing: true,
                ..(*self).clone()
            }),
            SessionAction::Refreshed(session) => {
                let notice = session
                    .is_none()
                    .then(|| SESSION_EXPIRED_MESSAGE.to_string());
                Rc::new(Self {
                    session,
                    is_loading: false,
                    is_refreshing: false,
                    notice,
                })
            }
            SessionAction::LoggedIn(session) => Rc::new(Self {
                session: Some(session),
                is_loading: false,
                is_refreshing: false,
                notice: None,
            }),
            SessionAction::LoggedOut { notice } => Rc::new(Self {
                session: None,
                is_loading: false,
                is_refreshing: false,
                notice,
            }),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    pub children: Children,
}

#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let state = use_reducer(SessionState::default);

    // One check per page load
    {
        let state = state.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let outcome = AuthApiService::new().restore_session().await;
                state.dispatch(SessionAction::Bootstrapped(outcome));
            });
        });
    }

    html! {
        <ContextProvider<SessionContext> context={state}>
            {props.children.clone()}
        </ContextProvider<SessionContext>>
    }
}

/// Hook to use the session context
#[hook]
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>()
        .expect("SessionContext not found. Wrap the app in SessionProvider")
}

#[hook]
pub fn use_is_authenticated() -> bool {
    use_session().is_authenticated()
}

/// Callback that clears the stored session and signs the user out
#[hook]
pub fn use_logout() -> Callback<()> {
    let session = use_session();
    Callback::from(move |()| {
        if let Err(err) = AuthApiService::new().logout() {
            error!(error = %err, "Failed to clear stored session");
        }
        info!("Logged out");
        session.dispatch(SessionAction::LoggedOut { notice: None });
    })
}
