use headline_frontend_common::SessionProvider;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::auth_guard::{RedirectIfAuthenticated, RequireSession};
use crate::pages::{ChatPage, LandingPage, LoginPage, SignupPage};

#[derive(Clone, Debug, PartialEq, Eq, Routable)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/signup")]
    Signup,
    #[at("/chat")]
    Chat,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <LandingPage /> },
        Route::Login => html! {
            <RedirectIfAuthenticated>
                <LoginPage />
            </RedirectIfAuthenticated>
        },
        Route::Signup => html! {
            <RedirectIfAuthenticated>
                <SignupPage />
            </RedirectIfAuthenticated>
        },
        Route::Chat => html! {
            <RequireSession>
                <ChatPage />
            </RequireSession>
        },
        Route::NotFound => html! { <Redirect<Route> to={Route::Home} /> },
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <SessionProvider>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </SessionProvider>
    }
}
