use headline_frontend_common::{UserIcon, use_is_authenticated};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;

#[function_component(Header)]
pub fn header() -> Html {
    let is_authenticated = use_is_authenticated();

    html! {
        <header class="flex bg-black w-full h-16 items-center justify-between px-6">
            <Link<Route> to={Route::Chat} classes="text-2xl font-bold bg-gradient-to-r from-blue-300 to-purple-500 bg-clip-text text-transparent">
                {"HeadlineAI"}
            </Link<Route>>
            if is_authenticated {
                <UserIcon />
            } else {
                <Link<Route> to={Route::Login} classes="bg-gradient-to-r from-green-400 to-blue-500 text-white text-lg font-semibold px-6 py-2 rounded-full shadow-lg">
                    {"Login"}
                </Link<Route>>
            }
        </header>
    }
}
