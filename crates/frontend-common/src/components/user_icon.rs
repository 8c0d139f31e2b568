use yew::prelude::*;

use crate::session::{use_logout, use_session};

/// Avatar with the display name and a logout action
#[function_component(UserIcon)]
pub fn user_icon() -> Html {
    let session = use_session();
    let logout = use_logout();
    let open = use_state(|| false);

    let name = session.display_name().unwrap_or_default().to_string();
    let initial = name
        .chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_default();
    let email = session
        .session
        .as_ref()
        .and_then(|s| s.email.clone())
        .unwrap_or_default();

    let toggle = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(!*open))
    };

    let on_logout = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| {
            open.set(false);
            logout.emit(());
        })
    };

    html! {
        <div class="relative">
            <button
                class="w-10 h-10 rounded-full bg-gradient-to-r from-green-400 to-blue-500 text-white font-bold shadow-lg"
                title={name.clone()}
                aria-label="Account menu"
                onclick={toggle}
            >
                {initial}
            </button>
            if *open {
                <div class="absolute right-0 mt-2 w-56 rounded-lg bg-white shadow-xl p-4 z-20 text-gray-800">
                    <p class="font-semibold">{name}</p>
                    if !email.is_empty() {
                        <p class="text-sm text-gray-500 truncate">{email}</p>
                    }
                    <button
                        class="mt-3 w-full px-4 py-2 bg-red-500 hover:bg-red-600 text-white rounded-md transition-colors"
                        onclick={on_logout}
                    >
                        {"Log out"}
                    </button>
                </div>
            }
        </div>
    }
}
