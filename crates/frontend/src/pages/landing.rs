//! Marketing landing page

use headline_frontend_common::{UserIcon, use_is_authenticated};
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;

/// Navbar entries: label and the id of the section they scroll to
const SECTIONS: &[(&str, &str)] = &[
    ("Home", "home"),
    ("About", "about"),
    ("Services", "features"),
    ("Contact", "contact"),
    ("Pricing", "pricing"),
];

const HIGHLIGHTS: &[(&str, &str)] = &[
    ("🤖", "AI-Driven Insights"),
    ("📈", "Data-Driven Decisions"),
    ("🔍", "Real-Time Updates"),
];

const SERVICES: &[(&str, &str, &str)] = &[
    (
        "📰",
        "AI News Curation",
        "Our AI-driven algorithm selects the most relevant news articles based on your preferences and reading history.",
    ),
    (
        "💬",
        "Chat-Based Interface",
        "Communicate with an AI agent to get news updates, ask questions, and have real-time conversations about current events.",
    ),
    (
        "🔔",
        "Personalized Alerts",
        "Get real-time notifications about breaking news and topics you care about, delivered straight to your device.",
    ),
];

const PLANS: &[(&str, &str, &str)] = &[
    ("Basic", "Free", "Daily headlines and a limited number of agent questions."),
    ("Pro", "$9/month", "Unlimited questions, personalised topics and alerts."),
    ("Team", "$29/month", "Shared briefings for up to ten readers."),
];

/// Smoothly scroll the element with `id` into view. Missing ids are ignored.
fn scroll_to_section(id: &str) {
    let Some(element) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(id))
    else {
        tracing::debug!(section = id, "Section not found");
        return;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

#[function_component(LandingPage)]
pub fn landing_page() -> Html {
    let is_authenticated = use_is_authenticated();
    let get_started = if is_authenticated {
        Route::Chat
    } else {
        Route::Signup
    };

    html! {
        <main class="bg-black min-h-screen">
            <nav class="fixed top-0 w-full flex justify-between items-center px-6 py-4 bg-gradient-to-r from-blue-300 to-purple-400 shadow-lg z-10 rounded-2xl">
                <span class="text-3xl font-bold text-white">{"HeadlineAI"}</span>

                <div class="hidden md:flex justify-center items-center gap-8 flex-grow">
                    { for SECTIONS.iter().map(|&(label, id)| html! {
                        <button
                            key={id}
                            onclick={Callback::from(move |_: MouseEvent| scroll_to_section(id))}
                            class="text-white text-xl font-semibold transition-transform transform hover:scale-105"
                        >
                            {label}
                        </button>
                    }) }
                </div>

                <div class="flex items-center">
                    if is_authenticated {
                        <UserIcon />
                    } else {
                        <Link<Route> to={Route::Login} classes="bg-gradient-to-r from-green-400 to-blue-500 text-white text-lg font-semibold px-6 py-2 rounded-full transition-transform transform hover:scale-105 shadow-lg">
                            {"Login"}
                        </Link<Route>>
                    }
                </div>
            </nav>

            <section id="home" class="min-h-screen flex flex-col justify-center items-center bg-gradient-to-br from-blue-500 to-blue-950 text-center px-4">
                <p class="text-5xl sm:text-6xl md:text-8xl mt-20 bg-gradient-to-r from-blue-300 to-purple-700 bg-clip-text text-transparent font-bold leading-tight">
                    {"HeadlineAI"}
                </p>
                <p class="text-white text-xl sm:text-2xl md:text-3xl mt-2">
                    <span class="text-blue-300">{"AI-Powered"}</span>{" News Application"}
                </p>
                <p class="text-white text-lg sm:text-5xl leading-relaxed mt-10">
                    {"Dear Reader"}<br />{"Meet the Fun Side of AI "}
                    <span class="text-blue-300">{"Shaping Today's News!"}</span>
                </p>
                <div class="flex justify-center mt-20">
                    <Link<Route> to={get_started} classes="bg-blue-600 px-6 sm:px-8 py-3 rounded-lg text-white text-lg sm:text-xl hover:bg-white hover:text-black transition duration-300">
                        {"Get started"}
                    </Link<Route>>
                </div>
            </section>

            <section id="about" class="min-h-screen flex flex-col justify-center items-center text-center text-white px-6 bg-gradient-to-b from-blue-500 to-gray-900">
                <h2 class="text-5xl md:text-6xl font-extrabold tracking-wide">
                    {"About "}<span class="text-blue-300">{"HeadlineAI"}</span>
                </h2>
                <p class="mt-4 text-lg md:text-2xl max-w-3xl leading-relaxed text-gray-300">
                    {"Your personalized AI-powered news hub. Stay ahead with intelligent news updates tailored to your interests."}
                </p>
                <div class="flex flex-col md:flex-row justify-center gap-8 mt-10">
                    { for HIGHLIGHTS.iter().map(|&(icon, label)| html! {
                        <div key={label} class="flex items-center bg-gray-800 p-4 rounded-lg shadow-lg">
                            <span class="text-4xl text-blue-300 mr-4">{icon}</span>
                            <p class="text-lg">{label}</p>
                        </div>
                    }) }
                </div>
            </section>

            <section id="features" class="min-h-screen flex flex-col justify-center items-center text-center text-white px-6 py-16 bg-gradient-to-b from-gray-900 to-black">
                <h2 class="text-5xl font-extrabold text-transparent bg-clip-text bg-gradient-to-r from-blue-500 to-purple-600">
                    {"Services"}
                </h2>
                <div class="mt-12 grid grid-cols-1 md:grid-cols-3 gap-10 px-6">
                    { for SERVICES.iter().map(|&(icon, title, body)| html! {
                        <div key={title} class="bg-gray-800 p-6 rounded-lg shadow-lg">
                            <div class="text-4xl text-blue-500 mb-4">{icon}</div>
                            <h3 class="text-2xl font-bold mb-2">{title}</h3>
                            <p class="text-gray-300">{body}</p>
                        </div>
                    }) }
                </div>
            </section>

            <section id="contact" class="min-h-[60vh] flex flex-col justify-center items-center text-center text-white px-6 bg-black">
                <h2 class="text-5xl font-extrabold">{"Contact"}</h2>
                <p class="mt-4 text-lg text-gray-400 max-w-2xl">
                    {"Questions or feedback? Write to "}
                    <a href="mailto:team@headlineai.app" class="text-blue-300 underline">{"team@headlineai.app"}</a>
                </p>
            </section>

            <section id="pricing" class="min-h-screen flex flex-col justify-center items-center text-center text-white px-6 py-16 bg-gradient-to-b from-black to-blue-950">
                <h2 class="text-5xl font-extrabold">{"Pricing"}</h2>
                <div class="mt-12 grid grid-cols-1 md:grid-cols-3 gap-10">
                    { for PLANS.iter().map(|&(name, price, body)| html! {
                        <div key={name} class="bg-gray-800 p-8 rounded-2xl shadow-lg">
                            <h3 class="text-2xl font-bold">{name}</h3>
                            <p class="text-4xl text-blue-300 my-4">{price}</p>
                            <p class="text-gray-300">{body}</p>
                        </div>
                    }) }
                </div>
            </section>

            <footer class="py-6 text-center text-gray-500 bg-black">
                {"© HeadlineAI"}
            </footer>
        </main>
    }
}
