//! Shared layout for the login and signup forms

use headline_frontend_common::ButtonSpinner;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AuthCardProps {
    pub title: AttrValue,
    pub children: Children,
}

#[function_component(AuthCard)]
pub fn auth_card(props: &AuthCardProps) -> Html {
    html! {
        <div class="flex min-h-screen items-center justify-center bg-gradient-to-br from-purple-500 via-pink-500 to-blue-500 px-4">
            <div class="w-full max-w-lg p-10 space-y-8 bg-white rounded-3xl shadow-2xl ring-4 ring-blue-500/50">
                <h2 class="mt-6 text-center text-4xl font-bold text-gray-900 tracking-tight">
                    {props.title.clone()}
                </h2>
                {props.children.clone()}
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TextFieldProps {
    pub id: AttrValue,
    pub label: AttrValue,
    #[prop_or(AttrValue::Static("text"))]
    pub input_type: AttrValue,
    pub placeholder: AttrValue,
    pub value: AttrValue,
    pub on_change: Callback<String>,
}

/// Required input; the label is for screen readers only
#[function_component(TextField)]
pub fn text_field(props: &TextFieldProps) -> Html {
    let oninput = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            on_change.emit(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };

    html! {
        <div class="relative">
            <label for={props.id.clone()} class="sr-only">{props.label.clone()}</label>
            <input
                id={props.id.clone()}
                name={props.id.clone()}
                type={props.input_type.clone()}
                required=true
                value={props.value.clone()}
                placeholder={props.placeholder.clone()}
                class="appearance-none relative block w-full px-5 py-4 border border-gray-300 text-gray-900 placeholder-gray-500 rounded-2xl shadow-lg focus:outline-none focus:ring-4 focus:ring-blue-500"
                {oninput}
            />
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SubmitButtonProps {
    pub label: AttrValue,
    pub loading: bool,
}

#[function_component(SubmitButton)]
pub fn submit_button(props: &SubmitButtonProps) -> Html {
    let colors = if props.loading {
        "bg-gray-400"
    } else {
        "bg-gradient-to-r from-blue-500 to-purple-600 hover:from-purple-600 hover:to-pink-600"
    };

    html! {
        <button
            type="submit"
            disabled={props.loading}
            class={classes!("w-full", "flex", "justify-center", "py-3", "px-6", "text-sm", "font-medium", "rounded-full", "text-white", "shadow-xl", colors)}
        >
            if props.loading {
                <ButtonSpinner />
            } else {
                {props.label.clone()}
            }
        </button>
    }
}
