use crate::styles::{INPUT_BAR, PANEL_BG, PRIMARY_BUTTON, TEXT_INPUT, combine_styles};
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SearchBarProps {
    pub value: AttrValue,
    pub on_change: Callback<String>,
}

/// Filters the history as the user types
#[function_component(SearchBar)]
pub fn search_bar(props: &SearchBarProps) -> Html {
    let oninput = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input = e.target_unchecked_into::<HtmlInputElement>();
            on_change.emit(input.value());
        })
    };

    let clear = {
        let on_change = props.on_change.clone();
        Callback::from(move |_: MouseEvent| on_change.emit(String::new()))
    };

    html! {
        <div class="w-full px-4 pt-4 flex justify-center">
            <div class={combine_styles(&[INPUT_BAR, PANEL_BG])}>
                <input
                    type="search"
                    placeholder="Search messages..."
                    aria-label="Search messages"
                    class={TEXT_INPUT}
                    value={props.value.clone()}
                    {oninput}
                />
                if !props.value.is_empty() {
                    <button class={PRIMARY_BUTTON} onclick={clear}>{"Clear"}</button>
                }
            </div>
        </div>
    }
}
