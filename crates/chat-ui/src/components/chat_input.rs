use crate::styles::{INPUT_BAR, PANEL_BG, PRIMARY_BUTTON, TEXT_INPUT, combine_styles};
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ChatInputProps {
    pub on_send: Callback<String>,
    /// A query is in flight
    #[prop_or_default]
    pub busy: bool,
    /// No session; the input is read-only
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or(AttrValue::Static("Enter Your Query..."))]
    pub placeholder: AttrValue,
}

#[function_component(ChatInput)]
pub fn chat_input(props: &ChatInputProps) -> Html {
    let input_value = use_state(String::new);

    let handle_input = {
        let input_value = input_value.clone();
        Callback::from(move |e: InputEvent| {
            let input = e.target_unchecked_into::<HtmlInputElement>();
            input_value.set(input.value());
        })
    };

    let send_message = {
        let input_value = input_value.clone();
        let on_send = props.on_send.clone();
        let blocked = props.busy || props.disabled;
        Callback::from(move |()| {
            let text = (*input_value).clone();
            if blocked || text.trim().is_empty() {
                return;
            }
            on_send.emit(text);
            input_value.set(String::new());
        })
    };

    let handle_keydown = {
        let send_message = send_message.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                e.prevent_default();
                send_message.emit(());
            }
        })
    };

    let handle_click = {
        let send_message = send_message.clone();
        Callback::from(move |_: MouseEvent| send_message.emit(()))
    };

    html! {
        <div class="w-full fixed bottom-0 left-0 p-4 flex justify-center shadow-2xl backdrop-blur-sm">
            <div class={combine_styles(&[INPUT_BAR, PANEL_BG])}>
                <input
                    type="text"
                    class={TEXT_INPUT}
                    placeholder={props.placeholder.clone()}
                    value={(*input_value).clone()}
                    oninput={handle_input}
                    onkeydown={handle_keydown}
                    disabled={props.disabled}
                />
                <button
                    class={PRIMARY_BUTTON}
                    onclick={handle_click}
                    disabled={props.busy || props.disabled}
                >
                    {if props.busy { "Sending..." } else { "Send" }}
                </button>
            </div>
        </div>
    }
}
