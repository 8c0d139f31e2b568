use crate::components::Message;
use crate::styles::{CENTERED_COLUMN, MUTED_TEXT, STANDARD_PADDING};
use crate::types::Exchange;
use web_sys::Element;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct MessageListProps {
    pub exchanges: Vec<Exchange>,
    /// Shown when `exchanges` is empty
    #[prop_or_else(default_empty_text)]
    pub empty_text: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

fn default_empty_text() -> AttrValue {
    AttrValue::from("Ask about today's headlines.")
}

#[function_component(MessageList)]
pub fn message_list(props: &MessageListProps) -> Html {
    let MessageListProps {
        exchanges,
        empty_text,
        class,
    } = props;

    let container_ref = use_node_ref();

    // Keep the newest exchange in view
    let settled = exchanges.iter().filter(|e| !e.is_pending()).count();
    use_effect_with((exchanges.len(), settled), {
        let container_ref = container_ref.clone();
        move |_| {
            if let Some(element) = container_ref.cast::<Element>() {
                element.set_scroll_top(element.scroll_height());
            }
        }
    });

    html! {
        <div
            ref={container_ref}
            class={classes!("flex-1", "overflow-y-auto", STANDARD_PADDING, "pb-28", "flex", "flex-col", "items-center", class.clone())}
        >
            <div class={CENTERED_COLUMN}>
                if exchanges.is_empty() {
                    <p class={classes!("text-center", "mt-8", MUTED_TEXT)}>{empty_text.clone()}</p>
                }
                {for exchanges.iter().map(|exchange| {
                    html! { <Message key={exchange.id} exchange={exchange.clone()} /> }
                })}
            </div>
        </div>
    }
}
