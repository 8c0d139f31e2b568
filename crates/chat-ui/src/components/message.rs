use crate::components::TypingIndicator;
use crate::styles::{
    ASSISTANT_BUBBLE_COLORS, BUBBLE_BASE, ERROR_TEXT, FAILED_BUBBLE_COLORS, USER_BUBBLE_COLORS,
};
use crate::types::{Exchange, ExchangeState};
use crate::utils::markdown::render_reply;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct MessageProps {
    pub exchange: Exchange,
    #[prop_or_default]
    pub class: Classes,
}

/// One query bubble followed by the reply, a typing indicator or the failure
#[function_component(Message)]
pub fn message(props: &MessageProps) -> Html {
    let MessageProps { exchange, class } = props;

    html! {
        <div class={classes!("mb-12", "flex", "flex-col", "items-center", class.clone())}>
            <div class={classes!(BUBBLE_BASE, USER_BUBBLE_COLORS)}>
                <strong>{"You:"}</strong>{" "}{&exchange.query}
            </div>

            {match &exchange.state {
                ExchangeState::Pending => html! { <TypingIndicator /> },
                ExchangeState::Answered(reply) => html! {
                    <div class={classes!(BUBBLE_BASE, ASSISTANT_BUBBLE_COLORS, "reply")}>
                        {render_reply(reply)}
                    </div>
                },
                ExchangeState::Failed(reason) => html! {
                    <div class={classes!(BUBBLE_BASE, FAILED_BUBBLE_COLORS, ERROR_TEXT)} role="alert">
                        {reason}
                    </div>
                },
            }}
        </div>
    }
}
