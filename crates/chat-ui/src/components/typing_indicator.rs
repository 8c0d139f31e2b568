use crate::styles::{BUBBLE_BASE, FLEX_CENTER, PENDING_BUBBLE_COLORS};
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct TypingIndicatorProps {
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(TypingIndicator)]
pub fn typing_indicator(props: &TypingIndicatorProps) -> Html {
    let TypingIndicatorProps { class } = props;

    html! {
        <div class={classes!(BUBBLE_BASE, PENDING_BUBBLE_COLORS, FLEX_CENTER, "gap-2", class.clone())}>
            <div class="flex gap-1">
                <span class="w-2 h-2 rounded-full bg-white animate-pulse" style="animation-delay: -0.32s;"></span>
                <span class="w-2 h-2 rounded-full bg-white animate-pulse" style="animation-delay: -0.16s;"></span>
                <span class="w-2 h-2 rounded-full bg-white animate-pulse"></span>
            </div>
            <span class="animate-pulse text-white">{"AI is generating..."}</span>
        </div>
    }
}
