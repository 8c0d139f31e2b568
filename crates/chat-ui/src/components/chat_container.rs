use crate::components::{ChatInput, MessageList, SearchBar};
use crate::styles::{CHAT_BG, FLEX_COL};
use crate::types::Conversation;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct ChatContainerProps {
    pub conversation: Conversation,
    pub on_send: Callback<String>,
    #[prop_or_default]
    pub input_disabled: bool,
    #[prop_or_default]
    pub class: Classes,
}

/// Search bar, filtered history and the query input
#[function_component(ChatContainer)]
pub fn chat_container(props: &ChatContainerProps) -> Html {
    let ChatContainerProps {
        conversation,
        on_send,
        input_disabled,
        class,
    } = props;

    let search = use_state(String::new);

    let on_search = {
        let search = search.clone();
        Callback::from(move |value: String| search.set(value))
    };

    let visible: Vec<_> = conversation.search(&search).into_iter().cloned().collect();
    let empty_text = if conversation.is_empty() {
        "Ask about today's headlines."
    } else {
        "No messages match your search."
    };

    html! {
        <div class={classes!(FLEX_COL, "min-h-0", CHAT_BG, class.clone())}>
            <SearchBar value={AttrValue::from((*search).clone())} on_change={on_search} />
            <MessageList exchanges={visible} empty_text={empty_text} />
            <ChatInput
                on_send={on_send.clone()}
                busy={conversation.is_busy()}
                disabled={*input_disabled}
            />
        </div>
    }
}
