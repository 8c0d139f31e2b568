mod chat_container;
mod chat_input;
mod message;
mod message_list;
mod search_bar;
mod typing_indicator;

pub use chat_container::ChatContainer;
pub use chat_input::ChatInput;
pub use message::Message;
pub use message_list::MessageList;
pub use search_bar::SearchBar;
pub use typing_indicator::TypingIndicator;
