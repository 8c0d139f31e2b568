pub mod components;
pub mod styles;
pub mod types;
pub mod utils;

// Re-export main components
pub use components::{ChatContainer, ChatInput, Message, MessageList, SearchBar, TypingIndicator};
pub use types::{Conversation, Exchange, ExchangeId, ExchangeState, FAILED_REPLY_MESSAGE};
pub use utils::markdown::{format_reply, render_reply};
pub use utils::sanitize::sanitize_html;
