//! Conversation history shown in the chat view
//!
//! Each user query becomes an [`Exchange`] the moment it is sent. The reply
//! (or failure) is attached later, addressed by the exchange id, so a slow
//! response can never land on a newer query.

use serde::{Deserialize, Serialize};

/// Shown in place of a reply when the agent call fails
pub const FAILED_REPLY_MESSAGE: &str = "Sorry, the assistant could not answer. Please try again.";

pub type ExchangeId = usize;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExchangeState {
    /// Waiting on the agent
    Pending,
    /// Raw reply text as returned by the agent (formatted at render time)
    Answered(String),
    Failed(String),
}

/// One query and its reply
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exchange {
    pub id: ExchangeId,
    pub query: String,
    pub state: ExchangeState,
}

impl Exchange {
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        matches!(self.state, ExchangeState::Pending)
    }

    #[must_use]
    pub fn reply(&self) -> Option<&str> {
        match &self.state {
            ExchangeState::Answered(reply) => Some(reply),
            ExchangeState::Pending | ExchangeState::Failed(_) => None,
        }
    }

    /// Case-insensitive substring match over the query and the reply
    #[must_use]
    pub fn matches(&self, needle: &str) -> bool {
        let needle = needle.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        self.query.to_lowercase().contains(&needle)
            || self
                .reply()
                .is_some_and(|reply| reply.to_lowercase().contains(&needle))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversation {
    exchanges: Vec<Exchange>,
    next_id: ExchangeId,
}

impl Conversation {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a pending exchange. Blank queries are ignored.
    pub fn push_query(&mut self, query: &str) -> Option<ExchangeId> {
        if query.trim().is_empty() {
            return None;
        }
        let id = self.next_id;
        self.next_id += 1;
        self.exchanges.push(Exchange {
            id,
            query: query.to_string(),
            state: ExchangeState::Pending,
        });
        Some(id)
    }

    /// Attach the reply to a pending exchange. Returns false if the id is
    /// unknown or the exchange already settled.
    pub fn complete(&mut self, id: ExchangeId, reply: impl Into<String>) -> bool {
        self.settle(id, ExchangeState::Answered(reply.into()))
    }

    pub fn fail(&mut self, id: ExchangeId, message: impl Into<String>) -> bool {
        self.settle(id, ExchangeState::Failed(message.into()))
    }

    fn settle(&mut self, id: ExchangeId, state: ExchangeState) -> bool {
        match self
            .exchanges
            .iter_mut()
            .find(|exchange| exchange.id == id && exchange.is_pending())
        {
            Some(exchange) => {
                exchange.state = state;
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn exchanges(&self) -> &[Exchange] {
        &self.exchanges
    }

    /// Exchanges matching `needle`; all of them when it is blank
    #[must_use]
    pub fn search(&self, needle: &str) -> Vec<&Exchange> {
        self.exchanges
            .iter()
            .filter(|exchange| exchange.matches(needle))
            .collect()
    }

    /// A query is waiting on the agent
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.exchanges.iter().any(Exchange::is_pending)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.exchanges.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.exchanges.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_query_appends_pending_exchange() {
        let mut conversation = Conversation::new();
        let id = conversation.push_query("What happened today?").unwrap();

        assert_eq!(conversation.len(), 1);
        let exchange = &conversation.exchanges()[0];
        assert_eq!(exchange.id, id);
        assert_eq!(exchange.query, "What happened today?");
        assert!(exchange.is_pending());
        assert!(conversation.is_busy());
    }

    #[test]
    fn test_blank_query_is_ignored() {
        let mut conversation = Conversation::new();
        assert_eq!(conversation.push_query("   "), None);
        assert_eq!(conversation.push_query(""), None);
        assert!(conversation.is_empty());
    }

    #[test]
    fn test_complete_targets_the_right_exchange() {
        let mut conversation = Conversation::new();
        let first = conversation.push_query("first").unwrap();
        let second = conversation.push_query("second").unwrap();

        assert!(conversation.complete(first, "one"));
        assert_eq!(conversation.exchanges()[0].reply(), Some("one"));
        assert!(conversation.exchanges()[1].is_pending());

        assert!(conversation.fail(second, FAILED_REPLY_MESSAGE));
        assert_eq!(
            conversation.exchanges()[1].state,
            ExchangeState::Failed(FAILED_REPLY_MESSAGE.to_string())
        );
        assert!(!conversation.is_busy());
    }

    #[test]
    fn test_settled_exchange_is_not_overwritten() {
        let mut conversation = Conversation::new();
        let id = conversation.push_query("query").unwrap();

        assert!(conversation.complete(id, "reply"));
        assert!(!conversation.fail(id, "late failure"));
        assert!(!conversation.complete(42, "unknown"));
        assert_eq!(conversation.exchanges()[0].reply(), Some("reply"));
    }

    #[test]
    fn test_search_is_case_insensitive_over_query_and_reply() {
        let mut conversation = Conversation::new();
        let markets = conversation.push_query("How are the Markets?").unwrap();
        let weather = conversation.push_query("weather in Oslo").unwrap();
        conversation.push_query("pending question").unwrap();
        conversation.complete(markets, "Stocks closed higher");
        conversation.complete(weather, "Rain with MARKET stalls closed");

        let hits: Vec<_> = conversation.search("market").iter().map(|e| e.id).collect();
        assert_eq!(hits, vec![markets, weather]);

        let hits: Vec<_> = conversation.search("STOCKS").iter().map(|e| e.id).collect();
        assert_eq!(hits, vec![markets]);

        assert!(conversation.search("nothing like this").is_empty());
    }

    #[test]
    fn test_blank_search_returns_everything() {
        let mut conversation = Conversation::new();
        conversation.push_query("one").unwrap();
        conversation.push_query("two").unwrap();

        assert_eq!(conversation.search("").len(), 2);
        assert_eq!(conversation.search("  ").len(), 2);
    }

    #[test]
    fn test_failure_text_is_not_searched() {
        let mut conversation = Conversation::new();
        let id = conversation.push_query("query").unwrap();
        conversation.fail(id, "assistant could not answer");

        assert!(conversation.search("assistant").is_empty());
    }

    #[test]
    fn test_conversation_serializes() {
        let mut conversation = Conversation::new();
        let id = conversation.push_query("hello").unwrap();
        conversation.complete(id, "<b>hi</b>");

        let json = serde_json::to_value(&conversation).unwrap();
        assert_eq!(json["exchanges"][0]["query"], "hello");
        assert_eq!(json["exchanges"][0]["state"]["Answered"], "<b>hi</b>");
    }
}
