pub mod agent;
pub mod auth;

pub use agent::AgentService;
pub use auth::AuthApiService;
