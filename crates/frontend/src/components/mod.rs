mod auth_card;
mod header;

pub use auth_card::{AuthCard, SubmitButton, TextField};
pub use header::Header;
