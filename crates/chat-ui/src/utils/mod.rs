pub mod markdown;
pub mod sanitize;
