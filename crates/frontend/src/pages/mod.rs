mod chat;
mod landing;
mod login;
mod signup;

pub use chat::ChatPage;
pub use landing::LandingPage;
pub use login::LoginPage;
pub use signup::SignupPage;
