mod notice;
mod spinner;
mod user_icon;

pub use notice::{Notice, NoticeKind};
pub use spinner::{ButtonSpinner, LoadingSpinner as Spinner};
pub use user_icon::UserIcon;
