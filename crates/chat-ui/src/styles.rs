//! Centralized style constants for consistent theming across the chat components

// Backgrounds
pub const CHAT_BG: &str = "bg-gradient-to-br from-purple-500 via-pink-500 to-blue-500";
pub const PANEL_BG: &str = "bg-white/90 dark:bg-gray-800/90";

// Text colors
pub const PRIMARY_TEXT: &str = "text-gray-800 dark:text-gray-100";
pub const MUTED_TEXT: &str = "text-white/80";
pub const ERROR_TEXT: &str = "text-red-100";

// Message bubbles
pub const BUBBLE_BASE: &str = "w-auto max-w-[90%] p-4 rounded-lg shadow-lg break-words hover:shadow-xl transition-shadow duration-300";
pub const USER_BUBBLE_COLORS: &str = "bg-white/90 text-gray-800 text-right mb-4 inline-block";
pub const ASSISTANT_BUBBLE_COLORS: &str = "bg-blue-600/90 text-gray-200 text-left";
pub const PENDING_BUBBLE_COLORS: &str = "bg-blue-700 text-left";
pub const FAILED_BUBBLE_COLORS: &str = "bg-red-700/90 text-left";

// Controls
pub const PRIMARY_BUTTON: &str = "ml-2 px-4 py-2 bg-purple-600 text-white rounded-md shadow-md hover:bg-purple-800 hover:shadow-lg transition duration-300 disabled:opacity-60 disabled:cursor-not-allowed";
pub const TEXT_INPUT: &str = "flex-grow px-4 py-2 bg-gray-500/50 rounded-lg text-white placeholder-gray-300 shadow-inner focus:outline-none focus:ring-2 focus:ring-blue-300 disabled:cursor-not-allowed";
pub const INPUT_BAR: &str = "flex items-center w-full max-w-2xl p-4 rounded-lg shadow-lg";

// Layout
pub const FLEX_COL: &str = "flex flex-col";
pub const FLEX_CENTER: &str = "flex items-center";
pub const CENTERED_COLUMN: &str = "max-w-2xl w-full";
pub const STANDARD_PADDING: &str = "p-4";

pub fn combine_styles(styles: &[&str]) -> String {
    styles.join(" ")
}
