pub mod messages;
pub mod pager;
pub mod prompt;
pub mod render;
pub mod shell;
