pub mod duration;
pub mod mode;
pub mod station;
pub mod time;
pub mod users;
