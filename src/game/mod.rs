pub mod day;
pub mod format;
pub mod session;
pub mod target;
pub mod validate;
