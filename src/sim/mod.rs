pub mod daily;
pub mod event;
pub mod session;
