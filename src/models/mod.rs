pub mod health;
pub mod notification;
pub mod pushy;
pub mod response;
pub mod retry;
