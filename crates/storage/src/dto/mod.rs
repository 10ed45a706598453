pub mod contact;
pub mod festival_event;
pub mod registration;
pub mod user;
