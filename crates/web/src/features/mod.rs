pub mod contact;
pub mod content;
pub mod pages;
pub mod registration;
pub mod users;
