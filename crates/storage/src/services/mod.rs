pub mod registration;
pub mod wizard;
