pub mod content;
pub mod festival_event;
pub mod participant;
pub mod registration;
pub mod school;
