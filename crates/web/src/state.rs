use std::sync::Arc;

use storage::{ContentStore, RegistrationStore};

use crate::mail::Mailer;

/// Shared handles available to every handler
#[derive(Clone)]
pub struct AppState {
    pub registrations: Arc<dyn RegistrationStore>,
    pub content: Arc<ContentStore>,
    pub mailer: Arc<dyn Mailer>,
}

impl AppState {
    pub fn new(
        registrations: Arc<dyn RegistrationStore>,
        content: Arc<ContentStore>,
        mailer: Arc<dyn Mailer>,
    ) -> Self {
        Self {
            registrations,
            content,
            mailer,
        }
    }
}
