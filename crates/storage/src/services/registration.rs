use std::collections::HashSet;

use chrono::{DateTime, Utc};
use rand::Rng;

use crate::dto::festival_event::FestivalEventDetail;
use crate::dto::registration::{CreateRegistrationRequest, ParticipantEntry};
use crate::error::{Result, StorageError};
use crate::models::{NewParticipant, NewSchool};
use crate::repository::registration::RegistrationStore;
use crate::validation::FieldErrors;

const SCHOOL_ID_PREFIX: &str = "SCH";
const SCHOOL_ID_RANDOM_LEN: usize = 5;
const SCHOOL_ID_ATTEMPTS: usize = 5;
const BASE36: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Builds a school code from the current time in base36 followed by a
/// random base36 suffix, e.g. `SCHM1X2Y3Z4K7Q2P`.
pub fn generate_school_id<R: Rng>(now: DateTime<Utc>, rng: &mut R) -> String {
    let millis = u64::try_from(now.timestamp_millis()).unwrap_or(0);

    let mut id = String::from(SCHOOL_ID_PREFIX);
    id.push_str(&to_base36(millis));
    for _ in 0..SCHOOL_ID_RANDOM_LEN {
        id.push(BASE36[rng.gen_range(0..BASE36.len())] as char);
    }
    id
}

fn to_base36(mut value: u64) -> String {
    if value == 0 {
        return "0".to_string();
    }

    let mut digits = Vec::new();
    while value > 0 {
        digits.push(BASE36[(value % 36) as usize]);
        value /= 36;
    }
    digits.reverse();

    String::from_utf8(digits).unwrap_or_default()
}

/// Draws school codes until one is not yet taken in the store.
pub async fn allocate_school_id(store: &dyn RegistrationStore) -> Result<String> {
    for _ in 0..SCHOOL_ID_ATTEMPTS {
        let candidate = generate_school_id(Utc::now(), &mut rand::thread_rng());
        if !store.school_exists(&candidate).await? {
            return Ok(candidate);
        }
    }

    Err(StorageError::ConstraintViolation(
        "Could not allocate a unique school id".to_string(),
    ))
}

/// Checks participants against the categories of the selected event:
/// the category must be linked to the event, the slot must lie within the
/// category's cap and be used once, and the class must fit the category.
pub fn check_participants(
    event: &FestivalEventDetail,
    participants: &[ParticipantEntry],
) -> FieldErrors {
    let mut errors = FieldErrors::new();
    let mut taken = HashSet::new();

    for (index, p) in participants.iter().enumerate() {
        let field = |name: &str| format!("participants[{}].{}", index, name);

        let Some(category) = event.category(p.category_id) else {
            errors.add(
                field("category_id"),
                format!("Category {} is not offered for {}", p.category_id, event.name),
            );
            continue;
        };

        if p.slot_number < 1 || p.slot_number > category.max_participants {
            errors.add(
                field("slot_number"),
                format!(
                    "Slot number must be between 1 and {} for {}",
                    category.max_participants, category.name
                ),
            );
        } else if !taken.insert((p.category_id, p.slot_number)) {
            errors.add(
                field("slot_number"),
                format!("Slot {} in {} is already filled", p.slot_number, category.name),
            );
        }

        if !category.accepts_class(p.class) {
            errors.add(
                field("class"),
                format!(
                    "Class must be between {} and {} for {}",
                    category.min_class, category.max_class, category.name
                ),
            );
        }
    }

    errors
}

pub fn new_school(school_id: &str, req: &CreateRegistrationRequest) -> NewSchool {
    NewSchool {
        school_id: school_id.to_string(),
        name: req.school.name.trim().to_string(),
        address: req.school.address.trim().to_string(),
        coordinator_name: req.coordinator.name.trim().to_string(),
        coordinator_email: req.coordinator.email.trim().to_string(),
        coordinator_phone: req.coordinator.phone.clone(),
    }
}

pub fn new_participants(school_id: &str, req: &CreateRegistrationRequest) -> Vec<NewParticipant> {
    req.participants
        .iter()
        .map(|p| NewParticipant {
            school_id: school_id.to_string(),
            event_id: req.event_id,
            category_id: p.category_id,
            name: p.name.trim().to_string(),
            class: p.class,
            slot_number: p.slot_number,
        })
        .collect()
}
