//! Multi-step registration workflow.
//!
//! The wizard walks through three steps (school, coordinator,
//! participants). Each step's fields must pass validation before the
//! wizard advances, and the participant slots are derived from the
//! selected event's category caps.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;
use validator::Validate;

use crate::dto::festival_event::FestivalEventDetail;
use crate::dto::registration::{
    CoordinatorDetails, CreateRegistrationRequest, ParticipantEntry, ParticipantSelection,
    SchoolDetails,
};
use crate::services::registration::check_participants;
use crate::validation::FieldErrors;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum RegistrationStep {
    School,
    Coordinator,
    Participants,
}

impl RegistrationStep {
    pub fn next(self) -> Option<Self> {
        match self {
            Self::School => Some(Self::Coordinator),
            Self::Coordinator => Some(Self::Participants),
            Self::Participants => None,
        }
    }

    pub fn previous(self) -> Option<Self> {
        match self {
            Self::School => None,
            Self::Coordinator => Some(Self::School),
            Self::Participants => Some(Self::Coordinator),
        }
    }

    /// 1-based position shown to the user
    pub fn number(self) -> u8 {
        match self {
            Self::School => 1,
            Self::Coordinator => 2,
            Self::Participants => 3,
        }
    }
}

/// One participant position within a category of the selected event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ParticipantSlot {
    pub category_id: i32,
    pub slot_number: i16,
    pub name: String,
    pub class: Option<i16>,
}

impl ParticipantSlot {
    fn empty(category_id: i32, slot_number: i16) -> Self {
        Self {
            category_id,
            slot_number,
            name: String::new(),
            class: None,
        }
    }

    pub fn is_blank(&self) -> bool {
        self.name.trim().is_empty() && self.class.is_none()
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WizardError {
    #[error("No event has been selected")]
    NoEventSelected,

    #[error("Slot {slot_number} does not exist in category {category_id}")]
    UnknownSlot { category_id: i32, slot_number: i16 },
}

#[derive(Debug, Clone)]
pub struct RegistrationWizard {
    step: RegistrationStep,
    school: SchoolDetails,
    coordinator: CoordinatorDetails,
    event: Option<FestivalEventDetail>,
    slots: Vec<ParticipantSlot>,
}

impl Default for RegistrationWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistrationWizard {
    pub fn new() -> Self {
        Self {
            step: RegistrationStep::School,
            school: SchoolDetails::default(),
            coordinator: CoordinatorDetails::default(),
            event: None,
            slots: Vec::new(),
        }
    }

    pub fn step(&self) -> RegistrationStep {
        self.step
    }

    pub fn school(&self) -> &SchoolDetails {
        &self.school
    }

    pub fn coordinator(&self) -> &CoordinatorDetails {
        &self.coordinator
    }

    pub fn selected_event(&self) -> Option<&FestivalEventDetail> {
        self.event.as_ref()
    }

    pub fn slots(&self) -> &[ParticipantSlot] {
        &self.slots
    }

    pub fn set_school(&mut self, school: SchoolDetails) {
        self.school = school;
    }

    pub fn set_coordinator(&mut self, coordinator: CoordinatorDetails) {
        self.coordinator = coordinator;
    }

    /// Binds the event for step 3. Choosing a different event, or the same
    /// event with changed categories or caps, discards every slot and lays
    /// out fresh ones, numbered 1..=cap per linked category.
    pub fn select_event(&mut self, event: &FestivalEventDetail) {
        if self.event.as_ref() == Some(event) {
            return;
        }

        self.slots = event
            .categories
            .iter()
            .flat_map(|category| {
                (1..=category.max_participants)
                    .map(move |slot| ParticipantSlot::empty(category.category_id, slot))
            })
            .collect();
        self.event = Some(event.clone());
    }

    pub fn fill_slot(
        &mut self,
        category_id: i32,
        slot_number: i16,
        name: impl Into<String>,
        class: Option<i16>,
    ) -> Result<(), WizardError> {
        if self.event.is_none() {
            return Err(WizardError::NoEventSelected);
        }

        let slot = self
            .slots
            .iter_mut()
            .find(|s| s.category_id == category_id && s.slot_number == slot_number)
            .ok_or(WizardError::UnknownSlot {
                category_id,
                slot_number,
            })?;

        slot.name = name.into();
        slot.class = class;
        Ok(())
    }

    pub fn validate_current_step(&self) -> FieldErrors {
        match self.step {
            RegistrationStep::School => validate_step(&self.school),
            RegistrationStep::Coordinator => validate_step(&self.coordinator),
            RegistrationStep::Participants => self.validate_participants(),
        }
    }

    /// Moves to the next step when the current one is valid. Errors block
    /// the transition and are returned per field.
    pub fn advance(&mut self) -> Result<RegistrationStep, FieldErrors> {
        self.validate_current_step().into_result()?;

        if let Some(next) = self.step.next() {
            self.step = next;
        }
        Ok(self.step)
    }

    pub fn back(&mut self) -> RegistrationStep {
        if let Some(previous) = self.step.previous() {
            self.step = previous;
        }
        self.step
    }

    /// Validates the final step and assembles the submission. Blank slots
    /// are skipped.
    pub fn finish(&self) -> Result<CreateRegistrationRequest, FieldErrors> {
        if self.step != RegistrationStep::Participants {
            let mut errors = FieldErrors::new();
            errors.add(
                "step",
                format!(
                    "Complete step {} before submitting",
                    self.step.number()
                ),
            );
            return Err(errors);
        }

        self.validate_participants().into_result()?;

        let event_id = self.event.as_ref().map(|e| e.event_id).unwrap_or_default();
        Ok(CreateRegistrationRequest {
            school: self.school.clone(),
            coordinator: self.coordinator.clone(),
            event_id,
            participants: self.filled_entries(),
        })
    }

    fn filled_entries(&self) -> Vec<ParticipantEntry> {
        self.filled_slots().map(|(_, entry)| entry).collect()
    }

    /// Filled slots with their position in [`Self::slots`].
    fn filled_slots(&self) -> impl Iterator<Item = (usize, ParticipantEntry)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| !slot.is_blank())
            .map(|(position, slot)| {
                (
                    position,
                    ParticipantEntry {
                        category_id: slot.category_id,
                        slot_number: slot.slot_number,
                        name: slot.name.clone(),
                        class: slot.class.unwrap_or_default(),
                    },
                )
            })
    }

    fn validate_participants(&self) -> FieldErrors {
        let Some(event) = &self.event else {
            let mut errors = FieldErrors::new();
            errors.add("event_id", "Select an event");
            return errors;
        };

        let (positions, participants): (Vec<usize>, Vec<ParticipantEntry>) =
            self.filled_slots().unzip();
        let selection = ParticipantSelection {
            event_id: event.event_id,
            participants,
        };

        // Keys follow positions in `slots`.
        let mut errors = validate_step(&selection);
        errors.merge(check_participants(event, &selection.participants));
        errors.reindex("participants", "slots", &positions)
    }
}

/// Runs a step's field rules.
pub fn validate_step<T: Validate>(step: &T) -> FieldErrors {
    match step.validate() {
        Ok(()) => FieldErrors::new(),
        Err(errors) => FieldErrors::from(&errors),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::festival_event::CategoryAllocation;

    fn event(event_id: i32, max_participants: i16) -> FestivalEventDetail {
        FestivalEventDetail {
            event_id,
            name: format!("Event {}", event_id),
            categories: vec![CategoryAllocation {
                category_id: 10,
                name: "Seniors".to_string(),
                min_class: 6,
                max_class: 12,
                max_participants,
            }],
        }
    }

    fn valid_school() -> SchoolDetails {
        SchoolDetails {
            name: "Greenwood High".to_string(),
            address: "14 Lake View Road, Pune".to_string(),
        }
    }

    fn valid_coordinator() -> CoordinatorDetails {
        CoordinatorDetails {
            name: "Meera Iyer".to_string(),
            email: "meera@greenwood.edu".to_string(),
            phone: "9876543210".to_string(),
        }
    }

    fn at_participants_step() -> RegistrationWizard {
        let mut wizard = RegistrationWizard::new();
        wizard.set_school(valid_school());
        wizard.advance().unwrap();
        wizard.set_coordinator(valid_coordinator());
        wizard.advance().unwrap();
        wizard
    }

    #[test]
    fn test_valid_school_advances() {
        let mut wizard = RegistrationWizard::new();
        wizard.set_school(valid_school());

        assert_eq!(wizard.advance(), Ok(RegistrationStep::Coordinator));
    }

    #[test]
    fn test_invalid_school_blocks_advance() {
        let mut wizard = RegistrationWizard::new();
        wizard.set_school(SchoolDetails {
            name: "Greenwood High".to_string(),
            address: "Pune".to_string(),
        });

        let errors = wizard.advance().unwrap_err();
        assert_eq!(wizard.step(), RegistrationStep::School);
        assert_eq!(
            errors.messages("address"),
            ["Address must be between 10 and 200 characters"]
        );
    }

    #[test]
    fn test_invalid_phone_blocks_coordinator_step() {
        let mut wizard = RegistrationWizard::new();
        wizard.set_school(valid_school());
        wizard.advance().unwrap();

        for phone in ["123", "notaphone"] {
            wizard.set_coordinator(CoordinatorDetails {
                phone: phone.to_string(),
                ..valid_coordinator()
            });
            let errors = wizard.advance().unwrap_err();
            assert!(errors.contains("phone"));
            assert_eq!(wizard.step(), RegistrationStep::Coordinator);
        }
    }

    #[test]
    fn test_back_keeps_entered_data() {
        let mut wizard = at_participants_step();
        assert_eq!(wizard.back(), RegistrationStep::Coordinator);
        assert_eq!(wizard.back(), RegistrationStep::School);
        assert_eq!(wizard.back(), RegistrationStep::School);
        assert_eq!(wizard.school(), &valid_school());
    }

    #[test]
    fn test_select_event_lays_out_slots() {
        let mut wizard = at_participants_step();
        wizard.select_event(&event(1, 4));

        let numbers: Vec<i16> = wizard.slots().iter().map(|s| s.slot_number).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4]);
        assert!(wizard.slots().iter().all(ParticipantSlot::is_blank));
    }

    #[test]
    fn test_reselecting_event_discards_slots() {
        let mut wizard = at_participants_step();
        wizard.select_event(&event(1, 4));
        wizard.fill_slot(10, 1, "Kiran", Some(7)).unwrap();

        wizard.select_event(&event(1, 4));
        assert_eq!(wizard.slots()[0].name, "Kiran");

        wizard.select_event(&event(2, 2));
        assert_eq!(wizard.slots().len(), 2);
        assert!(wizard.slots().iter().all(ParticipantSlot::is_blank));
        assert_eq!(wizard.selected_event().map(|e| e.event_id), Some(2));
    }

    #[test]
    fn test_fill_unknown_slot() {
        let mut wizard = at_participants_step();
        assert_eq!(
            wizard.fill_slot(10, 1, "Kiran", Some(7)),
            Err(WizardError::NoEventSelected)
        );

        wizard.select_event(&event(1, 2));
        assert_eq!(
            wizard.fill_slot(10, 3, "Kiran", Some(7)),
            Err(WizardError::UnknownSlot {
                category_id: 10,
                slot_number: 3
            })
        );
    }

    #[test]
    fn test_finish_requires_a_participant() {
        let mut wizard = at_participants_step();
        let errors = wizard.finish().unwrap_err();
        assert!(errors.contains("event_id"));

        wizard.select_event(&event(1, 2));
        let errors = wizard.finish().unwrap_err();
        assert_eq!(
            errors.messages("participants"),
            ["Add at least one participant"]
        );
    }

    #[test]
    fn test_finish_reports_class_out_of_bounds() {
        let mut wizard = at_participants_step();
        wizard.select_event(&event(1, 2));
        wizard.fill_slot(10, 1, "Kiran", Some(3)).unwrap();

        let errors = wizard.finish().unwrap_err();
        assert_eq!(
            errors.messages("slots[0].class"),
            ["Class must be between 6 and 12 for Seniors"]
        );
    }

    #[test]
    fn test_errors_point_at_the_filled_slot() {
        let mut wizard = at_participants_step();
        wizard.select_event(&event(1, 3));
        wizard.fill_slot(10, 3, "Kiran", Some(3)).unwrap();

        let errors = wizard.finish().unwrap_err();
        assert_eq!(
            errors.details(),
            ["slots[2].class: Class must be between 6 and 12 for Seniors"]
        );
        assert_eq!(wizard.slots()[2].slot_number, 3);
    }

    #[test]
    fn test_changed_caps_regenerate_slots() {
        let mut wizard = at_participants_step();
        wizard.select_event(&event(1, 3));
        wizard.fill_slot(10, 3, "Kiran", Some(7)).unwrap();

        wizard.select_event(&event(1, 2));
        assert_eq!(wizard.slots().len(), 2);
        assert!(wizard.slots().iter().all(ParticipantSlot::is_blank));
    }

    #[test]
    fn test_finish_builds_request_from_filled_slots() {
        let mut wizard = at_participants_step();
        wizard.select_event(&event(1, 3));
        wizard.fill_slot(10, 1, "Kiran Das", Some(7)).unwrap();
        wizard.fill_slot(10, 3, "Leela Nair", Some(9)).unwrap();

        let request = wizard.finish().unwrap();
        assert_eq!(request.event_id, 1);
        assert_eq!(request.school, valid_school());
        let slots: Vec<i16> = request.participants.iter().map(|p| p.slot_number).collect();
        assert_eq!(slots, vec![1, 3]);
    }

    #[test]
    fn test_finish_before_last_step() {
        let wizard = RegistrationWizard::new();
        let errors = wizard.finish().unwrap_err();
        assert_eq!(errors.messages("step"), ["Complete step 1 before submitting"]);
    }
}
