use storage::{
    RegistrationStore,
    dto::{
        festival_event::FestivalEventDetail,
        registration::{CreateRegistrationRequest, ParticipantSelection, RegistrationResponse},
    },
    error::{Result, StorageError},
    services::{
        registration::{allocate_school_id, check_participants, new_participants, new_school},
        wizard::validate_step,
    },
    validation::FieldErrors,
};

/// List festival events with their categories
pub async fn list_festival_events(store: &dyn RegistrationStore) -> Result<Vec<FestivalEventDetail>> {
    store.list_festival_events().await
}

/// Get one festival event with its categories
pub async fn get_festival_event(
    store: &dyn RegistrationStore,
    event_id: i32,
) -> Result<FestivalEventDetail> {
    store.find_festival_event(event_id).await
}

/// Validates the participant step against the selected event
pub async fn check_selection(
    store: &dyn RegistrationStore,
    selection: &ParticipantSelection,
) -> Result<()> {
    validate_step(selection)
        .into_result()
        .map_err(StorageError::Invalid)?;

    let event = selected_event(store, selection.event_id).await?;
    check_participants(&event, &selection.participants)
        .into_result()
        .map_err(StorageError::Invalid)
}

/// Persist a complete registration: the school first, then every
/// participant tagged with the new school id. A failed participant insert
/// leaves the school row in place.
pub async fn submit_registration(
    store: &dyn RegistrationStore,
    request: &CreateRegistrationRequest,
) -> Result<RegistrationResponse> {
    validate_step(request)
        .into_result()
        .map_err(StorageError::Invalid)?;

    let event = selected_event(store, request.event_id).await?;
    check_participants(&event, &request.participants)
        .into_result()
        .map_err(StorageError::Invalid)?;

    let school_id = allocate_school_id(store).await?;
    let school = store.insert_school(&new_school(&school_id, request)).await?;
    tracing::info!(school_id = %school_id, event_id = request.event_id, "School registered");

    let participants = match store
        .insert_participants(&new_participants(&school_id, request))
        .await
    {
        Ok(participants) => participants,
        Err(e) => {
            tracing::error!(
                school_id = %school_id,
                "Participant insert failed after school insert: {}",
                e
            );
            return Err(e);
        }
    };
    tracing::info!(
        school_id = %school_id,
        participants = participants.len(),
        "Participants registered"
    );

    Ok(RegistrationResponse {
        school_id,
        school,
        participants,
    })
}

/// Get a stored registration by school id
pub async fn get_registration(
    store: &dyn RegistrationStore,
    school_id: &str,
) -> Result<RegistrationResponse> {
    let school = store.find_school(school_id).await?;
    let participants = store.list_participants(school_id).await?;

    Ok(RegistrationResponse {
        school_id: school.school_id.clone(),
        school,
        participants,
    })
}

async fn selected_event(store: &dyn RegistrationStore, event_id: i32) -> Result<FestivalEventDetail> {
    match store.find_festival_event(event_id).await {
        Err(StorageError::NotFound) => {
            let mut errors = FieldErrors::new();
            errors.add("event_id", "Selected event does not exist");
            Err(StorageError::Invalid(errors))
        }
        other => other,
    }
}
