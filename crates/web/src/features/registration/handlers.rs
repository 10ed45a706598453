use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::Value;
use storage::{
    dto::{
        festival_event::FestivalEventDetail,
        registration::{
            CoordinatorDetails, CreateRegistrationRequest, ParticipantSelection,
            RegistrationResponse, SchoolDetails,
        },
    },
    services::wizard::{RegistrationStep, validate_step},
};

use crate::error::WebError;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    get,
    path = "/api/festival-events",
    responses(
        (status = 200, description = "Festival events with their categories", body = Vec<FestivalEventDetail>)
    ),
    tag = "registration"
)]
pub async fn list_festival_events(State(state): State<AppState>) -> Result<Response, WebError> {
    let events = services::list_festival_events(state.registrations.as_ref()).await?;

    Ok(Json(events).into_response())
}

#[utoipa::path(
    get,
    path = "/api/festival-events/{event_id}",
    params(
        ("event_id" = i32, Path, description = "Festival event id")
    ),
    responses(
        (status = 200, description = "Festival event found", body = FestivalEventDetail),
        (status = 404, description = "Festival event not found")
    ),
    tag = "registration"
)]
pub async fn get_festival_event(
    State(state): State<AppState>,
    Path(event_id): Path<i32>,
) -> Result<Response, WebError> {
    let event = services::get_festival_event(state.registrations.as_ref(), event_id).await?;

    Ok(Json(event).into_response())
}

#[utoipa::path(
    post,
    path = "/api/registrations",
    request_body = CreateRegistrationRequest,
    responses(
        (status = 201, description = "School and participants registered", body = RegistrationResponse),
        (status = 400, description = "Validation error"),
        (status = 500, description = "Registration could not be stored")
    ),
    tag = "registration"
)]
pub async fn create_registration(
    State(state): State<AppState>,
    Json(req): Json<CreateRegistrationRequest>,
) -> Result<Response, WebError> {
    let registration = services::submit_registration(state.registrations.as_ref(), &req).await?;

    Ok((StatusCode::CREATED, Json(registration)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/registrations/steps/{step}/validate",
    params(
        ("step" = RegistrationStep, Path, description = "Workflow step: school, coordinator or participants")
    ),
    responses(
        (status = 204, description = "Step is valid"),
        (status = 400, description = "Validation error")
    ),
    tag = "registration"
)]
pub async fn validate_registration_step(
    State(state): State<AppState>,
    Path(step): Path<RegistrationStep>,
    Json(payload): Json<Value>,
) -> Result<Response, WebError> {
    match step {
        RegistrationStep::School => {
            let school: SchoolDetails = parse_step(payload)?;
            validate_step(&school).into_result()?;
        }
        RegistrationStep::Coordinator => {
            let coordinator: CoordinatorDetails = parse_step(payload)?;
            validate_step(&coordinator).into_result()?;
        }
        RegistrationStep::Participants => {
            let selection: ParticipantSelection = parse_step(payload)?;
            services::check_selection(state.registrations.as_ref(), &selection).await?;
        }
    }

    Ok(StatusCode::NO_CONTENT.into_response())
}

#[utoipa::path(
    get,
    path = "/api/registrations/{school_id}",
    params(
        ("school_id" = String, Path, description = "Generated school id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Stored registration", body = RegistrationResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "School not found")
    ),
    tag = "registration"
)]
pub async fn get_registration(
    State(state): State<AppState>,
    Path(school_id): Path<String>,
) -> Result<Response, WebError> {
    let registration = services::get_registration(state.registrations.as_ref(), &school_id).await?;

    Ok(Json(registration).into_response())
}

fn parse_step<T: serde::de::DeserializeOwned>(payload: Value) -> Result<T, WebError> {
    serde_json::from_value(payload).map_err(|e| WebError::BadRequest(format!("Invalid step payload: {}", e)))
}
