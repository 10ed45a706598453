use std::sync::Arc;

use anyhow::Context;
use storage::{ContentStore, Database, PgRegistrationStore};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod error;
mod features;
mod mail;
mod middleware;
mod routes;
mod state;
#[cfg(test)]
mod testing;

use config::Config;
use features::{contact, content, pages, registration, users};
use mail::SmtpMailer;
use middleware::auth::ApiKeys;
use state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        registration::handlers::list_festival_events,
        registration::handlers::get_festival_event,
        registration::handlers::create_registration,
        registration::handlers::validate_registration_step,
        registration::handlers::get_registration,
        users::handlers::register_user,
        users::handlers::list_users,
        users::handlers::get_user,
        content::handlers::list_events,
        content::handlers::get_event,
        content::handlers::create_event,
        content::handlers::update_event,
        content::handlers::list_speakers,
        content::handlers::get_speaker,
        content::handlers::create_speaker,
        content::handlers::update_speaker,
        content::handlers::list_blogs,
        content::handlers::get_blog,
        content::handlers::create_blog,
        content::handlers::update_blog,
        content::handlers::list_sponsors,
        content::handlers::get_sponsor,
        content::handlers::create_sponsor,
        content::handlers::update_sponsor,
        contact::handlers::send_contact,
        pages::handlers::get_home_page,
        pages::handlers::get_page,
    ),
    components(
        schemas(
            storage::dto::registration::SchoolDetails,
            storage::dto::registration::CoordinatorDetails,
            storage::dto::registration::ParticipantEntry,
            storage::dto::registration::ParticipantSelection,
            storage::dto::registration::CreateRegistrationRequest,
            storage::dto::registration::RegistrationResponse,
            storage::dto::festival_event::FestivalEventDetail,
            storage::dto::festival_event::CategoryAllocation,
            storage::dto::user::RegisterUserRequest,
            storage::dto::contact::ContactRequest,
            storage::dto::contact::MessageResponse,
            storage::services::wizard::RegistrationStep,
            storage::models::School,
            storage::models::Participant,
            storage::models::FestivalEvent,
            storage::models::EventCategory,
            storage::models::EventCategoryLink,
            storage::models::UserProfile,
            storage::models::EventListing,
            storage::models::Speaker,
            storage::models::BlogPost,
            storage::models::Sponsor,
            pages::services::PageView,
        )
    ),
    tags(
        (name = "registration", description = "School event registration"),
        (name = "users", description = "Website user sign-ups"),
        (name = "content", description = "Marketing content"),
        (name = "contact", description = "Contact form relay"),
        (name = "pages", description = "Page views for the site router"),
    ),
    modifiers(&SecurityAddon)
)]
struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                utoipa::openapi::security::SecurityScheme::Http(
                    utoipa::openapi::security::HttpBuilder::new()
                        .scheme(utoipa::openapi::security::HttpAuthScheme::Bearer)
                        .bearer_format("API Key")
                        .build(),
                ),
            )
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting festival API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    tracing::info!(
        "Connecting to database at: {}",
        config
            .database_url
            .split('@')
            .next_back()
            .unwrap_or("unknown")
    );
    let db = Database::new(&config.database_url)
        .await
        .context("Failed to initialize database")?;
    tracing::info!("Database connection established");

    tracing::info!("Running database migrations");
    db.run_migrations()
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Database migrations completed successfully");

    let mailer = SmtpMailer::new(config.smtp.as_ref()).context("Failed to configure SMTP relay")?;
    if mailer.is_configured() {
        tracing::info!("SMTP relay configured");
    } else {
        tracing::warn!("SMTP credentials missing; contact form submissions will fail");
    }

    let api_keys = ApiKeys::from_comma_separated(&config.api_keys);
    if api_keys.is_empty() {
        tracing::warn!("No API keys configured; protected endpoints will reject every request");
    }

    let state = AppState::new(
        Arc::new(PgRegistrationStore::new(db.pool().clone())),
        Arc::new(ContentStore::new()),
        Arc::new(mailer),
    );

    let app = routes::router(state, api_keys)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let bind_address = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!(
        "Swagger UI available at http://{}/swagger-ui/",
        bind_address
    );

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", bind_address))?;
    axum::serve(listener, app).await?;

    Ok(())
}
