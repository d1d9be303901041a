use utoipa::OpenApi;
use utoipa::openapi::security::{SecurityScheme, HttpAuthScheme, HttpBuilder};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Trip Service API",
        version = "1.0.0",
        description = "Trips of a user are visible to that user's friends only.\n\n**Authentication:** JWT Bearer token. A caller who is not a friend of the target receives an empty list, never an error."
    ),
    paths(
        crate::api::health::health_check,
        crate::api::users::get_me,
        crate::api::trips::get_user_trips,
        crate::api::auth::dev_token,
    ),
    components(
        schemas(
            crate::api::health::HealthResponse,
            crate::api::auth::DevTokenRequest,
            crate::api::auth::DevTokenResponse,
            crate::models::UserInfo,
            crate::models::TripResponse,
            crate::models::TripListResponse,
        )
    ),
    tags(
        (name = "Health", description = "Service health."),
        (name = "Users", description = "Current user lookup."),
        (name = "Trips", description = "Friend-only trip listing."),
        (name = "Auth", description = "Development token issuing."),
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Enter your JWT token"))
                        .build()
                ),
            );
        }
    }
}
