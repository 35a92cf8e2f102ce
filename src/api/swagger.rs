use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Food Donation Service API",
        version = "1.0.0",
        description = "Backend for the food-donation marketplace.\n\n**Features:**\n- Donation ledger (create/collect food donations)\n- Public listing feed\n- Email/password authentication\n- Donor profile with donation history",
    ),
    paths(
        // Donations
        crate::api::donations::create_donation,
        crate::api::donations::delete_donation,

        // Listings
        crate::api::listings::get_all_foods,

        // Auth
        crate::api::auth::register,
        crate::api::auth::login,

        // Users
        crate::api::users::get_profile,

        // Health
        crate::api::health::health_check,
    ),
    components(
        schemas(
            // Donations
            crate::models::DonationRequest,
            crate::models::DonationForm,
            crate::models::FoodResponse,
            crate::models::FoodTag,

            // Auth & Users
            crate::services::auth_service::RegisterRequest,
            crate::services::auth_service::LoginRequest,
            crate::services::auth_service::AuthResponse,
            crate::models::UserInfo,
            crate::services::user_service::ProfileResponse,

            // Health
            crate::api::health::HealthResponse,
        )
    ),
    tags(
        (name = "Donations", description = "Donation ledger endpoints. Create a food donation for a donor, or delete one when it is collected."),
        (name = "Listings", description = "Public donation feed. No authentication."),
        (name = "Auth", description = "Email/password registration and login."),
        (name = "Users", description = "Authenticated donor profile endpoints."),
        (name = "Health", description = "Health check endpoint for monitoring service status."),
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
                        .build(),
                ),
            );
        }
    }
}
