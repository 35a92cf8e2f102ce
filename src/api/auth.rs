use actix_web::{web, HttpResponse};

use crate::services::auth_service;
use crate::services::auth_service::{AuthResponse, LoginRequest, RegisterRequest};
use crate::store::MongoStore;
use crate::utils::AppError;

#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = "Auth",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Registration successful", body = AuthResponse),
        (status = 400, description = "Invalid request or user already exists"),
        (status = 500, description = "Store failure")
    )
)]
pub async fn register(
    store: web::Data<MongoStore>,
    request: web::Json<RegisterRequest>,
) -> HttpResponse {
    log::info!("📝 POST /auth/register - email: {}", request.email);

    match auth_service::register(store.get_ref(), &request).await {
        Ok(response) => {
            log::info!("✅ Registration successful: {}", request.email);
            HttpResponse::Created().json(response)
        }
        Err(AppError::Validation(msg)) => {
            log::warn!("❌ Registration rejected: {} - {}", request.email, msg);
            HttpResponse::BadRequest().json(serde_json::json!({
                "success": false,
                "error": msg
            }))
        }
        Err(e) => {
            log::error!("❌ Registration failed: {} - {}", request.email, e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "success": false,
                "error": "Server Error"
            }))
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "Auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = AuthResponse),
        (status = 401, description = "Invalid credentials"),
        (status = 500, description = "Store failure")
    )
)]
pub async fn login(
    store: web::Data<MongoStore>,
    request: web::Json<LoginRequest>,
) -> HttpResponse {
    log::info!("🔐 POST /auth/login - email: {}", request.email);

    match auth_service::login(store.get_ref(), &request).await {
        Ok(response) => {
            log::info!("✅ Login successful: {}", request.email);
            HttpResponse::Ok().json(response)
        }
        Err(AppError::Validation(msg)) => {
            log::warn!("❌ Login failed: {} - {}", request.email, msg);
            HttpResponse::Unauthorized().json(serde_json::json!({
                "success": false,
                "error": msg
            }))
        }
        Err(e) => {
            log::error!("❌ Login failed: {} - {}", request.email, e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "success": false,
                "error": "Server Error"
            }))
        }
    }
}
