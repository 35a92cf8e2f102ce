use actix_web::{web, HttpResponse};

use crate::services::auth_service::Claims;
use crate::services::user_service;
use crate::services::user_service::ProfileResponse;
use crate::store::MongoStore;
use crate::utils::AppError;

#[utoipa::path(
    get,
    path = "/api/user/profile",
    tag = "Users",
    responses(
        (status = 200, description = "Profile with donations", body = ProfileResponse),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "User not found")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_profile(
    user: web::ReqData<Claims>,
    store: web::Data<MongoStore>,
) -> HttpResponse {
    log::info!("👤 GET /user/profile - {}", user.email);

    match user_service::get_profile(store.get_ref(), &user.sub).await {
        Ok(profile) => HttpResponse::Ok().json(profile),
        Err(AppError::NotFound(_)) => HttpResponse::NotFound().json(serde_json::json!({
            "success": false,
            "error": "User not found"
        })),
        Err(AppError::Validation(msg)) => HttpResponse::BadRequest().json(serde_json::json!({
            "success": false,
            "error": msg
        })),
        Err(e) => {
            log::error!("❌ Profile lookup failed: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "success": false,
                "error": "Server Error"
            }))
        }
    }
}
