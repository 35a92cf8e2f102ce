use actix_web::{web, HttpResponse};
use mongodb::bson::oid::ObjectId;

use crate::models::{DonationRequest, FoodResponse};
use crate::services::donation_service;
use crate::store::MongoStore;
use crate::utils::AppError;

#[utoipa::path(
    post,
    path = "/api/fooddonation",
    tag = "Donations",
    request_body = DonationRequest,
    responses(
        (status = 201, description = "Donation created", body = FoodResponse),
        (status = 400, description = "Missing or invalid field"),
        (status = 404, description = "Donor not found"),
        (status = 500, description = "Store failure")
    )
)]
pub async fn create_donation(
    store: web::Data<MongoStore>,
    request: web::Json<DonationRequest>,
) -> HttpResponse {
    let form = &request.form_data;
    log::info!(
        "🍲 POST /fooddonation - {} x{} from {}",
        form.food_name,
        form.quantity,
        form.email
    );

    match donation_service::create_donation(store.get_ref(), form).await {
        Ok(food) => HttpResponse::Created().json(FoodResponse::from(food)),
        Err(AppError::NotFound(_)) => {
            log::warn!("❌ Donation rejected: no donor for {}", form.email);
            HttpResponse::NotFound().json(serde_json::json!({
                "message": "Donor not found"
            }))
        }
        Err(AppError::Validation(msg)) => HttpResponse::BadRequest().json(serde_json::json!({
            "message": msg
        })),
        Err(e) => {
            log::error!("❌ Donation failed: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "message": "Server Error"
            }))
        }
    }
}

#[utoipa::path(
    delete,
    path = "/api/fooddonation/{id}",
    tag = "Donations",
    params(
        ("id" = String, Path, description = "Food record id (hex ObjectId)")
    ),
    responses(
        (status = 200, description = "Donation deleted"),
        (status = 400, description = "Malformed id"),
        (status = 404, description = "Donation not found"),
        (status = 500, description = "Store failure")
    )
)]
pub async fn delete_donation(
    store: web::Data<MongoStore>,
    path: web::Path<String>,
) -> HttpResponse {
    let food_id = path.into_inner();
    log::info!("🗑️ DELETE /fooddonation/{}", food_id);

    let object_id = match ObjectId::parse_str(&food_id) {
        Ok(id) => id,
        Err(_) => {
            return HttpResponse::BadRequest().json(serde_json::json!({
                "message": "Invalid food id"
            }))
        }
    };

    match donation_service::delete_donation(store.get_ref(), &object_id).await {
        Ok(()) => HttpResponse::Ok().json(serde_json::json!({
            "message": "Food donation deleted successfully"
        })),
        Err(AppError::NotFound(_)) => HttpResponse::NotFound().json(serde_json::json!({
            "message": "Food donation not found"
        })),
        Err(e) => {
            log::error!("❌ Delete failed for {}: {}", food_id, e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "message": "Server Error"
            }))
        }
    }
}
