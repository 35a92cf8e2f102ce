use actix_web::{web, HttpResponse};

use crate::models::FoodResponse;
use crate::services::listing_service;
use crate::store::MongoStore;

#[utoipa::path(
    get,
    path = "/api/allfoods",
    tag = "Listings",
    responses(
        (status = 200, description = "All stored donations", body = [FoodResponse]),
        (status = 500, description = "Store failure")
    )
)]
pub async fn get_all_foods(store: web::Data<MongoStore>) -> HttpResponse {
    match listing_service::list_all_donations(store.get_ref()).await {
        Ok(foods) => {
            let foods: Vec<FoodResponse> = foods.into_iter().map(FoodResponse::from).collect();
            HttpResponse::Ok().json(foods)
        }
        // A degraded store is a real error, not an empty feed.
        Err(e) => {
            log::error!("❌ Listing failed: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "message": "Server Error"
            }))
        }
    }
}
