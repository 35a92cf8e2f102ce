use chrono::NaiveDate;
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Dietary tag for a donated item. Stored and transmitted lowercase
/// ("veg" / "nonveg").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum FoodTag {
    Veg,
    Nonveg,
}

impl fmt::Display for FoodTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FoodTag::Veg => write!(f, "veg"),
            FoodTag::Nonveg => write!(f, "nonveg"),
        }
    }
}

/// Food donation record (stored in the `foods` collection).
///
/// The Food record is the authoritative owner of its own lifecycle: created on
/// donation submission, deleted on collection, never updated in place. The
/// donor's `User.food` list is only a back-reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Food {
    #[serde(rename = "_id")]
    pub id: ObjectId,

    pub food_name: String,

    /// Number of portions; always > 0 (enforced at creation).
    pub quantity: i64,

    pub food_tag: FoodTag,

    pub expiry_date: NaiveDate,

    /// Free-text pickup address.
    pub address: String,

    /// Owning donor (`User._id`).
    pub donor: ObjectId,

    /// Creation timestamp (Unix seconds).
    pub donation_date: i64,
}

/// Donation form as submitted by the frontend. The envelope is
/// `{ "formData": { ... } }` for compatibility with the existing clients.
#[derive(Debug, Clone, Deserialize, utoipa::ToSchema)]
pub struct DonationRequest {
    #[serde(rename = "formData")]
    pub form_data: DonationForm,
}

#[derive(Debug, Clone, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DonationForm {
    pub food_name: String,
    pub food_tag: FoodTag,
    pub quantity: i64,
    pub expiry_date: NaiveDate,
    pub address: String,
    /// Donor is resolved by email, not by id - the form never sees ids.
    pub email: String,
}

/// Wire shape of a Food record (ids rendered as hex strings).
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FoodResponse {
    pub id: String,
    pub food_name: String,
    pub quantity: i64,
    pub food_tag: FoodTag,
    pub expiry_date: NaiveDate,
    pub address: String,
    pub donor: String,
    pub donation_date: i64,
}

impl From<Food> for FoodResponse {
    fn from(food: Food) -> Self {
        FoodResponse {
            id: food.id.to_hex(),
            food_name: food.food_name,
            quantity: food.quantity,
            food_tag: food.food_tag,
            expiry_date: food.expiry_date,
            address: food.address,
            donor: food.donor.to_hex(),
            donation_date: food.donation_date,
        }
    }
}
