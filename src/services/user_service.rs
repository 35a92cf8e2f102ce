//! User profile: account info plus the user's donations.

use mongodb::bson::oid::ObjectId;
use serde::Serialize;

use crate::models::{FoodResponse, UserInfo};
use crate::store::DonationStore;
use crate::utils::AppError;

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ProfileResponse {
    pub user: UserInfo,
    pub donations: Vec<FoodResponse>,
}

/// Loads a user and their donations. The donations come from the
/// authoritative `Food.donor` query; `User.food` is only the fast-path index
/// and is not trusted for display.
pub async fn get_profile<S>(store: &S, user_id: &str) -> Result<ProfileResponse, AppError>
where
    S: DonationStore + ?Sized,
{
    let user_id = ObjectId::parse_str(user_id)
        .map_err(|_| AppError::Validation("invalid user id".to_string()))?;

    let user = store
        .find_user_by_id(&user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("user".to_string()))?;

    let donations = store
        .foods_by_donor(&user_id)
        .await?
        .into_iter()
        .map(FoodResponse::from)
        .collect();

    Ok(ProfileResponse {
        user: UserInfo::from(&user),
        donations,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DonationForm, FoodTag, User};
    use crate::services::donation_service;
    use crate::store::memory::MemoryStore;
    use chrono::NaiveDate;

    #[tokio::test]
    async fn profile_lists_donations_from_the_donor_query() {
        let store = MemoryStore::new();
        let user = User {
            id: ObjectId::new(),
            name: "Asha".to_string(),
            email: "asha@example.com".to_string(),
            phone: "555-0101".to_string(),
            password: String::new(),
            role: "donor".to_string(),
            food: vec![],
        };
        store.insert_user(&user).await.unwrap();

        let form = DonationForm {
            food_name: "Rice".to_string(),
            food_tag: FoodTag::Veg,
            quantity: 5,
            expiry_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            address: "12 Elm St".to_string(),
            email: "asha@example.com".to_string(),
        };
        let food = donation_service::create_donation(&store, &form).await.unwrap();

        let profile = get_profile(&store, &user.id.to_hex()).await.unwrap();
        assert_eq!(profile.user.email, "asha@example.com");
        assert_eq!(profile.donations.len(), 1);
        assert_eq!(profile.donations[0].id, food.id.to_hex());
    }

    #[tokio::test]
    async fn bad_id_and_unknown_user_are_distinct_errors() {
        let store = MemoryStore::new();
        assert!(matches!(
            get_profile(&store, "not-an-oid").await.unwrap_err(),
            AppError::Validation(_)
        ));
        assert_eq!(
            get_profile(&store, &ObjectId::new().to_hex()).await.unwrap_err(),
            AppError::NotFound("user".to_string())
        );
    }
}
