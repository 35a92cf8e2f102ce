//! Donation Ledger: owns Food record creation and deletion plus the donor
//! ownership index (`User.food`).
//!
//! Both mutations are two-step writes. Creation inserts the Food record first
//! and then does an atomic `$addToSet`-style append of the id to the donor's
//! `food` list; the append is idempotent with the food id as reconciliation
//! key, and a failed append triggers a compensating delete so neither effect
//! applies. Deletion pulls the id from the owner's list first and removes the
//! record second (the reverse cleanup that keeps the back-references from
//! dangling): a failure between the steps leaves an unreferenced record that
//! a retried delete can still collect, never a reference to a missing one.

use chrono::Utc;
use mongodb::bson::oid::ObjectId;

use crate::models::{DonationForm, Food};
use crate::store::DonationStore;
use crate::utils::AppError;

fn validate(form: &DonationForm) -> Result<(), AppError> {
    if form.food_name.trim().is_empty() {
        return Err(AppError::Validation("foodName is required".to_string()));
    }
    if form.address.trim().is_empty() {
        return Err(AppError::Validation("address is required".to_string()));
    }
    if form.quantity <= 0 {
        return Err(AppError::Validation(
            "quantity must be greater than zero".to_string(),
        ));
    }
    Ok(())
}

/// Creates a Food record for the donor resolved by `form.email` and appends
/// its id to the donor's `food` list.
pub async fn create_donation<S>(store: &S, form: &DonationForm) -> Result<Food, AppError>
where
    S: DonationStore + ?Sized,
{
    validate(form)?;

    let donor = store
        .find_user_by_email(&form.email)
        .await?
        .ok_or_else(|| AppError::NotFound("donor".to_string()))?;

    let food = Food {
        id: ObjectId::new(),
        food_name: form.food_name.trim().to_string(),
        quantity: form.quantity,
        food_tag: form.food_tag,
        expiry_date: form.expiry_date,
        address: form.address.trim().to_string(),
        donor: donor.id,
        donation_date: Utc::now().timestamp(),
    };

    store.insert_food(&food).await?;

    if let Err(e) = store.add_food_ref(&donor.id, &food.id).await {
        // Roll the insert back so the record and the index stay in step.
        let _ = store.delete_food(&food.id).await;
        return Err(e);
    }

    Ok(food)
}

/// Permanently deletes a Food record and removes its id from the owning
/// donor's `food` list. Not idempotent: a second delete of the same id fails
/// with `NotFound`.
pub async fn delete_donation<S>(store: &S, food_id: &ObjectId) -> Result<(), AppError>
where
    S: DonationStore + ?Sized,
{
    let food = store
        .find_food(food_id)
        .await?
        .ok_or_else(|| AppError::NotFound("food".to_string()))?;

    // Pull the back-reference before deleting the record. If the pull fails
    // the record is untouched and the delete can simply be retried; deleting
    // first would strand a dangling reference no retry could repair.
    store.remove_food_ref(&food.donor, food_id).await?;

    // Lost the race with a concurrent collect.
    if !store.delete_food(food_id).await? {
        return Err(AppError::NotFound("food".to_string()));
    }

    Ok(())
}
