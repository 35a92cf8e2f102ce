//! Ownership Index Consistency checker.
//!
//! Derived invariant: after every donation mutation, `User.food` must equal
//! (as a set) the ids of the Food records whose `donor` is that user. This
//! check never runs on a request path; it exists so tests and operational
//! tooling can detect a drifted index.

use mongodb::bson::oid::ObjectId;
use std::collections::HashSet;

use crate::store::DonationStore;
use crate::utils::AppError;

/// Verifies the back-reference list of one user against the authoritative
/// `Food.donor` query. Any difference is a `Consistency` error naming the
/// offending ids.
pub async fn check_ownership_index<S>(store: &S, user_id: &ObjectId) -> Result<(), AppError>
where
    S: DonationStore + ?Sized,
{
    let user = store
        .find_user_by_id(user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("user".to_string()))?;

    let referenced: HashSet<ObjectId> = user.food.iter().copied().collect();
    let owned: HashSet<ObjectId> = store
        .foods_by_donor(user_id)
        .await?
        .into_iter()
        .map(|f| f.id)
        .collect();

    if referenced == owned {
        return Ok(());
    }

    let dangling: Vec<String> = referenced
        .difference(&owned)
        .map(|id| id.to_hex())
        .collect();
    let orphaned: Vec<String> = owned
        .difference(&referenced)
        .map(|id| id.to_hex())
        .collect();

    Err(AppError::Consistency(format!(
        "user {}: dangling refs [{}], unreferenced foods [{}]",
        user_id.to_hex(),
        dangling.join(", "),
        orphaned.join(", ")
    )))
}
