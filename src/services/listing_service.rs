//! Listing Query Service: serves the public donation feed.

use crate::models::Food;
use crate::store::DonationStore;
use crate::utils::AppError;

/// Returns every stored Food record in storage order. No auth, no pagination,
/// read-only. An empty store is `Ok(vec![])`; a degraded store is an explicit
/// `StoreUnavailable` error, never silently an empty list.
pub async fn list_all_donations<S>(store: &S) -> Result<Vec<Food>, AppError>
where
    S: DonationStore + ?Sized,
{
    store.list_foods().await
}
