//! In-memory `DonationStore` used by the test suite. Mirrors the atomic
//! set-add / pull semantics of the MongoDB implementation.

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use crate::models::{Food, User};
use crate::store::DonationStore;
use crate::utils::AppError;

#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    users: Vec<User>,
    // Vec keeps storage (insertion) order for list_foods.
    foods: Vec<Food>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes a Food record without touching the owner's back-reference
    /// list. Exists only so tests can fabricate a dangling reference.
    pub fn delete_food_without_cleanup(&self, id: &ObjectId) {
        let mut inner = self.inner.lock().unwrap();
        inner.foods.retain(|f| f.id != *id);
    }
}

#[async_trait]
impl DonationStore for MemoryStore {
    async fn insert_user(&self, user: &User) -> Result<(), AppError> {
        let mut inner = self.inner.lock().unwrap();
        if inner.users.iter().any(|u| u.email == user.email) {
            return Err(AppError::StoreUnavailable("duplicate key: email".to_string()));
        }
        inner.users.push(user.clone());
        Ok(())
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.users.iter().find(|u| u.email == email).cloned())
    }

    async fn find_user_by_id(&self, id: &ObjectId) -> Result<Option<User>, AppError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.users.iter().find(|u| u.id == *id).cloned())
    }

    async fn insert_food(&self, food: &Food) -> Result<(), AppError> {
        let mut inner = self.inner.lock().unwrap();
        inner.foods.push(food.clone());
        Ok(())
    }

    async fn find_food(&self, id: &ObjectId) -> Result<Option<Food>, AppError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.foods.iter().find(|f| f.id == *id).cloned())
    }

    async fn delete_food(&self, id: &ObjectId) -> Result<bool, AppError> {
        let mut inner = self.inner.lock().unwrap();
        let before = inner.foods.len();
        inner.foods.retain(|f| f.id != *id);
        Ok(inner.foods.len() < before)
    }

    async fn list_foods(&self) -> Result<Vec<Food>, AppError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.foods.clone())
    }

    async fn foods_by_donor(&self, donor: &ObjectId) -> Result<Vec<Food>, AppError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .foods
            .iter()
            .filter(|f| f.donor == *donor)
            .cloned()
            .collect())
    }

    async fn add_food_ref(&self, user_id: &ObjectId, food_id: &ObjectId) -> Result<(), AppError> {
        let mut inner = self.inner.lock().unwrap();
        if let Some(user) = inner.users.iter_mut().find(|u| u.id == *user_id) {
            // Set semantics, matching $addToSet.
            if !user.food.contains(food_id) {
                user.food.push(*food_id);
            }
        }
        Ok(())
    }

    async fn remove_food_ref(
        &self,
        user_id: &ObjectId,
        food_id: &ObjectId,
    ) -> Result<(), AppError> {
        let mut inner = self.inner.lock().unwrap();
        if let Some(user) = inner.users.iter_mut().find(|u| u.id == *user_id) {
            user.food.retain(|id| id != food_id);
        }
        Ok(())
    }
}

/// `MemoryStore` wrapper that fails selected operations on demand, for
/// exercising the ledger's failure paths (rollback, retry).
#[derive(Default)]
pub struct FaultyStore {
    inner: MemoryStore,
    pub user_lookup_fails: AtomicBool,
    pub add_food_ref_fails: AtomicBool,
    pub remove_food_ref_fails: AtomicBool,
}

impl FaultyStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn injected() -> AppError {
        AppError::StoreUnavailable("injected store failure".to_string())
    }
}

#[async_trait]
impl DonationStore for FaultyStore {
    async fn insert_user(&self, user: &User) -> Result<(), AppError> {
        self.inner.insert_user(user).await
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        if self.user_lookup_fails.load(Ordering::SeqCst) {
            return Err(Self::injected());
        }
        self.inner.find_user_by_email(email).await
    }

    async fn find_user_by_id(&self, id: &ObjectId) -> Result<Option<User>, AppError> {
        self.inner.find_user_by_id(id).await
    }

    async fn insert_food(&self, food: &Food) -> Result<(), AppError> {
        self.inner.insert_food(food).await
    }

    async fn find_food(&self, id: &ObjectId) -> Result<Option<Food>, AppError> {
        self.inner.find_food(id).await
    }

    async fn delete_food(&self, id: &ObjectId) -> Result<bool, AppError> {
        self.inner.delete_food(id).await
    }

    async fn list_foods(&self) -> Result<Vec<Food>, AppError> {
        self.inner.list_foods().await
    }

    async fn foods_by_donor(&self, donor: &ObjectId) -> Result<Vec<Food>, AppError> {
        self.inner.foods_by_donor(donor).await
    }

    async fn add_food_ref(&self, user_id: &ObjectId, food_id: &ObjectId) -> Result<(), AppError> {
        if self.add_food_ref_fails.load(Ordering::SeqCst) {
            return Err(Self::injected());
        }
        self.inner.add_food_ref(user_id, food_id).await
    }

    async fn remove_food_ref(
        &self,
        user_id: &ObjectId,
        food_id: &ObjectId,
    ) -> Result<(), AppError> {
        if self.remove_food_ref_fails.load(Ordering::SeqCst) {
            return Err(Self::injected());
        }
        self.inner.remove_food_ref(user_id, food_id).await
    }
}
