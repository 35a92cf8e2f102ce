use async_trait::async_trait;
use futures::stream::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};

use crate::database::MongoDB;
use crate::models::{Food, User};
use crate::utils::AppError;

#[cfg(test)]
pub mod memory;

const USERS: &str = "users";
const FOODS: &str = "foods";

/// Storage seam for the donation core.
///
/// The services never touch a collection handle directly; they go through this
/// trait so the store is an injected dependency rather than an ambient
/// singleton, and so the ledger logic can run against an in-memory store in
/// tests.
///
/// `add_food_ref` / `remove_food_ref` are required to be atomic set-style
/// updates (no read-modify-write of the whole list): concurrent appends for
/// the same user must both survive.
#[async_trait]
pub trait DonationStore: Send + Sync {
    async fn insert_user(&self, user: &User) -> Result<(), AppError>;
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, AppError>;
    async fn find_user_by_id(&self, id: &ObjectId) -> Result<Option<User>, AppError>;

    async fn insert_food(&self, food: &Food) -> Result<(), AppError>;
    async fn find_food(&self, id: &ObjectId) -> Result<Option<Food>, AppError>;
    /// Returns whether a record was actually removed.
    async fn delete_food(&self, id: &ObjectId) -> Result<bool, AppError>;
    /// Full scan, storage order.
    async fn list_foods(&self) -> Result<Vec<Food>, AppError>;
    /// Authoritative "foods donated by user X" query (`Food.donor == donor`).
    async fn foods_by_donor(&self, donor: &ObjectId) -> Result<Vec<Food>, AppError>;

    /// Atomically adds `food_id` to `User.food` (set semantics, idempotent).
    async fn add_food_ref(&self, user_id: &ObjectId, food_id: &ObjectId) -> Result<(), AppError>;
    /// Atomically removes `food_id` from `User.food`.
    async fn remove_food_ref(&self, user_id: &ObjectId, food_id: &ObjectId)
        -> Result<(), AppError>;
}

/// MongoDB-backed production store.
#[derive(Clone)]
pub struct MongoStore {
    db: MongoDB,
}

impl MongoStore {
    pub fn new(db: MongoDB) -> Self {
        Self { db }
    }
}

#[async_trait]
impl DonationStore for MongoStore {
    async fn insert_user(&self, user: &User) -> Result<(), AppError> {
        self.db.collection::<User>(USERS).insert_one(user).await?;
        Ok(())
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let user = self
            .db
            .collection::<User>(USERS)
            .find_one(doc! { "email": email })
            .await?;
        Ok(user)
    }

    async fn find_user_by_id(&self, id: &ObjectId) -> Result<Option<User>, AppError> {
        let user = self
            .db
            .collection::<User>(USERS)
            .find_one(doc! { "_id": id })
            .await?;
        Ok(user)
    }

    async fn insert_food(&self, food: &Food) -> Result<(), AppError> {
        self.db.collection::<Food>(FOODS).insert_one(food).await?;
        Ok(())
    }

    async fn find_food(&self, id: &ObjectId) -> Result<Option<Food>, AppError> {
        let food = self
            .db
            .collection::<Food>(FOODS)
            .find_one(doc! { "_id": id })
            .await?;
        Ok(food)
    }

    async fn delete_food(&self, id: &ObjectId) -> Result<bool, AppError> {
        let result = self
            .db
            .collection::<Food>(FOODS)
            .delete_one(doc! { "_id": id })
            .await?;
        Ok(result.deleted_count > 0)
    }

    async fn list_foods(&self) -> Result<Vec<Food>, AppError> {
        let cursor = self.db.collection::<Food>(FOODS).find(doc! {}).await?;
        let foods = cursor.try_collect().await?;
        Ok(foods)
    }

    async fn foods_by_donor(&self, donor: &ObjectId) -> Result<Vec<Food>, AppError> {
        let cursor = self
            .db
            .collection::<Food>(FOODS)
            .find(doc! { "donor": donor })
            .await?;
        let foods = cursor.try_collect().await?;
        Ok(foods)
    }

    async fn add_food_ref(&self, user_id: &ObjectId, food_id: &ObjectId) -> Result<(), AppError> {
        // $addToSet keeps the append idempotent and safe under concurrent
        // donations by the same user.
        self.db
            .collection::<User>(USERS)
            .update_one(
                doc! { "_id": user_id },
                doc! { "$addToSet": { "food": food_id } },
            )
            .await?;
        Ok(())
    }

    async fn remove_food_ref(
        &self,
        user_id: &ObjectId,
        food_id: &ObjectId,
    ) -> Result<(), AppError> {
        self.db
            .collection::<User>(USERS)
            .update_one(doc! { "_id": user_id }, doc! { "$pull": { "food": food_id } })
            .await?;
        Ok(())
    }
}
