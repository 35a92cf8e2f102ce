pub mod auth;
pub mod donations;
pub mod health;
pub mod listings;
pub mod swagger;
pub mod users;
