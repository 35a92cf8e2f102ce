pub mod auth_service;
pub mod consistency_service;
pub mod donation_service;
pub mod listing_service;
pub mod user_service;
