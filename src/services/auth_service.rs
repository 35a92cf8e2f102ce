use crate::models::{User, UserInfo};
use crate::store::DonationStore;
use crate::utils::AppError;
use bcrypt::{hash, verify, DEFAULT_COST};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// JWT Claims
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: String, // user id (hex)
    pub email: String,
    pub name: String,
    pub role: String,
    pub iat: usize, // issued at
    pub exp: usize, // expiration
    pub jti: String, // JWT ID
}

// Request/Response structures
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct AuthResponse {
    pub success: bool,
    pub token: String,
    pub user: UserInfo,
}

fn get_jwt_secret() -> String {
    std::env::var("JWT_SECRET").unwrap_or_else(|_| "default-secret-change-me".to_string())
}

// Generate JWT token (24h expiry)
pub fn generate_jwt(user: &User) -> Result<String, String> {
    let iat = Utc::now().timestamp() as usize;
    let exp = (Utc::now() + Duration::hours(24)).timestamp() as usize;
    let jti = Uuid::new_v4().to_string();

    let claims = Claims {
        sub: user.id.to_hex(),
        email: user.email.clone(),
        name: user.name.clone(),
        role: user.role.clone(),
        iat,
        exp,
        jti,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(get_jwt_secret().as_ref()),
    )
    .map_err(|e| format!("Failed to generate token: {}", e))
}

// Verify JWT token
pub fn verify_token(token: &str) -> Result<Claims, String> {
    let validation = Validation::new(Algorithm::HS256);

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(get_jwt_secret().as_ref()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| format!("Invalid token: {}", e))
}

// User registration. Validation problems come back as `Validation` (HTTP
// 400); a store outage stays `StoreUnavailable` so the API layer can answer
// 500 instead of blaming the caller.
pub async fn register<S>(store: &S, request: &RegisterRequest) -> Result<AuthResponse, AppError>
where
    S: DonationStore + ?Sized,
{
    if request.email.trim().is_empty() {
        return Err(AppError::Validation("Email is required".to_string()));
    }
    if request.password.is_empty() {
        return Err(AppError::Validation("Password is required".to_string()));
    }

    // Check if user already exists
    let existing = store.find_user_by_email(&request.email).await?;
    if existing.is_some() {
        return Err(AppError::Validation("User already exists".to_string()));
    }

    let hashed_password = hash(&request.password, DEFAULT_COST)
        .map_err(|e| AppError::StoreUnavailable(format!("Failed to hash password: {}", e)))?;

    let new_user = User {
        id: ObjectId::new(),
        name: request.name.clone(),
        email: request.email.clone(),
        phone: request.phone.clone(),
        password: hashed_password,
        role: "donor".to_string(),
        food: vec![],
    };

    store.insert_user(&new_user).await?;

    let token = generate_jwt(&new_user).map_err(AppError::StoreUnavailable)?;

    log::info!("✅ User registered successfully: {}", new_user.email);

    Ok(AuthResponse {
        success: true,
        token,
        user: UserInfo::from(&new_user),
    })
}

// User login. Bad credentials are `Validation`; driver failures keep their
// own variant.
pub async fn login<S>(store: &S, request: &LoginRequest) -> Result<AuthResponse, AppError>
where
    S: DonationStore + ?Sized,
{
    let user = store
        .find_user_by_email(&request.email)
        .await?
        .ok_or_else(|| AppError::Validation("Invalid credentials".to_string()))?;

    let valid = verify(&request.password, &user.password)
        .map_err(|e| AppError::StoreUnavailable(format!("Password verification error: {}", e)))?;

    if !valid {
        return Err(AppError::Validation("Invalid credentials".to_string()));
    }

    let token = generate_jwt(&user).map_err(AppError::StoreUnavailable)?;

    Ok(AuthResponse {
        success: true,
        token,
        user: UserInfo::from(&user),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::{FaultyStore, MemoryStore};
    use std::sync::atomic::Ordering;

    fn register_request() -> RegisterRequest {
        RegisterRequest {
            name: "Asha".to_string(),
            email: "asha@example.com".to_string(),
            phone: "555-0101".to_string(),
            password: "hunter2!".to_string(),
        }
    }

    #[test]
    fn jwt_round_trip_preserves_claims() {
        let user = User {
            id: ObjectId::new(),
            name: "Asha".to_string(),
            email: "asha@example.com".to_string(),
            phone: "555-0101".to_string(),
            password: String::new(),
            role: "donor".to_string(),
            food: vec![],
        };
        let token = generate_jwt(&user).unwrap();
        let claims = verify_token(&token).unwrap();
        assert_eq!(claims.sub, user.id.to_hex());
        assert_eq!(claims.email, "asha@example.com");
        assert_eq!(claims.role, "donor");
    }

    #[test]
    fn garbage_token_is_rejected() {
        assert!(verify_token("not-a-jwt").is_err());
    }

    #[tokio::test]
    async fn register_then_login_succeeds() {
        let store = MemoryStore::new();
        let registered = register(&store, &register_request()).await.unwrap();
        assert!(registered.success);
        assert_eq!(registered.user.role, "donor");

        let logged_in = login(
            &store,
            &LoginRequest {
                email: "asha@example.com".to_string(),
                password: "hunter2!".to_string(),
            },
        )
        .await
        .unwrap();
        assert_eq!(logged_in.user.email, "asha@example.com");
    }

    #[tokio::test]
    async fn login_with_wrong_password_fails() {
        let store = MemoryStore::new();
        register(&store, &register_request()).await.unwrap();

        let err = login(
            &store,
            &LoginRequest {
                email: "asha@example.com".to_string(),
                password: "wrong".to_string(),
            },
        )
        .await
        .unwrap_err();
        assert_eq!(err, AppError::Validation("Invalid credentials".to_string()));
    }

    #[tokio::test]
    async fn duplicate_registration_is_rejected() {
        let store = MemoryStore::new();
        register(&store, &register_request()).await.unwrap();
        let err = register(&store, &register_request()).await.unwrap_err();
        assert_eq!(err, AppError::Validation("User already exists".to_string()));
    }

    #[tokio::test]
    async fn store_outage_during_register_is_not_a_validation_error() {
        // An unreachable store must not come back as a 400-class error.
        let store = FaultyStore::new();
        store.user_lookup_fails.store(true, Ordering::SeqCst);

        let err = register(&store, &register_request()).await.unwrap_err();
        assert!(matches!(err, AppError::StoreUnavailable(_)));

        let login_err = login(
            &store,
            &LoginRequest {
                email: "asha@example.com".to_string(),
                password: "hunter2!".to_string(),
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(login_err, AppError::StoreUnavailable(_)));
    }
}
