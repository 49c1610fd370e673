//! Storefront API routes

use axum::{
    Extension, Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{get, post},
};
use axum_extra::extract::SignedCookieJar;
use serde_json::json;
use tracing::info;

use crate::{
    error::{ApiError, ApiResult},
    middleware::{AuthUser, auth_middleware, resolve_session},
    models::{
        LoginRequest, ProductsQuery, RegisterRequest, UpdateProfileRequest, UserResponse,
    },
    session::{SESSION_COOKIE, removal_cookie, session_cookie},
    state::AppState,
    validation::non_empty,
};

/// Create the router for the storefront API
pub fn create_router(state: AppState) -> Router {
    let protected = Router::new()
        .route("/api/profile", get(get_profile).put(update_profile))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    Router::new()
        .route("/api", get(root))
        .route("/api/", get(root))
        .route("/api/register", post(register))
        .route("/api/login", post(login))
        .route("/api/logout", post(logout))
        .route("/api/categories", get(get_categories))
        .route("/api/products", get(get_products))
        .route("/api/products/:id", get(get_product))
        .route("/api/check-auth", get(check_auth))
        .merge(protected)
        .with_state(state)
}

/// API root
pub async fn root() -> impl IntoResponse {
    Json(json!({"message": "StyleSphere Fashion API"}))
}

/// Register a new account and open a session for it
pub async fn register(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Json(payload): Json<RegisterRequest>,
) -> ApiResult<impl IntoResponse> {
    let (Some(username), Some(email), Some(password)) = (
        non_empty(&payload.username),
        non_empty(&payload.email),
        non_empty(&payload.password),
    ) else {
        return Err(ApiError::Validation(
            "Username, email, and password are required".to_string(),
        ));
    };

    info!("Registration attempt for email: {}", email);

    // Email is checked before username, each as its own lookup.
    if state.user_repository.find_by_email(email).await?.is_some() {
        return Err(ApiError::Conflict(
            "User with this email already exists".to_string(),
        ));
    }

    if state
        .user_repository
        .find_by_username(username)
        .await?
        .is_some()
    {
        return Err(ApiError::Conflict("Username already taken".to_string()));
    }

    let full_name = payload.full_name.as_deref().unwrap_or("");
    let user = state
        .user_repository
        .create(username, email, password, full_name)
        .await?;

    let token = state.sessions.create(&user.id).await?;
    let jar = jar.add(session_cookie(token));

    Ok((
        StatusCode::CREATED,
        jar,
        Json(json!({
            "message": "Registration successful",
            "user": UserResponse::from(user),
        })),
    ))
}

/// Log in with email and password
pub async fn login(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Json(payload): Json<LoginRequest>,
) -> ApiResult<impl IntoResponse> {
    let (Some(email), Some(password)) =
        (non_empty(&payload.email), non_empty(&payload.password))
    else {
        return Err(ApiError::Validation(
            "Email and password are required".to_string(),
        ));
    };

    info!("Login attempt for email: {}", email);

    // Unknown email and wrong password produce the same error so the
    // response never reveals whether an account exists.
    let user = match state.user_repository.find_by_email(email).await? {
        Some(user) if state.user_repository.verify_password(&user, password)? => user,
        _ => return Err(ApiError::Auth("Invalid email or password".to_string())),
    };

    let token = state.sessions.create(&user.id).await?;
    let jar = jar.add(session_cookie(token));

    Ok((
        StatusCode::OK,
        jar,
        Json(json!({
            "message": "Login successful",
            "user": UserResponse::from(user),
        })),
    ))
}

/// Clear the session. Idempotent; succeeds with or without a session.
pub async fn logout(
    State(state): State<AppState>,
    jar: SignedCookieJar,
) -> ApiResult<impl IntoResponse> {
    if let Some(cookie) = jar.get(SESSION_COOKIE) {
        state.sessions.delete(cookie.value()).await?;
    }

    let jar = jar.remove(removal_cookie());

    Ok((jar, Json(json!({"message": "Logout successful"}))))
}

/// Return the authenticated user's profile
pub async fn get_profile(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
) -> ApiResult<impl IntoResponse> {
    let user = state
        .user_repository
        .find_by_id(&auth.id)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    Ok(Json(json!({"user": UserResponse::from(user)})))
}

/// Apply a partial profile update (full_name and/or email)
pub async fn update_profile(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Json(payload): Json<UpdateProfileRequest>,
) -> ApiResult<impl IntoResponse> {
    if let Some(email) = &payload.email {
        if state
            .user_repository
            .email_taken_by_other(email, &auth.id)
            .await?
        {
            return Err(ApiError::Conflict("Email already in use".to_string()));
        }
    }

    let user = state
        .user_repository
        .update_profile(&auth.id, payload.full_name.as_deref(), payload.email.as_deref())
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    Ok(Json(json!({"user": UserResponse::from(user)})))
}

/// List all categories
pub async fn get_categories(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let categories = state.catalog_repository.list_categories().await?;

    Ok(Json(json!({"categories": categories})))
}

/// List products, optionally filtered by category id
pub async fn get_products(
    State(state): State<AppState>,
    Query(query): Query<ProductsQuery>,
) -> ApiResult<impl IntoResponse> {
    let products = state
        .catalog_repository
        .list_products(query.category_filter())
        .await?;

    Ok(Json(json!({"products": products})))
}

/// Fetch a single product by id
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let product = state
        .catalog_repository
        .find_product(&id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Product not found".to_string()))?;

    Ok(Json(json!({"product": product})))
}

/// Report whether the request carries a valid session
pub async fn check_auth(
    State(state): State<AppState>,
    jar: SignedCookieJar,
) -> ApiResult<impl IntoResponse> {
    match resolve_session(&state.sessions, &jar).await? {
        Some(user_id) => {
            let user = state
                .user_repository
                .find_by_id(&user_id)
                .await?
                .map(UserResponse::from);

            Ok(Json(json!({"authenticated": true, "user": user})))
        }
        None => Ok(Json(json!({"authenticated": false}))),
    }
}
