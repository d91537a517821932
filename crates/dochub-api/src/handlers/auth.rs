//! Auth handlers — signup, signin, token verification.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use dochub_core::error::AppError;
use dochub_service::auth::{SigninData, SignupData};

use crate::error::ApiError;

use crate::dto::request::{SigninRequest, SignupRequest, VerifyRequest};
use crate::dto::response::{AuthResponse, VerifyResponse};
use crate::dto::validate_request;
use crate::state::AppState;

/// POST /api/auth/signup
pub async fn signup(
    State(state): State<AppState>,
    Json(req): Json<SignupRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), ApiError> {
    validate_request(&req)?;

    let session = state
        .auth_service
        .signup(SignupData {
            email: req.email,
            username: req.username,
            firstname: req.firstname,
            lastname: req.lastname,
            password: req.password,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            user: session.user.into(),
            token: session.token,
        }),
    ))
}

/// POST /api/auth/signin
pub async fn signin(
    State(state): State<AppState>,
    Json(req): Json<SigninRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    validate_request(&req)?;

    let session = state
        .auth_service
        .signin(SigninData {
            email: req.email,
            password: req.password,
        })
        .await?;

    Ok(Json(AuthResponse {
        user: session.user.into(),
        token: session.token,
    }))
}

/// POST /api/auth/verify
///
/// Reports validity in the body rather than through the error mapper:
/// a failed check is 401 `{ok: false, error}`, not the standard
/// `{message}` shape.
pub async fn verify(
    State(state): State<AppState>,
    Json(req): Json<VerifyRequest>,
) -> Result<(StatusCode, Json<VerifyResponse>), ApiError> {
    if req.token.trim().is_empty() {
        return Err(AppError::validation("Token is required").into());
    }

    match state.auth_service.verify_token(&req.token) {
        Ok(_) => Ok((
            StatusCode::OK,
            Json(VerifyResponse {
                ok: true,
                error: String::new(),
            }),
        )),
        Err(e) => Ok((
            StatusCode::UNAUTHORIZED,
            Json(VerifyResponse {
                ok: false,
                error: e.message,
            }),
        )),
    }
}
