//! Authentication HTTP Handlers
//!
//! 토큰 발급, 갱신, 폐기를 위한 HTTP 엔드포인트입니다.
//!
//! # Endpoints
//!
//! - `POST /api/auth/login` - Basic 인증 헤더로 로그인, 토큰 쌍 발급
//! - `POST /api/auth/refresh` - 리프레시 토큰으로 새 액세스 토큰 발급 (Bearer 필요)
//! - `GET /api/auth/logout` - 리프레시 토큰 폐기 (Bearer 필요)
//!
//! `refresh`와 `logout`은 [`AuthMiddleware::provisioned`]로 감싸져 있으므로
//! 핸들러에 도달한 시점에는 역할이 배정된 사용자임이 보장됩니다.
use actix_web::http::header;
use actix_web::{get, post, web, HttpRequest, HttpResponse};
use serde_json::json;
use validator::Validate;

use crate::domain::dto::auth::{
    LoginResponse, LogoutRequest, RefreshRequest, RefreshResponse, UserResponse,
};
use crate::domain::entities::tokens::token_prefix;
use crate::domain::models::auth::{AccessPolicy, AuthenticatedUser};
use crate::errors::{AppError, AuthError};
use crate::middlewares::AuthMiddleware;
use crate::state::AppState;
use crate::utils::auth_header::parse_basic_credentials;

/// 로그인 핸들러
///
/// `Authorization: Basic base64(email:password)` 헤더로 자격 증명을 받습니다.
/// 역할이 `none`인 사용자는 자격 증명이 맞더라도 토큰을 받지 못합니다.
///
/// # Endpoint
/// `POST /api/auth/login`
#[post("/login")]
pub async fn login(
    req: HttpRequest,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let authorization = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let credentials = parse_basic_credentials(authorization).map_err(|e| {
        log::warn!("🚫 로그인 실패 [{}] - Basic 인증 헤더 없음 또는 형식 오류", e.kind());
        e
    })?;

    let user = state
        .users
        .verify_credentials(&credentials.email, &credentials.password)
        .await?;

    AccessPolicy::Provisioned.authorize_role(&user.role).map_err(|e| {
        log::warn!("🚫 로그인 거부 [{}] - user_id: {:?}", e.kind(), user.id_string());
        e
    })?;

    // 토큰을 저장하기 전에 응답용 식별자부터 확인
    let user_response = UserResponse::try_from(&user)?;

    let pair = state.issuer.issue_pair(&user).await.map_err(|e| {
        log::error!("토큰 발급 실패 - user_id: {}, 에러: {}", user_response.id, e);
        e
    })?;
    let access_token = state.codec.sign(&pair.claims)?;

    log::info!("✅ 로그인 성공 - user_id: {}, role: {}", user_response.id, user.role);

    Ok(HttpResponse::Ok().json(LoginResponse {
        user: user_response,
        access_token,
        expires_at: pair.claims.expires_at(),
        refresh_token: pair.refresh_token.token,
    }))
}

/// 토큰 갱신 핸들러
///
/// 리프레시 토큰을 검증하고 토큰 소유자에게 새 액세스 토큰을 발급합니다.
/// 리프레시 토큰은 교체하지 않으며 원래 만료 시각까지 계속 사용할 수 있습니다.
///
/// # Endpoint
/// `POST /api/auth/refresh`
#[post("/refresh", wrap = "AuthMiddleware::provisioned()")]
pub async fn refresh(
    caller: AuthenticatedUser,
    payload: web::Json<RefreshRequest>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let (_, owner_id) = state
        .verifier
        .verify_refresh_token(&payload.refresh_token)
        .await?;

    if owner_id != caller.user_id {
        log::warn!(
            "다른 사용자의 리프레시 토큰으로 갱신 요청 - caller: {}, owner: {}",
            caller.user_id,
            owner_id
        );
    }

    let owner = state
        .users
        .find_by_id(&owner_id)
        .await?
        .ok_or(AuthError::UserNotFound)?;
    AccessPolicy::Provisioned.authorize_role(&owner.role)?;

    let claims = state.issuer.issue_access_token(&owner)?;
    let access_token = state.codec.sign(&claims)?;

    log::info!("🔄 액세스 토큰 갱신 - user_id: {}", owner_id);

    Ok(HttpResponse::Ok().json(RefreshResponse {
        access_token,
        expires_at: claims.expires_at(),
    }))
}

/// 로그아웃 핸들러
///
/// `refreshToken`을 쿼리 문자열 또는 JSON 본문으로 받아 폐기합니다.
/// 이미 폐기된 토큰도 성공으로 처리합니다. 액세스 토큰 denylist가
/// 켜져 있으면 요청에 사용된 액세스 토큰도 남은 유효 기간 동안 거부됩니다.
/// denylist 기록이 실패해도 리프레시 토큰 폐기가 끝났다면 200을 반환합니다.
///
/// # Endpoint
/// `GET /api/auth/logout?refreshToken={token}`
#[get("/logout", wrap = "AuthMiddleware::provisioned()")]
pub async fn logout(
    caller: AuthenticatedUser,
    query: Option<web::Query<LogoutRequest>>,
    body: Option<web::Json<LogoutRequest>>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let request = query
        .map(web::Query::into_inner)
        .or_else(|| body.map(web::Json::into_inner))
        .ok_or_else(|| AppError::ValidationError("refreshToken is required".to_string()))?;

    request
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    state.revocation.revoke(&request.refresh_token).await?;

    // 리프레시 토큰은 이미 폐기되었으므로 denylist 기록 실패는 응답을 바꾸지 않는다
    if let Err(e) = state
        .access_revocation
        .revoke(&caller.token_id, caller.token_expires_at)
        .await
    {
        log::error!(
            "❌ 액세스 토큰 denylist 기록 실패 - user_id: {}, jti: {}: {}",
            caller.user_id,
            caller.token_id,
            e
        );
    }

    log::info!(
        "👋 로그아웃 - user_id: {}, token: {}...",
        caller.user_id,
        token_prefix(&request.refresh_token)
    );

    Ok(HttpResponse::Ok().json(json!({ "message": "logged out" })))
}
