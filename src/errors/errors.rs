//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 인증 서비스를 위한 통합 에러 처리 시스템입니다.
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 타입 안전하고
//! 일관된 에러 처리를 제공합니다.
//!
//! 인증 실패는 [`AuthError`]로 세분화되어 로그에 남지만, 클라이언트에게는
//! 어떤 검사가 실패했는지 드러내지 않는 균일한 응답으로 변환됩니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::{AppError, AuthError};
//!
//! async fn revoke(token: &str) -> Result<(), AppError> {
//!     store.mark_revoked(token).await.map_err(|e| match e {
//!         AppError::NotFound(_) => AuthError::TokenNotFound.into(),
//!         other => other,
//!     })
//! }
//! ```

use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use thiserror::Error;

/// 인증 토큰 서브시스템의 실패 종류
///
/// 각 변형은 내부 진단(로그)을 위한 구분이며, HTTP 응답에서는
/// `TokenNotFound`를 제외하고 모두 `401 unauthorized`로 합쳐집니다.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Authorization 헤더에 Bearer 토큰이 없음
    #[error("authentication token not provided")]
    MissingToken,

    /// 토큰 형식 또는 서명이 올바르지 않음
    #[error("malformed or tampered access token")]
    MalformedToken,

    /// 액세스 토큰의 `exp`가 지남
    #[error("access token expired")]
    ExpiredToken,

    /// `aud` 클레임에 이 애플리케이션이 포함되지 않음
    #[error("access token audience mismatch")]
    InvalidAudience,

    /// `iss` 클레임이 설정된 발급자와 다름
    #[error("access token issuer mismatch")]
    InvalidIssuer,

    /// 폐기된 토큰
    #[error("token has been revoked")]
    TokenRevoked,

    /// 저장소에 존재하지 않는 리프레시 토큰
    #[error("token not found")]
    TokenNotFound,

    /// 리프레시 토큰의 만료 시간이 지남
    #[error("refresh token expired")]
    TokenExpired,

    /// 토큰에 기록된 사용자가 더 이상 존재하지 않음
    #[error("user not found")]
    UserNotFound,

    /// 이메일 또는 비밀번호 불일치
    #[error("invalid credentials")]
    InvalidCredentials,

    /// 아직 저장되지 않아 식별자가 없는 사용자
    #[error("user has no identifier")]
    IdentityMissing,

    /// 역할이 `none`인 (아직 프로비저닝되지 않은) 사용자
    #[error("user role is not provisioned")]
    UnprovisionedRole,

    /// 서명 키를 사용할 수 없거나 서명에 실패함
    #[error("failed to sign access token: {0}")]
    SigningError(String),
}

impl AuthError {
    /// 로그에 남길 짧은 식별자를 반환합니다.
    pub fn kind(&self) -> &'static str {
        match self {
            AuthError::MissingToken => "missing_token",
            AuthError::MalformedToken => "malformed_token",
            AuthError::ExpiredToken => "expired_token",
            AuthError::InvalidAudience => "invalid_audience",
            AuthError::InvalidIssuer => "invalid_issuer",
            AuthError::TokenRevoked => "token_revoked",
            AuthError::TokenNotFound => "token_not_found",
            AuthError::TokenExpired => "token_expired",
            AuthError::UserNotFound => "user_not_found",
            AuthError::InvalidCredentials => "invalid_credentials",
            AuthError::IdentityMissing => "identity_missing",
            AuthError::UnprovisionedRole => "unprovisioned_role",
            AuthError::SigningError(_) => "signing_error",
        }
    }

    /// 클라이언트에게 노출되는 HTTP 상태 코드
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::TokenNotFound => StatusCode::NOT_FOUND,
            AuthError::IdentityMissing => StatusCode::BAD_REQUEST,
            AuthError::SigningError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::UNAUTHORIZED,
        }
    }

    /// 클라이언트에게 노출되는 에러 코드
    ///
    /// 401 계열은 모두 `unauthorized`로 통일됩니다.
    pub fn public_code(&self) -> &'static str {
        match self.status_code() {
            StatusCode::NOT_FOUND => "token_not_found",
            StatusCode::BAD_REQUEST => "identity_missing",
            StatusCode::INTERNAL_SERVER_ERROR => "internal_error",
            _ => "unauthorized",
        }
    }
}

/// 애플리케이션 전역 에러 타입
///
/// 인증 서비스에서 발생할 수 있는 모든 종류의 에러를 포괄하는 열거형입니다.
/// 자동으로 HTTP 응답으로 변환되어 클라이언트에게 전달됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 인증 토큰 관련 실패 (401/404)
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// Redis 캐시 관련 에러 (500 Internal Server Error)
    #[error("Redis error: {0}")]
    RedisError(String),

    /// 입력값 검증 에러 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 리소스 찾을 수 없음 에러 (404 Not Found)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 충돌/중복 에러 (409 Conflict)
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 인증 실패라면 그 종류를 반환합니다.
    pub fn auth_kind(&self) -> Option<&AuthError> {
        match self {
            AppError::Auth(kind) => Some(kind),
            _ => None,
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Auth(kind) => kind.status_code(),
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 인증 실패는 구체적인 원인 대신 공개 코드만 내려보냅니다.
    /// 인프라 에러의 상세 메시지도 클라이언트에게 노출하지 않습니다.
    fn error_response(&self) -> HttpResponse {
        let body = match self {
            AppError::Auth(kind) => serde_json::json!({ "error": kind.public_code() }),
            AppError::ValidationError(_) | AppError::NotFound(_) | AppError::ConflictError(_) => {
                serde_json::json!({ "error": self.to_string() })
            }
            _ => serde_json::json!({ "error": "internal_error" }),
        };

        HttpResponse::build(self.status_code()).json(body)
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;
