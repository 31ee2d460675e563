use std::future::{ready, Ready};

use actix_web::{FromRequest, HttpMessage, HttpRequest};
use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;

use crate::domain::entities::users::Role;
use crate::domain::models::token::AccessTokenClaims;
use crate::errors::{AppError, AuthError};

/// 인증 파이프라인을 통과한 요청의 주체
///
/// 미들웨어가 요청 extensions에 넣어두고, 핸들러는 추출자로 꺼내 씁니다.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthenticatedUser {
    /// 사용자 고유 ID
    pub user_id: ObjectId,

    pub email: String,

    /// 검증 시점에 저장소에서 다시 읽은 역할
    pub role: Role,

    /// 액세스 토큰의 `jti`
    pub token_id: String,

    pub token_expires_at: DateTime<Utc>,
}

impl AuthenticatedUser {
    pub fn from_claims(user_id: ObjectId, role: Role, claims: &AccessTokenClaims) -> Self {
        Self {
            user_id,
            email: claims.email.clone(),
            role,
            token_id: claims.jti.clone(),
            token_expires_at: claims.expires_at(),
        }
    }
}

/// ActixWeb FromRequest trait 구현
impl FromRequest for AuthenticatedUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedUser>() {
            Some(user) => ready(Ok(user.clone())),
            None => ready(Err(AuthError::MissingToken.into())),
        }
    }
}
