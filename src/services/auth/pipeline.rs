//! 요청 단위 인증 파이프라인
//!
//! ```text
//! NoToken → TokenPresent → SignatureAndClaimsValid → RevocationChecked → UserResolved → Authenticated
//! ```
//!
//! 각 화살표에서 실패하면 즉시 종료합니다. 실패 종류는 `warn` 로그에만 남고
//! 클라이언트는 구분되지 않는 401 응답을 받습니다.
//! 마지막에 라우트의 [`AccessPolicy`]를 적용하여 역할이 `none`인 사용자를 걸러냅니다.

use std::fmt;
use std::sync::Arc;

use crate::domain::models::auth::{AccessPolicy, AuthenticatedUser};
use crate::errors::{AppError, AppResult, AuthError};
use crate::services::auth::{AccessTokenRevocation, TokenVerifier};
use crate::services::users::UserService;
use crate::utils::auth_header::extract_bearer_token;

/// 파이프라인이 도달한 마지막 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStage {
    NoToken,
    TokenPresent,
    SignatureAndClaimsValid,
    RevocationChecked,
    UserResolved,
    Authenticated,
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PipelineStage::NoToken => "no_token",
            PipelineStage::TokenPresent => "token_present",
            PipelineStage::SignatureAndClaimsValid => "signature_and_claims_valid",
            PipelineStage::RevocationChecked => "revocation_checked",
            PipelineStage::UserResolved => "user_resolved",
            PipelineStage::Authenticated => "authenticated",
        };
        f.write_str(name)
    }
}

pub struct AuthenticationPipeline {
    verifier: Arc<TokenVerifier>,
    revocation: Arc<dyn AccessTokenRevocation>,
    users: Arc<UserService>,
}

impl AuthenticationPipeline {
    pub fn new(
        verifier: Arc<TokenVerifier>,
        revocation: Arc<dyn AccessTokenRevocation>,
        users: Arc<UserService>,
    ) -> Self {
        Self { verifier, revocation, users }
    }

    /// `Authorization` 헤더 값으로 요청 주체를 인증합니다.
    pub async fn authenticate(
        &self,
        authorization: Option<&str>,
        policy: AccessPolicy,
    ) -> AppResult<AuthenticatedUser> {
        self.run(authorization, policy).await.map_err(|(stage, err)| {
            match err.auth_kind() {
                Some(kind) => log::warn!("🚫 인증 실패 [{}] at {}", kind.kind(), stage),
                None => log::error!("인증 처리 중 오류 at {}: {}", stage, err),
            }
            err
        })
    }

    async fn run(
        &self,
        authorization: Option<&str>,
        policy: AccessPolicy,
    ) -> Result<AuthenticatedUser, (PipelineStage, AppError)> {
        let fail = |stage: PipelineStage| move |err: AuthError| (stage, AppError::from(err));

        let token = extract_bearer_token(authorization).map_err(fail(PipelineStage::NoToken))?;

        let claims = self
            .verifier
            .verify_access_token(token)
            .map_err(fail(PipelineStage::TokenPresent))?;

        let revoked = self
            .revocation
            .is_revoked(&claims)
            .await
            .map_err(|e| (PipelineStage::SignatureAndClaimsValid, e))?;
        if revoked {
            return Err((PipelineStage::SignatureAndClaimsValid, AuthError::TokenRevoked.into()));
        }

        let user_id = claims
            .user_object_id()
            .map_err(fail(PipelineStage::RevocationChecked))?;
        let user = self
            .users
            .find_by_id(&user_id)
            .await
            .map_err(|e| (PipelineStage::RevocationChecked, e))?
            .ok_or((PipelineStage::RevocationChecked, AppError::from(AuthError::UserNotFound)))?;

        policy
            .authorize_role(&user.role)
            .map_err(fail(PipelineStage::UserResolved))?;

        log::debug!("인증 완료 ({}) - user_id: {}", PipelineStage::Authenticated, user_id);
        Ok(AuthenticatedUser::from_claims(user_id, user.role, &claims))
    }
}
