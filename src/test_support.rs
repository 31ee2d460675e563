//! 외부 서비스 없이 HTTP 계층을 테스트하기 위한 인메모리 구성

use std::sync::Arc;

use actix_web::web;

use crate::config::AuthConfig;
use crate::domain::entities::users::{Role, User};
use crate::repositories::tokens::MemoryRefreshTokenStore;
use crate::repositories::users::MemoryUserDirectory;
use crate::services::auth::{AccessTokenRevocation, MemoryAccessTokenDenylist, NoopAccessTokenRevocation};
use crate::services::users::PlaintextPasswordVerifier;
use crate::state::AppState;

pub const TEST_SECRET: &str = "wellbite-test-secret";

pub struct TestContext {
    pub config: AuthConfig,
    pub store: Arc<MemoryRefreshTokenStore>,
    pub directory: Arc<MemoryUserDirectory>,
    pub state: AppState,
}

impl TestContext {
    /// 액세스 토큰 폐기 확인이 꺼진 기본 구성
    pub fn new() -> Self {
        Self::with_access_revocation(Arc::new(NoopAccessTokenRevocation))
    }

    /// 로그아웃 시 액세스 토큰을 denylist에 올리는 구성
    pub fn with_denylist() -> Self {
        Self::with_access_revocation(Arc::new(MemoryAccessTokenDenylist::new()))
    }

    /// 액세스 토큰 폐기 구현을 직접 지정한 구성
    pub fn with_access_revocation(access_revocation: Arc<dyn AccessTokenRevocation>) -> Self {
        let config = AuthConfig::new(TEST_SECRET);
        let store = Arc::new(MemoryRefreshTokenStore::new());
        let directory = Arc::new(MemoryUserDirectory::new());

        let state = AppState::new(
            config.clone(),
            store.clone(),
            directory.clone(),
            Arc::new(PlaintextPasswordVerifier),
            access_revocation,
        );

        Self { config, store, directory, state }
    }

    pub fn data(&self) -> web::Data<AppState> {
        web::Data::new(self.state.clone())
    }

    /// 평문 비밀번호를 가진 사용자를 저장합니다.
    pub fn add_user(&self, email: &str, password: &str, role: Role) -> User {
        self.directory
            .insert(User::new(
                email.to_string(),
                password.to_string(),
                "Test".to_string(),
                "User".to_string(),
                role,
            ))
            .expect("insert test user")
    }

    /// 사용자에 대한 서명된 `Authorization` 헤더 값
    pub fn bearer_for(&self, user: &User) -> String {
        let claims = self.state.issuer.issue_access_token(user).expect("issue claims");
        let token = self.state.codec.sign(&claims).expect("sign claims");
        format!("Bearer {}", token)
    }

    /// 사용자의 리프레시 토큰을 하나 발급하고 값을 돌려줍니다.
    pub async fn refresh_token_for(&self, user: &User) -> String {
        self.state
            .issuer
            .issue_pair(user)
            .await
            .expect("issue pair")
            .refresh_token
            .token
    }
}
