//! # 사용자 조회/자격 증명 서비스
//!
//! 인증 서브시스템이 사용자에 대해 필요로 하는 두 가지 기능만 제공합니다.
//!
//! - 로그인: 이메일 + 비밀번호 검증
//! - 토큰 검증 후: 클레임의 사용자 ID로 현재 사용자 조회
//!
//! 사용자 생성, 수정, 삭제는 이 서비스의 범위가 아닙니다.

use std::sync::Arc;

use mongodb::bson::oid::ObjectId;

use crate::domain::entities::users::User;
use crate::errors::{AppResult, AuthError};
use crate::repositories::users::UserDirectory;
use crate::services::users::PasswordVerifier;

pub struct UserService {
    directory: Arc<dyn UserDirectory>,
    passwords: Arc<dyn PasswordVerifier>,
}

impl UserService {
    pub fn new(directory: Arc<dyn UserDirectory>, passwords: Arc<dyn PasswordVerifier>) -> Self {
        Self { directory, passwords }
    }

    /// 이메일과 비밀번호로 사용자를 인증합니다.
    ///
    /// # Errors
    ///
    /// * `AuthError::InvalidCredentials` - 존재하지 않는 이메일 또는 틀린 비밀번호.
    ///   두 경우는 호출자에게 구분되지 않습니다.
    /// * `AppError::DatabaseError` - 조회 실패
    pub async fn verify_credentials(&self, email: &str, password: &str) -> AppResult<User> {
        let start_time = std::time::Instant::now();

        let user = match self.directory.find_by_email(email).await? {
            Some(user) => user,
            None => {
                log::warn!("로그인 실패 - 알 수 없는 이메일");
                return Err(AuthError::InvalidCredentials.into());
            }
        };

        if !self.passwords.verify(password, &user.password_hash)? {
            log::warn!("로그인 실패 - 비밀번호 불일치 (user_id: {:?})", user.id_string());
            return Err(AuthError::InvalidCredentials.into());
        }

        log::debug!("Total credential verification took: {:?}", start_time.elapsed());
        Ok(user)
    }

    pub async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<User>> {
        self.directory.find_by_id(id).await
    }
}
