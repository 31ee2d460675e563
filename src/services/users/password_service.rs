//! 비밀번호 검증 협력자
//!
//! 운영 환경은 bcrypt 해시를 비교하고, 테스트 환경은 평문을 그대로 비교합니다.

use std::sync::Arc;

use crate::config::Environment;
use crate::errors::{AppError, AppResult};

pub trait PasswordVerifier: Send + Sync {
    /// 입력된 비밀번호가 저장된 값과 일치하는지 확인합니다.
    fn verify(&self, password: &str, stored: &str) -> AppResult<bool>;
}

/// bcrypt 해시 비교
///
/// bcrypt의 특성상 검증 시간이 일정하여 타이밍 공격에 강합니다.
#[derive(Debug, Default, Clone, Copy)]
pub struct BcryptPasswordVerifier;

impl PasswordVerifier for BcryptPasswordVerifier {
    fn verify(&self, password: &str, stored: &str) -> AppResult<bool> {
        let verify_start = std::time::Instant::now();
        let is_valid = bcrypt::verify(password, stored)
            .map_err(|e| AppError::InternalError(format!("비밀번호 검증 실패: {}", e)))?;

        log::debug!("Password verification took: {:?}", verify_start.elapsed());
        Ok(is_valid)
    }
}

/// 평문 비교 (테스트 환경 전용)
#[derive(Debug, Default, Clone, Copy)]
pub struct PlaintextPasswordVerifier;

impl PasswordVerifier for PlaintextPasswordVerifier {
    fn verify(&self, password: &str, stored: &str) -> AppResult<bool> {
        Ok(password == stored)
    }
}

/// 실행 환경에 맞는 비밀번호 검증기를 고릅니다.
pub fn password_verifier_for(environment: &Environment) -> Arc<dyn PasswordVerifier> {
    if environment.uses_plaintext_passwords() {
        log::warn!("⚠️ 테스트 환경: 비밀번호를 평문으로 비교합니다");
        Arc::new(PlaintextPasswordVerifier)
    } else {
        Arc::new(BcryptPasswordVerifier)
    }
}
