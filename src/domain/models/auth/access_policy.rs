use crate::domain::entities::users::Role;
use crate::errors::AuthError;

/// 보호된 라우트가 요구하는 접근 정책
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccessPolicy {
    /// 유효한 액세스 토큰만 있으면 허용
    Authenticated,
    /// 유효한 토큰 + 역할이 배정된 사용자만 허용 (`none` 거부)
    #[default]
    Provisioned,
}

impl AccessPolicy {
    /// 사용자 역할이 정책을 만족하는지 확인
    pub fn is_satisfied(&self, role: &Role) -> bool {
        match self {
            AccessPolicy::Authenticated => true,
            AccessPolicy::Provisioned => role.is_provisioned(),
        }
    }

    pub fn authorize_role(&self, role: &Role) -> Result<(), AuthError> {
        if self.is_satisfied(role) {
            Ok(())
        } else {
            Err(AuthError::UnprovisionedRole)
        }
    }
}
