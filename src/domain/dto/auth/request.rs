//! 인증 요청관련 DTO
//!
//! 로그인은 Basic 인증 헤더만 사용하므로 요청 본문이 없습니다.
use serde::Deserialize;
use validator::Validate;

/// 토큰 갱신 요청 DTO
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RefreshRequest {
    #[validate(length(min = 1, message = "리프레시 토큰이 필요합니다"))]
    pub refresh_token: String,
}

/// 로그아웃 요청 DTO
///
/// 쿼리 문자열(`?refreshToken=...`) 또는 JSON 본문 어느 쪽으로도 받을 수 있습니다.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LogoutRequest {
    #[validate(length(min = 1, message = "리프레시 토큰이 필요합니다"))]
    pub refresh_token: String,
}
