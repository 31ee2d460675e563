//! # Authorization 헤더 파싱
//!
//! - `Bearer {token}` - 보호된 라우트의 액세스 토큰
//! - `Basic base64(email:password)` - 로그인 자격 증명

use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::errors::AuthError;

const BEARER_SCHEME: &str = "Bearer";
const BASIC_SCHEME: &str = "Basic";

/// Basic 인증 헤더에서 꺼낸 자격 증명
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicCredentials {
    pub email: String,
    pub password: String,
}

/// 인증 스킴 이름은 대소문자를 구분하지 않습니다 (RFC 7235).
fn strip_scheme<'a>(header: &'a str, scheme: &str) -> Option<&'a str> {
    let header = header.trim();
    let (name, rest) = header.split_once(' ')?;
    name.eq_ignore_ascii_case(scheme).then(|| rest.trim())
}

/// `Authorization` 헤더 값에서 Bearer 토큰을 꺼냅니다.
///
/// 헤더가 없거나, Bearer 스킴이 아니거나, 토큰이 비어 있으면 `MissingToken`입니다.
pub fn extract_bearer_token(header: Option<&str>) -> Result<&str, AuthError> {
    header
        .and_then(|value| strip_scheme(value, BEARER_SCHEME))
        .filter(|token| !token.is_empty())
        .ok_or(AuthError::MissingToken)
}

/// `Authorization: Basic ...` 헤더를 이메일/비밀번호로 해석합니다.
///
/// 형식이 어떻게 잘못되었든 호출자에게는 `InvalidCredentials` 하나로 보입니다.
pub fn parse_basic_credentials(header: Option<&str>) -> Result<BasicCredentials, AuthError> {
    let encoded = header
        .and_then(|value| strip_scheme(value, BASIC_SCHEME))
        .ok_or(AuthError::InvalidCredentials)?;

    let decoded = STANDARD
        .decode(encoded)
        .map_err(|_| AuthError::InvalidCredentials)?;
    let decoded = String::from_utf8(decoded).map_err(|_| AuthError::InvalidCredentials)?;

    let (email, password) = decoded
        .split_once(':')
        .ok_or(AuthError::InvalidCredentials)?;

    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(AuthError::InvalidCredentials);
    }

    Ok(BasicCredentials {
        email: email.to_string(),
        password: password.to_string(),
    })
}
