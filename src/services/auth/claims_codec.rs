//! 액세스 토큰 서명/검증
//!
//! HMAC-SHA256으로 [`AccessTokenClaims`]를 JWT 문자열로 서명하고, 반대로 검증합니다.
//! 설정 값 외의 상태가 없는 순수 계산이며 I/O를 하지 않습니다.

use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};

use crate::config::AuthConfig;
use crate::domain::models::token::AccessTokenClaims;
use crate::errors::AuthError;

/// JWT 서명기 겸 검증기
///
/// 생성 시 받은 [`AuthConfig`]의 서명 키, 발급자, 대상을 그대로 사용합니다.
#[derive(Clone)]
pub struct ClaimsCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    has_secret: bool,
}

impl ClaimsCodec {
    pub fn new(config: &AuthConfig) -> Self {
        let secret = config.secret().as_bytes();

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_audience(&[config.audience()]);
        validation.set_issuer(&[config.issuer()]);
        validation.set_required_spec_claims(&["exp", "iss", "aud", "sub"]);
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            has_secret: !secret.is_empty(),
        }
    }

    /// 클레임을 서명된 JWT 문자열로 만듭니다.
    ///
    /// # Errors
    ///
    /// * `AuthError::SigningError` - 서명 키가 없거나 인코딩에 실패한 경우
    pub fn sign(&self, claims: &AccessTokenClaims) -> Result<String, AuthError> {
        if !self.has_secret {
            return Err(AuthError::SigningError("서명 키가 설정되지 않았습니다".to_string()));
        }

        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .map_err(|e| AuthError::SigningError(format!("JWT 토큰 생성 실패: {}", e)))
    }

    /// JWT 문자열을 검증하고 클레임을 돌려줍니다.
    ///
    /// 서명, 만료(`exp`), 대상(`aud`), 발급자(`iss`)를 모두 확인합니다.
    /// 서명 불일치를 포함해 해석할 수 없는 입력은 모두 `MalformedToken`입니다.
    pub fn verify(&self, token: &str) -> Result<AccessTokenClaims, AuthError> {
        if !self.has_secret {
            return Err(AuthError::MalformedToken);
        }

        decode::<AccessTokenClaims>(token, &self.decoding_key, &self.validation)
            .map(|token_data| token_data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::ExpiredToken,
                ErrorKind::InvalidAudience => AuthError::InvalidAudience,
                ErrorKind::InvalidIssuer => AuthError::InvalidIssuer,
                _ => AuthError::MalformedToken,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    use crate::domain::entities::users::Role;

    fn config() -> AuthConfig {
        AuthConfig::new("test-secret")
    }

    fn claims(exp_offset: Duration) -> AccessTokenClaims {
        let now = Utc::now();
        AccessTokenClaims {
            sub: "64b7f0c2a1b2c3d4e5f60718".to_string(),
            exp: (now + exp_offset).timestamp(),
            iat: now.timestamp(),
            iss: "WellBiteAPI".to_string(),
            aud: vec!["com.cxcarvaj.WellBite".to_string()],
            jti: "7d1e0c6a-1111-4222-8333-944455556666".to_string(),
            user_id: "64b7f0c2a1b2c3d4e5f60718".to_string(),
            email: "ana@example.com".to_string(),
            role: Role::Client,
        }
    }

    #[test]
    fn test_sign_then_verify_round_trip() {
        let codec = ClaimsCodec::new(&config());
        let original = claims(Duration::hours(1));

        let token = codec.sign(&original).unwrap();
        assert_eq!(codec.verify(&token).unwrap(), original);
    }

    #[test]
    fn test_expired_token() {
        let codec = ClaimsCodec::new(&config());
        let token = codec.sign(&claims(-Duration::minutes(5))).unwrap();
        assert_eq!(codec.verify(&token), Err(AuthError::ExpiredToken));
    }

    #[test]
    fn test_wrong_audience() {
        let codec = ClaimsCodec::new(&config());
        let mut foreign = claims(Duration::hours(1));
        foreign.aud = vec!["com.other.App".to_string()];

        let token = codec.sign(&foreign).unwrap();
        assert_eq!(codec.verify(&token), Err(AuthError::InvalidAudience));
    }

    #[test]
    fn test_wrong_issuer() {
        let codec = ClaimsCodec::new(&config());
        let mut foreign = claims(Duration::hours(1));
        foreign.iss = "SomeoneElse".to_string();

        let token = codec.sign(&foreign).unwrap();
        assert_eq!(codec.verify(&token), Err(AuthError::InvalidIssuer));
    }

    #[test]
    fn test_altered_signature_is_malformed() {
        let codec = ClaimsCodec::new(&config());
        let other = ClaimsCodec::new(&AuthConfig::new("another-secret"));
        let c = claims(Duration::hours(1));

        let token = codec.sign(&c).unwrap();
        let foreign = other.sign(&c).unwrap();
        let (body, _) = token.rsplit_once('.').unwrap();
        let (_, foreign_signature) = foreign.rsplit_once('.').unwrap();

        let tampered = format!("{}.{}", body, foreign_signature);
        assert_eq!(codec.verify(&tampered), Err(AuthError::MalformedToken));
    }

    #[test]
    fn test_garbage_is_malformed() {
        let codec = ClaimsCodec::new(&config());
        assert_eq!(codec.verify("not-a-jwt"), Err(AuthError::MalformedToken));
        assert_eq!(codec.verify(""), Err(AuthError::MalformedToken));
    }

    #[test]
    fn test_missing_secret_cannot_sign() {
        let codec = ClaimsCodec::new(&AuthConfig::new(""));
        assert!(matches!(
            codec.sign(&claims(Duration::hours(1))),
            Err(AuthError::SigningError(_))
        ));
    }
}
