//! # Authentication Configuration
//!
//! 액세스 토큰 서명과 리프레시 토큰 수명에 관한 설정을 담당합니다.
//!
//! 설정은 애플리케이션 시작 시 한 번 [`AuthConfig::from_env`]로 읽어서
//! 불변 값으로 만든 뒤, `ClaimsCodec`, `TokenIssuer`, `TokenVerifier`의
//! 생성자에 명시적으로 전달합니다. 요청 처리 중에 환경 변수를 다시 읽지 않습니다.
//!
//! ## 환경 변수
//!
//! ```bash
//! export JWT_SECRET="your-super-secret-key"       # 개발/테스트 외 환경에서는 필수
//! export JWT_ISSUER="WellBiteAPI"                  # 기본값
//! export JWT_AUDIENCE="com.cxcarvaj.WellBite"      # 기본값
//! export JWT_EXPIRATION_HOURS="48"                 # 액세스 토큰 유효 기간
//! export JWT_REFRESH_EXPIRATION_DAYS="2"           # 리프레시 토큰 유효 기간
//! ```
//!
//! 두 유효 기간은 기본값이 같지만 서로 독립적인 설정값입니다.

use std::env;
use std::fmt;

use chrono::Duration;

use crate::config::Environment;
use crate::errors::AppError;

/// 액세스 토큰 발급자 기본값
pub const DEFAULT_ISSUER: &str = "WellBiteAPI";

/// 액세스 토큰 대상(클라이언트 애플리케이션) 기본값
pub const DEFAULT_AUDIENCE: &str = "com.cxcarvaj.WellBite";

/// 액세스 토큰 유효 기간 기본값 (2일)
pub const DEFAULT_ACCESS_TOKEN_HOURS: i64 = 48;

/// 리프레시 토큰 유효 기간 기본값 (2일)
pub const DEFAULT_REFRESH_TOKEN_DAYS: i64 = 2;

/// 유효 기간 상한 (10년). 이보다 긴 값은 잘못된 설정으로 취급합니다.
const MAX_TOKEN_DAYS: i64 = 3650;

const DEVELOPMENT_SECRET: &str = "wellbite-development-secret";

/// 토큰 서브시스템의 불변 설정 값
///
/// `Debug` 출력에서 서명 키는 가려집니다.
#[derive(Clone)]
pub struct AuthConfig {
    secret: String,
    issuer: String,
    audience: String,
    access_token_ttl: Duration,
    refresh_token_ttl: Duration,
}

impl AuthConfig {
    /// 주어진 서명 키와 기본 발급자/대상/유효 기간으로 설정을 만듭니다.
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            issuer: DEFAULT_ISSUER.to_string(),
            audience: DEFAULT_AUDIENCE.to_string(),
            access_token_ttl: Duration::hours(DEFAULT_ACCESS_TOKEN_HOURS),
            refresh_token_ttl: Duration::days(DEFAULT_REFRESH_TOKEN_DAYS),
        }
    }

    pub fn with_access_token_ttl(mut self, ttl: Duration) -> Self {
        self.access_token_ttl = ttl;
        self
    }

    pub fn with_refresh_token_ttl(mut self, ttl: Duration) -> Self {
        self.refresh_token_ttl = ttl;
        self
    }

    /// 프로세스 환경 변수에서 설정을 읽습니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 개발/테스트 외 환경에서 `JWT_SECRET`이 없는 경우
    pub fn from_env(environment: &Environment) -> Result<Self, AppError> {
        Self::from_lookup(environment, |key| env::var(key).ok())
    }

    /// 임의의 키-값 조회 함수로부터 설정을 읽습니다.
    ///
    /// 숫자 값이 잘못되었거나 0 이하이거나 10년을 넘으면 기본값을 사용하고 에러 로그를 남깁니다.
    pub fn from_lookup<F>(environment: &Environment, lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret = match lookup("JWT_SECRET").filter(|s| !s.trim().is_empty()) {
            Some(secret) => secret,
            None => match environment {
                Environment::Development | Environment::Test => {
                    log::warn!("JWT_SECRET not set, using development default (not secure for production!)");
                    DEVELOPMENT_SECRET.to_string()
                }
                _ => {
                    return Err(AppError::InternalError(format!(
                        "JWT_SECRET must be set in {:?} environment",
                        environment
                    )));
                }
            },
        };

        let issuer = lookup("JWT_ISSUER").unwrap_or_else(|| DEFAULT_ISSUER.to_string());
        let audience = lookup("JWT_AUDIENCE").unwrap_or_else(|| DEFAULT_AUDIENCE.to_string());

        let access_token_ttl = window_or_default(
            &lookup,
            "JWT_EXPIRATION_HOURS",
            Duration::try_hours,
            Duration::hours(DEFAULT_ACCESS_TOKEN_HOURS),
        );
        let refresh_token_ttl = window_or_default(
            &lookup,
            "JWT_REFRESH_EXPIRATION_DAYS",
            Duration::try_days,
            Duration::days(DEFAULT_REFRESH_TOKEN_DAYS),
        );

        Ok(Self {
            secret,
            issuer,
            audience,
            access_token_ttl,
            refresh_token_ttl,
        })
    }

    pub fn secret(&self) -> &str {
        &self.secret
    }

    pub fn issuer(&self) -> &str {
        &self.issuer
    }

    pub fn audience(&self) -> &str {
        &self.audience
    }

    pub fn access_token_ttl(&self) -> Duration {
        self.access_token_ttl
    }

    pub fn refresh_token_ttl(&self) -> Duration {
        self.refresh_token_ttl
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("secret", &"<redacted>")
            .field("issuer", &self.issuer)
            .field("audience", &self.audience)
            .field("access_token_ttl", &self.access_token_ttl)
            .field("refresh_token_ttl", &self.refresh_token_ttl)
            .finish()
    }
}

/// 정수 설정값을 유효 기간으로 변환합니다. 변환할 수 없으면 `default`를 돌려줍니다.
fn window_or_default<F>(
    lookup: &F,
    key: &str,
    to_duration: fn(i64) -> Option<Duration>,
    default: Duration,
) -> Duration
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return default;
    };

    let value = match raw.trim().parse::<i64>() {
        Ok(value) => value,
        Err(e) => {
            log::error!("{} 파싱 실패: {}. 기본값 {:?} 사용", key, e, default);
            return default;
        }
    };

    if value <= 0 {
        log::error!("{} must be positive (got {}). 기본값 {:?} 사용", key, value, default);
        return default;
    }

    match to_duration(value) {
        Some(ttl) if ttl <= Duration::days(MAX_TOKEN_DAYS) => ttl,
        _ => {
            log::error!("{} is too large (got {}). 기본값 {:?} 사용", key, value, default);
            default
        }
    }
}
