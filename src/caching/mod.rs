//! 캐싱 계층 모듈
//!
//! Redis 연결을 감싸는 얇은 클라이언트를 제공합니다.
//! 현재는 액세스 토큰 폐기 목록(`revoked_access:{jti}`)에만 사용됩니다.
//!
//! # 환경 설정
//!
//! ```bash
//! REDIS_URL=redis://localhost:6379       # 기본값
//! ACCESS_TOKEN_DENYLIST=redis            # 폐기 목록 활성화
//! ```

pub mod redis;
