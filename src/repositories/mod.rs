//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 각 저장소는 trait으로 계약을 정의하고 MongoDB 구현과 프로세스 내 구현을 함께 제공합니다.
//! 서비스 계층은 `Arc<dyn Trait>`으로만 의존하므로 테스트에서 구현을 바꿔 끼울 수 있습니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::tokens::{MongoRefreshTokenStore, RefreshTokenStore};
//!
//! let store: Arc<dyn RefreshTokenStore> = Arc::new(MongoRefreshTokenStore::new(&database).await?);
//! let record = store.find_by_value(&refresh_token).await?;
//! ```

pub mod tokens;
pub mod users;
