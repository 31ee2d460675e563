//! # 리프레시 토큰 저장소
//!
//! `RefreshTokenStore`는 발급된 리프레시 토큰 레코드에 대한 조회/변경 계약만 정의합니다.
//! 실제 영속화는 구현체가 담당합니다.
//!
//! - [`MongoRefreshTokenStore`] - `refresh_tokens` 컬렉션 (운영)
//! - [`MemoryRefreshTokenStore`] - 프로세스 내 맵 (테스트)
//!
//! ## 동시성
//!
//! 두 구현 모두 토큰 값의 유일성을 저장소 수준에서 강제하고, 충돌 시 덮어쓰지 않고
//! `ConflictError`를 반환합니다. 폐기는 단일 조건부 업데이트로 처리되어
//! 같은 토큰에 대한 동시 로그아웃이 서로를 깨뜨리지 않습니다.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use mongodb::{
    bson::{doc, oid::ObjectId, DateTime},
    error::{ErrorKind, WriteFailure},
    options::IndexOptions,
    Collection, IndexModel,
};

use crate::db::Database;
use crate::domain::entities::tokens::RefreshToken;
use crate::errors::{AppError, AppResult};

const COLLECTION_NAME: &str = "refresh_tokens";

/// MongoDB 중복 키 에러 코드
const DUPLICATE_KEY_CODE: i32 = 11000;

#[async_trait]
pub trait RefreshTokenStore: Send + Sync {
    /// 폐기되지 않은 새 레코드를 저장합니다.
    ///
    /// 같은 토큰 값이 이미 있으면 `AppError::ConflictError`를 반환합니다.
    async fn create(
        &self,
        user_id: &ObjectId,
        token: &str,
        expires_at: DateTime,
    ) -> AppResult<RefreshToken>;

    async fn find_by_value(&self, token: &str) -> AppResult<Option<RefreshToken>>;

    /// 폐기 플래그를 세웁니다. 이미 폐기된 토큰이면 아무 일도 하지 않습니다.
    ///
    /// 토큰이 없으면 `AppError::NotFound`를 반환합니다.
    async fn mark_revoked(&self, token: &str) -> AppResult<()>;
}

/// `refresh_tokens` 컬렉션 기반 저장소
#[derive(Clone)]
pub struct MongoRefreshTokenStore {
    collection: Collection<RefreshToken>,
}

impl MongoRefreshTokenStore {
    /// 컬렉션 핸들을 얻고 인덱스를 보장합니다.
    pub async fn new(database: &Database) -> AppResult<Self> {
        let store = Self {
            collection: database.get_database().collection::<RefreshToken>(COLLECTION_NAME),
        };
        store.create_indexes().await?;
        Ok(store)
    }

    /// 토큰 값 유니크 인덱스와 사용자별 조회 인덱스를 생성합니다.
    ///
    /// 이미 존재하는 인덱스는 MongoDB가 무시하므로 시작할 때마다 호출해도 됩니다.
    pub async fn create_indexes(&self) -> AppResult<()> {
        let token_index = IndexModel::builder()
            .keys(doc! { "token": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("token_unique".to_string())
                .build())
            .build();

        let user_index = IndexModel::builder()
            .keys(doc! { "user_id": 1 })
            .options(IndexOptions::builder()
                .name("user_id".to_string())
                .build())
            .build();

        self.collection
            .create_indexes([token_index, user_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    matches!(
        err.kind.as_ref(),
        ErrorKind::Write(WriteFailure::WriteError(we)) if we.code == DUPLICATE_KEY_CODE
    )
}

#[async_trait]
impl RefreshTokenStore for MongoRefreshTokenStore {
    async fn create(
        &self,
        user_id: &ObjectId,
        token: &str,
        expires_at: DateTime,
    ) -> AppResult<RefreshToken> {
        let mut record = RefreshToken::new(*user_id, token.to_string(), expires_at);

        let result = self.collection.insert_one(&record).await.map_err(|e| {
            if is_duplicate_key(&e) {
                AppError::ConflictError("리프레시 토큰 값이 이미 존재합니다".to_string())
            } else {
                AppError::DatabaseError(e.to_string())
            }
        })?;

        record.id = result.inserted_id.as_object_id();
        Ok(record)
    }

    async fn find_by_value(&self, token: &str) -> AppResult<Option<RefreshToken>> {
        self.collection
            .find_one(doc! { "token": token })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn mark_revoked(&self, token: &str) -> AppResult<()> {
        let result = self.collection
            .update_one(
                revoke_filter(token),
                doc! { "$set": { "revoked": true, "updated_at": DateTime::now() } },
            )
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if result.matched_count > 0 {
            return Ok(());
        }

        // 일치하는 활성 토큰이 없음: 이미 폐기되었거나 존재하지 않는 토큰
        let existing = self.collection
            .count_documents(doc! { "token": token })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if existing == 0 {
            return Err(AppError::NotFound("리프레시 토큰을 찾을 수 없습니다".to_string()));
        }

        Ok(())
    }
}

/// 프로세스 내 저장소
///
/// 외부 서비스 없이 테스트할 때 사용합니다. 재시작하면 내용이 사라집니다.
#[derive(Default)]
pub struct MemoryRefreshTokenStore {
    tokens: RwLock<HashMap<String, RefreshToken>>,
}

impl MemoryRefreshTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 저장된 레코드 수
    pub fn len(&self) -> usize {
        self.tokens.read().map(|tokens| tokens.len()).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// 아직 폐기되지 않은 토큰에만 일치하는 조건.
/// 이미 폐기된 레코드의 `updated_at`은 첫 폐기 시각으로 남습니다.
fn revoke_filter(token: &str) -> mongodb::bson::Document {
    doc! { "token": token, "revoked": false }
}

fn poisoned<T>(_: T) -> AppError {
    AppError::InternalError("refresh token store lock poisoned".to_string())
}

#[async_trait]
impl RefreshTokenStore for MemoryRefreshTokenStore {
    async fn create(
        &self,
        user_id: &ObjectId,
        token: &str,
        expires_at: DateTime,
    ) -> AppResult<RefreshToken> {
        let mut tokens = self.tokens.write().map_err(poisoned)?;

        if tokens.contains_key(token) {
            return Err(AppError::ConflictError("리프레시 토큰 값이 이미 존재합니다".to_string()));
        }

        let mut record = RefreshToken::new(*user_id, token.to_string(), expires_at);
        record.id = Some(ObjectId::new());
        tokens.insert(token.to_string(), record.clone());

        Ok(record)
    }

    async fn find_by_value(&self, token: &str) -> AppResult<Option<RefreshToken>> {
        let tokens = self.tokens.read().map_err(poisoned)?;
        Ok(tokens.get(token).cloned())
    }

    async fn mark_revoked(&self, token: &str) -> AppResult<()> {
        let mut tokens = self.tokens.write().map_err(poisoned)?;

        match tokens.get_mut(token) {
            Some(record) => {
                if !record.revoked {
                    record.revoked = true;
                    record.updated_at = DateTime::now();
                }
                Ok(())
            }
            None => Err(AppError::NotFound("리프레시 토큰을 찾을 수 없습니다".to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::tokens::to_bson_datetime;
    use chrono::{Duration, Utc};

    fn in_two_days() -> DateTime {
        to_bson_datetime(Utc::now() + Duration::days(2))
    }

    #[actix_web::test]
    async fn test_create_and_find() {
        let store = MemoryRefreshTokenStore::new();
        let user_id = ObjectId::new();

        let created = store.create(&user_id, "value-1", in_two_days()).await.unwrap();
        assert!(created.id.is_some());
        assert!(!created.revoked);

        let found = store.find_by_value("value-1").await.unwrap().unwrap();
        assert_eq!(found, created);
        assert!(store.find_by_value("missing").await.unwrap().is_none());
    }

    #[actix_web::test]
    async fn test_duplicate_value_conflicts() {
        let store = MemoryRefreshTokenStore::new();
        let user_id = ObjectId::new();

        store.create(&user_id, "same", in_two_days()).await.unwrap();
        let err = store.create(&ObjectId::new(), "same", in_two_days()).await.unwrap_err();

        assert!(matches!(err, AppError::ConflictError(_)));
        assert_eq!(store.len(), 1);
        let kept = store.find_by_value("same").await.unwrap().unwrap();
        assert_eq!(kept.user_id, user_id);
    }

    #[actix_web::test]
    async fn test_mark_revoked_is_idempotent() {
        let store = MemoryRefreshTokenStore::new();
        store.create(&ObjectId::new(), "value", in_two_days()).await.unwrap();

        store.mark_revoked("value").await.unwrap();
        store.mark_revoked("value").await.unwrap();

        assert!(store.find_by_value("value").await.unwrap().unwrap().revoked);
    }

    #[actix_web::test]
    async fn test_repeat_revoke_keeps_first_revocation_time() {
        let store = MemoryRefreshTokenStore::new();
        store.create(&ObjectId::new(), "value", in_two_days()).await.unwrap();

        store.mark_revoked("value").await.unwrap();
        let first = store.find_by_value("value").await.unwrap().unwrap();

        std::thread::sleep(std::time::Duration::from_millis(5));
        store.mark_revoked("value").await.unwrap();
        let second = store.find_by_value("value").await.unwrap().unwrap();

        assert!(second.revoked);
        assert_eq!(second.updated_at, first.updated_at);
    }

    #[test]
    fn test_revoke_filter_matches_only_active_tokens() {
        assert_eq!(revoke_filter("value"), doc! { "token": "value", "revoked": false });
    }

    #[actix_web::test]
    async fn test_mark_revoked_missing_token() {
        let store = MemoryRefreshTokenStore::new();
        let err = store.mark_revoked("missing").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
