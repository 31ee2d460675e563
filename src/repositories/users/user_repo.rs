//! # 사용자 리포지토리 구현
//!
//! 인증 서브시스템은 사용자 문서를 읽기만 합니다.
//! 프로필 생성/수정은 별도 서비스가 같은 `users` 컬렉션에 대해 수행합니다.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use mongodb::{
    bson::{doc, oid::ObjectId},
    Collection,
};

use crate::db::Database;
use crate::domain::entities::users::User;
use crate::errors::{AppError, AppResult};

/// 사용자 조회 협력자
///
/// 인증 파이프라인은 클레임의 사용자 ID로, 로그인은 이메일로 사용자를 찾습니다.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<User>>;

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;
}

/// `users` 컬렉션 기반 사용자 리포지토리
///
/// ## 에러 처리
///
/// - **DatabaseError**: MongoDB 연결 오류, 쿼리 실행 오류, 역직렬화 오류
///
/// ## 사용 예제
///
/// ```rust,ignore
/// let users = MongoUserRepository::new(&database);
/// let user = users.find_by_email("ana@example.com").await?;
/// ```
#[derive(Clone)]
pub struct MongoUserRepository {
    collection: Collection<User>,
}

impl MongoUserRepository {
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.get_database().collection::<User>("users"),
        }
    }
}

#[async_trait]
impl UserDirectory for MongoUserRepository {
    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<User>> {
        self.collection
            .find_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 이메일 주소로 사용자 조회
    ///
    /// 이메일은 대소문자를 구분하지 않도록 소문자로 정규화해서 찾습니다.
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        self.collection
            .find_one(doc! { "email": email.trim().to_lowercase() })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }
}

/// 프로세스 내 사용자 디렉터리
///
/// 저장 시 ID가 없는 사용자에게는 새 ObjectId를 부여합니다.
#[derive(Default)]
pub struct MemoryUserDirectory {
    users: RwLock<HashMap<ObjectId, User>>,
}

impl MemoryUserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// 사용자를 추가하고 ID가 채워진 사본을 반환합니다.
    pub fn insert(&self, mut user: User) -> AppResult<User> {
        let id = *user.id.get_or_insert_with(ObjectId::new);
        user.email = user.email.trim().to_lowercase();

        self.users
            .write()
            .map_err(|_| AppError::InternalError("user directory lock poisoned".to_string()))?
            .insert(id, user.clone());

        Ok(user)
    }

    pub fn remove(&self, id: &ObjectId) -> AppResult<Option<User>> {
        Ok(self.users
            .write()
            .map_err(|_| AppError::InternalError("user directory lock poisoned".to_string()))?
            .remove(id))
    }
}

#[async_trait]
impl UserDirectory for MemoryUserDirectory {
    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<User>> {
        let users = self.users
            .read()
            .map_err(|_| AppError::InternalError("user directory lock poisoned".to_string()))?;
        Ok(users.get(id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let email = email.trim().to_lowercase();
        let users = self.users
            .read()
            .map_err(|_| AppError::InternalError("user directory lock poisoned".to_string()))?;
        Ok(users.values().find(|user| user.email == email).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::users::Role;

    #[actix_web::test]
    async fn test_memory_directory_lookup() {
        let directory = MemoryUserDirectory::new();
        let user = directory
            .insert(User::new(
                "Ana@Example.com".to_string(),
                "secret".to_string(),
                "Ana".to_string(),
                "Lopez".to_string(),
                Role::Client,
            ))
            .unwrap();
        let id = user.id.unwrap();

        assert_eq!(directory.find_by_id(&id).await.unwrap().unwrap().email, "ana@example.com");
        assert!(directory.find_by_email(" ANA@example.com ").await.unwrap().is_some());
        assert!(directory.find_by_email("other@example.com").await.unwrap().is_none());

        directory.remove(&id).unwrap();
        assert!(directory.find_by_id(&id).await.unwrap().is_none());
    }
}
