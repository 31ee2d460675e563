//! 리프레시 토큰 리포지토리 모듈
//!
//! # Features
//!
//! - **유일성 보장**: 토큰 값 유니크 인덱스, 충돌 시 `ConflictError`
//! - **원자적 폐기**: 단일 `update_one`으로 폐기 플래그 설정
//! - **물리 삭제 없음**: 만료된 레코드 정리는 외부 작업의 몫

pub mod refresh_token_store;

pub use refresh_token_store::*;
