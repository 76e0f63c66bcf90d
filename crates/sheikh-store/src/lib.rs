//! # Sheikh Store
//!
//! PostgreSQL 기반 저장소 구현을 제공합니다:
//! - [`Database`]: 연결 풀 래퍼 및 내장 마이그레이션
//! - [`UserRepository`]: `sheikh_core::UserStore`의 운영 구현
//! - [`CategoryRepository`]: 참조 카테고리 기록

pub mod categories;
pub mod database;
pub mod users;

pub use categories::CategoryRepository;
pub use database::{Database, DatabaseConfig};
pub use users::UserRepository;
