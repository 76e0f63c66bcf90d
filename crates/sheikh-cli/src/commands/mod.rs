//! CLI 명령어 구현 모듈.

pub mod create_sheikh;
pub mod seed_categories;
