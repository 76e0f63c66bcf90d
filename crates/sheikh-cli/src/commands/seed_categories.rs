//! 샘플 카테고리 시딩 명령어.

use tracing::error;

use sheikh_core::{sample_categories, Category};
use sheikh_store::CategoryRepository;

/// 시딩된 row의 created_by 값.
const CREATED_BY: &str = "system";

/// 카탈로그를 기록 없이 출력합니다 (드라이런).
pub fn print_catalogue(categories: &[Category]) {
    for category in categories {
        println!(
            "[{}] {} (order {}) - {}",
            category.section, category.name, category.sort_order, category.description
        );
    }
    println!("{} categories total", categories.len());
}

/// 샘플 카탈로그를 기록합니다.
///
/// 원본 시더와 동일하게 실패 항목은 로그만 남기고 계속 진행합니다.
/// 기록에 성공한 row 수를 돌려줍니다.
pub async fn run(repo: &CategoryRepository) -> usize {
    let categories = sample_categories();
    let mut created = 0;

    for category in &categories {
        match repo.insert(category, CREATED_BY).await {
            Ok(_) => {
                println!(
                    "Created category: {} for section: {}",
                    category.name, category.section
                );
                created += 1;
            }
            Err(e) => {
                error!(name = %category.name, "Error creating category: {}", e);
            }
        }
    }

    println!("Sample categories created: {}/{}", created, categories.len());
    created
}
