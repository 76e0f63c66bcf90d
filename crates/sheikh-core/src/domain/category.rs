//! 참조 카테고리.
//!
//! 섹션별 강의 분류 데이터. 시더가 쓰는 고정 카탈로그를 포함합니다.

use serde::{Deserialize, Serialize};

/// 강의 카테고리.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// 소속 섹션 (fiqh, hadith, seerah, tafsir)
    pub section: String,
    /// 카테고리 이름
    pub name: String,
    /// 설명
    pub description: String,
    /// 섹션 내 표시 순서
    pub sort_order: i32,
}

impl Category {
    fn new(section: &str, name: &str, description: &str, sort_order: i32) -> Self {
        Self {
            section: section.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            sort_order,
        }
    }
}

/// 시더가 기록하는 고정 샘플 카탈로그 (섹션 4개 × 항목 4개).
pub fn sample_categories() -> Vec<Category> {
    vec![
        // Fiqh
        Category::new("fiqh", "أحكام الصلاة", "فقه الصلاة وأحكامها", 1),
        Category::new("fiqh", "أحكام الزكاة", "فقه الزكاة وأحكامها", 2),
        Category::new("fiqh", "أحكام الصيام", "فقه الصيام وأحكامه", 3),
        Category::new("fiqh", "أحكام الحج", "فقه الحج وأحكامه", 4),
        // Hadith
        Category::new("hadith", "صحيح البخاري", "أحاديث صحيح البخاري", 1),
        Category::new("hadith", "صحيح مسلم", "أحاديث صحيح مسلم", 2),
        Category::new("hadith", "سنن الترمذي", "أحاديث سنن الترمذي", 3),
        Category::new("hadith", "سنن أبي داود", "أحاديث سنن أبي داود", 4),
        // Seerah
        Category::new("seerah", "ميلاد النبي", "قصة ميلاد النبي صلى الله عليه وسلم", 1),
        Category::new("seerah", "نشأة النبي", "نشأة النبي صلى الله عليه وسلم", 2),
        Category::new("seerah", "البعثة النبوية", "قصة البعثة النبوية", 3),
        Category::new("seerah", "الهجرة النبوية", "قصة الهجرة النبوية", 4),
        // Tafsir
        Category::new("tafsir", "تفسير سورة الفاتحة", "تفسير سورة الفاتحة", 1),
        Category::new("tafsir", "تفسير سورة البقرة", "تفسير سورة البقرة", 2),
        Category::new("tafsir", "تفسير سورة آل عمران", "تفسير سورة آل عمران", 3),
        Category::new("tafsir", "تفسير سورة النساء", "تفسير سورة النساء", 4),
    ]
}
