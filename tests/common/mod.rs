//! Common test utilities

use fundstory::models::{Campaign, Dataset, Season, SentenceRecord};

/// Build records from (campaign, element, sentence) tuples
pub fn records(rows: &[(&str, &str, &str)]) -> Vec<SentenceRecord> {
    rows.iter()
        .map(|(id, element, sentence)| SentenceRecord::new(*id, *element, *sentence))
        .collect()
}

/// Create campaign metadata with default values
#[allow(dead_code)]
pub fn campaign(id: &str, category: &str, season: Season, price: u64) -> Campaign {
    Campaign {
        campaign_id: id.to_string(),
        category: category.to_string(),
        season: Some(season),
        price: Some(price),
        project_name: None,
    }
}

/// Three campaigns across categories, seasons and price bands
#[allow(dead_code)]
pub fn create_test_dataset() -> Dataset {
    Dataset {
        campaigns: vec![
            campaign("1", "Coat", Season::Winter, 189_000),
            campaign("2", "Shirt", Season::Summer, 39_000),
            campaign("3", "Coat", Season::Autumn, 320_000),
        ],
        sentences: records(&[
            ("1", "문제 제기", "무거운 코트는 불편함을 줍니다."),
            ("1", "브랜드 소개", "10년간의 자존심을 걸고 만든 브랜드"),
            ("2", "문제 제기", "셔츠가 구겨져서 불편함을 느끼셨나요?"),
            ("2", "브랜드 소개", "삶의 가치를 높이는 브랜드"),
            ("3", "브랜드 소개", "작은 공방에서 시작했습니다."),
            ("3", "문제 제기", "겨울 코트는 관리가 어렵습니다."),
        ]),
    }
}
