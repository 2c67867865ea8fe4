//! Demonstration data
//!
//! The dashboard fills several charts with random weights instead of real
//! counts. Those weights are produced here from a caller-supplied RNG so a
//! seeded run renders the same chart every time.

use rand::Rng;
use std::ops::RangeInclusive;

use crate::models::{Campaign, Dataset, Season, SentenceRecord};

/// Range of demonstration chart weights
pub const DEMO_WEIGHT_RANGE: RangeInclusive<u32> = 10..=30;

/// Assign each label a random weight in [`DEMO_WEIGHT_RANGE`], labels in input order
pub fn random_weights<R, S>(labels: &[S], rng: &mut R) -> Vec<(String, u32)>
where
    R: Rng + ?Sized,
    S: AsRef<str>,
{
    labels
        .iter()
        .map(|label| (label.as_ref().to_string(), rng.gen_range(DEMO_WEIGHT_RANGE)))
        .collect()
}

/// Each weight as a percentage of the total, for pie labels
pub fn weight_shares(weights: &[(String, u32)]) -> Vec<(String, f64)> {
    let total: u32 = weights.iter().map(|(_, w)| w).sum();
    weights
        .iter()
        .map(|(label, w)| {
            let share = if total == 0 {
                0.0
            } else {
                f64::from(*w) * 100.0 / f64::from(total)
            };
            (label.clone(), share)
        })
        .collect()
}

/// Small built-in dataset for trying the CLI without an input file
pub fn sample_dataset() -> Dataset {
    let campaigns = vec![
        campaign("1", "Shirt", Season::Summer, 39_000, "여행용 구김방지 셔츠"),
        campaign("2", "Coat", Season::Winter, 189_000, "울 블렌드 롱코트"),
        campaign("3", "Knitwear", Season::Autumn, 59_000, "사계절 니트 가디건"),
        campaign("4", "Pants", Season::Spring, 45_000, "밴딩 와이드 팬츠"),
    ];

    let rows: &[(&str, &str, &str)] = &[
        ("1", "문제 제기 및 솔루션 제시", "출장 때마다 셔츠가 구겨져서 불편함을 느끼셨나요?"),
        ("1", "문제 제기 및 솔루션 제시", "구김 없는 원단으로 세탁 후에도 다림질이 필요 없습니다."),
        ("1", "제품 전달 가치", "가방 한켠에 쏘옥 들어가는 간편한 휴대성!"),
        ("1", "제품 상세 설명", "고급 원단 코튼 100% 레귤러 핏"),
        ("1", "브랜드 소개", "우리는 옷을 통해 삶의 가치를 높인다는 철학을 가지고 있습니다."),
        ("1", "자주 묻는 질문", "배송은 펀딩 종료 후 2주 이내 순차 발송됩니다."),
        ("2", "문제 제기 및 솔루션 제시", "무거운 코트는 어깨가 불편함을 줍니다."),
        ("2", "문제 제기 및 솔루션 제시", "가벼운 울 블렌드 원단으로 착용감을 높였습니다."),
        ("2", "제품 전달 가치", "도시적인 세련미를 표현할 수 있습니다."),
        ("2", "제품 상세 설명", "고급 원단 울 70% 오버사이즈 핏"),
        ("2", "브랜드 소개", "10년간의 자존심을 걸고 만든 브랜드입니다."),
        ("2", "자주 묻는 질문", "세탁 방법은 드라이클리닝을 권장합니다."),
        ("3", "브랜드 소개", "작은 공방에서 시작한 니트 브랜드입니다."),
        ("3", "문제 제기 및 솔루션 제시", "니트는 세탁 후 늘어나서 불편함이 컸습니다."),
        ("3", "제품 상세 설명", "고급 원단 캐시미어 혼방 레귤러 핏"),
        ("3", "자주 묻는 질문", "교환/반품은 수령 후 7일 이내 가능합니다."),
        ("4", "문제 제기 및 솔루션 제시", "허리가 조여서 불편함을 느끼셨다면 밴딩 팬츠를 입어보세요."),
        ("4", "제품 전달 가치", "입은 듯 안 입은 듯 착용감이 뛰어납니다."),
        ("4", "제품 상세 설명", "고급 원단 린넨 와이드 핏"),
        ("4", "브랜드 소개", "일상의 편안함을 디자인하는 브랜드입니다."),
        ("4", "자주 묻는 질문", "사이즈 선택이 고민되면 가이드를 참고하세요."),
    ];

    Dataset {
        campaigns,
        sentences: rows
            .iter()
            .map(|(id, element, sentence)| SentenceRecord::new(*id, *element, *sentence))
            .collect(),
    }
}

fn campaign(id: &str, category: &str, season: Season, price: u64, name: &str) -> Campaign {
    Campaign {
        campaign_id: id.to_string(),
        category: category.to_string(),
        season: Some(season),
        price: Some(price),
        project_name: Some(name.to_string()),
    }
}
