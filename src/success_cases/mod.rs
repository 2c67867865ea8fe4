//! Static lookup of successful campaign examples
//!
//! The table comes from an optional JSON file. A missing or malformed file is
//! not an error: the built-in defaults are used instead. Once loaded, a table
//! is memoized per path for the life of the process and never mutated.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, OnceLock};

/// One showcased campaign
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuccessCase {
    pub url: String,
    pub project_name: String,
    pub approach: String,
    pub project_thumbnail_url: String,
}

impl SuccessCase {
    fn new(url: &str, project_name: &str, approach: &str, thumbnail: &str) -> Self {
        Self {
            url: url.to_string(),
            project_name: project_name.to_string(),
            approach: approach.to_string(),
            project_thumbnail_url: thumbnail.to_string(),
        }
    }
}

/// Built-in fallback entries
pub fn default_success_cases() -> Vec<SuccessCase> {
    vec![
        SuccessCase::new(
            "https://www.wadiz.kr/web/campaign/detail/100001",
            "구김 없는 여행용 셔츠",
            "문제 제기 → 솔루션 제시로 출장족의 불편함을 먼저 짚은 구성",
            "https://static.wadiz.kr/thumbnails/100001.jpg",
        ),
        SuccessCase::new(
            "https://www.wadiz.kr/web/campaign/detail/100002",
            "10년 자존심을 건 맨투맨",
            "창작자의 스토리와 브랜드 가치관을 앞세운 브랜드 소개 중심",
            "https://static.wadiz.kr/thumbnails/100002.jpg",
        ),
        SuccessCase::new(
            "https://www.wadiz.kr/web/campaign/detail/100003",
            "사계절 니트 가디건",
            "사용자 후기와 기관 인증으로 외부 평가를 강조한 구성",
            "https://static.wadiz.kr/thumbnails/100003.jpg",
        ),
    ]
}

/// Read a success-case file, falling back to defaults on any failure
pub fn load_success_cases(path: &Path) -> Vec<SuccessCase> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Success cases unavailable, using defaults");
            return default_success_cases();
        }
    };

    match serde_json::from_str::<Vec<SuccessCase>>(&content) {
        Ok(cases) => {
            tracing::debug!(path = %path.display(), count = cases.len(), "Loaded success cases");
            cases
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Malformed success cases, using defaults");
            default_success_cases()
        }
    }
}

type CaseCache = Mutex<HashMap<PathBuf, Arc<[SuccessCase]>>>;

/// Memoized [`load_success_cases`]; each path is read at most once
pub fn cached_success_cases(path: &Path) -> Arc<[SuccessCase]> {
    static CACHE: OnceLock<CaseCache> = OnceLock::new();

    let cache = CACHE.get_or_init(|| Mutex::new(HashMap::new()));
    let mut guard = cache.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

    Arc::clone(
        guard
            .entry(path.to_path_buf())
            .or_insert_with(|| load_success_cases(path).into()),
    )
}
