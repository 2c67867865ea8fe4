// Core data structures for fundstory

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::path::Path;

use crate::utils::error::DatasetError;

/// Product categories offered by the dashboard filter
pub const PRODUCT_CATEGORIES: &[&str] = &[
    "Top",
    "Jacket",
    "Jumper",
    "Padding",
    "Vest",
    "Cardigan",
    "Zip-up",
    "Coat",
    "Blouse",
    "T-shirt",
    "Knitwear",
    "Shirt",
    "Bra top",
    "Hoodie",
    "Jeans",
    "Pants",
    "Skirt",
    "Leggings",
    "Jogger pants",
    "Dress",
    "Jumpsuit",
    "한복",
];

/// One row of input: a sentence tagged with its narrative element
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentenceRecord {
    #[serde(deserialize_with = "deserialize_id")]
    pub campaign_id: String,
    pub element: String,
    pub sentence: String,
}

impl SentenceRecord {
    pub fn new(
        campaign_id: impl Into<String>,
        element: impl Into<String>,
        sentence: impl Into<String>,
    ) -> Self {
        Self {
            campaign_id: campaign_id.into(),
            element: element.into(),
            sentence: sentence.into(),
        }
    }
}

/// Campaign metadata used by the sidebar filters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Campaign {
    #[serde(deserialize_with = "deserialize_id")]
    pub campaign_id: String,
    pub category: String,
    #[serde(default)]
    pub season: Option<Season>,
    /// Reward price in won
    #[serde(default)]
    pub price: Option<u64>,
    #[serde(default)]
    pub project_name: Option<String>,
}

/// Season of a campaign launch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
}

impl Season {
    /// All seasons in dashboard order
    pub fn all() -> [Season; 4] {
        [Self::Summer, Self::Winter, Self::Spring, Self::Autumn]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Spring => "spring",
            Self::Summer => "summer",
            Self::Autumn => "autumn",
            Self::Winter => "winter",
        }
    }

    pub fn korean_name(&self) -> &'static str {
        match self {
            Self::Spring => "봄",
            Self::Summer => "여름",
            Self::Autumn => "가을",
            Self::Winter => "겨울",
        }
    }

    /// Parse an English or Korean season name (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        let name = s.trim().to_lowercase();
        if name == "fall" {
            return Some(Self::Autumn);
        }
        Self::all()
            .into_iter()
            .find(|season| season.as_str() == name || season.korean_name() == name)
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Records plus optional campaign metadata
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub campaigns: Vec<Campaign>,
    pub sentences: Vec<SentenceRecord>,
}

impl Dataset {
    pub fn from_records(sentences: Vec<SentenceRecord>) -> Self {
        Self {
            campaigns: Vec::new(),
            sentences,
        }
    }

    /// Look up metadata for a campaign
    pub fn campaign(&self, campaign_id: &str) -> Option<&Campaign> {
        self.campaigns.iter().find(|c| c.campaign_id == campaign_id)
    }

    /// Distinct element names in first-occurrence order
    pub fn elements(&self) -> Vec<String> {
        let mut seen = Vec::new();
        for record in &self.sentences {
            if !record.element.trim().is_empty() && !seen.contains(&record.element) {
                seen.push(record.element.clone());
            }
        }
        seen
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    /// Parse a JSON document holding either a full dataset or a bare record array
    ///
    /// The shape is picked from the first non-whitespace character, so parse
    /// errors point at the offending field.
    pub fn from_json_str(content: &str) -> Result<Self, serde_json::Error> {
        if content.trim_start().starts_with('[') {
            serde_json::from_str(content).map(Self::from_records)
        } else {
            serde_json::from_str(content)
        }
    }

    /// Parse JSON Lines: one record per non-blank line
    pub fn from_json_lines(content: &str) -> Result<Self, DatasetError> {
        let mut sentences = Vec::new();
        for (idx, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let record = serde_json::from_str(line).map_err(|source| DatasetError::InvalidLine {
                line: idx + 1,
                source,
            })?;
            sentences.push(record);
        }
        Ok(Self::from_records(sentences))
    }

    /// Load a dataset from disk; `.jsonl` files are read as JSON Lines
    pub fn load(path: &Path) -> Result<Self, DatasetError> {
        let content = std::fs::read_to_string(path).map_err(|source| DatasetError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let is_jsonl = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("jsonl"));

        let dataset = if is_jsonl {
            Self::from_json_lines(&content)?
        } else {
            Self::from_json_str(&content).map_err(|source| DatasetError::InvalidJson {
                path: path.to_path_buf(),
                source,
            })?
        };

        tracing::debug!(
            path = %path.display(),
            campaigns = dataset.campaigns.len(),
            sentences = dataset.sentences.len(),
            "Loaded dataset"
        );

        Ok(dataset)
    }
}

/// Campaign identifiers arrive as JSON integers, whole-number floats or strings
fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    struct IdVisitor;

    impl Visitor<'_> for IdVisitor {
        type Value = String;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a campaign id as an integer or a string")
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<String, E> {
            // pandas exports integer ids as 1.0 once a column holds a NaN
            if v.is_finite() && v.fract() == 0.0 && v.abs() < 9.0e15 {
                Ok(format!("{}", v as i64))
            } else {
                Err(E::invalid_value(de::Unexpected::Float(v), &self))
            }
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_string<E: de::Error>(self, v: String) -> Result<String, E> {
            Ok(v)
        }
    }

    deserializer.deserialize_any(IdVisitor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_and_string_ids() {
        let json = r#"[
            {"campaign_id": 1, "element": "A", "sentence": "x"},
            {"campaign_id": "c-2", "element": "B", "sentence": "y"}
        ]"#;
        let dataset = Dataset::from_json_str(json).unwrap();
        assert_eq!(dataset.sentences[0].campaign_id, "1");
        assert_eq!(dataset.sentences[1].campaign_id, "c-2");
        assert!(dataset.campaigns.is_empty());
    }

    #[test]
    fn test_whole_float_ids_are_integers() {
        let json = r#"[{"campaign_id": 1.0, "element": "A", "sentence": "x"}]"#;
        let dataset = Dataset::from_json_str(json).unwrap();
        assert_eq!(dataset.sentences[0].campaign_id, "1");

        let json = r#"[{"campaign_id": 1.5, "element": "A", "sentence": "x"}]"#;
        assert!(Dataset::from_json_str(json).is_err());
    }

    #[test]
    fn test_malformed_record_error_names_field() {
        let json = r#"[{"campaign_id": 1, "element": "A"}]"#;
        let err = Dataset::from_json_str(json).unwrap_err();
        assert!(err.to_string().contains("sentence"));
        assert!(!err.to_string().contains("untagged"));

        let json = r#"{"sentences": [{"campaign_id": true, "element": "A", "sentence": "x"}]}"#;
        let err = Dataset::from_json_str(json).unwrap_err();
        assert!(err.to_string().contains("campaign id"));
        assert_eq!(err.line(), 1);
    }

    #[test]
    fn test_full_dataset_shape() {
        let json = r#"{
            "campaigns": [{"campaign_id": 7, "category": "Coat", "season": "winter", "price": 120000}],
            "sentences": [{"campaign_id": 7, "element": "Brand", "sentence": "hi"}]
        }"#;
        let dataset = Dataset::from_json_str(json).unwrap();
        let campaign = dataset.campaign("7").unwrap();
        assert_eq!(campaign.season, Some(Season::Winter));
        assert_eq!(campaign.price, Some(120_000));
        assert_eq!(campaign.project_name, None);
    }

    #[test]
    fn test_json_lines_reports_line_number() {
        let content = "{\"campaign_id\": 1, \"element\": \"A\", \"sentence\": \"x\"}\n\nnot json\n";
        let err = Dataset::from_json_lines(content).unwrap_err();
        assert!(matches!(err, DatasetError::InvalidLine { line: 3, .. }));
    }

    #[test]
    fn test_elements_first_occurrence() {
        let dataset = Dataset::from_records(vec![
            SentenceRecord::new("1", "B", "b"),
            SentenceRecord::new("1", "A", "a"),
            SentenceRecord::new("2", "B", "b2"),
            SentenceRecord::new("2", " ", "blank"),
        ]);
        assert_eq!(dataset.elements(), vec!["B", "A"]);
    }

    #[test]
    fn test_season_parse() {
        assert_eq!(Season::parse("Summer"), Some(Season::Summer));
        assert_eq!(Season::parse("가을"), Some(Season::Autumn));
        assert_eq!(Season::parse("fall"), Some(Season::Autumn));
        assert_eq!(Season::parse("All"), None);
        for season in Season::all() {
            assert_eq!(Season::parse(season.as_str()), Some(season));
            assert_eq!(Season::parse(season.korean_name()), Some(season));
        }
    }
}
