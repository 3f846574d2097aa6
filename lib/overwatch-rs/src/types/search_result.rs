use std::collections::HashMap;

/// A player record as sent by the search endpoint
#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct RawSearchResult {
    /// The career page path, like `/pc/us/Tag-1234`
    #[serde(rename = "careerLink", default)]
    pub career_link: String,

    /// The player level, with the level tier in the hundreds.
    ///
    /// Kept as sent, so one malformed record does not fail the whole response.
    #[serde(default)]
    pub level: Option<serde_json::Value>,

    #[serde(flatten)]
    pub unknown: HashMap<String, serde_json::Value>,
}

/// A normalized search result
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct SearchResult {
    /// The career page path
    #[serde(rename = "careerLink")]
    pub career_link: String,

    /// The platform segment of the career link
    pub platform: String,

    /// The region segment of the career link.
    ///
    /// Empty if the link has none.
    pub region: String,

    /// The level tier, the hundreds of the raw level.
    ///
    /// `None` if the raw level is missing or not a whole number.
    pub tier: Option<u32>,

    /// The level within the tier.
    ///
    /// `None` if the raw level is missing or not a whole number.
    pub level: Option<u32>,

    /// All other fields of the record
    #[serde(flatten)]
    pub unknown: HashMap<String, serde_json::Value>,
}

impl SearchResult {
    /// Normalize a raw search record.
    pub fn from_raw(raw: RawSearchResult) -> Self {
        let RawSearchResult {
            career_link,
            level,
            mut unknown,
        } = raw;

        let mut segments = career_link.split('/').skip(1);
        let platform = segments.next().unwrap_or_default().to_string();
        let region = segments.next().unwrap_or_default().to_string();

        // Derived fields replace any raw ones
        for key in ["platform", "region", "tier"] {
            unknown.remove(key);
        }

        let level = level.as_ref().and_then(parse_level);

        Self {
            platform,
            region,
            tier: level.map(|level| level / 100),
            level: level.map(|level| level % 100),
            career_link,
            unknown,
        }
    }
}

/// Read a raw level, accepting whole numbers sent as floats or strings.
fn parse_level(value: &serde_json::Value) -> Option<u32> {
    match value {
        serde_json::Value::Number(n) => n
            .as_u64()
            .or_else(|| {
                n.as_f64()
                    .filter(|n| n.is_finite() && *n >= 0.0 && n.fract() == 0.0)
                    .map(|n| n as u64)
            })
            .and_then(|n| u32::try_from(n).ok()),
        serde_json::Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

impl From<RawSearchResult> for SearchResult {
    fn from(raw: RawSearchResult) -> Self {
        Self::from_raw(raw)
    }
}

/// Normalize every record of a search response
pub fn normalize_search_results(raw: Vec<RawSearchResult>) -> Vec<SearchResult> {
    raw.into_iter().map(SearchResult::from_raw).collect()
}

#[cfg(test)]
mod test {
    use super::*;

    const SEARCH: &str = include_str!("../../test_data/search.json");

    #[test]
    fn normalize_record() {
        let raw = RawSearchResult {
            career_link: "/pc/us/tag".to_string(),
            level: Some(serde_json::json!(312)),
            unknown: HashMap::new(),
        };
        let result = SearchResult::from_raw(raw);

        assert_eq!(result.platform, "pc");
        assert_eq!(result.region, "us");
        assert_eq!(result.tier, Some(3));
        assert_eq!(result.level, Some(12));
    }

    #[test]
    fn malformed_level_keeps_record() {
        let raw: Vec<RawSearchResult> = serde_json::from_str(
            r#"[
                {"careerLink": "/pc/us/a", "level": 3},
                {"careerLink": "/pc/us/b"},
                {"careerLink": "/pc/us/c", "level": 312.0},
                {"careerLink": "/pc/us/d", "level": -5},
                {"careerLink": "/pc/us/e", "level": "abc"}
            ]"#,
        )
        .expect("invalid json");
        let results = normalize_search_results(raw);

        assert_eq!(results.len(), 5);
        assert_eq!(results[0].tier, Some(0));
        assert_eq!(results[0].level, Some(3));
        assert_eq!(results[1].platform, "pc");
        assert_eq!(results[1].tier, None);
        assert_eq!(results[1].level, None);
        assert_eq!(results[2].tier, Some(3));
        assert_eq!(results[2].level, Some(12));
        assert_eq!(results[3].level, None);
        assert_eq!(results[4].tier, None);

        let json = serde_json::to_value(&results[1]).expect("failed to serialize");
        assert!(json["tier"].is_null());
        assert!(json["level"].is_null());
    }

    #[test]
    fn normalize_response() {
        let raw: Vec<RawSearchResult> = serde_json::from_str(SEARCH).expect("invalid json");
        let results = normalize_search_results(raw);
        dbg!(&results);

        assert_eq!(results.len(), 2);

        assert_eq!(results[0].platform, "pc");
        assert_eq!(results[0].region, "eu");
        assert_eq!(results[0].tier, Some(0));
        assert_eq!(results[0].level, Some(87));
        assert_eq!(
            results[0].unknown.get("battleTag").and_then(|v| v.as_str()),
            Some("Kephrii#1234")
        );

        assert_eq!(results[1].platform, "psn");
        assert_eq!(results[1].region, "Kephrii");
        assert_eq!(results[1].tier, Some(10));
        assert_eq!(results[1].level, Some(0));
    }

    #[test]
    fn serialize_result() {
        let raw: Vec<RawSearchResult> = serde_json::from_str(SEARCH).expect("invalid json");
        let results = normalize_search_results(raw);
        let json = serde_json::to_value(&results[0]).expect("failed to serialize");

        assert_eq!(json["platform"], "pc");
        assert_eq!(json["careerLink"], "/pc/eu/Kephrii-1234");
        assert_eq!(json["battleTag"], "Kephrii#1234");
        assert_eq!(json["level"], 87);
    }
}
