use crate::types::{
    achievement::parse_achievements,
    Achievement,
    GameMode,
    GameModeStats,
    Profile,
};
use scraper::Html;

/// Everything read from a career page
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ProfileReport {
    /// The player masthead
    pub profile: Profile,

    /// Competitive stats
    pub competitive: GameModeStats,

    /// Quickplay stats
    pub quickplay: GameModeStats,

    /// Achievements of all categories
    pub achievements: Vec<Achievement>,
}

impl ProfileReport {
    /// Read a career page.
    ///
    /// `url` is the url the page was loaded from.
    /// If `overall_only` is set, per-hero stats are skipped and only the all heroes aggregate is read.
    pub fn from_html(html: &Html, url: &str, overall_only: bool) -> Self {
        let mut profile = Profile::from_html(html);
        profile.url = url.to_string();

        Self {
            profile,
            competitive: GameModeStats::from_html(html, GameMode::Competitive, overall_only),
            quickplay: GameModeStats::from_html(html, GameMode::Quickplay, overall_only),
            achievements: parse_achievements(html),
        }
    }

    /// Get the stats of a game mode
    pub fn game_mode(&self, mode: GameMode) -> &GameModeStats {
        match mode {
            GameMode::Competitive => &self.competitive,
            GameMode::Quickplay => &self.quickplay,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const RANKED: &str = include_str!("../../test_data/ranked.html");
    const UNRANKED: &str = include_str!("../../test_data/unranked.html");
    const URL: &str = "https://playoverwatch.com/en-us/career/xbl/Rookie";

    #[test]
    fn unranked_report() {
        let html = Html::parse_document(UNRANKED);
        let report = ProfileReport::from_html(&html, URL, false);
        dbg!(&report);

        assert_eq!(report.profile.rank, None);
        assert_eq!(report.profile.url, URL);

        let heroes: Vec<_> = report.quickplay.heroes.keys().map(String::as_str).collect();
        assert_eq!(heroes, ["reinhardt", "mercy"]);
        assert!(!report.quickplay.global.is_empty());

        assert!(report.competitive.heroes.is_empty());
        assert!(report.achievements.is_empty());
    }

    #[test]
    fn ranked_report() {
        let html = Html::parse_document(RANKED);
        let report = ProfileReport::from_html(&html, URL, false);

        assert_eq!(report.profile.ranking, "Master");
        for mode in GameMode::ALL {
            assert!(!report.game_mode(mode).heroes.contains_key("all_heroes"));
        }
        assert_eq!(report.competitive.heroes.len(), 1);
        assert_eq!(report.quickplay.heroes.len(), 2);
        assert_eq!(report.achievements.len(), 3);
    }

    #[test]
    fn overall_only_report() {
        let html = Html::parse_document(RANKED);
        let full = ProfileReport::from_html(&html, URL, false);
        let overall = ProfileReport::from_html(&html, URL, true);

        assert!(overall.quickplay.heroes.is_empty());
        assert!(overall.competitive.heroes.is_empty());
        assert_eq!(overall.quickplay.global, full.quickplay.global);
        assert_eq!(overall.profile, full.profile);
        assert_eq!(overall.achievements, full.achievements);
    }

    #[test]
    fn report_json() {
        let html = Html::parse_document(UNRANKED);
        let report = ProfileReport::from_html(&html, URL, false);
        let json = serde_json::to_value(&report).expect("failed to serialize");

        assert!(json["profile"]["rank"].is_null());
        assert!(json["profile"]["rankPicture"].is_null());
        assert_eq!(json["quickplay"]["heroes"]["mercy"]["healing_done"], 5321);
        assert_eq!(json["achievements"].as_array().map(Vec::len), Some(0));
    }
}
