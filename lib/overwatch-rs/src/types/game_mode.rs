use crate::{
    text::{
        cast,
        sanitize,
        StatValue,
    },
    types::{
        element_text,
        CategoryRef,
    },
};
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use scraper::{
    ElementRef,
    Html,
    Selector,
};

/// The hero key of the aggregate over all heroes
pub const ALL_HEROES: &str = "all_heroes";

/// Stats keyed by their sanitized label
pub type StatMap = IndexMap<String, StatValue>;

/// A game mode with its own stats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    Competitive,
    Quickplay,
}

impl GameMode {
    /// All supported game modes
    pub const ALL: [GameMode; 2] = [GameMode::Competitive, GameMode::Quickplay];

    /// Get the id of the page section of this game mode
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Competitive => "competitive",
            Self::Quickplay => "quickplay",
        }
    }

    /// The attribute of the masthead hero image naming the mastered hero of this game mode
    fn mastering_hero_attr(self) -> &'static str {
        match self {
            Self::Competitive => "data-hero-competitive",
            Self::Quickplay => "data-hero-quickplay",
        }
    }

    fn selectors(self) -> &'static ModeSelectors {
        static COMPETITIVE: Lazy<ModeSelectors> =
            Lazy::new(|| ModeSelectors::new(GameMode::Competitive));
        static QUICKPLAY: Lazy<ModeSelectors> =
            Lazy::new(|| ModeSelectors::new(GameMode::Quickplay));

        match self {
            Self::Competitive => &*COMPETITIVE,
            Self::Quickplay => &*QUICKPLAY,
        }
    }
}

impl std::fmt::Display for GameMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Selectors scoped to the section of one game mode
struct ModeSelectors {
    highlight_cards: Selector,
    hero_options: Selector,
    category_panels: Selector,
}

impl ModeSelectors {
    fn new(mode: GameMode) -> Self {
        let id = mode.as_str();

        Self {
            highlight_cards: Selector::parse(&format!(
                "#{id} > section.highlights-section div.card-content"
            ))
            .expect("invalid highlight card selector"),
            hero_options: Selector::parse(&format!("#{id} > .career-stats-section option"))
                .expect("invalid hero option selector"),
            category_panels: Selector::parse(&format!("#{id} [data-category-id]"))
                .expect("invalid category panel selector"),
        }
    }
}

/// The stats of one game mode
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameModeStats {
    /// Stats over the whole game mode.
    ///
    /// Includes the featured stats and the stats of the all heroes aggregate.
    pub global: StatMap,

    /// The hero this player is currently mastering
    pub mastering_hero: Option<String>,

    /// Stats for each hero, keyed by the sanitized hero name
    pub heroes: IndexMap<String, StatMap>,
}

impl GameModeStats {
    /// Read the stats of a game mode.
    ///
    /// If `overall_only` is set, only the all heroes aggregate is read.
    /// The aggregate is merged into `global` and is never a key of `heroes`.
    pub fn from_html(html: &Html, mode: GameMode, overall_only: bool) -> Self {
        let (mut global, mastering_hero) = parse_featured_stats(html, mode);
        let mut heroes = parse_hero_stats(html, mode, overall_only);

        if let Some(all_heroes) = heroes.shift_remove(ALL_HEROES) {
            global.extend(all_heroes);
        }

        Self {
            global,
            mastering_hero,
            heroes,
        }
    }
}

/// Read the featured stat cards of a game mode and the hero being mastered in it.
pub fn parse_featured_stats(html: &Html, mode: GameMode) -> (StatMap, Option<String>) {
    static CARD_COPY_SELECTOR: Lazy<Selector> =
        Lazy::new(|| Selector::parse(".card-copy").expect("invalid card copy selector"));
    static CARD_HEADING_SELECTOR: Lazy<Selector> =
        Lazy::new(|| Selector::parse(".card-heading").expect("invalid card heading selector"));
    static MASTHEAD_HERO_SELECTOR: Lazy<Selector> = Lazy::new(|| {
        Selector::parse("#overview-section > .masthead-hero-image")
            .expect("invalid masthead hero selector")
    });

    let mut stats = StatMap::new();
    for card in html.select(&mode.selectors().highlight_cards) {
        let label = card.select(&CARD_COPY_SELECTOR).next().map(element_text);
        let value = card.select(&CARD_HEADING_SELECTOR).next().map(element_text);

        if let (Some(label), Some(value)) = (label, value) {
            stats.insert(sanitize(&label), cast(&value));
        }
    }

    let mastering_hero = html
        .select(&MASTHEAD_HERO_SELECTOR)
        .next()
        .and_then(|element| element.value().attr(mode.mastering_hero_attr()))
        .map(str::to_string);

    (stats, mastering_hero)
}

/// List the heroes in the hero dropdown of a game mode, in page order.
///
/// The first entry is usually the all heroes aggregate.
/// At most `limit` heroes are returned, if given.
pub fn discover_heroes(html: &Html, mode: GameMode, limit: Option<usize>) -> Vec<CategoryRef> {
    let heroes = html
        .select(&mode.selectors().hero_options)
        .filter_map(CategoryRef::from_option);

    match limit {
        Some(limit) => heroes.take(limit).collect(),
        None => heroes.collect(),
    }
}

/// Read the stat table of a discovered hero.
pub fn extract_hero_stats(html: &Html, mode: GameMode, hero: &CategoryRef) -> StatMap {
    static ROW_SELECTOR: Lazy<Selector> =
        Lazy::new(|| Selector::parse("tbody > tr").expect("invalid row selector"));

    let mut stats = StatMap::new();
    let panels = html
        .select(&mode.selectors().category_panels)
        .filter(|panel| hero.is_panel(*panel));
    for panel in panels {
        for row in panel.select(&ROW_SELECTOR) {
            let mut cells = row.children().filter_map(ElementRef::wrap);

            if let (Some(key), Some(value)) = (cells.next(), cells.next()) {
                stats.insert(sanitize(&element_text(key)), cast(&element_text(value)));
            }
        }
    }

    stats
}

/// Read the stats of each hero of a game mode, keyed by hero name.
///
/// If `overall_only` is set, only the first hero is read.
pub fn parse_hero_stats(
    html: &Html,
    mode: GameMode,
    overall_only: bool,
) -> IndexMap<String, StatMap> {
    let limit = if overall_only { Some(1) } else { None };

    discover_heroes(html, mode, limit)
        .into_iter()
        .map(|hero| {
            let stats = extract_hero_stats(html, mode, &hero);
            (hero.name, stats)
        })
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;

    const RANKED: &str = include_str!("../../test_data/ranked.html");

    #[test]
    fn featured_stats() {
        let html = Html::parse_document(RANKED);
        let (stats, mastering_hero) = parse_featured_stats(&html, GameMode::Quickplay);
        dbg!(&stats);

        assert_eq!(stats.get("eliminations_avg"), Some(&StatValue::Float(18.45)));
        assert_eq!(stats.get("games_won"), Some(&StatValue::Integer(1234)));
        assert_eq!(
            stats.get("time_played"),
            Some(&StatValue::Duration(90 * 3_600_000))
        );
        assert_eq!(mastering_hero.as_deref(), Some("widowmaker"));

        let (_, mastering_hero) = parse_featured_stats(&html, GameMode::Competitive);
        assert_eq!(mastering_hero.as_deref(), Some("mccree"));
    }

    #[test]
    fn discover_then_extract() {
        let html = Html::parse_document(RANKED);
        let discovered = discover_heroes(&html, GameMode::Quickplay, None);
        let names: Vec<_> = discovered.iter().map(|hero| hero.name.as_str()).collect();
        assert_eq!(names, ["all_heroes", "widowmaker", "soldier:_76"]);

        let heroes = parse_hero_stats(&html, GameMode::Quickplay, false);
        assert!(heroes.keys().all(|name| names.contains(&name.as_str())));

        let widowmaker = &heroes["widowmaker"];
        assert_eq!(
            widowmaker.get("scoped_accuracy"),
            Some(&StatValue::Integer(41))
        );
        assert_eq!(
            widowmaker.get("eliminations_most_in_game"),
            Some(&StatValue::Integer(38))
        );
    }

    #[test]
    fn overall_only_is_subset() {
        let html = Html::parse_document(RANKED);
        let all = parse_hero_stats(&html, GameMode::Quickplay, false);
        let overall = parse_hero_stats(&html, GameMode::Quickplay, true);

        assert_eq!(overall.len(), 1);
        for (name, stats) in overall.iter() {
            assert_eq!(all.get(name), Some(stats));
        }
    }

    #[test]
    fn modes_are_separate() {
        let html = Html::parse_document(RANKED);
        let competitive = parse_hero_stats(&html, GameMode::Competitive, false);
        let names: Vec<_> = competitive.keys().map(String::as_str).collect();
        assert_eq!(names, ["all_heroes", "mccree"]);
        assert_eq!(
            competitive["all_heroes"].get("games_won"),
            Some(&StatValue::Integer(87))
        );
    }

    #[test]
    fn all_heroes_is_folded_into_global() {
        let html = Html::parse_document(RANKED);
        let stats = GameModeStats::from_html(&html, GameMode::Quickplay, false);

        assert!(!stats.heroes.contains_key(ALL_HEROES));
        assert_eq!(stats.heroes.len(), 2);
        assert_eq!(
            stats.global.get("damage_done"),
            Some(&StatValue::Integer(1_520_331))
        );
        // The aggregate table wins over the featured card.
        assert_eq!(
            stats.global.get("games_won"),
            Some(&StatValue::Integer(1240))
        );
        assert_eq!(stats.mastering_hero.as_deref(), Some("widowmaker"));

        let overall = GameModeStats::from_html(&html, GameMode::Quickplay, true);
        assert!(overall.heroes.is_empty());
        assert_eq!(overall.global, stats.global);
    }

    #[test]
    fn missing_section() {
        let html = Html::parse_document("<html><body></body></html>");
        let stats = GameModeStats::from_html(&html, GameMode::Competitive, false);

        assert_eq!(stats, GameModeStats::default());
    }
}
