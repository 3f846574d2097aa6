//! Static reference data used to give meaning to badge images.

use crate::types::Season;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

/// Competitive tier labels for each season, indexed by the rank bracket of the badge.
///
/// Seasons that did not have tiers have an empty list.
pub const RANKS: &[(u32, &[&str])] = &[
    (1, &[]),
    (
        2,
        &[
            "Bronze",
            "Silver",
            "Gold",
            "Platinum",
            "Diamond",
            "Master",
            "Grandmaster",
            "Top500",
        ],
    ),
];

/// Player level border image keys and the tier they belong to.
///
/// This is a placeholder registry covering 30 border keys, not the full set used by the site.
/// Borders missing from it resolve to an empty tier.
pub const TIERS: &[(&str, &str)] = &[
    ("0x0250000000000918", "Bronze"),
    ("0x0250000000000919", "Bronze"),
    ("0x025000000000091A", "Bronze"),
    ("0x025000000000091B", "Bronze"),
    ("0x025000000000091C", "Bronze"),
    ("0x025000000000091D", "Bronze"),
    ("0x025000000000091E", "Silver"),
    ("0x025000000000091F", "Silver"),
    ("0x0250000000000920", "Silver"),
    ("0x0250000000000921", "Silver"),
    ("0x0250000000000922", "Silver"),
    ("0x0250000000000923", "Silver"),
    ("0x0250000000000924", "Gold"),
    ("0x0250000000000925", "Gold"),
    ("0x0250000000000926", "Gold"),
    ("0x0250000000000927", "Gold"),
    ("0x0250000000000928", "Gold"),
    ("0x0250000000000929", "Gold"),
    ("0x025000000000092A", "Platinum"),
    ("0x025000000000092B", "Platinum"),
    ("0x025000000000092C", "Platinum"),
    ("0x025000000000092D", "Platinum"),
    ("0x025000000000092E", "Platinum"),
    ("0x025000000000092F", "Platinum"),
    ("0x0250000000000930", "Diamond"),
    ("0x0250000000000931", "Diamond"),
    ("0x0250000000000932", "Diamond"),
    ("0x0250000000000933", "Diamond"),
    ("0x0250000000000934", "Diamond"),
    ("0x0250000000000935", "Diamond"),
];

static TIER_MAP: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| TIERS.iter().copied().collect());

static SEASON_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"season-(\d+)/rank-(\d+)").expect("invalid season regex"));

static BORDER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"playerlevelrewards/([^/()]*)_Border\.png").expect("invalid border regex")
});

/// Read the season id and rank bracket out of a competitive rank badge url.
///
/// Returns `None` if the url does not look like `.../season-<N>/rank-<M>...`.
pub fn parse_season(url: &str) -> Option<Season> {
    let captures = SEASON_REGEX.captures(url)?;
    let id = captures.get(1)?.as_str().parse().ok()?;
    let rank = captures.get(2)?.as_str().parse().ok()?;

    Some(Season { id, rank })
}

/// Look up the tier label of a season's rank bracket.
///
/// Returns `None` for seasons missing from [`RANKS`] and for brackets past the end of a season's list.
pub fn ranking_label(season: Season) -> Option<&'static str> {
    let (_, labels) = RANKS.iter().find(|(id, _)| *id == season.id)?;
    let index = usize::try_from(season.rank).ok()?;
    labels.get(index).copied()
}

/// Get the tier of a player level border, from its image url or a css `style` containing it.
///
/// Returns an empty string if there is no border image or its key is unknown.
pub fn parse_tiers(border: &str) -> String {
    BORDER_REGEX
        .captures(border)
        .and_then(|captures| captures.get(1))
        .and_then(|key| TIER_MAP.get(key.as_str()))
        .map(|tier| tier.to_string())
        .unwrap_or_default()
}
