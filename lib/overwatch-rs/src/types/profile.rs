use crate::{
    reference::{
        parse_season,
        parse_tiers,
        ranking_label,
    },
    text::parse_leading_int,
    types::{
        element_text,
        parse_url,
    },
};
use once_cell::sync::Lazy;
use scraper::{
    Html,
    Selector,
};
use url::Url;

/// A competitive season and the rank bracket reached in it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
pub struct Season {
    /// The season id
    pub id: u32,

    /// The rank bracket of the badge
    pub rank: u32,
}

/// The masthead of a career profile
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// The player nickname
    pub nick: String,

    /// The player level.
    ///
    /// `None` if it could not be read.
    pub level: Option<u32>,

    /// The portrait of the player
    pub avatar: Option<Url>,

    /// The competitive skill rating.
    ///
    /// `None` if the player has not placed this season.
    pub rank: Option<u32>,

    /// The tier of the player level border
    pub tier: String,

    /// The competitive rank badge
    pub rank_picture: Option<Url>,

    /// The season of the competitive rank badge
    pub season: Option<Season>,

    /// The tier label of the competitive rank.
    ///
    /// Empty unless the season is in the reference tables.
    pub ranking: String,

    /// The platform label
    pub platform: String,

    /// The url the profile was loaded from
    pub url: String,
}

impl Profile {
    /// Read the masthead of a career page.
    ///
    /// Missing fields are left empty.
    pub fn from_html(html: &Html) -> Self {
        static NICK_SELECTOR: Lazy<Selector> = Lazy::new(|| {
            Selector::parse(".header-masthead").expect("invalid nick selector")
        });
        static LEVEL_SELECTOR: Lazy<Selector> = Lazy::new(|| {
            Selector::parse("div.player-level div").expect("invalid level selector")
        });
        static PLAYER_LEVEL_SELECTOR: Lazy<Selector> = Lazy::new(|| {
            Selector::parse(".player-level").expect("invalid player level selector")
        });
        static AVATAR_SELECTOR: Lazy<Selector> = Lazy::new(|| {
            Selector::parse(".player-portrait").expect("invalid avatar selector")
        });
        static RANK_SELECTOR: Lazy<Selector> = Lazy::new(|| {
            Selector::parse("div.competitive-rank > div").expect("invalid rank selector")
        });
        static RANK_PICTURE_SELECTOR: Lazy<Selector> = Lazy::new(|| {
            Selector::parse("div.competitive-rank > img").expect("invalid rank picture selector")
        });
        static PLATFORM_SELECTOR: Lazy<Selector> = Lazy::new(|| {
            Selector::parse("#profile-platforms > a").expect("invalid platform selector")
        });

        let first_text = |selector: &Selector| html.select(selector).next().map(element_text);
        let first_attr = |selector: &Selector, attr: &str| {
            html.select(selector)
                .next()
                .and_then(|element| element.value().attr(attr))
                .map(str::to_string)
        };

        let nick = first_text(&NICK_SELECTOR).unwrap_or_default();
        let level = first_text(&LEVEL_SELECTOR).and_then(|text| parse_u32(&text));
        let avatar = first_attr(&AVATAR_SELECTOR, "src").and_then(|src| parse_url(&src));
        let rank = first_text(&RANK_SELECTOR).and_then(|text| parse_u32(&text));
        let tier = first_attr(&PLAYER_LEVEL_SELECTOR, "style")
            .map(|style| parse_tiers(&style))
            .unwrap_or_default();
        let platform = first_text(&PLATFORM_SELECTOR).unwrap_or_default();

        let mut profile = Self {
            nick,
            level,
            avatar,
            rank,
            tier,
            platform,
            ..Self::default()
        };

        // Only ranked players have a badge
        if profile.rank.is_some() {
            let rank_picture_src = first_attr(&RANK_PICTURE_SELECTOR, "src");

            profile.season = rank_picture_src.as_deref().and_then(parse_season);
            profile.rank_picture = rank_picture_src.as_deref().and_then(parse_url);
            profile.ranking = profile
                .season
                .and_then(ranking_label)
                .unwrap_or_default()
                .to_string();
        }

        profile
    }

    /// Whether the player has a competitive rank this season
    pub fn is_ranked(&self) -> bool {
        self.rank.is_some()
    }
}

fn parse_u32(text: &str) -> Option<u32> {
    parse_leading_int(text).and_then(|n| u32::try_from(n).ok())
}

#[cfg(test)]
mod test {
    use super::*;

    const RANKED: &str = include_str!("../../test_data/ranked.html");
    const UNRANKED: &str = include_str!("../../test_data/unranked.html");

    #[test]
    fn parse_ranked_profile() {
        let html = Html::parse_document(RANKED);
        let profile = Profile::from_html(&html);
        dbg!(&profile);

        assert_eq!(profile.nick, "Kephrii");
        assert_eq!(profile.level, Some(87));
        assert_eq!(profile.rank, Some(3512));
        assert_eq!(profile.tier, "Silver");
        assert_eq!(profile.platform, "PC");
        assert_eq!(profile.season, Some(Season { id: 2, rank: 5 }));
        assert_eq!(profile.ranking, "Master");
        assert_eq!(
            profile.avatar.as_ref().map(Url::as_str),
            Some("https://blzgdapipro-a.akamaihd.net/game/unlocks/0x0250000000000EF7.png")
        );
        assert!(profile.rank_picture.is_some());
        assert!(profile.is_ranked());
    }

    #[test]
    fn parse_unranked_profile() {
        let html = Html::parse_document(UNRANKED);
        let profile = Profile::from_html(&html);
        dbg!(&profile);

        assert_eq!(profile.nick, "Rookie");
        assert_eq!(profile.level, Some(12));
        assert_eq!(profile.rank, None);
        assert_eq!(profile.season, None);
        assert_eq!(profile.rank_picture, None);
        assert_eq!(profile.ranking, "");
        assert_eq!(profile.tier, "");
        assert_eq!(profile.platform, "Xbox");
    }

    #[test]
    fn parse_empty_document() {
        let html = Html::parse_document("<html><body></body></html>");
        let profile = Profile::from_html(&html);

        assert_eq!(profile, Profile::default());
    }

    #[test]
    fn unknown_season_has_no_ranking() {
        let html = Html::parse_document(
            r#"<div class="competitive-rank"><img src="https://example.com/season-7/rank-3.png"><div>2500</div></div>"#,
        );
        let profile = Profile::from_html(&html);

        assert_eq!(profile.rank, Some(2500));
        assert_eq!(profile.season, Some(Season { id: 7, rank: 3 }));
        assert_eq!(profile.ranking, "");
    }
}
