use crate::types::{
    child_elements,
    element_text,
    parse_url,
    CategoryRef,
};
use once_cell::sync::Lazy;
use scraper::{
    Html,
    Selector,
};
use url::Url;

/// The class of achievement cards that have not been unlocked
const DISABLED_CLASS: &str = "m-disabled";

/// An achievement card
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Achievement {
    /// Whether the player unlocked this achievement
    pub acquired: bool,

    /// The artwork of the achievement
    pub thumbnail: Option<Url>,

    /// The achievement title
    pub title: String,

    /// How to unlock the achievement
    pub description: String,

    /// The name of the category this achievement was listed under
    pub category: String,
}

/// List the achievement categories in the category dropdown, in page order.
pub fn discover_categories(html: &Html) -> Vec<CategoryRef> {
    static OPTION_SELECTOR: Lazy<Selector> = Lazy::new(|| {
        Selector::parse(r#"select[data-group-id="achievements"] option"#)
            .expect("invalid achievement option selector")
    });

    html.select(&OPTION_SELECTOR)
        .filter_map(CategoryRef::from_option)
        .collect()
}

/// Read the achievement cards of a discovered category.
pub fn extract_achievements(html: &Html, category: &CategoryRef) -> Vec<Achievement> {
    static PANEL_SELECTOR: Lazy<Selector> = Lazy::new(|| {
        Selector::parse("[data-category-id]").expect("invalid category panel selector")
    });
    static CARD_SELECTOR: Lazy<Selector> = Lazy::new(|| {
        Selector::parse(".achievement-card").expect("invalid achievement card selector")
    });
    static THUMBNAIL_SELECTOR: Lazy<Selector> = Lazy::new(|| {
        Selector::parse(".media-card-fill").expect("invalid thumbnail selector")
    });
    static TITLE_SELECTOR: Lazy<Selector> =
        Lazy::new(|| Selector::parse(".tooltip-tip > .h5").expect("invalid title selector"));
    static DESCRIPTION_SELECTOR: Lazy<Selector> = Lazy::new(|| {
        Selector::parse(".tooltip-tip > .h6").expect("invalid description selector")
    });

    html.select(&PANEL_SELECTOR)
        .filter(|panel| category.is_panel(*panel))
        .flat_map(|panel| child_elements(panel, "ul"))
        .flat_map(|list| child_elements(list, "div"))
        .map(|container| {
            // A container without a card is never acquired
            let acquired = container
                .select(&CARD_SELECTOR)
                .next()
                .map_or(false, |card| {
                    !card.value().classes().any(|class| class == DISABLED_CLASS)
                });
            let thumbnail = container
                .select(&THUMBNAIL_SELECTOR)
                .next()
                .and_then(|element| element.value().attr("src"))
                .and_then(parse_url);
            let title = container
                .select(&TITLE_SELECTOR)
                .next()
                .map(element_text)
                .unwrap_or_default();
            let description = container
                .select(&DESCRIPTION_SELECTOR)
                .next()
                .map(element_text)
                .unwrap_or_default();

            Achievement {
                acquired,
                thumbnail,
                title,
                description,
                category: category.name.clone(),
            }
        })
        .collect()
}

/// Read every achievement of every category, in page order.
pub fn parse_achievements(html: &Html) -> Vec<Achievement> {
    discover_categories(html)
        .iter()
        .flat_map(|category| extract_achievements(html, category))
        .collect()
}
