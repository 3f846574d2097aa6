pub mod achievement;
pub mod game_mode;
pub mod platform;
pub mod profile;
pub mod report;
pub mod search_result;

pub use self::{
    achievement::Achievement,
    game_mode::{
        GameMode,
        GameModeStats,
        StatMap,
    },
    platform::Platform,
    profile::{
        Profile,
        Season,
    },
    report::ProfileReport,
    search_result::{
        RawSearchResult,
        SearchResult,
    },
};
use crate::text::sanitize;
use scraper::ElementRef;
use std::borrow::Cow;
use url::Url;

/// The site that relative links on the career page point to.
const SITE_ORIGIN: &str = "https://playoverwatch.com";

/// A dropdown option that links a name to the panel holding its data.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CategoryRef {
    /// The sanitized name of the option
    pub name: String,

    /// The value of the `data-category-id` of the matching panel
    pub value: String,
}

impl CategoryRef {
    /// Read a category from an `option` element.
    ///
    /// Returns `None` if the option is missing its `option-id` or `value`.
    pub fn from_option(element: ElementRef<'_>) -> Option<Self> {
        let element = element.value();
        let name = element.attr("option-id")?;
        let value = element.attr("value")?;

        Some(Self {
            name: sanitize(&name.to_lowercase()),
            value: value.to_string(),
        })
    }

    /// Check if an element is the data panel of this category
    pub(crate) fn is_panel(&self, element: ElementRef<'_>) -> bool {
        element.value().attr("data-category-id") == Some(self.value.as_str())
    }
}

/// Get the trimmed text of an element and its children.
pub(crate) fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Iterate over the direct children of an element with the given tag name.
pub(crate) fn child_elements<'a>(
    element: ElementRef<'a>,
    name: &'a str,
) -> impl Iterator<Item = ElementRef<'a>> + 'a {
    element
        .children()
        .filter_map(ElementRef::wrap)
        .filter(move |child| child.value().name() == name)
}

/// Parse a link from the page, fixing up protocol-relative and site-relative links.
pub(crate) fn parse_url(link: &str) -> Option<Url> {
    let link = link.trim();
    if link.is_empty() {
        return None;
    }

    Url::parse(&fixup_url(link)).ok()
}

/// Fixup a url for parsing
fn fixup_url(link: &str) -> Cow<'_, str> {
    let mut link = Cow::Borrowed(link);

    // Fixup no protocol
    if link.starts_with("//") {
        link = format!("https:{}", link).into();
    }

    // Fixup relative urls
    if link.starts_with('/') {
        link = format!("{}{}", SITE_ORIGIN, link).into();
    }

    link
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn fixup_links() {
        assert_eq!(
            parse_url("//blzgdapipro-a.akamaihd.net/game/unlocks/0x02500000000002F7.png")
                .expect("invalid url")
                .as_str(),
            "https://blzgdapipro-a.akamaihd.net/game/unlocks/0x02500000000002F7.png"
        );
        assert_eq!(
            parse_url("/en-us/career/pc/us/Tag-1234")
                .expect("invalid url")
                .as_str(),
            "https://playoverwatch.com/en-us/career/pc/us/Tag-1234"
        );
        assert!(parse_url("").is_none());
        assert!(parse_url("not a url").is_none());
    }
}
