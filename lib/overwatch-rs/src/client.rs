use crate::{
    types::search_result::normalize_search_results,
    Error,
    OwResult,
    Platform,
    ProfileReport,
    RawSearchResult,
    SearchResult,
};
use scraper::Html;
use url::Url;

/// The default base of career page urls
pub const DEFAULT_PROFILE_BASE_URL: &str = "https://playoverwatch.com/en-us/career/";

/// The default base of player search urls
pub const DEFAULT_SEARCH_BASE_URL: &str =
    "https://playoverwatch.com/en-us/search/account-by-name/";

/// Build the url of a career page.
///
/// The region is only used, and required, for the pc platform.
/// A `#` in a battle tag is replaced with a `-`.
pub fn profile_url(
    base: &Url,
    platform: Platform,
    region: Option<&str>,
    tag: &str,
) -> OwResult<Url> {
    let region = if platform.needs_region() {
        Some(region.ok_or(Error::MissingRegion)?)
    } else {
        None
    };
    let tag = tag.replace('#', "-");

    let mut url = base.clone();
    {
        let mut segments = url
            .path_segments_mut()
            .map_err(|_| Error::CannotBeABase(base.clone()))?;
        segments.pop_if_empty().push(platform.as_str());
        if let Some(region) = region {
            segments.push(region);
        }
        segments.push(&tag);
    }

    Ok(url)
}

/// Build the url of a player search
pub fn search_url(base: &Url, nickname: &str) -> OwResult<Url> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| Error::CannotBeABase(base.clone()))?
        .pop_if_empty()
        .push(nickname);

    Ok(url)
}

/// Overwatch career Client
#[derive(Debug, Clone)]
pub struct Client {
    client: reqwest::Client,

    profile_base_url: Url,
    search_base_url: Url,
}

impl Client {
    /// Make a new client
    pub fn new() -> Self {
        Self::with_base_urls(
            reqwest::Client::new(),
            Url::parse(DEFAULT_PROFILE_BASE_URL).expect("invalid default profile url"),
            Url::parse(DEFAULT_SEARCH_BASE_URL).expect("invalid default search url"),
        )
    }

    /// Make a new client from a reqwest client and the bases of the career page and search urls.
    pub fn with_base_urls(
        client: reqwest::Client,
        profile_base_url: Url,
        search_base_url: Url,
    ) -> Self {
        Self {
            client,
            profile_base_url,
            search_base_url,
        }
    }

    /// Send a get request, failing on non-success statuses.
    async fn get(&self, url: &str) -> OwResult<reqwest::Response> {
        let res = self.client.get(url).send().await?;
        let status = res.status();
        if !status.is_success() {
            return Err(Error::from_status(status));
        }

        Ok(res)
    }

    /// Get and read a career page.
    ///
    /// If `overall_only` is set, per-hero stats are skipped.
    pub async fn get_all(
        &self,
        platform: Platform,
        region: Option<&str>,
        tag: &str,
        overall_only: bool,
    ) -> OwResult<ProfileReport> {
        let url = profile_url(&self.profile_base_url, platform, region, tag)?;
        let text = self.get(url.as_str()).await?.text().await?;

        let report = tokio::task::spawn_blocking(move || {
            let html = Html::parse_document(&text);
            ProfileReport::from_html(&html, url.as_str(), overall_only)
        })
        .await?;

        Ok(report)
    }

    /// Get and read a career page, without per-hero stats.
    pub async fn get_overall(
        &self,
        platform: Platform,
        region: Option<&str>,
        tag: &str,
    ) -> OwResult<ProfileReport> {
        self.get_all(platform, region, tag, true).await
    }

    /// Search for players by nickname
    pub async fn search(&self, nickname: &str) -> OwResult<Vec<SearchResult>> {
        let url = search_url(&self.search_base_url, nickname)?;
        let raw: Vec<RawSearchResult> = self.get(url.as_str()).await?.json().await?;

        Ok(normalize_search_results(raw))
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}
