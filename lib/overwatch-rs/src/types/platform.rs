use std::str::FromStr;

/// Error when a str is not a known platform.
#[derive(Debug)]
pub struct InvalidPlatform(pub String);

impl std::error::Error for InvalidPlatform {}

impl std::fmt::Display for InvalidPlatform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "`{}` is not a valid platform, expected one of xbl, psn or pc",
            self.0
        )
    }
}

/// The platform a career profile belongs to
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, serde::Deserialize, serde::Serialize)]
pub enum Platform {
    #[serde(rename = "xbl")]
    XboxLive,

    #[serde(rename = "psn")]
    Playstation,

    #[serde(rename = "pc")]
    Pc,
}

impl Platform {
    /// Get the url path segment of this platform
    pub fn as_str(self) -> &'static str {
        match self {
            Platform::XboxLive => "xbl",
            Platform::Playstation => "psn",
            Platform::Pc => "pc",
        }
    }

    /// Whether profile urls of this platform need a region
    pub fn needs_region(self) -> bool {
        matches!(self, Platform::Pc)
    }
}

impl FromStr for Platform {
    type Err = InvalidPlatform;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "xbl" => Ok(Platform::XboxLive),
            "psn" => Ok(Platform::Playstation),
            "pc" => Ok(Platform::Pc),
            s => Err(InvalidPlatform(s.to_string())),
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_platforms() {
        for platform in [Platform::XboxLive, Platform::Playstation, Platform::Pc] {
            assert_eq!(platform.as_str().parse::<Platform>().ok(), Some(platform));
        }

        let error = "switch".parse::<Platform>().unwrap_err();
        assert_eq!(error.0, "switch");
    }
}
