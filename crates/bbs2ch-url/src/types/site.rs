use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Top-level domain variant of the mirror host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tld {
    /// `.net`
    Net,
    /// `.sc`
    Sc,
}

impl Tld {
    /// Returns the label as it appears in a host name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Net => "net",
            Self::Sc => "sc",
        }
    }
}

impl fmt::Display for Tld {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tld {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "net" => Ok(Self::Net),
            "sc" => Ok(Self::Sc),
            other => Err(format!("unknown tld: {other:?}")),
        }
    }
}

/// Which resource shape the matched URL addressed.
///
/// Decided once while matching, so a URL is never both an archive and a
/// settings file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UrlKind {
    /// Top page, board page or index-style thread page.
    #[default]
    Page,
    /// Raw thread archive: `<board>/dat/<key>.dat`
    Dat,
    /// Thread list: `<board>/subject.txt`
    Subject,
    /// Board settings: `<board>/SETTING.TXT`
    Setting,
}

impl UrlKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Page => "page",
            Self::Dat => "dat",
            Self::Subject => "subject",
            Self::Setting => "setting",
        }
    }
}

impl fmt::Display for UrlKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UrlKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "page" => Ok(Self::Page),
            "dat" => Ok(Self::Dat),
            "subject" => Ok(Self::Subject),
            "setting" => Ok(Self::Setting),
            other => Err(format!("unknown url kind: {other:?}")),
        }
    }
}
