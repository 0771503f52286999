//! # Grammar Matcher
//!
//! Decides whether a candidate string is a 2ch / open2ch URL and extracts its
//! [`Fields`](crate::types::Fields). The module-level functions share one
//! lazily compiled default [`Matcher`].

pub mod config;
pub mod matcher;

use std::sync::LazyLock;

use url::Url;

pub use config::{DEFAULT_THREAD_KEY_MAX_DIGITS, DEFAULT_THREAD_KEY_MIN_DIGITS, MatcherConfig};
pub use matcher::Matcher;

use crate::error::Result;
use crate::types::UrlInfo;

static DEFAULT_MATCHER: LazyLock<Matcher> = LazyLock::new(|| {
    Matcher::new(MatcherConfig::default()).expect("default grammar must compile")
});

/// Returns the shared matcher built from [`MatcherConfig::default`].
pub fn default_matcher() -> &'static Matcher {
    &DEFAULT_MATCHER
}

/// Parses a candidate URL with the default matcher.
///
/// # Examples
/// ```
/// let info = bbs2ch_url::parse("http://viper.open2ch.net/news4vip").unwrap();
///
/// assert!(info.is_open());
/// assert_eq!(info.board_name(), Some("news4vip"));
/// assert_eq!(info.built_url(), Some("http://viper.open2ch.net/news4vip/"));
/// ```
pub fn parse(input: &str) -> Option<UrlInfo> {
    default_matcher().parse(input)
}

/// Returns `true` if `input` is a 2ch URL.
pub fn is_valid(input: &str) -> bool {
    default_matcher().is_valid(input)
}

/// Parses with the default matcher, reporting why a candidate was rejected.
pub fn try_parse(input: &str) -> Result<UrlInfo> {
    default_matcher().try_parse(input)
}

/// Parses an already parsed URI with the default matcher.
pub fn parse_url(url: &Url) -> Option<UrlInfo> {
    default_matcher().parse_url(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::UrlError;
    use crate::types::Tld;

    const ROUND_TRIP_URLS: &[&str] = &[
        "http://2ch.sc",
        "http://www.2ch.sc/",
        "http://open2ch.net",
        "http://viper.2ch.sc/news4vip",
        "http://viper.open2ch.net/news4vip/",
        "http://viper.2ch.sc/news4vip/dat/9990000001.dat",
        "http://viper.open2ch.net/news4vip/subject.txt",
        "http://viper.2ch.sc/news4vip/SETTING.TXT",
        "http://viper.2ch.sc/test/read.cgi/news4vip/9990000001",
        "http://viper.open2ch.net/test/read.cgi/news4vip/1439127670/",
        "http://viper.2ch.sc/news4vip/1439127670",
        "http://a.b.2ch.net/board_1/",
    ];

    #[test]
    fn built_urls_match_expected() {
        for (input, expected) in [
            ("http://2ch.sc", "http://2ch.sc"),
            ("http://www.2ch.sc", "http://www.2ch.sc"),
            ("http://open2ch.net", "http://open2ch.net"),
            ("http://2ch.sc/", "http://2ch.sc"),
            ("http://www.2ch.sc/", "http://www.2ch.sc"),
            ("http://open2ch.net/", "http://open2ch.net"),
            ("http://viper.2ch.sc/news4vip", "http://viper.2ch.sc/news4vip/"),
            ("http://viper.open2ch.net/news4vip", "http://viper.open2ch.net/news4vip/"),
            ("http://viper.2ch.sc/news4vip/", "http://viper.2ch.sc/news4vip/"),
            ("http://viper.open2ch.net/news4vip/", "http://viper.open2ch.net/news4vip/"),
            (
                "http://viper.2ch.sc/news4vip/dat/9990000001.dat",
                "http://viper.2ch.sc/news4vip/dat/9990000001.dat",
            ),
            (
                "http://viper.open2ch.net/news4vip/dat/1439127670.dat",
                "http://viper.open2ch.net/news4vip/dat/1439127670.dat",
            ),
            (
                "http://viper.2ch.sc/news4vip/subject.txt",
                "http://viper.2ch.sc/news4vip/subject.txt",
            ),
            (
                "http://viper.open2ch.net/news4vip/subject.txt",
                "http://viper.open2ch.net/news4vip/subject.txt",
            ),
            (
                "http://viper.2ch.sc/news4vip/SETTING.TXT",
                "http://viper.2ch.sc/news4vip/SETTING.TXT",
            ),
            (
                "http://viper.open2ch.net/news4vip/SETTING.TXT",
                "http://viper.open2ch.net/news4vip/SETTING.TXT",
            ),
            (
                "http://viper.2ch.sc/test/read.cgi/news4vip/9990000001",
                "http://viper.2ch.sc/test/read.cgi/news4vip/9990000001/",
            ),
            (
                "http://viper.open2ch.net/test/read.cgi/news4vip/1439127670",
                "http://viper.open2ch.net/test/read.cgi/news4vip/1439127670/",
            ),
            (
                "http://viper.2ch.sc/test/read.cgi/news4vip/9990000001/",
                "http://viper.2ch.sc/test/read.cgi/news4vip/9990000001/",
            ),
            (
                "http://viper.open2ch.net/test/read.cgi/news4vip/1439127670/",
                "http://viper.open2ch.net/test/read.cgi/news4vip/1439127670/",
            ),
        ] {
            let info = parse(input).unwrap_or_else(|| panic!("should parse: {input}"));
            assert_eq!(info.built_url(), Some(expected), "built_url for {input}");
        }
    }

    #[test]
    fn built_url_round_trips() {
        for input in ROUND_TRIP_URLS {
            let first = parse(input).unwrap();
            let built = first.built_url().unwrap();
            let second = parse(built).unwrap_or_else(|| panic!("reparse failed: {built}"));
            assert_eq!(second.built_url(), Some(built), "round trip of {input}");
            assert_eq!(second.fields(), first.fields(), "fields of {input}");
        }
    }

    #[test]
    fn at_most_one_resource_flag() {
        for input in ROUND_TRIP_URLS {
            let info = parse(input).unwrap();
            let set = [info.is_dat(), info.is_subject(), info.is_setting()]
                .into_iter()
                .filter(|&b| b)
                .count();
            assert!(set <= 1, "{input} has {set} resource flags");
        }
    }

    #[test]
    fn brand_follows_open_flag() {
        for input in ROUND_TRIP_URLS {
            let info = parse(input).unwrap();
            let built = info.built_url().unwrap();
            assert_eq!(built.contains("open2ch."), info.is_open(), "{built}");
            assert!(built.contains("2ch."));
        }
    }

    #[test]
    fn brand_ignores_subdomain_text() {
        let info = parse("http://open.2ch.sc").unwrap();
        assert_eq!(info.server_name(), Some("open"));
        assert!(!info.is_open());
        assert_eq!(info.built_url(), Some("http://open.2ch.sc"));

        let info = parse("http://2ch.open2ch.net/news4vip/").unwrap();
        assert_eq!(info.server_name(), Some("2ch"));
        assert!(info.is_open());
        assert_eq!(info.built_url(), Some("http://2ch.open2ch.net/news4vip/"));
    }

    #[test]
    fn apex_without_server_name() {
        let info = parse("http://2ch.sc").unwrap();
        assert_eq!(info.server_name(), None);
        assert_eq!(info.tld(), Tld::Sc);
        assert_eq!(info.built_url(), Some("http://2ch.sc"));
    }

    #[test]
    fn resources_from_thread_url() {
        let info = parse("http://viper.open2ch.net/test/read.cgi/news4vip/1439127670/").unwrap();
        assert_eq!(
            info.setting().as_deref(),
            Some("http://viper.open2ch.net/news4vip/SETTING.TXT")
        );
        assert_eq!(
            info.dat().as_deref(),
            Some("http://viper.open2ch.net/news4vip/dat/1439127670.dat")
        );
        assert_eq!(
            info.subject().as_deref(),
            Some("http://viper.open2ch.net/news4vip/subject.txt")
        );
    }

    #[test]
    fn apex_has_no_resources() {
        let info = parse("http://www.2ch.sc").unwrap();
        assert_eq!(info.setting(), None);
        assert_eq!(info.subject(), None);
        assert_eq!(info.dat(), None);
    }

    #[test]
    fn rejects_non_2ch_urls() {
        for input in ["http://yahoo.co.jp", "http://www.google.com", "abc://def{}.ghi"] {
            assert!(!is_valid(input), "{input}");
            assert!(parse(input).is_none(), "{input}");
            assert!(try_parse(input).is_err(), "{input}");
        }
        assert!(matches!(
            try_parse("http://yahoo.co.jp"),
            Err(UrlError::Mismatch { .. })
        ));
    }

    #[test]
    fn parse_url_uses_default_matcher() {
        let url = Url::parse("http://viper.2ch.sc/news4vip/subject.txt").unwrap();
        let info = parse_url(&url).unwrap();
        assert!(info.is_subject());
        assert_eq!(default_matcher().config(), &MatcherConfig::default());
    }
}
