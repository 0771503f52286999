use regex::{Captures, Regex};
use tracing::{debug, trace};
use url::Url;

use super::config::MatcherConfig;
use crate::error::{Result, UrlError};
use crate::types::{Fields, UrlInfo, UrlKind};

// Capture group names. Each one feeds exactly one `Fields` slot.
const SERVER_NAME: &str = "server_name";
const IS_OPEN: &str = "is_open";
const TLD: &str = "tld";
const BOARD_NAME: &str = "board_name";
const THREAD_KEY: &str = "thread_key";
const DAT_THREAD_KEY: &str = "dat_thread_key";
const IS_DAT: &str = "is_dat";
const IS_SUBJECT: &str = "is_subject";
const IS_SETTING: &str = "is_setting";

/// Builds the anchored grammar for the given thread key digit window.
///
/// The three resource suffixes are alternatives of one group, so a match can
/// never carry more than one of them. The `/` after the tld is optional, so
/// `http://2ch.scnews4vip` reads as board `news4vip`.
fn grammar_pattern(min_digits: usize, max_digits: usize) -> String {
    let key = format!("[0-9]{{{min_digits},{max_digits}}}");
    format!(
        concat!(
            r"^http://",
            r"(?:(?P<server_name>.+)\.)?",
            r"(?P<is_open>open)?2ch\.(?P<tld>net|sc)",
            r"(?:/?",
            r"(?:(?:test/read\.cgi/)?(?P<board_name>(?-u:\w)+?)/?(?:(?P<thread_key>{key})/?)?)?",
            r"(?:(?P<is_dat>dat)/(?P<dat_thread_key>{key})\.dat",
            r"|(?P<is_subject>subject)\.txt",
            r"|(?P<is_setting>SETTING)\.TXT)?",
            r")?$",
        ),
        key = key,
    )
}

/// Grammar matcher for 2ch / open2ch URLs.
///
/// Matching is all-or-nothing: the whole candidate must fit the grammar, so
/// leading or trailing junk rejects the URL.
///
/// `server_name` is any run of characters before the base domain, so it is
/// not limited to the host the URI syntax check saw: `http://a.example/x.2ch.sc`
/// matches with server name `a.example/x`.
#[derive(Debug, Clone)]
pub struct Matcher {
    config: MatcherConfig,
    re_grammar: Regex,
}

impl Matcher {
    /// Constructs a matcher with a compiled grammar for `config`.
    ///
    /// # Errors
    ///
    /// Returns `UrlError::InvalidConfig` for an unusable digit window and
    /// `UrlError::RegexError` if the pattern fails to compile.
    pub fn new(config: MatcherConfig) -> Result<Self> {
        config.validate()?;
        let (min, max) = config.thread_key_digits;
        let re_grammar = Regex::new(&grammar_pattern(min, max))?;
        Ok(Self { config, re_grammar })
    }

    /// Get the matcher configuration.
    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    /// Parses `input`, returning `None` for anything that is not a 2ch URL.
    ///
    /// Malformed URIs and grammar mismatches are not told apart here; use
    /// [`Matcher::try_parse`] for that.
    pub fn parse(&self, input: &str) -> Option<UrlInfo> {
        match self.try_parse(input) {
            Ok(info) => Some(info),
            Err(err) => {
                debug!(%err, "rejected candidate");
                None
            }
        }
    }

    /// Returns `true` if `input` is a 2ch URL.
    pub fn is_valid(&self, input: &str) -> bool {
        self.parse(input).is_some()
    }

    /// Parses `input`, reporting why it was rejected.
    ///
    /// # Errors
    ///
    /// - `UrlError::EmptyInput` for empty or whitespace-only input.
    /// - `UrlError::Malformed` if the syntax check is on and `input` is not a URI.
    /// - `UrlError::Mismatch` if `input` does not fit the grammar.
    pub fn try_parse(&self, input: &str) -> Result<UrlInfo> {
        if input.trim().is_empty() {
            return Err(UrlError::EmptyInput);
        }

        if self.config.check_syntax {
            if let Err(source) = Url::parse(input) {
                return Err(UrlError::Malformed {
                    input: input.to_string(),
                    source,
                });
            }
        }

        self.match_fields(input)
            .map(UrlInfo::from_fields)
            .ok_or_else(|| UrlError::Mismatch {
                input: input.to_string(),
            })
    }

    /// Parses an already parsed URI, matching its serialized form.
    ///
    /// The `url` crate normalizes while parsing (lowercased host, `/` path on
    /// bare hosts), which the grammar accepts as-is.
    pub fn parse_url(&self, url: &Url) -> Option<UrlInfo> {
        let info = self.match_fields(url.as_str()).map(UrlInfo::from_fields);
        if info.is_none() {
            debug!(url = %url, "rejected parsed url");
        }
        info
    }

    /// Runs the grammar alone, skipping the URI syntax check.
    pub fn match_fields(&self, input: &str) -> Option<Fields> {
        let caps = self.re_grammar.captures(input)?;
        let fields = fields_from_captures(&caps)?;
        trace!(input, kind = %fields.kind(), "matched");
        Some(fields)
    }
}

/// Maps the named captures of a grammar match onto a `Fields` value.
///
/// The index-style thread key wins over the `.dat` file name when both matched.
fn fields_from_captures(caps: &Captures<'_>) -> Option<Fields> {
    let text = |name: &str| caps.name(name).map(|m| m.as_str().to_string());
    let flag = |name: &str| caps.name(name).is_some();

    let tld = caps.name(TLD)?.as_str().parse().ok()?;

    let kind = if flag(IS_DAT) {
        UrlKind::Dat
    } else if flag(IS_SUBJECT) {
        UrlKind::Subject
    } else if flag(IS_SETTING) {
        UrlKind::Setting
    } else {
        UrlKind::Page
    };

    Some(Fields {
        server_name: text(SERVER_NAME),
        tld,
        board_name: text(BOARD_NAME),
        thread_key: text(THREAD_KEY).or_else(|| text(DAT_THREAD_KEY)),
        is_open: flag(IS_OPEN),
        kind,
    })
}
