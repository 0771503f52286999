//! # bbs2ch-url
//!
//! Validates and decomposes URLs of the 2ch / open2ch mirror family and
//! rebuilds canonical URLs from the extracted fields, including the raw
//! `.dat` archive, `subject.txt` thread list and `SETTING.TXT` of a board.
//!
//! ## Quick Start
//!
//! ```rust
//! let info = bbs2ch_url::parse("http://viper.open2ch.net/test/read.cgi/news4vip/1439127670/")
//!     .unwrap();
//!
//! assert_eq!(info.board_name(), Some("news4vip"));
//! assert_eq!(info.thread_key(), Some("1439127670"));
//! assert_eq!(
//!     info.dat().as_deref(),
//!     Some("http://viper.open2ch.net/news4vip/dat/1439127670.dat")
//! );
//! assert!(!bbs2ch_url::is_valid("http://www.google.com"));
//! ```
pub mod canonical;
pub mod error;
pub mod grammar;
pub mod types;

// Re-export primary API
pub use error::{Result, UrlError};
pub use grammar::{Matcher, MatcherConfig, default_matcher, is_valid, parse, parse_url, try_parse};
pub use types::{Fields, Tld, UrlInfo, UrlKind};
