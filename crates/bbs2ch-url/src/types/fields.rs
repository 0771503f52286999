use serde::{Deserialize, Serialize};

use super::site::{Tld, UrlKind};

/// Identity fields extracted from a matching 2ch URL.
///
/// Values are fixed once built; the `with_*` methods consume and return a new
/// value, which is how the matcher assembles one from its captures.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fields {
    pub(crate) server_name: Option<String>,
    pub(crate) tld: Tld,
    pub(crate) board_name: Option<String>,
    pub(crate) thread_key: Option<String>,
    pub(crate) is_open: bool,
    #[serde(default)]
    pub(crate) kind: UrlKind,
}

impl Fields {
    /// Creates the field set of an apex URL (`http://2ch.<tld>`).
    #[must_use]
    pub fn new(tld: Tld) -> Self {
        Self {
            server_name: None,
            tld,
            board_name: None,
            thread_key: None,
            is_open: false,
            kind: UrlKind::Page,
        }
    }

    #[must_use]
    pub fn with_server_name(mut self, server_name: impl Into<String>) -> Self {
        self.server_name = Some(server_name.into());
        self
    }

    #[must_use]
    pub fn with_board_name(mut self, board_name: impl Into<String>) -> Self {
        self.board_name = Some(board_name.into());
        self
    }

    #[must_use]
    pub fn with_thread_key(mut self, thread_key: impl Into<String>) -> Self {
        self.thread_key = Some(thread_key.into());
        self
    }

    #[must_use]
    pub fn with_open(mut self, is_open: bool) -> Self {
        self.is_open = is_open;
        self
    }

    #[must_use]
    pub fn with_kind(mut self, kind: UrlKind) -> Self {
        self.kind = kind;
        self
    }

    /// Subdomain label in front of the base domain, e.g. `viper`.
    #[must_use]
    pub fn server_name(&self) -> Option<&str> {
        self.server_name.as_deref()
    }

    #[must_use]
    pub fn tld(&self) -> Tld {
        self.tld
    }

    /// Board identifier, e.g. `news4vip`.
    #[must_use]
    pub fn board_name(&self) -> Option<&str> {
        self.board_name.as_deref()
    }

    /// Numeric thread identifier, kept as the digit string it was matched from.
    #[must_use]
    pub fn thread_key(&self) -> Option<&str> {
        self.thread_key.as_deref()
    }

    /// `true` when the URL used the `open2ch` mirror.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    #[must_use]
    pub fn kind(&self) -> UrlKind {
        self.kind
    }

    #[must_use]
    pub fn is_dat(&self) -> bool {
        self.kind == UrlKind::Dat
    }

    #[must_use]
    pub fn is_subject(&self) -> bool {
        self.kind == UrlKind::Subject
    }

    #[must_use]
    pub fn is_setting(&self) -> bool {
        self.kind == UrlKind::Setting
    }
}
