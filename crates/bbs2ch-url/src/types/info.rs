use std::fmt;

use serde::{Serialize, Serializer};

use super::fields::Fields;
use super::site::{Tld, UrlKind};
use crate::canonical;

/// A successfully parsed 2ch URL.
///
/// Holds the extracted [`Fields`] and the canonical URL computed from them at
/// construction. The archive, subject-list and settings URLs are derived on
/// demand and may be `None` when the fields do not carry enough to build them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UrlInfo {
    fields: Fields,
    built_url: Option<String>,
}

impl UrlInfo {
    pub(crate) fn from_fields(fields: Fields) -> Self {
        let built_url = canonical::build_url(&fields);
        Self { fields, built_url }
    }

    /// The extracted field set.
    #[must_use]
    pub fn fields(&self) -> &Fields {
        &self.fields
    }

    /// Consumes the info and returns the field set.
    #[must_use]
    pub fn into_fields(self) -> Fields {
        self.fields
    }

    /// Canonical form of the parsed URL.
    ///
    /// `None` only for resource URLs missing their board, such as
    /// `http://2ch.sc/subject.txt`.
    #[must_use]
    pub fn built_url(&self) -> Option<&str> {
        self.built_url.as_deref()
    }

    /// Raw archive URL: `<host>/<board>/dat/<thread_key>.dat`.
    #[must_use]
    pub fn dat(&self) -> Option<String> {
        canonical::dat(&self.fields)
    }

    /// Thread list URL: `<host>/<board>/subject.txt`.
    #[must_use]
    pub fn subject(&self) -> Option<String> {
        canonical::subject(&self.fields)
    }

    /// Board settings URL: `<host>/<board>/SETTING.TXT`.
    #[must_use]
    pub fn setting(&self) -> Option<String> {
        canonical::setting(&self.fields)
    }

    #[must_use]
    pub fn server_name(&self) -> Option<&str> {
        self.fields.server_name()
    }

    #[must_use]
    pub fn tld(&self) -> Tld {
        self.fields.tld()
    }

    #[must_use]
    pub fn board_name(&self) -> Option<&str> {
        self.fields.board_name()
    }

    #[must_use]
    pub fn thread_key(&self) -> Option<&str> {
        self.fields.thread_key()
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.fields.is_open()
    }

    #[must_use]
    pub fn kind(&self) -> UrlKind {
        self.fields.kind()
    }

    #[must_use]
    pub fn is_dat(&self) -> bool {
        self.fields.is_dat()
    }

    #[must_use]
    pub fn is_subject(&self) -> bool {
        self.fields.is_subject()
    }

    #[must_use]
    pub fn is_setting(&self) -> bool {
        self.fields.is_setting()
    }
}

impl Serialize for UrlInfo {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Repr<'a> {
            #[serde(flatten)]
            fields: &'a Fields,
            built_url: Option<&'a str>,
            dat: Option<String>,
            subject: Option<String>,
            setting: Option<String>,
        }

        Repr {
            fields: &self.fields,
            built_url: self.built_url(),
            dat: self.dat(),
            subject: self.subject(),
            setting: self.setting(),
        }
        .serialize(serializer)
    }
}

/// Prints the canonical URL. When there is none, prints a bracketed
/// description such as `<subject without board on http://2ch.sc>`, which is
/// never a URL.
impl fmt::Display for UrlInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.built_url() {
            Some(url) => f.write_str(url),
            None => write!(
                f,
                "<{} without board on {}>",
                self.kind(),
                canonical::host(&self.fields)
            ),
        }
    }
}
