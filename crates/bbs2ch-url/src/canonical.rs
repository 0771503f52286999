//! # Canonical URL Builder
//!
//! Rebuilds normalized URLs from a [`Fields`] value. The host is always
//! synthesized from the fields (`open2ch` vs `2ch`, then the tld), so two
//! spellings of the same resource produce the same string.

use crate::types::{Fields, UrlKind};

const SCHEME: &str = "http://";
const BRAND: &str = "2ch";
const OPEN_BRAND: &str = "open2ch";

/// Returns `http://[server.](open2ch|2ch).<tld>` with no trailing slash.
#[must_use]
pub fn host(fields: &Fields) -> String {
    let brand = if fields.is_open() { OPEN_BRAND } else { BRAND };
    match fields.server_name() {
        Some(server) => format!("{SCHEME}{server}.{brand}.{}", fields.tld()),
        None => format!("{SCHEME}{brand}.{}", fields.tld()),
    }
}

/// Computes the primary URL for the resource the fields describe.
///
/// Resource kinds delegate to their builder and may come back `None` when the
/// board or thread key is missing. Page URLs always succeed.
#[must_use]
pub fn build_url(fields: &Fields) -> Option<String> {
    match fields.kind() {
        UrlKind::Dat => return dat(fields),
        UrlKind::Subject => return subject(fields),
        UrlKind::Setting => return setting(fields),
        UrlKind::Page => {}
    }

    let host = host(fields);
    let url = match (fields.board_name(), fields.thread_key()) {
        (Some(board), Some(key)) => format!("{host}/test/read.cgi/{board}/{key}/"),
        (Some(board), None) => format!("{host}/{board}/"),
        // A page-kind thread key always comes with a board out of the grammar;
        // hand-built fields without one fall back to the top page.
        (None, _) => host,
    };
    Some(url)
}

/// `host/<board>/dat/<key>.dat`, if both board and thread key are known.
#[must_use]
pub fn dat(fields: &Fields) -> Option<String> {
    let board = fields.board_name()?;
    let key = fields.thread_key()?;
    Some(format!("{}/{board}/dat/{key}.dat", host(fields)))
}

/// `host/<board>/subject.txt`, if the board is known.
#[must_use]
pub fn subject(fields: &Fields) -> Option<String> {
    let board = fields.board_name()?;
    Some(format!("{}/{board}/subject.txt", host(fields)))
}

/// `host/<board>/SETTING.TXT`, if the board is known.
#[must_use]
pub fn setting(fields: &Fields) -> Option<String> {
    let board = fields.board_name()?;
    Some(format!("{}/{board}/SETTING.TXT", host(fields)))
}
