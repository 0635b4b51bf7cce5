//! Markdown release-table parser.
//!
//! The wiki page for a month is one big markdown document with a release
//! table somewhere in it. Everything before the table (and the table's own
//! header) is noise; the rows after the header/body separator carry the
//! Spotify links we care about. Rows without a recognizable link are
//! skipped, and the scan ends at the first line that is no longer a table
//! row.

use once_cell::sync::Lazy;
use regex::Regex;

static RELEASE_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"https://(?:open|play)\.spotify\.com/(?:album|track)/[A-Za-z0-9]+")
        .expect("release URL pattern must compile")
});

/// Lazy, non-restartable sequence of release URLs in document order.
pub struct ReleaseUrls {
    rows: std::vec::IntoIter<String>,
    done: bool,
}

/// Extracts the release URLs from a raw markdown wiki payload.
///
/// A document without a `|--` separator row has no recognizable table and
/// yields nothing.
pub fn release_urls(content_md: &str) -> ReleaseUrls {
    let content = content_md.replace("\r\n", "\n");
    let mut lines = content.lines();

    // Drop the preamble: everything up to and including the header/body
    // separator row. The header row itself sits above the separator, so any
    // links in it never reach the row scan.
    for line in lines.by_ref() {
        if line.starts_with("|--") {
            break;
        }
    }

    ReleaseUrls {
        rows: lines
            .map(String::from)
            .collect::<Vec<_>>()
            .into_iter(),
        done: false,
    }
}

impl Iterator for ReleaseUrls {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.done {
            return None;
        }

        for row in self.rows.by_ref() {
            // The table ends at the first line that is not a table row.
            if !row.starts_with('|') {
                self.done = true;
                return None;
            }

            if let Some(m) = RELEASE_URL.find(&row) {
                return Some(m.as_str().to_string());
            }
        }

        self.done = true;
        None
    }
}
