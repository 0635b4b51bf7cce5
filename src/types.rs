use serde::{Deserialize, Serialize};

/// Logical key for one managed playlist.
///
/// The registry persists these as `(label, year)` pairs: months keep their
/// English name, the year aggregate uses the label `All`, and the perpetual
/// playlist uses `Current` with a sentinel year of 0 since it is not
/// year-scoped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scope {
    Month { month: String, year: i32 },
    Year(i32),
    Current,
}

impl Scope {
    pub fn label(&self) -> &str {
        match self {
            Scope::Month { month, .. } => month,
            Scope::Year(_) => "All",
            Scope::Current => "Current",
        }
    }

    pub fn year(&self) -> i32 {
        match self {
            Scope::Month { year, .. } => *year,
            Scope::Year(year) => *year,
            Scope::Current => 0,
        }
    }

    pub fn display_name(&self) -> String {
        match self {
            Scope::Month { month, year } => format!("{} {} Releases", month, year),
            Scope::Year(year) => format!("{} Releases", year),
            Scope::Current => "Current Month's Releases".to_string(),
        }
    }

    pub fn description(&self, releases_url: &str) -> String {
        match self {
            Scope::Month { month, year } => format!(
                "Auto-updating playlist of the {} {} releases wiki: {}/{}/{}",
                month, year, releases_url, year, month
            ),
            Scope::Year(year) => format!(
                "Auto-updating playlist of releases over the entire year of {}",
                year
            ),
            Scope::Current => "Auto-updating playlist of the current month's releases. \
                At the end of the month, it will be emptied out so the next month's \
                releases can start being added."
                .to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseKind {
    Track,
    Album,
}

/// A release link extracted from the wiki, classified by its URL shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Release {
    pub url: String,
    pub kind: ReleaseKind,
    pub id: String,
}

/// One row of the persisted playlist registry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistRecord {
    pub label: String,
    pub year: i32,
    pub spotify_id: String,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub refresh_token: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreatePlaylistRequest {
    pub name: String,
    pub description: String,
    pub public: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreatePlaylistResponse {
    pub id: String,
}

/// Body for both inserting a batch at a position and replacing the whole
/// membership (an empty `uris` with no position clears the playlist).
#[derive(Debug, Clone, Serialize)]
pub struct PlaylistTracksRequest {
    pub uris: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrackResponse {
    pub uri: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AlbumTracksResponse {
    pub items: Vec<TrackResponse>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WikiPageResponse {
    pub data: WikiPageData,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WikiPageData {
    pub content_md: String,
}
