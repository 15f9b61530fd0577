use serde::{Deserialize, Serialize};

/// A stored bookmark row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bookmark {
    pub id: i64,
    /// `YYYY-MM-DD HH:MM:SS` as written by SQLite's `CURRENT_TIMESTAMP` (UTC).
    pub created_at: String,
    pub title: String,
    pub link: String,
}

/// A `#tag` found in a title, paired with the filter query that selects it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagLink {
    pub tag: String,
    pub href: String,
}

/// A title split into escaped prose and the tags that were pulled out of it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedTitle {
    pub display: String,
    pub tags: Vec<TagLink>,
}

/// A bookmark ready for embedding in a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListedBookmark {
    #[serde(flatten)]
    pub bookmark: Bookmark,
    pub formatted: FormattedTitle,
}

/// The rows matching one filter plus the hashtag cloud of the whole store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Collection {
    pub filter: String,
    pub entries: Vec<ListedBookmark>,
    pub hashtags: Vec<TagCount>,
}

/// How often a tag occurs across all titles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagCount {
    pub tag: String,
    pub href: String,
    pub count: usize,
}
