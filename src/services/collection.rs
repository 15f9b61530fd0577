//! Read side of the store: filtered listings with titles pre-split for
//! rendering, and the hashtag cloud across every title.

use std::collections::HashMap;

use crate::managers::bookmark_manager::BookmarkManagerTrait;
use crate::services::tag_formatter::{extract_tags, format_title, tag_href};
use crate::types::bookmark::{Collection, ListedBookmark, TagCount};
use crate::types::errors::StoreError;

/// Lists the bookmarks matching `filter` and aggregates hashtags over all rows.
pub fn build_collection<M: BookmarkManagerTrait + ?Sized>(
    store: &M,
    filter: &str,
) -> Result<Collection, StoreError> {
    let entries = list_formatted(store, filter)?;
    let tags = store
        .tagged_titles()?
        .iter()
        .flat_map(|title| extract_tags(title))
        .collect::<Vec<_>>();

    Ok(Collection {
        filter: filter.to_string(),
        entries,
        hashtags: tag_counts(tags),
    })
}

/// `list(filter)` with each title run through the tag formatter.
pub fn list_formatted<M: BookmarkManagerTrait + ?Sized>(
    store: &M,
    filter: &str,
) -> Result<Vec<ListedBookmark>, StoreError> {
    Ok(store
        .list(filter)?
        .into_iter()
        .map(|bookmark| ListedBookmark {
            formatted: format_title(&bookmark.title),
            bookmark,
        })
        .collect())
}

/// Counts tag occurrences; most frequent first, ties alphabetical.
pub fn tag_counts<I>(tags: I) -> Vec<TagCount>
where
    I: IntoIterator<Item = String>,
{
    let mut counts: HashMap<String, usize> = HashMap::new();
    for tag in tags {
        *counts.entry(tag).or_default() += 1;
    }

    let mut out: Vec<TagCount> = counts
        .into_iter()
        .map(|(tag, count)| TagCount {
            href: tag_href(&tag),
            tag,
            count,
        })
        .collect();
    out.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.tag.cmp(&b.tag)));
    out
}
