//! Display helpers for listing records.
//!
//! Pure formatting shared by front ends: what a compact card shows, what the
//! detail view shows, and the fallbacks for missing data.

use romshelf_core::{GameRecord, parse};

/// Tags shown on a compact card.
pub const CARD_TAG_LIMIT: usize = 3;

/// Shown when a record has no size.
pub const MISSING_SIZE: &str = "N/A";

/// Shown in the detail view when a file name has no tags.
pub const NO_TAGS: &str = "No additional info";

/// Compact summary of one record in a page listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameCard {
    /// Working-set position, used to open the detail view.
    pub position: usize,
    pub title: String,
    pub tags: Vec<String>,
    pub size: String,
}

impl GameCard {
    pub fn new(position: usize, game: &GameRecord) -> Self {
        let parsed = parse(game.file_name());
        Self {
            position,
            tags: parsed.summary_tags(CARD_TAG_LIMIT).to_vec(),
            title: display_title(parsed.title, game),
            size: size_label(game).to_string(),
        }
    }
}

/// Everything the detail view shows for one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameDetail {
    pub title: String,
    pub tags: Vec<String>,
    pub size: String,
    pub file_name: String,
    pub download_link: Option<String>,
}

impl GameDetail {
    pub fn new(game: &GameRecord) -> Self {
        let parsed = parse(game.file_name());
        Self {
            title: display_title(parsed.title, game),
            tags: parsed.tags,
            size: size_label(game).to_string(),
            file_name: game.file_name().to_string(),
            download_link: game.download_link().map(str::to_string),
        }
    }

    /// Tags joined for display, or the no-tags fallback.
    pub fn tags_label(&self) -> String {
        if self.tags.is_empty() {
            NO_TAGS.to_string()
        } else {
            self.tags.join(" | ")
        }
    }
}

/// The record's size label, or "N/A".
pub fn size_label(game: &GameRecord) -> &str {
    game.file_size().unwrap_or(MISSING_SIZE)
}

/// "Page 2 of 7".
pub fn pager_label(page: usize, page_count: usize) -> String {
    format!("Page {page} of {page_count}")
}

/// A tag-only file name has an empty title; show the file name instead.
fn display_title(title: String, game: &GameRecord) -> String {
    if title.is_empty() {
        game.file_name().to_string()
    } else {
        title
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use romshelf_core::{RawRow, ingest};

    fn record(row: RawRow) -> GameRecord {
        ingest([row]).remove(0)
    }

    #[test]
    fn card_keeps_first_three_tags() {
        let game = record(
            RawRow::new("Gran Turismo 4 (USA) (En,Fr,Es) (Rev 1) (Greatest Hits).zip")
                .with_size("3.7 GiB"),
        );
        let card = GameCard::new(12, &game);
        assert_eq!(card.position, 12);
        assert_eq!(card.title, "Gran Turismo 4");
        assert_eq!(card.tags, vec!["USA", "En,Fr,Es", "Rev 1"]);
        assert_eq!(card.size, "3.7 GiB");
    }

    #[test]
    fn missing_size_falls_back() {
        let game = record(RawRow::new("Rez (Japan).zip"));
        assert_eq!(GameCard::new(0, &game).size, MISSING_SIZE);
        assert_eq!(size_label(&game), "N/A");
    }

    #[test]
    fn detail_lists_every_tag() {
        let game = record(
            RawRow::new("Persona 4 (USA) (En) (Rev 1) (Demo).zip")
                .with_link("https://example.org/p4.zip"),
        );
        let detail = GameDetail::new(&game);
        assert_eq!(detail.tags.len(), 4);
        assert_eq!(detail.tags_label(), "USA | En | Rev 1 | Demo");
        assert_eq!(detail.download_link.as_deref(), Some("https://example.org/p4.zip"));
        assert_eq!(detail.file_name, "Persona 4 (USA) (En) (Rev 1) (Demo).zip");
    }

    #[test]
    fn detail_without_tags() {
        let detail = GameDetail::new(&record(RawRow::new("Homebrew.zip")));
        assert_eq!(detail.tags_label(), NO_TAGS);
        assert_eq!(detail.download_link, None);
    }

    #[test]
    fn tag_only_name_shows_file_name() {
        let game = record(RawRow::new("(USA).zip"));
        assert_eq!(GameCard::new(0, &game).title, "(USA).zip");
    }

    #[test]
    fn pager() {
        assert_eq!(pager_label(2, 7), "Page 2 of 7");
    }
}
