//! Discography extraction: blank-line-separated album blocks.

use serde::Serialize;

use crate::domain::AppError;

/// An album title with its ordered track list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Album {
    pub title: String,
    pub tracks: Vec<String>,
}

/// Parse the discography completion into albums.
///
/// A blank line separates album blocks. Within a block the first line is the
/// title; every subsequent non-empty line is one track, whitespace-trimmed
/// with any leading list marker (`1.`, `2)`, `-`, `*`) stripped. Blocks that
/// are entirely whitespace are skipped. A block whose title line is blank
/// while tracks follow is degenerate and fails the whole parse; no partial
/// discography is accepted.
pub fn parse_discography(text: &str) -> Result<Vec<Album>, AppError> {
    let mut albums = Vec::new();

    for block in text.split("\n\n") {
        if block.trim().is_empty() {
            continue;
        }

        let mut lines = block.lines();
        let title = lines.next().unwrap_or("").trim().to_string();
        let tracks: Vec<String> = lines
            .map(strip_track_marker)
            .filter(|track| !track.is_empty())
            .collect();

        if title.is_empty() {
            return Err(AppError::DiscographyParse(format!(
                "album block has no title line: {:?}",
                block.trim()
            )));
        }

        albums.push(Album { title, tracks });
    }

    Ok(albums)
}

/// Trim a track line and strip a leading list marker if present.
fn strip_track_marker(line: &str) -> String {
    let trimmed = line.trim();

    let without_digits = trimmed.trim_start_matches(|c: char| c.is_ascii_digit());
    if without_digits.len() < trimmed.len() {
        if let Some(rest) = without_digits.strip_prefix(['.', ')']) {
            return rest.trim_start().to_string();
        }
        return trimmed.to_string();
    }

    if let Some(rest) = trimmed.strip_prefix(['-', '*']) {
        return rest.trim_start().to_string();
    }

    trimmed.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_blocks_into_albums_in_order() {
        let text = "First Light\nTrack A\nTrack B\n\nSecond Wind\nTrack C";
        let albums = parse_discography(text).unwrap();
        assert_eq!(albums.len(), 2);
        assert_eq!(albums[0].title, "First Light");
        assert_eq!(albums[0].tracks, vec!["Track A", "Track B"]);
        assert_eq!(albums[1].title, "Second Wind");
        assert_eq!(albums[1].tracks, vec!["Track C"]);
    }

    #[test]
    fn tracks_are_whitespace_trimmed() {
        let text = "Album\n  Spaced Out  \n\tTabbed In";
        let albums = parse_discography(text).unwrap();
        assert_eq!(albums[0].tracks, vec!["Spaced Out", "Tabbed In"]);
    }

    #[test]
    fn leading_numbering_and_bullets_are_stripped() {
        let text = "Album\n1. One\n2) Two\n- Three\n* Four";
        let albums = parse_discography(text).unwrap();
        assert_eq!(albums[0].tracks, vec!["One", "Two", "Three", "Four"]);
    }

    #[test]
    fn numeric_title_like_track_is_kept_verbatim() {
        // "1979" has no marker punctuation after the digits.
        let text = "Album\n1979";
        let albums = parse_discography(text).unwrap();
        assert_eq!(albums[0].tracks, vec!["1979"]);
    }

    #[test]
    fn empty_lines_within_a_block_are_ignored() {
        let text = "Album\nOne\n   \nTwo";
        let albums = parse_discography(text).unwrap();
        assert_eq!(albums[0].tracks, vec!["One", "Two"]);
    }

    #[test]
    fn whitespace_only_blocks_are_skipped() {
        let text = "Album One\nTrack\n\n   \n\nAlbum Two\nTrack";
        let albums = parse_discography(text).unwrap();
        assert_eq!(albums.len(), 2);
    }

    #[test]
    fn album_with_no_tracks_is_allowed() {
        let albums = parse_discography("Lone Title").unwrap();
        assert_eq!(albums[0].title, "Lone Title");
        assert!(albums[0].tracks.is_empty());
    }

    #[test]
    fn block_with_blank_title_line_fails() {
        // First line of block two is just spaces, followed by tracks.
        let text = "Album One\nTrack\n\n   \nOrphan Track";
        let err = parse_discography(text).unwrap_err();
        assert!(matches!(err, AppError::DiscographyParse(_)));
    }

    #[test]
    fn empty_input_yields_no_albums() {
        assert!(parse_discography("").unwrap().is_empty());
        assert!(parse_discography("\n\n\n\n").unwrap().is_empty());
    }
}
