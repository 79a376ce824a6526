//! Raw spreadsheet rows → canonical [`Video`] records
//!
//! Rows follow a fixed column layout:
//!
//! | col | content                       |
//! |-----|-------------------------------|
//! | A   | video URL (required)          |
//! | B   | title                         |
//! | C   | date (unused)                 |
//! | D   | client                        |
//! | E   | tags, comma separated         |
//! | F   | aspect ratio (`16:9`/`9:16`)  |
//! | G   | thumbnail URL                 |
//! | H   | unused                        |
//! | I   | software, comma separated     |
//!
//! Normalization never fails. Rows without a video URL are skipped and every
//! other missing or malformed cell falls back to a default.

use tracing::debug;

use crate::embed::derive_thumbnail;
use crate::models::{AspectRatio, Software, Video};

pub mod software;

pub const UNTITLED: &str = "Untitled";

const COL_VIDEO_URL: usize = 0;
const COL_TITLE: usize = 1;
const COL_CLIENT: usize = 3;
const COL_TAGS: usize = 4;
const COL_ASPECT_RATIO: usize = 5;
const COL_THUMBNAIL: usize = 6;
const COL_SOFTWARE: usize = 8;

/// Normalize raw rows into canonical videos
///
/// Ids are the 1-based position among retained rows, so they are only stable
/// for as long as the source row order is.
pub fn normalize<R: AsRef<[String]>>(raw_rows: &[R]) -> Vec<Video> {
    let videos: Vec<Video> = raw_rows
        .iter()
        .map(|row| row.as_ref())
        .filter(|row| !cell(row, COL_VIDEO_URL).is_empty())
        .enumerate()
        .map(|(index, row)| normalize_row(index + 1, row))
        .collect();

    debug!(
        "Normalized {} of {} raw rows into videos",
        videos.len(),
        raw_rows.len()
    );
    videos
}

fn normalize_row(position: usize, row: &[String]) -> Video {
    let video_url = cell(row, COL_VIDEO_URL).to_string();

    let thumbnail = match cell(row, COL_THUMBNAIL) {
        "" => derive_thumbnail(&video_url).unwrap_or_default(),
        provided => provided.to_string(),
    };

    let title = match cell(row, COL_TITLE) {
        "" => UNTITLED.to_string(),
        title => title.to_string(),
    };

    let client = Some(cell(row, COL_CLIENT))
        .filter(|c| !c.is_empty())
        .map(str::to_string);

    Video {
        id: position.to_string(),
        title,
        description: String::new(),
        thumbnail,
        video_url,
        aspect_ratio: AspectRatio::from_cell(cell(row, COL_ASPECT_RATIO)),
        client,
        software: parse_software(cell(row, COL_SOFTWARE)),
        timeline_image: None,
        tags: parse_tags(cell(row, COL_TAGS)),
    }
}

/// Missing trailing cells read as empty
fn cell(row: &[String], index: usize) -> &str {
    row.get(index).map(String::as_str).unwrap_or("")
}

fn split_list(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(',').map(str::trim).filter(|item| !item.is_empty())
}

/// Comma separated tags, trimmed, first occurrence of each label kept
pub fn parse_tags(raw: &str) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for tag in split_list(raw) {
        if !tags.iter().any(|existing| existing == tag) {
            tags.push(tag.to_string());
        }
    }
    tags
}

/// Comma separated software names with their logos
///
/// `None` when the cell names nothing, so "no data" stays distinguishable
/// from an explicit list.
pub fn parse_software(raw: &str) -> Option<Vec<Software>> {
    let software: Vec<Software> = split_list(raw)
        .map(|name| Software {
            name: name.to_string(),
            logo: software::logo_for(name),
        })
        .collect();

    (!software.is_empty()).then_some(software)
}
