// src/entry.rs
//
// One participant row on the board plus the ranking pass.

use crate::config::consts::{PLACEHOLDER_NAME, PLACEHOLDER_ROWS};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LeaderboardEntry {
    /// Source line index (header lines included). Render key.
    pub id: u32,
    pub name: String,
    /// 0 until ranked, then 1..=n.
    pub rank: u32,
    pub score: i64,
}

impl LeaderboardEntry {
    pub fn new(id: u32, name: impl Into<String>, score: i64) -> Self {
        Self { id, name: name.into(), rank: 0, score }
    }

    #[inline]
    pub fn is_ranked(&self) -> bool { self.rank > 0 }

    #[inline]
    pub fn glyph(&self) -> Glyph { Glyph::for_id(self.id) }
}

/// Avatar shown next to a row, chosen by `id % 3`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Glyph {
    Ghost,
    OfficeWorker,
    Technologist,
}

impl Glyph {
    pub fn for_id(id: u32) -> Self {
        match id % 3 {
            0 => Glyph::Ghost,
            1 => Glyph::OfficeWorker,
            _ => Glyph::Technologist,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Glyph::Ghost => "👻",
            Glyph::OfficeWorker => "👩‍💼",
            Glyph::Technologist => "👨‍💻",
        }
    }
}

/// Rows shown before the first successful load.
pub fn placeholder_entries() -> Vec<LeaderboardEntry> {
    (1..=PLACEHOLDER_ROWS)
        .map(|i| LeaderboardEntry { id: i, name: s!(PLACEHOLDER_NAME), rank: i, score: 0 })
        .collect()
}

/// Sort by score (descending, stable) and number the result from 1.
pub fn rank_entries(mut entries: Vec<LeaderboardEntry>) -> Vec<LeaderboardEntry> {
    // sort_by is stable: ties keep input order
    entries.sort_by(|a, b| b.score.cmp(&a.score));
    for (i, e) in entries.iter_mut().enumerate() {
        e.rank = (i + 1) as u32;
    }
    entries
}
