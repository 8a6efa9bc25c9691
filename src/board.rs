// src/board.rs
//
// Leaderboard controller: fetch → parse → rank → replace.
//
// The board owns what is on screen. A refresh is split in three so the GUI
// can run the middle part on a worker thread:
//
//   begin_refresh()  -> RefreshTicket   (UI thread, bumps the token)
//   ticket.run(..)   -> RefreshOutcome  (any thread, does the I/O)
//   complete(..)                        (UI thread, applies if still latest)
//
// Only the most recently issued token is applied; older outcomes are
// dropped, so the last *triggered* refresh wins no matter which response
// arrives last.

use std::mem;

use crate::{
    core::Fetch,
    csv,
    entry::{self, LeaderboardEntry},
    error::LoadError,
};

#[derive(Debug)]
pub enum BoardState {
    /// Nothing loaded yet; placeholders on screen.
    Idle(Vec<LeaderboardEntry>),
    /// A refresh is in flight; previous entries stay visible.
    Loading(Vec<LeaderboardEntry>),
    Loaded(Vec<LeaderboardEntry>),
    /// Last refresh failed; the list underneath is untouched.
    Error { error: LoadError, entries: Vec<LeaderboardEntry> },
}

impl BoardState {
    pub fn entries(&self) -> &[LeaderboardEntry] {
        match self {
            BoardState::Idle(e)
            | BoardState::Loading(e)
            | BoardState::Loaded(e)
            | BoardState::Error { entries: e, .. } => e,
        }
    }

    fn take_entries(&mut self) -> Vec<LeaderboardEntry> {
        match self {
            BoardState::Idle(e)
            | BoardState::Loading(e)
            | BoardState::Loaded(e)
            | BoardState::Error { entries: e, .. } => mem::take(e),
        }
    }

    /* ---------- transitions ---------- */

    fn into_loading(mut self) -> Self {
        BoardState::Loading(self.take_entries())
    }

    fn into_loaded(self, entries: Vec<LeaderboardEntry>) -> Self {
        BoardState::Loaded(entries)
    }

    fn into_error(mut self, error: LoadError) -> Self {
        BoardState::Error { error, entries: self.take_entries() }
    }
}

/// Captured by one refresh trigger.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RefreshTicket {
    pub token: u64,
    pub url: String,
}

pub struct RefreshOutcome {
    pub token: u64,
    pub result: Result<Vec<LeaderboardEntry>, LoadError>,
}

impl RefreshTicket {
    /// Fetch, parse and rank. Blocks the calling thread.
    pub fn run(self, fetcher: &dyn Fetch) -> RefreshOutcome {
        RefreshOutcome { token: self.token, result: load(&self.url, fetcher) }
    }
}

/// One full load of the sheet into a ranked list.
pub fn load(url: &str, fetcher: &dyn Fetch) -> Result<Vec<LeaderboardEntry>, LoadError> {
    let text = fetcher.get_text(url).map_err(|e| {
        loge!("Load: fetch failed: {}", e);
        LoadError::from(e)
    })?;
    Ok(entry::rank_entries(csv::parse(&text)))
}

pub struct Board {
    source: Option<String>,
    state: BoardState,
    issued: u64,
}

impl Board {
    pub fn new(source: Option<&str>) -> Self {
        Self {
            source: source.map(str::trim).filter(|s| !s.is_empty()).map(String::from),
            state: BoardState::Idle(entry::placeholder_entries()),
            issued: 0,
        }
    }

    /* ---------- accessors ---------- */

    #[inline] pub fn state(&self) -> &BoardState { &self.state }
    #[inline] pub fn source(&self) -> Option<&str> { self.source.as_deref() }
    #[inline] pub fn entries(&self) -> &[LeaderboardEntry] { self.state.entries() }
    #[inline] pub fn is_loading(&self) -> bool { matches!(self.state, BoardState::Loading(_)) }
    /// Token of the most recent refresh (0 before the first one).
    #[inline] pub fn latest_token(&self) -> u64 { self.issued }

    pub fn error_message(&self) -> Option<String> {
        match &self.state {
            BoardState::Error { error, .. } => Some(error.to_string()),
            _ => None,
        }
    }

    fn transition(&mut self, f: impl FnOnce(BoardState) -> BoardState) {
        let prev = mem::replace(&mut self.state, BoardState::Idle(Vec::new()));
        self.state = f(prev);
    }

    /* ---------- refresh ---------- */

    /// Start a refresh. `None` if there is no source to fetch; the board
    /// then shows the configuration error and nothing else changes.
    pub fn begin_refresh(&mut self) -> Option<RefreshTicket> {
        let Some(url) = self.source.clone() else {
            loge!("Refresh: no data source configured");
            self.transition(|s| s.into_error(LoadError::ConfigMissing));
            return None;
        };

        self.issued += 1;
        self.transition(BoardState::into_loading);
        logf!("Refresh: begin token={}", self.issued);
        Some(RefreshTicket { token: self.issued, url })
    }

    /// Apply a finished refresh. Returns false if it was superseded.
    pub fn complete(&mut self, outcome: RefreshOutcome) -> bool {
        if outcome.token != self.issued {
            logd!("Refresh: drop stale token={} (latest={})", outcome.token, self.issued);
            return false;
        }

        match outcome.result {
            Ok(entries) => {
                logf!("Refresh: OK token={} entries={}", outcome.token, entries.len());
                self.transition(|s| s.into_loaded(entries));
            }
            Err(e) => {
                loge!("Refresh: failed token={}: {}", outcome.token, e);
                self.transition(|s| s.into_error(e));
            }
        }
        true
    }

    /// Begin, run and complete on the caller's thread.
    pub fn refresh(&mut self, fetcher: &dyn Fetch) {
        if let Some(ticket) = self.begin_refresh() {
            let outcome = ticket.run(fetcher);
            self.complete(outcome);
        }
    }
}
