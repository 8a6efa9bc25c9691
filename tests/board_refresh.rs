// tests/board_refresh.rs
//
// Board refresh flow against an in-memory sheet; no network.

use std::sync::Mutex;

use pgbee_leaderboard::{
    board::{Board, BoardState},
    config::consts::{MSG_CONFIG_MISSING, MSG_LOAD_FAILED},
    core::{Fetch, FetchError},
    LoadError,
};

const SHEET: &str = "Name,Wk1,Wk2\n,12/01,12/08\nAlice,10,5\nBob,7,\nCarol,abc,20\n";

/// Serves queued responses in order, recording requested URLs.
struct Script {
    replies: Mutex<Vec<Result<String, FetchError>>>,
    seen: Mutex<Vec<String>>,
}

impl Script {
    fn new(mut replies: Vec<Result<String, FetchError>>) -> Self {
        replies.reverse();
        Self { replies: Mutex::new(replies), seen: Mutex::new(Vec::new()) }
    }
}

impl Fetch for Script {
    fn get_text(&self, url: &str) -> Result<String, FetchError> {
        self.seen.lock().unwrap().push(url.to_string());
        self.replies.lock().unwrap().pop().expect("unexpected fetch")
    }
}

fn names_scores_ranks(b: &Board) -> Vec<(String, i64, u32)> {
    b.entries().iter().map(|e| (e.name.clone(), e.score, e.rank)).collect()
}

#[test]
fn end_to_end_ranking() {
    let fetch = Script::new(vec![Ok(SHEET.to_string())]);
    let mut board = Board::new(Some("https://sheet.test/pub?output=csv"));

    board.refresh(&fetch);

    assert!(matches!(board.state(), BoardState::Loaded(_)));
    assert_eq!(
        names_scores_ranks(&board),
        vec![
            ("Carol".to_string(), 20, 1),
            ("Alice".to_string(), 15, 2),
            ("Bob".to_string(), 7, 3),
        ]
    );
    // ids are source line numbers
    let ids: Vec<u32> = board.entries().iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![4, 2, 3]);
    assert_eq!(fetch.seen.lock().unwrap().as_slice(), ["https://sheet.test/pub?output=csv"]);
}

#[test]
fn non_success_status_keeps_entries() {
    let fetch = Script::new(vec![Ok(SHEET.to_string()), Err(FetchError::Status(500))]);
    let mut board = Board::new(Some("https://sheet.test/pub"));

    board.refresh(&fetch);
    let shown = names_scores_ranks(&board);

    board.refresh(&fetch);
    assert_eq!(names_scores_ranks(&board), shown);
    assert_eq!(board.error_message().as_deref(), Some(MSG_LOAD_FAILED));
    assert!(!board.is_loading());
}

#[test]
fn failure_before_first_load_keeps_placeholders() {
    let fetch = Script::new(vec![Err(FetchError::Status(404))]);
    let mut board = Board::new(Some("https://sheet.test/pub"));

    board.refresh(&fetch);

    assert_eq!(board.entries().len(), 5);
    assert!(board.entries().iter().all(|e| e.name == "loading..."));
    match board.state() {
        BoardState::Error { error: LoadError::LoadFailed(FetchError::Status(code)), .. } => {
            assert_eq!(*code, 404)
        }
        other => panic!("unexpected state: {other:?}"),
    }
}

#[test]
fn missing_source_never_fetches() {
    let fetch = Script::new(Vec::new());
    let mut board = Board::new(None);

    board.refresh(&fetch);

    assert!(fetch.seen.lock().unwrap().is_empty());
    assert_eq!(board.error_message().as_deref(), Some(MSG_CONFIG_MISSING));
    assert_eq!(board.entries().len(), 5);
}

#[test]
fn success_after_failure_clears_error() {
    let fetch = Script::new(vec![Err(FetchError::Status(503)), Ok(SHEET.to_string())]);
    let mut board = Board::new(Some("https://sheet.test/pub"));

    board.refresh(&fetch);
    assert!(board.error_message().is_some());

    board.refresh(&fetch);
    assert_eq!(board.error_message(), None);
    assert_eq!(board.entries()[0].name, "Carol");
}

#[test]
fn each_load_replaces_the_list() {
    let fetch = Script::new(vec![
        Ok(SHEET.to_string()),
        Ok("Name,Wk1\n,12/01\nDan,1\n".to_string()),
    ]);
    let mut board = Board::new(Some("https://sheet.test/pub"));

    board.refresh(&fetch);
    board.refresh(&fetch);

    assert_eq!(names_scores_ranks(&board), vec![("Dan".to_string(), 1, 1)]);
}

#[test]
fn last_triggered_wins_out_of_order() {
    let mut board = Board::new(Some("https://sheet.test/pub"));
    let old = board.begin_refresh().unwrap();
    let new = board.begin_refresh().unwrap();
    assert!(new.token > old.token);

    let new_fetch = Script::new(vec![Ok("Name,Wk1\n,12/01\nNew,9\n".to_string())]);
    let old_fetch = Script::new(vec![Ok("Name,Wk1\n,12/01\nOld,1\n".to_string())]);

    let new_out = new.run(&new_fetch);
    let old_out = old.run(&old_fetch);

    // newest lands first, older arrives afterwards and is ignored
    assert!(board.complete(new_out));
    assert!(!board.complete(old_out));
    assert_eq!(board.entries()[0].name, "New");
}
