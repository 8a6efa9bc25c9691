// src/config/consts.rs

// Data source: "Publish to web" CSV link. Override at build time with
// PGBEE_SHEET_URL; an empty value leaves the board unconfigured.
pub const SHEET_URL: &str = match option_env!("PGBEE_SHEET_URL") {
    Some(url) => url,
    None => "https://docs.google.com/spreadsheets/d/e/2PACX-1vSgzWqPstEpxBps7xVg-dSrOy_n7jUIgXLU9aflxWm0EUayjk6qFcDQ5Klhbftmw5aA2l3iElw8nwmG/pub?gid=0&single=true&output=csv",
};

// User-facing messages
pub const MSG_CONFIG_MISSING: &str =
    "Please add your Google Sheet CSV Link in the code configuration.";
pub const MSG_LOAD_FAILED: &str =
    "Failed to load data. Ensure the Sheet is 'Published to Web' as CSV.";

// Net config
pub const HTTP_TIMEOUT_SECS: u64 = 15;
pub const USER_AGENT: &str = concat!("pgbee_leaderboard/", env!("CARGO_PKG_VERSION"));

// Board
pub const PLACEHOLDER_NAME: &str = "loading...";
pub const PLACEHOLDER_ROWS: u32 = 5;

// Logging
pub const LOG_FILE: &str = ".store/debug.log";
pub const DEFAULT_LOG_FILTER: &str = "pgbee_leaderboard=debug";

// Window
pub const WINDOW_W: f32 = 520.0;
pub const WINDOW_H: f32 = 760.0;
