// src/cli.rs
//
// Headless refresh: load the sheet once and print the ranked board.

use std::io::{self, Write};

use crate::{
    board::{Board, BoardState},
    config::options::{AppOptions, OutputFormat},
    core::{Fetch, HttpFetcher},
    csv,
    entry::LeaderboardEntry,
};

pub enum Command {
    Run(AppOptions),
    Help,
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let opts = match parse_args(std::env::args().skip(1))? {
        Command::Help => {
            eprintln!("{}", include_str!("cli_help.txt"));
            return Ok(());
        }
        Command::Run(opts) => opts,
    };
    let fetcher = HttpFetcher::new()?;
    let stdout = io::stdout();
    run_with(&opts, &fetcher, stdout.lock())
}

/// Refresh through `fetcher` and write the board to `out`.
/// The board's error message becomes the returned error.
pub fn run_with<W: Write>(
    opts: &AppOptions,
    fetcher: &dyn Fetch,
    mut out: W,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut board = Board::new(opts.source.url());
    board.refresh(fetcher);

    if let BoardState::Error { error, .. } = board.state() {
        return Err(error.to_string().into());
    }

    let entries = board.entries();
    logf!("CLI: printing {} entries as {:?}", entries.len(), opts.output.format);

    match opts.output.format.delim() {
        Some(sep) => {
            let text = csv::board_to_string(entries, opts.output.include_headers, sep);
            out.write_all(text.as_bytes())?;
        }
        None => write_text(&mut out, entries, opts.output.include_headers)?,
    }
    out.flush()?;
    Ok(())
}

fn write_text<W: Write>(out: &mut W, entries: &[LeaderboardEntry], headers: bool) -> io::Result<()> {
    let name_w = entries
        .iter()
        .map(|e| e.name.chars().count())
        .max()
        .unwrap_or(0)
        .max(4);

    if headers {
        writeln!(out, "{:>4}  {:<name_w$}  {:>8}", "Rank", "Name", "Points")?;
    }
    for e in entries {
        writeln!(out, "{:>4}  {:<name_w$}  {:>8}  {}", e.rank, e.name, e.score, e.glyph().as_str())?;
    }
    Ok(())
}

pub fn parse_args<I>(args: I) -> Result<Command, Box<dyn std::error::Error>>
where
    I: IntoIterator<Item = String>,
{
    let mut opts = AppOptions::default();
    let mut args = args.into_iter();

    while let Some(a) = args.next() {
        match a.as_str() {
            "--url" => {
                let v = args.next().ok_or("Missing value for --url")?;
                opts.source.set_url(&v);
            }
            "--format" => {
                let v = args.next().ok_or("Missing value for --format")?;
                opts.output.format = match v.to_ascii_lowercase().as_str() {
                    "text" => OutputFormat::Text,
                    "csv" => OutputFormat::Csv,
                    "tsv" => OutputFormat::Tsv,
                    other => return Err(format!("Unknown format: {}", other).into()),
                };
            }
            "--headers" => opts.output.include_headers = true,
            "-h" | "--help" => return Ok(Command::Help),
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    Ok(Command::Run(opts))
}
