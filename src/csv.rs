// src/csv.rs
use std::io::{self, Write};

use crate::entry::LeaderboardEntry;

/* ---------------- Source format ---------------- */

/// Shape of the sheet export we read.
///
/// The published sheet carries a header row (names of the weekly columns)
/// and a label row (dates) before any data. Splitting is naive: the
/// delimiter is never escaped, so a quoted field containing it is split.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SheetFormat {
    /// Leading lines skipped unconditionally
    pub header_lines: usize,
    pub delimiter: char,
    /// Stripped once from each end of the name cell, when enclosing it
    pub quote: char,
}

impl SheetFormat {
    pub const PUBLISHED_EXPORT: SheetFormat = SheetFormat {
        header_lines: 2,
        delimiter: ',',
        quote: '"',
    };
}

impl Default for SheetFormat {
    fn default() -> Self { Self::PUBLISHED_EXPORT }
}

/* ---------------- Parsing ---------------- */

/// Parse the published export into unranked entries.
pub fn parse(text: &str) -> Vec<LeaderboardEntry> {
    parse_entries(text, &SheetFormat::PUBLISHED_EXPORT)
}

/// Rows → entries, one per data line with a non-empty name.
/// Never fails: bad cells count as 0, bad rows are dropped.
pub fn parse_entries(text: &str, fmt: &SheetFormat) -> Vec<LeaderboardEntry> {
    let mut out = Vec::new();

    // lines() handles both LF and CRLF
    for (ix, raw) in text.lines().enumerate().skip(fmt.header_lines) {
        let line = raw.trim();
        if line.is_empty() { continue; }

        let mut cols = line.split(fmt.delimiter);
        let Some(first) = cols.next() else { continue };
        let rest: Vec<&str> = cols.collect();
        if rest.is_empty() { continue; } // need name + at least one value column

        let name = strip_enclosing(first.trim(), fmt.quote);
        if name.is_empty() { continue; }

        let score = rest
            .iter()
            .map(|c| parse_int_lenient(c))
            .fold(0i64, i64::saturating_add);

        out.push(LeaderboardEntry::new(ix as u32, name, score));
    }

    logd!("Parse: {} entries from {} bytes", out.len(), text.len());
    out
}

/// Drop one `quote` from each end, only when both ends carry one.
fn strip_enclosing(s: &str, quote: char) -> &str {
    s.strip_prefix(quote)
        .and_then(|inner| inner.strip_suffix(quote))
        .unwrap_or(s)
}

/// Spreadsheet-style integer read: optional sign, then the leading run of
/// digits. Anything else (empty, "abc", "-") is 0. "12pts" → 12, "3.7" → 3.
pub fn parse_int_lenient(cell: &str) -> i64 {
    let s = cell.trim();
    let (neg, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let mut value: i64 = 0;
    let mut seen = false;
    for b in digits.bytes() {
        if !b.is_ascii_digit() { break; }
        seen = true;
        value = value.saturating_mul(10).saturating_add((b - b'0') as i64);
    }

    match (seen, neg) {
        (false, _) => 0,
        (true, true) => -value,
        (true, false) => value,
    }
}

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write>(mut w: W, row: &[String], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

pub const BOARD_HEADERS: [&str; 3] = ["Rank", "Name", "Score"];

/// Ranked board as delimited text (Rank, Name, Score).
pub fn board_to_string(entries: &[LeaderboardEntry], include_headers: bool, sep: char) -> String {
    let mut buf: Vec<u8> = Vec::new();

    if include_headers {
        let h: Vec<String> = BOARD_HEADERS.iter().map(|s| s!(*s)).collect();
        let _ = write_row(&mut buf, &h, sep);
    }
    for e in entries {
        let row = vec![e.rank.to_string(), e.name.clone(), e.score.to_string()];
        let _ = write_row(&mut buf, &row, sep);
    }

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn one(row: &str) -> Vec<LeaderboardEntry> {
        parse(&format!("Name,Wk1\n,12/01\n{row}\n"))
    }

    #[test]
    fn sums_numbers_and_ignores_junk() {
        let e = one("Alice,10,20,x,");
        assert_eq!(e.len(), 1);
        assert_eq!(e[0].name, "Alice");
        assert_eq!(e[0].score, 30);
        assert_eq!(e[0].rank, 0);
    }

    #[test]
    fn empty_name_dropped() {
        assert!(one(",5,5").is_empty());
        assert!(one("   ,5,5").is_empty());
    }

    #[test]
    fn quotes_stripped_from_name() {
        assert_eq!(one("\"Bob\",1,2")[0].name, "Bob");
    }

    #[test]
    fn lone_quote_kept() {
        assert_eq!(one("\"Bob,1")[0].name, "\"Bob");
    }

    #[test]
    fn name_only_row_needs_a_value_column() {
        assert!(one("Dave").is_empty());
        let e = one("Dave,");
        assert_eq!(e.len(), 1);
        assert_eq!(e[0].score, 0);
    }

    #[test]
    fn all_blank_scores_still_included() {
        let e = one("Eve, , ,abc");
        assert_eq!(e[0].score, 0);
    }

    #[test]
    fn header_lines_skipped_even_if_data_like() {
        let e = parse("Zed,100\nYan,200\nAlice,1\nBob,2\n");
        assert_eq!(e.len(), 2);
        assert_eq!(e[0].name, "Alice");
        assert_eq!(e[1].name, "Bob");
    }

    #[test]
    fn ids_are_source_line_indexes() {
        let e = parse("h\nl\n\nAlice,1\r\nBob,2\r\n");
        assert_eq!(e.iter().map(|x| x.id).collect::<Vec<_>>(), vec![3, 4]);
    }

    #[test]
    fn crlf_and_trailing_blank_lines() {
        let e = parse("Name,Wk1\r\n,12/01\r\nAlice,4\r\n\r\n   \r\n");
        assert_eq!(e.len(), 1);
        assert_eq!(e[0].score, 4);
    }

    #[test]
    fn short_input_yields_nothing() {
        assert!(parse("").is_empty());
        assert!(parse("Name,Wk1").is_empty());
        assert!(parse("Name,Wk1\n,12/01").is_empty());
    }

    #[test]
    fn custom_format() {
        let fmt = SheetFormat { header_lines: 0, delimiter: ';', quote: '\'' };
        let e = parse_entries("'Ann';3;4\n", &fmt);
        assert_eq!(e[0].name, "Ann");
        assert_eq!(e[0].score, 7);
        assert_eq!(e[0].id, 0);
    }

    #[test]
    fn lenient_int() {
        assert_eq!(parse_int_lenient("12"), 12);
        assert_eq!(parse_int_lenient(" 7 "), 7);
        assert_eq!(parse_int_lenient("-3"), -3);
        assert_eq!(parse_int_lenient("+5"), 5);
        assert_eq!(parse_int_lenient("12pts"), 12);
        assert_eq!(parse_int_lenient("3.7"), 3);
        assert_eq!(parse_int_lenient("abc"), 0);
        assert_eq!(parse_int_lenient("-"), 0);
        assert_eq!(parse_int_lenient(""), 0);
    }

    #[test]
    fn huge_cells_saturate() {
        let e = one("Big,99999999999999999999999,99999999999999999999999");
        assert_eq!(e[0].score, i64::MAX);
    }

    #[test]
    fn writer_quotes_when_needed() {
        let mut buf = Vec::new();
        write_row(&mut buf, &[s!("1"), s!("Smith, Jo"), s!("say \"hi\"")], ',').unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "1,\"Smith, Jo\",\"say \"\"hi\"\"\"\n");
    }

    #[test]
    fn board_string_with_headers() {
        let mut e = LeaderboardEntry::new(2, "Carol", 20);
        e.rank = 1;
        let s = board_to_string(&[e], true, '\t');
        assert_eq!(s, "Rank\tName\tScore\n1\tCarol\t20\n");
    }
}
