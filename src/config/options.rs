// src/config/options.rs
use super::consts::SHEET_URL;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppOptions {
    pub source: SourceOptions,
    pub output: OutputOptions,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            source: SourceOptions::default(),
            output: OutputOptions::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceOptions {
    url: Option<String>,
}

impl Default for SourceOptions {
    fn default() -> Self {
        Self::from_url(SHEET_URL)
    }
}

impl SourceOptions {
    /// Blank text means "not configured".
    pub fn from_url(text: &str) -> Self {
        let t = text.trim();
        Self { url: if t.is_empty() { None } else { Some(s!(t)) } }
    }

    pub fn url(&self) -> Option<&str> { self.url.as_deref() }

    pub fn set_url(&mut self, text: &str) {
        *self = Self::from_url(text);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Csv,
    Tsv,
}

impl OutputFormat {
    /// Field separator for the delimited formats.
    pub fn delim(&self) -> Option<char> {
        match self {
            OutputFormat::Text => None,
            OutputFormat::Csv => Some(','),
            OutputFormat::Tsv => Some('\t'),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputOptions {
    pub format: OutputFormat,
    pub include_headers: bool,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            include_headers: false,
        }
    }
}
