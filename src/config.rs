use crate::*;
use confique::Config as _;
use std::{path::Path, str::FromStr};

/// File consulted after the environment; missing files are ignored.
pub const CONFIG_FILE: &str = "sqlprism.toml";

#[derive(Debug, confique::Config)]
pub struct Config {
    /// Output mode used when none is given on the command line.
    #[config(env = "SQLPRISM_MODE", default = "highlight")]
    pub mode: String,
    /// Spaces inserted after a top-level comma break.
    #[config(env = "SQLPRISM_INDENT", default = 4)]
    pub indent: usize,
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    /// Environment first, then `file` if it exists, then defaults.
    pub fn load_from(file: &Path) -> Result<Self> {
        Ok(Self::builder().env().file(file).load()?)
    }

    pub fn mode(&self) -> Result<Mode> {
        self.mode.parse()
    }

    pub fn format_options(&self) -> FormatOptions {
        FormatOptions {
            indent: self.indent,
        }
    }
}

/// What the command line does with the SQL it reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Mode {
    /// HTML with category-tagged spans.
    #[display("highlight")]
    Highlight,
    /// Re-flowed plain text.
    #[display("format")]
    Format,
    /// Re-flowed, then highlighted.
    #[display("pretty")]
    Pretty,
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "highlight" => Ok(Mode::Highlight),
            "format" => Ok(Mode::Format),
            "pretty" => Ok(Mode::Pretty),
            _ => Err(Error::InvalidMode(s.to_string())),
        }
    }
}

impl Mode {
    /// Apply this mode to `sql` using the built-in word sets.
    pub fn apply(self, sql: &str, options: &FormatOptions) -> String {
        let (keywords, functions) = (WordSet::keywords(), WordSet::functions());
        match self {
            Mode::Highlight => highlight(sql, keywords, functions),
            Mode::Format => format_with(sql, options),
            Mode::Pretty => highlight(&format_with(sql, options), keywords, functions),
        }
    }
}
