//! Declarations parsing from files and strings.

use std::{path::Path, str::FromStr};

use crate::{Declarations, Error, Result, error::SourceContext, validate::ParseContext};

/// Filename used in error reports when parsing from a string.
pub const DEFAULT_FILENAME: &str = "routes.toml";

impl FromStr for Declarations {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_declarations(s, DEFAULT_FILENAME)
    }
}

impl Declarations {
    /// Parse a declarations file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_declarations(&content, &path.display().to_string())
    }

    /// Parse declarations from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_declarations(content, filename)
    }
}

/// Parse declarations from content with the given filename for error reporting.
pub fn parse_declarations(content: &str, filename: &str) -> Result<Declarations> {
    let source_ctx = SourceContext::new(content, filename);
    let declarations: Declarations =
        toml::from_str(content).map_err(|e| source_ctx.parse_error(e))?;
    validate_declarations(&declarations, content, filename)?;
    Ok(declarations)
}

/// Validate element names after parsing.
fn validate_declarations(declarations: &Declarations, src: &str, filename: &str) -> Result<()> {
    let ctx = ParseContext::new(src, filename);

    for (index, round) in declarations.rounds.iter().enumerate() {
        let round_ctx = ctx.push(format!("round {}", index + 1));
        for element in &round.elements {
            round_ctx.validate_element(element)?;
        }
    }
    Ok(())
}
