//! Arguments shared by every command that reads a declarations file.

use std::path::PathBuf;

use clap::Args;
use routegen_model::{DEFAULT_FILENAME, Declarations, DeclarationsFile, Options};

use super::UnwrapOrExit;

#[derive(Args)]
pub struct InputArgs {
    /// Path to the declarations file
    #[arg(short, long, default_value = DEFAULT_FILENAME)]
    pub declarations: PathBuf,

    /// Processor option as KEY=VALUE, overriding [options] (repeatable)
    #[arg(short = 'A', long = "option", value_name = "KEY=VALUE", value_parser = parse_option)]
    pub options: Vec<(String, String)>,

    /// Annotation type to claim (overrides [processor].annotation)
    #[arg(long)]
    pub annotation: Option<String>,
}

impl InputArgs {
    /// Open the declarations file and apply command-line overrides.
    pub fn load(&self) -> Declarations {
        let file = DeclarationsFile::open(&self.declarations).unwrap_or_exit();
        self.apply(file.into_declarations())
    }

    fn apply(&self, mut declarations: Declarations) -> Declarations {
        let overrides = self
            .options
            .iter()
            .fold(Options::new(), |options, (key, value)| options.with(key, value));
        declarations.options.merge(overrides);

        if let Some(annotation) = &self.annotation {
            declarations.processor.annotation = annotation.clone();
        }

        declarations
    }
}

fn parse_option(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, _)) if key.trim().is_empty() => {
            Err(format!("option '{raw}' has an empty key"))
        }
        Some((key, value)) => Ok((key.trim().to_string(), value.to_string())),
        None => Err(format!("expected KEY=VALUE, got '{raw}'")),
    }
}
