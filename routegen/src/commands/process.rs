use std::path::PathBuf;

use clap::Args;
use eyre::Result;

use super::input::InputArgs;
use crate::{
    language::{Language, LanguageSupport},
    ops::{self, ProcessOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct ProcessCommand {
    #[command(flatten)]
    pub input: InputArgs,

    /// Source root for generated files
    #[arg(short, long, default_value = "generated")]
    pub out: PathBuf,

    /// Target language
    #[arg(short, long, value_enum, default_value_t)]
    pub language: Language,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,

    /// Write per-phase pipeline snapshots as JSON into this directory
    #[arg(long, value_name = "DIR")]
    pub visualize: Option<PathBuf>,
}

impl ProcessCommand {
    /// Run the process command
    pub fn run(&self) -> Result<()> {
        let declarations = self.input.load();

        let report = ops::process(
            &declarations,
            LanguageSupport::get(self.language),
            ProcessOptions {
                output_dir: &self.out,
                dry_run: self.dry_run,
                visualize: self.visualize.as_deref(),
            },
        )?;

        report.render(&mut TerminalOutput::new());

        if report.has_errors() {
            std::process::exit(1);
        }

        Ok(())
    }
}
