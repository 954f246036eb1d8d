use clap::Args;
use eyre::Result;

use super::input::InputArgs;
use crate::{
    language::{Language, LanguageSupport},
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub input: InputArgs,

    /// Target language
    #[arg(short, long, value_enum, default_value_t)]
    pub language: Language,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let declarations = self.input.load();
        let report = ops::check(
            &declarations,
            &self.input.declarations,
            LanguageSupport::get(self.language),
        )?;

        report.render(&mut TerminalOutput::new());

        if !report.is_valid() {
            std::process::exit(1);
        }

        Ok(())
    }
}
