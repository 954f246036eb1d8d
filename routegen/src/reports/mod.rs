//! Report data structures for commands.
//!
//! Operations build reports, commands render them to an [`Output`](output::Output).

mod check;
mod output;
mod process;

pub use check::CheckReport;
pub use output::{Report, TerminalOutput};
pub use process::{GenerationResult, PreviewFile, PreviewResult, ProcessReport, WrittenResult};
