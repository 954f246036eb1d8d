//! Output targets for reports.

use routegen_codegen::Diagnostic;

/// Where a report is rendered.
///
/// Reports say what to show through these methods. The implementation
/// picks the stream and formatting.
pub trait Output {
    /// Start a new section with a heading.
    fn section(&mut self, name: &str);

    fn key_value(&mut self, key: &str, value: &str);

    /// A newly created file.
    fn added_item(&mut self, text: &str);

    /// A diagnostic forwarded from the processor.
    fn diagnostic(&mut self, diagnostic: &Diagnostic);

    /// A failure summary line.
    fn failure(&mut self, msg: &str);

    /// A divider labelled with a file name or heading.
    fn divider(&mut self, label: &str);

    /// Text printed as is.
    fn preformatted(&mut self, text: &str);

    fn newline(&mut self);
}

/// A report that can render itself to an output.
pub trait Report {
    fn render(&self, out: &mut dyn Output);
}

/// Prints to the terminal. Errors and warnings go to stderr, the rest to
/// stdout.
#[derive(Default)]
pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Output for TerminalOutput {
    fn section(&mut self, name: &str) {
        println!("{name}:");
    }

    fn key_value(&mut self, key: &str, value: &str) {
        println!("{key}: {value}");
    }

    fn added_item(&mut self, text: &str) {
        println!("  + {text}");
    }

    fn diagnostic(&mut self, diagnostic: &Diagnostic) {
        let mut text = format!("{}: {}", diagnostic.severity, diagnostic.message);
        if let Some(location) = &diagnostic.location {
            text.push_str(&format!("\n  --> {location}"));
        }

        if diagnostic.severity.is_error() || diagnostic.severity.is_warning() {
            eprintln!("{text}");
        } else {
            println!("{text}");
        }
    }

    fn failure(&mut self, msg: &str) {
        eprintln!("{msg}");
    }

    fn divider(&mut self, label: &str) {
        println!("── {label} ──");
    }

    fn preformatted(&mut self, text: &str) {
        println!("{text}");
    }

    fn newline(&mut self) {
        println!();
    }
}
