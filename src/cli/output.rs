use console::style;

/// Styled terminal output for the human-facing commands. JSON results
/// go straight to stdout; these helpers cover everything else.
pub struct Output;

impl Output {
    pub fn new() -> Self {
        Self
    }

    pub fn error(&self, message: &str) {
        eprintln!("{} {}", style("✗").red(), message);
    }

    pub fn warning(&self, message: &str) {
        println!("{} {}", style("⚠").yellow(), message);
    }

    pub fn section(&self, message: &str) {
        println!("\n{}", style(message).bold());
        println!("{}", "─".repeat(40));
    }
}

impl Default for Output {
    fn default() -> Self {
        Self::new()
    }
}
