use console::style;

pub struct Output;

impl Output {
    pub fn new() -> Self {
        Self
    }

    pub fn success(&self, message: &str) {
        println!("{} {}", style("✓").green(), message);
    }

    pub fn error(&self, message: &str) {
        eprintln!("{} {}", style("✗").red(), message);
    }

    pub fn warning(&self, message: &str) {
        println!("{} {}", style("⚠").yellow(), message);
    }

    pub fn info(&self, message: &str) {
        println!("{} {}", style("ℹ").blue(), message);
    }

    pub fn section(&self, message: &str) {
        println!("\n{}", style(message).bold());
        println!("{}", "─".repeat(40));
    }

    /// Path with an existence marker, as in `config path`
    pub fn path_entry(&self, label: &str, path: &std::path::Path) {
        let marker = if path.exists() {
            style("✓").green()
        } else {
            style("✗").dim()
        };
        println!("  {:<8} {} {}", label, marker, path.display());
    }
}

impl Default for Output {
    fn default() -> Self {
        Self::new()
    }
}
