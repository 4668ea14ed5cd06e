use std::fmt::Write as _;

pub(crate) const GREEN_CHECK: &str = "\u{2705}";
pub(crate) const RED_X: &str = "\u{274c}";

const INDENT: &str = "  ";

/// Accumulates an indented, line-oriented tree for terminal output.
#[derive(Debug, Default)]
pub(crate) struct TreeWriter {
    depth: usize,
    out: String,
}
impl TreeWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn finish(self) -> String {
        self.out
    }

    pub fn line(&mut self, fmt_args: std::fmt::Arguments<'_>) {
        for _ in 0..self.depth {
            self.out.push_str(INDENT);
        }
        // Writing into a `String` cannot fail.
        let _ = self.out.write_fmt(fmt_args);
        self.out.push('\n');
    }

    /// Runs `f` with every line it writes nested one level deeper.
    pub fn nested(&mut self, f: impl FnOnce(&mut Self)) {
        self.depth += 1;
        f(self);
        self.depth -= 1;
    }
}

pub(crate) fn format_failures(failures: &[anyhow::Error]) -> String {
    let mut out = format!("{RED_X} {} error(s):", failures.len());
    for failure in failures {
        out.push_str("\n  * ");
        out.push_str(&format!("{failure:#}"));
    }
    out
}
