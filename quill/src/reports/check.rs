//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from a dry generation pass.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the program file.
    pub program_path: PathBuf,
    /// Target language name.
    pub target: &'static str,
    /// Lines of generated code.
    pub lines: usize,
    /// `(key, name)` of each helper the program pulls in.
    pub helpers: Vec<(String, String)>,
    /// Preamble entries that are not helpers.
    pub definitions: Vec<String>,
    /// Variable ids referenced but never declared.
    pub undeclared: Vec<String>,
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for id in &self.undeclared {
            out.warning(&format!("variable '{}' is used but not declared", id));
        }
        if !self.undeclared.is_empty() {
            out.newline();
        }

        out.preformatted(&format!(
            "✓ {} renders to {} ({} line{})",
            self.program_path.display(),
            self.target,
            self.lines,
            plural(self.lines)
        ));

        if !self.helpers.is_empty() {
            out.newline();
            out.section(&format!(
                "{} helper{}",
                self.helpers.len(),
                plural(self.helpers.len())
            ));
            for (key, name) in &self.helpers {
                if key == name {
                    out.list_item(key);
                } else {
                    out.list_item(&format!("{} (as {})", key, name));
                }
            }
        }

        if !self.definitions.is_empty() {
            out.newline();
            out.section(&format!(
                "{} definition{}",
                self.definitions.len(),
                plural(self.definitions.len())
            ));
            for key in &self.definitions {
                out.list_item(key);
            }
        }
    }
}

fn plural(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}
