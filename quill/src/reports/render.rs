//! Render command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from writing generated code to a file.
#[derive(Debug)]
pub struct RenderReport {
    /// Where the code was written.
    pub output_path: PathBuf,
    /// Lines of generated code.
    pub lines: usize,
    /// Names of the helpers emitted into the preamble.
    pub helpers: Vec<String>,
}

impl Report for RenderReport {
    fn render(&self, out: &mut dyn Output) {
        out.preformatted(&format!(
            "✓ wrote {} ({} lines)",
            self.output_path.display(),
            self.lines
        ));
        if !self.helpers.is_empty() {
            out.key_value_indented("helpers", &self.helpers.join(", "));
        }
    }
}
