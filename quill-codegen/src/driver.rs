//! Whole-program generation.

use quill_ir::Program;

use crate::dialect::{Dialect, Handlers};
use crate::error::Result;
use crate::names::NameDb;
use crate::options::GeneratorOptions;
use crate::session::Session;

/// Output of a generation pass with a summary of its preamble.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated {
    /// Complete target source text.
    pub code: String,
    /// `(key, name)` of each helper provided, in first-request order.
    pub helpers: Vec<(String, String)>,
    /// Keys of every preamble definition, helpers included.
    pub definitions: Vec<String>,
}

/// Generate target source for a whole program.
pub fn generate<T>(
    program: &Program,
    target: &T,
    names: &mut dyn NameDb,
    options: GeneratorOptions,
) -> Result<String>
where
    T: Dialect + Handlers,
{
    generate_report(program, target, names, options).map(|g| g.code)
}

/// Generate target source and report which helpers and definitions the
/// pass produced.
#[tracing::instrument(
    level = "debug",
    skip_all,
    fields(target_lang = target.name(), blocks = program.blocks.len())
)]
pub fn generate_report<T>(
    program: &Program,
    target: &T,
    names: &mut dyn NameDb,
    options: GeneratorOptions,
) -> Result<Generated>
where
    T: Dialect + Handlers,
{
    let mut session = Session::init(target, target, names, options);
    session.bind_program(program)?;

    let mut chunks = Vec::new();
    for block in &program.blocks {
        let code = session.top_level(block)?;
        if !code.is_empty() {
            chunks.push(code);
        }
    }

    let helpers = session
        .helpers()
        .iter()
        .map(|r| (r.key.clone(), r.name.clone()))
        .collect();
    let definitions = session.definitions().map(|(k, _)| k.to_string()).collect();
    let code = session.finish(&chunks.join("\n"));

    Ok(Generated {
        code: tidy(&code),
        helpers,
        definitions,
    })
}

/// Final whitespace clean-up: drop leading blank lines, end with at most
/// one newline and strip spaces and tabs that precede a newline.
fn tidy(code: &str) -> String {
    let leading = code.len() - code.trim_start().len();
    let start = code[..leading].rfind('\n').map_or(0, |i| i + 1);
    let mut code = code[start..].to_string();

    let trimmed = code.trim_end().len();
    if code[trimmed..].contains('\n') {
        code.truncate(trimmed);
        code.push('\n');
    }

    let mut lines: Vec<&str> = code.split('\n').collect();
    // The final segment is not followed by a newline and keeps its spaces.
    let last = lines.pop().unwrap_or_default();
    let mut out: String = lines
        .into_iter()
        .map(|line| format!("{}\n", line.trim_end_matches([' ', '\t'])))
        .collect();
    out.push_str(last);
    out
}
