//! Check operation - a full generation pass without output.

use std::{collections::HashSet, path::Path};

use eyre::Result;
use quill_ir::Program;
use quill_manifest::{Manifest, undeclared_references};

use crate::{reports::CheckReport, target::TargetSupport};

/// Execute the check operation.
///
/// Runs the generator and summarizes the preamble it would emit.
pub fn check(
    program: &Program,
    manifest: &Manifest,
    target: &TargetSupport,
    program_path: &Path,
) -> Result<CheckReport> {
    let generated = super::render(program, manifest, target)?;

    let helper_keys: HashSet<&str> = generated.helpers.iter().map(|(k, _)| k.as_str()).collect();
    let definitions = generated
        .definitions
        .iter()
        .filter(|key| !helper_keys.contains(key.as_str()))
        .cloned()
        .collect();

    Ok(CheckReport {
        program_path: program_path.to_path_buf(),
        target: target.name(),
        lines: generated.code.lines().count(),
        helpers: generated.helpers.clone(),
        definitions,
        undeclared: undeclared_references(program)
            .into_iter()
            .map(String::from)
            .collect(),
    })
}
