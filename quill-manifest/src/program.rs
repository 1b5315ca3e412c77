//! Program file loading.

use std::{collections::HashSet, path::Path};

use quill_ir::{Node, Program};

use crate::{Error, Result, error::SourceContext};

/// Load a program JSON file from the given path.
pub fn load_program(path: impl AsRef<Path>) -> Result<Program> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| {
        Box::new(Error::Io {
            path: path.to_path_buf(),
            source: e,
        })
    })?;
    parse_program(&content, &path.display().to_string())
}

/// Parse a program from JSON with the given filename for error reporting.
///
/// Unknown construct kinds and malformed slots are rejected here, before any
/// code is generated. Two variables sharing an id are a validation error.
pub fn parse_program(content: &str, filename: &str) -> Result<Program> {
    let source_ctx = SourceContext::new(content, filename);
    let program: Program =
        serde_json::from_str(content).map_err(|e| source_ctx.program_error(e))?;

    let mut seen = HashSet::new();
    for variable in &program.variables {
        if !seen.insert(variable.id.as_str()) {
            return Err(source_ctx.validation_error(format!(
                "variable id '{}' is declared more than once",
                variable.id
            )));
        }
    }

    for id in undeclared_references(&program) {
        tracing::warn!(variable = %id, "reference to undeclared variable");
    }

    tracing::debug!(
        file = filename,
        variables = program.variables.len(),
        blocks = program.blocks.len(),
        "loaded program"
    );
    Ok(program)
}

/// Variable ids referenced by some node but not declared by the program.
pub fn undeclared_references(program: &Program) -> Vec<&str> {
    let mut missing = Vec::new();
    for id in program
        .blocks
        .iter()
        .flat_map(Node::descendants)
        .filter_map(|n| n.construct.variable_ref())
    {
        if program.find_variable(id).is_none() && !missing.contains(&id) {
            missing.push(id);
        }
    }
    missing
}
