//! Unified target dispatch.
//!
//! Centralizes target-specific generation and metadata.

use quill_codegen::{
    Dialect, Generated, GeneratorOptions, NameDatabase, OrderTable, Result, generate_report,
};
use quill_codegen_php::Php;
use quill_ir::Program;
use quill_manifest::Target;

/// Target-specific support for code generation.
pub struct TargetSupport {
    target: Target,
}

impl TargetSupport {
    /// Get support for the given target.
    pub fn get(target: Target) -> Self {
        Self { target }
    }

    pub fn name(&self) -> &'static str {
        self.target.as_str()
    }

    /// File extension without the dot (e.g., "php").
    pub fn extension(&self) -> &'static str {
        match self.target {
            Target::Php => Php.file_extension(),
        }
    }

    /// The target's precedence table.
    pub fn orders(&self) -> &'static OrderTable {
        match self.target {
            Target::Php => &quill_codegen_php::orders::TABLE,
        }
    }

    /// Run one generation pass with a fresh identifier database.
    pub fn generate(&self, program: &Program, options: GeneratorOptions) -> Result<Generated> {
        match self.target {
            Target::Php => {
                let mut names = NameDatabase::for_dialect(&Php);
                generate_report(program, &Php, &mut names, options)
            }
        }
    }
}
