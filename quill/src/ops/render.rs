//! Render operation - program to source text.

use std::path::Path;

use eyre::{Context, Result};
use quill_codegen::{Generated, GeneratorOptions};
use quill_ir::Program;
use quill_manifest::Manifest;

use crate::{reports::RenderReport, target::TargetSupport};

/// Execute one generation pass with the manifest's settings.
pub fn render(program: &Program, manifest: &Manifest, target: &TargetSupport) -> Result<Generated> {
    let options = GeneratorOptions::from(manifest);
    tracing::debug!(target_lang = target.name(), ?options, "rendering program");
    target
        .generate(program, options)
        .wrap_err_with(|| format!("Failed to generate {} code", target.name()))
}

/// Write generated code to `path`, adding the target's extension when the
/// path has none.
pub fn write(generated: &Generated, path: &Path, target: &TargetSupport) -> Result<RenderReport> {
    let path = if path.extension().is_none() {
        path.with_extension(target.extension())
    } else {
        path.to_path_buf()
    };
    std::fs::write(&path, &generated.code)
        .wrap_err_with(|| format!("Failed to write {}", path.display()))?;

    Ok(RenderReport {
        output_path: path,
        lines: generated.code.lines().count(),
        helpers: generated.helpers.iter().map(|(_, name)| name.clone()).collect(),
    })
}

#[cfg(test)]
mod tests {
    use quill_ir::{Construct, Node};
    use quill_manifest::Target;
    use tempfile::TempDir;

    use super::*;

    fn hello() -> Program {
        Program::new().block(Node::new(Construct::TextPrint {
            value: Node::new(Construct::Text {
                text: "hello".into(),
            })
            .boxed(),
        }))
    }

    #[test]
    fn test_render_with_defaults() {
        let target = TargetSupport::get(Target::Php);
        let generated = render(&hello(), &Manifest::default(), &target).unwrap();
        assert_eq!(generated.code, "print('hello');\n");
    }

    #[test]
    fn test_write_adds_extension() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let target = TargetSupport::get(Target::Php);
        let generated = render(&hello(), &Manifest::default(), &target).unwrap();

        let report = write(&generated, &temp_dir.path().join("out"), &target).unwrap();
        assert_eq!(report.output_path, temp_dir.path().join("out.php"));
        assert_eq!(report.lines, 1);
        assert_eq!(
            std::fs::read_to_string(&report.output_path).unwrap(),
            "print('hello');\n"
        );
    }

    #[test]
    fn test_write_keeps_given_extension() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let target = TargetSupport::get(Target::Php);
        let generated = render(&hello(), &Manifest::default(), &target).unwrap();

        let report = write(&generated, &temp_dir.path().join("out.inc"), &target).unwrap();
        assert_eq!(report.output_path, temp_dir.path().join("out.inc"));
    }
}
