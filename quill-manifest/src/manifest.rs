//! `quill.toml` parsing and validation.

use std::{fmt, path::Path, str::FromStr};

use miette::SourceSpan;
use quill_codegen::{GeneratorOptions, IndexOrigin};
use quill_core::Indent;
use serde::Deserialize;

use crate::{Error, Result, error::SourceContext};

/// Smallest accepted `comment_wrap`.
pub const MIN_COMMENT_WRAP: usize = 10;

/// Largest accepted `indent`.
pub const MAX_INDENT: u8 = 8;

/// Root schema for quill.toml
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Generator settings
    #[serde(default)]
    pub generator: GeneratorConfig,
}

/// The `[generator]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Target language
    pub target: Target,
    /// Whether list and text positions start at 1
    pub one_based_index: bool,
    /// Maximum comment line length
    pub comment_wrap: usize,
    /// Spaces per indent level, 0 for a tab
    pub indent: u8,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            target: Target::default(),
            one_based_index: true,
            comment_wrap: GeneratorOptions::DEFAULT_COMMENT_WRAP,
            indent: 2,
        }
    }
}

/// Supported target languages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    #[default]
    Php,
}

impl Target {
    pub const ALL: &'static [Target] = &[Target::Php];

    pub fn as_str(&self) -> &'static str {
        match self {
            Target::Php => "php",
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Target {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Target::ALL
            .iter()
            .copied()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown target '{s}' (available: php)"))
    }
}

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, "quill.toml")
    }
}

impl Manifest {
    /// Parse a quill.toml file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_manifest(&content, &path.display().to_string())
    }

    /// Parse a quill.toml file, or use the defaults when it does not exist.
    pub fn from_file_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        Self::from_file(path)
    }

    /// Parse a quill.toml from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_manifest(content, filename)
    }

    /// The index origin programs see.
    pub fn index_origin(&self) -> IndexOrigin {
        IndexOrigin::from_one_based(self.generator.one_based_index)
    }
}

impl From<&Manifest> for GeneratorOptions {
    fn from(manifest: &Manifest) -> Self {
        let config = &manifest.generator;
        GeneratorOptions::default()
            .with_index_origin(manifest.index_origin())
            .with_comment_wrap(config.comment_wrap)
            .with_indent(Indent::from_width(config.indent))
    }
}

/// Parse a manifest from content with the given filename for error reporting.
pub fn parse_manifest(content: &str, filename: &str) -> Result<Manifest> {
    let source_ctx = SourceContext::new(content, filename);
    let manifest: Manifest = toml::from_str(content).map_err(|e| source_ctx.parse_error(e))?;
    validate_manifest(&manifest, &source_ctx)?;
    Ok(manifest)
}

/// Validate the manifest after parsing.
fn validate_manifest(manifest: &Manifest, ctx: &SourceContext) -> Result<()> {
    let config = &manifest.generator;

    if config.comment_wrap < MIN_COMMENT_WRAP {
        return Err(invalid_value(
            ctx,
            "comment_wrap",
            format!("comment_wrap must be at least {MIN_COMMENT_WRAP}"),
        ));
    }

    if config.indent > MAX_INDENT {
        return Err(invalid_value(
            ctx,
            "indent",
            format!("indent must be at most {MAX_INDENT}"),
        ));
    }

    Ok(())
}

fn invalid_value(ctx: &SourceContext, key: &str, message: String) -> Box<Error> {
    match find_value_span(ctx.src(), key) {
        Some(span) => ctx.validation_error_at(message, span),
        None => ctx.validation_error(message),
    }
}

/// Find the span of the value assigned to `key` on a `key = value` line.
///
/// Trailing comments are not part of the span. Keys inside inline tables
/// are not found.
pub(crate) fn find_value_span(src: &str, key: &str) -> Option<SourceSpan> {
    let mut line_start = 0;
    for line in src.split('\n') {
        if let Some(rest) = line.trim_start().strip_prefix(key)
            && let Some(value) = rest.trim_start().strip_prefix('=')
        {
            let value_start = line.len() - value.len();
            let trimmed = value.trim_start();
            let start = value_start + (value.len() - trimmed.len());
            let end = trimmed.find('#').unwrap_or(trimmed.len());
            let len = trimmed[..end].trim_end().len();
            return Some(SourceSpan::from((line_start + start, len)));
        }
        line_start += line.len() + 1;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_empty() {
        let manifest: Manifest = "".parse().unwrap();
        assert_eq!(manifest, Manifest::default());
        assert_eq!(manifest.generator.target, Target::Php);
        assert!(manifest.generator.one_based_index);
        assert_eq!(manifest.generator.comment_wrap, 60);
        assert_eq!(manifest.generator.indent, 2);
    }

    #[test]
    fn test_parse_generator_section() {
        let manifest: Manifest = r#"
[generator]
target = "php"
one_based_index = false
comment_wrap = 40
indent = 0
"#
        .parse()
        .unwrap();
        assert!(!manifest.generator.one_based_index);
        assert_eq!(manifest.index_origin(), IndexOrigin::Zero);

        let options = GeneratorOptions::from(&manifest);
        assert_eq!(options.index_origin, IndexOrigin::Zero);
        assert_eq!(options.comment_wrap, 40);
        assert_eq!(options.indent, Some(Indent::Tab));
    }

    #[test]
    fn test_unknown_target_is_parse_error() {
        let err = "[generator]\ntarget = \"cobol\"\n"
            .parse::<Manifest>()
            .unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_unknown_key_is_parse_error() {
        let err = "[generator]\ntabs = true\n".parse::<Manifest>().unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_comment_wrap_too_small() {
        let src = "[generator]\ncomment_wrap = 5 # too narrow\n";
        let err = src.parse::<Manifest>().unwrap_err();
        assert_eq!(err.to_string(), "comment_wrap must be at least 10");
        match *err {
            Error::Validation {
                span: Some(span), ..
            } => {
                assert_eq!(&src[span.offset()..span.offset() + span.len()], "5");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_indent_too_wide() {
        let err = "[generator]\nindent = 12\n".parse::<Manifest>().unwrap_err();
        assert_eq!(err.to_string(), "indent must be at most 8");
    }

    #[test]
    fn test_inline_table_error_has_no_span() {
        let err = "generator = { indent = 9 }\n"
            .parse::<Manifest>()
            .unwrap_err();
        assert!(matches!(*err, Error::Validation { span: None, .. }));
    }

    #[test]
    fn test_find_value_span() {
        let src = "[generator]\n  indent = 4\n";
        let span = find_value_span(src, "indent").unwrap();
        assert_eq!(span.offset(), 23);
        assert_eq!(span.len(), 1);
    }

    #[test]
    fn test_find_value_span_skips_longer_keys() {
        assert!(find_value_span("indentation = 4\n", "indent").is_none());
    }

    #[test]
    fn test_target_from_str() {
        assert_eq!("PHP".parse::<Target>(), Ok(Target::Php));
        assert!("cobol".parse::<Target>().is_err());
        assert_eq!(Target::Php.to_string(), "php");
    }
}
