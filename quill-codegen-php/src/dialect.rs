//! PHP surface syntax.

use quill_codegen::{Dialect, OrderTable};

use crate::orders;

/// Keywords and predefined constants that must never be used as identifiers.
///
/// See <http://php.net/manual/en/reserved.keywords.php> and
/// <http://php.net/manual/en/reserved.constants.php>.
#[rustfmt::skip]
pub const RESERVED_WORDS: &[&str] = &[
    // keywords
    "__halt_compiler", "abstract", "and", "array", "as", "break", "callable", "case", "catch",
    "class", "clone", "const", "continue", "declare", "default", "die", "do", "echo", "else",
    "elseif", "empty", "enddeclare", "endfor", "endforeach", "endif", "endswitch", "endwhile",
    "eval", "exit", "extends", "final", "for", "foreach", "function", "global", "goto", "if",
    "implements", "include", "include_once", "instanceof", "insteadof", "interface", "isset",
    "list", "namespace", "new", "or", "print", "private", "protected", "public", "require",
    "require_once", "return", "static", "switch", "throw", "trait", "try", "unset", "use", "var",
    "while", "xor",
    // constants
    "PHP_VERSION", "PHP_MAJOR_VERSION", "PHP_MINOR_VERSION", "PHP_RELEASE_VERSION",
    "PHP_VERSION_ID", "PHP_EXTRA_VERSION", "PHP_ZTS", "PHP_DEBUG", "PHP_MAXPATHLEN", "PHP_OS",
    "PHP_SAPI", "PHP_EOL", "PHP_INT_MAX", "PHP_INT_SIZE", "DEFAULT_INCLUDE_PATH",
    "PEAR_INSTALL_DIR", "PEAR_EXTENSION_DIR", "PHP_EXTENSION_DIR", "PHP_PREFIX", "PHP_BINDIR",
    "PHP_BINARY", "PHP_MANDIR", "PHP_LIBDIR", "PHP_DATADIR", "PHP_SYSCONFDIR",
    "PHP_LOCALSTATEDIR", "PHP_CONFIG_FILE_PATH", "PHP_CONFIG_FILE_SCAN_DIR", "PHP_SHLIB_SUFFIX",
    "E_ERROR", "E_WARNING", "E_PARSE", "E_NOTICE", "E_CORE_ERROR", "E_CORE_WARNING",
    "E_COMPILE_ERROR", "E_COMPILE_WARNING", "E_USER_ERROR", "E_USER_WARNING", "E_USER_NOTICE",
    "E_DEPRECATED", "E_USER_DEPRECATED", "E_ALL", "E_STRICT", "__COMPILER_HALT_OFFSET__",
    "TRUE", "FALSE", "NULL", "__CLASS__", "__DIR__", "__FILE__", "__FUNCTION__", "__LINE__",
    "__METHOD__", "__NAMESPACE__", "__TRAIT__",
];

/// The PHP target.
#[derive(Debug, Clone, Copy, Default)]
pub struct Php;

impl Php {
    pub fn new() -> Self {
        Self
    }

    /// Encode text as a heredoc literal.
    pub fn multiline_quote(&self, text: &str) -> String {
        format!("<<<EOT\n{text}\nEOT")
    }
}

impl Dialect for Php {
    fn name(&self) -> &'static str {
        "php"
    }

    fn file_extension(&self) -> &'static str {
        "php"
    }

    fn orders(&self) -> &OrderTable {
        &orders::TABLE
    }

    fn reserved_words(&self) -> &'static [&'static str] {
        RESERVED_WORDS
    }

    fn variable_prefix(&self) -> &'static str {
        "$"
    }

    fn comment_prefix(&self) -> &'static str {
        "// "
    }

    fn statement_terminator(&self) -> &'static str {
        ";"
    }

    /// Single-quoted literal; backslashes, newlines and quotes are escaped.
    fn quote(&self, text: &str) -> String {
        let escaped = text
            .replace('\\', "\\\\")
            .replace('\n', "\\\n")
            .replace('\'', "\\'");
        format!("'{escaped}'")
    }

    fn declare_variables(&self, names: &[String]) -> Option<String> {
        if names.is_empty() {
            return None;
        }
        Some(
            names
                .iter()
                .map(|name| format!("{name};"))
                .collect::<Vec<_>>()
                .join("\n"),
        )
    }
}
