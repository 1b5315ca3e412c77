//! Indentation units for generated code.

const SPACES: &str = "        ";

/// Indentation style for generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// Spaces with the specified width (1 to 8).
    Spaces(u8),
    /// Tab character.
    Tab,
}

impl Indent {
    /// 2-space indentation (PHP, JavaScript).
    pub const TWO: Self = Self::Spaces(2);

    /// 4-space indentation.
    pub const FOUR: Self = Self::Spaces(4);

    /// Build from a configured width, where 0 means a tab.
    pub fn from_width(width: u8) -> Self {
        if width == 0 { Self::Tab } else { Self::Spaces(width) }
    }

    /// Convert to the string representation for one indent level.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Spaces(n) => &SPACES[..usize::from(*n).clamp(1, SPACES.len())],
            Self::Tab => "\t",
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::TWO
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indent_as_str() {
        assert_eq!(Indent::Spaces(2).as_str(), "  ");
        assert_eq!(Indent::Spaces(3).as_str(), "   ");
        assert_eq!(Indent::Spaces(4).as_str(), "    ");
        assert_eq!(Indent::Tab.as_str(), "\t");
    }

    #[test]
    fn test_indent_width_is_clamped() {
        assert_eq!(Indent::Spaces(0).as_str(), " ");
        assert_eq!(Indent::Spaces(12).as_str().len(), 8);
    }

    #[test]
    fn test_from_width() {
        assert_eq!(Indent::from_width(0), Indent::Tab);
        assert_eq!(Indent::from_width(4), Indent::FOUR);
    }

    #[test]
    fn test_default() {
        assert_eq!(Indent::default(), Indent::TWO);
    }
}
