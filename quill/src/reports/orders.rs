//! Orders command report data structures.

use super::output::{Output, Report};

/// Ranks sharing one precedence value.
#[derive(Debug, PartialEq, Eq)]
pub struct RankGroup {
    /// Rank as `major` or `major.minor`.
    pub rank: String,
    /// Operator names at this rank, in table order.
    pub names: Vec<&'static str>,
}

/// Report data for a target's precedence table.
#[derive(Debug)]
pub struct OrdersReport {
    /// Target language name.
    pub target: &'static str,
    /// Ranks from tightest to loosest binding.
    pub groups: Vec<RankGroup>,
    /// Pairs printed without parentheses, as names.
    pub elided: Vec<(String, String)>,
}

impl Report for OrdersReport {
    fn render(&self, out: &mut dyn Output) {
        out.title(&format!("{} operator precedence", self.target));
        out.newline();

        out.section("ranks (tightest first)");
        for group in &self.groups {
            out.key_value_indented(&group.rank, &group.names.join(", "));
        }

        out.newline();
        out.section("parentheses elided");
        for (outer, inner) in &self.elided {
            out.list_item(&format!("{} / {}", outer, inner));
        }
    }
}
