//! Orders operation - precedence table listing.

use quill_codegen::{ElisionPair, OrderTable, Precedence};

use crate::{
    reports::{OrdersReport, RankGroup},
    target::TargetSupport,
};

/// Collect a target's ranks, grouped by value, and its elision pairs.
pub fn orders(target: &TargetSupport) -> OrdersReport {
    let table = target.orders();

    let mut named = table.named.to_vec();
    named.sort_by_key(|&(_, rank)| rank);

    let mut groups: Vec<RankGroup> = Vec::new();
    for (name, rank) in named {
        let rank = rank.to_string();
        match groups.last_mut() {
            Some(group) if group.rank == rank => group.names.push(name),
            _ => groups.push(RankGroup {
                rank,
                names: vec![name],
            }),
        }
    }

    let elided = table
        .overrides
        .iter()
        .map(|&ElisionPair(outer, inner)| (names_of(table, outer), names_of(table, inner)))
        .collect();

    OrdersReport {
        target: target.name(),
        groups,
        elided,
    }
}

fn names_of(table: &OrderTable, rank: Precedence) -> String {
    let names: Vec<&str> = table
        .named
        .iter()
        .filter(|(_, p)| *p == rank)
        .map(|(name, _)| *name)
        .collect();
    if names.is_empty() {
        rank.to_string()
    } else {
        names.join("/")
    }
}
