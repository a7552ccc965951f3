use thiserror::Error;
use tracing::debug;

use crate::instruction::Kind;
use crate::instructions::{lookup, Mnemonic};

/// Rename request: append `chars` to the first and/or second line of the mnemonic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuffixRule {
    pub chars: &'static str,
    /// Compare and rename the second line too.
    pub parallel: bool,
    pub first: bool,
    pub second: bool,
}

impl SuffixRule {
    pub const fn new(chars: &'static str, parallel: bool, first: bool, second: bool) -> Self {
        Self { chars, parallel, first, second }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("kind {} has no `{wanted}` sibling with the same operand features", kind.0)]
pub struct AliasError {
    pub kind: Kind,
    pub wanted: String,
}

fn with_suffix(name: &str, apply: bool, chars: &str) -> String {
    if apply { format!("{name}{chars}") } else { name.to_string() }
}

/// Finds the entry after `kind` named like it plus the rule's suffix and
/// carrying identical operand features.
///
/// Entries sharing the current names are skipped first, then the table is
/// scanned for the suffixed names. The feature match must occur inside that
/// contiguous run of suffixed names; running past it is an error.
pub fn resolve_suffix(table: &[Mnemonic], kind: Kind, rule: &SuffixRule) -> Result<Kind, AliasError> {
    let Some(cur) = lookup(table, kind) else {
        return Err(AliasError { kind, wanted: rule.chars.to_string() });
    };
    let name = with_suffix(cur.name, rule.first, rule.chars);
    let second = with_suffix(cur.second.unwrap_or(""), rule.second, rule.chars);
    let err = || AliasError {
        kind,
        wanted: if rule.parallel { format!("{name}::{second}") } else { name.clone() },
    };

    let same = |m: &Mnemonic| m.name == cur.name && (!rule.parallel || m.second == cur.second);
    let target = |m: &Mnemonic| m.name == name && (!rule.parallel || m.second.unwrap_or("") == second);

    let mut i = kind.0 as usize + 1;
    while table.get(i).is_some_and(|m| same(m)) { i += 1; }
    while table.get(i).is_some_and(|m| !target(m)) { i += 1; }
    while let Some(m) = table.get(i).filter(|&m| target(m)) {
        if m.features == cur.features {
            debug!(from = kind.0, to = i, suffix = rule.chars, "alias resolved");
            return Ok(Kind(i as u16));
        }
        i += 1;
    }
    Err(err())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instructions::Features;
    use pretty_assertions::assert_eq;

    const RW: Features = Features::USE1.union(Features::CHG2);
    const R: Features = Features::USE1;

    static TABLE: &[Mnemonic] = &[
        Mnemonic::new("", None, Features::empty()),
        Mnemonic::new("mac", None, RW),
        Mnemonic::new("mac", None, R),
        Mnemonic::new("mac40", None, RW),
        Mnemonic::new("macr", None, R),
        Mnemonic::new("macr", None, RW),
        Mnemonic::new("mas", None, RW),
        Mnemonic::new("masr", None, R),
        Mnemonic::new("mpy", Some("mpy"), RW),
        Mnemonic::new("mpyr", Some("mpyr"), RW),
    ];

    const ROUND: SuffixRule = SuffixRule::new("r", false, true, false);

    #[test]
    fn crosses_other_names_to_reach_the_suffixed_run() {
        assert_eq!(resolve_suffix(TABLE, Kind(1), &ROUND), Ok(Kind(5)));
        assert_eq!(resolve_suffix(TABLE, Kind(2), &ROUND), Ok(Kind(4)));
    }

    #[test]
    fn feature_match_stays_inside_the_run() {
        let err = resolve_suffix(TABLE, Kind(6), &ROUND).unwrap_err();
        assert_eq!(err.wanted, "masr");
    }

    #[test]
    fn parallel_rule_renames_both_lines() {
        let both = SuffixRule::new("r", true, true, true);
        assert_eq!(resolve_suffix(TABLE, Kind(8), &both), Ok(Kind(9)));
        let second_only = SuffixRule::new("r", true, false, true);
        assert!(resolve_suffix(TABLE, Kind(8), &second_only).is_err());
    }
}
