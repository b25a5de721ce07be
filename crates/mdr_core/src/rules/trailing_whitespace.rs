//! Flags physical lines that end in spaces or tabs.

use crate::Issue;

pub(super) const RULE_ID: &str = "trailing-whitespace";

pub(super) fn check(source: &str) -> Vec<Issue> {
    source
        .split('\n')
        .enumerate()
        .filter(|(_, line)| line.trim_end_matches([' ', '\t']).len() < line.len())
        .map(|(index, _)| {
            Issue::warning(RULE_ID, "line has trailing whitespace", index as u32 + 1)
        })
        .collect()
}
