use crate::models::{DisplayGroup, GroupingResult, Item};
use crate::prefixes::PrefixList;
use regex::Regex;
use std::sync::LazyLock;

static WORD_SPLIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Reshape a grouped result into display rows
///
/// Prefix groups come first, then one single-item row per leftover item.
/// Returns an empty list for ungrouped results.
pub fn display_groups(result: &GroupingResult) -> Vec<DisplayGroup> {
    let Some(groups) = &result.groups else {
        return Vec::new();
    };

    let prefixes = PrefixList::parse(&result.prefix_input);

    let mut rows: Vec<DisplayGroup> = groups
        .iter()
        .map(|group| DisplayGroup {
            label: group.prefix.clone(),
            items: group.items.clone(),
            is_group: true,
        })
        .collect();

    rows.extend(result.unmatched().iter().map(|item| DisplayGroup {
        label: label_for(item, &prefixes),
        items: vec![item.clone()],
        is_group: false,
    }));

    rows
}

/// Pick a display label for a single item
/// Tries the configured prefixes, then the first word of the name when it is
/// longer than two characters, then the full name.
pub fn label_for(item: &Item, prefixes: &PrefixList) -> String {
    if let Some(prefix) = prefixes.claim(&item.name) {
        return prefix.to_string();
    }

    let words: Vec<&str> = WORD_SPLIT.split(&item.name).collect();
    match words.as_slice() {
        [first, _, ..] if first.chars().count() > 2 => first.to_string(),
        _ => item.name.clone(),
    }
}
