use crate::models::{Group, GroupingResult, Item};
use crate::prefixes::{is_blank, PrefixList};

/// Partition items into prefix groups plus a leftover bucket
///
/// Blank or missing prefix input means no grouping: `matches` is the input as-is
/// and the grouping fields stay `None`. Otherwise each item is claimed by the
/// first prefix its name starts with (case-insensitive). Prefixes that claim
/// nothing produce no group. `grouped_count` counts each leftover item as a
/// group of its own.
pub fn group_items(items: &[Item], prefix_input: Option<&str>) -> GroupingResult {
    let prefix_text = prefix_input.unwrap_or_default().to_string();

    if is_blank(prefix_input) {
        return GroupingResult {
            total: items.len(),
            filtered: items.len(),
            prefix_input: prefix_text,
            matches: items.to_vec(),
            grouped_count: None,
            groups: None,
        };
    }

    let prefixes = PrefixList::parse(&prefix_text);

    // One bucket per prefix, indexed like the prefix list
    let mut buckets: Vec<Vec<Item>> = vec![Vec::new(); prefixes.len()];
    let mut unmatched: Vec<Item> = Vec::new();

    for item in items {
        match prefixes.first_match(&item.name) {
            Some(index) => buckets[index].push(item.clone()),
            None => unmatched.push(item.clone()),
        }
    }

    let groups: Vec<Group> = prefixes
        .iter()
        .zip(buckets)
        .filter(|(_, bucket)| !bucket.is_empty())
        .map(|(prefix, bucket)| Group {
            prefix: prefix.to_string(),
            items: bucket,
        })
        .collect();

    let grouped_count = groups.len() + unmatched.len();

    log::debug!(
        "grouped {} items into {} groups with {} leftovers",
        items.len(),
        groups.len(),
        unmatched.len()
    );

    let matches: Vec<Item> = groups
        .iter()
        .flat_map(|g| g.items.iter().cloned())
        .chain(unmatched)
        .collect();

    GroupingResult {
        total: items.len(),
        filtered: matches.len(),
        prefix_input: prefix_text,
        matches,
        grouped_count: Some(grouped_count),
        groups: Some(groups),
    }
}
