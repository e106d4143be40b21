use framecount_core::{display_groups, GroupingResult, Item};
use slint::SharedString;

use super::types::ResultRow;

/// Rows for the result list, plus the item id behind each row (None for headers)
pub fn result_rows(result: &GroupingResult) -> (Vec<ResultRow>, Vec<Option<String>>) {
    let mut rows = Vec::new();
    let mut ids = Vec::new();

    if result.is_grouped() {
        for group in display_groups(result) {
            rows.push(ResultRow {
                text: SharedString::from(group.header()),
                detail: SharedString::from(group.count_label()),
                item_id: SharedString::new(),
                is_header: true,
            });
            ids.push(None);

            for item in &group.items {
                rows.push(item_row(item));
                ids.push(Some(item.id.clone()));
            }
        }
    } else {
        for item in &result.matches {
            rows.push(item_row(item));
            ids.push(Some(item.id.clone()));
        }
    }

    (rows, ids)
}

fn item_row(item: &Item) -> ResultRow {
    ResultRow {
        text: SharedString::from(item.name.as_str()),
        detail: SharedString::from(item.kind.as_str().to_lowercase()),
        item_id: SharedString::from(item.id.as_str()),
        is_header: false,
    }
}

/// Caption under the primary count
pub fn headline_label(result: &GroupingResult) -> &'static str {
    if result.is_grouped() {
        "Unique Screens"
    } else {
        "Selected Screens"
    }
}

/// "Grouping prefixes: ..." line, empty when not grouping
pub fn prefix_info(result: &GroupingResult) -> String {
    if result.is_grouped() {
        format!("Grouping prefixes: \"{}\"", result.prefix_input)
    } else {
        String::new()
    }
}

/// Heading above the result list, empty when there is nothing to list
pub fn list_title(result: &GroupingResult) -> &'static str {
    match (result.matches.is_empty(), result.is_grouped()) {
        (true, _) => "",
        (false, true) => "Screen Groups",
        (false, false) => "Selected Frames",
    }
}

/// Message and hint shown when the result has nothing to list
pub fn empty_state(result: &GroupingResult) -> Option<(String, String)> {
    if result.total == 0 {
        Some((
            "No frames selected".to_string(),
            "Please select some frames in the document and try again.".to_string(),
        ))
    } else if result.matches.is_empty() {
        Some((
            format!("No frames found matching prefixes \"{}\"", result.prefix_input),
            "Try different prefixes or leave it empty to count all selected frames.".to_string(),
        ))
    } else {
        None
    }
}
