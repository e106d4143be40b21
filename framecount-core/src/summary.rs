use crate::labeling::display_groups;
use crate::models::GroupingResult;

pub const SUMMARY_TITLE: &str = "Screen Count Summary";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Title,
    Heading,
    Body,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryLine {
    pub text: String,
    pub style: LineStyle,
}

impl SummaryLine {
    fn new(text: impl Into<String>, style: LineStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

/// Text content of a summary artifact, independent of any canvas
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryLayout {
    pub title: String,
    pub lines: Vec<SummaryLine>,
}

/// Lay out the summary for a count result
pub fn build_summary(result: &GroupingResult) -> SummaryLayout {
    let mut lines = Vec::new();

    if result.is_grouped() {
        lines.push(SummaryLine::new(
            format!("Unique Screens: {}", result.headline_count()),
            LineStyle::Title,
        ));
        lines.push(SummaryLine::new(
            format!("Total Frames: {}", result.total),
            LineStyle::Body,
        ));
        lines.push(SummaryLine::new(
            format!("Grouping prefixes: \"{}\"", result.prefix_input),
            LineStyle::Body,
        ));
    } else {
        lines.push(SummaryLine::new(
            format!("Selected Screens: {}", result.total),
            LineStyle::Title,
        ));
    }

    if result.matches.is_empty() {
        let note = if result.total == 0 {
            "No frames selected".to_string()
        } else {
            format!("No frames found matching prefixes \"{}\"", result.prefix_input)
        };
        lines.push(SummaryLine::new(note, LineStyle::Body));
    } else if result.is_grouped() {
        for group in display_groups(result) {
            lines.push(SummaryLine::new(
                format!("{} {}", group.header(), group.count_label()),
                LineStyle::Heading,
            ));
            for item in &group.items {
                lines.push(SummaryLine::new(format!("• {}", item.name), LineStyle::Body));
            }
        }
    } else {
        lines.push(SummaryLine::new("Selected Frames", LineStyle::Heading));
        for item in &result.matches {
            lines.push(SummaryLine::new(format!("• {}", item.name), LineStyle::Body));
        }
    }

    SummaryLayout {
        title: SUMMARY_TITLE.to_string(),
        lines,
    }
}
