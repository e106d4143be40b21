use serde::{Deserialize, Serialize};

/// Node types that can be counted as screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ItemKind {
    Frame,
    Component,
    Instance,
}

impl ItemKind {
    /// Map a raw canvas node type to a countable kind
    /// Returns None for node types that are never counted (text, groups, shapes...)
    pub fn from_node_type(node_type: &str) -> Option<Self> {
        match node_type {
            "FRAME" => Some(ItemKind::Frame),
            "COMPONENT" => Some(ItemKind::Component),
            "INSTANCE" => Some(ItemKind::Instance),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::Frame => "FRAME",
            ItemKind::Component => "COMPONENT",
            ItemKind::Instance => "INSTANCE",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ItemKind,
}

impl Item {
    pub fn new(name: impl Into<String>, id: impl Into<String>, kind: ItemKind) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
            kind,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub prefix: String,
    pub items: Vec<Item>,
}

/// Outcome of one count request
///
/// `grouped_count` and `groups` are both `None` in ungrouped mode and are left
/// out of the serialized form entirely, so consumers can tell "no grouping was
/// requested" apart from "grouping produced nothing".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupingResult {
    pub total: usize,
    pub filtered: usize,
    pub prefix_input: String,
    pub matches: Vec<Item>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grouped_count: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub groups: Option<Vec<Group>>,
}

impl GroupingResult {
    pub fn is_grouped(&self) -> bool {
        self.groups.is_some()
    }

    /// Items that no prefix claimed, in original order
    /// Empty in ungrouped mode.
    pub fn unmatched(&self) -> &[Item] {
        match &self.groups {
            Some(groups) => {
                let claimed: usize = groups.iter().map(|g| g.items.len()).sum();
                self.matches.get(claimed..).unwrap_or(&[])
            }
            None => &[],
        }
    }

    /// The number shown as the primary count: grouped count when grouping, total otherwise
    pub fn headline_count(&self) -> usize {
        self.grouped_count.unwrap_or(self.total)
    }
}

/// Presentation row derived from a grouped result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayGroup {
    pub label: String,
    pub items: Vec<Item>,
    pub is_group: bool,
}

impl DisplayGroup {
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Header text, e.g. "Dashboard Group" or "Login"
    pub fn header(&self) -> String {
        if self.is_group {
            format!("{} Group", self.label)
        } else {
            self.label.clone()
        }
    }

    /// Count text, e.g. "(2 frames)" or "(1 screen)"
    pub fn count_label(&self) -> String {
        if self.is_group {
            format!("({} frames)", self.count())
        } else {
            "(1 screen)".to_string()
        }
    }
}

/// Identifier of an artifact created on the canvas
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArtifactId(pub String);

impl std::fmt::Display for ArtifactId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_item_kind_from_node_type() {
        assert_eq!(ItemKind::from_node_type("FRAME"), Some(ItemKind::Frame));
        assert_eq!(ItemKind::from_node_type("INSTANCE"), Some(ItemKind::Instance));
        assert_eq!(ItemKind::from_node_type("TEXT"), None);
        assert_eq!(ItemKind::from_node_type("frame"), None);
    }

    #[test]
    fn test_item_serializes_kind_as_type() {
        let item = Item::new("Login", "1:4", ItemKind::Component);
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value, json!({"name": "Login", "id": "1:4", "type": "COMPONENT"}));
    }

    #[test]
    fn test_ungrouped_result_omits_grouping_fields() {
        let result = GroupingResult {
            total: 1,
            filtered: 1,
            prefix_input: String::new(),
            matches: vec![Item::new("Checkout", "1:1", ItemKind::Frame)],
            grouped_count: None,
            groups: None,
        };

        let value = serde_json::to_value(&result).unwrap();
        let object = value.as_object().unwrap();
        assert!(!object.contains_key("groupedCount"));
        assert!(!object.contains_key("groups"));
        assert_eq!(object["prefixInput"], json!(""));
    }

    #[test]
    fn test_unmatched_is_tail_after_groups() {
        let a = Item::new("Dashboard A", "1", ItemKind::Frame);
        let b = Item::new("Login", "2", ItemKind::Frame);
        let result = GroupingResult {
            total: 2,
            filtered: 2,
            prefix_input: "Dashboard".to_string(),
            matches: vec![a.clone(), b.clone()],
            grouped_count: Some(2),
            groups: Some(vec![Group {
                prefix: "Dashboard".to_string(),
                items: vec![a],
            }]),
        };

        assert_eq!(result.unmatched(), &[b]);
        assert_eq!(result.headline_count(), 2);
    }

    #[test]
    fn test_display_group_labels() {
        let group = DisplayGroup {
            label: "Dashboard".to_string(),
            items: vec![
                Item::new("Dashboard A", "1", ItemKind::Frame),
                Item::new("Dashboard B", "2", ItemKind::Frame),
            ],
            is_group: true,
        };
        assert_eq!(group.header(), "Dashboard Group");
        assert_eq!(group.count_label(), "(2 frames)");

        let single = DisplayGroup {
            label: "Login".to_string(),
            items: vec![Item::new("Login", "3", ItemKind::Frame)],
            is_group: false,
        };
        assert_eq!(single.header(), "Login");
        assert_eq!(single.count_label(), "(1 screen)");
    }
}
