use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use crate::canvas::Canvas;
use crate::error::CanvasError;
use crate::models::{ArtifactId, GroupingResult, Item, ItemKind};
use crate::summary::{build_summary, LineStyle};

pub const TITLE_FONT: &str = "Inter Bold";
pub const BODY_FONT: &str = "Inter Regular";

const SUMMARY_GAP: f64 = 100.0;
const SUMMARY_WIDTH: f64 = 480.0;
const SUMMARY_PADDING: f64 = 24.0;
const HEADING_PITCH: f64 = 32.0;
const BODY_PITCH: f64 = 24.0;

/// A design file standing in for the host canvas
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DesignDocument {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub fonts: Vec<String>,
    #[serde(default)]
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub selection: Vec<String>,
    #[serde(default)]
    pub viewport: Viewport,
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
    #[serde(skip)]
    modified: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Viewport {
    #[serde(default)]
    pub focus: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub node_type: String,
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default)]
    pub width: f64,
    #[serde(default)]
    pub height: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub characters: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl Node {
    fn new(id: String, name: impl Into<String>, node_type: &str) -> Self {
        Self {
            id,
            name: name.into(),
            node_type: node_type.to_string(),
            x: 0.0,
            y: 0.0,
            width: 0.0,
            height: 0.0,
            characters: None,
            font: None,
            children: Vec::new(),
            extra: HashMap::new(),
        }
    }

    /// Depth-first search for a node by id
    pub fn find(&self, id: &str) -> Option<&Node> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(id))
    }

    fn collect_ids<'a>(&'a self, ids: &mut Vec<&'a str>) {
        ids.push(&self.id);
        for child in &self.children {
            child.collect_ids(ids);
        }
    }
}

impl DesignDocument {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            fonts: vec![TITLE_FONT.to_string(), BODY_FONT.to_string()],
            nodes: Vec::new(),
            selection: Vec::new(),
            viewport: Viewport::default(),
            extra: HashMap::new(),
            modified: false,
        }
    }

    /// Whether selection or content changed since load or the last save
    pub fn is_modified(&self) -> bool {
        self.modified
    }

    pub fn mark_saved(&mut self) {
        self.modified = false;
    }

    pub fn find_node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find_map(|node| node.find(id))
    }

    /// Every node id in the tree, depth-first
    pub fn all_ids(&self) -> Vec<&str> {
        let mut ids = Vec::new();
        for node in &self.nodes {
            node.collect_ids(&mut ids);
        }
        ids
    }

    fn has_font(&self, font: &str) -> bool {
        self.fonts.iter().any(|f| f == font)
    }

    /// Allocate `count` ids of the form "summary:N" that are not in use yet
    fn fresh_ids(&self, count: usize) -> Vec<String> {
        let taken: HashSet<&str> = self.all_ids().into_iter().collect();
        let mut ids = Vec::with_capacity(count);
        let mut n = 1usize;
        while ids.len() < count {
            let candidate = format!("summary:{}", n);
            if !taken.contains(candidate.as_str()) {
                ids.push(candidate);
            }
            n += 1;
        }
        ids
    }

    fn right_edge(&self) -> f64 {
        self.nodes
            .iter()
            .map(|n| n.x + n.width)
            .fold(0.0, f64::max)
    }

    fn selection_top(&self) -> f64 {
        self.selection
            .iter()
            .filter_map(|id| self.nodes.iter().find(|n| &n.id == id))
            .map(|n| n.y)
            .reduce(f64::min)
            .unwrap_or(0.0)
    }
}

impl Canvas for DesignDocument {
    fn list_selection(&self) -> Vec<Item> {
        self.selection
            .iter()
            .filter_map(|id| self.find_node(id))
            .filter_map(|node| {
                ItemKind::from_node_type(&node.node_type)
                    .map(|kind| Item::new(node.name.clone(), node.id.clone(), kind))
            })
            .collect()
    }

    fn select_by_id(&mut self, id: &str) -> bool {
        if self.find_node(id).is_none() {
            return false;
        }

        self.selection = vec![id.to_string()];
        self.viewport.focus = Some(id.to_string());
        self.modified = true;
        true
    }

    fn create_summary_artifact(
        &mut self,
        result: &GroupingResult,
    ) -> Result<ArtifactId, CanvasError> {
        // Fonts are checked up front so a failure never leaves half a frame behind
        for font in [TITLE_FONT, BODY_FONT] {
            if !self.has_font(font) {
                return Err(CanvasError::FontUnavailable {
                    font: font.to_string(),
                });
            }
        }

        let layout = build_summary(result);
        let mut ids = self.fresh_ids(layout.lines.len() + 1).into_iter();
        let frame_id = ids.next().unwrap_or_default();

        let mut frame = Node::new(frame_id.clone(), layout.title, "FRAME");
        frame.x = self.right_edge() + SUMMARY_GAP;
        frame.y = self.selection_top();
        frame.width = SUMMARY_WIDTH;

        let mut cursor = SUMMARY_PADDING;
        for (line, id) in layout.lines.into_iter().zip(ids) {
            let (font, pitch) = match line.style {
                LineStyle::Title | LineStyle::Heading => (TITLE_FONT, HEADING_PITCH),
                LineStyle::Body => (BODY_FONT, BODY_PITCH),
            };

            let mut text = Node::new(id, line.text.clone(), "TEXT");
            text.x = SUMMARY_PADDING;
            text.y = cursor;
            text.width = SUMMARY_WIDTH - 2.0 * SUMMARY_PADDING;
            text.height = pitch;
            text.characters = Some(line.text);
            text.font = Some(font.to_string());

            cursor += pitch;
            frame.children.push(text);
        }
        frame.height = cursor + SUMMARY_PADDING;

        log::info!(
            "created summary artifact {} with {} lines",
            frame_id,
            frame.children.len()
        );

        self.nodes.push(frame);
        self.modified = true;

        Ok(ArtifactId(frame_id))
    }
}
