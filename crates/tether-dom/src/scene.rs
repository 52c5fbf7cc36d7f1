//! JSON scene descriptions.
//!
//! A scene lists laid-out elements in document order. Each element names its
//! parent by id; elements without a parent go into `<body>`:
//!
//! ```json
//! {
//!   "viewport": { "width": 1024, "height": 768 },
//!   "scroll": { "top": 120 },
//!   "elements": [
//!     { "id": "panel", "position": "relative",
//!       "box": { "x": 100, "y": 100, "width": 400, "height": 300 },
//!       "border": { "top": 2, "left": 2 } },
//!     { "id": "button", "parent": "panel",
//!       "box": { "x": 112, "y": 122, "width": 80, "height": 24 } }
//!   ]
//! }
//! ```

use std::collections::HashMap;

use serde::Deserialize;
use thiserror::Error;

use crate::document::Document;
use crate::style::{BoxStyle, EdgeSizes, PositionType, Rect};
use crate::NodeId;

/// Errors raised while loading a scene.
#[derive(Debug, Error)]
pub enum SceneError {
    /// The scene is not valid JSON or does not match the schema.
    #[error("invalid scene: {0}")]
    Json(#[from] serde_json::Error),

    /// An element names a parent that does not appear before it.
    #[error("element '{id}' names unknown parent '{parent}'")]
    UnknownParent {
        /// The element's id.
        id: String,
        /// The missing parent id.
        parent: String,
    },

    /// Two elements share an id.
    #[error("duplicate element id '{0}'")]
    DuplicateId(String),
}

/// Viewport size.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Viewport {
    /// Viewport width.
    pub width: f32,
    /// Viewport height.
    pub height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
        }
    }
}

/// A scroll position in a scene file.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct SceneScroll {
    /// Vertical scroll.
    pub top: f32,
    /// Horizontal scroll.
    pub left: f32,
}

/// One element of a scene.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SceneElement {
    /// The element's `id` attribute.
    pub id: String,
    /// Local name, `div` by default.
    #[serde(default = "default_tag")]
    pub tag: String,
    /// Id of the parent element; `<body>` when absent.
    #[serde(default)]
    pub parent: Option<String>,
    /// Leave the element out of the tree. Its children still attach to it,
    /// forming a detached subtree.
    #[serde(default)]
    pub detached: bool,
    /// Computed `position`.
    #[serde(default)]
    pub position: PositionType,
    /// Border box in document coordinates (viewport coordinates inside a
    /// fixed subtree).
    #[serde(rename = "box")]
    pub border_box: Rect,
    /// Border widths.
    #[serde(default)]
    pub border: EdgeSizes,
    /// The element's own scroll position.
    #[serde(default)]
    pub scroll: SceneScroll,
}

fn default_tag() -> String {
    "div".to_string()
}

/// A complete scene.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scene {
    /// Viewport size.
    #[serde(default)]
    pub viewport: Viewport,
    /// Document scroll position.
    #[serde(default)]
    pub scroll: SceneScroll,
    /// Elements in document order; parents come before their children.
    #[serde(default)]
    pub elements: Vec<SceneElement>,
}

impl Scene {
    /// Parse a scene from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::Json`] if the text does not describe a scene.
    pub fn from_json(text: &str) -> Result<Self, SceneError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Build the document described by this scene.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::DuplicateId`] or [`SceneError::UnknownParent`]
    /// for inconsistent element lists.
    pub fn build(&self) -> Result<Document, SceneError> {
        let mut document = Document::new(self.viewport.width, self.viewport.height);
        document.scroll_to(self.scroll.top, self.scroll.left);

        let mut ids: HashMap<&str, NodeId> = HashMap::new();
        for element in &self.elements {
            if ids.contains_key(element.id.as_str()) {
                return Err(SceneError::DuplicateId(element.id.clone()));
            }

            let parent = match &element.parent {
                Some(parent) => *ids.get(parent.as_str()).ok_or_else(|| {
                    SceneError::UnknownParent {
                        id: element.id.clone(),
                        parent: parent.clone(),
                    }
                })?,
                None => document.body(),
            };

            let style = BoxStyle::at(element.border_box)
                .with_position(element.position)
                .with_border(element.border);
            let node = document.create_element(&element.tag, style);
            document.set_id(node, &element.id);
            document.scroll_element(node, element.scroll.top, element.scroll.left);
            if !element.detached {
                document.append_child(parent, node);
            }
            let _ = ids.insert(&element.id, node);
        }

        Ok(document)
    }
}
