//! # Measurement Normalization
//!
//! Turns a tree of measured, print-tagged nodes into the flat element list
//! the paginator consumes. Walking a live rendering surface is the caller's
//! job; what happens here is the normalization every measurement pass needs:
//! defaulting untagged nodes, falling back to generated ids, dropping
//! anything that rendered with no height, and sizing each CONTENT element
//! to at least the sum of its children.

use serde::{Deserialize, Serialize};

use crate::model::{total_height, ElementDetail, ElementType};

/// One measured node, mirroring the `data-print-*` attributes of the
/// rendered element it came from.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeasuredNode {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub print_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub print_id: Option<String>,

    /// Rendered height including vertical margins, in pixels.
    pub height: f64,

    /// Present means fill, unless the value is `"false"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub print_fill: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub print_page_break: Option<String>,

    /// Tagged descendants, in document order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<MeasuredNode>,
}

/// Hands out ids for nodes that don't carry one, unique within one pass.
#[derive(Debug, Default)]
struct IdGenerator {
    next: usize,
}

impl IdGenerator {
    fn next_id(&mut self) -> String {
        self.next += 1;
        format!("el-{}", self.next)
    }
}

/// Build the element list for `nodes`, the top-level tagged nodes of a
/// rendered document.
pub fn collect_element_details(nodes: &[MeasuredNode]) -> Vec<ElementDetail> {
    let mut ids = IdGenerator::default();
    nodes
        .iter()
        .filter_map(|node| collect_top_level(node, &mut ids))
        .collect()
}

fn collect_top_level(node: &MeasuredNode, ids: &mut IdGenerator) -> Option<ElementDetail> {
    let el_type = node
        .print_type
        .as_deref()
        .map_or(ElementType::Content, ElementType::from_tag);

    let mut children = Vec::new();
    if el_type == ElementType::Content {
        collect_descendants(&node.children, ids, &mut children);
    }

    let height = node.height.max(total_height(&children));
    if height <= 0.0 {
        return None;
    }

    let id = node
        .print_id
        .clone()
        .unwrap_or_else(|| el_type.as_tag().to_string());

    Some(ElementDetail {
        child_el_details: (!children.is_empty()).then_some(children),
        fill: node.print_fill.as_deref().is_some_and(|v| v != "false"),
        page_break: node.print_page_break.clone(),
        ..ElementDetail::new(el_type, id, height)
    })
}

/// Flatten every tagged descendant of a CONTENT node, pre-order.
fn collect_descendants(nodes: &[MeasuredNode], ids: &mut IdGenerator, out: &mut Vec<ElementDetail>) {
    for node in nodes {
        if node.height > 0.0 {
            let el_type = node
                .print_type
                .as_deref()
                .map_or(ElementType::SubContent, ElementType::from_tag);
            let id = node.print_id.clone().unwrap_or_else(|| ids.next_id());
            out.push(ElementDetail::new(el_type, id, node.height));
        }
        collect_descendants(&node.children, ids, out);
    }
}
