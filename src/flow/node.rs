//! Node types for the KPI decomposition graph.

use serde::{Deserialize, Serialize};

/// The role a node plays in the decomposition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// The unique root: the target metric being decomposed. Created with the
    /// graph and never removed.
    Kpi,
    /// A leaf: an atomic input quantity that is not decomposed further.
    BaseKpi,
    /// An interior node combining its inputs by multiplication.
    Multiply,
}

impl NodeKind {
    /// Short tag used as the prefix of generated node ids.
    pub fn tag(&self) -> &'static str {
        match self {
            NodeKind::Kpi => "kpi",
            NodeKind::BaseKpi => "basekpi",
            NodeKind::Multiply => "multiply",
        }
    }
}

/// Canvas position. Presentation-only; nothing downstream computes with it.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// A node in the decomposition graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowNode {
    /// Unique within the graph. Generated as `{tag}_{n}` from the node count
    /// at creation time; the root is simply `kpi`.
    pub id: String,
    pub kind: NodeKind,
    /// Human-readable label, also the symbol used in the derived equation.
    pub label: String,
    pub position: Position,
}
