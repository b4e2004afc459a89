//! The mutable KPI decomposition graph.

use std::collections::HashMap;

use log::debug;
use petgraph::stable_graph::{NodeIndex, StableDiGraph};
use petgraph::Direction;
use thiserror::Error;

use super::node::{FlowNode, NodeKind, Position};

/// Rejection of a graph mutation. No partial state survives a rejection.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FlowError {
    #[error("unknown node id '{0}'")]
    UnknownNode(String),
    #[error("connection {source_id} -> {target_id} rejected: the KPI root accepts a single input")]
    ConnectionRejected { source_id: String, target_id: String },
    #[error("the graph already has its KPI root")]
    RootExists,
}

/// A directed graph of [`FlowNode`]s, seeded with the unique `kpi` root.
///
/// Edges mean "source feeds into target". The only structural constraint is
/// that the root accepts at most one incoming edge; fan-in on `Multiply`
/// nodes is unbounded and cycles are not checked (the equation walker
/// tolerates them, see [`super::equation`]).
#[derive(Debug, Clone, Default)]
pub struct KpiFlow {
    graph: StableDiGraph<FlowNode, ()>,
    by_id: HashMap<String, NodeIndex>,
}

impl KpiFlow {
    /// Creates a graph containing only the `kpi` root, labelled `KPI`.
    pub fn new() -> Self {
        let mut flow = Self {
            graph: StableDiGraph::new(),
            by_id: HashMap::new(),
        };
        let root = FlowNode {
            id: "kpi".to_string(),
            kind: NodeKind::Kpi,
            label: "KPI".to_string(),
            position: Position::default(),
        };
        let idx = flow.graph.add_node(root);
        flow.by_id.insert("kpi".to_string(), idx);
        flow
    }

    /// Appends a node and returns its generated id.
    ///
    /// Ids take the form `{tag}_{n}` where `n` is the node count at creation
    /// time plus one. This scheme is not collision-safe if nodes are ever
    /// removed; no in-scope operation removes nodes, so the ids stay unique.
    pub fn add_node(
        &mut self,
        kind: NodeKind,
        label: impl Into<String>,
        position: Position,
    ) -> Result<String, FlowError> {
        if kind == NodeKind::Kpi {
            // The root is created in `new` and must stay unique.
            return Err(FlowError::RootExists);
        }
        let id = format!("{}_{}", kind.tag(), self.graph.node_count() + 1);
        let node = FlowNode {
            id: id.clone(),
            kind,
            label: label.into(),
            position,
        };
        debug!("adding node {id}");
        let idx = self.graph.add_node(node);
        self.by_id.insert(id.clone(), idx);
        Ok(id)
    }

    /// Whether an edge `source -> target` would be accepted.
    ///
    /// False only when the target is the `kpi` root and it already has an
    /// incoming edge. Everything else, including edges that would close a
    /// cycle, passes.
    pub fn is_valid_connection(&self, source_id: &str, target_id: &str) -> bool {
        let _ = source_id;
        match self.by_id.get(target_id) {
            Some(&target) if self.graph[target].kind == NodeKind::Kpi => {
                self.incoming(target).count() < 1
            }
            _ => true,
        }
    }

    /// Adds the edge `source -> target`, or rejects it leaving the edge set
    /// untouched.
    pub fn connect(&mut self, source_id: &str, target_id: &str) -> Result<(), FlowError> {
        let source = self.index_of(source_id)?;
        let target = self.index_of(target_id)?;
        if !self.is_valid_connection(source_id, target_id) {
            debug!("rejecting connection {source_id} -> {target_id}");
            return Err(FlowError::ConnectionRejected {
                source_id: source_id.to_string(),
                target_id: target_id.to_string(),
            });
        }
        self.graph.add_edge(source, target, ());
        Ok(())
    }

    /// The `kpi` root, if present. The graph is constructed with one and no
    /// in-scope operation removes it, so this only returns `None` for a
    /// caller that built a `Default` (empty) graph.
    pub fn root(&self) -> Option<&FlowNode> {
        self.by_id.get("kpi").map(|&idx| &self.graph[idx])
    }

    pub fn get(&self, id: &str) -> Option<&FlowNode> {
        self.by_id.get(id).map(|&idx| &self.graph[idx])
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// All nodes, in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &FlowNode> {
        self.graph.node_weights()
    }

    /// All edges as `(source id, target id)` pairs.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> {
        self.graph.edge_indices().filter_map(|edge| {
            let (source, target) = self.graph.edge_endpoints(edge)?;
            Some((self.graph[source].id.as_str(), self.graph[target].id.as_str()))
        })
    }

    pub(crate) fn index_of(&self, id: &str) -> Result<NodeIndex, FlowError> {
        self.by_id
            .get(id)
            .copied()
            .ok_or_else(|| FlowError::UnknownNode(id.to_string()))
    }

    pub(crate) fn node(&self, idx: NodeIndex) -> &FlowNode {
        &self.graph[idx]
    }

    /// Source indices of the edges feeding into `target`.
    pub(crate) fn incoming(&self, target: NodeIndex) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.neighbors_directed(target, Direction::Incoming)
    }
}
