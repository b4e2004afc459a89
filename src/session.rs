//! Explicitly-scoped session state.
//!
//! The caller owns a [`Session`] and threads it to wherever derived state is
//! needed; there is no module-level singleton. Each mutation runs to
//! completion and re-derives the cached equation before returning, so reads
//! between mutations always observe a consistent pair of graph and equation.

use crate::flow::{derive_equation, FlowError, KpiFlow, NodeKind, Position};

/// One UI session's in-memory state: the decomposition graph plus the
/// equation derived from it.
#[derive(Debug, Clone)]
pub struct Session {
    flow: KpiFlow,
    equation: String,
}

impl Session {
    pub fn new() -> Self {
        let flow = KpiFlow::new();
        let equation = derive_equation(&flow);
        Self { flow, equation }
    }

    /// The current graph, read-only. Mutations go through the session so the
    /// cached equation can never go stale.
    pub fn flow(&self) -> &KpiFlow {
        &self.flow
    }

    /// The equation derived from the current graph.
    pub fn equation(&self) -> &str {
        &self.equation
    }

    /// Adds a node and re-derives the equation. Returns the generated id.
    pub fn add_node(
        &mut self,
        kind: NodeKind,
        label: impl Into<String>,
        position: Position,
    ) -> Result<String, FlowError> {
        let id = self.flow.add_node(kind, label, position)?;
        self.rederive();
        Ok(id)
    }

    /// Connects two nodes and re-derives the equation. A rejected connection
    /// leaves both the graph and the equation unchanged.
    pub fn connect(&mut self, source_id: &str, target_id: &str) -> Result<(), FlowError> {
        self.flow.connect(source_id, target_id)?;
        self.rederive();
        Ok(())
    }

    fn rederive(&mut self) {
        self.equation = derive_equation(&self.flow);
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
