//! The KPI decomposition graph and its derived equation.
pub mod equation;
pub mod graph;
pub mod node;

pub use equation::derive_equation;
pub use graph::{FlowError, KpiFlow};
pub use node::{FlowNode, NodeKind, Position};
