//! Core derived-state computation layer for a personal-finance application.
//!
//! Two kinds of derived state live here:
//!
//! 1. **Calculators** ([`calculators`]): closed-form financial formulas
//!    (CAGR, EMI amortization, SIP projection, IRR) over validated numeric
//!    inputs ([`schema`]).
//! 2. **KPI decomposition** ([`flow`]): an in-memory directed graph of typed
//!    nodes that a user builds up interactively, from which a symbolic LaTeX
//!    equation is re-derived after every mutation.
//!
//! Everything is synchronous and single-owner: the caller (typically a UI
//! event loop) holds a [`session::Session`] and drives each mutation to
//! completion before the next one starts. The crate performs no I/O and
//! defines no wire format; `serde` derives on the data model are provided
//! for the caller's benefit.

pub mod calculators;
pub mod flow;
pub mod schema;
pub mod session;

pub use flow::{FlowError, KpiFlow, NodeKind};
pub use schema::InputError;
pub use session::Session;
