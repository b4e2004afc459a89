//! Derives a LaTeX equation from the decomposition graph.
//!
//! The walk starts at the `kpi` root and follows incoming edges backward,
//! collecting one symbol per source node. A per-traversal visited set bounds
//! the recursion: on a cyclic graph the branch that closes the cycle is
//! silently dropped rather than reported (see the crate design notes).

use std::collections::HashSet;

use log::warn;
use petgraph::stable_graph::NodeIndex;
use smallvec::SmallVec;

use super::graph::KpiFlow;
use super::node::NodeKind;

type Fragments = SmallVec<[String; 4]>;

/// Derives the current equation as a LaTeX string, `<lhs> = <kpi label>`.
///
/// A graph without a `kpi` root yields the empty string. The output is
/// display-only; no dimensional or semantic validation is performed.
pub fn derive_equation(flow: &KpiFlow) -> String {
    let Some(root) = flow.root() else {
        return String::new();
    };
    let Ok(root_idx) = flow.index_of(&root.id) else {
        return String::new();
    };

    let mut visited = HashSet::new();
    let fragments = collect_labels(flow, root_idx, &mut visited);
    format!("{} = {}", fragments.join(" \\cdot "), root.label)
}

/// Post-order collection of label fragments feeding into `node`.
///
/// Mirrors the interactive builder's semantics: a `Multiply` source folds its
/// own collected fragments into one parenthesized product; any other source
/// contributes its collected fragments followed by its own label as a
/// `\mathit` symbol.
fn collect_labels(flow: &KpiFlow, node: NodeIndex, visited: &mut HashSet<NodeIndex>) -> Fragments {
    if !visited.insert(node) {
        warn!(
            "equation traversal revisited node '{}'; dropping the branch",
            flow.node(node).id
        );
        return Fragments::new();
    }

    let mut fragments = Fragments::new();
    for source_idx in incoming_in_insertion_order(flow, node) {
        let source = flow.node(source_idx);
        let sub = collect_labels(flow, source_idx, visited);

        if source.kind == NodeKind::Multiply {
            if !sub.is_empty() {
                fragments.push(format!("({})", sub.join(" \\cdot ")));
            }
            continue;
        }

        fragments.extend(sub);
        fragments.push(format!("\\mathit{{{}}}", source.label));
    }
    fragments
}

/// `neighbors_directed` yields most-recent-first; the equation must list
/// factors in the order the user connected them.
fn incoming_in_insertion_order(flow: &KpiFlow, node: NodeIndex) -> SmallVec<[NodeIndex; 4]> {
    let mut sources: SmallVec<[NodeIndex; 4]> = flow.incoming(node).collect();
    sources.reverse();
    sources
}
