// src/dag/resolver.rs

//! Deterministic topological ordering with cycle detection.
//!
//! The walk is a post-order depth-first search. Tasks are visited in
//! declaration order and each task's dependencies in declared edge order, so
//! a task is emitted right after everything it (transitively) needs, and
//! unrelated tasks keep their relative declaration order.
//!
//! Cycle detection piggybacks on the same walk: a node that is still
//! [`Mark::InProgress`] when reached again closes a cycle.

use petgraph::graph::NodeIndex;
use tracing::{debug, trace};

use crate::dag::declaration::Edge;
use crate::dag::graph::DependencyGraph;
use crate::errors::ScheduleError;

/// Per-node traversal mark. Lives only for one resolve call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    /// On the active DFS path.
    InProgress,
    /// Already emitted; position in the output is fixed.
    Resolved,
}

/// Build the graph for `tasks` / `edges` and return a valid execution order.
pub fn resolve<S: AsRef<str>>(tasks: &[S], edges: &[Edge]) -> Result<Vec<String>, ScheduleError> {
    DependencyGraph::build(tasks, edges)?.topological_order()
}

impl DependencyGraph {
    /// Order all tasks so that every dependency precedes its dependents.
    ///
    /// The graph itself is never touched; all traversal state is local, so
    /// the same graph can be resolved any number of times, from any thread.
    pub fn topological_order(&self) -> Result<Vec<String>, ScheduleError> {
        let mut walk = Walk {
            graph: self,
            marks: vec![Mark::Unvisited; self.len()],
            path: Vec::new(),
            order: Vec::with_capacity(self.len()),
        };

        for node in self.node_indices() {
            if walk.marks[node.index()] != Mark::Resolved {
                walk.visit(node)?;
            }
        }

        debug!(order = ?walk.order, "resolved task order");
        Ok(walk.order)
    }
}

struct Walk<'g> {
    graph: &'g DependencyGraph,
    marks: Vec<Mark>,
    /// Nodes currently marked `InProgress`, outermost first.
    path: Vec<NodeIndex>,
    order: Vec<String>,
}

impl Walk<'_> {
    fn visit(&mut self, node: NodeIndex) -> Result<(), ScheduleError> {
        match self.marks[node.index()] {
            Mark::Resolved => return Ok(()),
            Mark::InProgress => return Err(self.cycle_error(node)),
            Mark::Unvisited => {}
        }

        trace!(task = %self.graph.name(node), "visiting");
        self.marks[node.index()] = Mark::InProgress;
        self.path.push(node);

        for dep in self.graph.dependency_indices(node) {
            self.visit(dep)?;
        }

        self.path.pop();
        self.marks[node.index()] = Mark::Resolved;
        self.order.push(self.graph.name(node).to_string());
        Ok(())
    }

    /// Cycle from the first occurrence of `closing` on the path, closed by
    /// `closing` itself, e.g. `[a, b, c, a]`.
    fn cycle_error(&self, closing: NodeIndex) -> ScheduleError {
        let start = self
            .path
            .iter()
            .position(|&n| n == closing)
            .unwrap_or(0);

        let cycle: Vec<String> = self.path[start..]
            .iter()
            .chain(std::iter::once(&closing))
            .map(|&n| self.graph.name(n).to_string())
            .collect();

        debug!(?cycle, "cyclic dependency detected");
        ScheduleError::CyclicDependency { cycle }
    }
}
