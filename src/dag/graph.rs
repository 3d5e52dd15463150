// src/dag/graph.rs

use std::collections::HashMap;

use petgraph::graph::{DiGraph, EdgeIndex, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use tracing::debug;

use crate::dag::declaration::{is_task_name, Edge};
use crate::errors::ScheduleError;

/// Immutable dependency graph keyed by task name.
///
/// Nodes are added in task declaration order, so `NodeIndex` order doubles
/// as the declaration index. An edge `dependent -> dependent_on` means the
/// dependent must be scheduled after its target. Edge indices grow with
/// insertion, which is how declared edge order is recovered.
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    graph: DiGraph<String, ()>,
    index: HashMap<String, NodeIndex>,
}

impl DependencyGraph {
    /// Build a graph from an ordered task list and ordered edges.
    ///
    /// Fails if a task name is not a lowercase word, a task is declared
    /// twice, or an edge names a task that is not in `tasks`.
    pub fn build<S: AsRef<str>>(tasks: &[S], edges: &[Edge]) -> Result<Self, ScheduleError> {
        let mut graph: DiGraph<String, ()> = DiGraph::with_capacity(tasks.len(), edges.len());
        let mut index = HashMap::with_capacity(tasks.len());

        for task in tasks {
            let name = task.as_ref();
            if !is_task_name(name) {
                return Err(ScheduleError::InvalidTaskName(name.to_string()));
            }
            if index.contains_key(name) {
                return Err(ScheduleError::DuplicateTask(name.to_string()));
            }
            let node = graph.add_node(name.to_string());
            index.insert(name.to_string(), node);
        }

        for edge in edges {
            let lookup = |name: &str| {
                index
                    .get(name)
                    .copied()
                    .ok_or_else(|| ScheduleError::UnknownTask {
                        task: name.to_string(),
                        declaration: edge.to_string(),
                    })
            };
            let from = lookup(&edge.dependent)?;
            let to = lookup(&edge.dependent_on)?;
            graph.add_edge(from, to, ());
        }

        debug!(
            tasks = graph.node_count(),
            edges = graph.edge_count(),
            "built dependency graph"
        );

        Ok(Self { graph, index })
    }

    pub fn len(&self) -> usize {
        self.graph.node_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// All task names in declaration order.
    pub fn tasks(&self) -> impl Iterator<Item = &str> {
        self.graph.node_indices().map(|n| self.graph[n].as_str())
    }

    /// Direct dependencies of `name`, in the order they were declared.
    pub fn dependencies_of(&self, name: &str) -> Vec<&str> {
        self.neighbours(name, Direction::Outgoing)
    }

    /// Tasks that directly depend on `name`, in the order they were declared.
    pub fn dependents_of(&self, name: &str) -> Vec<&str> {
        self.neighbours(name, Direction::Incoming)
    }

    /// Tasks without dependencies, in declaration order.
    pub fn roots(&self) -> Vec<&str> {
        self.graph
            .node_indices()
            .filter(|&n| {
                self.graph
                    .neighbors_directed(n, Direction::Outgoing)
                    .next()
                    .is_none()
            })
            .map(|n| self.graph[n].as_str())
            .collect()
    }

    pub(crate) fn node_indices(&self) -> impl Iterator<Item = NodeIndex> {
        self.graph.node_indices()
    }

    pub(crate) fn name(&self, node: NodeIndex) -> &str {
        &self.graph[node]
    }

    /// Outgoing targets of `node` in declared edge order.
    ///
    /// petgraph walks adjacency lists newest-first, so sort by edge index.
    pub(crate) fn dependency_indices(&self, node: NodeIndex) -> Vec<NodeIndex> {
        self.ordered_edges(node, Direction::Outgoing)
            .into_iter()
            .map(|(_, target)| target)
            .collect()
    }

    fn ordered_edges(&self, node: NodeIndex, dir: Direction) -> Vec<(EdgeIndex, NodeIndex)> {
        let mut edges: Vec<(EdgeIndex, NodeIndex)> = self
            .graph
            .edges_directed(node, dir)
            .map(|e| {
                let other = match dir {
                    Direction::Outgoing => e.target(),
                    Direction::Incoming => e.source(),
                };
                (e.id(), other)
            })
            .collect();
        edges.sort_by_key(|(id, _)| *id);
        edges
    }

    fn neighbours(&self, name: &str, dir: Direction) -> Vec<&str> {
        let Some(&node) = self.index.get(name) else {
            return Vec::new();
        };
        self.ordered_edges(node, dir)
            .into_iter()
            .map(|(_, other)| self.graph[other].as_str())
            .collect()
    }
}
