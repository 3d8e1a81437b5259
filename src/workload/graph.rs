use std::collections::HashMap;

use crate::workload::{NodeId, computation_node::ComputationNode};

/// Directed dependency graph over computation nodes. Edges point from
/// producer to consumer; adjacency is deduplicated, so two operand roles fed
/// by the same producer contribute one edge. The declaration order of the
/// nodes is retained for consumers that need it.
#[derive(Clone, Debug, Default)]
pub struct WorkloadGraph {
    nodes: HashMap<NodeId, ComputationNode>,
    node_order: Vec<NodeId>,
    successors: HashMap<NodeId, Vec<NodeId>>,
    predecessors: HashMap<NodeId, Vec<NodeId>>,
    edge_count: usize,
}

impl WorkloadGraph {
    pub fn new() -> Self {
        Self::default()
    }

    // Insertion is crate-internal; the builder guarantees edge endpoints
    // exist before wiring them.
    pub(crate) fn add_node(&mut self, node: ComputationNode) {
        let id = node.id;
        self.nodes.insert(id, node);
        self.node_order.push(id);
        self.successors.entry(id).or_default();
        self.predecessors.entry(id).or_default();
    }

    pub(crate) fn add_edge(&mut self, from: NodeId, to: NodeId) {
        let succs = self.successors.entry(from).or_default();
        if succs.contains(&to) {
            return;
        }
        succs.push(to);
        self.predecessors.entry(to).or_default().push(from);
        self.edge_count += 1;
    }

    pub fn node(&self, id: NodeId) -> Option<&ComputationNode> {
        self.nodes.get(&id)
    }

    pub fn contains_node(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Node ids in declaration order.
    pub fn node_ids(&self) -> &[NodeId] {
        &self.node_order
    }

    /// Nodes in declaration order.
    pub fn nodes(&self) -> impl Iterator<Item = &ComputationNode> {
        self.node_order.iter().map(|id| &self.nodes[id])
    }

    pub fn successors(&self, id: NodeId) -> &[NodeId] {
        self.successors.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn predecessors(&self, id: NodeId) -> &[NodeId] {
        self.predecessors.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn in_degree(&self, id: NodeId) -> usize {
        self.predecessors(id).len()
    }

    pub fn contains_edge(&self, from: NodeId, to: NodeId) -> bool {
        self.successors(from).contains(&to)
    }

    /// Ids of nodes with no incoming edges, in declaration order.
    pub fn source_node_ids(&self) -> Vec<NodeId> {
        self.node_order
            .iter()
            .copied()
            .filter(|&id| self.in_degree(id) == 0)
            .collect()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }
}
