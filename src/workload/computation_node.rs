use std::collections::HashMap;

use crate::workload::{NodeId, layer_record::NodeAttributes, mapping::MappingAttributes};

/// One workload layer bound to its resolved hardware mapping. Built once by
/// the graph builder and not mutated afterwards.
#[derive(Clone, Debug)]
pub struct ComputationNode {
    pub id: NodeId,
    pub name: String,
    pub op_type: String,
    pub attributes: NodeAttributes,
    pub mapping: MappingAttributes,
    pub input_operand_sources: HashMap<String, NodeId>,
}

impl ComputationNode {
    /// Source nodes (network inputs) have no declared producers.
    pub fn is_source(&self) -> bool {
        self.input_operand_sources.is_empty()
    }
}
