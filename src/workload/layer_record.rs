use std::collections::HashMap;

use crate::workload::NodeId;

/// Raw declared attributes for one workload layer, as parsed from the user's
/// workload description. Operand sources name the producing node per operand
/// role, e.g. {"I": 3, "W": 7}.
#[derive(Clone, Debug)]
pub struct LayerRecord {
    pub op_type: String,
    pub id: NodeId,
    pub name: String,
    pub input_operand_sources: HashMap<String, NodeId>,
    pub loop_dim_sizes: HashMap<String, usize>,
}

impl LayerRecord {
    pub fn new(
        op_type: impl Into<String>,
        id: NodeId,
        name: impl Into<String>,
        input_operand_sources: HashMap<String, NodeId>,
    ) -> Self {
        Self {
            op_type: op_type.into(),
            id,
            name: name.into(),
            input_operand_sources,
            loop_dim_sizes: HashMap::new(),
        }
    }
}

/// Normalized per-layer attributes as produced by the attribute factory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NodeAttributes {
    pub op_type: String,
    pub loop_dim_sizes: HashMap<String, usize>,
}

/// Seam for the external layer-attribute factory. Implementations own the
/// normalization of raw records; the graph builder only consumes the
/// `(attributes, id, name, op_type)` it hands back.
pub trait LayerAttributeFactory {
    fn create_node_attr(&self, record: &LayerRecord) -> (NodeAttributes, NodeId, String, String);
}

/// Passthrough factory: takes the record's declared fields as already
/// normalized.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultLayerAttributeFactory;

impl LayerAttributeFactory for DefaultLayerAttributeFactory {
    fn create_node_attr(&self, record: &LayerRecord) -> (NodeAttributes, NodeId, String, String) {
        let attrs = NodeAttributes {
            op_type: record.op_type.clone(),
            loop_dim_sizes: record.loop_dim_sizes.clone(),
        };
        (attrs, record.id, record.name.clone(), record.op_type.clone())
    }
}
