pub mod computation_node;
pub mod factory;
pub mod graph;
pub mod layer_record;
pub mod mapping;

pub use computation_node::ComputationNode;
pub use factory::WorkloadGraphBuilder;
pub use graph::WorkloadGraph;
pub use layer_record::{
    DefaultLayerAttributeFactory, LayerAttributeFactory, LayerRecord, NodeAttributes,
};
pub use mapping::{MappingAttributes, MappingKey, MappingTable, SpatialMapping, TilingLoop};

pub type NodeId = usize;
