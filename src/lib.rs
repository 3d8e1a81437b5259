//! coremap - Mapping resolution and workload graph construction for
//! multi-core ML accelerators
//!
//! Given a list of declared workload layers, a user mapping table and an
//! accelerator description, this library resolves the hardware mapping each
//! computation node executes under (core allocation, spatial mapping,
//! intra/inter-core tiling) and assembles the nodes into a directed
//! dependency graph for downstream scheduling.

mod hardware;

mod workload;

mod utils;

pub use hardware::{Accelerator, Core, CoreId};
pub use utils::error::CoreMapError;
pub use workload::{
    ComputationNode, DefaultLayerAttributeFactory, LayerAttributeFactory, LayerRecord,
    MappingAttributes, MappingKey, MappingTable, NodeAttributes, NodeId, SpatialMapping,
    TilingLoop, WorkloadGraph, WorkloadGraphBuilder,
};
