use std::collections::HashMap;

use crate::{
    hardware::{Accelerator, CoreId},
    utils::error::CoreMapError,
    workload::NodeId,
};

/// How one operation's work is spread across the parallel compute units of a
/// single core: a named dataflow plus its loop unrolling, e.g.
/// ("weight_stationary", [("K", 32), ("C", 2)]).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpatialMapping {
    pub name: String,
    pub unrolling: Vec<(String, usize)>,
}

impl SpatialMapping {
    pub fn new(name: impl Into<String>, unrolling: Vec<(String, usize)>) -> Self {
        Self {
            name: name.into(),
            unrolling,
        }
    }
}

/// One tiling split: loop dimension and the factor it is split by.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TilingLoop {
    pub dimension: String,
    pub factor: usize,
}

impl TilingLoop {
    pub fn new(dimension: impl Into<String>, factor: usize) -> Self {
        Self {
            dimension: dimension.into(),
            factor,
        }
    }
}

/// Hardware mapping policy for one computation node. Tiling vectors may be
/// empty in table entries; resolution fills them from the default entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MappingAttributes {
    pub core_allocation: CoreId,
    pub spatial_mapping: SpatialMapping,
    pub intra_core_tiling: Vec<TilingLoop>,
    pub inter_core_tiling: Vec<TilingLoop>,
}

impl MappingAttributes {
    pub fn new(core_allocation: CoreId, spatial_mapping: SpatialMapping) -> Self {
        Self {
            core_allocation,
            spatial_mapping,
            intra_core_tiling: Vec::new(),
            inter_core_tiling: Vec::new(),
        }
    }
}

/// Key space of the mapping table. Ids, names and operator types live in
/// separate maps so an id can never collide with an unrelated string key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MappingKey {
    ById(NodeId),
    ByName(String),
    ByType(String),
    Default,
}

/// User-declared mapping table. Must carry a default entry before it can
/// resolve anything; per-id, per-name and per-type entries are optional
/// overrides.
#[derive(Clone, Debug, Default)]
pub struct MappingTable {
    by_id: HashMap<NodeId, MappingAttributes>,
    by_name: HashMap<String, MappingAttributes>,
    by_type: HashMap<String, MappingAttributes>,
    default: Option<MappingAttributes>,
}

impl MappingTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: MappingKey, mapping: MappingAttributes) {
        match key {
            MappingKey::ById(id) => {
                self.by_id.insert(id, mapping);
            }
            MappingKey::ByName(name) => {
                self.by_name.insert(name, mapping);
            }
            MappingKey::ByType(op_type) => {
                self.by_type.insert(op_type, mapping);
            }
            MappingKey::Default => self.default = Some(mapping),
        }
    }

    /// Resolve the mapping for one node. Lookup precedence is node id, then
    /// node name, then operator type, then the default entry. The core's
    /// declared dataflow always replaces the entry's spatial mapping, and
    /// empty tiling vectors are filled from the default entry. Resolution
    /// works on a clone, so table entries are never mutated and nodes that
    /// share an entry cannot corrupt each other's result.
    pub fn resolve(
        &self,
        node_id: NodeId,
        node_name: &str,
        node_type: &str,
        accelerator: &Accelerator,
    ) -> Result<MappingAttributes, CoreMapError> {
        let default = self
            .default
            .as_ref()
            .ok_or(CoreMapError::MissingDefaultMapping)?;

        let entry = if let Some(m) = self.by_id.get(&node_id) {
            m
        } else if let Some(m) = self.by_name.get(node_name) {
            m
        } else if let Some(m) = self.by_type.get(node_type) {
            m
        } else {
            tracing::debug!("no mapping entry for node {node_id} ({node_name}), using default");
            default
        };

        let mut mapping = entry.clone();

        if let Some(dataflow) = accelerator.spatial_dataflow_of(mapping.core_allocation) {
            mapping.spatial_mapping = dataflow.clone();
        }

        if mapping.intra_core_tiling.is_empty() {
            mapping.intra_core_tiling = default.intra_core_tiling.clone();
        }
        if mapping.inter_core_tiling.is_empty() {
            mapping.inter_core_tiling = default.inter_core_tiling.clone();
        }

        Ok(mapping)
    }
}
