use std::collections::HashMap;

use crate::{
    hardware::core::{Core, CoreId},
    utils::error::CoreMapError,
    workload::mapping::SpatialMapping,
};

/// Hardware description as far as mapping resolution needs it: a set of
/// cores, queryable by id for their declared spatial dataflow.
#[derive(Clone, Debug)]
pub struct Accelerator {
    pub name: String,
    cores: HashMap<CoreId, Core>,
}

impl Accelerator {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cores: HashMap::new(),
        }
    }

    pub fn add_core(&mut self, core: Core) -> Result<(), CoreMapError> {
        if self.cores.contains_key(&core.id) {
            return Err(CoreMapError::DuplicateCore { core_id: core.id });
        }
        self.cores.insert(core.id, core);
        Ok(())
    }

    pub fn core(&self, id: CoreId) -> Option<&Core> {
        self.cores.get(&id)
    }

    pub fn core_count(&self) -> usize {
        self.cores.len()
    }

    /// The spatial dataflow declared for a core, if any. An unknown core id
    /// or a core without a declared dataflow both answer None; callers treat
    /// that as "keep whatever spatial mapping you already have".
    pub fn spatial_dataflow_of(&self, core_allocation: CoreId) -> Option<&SpatialMapping> {
        self.cores
            .get(&core_allocation)
            .and_then(|core| core.dataflow.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dataflow_lookup_hits_and_misses() {
        let df = SpatialMapping::new("os", vec![("K".into(), 16), ("C".into(), 4)]);
        let mut accel = Accelerator::new("quadcore");
        accel.add_core(Core::with_dataflow(0, df.clone())).unwrap();
        accel.add_core(Core::new(1)).unwrap();

        assert_eq!(accel.spatial_dataflow_of(0), Some(&df));
        // declared core without a dataflow
        assert_eq!(accel.spatial_dataflow_of(1), None);
        // unknown core id
        assert_eq!(accel.spatial_dataflow_of(7), None);
    }

    #[test]
    fn duplicate_core_is_rejected() {
        let mut accel = Accelerator::new("dup");
        accel.add_core(Core::new(2)).unwrap();
        let err = accel.add_core(Core::new(2)).unwrap_err();
        assert_eq!(err, CoreMapError::DuplicateCore { core_id: 2 });
        assert_eq!(accel.core_count(), 1);
    }
}
