use crate::workload::mapping::SpatialMapping;

pub type CoreId = usize;

/// One compute core of the accelerator. A core may declare the spatial
/// dataflow its datapath is built for; nodes allocated to it are forced onto
/// that dataflow during mapping resolution.
#[derive(Clone, Debug)]
pub struct Core {
    pub id: CoreId,
    pub dataflow: Option<SpatialMapping>,
}

impl Core {
    pub fn new(id: CoreId) -> Self {
        Self { id, dataflow: None }
    }

    pub fn with_dataflow(id: CoreId, dataflow: SpatialMapping) -> Self {
        Self {
            id,
            dataflow: Some(dataflow),
        }
    }
}
