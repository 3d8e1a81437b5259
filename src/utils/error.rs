use thiserror::Error;

use crate::{hardware::CoreId, workload::NodeId};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreMapError {
    #[error("mapping table has no \"default\" entry")]
    MissingDefaultMapping,

    #[error("node {node_id} references non-existent producer {producer_id}")]
    DanglingReference { node_id: NodeId, producer_id: NodeId },

    #[error("node {node_id} declares itself as an input operand source")]
    SelfReference { node_id: NodeId },

    #[error("accelerator already contains a core with id {core_id}")]
    DuplicateCore { core_id: CoreId },
}
