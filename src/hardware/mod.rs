pub mod accelerator;
pub mod core;

pub use accelerator::Accelerator;
pub use self::core::{Core, CoreId};
