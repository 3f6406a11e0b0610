//! Install operation submodules
//! Modularity for install operation

pub mod context;
pub mod orchestrator;


pub use context::InstallRequest;
pub use orchestrator::{InstallOperation, InstallOutcome};
