pub mod adjustment;
pub mod orchestrator;
pub mod overrides;
pub mod rotation;
