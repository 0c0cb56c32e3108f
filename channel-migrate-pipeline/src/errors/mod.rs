mod loader;
mod orchestrator;
mod transform;

pub use loader::LoaderError;
pub use orchestrator::OrchestratorError;
pub use transform::TransformError;
