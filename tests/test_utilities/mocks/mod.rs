/// Mock implementations for testing
mod mock_component_repository;
mod mock_progress_reporter;

pub use mock_component_repository::MockComponentRepository;
pub use mock_progress_reporter::MockProgressReporter;
