/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod dependents_request;
mod dependents_response;
mod output_format;
mod show_request;
mod show_response;

pub use dependents_request::DependentsRequest;
pub use dependents_response::DependentsResponse;
pub use output_format::OutputFormat;
pub use show_request::ShowRequest;
pub use show_response::ShowResponse;
