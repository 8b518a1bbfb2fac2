/// Console adapters for progress and diagnostics on stderr
mod progress_reporter;

pub use progress_reporter::StderrProgressReporter;
