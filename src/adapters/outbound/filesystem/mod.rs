/// Filesystem adapters for scope reading and report output
mod file_writer;
mod scope_reader;

pub use file_writer::{FileSystemWriter, StdoutPresenter};
pub use scope_reader::{FileSystemScopeRepository, OBJECTS_DIRNAME, SCOPE_INDEX_FILENAME};
