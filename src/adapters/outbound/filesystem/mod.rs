/// Filesystem adapters: dependency file input and report output
mod adjacency_list;
mod file_reader;
mod file_writer;

pub use adjacency_list::parse_adjacency_list;
pub use file_reader::FileSystemReader;
pub use file_writer::{FileSystemWriter, StdoutPresenter};
