pub mod output;
pub mod sources;

pub use output::{create_writer, OutputFormat, OutputWriter};
pub use sources::read_sources;
