pub mod file;
pub mod synthetic;

pub use file::FileSource;
pub use synthetic::SyntheticSource;
