pub mod profile;

pub use profile::{build_reference_spectrum, GeneratorConfig};
