pub mod generate;
pub mod validate;

pub use generate::{GenerateConfig, generate_code};
pub use validate::validate_spec;
