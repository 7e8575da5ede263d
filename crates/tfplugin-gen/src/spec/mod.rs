//! Serde model of the provider code generation specification.
//!
//! The JSON format keys each attribute/block by exactly one kind field
//! (`bool`, `list_nested`, ...). Those one-of unions are modeled as enums so
//! an unrecognized or missing kind is a parse error rather than a runtime
//! check in the converters.

mod attribute;
mod block;
mod element_type;
mod types;

pub use attribute::{Attribute, AttributeType, NestedAttributeObject};
pub use block::{Block, BlockType, NestedBlockObject};
pub use element_type::{CollectionElement, ElementType, ObjectAttributeType, ObjectElement, PrimitiveElement};
pub use types::{
  AssociatedExternalType, BoolDefault, CollectionDefault, ComputedOptionalRequired, CustomDefault, CustomType,
  CustomValidator, Float64Default, Import, Int64Default, PlanModifier, StringDefault, Validator,
};

use serde::Deserialize;

use crate::naming::FrameworkIdentifier;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Specification {
  #[serde(default)]
  pub version: Option<String>,
  #[serde(default)]
  pub provider: Option<Provider>,
  #[serde(default)]
  pub resources: Vec<Resource>,
  #[serde(default)]
  pub datasources: Vec<DataSource>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Provider {
  pub name: FrameworkIdentifier,
  #[serde(default)]
  pub schema: Option<Schema>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Resource {
  pub name: FrameworkIdentifier,
  pub schema: Schema,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DataSource {
  pub name: FrameworkIdentifier,
  pub schema: Schema,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Schema {
  #[serde(default)]
  pub attributes: Vec<Attribute>,
  #[serde(default)]
  pub blocks: Vec<Block>,
  #[serde(default)]
  pub description: Option<String>,
  #[serde(default)]
  pub markdown_description: Option<String>,
  #[serde(default)]
  pub deprecation_message: Option<String>,
}

/// Parses a specification document, reporting the JSON path of the first
/// offending value on failure.
pub fn parse(data: &[u8]) -> anyhow::Result<Specification> {
  let mut deserializer = serde_json::Deserializer::from_slice(data);
  let spec = serde_path_to_error::deserialize(&mut deserializer)?;
  Ok(spec)
}
