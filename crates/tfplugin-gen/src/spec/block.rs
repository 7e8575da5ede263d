use serde::Deserialize;

use super::{
  attribute::Attribute,
  types::{AssociatedExternalType, CustomType, PlanModifier, Validator},
};
use crate::naming::FrameworkIdentifier;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Block {
  pub name: FrameworkIdentifier,
  #[serde(flatten)]
  pub kind: BlockType,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockType {
  ListNested(ListNestedBlock),
  SetNested(SetNestedBlock),
  SingleNested(SingleNestedBlock),
}

/// Child attributes and blocks of a list/set nested block.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct NestedBlockObject {
  #[serde(default)]
  pub attributes: Vec<Attribute>,
  #[serde(default)]
  pub blocks: Vec<Block>,
  #[serde(default)]
  pub associated_external_type: Option<AssociatedExternalType>,
  #[serde(default)]
  pub custom_type: Option<CustomType>,
  #[serde(default)]
  pub validators: Vec<Validator>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ListNestedBlock {
  pub nested_object: NestedBlockObject,
  #[serde(default)]
  pub custom_type: Option<CustomType>,
  #[serde(default)]
  pub deprecation_message: Option<String>,
  #[serde(default)]
  pub description: Option<String>,
  #[serde(default)]
  pub plan_modifiers: Vec<PlanModifier>,
  #[serde(default)]
  pub validators: Vec<Validator>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SetNestedBlock {
  pub nested_object: NestedBlockObject,
  #[serde(default)]
  pub custom_type: Option<CustomType>,
  #[serde(default)]
  pub deprecation_message: Option<String>,
  #[serde(default)]
  pub description: Option<String>,
  #[serde(default)]
  pub plan_modifiers: Vec<PlanModifier>,
  #[serde(default)]
  pub validators: Vec<Validator>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SingleNestedBlock {
  #[serde(default)]
  pub attributes: Vec<Attribute>,
  #[serde(default)]
  pub blocks: Vec<Block>,
  #[serde(default)]
  pub associated_external_type: Option<AssociatedExternalType>,
  #[serde(default)]
  pub custom_type: Option<CustomType>,
  #[serde(default)]
  pub deprecation_message: Option<String>,
  #[serde(default)]
  pub description: Option<String>,
  #[serde(default)]
  pub plan_modifiers: Vec<PlanModifier>,
  #[serde(default)]
  pub validators: Vec<Validator>,
}
