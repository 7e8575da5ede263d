use serde::Deserialize;

use super::{
  element_type::{ElementType, ObjectAttributeType},
  types::{
    AssociatedExternalType, BoolDefault, CollectionDefault, ComputedOptionalRequired, CustomType, Float64Default,
    Int64Default, PlanModifier, StringDefault, Validator,
  },
};
use crate::naming::FrameworkIdentifier;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Attribute {
  pub name: FrameworkIdentifier,
  #[serde(flatten)]
  pub kind: AttributeType,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeType {
  Bool(BoolAttribute),
  Float64(Float64Attribute),
  Int64(Int64Attribute),
  List(ListAttribute),
  ListNested(ListNestedAttribute),
  Map(MapAttribute),
  MapNested(MapNestedAttribute),
  Number(NumberAttribute),
  Object(ObjectAttribute),
  Set(SetAttribute),
  SetNested(SetNestedAttribute),
  SingleNested(SingleNestedAttribute),
  String(StringAttribute),
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct BoolAttribute {
  #[serde(default, alias = "optional_required")]
  pub computed_optional_required: ComputedOptionalRequired,
  #[serde(default)]
  pub associated_external_type: Option<AssociatedExternalType>,
  #[serde(default)]
  pub custom_type: Option<CustomType>,
  #[serde(default)]
  pub default: Option<BoolDefault>,
  #[serde(default)]
  pub deprecation_message: Option<String>,
  #[serde(default)]
  pub description: Option<String>,
  #[serde(default)]
  pub plan_modifiers: Vec<PlanModifier>,
  #[serde(default)]
  pub sensitive: Option<bool>,
  #[serde(default)]
  pub validators: Vec<Validator>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Float64Attribute {
  #[serde(default, alias = "optional_required")]
  pub computed_optional_required: ComputedOptionalRequired,
  #[serde(default)]
  pub associated_external_type: Option<AssociatedExternalType>,
  #[serde(default)]
  pub custom_type: Option<CustomType>,
  #[serde(default)]
  pub default: Option<Float64Default>,
  #[serde(default)]
  pub deprecation_message: Option<String>,
  #[serde(default)]
  pub description: Option<String>,
  #[serde(default)]
  pub plan_modifiers: Vec<PlanModifier>,
  #[serde(default)]
  pub sensitive: Option<bool>,
  #[serde(default)]
  pub validators: Vec<Validator>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Int64Attribute {
  #[serde(default, alias = "optional_required")]
  pub computed_optional_required: ComputedOptionalRequired,
  #[serde(default)]
  pub associated_external_type: Option<AssociatedExternalType>,
  #[serde(default)]
  pub custom_type: Option<CustomType>,
  #[serde(default)]
  pub default: Option<Int64Default>,
  #[serde(default)]
  pub deprecation_message: Option<String>,
  #[serde(default)]
  pub description: Option<String>,
  #[serde(default)]
  pub plan_modifiers: Vec<PlanModifier>,
  #[serde(default)]
  pub sensitive: Option<bool>,
  #[serde(default)]
  pub validators: Vec<Validator>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct NumberAttribute {
  #[serde(default, alias = "optional_required")]
  pub computed_optional_required: ComputedOptionalRequired,
  #[serde(default)]
  pub associated_external_type: Option<AssociatedExternalType>,
  #[serde(default)]
  pub custom_type: Option<CustomType>,
  #[serde(default)]
  pub default: Option<CollectionDefault>,
  #[serde(default)]
  pub deprecation_message: Option<String>,
  #[serde(default)]
  pub description: Option<String>,
  #[serde(default)]
  pub plan_modifiers: Vec<PlanModifier>,
  #[serde(default)]
  pub sensitive: Option<bool>,
  #[serde(default)]
  pub validators: Vec<Validator>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct StringAttribute {
  #[serde(default, alias = "optional_required")]
  pub computed_optional_required: ComputedOptionalRequired,
  #[serde(default)]
  pub associated_external_type: Option<AssociatedExternalType>,
  #[serde(default)]
  pub custom_type: Option<CustomType>,
  #[serde(default)]
  pub default: Option<StringDefault>,
  #[serde(default)]
  pub deprecation_message: Option<String>,
  #[serde(default)]
  pub description: Option<String>,
  #[serde(default)]
  pub plan_modifiers: Vec<PlanModifier>,
  #[serde(default)]
  pub sensitive: Option<bool>,
  #[serde(default)]
  pub validators: Vec<Validator>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ListAttribute {
  #[serde(default, alias = "optional_required")]
  pub computed_optional_required: ComputedOptionalRequired,
  pub element_type: ElementType,
  #[serde(default)]
  pub associated_external_type: Option<AssociatedExternalType>,
  #[serde(default)]
  pub custom_type: Option<CustomType>,
  #[serde(default)]
  pub default: Option<CollectionDefault>,
  #[serde(default)]
  pub deprecation_message: Option<String>,
  #[serde(default)]
  pub description: Option<String>,
  #[serde(default)]
  pub plan_modifiers: Vec<PlanModifier>,
  #[serde(default)]
  pub sensitive: Option<bool>,
  #[serde(default)]
  pub validators: Vec<Validator>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MapAttribute {
  #[serde(default, alias = "optional_required")]
  pub computed_optional_required: ComputedOptionalRequired,
  pub element_type: ElementType,
  #[serde(default)]
  pub associated_external_type: Option<AssociatedExternalType>,
  #[serde(default)]
  pub custom_type: Option<CustomType>,
  #[serde(default)]
  pub default: Option<CollectionDefault>,
  #[serde(default)]
  pub deprecation_message: Option<String>,
  #[serde(default)]
  pub description: Option<String>,
  #[serde(default)]
  pub plan_modifiers: Vec<PlanModifier>,
  #[serde(default)]
  pub sensitive: Option<bool>,
  #[serde(default)]
  pub validators: Vec<Validator>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SetAttribute {
  #[serde(default, alias = "optional_required")]
  pub computed_optional_required: ComputedOptionalRequired,
  pub element_type: ElementType,
  #[serde(default)]
  pub associated_external_type: Option<AssociatedExternalType>,
  #[serde(default)]
  pub custom_type: Option<CustomType>,
  #[serde(default)]
  pub default: Option<CollectionDefault>,
  #[serde(default)]
  pub deprecation_message: Option<String>,
  #[serde(default)]
  pub description: Option<String>,
  #[serde(default)]
  pub plan_modifiers: Vec<PlanModifier>,
  #[serde(default)]
  pub sensitive: Option<bool>,
  #[serde(default)]
  pub validators: Vec<Validator>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ObjectAttribute {
  #[serde(default, alias = "optional_required")]
  pub computed_optional_required: ComputedOptionalRequired,
  pub attribute_types: Vec<ObjectAttributeType>,
  #[serde(default)]
  pub associated_external_type: Option<AssociatedExternalType>,
  #[serde(default)]
  pub custom_type: Option<CustomType>,
  #[serde(default)]
  pub default: Option<CollectionDefault>,
  #[serde(default)]
  pub deprecation_message: Option<String>,
  #[serde(default)]
  pub description: Option<String>,
  #[serde(default)]
  pub plan_modifiers: Vec<PlanModifier>,
  #[serde(default)]
  pub sensitive: Option<bool>,
  #[serde(default)]
  pub validators: Vec<Validator>,
}

/// Child attributes of a list/map/set nested attribute.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct NestedAttributeObject {
  #[serde(default)]
  pub attributes: Vec<Attribute>,
  #[serde(default)]
  pub associated_external_type: Option<AssociatedExternalType>,
  #[serde(default)]
  pub custom_type: Option<CustomType>,
  #[serde(default)]
  pub validators: Vec<Validator>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ListNestedAttribute {
  #[serde(default, alias = "optional_required")]
  pub computed_optional_required: ComputedOptionalRequired,
  pub nested_object: NestedAttributeObject,
  #[serde(default)]
  pub custom_type: Option<CustomType>,
  #[serde(default)]
  pub default: Option<CollectionDefault>,
  #[serde(default)]
  pub deprecation_message: Option<String>,
  #[serde(default)]
  pub description: Option<String>,
  #[serde(default)]
  pub plan_modifiers: Vec<PlanModifier>,
  #[serde(default)]
  pub sensitive: Option<bool>,
  #[serde(default)]
  pub validators: Vec<Validator>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MapNestedAttribute {
  #[serde(default, alias = "optional_required")]
  pub computed_optional_required: ComputedOptionalRequired,
  pub nested_object: NestedAttributeObject,
  #[serde(default)]
  pub custom_type: Option<CustomType>,
  #[serde(default)]
  pub default: Option<CollectionDefault>,
  #[serde(default)]
  pub deprecation_message: Option<String>,
  #[serde(default)]
  pub description: Option<String>,
  #[serde(default)]
  pub plan_modifiers: Vec<PlanModifier>,
  #[serde(default)]
  pub sensitive: Option<bool>,
  #[serde(default)]
  pub validators: Vec<Validator>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SetNestedAttribute {
  #[serde(default, alias = "optional_required")]
  pub computed_optional_required: ComputedOptionalRequired,
  pub nested_object: NestedAttributeObject,
  #[serde(default)]
  pub custom_type: Option<CustomType>,
  #[serde(default)]
  pub default: Option<CollectionDefault>,
  #[serde(default)]
  pub deprecation_message: Option<String>,
  #[serde(default)]
  pub description: Option<String>,
  #[serde(default)]
  pub plan_modifiers: Vec<PlanModifier>,
  #[serde(default)]
  pub sensitive: Option<bool>,
  #[serde(default)]
  pub validators: Vec<Validator>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SingleNestedAttribute {
  #[serde(default, alias = "optional_required")]
  pub computed_optional_required: ComputedOptionalRequired,
  #[serde(default)]
  pub attributes: Vec<Attribute>,
  #[serde(default)]
  pub associated_external_type: Option<AssociatedExternalType>,
  #[serde(default)]
  pub custom_type: Option<CustomType>,
  #[serde(default)]
  pub default: Option<CollectionDefault>,
  #[serde(default)]
  pub deprecation_message: Option<String>,
  #[serde(default)]
  pub description: Option<String>,
  #[serde(default)]
  pub plan_modifiers: Vec<PlanModifier>,
  #[serde(default)]
  pub sensitive: Option<bool>,
  #[serde(default)]
  pub validators: Vec<Validator>,
}
