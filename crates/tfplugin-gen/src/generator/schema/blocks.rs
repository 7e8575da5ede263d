//! Generator nodes for block kinds and the name-keyed block mapping.

use std::collections::BTreeMap;

use itertools::Itertools;

use super::{
  GeneratorSchemaType,
  attributes::GeneratorAttributes,
  custom_type,
  descriptors::{DeprecationMessage, Description},
  imports::{Imports, TYPES_IMPORT},
  validators,
};
use crate::{
  generator::SchemaError,
  naming::FrameworkIdentifier,
  spec::{AssociatedExternalType, CustomType, CustomValidator},
};

/// The nested object shared by list/set nested blocks: child attributes and
/// child blocks, recursively.
#[derive(Debug, Clone, Default, PartialEq, bon::Builder)]
pub struct GeneratorNestedBlockObject {
  #[builder(default)]
  pub attributes: GeneratorAttributes,
  #[builder(default)]
  pub blocks: GeneratorBlocks,
  pub custom_type: Option<CustomType>,
  pub associated_external_type: Option<AssociatedExternalType>,
  #[builder(default)]
  pub validators: Vec<CustomValidator>,
}

impl GeneratorNestedBlockObject {
  #[must_use]
  pub fn schema(&self, name: &FrameworkIdentifier, schema_name: &FrameworkIdentifier) -> String {
    let mut out = String::from("NestedObject: schema.NestedBlockObject{\n");
    if !self.attributes.is_empty() {
      out.push_str(&self.attributes.attributes_map_fragment(schema_name));
    }
    if !self.blocks.is_empty() {
      out.push_str(&self.blocks.blocks_map_fragment(schema_name));
    }
    out.push_str(&custom_type::nested_object_fragment(self.custom_type.as_ref(), name, schema_name));
    if let Some(fragment) = validators::validators_fragment("Object", &self.validators) {
      out.push_str(&fragment);
    }
    out.push_str("},\n");
    out
  }

  #[must_use]
  pub fn imports(&self) -> Imports {
    let mut imports = Imports::new();
    imports.add_path(TYPES_IMPORT);
    if let Some(custom) = &self.custom_type
      && let Some(import) = &custom.import
    {
      imports.add(import.clone());
    }
    if let Some(associated) = &self.associated_external_type
      && let Some(import) = &associated.import
    {
      imports.add(import.clone());
    }
    imports.extend(validators::validators_imports(&self.validators));
    imports.extend(self.attributes.imports());
    imports.extend(self.blocks.imports());
    imports
  }
}

macro_rules! nested_collection_block {
  ($name:ident, $go_type:literal, $validator_kind:literal, $model_type:literal) => {
    #[derive(Debug, Clone, Default, PartialEq, bon::Builder)]
    pub struct $name {
      #[builder(default)]
      pub nested_object: GeneratorNestedBlockObject,
      pub custom_type: Option<CustomType>,
      #[builder(default)]
      pub deprecation_message: DeprecationMessage,
      #[builder(default)]
      pub description: Description,
      #[builder(default)]
      pub validators: Vec<CustomValidator>,
      #[builder(default)]
      pub plan_modifiers: Vec<CustomValidator>,
    }

    impl $name {
      #[must_use]
      pub fn schema(&self, name: &FrameworkIdentifier, schema_name: &FrameworkIdentifier) -> String {
        let fragments = [
          self.custom_type.as_ref().map(|c| format!("CustomType: {},\n", c.type_name)),
          Some(self.nested_object.schema(name, schema_name)),
          self.description.schema(),
          self.deprecation_message.schema(),
          validators::validators_fragment($validator_kind, &self.validators),
          validators::plan_modifiers_fragment($validator_kind, &self.plan_modifiers),
        ];

        let mut out = format!("\"{name}\": schema.{}{{\n", $go_type);
        for fragment in fragments.into_iter().flatten() {
          out.push_str(&fragment);
        }
        out.push_str("},\n");
        out
      }

      #[must_use]
      pub fn imports(&self) -> Imports {
        let mut imports = Imports::new();
        if let Some(custom) = &self.custom_type
          && let Some(import) = &custom.import
        {
          imports.add(import.clone());
        }
        imports.extend(self.nested_object.imports());
        imports.extend(validators::validators_imports(&self.validators));
        imports.extend(validators::plan_modifiers_imports(&self.plan_modifiers));
        imports
      }

      #[must_use]
      pub fn model_type(&self, _name: &FrameworkIdentifier, _schema_name: &FrameworkIdentifier) -> String {
        $model_type.to_string()
      }
    }
  };
}

nested_collection_block!(ListNestedBlock, "ListNestedBlock", "List", "types.List");
nested_collection_block!(SetNestedBlock, "SetNestedBlock", "Set", "types.Set");

#[derive(Debug, Clone, Default, PartialEq, bon::Builder)]
pub struct SingleNestedBlock {
  #[builder(default)]
  pub attributes: GeneratorAttributes,
  #[builder(default)]
  pub blocks: GeneratorBlocks,
  pub custom_type: Option<CustomType>,
  pub associated_external_type: Option<AssociatedExternalType>,
  #[builder(default)]
  pub deprecation_message: DeprecationMessage,
  #[builder(default)]
  pub description: Description,
  #[builder(default)]
  pub validators: Vec<CustomValidator>,
  #[builder(default)]
  pub plan_modifiers: Vec<CustomValidator>,
}

impl SingleNestedBlock {
  #[must_use]
  pub fn schema(&self, name: &FrameworkIdentifier, schema_name: &FrameworkIdentifier) -> String {
    let fragments = [
      Some(custom_type::nested_object_fragment(self.custom_type.as_ref(), name, schema_name)),
      (!self.attributes.is_empty()).then(|| self.attributes.attributes_map_fragment(schema_name)),
      (!self.blocks.is_empty()).then(|| self.blocks.blocks_map_fragment(schema_name)),
      self.description.schema(),
      self.deprecation_message.schema(),
      validators::validators_fragment("Object", &self.validators),
      validators::plan_modifiers_fragment("Object", &self.plan_modifiers),
    ];

    let mut out = format!("\"{name}\": schema.SingleNestedBlock{{\n");
    for fragment in fragments.into_iter().flatten() {
      out.push_str(&fragment);
    }
    out.push_str("},\n");
    out
  }

  #[must_use]
  pub fn imports(&self) -> Imports {
    let mut imports = Imports::new();
    imports.add_path(TYPES_IMPORT);
    if let Some(custom) = &self.custom_type
      && let Some(import) = &custom.import
    {
      imports.add(import.clone());
    }
    if let Some(associated) = &self.associated_external_type
      && let Some(import) = &associated.import
    {
      imports.add(import.clone());
    }
    imports.extend(self.attributes.imports());
    imports.extend(self.blocks.imports());
    imports.extend(validators::validators_imports(&self.validators));
    imports.extend(validators::plan_modifiers_imports(&self.plan_modifiers));
    imports
  }

  #[must_use]
  pub fn model_type(&self, name: &FrameworkIdentifier, schema_name: &FrameworkIdentifier) -> String {
    if let Some(custom) = &self.custom_type
      && let Some(value_type) = &custom.value_type
    {
      return value_type.clone();
    }
    format!("{}Value", name.to_prefix_pascal_case(schema_name.as_str()))
  }
}

#[derive(Debug, Clone, PartialEq)]
pub enum GeneratorBlock {
  ListNested(ListNestedBlock),
  SetNested(SetNestedBlock),
  SingleNested(SingleNestedBlock),
}

impl GeneratorBlock {
  #[must_use]
  pub fn kind(&self) -> GeneratorSchemaType {
    match self {
      Self::ListNested(_) => GeneratorSchemaType::ListNestedBlock,
      Self::SetNested(_) => GeneratorSchemaType::SetNestedBlock,
      Self::SingleNested(_) => GeneratorSchemaType::SingleNestedBlock,
    }
  }

  #[must_use]
  pub fn schema(&self, name: &FrameworkIdentifier, schema_name: &FrameworkIdentifier) -> String {
    match self {
      Self::ListNested(b) => b.schema(name, schema_name),
      Self::SetNested(b) => b.schema(name, schema_name),
      Self::SingleNested(b) => b.schema(name, schema_name),
    }
  }

  #[must_use]
  pub fn imports(&self) -> Imports {
    match self {
      Self::ListNested(b) => b.imports(),
      Self::SetNested(b) => b.imports(),
      Self::SingleNested(b) => b.imports(),
    }
  }

  #[must_use]
  pub fn model_type(&self, name: &FrameworkIdentifier, schema_name: &FrameworkIdentifier) -> String {
    match self {
      Self::ListNested(b) => b.model_type(name, schema_name),
      Self::SetNested(b) => b.model_type(name, schema_name),
      Self::SingleNested(b) => b.model_type(name, schema_name),
    }
  }

  #[must_use]
  pub fn model_field(&self, name: &FrameworkIdentifier, schema_name: &FrameworkIdentifier) -> String {
    format!(
      "{} {} `tfsdk:\"{name}\"`",
      name.to_prefix_pascal_case(schema_name.as_str()),
      self.model_type(name, schema_name),
    )
  }
}

/// Name-keyed block mapping with the same ordering and equality contract as
/// [`GeneratorAttributes`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeneratorBlocks {
  entries: BTreeMap<FrameworkIdentifier, GeneratorBlock>,
}

impl GeneratorBlocks {
  #[must_use]
  pub fn new() -> Self {
    Self::default()
  }

  pub fn insert(&mut self, name: FrameworkIdentifier, block: GeneratorBlock) -> Result<(), SchemaError> {
    if self.entries.contains_key(&name) {
      return Err(SchemaError::DuplicateName {
        name: name.as_str().to_string(),
      });
    }
    self.entries.insert(name, block);
    Ok(())
  }

  #[must_use]
  pub fn get(&self, name: &FrameworkIdentifier) -> Option<&GeneratorBlock> {
    self.entries.get(name)
  }

  pub fn iter(&self) -> impl Iterator<Item = (&FrameworkIdentifier, &GeneratorBlock)> {
    self.entries.iter()
  }

  #[must_use]
  pub fn len(&self) -> usize {
    self.entries.len()
  }

  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  #[must_use]
  pub fn schema(&self, schema_name: &FrameworkIdentifier) -> String {
    self
      .entries
      .iter()
      .map(|(name, block)| block.schema(name, schema_name))
      .collect()
  }

  /// `Blocks: map[string]schema.Block{ ... },`
  #[must_use]
  pub fn blocks_map_fragment(&self, schema_name: &FrameworkIdentifier) -> String {
    format!("Blocks: map[string]schema.Block{{\n{}}},\n", self.schema(schema_name))
  }

  #[must_use]
  pub fn imports(&self) -> Imports {
    let mut imports = Imports::new();
    for block in self.entries.values() {
      imports.extend(block.imports());
    }
    imports
  }

  /// Model struct fields in sorted name order, one per line.
  #[must_use]
  pub fn model_fields(&self, schema_name: &FrameworkIdentifier) -> String {
    self
      .entries
      .iter()
      .map(|(name, block)| block.model_field(name, schema_name))
      .join("\n")
  }

  /// Go container type per block, keyed by name. Derived on every call.
  #[must_use]
  pub fn block_types(&self) -> BTreeMap<FrameworkIdentifier, String> {
    self
      .entries
      .iter()
      .map(|(name, block)| {
        let container = match block {
          GeneratorBlock::ListNested(_) => "ListType",
          GeneratorBlock::SetNested(_) => "SetType",
          GeneratorBlock::SingleNested(_) => "ObjectType",
        };
        (name.clone(), container.to_string())
      })
      .collect()
  }

  /// `attr.Type` literal per block, keyed by name.
  #[must_use]
  pub fn attr_types(&self, schema_name: &FrameworkIdentifier) -> BTreeMap<FrameworkIdentifier, String> {
    self
      .entries
      .iter()
      .map(|(name, block)| (name.clone(), block.attr_type(name, schema_name)))
      .collect()
  }

  /// `attr.Value` Go type per block, keyed by name.
  #[must_use]
  pub fn attr_values(&self, schema_name: &FrameworkIdentifier) -> BTreeMap<FrameworkIdentifier, String> {
    self
      .entries
      .iter()
      .map(|(name, block)| (name.clone(), block.attr_value_type(name, schema_name)))
      .collect()
  }

  /// `To<External>` helper name per block with an associated external type.
  #[must_use]
  pub fn to_funcs(&self) -> BTreeMap<FrameworkIdentifier, String> {
    self
      .entries
      .iter()
      .filter_map(|(name, block)| {
        block
          .associated_external_type()
          .map(|associated| (name.clone(), format!("To{}", associated.pascal_name())))
      })
      .collect()
  }

  /// `From<External>` helper name per block with an associated external type.
  #[must_use]
  pub fn from_funcs(&self) -> BTreeMap<FrameworkIdentifier, String> {
    self
      .entries
      .iter()
      .filter_map(|(name, block)| {
        block
          .associated_external_type()
          .map(|associated| (name.clone(), format!("From{}", associated.pascal_name())))
      })
      .collect()
  }
}

impl GeneratorBlock {
  #[must_use]
  pub fn associated_external_type(&self) -> Option<&AssociatedExternalType> {
    match self {
      Self::ListNested(b) => b.nested_object.associated_external_type.as_ref(),
      Self::SetNested(b) => b.nested_object.associated_external_type.as_ref(),
      Self::SingleNested(b) => b.associated_external_type.as_ref(),
    }
  }

  /// The `attr.Type` literal used where this block appears as a child of a
  /// generated object type.
  #[must_use]
  pub fn attr_type(&self, name: &FrameworkIdentifier, schema_name: &FrameworkIdentifier) -> String {
    let pascal = name.to_prefix_pascal_case(schema_name.as_str());
    match self {
      Self::ListNested(_) => format!("basetypes.ListType{{\nElemType: {pascal}Value{{}}.Type(ctx),\n}}"),
      Self::SetNested(_) => format!("basetypes.SetType{{\nElemType: {pascal}Value{{}}.Type(ctx),\n}}"),
      Self::SingleNested(_) => {
        format!("basetypes.ObjectType{{\nAttrTypes: {pascal}Value{{}}.AttributeTypes(ctx),\n}}")
      }
    }
  }

  /// The `attr.Value` Go type this block occupies inside a generated object
  /// value struct.
  #[must_use]
  pub fn attr_value_type(&self, name: &FrameworkIdentifier, schema_name: &FrameworkIdentifier) -> String {
    match self {
      Self::ListNested(_) => "basetypes.ListValue".to_string(),
      Self::SetNested(_) => "basetypes.SetValue".to_string(),
      Self::SingleNested(_) => format!("{}Value", name.to_prefix_pascal_case(schema_name.as_str())),
    }
  }
}
