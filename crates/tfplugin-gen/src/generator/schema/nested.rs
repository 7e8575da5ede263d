//! Generator nodes for nested attribute kinds and the object attribute.

use super::{
  attribute_literal,
  attributes::GeneratorAttributes,
  custom_type, defaults,
  descriptors::{ComputedOptionalRequired, DeprecationMessage, Description, Sensitive},
  element_type,
  imports::{Imports, TYPES_IMPORT},
  primitives::generated_or_builtin,
  validators,
};
use crate::{
  naming::FrameworkIdentifier,
  spec::{AssociatedExternalType, CollectionDefault, CustomType, CustomValidator, ObjectAttributeType},
};

/// The nested object shared by list/map/set nested attributes. Renders the
/// `NestedObject: schema.NestedAttributeObject{ ... },` fragment with child
/// attributes in sorted order.
#[derive(Debug, Clone, Default, PartialEq, bon::Builder)]
pub struct GeneratorNestedAttributeObject {
  #[builder(default)]
  pub attributes: GeneratorAttributes,
  pub custom_type: Option<CustomType>,
  pub associated_external_type: Option<AssociatedExternalType>,
  #[builder(default)]
  pub validators: Vec<CustomValidator>,
}

impl GeneratorNestedAttributeObject {
  #[must_use]
  pub fn schema(&self, name: &FrameworkIdentifier, schema_name: &FrameworkIdentifier) -> String {
    let mut out = String::from("NestedObject: schema.NestedAttributeObject{\n");
    out.push_str(&self.attributes.attributes_map_fragment(schema_name));
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
    imports
  }
}

macro_rules! nested_collection_attribute {
  ($name:ident, $go_type:literal, $validator_kind:literal, $model_type:literal) => {
    #[derive(Debug, Clone, Default, PartialEq, bon::Builder)]
    pub struct $name {
      #[builder(default)]
      pub computed_optional_required: ComputedOptionalRequired,
      #[builder(default)]
      pub nested_object: GeneratorNestedAttributeObject,
      pub custom_type: Option<CustomType>,
      pub default: Option<CollectionDefault>,
      #[builder(default)]
      pub deprecation_message: DeprecationMessage,
      #[builder(default)]
      pub description: Description,
      #[builder(default)]
      pub sensitive: Sensitive,
      #[builder(default)]
      pub validators: Vec<CustomValidator>,
      #[builder(default)]
      pub plan_modifiers: Vec<CustomValidator>,
    }

    impl $name {
      #[must_use]
      pub fn schema(&self, name: &FrameworkIdentifier, schema_name: &FrameworkIdentifier) -> String {
        attribute_literal(
          name,
          $go_type,
          [
            self.custom_type.as_ref().map(|c| format!("CustomType: {},\n", c.type_name)),
            Some(self.computed_optional_required.schema()),
            Some(self.nested_object.schema(name, schema_name)),
            self.sensitive.schema(),
            self.description.schema(),
            self.deprecation_message.schema(),
            validators::validators_fragment($validator_kind, &self.validators),
            validators::plan_modifiers_fragment($validator_kind, &self.plan_modifiers),
            self.default.as_ref().and_then(defaults::collection_fragment),
          ],
        )
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
        if let Some(default) = &self.default {
          imports.extend(defaults::collection_imports(default));
        }
        imports
      }

      #[must_use]
      pub fn model_type(&self, _name: &FrameworkIdentifier, _schema_name: &FrameworkIdentifier) -> String {
        $model_type.to_string()
      }
    }
  };
}

nested_collection_attribute!(ListNestedAttribute, "ListNestedAttribute", "List", "types.List");
nested_collection_attribute!(MapNestedAttribute, "MapNestedAttribute", "Map", "types.Map");
nested_collection_attribute!(SetNestedAttribute, "SetNestedAttribute", "Set", "types.Set");

#[derive(Debug, Clone, Default, PartialEq, bon::Builder)]
pub struct SingleNestedAttribute {
  #[builder(default)]
  pub computed_optional_required: ComputedOptionalRequired,
  #[builder(default)]
  pub attributes: GeneratorAttributes,
  pub custom_type: Option<CustomType>,
  pub associated_external_type: Option<AssociatedExternalType>,
  pub default: Option<CollectionDefault>,
  #[builder(default)]
  pub deprecation_message: DeprecationMessage,
  #[builder(default)]
  pub description: Description,
  #[builder(default)]
  pub sensitive: Sensitive,
  #[builder(default)]
  pub validators: Vec<CustomValidator>,
  #[builder(default)]
  pub plan_modifiers: Vec<CustomValidator>,
}

impl SingleNestedAttribute {
  #[must_use]
  pub fn schema(&self, name: &FrameworkIdentifier, schema_name: &FrameworkIdentifier) -> String {
    attribute_literal(
      name,
      "SingleNestedAttribute",
      [
        Some(custom_type::nested_object_fragment(self.custom_type.as_ref(), name, schema_name)),
        Some(self.computed_optional_required.schema()),
        Some(self.attributes.attributes_map_fragment(schema_name)),
        self.sensitive.schema(),
        self.description.schema(),
        self.deprecation_message.schema(),
        validators::validators_fragment("Object", &self.validators),
        validators::plan_modifiers_fragment("Object", &self.plan_modifiers),
        self.default.as_ref().and_then(defaults::collection_fragment),
      ],
    )
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
    imports.extend(validators::validators_imports(&self.validators));
    imports.extend(validators::plan_modifiers_imports(&self.plan_modifiers));
    if let Some(default) = &self.default {
      imports.extend(defaults::collection_imports(default));
    }
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

#[derive(Debug, Clone, Default, PartialEq, bon::Builder)]
pub struct ObjectAttribute {
  #[builder(default)]
  pub computed_optional_required: ComputedOptionalRequired,
  #[builder(default)]
  pub attribute_types: Vec<ObjectAttributeType>,
  pub custom_type: Option<CustomType>,
  pub associated_external_type: Option<AssociatedExternalType>,
  pub default: Option<CollectionDefault>,
  #[builder(default)]
  pub deprecation_message: DeprecationMessage,
  #[builder(default)]
  pub description: Description,
  #[builder(default)]
  pub sensitive: Sensitive,
  #[builder(default)]
  pub validators: Vec<CustomValidator>,
  #[builder(default)]
  pub plan_modifiers: Vec<CustomValidator>,
}

impl ObjectAttribute {
  #[must_use]
  pub fn schema(&self, name: &FrameworkIdentifier, schema_name: &FrameworkIdentifier) -> String {
    attribute_literal(
      name,
      "ObjectAttribute",
      [
        custom_type::object_fragment(
          self.custom_type.as_ref(),
          self.associated_external_type.as_ref(),
          &self.attribute_types,
          name,
          schema_name,
        ),
        Some(self.computed_optional_required.schema()),
        Some(element_type::attribute_types_fragment(&self.attribute_types)),
        self.sensitive.schema(),
        self.description.schema(),
        self.deprecation_message.schema(),
        validators::validators_fragment("Object", &self.validators),
        validators::plan_modifiers_fragment("Object", &self.plan_modifiers),
        self.default.as_ref().and_then(defaults::collection_fragment),
      ],
    )
  }

  #[must_use]
  pub fn imports(&self) -> Imports {
    let mut imports = custom_type::imports(self.custom_type.as_ref(), self.associated_external_type.as_ref());
    imports.extend(element_type::attr_types_imports(&self.attribute_types));
    imports.extend(validators::validators_imports(&self.validators));
    imports.extend(validators::plan_modifiers_imports(&self.plan_modifiers));
    if let Some(default) = &self.default {
      imports.extend(defaults::collection_imports(default));
    }
    imports
  }

  #[must_use]
  pub fn model_type(&self, name: &FrameworkIdentifier, schema_name: &FrameworkIdentifier) -> String {
    generated_or_builtin(
      self.custom_type.as_ref(),
      self.associated_external_type.is_some(),
      name,
      schema_name,
      "types.Object",
    )
  }
}
