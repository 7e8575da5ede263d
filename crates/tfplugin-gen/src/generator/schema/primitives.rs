//! Generator nodes for the five primitive attribute kinds. Each node owns the
//! descriptor values computed by the converter and renders its own schema
//! fragment, imports and model field type.

use super::{
  attribute_literal, custom_type, defaults,
  descriptors::{ComputedOptionalRequired, DeprecationMessage, Description, Sensitive},
  imports::Imports,
  validators,
};
use crate::{
  naming::FrameworkIdentifier,
  spec::{AssociatedExternalType, BoolDefault, CollectionDefault, CustomType, CustomValidator, Float64Default,
    Int64Default, StringDefault},
};

#[derive(Debug, Clone, Default, PartialEq, bon::Builder)]
pub struct BoolAttribute {
  #[builder(default)]
  pub computed_optional_required: ComputedOptionalRequired,
  pub custom_type: Option<CustomType>,
  pub associated_external_type: Option<AssociatedExternalType>,
  pub default: Option<BoolDefault>,
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

impl BoolAttribute {
  #[must_use]
  pub fn schema(&self, name: &FrameworkIdentifier, schema_name: &FrameworkIdentifier) -> String {
    attribute_literal(
      name,
      "BoolAttribute",
      [
        custom_type::primitive_fragment(
          self.custom_type.as_ref(),
          self.associated_external_type.as_ref(),
          name,
          schema_name,
        ),
        Some(self.computed_optional_required.schema()),
        self.sensitive.schema(),
        self.description.schema(),
        self.deprecation_message.schema(),
        validators::validators_fragment("Bool", &self.validators),
        validators::plan_modifiers_fragment("Bool", &self.plan_modifiers),
        self.default.as_ref().and_then(defaults::bool_fragment),
      ],
    )
  }

  #[must_use]
  pub fn imports(&self) -> Imports {
    let mut imports = custom_type::imports(self.custom_type.as_ref(), self.associated_external_type.as_ref());
    imports.extend(validators::validators_imports(&self.validators));
    imports.extend(validators::plan_modifiers_imports(&self.plan_modifiers));
    if let Some(default) = &self.default {
      imports.extend(defaults::bool_imports(default));
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
      "types.Bool",
    )
  }
}

#[derive(Debug, Clone, Default, PartialEq, bon::Builder)]
pub struct Float64Attribute {
  #[builder(default)]
  pub computed_optional_required: ComputedOptionalRequired,
  pub custom_type: Option<CustomType>,
  pub associated_external_type: Option<AssociatedExternalType>,
  pub default: Option<Float64Default>,
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

impl Float64Attribute {
  #[must_use]
  pub fn schema(&self, name: &FrameworkIdentifier, schema_name: &FrameworkIdentifier) -> String {
    attribute_literal(
      name,
      "Float64Attribute",
      [
        custom_type::primitive_fragment(
          self.custom_type.as_ref(),
          self.associated_external_type.as_ref(),
          name,
          schema_name,
        ),
        Some(self.computed_optional_required.schema()),
        self.sensitive.schema(),
        self.description.schema(),
        self.deprecation_message.schema(),
        validators::validators_fragment("Float64", &self.validators),
        validators::plan_modifiers_fragment("Float64", &self.plan_modifiers),
        self.default.as_ref().and_then(defaults::float64_fragment),
      ],
    )
  }

  #[must_use]
  pub fn imports(&self) -> Imports {
    let mut imports = custom_type::imports(self.custom_type.as_ref(), self.associated_external_type.as_ref());
    imports.extend(validators::validators_imports(&self.validators));
    imports.extend(validators::plan_modifiers_imports(&self.plan_modifiers));
    if let Some(default) = &self.default {
      imports.extend(defaults::float64_imports(default));
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
      "types.Float64",
    )
  }
}

#[derive(Debug, Clone, Default, PartialEq, bon::Builder)]
pub struct Int64Attribute {
  #[builder(default)]
  pub computed_optional_required: ComputedOptionalRequired,
  pub custom_type: Option<CustomType>,
  pub associated_external_type: Option<AssociatedExternalType>,
  pub default: Option<Int64Default>,
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

impl Int64Attribute {
  #[must_use]
  pub fn schema(&self, name: &FrameworkIdentifier, schema_name: &FrameworkIdentifier) -> String {
    attribute_literal(
      name,
      "Int64Attribute",
      [
        custom_type::primitive_fragment(
          self.custom_type.as_ref(),
          self.associated_external_type.as_ref(),
          name,
          schema_name,
        ),
        Some(self.computed_optional_required.schema()),
        self.sensitive.schema(),
        self.description.schema(),
        self.deprecation_message.schema(),
        validators::validators_fragment("Int64", &self.validators),
        validators::plan_modifiers_fragment("Int64", &self.plan_modifiers),
        self.default.as_ref().and_then(defaults::int64_fragment),
      ],
    )
  }

  #[must_use]
  pub fn imports(&self) -> Imports {
    let mut imports = custom_type::imports(self.custom_type.as_ref(), self.associated_external_type.as_ref());
    imports.extend(validators::validators_imports(&self.validators));
    imports.extend(validators::plan_modifiers_imports(&self.plan_modifiers));
    if let Some(default) = &self.default {
      imports.extend(defaults::int64_imports(default));
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
      "types.Int64",
    )
  }
}

#[derive(Debug, Clone, Default, PartialEq, bon::Builder)]
pub struct NumberAttribute {
  #[builder(default)]
  pub computed_optional_required: ComputedOptionalRequired,
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

impl NumberAttribute {
  #[must_use]
  pub fn schema(&self, name: &FrameworkIdentifier, schema_name: &FrameworkIdentifier) -> String {
    attribute_literal(
      name,
      "NumberAttribute",
      [
        custom_type::primitive_fragment(
          self.custom_type.as_ref(),
          self.associated_external_type.as_ref(),
          name,
          schema_name,
        ),
        Some(self.computed_optional_required.schema()),
        self.sensitive.schema(),
        self.description.schema(),
        self.deprecation_message.schema(),
        validators::validators_fragment("Number", &self.validators),
        validators::plan_modifiers_fragment("Number", &self.plan_modifiers),
        self.default.as_ref().and_then(defaults::collection_fragment),
      ],
    )
  }

  #[must_use]
  pub fn imports(&self) -> Imports {
    let mut imports = custom_type::imports(self.custom_type.as_ref(), self.associated_external_type.as_ref());
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
      "types.Number",
    )
  }
}

#[derive(Debug, Clone, Default, PartialEq, bon::Builder)]
pub struct StringAttribute {
  #[builder(default)]
  pub computed_optional_required: ComputedOptionalRequired,
  pub custom_type: Option<CustomType>,
  pub associated_external_type: Option<AssociatedExternalType>,
  pub default: Option<StringDefault>,
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

impl StringAttribute {
  #[must_use]
  pub fn schema(&self, name: &FrameworkIdentifier, schema_name: &FrameworkIdentifier) -> String {
    attribute_literal(
      name,
      "StringAttribute",
      [
        custom_type::primitive_fragment(
          self.custom_type.as_ref(),
          self.associated_external_type.as_ref(),
          name,
          schema_name,
        ),
        Some(self.computed_optional_required.schema()),
        self.sensitive.schema(),
        self.description.schema(),
        self.deprecation_message.schema(),
        validators::validators_fragment("String", &self.validators),
        validators::plan_modifiers_fragment("String", &self.plan_modifiers),
        self.default.as_ref().and_then(defaults::string_fragment),
      ],
    )
  }

  #[must_use]
  pub fn imports(&self) -> Imports {
    let mut imports = custom_type::imports(self.custom_type.as_ref(), self.associated_external_type.as_ref());
    imports.extend(validators::validators_imports(&self.validators));
    imports.extend(validators::plan_modifiers_imports(&self.plan_modifiers));
    if let Some(default) = &self.default {
      imports.extend(defaults::string_imports(default));
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
      "types.String",
    )
  }
}

/// Model field type resolution shared by every kind: explicit custom value
/// type, then generated value type, then the framework built-in.
pub(super) fn generated_or_builtin(
  custom: Option<&CustomType>,
  has_associated: bool,
  name: &FrameworkIdentifier,
  schema_name: &FrameworkIdentifier,
  builtin: &str,
) -> String {
  if let Some(custom) = custom
    && let Some(value_type) = &custom.value_type
  {
    return value_type.clone();
  }
  if has_associated {
    return format!("{}Value", name.to_prefix_pascal_case(schema_name.as_str()));
  }
  builtin.to_string()
}
