//! Generator nodes for list, map and set attributes with element types.

use super::{
  attribute_literal, custom_type, defaults,
  descriptors::{ComputedOptionalRequired, DeprecationMessage, Description, Sensitive},
  element_type,
  imports::Imports,
  primitives::generated_or_builtin,
  validators,
};
use crate::{
  naming::FrameworkIdentifier,
  spec::{AssociatedExternalType, CollectionDefault, CustomType, CustomValidator, ElementType},
};

macro_rules! collection_attribute {
  ($name:ident, $go_type:literal, $validator_kind:literal, $collection_kind:literal, $model_type:literal) => {
    #[derive(Debug, Clone, PartialEq, bon::Builder)]
    pub struct $name {
      #[builder(default)]
      pub computed_optional_required: ComputedOptionalRequired,
      pub element_type: ElementType,
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

    impl $name {
      #[must_use]
      pub fn schema(&self, name: &FrameworkIdentifier, schema_name: &FrameworkIdentifier) -> String {
        attribute_literal(
          name,
          $go_type,
          [
            custom_type::collection_fragment(
              self.custom_type.as_ref(),
              self.associated_external_type.as_ref(),
              name,
              schema_name,
              $collection_kind,
              &element_type::type_literal(&self.element_type),
            ),
            Some(self.computed_optional_required.schema()),
            Some(element_type::element_type_fragment(&self.element_type)),
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
        let mut imports = custom_type::imports(self.custom_type.as_ref(), self.associated_external_type.as_ref());
        imports.extend(element_type::element_imports(&self.element_type));
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
          $model_type,
        )
      }
    }
  };
}

collection_attribute!(ListAttribute, "ListAttribute", "List", "List", "types.List");
collection_attribute!(MapAttribute, "MapAttribute", "Map", "Map", "types.Map");
collection_attribute!(SetAttribute, "SetAttribute", "Set", "Set", "types.Set");
