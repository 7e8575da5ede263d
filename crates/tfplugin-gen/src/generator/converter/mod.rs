//! Conversion from the parsed specification tree to generator-model nodes.
//!
//! Conversion is where target-dependent behavior is resolved: defaults and
//! plan modifiers only exist on resource schemas, so the converter drops them
//! for provider and data source targets and the generator nodes never have to
//! know which surface they render for. Names are validated and deduplicated
//! here as well; the first violation aborts the schema.

use crate::{
  generator::{
    SchemaError, SchemaTarget,
    schema::{
      GeneratorAttribute, GeneratorAttributes, GeneratorBlock, GeneratorBlocks, GeneratorNestedAttributeObject,
      GeneratorNestedBlockObject, GeneratorSchema, blocks, collections, nested, primitives,
    },
  },
  spec,
};

/// Converts one provider spec into a generator schema. A provider without a
/// schema gets an empty one, so downstream always has a schema function to
/// emit.
pub fn provider_schema(provider: &spec::Provider) -> Result<GeneratorSchema, SchemaError> {
  validate_name(&provider.name)?;
  let schema = provider.schema.clone().unwrap_or_default();
  SchemaConverter::new(SchemaTarget::Provider).convert(&schema)
}

pub fn resource_schema(resource: &spec::Resource) -> Result<GeneratorSchema, SchemaError> {
  validate_name(&resource.name)?;
  SchemaConverter::new(SchemaTarget::Resource).convert(&resource.schema)
}

pub fn datasource_schema(datasource: &spec::DataSource) -> Result<GeneratorSchema, SchemaError> {
  validate_name(&datasource.name)?;
  SchemaConverter::new(SchemaTarget::DataSource).convert(&datasource.schema)
}

fn validate_name(name: &crate::naming::FrameworkIdentifier) -> Result<(), SchemaError> {
  if name.valid() {
    Ok(())
  } else {
    Err(SchemaError::InvalidIdentifier {
      name: name.as_str().to_string(),
    })
  }
}

pub struct SchemaConverter {
  target: SchemaTarget,
}

impl SchemaConverter {
  #[must_use]
  pub fn new(target: SchemaTarget) -> Self {
    Self { target }
  }

  pub fn convert(&self, schema: &spec::Schema) -> Result<GeneratorSchema, SchemaError> {
    Ok(
      GeneratorSchema::builder()
        .target(self.target)
        .attributes(self.convert_attributes(&schema.attributes)?)
        .blocks(self.convert_blocks(&schema.blocks)?)
        .maybe_description(schema.description.clone())
        .maybe_markdown_description(schema.markdown_description.clone())
        .maybe_deprecation_message(schema.deprecation_message.clone())
        .build(),
    )
  }

  fn convert_attributes(&self, attributes: &[spec::Attribute]) -> Result<GeneratorAttributes, SchemaError> {
    let mut out = GeneratorAttributes::new();
    for attribute in attributes {
      validate_name(&attribute.name)?;
      out.insert(attribute.name.clone(), self.convert_attribute(&attribute.kind)?)?;
    }
    Ok(out)
  }

  fn convert_blocks(&self, blocks: &[spec::Block]) -> Result<GeneratorBlocks, SchemaError> {
    let mut out = GeneratorBlocks::new();
    for block in blocks {
      validate_name(&block.name)?;
      out.insert(block.name.clone(), self.convert_block(&block.kind)?)?;
    }
    Ok(out)
  }

  fn convert_attribute(&self, kind: &spec::AttributeType) -> Result<GeneratorAttribute, SchemaError> {
    match kind {
      spec::AttributeType::Bool(a) => Ok(GeneratorAttribute::Bool(
        primitives::BoolAttribute::builder()
          .computed_optional_required(a.computed_optional_required.into())
          .maybe_custom_type(a.custom_type.clone())
          .maybe_associated_external_type(a.associated_external_type.clone())
          .maybe_default(self.gated_default(&a.default))
          .deprecation_message(a.deprecation_message.clone().into())
          .description(a.description.clone().into())
          .sensitive(a.sensitive.into())
          .validators(custom_validators(&a.validators))
          .plan_modifiers(self.custom_plan_modifiers(&a.plan_modifiers))
          .build(),
      )),
      spec::AttributeType::Float64(a) => Ok(GeneratorAttribute::Float64(
        primitives::Float64Attribute::builder()
          .computed_optional_required(a.computed_optional_required.into())
          .maybe_custom_type(a.custom_type.clone())
          .maybe_associated_external_type(a.associated_external_type.clone())
          .maybe_default(self.gated_default(&a.default))
          .deprecation_message(a.deprecation_message.clone().into())
          .description(a.description.clone().into())
          .sensitive(a.sensitive.into())
          .validators(custom_validators(&a.validators))
          .plan_modifiers(self.custom_plan_modifiers(&a.plan_modifiers))
          .build(),
      )),
      spec::AttributeType::Int64(a) => Ok(GeneratorAttribute::Int64(
        primitives::Int64Attribute::builder()
          .computed_optional_required(a.computed_optional_required.into())
          .maybe_custom_type(a.custom_type.clone())
          .maybe_associated_external_type(a.associated_external_type.clone())
          .maybe_default(self.gated_default(&a.default))
          .deprecation_message(a.deprecation_message.clone().into())
          .description(a.description.clone().into())
          .sensitive(a.sensitive.into())
          .validators(custom_validators(&a.validators))
          .plan_modifiers(self.custom_plan_modifiers(&a.plan_modifiers))
          .build(),
      )),
      spec::AttributeType::Number(a) => Ok(GeneratorAttribute::Number(
        primitives::NumberAttribute::builder()
          .computed_optional_required(a.computed_optional_required.into())
          .maybe_custom_type(a.custom_type.clone())
          .maybe_associated_external_type(a.associated_external_type.clone())
          .maybe_default(self.gated_default(&a.default))
          .deprecation_message(a.deprecation_message.clone().into())
          .description(a.description.clone().into())
          .sensitive(a.sensitive.into())
          .validators(custom_validators(&a.validators))
          .plan_modifiers(self.custom_plan_modifiers(&a.plan_modifiers))
          .build(),
      )),
      spec::AttributeType::String(a) => Ok(GeneratorAttribute::String(
        primitives::StringAttribute::builder()
          .computed_optional_required(a.computed_optional_required.into())
          .maybe_custom_type(a.custom_type.clone())
          .maybe_associated_external_type(a.associated_external_type.clone())
          .maybe_default(self.gated_default(&a.default))
          .deprecation_message(a.deprecation_message.clone().into())
          .description(a.description.clone().into())
          .sensitive(a.sensitive.into())
          .validators(custom_validators(&a.validators))
          .plan_modifiers(self.custom_plan_modifiers(&a.plan_modifiers))
          .build(),
      )),
      spec::AttributeType::List(a) => Ok(GeneratorAttribute::List(
        collections::ListAttribute::builder()
          .computed_optional_required(a.computed_optional_required.into())
          .element_type(a.element_type.clone())
          .maybe_custom_type(a.custom_type.clone())
          .maybe_associated_external_type(a.associated_external_type.clone())
          .maybe_default(self.gated_default(&a.default))
          .deprecation_message(a.deprecation_message.clone().into())
          .description(a.description.clone().into())
          .sensitive(a.sensitive.into())
          .validators(custom_validators(&a.validators))
          .plan_modifiers(self.custom_plan_modifiers(&a.plan_modifiers))
          .build(),
      )),
      spec::AttributeType::Map(a) => Ok(GeneratorAttribute::Map(
        collections::MapAttribute::builder()
          .computed_optional_required(a.computed_optional_required.into())
          .element_type(a.element_type.clone())
          .maybe_custom_type(a.custom_type.clone())
          .maybe_associated_external_type(a.associated_external_type.clone())
          .maybe_default(self.gated_default(&a.default))
          .deprecation_message(a.deprecation_message.clone().into())
          .description(a.description.clone().into())
          .sensitive(a.sensitive.into())
          .validators(custom_validators(&a.validators))
          .plan_modifiers(self.custom_plan_modifiers(&a.plan_modifiers))
          .build(),
      )),
      spec::AttributeType::Set(a) => Ok(GeneratorAttribute::Set(
        collections::SetAttribute::builder()
          .computed_optional_required(a.computed_optional_required.into())
          .element_type(a.element_type.clone())
          .maybe_custom_type(a.custom_type.clone())
          .maybe_associated_external_type(a.associated_external_type.clone())
          .maybe_default(self.gated_default(&a.default))
          .deprecation_message(a.deprecation_message.clone().into())
          .description(a.description.clone().into())
          .sensitive(a.sensitive.into())
          .validators(custom_validators(&a.validators))
          .plan_modifiers(self.custom_plan_modifiers(&a.plan_modifiers))
          .build(),
      )),
      spec::AttributeType::ListNested(a) => Ok(GeneratorAttribute::ListNested(
        nested::ListNestedAttribute::builder()
          .computed_optional_required(a.computed_optional_required.into())
          .nested_object(self.convert_nested_attribute_object(&a.nested_object)?)
          .maybe_custom_type(a.custom_type.clone())
          .maybe_default(self.gated_default(&a.default))
          .deprecation_message(a.deprecation_message.clone().into())
          .description(a.description.clone().into())
          .sensitive(a.sensitive.into())
          .validators(custom_validators(&a.validators))
          .plan_modifiers(self.custom_plan_modifiers(&a.plan_modifiers))
          .build(),
      )),
      spec::AttributeType::MapNested(a) => Ok(GeneratorAttribute::MapNested(
        nested::MapNestedAttribute::builder()
          .computed_optional_required(a.computed_optional_required.into())
          .nested_object(self.convert_nested_attribute_object(&a.nested_object)?)
          .maybe_custom_type(a.custom_type.clone())
          .maybe_default(self.gated_default(&a.default))
          .deprecation_message(a.deprecation_message.clone().into())
          .description(a.description.clone().into())
          .sensitive(a.sensitive.into())
          .validators(custom_validators(&a.validators))
          .plan_modifiers(self.custom_plan_modifiers(&a.plan_modifiers))
          .build(),
      )),
      spec::AttributeType::SetNested(a) => Ok(GeneratorAttribute::SetNested(
        nested::SetNestedAttribute::builder()
          .computed_optional_required(a.computed_optional_required.into())
          .nested_object(self.convert_nested_attribute_object(&a.nested_object)?)
          .maybe_custom_type(a.custom_type.clone())
          .maybe_default(self.gated_default(&a.default))
          .deprecation_message(a.deprecation_message.clone().into())
          .description(a.description.clone().into())
          .sensitive(a.sensitive.into())
          .validators(custom_validators(&a.validators))
          .plan_modifiers(self.custom_plan_modifiers(&a.plan_modifiers))
          .build(),
      )),
      spec::AttributeType::SingleNested(a) => Ok(GeneratorAttribute::SingleNested(
        nested::SingleNestedAttribute::builder()
          .computed_optional_required(a.computed_optional_required.into())
          .attributes(self.convert_attributes(&a.attributes)?)
          .maybe_custom_type(a.custom_type.clone())
          .maybe_associated_external_type(a.associated_external_type.clone())
          .maybe_default(self.gated_default(&a.default))
          .deprecation_message(a.deprecation_message.clone().into())
          .description(a.description.clone().into())
          .sensitive(a.sensitive.into())
          .validators(custom_validators(&a.validators))
          .plan_modifiers(self.custom_plan_modifiers(&a.plan_modifiers))
          .build(),
      )),
      spec::AttributeType::Object(a) => Ok(GeneratorAttribute::Object(
        nested::ObjectAttribute::builder()
          .computed_optional_required(a.computed_optional_required.into())
          .attribute_types(a.attribute_types.clone())
          .maybe_custom_type(a.custom_type.clone())
          .maybe_associated_external_type(a.associated_external_type.clone())
          .maybe_default(self.gated_default(&a.default))
          .deprecation_message(a.deprecation_message.clone().into())
          .description(a.description.clone().into())
          .sensitive(a.sensitive.into())
          .validators(custom_validators(&a.validators))
          .plan_modifiers(self.custom_plan_modifiers(&a.plan_modifiers))
          .build(),
      )),
    }
  }

  fn convert_block(&self, kind: &spec::BlockType) -> Result<GeneratorBlock, SchemaError> {
    match kind {
      spec::BlockType::ListNested(b) => Ok(GeneratorBlock::ListNested(
        blocks::ListNestedBlock::builder()
          .nested_object(self.convert_nested_block_object(&b.nested_object)?)
          .maybe_custom_type(b.custom_type.clone())
          .deprecation_message(b.deprecation_message.clone().into())
          .description(b.description.clone().into())
          .validators(custom_validators(&b.validators))
          .plan_modifiers(self.custom_plan_modifiers(&b.plan_modifiers))
          .build(),
      )),
      spec::BlockType::SetNested(b) => Ok(GeneratorBlock::SetNested(
        blocks::SetNestedBlock::builder()
          .nested_object(self.convert_nested_block_object(&b.nested_object)?)
          .maybe_custom_type(b.custom_type.clone())
          .deprecation_message(b.deprecation_message.clone().into())
          .description(b.description.clone().into())
          .validators(custom_validators(&b.validators))
          .plan_modifiers(self.custom_plan_modifiers(&b.plan_modifiers))
          .build(),
      )),
      spec::BlockType::SingleNested(b) => Ok(GeneratorBlock::SingleNested(
        blocks::SingleNestedBlock::builder()
          .attributes(self.convert_attributes(&b.attributes)?)
          .blocks(self.convert_blocks(&b.blocks)?)
          .maybe_custom_type(b.custom_type.clone())
          .maybe_associated_external_type(b.associated_external_type.clone())
          .deprecation_message(b.deprecation_message.clone().into())
          .description(b.description.clone().into())
          .validators(custom_validators(&b.validators))
          .plan_modifiers(self.custom_plan_modifiers(&b.plan_modifiers))
          .build(),
      )),
    }
  }

  fn convert_nested_attribute_object(
    &self,
    object: &spec::NestedAttributeObject,
  ) -> Result<GeneratorNestedAttributeObject, SchemaError> {
    Ok(
      GeneratorNestedAttributeObject::builder()
        .attributes(self.convert_attributes(&object.attributes)?)
        .maybe_custom_type(object.custom_type.clone())
        .maybe_associated_external_type(object.associated_external_type.clone())
        .validators(custom_validators(&object.validators))
        .build(),
    )
  }

  fn convert_nested_block_object(
    &self,
    object: &spec::NestedBlockObject,
  ) -> Result<GeneratorNestedBlockObject, SchemaError> {
    Ok(
      GeneratorNestedBlockObject::builder()
        .attributes(self.convert_attributes(&object.attributes)?)
        .blocks(self.convert_blocks(&object.blocks)?)
        .maybe_custom_type(object.custom_type.clone())
        .maybe_associated_external_type(object.associated_external_type.clone())
        .validators(custom_validators(&object.validators))
        .build(),
    )
  }

  /// Defaults only apply to resource schemas.
  fn gated_default<T: Clone>(&self, default: &Option<T>) -> Option<T> {
    if self.target.supports_defaults() {
      default.clone()
    } else {
      None
    }
  }

  /// Plan modifiers only apply to resource schemas.
  fn custom_plan_modifiers(&self, modifiers: &[spec::PlanModifier]) -> Vec<spec::CustomValidator> {
    if !self.target.supports_plan_modifiers() {
      return Vec::new();
    }
    modifiers.iter().filter_map(|m| m.custom.clone()).collect()
  }
}

fn custom_validators(validators: &[spec::Validator]) -> Vec<spec::CustomValidator> {
  validators.iter().filter_map(|v| v.custom.clone()).collect()
}

#[cfg(test)]
mod tests;
