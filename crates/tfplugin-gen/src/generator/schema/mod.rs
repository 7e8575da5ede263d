//! Generator-model nodes and their Go source rendering.
//!
//! Every node renders an unformatted fragment; indentation is left to
//! `gofmt`, which keeps the emitters free of layout bookkeeping. Rendering is
//! deterministic: attributes and blocks are keyed by name in `BTreeMap`s and
//! emitted in sorted order, and imports dedupe in insertion order.

pub mod attributes;
pub mod blocks;
pub mod collections;
pub mod custom_type;
pub mod defaults;
pub mod descriptors;
pub mod element_type;
pub mod imports;
pub mod nested;
pub mod primitives;
pub mod validators;

pub use attributes::{GeneratorAttribute, GeneratorAttributes};
pub use blocks::{GeneratorBlock, GeneratorBlocks, GeneratorNestedBlockObject};
pub use imports::Imports;
pub use nested::GeneratorNestedAttributeObject;

use crate::{generator::SchemaTarget, naming::FrameworkIdentifier};

use self::imports::CONTEXT_IMPORT;

/// Every schema node kind the generator can emit, named after the framework
/// type it renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum GeneratorSchemaType {
  BoolAttribute,
  Float64Attribute,
  Int64Attribute,
  ListAttribute,
  ListNestedAttribute,
  MapAttribute,
  MapNestedAttribute,
  NumberAttribute,
  ObjectAttribute,
  SetAttribute,
  SetNestedAttribute,
  SingleNestedAttribute,
  StringAttribute,
  ListNestedBlock,
  SetNestedBlock,
  SingleNestedBlock,
}

/// Quotes `text` as a Go interpreted string literal.
#[must_use]
pub(crate) fn go_string(text: &str) -> String {
  let mut out = String::with_capacity(text.len() + 2);
  out.push('"');
  for ch in text.chars() {
    match ch {
      '\\' => out.push_str("\\\\"),
      '"' => out.push_str("\\\""),
      '\n' => out.push_str("\\n"),
      '\r' => out.push_str("\\r"),
      '\t' => out.push_str("\\t"),
      c if c.is_control() => out.push_str(&format!("\\u{:04x}", c as u32)),
      c => out.push(c),
    }
  }
  out.push('"');
  out
}

/// `"<name>": schema.<GoType>{ ...fragments... },` with absent fragments
/// skipped. The fragment order is fixed by each caller.
#[must_use]
pub(crate) fn attribute_literal(
  name: &FrameworkIdentifier,
  go_type: &str,
  fragments: impl IntoIterator<Item = Option<String>>,
) -> String {
  let mut out = format!("\"{name}\": schema.{go_type}{{\n");
  for fragment in fragments.into_iter().flatten() {
    out.push_str(&fragment);
  }
  out.push_str("},\n");
  out
}

/// One converted schema, ready to render its `...Schema` function.
#[derive(Debug, Clone, PartialEq, bon::Builder)]
pub struct GeneratorSchema {
  pub target: SchemaTarget,
  #[builder(default)]
  pub attributes: GeneratorAttributes,
  #[builder(default)]
  pub blocks: GeneratorBlocks,
  pub description: Option<String>,
  pub markdown_description: Option<String>,
  pub deprecation_message: Option<String>,
}

impl GeneratorSchema {
  /// Imports of the schema function: `context`, the target's schema package,
  /// and everything the nodes pulled in.
  #[must_use]
  pub fn imports(&self) -> Imports {
    let mut imports = Imports::new();
    imports.add_path(CONTEXT_IMPORT);
    imports.add_path(self.target.schema_import());
    imports.extend(self.attributes.imports());
    imports.extend(self.blocks.imports());
    imports
  }

  /// `func <Pascal><Target>Schema(ctx context.Context) schema.Schema { ... }`
  #[must_use]
  pub fn schema_function(&self, name: &FrameworkIdentifier) -> String {
    let mut out = format!(
      "func {}{}Schema(ctx context.Context) schema.Schema {{\nreturn schema.Schema{{\n",
      name.to_pascal_case(),
      self.target.function_suffix(),
    );
    if !self.attributes.is_empty() {
      out.push_str(&self.attributes.attributes_map_fragment(name));
    }
    if !self.blocks.is_empty() {
      out.push_str(&self.blocks.blocks_map_fragment(name));
    }
    if let Some(description) = &self.description {
      out.push_str(&format!("Description: {},\n", go_string(description)));
    }
    if let Some(markdown) = &self.markdown_description {
      out.push_str(&format!("MarkdownDescription: {},\n", go_string(markdown)));
    }
    if let Some(deprecation) = &self.deprecation_message {
      out.push_str(&format!("DeprecationMessage: {},\n", go_string(deprecation)));
    }
    out.push_str("}\n}\n");
    out
  }
}
