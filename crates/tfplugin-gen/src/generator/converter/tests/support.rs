use crate::{generator::SchemaTarget, generator::converter::SchemaConverter, generator::schema::GeneratorSchema, spec};

pub(super) fn parse_schema(json: &str) -> spec::Schema {
  serde_json::from_str(json).expect("schema json should parse")
}

pub(super) fn convert(target: SchemaTarget, json: &str) -> GeneratorSchema {
  SchemaConverter::new(target)
    .convert(&parse_schema(json))
    .expect("conversion should succeed")
}

pub(super) fn convert_err(target: SchemaTarget, json: &str) -> crate::generator::SchemaError {
  SchemaConverter::new(target)
    .convert(&parse_schema(json))
    .expect_err("conversion should fail")
}
