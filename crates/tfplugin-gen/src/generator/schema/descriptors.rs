//! Value objects wrapping one schema concern each. Every descriptor renders
//! its own fragment and compares structurally; absent values render nothing.

use super::go_string;
use crate::spec;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ComputedOptionalRequired(spec::ComputedOptionalRequired);

impl ComputedOptionalRequired {
  #[must_use]
  pub fn is_required(self) -> bool {
    matches!(self.0, spec::ComputedOptionalRequired::Required)
  }

  #[must_use]
  pub fn is_optional(self) -> bool {
    matches!(
      self.0,
      spec::ComputedOptionalRequired::Optional | spec::ComputedOptionalRequired::ComputedOptional
    )
  }

  #[must_use]
  pub fn is_computed(self) -> bool {
    matches!(
      self.0,
      spec::ComputedOptionalRequired::Computed | spec::ComputedOptionalRequired::ComputedOptional
    )
  }

  #[must_use]
  pub fn schema(self) -> String {
    match self.0 {
      spec::ComputedOptionalRequired::Required => "Required: true,\n".to_string(),
      spec::ComputedOptionalRequired::Optional => "Optional: true,\n".to_string(),
      spec::ComputedOptionalRequired::Computed => "Computed: true,\n".to_string(),
      spec::ComputedOptionalRequired::ComputedOptional => "Computed: true,\nOptional: true,\n".to_string(),
    }
  }
}

impl From<spec::ComputedOptionalRequired> for ComputedOptionalRequired {
  fn from(value: spec::ComputedOptionalRequired) -> Self {
    Self(value)
  }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sensitive(Option<bool>);

impl Sensitive {
  #[must_use]
  pub fn is_sensitive(self) -> bool {
    self.0 == Some(true)
  }

  #[must_use]
  pub fn schema(self) -> Option<String> {
    self.is_sensitive().then(|| "Sensitive: true,\n".to_string())
  }
}

impl From<Option<bool>> for Sensitive {
  fn from(value: Option<bool>) -> Self {
    Self(value)
  }
}

/// A single description feeds both `Description` and `MarkdownDescription`;
/// the format has no separate markdown source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Description(Option<String>);

impl Description {
  #[must_use]
  pub fn description(&self) -> Option<&str> {
    self.0.as_deref()
  }

  #[must_use]
  pub fn schema(&self) -> Option<String> {
    self.0.as_ref().map(|text| {
      let quoted = go_string(text);
      format!("Description: {quoted},\nMarkdownDescription: {quoted},\n")
    })
  }
}

impl From<Option<String>> for Description {
  fn from(value: Option<String>) -> Self {
    Self(value)
  }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeprecationMessage(Option<String>);

impl DeprecationMessage {
  #[must_use]
  pub fn deprecation_message(&self) -> Option<&str> {
    self.0.as_deref()
  }

  #[must_use]
  pub fn schema(&self) -> Option<String> {
    self
      .0
      .as_ref()
      .map(|text| format!("DeprecationMessage: {},\n", go_string(text)))
  }
}

impl From<Option<String>> for DeprecationMessage {
  fn from(value: Option<String>) -> Self {
    Self(value)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn computed_optional_emits_both_flags() {
    let descriptor = ComputedOptionalRequired::from(spec::ComputedOptionalRequired::ComputedOptional);
    assert!(descriptor.is_computed());
    assert!(descriptor.is_optional());
    assert!(!descriptor.is_required());
    assert_eq!(descriptor.schema(), "Computed: true,\nOptional: true,\n");
  }

  #[test]
  fn required_emits_single_flag() {
    let descriptor = ComputedOptionalRequired::from(spec::ComputedOptionalRequired::Required);
    assert_eq!(descriptor.schema(), "Required: true,\n");
  }

  #[test]
  fn sensitive_false_renders_nothing() {
    assert_eq!(Sensitive::from(Some(false)).schema(), None);
    assert_eq!(Sensitive::from(None).schema(), None);
    assert_eq!(Sensitive::from(Some(true)).schema(), Some("Sensitive: true,\n".to_string()));
  }

  #[test]
  fn description_feeds_both_fields() {
    let descriptor = Description::from(Some("hello \"world\"".to_string()));
    assert_eq!(
      descriptor.schema().unwrap(),
      "Description: \"hello \\\"world\\\"\",\nMarkdownDescription: \"hello \\\"world\\\"\",\n"
    );
  }

  #[test]
  fn absent_descriptors_compare_equal() {
    assert_eq!(Description::from(None), Description::from(None));
    assert_ne!(Description::from(None), Description::from(Some(String::new())));
    assert_eq!(DeprecationMessage::from(None).schema(), None);
  }
}
