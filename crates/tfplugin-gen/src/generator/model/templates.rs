//! Fixed Go source templates for generated type/value pairs. Templates are
//! plain text with `{{name}}` placeholders; selection is purely a function of
//! the node kind, and the renderer only ever substitutes precomputed strings.

/// Replaces every `{{key}}` occurrence. Unknown placeholders are left in
/// place, which makes a missed substitution visible in the output instead of
/// silently vanishing.
#[must_use]
pub(crate) fn substitute(template: &str, substitutions: &[(&str, &str)]) -> String {
  let mut out = template.to_string();
  for (key, value) in substitutions {
    out = out.replace(&format!("{{{{{key}}}}}"), value);
  }
  out
}

/// Type/value wrapper pair for primitive, collection and object attributes
/// that declare an associated external type. The wrapper embeds the framework
/// base type/value; `{{type_literal}}` is the kind-specific `Type()` return.
pub(crate) const WRAPPER_PAIR: &str = r#"var _ basetypes.{{kind}}Typable = {{pascal}}Type{}

type {{pascal}}Type struct {
basetypes.{{kind}}Type
}

func (t {{pascal}}Type) Equal(o attr.Type) bool {
other, ok := o.({{pascal}}Type)

if !ok {
return false
}

return t.{{kind}}Type.Equal(other.{{kind}}Type)
}

func (t {{pascal}}Type) String() string {
return "{{pascal}}Type"
}

func (t {{pascal}}Type) ValueFrom{{kind}}(ctx context.Context, in basetypes.{{kind}}Value) (basetypes.{{kind}}Valuable, diag.Diagnostics) {
return {{pascal}}Value{
{{kind}}Value: in,
}, nil
}

func (t {{pascal}}Type) ValueFromTerraform(ctx context.Context, in tftypes.Value) (attr.Value, error) {
attrValue, err := t.{{kind}}Type.ValueFromTerraform(ctx, in)

if err != nil {
return nil, err
}

baseValue, ok := attrValue.(basetypes.{{kind}}Value)

if !ok {
return nil, fmt.Errorf("unexpected value type %T", attrValue)
}

value, diags := t.ValueFrom{{kind}}(ctx, baseValue)

if diags.HasError() {
return nil, fmt.Errorf("unexpected error converting value: %v", diags)
}

return value, nil
}

func (t {{pascal}}Type) ValueType(ctx context.Context) attr.Value {
return {{pascal}}Value{}
}

var _ basetypes.{{kind}}Valuable = {{pascal}}Value{}

type {{pascal}}Value struct {
basetypes.{{kind}}Value
}

func (v {{pascal}}Value) Equal(o attr.Value) bool {
other, ok := o.({{pascal}}Value)

if !ok {
return false
}

return v.{{kind}}Value.Equal(other.{{kind}}Value)
}

func (v {{pascal}}Value) Type(ctx context.Context) attr.Type {
return {{type_literal}}
}
"#;

/// `To<External>` on a wrapper value. The external type is a pointer whose
/// base type shares the framework kind's underlying Go type, so a pointer
/// conversion is all the mapping there is.
pub(crate) const WRAPPER_TO_EXTERNAL: &str = r#"func (v {{pascal}}Value) To{{external_pascal}}(ctx context.Context) ({{external_type}}, diag.Diagnostics) {
var diags diag.Diagnostics

if v.IsNull() {
return nil, diags
}

if v.IsUnknown() {
diags.AddError(
"{{pascal}}Value Value Is Unknown",
`"{{pascal}}Value" is unknown.`,
)

return nil, diags
}

return ({{external_type}})({{accessor}}), diags
}
"#;

/// `From<External>` on a wrapper value. A nil external maps to the framework
/// null value through the pointer-aware constructor.
pub(crate) const WRAPPER_FROM_EXTERNAL: &str = r#"func (v {{pascal}}Value) From{{external_pascal}}(ctx context.Context, apiObject {{external_type}}) ({{pascal}}Value, diag.Diagnostics) {
var diags diag.Diagnostics

return {{pascal}}Value{
{{kind}}Value: {{constructor}},
}, diags
}
"#;

/// The generated object type: `ValueFromObject` with per-attribute
/// missing/wrong-type diagnostics, plus the three value constructors.
pub(crate) const OBJECT_TYPE: &str = r#"var _ basetypes.ObjectTypable = {{pascal}}Type{}

type {{pascal}}Type struct {
basetypes.ObjectType
}

func (t {{pascal}}Type) Equal(o attr.Type) bool {
other, ok := o.({{pascal}}Type)

if !ok {
return false
}

return t.ObjectType.Equal(other.ObjectType)
}

func (t {{pascal}}Type) String() string {
return "{{pascal}}Type"
}

func (t {{pascal}}Type) ValueFromObject(ctx context.Context, in basetypes.ObjectValue) (basetypes.ObjectValuable, diag.Diagnostics) {
var diags diag.Diagnostics

attributes := in.Attributes()

{{value_from_object_checks}}if diags.HasError() {
return nil, diags
}

return {{pascal}}Value{
{{value_assignments}}state: attr.ValueStateKnown,
}, diags
}

func (t {{pascal}}Type) ValueFromTerraform(ctx context.Context, in tftypes.Value) (attr.Value, error) {
attrValue, err := t.ObjectType.ValueFromTerraform(ctx, in)

if err != nil {
return nil, err
}

objectValue, ok := attrValue.(basetypes.ObjectValue)

if !ok {
return nil, fmt.Errorf("unexpected value type %T", attrValue)
}

objectValuable, diags := t.ValueFromObject(ctx, objectValue)

if diags.HasError() {
return nil, fmt.Errorf("unexpected error converting ObjectValue to ObjectValuable: %v", diags)
}

return objectValuable, nil
}

func (t {{pascal}}Type) ValueType(ctx context.Context) attr.Value {
return {{pascal}}Value{}
}

func New{{pascal}}ValueNull() {{pascal}}Value {
return {{pascal}}Value{
state: attr.ValueStateNull,
}
}

func New{{pascal}}ValueUnknown() {{pascal}}Value {
return {{pascal}}Value{
state: attr.ValueStateUnknown,
}
}

func New{{pascal}}Value(attributeTypes map[string]attr.Type, attributes map[string]attr.Value) ({{pascal}}Value, diag.Diagnostics) {
var diags diag.Diagnostics

ctx := context.Background()

for name, attributeType := range attributeTypes {
attribute, ok := attributes[name]

if !ok {
diags.AddError(
"Missing {{pascal}}Value Attribute Value",
fmt.Sprintf("A {{pascal}}Value must contain values for all attributes: missing %q of type %s", name, attributeType.String()),
)

continue
}

if !attributeType.Equal(attribute.Type(ctx)) {
diags.AddError(
"Invalid {{pascal}}Value Attribute Type",
fmt.Sprintf("Attribute %q expected type %s, got %s", name, attributeType.String(), attribute.Type(ctx).String()),
)
}
}

for name := range attributes {
if _, ok := attributeTypes[name]; !ok {
diags.AddError(
"Extra {{pascal}}Value Attribute Value",
fmt.Sprintf("A {{pascal}}Value must not contain values beyond its attributes: extra %q", name),
)
}
}

if diags.HasError() {
return New{{pascal}}ValueUnknown(), diags
}

{{constructor_checks}}return {{pascal}}Value{
{{value_assignments}}state: attr.ValueStateKnown,
}, diags
}
"#;

/// One per-attribute extraction inside `ValueFromObject` / `New*Value`.
/// `{{bail}}` is the early return for the surrounding function.
pub(crate) const OBJECT_ATTRIBUTE_CHECK: &str = r#"{{camel}}Attribute, ok := attributes["{{name}}"]

if !ok {
diags.AddError(
"Attribute Missing",
`{{name}} is missing from the object`)

return {{bail}}, diags
}

{{camel}}Val, ok := {{camel}}Attribute.({{value_type}})

if !ok {
diags.AddError(
"Attribute Wrong Type",
fmt.Sprintf(`{{name}} expected to be {{value_type}}, was: %T`, {{camel}}Attribute))

return {{bail}}, diags
}

"#;

/// The generated object value and its attr.Value surface.
pub(crate) const OBJECT_VALUE: &str = r#"var _ basetypes.ObjectValuable = {{pascal}}Value{}

type {{pascal}}Value struct {
{{fields}}state attr.ValueState
}

func (v {{pascal}}Value) ToTerraformValue(ctx context.Context) (tftypes.Value, error) {
attrTypes := make(map[string]tftypes.Type, {{attribute_count}})

{{terraform_declarations}}{{terraform_attr_types}}
objectType := tftypes.Object{AttributeTypes: attrTypes}

switch v.state {
case attr.ValueStateKnown:
vals := make(map[string]tftypes.Value, {{attribute_count}})

{{terraform_values}}if err := tftypes.ValidateValue(objectType, vals); err != nil {
return tftypes.NewValue(objectType, tftypes.UnknownValue), err
}

return tftypes.NewValue(objectType, vals), nil
case attr.ValueStateNull:
return tftypes.NewValue(objectType, nil), nil
case attr.ValueStateUnknown:
return tftypes.NewValue(objectType, tftypes.UnknownValue), nil
default:
panic(fmt.Sprintf("unhandled Object state in ToTerraformValue: %s", v.state))
}
}

func (v {{pascal}}Value) IsNull() bool {
return v.state == attr.ValueStateNull
}

func (v {{pascal}}Value) IsUnknown() bool {
return v.state == attr.ValueStateUnknown
}

func (v {{pascal}}Value) String() string {
return "{{pascal}}Value"
}

func (v {{pascal}}Value) ToObjectValue(ctx context.Context) (basetypes.ObjectValue, diag.Diagnostics) {
attributeTypes := v.AttributeTypes(ctx)

if v.IsNull() {
return types.ObjectNull(attributeTypes), nil
}

if v.IsUnknown() {
return types.ObjectUnknown(attributeTypes), nil
}

return types.ObjectValue(attributeTypes, map[string]attr.Value{
{{object_value_entries}}})
}

func (v {{pascal}}Value) Equal(o attr.Value) bool {
other, ok := o.({{pascal}}Value)

if !ok {
return false
}

if v.state != other.state {
return false
}

if v.state != attr.ValueStateKnown {
return true
}

{{equality_checks}}return true
}

func (v {{pascal}}Value) Type(ctx context.Context) attr.Type {
return {{pascal}}Type{
basetypes.ObjectType{
AttrTypes: v.AttributeTypes(ctx),
},
}
}

func (v {{pascal}}Value) AttributeTypes(ctx context.Context) map[string]attr.Type {
return map[string]attr.Type{
{{attribute_type_entries}}}
}
"#;

/// `To<External>` on a generated object value. Only primitive fields are
/// mapped; collection and nested fields stay on the framework side.
pub(crate) const OBJECT_TO_EXTERNAL: &str = r#"func (v {{pascal}}Value) To{{external_pascal}}(ctx context.Context) ({{external_type}}, diag.Diagnostics) {
var diags diag.Diagnostics

if v.IsNull() {
return nil, diags
}

if v.IsUnknown() {
diags.AddError(
"{{pascal}}Value Value Is Unknown",
`"{{pascal}}Value" is unknown.`,
)

return nil, diags
}

return &{{external_literal}}{
{{to_assignments}}}, diags
}
"#;

/// `From<External>` on a generated object value.
pub(crate) const OBJECT_FROM_EXTERNAL: &str = r#"func (v {{pascal}}Value) From{{external_pascal}}(ctx context.Context, apiObject {{external_type}}) ({{pascal}}Value, diag.Diagnostics) {
var diags diag.Diagnostics

if apiObject == nil {
return New{{pascal}}ValueNull(), diags
}

return {{pascal}}Value{
{{from_assignments}}state: attr.ValueStateKnown,
}, diags
}
"#;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn substitute_replaces_all_occurrences() {
    let out = substitute("{{a}} and {{a}} then {{b}}", &[("a", "x"), ("b", "y")]);
    assert_eq!(out, "x and x then y");
  }

  #[test]
  fn unknown_placeholders_survive() {
    assert_eq!(substitute("{{kept}}", &[("other", "x")]), "{{kept}}");
  }
}
