use crate::generator::{
  ast::TypedField,
  codegen::Visibility,
  config::GenerationConfig,
  mode::GenerationMode,
};


fn user_fields() -> Vec<TypedField> {
  vec![
    TypedField::new("uuid", "Uuid"),
    TypedField::new("name", "String"),
    TypedField::new("age", "Option<String>"),
  ]
}

fn render(mode: GenerationMode, fields: &[TypedField]) -> String {
  render_with(mode, fields, &GenerationConfig::default())
}

fn render_with(mode: GenerationMode, fields: &[TypedField], config: &GenerationConfig) -> String {
  mode
    .strategy()
    .synthesize("User", fields, config)
    .expect("synthesis should succeed")
    .to_formatted_string()
    .expect("generated code should parse")
}

fn with_visibility(visibility: Visibility) -> GenerationConfig {
  GenerationConfig::builder().visibility(visibility).build()
}
