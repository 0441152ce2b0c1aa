use builder_gen_macros::{Builder, FluentBuilder, ThrowingBuilder};

#[derive(Debug, PartialEq)]
pub struct AppError(String);

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Clone, PartialEq, ThrowingBuilder)]
pub struct Config {
  pub name: String,
  pub port: Option<u16>,
}

#[derive(Debug, Clone, PartialEq, Builder)]
pub struct Limits {
  pub max: u32,
}

#[derive(Debug, Clone, PartialEq, FluentBuilder)]
pub struct Route {
  pub path: String,
}

fn load(name: &str) -> Result<Config> {
  let mut builder = ConfigBuilder::new();
  builder.name = Some(name.to_string());
  builder.build().map_err(|error| AppError(error.to_string()))
}

#[test]
fn test_throwing_builder_beside_local_result_alias() {
  assert_eq!(
    load("api"),
    Ok(Config {
      name: "api".to_string(),
      port: None,
    })
  );

  let error: std::result::Result<Config, ConfigBuilderError> = Config::make_builder().build();
  assert_eq!(error, Err(ConfigBuilderError::MissingValue { property: "name" }));
}

#[test]
fn test_optional_builders_beside_local_result_alias() {
  let mut limits = LimitsBuilder::new();
  limits.max = Some(8);
  assert_eq!(limits.build(), Some(Limits { max: 8 }));

  let route = Route::make_builder().path("/health".to_string()).build();
  assert_eq!(route.map(|route| route.path).as_deref(), Some("/health"));
}
