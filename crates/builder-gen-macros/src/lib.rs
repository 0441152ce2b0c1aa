//! Derive macros for `builder-gen`.
//!
//! ```ignore
//! use builder_gen_macros::ThrowingBuilder;
//!
//! #[derive(ThrowingBuilder)]
//! pub struct User {
//!   pub uuid: uuid::Uuid,
//!   pub name: String,
//!   pub age: Option<String>,
//! }
//!
//! let error = User::make_builder().build().unwrap_err();
//! assert_eq!(error.to_string(), "missing value for property `name`");
//! ```
//!
//! Field attributes: `#[builder(default)]`, `#[builder(default = <expr>)]`.
//! Struct attributes: `#[builder(identity = "field", generator = path)]`.

use builder_gen::GenerationMode;
use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod derive;

/// `{T}Builder` whose `build()` returns `Option<T>`.
#[proc_macro_derive(Builder, attributes(builder))]
pub fn derive_builder(input: TokenStream) -> TokenStream {
  expand(input, GenerationMode::Plain)
}

/// `{T}Builder` whose `build()` returns `Result<T, {T}BuilderError>`.
#[proc_macro_derive(ThrowingBuilder, attributes(builder))]
pub fn derive_throwing_builder(input: TokenStream) -> TokenStream {
  expand(input, GenerationMode::Throwing)
}

/// `{T}Builder` with chaining setters per field.
#[proc_macro_derive(FluentBuilder, attributes(builder))]
pub fn derive_fluent_builder(input: TokenStream) -> TokenStream {
  expand(input, GenerationMode::Fluent)
}

fn expand(input: TokenStream, mode: GenerationMode) -> TokenStream {
  let input = parse_macro_input!(input as DeriveInput);
  derive::expand(&input, mode)
    .unwrap_or_else(syn::Error::into_compile_error)
    .into()
}
