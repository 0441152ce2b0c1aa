use proc_macro2::TokenStream;
use quote::quote;

use super::{BuilderDeclaration, DeclFragment, Visibility, error_impls};
use crate::generator::ast::{
  BuildContract, BuildGuard, BuilderDef, BuilderMethod, ConstructorArg, FillAssignment, GuardField, SetterDef,
};

pub(crate) struct BuilderGenerator {
  visibility: Visibility,
}

impl BuilderGenerator {
  pub(crate) fn new(visibility: Visibility) -> Self {
    Self { visibility }
  }

  pub(crate) fn generate(&self, def: &BuilderDef) -> BuilderDeclaration {
    let mut fragments = vec![DeclFragment::BuilderStruct(self.generate_struct_definition(def))];
    if let Some(error) = def.error() {
      fragments.push(DeclFragment::BuilderError(error_impls::generate_builder_error(
        error,
        &def.name,
        self.visibility,
      )));
    }
    fragments.push(DeclFragment::BuilderImpl(self.generate_impl_block(def)));
    fragments.push(DeclFragment::Conversion(generate_conversion_impl(def)));
    fragments.push(DeclFragment::Factory(self.generate_factory(def)));

    BuilderDeclaration::new(fragments)
  }

  fn generate_struct_definition(&self, def: &BuilderDef) -> TokenStream {
    let name = &def.name;
    let vis = self.visibility.to_tokens();
    let doc = format!(" Builder for [`{}`].", def.target);
    let fields = def.properties.iter().map(|property| {
      let field = &property.name;
      let ty = &property.ty;
      quote! { #vis #field: #ty }
    });

    quote! {
      #[doc = #doc]
      #[derive(::core::clone::Clone, ::core::default::Default)]
      #[allow(dead_code)]
      #vis struct #name {
        #(#fields),*
      }
    }
  }

  fn generate_impl_block(&self, def: &BuilderDef) -> TokenStream {
    let name = &def.name;
    let methods = def.methods.iter().map(|method| self.generate_method(def, method));

    quote! {
      #[allow(dead_code)]
      impl #name {
        #(#methods)*
      }
    }
  }

  fn generate_method(&self, def: &BuilderDef, method: &BuilderMethod) -> TokenStream {
    let vis = self.visibility.to_tokens();
    let target = &def.target;

    match method {
      BuilderMethod::New => quote! {
        /// Creates a builder with every property unset.
        #vis fn new() -> Self {
          ::core::default::Default::default()
        }
      },
      BuilderMethod::FromItem => quote! {
        /// Creates a builder prefilled from an existing value.
        #vis fn from_item(item: ::core::option::Option<&#target>) -> Self {
          let mut builder = Self::new();
          builder.fill(item);
          builder
        }
      },
      BuilderMethod::Fill { assignments } => {
        let body = generate_fill_body(assignments);
        quote! {
          /// Copies every property from `item`, clearing them all when `item` is `None`.
          #vis fn fill(&mut self, item: ::core::option::Option<&#target>) {
            #body
          }
        }
      }
      BuilderMethod::Setter(setter) => generate_setter(&vis, setter),
      BuilderMethod::Build { guard, args } => {
        let guard = generate_guard(guard);
        let construct = quote! {
          #target {
            #(#args),*
          }
        };
        let (return_type, result) = match &def.contract {
          BuildContract::Optional => (
            quote! { ::core::option::Option<#target> },
            quote! { ::core::option::Option::Some(#construct) },
          ),
          BuildContract::Fallible(error) => {
            let error = &error.name;
            (
              quote! { ::core::result::Result<#target, #error> },
              quote! { ::core::result::Result::Ok(#construct) },
            )
          }
        };

        quote! {
          #vis fn build(&self) -> #return_type {
            #guard
            #result
          }
        }
      }
    }
  }

  fn generate_factory(&self, def: &BuilderDef) -> TokenStream {
    let vis = self.visibility.to_tokens();
    let target = &def.target;
    let name = &def.name;

    quote! {
      #[allow(dead_code)]
      impl #target {
        #vis fn make_builder() -> #name {
          #name::new()
        }
      }
    }
  }
}

fn generate_fill_body(assignments: &[FillAssignment]) -> TokenStream {
  if assignments.is_empty() {
    return quote! { let _ = item; };
  }

  let lines = assignments.iter().map(|assignment| {
    let field = &assignment.field;
    if assignment.source_optional {
      quote! { self.#field = item.and_then(|item| ::core::clone::Clone::clone(&item.#field)); }
    } else {
      quote! { self.#field = item.map(|item| ::core::clone::Clone::clone(&item.#field)); }
    }
  });

  quote! { #(#lines)* }
}

fn generate_setter(vis: &TokenStream, setter: &SetterDef) -> TokenStream {
  let SetterDef {
    method,
    field,
    value_type,
  } = setter;

  quote! {
    #vis fn #method(&mut self, #field: #value_type) -> &mut Self {
      self.#field = ::core::option::Option::Some(#field);
      self
    }
  }
}

fn generate_guard(guard: &BuildGuard) -> TokenStream {
  match guard {
    BuildGuard::None => quote! {},
    BuildGuard::Combined(fields) => match fields.as_slice() {
      [GuardField { field, .. }] => quote! {
        let ::core::option::Option::Some(#field) = self.#field.as_ref() else {
          return ::core::option::Option::None;
        };
      },
      _ => {
        let bindings = fields.iter().map(|guard| &guard.field);
        let sources = fields.iter().map(|guard| &guard.field);
        quote! {
          let (#(::core::option::Option::Some(#bindings)),*) = (#(self.#sources.as_ref()),*) else {
            return ::core::option::Option::None;
          };
        }
      }
    },
    BuildGuard::Sequential { error, fields } => {
      let checks = fields.iter().map(|GuardField { field, property }| {
        quote! {
          let ::core::option::Option::Some(#field) = self.#field.as_ref() else {
            return ::core::result::Result::Err(#error::MissingValue { property: #property });
          };
        }
      });
      quote! { #(#checks)* }
    }
  }
}

fn generate_conversion_impl(def: &BuilderDef) -> TokenStream {
  let name = &def.name;
  let target = &def.target;

  quote! {
    impl ::core::convert::From<&#target> for #name {
      fn from(item: &#target) -> Self {
        Self::from_item(::core::option::Option::Some(item))
      }
    }
  }
}

impl quote::ToTokens for ConstructorArg {
  fn to_tokens(&self, tokens: &mut TokenStream) {
    let arg = match self {
      Self::Bound(field) => quote! { #field: ::core::clone::Clone::clone(#field) },
      Self::PassThrough(field) => quote! { #field: ::core::clone::Clone::clone(&self.#field) },
      Self::Identity {
        field,
        generator,
        optional: false,
      } => quote! { #field: ::core::clone::Clone::clone(&self.#field).unwrap_or_else(#generator) },
      Self::Identity {
        field,
        generator,
        optional: true,
      } => quote! { #field: ::core::clone::Clone::clone(&self.#field).or_else(|| ::core::option::Option::Some(#generator())) },
      Self::Defaulted {
        field,
        default: None,
        optional: false,
      } => quote! { #field: ::core::clone::Clone::clone(&self.#field).unwrap_or_default() },
      Self::Defaulted {
        field,
        default: None,
        optional: true,
      } => quote! { #field: ::core::clone::Clone::clone(&self.#field) },
      Self::Defaulted {
        field,
        default: Some(expr),
        optional: false,
      } => quote! { #field: ::core::clone::Clone::clone(&self.#field).unwrap_or_else(|| #expr) },
      Self::Defaulted {
        field,
        default: Some(expr),
        optional: true,
      } => quote! { #field: ::core::clone::Clone::clone(&self.#field).or_else(|| #expr) },
    };
    arg.to_tokens(tokens);
  }
}
