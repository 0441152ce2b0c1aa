mod builder;
mod fields;
pub mod tokens;
pub(crate) mod types;


pub use builder::{
  BuildContract, BuildGuard, BuilderDef, BuilderErrorDef, BuilderMethod, ConstructorArg, FillAssignment, GuardField,
  PropertyDef, SetterDef,
};
pub use fields::{FieldRole, TypedField};
