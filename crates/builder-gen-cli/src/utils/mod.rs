pub mod source;

pub(crate) use source::{SourceDeclaration, SourceFormat, SourceLoader};
