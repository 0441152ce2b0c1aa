pub mod ast;
pub mod codegen;
pub mod config;
pub(crate) mod converter;
pub mod extractor;
pub mod metrics;
pub mod mode;
