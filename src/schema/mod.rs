//! JSON Schema construction and validation.
//!
//! Tools declare their accepted input (and optionally their output) as
//! JSON Schema values. The builder here covers the shapes registration
//! code actually writes; anything fancier can be passed as a raw
//! `serde_json::Value`. Validation is a pluggable seam: the shipped
//! [`StructuralValidator`] checks a structural subset and lets everything
//! it does not understand pass.

mod builder;
mod validate;

pub use builder::{array, boolean, integer, nullable, number, object, string};
pub use builder::{FieldSchema, ObjectSchema};
pub use validate::{SchemaError, SchemaValidator, StructuralValidator};
