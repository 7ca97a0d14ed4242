//! Document service client abstraction.
//!
//! The external document database is only ever reached through the
//! [`DocumentService`] trait. The real HTTP transport lives outside this
//! crate; [`InMemoryDocumentService`] is the implementation shipped here,
//! used by the host for local runs and by tests to assert on update calls.

mod client;
mod memory;
mod properties;

pub use client::DocumentService;
pub use memory::{InMemoryDocumentService, UpdateCall};
pub use properties::{Page, PageData, PropertyMap, PropertyValue, RichTextFragment};
