//! Generic resource handling over a pluggable document store.
//!
//! [`CollectionProvider`] is the single component of the system: one
//! implementation of list/get/create/update/delete, parameterized per call
//! by a collection [`Schema`](crate::schema::Schema). The four resource
//! collections differ only in the schema handed to it.

pub mod collection;
pub mod error;

pub use collection::{CollectionProvider, MAX_LIST_RESULTS};
pub use error::ProviderError;
