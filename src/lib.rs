//! Request builder for the `TranslateText` call of a JSON-1.1 translation
//! service, plus a small line protocol for driving it from another process.

pub mod config;
pub mod error;
pub mod model;
pub mod protocol;
pub mod services;

pub use error::RequestError;
pub use model::{RequestDescriptor, TranslationRequest, TranslationSettings};
