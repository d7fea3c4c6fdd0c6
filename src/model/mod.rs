pub mod descriptor;
pub mod settings;
pub mod translation_request;

pub use descriptor::RequestDescriptor;
pub use settings::{Brevity, Formality, Profanity, TranslationSettings};
pub use translation_request::TranslationRequest;
