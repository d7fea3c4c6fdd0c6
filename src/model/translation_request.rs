use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::Method;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::error::RequestError;
use crate::model::descriptor::RequestDescriptor;
use crate::model::settings::TranslationSettings;

const TYPE_NAME: &str = "TranslationRequest";

pub const CONTENT_TYPE_AMZ_JSON: &str = "application/x-amz-json-1.1";
pub const X_AMZ_TARGET: &str = "x-amz-target";
pub const TRANSLATE_TEXT_TARGET: &str = "AWSShineFrontendService_20170701.TranslateText";

/// Documented service limit. Not enforced here; the service rejects it.
pub const MAX_TEXT_BYTES: usize = 5000;

/// Input of the `TranslateText` call.
///
/// Every field may be unset while the request is being assembled. `Text`,
/// `SourceLanguageCode` and `TargetLanguageCode` are only checked by
/// [`TranslationRequest::serialize`].
///
/// `terminology_names` keeps three states apart: `None` (never set, omitted
/// from the body), `Some(vec![])` (sent as `[]`), and a populated list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationRequest {
    text: Option<String>,
    terminology_names: Option<Vec<String>>,
    source_language_code: Option<String>,
    target_language_code: Option<String>,
    settings: Option<TranslationSettings>,
}

impl TranslationRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a request from a loosely-typed bag. Unrecognized keys are
    /// ignored and values of the wrong JSON type count as unset.
    pub fn from_bag(bag: &Map<String, Value>) -> Self {
        let get_str = |key: &str| bag.get(key).and_then(|v| v.as_str()).map(str::to_string);

        let terminology_names = bag
            .get("TerminologyNames")
            .and_then(|v| v.as_array())
            .map(|arr| {
                arr.iter()
                    .filter_map(|v| v.as_str().map(str::to_string))
                    .collect::<Vec<_>>()
            });

        let settings = bag
            .get("Settings")
            .and_then(|v| v.as_object())
            .map(TranslationSettings::from_bag);

        Self {
            text: get_str("Text"),
            terminology_names,
            source_language_code: get_str("SourceLanguageCode"),
            target_language_code: get_str("TargetLanguageCode"),
            settings,
        }
    }

    /// Canonical factory: an existing request passes through untouched, a
    /// bag is converted with [`TranslationRequest::from_bag`].
    pub fn create(input: impl Into<TranslationRequest>) -> Self {
        input.into()
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn set_text(&mut self, text: Option<String>) {
        self.text = text;
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Empty when never set; see [`Self::is_terminology_names_set`].
    pub fn terminology_names(&self) -> &[String] {
        self.terminology_names.as_deref().unwrap_or(&[])
    }

    pub fn is_terminology_names_set(&self) -> bool {
        self.terminology_names.is_some()
    }

    pub fn set_terminology_names(&mut self, names: Option<Vec<String>>) {
        self.terminology_names = names;
    }

    pub fn with_terminology_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.terminology_names = Some(names.into_iter().map(Into::into).collect());
        self
    }

    pub fn source_language_code(&self) -> Option<&str> {
        self.source_language_code.as_deref()
    }

    pub fn set_source_language_code(&mut self, code: Option<String>) {
        self.source_language_code = code;
    }

    pub fn with_source_language_code(mut self, code: impl Into<String>) -> Self {
        self.source_language_code = Some(code.into());
        self
    }

    pub fn target_language_code(&self) -> Option<&str> {
        self.target_language_code.as_deref()
    }

    pub fn set_target_language_code(&mut self, code: Option<String>) {
        self.target_language_code = code;
    }

    pub fn with_target_language_code(mut self, code: impl Into<String>) -> Self {
        self.target_language_code = Some(code.into());
        self
    }

    pub fn settings(&self) -> Option<&TranslationSettings> {
        self.settings.as_ref()
    }

    pub fn set_settings(&mut self, settings: Option<TranslationSettings>) {
        self.settings = settings;
    }

    pub fn with_settings(mut self, settings: impl Into<TranslationSettings>) -> Self {
        self.settings = Some(TranslationSettings::create(settings));
        self
    }

    /// Validates the required fields and produces the `POST /` call.
    pub fn serialize(&self) -> Result<RequestDescriptor, RequestError> {
        let text = self
            .text
            .as_deref()
            .ok_or_else(|| RequestError::missing("Text", TYPE_NAME))?;
        let source = self
            .source_language_code
            .as_deref()
            .ok_or_else(|| RequestError::missing("SourceLanguageCode", TYPE_NAME))?;
        let target = self
            .target_language_code
            .as_deref()
            .ok_or_else(|| RequestError::missing("TargetLanguageCode", TYPE_NAME))?;

        if text.len() > MAX_TEXT_BYTES {
            warn!(
                "Text is {} bytes, above the {} byte service limit",
                text.len(),
                MAX_TEXT_BYTES
            );
        }

        let mut payload = Map::new();
        payload.insert("Text".into(), Value::String(text.to_string()));

        if let Some(names) = &self.terminology_names {
            let arr = names.iter().cloned().map(Value::String).collect();
            payload.insert("TerminologyNames".into(), Value::Array(arr));
        }

        payload.insert("SourceLanguageCode".into(), Value::String(source.to_string()));
        payload.insert("TargetLanguageCode".into(), Value::String(target.to_string()));

        if let Some(settings) = &self.settings {
            payload.insert("Settings".into(), Value::Object(settings.serialize()));
        }

        let body = if payload.is_empty() {
            b"{}".to_vec()
        } else {
            Value::Object(payload).to_string().into_bytes()
        };

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(CONTENT_TYPE_AMZ_JSON));
        headers.insert(
            HeaderName::from_static(X_AMZ_TARGET),
            HeaderValue::from_static(TRANSLATE_TEXT_TARGET),
        );

        debug!(
            "serialized TranslateText request: {} -> {}, {} body bytes",
            source,
            target,
            body.len()
        );

        Ok(RequestDescriptor {
            method: Method::POST,
            path: "/".to_string(),
            query: Vec::new(),
            headers,
            body,
        })
    }
}

impl From<Map<String, Value>> for TranslationRequest {
    fn from(bag: Map<String, Value>) -> Self {
        Self::from_bag(&bag)
    }
}

impl From<&Map<String, Value>> for TranslationRequest {
    fn from(bag: &Map<String, Value>) -> Self {
        Self::from_bag(bag)
    }
}

impl From<&Value> for TranslationRequest {
    fn from(v: &Value) -> Self {
        match v.as_object() {
            Some(bag) => Self::from_bag(bag),
            None => Self::default(),
        }
    }
}

impl From<Value> for TranslationRequest {
    fn from(v: Value) -> Self {
        Self::from(&v)
    }
}
