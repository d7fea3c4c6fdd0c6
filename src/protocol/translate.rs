use serde_json::{json, Value};
use tracing::debug;

use crate::config::CoreConfig;
use crate::model::TranslationRequest;
use crate::services::transport;

/// Read-back of every getter, in wire key order.
fn request_view(r: &TranslationRequest) -> Value {
    json!({
        "Text": r.text(),
        "TerminologyNames": r.terminology_names(),
        "SourceLanguageCode": r.source_language_code(),
        "TargetLanguageCode": r.target_language_code(),
        "Settings": r.settings().map(|s| Value::Object(s.serialize())),
    })
}

pub fn build(payload: &Value) -> Value {
    let request = TranslationRequest::create(payload);
    debug!("built request from bag: {:?}", request);
    json!({ "request": request_view(&request) })
}

pub fn serialize(payload: &Value) -> Result<Value, String> {
    let request = TranslationRequest::create(payload);
    let descriptor = request.serialize().map_err(|e| e.to_string())?;
    Ok(json!({ "descriptor": descriptor.to_json() }))
}

/// The payload's `endpoint` wins unless blank, then the configured default.
fn resolve_endpoint<'a>(payload: &'a Value, cfg: &'a CoreConfig) -> Option<&'a str> {
    payload
        .get("endpoint")
        .and_then(|v| v.as_str())
        .filter(|s| !s.trim().is_empty())
        .or(cfg.endpoint.as_deref())
}

pub fn send(payload: &Value, cfg: &CoreConfig) -> Result<Value, String> {
    static EMPTY: Value = Value::Null;
    let bag = payload.get("request").unwrap_or(&EMPTY);
    let request = TranslationRequest::create(bag);
    let descriptor = request.serialize().map_err(|e| e.to_string())?;

    let endpoint = resolve_endpoint(payload, cfg).unwrap_or("");

    let client = transport::build_client(cfg.timeout).map_err(|e| e.to_string())?;
    let response =
        transport::dispatch(&client, endpoint, &descriptor).map_err(|e| e.to_string())?;

    serde_json::to_value(response).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn build_reports_every_getter() {
        let out = build(&json!({
            "Text": "Hello",
            "SourceLanguageCode": "en",
            "Extra": 1
        }));

        assert_eq!(
            out,
            json!({
                "request": {
                    "Text": "Hello",
                    "TerminologyNames": [],
                    "SourceLanguageCode": "en",
                    "TargetLanguageCode": null,
                    "Settings": null
                }
            })
        );
    }

    #[test]
    fn serialize_returns_descriptor() {
        let out = serialize(&json!({
            "Text": "Hello",
            "SourceLanguageCode": "en",
            "TargetLanguageCode": "fr"
        }))
        .unwrap();

        let d = &out["descriptor"];
        assert_eq!(d["method"], "POST");
        assert_eq!(d["path"], "/");
        assert_eq!(d["query"], json!({}));
        assert_eq!(d["headers"]["content-type"], "application/x-amz-json-1.1");
        assert_eq!(
            d["headers"]["x-amz-target"],
            "AWSShineFrontendService_20170701.TranslateText"
        );
        assert_eq!(
            d["body"],
            r#"{"Text":"Hello","SourceLanguageCode":"en","TargetLanguageCode":"fr"}"#
        );
        assert_eq!(d["body_sha256"].as_str().map(str::len), Some(64));
    }

    #[test]
    fn serialize_reports_missing_field() {
        let err = serialize(&json!({})).unwrap_err();
        assert_eq!(err, "missing required parameter Text for TranslationRequest");
    }

    #[test]
    fn send_validates_before_transport() {
        let err = send(&json!({ "endpoint": "http://127.0.0.1:9" }), &CoreConfig::default())
            .unwrap_err();
        assert!(err.contains("Text"));
    }

    #[test]
    fn send_without_endpoint_fails() {
        let payload = json!({
            "request": {
                "Text": "Hello",
                "SourceLanguageCode": "en",
                "TargetLanguageCode": "fr"
            }
        });
        let err = send(&payload, &CoreConfig::default()).unwrap_err();
        assert_eq!(err, "endpoint is required");
    }

    #[test]
    fn blank_endpoint_falls_back_to_config() {
        let cfg = CoreConfig {
            endpoint: Some("http://localhost:4566".into()),
            ..CoreConfig::default()
        };

        let blank = json!({ "endpoint": "  " });
        assert_eq!(resolve_endpoint(&blank, &cfg), Some("http://localhost:4566"));

        let missing = json!({});
        assert_eq!(resolve_endpoint(&missing, &cfg), Some("http://localhost:4566"));

        let explicit = json!({ "endpoint": "http://example.test" });
        assert_eq!(resolve_endpoint(&explicit, &cfg), Some("http://example.test"));

        assert_eq!(resolve_endpoint(&blank, &CoreConfig::default()), None);
    }
}
