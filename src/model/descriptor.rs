use reqwest::header::HeaderMap;
use reqwest::Method;
use serde_json::{json, Map, Value};

use crate::services::hash;

/// A fully serialized HTTP call, ready to hand to a transport.
#[derive(Debug, Clone)]
pub struct RequestDescriptor {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl RequestDescriptor {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    pub fn body_sha256(&self) -> String {
        hash::sha256_hex(&self.body)
    }

    /// JSON view used by the line protocol.
    pub fn to_json(&self) -> Value {
        let mut headers = Map::new();
        for (name, value) in &self.headers {
            if let Ok(v) = value.to_str() {
                headers.insert(name.as_str().to_string(), Value::String(v.to_string()));
            }
        }

        let query: Map<String, Value> = self
            .query
            .iter()
            .map(|(k, v)| (k.clone(), Value::String(v.clone())))
            .collect();

        json!({
            "method": self.method.as_str(),
            "path": self.path,
            "query": query,
            "headers": headers,
            "body": self.body_text(),
            "body_sha256": self.body_sha256(),
        })
    }
}
