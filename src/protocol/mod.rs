use serde_json::{json, Value};
use tracing::warn;

use crate::config::CoreConfig;

mod command;
mod translate;

use command::Command;

fn get_cmd(req: &Value) -> &str {
    req.get("cmd").and_then(|v| v.as_str()).unwrap_or("")
}

fn get_id(req: &Value) -> Value {
    req.get("id").cloned().unwrap_or(Value::Null)
}

fn get_payload(req: &Value) -> &Value {
    static EMPTY: Value = Value::Null;
    req.get("payload").unwrap_or(&EMPTY)
}

fn ok(id: Value, payload: Value) -> String {
    json!({
        "id": id,
        "status": "ok",
        "payload": payload
    })
    .to_string()
}

fn err(id: Value, message: impl Into<String>) -> String {
    json!({
        "id": id,
        "status": "error",
        "message": message.into()
    })
    .to_string()
}

/// Handles one protocol line and returns the response line.
pub fn handle(input: &str, cfg: &CoreConfig) -> String {
    let req: Value = match serde_json::from_str(input) {
        Ok(v) => v,
        Err(_) => {
            return json!({
                "status": "error",
                "message": "invalid json"
            })
            .to_string();
        }
    };

    let id = get_id(&req);
    let cmd_str = get_cmd(&req);
    let payload = get_payload(&req);

    match Command::from(cmd_str) {
        Command::Ping => ok(id, json!({ "message": "translate-core alive" })),

        Command::BuildTranslateText => ok(id, translate::build(payload)),

        Command::SerializeTranslateText => match translate::serialize(payload) {
            Ok(v) => ok(id, v),
            Err(e) => err(id, e),
        },

        Command::SendTranslateText => match translate::send(payload, cfg) {
            Ok(v) => ok(id, v),
            Err(e) => err(id, e),
        },

        Command::Unknown => {
            warn!("unknown command: {:?}", cmd_str);
            err(id, "unknown command")
        }
    }
}
