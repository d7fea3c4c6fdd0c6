use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Formality {
    Formal,
    Informal,
    Unknown(String),
}

impl From<&str> for Formality {
    fn from(s: &str) -> Self {
        match s {
            "FORMAL" => Formality::Formal,
            "INFORMAL" => Formality::Informal,
            other => Formality::Unknown(other.to_string()),
        }
    }
}

impl Formality {
    pub fn as_str(&self) -> &str {
        match self {
            Formality::Formal => "FORMAL",
            Formality::Informal => "INFORMAL",
            Formality::Unknown(s) => s,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Profanity {
    Mask,
    Unknown(String),
}

impl From<&str> for Profanity {
    fn from(s: &str) -> Self {
        match s {
            "MASK" => Profanity::Mask,
            other => Profanity::Unknown(other.to_string()),
        }
    }
}

impl Profanity {
    pub fn as_str(&self) -> &str {
        match self {
            Profanity::Mask => "MASK",
            Profanity::Unknown(s) => s,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Brevity {
    On,
    Unknown(String),
}

impl From<&str> for Brevity {
    fn from(s: &str) -> Self {
        match s {
            "ON" => Brevity::On,
            other => Brevity::Unknown(other.to_string()),
        }
    }
}

impl Brevity {
    pub fn as_str(&self) -> &str {
        match self {
            Brevity::On => "ON",
            Brevity::Unknown(s) => s,
        }
    }
}

/// Optional output shaping applied by the service: formality, profanity
/// masking and brevity. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationSettings {
    formality: Option<Formality>,
    profanity: Option<Profanity>,
    brevity: Option<Brevity>,
}

impl TranslationSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads `Formality`, `Profanity` and `Brevity` from a loosely-typed bag.
    /// Other keys and non-string values are ignored.
    pub fn from_bag(bag: &Map<String, Value>) -> Self {
        let get_str = |key: &str| bag.get(key).and_then(|v| v.as_str());

        Self {
            formality: get_str("Formality").map(Formality::from),
            profanity: get_str("Profanity").map(Profanity::from),
            brevity: get_str("Brevity").map(Brevity::from),
        }
    }

    /// Returns `input` unchanged when it is already a `TranslationSettings`,
    /// otherwise builds one from the bag.
    pub fn create(input: impl Into<TranslationSettings>) -> Self {
        input.into()
    }

    pub fn formality(&self) -> Option<&Formality> {
        self.formality.as_ref()
    }

    pub fn set_formality(&mut self, formality: Option<Formality>) {
        self.formality = formality;
    }

    pub fn with_formality(mut self, formality: Formality) -> Self {
        self.formality = Some(formality);
        self
    }

    pub fn profanity(&self) -> Option<&Profanity> {
        self.profanity.as_ref()
    }

    pub fn set_profanity(&mut self, profanity: Option<Profanity>) {
        self.profanity = profanity;
    }

    pub fn with_profanity(mut self, profanity: Profanity) -> Self {
        self.profanity = Some(profanity);
        self
    }

    pub fn brevity(&self) -> Option<&Brevity> {
        self.brevity.as_ref()
    }

    pub fn set_brevity(&mut self, brevity: Option<Brevity>) {
        self.brevity = brevity;
    }

    pub fn with_brevity(mut self, brevity: Brevity) -> Self {
        self.brevity = Some(brevity);
        self
    }

    pub fn serialize(&self) -> Map<String, Value> {
        let mut out = Map::new();

        if let Some(f) = &self.formality {
            out.insert("Formality".into(), Value::String(f.as_str().to_string()));
        }
        if let Some(p) = &self.profanity {
            out.insert("Profanity".into(), Value::String(p.as_str().to_string()));
        }
        if let Some(b) = &self.brevity {
            out.insert("Brevity".into(), Value::String(b.as_str().to_string()));
        }

        out
    }
}

impl From<Map<String, Value>> for TranslationSettings {
    fn from(bag: Map<String, Value>) -> Self {
        Self::from_bag(&bag)
    }
}

impl From<&Map<String, Value>> for TranslationSettings {
    fn from(bag: &Map<String, Value>) -> Self {
        Self::from_bag(bag)
    }
}

impl From<&Value> for TranslationSettings {
    fn from(v: &Value) -> Self {
        match v.as_object() {
            Some(bag) => Self::from_bag(bag),
            None => Self::default(),
        }
    }
}

impl From<Value> for TranslationSettings {
    fn from(v: Value) -> Self {
        Self::from(&v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn bag(v: Value) -> Map<String, Value> {
        match v {
            Value::Object(m) => m,
            _ => panic!("not an object"),
        }
    }

    #[test]
    fn from_bag_reads_known_keys() {
        let s = TranslationSettings::from_bag(&bag(json!({
            "Formality": "FORMAL",
            "Profanity": "MASK",
            "Colour": "blue"
        })));

        assert_eq!(s.formality(), Some(&Formality::Formal));
        assert_eq!(s.profanity(), Some(&Profanity::Mask));
        assert_eq!(s.brevity(), None);
    }

    #[test]
    fn non_string_values_are_absent() {
        let s = TranslationSettings::from_bag(&bag(json!({ "Formality": 3 })));
        assert_eq!(s, TranslationSettings::default());
    }

    #[test]
    fn unknown_enum_value_round_trips() {
        let s = TranslationSettings::from_bag(&bag(json!({ "Formality": "CASUAL" })));
        assert_eq!(s.formality(), Some(&Formality::Unknown("CASUAL".into())));
        assert_eq!(s.serialize().get("Formality"), Some(&json!("CASUAL")));
    }

    #[test]
    fn create_accepts_json_values() {
        let s = TranslationSettings::create(json!({ "Profanity": "MASK" }));
        assert_eq!(s.profanity(), Some(&Profanity::Mask));

        let from_ref = TranslationSettings::create(&json!({ "Brevity": "ON" }));
        assert_eq!(from_ref.brevity(), Some(&Brevity::On));

        assert_eq!(TranslationSettings::create(json!([1, 2])), TranslationSettings::default());
    }

    #[test]
    fn create_is_identity_for_instances() {
        let s = TranslationSettings::new().with_brevity(Brevity::On);
        assert_eq!(TranslationSettings::create(s.clone()), s);
    }

    #[test]
    fn serialize_keeps_field_order_and_skips_unset() {
        let s = TranslationSettings::new()
            .with_brevity(Brevity::On)
            .with_formality(Formality::Informal);

        let out = Value::Object(s.serialize()).to_string();
        assert_eq!(out, r#"{"Formality":"INFORMAL","Brevity":"ON"}"#);
    }

    #[test]
    fn empty_settings_serialize_to_empty_map() {
        assert!(TranslationSettings::new().serialize().is_empty());
    }
}
