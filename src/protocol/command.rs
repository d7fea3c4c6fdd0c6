#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Ping,
    BuildTranslateText,
    SerializeTranslateText,
    SendTranslateText,
    Unknown,
}

impl From<&str> for Command {
    fn from(s: &str) -> Self {
        match s {
            "ping" => Command::Ping,
            "translate_text.build" => Command::BuildTranslateText,
            "translate_text.serialize" => Command::SerializeTranslateText,
            "translate_text.send" => Command::SendTranslateText,
            _ => Command::Unknown,
        }
    }
}
