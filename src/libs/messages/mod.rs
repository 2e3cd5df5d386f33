pub mod display;
pub mod macros;
pub mod types;

pub use types::Message;

/// A message addressed to the user, with its severity.
#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    Success(Message),
    Info(Message),
    Warning(Message),
    Error(Message),
}

impl Notice {
    pub fn message(&self) -> &Message {
        match self {
            Notice::Success(msg) | Notice::Info(msg) | Notice::Warning(msg) | Notice::Error(msg) => msg,
        }
    }

    pub fn is_warning(&self) -> bool {
        matches!(self, Notice::Warning(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Notice::Error(_))
    }
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Notice::Success(msg) => write!(f, "{}", success(msg.clone())),
            Notice::Info(msg) => write!(f, "{}", info(msg.clone())),
            Notice::Warning(msg) => write!(f, "{}", warning(msg.clone())),
            Notice::Error(msg) => write!(f, "{}", error(msg.clone())),
        }
    }
}

// Convenience functions for common message patterns
pub fn success(msg: Message) -> String {
    format!("✅ {}", msg)
}

pub fn error(msg: Message) -> String {
    format!("❌ {}", msg)
}

pub fn warning(msg: Message) -> String {
    format!("⚠️  {}", msg)
}

pub fn info(msg: Message) -> String {
    format!("ℹ️  {}", msg)
}
