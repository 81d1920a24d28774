//! Application error type.
//!
//! Every fallible operation returns `AppError`, which carries the process exit
//! code alongside a human-readable message:
//!
//! - `2`: usage or I/O problems (bad arguments, unreadable/unwritable files,
//!   missing model attributes, rejected seasonal orders)
//! - `4`: data problems (parameter counts too large to sum into `df_model`)

#[derive(Clone, PartialEq, Eq)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }

    /// Prefix the message with `context`, keeping the exit code.
    pub fn context(self, context: impl AsRef<str>) -> Self {
        Self {
            exit_code: self.exit_code,
            message: format!("{}: {}", context.as_ref(), self.message),
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}
