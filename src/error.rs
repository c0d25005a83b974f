use thiserror::Error;

/// Errors raised when selecting a pattern variant by name.
///
/// Building products never fails; only turning user text into a style tag can.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    #[error("unknown {family} style '{name}'")]
    UnknownStyle { family: &'static str, name: String },
}

impl PatternError {
    pub fn unknown_style(family: &'static str, name: impl Into<String>) -> Self {
        Self::UnknownStyle {
            family,
            name: name.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PatternError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_style_message() {
        let err = PatternError::unknown_style("furniture", "baroque");
        assert_eq!(err.to_string(), "unknown furniture style 'baroque'");
    }
}
