//! Shared value types: application metadata, command outcomes, exit codes.

/// Successful termination.
pub const EXIT_SUCCESS: i32 = 0;

/// Failed termination (unknown command, unknown option, output failure).
pub const EXIT_FAILURE: i32 = 1;

/// Application metadata shown by `--version` and the command summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppInfo {
    pub name: String,
    pub version: String,
    pub description: String,
}

impl AppInfo {
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            description: description.into(),
        }
    }
}

/// What a command's `execute` reports back to the dispatcher.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outcome {
    pub code: Option<i32>,
    pub description: Option<String>,
}

impl Outcome {
    /// Outcome with a zero result code.
    pub fn success() -> Self {
        Self::with_code(EXIT_SUCCESS)
    }

    pub fn with_code(code: i32) -> Self {
        Self {
            code: Some(code),
            description: None,
        }
    }

    /// Attach a human-readable description.
    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_builders() {
        assert_eq!(Outcome::success().code, Some(0));
        let outcome = Outcome::with_code(3).describe("partial");
        assert_eq!(outcome.code, Some(3));
        assert_eq!(outcome.description.as_deref(), Some("partial"));
        assert_eq!(Outcome::default().code, None);
    }
}
