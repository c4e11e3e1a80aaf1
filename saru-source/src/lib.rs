//! Source text handle and syntax error reporting.
//!
//! A [`Source`] wraps the program text together with an [`ErrorReporter`].
//! The parser borrows the `Source` and records every syntax error it
//! encounters instead of aborting; callers inspect the reporter after
//! parsing to decide whether the resulting tree is trustworthy.

use std::{cell::RefCell, fmt};

pub struct Source<'a> {
    pub content: &'a str,
    pub errors: ErrorReporter,
}

impl<'a> Source<'a> {
    pub fn new(content: &'a str) -> Self {
        Self {
            content,
            errors: ErrorReporter::new(),
        }
    }

    pub fn has_no_errors(&self) -> bool {
        self.errors.is_empty()
    }
}

impl<'a> From<&'a str> for Source<'a> {
    fn from(content: &'a str) -> Self {
        Source::new(content)
    }
}

/// A single syntax error. Tokens carry no positions, so neither do errors;
/// the message is the whole diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    message: String,
}

impl SyntaxError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Accumulates all the errors reported against one [`Source`].
pub struct ErrorReporter {
    errors: RefCell<Vec<SyntaxError>>,
}

impl ErrorReporter {
    pub fn new() -> Self {
        Self {
            errors: RefCell::new(Vec::new()),
        }
    }

    pub fn add_error(&self, error: SyntaxError) {
        self.errors.borrow_mut().push(error);
    }

    pub fn len(&self) -> usize {
        self.errors.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.borrow().is_empty()
    }

    /// The accumulated messages, oldest first.
    pub fn messages(&self) -> Vec<String> {
        self.errors
            .borrow()
            .iter()
            .map(|error| error.message.clone())
            .collect()
    }
}

impl Default for ErrorReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ErrorReporter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let errors = self.errors.borrow();
        for error in errors.iter() {
            writeln!(f, "ERROR: {}", error.message)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reporter_accumulates_in_order() {
        let source = Source::new("let x = ;");
        assert!(source.has_no_errors());

        source.errors.add_error(SyntaxError::new("first"));
        source.errors.add_error(SyntaxError::new("second"));

        assert!(!source.has_no_errors());
        assert_eq!(source.errors.len(), 2);
        assert_eq!(source.errors.messages(), vec!["first", "second"]);
    }

    #[test]
    fn test_reporter_display() {
        let reporter = ErrorReporter::new();
        reporter.add_error(SyntaxError::new("no prefix parse function for ; found"));

        assert_eq!(
            reporter.to_string(),
            "ERROR: no prefix parse function for ; found\n"
        );
    }
}
