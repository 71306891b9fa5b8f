use std::fmt;

/// Error codes for all script diagnostics.
///
/// Format: E#### where the first digit indicates the phase:
/// - E1xxx: Syntax errors (parser)
/// - E2xxx: Command resolution errors (compiler)
/// - E6xxx: Runtime errors (evaluator)
/// - Wxxxx: Warnings
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Syntax Errors (E1xxx)
    /// Token is neither a number, a symbol nor a call
    E1001,
    /// Unclosed parentheses
    E1002,
    /// Text after the closing parenthesis of a call
    E1003,
    /// Empty call argument
    E1004,
    /// Number literal that is not finite
    E1005,

    // Command Errors (E2xxx)
    /// Unknown command
    E2001,
    /// Wrong number of arguments
    E2002,

    // Runtime Errors (E6xxx)
    /// Undefined symbol
    E6001,
    /// Division by zero
    E6002,
    /// Type mismatch
    E6003,
    /// Integer overflow
    E6004,
    /// Invalid argument value
    E6005,

    // Warnings
    /// Script has no statements
    W1001,
}

impl ErrorCode {
    /// Check if this is a syntax error (E1xxx range).
    pub fn is_syntax_error(&self) -> bool {
        self.as_str().starts_with("E1")
    }

    /// Check if this is a runtime error (E6xxx range).
    pub fn is_runtime_error(&self) -> bool {
        self.as_str().starts_with("E6")
    }

    /// Check if this is a warning code (Wxxxx range).
    pub fn is_warning(&self) -> bool {
        self.as_str().starts_with('W')
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E1005 => "E1005",
            ErrorCode::E2001 => "E2001",
            ErrorCode::E2002 => "E2002",
            ErrorCode::E6001 => "E6001",
            ErrorCode::E6002 => "E6002",
            ErrorCode::E6003 => "E6003",
            ErrorCode::E6004 => "E6004",
            ErrorCode::E6005 => "E6005",
            ErrorCode::W1001 => "W1001",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
