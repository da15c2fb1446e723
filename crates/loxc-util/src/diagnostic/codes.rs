//! Diagnostic codes, one family per pipeline phase (§7 in the spec:
//! LexError / ParseError / ResolveError / RuntimeError).

/// A unique code identifying a diagnostic, formatted as `{prefix}{number:04}`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiagnosticCode {
    pub prefix: &'static str,
    pub number: u32,
}

impl DiagnosticCode {
    #[inline]
    pub const fn new(prefix: &'static str, number: u32) -> Self {
        Self { prefix, number }
    }

    pub fn as_str(&self) -> String {
        format!("{}{:04}", self.prefix, self.number)
    }

    // Lexer: E1xxx
    pub const E_LEX_UNEXPECTED_CHAR: Self = Self::new("E", 1001);
    pub const E_LEX_UNTERMINATED_STRING: Self = Self::new("E", 1002);

    // Parser: E2xxx
    pub const E_PARSE_EXPECTED_TOKEN: Self = Self::new("E", 2001);
    pub const E_PARSE_INVALID_ASSIGN_TARGET: Self = Self::new("E", 2002);
    pub const E_PARSE_TOO_MANY_ARGS: Self = Self::new("E", 2003);

    // Resolver: E3xxx
    pub const E_RESOLVE_SELF_REFERENTIAL_INIT: Self = Self::new("E", 3001);
    pub const E_RESOLVE_DUPLICATE_LOCAL: Self = Self::new("E", 3002);
    pub const E_RESOLVE_RETURN_OUTSIDE_FUNCTION: Self = Self::new("E", 3003);
    pub const E_RESOLVE_RETURN_VALUE_FROM_INIT: Self = Self::new("E", 3004);
    pub const E_RESOLVE_THIS_OUTSIDE_CLASS: Self = Self::new("E", 3005);
    pub const E_RESOLVE_SUPER_MISUSE: Self = Self::new("E", 3006);
    pub const E_RESOLVE_CLASS_INHERITS_SELF: Self = Self::new("E", 3007);

    // Interpreter: E4xxx
    pub const E_RUNTIME_TYPE_MISMATCH: Self = Self::new("E", 4001);
    pub const E_RUNTIME_UNDEFINED_VARIABLE: Self = Self::new("E", 4002);
    pub const E_RUNTIME_NOT_CALLABLE: Self = Self::new("E", 4003);
    pub const E_RUNTIME_ARITY_MISMATCH: Self = Self::new("E", 4004);
    pub const E_RUNTIME_NOT_AN_INSTANCE: Self = Self::new("E", 4005);
    pub const E_RUNTIME_UNDEFINED_PROPERTY: Self = Self::new("E", 4006);
    pub const E_RUNTIME_UNDEFINED_SUPER_METHOD: Self = Self::new("E", 4007);
}

impl std::fmt::Debug for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DiagnosticCode({})", self.as_str())
    }
}

impl std::fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_with_zero_padding() {
        assert_eq!(DiagnosticCode::E_LEX_UNEXPECTED_CHAR.as_str(), "E1001");
    }

    #[test]
    fn display_matches_as_str() {
        let code = DiagnosticCode::E_RUNTIME_NOT_CALLABLE;
        assert_eq!(format!("{code}"), code.as_str());
    }
}
