//! Checker configuration
//!
//! A [`CheckerConfig`] selects the lexical [`Dialect`], the [`Recovery`]
//! policy applied when a token does not match, and the recursion bound. The
//! CLI maps its flags one-to-one onto these fields.

/// Size of the fixed lexeme buffer of the original scanner, terminator included
pub const MAX_TOKEN_LENGTH: usize = 100;

/// Longest lexeme a token may carry; longer matches are truncated
pub const MAX_LEXEME_LEN: usize = MAX_TOKEN_LENGTH - 1;

/// Default bound on nested commands, factors and procedure declarations
pub const DEFAULT_MAX_NESTING: usize = 256;

/// Language dialect accepted by the lexer and checker.
///
/// `Legacy` scans exactly what the first implementation scanned: only
/// `program` is reserved and `:=` comes out as `COLON` followed by `EQUAL`.
/// `Standard` completes the reserved-word table and scans `:=`, leaving the
/// operator table and grammar untouched. `Extended` turns on everything the
/// grammar names but never used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Dialect {
    Legacy,
    #[default]
    Standard,
    Extended,
}

impl Dialect {
    /// Whether the full reserved-word table is active (otherwise only `program`)
    pub fn reserves_all_keywords(self) -> bool {
        !matches!(self, Dialect::Legacy)
    }

    /// Whether `:=` is scanned as a single `ASSIGN` token
    pub fn scans_assign(self) -> bool {
        !matches!(self, Dialect::Legacy)
    }

    /// Whether `<=`, `>=` and `<>` are in the operator table
    pub fn has_relational_pairs(self) -> bool {
        matches!(self, Dialect::Extended)
    }

    pub fn scans_real_literals(self) -> bool {
        matches!(self, Dialect::Extended)
    }

    /// Whether `{ ... }` comments are skipped
    pub fn skips_comments(self) -> bool {
        matches!(self, Dialect::Extended)
    }

    /// Whether a `var` section may hold more than one declaration group
    pub fn repeats_var_groups(self) -> bool {
        matches!(self, Dialect::Extended)
    }

    /// Whether procedure declarations and procedure-call commands are parsed
    pub fn has_procedures(self) -> bool {
        matches!(self, Dialect::Extended)
    }
}

/// What `match` does with the current token when its kind is wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Recovery {
    /// Report, then consume the offending token anyway
    #[default]
    Swallow,
    /// Report, then act as if the expected token had been present
    Insert,
}

impl Recovery {
    pub fn consumes_mismatch(self) -> bool {
        matches!(self, Recovery::Swallow)
    }
}

/// Settings for one check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckerConfig {
    pub dialect: Dialect,
    pub recovery: Recovery,
    pub max_nesting: usize,
}

impl CheckerConfig {
    pub fn new() -> Self {
        CheckerConfig {
            dialect: Dialect::default(),
            recovery: Recovery::default(),
            max_nesting: DEFAULT_MAX_NESTING,
        }
    }

    pub fn with_dialect(mut self, dialect: Dialect) -> Self {
        self.dialect = dialect;
        self
    }

    pub fn with_recovery(mut self, recovery: Recovery) -> Self {
        self.recovery = recovery;
        self
    }

    pub fn with_max_nesting(mut self, max_nesting: usize) -> Self {
        self.max_nesting = max_nesting;
        self
    }
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CheckerConfig::default();
        assert_eq!(config.dialect, Dialect::Standard);
        assert_eq!(config.recovery, Recovery::Swallow);
        assert_eq!(config.max_nesting, DEFAULT_MAX_NESTING);
    }

    #[test]
    fn test_legacy_dialect_is_narrowest() {
        let legacy = Dialect::Legacy;
        assert!(!legacy.reserves_all_keywords());
        assert!(!legacy.scans_assign());
        assert!(!legacy.has_relational_pairs());
        assert!(!legacy.has_procedures());

        let standard = Dialect::Standard;
        assert!(standard.reserves_all_keywords());
        assert!(standard.scans_assign());
        assert!(!standard.scans_real_literals());
        assert!(!standard.repeats_var_groups());
    }
}
