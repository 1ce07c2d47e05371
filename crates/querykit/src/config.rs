/// Default truncation (in bytes) for logged SQL.
pub const DEFAULT_MAX_LOGGED_SQL_LENGTH: usize = 200;

/// Configuration for statement builders.
///
/// The defaults reject inconsistent insert rows and log every built statement at
/// `DEBUG` level on the `querykit.sql` target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuilderConfig {
    /// Reject insert rows whose column set differs from the first row.
    pub strict_insert_rows: bool,
    /// Whether built statements are logged.
    pub log_statements: bool,
    /// Truncate logged SQL (in bytes). `None` means no truncation.
    pub max_logged_sql_length: Option<usize>,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            strict_insert_rows: true,
            log_statements: true,
            max_logged_sql_length: Some(DEFAULT_MAX_LOGGED_SQL_LENGTH),
        }
    }
}

impl BuilderConfig {
    /// Create a new configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle insert row validation.
    ///
    /// When disabled, each row renders its own values in its own column order and a
    /// warning is logged for rows that disagree with the first row.
    pub fn strict_insert_rows(mut self, strict: bool) -> Self {
        self.strict_insert_rows = strict;
        self
    }

    /// Toggle statement logging.
    pub fn log_statements(mut self, enabled: bool) -> Self {
        self.log_statements = enabled;
        self
    }

    /// Set maximum logged SQL length.
    pub fn max_logged_sql_length(mut self, len: usize) -> Self {
        self.max_logged_sql_length = Some(len);
        self
    }

    /// Disable SQL truncation in logs.
    pub fn no_truncate(mut self) -> Self {
        self.max_logged_sql_length = None;
        self
    }
}
