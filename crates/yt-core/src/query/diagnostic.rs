use std::fmt;

/// Non-fatal problem found while building a query; the caller decides how to surface it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A sprint was requested but no board is configured, so the clause was dropped
    SprintFilterSkipped { sprint: String },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::SprintFilterSkipped { sprint } => write!(
                f,
                "board not configured, cannot filter by sprint '{sprint}'"
            ),
        }
    }
}
