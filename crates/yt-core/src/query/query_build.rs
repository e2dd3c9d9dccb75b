use crate::Diagnostic;

/// A filter expression plus whatever was skipped while assembling it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryBuild {
    pub query: String,
    pub diagnostics: Vec<Diagnostic>,
}

impl QueryBuild {
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}
