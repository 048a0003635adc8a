#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProblemSeverity {
    Error,
    Warning,
    Info,
}

impl ProblemSeverity {
    pub fn label(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    pub message: String,
    pub severity: ProblemSeverity,
}

/// Diagnostics list for the problems tab. Nothing feeds it yet; a linter hook would call
/// `replace`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProblemsState {
    items: Vec<Problem>,
}

impl ProblemsState {
    pub fn items(&self) -> &[Problem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn replace(&mut self, items: Vec<Problem>) -> bool {
        if self.items == items {
            return false;
        }
        self.items = items;
        true
    }

    pub fn count(&self, severity: ProblemSeverity) -> usize {
        self.items.iter().filter(|p| p.severity == severity).count()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/problems.rs"]
mod tests;
