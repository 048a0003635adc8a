/// Append-only lines shown verbatim in the bottom panel's terminal tab.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TerminalLog {
    lines: Vec<String>,
}

impl TerminalLog {
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn contains(&self, line: &str) -> bool {
        self.lines.iter().any(|l| l == line)
    }

    pub fn clear(&mut self) -> bool {
        if self.lines.is_empty() {
            return false;
        }
        self.lines.clear();
        true
    }
}
