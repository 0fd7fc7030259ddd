use crate::domain::FieldAttr;

/// One offending attribute of one row, as reported by validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldIssue {
    pub index: usize,
    pub attr: FieldAttr,
}

/// Everything a failed validation pass has to say.
///
/// Issues that map onto a concrete row attribute land in `issues`; anything
/// the schema reports outside that shape is collected in `global`.
#[derive(Debug, Clone, Default)]
pub struct ValidationErrors {
    pub issues: Vec<FieldIssue>,
    pub global: Vec<String>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty() && self.global.is_empty()
    }

    pub fn issue_count(&self) -> usize {
        self.issues.len() + self.global.len()
    }

    pub fn issues_for(&self, index: usize) -> impl Iterator<Item = &FieldIssue> {
        self.issues.iter().filter(move |issue| issue.index == index)
    }

    pub fn has_issue(&self, index: usize, attr: FieldAttr) -> bool {
        self.issues
            .iter()
            .any(|issue| issue.index == index && issue.attr == attr)
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} validation issue(s)", self.issue_count())?;
        for issue in &self.issues {
            write!(f, "; row {} {}", issue.index, issue.attr.key())?;
        }
        for message in &self.global {
            write!(f, "; {message}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}
