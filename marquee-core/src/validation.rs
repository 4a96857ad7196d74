use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    Missing,
    Invalid,
}

/// One missing or malformed field, identified the way the form names it
/// (`name`, `tiers[1].price`, `pricing`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FieldIssue {
    pub field: String,
    pub kind: IssueKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl FieldIssue {
    pub fn missing(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            kind: IssueKind::Missing,
            reason: None,
        }
    }

    pub fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            kind: IssueKind::Invalid,
            reason: Some(reason.into()),
        }
    }
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.kind, &self.reason) {
            (IssueKind::Missing, _) => write!(f, "{} is required", self.field),
            (IssueKind::Invalid, Some(reason)) => write!(f, "{} is invalid: {}", self.field, reason),
            (IssueKind::Invalid, None) => write!(f, "{} is invalid", self.field),
        }
    }
}

/// Every problem found in one submission, not just the first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationError {
    pub issues: Vec<FieldIssue>,
}

impl ValidationError {
    pub fn single(field: impl Into<String>, kind: IssueKind) -> Self {
        Self {
            issues: vec![FieldIssue {
                field: field.into(),
                kind,
                reason: None,
            }],
        }
    }

    pub fn push(&mut self, issue: FieldIssue) {
        self.issues.push(issue);
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn fields(&self) -> Vec<&str> {
        self.issues.iter().map(|i| i.field.as_str()).collect()
    }

    /// `Ok(())` when nothing was recorded
    pub fn into_result(self) -> Result<(), ValidationError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Validation failed: ")?;
        for (i, issue) in self.issues.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}", issue)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}
