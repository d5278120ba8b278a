use crate::build_planning::services::Violation;
use serde::Serialize;

/// Outcome of a single compatibility check, as handed to request-handling
/// collaborators. The reason is the human-readable rule message; it is
/// present exactly when the candidate was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompatibilityReport {
    pub compatible: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl CompatibilityReport {
    pub fn compatible() -> Self {
        Self {
            compatible: true,
            reason: None,
        }
    }

    pub fn incompatible(violation: &Violation) -> Self {
        Self {
            compatible: false,
            reason: Some(violation.to_string()),
        }
    }
}

/// Outcome of validating a whole parts list.
///
/// Missing required categories are reported one per entry so a consumer can
/// see exactly which gaps exist; a compatibility violation aborts validation
/// and is reported as a single entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub valid: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

impl ValidationReport {
    pub fn valid() -> Self {
        Self {
            valid: true,
            errors: vec![],
        }
    }

    pub fn invalid(errors: Vec<String>) -> Self {
        Self {
            valid: false,
            errors,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compatible_report_serializes_without_reason() {
        let report = CompatibilityReport::compatible();
        let json = serde_json::to_string(&report).unwrap();
        assert_eq!(json, r#"{"compatible":true}"#);
    }

    #[test]
    fn test_incompatible_report_carries_rule_message() {
        let violation = Violation::RamSpeedExceeded {
            speed: 5000,
            max: 4400,
        };
        let report = CompatibilityReport::incompatible(&violation);
        assert!(!report.compatible);
        assert!(report.reason.unwrap().contains("5000MHz"));
    }
}
