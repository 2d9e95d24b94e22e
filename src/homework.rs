//! Homework response validation and status rendering

use serde_json::Value;

use crate::result::{PollError, Result};

/// Field holding the list of homework records in the API response.
const HOMEWORKS_KEY: &str = "homeworks";

/// Review status of a single homework.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum HomeworkStatus {
    Approved,
    Reviewing,
    Rejected,
}

impl HomeworkStatus {
    /// Parse the API status code; anything outside the fixed set is `None`.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "approved" => Some(Self::Approved),
            "reviewing" => Some(Self::Reviewing),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }

    /// Fixed human-readable verdict for this status.
    pub fn verdict(self) -> &'static str {
        match self {
            Self::Approved => "The review is done: the reviewer liked everything. Hooray!",
            Self::Reviewing => "The work was taken in for review.",
            Self::Rejected => "The review is done: the reviewer left remarks.",
        }
    }
}

/// Check the API response against the documented shape and pull out the
/// homework records.
///
/// An empty list is valid and means "no updates".
pub fn validate_response(response: &Value) -> Result<&[Value]> {
    let object = response
        .as_object()
        .ok_or_else(|| PollError::type_mismatch("response root", "an object"))?;

    let homeworks = object
        .get(HOMEWORKS_KEY)
        .ok_or(PollError::MissingKey { key: HOMEWORKS_KEY })?;

    homeworks
        .as_array()
        .map(Vec::as_slice)
        .ok_or_else(|| PollError::type_mismatch("`homeworks` field", "an array"))
}

/// Render one homework record into the notification text.
///
/// Status presence and validity are checked before the name; tests pin this
/// order down.
pub fn render_status(homework: &Value) -> Result<String> {
    let status = homework
        .get("status")
        .filter(|v| !v.is_null())
        .ok_or_else(|| PollError::status("missing status"))?;

    let status = status
        .as_str()
        .and_then(HomeworkStatus::from_code)
        .ok_or_else(|| PollError::status("unknown status"))?;

    let name = homework
        .get("homework_name")
        .and_then(Value::as_str)
        .ok_or_else(|| PollError::status("missing name"))?;

    Ok(format!(
        "Changed status for homework \"{name}\". {verdict}",
        verdict = status.verdict()
    ))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn validate_accepts_empty_homework_list() {
        let response = json!({ "homeworks": [] });
        let homeworks = validate_response(&response).expect("empty list is valid");
        assert!(homeworks.is_empty());
    }

    #[test]
    fn validate_rejects_non_object_root() {
        let response = json!("not-a-dict");
        assert!(matches!(
            validate_response(&response),
            Err(PollError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn validate_rejects_missing_homeworks_key() {
        let response = json!({ "current_date": 1_700_000_000 });
        assert!(matches!(
            validate_response(&response),
            Err(PollError::MissingKey { key: "homeworks" })
        ));
    }

    #[test]
    fn validate_rejects_non_list_homeworks() {
        let response = json!({ "homeworks": "not-a-list" });
        assert!(matches!(
            validate_response(&response),
            Err(PollError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn render_formats_approved_homework() {
        let record = json!({ "homework_name": "X", "status": "approved" });
        assert_eq!(
            render_status(&record).expect("valid record"),
            "Changed status for homework \"X\". \
             The review is done: the reviewer liked everything. Hooray!"
        );
    }

    #[test]
    fn render_is_deterministic() {
        let record = json!({ "homework_name": "hw42", "status": "rejected" });
        let first = render_status(&record).expect("valid record");
        let second = render_status(&record).expect("valid record");
        assert_eq!(first, second);
    }

    #[test]
    fn render_rejects_unknown_status() {
        let record = json!({ "homework_name": "X", "status": "unknown" });
        let err = render_status(&record).unwrap_err();
        assert!(matches!(&err, PollError::Status(m) if m == "unknown status"));
    }

    #[test]
    fn render_rejects_missing_status() {
        let record = json!({ "homework_name": "X" });
        let err = render_status(&record).unwrap_err();
        assert!(matches!(&err, PollError::Status(m) if m == "missing status"));
    }

    #[test]
    fn render_rejects_missing_name() {
        let record = json!({ "status": "reviewing" });
        let err = render_status(&record).unwrap_err();
        assert!(matches!(&err, PollError::Status(m) if m == "missing name"));
    }

    #[test]
    fn render_checks_status_before_name() {
        // A record that is broken both ways must report the status problem.
        let record = json!({ "status": "unheard-of" });
        let err = render_status(&record).unwrap_err();
        assert!(matches!(&err, PollError::Status(m) if m == "unknown status"));
    }

    #[test]
    fn every_status_code_round_trips_to_a_verdict() {
        for code in ["approved", "reviewing", "rejected"] {
            let status = HomeworkStatus::from_code(code).expect("known code");
            assert!(!status.verdict().is_empty());
        }
        assert_eq!(HomeworkStatus::from_code("APPROVED"), None);
    }
}
