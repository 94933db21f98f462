use serde::Serialize;

/// Simulated round-trip latency before a submission is acknowledged.
pub(crate) const SUBMIT_LATENCY_MS: u64 = 900;

/// How long the success notice stays up before auto-dismissing.
pub(crate) const NOTICE_DISMISS_MS: u64 = 2500;

/// Typed submission payload. There is no server; the payload is logged as
/// JSON so a submission leaves a trace in the structured log.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct ContactSubmission {
    pub(crate) name: String,
    pub(crate) email: String,
    pub(crate) message: String,
}

#[cfg(test)]
mod tests {
    use super::ContactSubmission;

    #[test]
    fn given_submission_when_serialized_then_all_fields_are_present() {
        let submission = ContactSubmission {
            name: String::from("Ada"),
            email: String::from("ada@example.com"),
            message: String::from("hello"),
        };

        let json = serde_json::to_string(&submission)
            .expect("submission serializes");

        assert!(json.contains("\"name\":\"Ada\""));
        assert!(json.contains("\"email\":\"ada@example.com\""));
        assert!(json.contains("\"message\":\"hello\""));
    }
}
