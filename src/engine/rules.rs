use crate::domain::report::{RuleFinding, RuleSeverity};

/// Rule file names checked by every run, in report order.
pub const RULE_FILE_NAMES: [&str; 2] = ["firestore.rules", "storage.rules"];

/// Literal pattern that opens a file to unauthenticated reads and writes.
pub const PUBLIC_READ_WRITE_PATTERN: &str = "allow read, write: if true";

/// Literal pattern that gates writes on an authenticated request.
pub const AUTHENTICATED_WRITE_PATTERN: &str = "allow write: if request.auth != null";

/// Literal pattern that opens writes unconditionally, overriding the
/// authenticated-write note.
pub const PUBLIC_WRITE_PATTERN: &str = "allow write: if true";

/// Scan one rule file's content for the fixed literal patterns.
///
/// Rule files are opaque text; no structured parsing happens here.
pub fn evaluate(file: &str, content: &str) -> Vec<RuleFinding> {
    let mut findings = Vec::new();

    if content.contains(PUBLIC_READ_WRITE_PATTERN) {
        findings.push(RuleFinding {
            severity: RuleSeverity::Critical,
            check: "public_read_write".to_string(),
            message: format!("{file} allows public read/write access!"),
        });
    }

    if content.contains(AUTHENTICATED_WRITE_PATTERN) && !content.contains(PUBLIC_WRITE_PATTERN) {
        findings.push(RuleFinding {
            severity: RuleSeverity::Info,
            check: "authenticated_write".to_string(),
            message: format!("{file} requires authentication for writes. Good."),
        });
    }

    findings
}
