//! Operator-facing console text for each outcome.

use crate::error::{Error, Result};
use crate::uploader::Applied;

pub const INSTALL_URL: &str = "https://cloud.google.com/sdk/docs/install";

pub fn banner() -> String {
    format!(
        "🚂 Firebase Storage CORS Configuration Uploader\n{}",
        "=".repeat(50)
    )
}

pub fn tool_found(program: &str) -> String {
    format!("✅ {} found. Proceeding with CORS upload...", program)
}

pub fn uploading(bucket: &str) -> String {
    format!("🚀 Uploading CORS configuration to bucket: {}", bucket)
}

/// Shown when preflight fails, before the process exits 1.
pub fn install_steps(program: &str) -> String {
    format!(
        "❌ {program} not found. Please install Google Cloud SDK first.\n\
         \n\
         📋 Installation steps:\n\
         1. Visit: {INSTALL_URL}\n\
         2. Download and install the SDK for your platform\n\
         3. Run 'gcloud auth login' to authenticate\n\
         4. Run this script again"
    )
}

pub fn outcome(result: &Result<Applied>) -> String {
    match result {
        Ok(_) => "✅ CORS configuration uploaded successfully!\n\
                  🔄 The changes may take a few minutes to take effect.\n\
                  💡 Try refreshing your web app after a few minutes."
            .to_string(),
        Err(Error::ToolFailure {
            program, stderr, ..
        }) => format!(
            "❌ Failed to upload CORS configuration:\n\
             Error: {stderr}\n\
             \n\
             💡 Make sure you have {program} installed and configured.\n   \
             Install Google Cloud SDK: {INSTALL_URL}"
        ),
        Err(Error::InvocationMissing { program }) | Err(Error::ToolMissing { program }) => {
            format!(
                "❌ {program} not found. Please install Google Cloud SDK:\n   \
                 {INSTALL_URL}\n\
                 \n\
                 💡 After installation, run 'gcloud auth login' to authenticate."
            )
        }
        Err(Error::Unexpected(msg)) => format!("❌ Unexpected error: {msg}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::process::Command;

    #[test]
    fn success_mentions_propagation_delay() {
        let text = outcome(&Ok(Applied {
            bucket_uri: "gs://b".into(),
            stdout: String::new(),
        }));
        assert!(text.contains("uploaded successfully"));
        assert!(text.contains("few minutes"));
    }

    #[cfg(unix)]
    #[test]
    fn failure_includes_captured_stderr() {
        let status = Command::new("false").status().unwrap();
        let text = outcome(&Err(Error::ToolFailure {
            program: "gsutil".into(),
            status,
            stderr: "AccessDeniedException: 403".into(),
        }));
        assert!(text.contains("Error: AccessDeniedException: 403"));
        assert!(text.contains(INSTALL_URL));
    }

    #[test]
    fn vanished_tool_has_its_own_message() {
        let text = outcome(&Err(Error::InvocationMissing {
            program: "gsutil".into(),
        }));
        assert!(text.starts_with("❌ gsutil not found. Please install Google Cloud SDK:"));
        assert!(text.contains("gcloud auth login"));
    }

    #[test]
    fn unexpected_carries_message() {
        let text = outcome(&Err(Error::Unexpected("disk full".into())));
        assert_eq!(text, "❌ Unexpected error: disk full");
    }

    #[test]
    fn install_steps_are_numbered() {
        let text = install_steps("gsutil");
        for step in ["1. Visit", "2. Download", "3. Run 'gcloud auth login'", "4. Run this"] {
            assert!(text.contains(step), "missing step {step:?}");
        }
    }
}
