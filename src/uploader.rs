use crate::cleanup::TempPolicyFile;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::preflight;
use std::io;
use std::process::Command;
use tracing::{debug, info, warn};

/// Result of a successful `cors set`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Applied {
    pub bucket_uri: String,
    pub stdout: String,
}

pub struct CorsUploader {
    config: Config,
}

impl CorsUploader {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn preflight(&self) -> Result<()> {
        if preflight::tool_available(&self.config.tool) {
            info!("{} found", self.config.tool);
            Ok(())
        } else {
            warn!("{} is not available", self.config.tool);
            Err(Error::ToolMissing {
                program: self.config.tool.clone(),
            })
        }
    }

    /// Writes the policy to the temp file and hands it to `<tool> cors set`.
    /// The temp file is gone by the time this returns, whatever the outcome.
    pub fn apply(&self) -> Result<Applied> {
        let json = self.config.policy.to_json()?;
        let policy_file = TempPolicyFile::create(&self.config.temp_file, &json)?;
        let bucket_uri = self.config.bucket_uri();

        info!("Uploading CORS configuration to {}", bucket_uri);
        let output = Command::new(&self.config.tool)
            .arg("cors")
            .arg("set")
            .arg(policy_file.path())
            .arg(&bucket_uri)
            .output()
            .map_err(|e| match e.kind() {
                io::ErrorKind::NotFound => Error::InvocationMissing {
                    program: self.config.tool.clone(),
                },
                _ => Error::from(e),
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
        debug!(status = %output.status, stdout = %stdout, stderr = %stderr, "cors set finished");

        if !output.status.success() {
            return Err(Error::ToolFailure {
                program: self.config.tool.clone(),
                status: output.status,
                stderr,
            });
        }

        Ok(Applied { bucket_uri, stdout })
    }
}
