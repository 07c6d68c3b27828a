use std::process::Command;
use tracing::debug;

/// Returns true when `<program> version` can be spawned and exits 0.
/// A spawn failure of any kind counts as unavailable.
pub fn tool_available(program: &str) -> bool {
    let output = match Command::new(program).arg("version").output() {
        Ok(o) => o,
        Err(e) => {
            debug!("{} could not be spawned: {}", program, e);
            return false;
        }
    };

    if !output.status.success() {
        debug!("{} version exited with {}", program, output.status);
        return false;
    }
    true
}
