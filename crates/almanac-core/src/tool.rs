use crate::error::AlmanacError;
use std::process::Command;

/// Captured output of a successful external tool run.
#[derive(Debug, Clone, Default)]
pub struct ToolOutput {
    pub stdout: String,
    pub stderr: String,
}

/// Run an external program to completion and turn its exit status into a `Result`.
///
/// A missing binary maps to `ToolNotFound`, a non-zero exit to `ToolFailed`
/// carrying the captured stderr.
pub fn run_tool(command: &mut Command) -> Result<ToolOutput, AlmanacError> {
    let program = command.get_program().to_string_lossy().to_string();
    tracing::debug!(?command, "running external tool");

    let output = command.output().map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            AlmanacError::ToolNotFound {
                program: program.clone(),
            }
        } else {
            AlmanacError::ToolSpawn {
                program: program.clone(),
                reason: e.to_string(),
            }
        }
    })?;

    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    if !output.status.success() {
        let code = output.status.code().unwrap_or(-1);
        return Err(AlmanacError::ToolFailed {
            program,
            code,
            stderr,
        });
    }

    Ok(ToolOutput {
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr,
    })
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn test_missing_program_is_not_found() {
        let err = run_tool(&mut Command::new("almanac-no-such-tool-xyz")).unwrap_err();
        assert!(matches!(err, AlmanacError::ToolNotFound { ref program } if program == "almanac-no-such-tool-xyz"));
    }

    #[test]
    fn test_nonzero_exit_is_failure_with_stderr() {
        let err = run_tool(Command::new("sh").args(["-c", "echo boom >&2; exit 3"])).unwrap_err();
        match err {
            AlmanacError::ToolFailed { code, stderr, .. } => {
                assert_eq!(code, 3);
                assert_eq!(stderr.trim(), "boom");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_stdout_captured() {
        let out = run_tool(Command::new("sh").args(["-c", "printf hello"])).unwrap();
        assert_eq!(out.stdout, "hello");
    }
}
