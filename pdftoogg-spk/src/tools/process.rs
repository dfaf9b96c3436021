//! Runs tools as child processes

use crate::error::ConvertError;
use crate::tools::{Invocation, ToolRunner};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tracing::debug;

/// Child-process runner with an optional per-call timeout.
///
/// A child that outlives the timeout is killed.
#[derive(Debug, Clone, Default)]
pub struct ProcessRunner {
    timeout: Option<Duration>,
}

impl ProcessRunner {
    pub fn new(timeout: Option<Duration>) -> Self {
        Self { timeout }
    }
}

#[async_trait]
impl ToolRunner for ProcessRunner {
    async fn run(&self, invocation: &Invocation) -> Result<(), ConvertError> {
        let program = invocation.program_name();
        debug!(
            "Running {} ({}) with {} arguments",
            invocation.tool,
            program,
            invocation.args.len()
        );

        let mut cmd = Command::new(&invocation.program);
        cmd.args(&invocation.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        let output = match self.timeout {
            Some(limit) => tokio::time::timeout(limit, cmd.output())
                .await
                .map_err(|_| ConvertError::ToolTimeout {
                    tool: invocation.tool,
                    program: program.clone(),
                    secs: limit.as_secs(),
                })?,
            None => cmd.output().await,
        }
        .map_err(|source| ConvertError::ToolLaunch {
            tool: invocation.tool,
            program: program.clone(),
            source,
        })?;

        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        if !output.status.success() {
            return Err(ConvertError::ToolFailed {
                tool: invocation.tool,
                program,
                code: output.status.code(),
                stderr,
            });
        }

        if !stderr.is_empty() {
            debug!("{} ({}) stderr: {}", invocation.tool, program, stderr);
        }

        Ok(())
    }

    fn is_available(&self, program: &Path) -> bool {
        resolve_program(program).is_some()
    }
}

/// Find `program` the way a shell would: as given when it contains a path
/// separator, otherwise in each `PATH` entry.
pub fn resolve_program(program: &Path) -> Option<PathBuf> {
    if program.components().count() > 1 || program.is_absolute() {
        return is_executable(program).then(|| program.to_path_buf());
    }

    let path_var = std::env::var_os("PATH")?;
    std::env::split_paths(&path_var)
        .map(|dir| dir.join(program))
        .find(|candidate| is_executable(candidate))
}

fn is_executable(path: &Path) -> bool {
    std::fs::metadata(path)
        .map(|m| {
            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                m.is_file() && m.permissions().mode() & 0o111 != 0
            }
            #[cfg(not(unix))]
            {
                m.is_file()
            }
        })
        .unwrap_or(false)
}
