//! Command execution utilities

use crate::config::ToolCommand;
use crate::error::{Result, StatusError};
use std::future::Future;
use std::path::Path;
use tokio::process::Command;

/// Runs an external tool and hands back its stdout.
///
/// The production implementation spawns real processes; tests swap in
/// scripted runners so no system utilities are needed.
pub trait CommandRunner {
    fn run(&self, tool: &ToolCommand) -> impl Future<Output = Result<String>> + Send;
}

/// Spawns tools as child processes
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    async fn run(&self, tool: &ToolCommand) -> Result<String> {
        run_command(&tool.program, &tool.args).await
    }
}

/// Execute a command and return stdout as a trimmed String
pub async fn run_command(program: &str, args: &[String]) -> Result<String> {
    let output = Command::new(program)
        .args(args)
        .kill_on_drop(true)
        .output()
        .await?;

    if !output.status.success() {
        return Err(StatusError::CommandFailed {
            program: program.to_string(),
            code: output.status.code(),
        });
    }

    let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if stdout.is_empty() {
        return Err(StatusError::EmptyOutput {
            program: program.to_string(),
        });
    }
    Ok(stdout)
}

/// Check if a command exists in PATH, or at the given path
pub fn command_exists(program: &str) -> bool {
    use std::env;

    if program.contains('/') {
        return Path::new(program).is_file();
    }

    if let Some(path) = env::var_os("PATH") {
        for dir in env::split_paths(&path) {
            if dir.join(program).is_file() {
                return true;
            }
        }
    }
    false
}
