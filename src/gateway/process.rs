//! `std::process` implementation of the [`Gateway`] trait.

use super::Gateway;
use crate::domain::{GlocateError, Result};
use crate::Config;
use std::io::Write;
use std::process::{Child, Command, Output, Stdio};

/// Shell used to run ad-hoc filter commands.
const FILTER_SHELL: &str = "sh";

/// Gateway that runs real programs.
///
/// Program names come from [`Config`]: the search program receives
/// `-i -l <limit> <query>`, the copy command receives the text on stdin, and the
/// open command receives the path as its last argument.
#[derive(Debug, Clone)]
pub struct ProcessGateway {
    search_program: String,
    copy_command: Vec<String>,
    open_command: Vec<String>,
}

impl ProcessGateway {
    /// Creates a gateway using the programs configured in `config`.
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            search_program: config.search_program.clone(),
            copy_command: split_command(&config.copy_command),
            open_command: split_command(&config.open_command),
        }
    }
}

impl Gateway for ProcessGateway {
    fn search(&mut self, query: &str, limit: usize) -> Result<Vec<String>> {
        if query.is_empty() {
            return Ok(vec![]);
        }

        let _span = tracing::debug_span!("gateway_search", query = %query, limit).entered();

        let output = Command::new(&self.search_program)
            .arg("-i")
            .arg("-l")
            .arg(limit.to_string())
            .arg(query)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| GlocateError::from_spawn(&self.search_program, e))?;

        if output.status.success() {
            let lines = output_lines(&output.stdout);
            tracing::debug!(result_count = lines.len(), "search completed");
            return Ok(lines);
        }

        // locate signals "no match" with a bare exit status of 1.
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        if stderr.is_empty() && output.stdout.iter().all(u8::is_ascii_whitespace) {
            tracing::debug!(status = ?output.status.code(), "search found nothing");
            return Ok(vec![]);
        }

        tracing::warn!(status = ?output.status.code(), stderr = %stderr, "search failed");
        Err(GlocateError::CommandFailed {
            program: self.search_program.clone(),
            stderr,
        })
    }

    fn filter(&mut self, command: &str, input: &[String]) -> Result<Vec<String>> {
        let _span = tracing::debug_span!("gateway_filter", command = %command, input_len = input.len()).entered();

        let mut child = Command::new(FILTER_SHELL)
            .arg("-c")
            .arg(command)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| GlocateError::from_spawn(FILTER_SHELL, e))?;

        let payload = input.join("\n");
        let stdin = child.stdin.take();
        let feeder = std::thread::spawn(move || {
            if let Some(mut stdin) = stdin {
                // The command may exit without draining stdin; a broken pipe is fine.
                let _ = stdin.write_all(payload.as_bytes());
            }
        });

        let output: Output = child.wait_with_output()?;
        let _ = feeder.join();

        if output.status.success() {
            let lines = output_lines(&output.stdout);
            tracing::debug!(output_len = lines.len(), "filter completed");
            Ok(lines)
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            tracing::warn!(status = ?output.status.code(), stderr = %stderr, "filter failed");
            Err(GlocateError::CommandFailed {
                program: command.to_string(),
                stderr,
            })
        }
    }

    fn copy(&mut self, text: &str) -> bool {
        if text.is_empty() {
            return false;
        }
        let Some((program, args)) = self.copy_command.split_first() else {
            return false;
        };

        let result = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .and_then(|mut child| {
                if let Some(mut stdin) = child.stdin.take() {
                    stdin.write_all(text.as_bytes())?;
                }
                child.wait()
            });

        match result {
            Ok(status) if status.success() => true,
            Ok(status) => {
                tracing::warn!(program = %program, status = ?status.code(), "copy command failed");
                false
            }
            Err(e) => {
                tracing::warn!(program = %program, error = %e, "copy command could not run");
                false
            }
        }
    }

    fn copy_program(&self) -> &str {
        self.copy_command.first().map_or("", String::as_str)
    }

    fn open(&mut self, path: &str) {
        let Some((program, args)) = self.open_command.split_first() else {
            return;
        };
        match spawn_detached(program, args, path) {
            Ok(()) => tracing::debug!(program = %program, path = %path, "opener started"),
            Err(e) => tracing::warn!(program = %program, error = %e, "opener failed"),
        }
    }

    fn open_with(&mut self, command: &str, path: &str) -> Result<()> {
        let tokens = split_command(command);
        let Some((program, args)) = tokens.split_first() else {
            return Err(GlocateError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "empty command",
            )));
        };
        spawn_detached(program, args, path)?;
        tracing::debug!(command = %command, path = %path, "open-with started");
        Ok(())
    }
}

/// Splits a command string on whitespace into program and arguments.
fn split_command(command: &str) -> Vec<String> {
    command.split_whitespace().map(String::from).collect()
}

/// Converts captured output into lines, ignoring surrounding blank space.
fn output_lines(stdout: &[u8]) -> Vec<String> {
    let text = String::from_utf8_lossy(stdout);
    let trimmed = text.trim();
    if trimmed.is_empty() {
        vec![]
    } else {
        trimmed.split('\n').map(String::from).collect()
    }
}

/// Starts `program args.. path` with all stdio detached and reaps it on a
/// background thread.
fn spawn_detached(program: &str, args: &[String], path: &str) -> Result<()> {
    let child: Child = Command::new(program)
        .args(args)
        .arg(path)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| GlocateError::from_spawn(program, e))?;

    std::thread::spawn(move || {
        let mut child = child;
        let _ = child.wait();
    });
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gateway(search_program: &str, copy_command: &str) -> ProcessGateway {
        let config = Config {
            search_program: search_program.to_string(),
            copy_command: copy_command.to_string(),
            open_command: "true".to_string(),
            ..Config::default()
        };
        ProcessGateway::new(&config)
    }

    #[test]
    fn empty_query_does_not_invoke_search() {
        let mut gw = gateway("glocate-definitely-missing-program", "cat");
        assert_eq!(gw.search("", 50).unwrap(), Vec::<String>::new());
    }

    #[test]
    fn missing_search_program_is_reported() {
        let mut gw = gateway("glocate-definitely-missing-program", "cat");
        let err = gw.search("foo", 50).unwrap_err();
        assert!(matches!(err, GlocateError::CommandNotFound { .. }));
    }

    #[test]
    fn silent_nonzero_exit_means_no_results() {
        let mut gw = gateway("false", "cat");
        assert!(gw.search("foo", 50).unwrap().is_empty());
    }

    #[test]
    fn search_passes_limit_and_query_as_arguments() {
        let mut gw = gateway("echo", "cat");
        assert_eq!(gw.search("foo", 7).unwrap(), vec!["-i -l 7 foo".to_string()]);
    }

    #[test]
    fn filter_pipes_lines_through_shell() {
        let mut gw = gateway("locate", "cat");
        let input = vec!["/a/x.rs".to_string(), "/b/y.txt".to_string(), "/c/z.rs".to_string()];
        let out = gw.filter("grep '\\.rs$'", &input).unwrap();
        assert_eq!(out, vec!["/a/x.rs".to_string(), "/c/z.rs".to_string()]);
    }

    #[test]
    fn filter_with_no_output_returns_empty_list() {
        let mut gw = gateway("locate", "cat");
        let out = gw.filter("grep nothing-matches-this", &["/a".to_string()]);
        // grep exits 1 when nothing matches
        assert!(out.is_err());
        let out = gw.filter("grep nothing-matches-this; true", &["/a".to_string()]).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn filter_failure_carries_stderr() {
        let mut gw = gateway("locate", "cat");
        let err = gw.filter("echo boom >&2; exit 3", &["/a".to_string()]).unwrap_err();
        assert_eq!(err.to_string(), "boom");
    }

    #[test]
    fn filter_ignoring_stdin_still_succeeds() {
        let mut gw = gateway("locate", "cat");
        let input: Vec<String> = (0..20_000).map(|i| format!("/some/long/path/{i}")).collect();
        assert_eq!(gw.filter("echo done", &input).unwrap(), vec!["done".to_string()]);
    }

    #[test]
    fn copy_reports_success_and_failure() {
        assert!(gateway("locate", "cat").copy("/a/b"));
        assert!(!gateway("locate", "false").copy("/a/b"));
        assert!(!gateway("locate", "glocate-definitely-missing-program").copy("/a/b"));
        assert!(!gateway("locate", "cat").copy(""));
    }

    #[test]
    fn open_with_reports_spawn_failures() {
        let mut gw = gateway("locate", "cat");
        assert!(gw.open_with("true --flag", "/a/b").is_ok());
        assert!(gw.open_with("glocate-definitely-missing-program", "/a/b").is_err());
        assert!(gw.open_with("   ", "/a/b").is_err());
    }
}
