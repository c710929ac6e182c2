//! Invocation of the external manual renderer.

use std::io::{ErrorKind, Read};
use std::process::{Command, Stdio};
use std::thread::JoinHandle;
use std::time::Duration;

use tracing::{debug, info};
use wait_timeout::ChildExt;

use crate::error::SourceError;
use crate::normalize::normalize_rendered;

/// Timeout for renderer invocations (milliseconds).
const RENDER_TIMEOUT_MS: u64 = 5000;

/// Environment overrides keeping the renderer non-interactive: no pager
/// takeover, no terminal modes, no color escapes.
const RENDER_ENV: &[(&str, &str)] = &[
    ("PAGER", "cat"),
    ("MANPAGER", "cat"),
    ("TERM", "dumb"),
    ("NO_COLOR", "1"),
];

/// Supplies rendered manual text given a page identity or an apropos query.
///
/// The seam between the analyzers and the external renderer. Callers own
/// the returned text; analyzer spans address it exactly as returned here.
pub trait ManualSource {
    /// Renders one page, addressed by name and section.
    fn fetch_page(&self, name: &str, section: &str) -> Result<String, SourceError>;

    /// Runs the keyword-search mode with an empty query and returns each
    /// output line, one apropos entry per line.
    fn list_all(&self) -> Result<Vec<String>, SourceError>;
}

/// [`ManualSource`] implementation over the `man` binary.
#[derive(Debug, Clone)]
pub struct ManRunner {
    program: String,
    timeout_ms: u64,
}

impl Default for ManRunner {
    fn default() -> Self {
        Self {
            program: "man".to_string(),
            timeout_ms: RENDER_TIMEOUT_MS,
        }
    }
}

impl ManRunner {
    /// Substitutes another renderer binary, mainly for tests.
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            ..Self::default()
        }
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    fn run(&self, args: &[&str]) -> Result<String, SourceError> {
        debug!(program = %self.program, args = ?args, "invoking manual renderer");
        let mut command = Command::new(&self.program);
        command
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        for (key, value) in RENDER_ENV {
            command.env(key, value);
        }

        let mut child = command.spawn().map_err(|err| {
            if err.kind() == ErrorKind::NotFound {
                SourceError::RendererUnavailable(err)
            } else {
                SourceError::Io(err)
            }
        })?;

        // Drain both pipes on reader threads so a page larger than the pipe
        // buffer cannot deadlock the wait below.
        let stdout_thread = child.stdout.take().map(spawn_reader);
        let stderr_thread = child.stderr.take().map(spawn_reader);

        let timeout = Duration::from_millis(self.timeout_ms);
        let status = match child.wait_timeout(timeout)? {
            Some(status) => status,
            None => {
                debug!(
                    program = %self.program,
                    timeout_ms = self.timeout_ms,
                    "renderer timed out, killing process"
                );
                let _ = child.kill();
                let _ = child.wait();
                return Err(SourceError::Timeout(self.timeout_ms));
            }
        };

        let stdout = join_reader(stdout_thread);
        let stderr = join_reader(stderr_thread);

        if !status.success() {
            return Err(SourceError::RendererFailed {
                status: status.code().unwrap_or(-1),
                stderr: String::from_utf8_lossy(&stderr).trim_end().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&stdout).into_owned())
    }
}

impl ManualSource for ManRunner {
    fn fetch_page(&self, name: &str, section: &str) -> Result<String, SourceError> {
        let rendered = self.run(&[section, name])?;
        info!(name, section, length = rendered.len(), "rendered manual page");
        Ok(normalize_rendered(&rendered))
    }

    fn list_all(&self) -> Result<Vec<String>, SourceError> {
        let output = self.run(&["-k", ""])?;
        Ok(output.lines().map(str::to_string).collect())
    }
}

fn spawn_reader<R: Read + Send + 'static>(mut pipe: R) -> JoinHandle<Vec<u8>> {
    std::thread::spawn(move || {
        let mut buf = Vec::new();
        let _ = pipe.read_to_end(&mut buf);
        buf
    })
}

fn join_reader(handle: Option<JoinHandle<Vec<u8>>>) -> Vec<u8> {
    handle.and_then(|h| h.join().ok()).unwrap_or_default()
}
