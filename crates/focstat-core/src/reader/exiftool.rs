use super::{FocalLengthSource, Lookup};
use crate::config::ExifToolConfig;
use crate::error::Error;
use std::io::Read;
use std::path::Path;
use std::process::{Child, Command, Stdio};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, trace, warn};

const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Runs an external metadata utility once per file, by default
/// `exiftool -FocalLength -s3 <path>`, and reads the number it prints.
pub struct ExifToolSource {
    program: String,
    args: Vec<String>,
    timeout: Duration,
}

impl ExifToolSource {
    pub fn new(program: impl Into<String>, args: Vec<String>, timeout: Duration) -> Self {
        Self {
            program: program.into(),
            args,
            timeout,
        }
    }

    pub fn from_config(config: &ExifToolConfig) -> Self {
        Self::new(config.program.clone(), config.args.clone(), config.timeout())
    }

    fn run(&self, path: &Path) -> Result<String, Error> {
        let deadline = Instant::now() + self.timeout;
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .arg(path)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()?;

        // Drain stdout while the child runs so a full pipe cannot block it.
        let (tx, rx) = mpsc::channel();
        if let Some(mut out) = child.stdout.take() {
            thread::spawn(move || {
                let mut buf = Vec::new();
                let result = out.read_to_end(&mut buf).map(|_| buf);
                tx.send(result).ok();
            });
        }

        let status = match wait_until(&mut child, deadline)? {
            Some(status) => status,
            None => {
                child.kill().ok();
                child.wait().ok();
                warn!(
                    "{} timed out after {}ms on {}",
                    self.program,
                    self.timeout.as_millis(),
                    path.display()
                );
                return Err(Error::Tool(format!("timed out on {}", path.display())));
            }
        };

        if !status.success() {
            return Err(Error::Tool(format!(
                "{} exited with {} on {}",
                self.program,
                status,
                path.display()
            )));
        }

        let remaining = deadline.saturating_duration_since(Instant::now());
        let bytes = match rx.recv_timeout(remaining.max(POLL_INTERVAL)) {
            Ok(result) => result?,
            Err(_) => {
                return Err(Error::Tool(format!(
                    "{} left stdout open on {}",
                    self.program,
                    path.display()
                )))
            }
        };
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

impl FocalLengthSource for ExifToolSource {
    fn name(&self) -> &str {
        &self.program
    }

    fn lookup(&self, path: &Path) -> Lookup {
        match self.run(path) {
            Ok(stdout) => match parse_tool_output(&stdout) {
                Some(mm) => Lookup::Found(mm),
                None => {
                    trace!("{}: unusable output {:?}", path.display(), stdout.trim());
                    Lookup::NotFound
                }
            },
            Err(e) => {
                debug!("{}: {}", path.display(), e);
                Lookup::NotFound
            }
        }
    }
}

/// Parses the first whitespace-separated token, so `"24.0 mm"` reads as 24.0.
pub fn parse_tool_output(stdout: &str) -> Option<f64> {
    stdout
        .split_whitespace()
        .next()
        .and_then(|token| token.parse::<f64>().ok())
        .filter(|mm| mm.is_finite())
}

fn wait_until(
    child: &mut Child,
    deadline: Instant,
) -> std::io::Result<Option<std::process::ExitStatus>> {
    loop {
        if let Some(status) = child.try_wait()? {
            return Ok(Some(status));
        }
        if Instant::now() >= deadline {
            return Ok(None);
        }
        thread::sleep(POLL_INTERVAL);
    }
}
