//! OCI CLI command execution.
//!
//! Runs `oci` subcommands and returns their stdout.

use crate::config;
use colored::Colorize;
use regex::Regex;
use std::error::Error;
use std::io::Read;
use std::process::{Command, Stdio};
use std::sync::OnceLock;
use std::thread;

/// Regex for splitting command strings while preserving quoted substrings.
static COMMAND_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_command_regex() -> &'static Regex {
    COMMAND_REGEX.get_or_init(|| {
        Regex::new(r#"'([^']*)'\s*|\"([^\"]*)\"\s*|([^'\s]*)\s*"#).expect("Invalid Regex")
    })
}

/// Run `argv` (program first) and return its stdout.
///
/// Arguments go to the program unchanged, no shell or splitting involved.
///
/// # Returns
/// * `Ok(String)` - stdout on success (may be empty)
/// * `Err` - the program could not start, exited non-zero, or printed more
///   than [`config::MAX_OUTPUT_BYTES`]
pub fn run(argv: &[String]) -> Result<String, Box<dyn Error>> {
    run_with_limit(argv, config::MAX_OUTPUT_BYTES)
}

/// [`run`] with an explicit stdout limit. At most `max_bytes + 1` bytes of
/// stdout are ever held in memory; the child is killed past that.
fn run_with_limit(argv: &[String], max_bytes: usize) -> Result<String, Box<dyn Error>> {
    let cmd = argv.join(" ");
    log::debug!("run({cmd})", cmd = cmd.on_blue());

    let (program, args) = argv
        .split_first()
        .filter(|(p, _)| !p.is_empty())
        .ok_or("Empty command")?;

    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| {
            log::error!("Command execution failed: {}", e);
            format!("Failed to execute {program}: {e}")
        })?;

    // Drain stderr on the side so a chatty child cannot block on a full pipe.
    let stderr_reader = child.stderr.take().map(|mut pipe| {
        thread::spawn(move || {
            let mut buf = Vec::new();
            let _ = pipe.read_to_end(&mut buf);
            buf
        })
    });

    let mut stdout = Vec::new();
    if let Some(pipe) = child.stdout.take() {
        pipe.take(max_bytes as u64 + 1)
            .read_to_end(&mut stdout)
            .map_err(|e| format!("Error reading output of {program}: {e}"))?;
    }
    if stdout.len() > max_bytes {
        let _ = child.kill();
        let _ = child.wait();
        return Err(format!(
            "Response too large: over {max_bytes} bytes for command: {:?}",
            argv
        )
        .into());
    }

    let status = child
        .wait()
        .map_err(|e| format!("Error waiting for {program}: {e}"))?;
    let stderr = stderr_reader
        .and_then(|reader| reader.join().ok())
        .unwrap_or_default();

    if !status.success() {
        let stderr = String::from_utf8_lossy(&stderr);
        log::trace!(
            "code={code:?}, status={status}\n┎######\nstderr=\n{stderr}\n┖######",
            code = status.code(),
            stderr = stderr.red()
        );
        log::warn!(
            "{failed} to run {cmd}",
            failed = "failed".on_red(),
            cmd = cmd.on_blue()
        );
        return Err(format!("{program} exited with {status}: {}", stderr.trim()).into());
    }

    log::debug!("Success output.stdout.len(): {}", stdout.len());
    let stdout = String::from_utf8(stdout).map_err(|e| format!("Invalid UTF-8: {}", e))?;
    Ok(stdout)
}

/// Split a literal command string on spaces, preserving quoted substrings.
pub(crate) fn split_and_strip(input: &str) -> Vec<&str> {
    get_command_regex()
        .find_iter(input)
        .map(|m| m.as_str().trim().trim_matches('\'').trim_matches('"'))
        .collect()
}
