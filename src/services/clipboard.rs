//! Clipboard access through the platform's copy helper

use std::io::Write;
use std::process::{Command, Stdio};

/// Something that can take text onto the system clipboard
pub trait Clipboard {
    fn copy(&mut self, text: &str) -> Result<(), String>;
}

/// Pipes text into the first copy helper that works on this platform
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl SystemClipboard {
    fn candidates() -> Vec<(&'static str, Vec<&'static str>)> {
        #[cfg(target_os = "macos")]
        {
            vec![("pbcopy", vec![])]
        }

        #[cfg(target_os = "windows")]
        {
            vec![("clip", vec![])]
        }

        #[cfg(not(any(target_os = "macos", target_os = "windows")))]
        {
            vec![
                ("wl-copy", vec![]),
                ("xclip", vec!["-selection", "clipboard"]),
                ("xsel", vec!["--clipboard", "--input"]),
            ]
        }
    }

    fn run(program: &str, args: &[&str], text: &str) -> Result<(), String> {
        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| format!("Failed to run {}: {}", program, e))?;

        // Stdin is dropped at the end of the match so the helper sees EOF
        let written = match child.stdin.take() {
            Some(mut stdin) => stdin.write_all(text.as_bytes()),
            None => Ok(()),
        };

        // Reap the helper even when the write failed
        let status = child
            .wait()
            .map_err(|e| format!("Failed to wait for {}: {}", program, e))?;
        written.map_err(|e| format!("Failed to write to {}: {}", program, e))?;
        if status.success() {
            Ok(())
        } else {
            Err(format!("{} exited with {}", program, status))
        }
    }
}

impl Clipboard for SystemClipboard {
    fn copy(&mut self, text: &str) -> Result<(), String> {
        let mut last_error = "No clipboard helper available".to_string();
        for (program, args) in Self::candidates() {
            match Self::run(program, &args, text) {
                Ok(()) => {
                    tracing::debug!("Copied {} bytes with {}", text.len(), program);
                    return Ok(());
                }
                Err(e) => last_error = e,
            }
        }
        Err(last_error)
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    #[test]
    fn test_helper_success() {
        assert_eq!(SystemClipboard::run("sh", &["-c", "cat > /dev/null"], "hello"), Ok(()));
    }

    #[test]
    fn test_helper_exit_status_is_reported() {
        let err = SystemClipboard::run("sh", &["-c", "cat > /dev/null; exit 3"], "hello").unwrap_err();
        assert!(err.starts_with("sh exited with"), "{}", err);
    }

    #[test]
    fn test_write_failure_still_waits_for_helper() {
        // The helper closes stdin at once, so a payload larger than the pipe
        // buffer cannot be written, then lingers before exiting
        let text = "x".repeat(1 << 20);
        let started = Instant::now();
        let err = SystemClipboard::run("sh", &["-c", "exec 0<&-; sleep 0.3"], &text).unwrap_err();

        assert!(err.starts_with("Failed to write to sh"), "{}", err);
        assert!(started.elapsed() >= Duration::from_millis(250));
    }

    #[test]
    fn test_missing_helper_fails_to_run() {
        let err = SystemClipboard::run("folio-no-such-helper", &[], "hello").unwrap_err();
        assert!(err.starts_with("Failed to run"), "{}", err);
    }
}
