//! Subprocess coordination for formatter steps.
//!
//! A formatter that receives more text than fits in the OS pipe buffer
//! starts writing output before it has read all of its input. If nobody
//! drains that output the process blocks, stops reading, and the writer
//! on our side blocks too. So the input is fed from one thread while
//! standard output and standard error are drained from two others, and
//! the call only returns once all three are finished and the process has
//! been waited on.

use std::{
    io::{self, Read, Write},
    process::{ChildStdin, Command, Stdio},
    thread,
};

use super::FormatterStep;
use crate::{Error, Result};

/// Run `input` through one formatter step and return what it printed.
///
/// Fails with [`Error::Formatter`] if the process cannot be spawned, exits
/// with a non-success status, or any of its streams fails. The error
/// carries the command line and whatever the process wrote to standard
/// error. No output is returned on failure. A step that exits successfully
/// without consuming all of its input is not a failure, whatever the input
/// size.
pub fn apply_formatter(step: &FormatterStep, input: &str) -> Result<String> {
    let command = step.command_line();
    let span = tracing::debug_span!("formatter", command = %command, input_bytes = input.len());
    let _entered = span.enter();

    let fail = |reason: String, stderr: String| Error::Formatter {
        command: command.clone(),
        reason,
        stderr,
    };

    let mut child = Command::new(&step.command)
        .args(&step.args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| fail(format!("failed to spawn: {e}"), String::new()))?;

    let (Some(stdin), Some(stdout), Some(stderr)) =
        (child.stdin.take(), child.stdout.take(), child.stderr.take())
    else {
        let _ = child.kill();
        let _ = child.wait();
        return Err(fail(
            "standard streams were not captured".to_string(),
            String::new(),
        ));
    };

    // Every handle is moved into the scope and dropped there, so the
    // process sees EOF on stdin and we hold no pipe by the time we wait.
    let (fed, output, diagnostics) = thread::scope(|scope| {
        let feeder = scope.spawn(move || feed(stdin, input));
        let error_drain = scope.spawn(move || drain(stderr));
        let output = drain(stdout);
        (settle(feeder.join()), output, settle(error_drain.join()))
    });

    let status = child
        .wait()
        .map_err(|e| fail(format!("failed to wait for process: {e}"), String::new()))?;

    let stderr = diagnostics
        .map(|bytes| String::from_utf8_lossy(&bytes).trim_end().to_string())
        .map_err(|e| fail(format!("failed to read standard error: {e}"), String::new()))?;

    if !status.success() {
        tracing::debug!(%status, "formatter exited unsuccessfully");
        return Err(fail(status.to_string(), stderr));
    }

    // A formatter that succeeds may exit before reading all of its input.
    match fed {
        Err(e) if e.kind() != io::ErrorKind::BrokenPipe => {
            return Err(fail(format!("failed to write standard input: {e}"), stderr));
        }
        _ => {}
    }
    let output = output
        .map_err(|e| fail(format!("failed to read standard output: {e}"), stderr.clone()))?;
    let text = String::from_utf8(output)
        .map_err(|e| fail(format!("standard output is not UTF-8: {e}"), stderr.clone()))?;

    tracing::debug!(output_bytes = text.len(), "formatter finished");
    Ok(text)
}

/// Run `input` through every step in order.
///
/// An empty step list returns the input unchanged. The first failing step
/// stops the pipeline.
pub fn run_pipeline(steps: &[FormatterStep], input: String) -> Result<String> {
    steps
        .iter()
        .try_fold(input, |text, step| apply_formatter(step, &text))
}

fn feed(mut stdin: ChildStdin, input: &str) -> io::Result<()> {
    stdin.write_all(input.as_bytes())?;
    stdin.flush()
}

fn drain(mut reader: impl Read) -> io::Result<Vec<u8>> {
    let mut buf = Vec::new();
    reader.read_to_end(&mut buf)?;
    Ok(buf)
}

fn settle<T>(joined: thread::Result<io::Result<T>>) -> io::Result<T> {
    joined.unwrap_or_else(|_| Err(io::Error::other("stream worker panicked")))
}
