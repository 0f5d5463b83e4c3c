//! Start/stop side effects for a single artifact.
//!
//! Neither transition mutates the record it was given; both only change the
//! OS process table. The displayed state is correct again after the next
//! scan+correlate pass.

use std::process::{Command, Stdio};

use crate::artifact::ArtifactRecord;
use crate::config::RuntimeConfig;
use crate::prelude::*;

/// Argv for launching an artifact, kept separate from the spawn so the exact
/// invocation can be asserted in tests.
fn start_argv(runtime: &RuntimeConfig, record: &ArtifactRecord) -> Vec<String> {
    vec![
        runtime.java_bin.clone(),
        runtime.heap_flag.clone(),
        "-jar".to_string(),
        record.path.display().to_string(),
    ]
}

/// Launch the artifact detached: its own process group, stdio discarded and
/// the child handle dropped without waiting, so it outlives this program.
/// Only the launch itself is confirmed; whether the artifact initializes
/// successfully is not observed.
pub fn start(runtime: &RuntimeConfig, record: &ArtifactRecord) -> Result<()> {
    let argv = start_argv(runtime, record);
    debug!("Running command: {}", argv.join(" "));

    let mut command = Command::new(&argv[0]);
    command
        .args(&argv[1..])
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());
    #[cfg(unix)]
    {
        use std::os::unix::process::CommandExt;
        // Own process group: the artifact must not receive this program's
        // terminal signals.
        command.process_group(0);
    }

    let child = command
        .spawn()
        .with_context(|| format!("Failed to launch {}", record.name))?;
    info!("Launched {} (pid {})", record.name, child.id());
    Ok(())
}

/// Terminate the process correlated to a running artifact via `kill`.
/// A record with no correlated process is rejected before any OS call.
pub fn stop(record: &ArtifactRecord) -> Result<()> {
    let Some(pid) = record.pid() else {
        bail!("{} has no correlated process to stop", record.name);
    };

    debug!("Running command: kill {}", pid);
    let output = Command::new("kill")
        .arg(pid)
        .output()
        .context("Failed to run `kill`")?;
    if !output.status.success() {
        bail!(
            "`kill {}` exited with {}: {}",
            pid,
            output.status,
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }

    info!("Sent termination signal to {} (pid {})", record.name, pid);
    Ok(())
}

/// Flip the artifact between running and stopped, based on its correlation.
pub fn toggle(runtime: &RuntimeConfig, record: &ArtifactRecord) -> Result<()> {
    if record.running() {
        stop(record)
    } else {
        start(runtime, record)
    }
}
