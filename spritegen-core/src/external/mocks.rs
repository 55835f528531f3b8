// spritegen-core/src/external/mocks.rs

// --- Mocking Infrastructure (for testing) ---

// Compiled for this crate's unit tests only. Exit codes are built from raw
// wait statuses, so this module is unix-only.

use super::*;
use crate::error::{CoreError, CoreResult};
use ffmpeg_sidecar::command::FfmpegCommand;
use ffmpeg_sidecar::event::FfmpegEvent;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::os::unix::process::ExitStatusExt;
use std::path::{Path, PathBuf};
use std::process::ExitStatus;
use std::rc::Rc;

// --- Duration probing ---

/// Mock `DurationProber` answering from a table keyed by path.
#[derive(Clone, Default)]
pub struct MockDurationProber {
    durations: Rc<RefCell<HashMap<PathBuf, CoreResult<f64>>>>,
    calls: Rc<RefCell<Vec<PathBuf>>>,
}

impl MockDurationProber {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn expect_duration(&self, path: &Path, duration: f64) {
        self.durations
            .borrow_mut()
            .insert(path.to_path_buf(), Ok(duration));
    }

    pub fn expect_error(&self, path: &Path, error: CoreError) {
        self.durations
            .borrow_mut()
            .insert(path.to_path_buf(), Err(error));
    }

    pub fn get_calls(&self) -> Vec<PathBuf> {
        self.calls.borrow().clone()
    }
}

impl DurationProber for MockDurationProber {
    fn probe_duration(&self, input_path: &Path) -> CoreResult<f64> {
        self.calls.borrow_mut().push(input_path.to_path_buf());
        // Errors are not Clone, so a stored error is handed out once.
        let entry = self.durations.borrow_mut().remove(input_path);
        match entry {
            Some(Ok(duration)) => {
                self.durations
                    .borrow_mut()
                    .insert(input_path.to_path_buf(), Ok(duration));
                Ok(duration)
            }
            Some(Err(e)) => Err(e),
            None => Err(CoreError::FfprobeParse(format!(
                "no mock duration registered for {}",
                input_path.display()
            ))),
        }
    }
}

// --- FFmpeg ---

/// Mock implementation of FfmpegProcess.
#[derive(Clone)]
pub struct MockFfmpegProcess {
    /// Events to emit when handle_events is called.
    pub events_to_emit: Rc<RefCell<Vec<FfmpegEvent>>>,
    /// Exit status to return when wait is called.
    pub exit_status: ExitStatus,
}

impl FfmpegProcess for MockFfmpegProcess {
    fn handle_events<F>(&mut self, mut handler: F) -> CoreResult<()>
    where
        F: FnMut(FfmpegEvent) -> CoreResult<()>,
    {
        let events = self.events_to_emit.borrow().clone();
        for event in events {
            handler(event)?;
        }
        Ok(())
    }

    fn wait(&mut self) -> CoreResult<ExitStatus> {
        Ok(self.exit_status)
    }
}

/// Represents an expected ffmpeg command call and its mock result.
pub struct MockFfmpegExpectation {
    pub arg_pattern: String,
    pub result: CoreResult<MockFfmpegProcess>,
    /// Write a placeholder file at the output path (the last argument).
    pub create_dummy_output: bool,
}

/// Mock implementation of FfmpegSpawner supporting multiple expectations.
///
/// Expectations are consumed in order of registration; the first one whose
/// pattern appears in any argument matches.
#[derive(Clone, Default)]
pub struct MockFfmpegSpawner {
    expectations: Rc<RefCell<Vec<MockFfmpegExpectation>>>,
    received_calls: Rc<RefCell<Vec<Vec<String>>>>,
}

impl MockFfmpegSpawner {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn add_expectation(
        &self,
        arg_pattern: &str,
        result: CoreResult<MockFfmpegProcess>,
        create_dummy_output: bool,
    ) {
        self.expectations.borrow_mut().push(MockFfmpegExpectation {
            arg_pattern: arg_pattern.to_string(),
            result,
            create_dummy_output,
        });
    }

    pub fn add_success_expectation(
        &self,
        arg_pattern: &str,
        events: Vec<FfmpegEvent>,
        create_dummy_output: bool,
    ) {
        let process = MockFfmpegProcess {
            events_to_emit: Rc::new(RefCell::new(events)),
            exit_status: ExitStatus::from_raw(0),
        };
        self.add_expectation(arg_pattern, Ok(process), create_dummy_output);
    }

    pub fn add_spawn_error_expectation(&self, arg_pattern: &str, error: CoreError) {
        self.add_expectation(arg_pattern, Err(error), false);
    }

    /// Fails with `exit_code`; `create_dummy_output` simulates a partial file.
    pub fn add_exit_error_expectation(
        &self,
        arg_pattern: &str,
        events: Vec<FfmpegEvent>,
        exit_code: i32,
        create_dummy_output: bool,
    ) {
        let process = MockFfmpegProcess {
            events_to_emit: Rc::new(RefCell::new(events)),
            exit_status: ExitStatus::from_raw(exit_code << 8),
        };
        self.add_expectation(arg_pattern, Ok(process), create_dummy_output);
    }

    pub fn get_received_calls(&self) -> Vec<Vec<String>> {
        self.received_calls.borrow().clone()
    }
}

impl FfmpegSpawner for MockFfmpegSpawner {
    type Process = MockFfmpegProcess;

    fn spawn(&self, mut cmd: FfmpegCommand) -> CoreResult<Self::Process> {
        let args: Vec<String> = cmd
            .as_inner()
            .get_args()
            .map(|s| s.to_string_lossy().into_owned())
            .collect();
        self.received_calls.borrow_mut().push(args.clone());

        let mut expectations = self.expectations.borrow_mut();
        let index = expectations
            .iter()
            .position(|exp| args.iter().any(|a| a.contains(&exp.arg_pattern)))
            .ok_or_else(|| {
                CoreError::OperationFailed(format!("unexpected ffmpeg call: {args:?}"))
            })?;
        let expectation = expectations.remove(index);

        if expectation.create_dummy_output {
            if let Some(output) = args.last() {
                log::debug!("Mock ffmpeg writing dummy output to {output}");
                fs::write(output, b"mock sprite")?;
            }
        }

        expectation.result
    }
}

// --- Fake binaries ---

/// Writes an executable shell script `name` into `dir` running `body`.
///
/// Stands in for ffmpeg or ffprobe so the real process paths can be driven.
pub fn write_fake_tool(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, format!("#!/bin/sh\n{body}\n")).expect("write fake tool");
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).expect("chmod fake tool");
    path
}
