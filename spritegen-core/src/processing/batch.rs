//! Sequential batch driver.
//!
//! Files are processed one at a time in the order given. A failure is
//! logged and recorded, and the next file is still attempted.

use crate::config::BatchConfig;
use crate::discovery::sprite_output_path;
use crate::error::{CoreError, CoreResult};
use crate::external::{DurationProber, FfmpegSpawner};
use crate::processing::sprite::{SpriteResult, generate_sprite};

use log::error;

use std::path::{Path, PathBuf};

/// A file that produced no sprite sheet, and why.
#[derive(Debug)]
pub struct FileFailure {
    pub input_path: PathBuf,
    pub error: CoreError,
}

/// Per-file outcomes of a batch run.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub generated: Vec<SpriteResult>,
    pub failed: Vec<FileFailure>,
}

impl BatchReport {
    pub fn total(&self) -> usize {
        self.generated.len() + self.failed.len()
    }

    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty()
    }
}

/// Generates a sprite sheet for every file in `files`.
///
/// Output names are derived from each input with
/// [`sprite_output_path`] under `config.output_dir`. The `on_generated`
/// callback runs after each successful file, before the next one starts.
///
/// # Errors
///
/// Only an invalid `config` is returned as an error; per-file problems end
/// up in [`BatchReport::failed`].
pub fn process_videos<P, S, F>(
    prober: &P,
    spawner: &S,
    config: &BatchConfig,
    files: &[PathBuf],
    mut on_generated: F,
) -> CoreResult<BatchReport>
where
    P: DurationProber,
    S: FfmpegSpawner,
    F: FnMut(&SpriteResult),
{
    config.validate()?;

    let mut report = BatchReport::default();
    for input_path in files {
        match process_one(prober, spawner, config, input_path) {
            Ok(result) => {
                on_generated(&result);
                report.generated.push(result);
            }
            Err(e) => {
                error!("Error generating sprite for {}: {}", input_path.display(), e);
                report.failed.push(FileFailure {
                    input_path: input_path.clone(),
                    error: e,
                });
            }
        }
    }

    Ok(report)
}

fn process_one<P, S>(
    prober: &P,
    spawner: &S,
    config: &BatchConfig,
    input_path: &Path,
) -> CoreResult<SpriteResult>
where
    P: DurationProber,
    S: FfmpegSpawner,
{
    let output_path = sprite_output_path(&config.output_dir, input_path)?;
    generate_sprite(
        prober,
        spawner,
        input_path,
        &output_path,
        &config.sprite,
        config.remove_partial_output,
    )
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::config::BatchConfigBuilder;
    use crate::discovery::{ensure_directories, find_processable_files};
    use crate::external::mocks::{MockDurationProber, MockFfmpegSpawner};
    use std::fs::{self, File};
    use tempfile::tempdir;

    fn batch_config(root: &Path) -> BatchConfig {
        BatchConfigBuilder::new()
            .input_dir(root.join("input"))
            .output_dir(root.join("output"))
            .build()
    }

    #[test]
    fn only_recognized_files_produce_sprites() {
        let root = tempdir().unwrap();
        let config = batch_config(root.path());
        ensure_directories(&config.input_dir, &config.output_dir).unwrap();

        let clip = config.input_dir.join("clip.mp4");
        File::create(&clip).unwrap();
        File::create(config.input_dir.join("notes.txt")).unwrap();

        let files = find_processable_files(&config.input_dir).unwrap();
        assert_eq!(files, vec![clip.clone()]);

        let prober = MockDurationProber::new();
        prober.expect_duration(&clip, 300.0);
        let spawner = MockFfmpegSpawner::new();
        spawner.add_success_expectation("clip_sprite.jpg", vec![], true);

        let mut seen = Vec::new();
        let report = process_videos(&prober, &spawner, &config, &files, |r| {
            seen.push(r.output_path.clone())
        })
        .unwrap();

        assert_eq!(report.generated.len(), 1);
        assert!(!report.has_failures());
        assert_eq!(seen, vec![config.output_dir.join("clip_sprite.jpg")]);

        let outputs: Vec<_> = fs::read_dir(&config.output_dir)
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(outputs, vec!["clip_sprite.jpg"]);
    }

    #[test]
    fn failure_does_not_stop_later_files() {
        let root = tempdir().unwrap();
        let config = batch_config(root.path());
        ensure_directories(&config.input_dir, &config.output_dir).unwrap();

        let bad = config.input_dir.join("a_bad.mkv");
        let good = config.input_dir.join("b_good.mkv");
        File::create(&bad).unwrap();
        File::create(&good).unwrap();

        let prober = MockDurationProber::new();
        prober.expect_error(&bad, CoreError::FfprobeParse("N/A".to_string()));
        prober.expect_duration(&good, 7200.0);
        let spawner = MockFfmpegSpawner::new();
        spawner.add_success_expectation("b_good_sprite.jpg", vec![], true);

        let files = find_processable_files(&config.input_dir).unwrap();
        let report = process_videos(&prober, &spawner, &config, &files, |_| {}).unwrap();

        assert_eq!(report.total(), 2);
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].input_path, bad);
        assert_eq!(report.generated.len(), 1);
        assert_eq!(report.generated[0].plan.frame_count, 240);
        assert_eq!(prober.get_calls(), vec![bad, good]);
        assert!(!config.output_dir.join("a_bad_sprite.jpg").exists());
        assert!(config.output_dir.join("b_good_sprite.jpg").exists());
    }

    #[test]
    fn invalid_config_rejected_before_any_work() {
        let root = tempdir().unwrap();
        let config = BatchConfigBuilder::new()
            .input_dir(root.path().join("input"))
            .output_dir(root.path().join("output"))
            .columns(0)
            .build();

        let prober = MockDurationProber::new();
        let spawner = MockFfmpegSpawner::new();
        let files = vec![root.path().join("input/clip.mp4")];

        let result = process_videos(&prober, &spawner, &config, &files, |_| {});
        assert!(matches!(result, Err(CoreError::Config(_))));
        assert!(prober.get_calls().is_empty());
    }

    mod log_capture {
        use log::{Level, LevelFilter, Log, Metadata, Record};
        use std::cell::RefCell;

        thread_local! {
            static RECORDS: RefCell<Vec<(Level, String)>> = const { RefCell::new(Vec::new()) };
        }

        struct CaptureLogger;

        impl Log for CaptureLogger {
            fn enabled(&self, _: &Metadata) -> bool {
                true
            }

            fn log(&self, record: &Record) {
                RECORDS.with(|r| {
                    r.borrow_mut()
                        .push((record.level(), record.args().to_string()))
                });
            }

            fn flush(&self) {}
        }

        static LOGGER: CaptureLogger = CaptureLogger;

        /// Records emitted on the current thread while `f` runs.
        pub fn capture<F: FnOnce()>(f: F) -> Vec<(Level, String)> {
            let _ = log::set_logger(&LOGGER);
            log::set_max_level(LevelFilter::Trace);
            RECORDS.with(|r| r.borrow_mut().clear());
            f();
            RECORDS.with(|r| r.borrow_mut().drain(..).collect())
        }
    }

    #[test]
    fn probe_failure_logged_once() {
        use crate::external::FfprobeCli;
        use crate::external::mocks::write_fake_tool;

        let root = tempdir().unwrap();
        let config = batch_config(root.path());
        ensure_directories(&config.input_dir, &config.output_dir).unwrap();
        let clip = config.input_dir.join("clip.mp4");
        File::create(&clip).unwrap();

        let ffprobe = write_fake_tool(root.path(), "ffprobe", "echo N/A");
        let prober = FfprobeCli::with_binary(ffprobe);
        let spawner = MockFfmpegSpawner::new();

        let mut report = None;
        let records = log_capture::capture(|| {
            report = Some(
                process_videos(&prober, &spawner, &config, &[clip.clone()], |_| {}).unwrap(),
            );
        });

        let report = report.unwrap();
        assert!(matches!(
            report.failed[0].error,
            CoreError::FfprobeParse(_)
        ));
        let problems: Vec<_> = records
            .iter()
            .filter(|(level, _)| *level <= log::Level::Warn)
            .collect();
        assert_eq!(problems.len(), 1, "{records:?}");
        assert!(problems[0].1.contains("clip.mp4"));
        assert!(spawner.get_received_calls().is_empty());
    }
}
