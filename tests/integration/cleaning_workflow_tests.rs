/*!
 * End-to-end cleaning through the controller
 */

use std::fs;
use anyhow::Result;
use tscleaner::app_config::Config;
use tscleaner::app_controller::Controller;
use tscleaner::errors::CleanError;
use tscleaner::transcript_format::{FormatChoice, TranscriptFormat};
use crate::common;

fn controller_with_format(format: FormatChoice) -> Controller {
    Controller::with_config(Config {
        format,
        ..Config::default()
    })
}

/// Test single-file mode with an explicit output path
#[test]
fn test_run_withSrtFile_shouldWriteCleanedOutput() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let input = common::create_test_file(temp_dir.path(), "talk.srt", common::SRT_SAMPLE)?;
    let output = temp_dir.path().join("talk.txt");

    let summary = controller_with_format(FormatChoice::Srt).run(&input, Some(&output))?;

    assert_eq!(summary.cleaned.len(), 1);
    assert!(!summary.has_failures());
    assert_eq!(summary.cleaned[0].lines_removed, 6);
    assert_eq!(fs::read_to_string(&output)?, "Hello world\nGoodbye");
    Ok(())
}

/// Test that auto mode detects WebVTT and strips its stamps
#[test]
fn test_process_file_withAutoAndVtt_shouldDetectVtt() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let input = common::create_test_file(temp_dir.path(), "talk.vtt", common::VTT_SAMPLE)?;
    let output = temp_dir.path().join("cleaned_talk.vtt");

    let report = controller_with_format(FormatChoice::Auto).process_file(&input, &output)?;

    assert_eq!(report.format, TranscriptFormat::Vtt);
    assert_eq!(fs::read_to_string(&output)?, "WEBVTT\nFirst cue\nSecond cue");
    Ok(())
}

/// Test that auto mode falls back to SRT for undetectable text
#[test]
fn test_process_file_withAutoAndNoStamps_shouldFallBackToSrt() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let input = common::create_test_file(temp_dir.path(), "notes.srt", "Just words\n\n42\nmore words\n")?;
    let output = temp_dir.path().join("out.txt");

    let report = controller_with_format(FormatChoice::Auto).process_file(&input, &output)?;

    assert_eq!(report.format, TranscriptFormat::Srt);
    assert_eq!(fs::read_to_string(&output)?, "Just words\nmore words");
    Ok(())
}

/// Test directory mode writes one prefixed file per transcript
#[test]
fn test_run_folder_withMixedFiles_shouldCleanOnlyTranscripts() -> Result<()> {
    let input_dir = common::create_temp_dir()?;
    let output_root = common::create_temp_dir()?;
    let output_dir = output_root.path().join("cleaned");
    common::create_test_file(input_dir.path(), "one.srt", common::SRT_SAMPLE)?;
    common::create_test_file(input_dir.path(), "two.vtt", common::VTT_SAMPLE)?;
    common::create_test_file(input_dir.path(), "three.txt", common::SRT_SAMPLE)?;

    let summary = controller_with_format(FormatChoice::Auto).run(input_dir.path(), Some(&output_dir))?;

    assert_eq!(summary.cleaned.len(), 2);
    assert_eq!(fs::read_to_string(output_dir.join("cleaned_one.srt"))?, "Hello world\nGoodbye");
    assert_eq!(
        fs::read_to_string(output_dir.join("cleaned_two.vtt"))?,
        "WEBVTT\nFirst cue\nSecond cue"
    );
    assert!(!output_dir.join("cleaned_three.txt").exists());
    Ok(())
}

/// Test that a directory of .txt files yields NoTranscriptFiles
#[test]
fn test_run_folder_withOnlyTxtFiles_shouldReportNoTranscripts() -> Result<()> {
    let input_dir = common::create_temp_dir()?;
    let output_dir = common::create_temp_dir()?;
    common::create_test_file(input_dir.path(), "subs.txt", common::SRT_SAMPLE)?;

    let result = controller_with_format(FormatChoice::Auto).run(input_dir.path(), Some(output_dir.path()));

    assert!(matches!(result, Err(CleanError::NoTranscriptFiles { .. })));
    Ok(())
}

/// Test that an unreadable file is skipped and the batch continues
#[test]
fn test_run_folder_withUnreadableFile_shouldContinue() -> Result<()> {
    let input_dir = common::create_temp_dir()?;
    let output_dir = common::create_temp_dir()?;
    common::create_test_file(input_dir.path(), "a_good.srt", common::SRT_SAMPLE)?;
    let bad = input_dir.path().join("b_bad.srt");
    fs::write(&bad, [0xffu8, 0xfe, 0x00, 0xc3])?;
    common::create_test_file(input_dir.path(), "c_good.srt", common::SRT_SAMPLE)?;

    let summary = controller_with_format(FormatChoice::Srt).run(input_dir.path(), Some(output_dir.path()))?;

    assert_eq!(summary.cleaned.len(), 2);
    assert_eq!(summary.failed, vec![bad]);
    assert!(summary.has_failures());
    assert!(output_dir.path().join("cleaned_c_good.srt").exists());
    assert!(!output_dir.path().join("cleaned_b_bad.srt").exists());
    Ok(())
}

/// Test that a path that is neither file nor directory is rejected
#[test]
fn test_run_withMissingInput_shouldReturnInvalidInput() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let missing = temp_dir.path().join("missing.srt");

    let result = controller_with_format(FormatChoice::Auto).run(&missing, None);

    assert!(matches!(result, Err(CleanError::InvalidInput { .. })));
    Ok(())
}

/// Test that a custom prefix is used for directory output names
#[test]
fn test_run_folder_withCustomPrefix_shouldUseIt() -> Result<()> {
    let input_dir = common::create_temp_dir()?;
    let output_dir = common::create_temp_dir()?;
    common::create_test_file(input_dir.path(), "ep.srt", common::SRT_SAMPLE)?;
    let controller = Controller::with_config(Config {
        output_prefix: "plain_".to_string(),
        ..Config::default()
    });

    controller.run_folder(input_dir.path(), output_dir.path())?;

    assert!(output_dir.path().join("plain_ep.srt").exists());
    Ok(())
}
