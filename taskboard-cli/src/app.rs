//! Subcommand handlers

use crate::cli::Commands;
use crate::config::{OutputFormat, TaskboardConfig};
use crate::error::{CliError, CliResult};
use crate::render;
use crate::session::{Report, Session};
use serde_json::json;
use std::io::{Read, Write};
use std::path::Path;
use taskboard::board::GetBoard;
use taskboard::{BoardContext, BoardOperationProcessor, OperationProcessor};

/// Run one subcommand, writing results to `out` and problems to `err`
pub fn execute(
    command: &Commands,
    config: &TaskboardConfig,
    out: &mut impl Write,
    err: &mut impl Write,
) -> CliResult<()> {
    match command {
        Commands::Run { file, activity } => {
            let text = read_input(file.as_deref())?;
            run(&text, *activity, config, out, err)
        }
        Commands::Demo => demo(config, out),
        Commands::Colors => colors(config, out),
    }
}

/// Apply an operations document and render the resulting board
pub fn run(
    text: &str,
    activity: bool,
    config: &TaskboardConfig,
    out: &mut impl Write,
    err: &mut impl Write,
) -> CliResult<()> {
    let mut session = Session::new(config);
    let report = session.run_document(text)?;
    report_problems(&report, err)?;

    let mut ctx = session.into_context();
    match config.output {
        OutputFormat::Json => {
            let mut document = json!({
                "results": report.applied,
                "skipped": report.skipped,
                "board": board_value(&mut ctx)?,
            });
            if activity {
                document["activity"] = serde_json::to_value(ctx.read_activity(None))?;
            }
            writeln!(out, "{}", serde_json::to_string_pretty(&document)?).map_err(write_error)?;
        }
        OutputFormat::Table => {
            writeln!(out, "{}", render::board_table(ctx.board(), today())).map_err(write_error)?;
            if activity {
                writeln!(out, "{}", render::activity_table(&ctx.read_activity(None)))
                    .map_err(write_error)?;
            }
        }
    }
    Ok(())
}

fn demo(config: &TaskboardConfig, out: &mut impl Write) -> CliResult<()> {
    let mut ctx = BoardContext::new(taskboard::defaults::sample_board());
    match config.output {
        OutputFormat::Json => {
            writeln!(out, "{}", serde_json::to_string_pretty(&board_value(&mut ctx)?)?)
        }
        OutputFormat::Table => writeln!(out, "{}", render::board_table(ctx.board(), today())),
    }
    .map_err(write_error)
}

fn colors(config: &TaskboardConfig, out: &mut impl Write) -> CliResult<()> {
    match config.output {
        OutputFormat::Json => writeln!(
            out,
            "{}",
            serde_json::to_string_pretty(&render::colors_json())?
        ),
        OutputFormat::Table => writeln!(out, "{}", render::colors_table()),
    }
    .map_err(write_error)
}

/// The board as `get board` reports it
fn board_value(ctx: &mut BoardContext) -> CliResult<serde_json::Value> {
    Ok(BoardOperationProcessor::new().process(&GetBoard::new(), ctx)?)
}

fn report_problems(report: &Report, err: &mut impl Write) -> CliResult<()> {
    for skipped in &report.skipped {
        writeln!(err, "{}: skipped: {}", skipped.location, skipped.message).map_err(write_error)?;
    }
    for applied in &report.applied {
        if let Some(error) = &applied.error {
            writeln!(err, "{}: {} failed: {}", applied.location, applied.op, error)
                .map_err(write_error)?;
        }
    }
    Ok(())
}

fn read_input(file: Option<&Path>) -> CliResult<String> {
    match file {
        Some(path) => std::fs::read_to_string(path).map_err(|source| CliError::Read {
            path: path.to_path_buf(),
            source,
        }),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .map_err(CliError::Stdin)?;
            Ok(text)
        }
    }
}

fn write_error(e: std::io::Error) -> CliError {
    CliError::Write(e)
}

fn today() -> chrono::NaiveDate {
    chrono::Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::ConfirmPolicy;
    use serde_json::Value;
    use taskboard::defaults::StartBoard;

    fn json_config() -> TaskboardConfig {
        TaskboardConfig {
            output: OutputFormat::Json,
            confirm_deletes: ConfirmPolicy::Yes,
            start: StartBoard::Default,
            actor: Some("ci".into()),
        }
    }

    #[test]
    fn test_run_json_output() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        run(
            "{\"op\": \"add task\", \"title\": \"Ship\"}\nnope\n",
            true,
            &json_config(),
            &mut out,
            &mut err,
        )
        .unwrap();

        let document: Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(document["results"][0]["op"], "add task");
        assert_eq!(document["board"]["columns"][0]["tasks"][0]["title"], "Ship");
        assert_eq!(document["activity"][0]["actor"], "ci");

        let err = String::from_utf8(err).unwrap();
        assert!(err.starts_with("line 2: skipped:"));
    }

    #[test]
    fn test_run_table_output() {
        let config = TaskboardConfig {
            output: OutputFormat::Table,
            ..json_config()
        };
        let mut out = Vec::new();
        let mut err = Vec::new();
        run(
            "[{\"op\": \"add task\", \"title\": \"Ship\", \"column\": \"done\"}]",
            false,
            &config,
            &mut out,
            &mut err,
        )
        .unwrap();

        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("Done (1)"));
        assert!(out.contains("Ship"));
        assert!(err.is_empty());
    }

    #[test]
    fn test_demo_and_colors() {
        let mut out = Vec::new();
        demo(&json_config(), &mut out).unwrap();
        let board: Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(board["columns"].as_array().unwrap().len(), 3);

        let mut out = Vec::new();
        colors(&json_config(), &mut out).unwrap();
        let colors: Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(colors.as_array().unwrap().len(), 6);
    }
}
