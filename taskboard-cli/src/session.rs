//! Applying an operations document to a board

use crate::config::TaskboardConfig;
use crate::error::{CliError, CliResult};
use crate::prompt::ConfirmPolicy;
use serde::Serialize;
use serde_json::Value;
use taskboard::{parse, BoardCommand, BoardContext, BoardOperationProcessor};
use tracing::{debug, warn};

/// One entry of the document that was understood and run
#[derive(Debug, Serialize)]
pub struct Applied {
    /// "line N" or "entry N"
    pub location: String,
    pub op: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// One entry of the document that could not be parsed
#[derive(Debug, Serialize)]
pub struct Skipped {
    pub location: String,
    pub message: String,
}

/// What happened to a whole document
#[derive(Debug, Default, Serialize)]
pub struct Report {
    pub applied: Vec<Applied>,
    pub skipped: Vec<Skipped>,
}

/// A board, its processor and the delete policy for one invocation
pub struct Session {
    ctx: BoardContext,
    processor: BoardOperationProcessor,
    policy: ConfirmPolicy,
}

impl Session {
    pub fn new(config: &TaskboardConfig) -> Self {
        let processor = match &config.actor {
            Some(actor) => BoardOperationProcessor::with_actor(actor.clone()),
            None => BoardOperationProcessor::new(),
        };
        Self {
            ctx: BoardContext::new(config.start.build()),
            processor,
            policy: config.confirm_deletes,
        }
    }

    pub fn context(&self) -> &BoardContext {
        &self.ctx
    }

    /// End the session, keeping the board and its activity
    pub fn into_context(self) -> BoardContext {
        self.ctx
    }

    /// Run every operation in `text`: a JSON array, or one JSON value per line.
    ///
    /// Entries that fail to parse are skipped and reported. A document that
    /// starts as an array but is not valid JSON is an error.
    pub fn run_document(&mut self, text: &str) -> CliResult<Report> {
        let mut report = Report::default();

        for (location, parsed) in entries(text)? {
            match parsed {
                Ok(commands) => {
                    for command in commands {
                        let applied = self.run_command(&location, command)?;
                        report.applied.push(applied);
                    }
                }
                Err(message) => {
                    warn!(%location, %message, "skipping entry");
                    report.skipped.push(Skipped { location, message });
                }
            }
        }

        Ok(report)
    }

    fn run_command(&mut self, location: &str, mut command: BoardCommand) -> CliResult<Applied> {
        if let Some(question) = command.confirmation_prompt(self.ctx.board()) {
            let confirmed = self.policy.confirm(&question)?;
            debug!(%location, confirmed, "delete confirmation answered");
            command.set_confirmed(confirmed);
        }

        let op = command.op_string();
        let (result, error) = match command.process(&self.processor, &mut self.ctx) {
            Ok(value) => (Some(value), None),
            Err(e) => (None, Some(e.to_string())),
        };

        Ok(Applied {
            location: location.to_string(),
            op,
            result,
            error,
        })
    }
}

type Entry = (String, Result<Vec<BoardCommand>, String>);

/// Split a document into located, parsed entries
fn entries(text: &str) -> CliResult<Vec<Entry>> {
    if text.trim_start().starts_with('[') {
        let values: Vec<Value> = serde_json::from_str(text).map_err(|e| CliError::Input {
            message: e.to_string(),
        })?;
        return Ok(values
            .into_iter()
            .enumerate()
            .map(|(i, value)| {
                let parsed = parse::parse_input(value).map_err(|e| e.to_string());
                (format!("entry {}", i + 1), parsed)
            })
            .collect());
    }

    Ok(text
        .lines()
        .enumerate()
        .filter(|(_, line)| {
            let line = line.trim();
            !line.is_empty() && !line.starts_with('#')
        })
        .map(|(i, line)| {
            let parsed = serde_json::from_str::<Value>(line)
                .map_err(|e| e.to_string())
                .and_then(|value| parse::parse_input(value).map_err(|e| e.to_string()));
            (format!("line {}", i + 1), parsed)
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use taskboard::defaults::StartBoard;
    use taskboard::ordering;

    fn new_session(policy: ConfirmPolicy) -> Session {
        Session::new(&TaskboardConfig {
            actor: Some("tester".into()),
            start: StartBoard::Sample,
            confirm_deletes: policy,
            ..Default::default()
        })
    }

    #[test]
    fn test_json_lines_with_bad_line() {
        let mut session = new_session(ConfirmPolicy::Yes);
        let report = session
            .run_document(
                "{\"op\": \"add task\", \"title\": \"A\", \"column\": \"done\"}\n\
                 \n\
                 # comment\n\
                 {not json\n\
                 {\"op\": \"move task\", \"id\": \"1\", \"column\": \"done\", \"index\": 0}\n",
            )
            .unwrap();

        assert_eq!(report.applied.len(), 2);
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].location, "line 4");
        assert_eq!(report.applied[1].location, "line 5");

        let board = session.context().board();
        let done = ordering::lane(board, &"done".into());
        assert_eq!(done.len(), 2);
        assert_eq!(done[0].as_str(), "1");

        let activity = session.context().read_activity(None);
        assert_eq!(activity.len(), 2);
        assert_eq!(activity[0].actor.as_deref(), Some("tester"));
    }

    #[test]
    fn test_array_document() {
        let mut session = new_session(ConfirmPolicy::Yes);
        let report = session
            .run_document(
                r#"[
                    {"op": "add column", "title": "Review", "id": "review"},
                    {"op": "bogus"},
                    {"op": "drop", "kind": "column", "activeId": "review", "over": 0}
                ]"#,
            )
            .unwrap();
        assert_eq!(report.applied.len(), 2);
        assert_eq!(report.skipped[0].location, "entry 2");
        assert_eq!(
            ordering::column_sequence(session.context().board())[0].as_str(),
            "review"
        );
    }

    #[test]
    fn test_broken_array_is_an_error() {
        let mut session = new_session(ConfirmPolicy::Yes);
        let err = session.run_document("[{\"op\": \"get board\"}").unwrap_err();
        assert!(matches!(err, CliError::Input { .. }));
    }

    #[test]
    fn test_declined_delete_leaves_column() {
        let mut session = new_session(ConfirmPolicy::No);
        let report = session
            .run_document("{\"op\": \"delete column\", \"id\": \"todo\"}")
            .unwrap();
        assert_eq!(report.applied[0].result.as_ref().unwrap()["changed"], false);
        assert_eq!(session.context().board().columns.len(), 3);

        let mut session = new_session(ConfirmPolicy::Yes);
        session
            .run_document("{\"op\": \"delete column\", \"id\": \"todo\"}")
            .unwrap();
        assert_eq!(session.context().board().columns.len(), 2);
    }

    #[test]
    fn test_failed_command_is_reported_not_fatal() {
        let mut session = new_session(ConfirmPolicy::Yes);
        let report = session
            .run_document("{\"op\": \"add task\", \"title\": \"  \"}\n{\"op\": \"get board\"}")
            .unwrap();
        assert_eq!(report.applied.len(), 2);
        assert!(report.applied[0].error.as_ref().unwrap().contains("title"));
        assert!(report.applied[1].result.is_some());
    }
}
