//! Forgiving input parsing for board commands
//!
//! Accepts a single object or an array of them. The command comes from an
//! `"op"` field (`"move task"`, `"rm column"`, `"drop"`) or from separate
//! `"verb"` and `"noun"` fields; the remaining keys are the parameters.

use crate::command::BoardCommand;
use crate::error::{BoardError, Result};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Canonical verbs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Verb {
    Add,
    Update,
    Move,
    Delete,
    Get,
    List,
    Toggle,
    Drop,
}

impl Verb {
    fn from_alias(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "add" | "new" | "create" => Some(Self::Add),
            "update" | "edit" => Some(Self::Update),
            "move" | "mv" => Some(Self::Move),
            "delete" | "rm" | "remove" => Some(Self::Delete),
            "get" | "show" => Some(Self::Get),
            "list" | "ls" => Some(Self::List),
            "toggle" | "check" => Some(Self::Toggle),
            "drop" => Some(Self::Drop),
            _ => None,
        }
    }
}

/// Canonical nouns; plurals fold onto the singular
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Noun {
    Board,
    Column,
    Task,
    Checklist,
}

impl Noun {
    fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "board" => Some(Self::Board),
            "column" | "columns" | "col" => Some(Self::Column),
            "task" | "tasks" | "card" => Some(Self::Task),
            "checklist" | "item" | "checklist_item" => Some(Self::Checklist),
            _ => None,
        }
    }
}

/// Parse input JSON into one or more commands
pub fn parse_input(input: Value) -> Result<Vec<BoardCommand>> {
    match input {
        Value::Array(arr) => arr.into_iter().map(parse_single).collect(),
        Value::Object(obj) => Ok(vec![parse_single(Value::Object(obj))?]),
        _ => Err(BoardError::parse("input must be an object or array")),
    }
}

/// Parse a single command from JSON
pub fn parse_single(input: Value) -> Result<BoardCommand> {
    let obj = match input {
        Value::Object(obj) => obj,
        _ => return Err(BoardError::parse("operation must be an object")),
    };

    let (verb, noun, mut params) = extract_operation(&obj)?;
    normalize_params(noun, &mut params);

    let op = match noun {
        Some(noun) => format!("{verb:?} {noun:?}").to_lowercase(),
        None => format!("{verb:?}").to_lowercase(),
    };

    match (verb, noun) {
        (Verb::Get, Some(Noun::Board) | None) => build(&op, params, BoardCommand::GetBoard),
        (Verb::List, Some(Noun::Board)) => build(&op, params, BoardCommand::GetBoard),

        (Verb::Add, Some(Noun::Column)) => build(&op, params, BoardCommand::AddColumn),
        (Verb::Update, Some(Noun::Column)) => build(&op, params, BoardCommand::UpdateColumn),
        (Verb::Move, Some(Noun::Column)) => build(&op, params, BoardCommand::MoveColumn),
        (Verb::Delete, Some(Noun::Column)) => build(&op, params, BoardCommand::DeleteColumn),
        (Verb::Get, Some(Noun::Column)) => build(&op, params, BoardCommand::GetColumn),
        (Verb::List, Some(Noun::Column)) => build(&op, params, BoardCommand::ListColumns),

        (Verb::Add, Some(Noun::Task)) => build(&op, params, BoardCommand::AddTask),
        (Verb::Update, Some(Noun::Task)) => build(&op, params, BoardCommand::UpdateTask),
        (Verb::Move, Some(Noun::Task)) => build(&op, params, BoardCommand::MoveTask),
        (Verb::Delete, Some(Noun::Task)) => build(&op, params, BoardCommand::DeleteTask),
        (Verb::Get, Some(Noun::Task)) => build(&op, params, BoardCommand::GetTask),
        (Verb::List, Some(Noun::Task)) => build(&op, params, BoardCommand::ListTasks),

        (Verb::Toggle, Some(Noun::Checklist | Noun::Task)) => {
            build(&op, params, BoardCommand::ToggleChecklistItem)
        }

        (Verb::Drop, Some(Noun::Task | Noun::Column)) | (Verb::Drop, None) => {
            if let Some(noun) = noun {
                let kind = if noun == Noun::Task { "task" } else { "column" };
                params
                    .entry("kind")
                    .or_insert_with(|| Value::String(kind.to_string()));
            }
            build(&op, params, BoardCommand::Drop)
        }

        _ => Err(BoardError::parse(format!("unsupported operation: {op}"))),
    }
}

/// Deserialize the parameters into a command struct and wrap it
fn build<T, F>(op: &str, params: Map<String, Value>, wrap: F) -> Result<BoardCommand>
where
    T: DeserializeOwned,
    F: FnOnce(T) -> BoardCommand,
{
    serde_json::from_value(Value::Object(params))
        .map(wrap)
        .map_err(|e| BoardError::parse(format!("{op}: {e}")))
}

/// Extract verb and noun from the input object
fn extract_operation(obj: &Map<String, Value>) -> Result<(Verb, Option<Noun>, Map<String, Value>)> {
    // Strategy 1: explicit "op" field with a "verb noun" string
    if let Some(op_value) = obj.get("op").or_else(|| obj.get("operation")) {
        let op_str = op_value
            .as_str()
            .ok_or_else(|| BoardError::parse("op must be a string"))?;
        let (verb, noun) = parse_op_string(op_str)
            .ok_or_else(|| BoardError::parse(format!("unknown operation: {op_str}")))?;
        return Ok((verb, noun, filter_keys(obj, &["op", "operation"])));
    }

    // Strategy 2: separate verb/noun fields
    if let Some(verb_str) = obj.get("verb").and_then(Value::as_str) {
        let verb = Verb::from_alias(verb_str)
            .ok_or_else(|| BoardError::parse(format!("unknown verb: {verb_str}")))?;
        let noun = match obj.get("noun").and_then(Value::as_str) {
            Some(noun_str) => Some(
                Noun::parse(noun_str)
                    .ok_or_else(|| BoardError::parse(format!("unknown noun: {noun_str}")))?,
            ),
            None => None,
        };
        return Ok((verb, noun, filter_keys(obj, &["verb", "noun"])));
    }

    Err(BoardError::parse("cannot determine operation from input"))
}

/// Parse an "op" string like "add task" or "drop"
fn parse_op_string(s: &str) -> Option<(Verb, Option<Noun>)> {
    let parts: Vec<&str> = s.split_whitespace().collect();
    match parts.as_slice() {
        [verb] => Some((Verb::from_alias(verb)?, None)),
        [verb, noun] => Some((Verb::from_alias(verb)?, Some(Noun::parse(noun)?))),
        // "toggle checklist item"
        [verb, "checklist", "item"] => Some((Verb::from_alias(verb)?, Some(Noun::Checklist))),
        _ => None,
    }
}

/// Drop the command keys and metadata keys (actor, note)
fn filter_keys(obj: &Map<String, Value>, command_keys: &[&str]) -> Map<String, Value> {
    obj.iter()
        .filter(|(k, _)| {
            !command_keys.contains(&k.as_str()) && !matches!(k.as_str(), "actor" | "note")
        })
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect()
}

/// Normalize parameter keys: camelCase to snake_case, then per-noun aliases
fn normalize_params(noun: Option<Noun>, params: &mut Map<String, Value>) {
    let keys_to_convert: Vec<String> = params.keys().cloned().collect();
    for key in keys_to_convert {
        let snake = to_snake_case(&key);
        if snake != key {
            if let Some(value) = params.remove(&key) {
                if !params.contains_key(&snake) {
                    params.insert(snake, value);
                }
            }
        }
    }

    let aliases: &[(&[&str], &str)] = match noun {
        Some(Noun::Column) => &[(&["column_id", "column"], "id"), (&["target_index"], "index")],
        Some(Noun::Task) | Some(Noun::Checklist) => &[
            (&["task_id"], "id"),
            (&["column_id", "target_column_id", "col"], "column"),
            (&["target_index"], "index"),
            (&["desc"], "description"),
            (&["item_id"], "item"),
        ],
        _ => &[],
    };

    for (from_keys, to_key) in aliases {
        for from_key in *from_keys {
            if let Some(value) = params.remove(*from_key) {
                if !params.contains_key(*to_key) {
                    params.insert(to_key.to_string(), value);
                }
            }
        }
    }

    // Drop intents
    for (from_key, to_key) in [("active", "active_id"), ("container_id", "container")] {
        if let Some(value) = params.remove(from_key) {
            params.entry(to_key).or_insert(value);
        }
    }
}

/// Simple camelCase to snake_case conversion
fn to_snake_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 4);
    for (i, c) in s.chars().enumerate() {
        if c.is_uppercase() && i > 0 {
            result.push('_');
        }
        result.extend(c.to_lowercase());
    }
    result
}
