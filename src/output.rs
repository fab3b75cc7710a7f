//! Shared output formatting for tsk CLI commands.

use serde::Serialize;

use crate::error::Result;
use crate::task::Task;

pub const SCHEMA_VERSION: &str = "tsk.v1";

const ANSI_STRIKE: &str = "\x1b[9m";
const ANSI_RESET: &str = "\x1b[0m";

#[derive(Debug, Clone, Copy)]
pub struct OutputOptions {
    pub json: bool,
    pub quiet: bool,
}

pub fn emit_success<T: Serialize>(
    options: OutputOptions,
    command: &str,
    data: &T,
    human: &[String],
) -> Result<()> {
    if options.json {
        #[derive(Serialize)]
        struct Envelope<'a, T: Serialize> {
            schema_version: &'static str,
            command: &'a str,
            status: &'static str,
            data: &'a T,
        }

        let payload = Envelope {
            schema_version: SCHEMA_VERSION,
            command,
            status: "success",
            data,
        };

        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    if options.quiet {
        return Ok(());
    }

    for line in human {
        println!("{line}");
    }

    Ok(())
}

pub fn emit_error(command: &str, err: &crate::error::Error, json: bool) -> Result<()> {
    if json {
        #[derive(Serialize)]
        struct ErrorBody<'a> {
            message: &'a str,
            code: i32,
            kind: &'static str,
        }

        #[derive(Serialize)]
        struct Envelope<'a> {
            schema_version: &'static str,
            command: &'a str,
            status: &'static str,
            error: ErrorBody<'a>,
        }

        let payload = Envelope {
            schema_version: SCHEMA_VERSION,
            command,
            status: "error",
            error: ErrorBody {
                message: &err.to_string(),
                code: err.exit_code(),
                kind: error_kind(err),
            },
        };

        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    eprintln!("error: {err}");
    Ok(())
}

/// One list line: status glyph, id, priority marker, description.
/// Completed descriptions are struck through.
pub fn format_task_line(task: &Task) -> String {
    let description = if task.completed {
        format!("{ANSI_STRIKE}{}{ANSI_RESET}", task.description)
    } else {
        task.description.clone()
    };

    format!(
        "{} [{}] {} {}",
        task.status_glyph(),
        task.id,
        task.priority.marker(),
        description
    )
}

pub fn infer_command_name_from_args() -> String {
    std::env::args()
        .skip(1)
        .find(|arg| !arg.starts_with('-'))
        .unwrap_or_else(|| "tsk".to_string())
}

fn error_kind(err: &crate::error::Error) -> &'static str {
    match err.exit_code() {
        2 => "user_error",
        _ => "operation_failed",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::{Priority, Task};

    #[test]
    fn pending_line_has_open_glyph_and_marker() {
        let task = Task::new(4, "water plants", Priority::High);
        let line = format_task_line(&task);
        assert_eq!(line, "○ [4] 🔴 water plants");
    }

    #[test]
    fn completed_line_is_struck_through() {
        let mut task = Task::new(1, "done already", Priority::Low);
        task.mark_completed();
        let line = format_task_line(&task);
        assert!(line.starts_with("✓ [1] 🟢 "));
        assert!(line.contains("\x1b[9mdone already\x1b[0m"));
    }
}
