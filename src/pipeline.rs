use std::io::{BufRead, Write};

use serde_json::Value;
use thiserror::Error;

use varsel_core::{process_events, ProcessError};

/// Errors that end a pipeline run.
///
/// All are fatal: reports produced before the failure have already been
/// written, nothing after it is processed.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Malformed JSON record: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Process(#[from] ProcessError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Run one event stream from `reader` to `writer`.
///
/// Input is JSON Lines: one event record per line, blank lines skipped.
/// Each report is encoded as a single JSON line in production order.
/// Returns the number of reports written.
pub fn run_pipeline<R, W>(reader: R, mut writer: W) -> Result<usize, PipelineError>
where
    R: BufRead,
    W: Write,
{
    let mut input_error: Option<PipelineError> = None;
    let mut produced = 0;

    {
        let mut lines = reader.lines();
        let events = std::iter::from_fn(|| loop {
            match lines.next()? {
                Ok(line) => {
                    if line.trim().is_empty() {
                        continue;
                    }
                    match serde_json::from_str::<Value>(&line) {
                        Ok(value) => return Some(value),
                        Err(err) => {
                            input_error = Some(PipelineError::Json(err));
                            return None;
                        }
                    }
                }
                Err(err) => {
                    input_error = Some(PipelineError::Io(err));
                    return None;
                }
            }
        });

        for report in process_events(events) {
            let encoded = serde_json::to_string(&report?)?;
            writeln!(writer, "{encoded}")?;
            produced += 1;
        }
    }

    // An unreadable or undecodable line ends the event iterator early; the
    // processor sees a normal end of input, so surface the cause here.
    if let Some(err) = input_error {
        return Err(err);
    }

    writer.flush()?;
    Ok(produced)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(input: &str) -> Result<(usize, String), PipelineError> {
        let mut output = Vec::new();
        let produced = run_pipeline(input.as_bytes(), &mut output)?;
        Ok((produced, String::from_utf8(output).unwrap()))
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let input = "\n{\"type\":\"control\",\"command\":\"reset\"}\n\n  \n";
        let (produced, output) = run(input).unwrap();

        assert_eq!(produced, 1);
        assert_eq!(output, "{\"type\":\"reset\",\"asOf\":0}\n");
    }

    #[test]
    fn test_empty_input_produces_nothing() {
        let (produced, output) = run("").unwrap();
        assert_eq!(produced, 0);
        assert!(output.is_empty());
    }

    #[test]
    fn test_malformed_line_fails_the_run() {
        let result = run("{not json}\n");
        assert!(matches!(result, Err(PipelineError::Json(_))));
    }

    #[test]
    fn test_process_error_is_propagated() {
        let result = run("{\"type\":\"control\",\"command\":\"BadCommand\"}\n");
        let Err(PipelineError::Process(err)) = result else {
            panic!("Expected a processing error");
        };
        assert_eq!(err, ProcessError::UnknownControl);
    }
}
