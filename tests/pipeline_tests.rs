use varsel::{run_pipeline, PipelineError};

/// Run one event stream and return its output as a string.
fn run(input: &str) -> Result<String, PipelineError> {
    let mut output = Vec::new();
    run_pipeline(input.as_bytes(), &mut output)?;
    Ok(String::from_utf8(output).unwrap())
}

fn sample_line(station: &str, timestamp: i64, temperature: &str) -> String {
    format!(
        "{{\"type\":\"sample\",\"stationName\":\"{}\",\"timestamp\":{},\"temperature\":{}}}",
        station, timestamp, temperature
    )
}

fn control_line(command: &str) -> String {
    format!("{{\"type\":\"control\",\"command\":\"{}\"}}", command)
}

fn reference_sample_lines() -> Vec<String> {
    vec![
        sample_line("Station1", 1672531200000, "37.1"),
        sample_line("Station2", 1672531200000, "37.4"),
        sample_line("Station1", 1672531300000, "37.3"),
        sample_line("Station2", 1672531400000, "37"),
    ]
}

#[test]
fn test_reference_snapshot_scenario() {
    let mut lines = reference_sample_lines();
    lines.push(control_line("snapshot"));
    let input = lines.join("\n");

    let output = run(&input).unwrap();
    assert_eq!(
        output,
        "{\"type\":\"snapshot\",\"asOf\":1672531400000,\"stations\":\
         {\"Station1\":{\"high\":37.3,\"low\":37.1},\
         \"Station2\":{\"high\":37.4,\"low\":37.0}}}\n"
    );
}

#[test]
fn test_reference_reset_scenario() {
    let mut lines = reference_sample_lines();
    lines.push(control_line("reset"));
    let input = lines.join("\n");

    let output = run(&input).unwrap();
    assert_eq!(output, "{\"type\":\"reset\",\"asOf\":1672531400000}\n");
}

#[test]
fn test_snapshot_right_after_reset_yields_no_report() {
    let mut lines = reference_sample_lines();
    lines.push(control_line("reset"));
    lines.push(control_line("snapshot"));
    let input = lines.join("\n");

    let output = run(&input).unwrap();
    assert_eq!(output, "{\"type\":\"reset\",\"asOf\":1672531400000}\n");
}

#[test]
fn test_repeated_snapshots_are_identical() {
    let mut lines = reference_sample_lines();
    lines.push(control_line("snapshot"));
    lines.push(control_line("snapshot"));
    let input = lines.join("\n");

    let output = run(&input).unwrap();
    let produced: Vec<&str> = output.lines().collect();
    assert_eq!(produced.len(), 2);
    assert_eq!(produced[0], produced[1]);
}

#[test]
fn test_samples_alone_produce_no_output() {
    let input = reference_sample_lines().join("\n");
    let output = run(&input).unwrap();
    assert!(output.is_empty());
}

#[test]
fn test_string_temperature_round_trips_through_the_pipeline() {
    let input = [
        sample_line("Station1", 1000, "\"37.5\""),
        control_line("snapshot"),
    ]
    .join("\n");

    let output = run(&input).unwrap();
    assert_eq!(
        output,
        "{\"type\":\"snapshot\",\"asOf\":1000,\"stations\":\
         {\"Station1\":{\"high\":37.5,\"low\":37.5}}}\n"
    );
}

#[test]
fn test_reports_before_a_failure_are_kept() {
    let input = [
        sample_line("Station1", 1000, "20.0"),
        control_line("snapshot"),
        control_line("BadCommand"),
        control_line("snapshot"),
    ]
    .join("\n");

    let mut output = Vec::new();
    let result = run_pipeline(input.as_bytes(), &mut output);

    assert!(matches!(result, Err(PipelineError::Process(_))));
    let written = String::from_utf8(output).unwrap();
    assert_eq!(written.lines().count(), 1);
    assert!(written.starts_with("{\"type\":\"snapshot\""));
}

#[test]
fn test_bad_event_type_fails_the_run() {
    let input = "{\"type\":\"BadType\",\"stationName\":\"Station1\",\"timestamp\":1,\"temperature\":20.0}";

    let result = run(input);
    let Err(PipelineError::Process(err)) = result else {
        panic!("Expected a processing error");
    };
    assert_eq!(
        err.to_string(),
        "Unknown input type. Please provide either a sample or control message"
    );
}

#[test]
fn test_missing_temperature_fails_the_run() {
    let input = "{\"type\":\"sample\",\"stationName\":\"Station1\",\"timestamp\":1672531200000}";

    let result = run(input);
    let Err(PipelineError::Process(err)) = result else {
        panic!("Expected a processing error");
    };
    assert_eq!(err.to_string(), "Not all keys are present in json");
}
