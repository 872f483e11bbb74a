use serde_json::Value;

use crate::error::ProcessError;

/// A decoded input event.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// One temperature reading from one station.
    Sample {
        station_name: String,
        timestamp: i64,
        temperature: f64,
    },
    /// A request to act on the aggregated state.
    Control(Command),
}

/// Action requested by a control event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Report current per-station aggregates.
    Snapshot,
    /// Clear per-station aggregates.
    Reset,
}

impl Event {
    /// Decode a raw JSON record into a typed event.
    ///
    /// Required-field presence is the only schema validation performed on
    /// samples: a field that is present but not of the expected primitive
    /// shape counts as missing.
    pub fn from_value(record: &Value) -> Result<Self, ProcessError> {
        match record.get("type").and_then(Value::as_str) {
            Some("sample") => {
                let station_name = record.get("stationName").and_then(Value::as_str);
                let timestamp = record.get("timestamp").and_then(Value::as_i64);
                let temperature = record.get("temperature");
                let (Some(station_name), Some(timestamp), Some(temperature)) =
                    (station_name, timestamp, temperature)
                else {
                    return Err(ProcessError::MissingField);
                };
                Ok(Event::Sample {
                    station_name: station_name.to_string(),
                    timestamp,
                    temperature: parse_temperature(temperature)?,
                })
            }
            Some("control") => match record.get("command").and_then(Value::as_str) {
                Some("snapshot") => Ok(Event::Control(Command::Snapshot)),
                Some("reset") => Ok(Event::Control(Command::Reset)),
                _ => Err(ProcessError::UnknownControl),
            },
            _ => Err(ProcessError::UnknownEventType),
        }
    }
}

/// Temperatures arrive either as a JSON number or as a numeric string.
fn parse_temperature(value: &Value) -> Result<f64, ProcessError> {
    match value {
        Value::Number(n) => n.as_f64().ok_or(ProcessError::InvalidTemperature),
        Value::String(s) => s
            .trim()
            .parse()
            .map_err(|_| ProcessError::InvalidTemperature),
        _ => Err(ProcessError::InvalidTemperature),
    }
}
