use thiserror::Error;

/// Fatal event-processing errors.
///
/// All of these abort the stream at the point of occurrence: events already
/// processed keep their side effects, no later event is consumed.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessError {
    /// A sample event is missing stationName, timestamp, or temperature.
    #[error("Not all keys are present in json")]
    MissingField,

    /// The temperature field is not parseable as a number.
    #[error("Temperature value is not valid")]
    InvalidTemperature,

    /// A control event carries a command other than snapshot or reset.
    #[error("Unknown control. Please provide either a snapshot or reset control")]
    UnknownControl,

    /// An event carries a type other than sample or control.
    #[error("Unknown input type. Please provide either a sample or control message")]
    UnknownEventType,
}
