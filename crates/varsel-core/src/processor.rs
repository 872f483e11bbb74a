use serde_json::Value;

use crate::error::ProcessError;
use crate::event::{Command, Event};
use crate::report::Report;
use crate::store::AggregateStore;

/// Process a stream of raw event records into a stream of reports.
///
/// The returned iterator is lazy and one-shot: it owns a fresh
/// [`AggregateStore`], pulls one input record at a time, and yields at most
/// one report per event. Sample events update the store and yield nothing;
/// control events read or clear the store and yield zero or one report.
///
/// The first error ends the stream: it is yielded as `Err`, no later event
/// is consumed, and reports already yielded are not retracted.
pub fn process_events<I>(events: I) -> Reports<I::IntoIter>
where
    I: IntoIterator<Item = Value>,
{
    Reports {
        events: events.into_iter(),
        store: AggregateStore::new(),
        failed: false,
    }
}

/// Iterator returned by [`process_events`].
pub struct Reports<I> {
    events: I,
    store: AggregateStore,
    failed: bool,
}

impl<I> Reports<I>
where
    I: Iterator<Item = Value>,
{
    fn dispatch(&mut self, event: Event) -> Option<Report> {
        match event {
            Event::Sample {
                station_name,
                timestamp,
                temperature,
            } => {
                self.store.observe_timestamp(timestamp);
                self.store.record_sample(&station_name, temperature);
                None
            }
            Event::Control(Command::Snapshot) => {
                // A snapshot of an empty store is suppressed, not emitted
                // as an empty report.
                if !self.store.has_stations() {
                    return None;
                }
                Some(Report::Snapshot {
                    as_of: self.store.latest_timestamp(),
                    stations: self.store.snapshot_view(),
                })
            }
            Event::Control(Command::Reset) => {
                self.store.clear_stations();
                Some(Report::Reset {
                    as_of: self.store.latest_timestamp(),
                })
            }
        }
    }
}

impl<I> Iterator for Reports<I>
where
    I: Iterator<Item = Value>,
{
    type Item = Result<Report, ProcessError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        loop {
            let record = self.events.next()?;
            match Event::from_value(&record) {
                Ok(event) => {
                    if let Some(report) = self.dispatch(event) {
                        return Some(Ok(report));
                    }
                }
                Err(err) => {
                    self.failed = true;
                    return Some(Err(err));
                }
            }
        }
    }
}
