//! Stop-time records: the join between trips and stops.

use serde::{Deserialize, Serialize};

use super::{ScheduleTime, StopId, TimeError, TripId};

/// A row from the `stop_times` table, with times still as text.
///
/// Times are parsed when the schedule is indexed; a row with an
/// unparseable time is dropped there rather than failing the whole load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StopTime {
    pub trip_id: TripId,
    pub stop_id: StopId,
    pub arrival_time: String,
    pub departure_time: String,
    pub stop_sequence: u32,
}

impl StopTime {
    /// Parse both times of this record.
    pub fn parse_times(&self) -> Result<(ScheduleTime, ScheduleTime), TimeError> {
        let arrival = ScheduleTime::parse(&self.arrival_time)?;
        let departure = ScheduleTime::parse(&self.departure_time)?;
        Ok((arrival, departure))
    }
}

/// A stop-time with validated times, as held by the schedule index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimedStop {
    pub trip_id: TripId,
    pub stop_id: StopId,
    pub arrival: ScheduleTime,
    pub departure: ScheduleTime,
    pub sequence: u32,
}

impl TimedStop {
    /// Validate a raw record.
    pub fn from_record(record: &StopTime) -> Result<Self, TimeError> {
        let (arrival, departure) = record.parse_times()?;
        Ok(Self {
            trip_id: record.trip_id.clone(),
            stop_id: record.stop_id.clone(),
            arrival,
            departure,
            sequence: record.stop_sequence,
        })
    }
}
