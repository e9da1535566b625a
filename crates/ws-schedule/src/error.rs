use thiserror::Error;

use ws_core::Tick;

#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("invalid schedule: delay {delay} is negative")]
    InvalidSchedule { delay: i64 },

    #[error("invalid schedule: due tick {due} is before the current tick {now}")]
    DueInPast { due: Tick, now: Tick },
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;
