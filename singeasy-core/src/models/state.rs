/// Recording session state machine.
///
/// State transitions:
/// ```text
/// idle --start()--> recording --stop()--> stopped --reset()--> idle
/// ```
///
/// A failed `start()` leaves the machine in idle. There is no direct
/// recording → idle edge other than `reset()`, which discards the take.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Idle,
    Recording,
    Stopped,
}

impl SessionPhase {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_recording(&self) -> bool {
        matches!(self, Self::Recording)
    }

    pub fn is_stopped(&self) -> bool {
        matches!(self, Self::Stopped)
    }
}
