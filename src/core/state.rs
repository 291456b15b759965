use crate::core::report::Report;

/// What the user is being shown right now. A scan moves the controller
/// from whatever it was displaying into `Loading`, then into exactly
/// one of `Ready` or `Error`.
#[derive(Debug, Clone)]
pub enum ScanState {
    Idle,
    Loading,
    Error(String),
    Ready(Report),
}

impl ScanState {
    pub fn label(&self) -> &'static str {
        match self {
            ScanState::Idle => "idle",
            ScanState::Loading => "loading",
            ScanState::Error(_) => "error",
            ScanState::Ready(_) => "ready",
        }
    }
}
