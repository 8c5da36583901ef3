use serde_json::Value;

/// Common view over every notification emitted by the hiring workflow.
pub trait HiringEvent {
    /// Stable, kebab-case event name (`candidate-matched`, `employee-hired`, ...).
    fn kind(&self) -> &'static str;

    /// JSON rendering of the event payload for journals and console output.
    fn payload(&self) -> Value;
}
