use crate::ssl::enums::monitor_state::MonitorState;

impl std::fmt::Display for MonitorState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MonitorState::Idle => f.write_str("idle"),
            MonitorState::Running => f.write_str("running"),
            MonitorState::Stopped => f.write_str("stopped"),
        }
    }
}
