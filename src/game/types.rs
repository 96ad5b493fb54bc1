// Shared enums used throughout the game

/// Game state for run tracking
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Nothing has been started yet
    Idle,
    Running,
    /// Hit an obstacle; waits for the next start
    Stopped,
}

impl GameState {
    pub fn is_running(&self) -> bool {
        matches!(self, GameState::Running)
    }
}
