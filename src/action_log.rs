use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Things the viewer did during a session
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Action {
    /// Walked to (x, y)
    Move { x: f64, y: f64 },
    /// Turned to a new heading
    Rotate { direction: f64 },
    /// A step into a wall was refused
    Blocked { x: f64, y: f64 },
    ToggleMiniMap { visible: bool },
    /// Maze picture copied to the clipboard
    CopyMaze,
    /// New maze generated with this seed
    Regenerate { seed: u64 },
}

/// Logged action with timestamp
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoggedAction {
    /// Milliseconds since start
    pub timestamp_ms: u64,
    pub action: Action,
}

/// Session logger
pub struct ActionLog {
    start_time: Instant,
    actions: Vec<LoggedAction>,
}

impl Default for ActionLog {
    fn default() -> Self {
        Self::new()
    }
}

impl ActionLog {
    pub fn new() -> Self {
        ActionLog {
            start_time: Instant::now(),
            actions: Vec::new(),
        }
    }

    /// Log an action with the current timestamp
    pub fn log(&mut self, action: Action) {
        let timestamp_ms = self.start_time.elapsed().as_millis() as u64;
        self.actions.push(LoggedAction {
            timestamp_ms,
            action,
        });
    }

    pub fn actions(&self) -> &[LoggedAction] {
        &self.actions
    }

    /// Save log to JSON file
    pub fn save_to_file(&self, path: &str) -> Result<()> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.actions)?)
    }

    /// Print log to console
    pub fn print(&self) {
        println!("\n=== Action Log ({} events) ===", self.actions.len());
        for (i, logged) in self.actions.iter().enumerate() {
            println!("[{:6}ms] #{:3} {:?}", logged.timestamp_ms, i + 1, logged.action);
        }
        println!("=== End of Log ===\n");
    }

    /// Get summary statistics
    pub fn summary(&self) -> String {
        let mut moves = 0;
        let mut turns = 0;
        let mut blocked = 0;
        let mut regenerations = 0;

        for logged in &self.actions {
            match &logged.action {
                Action::Move { .. } => moves += 1,
                Action::Rotate { .. } => turns += 1,
                Action::Blocked { .. } => blocked += 1,
                Action::Regenerate { .. } => regenerations += 1,
                _ => {}
            }
        }

        let duration = self.actions.last().map_or(0, |last| last.timestamp_ms);

        format!(
            "Session Duration: {}ms\n\
             Total Events: {}\n\
             Movement: {} steps, {} turns, {} blocked\n\
             Mazes Generated: {}",
            duration,
            self.actions.len(),
            moves,
            turns,
            blocked,
            regenerations
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_counts() {
        let mut log = ActionLog::new();
        log.log(Action::Move { x: 1.5, y: 1.6 });
        log.log(Action::Move { x: 1.5, y: 1.7 });
        log.log(Action::Rotate { direction: 0.1 });
        log.log(Action::Blocked { x: 1.5, y: 1.7 });
        log.log(Action::CopyMaze);

        let summary = log.summary();
        assert!(summary.contains("Total Events: 5"));
        assert!(summary.contains("2 steps, 1 turns, 1 blocked"));
        assert!(summary.contains("Mazes Generated: 0"));
    }

    #[test]
    fn test_json_round_trip() {
        let mut log = ActionLog::new();
        log.log(Action::Regenerate { seed: 7 });
        log.log(Action::ToggleMiniMap { visible: true });

        let json = log.to_json().unwrap();
        let parsed: Vec<LoggedAction> = serde_json::from_str(&json).unwrap();
        let actions: Vec<Action> = parsed.into_iter().map(|l| l.action).collect();
        assert_eq!(
            actions,
            vec![Action::Regenerate { seed: 7 }, Action::ToggleMiniMap { visible: true }]
        );
    }
}
