use crate::constants::*;
use crate::error::*;
use serde::{Deserialize, Serialize};

/// Tunables for one planner instance. Every field has a default, so a
/// partial JSON object is a valid config.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Width of the (square) arena; lane boundaries scale with it.
    pub arena_size: u8,
    /// Losses a lane must reach before it is reinforced.
    pub reinforce_threshold: u32,
    /// Bits to bank before sending a wave once the opening is over.
    pub stockpile_threshold: f32,
    /// Turns during which units are sent as soon as they are affordable.
    pub opening_turns: u32,
    /// Turns between opponent-health checks. Zero disables side rotation.
    pub stall_window: u32,
    /// Upper bound on deployments in one turn.
    pub max_deployments_per_turn: u32,
    /// Retire attributed losses from the expectation store so each one
    /// counts once. With `false` a missing structure that is never rebuilt
    /// is counted again every turn.
    pub count_each_loss_once: bool,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        PlannerConfig {
            arena_size: ARENA_SIZE,
            reinforce_threshold: REINFORCE_THRESHOLD,
            stockpile_threshold: STOCKPILE_THRESHOLD,
            opening_turns: OPENING_TURNS,
            stall_window: STALL_WINDOW,
            max_deployments_per_turn: MAX_DEPLOYMENTS_PER_TURN,
            count_each_loss_once: true,
        }
    }
}

impl PlannerConfig {
    pub fn from_json(json: &str) -> PlannerResult<PlannerConfig> {
        let config: PlannerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> PlannerResult<()> {
        if self.arena_size < 4 || self.arena_size % 2 != 0 {
            return Err(PlannerError::InvalidConfig(format!(
                "arena size {} must be even and at least 4",
                self.arena_size
            )));
        }
        if self.reinforce_threshold == 0 {
            return Err(PlannerError::InvalidConfig(
                "reinforce threshold must be at least 1".to_string(),
            ));
        }
        if !(self.stockpile_threshold.is_finite() && self.stockpile_threshold >= 0.0) {
            return Err(PlannerError::InvalidConfig(format!(
                "stockpile threshold {} must be a non-negative number",
                self.stockpile_threshold
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let config = PlannerConfig::from_json(r#"{"reinforce_threshold": 5}"#).unwrap();
        assert_eq!(config.reinforce_threshold, 5);
        assert_eq!(config.arena_size, ARENA_SIZE);
        assert!(config.count_each_loss_once);
    }

    #[test]
    fn odd_arena_is_rejected() {
        assert!(matches!(
            PlannerConfig::from_json(r#"{"arena_size": 27}"#),
            Err(PlannerError::InvalidConfig(_))
        ));
    }

    #[test]
    fn zero_threshold_is_rejected() {
        assert!(matches!(
            PlannerConfig::from_json(r#"{"reinforce_threshold": 0}"#),
            Err(PlannerError::InvalidConfig(_))
        ));
    }
}
