//! Progression gates: badge count and level cap

use serde::Serialize;

pub const DEFAULT_GATE_COUNT: i32 = 8;
pub const DEFAULT_LEVEL_CAP: i32 = 100;

/// How far into the game the player is
///
/// Both values start fully permissive and change only through the setters.
/// No range is enforced; a negative level cap simply unlocks no level-up
/// moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Progression {
    gate_count: i32,
    level_cap: i32,
}

impl Progression {
    pub fn new(gate_count: i32, level_cap: i32) -> Self {
        Self {
            gate_count,
            level_cap,
        }
    }

    /// Badges earned
    pub fn gate_count(&self) -> i32 {
        self.gate_count
    }

    pub fn level_cap(&self) -> i32 {
        self.level_cap
    }

    pub fn set_gate_count(&mut self, gate_count: i32) {
        self.gate_count = gate_count;
    }

    pub fn set_level_cap(&mut self, level_cap: i32) {
        self.level_cap = level_cap;
    }

    /// Check if a move learned at `level` is reachable
    pub fn allows_level(&self, level: i32) -> bool {
        level <= self.level_cap
    }

    /// Check if a machine needing `required_gate` badges is usable
    pub fn allows_gate(&self, required_gate: i32) -> bool {
        required_gate <= self.gate_count
    }
}

impl Default for Progression {
    fn default() -> Self {
        Self::new(DEFAULT_GATE_COUNT, DEFAULT_LEVEL_CAP)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_permissive() {
        let progression = Progression::default();
        assert_eq!(progression.gate_count(), 8);
        assert_eq!(progression.level_cap(), 100);
        assert!(progression.allows_level(100));
        assert!(progression.allows_gate(8));
    }

    #[test]
    fn test_setters_accept_any_value() {
        let mut progression = Progression::default();
        progression.set_level_cap(-5);
        progression.set_gate_count(999);
        assert_eq!(progression.level_cap(), -5);
        assert!(!progression.allows_level(1));
        assert!(progression.allows_gate(998));
    }

    #[test]
    fn test_boundaries_are_inclusive() {
        let progression = Progression::new(4, 30);
        assert!(progression.allows_level(30));
        assert!(!progression.allows_level(31));
        assert!(progression.allows_gate(4));
        assert!(!progression.allows_gate(5));
    }
}
