//! Jump kinematics
//!
//! A jump is a two-phase linear motion driven by its own fixed-period timer:
//! climb by `ascent_step` per tick until the apex, then fall by `gravity` per
//! tick until the character is back on the ground. The timer is armed when a
//! jump starts and released when it lands, so no ticks run between jumps.

use crate::config::{CharacterConfig, JumpConfig};
use crate::player::Character;
use crate::timer::FixedTimer;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpPhase {
    Grounded,
    Ascending,
    Descending,
}

pub struct Jump {
    ground_y: i32,
    apex_y: i32,
    ascent_step: i32,
    gravity: i32,
    phase: JumpPhase,
    timer: FixedTimer,
}

impl Jump {
    pub fn new(jump: &JumpConfig, character: &CharacterConfig) -> Self {
        Jump {
            ground_y: character.ground_y,
            apex_y: character.ground_y - jump.height,
            ascent_step: jump.ascent_step,
            gravity: jump.gravity,
            phase: JumpPhase::Grounded,
            timer: FixedTimer::new(Duration::from_millis(jump.tick_ms)),
        }
    }

    pub fn is_jumping(&self) -> bool {
        self.phase != JumpPhase::Grounded
    }

    #[cfg(test)]
    pub fn phase(&self) -> JumpPhase {
        self.phase
    }

    /// Begins a jump. Returns false (and changes nothing) if one is already active.
    pub fn start_jump(&mut self) -> bool {
        if self.is_jumping() {
            return false;
        }

        self.phase = JumpPhase::Ascending;
        self.timer.arm();
        log::debug!("Jump started");
        true
    }

    /// Applies a single kinematics tick to the character.
    pub fn tick(&mut self, character: &mut Character) {
        match self.phase {
            JumpPhase::Grounded => {}
            JumpPhase::Ascending => {
                // Clamp so a coarse step can't overshoot the apex
                character.y = (character.y - self.ascent_step).max(self.apex_y);
                if character.y <= self.apex_y {
                    self.phase = JumpPhase::Descending;
                }
            }
            JumpPhase::Descending => {
                character.y += self.gravity;
                if character.y >= self.ground_y {
                    character.y = self.ground_y;
                    self.land();
                }
            }
        }
    }

    /// Feeds wall time to the jump timer and runs every tick that fell due.
    ///
    /// Stops as soon as the jump lands, so leftover time never leaks into the
    /// next jump.
    pub fn advance_time(&mut self, elapsed: Duration, character: &mut Character) {
        let due = self.timer.advance(elapsed);
        for _ in 0..due {
            if !self.timer.is_armed() {
                break;
            }
            self.tick(character);
        }
    }

    /// Aborts an in-flight jump and releases the timer. The character stays
    /// wherever it was.
    pub fn cancel(&mut self) {
        if self.is_jumping() {
            log::debug!("Jump cancelled mid-air");
        }
        self.phase = JumpPhase::Grounded;
        self.timer.cancel();
    }

    #[cfg(test)]
    pub fn timer_armed(&self) -> bool {
        self.timer.is_armed()
    }

    fn land(&mut self) {
        self.phase = JumpPhase::Grounded;
        self.timer.cancel();
        log::debug!("Jump landed");
    }
}
