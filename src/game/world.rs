// GameWorld struct
//
// This module contains the GameWorld struct which owns the simulation state:
// the character, its jump, and the obstacles. The controller owns the world
// and lends it to each component in turn.

use crate::collision;
use crate::config::GameConfig;
use crate::kinematics::Jump;
use crate::obstacle::ObstacleManager;
use crate::player::Character;
use std::time::Duration;

/// GameWorld encapsulates all simulation state
pub struct GameWorld {
    pub character: Character,
    pub jump: Jump,
    pub obstacles: ObstacleManager,
}

impl GameWorld {
    pub fn new(config: &GameConfig) -> Self {
        GameWorld {
            character: Character::new(&config.character),
            jump: Jump::new(&config.jump, &config.character),
            obstacles: ObstacleManager::new(
                config.obstacles.clone(),
                config.playfield.width as i32,
                config.character.ground_y,
            ),
        }
    }

    /// Runs the jump ticks that fell due during `elapsed`
    pub fn advance_jump(&mut self, elapsed: Duration) {
        self.jump.advance_time(elapsed, &mut self.character);
    }

    /// Index of the first obstacle overlapping the character
    pub fn detect_collision(&self) -> Option<usize> {
        collision::detect_collision(&self.character, self.obstacles.obstacles())
    }
}
