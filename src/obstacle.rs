//! Obstacles and their spawn/advance/prune cycle
//!
//! Obstacles enter at the right edge of the playfield on a fixed frame cadence
//! and slide left at a constant per-frame speed. Once the right edge of the
//! rendered box reaches x = 0 the obstacle is dropped.

use crate::collision::Collidable;
use crate::config::ObstacleConfig;
use sdl2::rect::Rect;

#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    pub x: i32,
    pub y: i32,
    /// Base size; drawn and collided at `scale` times this
    pub width: u32,
    pub height: u32,
    pub scale: u32,
}

impl Obstacle {
    pub fn new(x: i32, y: i32, config: &ObstacleConfig) -> Self {
        Obstacle {
            x,
            y,
            width: config.width,
            height: config.height,
            scale: config.scale,
        }
    }

    pub fn rendered_width(&self) -> u32 {
        self.width * self.scale
    }

    pub fn rendered_height(&self) -> u32 {
        self.height * self.scale
    }

    /// X of the rendered box's right edge
    pub fn right(&self) -> i32 {
        self.x + self.rendered_width() as i32
    }
}

impl Collidable for Obstacle {
    fn get_bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.rendered_width(), self.rendered_height())
    }
}

pub struct ObstacleManager {
    obstacles: Vec<Obstacle>,
    spawn_timer: u32,
    spawn_x: i32,
    spawn_y: i32,
    config: ObstacleConfig,
}

impl ObstacleManager {
    /// `spawn_x` is the playfield width, `spawn_y` the character's ground Y.
    pub fn new(config: ObstacleConfig, spawn_x: i32, spawn_y: i32) -> Self {
        ObstacleManager {
            obstacles: Vec::new(),
            spawn_timer: 0,
            spawn_x,
            spawn_y,
            config,
        }
    }

    /// Live obstacles in spawn order
    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    #[cfg(test)]
    pub fn spawn_timer(&self) -> u32 {
        self.spawn_timer
    }

    /// Runs one frame: move, prune, then maybe spawn.
    ///
    /// A newly spawned obstacle isn't moved on the frame it appears.
    pub fn advance(&mut self) {
        let speed = self.config.speed;
        for obstacle in &mut self.obstacles {
            obstacle.x -= speed;
        }
        self.obstacles.retain(|obstacle| obstacle.right() > 0);

        self.spawn_timer += 1;
        if self.spawn_timer >= self.config.spawn_interval {
            self.obstacles
                .push(Obstacle::new(self.spawn_x, self.spawn_y, &self.config));
            self.spawn_timer = 0;
            log::debug!("Spawned obstacle ({} live)", self.obstacles.len());
        }
    }

    /// Drops every obstacle and restarts the spawn cadence
    pub fn reset(&mut self) {
        self.obstacles.clear();
        self.spawn_timer = 0;
    }
}
