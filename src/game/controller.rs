// GameController - frame loop and state transitions
//
// Two callbacks drive the game, both from the main thread:
// - run_frame(): once per display refresh, while a frame is scheduled
// - advance_time(): feeds wall time to the fixed-period jump timer
// Input actions (start/jump/quit) change state between those calls.

use crate::config::GameConfig;
use crate::input_system::GameAction;
use crate::render::{DrawSurface, Renderer};
use crate::sprite::SpriteSlot;
use std::time::Duration;

use super::{GameState, GameWorld};

/// Owns the simulation and decides what happens each frame.
///
/// `I` is the sprite image type, an SDL2 `Texture` in the real game.
pub struct GameController<I> {
    world: GameWorld,
    state: GameState,
    renderer: Renderer,
    sprite: SpriteSlot<I>,
    frame_scheduled: bool,
    frames_survived: u64,
    shut_down: bool,
}

impl<I> GameController<I> {
    pub fn new(config: &GameConfig) -> Self {
        GameController {
            world: GameWorld::new(config),
            state: GameState::Idle,
            renderer: Renderer::new(&config.playfield),
            sprite: SpriteSlot::new(),
            frame_scheduled: false,
            frames_survived: 0,
            shut_down: false,
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state.is_running()
    }

    #[cfg(test)]
    pub fn world(&self) -> &GameWorld {
        &self.world
    }

    /// Whether the main loop should call `run_frame` on the next refresh
    pub fn frame_scheduled(&self) -> bool {
        self.frame_scheduled
    }

    /// Frames completed in the current (or last) run
    pub fn frames_survived(&self) -> u64 {
        self.frames_survived
    }

    /// Applies one input action.
    ///
    /// Returns false once the game should exit.
    pub fn handle_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Start => {
                self.start();
            }
            GameAction::Jump => {
                self.jump();
            }
            GameAction::Quit => {
                self.shutdown();
                return false;
            }
        }
        true
    }

    /// Idle/Stopped -> Running. Ignored while a run is in progress.
    pub fn start(&mut self) -> bool {
        if self.is_running() || self.shut_down {
            return false;
        }

        self.world.obstacles.reset();
        self.state = GameState::Running;
        self.frames_survived = 0;
        self.frame_scheduled = true;
        log::info!("Game started");
        true
    }

    /// Starts a jump if running and not already airborne.
    ///
    /// Jump input outside a run (Idle or Stopped) is dropped, so a new run
    /// never begins mid-air from a jump pressed on the title screen.
    pub fn jump(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        self.world.jump.start_jump()
    }

    /// Runs the jump ticks due after `elapsed` of wall time
    pub fn advance_time(&mut self, elapsed: Duration) {
        if self.shut_down {
            return;
        }
        self.world.advance_jump(elapsed);
    }

    /// One scheduled frame: draw, advance obstacles, check for a hit.
    ///
    /// The next frame is only scheduled if the run survived this one.
    pub fn run_frame<S: DrawSurface<I>>(&mut self, surface: &mut S) -> Result<(), String> {
        if !self.frame_scheduled {
            return Ok(());
        }
        if !self.is_running() {
            self.frame_scheduled = false;
            return Ok(());
        }

        self.renderer.draw_frame(
            surface,
            &self.world.character,
            &self.sprite,
            self.world.obstacles.obstacles(),
        )?;
        self.world.obstacles.advance();
        self.frames_survived += 1;

        if let Some(index) = self.world.detect_collision() {
            self.state = GameState::Stopped;
            log::info!(
                "Game over: hit obstacle {} after {} frames",
                index,
                self.frames_survived
            );
        }

        self.frame_scheduled = self.is_running();
        Ok(())
    }

    /// Called once the character sprite finishes loading.
    ///
    /// Draws the character straight away; every later frame includes it.
    pub fn on_sprite_loaded<S: DrawSurface<I>>(
        &mut self,
        surface: &mut S,
        image: I,
    ) -> Result<(), String> {
        if self.shut_down || self.sprite.is_ready() {
            return Ok(());
        }
        self.sprite.load(image);

        log::debug!("Character sprite ready");
        match self.sprite.image() {
            Some(image) => Renderer::draw_character(surface, &self.world.character, image),
            None => Ok(()),
        }
    }

    /// Tears the game down: cancels the jump timer and the frame schedule.
    ///
    /// Nothing mutates the world after this returns.
    pub fn shutdown(&mut self) {
        if self.shut_down {
            return;
        }

        self.world.jump.cancel();
        self.frame_scheduled = false;
        self.state = GameState::Stopped;
        self.shut_down = true;
        log::info!("Game shut down");
    }
}

impl<I> Drop for GameController<I> {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::obstacle::Obstacle;
    use crate::render::testing::{DrawCall, RecordingSurface};
    use crate::render::{GROUND_COLOR, OBSTACLE_COLOR};
    use sdl2::rect::Rect;

    const TICK: Duration = Duration::from_millis(20);

    fn controller() -> GameController<&'static str> {
        GameController::new(&GameConfig::default())
    }

    /// Runs frames until the schedule stops or `limit` is hit
    fn run_frames(
        game: &mut GameController<&'static str>,
        surface: &mut RecordingSurface,
        limit: usize,
    ) -> usize {
        let mut count = 0;
        while game.frame_scheduled() && count < limit {
            game.run_frame(surface).unwrap();
            count += 1;
        }
        count
    }

    #[test]
    fn test_initial_state_is_idle() {
        let game = controller();

        assert_eq!(game.state(), GameState::Idle);
        assert!(!game.is_running());
        assert!(!game.frame_scheduled());
    }

    #[test]
    fn test_start_resets_obstacles_and_runs() {
        let mut game = controller();
        let mut surface = RecordingSurface::default();
        game.start();
        run_frames(&mut game, &mut surface, 200);
        assert!(!game.world().obstacles.obstacles().is_empty());

        // Force a stop, then restart
        game.state = GameState::Stopped;
        assert!(game.start());

        assert!(game.is_running());
        assert!(game.frame_scheduled());
        assert!(game.world().obstacles.obstacles().is_empty());
        assert_eq!(game.world().obstacles.spawn_timer(), 0);
    }

    #[test]
    fn test_start_while_running_is_ignored() {
        let mut game = controller();
        let mut surface = RecordingSurface::default();
        game.start();
        run_frames(&mut game, &mut surface, 160);
        let before = game.world().obstacles.obstacles().to_vec();

        assert!(!game.start());
        assert_eq!(game.world().obstacles.obstacles(), before.as_slice());
        assert_eq!(game.frames_survived(), 160);
    }

    #[test]
    fn test_jump_ignored_unless_running() {
        let mut game = controller();

        assert!(!game.jump());
        game.advance_time(Duration::from_secs(1));
        assert_eq!(game.world().character.y, 360);

        // Same after a run ends in a collision
        let mut surface = RecordingSurface::default();
        game.start();
        run_frames(&mut game, &mut surface, 1000);
        assert_eq!(game.state(), GameState::Stopped);

        assert!(game.handle_action(GameAction::Jump));
        assert!(!game.world().jump.is_jumping());
        game.advance_time(Duration::from_secs(1));
        assert_eq!(game.world().character.y, 360);
    }

    #[test]
    fn test_second_jump_ignored_while_airborne() {
        let mut game = controller();
        game.start();

        assert!(game.jump());
        game.advance_time(TICK * 3);
        assert!(!game.jump());
        game.advance_time(TICK);

        assert_eq!(game.world().character.y, 300);
    }

    #[test]
    fn test_frame_order_draw_then_advance() {
        let mut game = controller();
        let mut surface = RecordingSurface::default();
        game.start();
        run_frames(&mut game, &mut surface, 150);
        assert_eq!(game.world().obstacles.obstacles().len(), 1);

        surface.calls.clear();
        game.run_frame(&mut surface).unwrap();

        // Drawn where it was before this frame's advance
        assert_eq!(
            surface.calls,
            vec![
                DrawCall::Clear,
                DrawCall::FillRect(Rect::new(0, 420, 1200, 5), GROUND_COLOR),
                DrawCall::FillRect(Rect::new(1200, 360, 50, 80), OBSTACLE_COLOR),
            ]
        );
        assert_eq!(game.world().obstacles.obstacles()[0].x, 1193);
    }

    #[test]
    fn test_collision_stops_run_and_schedule() {
        let mut game = controller();
        let mut surface = RecordingSurface::default();
        game.start();

        let frames = run_frames(&mut game, &mut surface, 1000);

        // Spawn on frame 150, then 146 moves to reach x=178 (< 180)
        assert_eq!(frames, 296);
        assert_eq!(game.state(), GameState::Stopped);
        assert!(!game.is_running());
        assert!(!game.frame_scheduled());
        assert_eq!(game.frames_survived(), 296);
        assert_eq!(game.world().obstacles.obstacles()[0].x, 178);

        surface.calls.clear();
        let obstacles_before: Vec<Obstacle> = game.world().obstacles.obstacles().to_vec();
        game.run_frame(&mut surface).unwrap();

        assert!(surface.calls.is_empty());
        assert_eq!(game.world().obstacles.obstacles(), obstacles_before.as_slice());
    }

    #[test]
    fn test_restart_after_collision() {
        let mut game = controller();
        let mut surface = RecordingSurface::default();
        game.start();
        run_frames(&mut game, &mut surface, 1000);
        assert_eq!(game.state(), GameState::Stopped);

        assert!(game.handle_action(GameAction::Start));

        assert!(game.is_running());
        assert!(game.world().obstacles.obstacles().is_empty());
        assert_eq!(game.frames_survived(), 0);
    }

    #[test]
    fn test_timed_jump_clears_obstacle() {
        let mut game = controller();
        let mut surface = RecordingSurface::default();
        game.start();

        // One jump tick per frame; the obstacle overlaps the character's
        // columns on frames 296..=314
        for frame in 1..=440 {
            if frame == 290 {
                assert!(game.jump());
            }
            game.advance_time(TICK);
            game.run_frame(&mut surface).unwrap();
            assert!(game.is_running(), "hit on frame {}", frame);
        }

        assert!(!game.world().jump.is_jumping());
        assert_eq!(game.world().character.y, 360);
    }

    #[test]
    fn test_sprite_drawn_on_load_and_every_frame_after() {
        let mut game = controller();
        let mut surface = RecordingSurface::default();

        game.on_sprite_loaded(&mut surface, "dino").unwrap();
        assert_eq!(
            surface.calls,
            vec![DrawCall::Image("dino", Rect::new(100, 360, 80, 80))]
        );

        surface.calls.clear();
        game.on_sprite_loaded(&mut surface, "again").unwrap();
        assert!(surface.calls.is_empty());

        game.start();
        game.run_frame(&mut surface).unwrap();
        assert!(surface.calls.contains(&DrawCall::Image("dino", Rect::new(100, 360, 80, 80))));
    }

    #[test]
    fn test_character_not_drawn_before_sprite_loads() {
        let mut game = controller();
        let mut surface = RecordingSurface::default();
        game.start();

        game.run_frame(&mut surface).unwrap();

        assert_eq!(surface.calls.len(), 2);
    }

    #[test]
    fn test_shutdown_mid_jump_freezes_state() {
        let mut game = controller();
        let mut surface = RecordingSurface::default();
        game.start();
        game.jump();
        game.advance_time(TICK * 2);
        let frozen_y = game.world().character.y;

        assert!(!game.handle_action(GameAction::Quit));

        game.advance_time(Duration::from_secs(5));
        game.run_frame(&mut surface).unwrap();

        assert_eq!(game.world().character.y, frozen_y);
        assert!(!game.world().jump.timer_armed());
        assert!(!game.frame_scheduled());
        assert!(surface.calls.is_empty());
        assert!(!game.start());
    }
}
