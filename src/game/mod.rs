// Game module - the runner's simulation and its per-frame orchestration
//
// This module contains:
// - types.rs: GameState enum
// - world.rs: GameWorld, the simulation state shared by every component
// - controller.rs: GameController, the frame loop and input-driven transitions

// Module declarations
pub mod controller;
pub mod types;
pub mod world;

// Re-export types for convenience
pub use controller::GameController;
pub use types::*;
pub use world::GameWorld;
