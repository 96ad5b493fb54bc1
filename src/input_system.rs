use crate::config::{ConfigError, ControlsConfig};
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::EventPump;

/// Actions the player can trigger
///
/// Decouples raw SDL2 input from the game controller, which only ever sees
/// these commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Begin a run (ignored while one is in progress)
    Start,
    /// Jump (ignored while already airborne)
    Jump,
    Quit,
}

/// Resolved key bindings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBindings {
    pub start: Keycode,
    pub jump: Keycode,
    pub quit: Keycode,
}

impl Default for KeyBindings {
    fn default() -> Self {
        KeyBindings {
            start: Keycode::Return,
            jump: Keycode::Space,
            quit: Keycode::Escape,
        }
    }
}

impl KeyBindings {
    /// Resolves SDL key names from the config
    pub fn from_config(controls: &ControlsConfig) -> Result<Self, ConfigError> {
        let resolve = |name: &str| {
            Keycode::from_name(name).ok_or_else(|| ConfigError::UnknownKey(name.to_string()))
        };

        Ok(KeyBindings {
            start: resolve(&controls.start)?,
            jump: resolve(&controls.jump)?,
            quit: resolve(&controls.quit)?,
        })
    }
}

/// InputSystem turns SDL2 events into GameActions
///
/// # Architecture
///
/// 1. Poll SDL2 events
/// 2. Match key presses against the bindings
/// 3. Return actions to the game loop, in event order
pub struct InputSystem {
    bindings: KeyBindings,
}

impl InputSystem {
    pub fn new(bindings: KeyBindings) -> Self {
        InputSystem { bindings }
    }

    /// Drains pending SDL2 events and returns the resulting actions
    pub fn poll_events(&self, event_pump: &mut EventPump) -> Vec<GameAction> {
        event_pump
            .poll_iter()
            .filter_map(|event| self.handle_event(&event))
            .collect()
    }

    pub fn handle_event(&self, event: &Event) -> Option<GameAction> {
        match event {
            Event::Quit { .. } => Some(GameAction::Quit),
            Event::KeyDown {
                keycode: Some(key),
                ..
            } => self.map_key(*key),
            _ => None,
        }
    }

    /// Maps a pressed key to its action, if it is bound
    pub fn map_key(&self, key: Keycode) -> Option<GameAction> {
        if key == self.bindings.start {
            Some(GameAction::Start)
        } else if key == self.bindings.jump {
            Some(GameAction::Jump)
        } else if key == self.bindings.quit {
            Some(GameAction::Quit)
        } else {
            None
        }
    }
}

impl Default for InputSystem {
    fn default() -> Self {
        Self::new(KeyBindings::default())
    }
}
