/// Frame rendering for the runner
///
/// Draw order every frame is fixed: clear, ground, character, obstacles.
/// The renderer only reads simulation state.
///
/// # Architecture
///
/// - `DrawSurface` trait: the three primitives the game needs from a canvas
/// - `impl DrawSurface for Canvas<Window>`: the SDL2 backend
/// - `Renderer`: draws one frame onto any `DrawSurface`
///
/// Keeping the surface behind a trait means the full frame can be checked in
/// unit tests with a recording surface, no SDL2 context needed.
use crate::config::PlayfieldConfig;
use crate::obstacle::Obstacle;
use crate::player::Character;
use crate::sprite::SpriteSlot;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::{Canvas, Texture};
use sdl2::video::Window;

pub const BACKGROUND_COLOR: Color = Color::RGB(255, 255, 255);
pub const GROUND_COLOR: Color = Color::RGB(51, 51, 51);
pub const OBSTACLE_COLOR: Color = Color::RGB(255, 0, 0);

/// Drawing primitives over a fixed-size surface.
///
/// `I` is the image type the surface can blit (an SDL2 `Texture` in the game).
pub trait DrawSurface<I> {
    /// Wipes the whole surface
    fn clear(&mut self) -> Result<(), String>;

    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<(), String>;

    /// Draws the whole image stretched to `dest`
    fn draw_image(&mut self, image: &I, dest: Rect) -> Result<(), String>;
}

impl<'a> DrawSurface<Texture<'a>> for Canvas<Window> {
    fn clear(&mut self) -> Result<(), String> {
        self.set_draw_color(BACKGROUND_COLOR);
        Canvas::clear(self);
        Ok(())
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<(), String> {
        self.set_draw_color(color);
        Canvas::fill_rect(self, rect)
    }

    fn draw_image(&mut self, image: &Texture<'a>, dest: Rect) -> Result<(), String> {
        self.copy(image, None, Some(dest))
    }
}

pub struct Renderer {
    ground: Rect,
}

impl Renderer {
    pub fn new(playfield: &PlayfieldConfig) -> Self {
        Renderer {
            ground: Rect::new(
                0,
                playfield.ground_line_y,
                playfield.width,
                playfield.ground_thickness,
            ),
        }
    }

    /// Draws a full frame.
    ///
    /// The character is skipped until its sprite has loaded.
    pub fn draw_frame<I, S: DrawSurface<I>>(
        &self,
        surface: &mut S,
        character: &Character,
        sprite: &SpriteSlot<I>,
        obstacles: &[Obstacle],
    ) -> Result<(), String> {
        surface.clear()?;
        surface.fill_rect(self.ground, GROUND_COLOR)?;
        if let Some(image) = sprite.image() {
            Self::draw_character(surface, character, image)?;
        }
        for obstacle in obstacles {
            surface.fill_rect(
                Rect::new(
                    obstacle.x,
                    obstacle.y,
                    obstacle.rendered_width(),
                    obstacle.rendered_height(),
                ),
                OBSTACLE_COLOR,
            )?;
        }
        Ok(())
    }

    pub fn draw_character<I, S: DrawSurface<I>>(
        surface: &mut S,
        character: &Character,
        image: &I,
    ) -> Result<(), String> {
        surface.draw_image(
            image,
            Rect::new(character.x, character.y, character.size, character.size),
        )
    }
}
