/// Holder for the character sprite.
///
/// Starts empty and becomes ready exactly once, when the image finishes
/// loading. The renderer checks `image()` every frame and skips the sprite
/// until then.
pub struct SpriteSlot<I> {
    image: Option<I>,
}

impl<I> SpriteSlot<I> {
    pub fn new() -> Self {
        SpriteSlot { image: None }
    }

    /// Marks the sprite loaded. Later loads are ignored.
    ///
    /// Returns true if this call made the slot ready.
    pub fn load(&mut self, image: I) -> bool {
        if self.image.is_some() {
            return false;
        }
        self.image = Some(image);
        true
    }

    pub fn is_ready(&self) -> bool {
        self.image.is_some()
    }

    pub fn image(&self) -> Option<&I> {
        self.image.as_ref()
    }
}

impl<I> Default for SpriteSlot<I> {
    fn default() -> Self {
        Self::new()
    }
}
