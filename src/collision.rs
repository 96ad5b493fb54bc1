/// Collision detection for the runner
///
/// Everything here is a pure function over axis-aligned bounding boxes. The
/// detector only reports a hit; stopping the game is the caller's job.
///
/// # Architecture
///
/// - `Collidable` trait: anything with an on-screen bounding box
/// - `aabb_intersect()`: strict rectangle overlap test
/// - `detect_collision()`: first obstacle overlapping the character
use sdl2::rect::Rect;

/// Trait for things that take part in collision detection.
///
/// The returned `Rect` must match what is drawn on screen, scale included.
pub trait Collidable {
    fn get_bounds(&self) -> Rect;
}

/// Checks if two axis-aligned bounding boxes overlap.
///
/// Inequalities are strict: boxes that only share an edge do not collide.
///
/// # Example
///
/// ```rust
/// let character = Rect::new(100, 360, 80, 80);
/// let obstacle = Rect::new(180, 360, 50, 80);
///
/// assert!(!aabb_intersect(&character, &obstacle)); // touching, not overlapping
/// ```
pub fn aabb_intersect(a: &Rect, b: &Rect) -> bool {
    let x_overlap = a.x() < b.x() + b.width() as i32 && a.x() + a.width() as i32 > b.x();
    let y_overlap = a.y() < b.y() + b.height() as i32 && a.y() + a.height() as i32 > b.y();

    x_overlap && y_overlap
}

/// Returns the index of the first entity in `others` that overlaps `entity`.
///
/// # Example
///
/// ```rust
/// if let Some(index) = detect_collision(&character, obstacles.obstacles()) {
///     log::info!("Hit obstacle {}", index);
/// }
/// ```
pub fn detect_collision<T: Collidable>(entity: &impl Collidable, others: &[T]) -> Option<usize> {
    let entity_bounds = entity.get_bounds();

    others
        .iter()
        .position(|other| aabb_intersect(&entity_bounds, &other.get_bounds()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CharacterConfig, ObstacleConfig};
    use crate::obstacle::Obstacle;
    use crate::player::Character;

    fn obstacle_at(x: i32, y: i32) -> Obstacle {
        Obstacle::new(x, y, &ObstacleConfig::default())
    }

    #[test]
    fn test_aabb_intersect_overlapping() {
        let rect_a = Rect::new(0, 0, 32, 32);
        let rect_b = Rect::new(16, 16, 32, 32);

        assert!(aabb_intersect(&rect_a, &rect_b));
        assert!(aabb_intersect(&rect_b, &rect_a)); // Symmetric
    }

    #[test]
    fn test_aabb_intersect_touching_edges() {
        let rect_a = Rect::new(0, 0, 32, 32);
        let rect_b = Rect::new(32, 0, 32, 32);
        let rect_c = Rect::new(0, 32, 32, 32);

        assert!(!aabb_intersect(&rect_a, &rect_b));
        assert!(!aabb_intersect(&rect_a, &rect_c));
    }

    #[test]
    fn test_aabb_intersect_contained() {
        let large = Rect::new(0, 0, 100, 100);
        let small = Rect::new(25, 25, 50, 50);

        assert!(aabb_intersect(&large, &small));
        assert!(aabb_intersect(&small, &large));
    }

    #[test]
    fn test_character_hits_obstacle_at_same_x() {
        let character = Character::new(&CharacterConfig::default());
        let obstacles = vec![obstacle_at(100, 360)];

        assert_eq!(obstacles[0].get_bounds(), Rect::new(100, 360, 50, 80));
        assert_eq!(detect_collision(&character, &obstacles), Some(0));
    }

    #[test]
    fn test_character_touching_obstacle_edge_is_not_a_hit() {
        let character = Character::new(&CharacterConfig::default());
        let obstacles = vec![obstacle_at(180, 360)];

        assert_eq!(detect_collision(&character, &obstacles), None);
    }

    #[test]
    fn test_jumping_character_clears_obstacle() {
        let mut character = Character::new(&CharacterConfig::default());
        character.y = 280; // bottom edge at 360, obstacle top at 360
        let obstacles = vec![obstacle_at(100, 360)];

        assert_eq!(detect_collision(&character, &obstacles), None);
    }

    #[test]
    fn test_reports_first_hit_in_order() {
        let character = Character::new(&CharacterConfig::default());
        let obstacles = vec![obstacle_at(900, 360), obstacle_at(120, 360), obstacle_at(90, 360)];

        assert_eq!(detect_collision(&character, &obstacles), Some(1));
    }

    #[test]
    fn test_empty_list_never_collides() {
        let character = Character::new(&CharacterConfig::default());
        let obstacles: Vec<Obstacle> = Vec::new();

        assert_eq!(detect_collision(&character, &obstacles), None);
    }
}
