//! Movement primitives: directions, bounds, and clamped stepping.
use bevy::prelude::*;

/// One of the four movement directions the game understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveDirection {
    Left,
    Right,
    Up,
    Down,
}

impl MoveDirection {
    pub fn delta(self) -> Vec2 {
        match self {
            MoveDirection::Left => Vec2::new(-1.0, 0.0),
            MoveDirection::Right => Vec2::new(1.0, 0.0),
            MoveDirection::Up => Vec2::new(0.0, 1.0),
            MoveDirection::Down => Vec2::new(0.0, -1.0),
        }
    }
}

/// Axis-aligned movement limits in scene coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovementBounds {
    pub min_x: f32,
    pub max_x: f32,
    pub min_y: f32,
    pub max_y: f32,
}

impl MovementBounds {
    pub fn clamp(&self, position: Vec2) -> Vec2 {
        Vec2::new(
            position.x.clamp(self.min_x, self.max_x),
            position.y.clamp(self.min_y, self.max_y),
        )
    }

    #[allow(dead_code)]
    pub fn contains(&self, position: Vec2) -> bool {
        position.x >= self.min_x
            && position.x <= self.max_x
            && position.y >= self.min_y
            && position.y <= self.max_y
    }
}

/// Applies one movement step and clamps the result to the walkable area.
pub fn step(
    position: Vec2,
    direction: MoveDirection,
    step_size: f32,
    bounds: &MovementBounds,
) -> Vec2 {
    bounds.clamp(position + direction.delta() * step_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDS: MovementBounds = MovementBounds {
        min_x: 50.0,
        max_x: 700.0,
        min_y: 150.0,
        max_y: 400.0,
    };

    #[test]
    fn steps_move_by_the_step_size() {
        let start = Vec2::new(50.0, 400.0);
        let moved = step(start, MoveDirection::Right, 10.0, &BOUNDS);
        assert_eq!(moved, Vec2::new(60.0, 400.0));

        let moved = step(moved, MoveDirection::Down, 10.0, &BOUNDS);
        assert_eq!(moved, Vec2::new(60.0, 390.0));
    }

    #[test]
    fn steps_clamp_at_every_edge() {
        let corner = Vec2::new(50.0, 400.0);
        assert_eq!(step(corner, MoveDirection::Left, 10.0, &BOUNDS), corner);
        assert_eq!(step(corner, MoveDirection::Up, 10.0, &BOUNDS), corner);

        let other = Vec2::new(700.0, 150.0);
        assert_eq!(step(other, MoveDirection::Right, 10.0, &BOUNDS), other);
        assert_eq!(step(other, MoveDirection::Down, 10.0, &BOUNDS), other);
    }

    #[test]
    fn long_walks_stay_inside_the_bounds() {
        let mut position = Vec2::new(60.0, 390.0);
        for _ in 0..200 {
            position = step(position, MoveDirection::Right, 10.0, &BOUNDS);
            position = step(position, MoveDirection::Up, 10.0, &BOUNDS);
        }
        assert!(BOUNDS.contains(position));
        assert_eq!(position, Vec2::new(700.0, 400.0));
    }
}
