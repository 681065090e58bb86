//! Registry of collidables and the nearest-collision query

use serde::{Deserialize, Serialize};

use super::collision::{Collidable, CollidableId, Collision, CollisionInfo};
use super::line::Line;
use super::obstacle::Obstacle;

/// Append-only registry of everything a ball can hit.
///
/// Balls hold no reference to it; they borrow it read-only for each advance.
/// Lookups are a linear scan, which is fine for the tens of shapes in a level
/// but is the first thing to index if scenes grow large.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameEnvironment<C = Obstacle> {
    collidables: Vec<C>,
}

impl<C> Default for GameEnvironment<C> {
    fn default() -> Self {
        Self {
            collidables: Vec::new(),
        }
    }
}

impl<C: Collidable> GameEnvironment<C> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a collidable. No duplicate check; order is preserved.
    pub fn add_collidable(&mut self, collidable: impl Into<C>) -> CollidableId {
        let id = CollidableId(self.collidables.len());
        self.collidables.push(collidable.into());
        id
    }

    pub fn get(&self, id: CollidableId) -> Option<&C> {
        self.collidables.get(id.0)
    }

    /// Mutable access for host-side updates between simulation passes
    pub fn get_mut(&mut self, id: CollidableId) -> Option<&mut C> {
        self.collidables.get_mut(id.0)
    }

    pub fn len(&self) -> usize {
        self.collidables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collidables.is_empty()
    }

    /// Collidables with their handles, in registration order
    pub fn iter(&self) -> impl Iterator<Item = (CollidableId, &C)> {
        self.collidables
            .iter()
            .enumerate()
            .map(|(i, c)| (CollidableId(i), c))
    }

    /// The collidable whose intersection with `trajectory` is nearest its
    /// start. Equal distances keep the earlier registration.
    pub fn closest_collision(&self, trajectory: &Line) -> Collision {
        if trajectory.is_degenerate() {
            log::warn!(
                "Degenerate trajectory at ({}, {}), skipping collision query",
                trajectory.start().x(),
                trajectory.start().y()
            );
            return Collision::Degenerate;
        }

        let start = trajectory.start();
        let mut closest: Option<(CollisionInfo, f64)> = None;

        for (id, collidable) in self.iter() {
            let rect = collidable.collision_rectangle();
            let Some(point) = trajectory.closest_intersection_to_start(&rect) else {
                continue;
            };

            let distance = start.distance(point);
            match closest {
                Some((_, best)) if distance >= best => {}
                _ => closest = Some((CollisionInfo::new(point, id), distance)),
            }
        }

        match closest {
            Some((info, _)) => Collision::Hit(info),
            None => Collision::Miss,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Block, Color, Point, Rectangle};

    fn block(x: f64, y: f64, w: f64, h: f64) -> Block {
        Block::new(Rectangle::new(Point::new(x, y), w, h), Color::GRAY)
    }

    fn env_of(blocks: Vec<Block>) -> GameEnvironment<Block> {
        let mut env: GameEnvironment<Block> = GameEnvironment::new();
        for b in blocks {
            env.add_collidable(b);
        }
        env
    }

    #[test]
    fn test_empty_environment_misses() {
        let env: GameEnvironment<Block> = GameEnvironment::new();
        assert!(env.is_empty());
        let trajectory = Line::from_coords(0.0, 0.0, 100.0, 100.0);
        assert_eq!(env.closest_collision(&trajectory), Collision::Miss);
    }

    #[test]
    fn test_closest_wins_regardless_of_order() {
        let near = block(20.0, 0.0, 10.0, 20.0);
        let far = block(60.0, 0.0, 10.0, 20.0);
        let trajectory = Line::from_coords(0.0, 10.0, 100.0, 10.0);

        for (blocks, near_index) in [(vec![near, far], 0), (vec![far, near], 1)] {
            let env = env_of(blocks);
            let info = env
                .closest_collision(&trajectory)
                .info()
                .expect("trajectory crosses both blocks");
            assert_eq!(info.collidable().index(), near_index);
            assert!(info.collision_point().approx_eq(Point::new(20.0, 10.0)));
        }
    }

    #[test]
    fn test_tie_keeps_first_registered() {
        // Two blocks sharing the same left edge
        let env = env_of(vec![
            block(50.0, 0.0, 10.0, 20.0),
            block(50.0, 0.0, 30.0, 20.0),
        ]);
        let trajectory = Line::from_coords(0.0, 10.0, 100.0, 10.0);
        let info = env.closest_collision(&trajectory).info().expect("hit");
        assert_eq!(info.collidable().index(), 0);
    }

    #[test]
    fn test_miss_and_degenerate() {
        let env = env_of(vec![block(50.0, 50.0, 10.0, 10.0)]);
        let clear = Line::from_coords(0.0, 0.0, 10.0, 0.0);
        assert_eq!(env.closest_collision(&clear), Collision::Miss);

        let dot = Line::from_coords(55.0, 50.0, 55.0, 50.0);
        assert_eq!(env.closest_collision(&dot), Collision::Degenerate);
    }

    #[test]
    fn test_ids_follow_registration_order() {
        let mut env: GameEnvironment<Block> = GameEnvironment::new();
        let a = env.add_collidable(block(0.0, 0.0, 1.0, 1.0));
        let b = env.add_collidable(block(5.0, 0.0, 1.0, 1.0));
        assert_eq!((a.index(), b.index()), (0, 1));
        assert_eq!(env.len(), 2);
        assert_eq!(
            env.get(b).map(|blk| blk.collision_rectangle().left()),
            Some(5.0)
        );
        assert!(env.get(CollidableId(9)).is_none());
        let ids: Vec<_> = env.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec![a, b]);
    }
}
