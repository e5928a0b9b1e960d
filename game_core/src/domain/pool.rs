// Fixed-capacity bullet storage reused across shots.

use super::state::BulletState;
use super::systems::projectiles::advance_bullet;

/// Slot index plus the generation it was handed out under.
///
/// Every `acquire` bumps the slot's generation, so an id kept past the bullet's reuse no
/// longer matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BulletId {
    pub slot: usize,
    pub generation: u32,
}

/// Preallocated bullet slots. Firing reuses an inactive slot instead of allocating.
#[derive(Debug, Clone)]
pub struct BulletPool {
    slots: Vec<BulletState>,
    generations: Vec<u32>,
}

impl BulletPool {
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: vec![BulletState::default(); capacity],
            generations: vec![0; capacity],
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|b| b.active).count()
    }

    /// Hands out the first inactive slot, already marked active.
    ///
    /// Returns `None` when every slot is in flight. The caller is expected to overwrite the
    /// slot with a freshly fired bullet.
    pub fn acquire(&mut self) -> Option<(BulletId, &mut BulletState)> {
        let slot = self.slots.iter().position(|b| !b.active)?;

        let generation = self.generations[slot].wrapping_add(1);
        self.generations[slot] = generation;

        let bullet = &mut self.slots[slot];
        bullet.active = true;
        Some((BulletId { slot, generation }, bullet))
    }

    /// Returns a slot to the pool.
    ///
    /// Returns false for unknown slots, already inactive slots, and ids from an earlier
    /// generation of the slot.
    pub fn release(&mut self, id: BulletId) -> bool {
        if self.generations.get(id.slot) != Some(&id.generation) {
            return false;
        }
        match self.slots.get_mut(id.slot) {
            Some(bullet) if bullet.active => {
                bullet.active = false;
                true
            }
            _ => false,
        }
    }

    pub fn get(&self, slot: usize) -> Option<&BulletState> {
        self.slots.get(slot)
    }

    pub fn iter_active(&self) -> impl Iterator<Item = (BulletId, &BulletState)> {
        self.slots
            .iter()
            .zip(&self.generations)
            .enumerate()
            .filter(|(_, (b, _))| b.active)
            .map(|(slot, (b, generation))| {
                let id = BulletId {
                    slot,
                    generation: *generation,
                };
                (id, b)
            })
    }

    /// Advances every active bullet and returns how many expired on this step.
    pub fn advance_all(&mut self, delta_ms: f32) -> usize {
        let mut expired = 0;
        for bullet in self.slots.iter_mut().filter(|b| b.active) {
            if !advance_bullet(bullet, delta_ms) {
                expired += 1;
            }
        }
        expired
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::state::Entity2D;
    use crate::domain::systems::projectiles::fire;

    fn fire_into(pool: &mut BulletPool) -> Option<BulletId> {
        let shooter = Entity2D::with_body(0.0, 0.0);
        let target = Entity2D::with_body(0.0, 10.0);
        let (id, bullet) = pool.acquire()?;
        *bullet = fire(&shooter, &target, 1.0);
        Some(id)
    }

    fn slot_of(id: Option<BulletId>) -> Option<usize> {
        id.map(|id| id.slot)
    }

    #[test]
    fn new_pool_has_no_active_bullets() {
        let pool = BulletPool::new(4);
        assert_eq!(pool.capacity(), 4);
        assert_eq!(pool.active_count(), 0);
        assert_eq!(pool.iter_active().count(), 0);
    }

    #[test]
    fn acquire_returns_none_when_exhausted() {
        let mut pool = BulletPool::new(2);

        assert_eq!(slot_of(fire_into(&mut pool)), Some(0));
        assert_eq!(slot_of(fire_into(&mut pool)), Some(1));
        assert_eq!(fire_into(&mut pool), None);
        assert_eq!(pool.active_count(), 2);
    }

    #[test]
    fn released_slot_is_reused() {
        let mut pool = BulletPool::new(2);
        let first = fire_into(&mut pool).expect("pool has room");
        fire_into(&mut pool);

        assert!(pool.release(first));
        assert!(!pool.release(first));
        assert!(!pool.release(BulletId {
            slot: 99,
            generation: 1
        }));

        assert_eq!(slot_of(fire_into(&mut pool)), Some(0));
        assert_eq!(pool.capacity(), 2);
    }

    #[test]
    fn stale_id_cannot_release_a_reused_slot() {
        let mut pool = BulletPool::new(1);
        let old = fire_into(&mut pool).expect("pool has room");
        pool.advance_all(1800.0);

        let new = fire_into(&mut pool).expect("expired slot is free again");
        assert_eq!(new.slot, old.slot);
        assert_ne!(new.generation, old.generation);

        assert!(!pool.release(old));
        assert_eq!(pool.active_count(), 1);
        assert!(pool.release(new));
    }

    #[test]
    fn refired_slot_starts_fresh() {
        let mut pool = BulletPool::new(1);
        let id = fire_into(&mut pool).expect("pool has room");
        pool.advance_all(1000.0);
        pool.release(id);

        fire_into(&mut pool);

        let bullet = pool.get(0).expect("slot 0 exists");
        assert_eq!(bullet.age, 0.0);
        assert_eq!((bullet.x, bullet.y), (0.0, 0.0));
    }

    #[test]
    fn advance_all_expires_old_bullets_and_frees_their_slots() {
        let mut pool = BulletPool::new(3);
        fire_into(&mut pool);
        pool.advance_all(1000.0);
        fire_into(&mut pool);

        let expired = pool.advance_all(800.0);

        assert_eq!(expired, 1);
        assert_eq!(pool.active_count(), 1);
        assert_eq!(
            pool.iter_active().map(|(id, _)| id.slot).collect::<Vec<_>>(),
            vec![1]
        );
        assert_eq!(slot_of(fire_into(&mut pool)), Some(0));
    }
}
