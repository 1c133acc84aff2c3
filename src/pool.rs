//! Fixed-capacity projectile pools.
//!
//! A slot is either active (in flight) or parked off-field and free for reuse.
//! Nothing ever grows the pool, so the active count can never exceed capacity.

use crate::geometry::Rect;

/// Where inactive projectiles are parked.
pub const PARKED: (i32, i32) = (-100, -100);

#[derive(Clone, Debug, PartialEq)]
pub struct Projectile {
    pub rect: Rect,
    pub active: bool,
}

impl Projectile {
    fn parked(w: i32, h: i32) -> Self {
        Self {
            rect: Rect::new(PARKED.0, PARKED.1, w, h),
            active: false,
        }
    }

    pub fn deactivate(&mut self) {
        self.active = false;
        self.rect.move_to(PARKED.0, PARKED.1);
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ProjectilePool {
    slots: Vec<Projectile>,
}

impl ProjectilePool {
    pub fn new(capacity: usize, size: (i32, i32)) -> Self {
        Self {
            slots: (0..capacity)
                .map(|_| Projectile::parked(size.0, size.1))
                .collect(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|p| p.active).count()
    }

    /// Activate the first free slot at `(x, y)`.  Returns `false` (and does
    /// nothing) when every slot is in flight.
    pub fn fire(&mut self, x: i32, y: i32) -> bool {
        match self.slots.iter_mut().find(|p| !p.active) {
            Some(slot) => {
                slot.rect.move_to(x, y);
                slot.active = true;
                true
            }
            None => false,
        }
    }

    /// Projectile width/height shared by every slot.
    pub fn size(&self) -> (i32, i32) {
        self.slots
            .first()
            .map(|p| (p.rect.w, p.rect.h))
            .unwrap_or((0, 0))
    }

    pub fn slots(&self) -> &[Projectile] {
        &self.slots
    }

    pub fn slots_mut(&mut self) -> &mut [Projectile] {
        &mut self.slots
    }

    pub fn active(&self) -> impl Iterator<Item = &Projectile> {
        self.slots.iter().filter(|p| p.active)
    }
}
