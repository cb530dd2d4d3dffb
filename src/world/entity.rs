//=========================================================================
// Entities
//=========================================================================

use std::collections::HashSet;
use std::fmt;

/// Opaque handle to a world entity.
///
/// Scenes store these and hand them back to [`crate::world::World`]; the
/// numeric value carries no meaning outside the world that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(u32);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Issues and tracks live entity handles.
#[derive(Debug, Default)]
pub(crate) struct EntityManager {
    live: HashSet<EntityId>,
    next: u32,
}

impl EntityManager {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn add(&mut self) -> EntityId {
        // Skip handles still in use after wrap-around
        while self.live.contains(&EntityId(self.next)) {
            self.next = self.next.wrapping_add(1);
        }

        let id = EntityId(self.next);
        self.live.insert(id);
        self.next = self.next.wrapping_add(1);
        id
    }

    pub(crate) fn contains(&self, id: EntityId) -> bool {
        self.live.contains(&id)
    }

    pub(crate) fn count(&self) -> usize {
        self.live.len()
    }

    /// Live handles in issue order.
    pub(crate) fn sorted(&self) -> Vec<EntityId> {
        let mut ids: Vec<_> = self.live.iter().copied().collect();
        ids.sort_unstable();
        ids
    }
}
