//! The agent arena: `AgentStore` and the closed `Occupant` variant.
//!
//! # Identity and removal
//!
//! Ids come from a counter that only moves forward, so an `AgentId` is never
//! reused.  An id captured earlier in a tick (in the activation order, say)
//! can be looked up safely after its animal dies and simply reports "dead".
//! Agents born mid-tick get ids beyond anything in the activation order
//! snapshotted at tick start.
//!
//! Storage holds live agents only: animals and grass patches sit in two
//! id-ordered maps, so iteration and memory follow the current population
//! rather than every agent ever created.

use std::collections::BTreeMap;

use ws_core::{AgentId, CellId, SimRng, Tick, WsError, WsResult};

use crate::{AgentResult, Animal, GrassPatch, RegrowthScheduler, Species};

// ── Occupant ──────────────────────────────────────────────────────────────────

/// Everything that can sit in a cell, borrowed from the store.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Occupant<'a> {
    Animal(&'a Animal),
    Grass(&'a GrassPatch),
}

impl<'a> Occupant<'a> {
    #[inline]
    pub fn cell(self) -> CellId {
        match self {
            Occupant::Animal(a) => a.cell,
            Occupant::Grass(g) => g.cell(),
        }
    }

    /// `Some(species)` for animals, `None` for grass.
    #[inline]
    pub fn species(self) -> Option<Species> {
        match self {
            Occupant::Animal(a) => Some(a.species),
            Occupant::Grass(_) => None,
        }
    }
}

// ── AgentStore ────────────────────────────────────────────────────────────────

/// Exclusive owner of all animals and grass patches.
///
/// Grass is only changed through [`consume_grass`](Self::consume_grass) and
/// [`regrow_grass`](Self::regrow_grass), which keep the grown-patch count
/// current without scanning.
#[derive(Default)]
pub struct AgentStore {
    next_id:     u32,
    animals:     BTreeMap<AgentId, Animal>,
    grass:       BTreeMap<AgentId, GrassPatch>,
    sheep:       usize,
    wolves:      usize,
    grown_grass: usize,
}

impl AgentStore {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Creation & removal ────────────────────────────────────────────────

    fn issue_id(&mut self) -> AgentId {
        let id = AgentId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Add an animal; effective immediately.  Returns its new id.
    pub fn create(&mut self, animal: Animal) -> AgentId {
        let id = self.issue_id();
        match animal.species {
            Species::Sheep => self.sheep += 1,
            Species::Wolf => self.wolves += 1,
        }
        self.animals.insert(id, animal);
        id
    }

    /// Add a grass patch, queueing its first regrowth if `countdown > 0`.
    /// No id is used up when the patch is rejected.
    pub fn create_grass(
        &mut self,
        cell:          CellId,
        countdown:     i64,
        regrowth_time: i64,
        scheduler:     &mut RegrowthScheduler,
    ) -> AgentResult<AgentId> {
        let id = AgentId(self.next_id);
        let patch = GrassPatch::new(id, cell, countdown, regrowth_time, scheduler)?;
        Ok(self.insert_grass(patch))
    }

    /// Insert an already-built patch (snapshot restore).
    pub fn insert_grass(&mut self, patch: GrassPatch) -> AgentId {
        let id = self.issue_id();
        if patch.fully_grown() {
            self.grown_grass += 1;
        }
        self.grass.insert(id, patch);
        id
    }

    /// Remove an animal.  Returns `None` if `id` is already dead, unknown,
    /// or a grass patch (grass is never removed).
    pub fn remove(&mut self, id: AgentId) -> Option<Animal> {
        let animal = self.animals.remove(&id)?;
        match animal.species {
            Species::Sheep => self.sheep -= 1,
            Species::Wolf => self.wolves -= 1,
        }
        Some(animal)
    }

    // ── Grass transitions ─────────────────────────────────────────────────

    /// Eat patch `id` at tick `now`.  `Ok(false)` if it is still growing or
    /// `id` is not a grass patch.
    pub fn consume_grass(
        &mut self,
        id:        AgentId,
        now:       Tick,
        scheduler: &mut RegrowthScheduler,
    ) -> AgentResult<bool> {
        let Some(patch) = self.grass.get_mut(&id) else {
            return Ok(false);
        };
        let eaten = patch.consume(id, now, scheduler)?;
        if eaten {
            self.grown_grass -= 1;
        }
        Ok(eaten)
    }

    /// Apply a fired regrowth to patch `id`.  Returns `false` if `id` is not
    /// a grass patch.
    pub fn regrow_grass(&mut self, id: AgentId) -> bool {
        let Some(patch) = self.grass.get_mut(&id) else {
            return false;
        };
        if !patch.fully_grown() {
            self.grown_grass += 1;
        }
        patch.on_regrowth_fired();
        true
    }

    // ── Lookup ────────────────────────────────────────────────────────────

    pub fn get(&self, id: AgentId) -> Option<Occupant<'_>> {
        if let Some(a) = self.animals.get(&id) {
            return Some(Occupant::Animal(a));
        }
        self.grass.get(&id).map(Occupant::Grass)
    }

    #[inline]
    pub fn is_alive(&self, id: AgentId) -> bool {
        self.animals.contains_key(&id) || self.grass.contains_key(&id)
    }

    #[inline]
    pub fn species(&self, id: AgentId) -> Option<Species> {
        self.animals.get(&id).map(|a| a.species)
    }

    #[inline]
    pub fn animal(&self, id: AgentId) -> Option<&Animal> {
        self.animals.get(&id)
    }

    /// Like [`animal`](Self::animal) but reports a missing agent as an error.
    pub fn animal_checked(&self, id: AgentId) -> WsResult<&Animal> {
        self.animal(id).ok_or(WsError::AgentNotFound(id))
    }

    #[inline]
    pub fn animal_mut(&mut self, id: AgentId) -> Option<&mut Animal> {
        self.animals.get_mut(&id)
    }

    #[inline]
    pub fn grass(&self, id: AgentId) -> Option<&GrassPatch> {
        self.grass.get(&id)
    }

    // ── Iteration ─────────────────────────────────────────────────────────

    /// Live animals in ascending id order.
    pub fn animals(&self) -> impl Iterator<Item = (AgentId, &Animal)> + '_ {
        self.animals.iter().map(|(&id, a)| (id, a))
    }

    /// All grass patches in ascending id order.
    pub fn grass_patches(&self) -> impl Iterator<Item = (AgentId, &GrassPatch)> + '_ {
        self.grass.iter().map(|(&id, g)| (id, g))
    }

    /// A fresh random permutation of the animals alive right now.
    ///
    /// Built from the ascending-id list, so the result depends only on the
    /// RNG state.  Grass patches never act and are not included.
    pub fn activation_order(&self, rng: &mut SimRng) -> Vec<AgentId> {
        let mut order: Vec<AgentId> = self.animals.keys().copied().collect();
        rng.shuffle(&mut order);
        order
    }

    // ── Counts ────────────────────────────────────────────────────────────

    #[inline]
    pub fn sheep_count(&self) -> usize {
        self.sheep
    }

    #[inline]
    pub fn wolf_count(&self) -> usize {
        self.wolves
    }

    #[inline]
    pub fn grown_grass_count(&self) -> usize {
        self.grown_grass
    }

    /// Live animals plus grass patches.
    #[inline]
    pub fn len(&self) -> usize {
        self.animals.len() + self.grass.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
