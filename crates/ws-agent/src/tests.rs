//! Unit tests for ws-agent.

use ws_core::{AgentId, CellId, SimRng, Tick};

use crate::{AgentStore, Animal, AnimalParams, RegrowthScheduler, Species};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn sheep(cell: u32, energy: f64) -> Animal {
    Animal::new(Species::Sheep, CellId(cell), AnimalParams::new(energy, 0.04, 4.0))
}

fn wolf(cell: u32, energy: f64) -> Animal {
    Animal::new(Species::Wolf, CellId(cell), AnimalParams::new(energy, 0.05, 20.0))
}

/// Fire all regrowth events due at `now` into `store`.
fn fire(store: &mut AgentStore, sched: &mut RegrowthScheduler, now: u64) -> usize {
    sched
        .fire_due::<(), _>(Tick(now), |ev| {
            assert!(store.regrow_grass(ev.target), "grass target");
            Ok(())
        })
        .unwrap()
}

// ── Animal ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod animal {
    use super::*;
    use crate::AgentError;

    #[test]
    fn split_offspring_conserves_energy() {
        let mut parent = sheep(3, 7.0);
        let child = parent.split_offspring();
        assert_eq!(parent.energy, 3.5);
        assert_eq!(child.energy, 3.5);
        assert_eq!(parent.energy + child.energy, 7.0);
        assert_eq!(child.species, Species::Sheep);
        assert_eq!(child.cell, CellId(3));
        assert_eq!(child.p_reproduce, parent.p_reproduce);
        assert_eq!(child.energy_from_food, parent.energy_from_food);
    }

    #[test]
    fn odd_energy_split_is_not_rounded() {
        let mut parent = wolf(0, 3.0);
        let child = parent.split_offspring();
        assert_eq!(child.energy, 1.5);
    }

    #[test]
    fn metabolize_and_eat() {
        let mut s = sheep(0, 0.5);
        s.metabolize();
        assert!(s.is_starving());
        s.eat();
        assert_eq!(s.energy, 3.5);
        assert!(!s.is_starving());
    }

    #[test]
    fn params_validation() {
        assert!(AnimalParams::new(8.0, 0.5, 4.0).validate().is_ok());
        assert!(matches!(
            AnimalParams::new(8.0, 1.5, 4.0).validate(),
            Err(AgentError::InvalidParams(_))
        ));
        assert!(AnimalParams::new(f64::NAN, 0.5, 4.0).validate().is_err());
    }
}

// ── Grass automaton ───────────────────────────────────────────────────────────

#[cfg(test)]
mod grass {
    use super::*;
    use crate::{AgentError, GrassState};

    #[test]
    fn zero_countdown_starts_grown() {
        let mut store = AgentStore::new();
        let mut sched = RegrowthScheduler::new();
        let id = store.create_grass(CellId(0), 0, 3, &mut sched).unwrap();
        assert!(store.grass(id).unwrap().fully_grown());
        assert!(sched.is_empty());
    }

    #[test]
    fn positive_countdown_grows_on_schedule() {
        let mut store = AgentStore::new();
        let mut sched = RegrowthScheduler::new();
        let id = store.create_grass(CellId(0), 2, 30, &mut sched).unwrap();
        assert_eq!(store.grass(id).unwrap().state(), GrassState::Growing);
        assert_eq!(sched.pending_for(&id), vec![Tick(2)]);

        fire(&mut store, &mut sched, 1);
        assert!(!store.grass(id).unwrap().fully_grown());
        fire(&mut store, &mut sched, 2);
        assert!(store.grass(id).unwrap().fully_grown());
    }

    #[test]
    fn consume_schedules_exactly_one_regrowth() {
        let mut store = AgentStore::new();
        let mut sched = RegrowthScheduler::new();
        let id = store.create_grass(CellId(0), 0, 3, &mut sched).unwrap();

        fire(&mut store, &mut sched, 1);
        assert!(store.consume_grass(id, Tick(1), &mut sched).unwrap());
        // Second bite while growing is a no-op, not a second event.
        assert!(!store.consume_grass(id, Tick(1), &mut sched).unwrap());
        assert_eq!(sched.pending_for(&id), vec![Tick(4)]);

        for t in 2..4 {
            fire(&mut store, &mut sched, t);
            assert!(!store.grass(id).unwrap().fully_grown(), "regrew early at tick {t}");
        }
        assert_eq!(fire(&mut store, &mut sched, 4), 1);
        assert!(store.grass(id).unwrap().fully_grown());
    }

    #[test]
    fn negative_regrowth_rejected() {
        let mut store = AgentStore::new();
        let mut sched = RegrowthScheduler::new();
        assert!(matches!(
            store.create_grass(CellId(0), 0, -1, &mut sched),
            Err(AgentError::InvalidRegrowth { .. })
        ));
        assert!(matches!(
            store.create_grass(CellId(0), -2, 5, &mut sched),
            Err(AgentError::InvalidRegrowth { what: "countdown", value: -2 })
        ));
        assert!(store.is_empty());
        // A rejected patch does not use up an id.
        assert_eq!(store.create_grass(CellId(0), 0, 5, &mut sched).unwrap(), AgentId(0));
    }

    #[test]
    fn due_tick_follows_eating_tick_not_queue_position() {
        let mut store = AgentStore::new();
        let mut sched = RegrowthScheduler::new();
        let id = store.create_grass(CellId(0), 0, 3, &mut sched).unwrap();
        // The queue has never been fired, so its own "now" is still tick 0.
        assert!(store.consume_grass(id, Tick(5), &mut sched).unwrap());
        assert_eq!(sched.pending_for(&id), vec![Tick(8)]);
    }

    #[test]
    fn zero_regrowth_is_due_on_the_eating_tick() {
        let mut store = AgentStore::new();
        let mut sched = RegrowthScheduler::new();
        let id = store.create_grass(CellId(0), 0, 0, &mut sched).unwrap();
        fire(&mut store, &mut sched, 2);
        assert!(store.consume_grass(id, Tick(2), &mut sched).unwrap());
        assert_eq!(sched.pending_for(&id), vec![Tick(2)]);
    }

    #[test]
    fn restored_patch_does_not_schedule() {
        let patch = crate::GrassPatch::restored(CellId(5), false, 10).unwrap();
        assert_eq!(patch.cell(), CellId(5));
        assert!(!patch.fully_grown());
        assert_eq!(patch.regrowth_time(), 10);
    }
}

// ── AgentStore ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod store {
    use super::*;

    #[test]
    fn ids_are_sequential_and_stable() {
        let mut store = AgentStore::new();
        let a = store.create(sheep(0, 5.0));
        let b = store.create(wolf(1, 5.0));
        assert_eq!((a, b), (AgentId(0), AgentId(1)));
        store.remove(a);
        let c = store.create(sheep(2, 5.0));
        assert_eq!(c, AgentId(2), "removed slots are never reused");
    }

    #[test]
    fn remove_twice_is_noop() {
        let mut store = AgentStore::new();
        let a = store.create(sheep(0, 5.0));
        assert!(store.remove(a).is_some());
        assert!(store.remove(a).is_none());
        assert!(!store.is_alive(a));
        assert_eq!(store.sheep_count(), 0);
        assert!(store.animal_checked(a).is_err());
    }

    #[test]
    fn grass_cannot_be_removed() {
        let mut store = AgentStore::new();
        let mut sched = RegrowthScheduler::new();
        let g = store.create_grass(CellId(0), 0, 3, &mut sched).unwrap();
        assert!(store.remove(g).is_none());
        assert!(store.grass(g).is_some());
    }

    #[test]
    fn counts_track_species() {
        let mut store = AgentStore::new();
        let mut sched = RegrowthScheduler::new();
        store.create(sheep(0, 1.0));
        let w = store.create(wolf(0, 1.0));
        store.create(sheep(1, 1.0));
        store.create_grass(CellId(0), 0, 3, &mut sched).unwrap();
        store.create_grass(CellId(1), 5, 3, &mut sched).unwrap();
        assert_eq!(store.sheep_count(), 2);
        assert_eq!(store.wolf_count(), 1);
        assert_eq!(store.grown_grass_count(), 1);
        store.remove(w);
        assert_eq!(store.wolf_count(), 0);
    }

    #[test]
    fn grown_count_follows_transitions() {
        let mut store = AgentStore::new();
        let mut sched = RegrowthScheduler::new();
        let a = store.create_grass(CellId(0), 0, 2, &mut sched).unwrap();
        let b = store.create_grass(CellId(1), 0, 2, &mut sched).unwrap();
        store.insert_grass(crate::GrassPatch::restored(CellId(2), true, 2).unwrap());
        assert_eq!(store.grown_grass_count(), 3);

        store.consume_grass(a, Tick(1), &mut sched).unwrap();
        store.consume_grass(a, Tick(1), &mut sched).unwrap();
        store.consume_grass(b, Tick(1), &mut sched).unwrap();
        assert_eq!(store.grown_grass_count(), 1);

        fire(&mut store, &mut sched, 3);
        assert_eq!(store.grown_grass_count(), 3);
        let scanned = store.grass_patches().filter(|(_, g)| g.fully_grown()).count();
        assert_eq!(scanned, store.grown_grass_count());
        assert!(!store.regrow_grass(AgentId(99)));
    }

    #[test]
    fn storage_tracks_live_agents_after_churn() {
        let mut store = AgentStore::new();
        let mut sched = RegrowthScheduler::new();
        store.create_grass(CellId(0), 0, 3, &mut sched).unwrap();
        let mut survivors = Vec::new();
        for round in 0..500u32 {
            let a = store.create(sheep(round % 9, 1.0));
            let b = store.create(wolf(round % 9, 1.0));
            store.remove(a);
            if round % 100 == 0 {
                survivors.push(b);
            } else {
                store.remove(b);
            }
        }
        assert_eq!(store.len(), 1 + survivors.len());
        assert_eq!(store.animals().map(|(id, _)| id).collect::<Vec<_>>(), survivors);
        assert_eq!(store.activation_order(&mut SimRng::new(1)).len(), survivors.len());
        // Ids keep counting past everything ever issued.
        assert_eq!(store.create(sheep(0, 1.0)), AgentId(1001));
    }

    #[test]
    fn typed_lookups() {
        let mut store = AgentStore::new();
        let mut sched = RegrowthScheduler::new();
        let s = store.create(sheep(4, 1.0));
        let g = store.create_grass(CellId(4), 0, 3, &mut sched).unwrap();
        assert_eq!(store.species(s), Some(Species::Sheep));
        assert_eq!(store.species(g), None);
        assert!(store.grass(s).is_none());
        assert!(store.animal(g).is_none());
        assert_eq!(store.get(g).unwrap().cell(), CellId(4));
        assert_eq!(store.get(s).unwrap().species(), Some(Species::Sheep));
        store.animal_mut(s).unwrap().energy = 9.0;
        assert_eq!(store.animal(s).unwrap().energy, 9.0);
    }
}

// ── Activation order ──────────────────────────────────────────────────────────

#[cfg(test)]
mod activation {
    use super::*;

    #[test]
    fn permutation_of_live_animals_only() {
        let mut store = AgentStore::new();
        let mut sched = RegrowthScheduler::new();
        let mut live = Vec::new();
        for i in 0..20 {
            live.push(store.create(sheep(i, 1.0)));
            store.create_grass(CellId(i), 0, 3, &mut sched).unwrap();
        }
        let dead = live.remove(3);
        store.remove(dead);

        let mut rng = SimRng::new(11);
        let mut order = store.activation_order(&mut rng);
        assert_eq!(order.len(), 19);
        assert!(!order.contains(&dead));
        order.sort_unstable();
        assert_eq!(order, live);
    }

    #[test]
    fn reshuffled_each_call_and_seed_deterministic() {
        let mut store = AgentStore::new();
        for i in 0..30 {
            store.create(wolf(i, 1.0));
        }
        let mut rng_a = SimRng::new(5);
        let mut rng_b = SimRng::new(5);
        let first = store.activation_order(&mut rng_a);
        let second = store.activation_order(&mut rng_a);
        assert_ne!(first, second);
        assert_eq!(first, store.activation_order(&mut rng_b));
    }
}
