//! Wolves and sheep: species tag, per-animal parameters, and energy bookkeeping.

use ws_core::CellId;

use crate::{AgentError, AgentResult};

/// The two animal variants.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Species {
    Sheep,
    Wolf,
}

/// Parameters an animal is created with.  Offspring inherit
/// `p_reproduce` and `energy_from_food` unchanged.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnimalParams {
    pub energy:           f64,
    /// Per-tick probability of asexual reproduction, in `[0, 1]`.
    pub p_reproduce:      f64,
    pub energy_from_food: f64,
}

impl AnimalParams {
    pub fn new(energy: f64, p_reproduce: f64, energy_from_food: f64) -> Self {
        Self { energy, p_reproduce, energy_from_food }
    }

    /// Reject non-finite values and out-of-range probabilities.
    pub fn validate(&self) -> AgentResult<()> {
        if !self.energy.is_finite() || !self.energy_from_food.is_finite() {
            return Err(AgentError::InvalidParams(format!(
                "energy {} and energy_from_food {} must be finite",
                self.energy, self.energy_from_food
            )));
        }
        if !(0.0..=1.0).contains(&self.p_reproduce) {
            return Err(AgentError::InvalidParams(format!(
                "p_reproduce {} is outside [0, 1]",
                self.p_reproduce
            )));
        }
        Ok(())
    }
}

/// A live wolf or sheep.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Animal {
    pub species:          Species,
    /// Always mirrored by an occupant entry in the grid.
    pub cell:             CellId,
    pub energy:           f64,
    pub p_reproduce:      f64,
    pub energy_from_food: f64,
}

impl Animal {
    pub fn new(species: Species, cell: CellId, params: AnimalParams) -> Self {
        Self {
            species,
            cell,
            energy:           params.energy,
            p_reproduce:      params.p_reproduce,
            energy_from_food: params.energy_from_food,
        }
    }

    pub fn params(&self) -> AnimalParams {
        AnimalParams::new(self.energy, self.p_reproduce, self.energy_from_food)
    }

    /// Flat per-tick energy cost.
    #[inline]
    pub fn metabolize(&mut self) {
        self.energy -= 1.0;
    }

    /// Credit one feeding event.
    #[inline]
    pub fn eat(&mut self) {
        self.energy += self.energy_from_food;
    }

    #[inline]
    pub fn is_starving(&self) -> bool {
        self.energy < 0.0
    }

    /// Halve this animal's energy and return a same-species child in the
    /// same cell holding the other half.  No rounding.
    pub fn split_offspring(&mut self) -> Animal {
        self.energy /= 2.0;
        self.clone()
    }
}
