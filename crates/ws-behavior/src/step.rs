//! The shared Alive → Dead turn sequence.

use tracing::debug;

use ws_core::AgentId;

use crate::{BehaviorError, BehaviorResult, SimContext, forager_for};

/// What happened on one animal's turn.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// The id was already dead (eaten earlier this tick); nothing ran.
    Skipped,
    /// Energy went negative; the animal was removed.
    Died,
    /// The animal split its energy with a newborn.
    Reproduced { child: AgentId },
    Survived,
}

/// Run one turn for `agent`: move, metabolize, feed, then die or maybe
/// reproduce.
///
/// Dead ids are a normal skip, not an error.  Death is checked before the
/// reproduction draw, and a dying animal consumes no random number for it.
pub fn step_animal(agent: AgentId, ctx: &mut SimContext<'_>) -> BehaviorResult<StepOutcome> {
    let Some(species) = ctx.agents.animal(agent).map(|a| a.species) else {
        return Ok(StepOutcome::Skipped);
    };
    let behavior = forager_for(species);

    if let Some(dest) = behavior.choose_move(agent, ctx)? {
        ctx.relocate(agent, dest)?;
    }

    ctx.agents
        .animal_mut(agent)
        .ok_or(BehaviorError::AgentMissing(agent))?
        .metabolize();

    behavior.feed(agent, ctx)?;

    let animal = ctx.agents.animal(agent).ok_or(BehaviorError::AgentMissing(agent))?;
    if animal.is_starving() {
        ctx.kill(agent);
        debug!(tick = ctx.tick.0, agent = agent.0, ?species, "starved");
        return Ok(StepOutcome::Died);
    }

    let p_reproduce = animal.p_reproduce;
    if ctx.rng.random::<f64>() < p_reproduce {
        let offspring = ctx
            .agents
            .animal_mut(agent)
            .ok_or(BehaviorError::AgentMissing(agent))?
            .split_offspring();
        let child = ctx.spawn(offspring)?;
        debug!(tick = ctx.tick.0, parent = agent.0, child = child.0, ?species, "born");
        return Ok(StepOutcome::Reproduced { child });
    }

    Ok(StepOutcome::Survived)
}
