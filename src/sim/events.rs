use crate::sim::battle::BattleState;
use crate::sim::moves::active::{ActiveMove, SecondaryEffect};
use crate::sim::outcome::Outcome;
use crate::sim::pokemon::MonRef;
use crate::sim::stats::BoostTable;

/// Events the resolver fires through the generic dispatchers. Events
/// that thread a typed value use the dedicated relay methods instead.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum EventId {
    AfterHit,
    AfterMega,
    AfterMove,
    AfterMoveSecondary,
    BeforeMove,
    DragOut,
    End,
    Hit,
    HitField,
    HitSide,
    ModifyMove,
    MoveAborted,
    MoveFail,
    PrepareHit,
    Try,
    TryHit,
    TryHitField,
    TryHitSide,
    TryImmunity,
    TryMove,
    TryPrimaryHit,
    Update,
    UseMoveMessage,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EventTarget {
    Mon(MonRef),
    Side(usize),
    Field,
    None,
}

/// Seam for ability, item and condition bodies. The resolver announces
/// what is happening; implementations inspect and mutate the battle and
/// answer with an [`Outcome`]. Every method defaults to "no opinion",
/// so [`NoHooks`] runs the bare rule set.
pub trait BattleHooks {
    /// One named effect body: the move's own callback, or the single
    /// ability/condition the resolver is asking about.
    fn single_event(
        &mut self,
        event: EventId,
        battle: &mut BattleState,
        mv: &mut ActiveMove,
        target: EventTarget,
        source: Option<MonRef>,
    ) -> Outcome {
        let _ = (event, battle, mv, target, source);
        Outcome::Continue
    }

    /// Polls every listener interested in `target`.
    fn run_event(
        &mut self,
        event: EventId,
        battle: &mut BattleState,
        mv: &mut ActiveMove,
        target: EventTarget,
        source: Option<MonRef>,
    ) -> Outcome {
        let _ = (event, battle, mv, target, source);
        Outcome::Continue
    }

    /// Per-target form used by the hit gates: one answer per entry.
    fn run_event_for_targets(
        &mut self,
        event: EventId,
        battle: &mut BattleState,
        mv: &mut ActiveMove,
        targets: &[MonRef],
        source: MonRef,
    ) -> Vec<Outcome> {
        let _ = (event, battle, mv, source);
        vec![Outcome::Continue; targets.len()]
    }

    /// Relay for events about a combatant with no move in flight.
    fn run_mon_event(&mut self, event: EventId, battle: &mut BattleState, mon: MonRef) -> Outcome {
        let _ = (event, battle, mon);
        Outcome::Continue
    }

    /// Swaps the chosen move before it runs (sleep callers, encore).
    fn override_action(
        &mut self,
        battle: &mut BattleState,
        user: MonRef,
        move_id: &str,
    ) -> Option<String> {
        let _ = (battle, user, move_id);
        None
    }

    /// Names the effect forcing this move, if any; a locked move spends
    /// no PP.
    fn locked_move(&mut self, battle: &mut BattleState, user: MonRef) -> Option<String> {
        let _ = (battle, user);
        None
    }

    /// Adjusted boost stages read by the accuracy check.
    fn modify_boosts(&mut self, battle: &mut BattleState, mon: MonRef, boosts: BoostTable) -> BoostTable {
        let _ = (battle, mon);
        boosts
    }

    /// Rewrites the computed accuracy; `None` means sure hit.
    fn modify_accuracy(
        &mut self,
        battle: &mut BattleState,
        mv: &ActiveMove,
        target: MonRef,
        user: MonRef,
        accuracy: Option<f64>,
    ) -> Option<f64> {
        let _ = (battle, mv, target, user);
        accuracy
    }

    /// Last word before the roll; `None` means sure hit and
    /// `Some(0.0)` forces a miss.
    fn accuracy_check(
        &mut self,
        battle: &mut BattleState,
        mv: &ActiveMove,
        target: MonRef,
        user: MonRef,
        accuracy: Option<f64>,
    ) -> Option<f64> {
        let _ = (battle, mv, target, user);
        accuracy
    }

    /// Filters or reorders the secondary list before each rider rolls.
    fn modify_secondaries(
        &mut self,
        battle: &mut BattleState,
        mv: &ActiveMove,
        target: MonRef,
        user: MonRef,
        secondaries: Vec<SecondaryEffect>,
    ) -> Vec<SecondaryEffect> {
        let _ = (battle, mv, target, user);
        secondaries
    }

    /// Surcharge on top of the base PP cost (pressure).
    fn extra_pp_drain(
        &mut self,
        battle: &mut BattleState,
        user: MonRef,
        target: MonRef,
        mv: &ActiveMove,
    ) -> u8 {
        let _ = (battle, user, target, mv);
        0
    }
}

/// The bare rule set: every event answers "no opinion".
#[derive(Clone, Copy, Debug, Default)]
pub struct NoHooks;

impl BattleHooks for NoHooks {}
