//! Damage and effect application for one hit of a move.
//!
//! [`MoveActions::spread_move_hit`] runs one hit against every slot still
//! standing as a sequence of lockstep passes over the target list;
//! [`MoveActions::move_hit`] is the single-application form the field
//! path and the rider payloads go through. Slots that drop out mid-hit
//! are marked in place so the outcome list stays aligned with the
//! caller's target order.

use crate::data::moves::{Category, MoveTarget, SelfDestruct};
use crate::sim::events::{EventId, EventTarget};
use crate::sim::moves::active::{ActiveMove, HitEffect, SecondaryEffect};
use crate::sim::outcome::Outcome;
use crate::sim::pokemon::MonRef;

use super::actions::MoveActions;

/// One slot of the per-hit working list. A slot that stops pointing at
/// a live mon keeps its position so damage entries stay index-aligned.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum HitTarget {
    Mon(MonRef),
    /// The hit was absorbed in front of the target; effects aimed at the
    /// slot stop, but the hit still counts as having connected.
    Nulled,
    /// The hit failed against this slot; nothing further runs here.
    Dropped,
}

impl HitTarget {
    pub(crate) fn live(self) -> Option<MonRef> {
        match self {
            HitTarget::Mon(at) => Some(at),
            _ => None,
        }
    }
}

/// The effect block one application reads: a move's primary payload,
/// its `self:` block, or one secondary rider. The flattened move-level
/// flags are only set on the primary payload; riders never carry them.
#[derive(Clone, Debug, Default)]
pub(crate) struct HitPayload {
    pub effect: HitEffect,
    pub self_effect: Option<HitEffect>,
    pub secondaries: Vec<SecondaryEffect>,
    pub force_switch: bool,
    pub self_switch: bool,
    pub has_selfdestruct: bool,
    /// Only the move's own payload consults the damage calculator.
    pub is_primary: bool,
}

impl HitPayload {
    pub(crate) fn primary(mv: &ActiveMove) -> Self {
        Self {
            effect: mv.hit_effect.clone(),
            self_effect: mv.self_effect.clone(),
            secondaries: mv.secondaries.clone(),
            force_switch: mv.force_switch,
            self_switch: mv.self_switch,
            has_selfdestruct: mv.selfdestruct.is_some(),
            is_primary: true,
        }
    }

    pub(crate) fn from_effect(effect: HitEffect) -> Self {
        Self {
            effect,
            ..Self::default()
        }
    }

    pub(crate) fn from_secondary(secondary: &SecondaryEffect) -> Self {
        Self {
            effect: secondary.effect.clone(),
            self_effect: secondary.self_effect.clone(),
            ..Self::default()
        }
    }
}

/// `round(numerator / denominator)` with halves rounding up.
pub(crate) fn round_half_up(numerator: u64, denominator: u64) -> u32 {
    ((2 * numerator + denominator) / (2 * denominator)) as u32
}

/// Recoil is a fraction of the damage dealt over the whole move, never
/// less than one point.
pub(crate) fn calc_recoil_damage(total_damage: u32, mv: &ActiveMove) -> u32 {
    let Some((numerator, denominator)) = mv.recoil else {
        return 0;
    };
    round_half_up(
        u64::from(total_damage) * u64::from(numerator),
        u64::from(denominator),
    )
    .max(1)
}

/// Fraction of max HP a heal effect restores. Early generations
/// truncate, later ones round.
fn heal_amount(gen: u8, max_hp: u32, fraction: (u32, u32)) -> u32 {
    let scaled = u64::from(max_hp) * u64::from(fraction.0);
    if gen < 5 {
        (scaled / u64::from(fraction.1)) as u32
    } else {
        round_half_up(scaled, u64::from(fraction.1))
    }
}

impl MoveActions<'_> {
    /// One hit applied across every slot: the shared gate events first,
    /// then each pass walks the slots in lockstep and marks the ones
    /// that drop out. Returns one outcome per slot.
    pub(crate) fn spread_move_hit(
        &mut self,
        targets: &mut Vec<HitTarget>,
        user: MonRef,
        mv: &mut ActiveMove,
        payload: &HitPayload,
        is_secondary: bool,
        is_self: bool,
    ) -> Vec<Outcome> {
        let first = targets.first().copied().and_then(HitTarget::live);
        let mut hit_result = Outcome::Hit(None);
        if mv.target == MoveTarget::All && !is_self {
            hit_result = self.hooks.single_event(
                EventId::TryHitField,
                self.battle,
                mv,
                first.map(EventTarget::Mon).unwrap_or(EventTarget::None),
                Some(user),
            );
        } else if matches!(mv.target, MoveTarget::FoeSide | MoveTarget::AllySide) && !is_self {
            hit_result = self.hooks.single_event(
                EventId::TryHitSide,
                self.battle,
                mv,
                first
                    .map(|t| EventTarget::Side(t.side))
                    .unwrap_or(EventTarget::None),
                Some(user),
            );
        } else if let Some(t) = first {
            hit_result =
                self.hooks
                    .single_event(EventId::TryHit, self.battle, mv, EventTarget::Mon(t), Some(user));
        }
        if hit_result.vetoes() {
            if hit_result == Outcome::Fail {
                let ident = self.battle.ident(user);
                self.battle.logger.log_fail(&ident);
                self.battle.logger.attr_last_move("[still]");
            }
            return vec![Outcome::Fail; targets.len()];
        }

        // 0. absorption check (substitute)
        let mut damage = self.try_primary_hit_event(targets, user, mv, payload, is_secondary);
        for (slot, verdict) in targets.iter_mut().zip(&damage) {
            if !verdict.truthy() {
                *slot = HitTarget::Dropped;
            }
        }

        // 1. damage numbers from the calculator
        self.get_spread_damage(&mut damage, targets, user, mv, is_secondary, is_self);
        for (slot, verdict) in targets.iter_mut().zip(&damage) {
            if *verdict == Outcome::Fail {
                *slot = HitTarget::Dropped;
            }
        }

        // 2. damage application
        self.apply_spread_damage(&mut damage, targets, user, mv);

        // 3. everything else the hit does
        self.run_move_effects(&mut damage, targets, user, mv, payload, is_secondary, is_self);
        for (slot, verdict) in targets.iter_mut().zip(&damage) {
            if !verdict.success() {
                *slot = HitTarget::Dropped;
            }
        }

        // 4. self drops
        if payload.self_effect.is_some() && !mv.self_dropped {
            self.self_drops(targets, user, mv, payload, is_secondary);
        }

        // 5. secondary riders
        if !payload.secondaries.is_empty() {
            self.run_secondaries(targets, user, mv, payload, is_self);
        }

        // 6. force switch
        if payload.force_switch {
            self.force_switch_pass(&mut damage, targets, user, mv);
        }

        for (slot, verdict) in targets.iter_mut().zip(&damage) {
            if !verdict.success() {
                *slot = HitTarget::Dropped;
            }
        }

        // Only a hit that connected somewhere can bring its user back.
        if mv.self_switch
            && self.battle.mon(user).hp > 0
            && damage.iter().any(|verdict| verdict.success())
        {
            self.battle.mon_mut(user).switch_flag = Some(mv.fullname());
        }
        damage
    }

    fn try_primary_hit_event(
        &mut self,
        targets: &mut [HitTarget],
        user: MonRef,
        mv: &mut ActiveMove,
        payload: &HitPayload,
        is_secondary: bool,
    ) -> Vec<Outcome> {
        let mut damage = vec![Outcome::Continue; targets.len()];
        for i in 0..targets.len() {
            let Some(target) = targets[i].live() else {
                continue;
            };
            let mut result = self.hooks.run_event(
                EventId::TryPrimaryHit,
                self.battle,
                mv,
                EventTarget::Mon(target),
                Some(user),
            );
            if result == Outcome::Continue {
                result = Outcome::Hit(None);
            }
            if result == Outcome::Hit(Some(0)) {
                // Something in front of the target soaked the hit. The
                // slot empties but the hit still connected.
                result = Outcome::Hit(None);
                targets[i] = HitTarget::Nulled;
            }
            if targets[i].live().is_some() && is_secondary && payload.self_effect.is_none() {
                result = Outcome::Hit(None);
            }
            damage[i] = result;
        }
        damage
    }

    fn get_spread_damage(
        &mut self,
        damage: &mut [Outcome],
        targets: &[HitTarget],
        user: MonRef,
        mv: &mut ActiveMove,
        is_secondary: bool,
        is_self: bool,
    ) {
        damage.fill(Outcome::Continue);
        for (i, slot) in targets.iter().enumerate() {
            let Some(target) = slot.live() else {
                continue;
            };
            let verdict = self.oracle.damage(self.battle, user, target, mv);
            if verdict.failed() {
                if verdict == Outcome::Fail && !is_secondary && !is_self {
                    let ident = self.battle.ident(user);
                    self.battle.logger.log_fail(&ident);
                    self.battle.logger.attr_last_move("[still]");
                }
                damage[i] = Outcome::Fail;
                continue;
            }
            damage[i] = verdict;
            if mv.selfdestruct == Some(SelfDestruct::IfHit) {
                self.battle.faint(user);
            }
            if let Outcome::Hit(Some(amount)) = damage[i] {
                let hp = self.battle.mon(target).hp;
                if !self.battle.mon(target).fainted && mv.no_faint && amount >= hp {
                    damage[i] = Outcome::Hit(Some(hp - 1));
                }
            }
        }
    }

    fn apply_spread_damage(
        &mut self,
        damage: &mut [Outcome],
        targets: &[HitTarget],
        user: MonRef,
        mv: &ActiveMove,
    ) {
        for (i, slot) in targets.iter().enumerate() {
            let Some(target) = slot.live() else {
                continue;
            };
            if let Outcome::Hit(Some(amount)) = damage[i] {
                let dealt = self.battle.move_damage(amount, target, user, mv);
                damage[i] = Outcome::Hit(Some(dealt));
            }
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn run_move_effects(
        &mut self,
        damage: &mut [Outcome],
        targets: &[HitTarget],
        user: MonRef,
        mv: &mut ActiveMove,
        payload: &HitPayload,
        is_secondary: bool,
        is_self: bool,
    ) {
        fn any_success(damage: &[Outcome]) -> Outcome {
            Outcome::from(damage.iter().any(|entry| entry.success()))
        }

        let mut did_anything = any_success(damage);
        for (i, slot) in targets.iter().enumerate() {
            let Some(target) = slot.live() else {
                continue;
            };
            // Later slots see the write-backs of earlier ones.
            let mut did_something = any_success(damage);
            if !self.apply_hit_effects(target, user, mv, payload, is_secondary, is_self, &mut did_something) {
                continue;
            }
            if !did_something.truthy() && payload.self_effect.is_none() && !payload.has_selfdestruct {
                damage[i] = Outcome::Fail;
            } else if !damage[i].success() {
                damage[i] = if did_something == Outcome::Silent {
                    Outcome::Fail
                } else {
                    did_something
                };
            }
            did_anything = if did_anything.truthy() || did_anything == Outcome::Silent {
                did_anything
            } else {
                did_something
            };
        }
        if !did_anything.truthy()
            && payload.self_effect.is_none()
            && !payload.has_selfdestruct
            && !is_self
            && !is_secondary
            && did_anything == Outcome::Fail
        {
            let ident = self.battle.ident(user);
            self.battle.logger.log_fail(&ident);
            self.battle.logger.attr_last_move("[still]");
        }
    }

    fn self_drops(
        &mut self,
        targets: &[HitTarget],
        user: MonRef,
        mv: &mut ActiveMove,
        payload: &HitPayload,
        is_secondary: bool,
    ) {
        for slot in targets {
            if *slot == HitTarget::Dropped {
                continue;
            }
            let Some(self_effect) = payload.self_effect.as_ref() else {
                return;
            };
            if mv.self_dropped {
                continue;
            }
            let mut self_roll = 0;
            if !is_secondary && !self_effect.boosts.is_empty() {
                self_roll = self.battle.rng.next(100);
                // One set of drops per use, however many targets or hits.
                mv.self_dropped = true;
            }
            // The roll happens even for guaranteed drops so the RNG
            // stream matches cartridge order.
            if self_effect.chance.map_or(true, |chance| self_roll < u32::from(chance)) {
                let rider = HitPayload::from_effect(self_effect.clone());
                self.move_hit(Some(user), user, mv, &rider, is_secondary, true);
            }
        }
    }

    fn run_secondaries(
        &mut self,
        targets: &[HitTarget],
        user: MonRef,
        mv: &mut ActiveMove,
        payload: &HitPayload,
        is_self: bool,
    ) {
        for slot in targets {
            if *slot == HitTarget::Dropped {
                continue;
            }
            let secondaries = match slot.live() {
                Some(target) => self.hooks.modify_secondaries(
                    self.battle,
                    mv,
                    target,
                    user,
                    payload.secondaries.clone(),
                ),
                None => payload.secondaries.clone(),
            };
            for secondary in &secondaries {
                let roll = self.battle.rng.next(100);
                if roll < u32::from(secondary.chance) {
                    let rider = HitPayload::from_secondary(secondary);
                    self.move_hit(slot.live(), user, mv, &rider, true, is_self);
                }
            }
        }
    }

    fn force_switch_pass(
        &mut self,
        damage: &mut [Outcome],
        targets: &[HitTarget],
        user: MonRef,
        mv: &mut ActiveMove,
    ) {
        for (i, slot) in targets.iter().enumerate() {
            let Some(target) = slot.live() else {
                continue;
            };
            if self.battle.mon(target).hp == 0
                || self.battle.mon(user).hp == 0
                || !self.battle.can_switch(target.side)
            {
                continue;
            }
            let result = self.hooks.run_event(
                EventId::DragOut,
                self.battle,
                mv,
                EventTarget::Mon(target),
                Some(user),
            );
            if result.truthy() || result == Outcome::Continue {
                self.battle.mon_mut(target).force_switch_flag = true;
            } else if result == Outcome::Fail && mv.category == Category::Status {
                let ident = self.battle.ident(user);
                self.battle.logger.log_fail(&ident);
                self.battle.logger.attr_last_move("[still]");
                damage[i] = Outcome::Fail;
            }
        }
    }

    /// Applies one payload to one target: the TryHit gates, the damage
    /// number, the effect ladder, then the rider recursions. Returns
    /// the damage dealt, or `Continue` for a damage-free success.
    pub(crate) fn move_hit(
        &mut self,
        target: Option<MonRef>,
        user: MonRef,
        mv: &mut ActiveMove,
        payload: &HitPayload,
        is_secondary: bool,
        is_self: bool,
    ) -> Outcome {
        let mut target = target;
        let mut damage = Outcome::Continue;
        let mut hit_result = Outcome::Hit(None);

        if mv.target == MoveTarget::All && !is_self {
            hit_result = self.hooks.single_event(
                EventId::TryHitField,
                self.battle,
                mv,
                target.map(EventTarget::Mon).unwrap_or(EventTarget::None),
                Some(user),
            );
        } else if matches!(mv.target, MoveTarget::FoeSide | MoveTarget::AllySide) && !is_self {
            hit_result = self.hooks.single_event(
                EventId::TryHitSide,
                self.battle,
                mv,
                target
                    .map(|t| EventTarget::Side(t.side))
                    .unwrap_or(EventTarget::None),
                Some(user),
            );
        } else if let Some(t) = target {
            hit_result =
                self.hooks
                    .single_event(EventId::TryHit, self.battle, mv, EventTarget::Mon(t), Some(user));
        }
        if hit_result.vetoes() {
            if hit_result == Outcome::Fail {
                let ident = self.battle.ident(user);
                self.battle.logger.log_fail(&ident);
                self.battle.logger.attr_last_move("[still]");
            }
            return Outcome::Fail;
        }

        if let Some(t) = target {
            if !is_secondary
                && !is_self
                && !matches!(
                    mv.target,
                    MoveTarget::All | MoveTarget::FoeSide | MoveTarget::AllySide
                )
            {
                hit_result = self.hooks.run_event(
                    EventId::TryPrimaryHit,
                    self.battle,
                    mv,
                    EventTarget::Mon(t),
                    Some(user),
                );
                if hit_result == Outcome::Hit(Some(0)) {
                    // Absorbed in front of the target; still a hit.
                    hit_result = Outcome::Hit(None);
                    target = None;
                }
            }
        }
        if target.is_some() && is_secondary && payload.self_effect.is_none() {
            hit_result = Outcome::Hit(None);
        }
        if hit_result.vetoes() {
            return Outcome::Fail;
        }

        if let Some(t) = target {
            let mut did_something = Outcome::Continue;
            damage = if payload.is_primary {
                self.oracle.damage(self.battle, user, t, mv)
            } else {
                Outcome::Continue
            };
            if damage.failed() {
                if damage == Outcome::Fail && !is_secondary && !is_self {
                    let ident = self.battle.ident(user);
                    self.battle.logger.log_fail(&ident);
                    self.battle.logger.attr_last_move("[still]");
                }
                return Outcome::Fail;
            }
            if mv.selfdestruct == Some(SelfDestruct::IfHit) {
                self.battle.faint(user);
            }
            if let Outcome::Hit(Some(amount)) = damage {
                if !self.battle.mon(t).fainted {
                    let mut amount = amount;
                    let hp = self.battle.mon(t).hp;
                    if mv.no_faint && amount >= hp {
                        amount = hp - 1;
                    }
                    let dealt = self.battle.move_damage(amount, t, user, mv);
                    damage = Outcome::Hit(Some(dealt));
                    did_something = Outcome::Hit(None);
                }
            }

            if !self.apply_hit_effects(t, user, mv, payload, is_secondary, is_self, &mut did_something) {
                return Outcome::Fail;
            }
            if !did_something.truthy() && payload.self_effect.is_none() && !payload.has_selfdestruct {
                if !is_self && !is_secondary && did_something == Outcome::Fail {
                    let ident = self.battle.ident(user);
                    self.battle.logger.log_fail(&ident);
                    self.battle.logger.attr_last_move("[still]");
                }
                return Outcome::Fail;
            }
        }

        if let Some(self_effect) = payload.self_effect.as_ref() {
            if !mv.self_dropped {
                let mut self_roll = 0;
                if !is_secondary && !self_effect.boosts.is_empty() {
                    self_roll = self.battle.rng.next(100);
                    // One set of drops per use, however many targets or hits.
                    mv.self_dropped = true;
                }
                // The roll happens even for guaranteed drops so the RNG
                // stream matches cartridge order.
                if self_effect.chance.map_or(true, |chance| self_roll < u32::from(chance)) {
                    let rider = HitPayload::from_effect(self_effect.clone());
                    self.move_hit(Some(user), user, mv, &rider, is_secondary, true);
                }
            }
        }

        if !payload.secondaries.is_empty() {
            let secondaries = match target {
                Some(t) => self.hooks.modify_secondaries(
                    self.battle,
                    mv,
                    t,
                    user,
                    payload.secondaries.clone(),
                ),
                None => payload.secondaries.clone(),
            };
            for secondary in &secondaries {
                let roll = self.battle.rng.next(100);
                if roll < u32::from(secondary.chance) {
                    let rider = HitPayload::from_secondary(secondary);
                    self.move_hit(target, user, mv, &rider, true, is_self);
                }
            }
        }

        if payload.force_switch {
            if let Some(t) = target {
                if self.battle.mon(t).hp > 0
                    && self.battle.mon(user).hp > 0
                    && self.battle.can_switch(t.side)
                {
                    hit_result = self.hooks.run_event(
                        EventId::DragOut,
                        self.battle,
                        mv,
                        EventTarget::Mon(t),
                        Some(user),
                    );
                    if hit_result.truthy() || hit_result == Outcome::Continue {
                        self.battle.mon_mut(t).force_switch_flag = true;
                    } else if hit_result == Outcome::Fail && mv.category == Category::Status {
                        let ident = self.battle.ident(user);
                        self.battle.logger.log_fail(&ident);
                        self.battle.logger.attr_last_move("[still]");
                        return Outcome::Fail;
                    }
                }
            }
        }

        if mv.self_switch && self.battle.mon(user).hp > 0 {
            self.battle.mon_mut(user).switch_flag = Some(mv.fullname());
        }
        damage
    }

    /// The shared effect ladder: every non-damage thing a payload can
    /// do to a target, each result folded into `did_something`. Returns
    /// false when a heal or the move's own status fails hard enough to
    /// abort this application.
    #[allow(clippy::too_many_arguments)]
    fn apply_hit_effects(
        &mut self,
        target: MonRef,
        user: MonRef,
        mv: &mut ActiveMove,
        payload: &HitPayload,
        is_secondary: bool,
        is_self: bool,
        did_something: &mut Outcome,
    ) -> bool {
        let effect = &payload.effect;
        if !effect.boosts.is_empty() && !self.battle.mon(target).fainted {
            // A boost that moves no stage reports null, not false; the
            // distinction decides the gen 7 self-switch gate below.
            let applied = if self.battle.boost(&effect.boosts, target, &[]) {
                Outcome::Hit(None)
            } else {
                Outcome::Silent
            };
            *did_something = did_something.or(applied);
        }
        if let Some(fraction) = effect.heal {
            if !self.battle.mon(target).fainted {
                let amount = heal_amount(self.battle.gen, self.battle.mon(target).max_hp, fraction);
                if self.battle.heal(amount, target, &[]) == 0 {
                    let ident = self.battle.ident(user);
                    self.battle.logger.log_fail(&ident);
                    self.battle.logger.attr_last_move("[still]");
                    return false;
                }
                *did_something = Outcome::Hit(None);
            }
        }
        if let Some(status) = effect.status {
            let applied = self.battle.try_set_status(status, target);
            if !applied && mv.hit_effect.status.is_some() {
                return false;
            }
            *did_something = did_something.or(Outcome::from(applied));
        }
        if let Some(status) = effect.force_status {
            let applied = self.battle.set_status(status, target);
            *did_something = did_something.or(Outcome::from(applied));
        }
        if let Some(id) = effect.volatile_status {
            let applied = self.battle.add_volatile(id, target, Some(user));
            *did_something = did_something.or(Outcome::from(applied));
        }
        if let Some(id) = effect.side_condition {
            let applied = self.battle.add_side_condition(id, target.side);
            *did_something = did_something.or(Outcome::from(applied));
        }
        if let Some(id) = effect.weather {
            let applied = self.battle.set_weather(id);
            *did_something = did_something.or(Outcome::from(applied));
        }
        if let Some(id) = effect.terrain {
            let applied = self.battle.set_terrain(id);
            *did_something = did_something.or(Outcome::from(applied));
        }
        if let Some(id) = effect.pseudo_weather {
            let applied = self.battle.add_pseudo_weather(id);
            *did_something = did_something.or(Outcome::from(applied));
        }
        if payload.force_switch {
            let applied = self.battle.can_switch(target.side);
            *did_something = did_something.or(Outcome::from(applied));
        }
        if payload.self_switch {
            // A null fold means the stat drop portion failed; in gen 7
            // that also cancels the switch.
            if self.battle.can_switch(user.side)
                && (*did_something != Outcome::Silent || self.battle.gen < 7)
            {
                *did_something = Outcome::Hit(None);
            } else {
                *did_something = did_something.or(Outcome::Fail);
            }
        }

        if mv.target == MoveTarget::All && !is_self {
            let result = self.hooks.single_event(
                EventId::HitField,
                self.battle,
                mv,
                EventTarget::Mon(target),
                Some(user),
            );
            if result != Outcome::Continue {
                *did_something = did_something.or(result);
            }
        } else if matches!(mv.target, MoveTarget::FoeSide | MoveTarget::AllySide) && !is_self {
            let result = self.hooks.single_event(
                EventId::HitSide,
                self.battle,
                mv,
                EventTarget::Side(target.side),
                Some(user),
            );
            if result != Outcome::Continue {
                *did_something = did_something.or(result);
            }
        } else {
            let result = self.hooks.single_event(
                EventId::Hit,
                self.battle,
                mv,
                EventTarget::Mon(target),
                Some(user),
            );
            if result != Outcome::Continue {
                *did_something = did_something.or(result);
            }
            if !is_self && !is_secondary {
                self.hooks
                    .run_event(EventId::Hit, self.battle, mv, EventTarget::Mon(target), Some(user));
            }
            let result = self.hooks.single_event(
                EventId::AfterHit,
                self.battle,
                mv,
                EventTarget::Mon(target),
                Some(user),
            );
            if result != Outcome::Continue {
                *did_something = did_something.or(result);
            }
        }

        // An unanswered ladder is a success: the payload had nothing it
        // needed to do.
        if *did_something == Outcome::Continue {
            *did_something = Outcome::Hit(None);
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::battle::BattleState;
    use crate::sim::damage::{FixedDamage, NoDamage};
    use crate::sim::events::NoHooks;
    use crate::sim::pokemon::{Pokemon, Status};

    fn mon(species: &str, moves: &[&str]) -> Pokemon {
        Pokemon::new(species, 50, moves, "Static", None).expect("test pokemon should build")
    }

    fn p1() -> MonRef {
        MonRef { side: 0, slot: 0 }
    }

    fn p2() -> MonRef {
        MonRef { side: 1, slot: 0 }
    }

    #[test]
    fn recoil_rounds_and_never_drops_below_one_point() {
        let mut mv = ActiveMove::new("Brave Bird").expect("move");
        mv.recoil = Some((33, 100));
        assert_eq!(calc_recoil_damage(30, &mv), 10);
        assert_eq!(calc_recoil_damage(1, &mv), 1);
        assert_eq!(calc_recoil_damage(100, &mv), 33);
    }

    #[test]
    fn heal_fraction_truncates_before_gen_five() {
        assert_eq!(heal_amount(4, 175, (1, 2)), 87);
        assert_eq!(heal_amount(7, 175, (1, 2)), 88);
        assert_eq!(heal_amount(7, 110, (1, 2)), 55);
    }

    #[test]
    fn move_hit_applies_damage_and_reports_the_amount() {
        let mut battle = BattleState::singles(
            mon("Pikachu", &["Thunderbolt"]),
            mon("Dragonite", &["Splash"]),
            1,
        );
        let mut hooks = NoHooks;
        let mut oracle = FixedDamage(40);
        let mut actions = MoveActions::new(&mut battle, &mut hooks, &mut oracle);
        let mut mv = ActiveMove::new("Thunderbolt").expect("move");
        let payload = HitPayload::primary(&mv);
        let hp_before = actions.battle.mon(p2()).hp;
        let result = actions.move_hit(Some(p2()), p1(), &mut mv, &payload, false, false);
        assert_eq!(result, Outcome::Hit(Some(40)));
        assert_eq!(actions.battle.mon(p2()).hp, hp_before - 40);
    }

    #[test]
    fn status_only_success_reports_no_damage() {
        let mut battle = BattleState::singles(
            mon("Pikachu", &["Thunder Wave"]),
            mon("Dragonite", &["Splash"]),
            1,
        );
        let mut hooks = NoHooks;
        let mut oracle = NoDamage;
        let mut actions = MoveActions::new(&mut battle, &mut hooks, &mut oracle);
        let mut mv = ActiveMove::new("Thunder Wave").expect("move");
        let payload = HitPayload::primary(&mv);
        let result = actions.move_hit(Some(p2()), p1(), &mut mv, &payload, false, false);
        assert_eq!(result, Outcome::Continue);
        assert_eq!(actions.battle.mon(p2()).status, Some(Status::Paralysis));
    }

    #[test]
    fn primary_status_blocked_means_the_move_fails() {
        let mut battle = BattleState::singles(
            mon("Pikachu", &["Thunder Wave"]),
            mon("Dragonite", &["Splash"]),
            1,
        );
        battle.mon_mut(p2()).status = Some(Status::Burn);
        let mut hooks = NoHooks;
        let mut oracle = NoDamage;
        let mut actions = MoveActions::new(&mut battle, &mut hooks, &mut oracle);
        let mut mv = ActiveMove::new("Thunder Wave").expect("move");
        let payload = HitPayload::primary(&mv);
        let result = actions.move_hit(Some(p2()), p1(), &mut mv, &payload, false, false);
        assert_eq!(result, Outcome::Fail);
        assert_eq!(actions.battle.mon(p2()).status, Some(Status::Burn));
    }

    #[test]
    fn heal_at_full_hp_fails_and_announces_it() {
        let mut battle = BattleState::singles(
            mon("Blissey", &["Recover"]),
            mon("Dragonite", &["Splash"]),
            1,
        );
        let mut hooks = NoHooks;
        let mut oracle = NoDamage;
        let mut actions = MoveActions::new(&mut battle, &mut hooks, &mut oracle);
        let mut mv = ActiveMove::new("Recover").expect("move");
        let payload = HitPayload::primary(&mv);
        let result = actions.move_hit(Some(p1()), p1(), &mut mv, &payload, false, false);
        assert_eq!(result, Outcome::Fail);
        let lines = actions.battle.logger.log_lines();
        assert!(lines.iter().any(|line| line.starts_with("|-fail|")));
    }

    #[test]
    fn self_switch_raises_the_flag_after_a_hit() {
        let mut battle = BattleState::singles(
            mon("Pikachu", &["U-turn"]),
            mon("Dragonite", &["Splash"]),
            1,
        );
        battle.sides[0].reserve = 1;
        let mut hooks = NoHooks;
        let mut oracle = FixedDamage(25);
        let mut actions = MoveActions::new(&mut battle, &mut hooks, &mut oracle);
        let mut mv = ActiveMove::new("U-turn").expect("move");
        let payload = HitPayload::primary(&mv);
        actions.move_hit(Some(p2()), p1(), &mut mv, &payload, false, false);
        assert_eq!(
            actions.battle.mon(p1()).switch_flag.as_deref(),
            Some("move: U-turn")
        );
    }

    #[test]
    fn spread_hit_keeps_outcomes_aligned_when_one_slot_drops() {
        let mut battle = BattleState::doubles(
            [mon("Pikachu", &["Hyper Voice"]), mon("Oricorio", &["Splash"])],
            [mon("Dragonite", &["Splash"]), mon("Snorlax", &["Splash"])],
            1,
        );
        let mut hooks = NoHooks;
        let mut oracle = crate::sim::damage::ScriptedDamage::new(&[
            Outcome::Fail,
            Outcome::Hit(Some(30)),
        ]);
        let mut actions = MoveActions::new(&mut battle, &mut hooks, &mut oracle);
        let mut mv = ActiveMove::new("Hyper Voice").expect("move");
        let payload = HitPayload::primary(&mv);
        let mut targets = vec![
            HitTarget::Mon(MonRef { side: 1, slot: 0 }),
            HitTarget::Mon(MonRef { side: 1, slot: 1 }),
        ];
        let damage = actions.spread_move_hit(&mut targets, p1(), &mut mv, &payload, false, false);
        assert_eq!(damage[0], Outcome::Fail);
        assert_eq!(damage[1], Outcome::Hit(Some(30)));
        assert_eq!(targets[0], HitTarget::Dropped);
        assert!(targets[1].live().is_some());
    }
}
