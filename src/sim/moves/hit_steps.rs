//! Gate chain that stands between move selection and damage.
//!
//! Each step inspects the whole target list at once and reports a verdict per
//! slot. Slots that do not pass drop out of the list before the next step, so
//! later gates and the hit loop only ever see targets the move may still touch.

use crate::battle_logger::slot_token;
use crate::data::moves::{get_move, Category, Multihit, Ohko};
use crate::data::types::immune_against;
use crate::sim::events::{EventId, EventTarget};
use crate::sim::moves::active::ActiveMove;
use crate::sim::outcome::Outcome;
use crate::sim::pokemon::{MonRef, MoveResult, Status};
use crate::sim::stats::{Stat, STAGE_MULTIPLIERS};

use super::actions::MoveActions;
use super::move_hit::{calc_recoil_damage, round_half_up, HitPayload, HitTarget};

/// One gate of the chain. `None` keeps every remaining target; a verdict list
/// drops the slots whose entry is not a pass.
type HitStep<'a> =
    fn(&mut MoveActions<'a>, &[MonRef], MonRef, &mut ActiveMove) -> Option<Vec<Outcome>>;

impl<'a> MoveActions<'a> {
    /// Runs a move through the full gate chain against its resolved targets.
    ///
    /// Returns whether any target was still standing at the end, which is what
    /// decides between a connected move and an announced failure upstream.
    pub(crate) fn try_spread_move_hit(
        &mut self,
        targets: &mut Vec<MonRef>,
        user: MonRef,
        mv: &mut ActiveMove,
    ) -> bool {
        if targets.is_empty() {
            self.battle.logger.attr_last_move("[notarget]");
            let ident = self.battle.ident(user);
            if self.battle.gen >= 5 {
                self.battle.logger.log_fail(&ident);
            } else {
                self.battle.logger.add(&["-notarget", &ident]);
            }
            return false;
        }
        if targets.len() > 1 {
            mv.spread_hit = true;
        }

        let mut steps: [HitStep<'a>; 10] = [
            Self::try_immunity_step,
            Self::type_immunity_step,
            Self::try_hit_step,
            Self::powder_immunity_step,
            Self::prankster_immunity_step,
            Self::accuracy_step,
            Self::break_protect_step,
            Self::steal_boosts_step,
            Self::move_hit_loop,
            Self::after_move_secondary_step,
        ];
        // From gen 7 on, type immunity is checked after the TryHit handlers.
        if self.battle.gen >= 7 {
            steps.swap(1, 2);
        }

        let first = targets[0];
        let hit_result = self.hooks.single_event(
            EventId::PrepareHit,
            self.battle,
            mv,
            EventTarget::Mon(first),
            Some(user),
        );
        if hit_result.vetoes() {
            if hit_result == Outcome::Fail {
                let ident = self.battle.ident(user);
                self.battle.logger.log_fail(&ident);
                self.battle.logger.attr_last_move("[still]");
            }
            return false;
        }
        self.hooks.run_event(
            EventId::PrepareHit,
            self.battle,
            mv,
            EventTarget::Mon(user),
            Some(first),
        );

        // The Try handler speaks for the move itself, so a veto stays silent.
        if self
            .hooks
            .single_event(EventId::Try, self.battle, mv, EventTarget::Mon(first), Some(user))
            .vetoes()
        {
            return false;
        }

        let mut final_result = Outcome::Continue;
        for step in steps {
            let Some(mut results) = step(self, targets, user, mv) else {
                continue;
            };
            let mut index = 0;
            while index < targets.len() {
                if results[index].truthy() {
                    index += 1;
                    continue;
                }
                targets.remove(index);
                let verdict = results.remove(index);
                final_result = if verdict.success() {
                    verdict
                } else if final_result == Outcome::Fail && verdict == Outcome::NotFailure {
                    final_result
                } else {
                    verdict
                };
            }
        }

        let move_result = !targets.is_empty();
        if !move_result && final_result == Outcome::NotFailure {
            self.battle.mon_mut(user).move_this_turn_result = Some(MoveResult::Silent);
        }
        if mv.spread_hit {
            let slots: Vec<String> = targets
                .iter()
                .map(|target| slot_token(target.side, target.slot))
                .collect();
            self.battle
                .logger
                .attr_last_move(&format!("[spread] {}", slots.join(",")));
        }
        move_result
    }

    fn try_immunity_step(
        &mut self,
        targets: &[MonRef],
        user: MonRef,
        mv: &mut ActiveMove,
    ) -> Option<Vec<Outcome>> {
        let mut results =
            self.hooks
                .run_event_for_targets(EventId::TryImmunity, self.battle, mv, targets, user);
        for (index, &target) in targets.iter().enumerate() {
            if results[index] == Outcome::Fail {
                if !mv.spread_hit {
                    self.battle.logger.attr_last_move("[miss]");
                }
                let user_ident = self.battle.ident(user);
                let target_ident = self.battle.ident(target);
                self.battle.logger.log_miss(&user_ident, &target_ident);
            } else {
                results[index] = Outcome::Hit(None);
            }
        }
        Some(results)
    }

    fn type_immunity_step(
        &mut self,
        targets: &[MonRef],
        _user: MonRef,
        mv: &mut ActiveMove,
    ) -> Option<Vec<Outcome>> {
        if mv.ignore_immunity.is_none() {
            mv.ignore_immunity = Some(mv.category == Category::Status);
        }
        let mut results = Vec::with_capacity(targets.len());
        for &target in targets {
            if mv.ignores_immunity() || self.battle.mon(target).run_immunity(&mv.move_type) {
                results.push(Outcome::Hit(None));
            } else {
                let ident = self.battle.ident(target);
                self.battle.logger.log_immune(&ident);
                results.push(Outcome::Fail);
            }
        }
        Some(results)
    }

    fn try_hit_step(
        &mut self,
        targets: &[MonRef],
        user: MonRef,
        mv: &mut ActiveMove,
    ) -> Option<Vec<Outcome>> {
        let mut results =
            self.hooks
                .run_event_for_targets(EventId::TryHit, self.battle, mv, targets, user);
        for result in &mut results {
            if *result == Outcome::Continue {
                *result = Outcome::Hit(None);
            }
        }
        if !results.contains(&Outcome::Hit(None)) && results.contains(&Outcome::Fail) {
            let ident = self.battle.ident(user);
            self.battle.logger.log_fail(&ident);
            self.battle.logger.attr_last_move("[still]");
        }
        for result in &mut results {
            // A quiet refusal keeps its shape so the caller can tell it apart
            // from an announced failure.
            if *result != Outcome::NotFailure {
                *result = result.or(Outcome::Fail);
            }
        }
        Some(results)
    }

    fn powder_immunity_step(
        &mut self,
        targets: &[MonRef],
        user: MonRef,
        mv: &mut ActiveMove,
    ) -> Option<Vec<Outcome>> {
        if !mv.has_flag("powder") {
            return Some(vec![Outcome::Hit(None); targets.len()]);
        }
        let mut results = Vec::with_capacity(targets.len());
        for &target in targets {
            if target != user && immune_against("powder", &self.battle.mon(target).types) {
                let ident = self.battle.ident(target);
                self.battle.logger.log_immune(&ident);
                results.push(Outcome::Fail);
            } else {
                results.push(Outcome::Hit(None));
            }
        }
        Some(results)
    }

    fn prankster_immunity_step(
        &mut self,
        targets: &[MonRef],
        user: MonRef,
        mv: &mut ActiveMove,
    ) -> Option<Vec<Outcome>> {
        if self.battle.gen < 7
            || !mv.prankster_boosted
            || !self.battle.mon(user).has_ability("prankster")
        {
            return Some(vec![Outcome::Hit(None); targets.len()]);
        }
        let mut results = Vec::with_capacity(targets.len());
        for &target in targets {
            if target.side != user.side && immune_against("prankster", &self.battle.mon(target).types)
            {
                if !self.battle.mon(target).illusion {
                    self.battle
                        .logger
                        .log_hint("In gen 7, Dark is immune to Prankster moves.");
                }
                let ident = self.battle.ident(target);
                self.battle.logger.log_immune(&ident);
                results.push(Outcome::Fail);
            } else {
                results.push(Outcome::Hit(None));
            }
        }
        Some(results)
    }

    /// Stage-adjusted accuracy after the boost relays, before the final check.
    fn boosted_accuracy(
        &mut self,
        user: MonRef,
        target: MonRef,
        mv: &ActiveMove,
    ) -> Option<f64> {
        let mut accuracy = mv.accuracy;
        if let Some(mut value) = accuracy {
            if !mv.ignore_accuracy {
                let snapshot = self.battle.mon(user).boosts.clone();
                let boosts = self.hooks.modify_boosts(self.battle, user, snapshot);
                let boost = boosts.accuracy.clamp(-6, 6);
                if boost > 0 {
                    value *= STAGE_MULTIPLIERS[boost as usize];
                } else {
                    value /= STAGE_MULTIPLIERS[(-boost) as usize];
                }
            }
            if !mv.ignore_evasion {
                let snapshot = self.battle.mon(target).boosts.clone();
                let boosts = self.hooks.modify_boosts(self.battle, target, snapshot);
                let boost = boosts.evasion.clamp(-6, 6);
                if boost > 0 {
                    value /= STAGE_MULTIPLIERS[boost as usize];
                } else if boost < 0 {
                    value *= STAGE_MULTIPLIERS[(-boost) as usize];
                }
            }
            accuracy = Some(value);
        }
        self.hooks.modify_accuracy(self.battle, mv, target, user, accuracy)
    }

    fn accuracy_step(
        &mut self,
        targets: &[MonRef],
        user: MonRef,
        mv: &mut ActiveMove,
    ) -> Option<Vec<Outcome>> {
        let mut results = Vec::with_capacity(targets.len());
        for &target in targets {
            let mut accuracy = mv.accuracy;
            if let Some(kind) = mv.ohko {
                // One-hit KO accuracy ignores every stage and relay.
                if !self.battle.mon(target).is_semi_invulnerable() {
                    let mut value = 30.0;
                    if kind == Ohko::Ice
                        && self.battle.gen >= 7
                        && !self.battle.mon(user).has_type("Ice")
                    {
                        value = 20.0;
                    }
                    let user_level = self.battle.mon(user).level;
                    let target_level = self.battle.mon(target).level;
                    let type_exempt =
                        kind == Ohko::Regular || !self.battle.mon(target).has_type("Ice");
                    if user_level >= target_level && type_exempt {
                        value += f64::from(user_level - target_level);
                        accuracy = Some(value);
                    } else {
                        let ident = self.battle.ident(target);
                        self.battle.logger.add(&["-immune", &ident, "[ohko]"]);
                        results.push(Outcome::Fail);
                        continue;
                    }
                }
            } else {
                accuracy = self.boosted_accuracy(user, target, mv);
            }

            if mv.always_hit
                || (mv.id == "toxic"
                    && self.battle.gen >= 6
                    && self.battle.mon(user).has_type("Poison"))
            {
                accuracy = None;
            } else {
                accuracy = self.hooks.accuracy_check(self.battle, mv, target, user, accuracy);
            }

            if let Some(value) = accuracy {
                if !self.battle.rng.roll_percent(value) {
                    if !mv.spread_hit {
                        self.battle.logger.attr_last_move("[miss]");
                    }
                    let user_ident = self.battle.ident(user);
                    let target_ident = self.battle.ident(target);
                    self.battle.logger.log_miss(&user_ident, &target_ident);
                    results.push(Outcome::Fail);
                    continue;
                }
            }
            results.push(Outcome::Hit(None));
        }
        Some(results)
    }

    fn break_protect_step(
        &mut self,
        targets: &[MonRef],
        user: MonRef,
        mv: &mut ActiveMove,
    ) -> Option<Vec<Outcome>> {
        if !mv.breaks_protect {
            return None;
        }
        for &target in targets {
            let mut broke = false;
            for effect_id in ["banefulbunker", "kingsshield", "protect", "spikyshield"] {
                // Silent removal; the activate line below does the announcing.
                if self.battle.mon_mut(target).remove_volatile(effect_id) {
                    broke = true;
                }
            }
            if self.battle.gen >= 6 || target.side != user.side {
                for condition_id in ["craftyshield", "matblock", "quickguard", "wideguard"] {
                    if self.battle.sides[target.side].conditions.remove(condition_id) {
                        broke = true;
                    }
                }
            }
            if broke {
                let ident = self.battle.ident(target);
                if mv.id == "feint" {
                    self.battle.logger.log_activate(&ident, "move: Feint");
                } else {
                    let label = format!("move: {}", mv.name);
                    self.battle
                        .logger
                        .add(&["-activate", &ident, &label, "[broken]"]);
                }
                if self.battle.gen >= 6 {
                    self.battle.mon_mut(target).volatiles.remove("stall");
                }
            }
        }
        None
    }

    fn steal_boosts_step(
        &mut self,
        targets: &[MonRef],
        user: MonRef,
        mv: &mut ActiveMove,
    ) -> Option<Vec<Outcome>> {
        if !mv.steals_boosts {
            return None;
        }
        let Some(&target) = targets.first() else {
            return None;
        };
        let mut stolen: Vec<(Stat, i8)> = Vec::new();
        for (stat, stage) in self.battle.mon(target).boosts.entries() {
            if stage > 0 {
                stolen.push((stat, stage));
            }
        }
        if !stolen.is_empty() {
            self.battle.logger.attr_last_move("[still]");
            let target_ident = self.battle.ident(target);
            let user_ident = self.battle.ident(user);
            let label = format!("move: {}", mv.name);
            self.battle
                .logger
                .add(&["-clearpositiveboost", &target_ident, &user_ident, &label]);
            self.battle.boost(&stolen, user, &[]);
            for &(stat, _) in &stolen {
                self.battle.mon_mut(target).boosts.set(stat, 0);
            }
            self.battle
                .logger
                .log_anim(&user_ident, "Spectral Thief", &target_ident);
        }
        None
    }

    /// Swings the move against whatever targets survived the gates, once per
    /// hit for multi-hit moves, and settles recoil afterwards.
    fn move_hit_loop(
        &mut self,
        targets: &[MonRef],
        user: MonRef,
        mv: &mut ActiveMove,
    ) -> Option<Vec<Outcome>> {
        let mut damage = vec![Outcome::Hit(Some(0)); targets.len()];
        mv.total_damage = 0;
        self.battle.mon_mut(user).last_damage = 0;

        let hits = match mv.multihit {
            None => 1,
            Some(Multihit::Fixed(count)) => u32::from(count),
            Some(Multihit::Range(2, 5)) => {
                if self.battle.gen >= 5 {
                    u32::from(self.battle.rng.sample(&[2u8, 2, 3, 3, 4, 5]))
                } else {
                    u32::from(self.battle.rng.sample(&[2u8, 2, 2, 3, 3, 3, 4, 5]))
                }
            }
            Some(Multihit::Range(min, max)) => {
                self.battle.rng.range(u32::from(min), u32::from(max) + 1)
            }
        };

        let sleep_usable = mv.sleep_usable
            || mv
                .source_effect
                .as_deref()
                .and_then(get_move)
                .map_or(false, |data| data.sleep_usable);

        let mut targets_copy: Vec<HitTarget> =
            targets.iter().map(|&target| HitTarget::Mon(target)).collect();
        let mut null_damage = true;
        let mut hit_count = 0;
        while hit_count < hits && !targets_copy.contains(&HitTarget::Dropped) {
            // A user that explodes still gets its one hit; a user that
            // drops mid-loop does not get another.
            if hit_count > 0 && self.battle.mon(user).hp == 0 {
                break;
            }
            if self.battle.mon(user).status == Some(Status::Sleep) && !sleep_usable {
                break;
            }
            mv.hit = hit_count + 1;

            // Only the lead slot is consulted for the per-hit accuracy recheck.
            if let Some(target) = targets_copy.first().and_then(|entry| entry.live()) {
                if mv.multiaccuracy && hit_count > 0 {
                    let mut accuracy = self.boosted_accuracy(user, target, mv);
                    if !mv.always_hit {
                        accuracy =
                            self.hooks.accuracy_check(self.battle, mv, target, user, accuracy);
                        if let Some(value) = accuracy {
                            if !self.battle.rng.roll_percent(value) {
                                break;
                            }
                        }
                    }
                }
            }

            let mut hit_result = Outcome::Hit(None);
            if let Some(target) = targets_copy.first().and_then(|entry| entry.live()) {
                hit_result = self.hooks.single_event(
                    EventId::TryHit,
                    self.battle,
                    mv,
                    EventTarget::Mon(target),
                    Some(user),
                );
            }
            if hit_result.vetoes() {
                if hit_result == Outcome::Fail {
                    let ident = self.battle.ident(user);
                    self.battle.logger.log_fail(&ident);
                    self.battle.logger.attr_last_move("[still]");
                }
                break;
            }

            let payload = HitPayload::primary(mv);
            let move_damage = self.spread_move_hit(&mut targets_copy, user, mv, &payload, false, false);
            if move_damage.iter().all(|entry| *entry == Outcome::Fail) {
                break;
            }
            null_damage = false;
            for (index, entry) in move_damage.iter().enumerate() {
                damage[index] = if entry.truthy() {
                    *entry
                } else {
                    Outcome::Hit(Some(0))
                };
                mv.total_damage += damage[index].damage().unwrap_or(0);
            }

            if mv.mind_blown_recoil && hit_count == 0 {
                let amount = round_half_up(u64::from(self.battle.mon(user).max_hp), 2);
                self.battle
                    .damage(amount, user, &["[from] move: Mind Blown"]);
                self.battle.faint_messages();
            }

            self.hooks
                .run_event(EventId::Update, self.battle, mv, EventTarget::Field, None);
            hit_count += 1;
        }

        if hit_count == 0 {
            return Some(vec![Outcome::Fail; targets.len()]);
        }
        if null_damage {
            damage.fill(Outcome::Fail);
        }
        if mv.multihit.is_some() {
            if let Some(&first) = targets.first() {
                let ident = self.battle.ident(first);
                self.battle.logger.log_hit_count(&ident, hit_count);
            }
        }

        if mv.recoil.is_some() && mv.total_damage > 0 {
            let amount = calc_recoil_damage(mv.total_damage, mv);
            self.battle.damage(amount, user, &["[from] recoil"]);
        }
        if mv.struggle_recoil {
            let amount = round_half_up(u64::from(self.battle.mon(user).max_hp), 4);
            self.battle.direct_damage(amount, user);
        }

        for (index, &target) in targets.iter().enumerate() {
            if target != user {
                let amount = damage[index].damage().unwrap_or(0);
                self.battle.mon_mut(target).got_attacked(&mv.id, amount, user);
            }
        }

        if mv.ohko.is_some() {
            self.battle.logger.log_ohko();
        }

        if !damage.iter().any(|entry| entry.success()) {
            return Some(damage);
        }

        self.hooks
            .run_event(EventId::Update, self.battle, mv, EventTarget::Field, None);
        Some(damage)
    }

    fn after_move_secondary_step(
        &mut self,
        targets: &[MonRef],
        user: MonRef,
        mv: &mut ActiveMove,
    ) -> Option<Vec<Outcome>> {
        if !mv.negate_secondary
            && !(mv.has_sheer_force && self.battle.mon(user).has_ability("sheerforce"))
        {
            let event_target = targets
                .first()
                .map(|&target| EventTarget::Mon(target))
                .unwrap_or(EventTarget::None);
            self.hooks.single_event(
                EventId::AfterMoveSecondary,
                self.battle,
                mv,
                event_target,
                Some(user),
            );
            self.hooks.run_event_for_targets(
                EventId::AfterMoveSecondary,
                self.battle,
                mv,
                targets,
                user,
            );
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::battle::BattleState;
    use crate::sim::damage::{FixedDamage, NoDamage};
    use crate::sim::events::{BattleHooks, NoHooks};
    use crate::sim::pokemon::Pokemon;

    fn mon(species: &str, moves: &[&str]) -> Pokemon {
        Pokemon::new(species, 50, moves, "Static", None).expect("test pokemon should build")
    }

    fn mon_at(species: &str, level: u8, moves: &[&str]) -> Pokemon {
        Pokemon::new(species, level, moves, "Static", None).expect("test pokemon should build")
    }

    fn p1() -> MonRef {
        MonRef { side: 0, slot: 0 }
    }

    fn p2() -> MonRef {
        MonRef { side: 1, slot: 0 }
    }

    fn log_contains(battle: &BattleState, needle: &str) -> bool {
        battle.logger.log_lines().iter().any(|line| line.contains(needle))
    }

    #[test]
    fn accuracy_step_rolls_against_the_stated_chance() {
        let mut battle = BattleState::singles(
            mon("Pikachu", &["Thunderbolt"]),
            mon("Dragonite", &["Splash"]),
            1,
        );
        let mut hooks = NoHooks;
        let mut oracle = NoDamage;
        let mut actions = MoveActions::new(&mut battle, &mut hooks, &mut oracle);

        let mut sure = ActiveMove::new("Thunderbolt").expect("move");
        sure.accuracy = Some(100.0);
        let results = actions
            .accuracy_step(&[p2()], p1(), &mut sure)
            .expect("accuracy always filters");
        assert_eq!(results, vec![Outcome::Hit(None)]);

        let mut hopeless = ActiveMove::new("Thunderbolt").expect("move");
        hopeless.accuracy = Some(0.0);
        let results = actions
            .accuracy_step(&[p2()], p1(), &mut hopeless)
            .expect("accuracy always filters");
        assert_eq!(results, vec![Outcome::Fail]);
        assert!(log_contains(actions.battle, "-miss"));
    }

    #[test]
    fn stage_boosts_scale_the_accuracy_before_the_roll() {
        let mut battle = BattleState::singles(
            mon("Pikachu", &["Thunderbolt"]),
            mon("Dragonite", &["Splash"]),
            1,
        );
        battle.mon_mut(p1()).boosts.set(Stat::Accuracy, 2);
        battle.mon_mut(p2()).boosts.set(Stat::Evasion, 3);
        let mut hooks = NoHooks;
        let mut oracle = NoDamage;
        let mut actions = MoveActions::new(&mut battle, &mut hooks, &mut oracle);

        let mut mv = ActiveMove::new("Thunderbolt").expect("move");
        mv.accuracy = Some(90.0);
        let value = actions
            .boosted_accuracy(p1(), p2(), &mv)
            .expect("a stated accuracy stays stated");
        // 90 * (5/3) for +2 accuracy, then halved by +3 evasion.
        assert!((value - 75.0).abs() < 1e-9);
    }

    #[test]
    fn one_hit_ko_accuracy_counts_the_level_lead() {
        struct AccuracyProbe {
            seen: Option<Option<f64>>,
        }
        impl BattleHooks for AccuracyProbe {
            fn accuracy_check(
                &mut self,
                _battle: &mut BattleState,
                _mv: &ActiveMove,
                _target: MonRef,
                _user: MonRef,
                accuracy: Option<f64>,
            ) -> Option<f64> {
                self.seen = Some(accuracy);
                None
            }
        }

        let mut battle = BattleState::singles(
            mon_at("Golem", 50, &["Fissure"]),
            mon_at("Pikachu", 45, &["Splash"]),
            1,
        );
        let mut hooks = AccuracyProbe { seen: None };
        let mut oracle = NoDamage;
        let mut actions = MoveActions::new(&mut battle, &mut hooks, &mut oracle);
        let mut mv = ActiveMove::new("Fissure").expect("move");
        let results = actions
            .accuracy_step(&[p2()], p1(), &mut mv)
            .expect("accuracy always filters");
        assert_eq!(results, vec![Outcome::Hit(None)]);
        assert_eq!(hooks.seen, Some(Some(35.0)));
    }

    #[test]
    fn one_hit_ko_from_below_is_an_immunity() {
        let mut battle = BattleState::singles(
            mon_at("Golem", 45, &["Fissure"]),
            mon_at("Dragonite", 50, &["Splash"]),
            1,
        );
        let mut hooks = NoHooks;
        let mut oracle = NoDamage;
        let mut actions = MoveActions::new(&mut battle, &mut hooks, &mut oracle);
        let mut mv = ActiveMove::new("Fissure").expect("move");
        let results = actions
            .accuracy_step(&[p2()], p1(), &mut mv)
            .expect("accuracy always filters");
        assert_eq!(results, vec![Outcome::Fail]);
        assert!(log_contains(actions.battle, "[ohko]"));
    }

    #[test]
    fn electric_moves_cannot_touch_a_ground_type() {
        let mut battle = BattleState::singles(
            mon("Pikachu", &["Thunderbolt"]),
            mon("Golem", &["Splash"]),
            1,
        );
        let mut hooks = NoHooks;
        let mut oracle = NoDamage;
        let mut actions = MoveActions::new(&mut battle, &mut hooks, &mut oracle);
        let mut mv = ActiveMove::new("Thunderbolt").expect("move");
        let results = actions
            .type_immunity_step(&[p2()], p1(), &mut mv)
            .expect("immunity always filters");
        assert_eq!(results, vec![Outcome::Fail]);
        assert!(log_contains(actions.battle, "-immune"));
    }

    #[test]
    fn powder_stops_at_a_grass_type() {
        let mut battle = BattleState::singles(
            mon("Breloom", &["Spore"]),
            mon("Venusaur", &["Splash"]),
            1,
        );
        let mut hooks = NoHooks;
        let mut oracle = NoDamage;
        let mut actions = MoveActions::new(&mut battle, &mut hooks, &mut oracle);
        let mut mv = ActiveMove::new("Spore").expect("move");
        let results = actions
            .powder_immunity_step(&[p2()], p1(), &mut mv)
            .expect("powder always filters");
        assert_eq!(results, vec![Outcome::Fail]);
        assert!(log_contains(actions.battle, "-immune"));
    }

    #[test]
    fn breaking_protection_clears_the_shield_and_says_so() {
        let mut battle = BattleState::singles(
            mon("Machamp", &["Hyperspace Fury"]),
            mon("Dragonite", &["Protect"]),
            1,
        );
        battle.add_volatile("protect", p2(), None);
        let mut hooks = NoHooks;
        let mut oracle = NoDamage;
        let mut actions = MoveActions::new(&mut battle, &mut hooks, &mut oracle);
        let mut mv = ActiveMove::new("Hyperspace Fury").expect("move");
        assert!(actions.break_protect_step(&[p2()], p1(), &mut mv).is_none());
        assert!(!actions.battle.mon(p2()).has_volatile("protect"));
        assert!(log_contains(actions.battle, "[broken]"));
    }

    #[test]
    fn boost_theft_takes_only_the_positive_stages() {
        let mut battle = BattleState::singles(
            mon("Gengar", &["Spectral Thief"]),
            mon("Dragonite", &["Splash"]),
            1,
        );
        battle.mon_mut(p2()).boosts.set(Stat::Atk, 2);
        battle.mon_mut(p2()).boosts.set(Stat::Def, -1);
        battle.mon_mut(p2()).boosts.set(Stat::Spe, 1);
        let mut hooks = NoHooks;
        let mut oracle = NoDamage;
        let mut actions = MoveActions::new(&mut battle, &mut hooks, &mut oracle);
        let mut mv = ActiveMove::new("Spectral Thief").expect("move");
        assert!(actions.steal_boosts_step(&[p2()], p1(), &mut mv).is_none());
        assert_eq!(actions.battle.mon(p1()).boosts.atk, 2);
        assert_eq!(actions.battle.mon(p1()).boosts.spe, 1);
        assert_eq!(actions.battle.mon(p2()).boosts.atk, 0);
        assert_eq!(actions.battle.mon(p2()).boosts.spe, 0);
        assert_eq!(actions.battle.mon(p2()).boosts.def, -1);
        assert!(log_contains(actions.battle, "-clearpositiveboost"));
    }

    #[test]
    fn fixed_multihit_lands_each_strike_and_logs_the_count() {
        let mut battle = BattleState::singles(
            mon("Machamp", &["Double Kick"]),
            mon("Snorlax", &["Splash"]),
            1,
        );
        let mut hooks = NoHooks;
        let mut oracle = FixedDamage(10);
        let mut actions = MoveActions::new(&mut battle, &mut hooks, &mut oracle);
        let mut mv = ActiveMove::new("Double Kick").expect("move");
        mv.accuracy = None;
        let hp_before = actions.battle.mon(p2()).hp;
        let damage = actions
            .move_hit_loop(&[p2()], p1(), &mut mv)
            .expect("the hit loop always reports");
        assert_eq!(damage, vec![Outcome::Hit(Some(10))]);
        assert_eq!(mv.total_damage, 20);
        assert_eq!(actions.battle.mon(p2()).hp, hp_before - 20);
        assert!(log_contains(actions.battle, "-hitcount"));
    }

    #[test]
    fn recoil_is_charged_on_the_damage_total() {
        let mut battle = BattleState::singles(
            mon("Dragonite", &["Brave Bird"]),
            mon("Snorlax", &["Splash"]),
            1,
        );
        let mut hooks = NoHooks;
        let mut oracle = FixedDamage(90);
        let mut actions = MoveActions::new(&mut battle, &mut hooks, &mut oracle);
        let mut mv = ActiveMove::new("Brave Bird").expect("move");
        mv.accuracy = None;
        let hp_before = actions.battle.mon(p1()).hp;
        actions
            .move_hit_loop(&[p2()], p1(), &mut mv)
            .expect("the hit loop always reports");
        // 33/100 of 90, rounded half up.
        assert_eq!(actions.battle.mon(p1()).hp, hp_before - 30);
        assert!(log_contains(actions.battle, "[from] recoil"));
    }

    #[test]
    fn a_sleeping_user_swings_only_with_permission() {
        let mut battle = BattleState::singles(
            mon("Machamp", &["Double Kick"]),
            mon("Snorlax", &["Splash"]),
            1,
        );
        battle.mon_mut(p1()).status = Some(Status::Sleep);
        let mut hooks = NoHooks;
        let mut oracle = FixedDamage(10);
        let mut actions = MoveActions::new(&mut battle, &mut hooks, &mut oracle);

        let mut mv = ActiveMove::new("Double Kick").expect("move");
        mv.accuracy = None;
        let damage = actions
            .move_hit_loop(&[p2()], p1(), &mut mv)
            .expect("the hit loop always reports");
        assert_eq!(damage, vec![Outcome::Fail]);

        let mut called = ActiveMove::new("Double Kick").expect("move");
        called.accuracy = None;
        called.source_effect = Some("sleeptalk".to_string());
        let damage = actions
            .move_hit_loop(&[p2()], p1(), &mut called)
            .expect("the hit loop always reports");
        assert_eq!(damage, vec![Outcome::Hit(Some(10))]);
    }

    #[test]
    fn an_empty_target_list_fails_the_move() {
        let mut battle = BattleState::singles(
            mon("Pikachu", &["Thunderbolt"]),
            mon("Dragonite", &["Splash"]),
            1,
        );
        let mut hooks = NoHooks;
        let mut oracle = NoDamage;
        let mut actions = MoveActions::new(&mut battle, &mut hooks, &mut oracle);
        let mut mv = ActiveMove::new("Thunderbolt").expect("move");
        let mut targets: Vec<MonRef> = Vec::new();
        assert!(!actions.try_spread_move_hit(&mut targets, p1(), &mut mv));
        assert!(log_contains(actions.battle, "-fail"));
    }

    #[test]
    fn the_full_chain_connects_and_deals_damage() {
        let mut battle = BattleState::singles(
            mon("Pikachu", &["Thunderbolt"]),
            mon("Dragonite", &["Splash"]),
            1,
        );
        let mut hooks = NoHooks;
        let mut oracle = FixedDamage(40);
        let mut actions = MoveActions::new(&mut battle, &mut hooks, &mut oracle);
        let mut mv = ActiveMove::new("Thunderbolt").expect("move");
        mv.accuracy = Some(100.0);
        let hp_before = actions.battle.mon(p2()).hp;
        let mut targets = vec![p2()];
        assert!(actions.try_spread_move_hit(&mut targets, p1(), &mut mv));
        assert_eq!(targets, vec![p2()]);
        assert_eq!(actions.battle.mon(p2()).hp, hp_before - 40);
        assert!(!log_contains(actions.battle, "-miss"));
    }

    #[test]
    fn a_spread_move_tags_the_surviving_slots() {
        let mut battle = BattleState::doubles(
            [mon("Pikachu", &["Hyper Voice"]), mon("Oricorio", &["Splash"])],
            [mon("Dragonite", &["Splash"]), mon("Snorlax", &["Splash"])],
            1,
        );
        let mut hooks = NoHooks;
        let mut oracle = FixedDamage(30);
        let mut actions = MoveActions::new(&mut battle, &mut hooks, &mut oracle);
        let user_ident = actions.battle.ident(p1());
        actions.battle.logger.log_move(&user_ident, "Hyper Voice", "p2a: Dragonite");
        let mut mv = ActiveMove::new("Hyper Voice").expect("move");
        mv.accuracy = None;
        let mut targets = vec![p2(), MonRef { side: 1, slot: 1 }];
        assert!(actions.try_spread_move_hit(&mut targets, p1(), &mut mv));
        assert!(mv.spread_hit);
        assert!(log_contains(actions.battle, "[spread] p2a,p2b"));
    }
}
