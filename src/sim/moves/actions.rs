//! Top of the move pipeline: from a chosen move to its announcement,
//! PP accounting, gate chain and aftermath.
//!
//! `run_move` is the outer entry used once per action. `use_move` is the
//! inner caller that effects reach for when one move invokes another, and
//! everything below it works on an [`ActiveMove`] that events may rewrite
//! mid-flight.

use anyhow::{anyhow, Result};

use crate::data::moves::{get_move, normalize_move_name, Category, MoveTarget, SelfDestruct};
use crate::sim::battle::BattleState;
use crate::sim::damage::DamageOracle;
use crate::sim::events::{BattleHooks, EventId, EventTarget};
use crate::sim::moves::active::{ActiveMove, HitEffect, ZKind};
use crate::sim::outcome::Outcome;
use crate::sim::pokemon::{MonRef, MoveResult};

use super::move_hit::HitPayload;
use super::zmove;

/// Executes moves against battle state, with rule questions answered by the
/// event hooks and damage questions by the oracle.
pub struct MoveActions<'a> {
    pub battle: &'a mut BattleState,
    pub hooks: &'a mut dyn BattleHooks,
    pub oracle: &'a mut dyn DamageOracle,
}

impl<'a> MoveActions<'a> {
    pub fn new(
        battle: &'a mut BattleState,
        hooks: &'a mut dyn BattleHooks,
        oracle: &'a mut dyn DamageOracle,
    ) -> Self {
        Self {
            battle,
            hooks,
            oracle,
        }
    }
}

impl MoveActions<'_> {
    /// Runs one chosen action: the outer wrapper around [`use_move`] that
    /// handles PP, locked moves, Z-power announcements and Dancer copies.
    ///
    /// `external` marks invocations that are not the user's own action for
    /// the turn, such as a Dancer copy, and skips PP and lock bookkeeping.
    #[allow(clippy::too_many_arguments)]
    pub fn run_move(
        &mut self,
        move_name: &str,
        user: MonRef,
        requested_target: Option<MonRef>,
        source_effect: Option<&str>,
        z_move: Option<&str>,
        external: bool,
    ) -> Result<()> {
        let mut source_effect: Option<String> = source_effect.map(str::to_string);
        let mut base_id = normalize_move_name(move_name);
        let base_data =
            get_move(&base_id).ok_or_else(|| anyhow!("unknown move: {move_name}"))?;
        // A Z-move changes what the choice was aimed at, so the target mode
        // comes from the Z-move when there is one.
        let target_mode = z_move
            .and_then(|name| get_move(&normalize_move_name(name)))
            .map_or(base_data.target, |data| data.target);
        let mut target = self.battle.get_target(user, target_mode, requested_target);

        let mut base_move = ActiveMove::from_data(base_id.clone(), base_data);
        let prankster_boosted = base_move.prankster_boosted;
        if source_effect.is_none() && base_move.id != "struggle" && z_move.is_none() {
            if let Some(changed) = self.hooks.override_action(self.battle, user, &base_move.id) {
                let changed_id = normalize_move_name(&changed);
                let changed_data =
                    get_move(&changed_id).ok_or_else(|| anyhow!("unknown move: {changed}"))?;
                base_move = ActiveMove::from_data(changed_id.clone(), changed_data);
                base_id = changed_id;
                if prankster_boosted {
                    base_move.prankster_boosted = true;
                }
                target = self.battle.resolve_target(user, base_move.target);
            }
        }

        let mut mv = if z_move.is_some() {
            zmove::get_active_z_move(self.battle, &base_move, user)?
        } else {
            base_move
        };
        mv.is_external = external;

        let will_try = self.hooks.run_event(
            EventId::BeforeMove,
            self.battle,
            &mut mv,
            EventTarget::Mon(user),
            target,
        );
        if will_try.vetoes() {
            self.hooks.run_event(
                EventId::MoveAborted,
                self.battle,
                &mut mv,
                EventTarget::Mon(user),
                target,
            );
            // An announced refusal counts as a failure; a forced one does not.
            self.battle.mon_mut(user).move_this_turn_result =
                Some(if will_try == Outcome::Fail {
                    MoveResult::Failure
                } else {
                    MoveResult::Silent
                });
            return Ok(());
        }

        self.battle.mon_mut(user).last_damage = 0;
        if !external {
            match self.hooks.locked_move(self.battle, user) {
                None => {
                    if !self.battle.mon_mut(user).deduct_pp(&base_id, 1)
                        && mv.id != "struggle"
                    {
                        let ident = self.battle.ident(user);
                        self.battle.logger.log_cant(&ident, "nopp", &mv.name);
                        let console = match self.battle.gen {
                            1 | 2 => "Game Boy",
                            3 => "Game Boy Advance",
                            4 | 5 => "DS",
                            _ => "3DS",
                        };
                        self.battle.logger.log_hint(&format!(
                            "This is not a bug, this is really how it works on the {console}; \
                             try it yourself if you don't believe us."
                        ));
                        self.battle.mon_mut(user).move_this_turn_result =
                            Some(MoveResult::Failure);
                        return Ok(());
                    }
                }
                Some(lock) => {
                    source_effect = Some(lock);
                }
            }
            let move_id = mv.id.clone();
            self.battle.mon_mut(user).move_used(&move_id);
        }

        let no_lock = external && !self.battle.mon(user).has_volatile("lockedmove");

        if z_move.is_some() {
            if self.battle.mon(user).illusion {
                self.hooks.single_event(
                    EventId::End,
                    self.battle,
                    &mut mv,
                    EventTarget::Mon(user),
                    None,
                );
                self.battle.mon_mut(user).illusion = false;
            }
            let ident = self.battle.ident(user);
            self.battle.logger.log_zpower(&ident);
            self.battle.sides[user.side].z_move_used = true;
        }

        let moved = self.use_move(&base_id, user, target, source_effect.as_deref(), z_move, None)?;
        self.hooks.single_event(
            EventId::AfterMove,
            self.battle,
            &mut mv,
            EventTarget::Mon(user),
            target,
        );
        self.hooks.run_event(
            EventId::AfterMove,
            self.battle,
            &mut mv,
            EventTarget::Mon(user),
            target,
        );

        // Dancer replication falls outside the usual event order entirely.
        if mv.has_flag("dance") && moved && !mv.is_external {
            let mut dancers: Vec<(MonRef, u16, u32)> = Vec::new();
            for mon_ref in self.battle.all_active() {
                if mon_ref == user {
                    continue;
                }
                let mon = self.battle.mon(mon_ref);
                if mon.hp == 0 {
                    continue;
                }
                if mon.has_ability("dancer") && !mon.is_semi_invulnerable() {
                    dancers.push((mon_ref, mon.stats.spe, mon.ability_order));
                }
            }
            // Fastest dancer acts first; ties go to the newest holder.
            dancers.sort_by(|a, b| b.1.cmp(&a.1).then(b.2.cmp(&a.2)));
            for (dancer, _, _) in dancers {
                if self.battle.faint_messages() {
                    break;
                }
                let ident = self.battle.ident(dancer);
                self.battle.logger.log_activate(&ident, "ability: Dancer");
                self.run_move(&mv.id, dancer, None, Some("dancer"), None, true)?;
                // The copied move still spoils first-turn-only effects.
                self.battle.mon_mut(dancer).active_turns += 1;
            }
        }

        if no_lock && self.battle.mon(user).has_volatile("lockedmove") {
            self.battle.mon_mut(user).volatiles.remove("lockedmove");
        }
        Ok(())
    }

    /// The inner move caller: effects that launch a move mid-turn come in
    /// here, with `calling` carrying the move that launched it.
    pub fn use_move(
        &mut self,
        move_name: &str,
        user: MonRef,
        target: Option<MonRef>,
        source_effect: Option<&str>,
        z_move: Option<&str>,
        calling: Option<&ActiveMove>,
    ) -> Result<bool> {
        self.battle.mon_mut(user).move_this_turn_result = None;
        let result =
            self.use_move_inner(move_name, user, target, source_effect, z_move, calling)?;
        let mon = self.battle.mon_mut(user);
        if mon.move_this_turn_result.is_none() {
            mon.move_this_turn_result = Some(if result {
                MoveResult::Success
            } else {
                MoveResult::Failure
            });
        }
        Ok(result)
    }

    fn use_move_inner(
        &mut self,
        move_name: &str,
        user: MonRef,
        mut target: Option<MonRef>,
        source_effect: Option<&str>,
        z_move: Option<&str>,
        calling: Option<&ActiveMove>,
    ) -> Result<bool> {
        let mut source_effect: Option<String> = source_effect.map(str::to_string);
        // Instruct repeats the move as if chosen fresh.
        if source_effect.as_deref() == Some("instruct") {
            source_effect = None;
        }

        let id = normalize_move_name(move_name);
        let data = get_move(&id).ok_or_else(|| anyhow!("unknown move: {move_name}"))?;
        let mut mv = ActiveMove::from_data(id, data);

        if mv.id == "weatherball" && z_move.is_some() {
            // A Z-Weather Ball changes type only when used directly, never
            // through a calling effect.
            self.hooks.single_event(
                EventId::ModifyMove,
                self.battle,
                &mut mv,
                EventTarget::Mon(user),
                target,
            );
            if mv.move_type != "Normal" {
                source_effect = Some("weatherball".to_string());
            }
        }
        let source_is_z = source_effect
            .as_deref()
            .and_then(get_move)
            .map_or(false, |data| data.is_z.is_some());
        if z_move.is_some() || (mv.category != Category::Status && source_is_z) {
            mv = zmove::get_active_z_move(self.battle, &mv, user)?;
        }

        if let Some(outer) = calling {
            mv.priority = outer.priority;
            if !mv.has_bounced {
                mv.prankster_boosted = outer.prankster_boosted;
            }
        }

        let base_target = mv.target;
        if target.is_none() {
            target = self.battle.resolve_target(user, mv.target);
        }
        if mv.target.targets_user() {
            target = Some(user);
        }
        if let Some(effect_id) = source_effect.clone() {
            mv.source_effect = Some(effect_id);
            mv.ignore_ability = false;
        }

        self.hooks.single_event(
            EventId::ModifyMove,
            self.battle,
            &mut mv,
            EventTarget::Mon(user),
            target,
        );
        if mv.target != base_target {
            target = self.battle.resolve_target(user, mv.target);
        }
        let modified = self.hooks.run_event(
            EventId::ModifyMove,
            self.battle,
            &mut mv,
            EventTarget::Mon(user),
            target,
        );
        if mv.target != base_target {
            target = self.battle.resolve_target(user, mv.target);
        }
        if modified.vetoes() || self.battle.mon(user).fainted {
            return Ok(false);
        }

        let mut movename = mv.name.clone();
        if mv.id == "hiddenpower" {
            movename = "Hidden Power".to_string();
        }
        let mut attrs = String::new();
        if let Some(effect_id) = source_effect.as_deref() {
            attrs.push_str("|[from]");
            attrs.push_str(&source_effect_label(effect_id));
        }
        if z_move.is_some() && mv.z == ZKind::UpgradedStatus {
            attrs = format!("|[anim]{movename}{attrs}");
            movename = format!("Z-{movename}");
        }
        let user_ident = self.battle.ident(user);
        let target_part = match target {
            Some(mon) => format!("{}{}", self.battle.ident(mon), attrs),
            None => format!("null{attrs}"),
        };
        self.battle.logger.log_move(&user_ident, &movename, &target_part);

        if z_move.is_some() {
            self.run_z_power(&mut mv, user);
        }

        if target.is_none() {
            self.battle.logger.attr_last_move("[notarget]");
            let ident = self.battle.ident(user);
            if self.battle.gen >= 5 {
                self.battle.logger.log_fail(&ident);
            } else {
                self.battle.logger.add(&["-notarget", &ident]);
            }
            return Ok(false);
        }

        let targets = self.battle.get_move_targets(user, &mv, target);

        // Pressure-style drains apply unless the move was called by another
        // effect; Pursuit's chase keeps them.
        if source_effect.is_none() || source_effect.as_deref() == Some("pursuit") {
            let mut extra_pp: u8 = 0;
            for &pressurer in &targets {
                extra_pp = extra_pp
                    .saturating_add(self.hooks.extra_pp_drain(self.battle, user, pressurer, &mv));
            }
            if extra_pp > 0 {
                self.battle.mon_mut(user).deduct_pp(&mv.id, extra_pp);
            }
        }

        let try_single = self.hooks.single_event(
            EventId::TryMove,
            self.battle,
            &mut mv,
            EventTarget::Mon(user),
            target,
        );
        if try_single.vetoes()
            || self
                .hooks
                .run_event(
                    EventId::TryMove,
                    self.battle,
                    &mut mv,
                    EventTarget::Mon(user),
                    target,
                )
                .vetoes()
        {
            mv.mind_blown_recoil = false;
            return Ok(false);
        }

        self.hooks.single_event(
            EventId::UseMoveMessage,
            self.battle,
            &mut mv,
            EventTarget::Mon(user),
            target,
        );

        if mv.ignore_immunity.is_none() {
            mv.ignore_immunity = Some(mv.category == Category::Status);
        }
        if mv.selfdestruct == Some(SelfDestruct::Always) {
            self.battle.faint(user);
        }

        let move_result;
        if mv.target.is_side_or_field() {
            let Some(field_target) = target else {
                return Ok(false);
            };
            let damage = self.try_move_hit_field(field_target, user, &mut mv);
            if damage == Outcome::NotFailure {
                self.battle.mon_mut(user).move_this_turn_result = Some(MoveResult::Silent);
            }
            move_result = matches!(damage, Outcome::Hit(_) | Outcome::Continue);
        } else {
            let mut spread_targets = targets;
            move_result = self.try_spread_move_hit(&mut spread_targets, user, &mut mv);
        }

        if !mv.self_boost.is_empty() && move_result {
            let payload = HitPayload::from_effect(HitEffect::boosts_only(mv.self_boost.clone()));
            self.move_hit(Some(user), user, &mut mv, &payload, false, true);
        }
        if self.battle.mon(user).hp == 0 {
            self.battle.faint(user);
        }

        if !move_result {
            self.hooks.single_event(
                EventId::MoveFail,
                self.battle,
                &mut mv,
                target.map(EventTarget::Mon).unwrap_or(EventTarget::None),
                Some(user),
            );
            return Ok(false);
        }
        Ok(true)
    }

    /// Whole-field and whole-side moves skip the per-target gates and funnel
    /// through one synthetic target instead.
    fn try_move_hit_field(&mut self, target: MonRef, user: MonRef, mv: &mut ActiveMove) -> Outcome {
        let hit_result = self.hooks.single_event(
            EventId::PrepareHit,
            self.battle,
            mv,
            EventTarget::Mon(target),
            Some(user),
        );
        if hit_result.vetoes() {
            if hit_result == Outcome::Fail {
                let ident = self.battle.ident(user);
                self.battle.logger.log_fail(&ident);
                self.battle.logger.attr_last_move("[still]");
            }
            return Outcome::Fail;
        }
        self.hooks.run_event(
            EventId::PrepareHit,
            self.battle,
            mv,
            EventTarget::Mon(user),
            Some(target),
        );
        if self
            .hooks
            .single_event(EventId::Try, self.battle, mv, EventTarget::Mon(target), Some(user))
            .vetoes()
        {
            return Outcome::Fail;
        }

        let verdict = if mv.target == MoveTarget::All {
            self.hooks.run_event(
                EventId::TryHitField,
                self.battle,
                mv,
                EventTarget::Field,
                Some(user),
            )
        } else {
            self.hooks.run_event(
                EventId::TryHitSide,
                self.battle,
                mv,
                EventTarget::Side(target.side),
                Some(user),
            )
        };
        if verdict.vetoes() {
            if verdict == Outcome::Fail {
                let ident = self.battle.ident(user);
                self.battle.logger.log_fail(&ident);
                self.battle.logger.attr_last_move("[still]");
            }
            return Outcome::Fail;
        }

        let payload = HitPayload::primary(mv);
        self.move_hit(Some(target), user, mv, &payload, false, false)
    }
}

/// Label for a `[from]` clause on the move line.
fn source_effect_label(id: &str) -> String {
    if id == "dancer" {
        return "ability: Dancer".to_string();
    }
    match get_move(id) {
        Some(data) => format!("move: {}", data.name),
        None => id.to_string(),
    }
}
