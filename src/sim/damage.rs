use std::collections::VecDeque;

use crate::data::moves::Category;
use crate::sim::battle::BattleState;
use crate::sim::moves::active::ActiveMove;
use crate::sim::outcome::Outcome;
use crate::sim::pokemon::MonRef;

/// Damage numbers come from outside the resolution pipeline; the
/// pipeline only interprets the verdict.
///
/// Contract, per application against one target:
/// - `Hit(Some(n))`: the hit connects for `n` points.
/// - `Hit(None)`: the hit connects without a number attached.
/// - `Fail`: the target is immune; the pipeline announces the failure.
/// - `Silent`: the hit is negated without an announcement.
/// - `Continue`: no opinion. Pure status applications land here.
pub trait DamageOracle {
    fn damage(
        &mut self,
        battle: &mut BattleState,
        source: MonRef,
        target: MonRef,
        mv: &ActiveMove,
    ) -> Outcome;
}

/// Every damaging hit lands for the same amount. One-hit KO moves
/// report the target's full HP instead, matching how their damage is
/// defined.
#[derive(Clone, Copy, Debug)]
pub struct FixedDamage(pub u32);

impl DamageOracle for FixedDamage {
    fn damage(
        &mut self,
        battle: &mut BattleState,
        _source: MonRef,
        target: MonRef,
        mv: &ActiveMove,
    ) -> Outcome {
        if mv.ohko.is_some() {
            return Outcome::Hit(Some(battle.mon(target).max_hp));
        }
        if mv.category == Category::Status {
            return Outcome::Continue;
        }
        Outcome::Hit(Some(self.0))
    }
}

/// Offers no opinion on any hit. Status-only battles and effect
/// plumbing tests run on this.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoDamage;

impl DamageOracle for NoDamage {
    fn damage(
        &mut self,
        _battle: &mut BattleState,
        _source: MonRef,
        _target: MonRef,
        _mv: &ActiveMove,
    ) -> Outcome {
        Outcome::Continue
    }
}

/// Plays back a fixed script of verdicts, one per application, then
/// keeps repeating the final entry.
#[derive(Clone, Debug)]
pub struct ScriptedDamage {
    script: VecDeque<Outcome>,
    last: Outcome,
}

impl ScriptedDamage {
    pub fn new(verdicts: &[Outcome]) -> Self {
        let last = verdicts.last().copied().unwrap_or(Outcome::Continue);
        Self {
            script: verdicts.iter().copied().collect(),
            last,
        }
    }
}

impl DamageOracle for ScriptedDamage {
    fn damage(
        &mut self,
        _battle: &mut BattleState,
        _source: MonRef,
        _target: MonRef,
        _mv: &ActiveMove,
    ) -> Outcome {
        self.script.pop_front().unwrap_or(self.last)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::battle::Side;
    use crate::sim::pokemon::Pokemon;

    fn battle() -> BattleState {
        let a = Pokemon::new("Pikachu", 50, &["Tackle"], "Static", None).expect("mon");
        let b = Pokemon::new("Golem", 50, &["Fissure"], "Sturdy", None).expect("mon");
        BattleState::new([Side::new(vec![a]), Side::new(vec![b])], 7, 1)
    }

    #[test]
    fn fixed_damage_reports_full_hp_for_ohko_moves() {
        let mut battle = battle();
        let mut oracle = FixedDamage(42);
        let tackle = ActiveMove::new("Tackle").expect("move");
        let fissure = ActiveMove::new("Fissure").expect("move");
        let user = MonRef { side: 1, slot: 0 };
        let target = MonRef { side: 0, slot: 0 };
        assert_eq!(
            oracle.damage(&mut battle, user, target, &tackle),
            Outcome::Hit(Some(42))
        );
        let max_hp = battle.mon(target).max_hp;
        assert_eq!(
            oracle.damage(&mut battle, user, target, &fissure),
            Outcome::Hit(Some(max_hp))
        );
    }

    #[test]
    fn scripted_damage_repeats_its_final_verdict() {
        let mut battle = battle();
        let mut oracle = ScriptedDamage::new(&[Outcome::Fail, Outcome::Hit(Some(10))]);
        let tackle = ActiveMove::new("Tackle").expect("move");
        let user = MonRef { side: 0, slot: 0 };
        let target = MonRef { side: 1, slot: 0 };
        assert_eq!(
            oracle.damage(&mut battle, user, target, &tackle),
            Outcome::Fail
        );
        assert_eq!(
            oracle.damage(&mut battle, user, target, &tackle),
            Outcome::Hit(Some(10))
        );
        assert_eq!(
            oracle.damage(&mut battle, user, target, &tackle),
            Outcome::Hit(Some(10))
        );
    }
}
