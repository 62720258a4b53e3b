/// Result of one step of move resolution.
///
/// A hit carries its damage amount when one was computed; zero damage is
/// still a hit. `Fail` is a failure the log announces, `Silent` fails
/// without a message, `NotFailure` means the move never happened but must
/// not be counted as a failure, and `Continue` expresses no opinion and
/// leaves the decision to later steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Outcome {
    Hit(Option<u32>),
    Fail,
    Silent,
    NotFailure,
    #[default]
    Continue,
}

impl Outcome {
    fn rank(self) -> u8 {
        match self {
            Outcome::Hit(Some(_)) => 5,
            Outcome::Hit(None) => 4,
            Outcome::Fail => 3,
            Outcome::Silent => 2,
            Outcome::NotFailure => 1,
            Outcome::Continue => 0,
        }
    }

    /// Folds `newer` into `self`. The higher-ranked value wins; on a tie
    /// the newer value is kept, so a later damage amount replaces an
    /// earlier one.
    #[must_use]
    pub fn combine(self, newer: Outcome) -> Outcome {
        if newer.rank() >= self.rank() {
            newer
        } else {
            self
        }
    }

    /// True for any hit, including a zero-damage hit.
    pub fn success(self) -> bool {
        matches!(self, Outcome::Hit(_))
    }

    /// True when the value gates as affirmative on its own: a plain hit or
    /// a positive damage amount. A zero-damage hit still records as a hit
    /// when folded, but does not keep a target active in the filter chain.
    pub fn truthy(self) -> bool {
        match self {
            Outcome::Hit(None) => true,
            Outcome::Hit(Some(n)) => n > 0,
            _ => false,
        }
    }

    /// `self` when truthy, otherwise `other`. This is the short-circuit
    /// fold the effect ladder uses to accumulate "did anything happen".
    #[must_use]
    pub fn or(self, other: Outcome) -> Outcome {
        if self.truthy() {
            self
        } else {
            other
        }
    }

    /// True for both failure flavors.
    pub fn failed(self) -> bool {
        matches!(self, Outcome::Fail | Outcome::Silent)
    }

    /// Gate test for a Try-style event answer: any concrete negative
    /// stops the move, while no opinion lets it pass.
    pub fn vetoes(self) -> bool {
        !self.truthy() && self != Outcome::Continue
    }

    /// The damage amount, when this outcome carries one.
    pub fn damage(self) -> Option<u32> {
        match self {
            Outcome::Hit(amount) => amount,
            _ => None,
        }
    }
}

impl From<bool> for Outcome {
    fn from(ok: bool) -> Self {
        if ok {
            Outcome::Hit(None)
        } else {
            Outcome::Fail
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combine_prefers_damage_over_flags() {
        assert_eq!(Outcome::Fail.combine(Outcome::Hit(Some(0))), Outcome::Hit(Some(0)));
        assert_eq!(Outcome::Hit(Some(12)).combine(Outcome::Fail), Outcome::Hit(Some(12)));
        assert_eq!(Outcome::Hit(None).combine(Outcome::Silent), Outcome::Hit(None));
    }

    #[test]
    fn combine_keeps_the_newer_value_on_ties() {
        assert_eq!(
            Outcome::Hit(Some(3)).combine(Outcome::Hit(Some(40))),
            Outcome::Hit(Some(40))
        );
        assert_eq!(Outcome::Hit(None).combine(Outcome::Hit(Some(7))), Outcome::Hit(Some(7)));
    }

    #[test]
    fn announced_failure_outranks_silent_failure() {
        assert_eq!(Outcome::Silent.combine(Outcome::Fail), Outcome::Fail);
        assert_eq!(Outcome::Fail.combine(Outcome::Silent), Outcome::Fail);
    }

    #[test]
    fn not_failure_only_beats_no_opinion() {
        assert_eq!(Outcome::Continue.combine(Outcome::NotFailure), Outcome::NotFailure);
        assert_eq!(Outcome::NotFailure.combine(Outcome::Silent), Outcome::Silent);
        assert_eq!(Outcome::NotFailure.combine(Outcome::Continue), Outcome::NotFailure);
    }

    #[test]
    fn zero_damage_still_counts_as_a_hit() {
        assert!(Outcome::Hit(Some(0)).success());
        assert!(!Outcome::Hit(Some(0)).failed());
        assert_eq!(Outcome::Hit(Some(0)).damage(), Some(0));
    }

    #[test]
    fn zero_damage_is_a_hit_but_not_truthy() {
        assert!(Outcome::Hit(None).truthy());
        assert!(Outcome::Hit(Some(18)).truthy());
        assert!(!Outcome::Hit(Some(0)).truthy());
        assert!(!Outcome::NotFailure.truthy());
        assert!(!Outcome::Continue.truthy());
    }

    #[test]
    fn unanswered_events_do_not_veto() {
        assert!(!Outcome::Continue.vetoes());
        assert!(!Outcome::Hit(None).vetoes());
        assert!(Outcome::Fail.vetoes());
        assert!(Outcome::Silent.vetoes());
        assert!(Outcome::NotFailure.vetoes());
        assert!(Outcome::Hit(Some(0)).vetoes());
    }

    #[test]
    fn or_keeps_the_first_truthy_value() {
        assert_eq!(Outcome::Hit(None).or(Outcome::Fail), Outcome::Hit(None));
        assert_eq!(Outcome::Fail.or(Outcome::Hit(Some(9))), Outcome::Hit(Some(9)));
        assert_eq!(Outcome::Continue.or(Outcome::Fail), Outcome::Fail);
        assert_eq!(Outcome::Fail.or(Outcome::Continue), Outcome::Continue);
    }

    #[test]
    fn bool_conversion_matches_hit_and_fail() {
        assert_eq!(Outcome::from(true), Outcome::Hit(None));
        assert_eq!(Outcome::from(false), Outcome::Fail);
    }
}
