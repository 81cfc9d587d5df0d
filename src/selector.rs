//! Ranking of competing actions.
//!
//! The selector holds named actions, resolves each one's effective
//! self-interest scale at query time, and picks the best action under either
//! decision rule. Ties are broken uniformly at random using a salt that is
//! redrawn from the injected RNG whenever an action is added, so repeated
//! queries on an unchanged selector agree with each other.

use rand::rngs::SmallRng;
use rand::{Rng, RngCore, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::error::{EvalError, Result};
use crate::model::{Action, SelfInterestScale};

/// Construction options for an [`ActionSelector`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectorConfig {
    /// Tie-break RNG seed. `None` seeds from the thread RNG.
    pub seed: Option<u64>,
    /// Selector-wide self-interest scale, validated on use.
    pub self_interest: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum DecisionRule {
    /// Maximize total value.
    Utilitarian,
    /// Maximize the sum of harmful terms, i.e. pick the least total harm.
    NegativeUtilitarian,
}

string_enum!(DecisionRule, "decision rule", {
    Utilitarian => "utilitarian",
    NegativeUtilitarian => "negative_utilitarian",
});

impl DecisionRule {
    pub fn score(self, action: &Action, scale: Option<SelfInterestScale>) -> f64 {
        match self {
            DecisionRule::Utilitarian => action.total_value_with(scale),
            DecisionRule::NegativeUtilitarian => action.negative_value_with(scale),
        }
    }
}

/// Advisory raised when a scale applies to an action with no decision-maker,
/// so every party falls into the `1 - scale` share.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MissingDecisionMaker {
    pub act: String,
}

/// A winning action and the numbers it won with.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Ranking<'a> {
    #[serde(rename = "act")]
    pub name: &'a str,
    #[serde(skip)]
    pub action: &'a Action,
    pub rule: DecisionRule,
    pub value: f64,
    pub negative_value: f64,
    /// Effective scale the action was evaluated under.
    pub scale: Option<SelfInterestScale>,
}

impl Ranking<'_> {
    /// The figure the rule maximized.
    pub fn score(&self) -> f64 {
        match self.rule {
            DecisionRule::Utilitarian => self.value,
            DecisionRule::NegativeUtilitarian => self.negative_value,
        }
    }
}

/// One row of a selector listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub act: String,
    pub value: f64,
    pub negative_value: f64,
    pub scale: Option<f64>,
}

#[derive(Debug, Clone)]
pub struct ActionSelector {
    self_interest_scale: Option<SelfInterestScale>,
    acts: Vec<(String, Action)>,
    rng: SmallRng,
    tie_salt: u64,
}

impl Default for ActionSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl ActionSelector {
    /// Selector whose tie-breaks are seeded from the thread RNG.
    pub fn new() -> Self {
        Self::from_rng(&mut rand::rng())
    }

    pub fn with_seed(seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let tie_salt = rng.next_u64();
        Self {
            self_interest_scale: None,
            acts: Vec::new(),
            rng,
            tie_salt,
        }
    }

    pub fn from_rng(rng: &mut dyn RngCore) -> Self {
        Self::with_seed(rng.next_u64())
    }

    pub fn from_config(config: &SelectorConfig) -> Result<Self> {
        let mut selector = match config.seed {
            Some(seed) => Self::with_seed(seed),
            None => Self::new(),
        };
        if let Some(scale) = config.self_interest {
            selector.set_self_interest_scale(scale)?;
        }
        Ok(selector)
    }

    pub fn acts(&self) -> &[(String, Action)] {
        &self.acts
    }

    pub fn get(&self, name: &str) -> Option<&Action> {
        self.acts.iter().find(|(n, _)| n == name).map(|(_, a)| a)
    }

    /// Mutable access to a held action, e.g. to change or clear its own
    /// scale. Later queries see the change.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Action> {
        self.acts.iter_mut().find(|(n, _)| n == name).map(|(_, a)| a)
    }

    pub fn len(&self) -> usize {
        self.acts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.acts.is_empty()
    }

    pub fn self_interest_scale(&self) -> Option<SelfInterestScale> {
        self.self_interest_scale
    }

    /// Add a named action. Names are expected to be unique but not checked.
    pub fn add_act(&mut self, name: impl Into<String>, act: Action) {
        let name = name.into();
        if self.self_interest_scale.is_some() && lacks_decision_maker(&act) {
            tracing::warn!(act = %name, "act has no decision maker");
        }
        self.acts.push((name, act));
        self.tie_salt = self.rng.next_u64();
    }

    /// Set the selector-wide scale. Actions without their own scale pick it
    /// up at query time, including actions added later.
    ///
    /// Returns one advisory per held action that has no decision-maker and
    /// no scale of its own.
    pub fn set_self_interest_scale(&mut self, scale: f64) -> Result<Vec<MissingDecisionMaker>> {
        let scale = SelfInterestScale::new(scale)?;

        let missing: Vec<MissingDecisionMaker> = self
            .acts
            .iter()
            .filter(|(_, act)| lacks_decision_maker(act))
            .map(|(name, _)| MissingDecisionMaker { act: name.clone() })
            .collect();
        for m in &missing {
            tracing::warn!(act = %m.act, "act has no decision maker");
        }

        self.self_interest_scale = Some(scale);
        Ok(missing)
    }

    pub fn clear_self_interest_scale(&mut self) {
        self.self_interest_scale = None;
    }

    /// The action's own scale if it has one, otherwise the selector's.
    pub fn effective_scale(&self, act: &Action) -> Option<SelfInterestScale> {
        act.self_interest_scale().or(self.self_interest_scale)
    }

    /// Every action's figures, in insertion order.
    pub fn evaluations(&self) -> Vec<Evaluation> {
        self.acts
            .iter()
            .map(|(name, act)| {
                let scale = self.effective_scale(act);
                Evaluation {
                    act: name.clone(),
                    value: act.total_value_with(scale),
                    negative_value: act.negative_value_with(scale),
                    scale: scale.map(SelfInterestScale::value),
                }
            })
            .collect()
    }

    /// Best action under `rule`, choosing uniformly among exact ties.
    pub fn best(&self, rule: DecisionRule) -> Result<Ranking<'_>> {
        let tied = self.tied_indices(rule)?;
        let mut rng = SmallRng::seed_from_u64(self.tie_salt);
        let index = tied[rng.random_range(0..tied.len())];

        let (name, action) = &self.acts[index];
        let scale = self.effective_scale(action);
        let ranking = Ranking {
            name,
            action,
            rule,
            value: action.total_value_with(scale),
            negative_value: action.negative_value_with(scale),
            scale,
        };
        tracing::debug!(
            rule = %rule,
            act = ranking.name,
            score = ranking.score(),
            ties = tied.len(),
            "selected act"
        );
        Ok(ranking)
    }

    pub fn best_by_value(&self) -> Result<Ranking<'_>> {
        self.best(DecisionRule::Utilitarian)
    }

    pub fn best_by_least_harm(&self) -> Result<Ranking<'_>> {
        self.best(DecisionRule::NegativeUtilitarian)
    }

    /// Names of every action whose score exactly equals the best score, in
    /// insertion order.
    pub fn tied_best(&self, rule: DecisionRule) -> Result<Vec<&str>> {
        Ok(self
            .tied_indices(rule)?
            .into_iter()
            .map(|i| self.acts[i].0.as_str())
            .collect())
    }

    pub fn tied_best_by_value(&self) -> Result<Vec<&str>> {
        self.tied_best(DecisionRule::Utilitarian)
    }

    pub fn tied_best_by_least_harm(&self) -> Result<Vec<&str>> {
        self.tied_best(DecisionRule::NegativeUtilitarian)
    }

    fn tied_indices(&self, rule: DecisionRule) -> Result<Vec<usize>> {
        if self.acts.is_empty() {
            return Err(EvalError::NoActions);
        }
        let scores: Vec<f64> = self
            .acts
            .iter()
            .map(|(_, act)| rule.score(act, self.effective_scale(act)))
            .collect();
        let best = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        let tied: Vec<usize> = (0..scores.len()).filter(|&i| scores[i] == best).collect();
        if tied.is_empty() {
            // Every score is NaN.
            return Ok((0..scores.len()).collect());
        }
        Ok(tied)
    }
}

/// True when the selector-wide scale would apply to `act` but has no
/// decision-maker to weight.
fn lacks_decision_maker(act: &Action) -> bool {
    act.self_interest_scale().is_none() && !act.has_decision_maker()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Consequence, Role};
    use std::collections::HashSet;

    /// An action worth exactly `value`, with the decision-maker carrying it.
    fn act_worth(value: f64) -> Action {
        let mut act = Action::new();
        act.create_actor(Consequence::pleasure(value, 1.0, 1.0, 0.0, 1.0), Role::DecisionMaker);
        act
    }

    fn ten_twenty_five_twenty_five(seed: u64) -> ActionSelector {
        let mut selector = ActionSelector::with_seed(seed);
        selector.add_act("low", act_worth(10.0));
        selector.add_act("high a", act_worth(25.0));
        selector.add_act("high b", act_worth(25.0));
        selector
    }

    #[test]
    fn best_is_one_of_the_tied_maxima() {
        let selector = ten_twenty_five_twenty_five(42);
        let best = selector.best_by_value().unwrap();
        assert!(best.name == "high a" || best.name == "high b", "got {}", best.name);
        assert_eq!(best.value, 25.0);
    }

    #[test]
    fn tied_list_has_exactly_the_maxima() {
        let selector = ten_twenty_five_twenty_five(7);
        assert_eq!(selector.tied_best_by_value().unwrap(), vec!["high a", "high b"]);
    }

    #[test]
    fn repeated_queries_agree() {
        let selector = ten_twenty_five_twenty_five(3);
        let first = selector.best_by_value().unwrap().name.to_string();
        for _ in 0..20 {
            assert_eq!(selector.best_by_value().unwrap().name, first);
        }
    }

    #[test]
    fn same_seed_same_winner() {
        let a = ten_twenty_five_twenty_five(99);
        let b = ten_twenty_five_twenty_five(99);
        assert_eq!(a.best_by_value().unwrap().name, b.best_by_value().unwrap().name);
    }

    #[test]
    fn ties_reach_every_candidate() {
        let mut winners = HashSet::new();
        for seed in 0..64 {
            let selector = ten_twenty_five_twenty_five(seed);
            winners.insert(selector.best_by_value().unwrap().name.to_string());
        }
        assert_eq!(winners.len(), 2, "winners: {winners:?}");
        assert!(!winners.contains("low"));
    }

    #[test]
    fn empty_selector_is_an_error() {
        let selector = ActionSelector::with_seed(1);
        assert!(matches!(selector.best_by_value(), Err(EvalError::NoActions)));
        assert!(matches!(selector.tied_best_by_least_harm(), Err(EvalError::NoActions)));
    }

    #[test]
    fn scale_bounds() {
        let mut selector = ActionSelector::with_seed(1);
        assert!(matches!(
            selector.set_self_interest_scale(-0.1),
            Err(EvalError::ScaleOutOfRange(_))
        ));
        assert!(matches!(
            selector.set_self_interest_scale(1.1),
            Err(EvalError::ScaleOutOfRange(_))
        ));
        assert!(selector.self_interest_scale().is_none());
        assert!(selector.set_self_interest_scale(0.0).is_ok());
        assert!(selector.set_self_interest_scale(1.0).is_ok());
        assert_eq!(selector.self_interest_scale(), Some(SelfInterestScale::EGOISTIC));
    }

    #[test]
    fn warns_once_per_act_without_decision_maker() {
        let mut selector = ActionSelector::with_seed(1);
        let mut anonymous = Action::new();
        anonymous.create_actor(Consequence::pleasure(1.0, 1.0, 1.0, 0.0, 1.0), Role::Other);
        selector.add_act("anonymous", anonymous);
        selector.add_act("owned", act_worth(1.0));

        let missing = selector.set_self_interest_scale(0.5).unwrap();
        assert_eq!(missing, vec![MissingDecisionMaker { act: "anonymous".into() }]);
    }

    #[test]
    fn rejected_scale_leaves_selector_unscaled() {
        let mut selector = ActionSelector::with_seed(1);
        selector.add_act("anonymous", Action::new());
        selector.set_self_interest_scale(0.5).unwrap();
        assert!(selector.set_self_interest_scale(2.0).is_err());
        assert_eq!(selector.self_interest_scale().map(|s| s.value()), Some(0.5));
    }

    #[test]
    fn scale_applies_to_acts_added_later() {
        let mut selector = ActionSelector::with_seed(5);
        selector.set_self_interest_scale(0.0).unwrap();

        // Selfish gain vs. gain for others: altruism prefers the latter.
        let mut selfish = Action::new();
        selfish.create_actor(Consequence::pleasure(100.0, 1.0, 1.0, 0.0, 1.0), Role::DecisionMaker);
        let mut generous = Action::new();
        generous.create_actor(Consequence::pleasure(1.0, 1.0, 1.0, 0.0, 1.0), Role::Other);
        selector.add_act("selfish", selfish);
        selector.add_act("generous", generous);

        let best = selector.best_by_value().unwrap();
        assert_eq!(best.name, "generous");
        assert_eq!(best.scale, Some(SelfInterestScale::ALTRUISTIC));
    }

    #[test]
    fn own_scale_wins_over_selector_scale() {
        let mut selector = ActionSelector::with_seed(5);
        let mut act = Action::with_self_interest(SelfInterestScale::EGOISTIC);
        act.create_actor(Consequence::pleasure(4.0, 1.0, 1.0, 0.0, 1.0), Role::DecisionMaker);
        selector.add_act("mine", act);
        selector.set_self_interest_scale(0.0).unwrap();

        let rows = selector.evaluations();
        assert_eq!(rows[0].value, 4.0);
        assert_eq!(rows[0].scale, Some(1.0));
    }

    #[test]
    fn least_harm_prefers_smaller_pain() {
        let mut selector = ActionSelector::with_seed(11);
        let mut big = Action::new();
        big.create_actor(Consequence::pleasure(100.0, 1.0, 1.0, 0.0, 1.0), Role::Other)
            .create_actor(Consequence::pain(10.0, 1.0, 1.0, 0.0, 1.0), Role::Other);
        let mut small = Action::new();
        small
            .create_actor(Consequence::pleasure(1.0, 1.0, 1.0, 0.0, 1.0), Role::Other)
            .create_actor(Consequence::pain(1.0, 1.0, 1.0, 0.0, 1.0), Role::Other);
        selector.add_act("big", big);
        selector.add_act("small", small);

        assert_eq!(selector.best_by_value().unwrap().name, "big");
        let harm = selector.best_by_least_harm().unwrap();
        assert_eq!(harm.name, "small");
        assert_eq!(harm.score(), -1.0);
        assert_eq!(harm.value, 0.0);
        assert_eq!(selector.tied_best_by_least_harm().unwrap(), vec!["small"]);
    }

    #[test]
    fn decision_rule_names() {
        assert_eq!(DecisionRule::Utilitarian.as_str(), "utilitarian");
        assert_eq!(
            DecisionRule::try_from("negative_utilitarian".to_string()).unwrap(),
            DecisionRule::NegativeUtilitarian
        );
    }

    #[test]
    fn decision_rule_round_trips_through_string() {
        for rule in [DecisionRule::Utilitarian, DecisionRule::NegativeUtilitarian] {
            let s: String = rule.into();
            assert_eq!(DecisionRule::try_from(s).unwrap(), rule);
        }
        assert!(DecisionRule::try_from(String::new()).is_err());
        assert!(DecisionRule::try_from("greedy".to_string()).is_err());
        assert_eq!(
            serde_json::from_str::<DecisionRule>("\"utilitarian\"").unwrap(),
            DecisionRule::Utilitarian
        );
    }

    #[test]
    fn held_act_scale_can_be_changed_and_cleared() {
        let mut selector = ActionSelector::with_seed(5);
        let mut selfish = Action::with_self_interest(SelfInterestScale::EGOISTIC);
        selfish.create_actor(Consequence::pleasure(100.0, 1.0, 1.0, 0.0, 1.0), Role::DecisionMaker);
        let mut generous = Action::new();
        generous.create_actor(Consequence::pleasure(1.0, 1.0, 1.0, 0.0, 1.0), Role::Other);
        selector.add_act("selfish", selfish);
        selector.add_act("generous", generous);
        selector.set_self_interest_scale(0.0).unwrap();

        // Own egoistic scale keeps the selfish act ahead.
        assert_eq!(selector.best_by_value().unwrap().name, "selfish");

        selector.get_mut("selfish").unwrap().set_self_interest_scale(None);
        let best = selector.best_by_value().unwrap();
        assert_eq!(best.name, "generous");
        assert_eq!(best.scale, Some(SelfInterestScale::ALTRUISTIC));

        selector
            .get_mut("selfish")
            .unwrap()
            .set_self_interest_scale(Some(SelfInterestScale::EGOISTIC));
        assert_eq!(selector.best_by_value().unwrap().name, "selfish");
        assert!(selector.get_mut("missing").is_none());
    }

    #[test]
    fn own_scale_suppresses_missing_decision_maker_advisory() {
        let mut selector = ActionSelector::with_seed(1);
        let mut own = Action::with_self_interest(SelfInterestScale::EGOISTIC);
        own.create_actor(Consequence::pleasure(1.0, 1.0, 1.0, 0.0, 1.0), Role::Other);
        let mut anonymous = Action::new();
        anonymous.create_actor(Consequence::pleasure(1.0, 1.0, 1.0, 0.0, 1.0), Role::Other);
        selector.add_act("own", own);
        selector.add_act("anonymous", anonymous);

        let missing = selector.set_self_interest_scale(0.5).unwrap();
        assert_eq!(missing, vec![MissingDecisionMaker { act: "anonymous".into() }]);
    }

    #[test]
    fn config_seeds_and_scales() {
        let config = SelectorConfig {
            seed: Some(9),
            self_interest: Some(0.5),
        };
        let selector = ActionSelector::from_config(&config).unwrap();
        assert_eq!(selector.self_interest_scale().map(|s| s.value()), Some(0.5));

        let bad = SelectorConfig {
            seed: Some(9),
            self_interest: Some(3.0),
        };
        assert!(ActionSelector::from_config(&bad).is_err());
    }
}
