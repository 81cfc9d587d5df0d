//! Candidate actions and the parties they affect.
//!
//! An `Action` sums its parties' hedonic values, optionally reweighting the
//! decision-maker's own welfare against everyone else's.

use serde::{Deserialize, Serialize};

use super::consequence::Consequence;
use super::party::PartyEffect;
use super::scale::SelfInterestScale;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Role {
    /// The agent choosing between actions.
    DecisionMaker,
    #[default]
    Other,
}

string_enum!(Role, "role", {
    DecisionMaker => "decision_maker",
    Other => "other",
});

impl Role {
    /// Share of a party's value that counts under `scale`.
    pub fn weight(self, scale: Option<SelfInterestScale>) -> f64 {
        match (scale, self) {
            (None, _) => 1.0,
            (Some(s), Role::DecisionMaker) => s.decision_maker_weight(),
            (Some(s), Role::Other) => s.others_weight(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Party {
    pub effect: PartyEffect,
    pub role: Role,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Action {
    self_interest_scale: Option<SelfInterestScale>,
    parties: Vec<Party>,
}

impl Action {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_self_interest(scale: SelfInterestScale) -> Self {
        Self {
            self_interest_scale: Some(scale),
            parties: Vec::new(),
        }
    }

    /// Add a party affected by this action.
    pub fn create_actor(&mut self, consequence: Consequence, role: Role) -> &mut Self {
        self.add_party(PartyEffect::new(consequence), role)
    }

    pub fn add_party(&mut self, effect: PartyEffect, role: Role) -> &mut Self {
        self.parties.push(Party { effect, role });
        self
    }

    pub fn parties(&self) -> &[Party] {
        &self.parties
    }

    pub fn self_interest_scale(&self) -> Option<SelfInterestScale> {
        self.self_interest_scale
    }

    pub fn set_self_interest_scale(&mut self, scale: Option<SelfInterestScale>) {
        self.self_interest_scale = scale;
    }

    pub fn has_decision_maker(&self) -> bool {
        self.parties.iter().any(|p| p.role == Role::DecisionMaker)
    }

    /// Weighted sum of every party's value under this action's own scale.
    pub fn total_value(&self) -> f64 {
        self.total_value_with(self.self_interest_scale)
    }

    /// Weighted sum of every party's harmful terms under this action's own scale.
    pub fn negative_value(&self) -> f64 {
        self.negative_value_with(self.self_interest_scale)
    }

    /// Like [`total_value`](Self::total_value) but under an explicit scale.
    pub fn total_value_with(&self, scale: Option<SelfInterestScale>) -> f64 {
        self.weighted_sum(scale, PartyEffect::total_value)
    }

    pub fn negative_value_with(&self, scale: Option<SelfInterestScale>) -> f64 {
        self.weighted_sum(scale, PartyEffect::negative_value)
    }

    fn weighted_sum(&self, scale: Option<SelfInterestScale>, value: fn(&PartyEffect) -> f64) -> f64 {
        self.parties
            .iter()
            .map(|p| value(&p.effect) * p.role.weight(scale))
            // Start from +0.0: `f64::sum` starts from -0.0 and leaks it into exports.
            .fold(0.0, |acc, v| acc + v)
    }
}
