//! Dilemma descriptions: a serializable list of candidate actions and the
//! parties each one affects, convertible into a ready-to-query
//! [`ActionSelector`].

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{EvalError, Result};
use crate::model::{Action, Consequence, Role, SelfInterestScale};
use crate::selector::{ActionSelector, SelectorConfig};

/// One affected party (or group of `extent` parties) inside an [`ActSpec`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartySpec {
    /// Free-form description, e.g. "the seniors". Not used in evaluation.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub label: String,
    #[serde(default)]
    pub role: Role,
    #[serde(flatten)]
    pub consequence: Consequence,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActSpec {
    pub name: String,
    /// Scale for this act alone; overrides the selector-wide scale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub self_interest: Option<f64>,
    pub parties: Vec<PartySpec>,
}

impl ActSpec {
    pub fn to_action(&self) -> Result<Action> {
        let mut act = match self.self_interest {
            Some(s) => Action::with_self_interest(SelfInterestScale::new(s)?),
            None => Action::new(),
        };
        for party in &self.parties {
            act.create_actor(party.consequence.clone(), party.role);
        }
        Ok(act)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dilemma {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default)]
    pub config: SelectorConfig,
    pub acts: Vec<ActSpec>,
}

impl Dilemma {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Build a selector holding every act. The selector-wide scale from
    /// `config` is applied after the acts are added, so missing
    /// decision-makers are reported the same way as a later
    /// `set_self_interest_scale` call would report them.
    pub fn to_selector(&self) -> Result<ActionSelector> {
        let mut seen = HashSet::new();
        for act in &self.acts {
            if !seen.insert(act.name.as_str()) {
                return Err(EvalError::Scenario(format!("duplicate act name: {}", act.name)));
            }
        }

        let mut selector = ActionSelector::from_config(&SelectorConfig {
            seed: self.config.seed,
            self_interest: None,
        })?;
        for act in &self.acts {
            selector.add_act(act.name.clone(), act.to_action()?);
        }
        if let Some(scale) = self.config.self_interest {
            selector.set_self_interest_scale(scale)?;
        }
        Ok(selector)
    }
}
