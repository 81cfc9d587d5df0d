#![allow(dead_code)]

use felicific::{Action, ActionSelector, Consequence, Dilemma, Role};

pub const LIFEBOAT_JSON: &str = include_str!("../../demos/lifeboat.json");

pub const FAMILIES: &str = "Help Families";
pub const SENIORS: &str = "Help Seniors";
pub const YOUNG: &str = "Help young people & maximize own survival";

pub fn lifeboat(seed: u64) -> ActionSelector {
    let mut dilemma = Dilemma::from_json(LIFEBOAT_JSON).unwrap();
    dilemma.config.seed = Some(seed);
    dilemma.to_selector().unwrap()
}

/// An action worth exactly `value`, carried entirely by the decision-maker.
pub fn act_worth(value: f64) -> Action {
    let mut act = Action::new();
    act.create_actor(
        Consequence::pleasure(value, 1.0, 1.0, 0.0, 1.0),
        Role::DecisionMaker,
    );
    act
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
