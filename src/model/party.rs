use serde::Serialize;

use super::consequence::Consequence;

/// The hedonic effect of one action on one party.
///
/// Terms are computed once at construction and never change afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PartyEffect {
    consequence: Consequence,
    consequences: Vec<f64>,
}

impl PartyEffect {
    pub fn new(consequence: Consequence) -> Self {
        let consequences = consequence.terms();
        Self {
            consequence,
            consequences,
        }
    }

    pub fn consequence(&self) -> &Consequence {
        &self.consequence
    }

    /// Signed terms in the order they were derived: first-order, then the
    /// same-polarity follow-on, then the opposite-polarity follow-on (each
    /// only when its probability is non-zero).
    pub fn consequences(&self) -> &[f64] {
        &self.consequences
    }

    pub fn total_value(&self) -> f64 {
        self.consequences.iter().fold(0.0, |acc, v| acc + v)
    }

    /// Sum of the harmful terms only.
    pub fn negative_value(&self) -> f64 {
        self.consequences.iter().filter(|v| **v < 0.0).fold(0.0, |acc, v| acc + v)
    }
}

impl From<Consequence> for PartyEffect {
    fn from(consequence: Consequence) -> Self {
        Self::new(consequence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::consequence::FollowOn;

    #[test]
    fn caches_terms_at_construction() {
        let effect = PartyEffect::new(
            Consequence::pleasure(5.0, 3.0, 1.0, 1.0, 9.0)
                .with_fecundity(1.0, FollowOn::new(3.0, 8.0, 1.0, 9.0)),
        );
        assert_eq!(effect.consequences(), &[135.0, 216.0]);
        assert_eq!(effect.total_value(), 351.0);
    }

    #[test]
    fn negative_value_ignores_pleasures() {
        let effect = PartyEffect::new(
            Consequence::pain(10.0, 1.0, 0.5, 1.0, 1.0)
                .with_purity(0.5, FollowOn::new(1.5, 4.0, 1.0, 1.0)),
        );
        assert_eq!(effect.consequences(), &[-5.0, 3.0]);
        assert_eq!(effect.total_value(), -2.0);
        assert_eq!(effect.negative_value(), -5.0);
    }

    #[test]
    fn negative_value_of_pure_pleasure_is_zero() {
        let effect = PartyEffect::from(Consequence::pleasure(2.0, 2.0, 1.0, 1.0, 5.0));
        assert_eq!(effect.negative_value(), 0.0);
        assert!(effect.negative_value().is_sign_positive());
    }
}
