//! Hedonic input records: one first-order pleasure or pain plus its optional
//! same-polarity and opposite-polarity follow-on consequences.

use serde::{Deserialize, Serialize};

/// Exponent of the temporal discount applied to every consequence.
const DECAY_EXPONENT: f64 = 0.1;

/// Temporal discount for a consequence `nearness` units away.
///
/// Decreases as nearness grows. A nearness of exactly zero discounts nothing.
pub fn decay(nearness: f64) -> f64 {
    if nearness == 0.0 {
        1.0
    } else {
        1.0 / nearness.powf(DECAY_EXPONENT)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Polarity {
    Pleasure,
    Pain,
}

string_enum!(Polarity, "polarity", {
    Pleasure => "pleasure",
    Pain => "pain",
});

impl Polarity {
    pub fn sign(self) -> f64 {
        match self {
            Polarity::Pleasure => 1.0,
            Polarity::Pain => -1.0,
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Polarity::Pleasure => Polarity::Pain,
            Polarity::Pain => Polarity::Pleasure,
        }
    }
}

/// Magnitude of a second-order consequence. The probability that it happens
/// lives on the parent [`Consequence`] (`fecundity` or `purity`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FollowOn {
    pub intensity: f64,
    pub duration: f64,
    pub nearness: f64,
    pub extent: f64,
}

impl FollowOn {
    pub fn new(intensity: f64, duration: f64, nearness: f64, extent: f64) -> Self {
        Self {
            intensity,
            duration,
            nearness,
            extent,
        }
    }

    /// `intensity * duration * discount * extent`, unsigned and unweighted.
    pub(crate) fn magnitude(&self, discount: f64) -> f64 {
        self.intensity * self.duration * discount * self.extent
    }
}

/// Everything known about how one action affects one party (or a group of
/// `extent` parties affected equally).
///
/// Values are not range-checked; negative or out-of-range inputs flow through
/// the arithmetic unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Consequence {
    pub polarity: Polarity,
    pub intensity: f64,
    pub duration: f64,
    pub certainty: f64,
    pub nearness: f64,
    pub extent: f64,
    /// Probability of a second-order consequence of the same polarity.
    #[serde(default)]
    pub fecundity: f64,
    /// Probability of a second-order consequence of the opposite polarity.
    #[serde(default)]
    pub purity: f64,
    #[serde(default)]
    pub same: FollowOn,
    #[serde(default)]
    pub opposite: FollowOn,
}

impl Consequence {
    pub fn new(
        polarity: Polarity,
        intensity: f64,
        duration: f64,
        certainty: f64,
        nearness: f64,
        extent: f64,
    ) -> Self {
        Self {
            polarity,
            intensity,
            duration,
            certainty,
            nearness,
            extent,
            fecundity: 0.0,
            purity: 0.0,
            same: FollowOn::default(),
            opposite: FollowOn::default(),
        }
    }

    pub fn pleasure(intensity: f64, duration: f64, certainty: f64, nearness: f64, extent: f64) -> Self {
        Self::new(Polarity::Pleasure, intensity, duration, certainty, nearness, extent)
    }

    pub fn pain(intensity: f64, duration: f64, certainty: f64, nearness: f64, extent: f64) -> Self {
        Self::new(Polarity::Pain, intensity, duration, certainty, nearness, extent)
    }

    /// Attach a same-polarity follow-on that occurs with probability `fecundity`.
    pub fn with_fecundity(mut self, fecundity: f64, follow_on: FollowOn) -> Self {
        self.fecundity = fecundity;
        self.same = follow_on;
        self
    }

    /// Attach an opposite-polarity follow-on that occurs with probability `purity`.
    pub fn with_purity(mut self, purity: f64, follow_on: FollowOn) -> Self {
        self.purity = purity;
        self.opposite = follow_on;
        self
    }

    pub fn is_pleasure(&self) -> bool {
        self.polarity == Polarity::Pleasure
    }

    /// Signed first-order term.
    pub fn first_order(&self) -> f64 {
        self.polarity.sign()
            * self.certainty
            * (self.intensity * self.duration * decay(self.nearness) * self.extent)
    }

    /// Discount shared by both second-order terms.
    ///
    /// A pleasure discounts its follow-ons by the same-polarity nearness and a
    /// pain by the opposite-polarity nearness, whichever follow-on is being
    /// valued.
    pub fn follow_on_decay(&self) -> f64 {
        match self.polarity {
            Polarity::Pleasure => decay(self.same.nearness),
            Polarity::Pain => decay(self.opposite.nearness),
        }
    }

    /// Every signed term this consequence contributes, first-order first.
    ///
    /// Follow-ons with a probability of exactly zero are omitted rather than
    /// contributing a zero term.
    pub fn terms(&self) -> Vec<f64> {
        let mut terms = Vec::with_capacity(3);
        terms.push(self.first_order());

        let discount = self.follow_on_decay();
        if self.fecundity != 0.0 {
            terms.push(self.polarity.sign() * self.fecundity * self.same.magnitude(discount));
        }
        if self.purity != 0.0 {
            terms.push(
                self.polarity.opposite().sign() * self.purity * self.opposite.magnitude(discount),
            );
        }
        terms
    }
}
