//! FrequencyModel - recency/heat scoring
//!
//! Every selection decays all scores and then bumps the selected record, so
//! records that stop being used drift back toward zero.

use serde::{Deserialize, Serialize};

use crate::domain::entities::Record;

/// Default bump applied to a selected record
pub const DEFAULT_INCREMENT: f64 = 5.0;
/// Default multiplicative decay applied on every selection
pub const DEFAULT_DECAY: f64 = 0.9;

/// Increment/decay parameters
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrequencyModel {
    pub increment: f64,
    pub decay: f64,
}

impl FrequencyModel {
    pub fn new(increment: f64, decay: f64) -> Self {
        Self { increment, decay }
    }

    /// `frequency += increment`
    pub fn increment(&self, record: &mut Record) {
        record.frequency += self.increment;
    }

    /// `frequency *= decay` for positive scores
    pub fn decay(&self, record: &mut Record) {
        if record.frequency > 0.0 {
            record.frequency *= self.decay;
        }
    }

    /// Decay every record, then increment the one titled `selected`.
    ///
    /// The selected record is decayed too, so its net change is
    /// `f * decay + increment`. Returns the selected record's new score, or
    /// `None` without touching anything if no record carries that title.
    pub fn normalize<'a, I>(&self, all: I, selected: &str) -> Option<f64>
    where
        I: IntoIterator<Item = &'a mut Record>,
    {
        let mut records: Vec<&'a mut Record> = all.into_iter().collect();
        if !records.iter().any(|r| r.title == selected) {
            return None;
        }

        let mut result = None;
        for record in records.iter_mut() {
            self.decay(record);
            if record.title == selected {
                self.increment(record);
                result = Some(record.frequency);
            }
        }
        result
    }
}

impl Default for FrequencyModel {
    fn default() -> Self {
        Self {
            increment: DEFAULT_INCREMENT,
            decay: DEFAULT_DECAY,
        }
    }
}
