use serde::{Deserialize, Serialize};
use thiserror::Error;

const ENERGY_WEIGHT: f64 = 0.0025;
const FAT_WEIGHT: f64 = 0.2;
const SUGAR_WEIGHT: f64 = 0.3;
const SALT_WEIGHT: f64 = 1.5;
const PROTEIN_WEIGHT: f64 = 0.2;

/// Sugar above this many grams per 100g is penalised harder.
const HIGH_SUGAR_GRAMS: f64 = 10.0;
const HIGH_SUGAR_MULTIPLIER: f64 = 1.5;
/// Flat penalty for items with no protein at all.
const NO_PROTEIN_PENALTY: f64 = 0.3;

pub const MIN_SCORE: u8 = 1;
pub const MAX_SCORE: u8 = 5;

#[derive(Debug, Error, PartialEq)]
pub enum NutritionError {
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("{field} must be a number, got {value:?}")]
    NotANumber { field: &'static str, value: String },
    #[error("{0} must be a non-negative number")]
    Negative(&'static str),
}

/// Nutrition facts per 100g. Every field is finite and non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NutritionFacts {
    energy: f64,
    fats: f64,
    protein: f64,
    salt: f64,
    sugar: f64,
}

impl NutritionFacts {
    pub fn new(
        energy: f64,
        fats: f64,
        protein: f64,
        salt: f64,
        sugar: f64,
    ) -> Result<Self, NutritionError> {
        Ok(Self {
            energy: checked("energy", energy)?,
            fats: checked("fats", fats)?,
            protein: checked("protein", protein)?,
            salt: checked("salt", salt)?,
            sugar: checked("sugar", sugar)?,
        })
    }

    /// Parses form-submitted values. `lookup` returns the raw text for a field name.
    pub fn parse_fields<'a, F>(lookup: F) -> Result<Self, NutritionError>
    where
        F: Fn(&'static str) -> Option<&'a str>,
    {
        let parse = |field: &'static str| -> Result<f64, NutritionError> {
            let raw = lookup(field)
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .ok_or(NutritionError::Missing(field))?;
            raw.parse::<f64>().map_err(|_| NutritionError::NotANumber {
                field,
                value: raw.to_string(),
            })
        };
        Self::new(
            parse("energy")?,
            parse("fats")?,
            parse("protein")?,
            parse("salt")?,
            parse("sugar")?,
        )
    }

    pub fn energy(&self) -> f64 {
        self.energy
    }
    pub fn fats(&self) -> f64 {
        self.fats
    }
    pub fn protein(&self) -> f64 {
        self.protein
    }
    pub fn salt(&self) -> f64 {
        self.salt
    }
    pub fn sugar(&self) -> f64 {
        self.sugar
    }
}

fn checked(field: &'static str, value: f64) -> Result<f64, NutritionError> {
    if !value.is_finite() {
        return Err(NutritionError::NotANumber {
            field,
            value: value.to_string(),
        });
    }
    if value < 0.0 {
        return Err(NutritionError::Negative(field));
    }
    Ok(value)
}

/// Healthiness rating in `[1, 5]`, 5 being the healthiest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct HealthScore(u8);

impl HealthScore {
    pub fn get(self) -> u8 {
        self.0
    }
}

impl From<HealthScore> for i32 {
    fn from(s: HealthScore) -> Self {
        s.0 as i32
    }
}

/// Weighted "badness" of a food item; higher is worse.
pub fn badness(facts: &NutritionFacts) -> f64 {
    let sugar_penalty = if facts.sugar > HIGH_SUGAR_GRAMS {
        facts.sugar * SUGAR_WEIGHT * HIGH_SUGAR_MULTIPLIER
    } else {
        facts.sugar * SUGAR_WEIGHT
    };

    let mut raw = facts.energy * ENERGY_WEIGHT
        + facts.fats * FAT_WEIGHT
        + sugar_penalty
        + facts.salt * SALT_WEIGHT
        - facts.protein * PROTEIN_WEIGHT;

    if facts.protein == 0.0 {
        raw += NO_PROTEIN_PENALTY;
    }
    raw
}

pub fn compute_health_score(facts: &NutritionFacts) -> HealthScore {
    // round half up, then clamp
    let rounded = (5.0 - badness(facts) + 0.5).floor();
    if rounded.is_nan() {
        return HealthScore(MIN_SCORE);
    }
    HealthScore(rounded.clamp(MIN_SCORE as f64, MAX_SCORE as f64) as u8)
}
