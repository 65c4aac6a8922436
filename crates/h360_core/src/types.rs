use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of inputs the classifier was trained on
pub const FEATURE_COUNT: usize = 6;

/// Column order expected by the classifier
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "age",
    "sex",
    "cholesterol",
    "blood_pressure",
    "max_heart_rate",
    "exercise_angina",
];

/// Scores strictly above this value are reported as high risk
pub const RISK_THRESHOLD: f32 = 0.5;

pub type FeatureVector = [f32; FEATURE_COUNT];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
pub enum Sex {
    #[value(name = "Male")]
    Male,
    #[value(name = "Female")]
    Female,
}

impl Sex {
    pub const ALL: [Sex; 2] = [Sex::Male, Sex::Female];

    pub fn as_flag(self) -> u8 {
        match self {
            Sex::Male => 1,
            Sex::Female => 0,
        }
    }

    pub fn from_flag(flag: u8) -> Option<Self> {
        match flag {
            1 => Some(Sex::Male),
            0 => Some(Sex::Female),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Sex::Male => "Male",
            Sex::Female => "Female",
        }
    }
}

impl FromStr for Sex {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Male" => Ok(Sex::Male),
            "Female" => Ok(Sex::Female),
            other => Err(format!("unknown sex option: {}", other)),
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
pub enum YesNo {
    #[value(name = "Yes")]
    Yes,
    #[value(name = "No")]
    No,
}

impl YesNo {
    pub const ALL: [YesNo; 2] = [YesNo::Yes, YesNo::No];

    pub fn as_flag(self) -> u8 {
        match self {
            YesNo::Yes => 1,
            YesNo::No => 0,
        }
    }

    pub fn from_flag(flag: u8) -> Option<Self> {
        match flag {
            1 => Some(YesNo::Yes),
            0 => Some(YesNo::No),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            YesNo::Yes => "Yes",
            YesNo::No => "No",
        }
    }
}

impl FromStr for YesNo {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Yes" => Ok(YesNo::Yes),
            "No" => Ok(YesNo::No),
            other => Err(format!("unknown yes/no option: {}", other)),
        }
    }
}

impl fmt::Display for YesNo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One form submission. Lives only for the duration of a single render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionRequest {
    pub age: u32,
    pub sex: Sex,
    pub cholesterol: u32,
    pub blood_pressure: u32,
    pub max_heart_rate: u32,
    pub exercise_angina: YesNo,
}

impl Default for PredictionRequest {
    fn default() -> Self {
        Self {
            age: 25,
            sex: Sex::Male,
            cholesterol: 200,
            blood_pressure: 120,
            max_heart_rate: 150,
            exercise_angina: YesNo::Yes,
        }
    }
}

impl PredictionRequest {
    /// Raw feature row in classifier column order
    pub fn to_features(&self) -> FeatureVector {
        [
            self.age as f32,
            self.sex.as_flag() as f32,
            self.cholesterol as f32,
            self.blood_pressure as f32,
            self.max_heart_rate as f32,
            self.exercise_angina.as_flag() as f32,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    High,
    Low,
}

impl RiskLevel {
    /// A score of exactly 0.5 is low risk.
    pub fn from_score(score: f32) -> Self {
        if score > RISK_THRESHOLD {
            RiskLevel::High
        } else {
            RiskLevel::Low
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RiskLevel::High => "high",
            RiskLevel::Low => "low",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RiskLevel::High => "High Risk",
            RiskLevel::Low => "Low Risk",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How raw inputs are normalized before the forward pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ScalingMode {
    /// Fit a standard scaler on the request row itself. Every column collapses
    /// to zero, so the model output is the same for all inputs.
    #[default]
    PerRequest,
    /// Apply the mean/scale persisted with the model at training time.
    Training,
}

impl ScalingMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ScalingMode::PerRequest => "per-request",
            ScalingMode::Training => "training",
        }
    }
}

impl fmt::Display for ScalingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionOutcome {
    pub score: f32,
    pub risk: RiskLevel,
    pub scaling: ScalingMode,
    pub evaluated_at: DateTime<Utc>,
}
