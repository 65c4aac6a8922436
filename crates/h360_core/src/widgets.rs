//! Input widgets of the prediction form.
//!
//! Bounds and defaults are declared here once; the HTML form and the
//! submission handler both read them, so the adapter never sees a value
//! outside its declared range.

use crate::types::{PredictionRequest, Sex, YesNo};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericKind {
    NumberInput,
    Slider,
}

#[derive(Debug, Clone, Copy)]
pub struct NumericWidget {
    pub field: &'static str,
    pub label: &'static str,
    pub kind: NumericKind,
    pub min: u32,
    pub max: u32,
    pub default: u32,
}

impl NumericWidget {
    pub fn clamp(&self, value: u32) -> u32 {
        value.clamp(self.min, self.max)
    }
}

/// A categorical option shown in a select box
pub trait Choice: Copy + PartialEq + 'static {
    fn label(self) -> &'static str;
}

impl Choice for Sex {
    fn label(self) -> &'static str {
        Sex::label(self)
    }
}

impl Choice for YesNo {
    fn label(self) -> &'static str {
        YesNo::label(self)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ChoiceWidget<T: 'static> {
    pub field: &'static str,
    pub label: &'static str,
    pub options: &'static [T],
    pub default: T,
}

pub const AGE: NumericWidget = NumericWidget {
    field: "age",
    label: "Age",
    kind: NumericKind::NumberInput,
    min: 0,
    max: 100,
    default: 25,
};

pub const SEX: ChoiceWidget<Sex> = ChoiceWidget {
    field: "sex",
    label: "Sex",
    options: &Sex::ALL,
    default: Sex::Male,
};

pub const CHOLESTEROL: NumericWidget = NumericWidget {
    field: "cholesterol",
    label: "Cholesterol Level",
    kind: NumericKind::Slider,
    min: 100,
    max: 300,
    default: 200,
};

pub const BLOOD_PRESSURE: NumericWidget = NumericWidget {
    field: "blood_pressure",
    label: "Blood Pressure",
    kind: NumericKind::Slider,
    min: 50,
    max: 200,
    default: 120,
};

pub const MAX_HEART_RATE: NumericWidget = NumericWidget {
    field: "max_heart_rate",
    label: "Max Heart Rate",
    kind: NumericKind::Slider,
    min: 50,
    max: 220,
    default: 150,
};

pub const EXERCISE_ANGINA: ChoiceWidget<YesNo> = ChoiceWidget {
    field: "exercise_angina",
    label: "Exercise Induced Angina",
    options: &YesNo::ALL,
    default: YesNo::Yes,
};

/// Pin every numeric field to its widget bounds
pub fn clamp_request(request: PredictionRequest) -> PredictionRequest {
    PredictionRequest {
        age: AGE.clamp(request.age),
        cholesterol: CHOLESTEROL.clamp(request.cholesterol),
        blood_pressure: BLOOD_PRESSURE.clamp(request.blood_pressure),
        max_heart_rate: MAX_HEART_RATE.clamp(request.max_heart_rate),
        ..request
    }
}

/// Request built from widget defaults
pub fn default_request() -> PredictionRequest {
    PredictionRequest {
        age: AGE.default,
        sex: SEX.default,
        cholesterol: CHOLESTEROL.default,
        blood_pressure: BLOOD_PRESSURE.default,
        max_heart_rate: MAX_HEART_RATE.default,
        exercise_angina: EXERCISE_ANGINA.default,
    }
}
