use serde::{Deserialize, Serialize};

use super::error::BmiError;
use super::gauge;
use super::units::{Measurement, UnitSystem};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Underweight")]
    Underweight,
    #[serde(rename = "Normal weight")]
    NormalWeight,
    #[serde(rename = "Overweight")]
    Overweight,
    #[serde(rename = "Obese")]
    Obese,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Underweight,
        Category::NormalWeight,
        Category::Overweight,
        Category::Obese,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Underweight => "Underweight",
            Category::NormalWeight => "Normal weight",
            Category::Overweight => "Overweight",
            Category::Obese => "Obese",
        }
    }

    /// Shorter label printed under the gauge bar.
    pub fn gauge_label(self) -> &'static str {
        match self {
            Category::NormalWeight => "Normal",
            other => other.label(),
        }
    }

    pub fn color_class(self) -> &'static str {
        match self {
            Category::Underweight => "bmi-blue",
            Category::NormalWeight => "bmi-green",
            Category::Overweight => "bmi-yellow",
            Category::Obese => "bmi-red",
        }
    }

    /// BMI range as shown in the information table.
    pub fn range_text(self) -> &'static str {
        match self {
            Category::Underweight => "less than 18.5",
            Category::NormalWeight => "18.5 to 24.9",
            Category::Overweight => "25 to 29.9",
            Category::Obese => "30 or greater",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BmiResult {
    pub bmi: f64,
    pub category: Category,
}

impl BmiResult {
    /// BMI value as displayed, always with one decimal.
    pub fn display_value(&self) -> String {
        format!("{:.1}", self.bmi)
    }
}

/// Exactly one of these holds after every recomputation.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum BmiState {
    #[default]
    Idle,
    Error(String),
    Result(BmiResult),
}

impl BmiState {
    pub fn result(&self) -> Option<&BmiResult> {
        match self {
            BmiState::Result(result) => Some(result),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            BmiState::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, BmiState::Idle)
    }

    /// Gauge fill fraction, `0.0` when there is no result.
    pub fn gauge_position(&self) -> f64 {
        self.result()
            .map(|r| gauge::gauge_position(r.bmi))
            .unwrap_or(0.0)
    }
}

pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Lower bound inclusive, upper bound exclusive.
pub fn classify(bmi: f64) -> Category {
    if bmi < 18.5 {
        Category::Underweight
    } else if bmi < 25.0 {
        Category::NormalWeight
    } else if bmi < 30.0 {
        Category::Overweight
    } else {
        Category::Obese
    }
}

/// Computes the rounded BMI for already parsed inputs in display units.
pub fn calculate_bmi(unit: UnitSystem, height: f64, weight: f64) -> Result<f64, BmiError> {
    let height = unit.canonical_height(height);
    let weight = unit.canonical_weight(weight);

    // NaN fails every comparison, so it has to be rejected explicitly.
    if height.is_nan() || weight.is_nan() || height <= 0.0 || weight <= 0.0 {
        return Err(BmiError::InvalidMeasurement);
    }

    let bmi = round_to_tenth(weight / (height * height) * unit.bmi_factor());
    if !bmi.is_finite() {
        return Err(BmiError::Computation);
    }
    Ok(bmi)
}

fn compute(unit: UnitSystem, height: &Measurement, weight: &Measurement) -> Result<BmiResult, BmiError> {
    let bmi = calculate_bmi(unit, height.parsed(), weight.parsed())?;
    Ok(BmiResult {
        bmi,
        category: classify(bmi),
    })
}

/// Runs the whole pipeline on raw input.
pub fn evaluate(unit: UnitSystem, height: &Measurement, weight: &Measurement) -> BmiState {
    if height.is_empty() || weight.is_empty() {
        return BmiState::Idle;
    }

    match compute(unit, height, weight) {
        Ok(result) => BmiState::Result(result),
        Err(e) => BmiState::Error(e.to_string()),
    }
}

/// State behind the calculator widget. Every setter recomputes before it
/// returns, so the state read afterwards always matches the inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct BmiCalculator {
    unit: UnitSystem,
    height: Measurement,
    weight: Measurement,
    state: BmiState,
}

impl Default for BmiCalculator {
    fn default() -> Self {
        Self::new(UnitSystem::default())
    }
}

impl BmiCalculator {
    pub fn new(unit: UnitSystem) -> Self {
        Self {
            unit,
            height: Measurement::empty(unit.height_unit()),
            weight: Measurement::empty(unit.weight_unit()),
            state: BmiState::Idle,
        }
    }

    pub fn set_height(&mut self, value: impl Into<String>) {
        self.height.value = value.into();
        self.recompute();
    }

    pub fn set_weight(&mut self, value: impl Into<String>) {
        self.weight.value = value.into();
        self.recompute();
    }

    /// Switching systems always drops both inputs and whatever was computed
    /// from them, even when the system does not change.
    pub fn set_unit_system(&mut self, unit: UnitSystem) {
        self.unit = unit;
        self.height = Measurement::empty(unit.height_unit());
        self.weight = Measurement::empty(unit.weight_unit());
        self.recompute();
    }

    pub fn unit_system(&self) -> UnitSystem {
        self.unit
    }

    pub fn height(&self) -> &Measurement {
        &self.height
    }

    pub fn weight(&self) -> &Measurement {
        &self.weight
    }

    pub fn state(&self) -> &BmiState {
        &self.state
    }

    pub fn result(&self) -> Option<&BmiResult> {
        self.state.result()
    }

    pub fn error(&self) -> Option<&str> {
        self.state.error()
    }

    fn recompute(&mut self) {
        self.state = evaluate(self.unit, &self.height, &self.weight);

        log::debug!(
            "BMI recompute: unit={} height={:?} weight={:?} -> {:?}",
            self.unit,
            self.height.value,
            self.weight.value,
            self.state
        );
        if let BmiState::Error(message) = &self.state {
            log::warn!("BMI input rejected: {}", message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn calculator(unit: UnitSystem, height: &str, weight: &str) -> BmiCalculator {
        let mut calc = BmiCalculator::new(unit);
        calc.set_height(height);
        calc.set_weight(weight);
        calc
    }

    fn result_of(calc: &BmiCalculator) -> BmiResult {
        *calc.result().expect("expected a BMI result")
    }

    #[test]
    fn starts_idle_with_metric_labels() {
        let calc = BmiCalculator::default();
        assert_eq!(calc.unit_system(), UnitSystem::Metric);
        assert_eq!(calc.height(), &Measurement::empty("cm"));
        assert_eq!(calc.weight(), &Measurement::empty("kg"));
        assert!(calc.state().is_idle());
    }

    #[test]
    fn metric_scenarios() {
        let normal = result_of(&calculator(UnitSystem::Metric, "175", "70"));
        assert_eq!(normal.bmi, 22.9);
        assert_eq!(normal.category, Category::NormalWeight);
        assert_eq!(normal.category.label(), "Normal weight");

        let under = result_of(&calculator(UnitSystem::Metric, "160", "45"));
        assert_eq!(under.bmi, 17.6);
        assert_eq!(under.category, Category::Underweight);
    }

    #[test]
    fn imperial_scenario() {
        let result = result_of(&calculator(UnitSystem::Imperial, "5.9", "154"));
        assert_eq!(result.bmi, 21.6);
        assert_eq!(result.category, Category::NormalWeight);
    }

    #[test]
    fn metric_formula_matches_reference() {
        for (h, w) in [(150.0, 50.0), (180.0, 68.0), (192.5, 101.3), (120.0, 90.0)] {
            let calc = calculator(UnitSystem::Metric, &h.to_string(), &w.to_string());
            let expected = round_to_tenth(w / ((h / 100.0) * (h / 100.0)));
            assert_eq!(result_of(&calc).bmi, expected, "h={h} w={w}");
        }
    }

    #[test]
    fn imperial_formula_matches_reference() {
        for (h, w) in [(5.0, 110.0), (5.5, 150.0), (6.2, 210.0), (4.8, 300.0)] {
            let calc = calculator(UnitSystem::Imperial, &h.to_string(), &w.to_string());
            let inches = h * 12.0;
            let expected = round_to_tenth(w / (inches * inches) * 703.0);
            assert_eq!(result_of(&calc).bmi, expected, "h={h} w={w}");
        }
    }

    #[test]
    fn classification_boundaries() {
        assert_eq!(classify(18.4), Category::Underweight);
        assert_eq!(classify(18.5), Category::NormalWeight);
        assert_eq!(classify(24.9), Category::NormalWeight);
        assert_eq!(classify(25.0), Category::Overweight);
        assert_eq!(classify(29.9), Category::Overweight);
        assert_eq!(classify(30.0), Category::Obese);
        assert_eq!(classify(55.0), Category::Obese);
    }

    #[test]
    fn boundaries_through_the_pipeline() {
        // 100 cm makes the BMI equal to the weight.
        let cases = [
            ("18.5", Category::NormalWeight),
            ("24.9", Category::NormalWeight),
            ("25", Category::Overweight),
            ("29.9", Category::Overweight),
            ("30", Category::Obese),
        ];
        for (weight, category) in cases {
            let result = result_of(&calculator(UnitSystem::Metric, "100", weight));
            assert_eq!(result.category, category, "weight={weight}");
        }
    }

    #[test]
    fn rounds_half_up_on_tenths() {
        assert_eq!(round_to_tenth(22.25), 22.3);
        assert_eq!(round_to_tenth(22.24), 22.2);
        assert_eq!(round_to_tenth(17.578124999999996), 17.6);
    }

    #[test]
    fn missing_input_is_idle_not_error() {
        let calc = calculator(UnitSystem::Metric, "", "70");
        assert!(calc.state().is_idle());
        assert_eq!(calc.error(), None);

        let calc = calculator(UnitSystem::Metric, "175", "");
        assert!(calc.state().is_idle());

        let calc = calculator(UnitSystem::Imperial, "  ", "154");
        assert!(calc.state().is_idle());
    }

    #[test]
    fn non_positive_input_is_rejected() {
        let expected = BmiError::InvalidMeasurement.to_string();
        for (h, w) in [("0", "70"), ("175", "0"), ("-175", "70"), ("175", "-1")] {
            let calc = calculator(UnitSystem::Metric, h, w);
            assert_eq!(calc.error(), Some(expected.as_str()), "h={h} w={w}");
            assert!(calc.result().is_none());
        }

        let calc = calculator(UnitSystem::Imperial, "0", "154");
        assert_eq!(calc.error(), Some("Please enter valid height and weight values"));
    }

    #[test]
    fn non_numeric_input_is_rejected() {
        let calc = calculator(UnitSystem::Metric, "tall", "70");
        assert_eq!(calc.error(), Some("Please enter valid height and weight values"));
        assert!(calc.result().is_none());

        let calc = calculator(UnitSystem::Metric, "175", "NaN");
        assert_eq!(calc.error(), Some("Please enter valid height and weight values"));
    }

    #[test]
    fn overflow_surfaces_computation_error() {
        let calc = calculator(UnitSystem::Metric, "0.0000000001", "1e308");
        assert_eq!(calc.error(), Some("An error occurred while calculating BMI"));
        assert!(calc.result().is_none());
    }

    #[test]
    fn zero_bmi_is_still_a_result() {
        let result = result_of(&calculator(UnitSystem::Metric, "175", "0.0001"));
        assert_eq!(result.bmi, 0.0);
        assert_eq!(result.category, Category::Underweight);
        assert_eq!(result.display_value(), "0.0");
    }

    #[test]
    fn error_clears_once_input_is_fixed() {
        let mut calc = calculator(UnitSystem::Metric, "0", "70");
        assert!(calc.error().is_some());

        calc.set_height("175");
        assert_eq!(calc.error(), None);
        assert_eq!(result_of(&calc).bmi, 22.9);

        calc.set_weight("");
        assert!(calc.state().is_idle());
    }

    #[test]
    fn switching_units_resets_everything() {
        let mut calc = calculator(UnitSystem::Metric, "175", "70");
        assert!(calc.result().is_some());

        calc.set_unit_system(UnitSystem::Imperial);
        assert_eq!(calc.unit_system(), UnitSystem::Imperial);
        assert_eq!(calc.height(), &Measurement::empty("ft"));
        assert_eq!(calc.weight(), &Measurement::empty("lb"));
        assert!(calc.state().is_idle());

        let mut calc = calculator(UnitSystem::Imperial, "0", "154");
        assert!(calc.error().is_some());
        calc.set_unit_system(UnitSystem::Metric);
        assert_eq!(calc.height(), &Measurement::empty("cm"));
        assert_eq!(calc.weight(), &Measurement::empty("kg"));
        assert!(calc.state().is_idle());
    }

    #[test]
    fn reselecting_same_system_also_resets() {
        let mut calc = calculator(UnitSystem::Metric, "175", "70");
        calc.set_unit_system(UnitSystem::Metric);
        assert!(calc.height().is_empty());
        assert!(calc.state().is_idle());
    }

    #[test]
    fn gauge_follows_state() {
        assert_eq!(BmiState::Idle.gauge_position(), 0.0);
        assert_eq!(BmiState::Error("x".into()).gauge_position(), 0.0);

        let calc = calculator(UnitSystem::Metric, "100", "25");
        assert_eq!(calc.state().gauge_position(), 0.5);
    }

    #[test]
    fn result_serializes_as_plain_values() {
        let result = result_of(&calculator(UnitSystem::Metric, "175", "70"));
        let json = serde_json::to_value(result).unwrap();
        assert_eq!(json, serde_json::json!({ "bmi": 22.9, "category": "Normal weight" }));
    }

    #[test]
    fn category_presentation() {
        assert_eq!(Category::NormalWeight.gauge_label(), "Normal");
        assert_eq!(Category::Obese.gauge_label(), "Obese");
        assert_eq!(Category::Underweight.color_class(), "bmi-blue");
        assert_eq!(Category::ALL.len(), 4);
    }
}
