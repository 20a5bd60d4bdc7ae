use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::BmiError;

/// Measurement convention used to interpret the raw height and weight input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    #[default]
    Metric,
    Imperial,
}

impl UnitSystem {
    pub const ALL: [UnitSystem; 2] = [UnitSystem::Metric, UnitSystem::Imperial];

    pub fn height_unit(self) -> &'static str {
        match self {
            UnitSystem::Metric => "cm",
            UnitSystem::Imperial => "ft",
        }
    }

    pub fn weight_unit(self) -> &'static str {
        match self {
            UnitSystem::Metric => "kg",
            UnitSystem::Imperial => "lb",
        }
    }

    /// Height in the unit the formula expects: meters or inches.
    pub fn canonical_height(self, height: f64) -> f64 {
        match self {
            UnitSystem::Metric => height / 100.0,
            UnitSystem::Imperial => height * 12.0,
        }
    }

    /// Weight in the unit the formula expects: kilograms or pounds.
    pub fn canonical_weight(self, weight: f64) -> f64 {
        weight
    }

    /// Multiplier applied to `weight / height²` in canonical units.
    pub fn bmi_factor(self) -> f64 {
        match self {
            UnitSystem::Metric => 1.0,
            UnitSystem::Imperial => 703.0,
        }
    }

    pub fn toggle_label(self) -> &'static str {
        match self {
            UnitSystem::Metric => "Metric (cm/kg)",
            UnitSystem::Imperial => "Imperial (ft/lb)",
        }
    }

    pub fn height_placeholder(self) -> &'static str {
        match self {
            UnitSystem::Metric => "175",
            UnitSystem::Imperial => "5.9",
        }
    }

    pub fn weight_placeholder(self) -> &'static str {
        match self {
            UnitSystem::Metric => "70",
            UnitSystem::Imperial => "154",
        }
    }

    pub fn height_step(self) -> &'static str {
        match self {
            UnitSystem::Metric => "1",
            UnitSystem::Imperial => "0.1",
        }
    }

    pub fn weight_step(self) -> &'static str {
        match self {
            UnitSystem::Metric => "0.1",
            UnitSystem::Imperial => "1",
        }
    }

    pub fn height_hint(self) -> &'static str {
        match self {
            UnitSystem::Metric => "Enter your height in centimeters",
            UnitSystem::Imperial => "Enter your height in feet (e.g., 5.9 for 5′9″)",
        }
    }

    pub fn weight_hint(self) -> &'static str {
        match self {
            UnitSystem::Metric => "Enter your weight in kilograms",
            UnitSystem::Imperial => "Enter your weight in pounds",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            UnitSystem::Metric => "metric",
            UnitSystem::Imperial => "imperial",
        }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UnitSystem {
    type Err = BmiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "metric" => Ok(UnitSystem::Metric),
            "imperial" => Ok(UnitSystem::Imperial),
            other => Err(BmiError::UnknownUnitSystem(other.to_string())),
        }
    }
}

/// Raw text typed by the user plus the unit label it is read in.
///
/// The unit always follows the active [`UnitSystem`]; callers cannot set it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Measurement {
    pub value: String,
    pub unit: &'static str,
}

impl Measurement {
    pub fn empty(unit: &'static str) -> Self {
        Self {
            value: String::new(),
            unit,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.value.trim().is_empty()
    }

    /// Parses the raw value. Anything that is not a finite number comes back
    /// as NaN so the range check rejects it. Parsing is strict: trailing
    /// garbage such as `"175abc"` is not read as `175`.
    pub fn parsed(&self) -> f64 {
        match self.value.trim().parse::<f64>() {
            Ok(v) if v.is_finite() => v,
            _ => f64::NAN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_follow_the_system() {
        assert_eq!(UnitSystem::Metric.height_unit(), "cm");
        assert_eq!(UnitSystem::Metric.weight_unit(), "kg");
        assert_eq!(UnitSystem::Imperial.height_unit(), "ft");
        assert_eq!(UnitSystem::Imperial.weight_unit(), "lb");
    }

    #[test]
    fn canonical_conversion() {
        assert!((UnitSystem::Metric.canonical_height(175.0) - 1.75).abs() < 1e-12);
        assert!((UnitSystem::Imperial.canonical_height(5.9) - 70.8).abs() < 1e-9);
        assert_eq!(UnitSystem::Imperial.canonical_weight(154.0), 154.0);
        assert_eq!(UnitSystem::Metric.canonical_weight(70.0), 70.0);
    }

    #[test]
    fn parses_from_query_value() {
        assert_eq!("imperial".parse::<UnitSystem>(), Ok(UnitSystem::Imperial));
        assert_eq!(" Metric ".parse::<UnitSystem>(), Ok(UnitSystem::Metric));
        assert_eq!(
            "stone".parse::<UnitSystem>(),
            Err(BmiError::UnknownUnitSystem("stone".to_string()))
        );
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(serde_json::to_string(&UnitSystem::Imperial).unwrap(), "\"imperial\"");
        let back: UnitSystem = serde_json::from_str("\"metric\"").unwrap();
        assert_eq!(back, UnitSystem::Metric);
    }

    #[test]
    fn measurement_parsing() {
        let mut m = Measurement::empty("cm");
        assert!(m.is_empty());

        m.value = "   ".to_string();
        assert!(m.is_empty());

        m.value = " 175 ".to_string();
        assert_eq!(m.parsed(), 175.0);

        m.value = "-3".to_string();
        assert_eq!(m.parsed(), -3.0);

        m.value = "abc".to_string();
        assert!(m.parsed().is_nan());

        m.value = "inf".to_string();
        assert!(m.parsed().is_nan());

        m.value = "175abc".to_string();
        assert!(m.parsed().is_nan());
    }
}
