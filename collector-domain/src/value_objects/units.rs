// Temperature unit value object

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum TemperatureUnit {
    #[default]
    Fahrenheit,
    Celsius,
}

impl TemperatureUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            TemperatureUnit::Fahrenheit => "fahrenheit",
            TemperatureUnit::Celsius => "celsius",
        }
    }
}

impl From<&str> for TemperatureUnit {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "celsius" | "c" => TemperatureUnit::Celsius,
            _ => TemperatureUnit::Fahrenheit,
        }
    }
}

pub fn fahrenheit_to_celsius(fahrenheit: f64) -> f64 {
    (fahrenheit - 32.0) * 5.0 / 9.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_unit_names_case_insensitively() {
        assert_eq!(TemperatureUnit::Celsius, TemperatureUnit::from("Celsius"));
        assert_eq!(TemperatureUnit::Celsius, TemperatureUnit::from("c"));
        assert_eq!(TemperatureUnit::Fahrenheit, TemperatureUnit::from("f"));
        assert_eq!(TemperatureUnit::Fahrenheit, TemperatureUnit::from(""));
    }

    #[test]
    fn converts_known_temperatures() {
        assert_eq!(0.0, fahrenheit_to_celsius(32.0));
        assert_eq!(100.0, fahrenheit_to_celsius(212.0));
        assert_eq!(-40.0, fahrenheit_to_celsius(-40.0));
    }
}
