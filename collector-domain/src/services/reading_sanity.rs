// Reading sanity checks
// Turns raw vendor floats into integral point fields, rejecting samples
// that cannot be real sensor output

use crate::entities::{Device, RawDeviceState, SensorReading};
use crate::value_objects::{fahrenheit_to_celsius, TemperatureUnit};

// Vendor sensors report Fahrenheit in roughly this envelope; anything
// outside is a transport glitch, not weather.
pub const MIN_TEMPERATURE_F: f64 = -40.0;
pub const MAX_TEMPERATURE_F: f64 = 140.0;

pub const MIN_HUMIDITY: f64 = 0.0;
pub const MAX_HUMIDITY: f64 = 100.0;

/// Normalize one raw sample into a writable reading.
///
/// Returns `None` when either field is missing or implausible; rejected
/// samples are dropped, never clamped.
pub fn normalize_sample(
    device: &Device,
    state: &RawDeviceState,
    unit: TemperatureUnit,
    captured_at: i64,
) -> Option<SensorReading> {
    let temperature_f = state.temperature?;
    let humidity = state.humidity?;

    if !temperature_f.is_finite() || !humidity.is_finite() {
        return None;
    }
    if !(MIN_TEMPERATURE_F..=MAX_TEMPERATURE_F).contains(&temperature_f) {
        return None;
    }
    if !(MIN_HUMIDITY..=MAX_HUMIDITY).contains(&humidity) {
        return None;
    }

    let temperature = match unit {
        TemperatureUnit::Fahrenheit => temperature_f,
        TemperatureUnit::Celsius => fahrenheit_to_celsius(temperature_f),
    };

    Some(SensorReading {
        device_id: device.device_id.clone(),
        device_name: device.display_name().to_string(),
        temperature: temperature.round() as i64,
        humidity: humidity.round() as i64,
        captured_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::{DeviceId, Sku};

    fn device() -> Device {
        Device {
            sku: Sku("H5100".to_string()),
            device_id: DeviceId("12:34:56:78".to_string()),
            name: "Basement".to_string(),
        }
    }

    fn state(temperature: f64, humidity: f64) -> RawDeviceState {
        RawDeviceState {
            temperature: Some(temperature),
            humidity: Some(humidity),
        }
    }

    #[test]
    fn rounds_fields_to_integers() {
        let reading = normalize_sample(
            &device(),
            &state(63.14, 48.6),
            TemperatureUnit::Fahrenheit,
            1_711_987_690_000,
        )
        .expect("valid sample");
        assert_eq!(63, reading.temperature);
        assert_eq!(49, reading.humidity);
        assert_eq!(1_711_987_690_000, reading.captured_at);
        assert_eq!("Basement", reading.device_name);
    }

    #[test]
    fn converts_to_celsius_when_configured() {
        let reading = normalize_sample(
            &device(),
            &state(68.0, 50.0),
            TemperatureUnit::Celsius,
            0,
        )
        .expect("valid sample");
        assert_eq!(20, reading.temperature);
    }

    #[test]
    fn drops_samples_with_missing_fields() {
        let missing = RawDeviceState {
            temperature: Some(63.0),
            humidity: None,
        };
        assert!(normalize_sample(&device(), &missing, TemperatureUnit::Fahrenheit, 0).is_none());
    }

    #[test]
    fn drops_implausible_samples_instead_of_clamping() {
        assert!(
            normalize_sample(&device(), &state(900.0, 50.0), TemperatureUnit::Fahrenheit, 0)
                .is_none()
        );
        assert!(
            normalize_sample(&device(), &state(63.0, 120.0), TemperatureUnit::Fahrenheit, 0)
                .is_none()
        );
        assert!(
            normalize_sample(&device(), &state(f64::NAN, 50.0), TemperatureUnit::Fahrenheit, 0)
                .is_none()
        );
    }

    #[test]
    fn range_check_applies_before_unit_conversion() {
        // -40F == -40C, the envelope edge is valid in either unit
        let reading =
            normalize_sample(&device(), &state(-40.0, 0.0), TemperatureUnit::Celsius, 0)
                .expect("edge sample");
        assert_eq!(-40, reading.temperature);
    }
}
