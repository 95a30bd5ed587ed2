use axum::http::HeaderMap;

use collector_domain::RuntimeConfig;

/// With no api_token configured the surface is open; with one configured,
/// every guarded route requires a matching bearer token.
pub fn authorize(config: &RuntimeConfig, headers: &HeaderMap) -> bool {
    if let Some(api_token) = &config.api_token {
        return extract_bearer(headers)
            .map(|value| value == *api_token)
            .unwrap_or(false);
    }
    true
}

fn extract_bearer(headers: &HeaderMap) -> Option<String> {
    let value = headers.get("Authorization")?.to_str().ok()?.trim();
    let prefix = "Bearer ";
    if !value.starts_with(prefix) {
        return None;
    }
    let token = value[prefix.len()..].trim();
    if token.is_empty() {
        return None;
    }
    Some(token.to_string())
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use collector_domain::value_objects::TemperatureUnit;

    use super::*;

    fn config(api_token: Option<&str>) -> RuntimeConfig {
        RuntimeConfig {
            bind_addr: "127.0.0.1:0".to_string(),
            api_token: api_token.map(ToString::to_string),
            govee_base_url: "http://vendor.invalid".to_string(),
            govee_api_key: "key".to_string(),
            measurement: "sensors".to_string(),
            temperature_unit: TemperatureUnit::Fahrenheit,
            poll_interval_seconds: 60,
            request_timeout_seconds: 15,
            recent_readings_capacity: 16,
        }
    }

    fn headers(value: Option<&str>) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if let Some(value) = value {
            headers.insert("Authorization", HeaderValue::from_str(value).unwrap());
        }
        headers
    }

    #[test]
    fn open_when_no_token_configured() {
        assert!(authorize(&config(None), &headers(None)));
    }

    #[test]
    fn requires_matching_bearer_when_configured() {
        let config = config(Some("secret"));
        assert!(authorize(&config, &headers(Some("Bearer secret"))));
        assert!(!authorize(&config, &headers(Some("Bearer wrong"))));
        assert!(!authorize(&config, &headers(Some("secret"))));
        assert!(!authorize(&config, &headers(None)));
    }
}
