//! Upstream payload schema
//!
//! Mirrors the OpenWeather current-weather response. Only the fields the SDK
//! keeps are declared; everything else in the payload is ignored. A missing
//! required field fails deserialization, which the fetcher reports as
//! `FetchError::Malformed`.

use serde::Deserialize;

use crate::models::{Condition, SunTimes, Temperature, WeatherRecord, Wind};

#[derive(Debug, Deserialize)]
struct UpstreamCondition {
    main: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct UpstreamMain {
    temp: f64,
    feels_like: f64,
}

#[derive(Debug, Deserialize)]
struct UpstreamWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct UpstreamSys {
    sunrise: i64,
    sunset: i64,
}

/// Current-weather response body.
#[derive(Debug, Deserialize)]
pub struct UpstreamWeather {
    weather: Vec<UpstreamCondition>,
    main: UpstreamMain,
    #[serde(default)]
    visibility: Option<u32>,
    wind: UpstreamWind,
    dt: i64,
    sys: UpstreamSys,
    timezone: i32,
    name: String,
}

impl From<UpstreamWeather> for WeatherRecord {
    fn from(raw: UpstreamWeather) -> Self {
        let weather = raw
            .weather
            .into_iter()
            .next()
            .map(|c| Condition {
                main: c.main,
                description: c.description,
            })
            .unwrap_or_else(|| Condition {
                main: "Unknown".to_string(),
                description: "Unknown".to_string(),
            });

        WeatherRecord {
            weather,
            temperature: Temperature {
                temp: raw.main.temp,
                feels_like: raw.main.feels_like,
            },
            visibility: raw.visibility,
            wind: Wind {
                speed: raw.wind.speed,
            },
            datetime: raw.dt,
            sys: SunTimes {
                sunrise: raw.sys.sunrise,
                sunset: raw.sys.sunset,
            },
            timezone: raw.timezone,
            name: raw.name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LONDON: &str = r#"{
        "coord": {"lon": -0.13, "lat": 51.51},
        "weather": [{"id": 800, "main": "Clear", "description": "clear sky", "icon": "01d"}],
        "main": {"temp": 20.5, "feels_like": 19.0, "humidity": 65, "pressure": 1012},
        "visibility": 10000,
        "wind": {"speed": 5.1, "deg": 180},
        "dt": 1618317045,
        "sys": {"country": "GB", "sunrise": 1618301045, "sunset": 1618354200},
        "timezone": 3600,
        "name": "London",
        "cod": 200
    }"#;

    #[test]
    fn test_parse_ignores_unknown_fields() {
        let raw: UpstreamWeather = serde_json::from_str(LONDON).unwrap();
        let record = WeatherRecord::from(raw);

        assert_eq!(record.name, "London");
        assert_eq!(record.temperature.temp, 20.5);
        assert_eq!(record.weather.description, "clear sky");
        assert_eq!(record.visibility, Some(10_000));
        assert_eq!(record.datetime, 1_618_317_045);
    }

    #[test]
    fn test_missing_visibility_is_allowed() {
        let mut json: serde_json::Value = serde_json::from_str(LONDON).unwrap();
        json.as_object_mut().unwrap().remove("visibility");

        let raw: UpstreamWeather = serde_json::from_value(json).unwrap();
        assert_eq!(WeatherRecord::from(raw).visibility, None);
    }

    #[test]
    fn test_missing_required_field_fails() {
        let mut json: serde_json::Value = serde_json::from_str(LONDON).unwrap();
        json.as_object_mut().unwrap().remove("main");

        let result = serde_json::from_value::<UpstreamWeather>(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_condition_list_maps_to_unknown() {
        let mut json: serde_json::Value = serde_json::from_str(LONDON).unwrap();
        json["weather"] = serde_json::json!([]);

        let raw: UpstreamWeather = serde_json::from_value(json).unwrap();
        let record = WeatherRecord::from(raw);
        assert_eq!(record.weather.main, "Unknown");
    }
}
