use serde::{Deserialize, Serialize};

use crate::utils::constants::UNKNOWN_LABEL;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Season {
    Spring = 1,
    Summer = 2,
    Autumn = 3,
    Winter = 4,
}

impl Season {
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Season::Spring),
            2 => Some(Season::Summer),
            3 => Some(Season::Autumn),
            4 => Some(Season::Winter),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Autumn => "Autumn",
            Season::Winter => "Winter",
        }
    }

    /// Name for a raw code, `Unknown` when the code is outside 1-4.
    pub fn name_for_code(code: u8) -> &'static str {
        Self::from_code(code).map_or(UNKNOWN_LABEL, |s| s.name())
    }
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Weather situation as recorded in the `weathersit` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum WeatherSituation {
    Clear = 1, // clear, few clouds
    Cloudy = 2, // mist, broken clouds
    Light = 3, // light snow or rain
    Heavy = 4, // heavy rain, ice pellets, fog
}

impl WeatherSituation {
    pub const ALL: [WeatherSituation; 4] = [
        WeatherSituation::Clear,
        WeatherSituation::Cloudy,
        WeatherSituation::Light,
        WeatherSituation::Heavy,
    ];

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(WeatherSituation::Clear),
            2 => Some(WeatherSituation::Cloudy),
            3 => Some(WeatherSituation::Light),
            4 => Some(WeatherSituation::Heavy),
            _ => None,
        }
    }

    pub fn code(&self) -> u8 {
        *self as u8
    }

    pub fn label(&self) -> &'static str {
        match self {
            WeatherSituation::Clear => "Clear",
            WeatherSituation::Cloudy => "Cloudy",
            WeatherSituation::Light => "Light",
            WeatherSituation::Heavy => "Heavy",
        }
    }

    pub fn label_for_code(code: u8) -> &'static str {
        Self::from_code(code).map_or(UNKNOWN_LABEL, |w| w.label())
    }
}

impl std::fmt::Display for WeatherSituation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_season_from_code() {
        assert_eq!(Season::from_code(1), Some(Season::Spring));
        assert_eq!(Season::from_code(2), Some(Season::Summer));
        assert_eq!(Season::from_code(3), Some(Season::Autumn));
        assert_eq!(Season::from_code(4), Some(Season::Winter));
        assert_eq!(Season::from_code(0), None);
        assert_eq!(Season::from_code(5), None);
    }

    #[test]
    fn test_season_names() {
        assert_eq!(Season::name_for_code(3), "Autumn");
        assert_eq!(Season::name_for_code(9), "Unknown");
        assert_eq!(Season::Winter.to_string(), "Winter");
    }

    #[test]
    fn test_weather_labels() {
        let labels: Vec<&str> = WeatherSituation::ALL.iter().map(|w| w.label()).collect();
        assert_eq!(labels, vec!["Clear", "Cloudy", "Light", "Heavy"]);

        assert_eq!(WeatherSituation::label_for_code(4), "Heavy");
        assert_eq!(WeatherSituation::label_for_code(0), "Unknown");
        assert_eq!(WeatherSituation::Light.to_string(), "Light");
    }
}
