//! Lookup tables from provider weather codes to display text.
//!
//! Both lookups are total: codes missing from a table fall back to a
//! generated phrase or to the default symbol.

use serde::{Deserialize, Serialize};
use std::{
    borrow::Cow,
    collections::HashMap,
    fmt,
    sync::LazyLock,
};

/// Provider-defined weather condition code (WMO interpretation code for Open-Meteo).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeatherCode(pub i64);

impl WeatherCode {
    pub fn phrase(self) -> Cow<'static, str> {
        phrase(self)
    }

    pub fn symbol(self) -> &'static str {
        symbol(self)
    }

    pub fn condition_label(self) -> String {
        condition_label(self)
    }
}

impl From<i64> for WeatherCode {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for WeatherCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

const BASE_PHRASES: &[(i64, &str)] = &[
    (0, "clear"),
    (1, "mainly clear"),
    (2, "partly cloudy"),
    (3, "overcast"),
    (45, "fog"),
    (48, "depositing rime fog"),
    (51, "light drizzle"),
    (53, "moderate drizzle"),
    (55, "dense drizzle"),
    (61, "slight rain"),
    (63, "moderate rain"),
    (65, "heavy rain"),
    (71, "slight snow"),
    (73, "moderate snow"),
    (75, "heavy snow"),
    (95, "thunderstorm"),
];

const SHOWER_PHRASES: &[(i64, &str)] = &[
    (80, "rain showers"),
    (81, "moderate rain showers"),
    (82, "violent rain showers"),
    (85, "slight snow showers"),
    (86, "heavy snow showers"),
];

const SYMBOLS: &[(i64, &str)] = &[
    (0, "☀️"),
    (1, "🌤️"),
    (2, "⛅"),
    (3, "☁️"),
    (45, "🌫️"),
    (48, "🌫️"),
    (51, "🌦️"),
    (53, "🌦️"),
    (55, "🌧️"),
    (61, "🌦️"),
    (63, "🌧️"),
    (65, "🌧️"),
    (71, "🌨️"),
    (73, "🌨️"),
    (75, "🌨️"),
    (95, "⛈️"),
];

/// Symbol used for any code without an entry in the symbol table.
pub const DEFAULT_SYMBOL: &str = "🌤️";

static PHRASES: LazyLock<HashMap<i64, &'static str>> = LazyLock::new(|| {
    BASE_PHRASES
        .iter()
        .chain(SHOWER_PHRASES)
        .copied()
        .collect()
});

static SYMBOL_TABLE: LazyLock<HashMap<i64, &'static str>> =
    LazyLock::new(|| SYMBOLS.iter().copied().collect());

/// Human-readable phrase for `code`, or `code {n}` when the code is unknown.
pub fn phrase(code: WeatherCode) -> Cow<'static, str> {
    match PHRASES.get(&code.0) {
        Some(p) => Cow::Borrowed(p),
        None => Cow::Owned(format!("code {}", code.0)),
    }
}

/// Pictograph for `code`, or [`DEFAULT_SYMBOL`] when the code is unknown.
pub fn symbol(code: WeatherCode) -> &'static str {
    SYMBOL_TABLE.get(&code.0).copied().unwrap_or(DEFAULT_SYMBOL)
}

/// `"<symbol> <phrase>"`, as shown in the condition field.
pub fn condition_label(code: WeatherCode) -> String {
    format!("{} {}", symbol(code), phrase(code))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXPECTED_PHRASES: [(i64, &str); 21] = [
        (0, "clear"),
        (1, "mainly clear"),
        (2, "partly cloudy"),
        (3, "overcast"),
        (45, "fog"),
        (48, "depositing rime fog"),
        (51, "light drizzle"),
        (53, "moderate drizzle"),
        (55, "dense drizzle"),
        (61, "slight rain"),
        (63, "moderate rain"),
        (65, "heavy rain"),
        (71, "slight snow"),
        (73, "moderate snow"),
        (75, "heavy snow"),
        (80, "rain showers"),
        (81, "moderate rain showers"),
        (82, "violent rain showers"),
        (85, "slight snow showers"),
        (86, "heavy snow showers"),
        (95, "thunderstorm"),
    ];

    const EXPECTED_SYMBOLS: [(i64, &str); 16] = [
        (0, "\u{2600}\u{fe0f}"),
        (1, "\u{1f324}\u{fe0f}"),
        (2, "\u{26c5}"),
        (3, "\u{2601}\u{fe0f}"),
        (45, "\u{1f32b}\u{fe0f}"),
        (48, "\u{1f32b}\u{fe0f}"),
        (51, "\u{1f326}\u{fe0f}"),
        (53, "\u{1f326}\u{fe0f}"),
        (55, "\u{1f327}\u{fe0f}"),
        (61, "\u{1f326}\u{fe0f}"),
        (63, "\u{1f327}\u{fe0f}"),
        (65, "\u{1f327}\u{fe0f}"),
        (71, "\u{1f328}\u{fe0f}"),
        (73, "\u{1f328}\u{fe0f}"),
        (75, "\u{1f328}\u{fe0f}"),
        (95, "\u{26c8}\u{fe0f}"),
    ];

    #[test]
    fn every_known_phrase_matches() {
        for (code, text) in EXPECTED_PHRASES {
            assert_eq!(phrase(WeatherCode(code)), text, "code {code}");
        }
        assert_eq!(PHRASES.len(), EXPECTED_PHRASES.len());
    }

    #[test]
    fn every_known_symbol_matches() {
        for (code, sym) in EXPECTED_SYMBOLS {
            assert_eq!(symbol(WeatherCode(code)), sym, "code {code}");
        }
        assert_eq!(SYMBOL_TABLE.len(), EXPECTED_SYMBOLS.len());
        assert_eq!(DEFAULT_SYMBOL, "\u{1f324}\u{fe0f}");
    }

    #[test]
    fn shower_codes_extend_base_table() {
        assert_eq!(phrase(WeatherCode(80)), "rain showers");
        assert_eq!(phrase(WeatherCode(82)), "violent rain showers");
        assert_eq!(phrase(WeatherCode(86)), "heavy snow showers");
        assert_eq!(PHRASES.len(), BASE_PHRASES.len() + SHOWER_PHRASES.len());
    }

    #[test]
    fn unknown_code_phrase_carries_exact_number() {
        assert_eq!(phrase(WeatherCode(4)), "code 4");
        assert_eq!(phrase(WeatherCode(99)), "code 99");
        assert_eq!(phrase(WeatherCode(-7)), "code -7");
        assert_eq!(phrase(WeatherCode(i64::MAX)), format!("code {}", i64::MAX));
    }

    #[test]
    fn unknown_and_shower_codes_use_default_symbol() {
        for code in [80, 86, 99, -1, 1000] {
            assert_eq!(symbol(WeatherCode(code)), DEFAULT_SYMBOL, "code {code}");
        }
    }

    #[test]
    fn every_symbol_code_has_a_phrase() {
        for (code, _) in SYMBOLS {
            assert!(PHRASES.contains_key(code), "code {code} has no phrase");
        }
    }

    #[test]
    fn condition_label_joins_symbol_and_phrase() {
        assert_eq!(condition_label(WeatherCode(61)), "🌦️ slight rain");
        assert_eq!(WeatherCode(123).condition_label(), "🌤️ code 123");
    }
}
