//! Tracked currencies and their display mappings

use crate::error::RateChartError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Currencies tracked against the rouble
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    /// US Dollar
    #[default]
    #[serde(alias = "$")]
    USD,
    /// Euro
    #[serde(alias = "€")]
    EUR,
    /// Chinese Yuan
    #[serde(alias = "¥")]
    CNY,
}

impl Currency {
    /// Get ISO 4217 code
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::CNY => "CNY",
        }
    }

    /// Get currency symbol as shown in the selector
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
            Currency::EUR => "€",
            Currency::CNY => "¥",
        }
    }

    /// Indicator name tagging this currency's observations upstream.
    /// Also used as the chart series name.
    pub fn indicator_name(&self) -> &'static str {
        match self {
            Currency::USD => "Курс доллара",
            Currency::EUR => "Курс евро",
            Currency::CNY => "Курс юаня",
        }
    }

    /// Chart heading
    pub fn title(&self) -> &'static str {
        match self {
            Currency::USD => "КУРС ДОЛЛАРА, $/₽",
            Currency::EUR => "КУРС ЕВРО, €/₽",
            Currency::CNY => "КУРС ЮАНЯ, ¥/₽",
        }
    }

    /// Parse from ISO code (case-insensitive) or symbol
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_uppercase().as_str() {
            "USD" | "$" => Some(Currency::USD),
            "EUR" | "€" => Some(Currency::EUR),
            "CNY" | "¥" => Some(Currency::CNY),
            _ => None,
        }
    }

    /// All tracked currencies, in selector order
    pub fn all() -> [Currency; 3] {
        [Currency::USD, Currency::EUR, Currency::CNY]
    }
}

impl FromStr for Currency {
    type Err = RateChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Currency::from_code(s).ok_or_else(|| RateChartError::UnknownCurrency(s.to_string()))
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
