//! Presentation-only concerns: terminal capability detection, the display
//! currency, and number formatting. The calculation core never reads any
//! of this; currency conversion happens strictly at render time.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::env;
use std::io::IsTerminal;

/// Fixed USD to CAD display rate. Applied to rendered values only; the
/// computed magnitudes stay in the reference unit.
pub const USD_TO_CAD_RATE: f64 = 1.36;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Auto,   // Detect based on terminal
    Always, // Force colors on
    Never,  // Force colors off
}

impl ColorMode {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "auto" => Some(Self::Auto),
            "always" => Some(Self::Always),
            "never" => Some(Self::Never),
            _ => None,
        }
    }

    pub fn should_use_color(&self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => detect_color_support(),
        }
    }
}

/// Display currency for rendered dollar amounts.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Currency {
    #[default]
    Usd,
    Cad,
}

impl Currency {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "usd" => Some(Self::Usd),
            "cad" => Some(Self::Cad),
            _ => None,
        }
    }

    /// Convert a reference-unit amount into this display currency.
    pub fn convert(&self, amount_usd: f64) -> f64 {
        match self {
            Self::Usd => amount_usd,
            Self::Cad => amount_usd * USD_TO_CAD_RATE,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::Usd => "USD",
            Self::Cad => "CAD",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FormattingConfig {
    pub color: ColorMode,
    pub currency: Currency,
}

impl Default for FormattingConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::Auto,
            currency: Currency::Usd,
        }
    }
}

impl FormattingConfig {
    pub fn from_env() -> Self {
        let mut config = Self::default();

        // Check NO_COLOR environment variable (per no-color.org standard)
        if env::var("NO_COLOR").is_ok() {
            config.color = ColorMode::Never;
        }

        // Check CLICOLOR environment variable
        if let Ok(val) = env::var("CLICOLOR") {
            if val == "0" {
                config.color = ColorMode::Never;
            }
        }

        // Check CLICOLOR_FORCE environment variable
        if let Ok(val) = env::var("CLICOLOR_FORCE") {
            if val == "1" {
                config.color = ColorMode::Always;
            }
        }

        config
    }

    /// Plain output configuration: no colors.
    pub fn plain() -> Self {
        Self {
            color: ColorMode::Never,
            currency: Currency::Usd,
        }
    }

    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    /// Render a reference-unit dollar amount in the display currency,
    /// rounded with thousands separators.
    pub fn money(&self, amount_usd: f64) -> String {
        format_currency(amount_usd, self.currency)
    }
}

/// Round to the nearest integer and insert en-US thousands separators.
pub fn format_number(value: f64) -> String {
    group_thousands(value.round() as i64)
}

/// `$`-prefixed rounded amount in the given display currency.
pub fn format_currency(amount_usd: f64, currency: Currency) -> String {
    format!("${}", format_number(currency.convert(amount_usd)))
}

fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if value < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

fn detect_color_support() -> bool {
    // Check if we're in a dumb terminal
    if let Ok(term) = env::var("TERM") {
        if term == "dumb" {
            return false;
        }
    }

    // Check if stdout is a TTY
    std::io::stdout().is_terminal()
}
