//! Touchstone option line (`# <unit> <type> <format> R <impedance>`).

use std::fmt;
use std::str::FromStr;

use num_complex::Complex64;
use serde::Serialize;

/// Frequency unit declared in the option line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum FrequencyUnit {
    #[default]
    Hz,
    KHz,
    MHz,
    GHz,
}

impl FrequencyUnit {
    /// Multiplier converting a value in this unit to MHz.
    pub fn to_mhz_factor(self) -> f64 {
        match self {
            Self::Hz => 1e-6,
            Self::KHz => 1e-3,
            Self::MHz => 1.0,
            Self::GHz => 1e3,
        }
    }

    pub fn to_mhz(self, value: f64) -> f64 {
        value * self.to_mhz_factor()
    }
}

impl FromStr for FrequencyUnit {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "hz" => Ok(Self::Hz),
            "khz" => Ok(Self::KHz),
            "mhz" => Ok(Self::MHz),
            "ghz" => Ok(Self::GHz),
            _ => Err(()),
        }
    }
}

impl fmt::Display for FrequencyUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Hz => "Hz",
            Self::KHz => "kHz",
            Self::MHz => "MHz",
            Self::GHz => "GHz",
        };
        f.write_str(label)
    }
}

/// Network parameter type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum ParameterType {
    #[default]
    S,
    Y,
    Z,
    G,
    H,
}

impl FromStr for ParameterType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "s" => Ok(Self::S),
            "y" => Ok(Self::Y),
            "z" => Ok(Self::Z),
            "g" => Ok(Self::G),
            "h" => Ok(Self::H),
            _ => Err(()),
        }
    }
}

/// Representation of each value pair on a data line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum DataFormat {
    /// Real / imaginary.
    #[default]
    RealImag,
    /// Linear magnitude / angle in degrees.
    MagAngle,
    /// Magnitude in dB / angle in degrees.
    DbAngle,
}

impl DataFormat {
    /// Convert one value pair to a complex number.
    pub fn to_complex(self, first: f64, second: f64) -> Complex64 {
        match self {
            Self::RealImag => Complex64::new(first, second),
            Self::MagAngle => Complex64::from_polar(first, second.to_radians()),
            Self::DbAngle => Complex64::from_polar(10f64.powf(first / 20.0), second.to_radians()),
        }
    }
}

impl FromStr for DataFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ri" => Ok(Self::RealImag),
            "ma" => Ok(Self::MagAngle),
            "db" => Ok(Self::DbAngle),
            _ => Err(()),
        }
    }
}

impl fmt::Display for DataFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::RealImag => "RI",
            Self::MagAngle => "MA",
            Self::DbAngle => "DB",
        };
        f.write_str(label)
    }
}

/// Parsed option line. Defaults apply to anything the line does not declare.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OptionLine {
    pub unit: FrequencyUnit,
    pub parameter: ParameterType,
    pub format: DataFormat,
    /// Reference impedance in ohms.
    pub impedance: f64,
}

impl Default for OptionLine {
    fn default() -> Self {
        Self {
            unit: FrequencyUnit::Hz,
            parameter: ParameterType::S,
            format: DataFormat::RealImag,
            impedance: 50.0,
        }
    }
}

impl OptionLine {
    /// Parse an option line, returning the options and any tokens that were
    /// not understood.
    ///
    /// Tokens are case-insensitive and may appear in any order. Fields that
    /// are missing or unparseable keep their defaults.
    pub fn parse(line: &str) -> (Self, Vec<String>) {
        let mut options = Self::default();
        let mut unrecognized = Vec::new();
        let body = line.trim().trim_start_matches('#');
        let tokens: Vec<&str> = body.split_whitespace().collect();

        let mut index = 0;
        while index < tokens.len() {
            let token = tokens[index];
            if token.eq_ignore_ascii_case("r") {
                match tokens.get(index + 1).map(|value| value.parse::<f64>()) {
                    Some(Ok(impedance)) => {
                        options.impedance = impedance;
                        index += 2;
                        continue;
                    }
                    _ => unrecognized.push(token.to_string()),
                }
            } else if let Ok(unit) = token.parse::<FrequencyUnit>() {
                options.unit = unit;
            } else if let Ok(parameter) = token.parse::<ParameterType>() {
                options.parameter = parameter;
            } else if let Ok(format) = token.parse::<DataFormat>() {
                options.format = format;
            } else {
                unrecognized.push(token.to_string());
            }
            index += 1;
        }

        (options, unrecognized)
    }
}
