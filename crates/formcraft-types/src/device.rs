// File: formcraft-types/src/device.rs
// Purpose: Builder preview presets (device width, colour theme)

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A name that matches none of an enum's variants
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind}: {value:?}")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

impl UnknownVariant {
    pub fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

/// Device width the preview pane simulates
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Device {
    #[default]
    Desktop,
    Tablet,
    Mobile,
}

impl Device {
    pub const ALL: [Device; 3] = [Device::Desktop, Device::Tablet, Device::Mobile];

    pub fn as_str(&self) -> &'static str {
        match self {
            Device::Desktop => "desktop",
            Device::Tablet => "tablet",
            Device::Mobile => "mobile",
        }
    }

    /// Maximum preview width in CSS pixels
    pub fn max_width_px(&self) -> u32 {
        match self {
            Device::Desktop => 896,
            Device::Tablet => 672,
            Device::Mobile => 384,
        }
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Device {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Device::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownVariant::new("device", s))
    }
}

/// Builder colour scheme
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(UnknownVariant::new("theme", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_device_parse_and_widths() {
        assert_eq!("Mobile".parse::<Device>().unwrap(), Device::Mobile);
        assert_eq!(Device::default(), Device::Desktop);
        assert!(Device::Mobile.max_width_px() < Device::Tablet.max_width_px());
        assert!(Device::Tablet.max_width_px() < Device::Desktop.max_width_px());

        let err = "watch".parse::<Device>().unwrap_err();
        assert_eq!(err.to_string(), "unknown device: \"watch\"");
    }

    #[test]
    fn test_theme_serializes_as_bare_string() {
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!("DARK".parse::<Theme>().unwrap(), Theme::Dark);
    }
}
