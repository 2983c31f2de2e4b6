//! Viewport-width device classification
//!
//! Drives the confetti budget and is reported with every telemetry event.

use serde::Serialize;

use crate::consts::{MOBILE_MAX_WIDTH, TABLET_MAX_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceType {
    Mobile,
    Tablet,
    Desktop,
}

impl DeviceType {
    /// Classify by viewport width (CSS px)
    pub fn classify(viewport_width: f64) -> Self {
        if viewport_width <= MOBILE_MAX_WIDTH {
            DeviceType::Mobile
        } else if viewport_width <= TABLET_MAX_WIDTH {
            DeviceType::Tablet
        } else {
            DeviceType::Desktop
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceType::Mobile => "mobile",
            DeviceType::Tablet => "tablet",
            DeviceType::Desktop => "desktop",
        }
    }

    pub fn is_mobile(&self) -> bool {
        *self == DeviceType::Mobile
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_thresholds() {
        assert_eq!(DeviceType::classify(320.0), DeviceType::Mobile);
        assert_eq!(DeviceType::classify(768.0), DeviceType::Mobile);
        assert_eq!(DeviceType::classify(769.0), DeviceType::Tablet);
        assert_eq!(DeviceType::classify(1024.0), DeviceType::Tablet);
        assert_eq!(DeviceType::classify(1025.0), DeviceType::Desktop);
        assert_eq!(DeviceType::classify(2560.0), DeviceType::Desktop);
    }

    #[test]
    fn test_as_str_matches_wire_format() {
        assert_eq!(DeviceType::Mobile.as_str(), "mobile");
        assert_eq!(DeviceType::Tablet.as_str(), "tablet");
        assert_eq!(DeviceType::Desktop.as_str(), "desktop");
        // serde uses the same lowercase names
        assert_eq!(
            serde_json::to_string(&DeviceType::Desktop).unwrap(),
            "\"desktop\""
        );
    }
}
