// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Persisted overlay switches (layer-switcher checkboxes).

use serde::{Deserialize, Serialize};

/// Storage key the settings record lives under.
pub const SETTINGS_KEY: &str = "wme_place_navpoints";

/// The two user-facing switches, persisted as a flat JSON record:
/// `{"visible": bool, "parkingLotsVisible": bool}`.
///
/// Missing fields fall back to `true` one by one, so a record written by an
/// older host that only knew `visible` still loads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OverlaySettings {
    /// Master switch for the whole overlay.
    pub visible: bool,
    /// Whether parking-lot places get connectors.
    #[serde(alias = "plaVisible")]
    pub parking_lots_visible: bool,
}

impl Default for OverlaySettings {
    fn default() -> Self {
        Self {
            visible: true,
            parking_lots_visible: true,
        }
    }
}

impl OverlaySettings {
    /// The parking-lot switch is nested under the master switch and is only
    /// interactive while the overlay is visible.
    pub fn parking_lots_toggle_enabled(&self) -> bool {
        self.visible
    }

    /// Returns a copy with `visible` replaced.
    #[must_use]
    pub fn with_visible(self, visible: bool) -> Self {
        Self { visible, ..self }
    }

    /// Returns a copy with `parking_lots_visible` replaced.
    #[must_use]
    pub fn with_parking_lots_visible(self, parking_lots_visible: bool) -> Self {
        Self {
            parking_lots_visible,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn defaults_are_both_on() {
        let s = OverlaySettings::default();
        assert!(s.visible);
        assert!(s.parking_lots_visible);
    }

    #[test]
    fn serializes_as_flat_camel_case_record() {
        let s = OverlaySettings {
            visible: false,
            parking_lots_visible: true,
        };
        let json = serde_json::to_value(s).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"visible": false, "parkingLotsVisible": true})
        );
    }

    #[test]
    fn missing_fields_default_individually() {
        let s: OverlaySettings = serde_json::from_str(r#"{"visible": false}"#).unwrap();
        assert_eq!(
            s,
            OverlaySettings {
                visible: false,
                parking_lots_visible: true,
            }
        );
    }

    #[test]
    fn legacy_field_name_is_accepted() {
        let s: OverlaySettings =
            serde_json::from_str(r#"{"visible": true, "plaVisible": false}"#).unwrap();
        assert!(!s.parking_lots_visible);
    }

    #[test]
    fn parking_lot_toggle_follows_master_switch() {
        let off = OverlaySettings::default().with_visible(false);
        assert!(!off.parking_lots_toggle_enabled());
        assert!(off.with_visible(true).parking_lots_toggle_enabled());
    }
}
