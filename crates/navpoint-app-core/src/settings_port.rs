// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Settings port used by the overlay dispatcher (load at startup, save on change).

use crate::config::{ConfigService, ConfigStore};
use crate::settings::{OverlaySettings, SETTINGS_KEY};
use tracing::warn;

/// Port for loading and saving [`OverlaySettings`].
pub trait SettingsPort {
    /// Load settings (returns `None` if missing or unreadable).
    fn load_settings(&self) -> Option<OverlaySettings>;
    /// Persist settings (best-effort; failures are logged, not returned).
    fn save_settings(&self, settings: &OverlaySettings);

    /// Load settings, falling back to `{visible: true, parkingLotsVisible: true}`.
    fn load_settings_or_default(&self) -> OverlaySettings {
        self.load_settings().unwrap_or_default()
    }
}

impl<S> SettingsPort for ConfigService<S>
where
    S: ConfigStore,
{
    fn load_settings(&self) -> Option<OverlaySettings> {
        match self.load::<OverlaySettings>(SETTINGS_KEY) {
            Ok(settings) => settings,
            Err(err) => {
                warn!(key = SETTINGS_KEY, error = %err, "discarding unreadable overlay settings");
                None
            }
        }
    }

    fn save_settings(&self, settings: &OverlaySettings) {
        if let Err(err) = self.save(SETTINGS_KEY, settings) {
            warn!(key = SETTINGS_KEY, error = %err, "failed to persist overlay settings");
        }
    }
}

impl<P> SettingsPort for Option<P>
where
    P: SettingsPort,
{
    fn load_settings(&self) -> Option<OverlaySettings> {
        self.as_ref().and_then(SettingsPort::load_settings)
    }

    fn save_settings(&self, settings: &OverlaySettings) {
        if let Some(port) = self {
            port.save_settings(settings);
        }
    }
}

impl<P> SettingsPort for Box<P>
where
    P: SettingsPort + ?Sized,
{
    fn load_settings(&self) -> Option<OverlaySettings> {
        (**self).load_settings()
    }

    fn save_settings(&self, settings: &OverlaySettings) {
        (**self).save_settings(settings);
    }
}
