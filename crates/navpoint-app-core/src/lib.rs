// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Shared application services for the place navpoint overlay (config storage,
//! persisted settings). Keeps host adapters thin and framework-agnostic.

pub mod config;
pub mod settings;
pub mod settings_port;

pub use config::{ConfigError, ConfigService, ConfigStore};
pub use settings::{OverlaySettings, SETTINGS_KEY};
pub use settings_port::SettingsPort;
