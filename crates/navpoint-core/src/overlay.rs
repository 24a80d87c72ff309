// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Event dispatcher: owns the user switches and turns host events into redraws.
//!
//! Every event triggers a full recompute from the host model. A failing data
//! source is logged and leaves the previously rendered batch in place; the
//! next event redraws from scratch.

use crate::config::OverlayConfig;
use crate::draw::draw_nav_points;
use crate::ports::{MapEvent, MapModel, SourceError};
use crate::primitives::Primitive;
use crate::render_port::RenderPort;
use navpoint_app_core::{OverlaySettings, SettingsPort};
use thiserror::Error;
use tracing::{debug, error, info, instrument};

/// Failure of a single recompute pass.
#[derive(Debug, Error)]
pub enum OverlayError {
    /// A host data source failed.
    #[error("map source failed: {0}")]
    Source(#[from] SourceError),
}

/// The overlay as a host sees it.
///
/// `M` supplies map data, `R` displays primitives and `P` persists the two
/// user switches. Call [`NavPointOverlay::redraw`] once after construction
/// and [`NavPointOverlay::handle`] for every subscribed [`MapEvent`].
pub struct NavPointOverlay<M, R, P> {
    model: M,
    render: R,
    settings_port: P,
    settings: OverlaySettings,
    config: OverlayConfig,
}

impl<M, R, P> NavPointOverlay<M, R, P>
where
    M: MapModel,
    R: RenderPort,
    P: SettingsPort,
{
    /// Wire the overlay, loading persisted settings (defaults when absent or unreadable).
    pub fn new(model: M, render: R, settings_port: P, config: OverlayConfig) -> Self {
        let settings = settings_port.load_settings_or_default();
        info!(
            visible = settings.visible,
            parking_lots_visible = settings.parking_lots_visible,
            "navpoint overlay ready"
        );
        Self {
            model,
            render,
            settings_port,
            settings,
            config,
        }
    }

    /// Current user switches.
    pub fn settings(&self) -> OverlaySettings {
        self.settings
    }

    /// Current non-persisted configuration.
    pub fn config(&self) -> &OverlayConfig {
        &self.config
    }

    /// Borrow the map model.
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Mutably borrow the map model; follow up with the matching [`MapEvent`].
    pub fn model_mut(&mut self) -> &mut M {
        &mut self.model
    }

    /// Borrow the render port.
    pub fn render(&self) -> &R {
        &self.render
    }

    /// Consume the overlay, returning its collaborators.
    pub fn into_parts(self) -> (M, R, P) {
        (self.model, self.render, self.settings_port)
    }

    /// Respond to a host notification. Every event means "recompute now".
    #[instrument(level = "debug", skip(self))]
    pub fn handle(&mut self, event: MapEvent) {
        self.redraw();
    }

    /// Flip the master switch, persist it, redraw.
    pub fn set_visible(&mut self, visible: bool) {
        self.update_settings(self.settings.with_visible(visible));
    }

    /// Flip the parking-lot switch, persist it, redraw.
    pub fn set_parking_lots_visible(&mut self, visible: bool) {
        self.update_settings(self.settings.with_parking_lots_visible(visible));
    }

    /// Replace the non-persisted configuration and redraw.
    pub fn set_config(&mut self, config: OverlayConfig) {
        self.config = config;
        self.redraw();
    }

    fn update_settings(&mut self, settings: OverlaySettings) {
        self.settings = settings;
        self.settings_port.save_settings(&settings);
        self.redraw();
    }

    /// Recompute and hand the batch to the render port.
    ///
    /// Errors are logged and swallowed; the render port keeps its previous
    /// batch. Returns whether the render port was updated.
    pub fn redraw(&mut self) -> bool {
        match self.try_redraw() {
            Ok(()) => true,
            Err(err) => {
                error!(error = %err, "navpoint redraw failed; keeping previous primitives");
                false
            }
        }
    }

    /// Like [`NavPointOverlay::redraw`] but reports the failure.
    pub fn try_redraw(&mut self) -> Result<(), OverlayError> {
        let batch = self.compute()?;
        debug!(primitives = batch.len(), "navpoint redraw");
        self.render.replace_primitives(&batch);
        Ok(())
    }

    /// Primitive batch for the current model, viewport and settings.
    pub fn compute(&self) -> Result<Vec<Primitive>, OverlayError> {
        if !self.settings.visible {
            return Ok(Vec::new());
        }
        let viewport = self.model.viewport()?;
        let places = self.model.places()?;
        let segments = self.model.segments()?;
        Ok(draw_nav_points(
            &places,
            &segments,
            &self.model,
            &viewport,
            &self.settings,
            &self.config,
        ))
    }
}
