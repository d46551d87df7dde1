//! The per-instance widget state machine.

use tracing::trace;

use crate::core::debug::readout_lines;
use crate::core::{FramePresenter, FrameSurface, GridConfig, Quantizer};
use crate::input::{primary_touch, FrameSampler, RefreshSignal, TouchList};
use crate::options::WidgetOptions;
use crate::types::{ContainerRect, PointerSample};

/// One face widget: container geometry, quantizer, presenter, and sampler.
///
/// The host owns the surface and the refresh schedule; the widget only
/// decides what to draw and when drawing is redundant. Dropping the widget
/// detaches it, since no host callbacks hold references to it.
#[derive(Debug)]
pub struct FaceWidget {
    rect: ContainerRect,
    options: WidgetOptions,
    quantizer: Quantizer,
    presenter: FramePresenter,
    sampler: FrameSampler,
}

impl FaceWidget {
    pub fn new(rect: ContainerRect, config: GridConfig, options: WidgetOptions) -> Self {
        Self {
            rect,
            options,
            quantizer: Quantizer::new(config),
            presenter: FramePresenter::new(&config),
            sampler: FrameSampler::new(),
        }
    }

    /// Start the widget: apply the sprite sheet to the surface and process a
    /// synthetic sample at the container center synchronously, so the first
    /// frame is well-defined before any real input arrives.
    pub fn start(&mut self, surface: &mut dyn FrameSurface) {
        surface.set_sprite_image(&self.options.sprite_path());
        surface.set_background_size(self.quantizer.config().background_size_percent());

        let center = self.rect.center();
        self.sampler.seed(center);
        self.apply_frame(center, surface);
    }

    pub fn rect(&self) -> ContainerRect {
        self.rect
    }

    /// Update the container geometry (e.g. on host resize or layout change).
    pub fn set_rect(&mut self, rect: ContainerRect) {
        self.rect = rect;
    }

    pub fn options(&self) -> &WidgetOptions {
        &self.options
    }

    /// Cell currently applied to the surface.
    pub fn last_cell(&self) -> Option<crate::types::GridCell> {
        self.presenter.last_cell()
    }

    /// Raw pointer-move event at unbounded rate.
    pub fn pointer_moved(&mut self, sample: PointerSample, signal: &mut dyn RefreshSignal) {
        self.sampler.push(sample, signal);
    }

    /// Raw touch-move event. Only the first touch point is used; an event
    /// without touch points is ignored.
    pub fn touch_moved(&mut self, touches: &TouchList, signal: &mut dyn RefreshSignal) {
        match primary_touch(touches) {
            Some(sample) => self.sampler.push(sample, signal),
            None => trace!("touch event without touch points, ignored"),
        }
    }

    /// Per-refresh flush: process the latest coalesced sample, if any.
    pub fn on_frame(&mut self, surface: &mut dyn FrameSurface) {
        if let Some(sample) = self.sampler.take() {
            self.apply_frame(sample, surface);
        }
    }

    fn apply_frame(&mut self, sample: PointerSample, surface: &mut dyn FrameSurface) {
        let (nx, ny) = self.rect.normalized_offset(sample);
        let quantized = self.quantizer.resolve(nx, ny);
        self.presenter.present(quantized.cell, surface);

        // The overlay tracks every applied sample, not just cell changes.
        if self.options.debug {
            let lines = readout_lines(
                sample.x - self.rect.left,
                sample.y - self.rect.top,
                quantized.px,
                quantized.py,
                quantized.cell,
            );
            surface.set_debug_text(&lines);
        }
    }
}
