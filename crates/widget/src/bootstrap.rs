//! One-shot widget discovery at startup.
//!
//! The host hands over every candidate element once; each element bearing
//! the marker class becomes one independent widget. Matching the original
//! page behavior, discovered widgets have no teardown hook in this layer;
//! the host drops them when it is done.

use tracing::debug;

use crate::core::GridConfig;
use crate::element::Element;
use crate::options::WidgetOptions;
use crate::widget::FaceWidget;

/// Class marking a container as a face-tracker host.
pub const MARKER_CLASS: &str = "face-tracker";

/// Build one widget per marked element.
///
/// Returned widgets are not started; the host calls
/// [`FaceWidget::start`] once it has a surface for each.
pub fn discover(elements: &[Element], config: GridConfig) -> Vec<FaceWidget> {
    elements
        .iter()
        .filter(|el| el.has_class(MARKER_CLASS))
        .map(|el| {
            let options = WidgetOptions::from_element(el);
            debug!(
                sprite = %options.sprite_path(),
                overlay = options.debug,
                "initializing face widget"
            );
            FaceWidget::new(el.rect(), config, options)
        })
        .collect()
}
