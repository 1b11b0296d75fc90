use super::point::PointFeature;
use crate::{event, log};

/// Contract with the globe renderer: it receives the full point set after
/// every successful snapshot and reports nothing back. Selection is driven
/// by the command loop, not by the renderer.
pub trait GlobeRenderer: Send {
    fn update_points(&mut self, points: &[PointFeature]);
}

/// Console stand-in for a 3D globe: summarizes the point set instead of
/// drawing it.
#[derive(Debug, Default)]
pub struct ConsoleGlobe {
    last_count: usize,
}

impl GlobeRenderer for ConsoleGlobe {
    fn update_points(&mut self, points: &[PointFeature]) {
        if points.len() != self.last_count {
            log!("active tracking: {} units", points.len());
            self.last_count = points.len();
        }
        for point in points {
            event!(
                "point {} at ({:.2}, {:.2}) alt {:.3} color {}",
                point.label(),
                point.lat(),
                point.lng(),
                point.alt(),
                point.color()
            );
        }
    }
}
