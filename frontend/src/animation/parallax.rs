/// Vertical extent of an element relative to the viewport top, in px.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ElementBounds {
    pub top: f64,
    pub bottom: f64,
}

impl ElementBounds {
    pub fn intersects_viewport(&self, viewport_height: f64) -> bool {
        self.top <= viewport_height && self.bottom >= 0.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParallaxTracker {
    speed: f64,
    offset: f64,
}

impl ParallaxTracker {
    pub fn new(speed: f64) -> Self {
        Self { speed, offset: 0.0 }
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Returns true when a new offset was committed.
    pub fn on_scroll(&mut self, scroll_y: f64, bounds: ElementBounds, viewport_height: f64) -> bool {
        if !bounds.intersects_viewport(viewport_height) {
            return false;
        }
        self.offset = scroll_y * -self.speed;
        true
    }
}

pub fn translate_y(offset: f64) -> String {
    format!("transform: translateY({}px);", offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: f64 = 800.0;

    fn on_screen() -> ElementBounds {
        ElementBounds { top: 100.0, bottom: 400.0 }
    }

    #[test]
    fn offset_is_linear_in_scroll() {
        let mut tracker = ParallaxTracker::new(0.3);
        for scroll in [0.0, 10.0, 250.0, 1234.5] {
            assert!(tracker.on_scroll(scroll, on_screen(), VIEWPORT));
            assert_eq!(tracker.offset(), scroll * -0.3);
        }
    }

    #[test]
    fn negative_speed_moves_the_other_way() {
        let mut tracker = ParallaxTracker::new(-0.5);
        tracker.on_scroll(200.0, on_screen(), VIEWPORT);
        assert_eq!(tracker.offset(), 100.0);
    }

    #[test]
    fn off_screen_keeps_last_value() {
        let mut tracker = ParallaxTracker::new(0.5);
        tracker.on_scroll(100.0, on_screen(), VIEWPORT);
        assert_eq!(tracker.offset(), -50.0);

        let below = ElementBounds { top: 900.0, bottom: 1200.0 };
        let above = ElementBounds { top: -500.0, bottom: -1.0 };
        assert!(!tracker.on_scroll(300.0, below, VIEWPORT));
        assert!(!tracker.on_scroll(5000.0, above, VIEWPORT));
        assert_eq!(tracker.offset(), -50.0);
    }

    #[test]
    fn edges_count_as_intersecting() {
        assert!(ElementBounds { top: VIEWPORT, bottom: VIEWPORT + 10.0 }.intersects_viewport(VIEWPORT));
        assert!(ElementBounds { top: -10.0, bottom: 0.0 }.intersects_viewport(VIEWPORT));
    }

    #[test]
    fn style_string() {
        assert_eq!(translate_y(-12.5), "transform: translateY(-12.5px);");
    }
}
