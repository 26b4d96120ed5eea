/// Settings for a scroll-triggered visibility tracker.
#[derive(Clone, Debug, PartialEq)]
pub struct VisibilityOptions {
    /// Fraction of the element (0..=1) that must be on screen.
    pub threshold: f64,
    /// CSS margin applied to the viewport, e.g. `"0px 0px -50px 0px"`.
    pub root_margin: String,
    pub trigger_once: bool,
    pub delay_ms: u32,
}

impl Default for VisibilityOptions {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: "0px 0px -50px 0px".to_string(),
            trigger_once: true,
            delay_ms: 0,
        }
    }
}

impl VisibilityOptions {
    pub fn with_delay(delay_ms: u32) -> Self {
        Self { delay_ms, ..Self::default() }
    }
}

/// What the owner of a [`VisibilityState`] has to do after an intersection change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VisibilityCommand {
    /// Call [`VisibilityState::reveal`] once `after_ms` have passed.
    ScheduleReveal { after_ms: u32 },
    /// Hidden right away; any scheduled reveal must be cancelled.
    Hide,
    Ignore,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VisibilityState {
    is_visible: bool,
    has_triggered: bool,
    reveal_pending: bool,
}

impl VisibilityState {
    /// Used when the browser cannot observe intersections: content is never hidden.
    pub fn fail_open() -> Self {
        Self { is_visible: true, has_triggered: true, reveal_pending: false }
    }

    pub fn is_visible(&self) -> bool {
        self.is_visible
    }

    pub fn observe(&mut self, intersecting: bool, options: &VisibilityOptions) -> VisibilityCommand {
        if intersecting {
            if options.trigger_once && self.has_triggered {
                return VisibilityCommand::Ignore;
            }
            if self.reveal_pending || self.is_visible {
                return VisibilityCommand::Ignore;
            }
            self.reveal_pending = true;
            VisibilityCommand::ScheduleReveal { after_ms: options.delay_ms }
        } else if !options.trigger_once {
            self.reveal_pending = false;
            self.is_visible = false;
            VisibilityCommand::Hide
        } else {
            // A pending reveal still lands after a quick fly-by.
            VisibilityCommand::Ignore
        }
    }

    pub fn reveal(&mut self) {
        self.reveal_pending = false;
        self.is_visible = true;
        self.has_triggered = true;
    }
}
