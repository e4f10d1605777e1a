pub const MIN_PERCENT: u16 = 50;
pub const MAX_PERCENT: u16 = 200;
pub const STEP_PERCENT: u16 = 10;

/// Session-wide font scale, kept in whole percent so repeated steps never
/// drift.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Zoom {
    percent: u16,
}

impl Default for Zoom {
    fn default() -> Self {
        Self { percent: 100 }
    }
}

impl Zoom {
    pub fn zoom_in(&mut self) -> bool {
        self.set_percent(self.percent.saturating_add(STEP_PERCENT))
    }

    pub fn zoom_out(&mut self) -> bool {
        self.set_percent(self.percent.saturating_sub(STEP_PERCENT))
    }

    pub fn reset(&mut self) -> bool {
        self.set_percent(100)
    }

    /// Returns whether the level changed.
    pub fn set_percent(&mut self, percent: u16) -> bool {
        let clamped = percent.clamp(MIN_PERCENT, MAX_PERCENT);
        let changed = clamped != self.percent;
        self.percent = clamped;
        if changed {
            tracing::debug!("zoom: {}%", self.percent);
        }
        changed
    }

    pub fn percent(&self) -> u16 {
        self.percent
    }

    pub fn factor(&self) -> f32 {
        f32::from(self.percent) / 100.0
    }
}
