//! Time-driven fill pattern: colors sweep from index 0 upward until the
//! whole fixture is lit. Because the geometry engine writes points in path
//! order, the fill advances physically along the shape.

use crate::{
    color::{Palette, Rgb8},
    model::FixtureModel,
};

/// Which source the fill selects its color from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ColorMode {
    Fixed,
    Palette,
}

impl std::fmt::Display for ColorMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fixed => write!(f, "Fixed"),
            Self::Palette => write!(f, "Palette"),
        }
    }
}

/// Fill-from-one-end pattern state.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct FillPattern {
    /// Time to fill the whole fixture, in milliseconds.
    pub speed_ms: f64,
    pub color_mode: ColorMode,
    pub color: Rgb8,
    /// 1-based swatch index used in `Palette` mode.
    pub palette_index: usize,
    total_time_ms: f64,
}

impl FillPattern {
    pub fn new(speed_ms: f64) -> Self {
        Self {
            speed_ms,
            color_mode: ColorMode::Fixed,
            color: Rgb8::GREEN,
            palette_index: 1,
            total_time_ms: 0.0,
        }
    }

    /// Restart the sweep. Call after changing the color or palette index.
    pub fn reset(&mut self) {
        self.total_time_ms = 0.0;
    }

    /// Black out the buffer and restart; the pattern just became active.
    pub fn activate(&mut self, colors: &mut [Rgb8]) {
        colors.fill(Rgb8::BLACK);
        self.reset();
    }

    /// Fraction of the fixture currently lit, in `[0, 1]`.
    pub fn fill_fraction(&self) -> f64 {
        if self.total_time_ms < self.speed_ms {
            (self.total_time_ms / self.speed_ms).clamp(0.0, 1.0)
        } else {
            1.0
        }
    }

    /// Advance the pattern by `delta_ms` and repaint `colors`.
    ///
    /// `colors` is indexed through each point's pixel index and must cover
    /// the model; indices at or above `colors.len()` are skipped.
    pub fn run(
        &mut self,
        delta_ms: f64,
        model: &FixtureModel,
        palette: &Palette,
        colors: &mut [Rgb8],
    ) {
        // Accumulate just past the full duration so the fill latches at 1.
        // A non-positive speed degenerates to an instant fill; keep the
        // clamp bounds ordered for it.
        let limit = self.speed_ms.max(0.0) + 1.0;
        self.total_time_ms = (self.total_time_ms + delta_ms).clamp(0.0, limit);

        let color = match self.color_mode {
            ColorMode::Palette => palette.swatch_color(self.palette_index.saturating_sub(1)),
            ColorMode::Fixed => self.color,
        };

        let fill_count = (self.fill_fraction() * model.len() as f64) as usize;
        for point in &model.points[..fill_count.min(model.len())] {
            if let Some(c) = colors.get_mut(point.index) {
                *c = color;
            }
        }
        for point in &model.points[fill_count.min(model.len())..] {
            if let Some(c) = colors.get_mut(point.index) {
                *c = Rgb8::BLACK;
            }
        }
    }
}
