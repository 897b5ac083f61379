use crate::{config::FilterConfig, query::PriceRange, types::Price};

///
/// PriceSlider
///
/// Two-handle range input. Handles snap to the step, stay inside
/// `[0, ceiling]`, and never overlap: `max - min >= step`.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PriceSlider {
    ceiling: Price,
    step: Price,
    min: Price,
    max: Price,
}

impl PriceSlider {
    #[must_use]
    pub fn new(config: &FilterConfig) -> Self {
        let mut slider = Self {
            ceiling: config.price_ceiling,
            step: config.price_step,
            min: Price::ZERO,
            max: config.price_ceiling,
        };
        slider.drag(config.default_min.get(), config.default_max.get());

        slider
    }

    /// Move both handles. Non-finite input leaves that handle where it was.
    pub fn drag(&mut self, min: f64, max: f64) {
        let mut lo = self.snap(min).unwrap_or(self.min);
        let mut hi = self.snap(max).unwrap_or(self.max);

        if lo > hi {
            std::mem::swap(&mut lo, &mut hi);
        }

        let step = self.step.get();
        if hi.get() - lo.get() < step {
            hi = self.clamp(lo.get() + step);
            if hi.get() - lo.get() < step {
                lo = self.clamp(hi.get() - step);
            }
        }

        self.min = lo;
        self.max = hi;
    }

    #[must_use]
    pub const fn min(&self) -> Price {
        self.min
    }

    #[must_use]
    pub const fn max(&self) -> Price {
        self.max
    }

    #[must_use]
    pub const fn ceiling(&self) -> Price {
        self.ceiling
    }

    #[must_use]
    pub const fn step(&self) -> Price {
        self.step
    }

    /// Current handle positions as a query range.
    #[must_use]
    pub const fn range(&self) -> PriceRange {
        PriceRange::from_ordered(self.min, self.max)
    }

    fn snap(&self, value: f64) -> Option<Price> {
        if !value.is_finite() {
            return None;
        }

        let step = self.step.get();
        let steps = (value.clamp(0.0, self.ceiling.get()) / step).round();

        Some(self.clamp(steps * step))
    }

    fn clamp(&self, value: f64) -> Price {
        Price::try_new(value.clamp(0.0, self.ceiling.get())).unwrap_or(Price::ZERO)
    }
}
