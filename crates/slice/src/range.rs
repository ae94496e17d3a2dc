use crate::errors::InvalidStep;
use crate::iter::SliceIndices;
use crate::spec::SliceSpec;
use std::cmp::{max, min};


/// A `SliceSpec` resolved against a concrete sequence length.
///
/// The triple is canonical: `range()` enumerates valid backing positions
/// only and never panics, however far out of range the request was. `start`
/// may rest at -1 when stepping backward to the true front of the
/// sequence; such a triple is always empty or ends before position 0.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RangeProperties {
    start: isize,
    stop: isize,
    step: isize
}


impl RangeProperties {
    /// Resolves `spec` against `length`.
    ///
    /// Out-of-range bounds clamp silently, negative bounds wrap from the
    /// end first. The only rejected input is a zero step.
    pub fn new(spec: SliceSpec, length: usize) -> Result<Self, InvalidStep> {
        let len = length as isize;

        let step = spec.step.unwrap_or(1);
        if step == 0 {
            return Err(InvalidStep)
        }

        let (lower, upper) = if step < 0 {
            (-1, len - 1)
        } else {
            (0, len)
        };

        let start = match spec.start {
            None if step < 0 => upper,
            None => lower,
            Some(i) => clamp(i, len, lower, upper)
        };

        let stop = match spec.stop {
            None if step < 0 => lower,
            None => upper,
            Some(i) => clamp(i, len, lower, upper)
        };

        Ok(Self { start, stop, step })
    }

    #[inline]
    pub fn start(&self) -> isize {
        self.start
    }

    #[inline]
    pub fn stop(&self) -> isize {
        self.stop
    }

    #[inline]
    pub fn step(&self) -> isize {
        self.step
    }

    /// Number of selected positions, computed without enumerating them.
    pub fn len(&self) -> usize {
        let span = self.stop - self.start;
        if self.step > 0 && span > 0 {
            ((span + self.step - 1) / self.step) as usize
        } else if self.step < 0 && span < 0 {
            // both operands negative, so truncation equals the exact
            // ceiling of span / step
            ((span + self.step + 1) / self.step) as usize
        } else {
            0
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn range(&self) -> SliceIndices {
        SliceIndices::new(self.start, self.step, self.len())
    }

    /// Folds an inner slice into this one.
    ///
    /// `inner` must have been resolved against `self.len()`. The result
    /// selects exactly the positions this slice selects at the offsets
    /// `inner` selects, directly in backing coordinates — chains of
    /// windows collapse into a single triple this way.
    ///
    /// The composed stop is synthesized from the composed count rather
    /// than renormalized: a resolved backward stop may be negative and
    /// must not be wrapped a second time.
    pub fn compose(&self, inner: &RangeProperties) -> RangeProperties {
        let start = self.start + inner.start * self.step;
        let step = self.step * inner.step;
        let stop = start + inner.len() as isize * step;
        RangeProperties { start, stop, step }
    }
}


#[inline]
fn clamp(i: isize, len: isize, lower: isize, upper: isize) -> isize {
    if i < 0 {
        max(i + len, lower)
    } else {
        min(i, upper)
    }
}
