use std::ops::{Range, RangeFrom, RangeFull, RangeTo};


/// A start/stop/step selection request in the usual slice-literal sense.
///
/// Missing fields default according to the step direction when the spec is
/// resolved against a concrete length (see `RangeProperties`). Negative
/// values count from the end of the sequence.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SliceSpec {
    pub start: Option<isize>,
    pub stop: Option<isize>,
    pub step: Option<isize>
}


impl SliceSpec {
    pub fn new(
        start: impl Into<Option<isize>>,
        stop: impl Into<Option<isize>>,
        step: impl Into<Option<isize>>
    ) -> Self
    {
        Self {
            start: start.into(),
            stop: stop.into(),
            step: step.into()
        }
    }

    /// The whole-sequence spec, same as `Default`.
    pub fn full() -> Self {
        Self::default()
    }

    pub fn bounds(start: impl Into<Option<isize>>, stop: impl Into<Option<isize>>) -> Self {
        Self::new(start, stop, None)
    }

    pub fn stepped(step: isize) -> Self {
        Self::new(None, None, step)
    }
}


impl From<Range<isize>> for SliceSpec {
    fn from(value: Range<isize>) -> Self {
        Self::new(value.start, value.end, None)
    }
}


impl From<RangeFrom<isize>> for SliceSpec {
    fn from(value: RangeFrom<isize>) -> Self {
        Self::new(value.start, None, None)
    }
}


impl From<RangeTo<isize>> for SliceSpec {
    fn from(value: RangeTo<isize>) -> Self {
        Self::new(None, value.end, None)
    }
}


impl From<RangeFull> for SliceSpec {
    fn from(_: RangeFull) -> Self {
        Self::full()
    }
}
