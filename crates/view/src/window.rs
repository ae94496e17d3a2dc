use crate::access::Sequence;
use crate::errors::OutOfBounds;
use crate::view::{same_items, SequenceView, View};
use seq_slice::{InvalidStep, RangeProperties, SliceSpec};
use std::fmt::{Debug, Formatter};


/// A resolved selection of backing positions.
///
/// Holds the original backing reference plus the canonical slice triple in
/// backing coordinates. Re-slicing composes triples instead of stacking
/// windows, so construction and element access stay O(1) at any chain
/// depth.
pub struct Window<'a, S: ?Sized> {
    backing: &'a S,
    props: RangeProperties
}


impl <'a, S: ?Sized> Clone for Window<'a, S> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}


impl <'a, S: ?Sized> Copy for Window<'a, S> {}


impl <'a, S: Sequence + ?Sized> Window<'a, S> {
    pub fn over(backing: &'a S, spec: SliceSpec) -> Result<Self, InvalidStep> {
        let props = RangeProperties::new(spec, backing.len())?;
        Ok(Self { backing, props })
    }

    #[inline]
    pub fn backing(&self) -> &'a S {
        self.backing
    }

    /// The canonical triple this window selects, in backing coordinates.
    #[inline]
    pub fn properties(&self) -> &RangeProperties {
        &self.props
    }

    /// Selects a subset of this window's visible positions.
    ///
    /// `spec` resolves against the visible length, then folds into the
    /// stored triple. The result references the original backing, never
    /// this window.
    pub fn slice(&self, spec: impl Into<SliceSpec>) -> Result<Window<'a, S>, InvalidStep> {
        let inner = RangeProperties::new(spec.into(), self.props.len())?;
        Ok(Self {
            backing: self.backing,
            props: self.props.compose(&inner)
        })
    }
}


impl <'a, S: Sequence + ?Sized> SequenceView for Window<'a, S> {
    type Item = S::Item;

    #[inline]
    fn len(&self) -> usize {
        self.props.len()
    }

    fn get(&self, i: usize) -> Result<S::Item, OutOfBounds> {
        let len = self.props.len();
        if i < len {
            let position = (self.props.start() + i as isize * self.props.step()) as usize;
            Ok(self.backing.get(position))
        } else {
            Err(OutOfBounds { index: i, len })
        }
    }

    fn iter(&self) -> impl Iterator<Item = S::Item> + '_ {
        let backing = self.backing;
        self.props.range().map(move |i| backing.get(i))
    }

    fn reversed(&self) -> impl Iterator<Item = S::Item> + '_ {
        let backing = self.backing;
        self.props.range().rev().map(move |i| backing.get(i))
    }
}


impl <'a, 'b, A, B> PartialEq<Window<'b, B>> for Window<'a, A>
where
    A: Sequence + ?Sized,
    B: Sequence<Item = A::Item> + ?Sized,
    A::Item: PartialEq
{
    fn eq(&self, other: &Window<'b, B>) -> bool {
        same_items(self, other)
    }
}


impl <'a, 'b, A, B> PartialEq<View<'b, B>> for Window<'a, A>
where
    A: Sequence + ?Sized,
    B: Sequence<Item = A::Item> + ?Sized,
    A::Item: PartialEq
{
    fn eq(&self, other: &View<'b, B>) -> bool {
        same_items(self, other)
    }
}


impl <'a, S> Debug for Window<'a, S>
where
    S: Sequence + ?Sized,
    S::Item: Debug
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
