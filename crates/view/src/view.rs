use crate::access::Sequence;
use crate::errors::OutOfBounds;
use crate::window::Window;
use seq_slice::{InvalidStep, SliceSpec};
use std::fmt::{Debug, Formatter};


/// Read surface shared by `View` and `Window`.
///
/// Positions are in the view's own coordinates. `iter()` and `reversed()`
/// build a fresh iterator on every call and never consume shared state.
pub trait SequenceView {
    type Item;

    fn len(&self) -> usize;

    fn get(&self, i: usize) -> Result<Self::Item, OutOfBounds>;

    fn iter(&self) -> impl Iterator<Item = Self::Item> + '_;

    fn reversed(&self) -> impl Iterator<Item = Self::Item> + '_;

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    fn contains(&self, value: &Self::Item) -> bool
    where
        Self::Item: PartialEq
    {
        self.iter().any(|item| item == *value)
    }

    /// Offset of the first occurrence of `value`, if any.
    #[inline]
    fn position(&self, value: &Self::Item) -> Option<usize>
    where
        Self::Item: PartialEq
    {
        self.iter().position(|item| item == *value)
    }

    #[inline]
    fn count_of(&self, value: &Self::Item) -> usize
    where
        Self::Item: PartialEq
    {
        self.iter().filter(|item| item == value).count()
    }

    fn to_vec(&self) -> Vec<Self::Item> {
        self.iter().collect()
    }
}


/// Same length and elementwise-equal contents.
pub fn same_items<A, B>(a: &A, b: &B) -> bool
where
    A: SequenceView,
    B: SequenceView<Item = A::Item>,
    A::Item: PartialEq
{
    a.len() == b.len() && a.iter().zip(b.iter()).all(|(x, y)| x == y)
}


/// Non-owning whole-sequence view over a backing collection.
pub struct View<'a, S: ?Sized> {
    backing: &'a S
}


impl <'a, S: ?Sized> Clone for View<'a, S> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}


impl <'a, S: ?Sized> Copy for View<'a, S> {}


impl <'a, S: Sequence + ?Sized> View<'a, S> {
    pub fn new(backing: &'a S) -> Self {
        Self { backing }
    }

    #[inline]
    pub fn backing(&self) -> &'a S {
        self.backing
    }

    /// Selects a subset of the backing positions.
    ///
    /// The spec resolves against the backing length right away; the only
    /// rejected input is a zero step. Bounds of any magnitude clamp to a
    /// valid, possibly empty window.
    pub fn slice(&self, spec: impl Into<SliceSpec>) -> Result<Window<'a, S>, InvalidStep> {
        Window::over(self.backing, spec.into())
    }
}


impl <'a, S: Sequence + ?Sized> SequenceView for View<'a, S> {
    type Item = S::Item;

    #[inline]
    fn len(&self) -> usize {
        self.backing.len()
    }

    fn get(&self, i: usize) -> Result<S::Item, OutOfBounds> {
        if i < self.backing.len() {
            Ok(self.backing.get(i))
        } else {
            Err(OutOfBounds {
                index: i,
                len: self.backing.len()
            })
        }
    }

    fn iter(&self) -> impl Iterator<Item = S::Item> + '_ {
        let backing = self.backing;
        (0..backing.len()).map(move |i| backing.get(i))
    }

    fn reversed(&self) -> impl Iterator<Item = S::Item> + '_ {
        let backing = self.backing;
        (0..backing.len()).rev().map(move |i| backing.get(i))
    }
}


impl <'a, 'b, A, B> PartialEq<View<'b, B>> for View<'a, A>
where
    A: Sequence + ?Sized,
    B: Sequence<Item = A::Item> + ?Sized,
    A::Item: PartialEq
{
    fn eq(&self, other: &View<'b, B>) -> bool {
        same_items(self, other)
    }
}


impl <'a, 'b, A, B> PartialEq<Window<'b, B>> for View<'a, A>
where
    A: Sequence + ?Sized,
    B: Sequence<Item = A::Item> + ?Sized,
    A::Item: PartialEq
{
    fn eq(&self, other: &Window<'b, B>) -> bool {
        same_items(self, other)
    }
}


impl <'a, S> Debug for View<'a, S>
where
    S: Sequence + ?Sized,
    S::Item: Debug
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
