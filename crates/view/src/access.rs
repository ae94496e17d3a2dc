use std::sync::Arc;


/// Read capability required from a backing collection.
///
/// `get(i)` must be O(1) and is only called with `i < len()`. Items come
/// out by value; backings of borrowed data hand out clones or copies.
pub trait Sequence {
    type Item;

    fn len(&self) -> usize;

    fn get(&self, i: usize) -> Self::Item;

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}


impl <'a, T: Sequence + ?Sized> Sequence for &'a T {
    type Item = T::Item;

    #[inline]
    fn len(&self) -> usize {
        (*self).len()
    }

    #[inline]
    fn get(&self, i: usize) -> Self::Item {
        (*self).get(i)
    }
}


impl <T: Sequence + ?Sized> Sequence for Arc<T> {
    type Item = T::Item;

    #[inline]
    fn len(&self) -> usize {
        self.as_ref().len()
    }

    #[inline]
    fn get(&self, i: usize) -> Self::Item {
        self.as_ref().get(i)
    }
}


impl <T: Clone> Sequence for [T] {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline]
    fn get(&self, i: usize) -> T {
        self[i].clone()
    }
}


impl <T: Clone, const N: usize> Sequence for [T; N] {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        N
    }

    #[inline]
    fn get(&self, i: usize) -> T {
        self[i].clone()
    }
}


impl <T: Clone> Sequence for Vec<T> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    #[inline]
    fn get(&self, i: usize) -> T {
        self[i].clone()
    }
}
