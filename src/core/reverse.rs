//! Last-to-first replay of order sequences.
//!
//! [`reverse_indexed`] walks a random-access sequence backwards without
//! copying it. [`reverse_streamed`] accepts any iterator, buffers it on a
//! stack and pops it. Both produce the same elements in the same order; an
//! absent input (`None`) is rejected with [`OrderError::NullInput`] before any
//! element is produced.

use crate::domain::model::ReverseStrategy;
use crate::utils::error::{OrderError, Result};
use std::collections::VecDeque;
use std::iter::FusedIterator;
use std::marker::PhantomData;

/// A finite sequence with a known length and positional access.
pub trait RandomAccess<T> {
    fn len(&self) -> usize;

    /// Element at `index`. Callers stay below [`RandomAccess::len`].
    fn at(&self, index: usize) -> &T;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> RandomAccess<T> for [T] {
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn at(&self, index: usize) -> &T {
        &self[index]
    }
}

impl<T, const N: usize> RandomAccess<T> for [T; N] {
    fn len(&self) -> usize {
        N
    }

    fn at(&self, index: usize) -> &T {
        &self[index]
    }
}

impl<T> RandomAccess<T> for Vec<T> {
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn at(&self, index: usize) -> &T {
        &self[index]
    }
}

impl<T> RandomAccess<T> for VecDeque<T> {
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    fn at(&self, index: usize) -> &T {
        &self[index]
    }
}

/// Reverse a random-access sequence lazily, yielding references.
pub fn reverse_indexed<'a, T, S>(orders: Option<&'a S>) -> Result<ReverseIndexed<'a, T, S>>
where
    S: RandomAccess<T> + ?Sized,
{
    let source = orders.ok_or(OrderError::NullInput { argument: "orders" })?;
    Ok(ReverseIndexed {
        source,
        remaining: source.len(),
        _element: PhantomData,
    })
}

pub struct ReverseIndexed<'a, T, S: ?Sized> {
    source: &'a S,
    remaining: usize,
    _element: PhantomData<&'a T>,
}

impl<'a, T, S> Iterator for ReverseIndexed<'a, T, S>
where
    S: RandomAccess<T> + ?Sized,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let source: &'a S = self.source;
        Some(source.at(self.remaining))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T, S> ExactSizeIterator for ReverseIndexed<'_, T, S> where S: RandomAccess<T> + ?Sized {}

impl<T, S> FusedIterator for ReverseIndexed<'_, T, S> where S: RandomAccess<T> + ?Sized {}

/// Reverse a forward-only sequence.
///
/// The source is left untouched until the first `next`, which drains it
/// completely onto a stack; every call then pops one element.
pub fn reverse_streamed<I>(orders: Option<I>) -> Result<ReverseStreamed<I::IntoIter>>
where
    I: IntoIterator,
{
    let source = orders.ok_or(OrderError::NullInput { argument: "orders" })?;
    Ok(ReverseStreamed {
        source: Some(source.into_iter()),
        stack: Vec::new(),
    })
}

pub struct ReverseStreamed<I: Iterator> {
    source: Option<I>,
    stack: Vec<I::Item>,
}

impl<I: Iterator> ReverseStreamed<I> {
    fn buffer(&mut self) {
        if let Some(source) = self.source.take() {
            for item in source {
                self.stack.push(item);
            }
            tracing::trace!("Buffered {} elements for reversal", self.stack.len());
        }
    }
}

impl<I: Iterator> Iterator for ReverseStreamed<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.buffer();
        self.stack.pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.source {
            Some(source) => source.size_hint(),
            None => (self.stack.len(), Some(self.stack.len())),
        }
    }
}

impl<I: Iterator> FusedIterator for ReverseStreamed<I> {}

/// Reverse a slice with the variant `strategy` names.
pub fn reverse<'a, T>(
    orders: Option<&'a [T]>,
    strategy: ReverseStrategy,
) -> Result<Box<dyn Iterator<Item = &'a T> + 'a>> {
    match strategy {
        ReverseStrategy::Indexed => Ok(Box::new(reverse_indexed(orders)?)),
        ReverseStrategy::Streamed => Ok(Box::new(reverse_streamed(orders)?)),
    }
}
