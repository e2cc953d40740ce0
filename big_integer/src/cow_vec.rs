//! # CowVec
//! A value-semantic sequence of small `Copy` values.
//! Short sequences live inline with no allocation, longer ones live in a heap buffer
//! shared between clones until one of them is written to.
//!
//! Reads (`get`, `Index`, `as_slice`, `iter`) never copy. Anything handing out a mutable
//! reference first makes the buffer private, so writing through one clone is never
//! observable through another.
//!
//! The reference count is an [`Rc`], so a `CowVec` can not be sent to or shared with
//! another thread.
//!
//! ```
//! use big_integer::CowVec;
//!
//! let mut a: CowVec<u32> = (0..10).collect();
//! let b = a.clone();
//! assert_eq!(a.ref_count(), 2);
//!
//! a[0] = 42;
//! assert_eq!(a[0], 42);
//! assert_eq!(b[0], 0);
//! assert_eq!(b.ref_count(), 1);
//! ```

use std::fmt::{self, Debug};
use std::hash::{Hash, Hasher};
use std::ops::{Index, IndexMut};
use std::rc::Rc;

use log::trace;

use crate::big_int_constants::INLINE_CAPACITY;

#[derive(Clone)]
enum Repr<T> {
    Inline { len: u8, buf: [T; INLINE_CAPACITY] },
    // `Vec::len` is the length of the sequence, `Vec::capacity` its volume.
    Shared(Rc<Vec<T>>),
}

use Repr::{Inline, Shared};

#[derive(Clone)]
pub struct CowVec<T> {
    repr: Repr<T>,
}

// 实现构造
impl<T: Copy + Default> CowVec<T> {
    pub fn new() -> Self {
        CowVec { repr: Inline { len: 0, buf: [T::default(); INLINE_CAPACITY] } }
    }

    /// A sequence of `len` default (zero) values.
    pub fn with_len(len: usize) -> Self {
        let mut v = CowVec::new();
        v.resize(len);
        v
    }

    pub fn from_slice(values: &[T]) -> Self {
        if values.len() <= INLINE_CAPACITY {
            let mut buf = [T::default(); INLINE_CAPACITY];
            buf[..values.len()].copy_from_slice(values);
            CowVec { repr: Inline { len: values.len() as u8, buf } }
        } else {
            CowVec { repr: Shared(Rc::new(values.to_vec())) }
        }
    }
}

impl<T: Copy + Default> Default for CowVec<T> {
    fn default() -> Self {
        CowVec::new()
    }
}

impl<T: Copy + Default> From<Vec<T>> for CowVec<T> {
    fn from(values: Vec<T>) -> Self {
        if values.len() <= INLINE_CAPACITY {
            CowVec::from_slice(&values)
        } else {
            CowVec { repr: Shared(Rc::new(values)) }
        }
    }
}

impl<T: Copy + Default> FromIterator<T> for CowVec<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        iter.into_iter().collect::<Vec<T>>().into()
    }
}

// 实现读取
impl<T: Copy + Default> CowVec<T> {
    pub fn len(&self) -> usize {
        match &self.repr {
            Inline { len, .. } => *len as usize,
            Shared(buffer) => buffer.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of elements that fit before the next push reallocates.
    pub fn capacity(&self) -> usize {
        match &self.repr {
            Inline { .. } => INLINE_CAPACITY,
            Shared(buffer) => buffer.capacity(),
        }
    }

    pub fn is_inline(&self) -> bool {
        matches!(self.repr, Inline { .. })
    }

    /// How many sequences point at the heap buffer, 1 for inline storage.
    pub fn ref_count(&self) -> usize {
        match &self.repr {
            Inline { .. } => 1,
            Shared(buffer) => Rc::strong_count(buffer),
        }
    }

    pub fn as_slice(&self) -> &[T] {
        match &self.repr {
            Inline { len, buf } => &buf[..*len as usize],
            Shared(buffer) => buffer.as_slice(),
        }
    }

    pub fn get(&self, i: usize) -> T {
        self.as_slice()[i]
    }

    pub fn last(&self) -> Option<T> {
        self.as_slice().last().copied()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }
}

// 实现写入
impl<T: Copy + Default> CowVec<T> {
    /// Copy-on-write: give `buffer` a private copy if anyone else can see it.
    fn unshare(buffer: &mut Rc<Vec<T>>) -> &mut Vec<T> {
        if Rc::strong_count(buffer) > 1 {
            trace!("copy-on-write: cloning shared buffer of {} elements", buffer.len());
            let mut private = Vec::with_capacity(buffer.capacity());
            private.extend_from_slice(buffer.as_slice());
            *buffer = Rc::new(private);
        }
        Rc::make_mut(buffer)
    }

    /// Moves the elements into a fresh private heap buffer with room for `2 * required`.
    fn grow(&mut self, required: usize) {
        let volume = required * 2;
        trace!("growing from {} to {} elements", self.capacity(), volume);
        let mut buffer = Vec::with_capacity(volume);
        buffer.extend_from_slice(self.as_slice());
        self.repr = Shared(Rc::new(buffer));
    }

    fn ensure_capacity(&mut self, required: usize) {
        if self.capacity() < required {
            self.grow(required);
        }
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        match &mut self.repr {
            Inline { len, buf } => &mut buf[..*len as usize],
            Shared(buffer) => CowVec::unshare(buffer).as_mut_slice(),
        }
    }

    pub fn get_mut(&mut self, i: usize) -> &mut T {
        &mut self.as_mut_slice()[i]
    }

    pub fn last_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().last_mut()
    }

    pub fn push(&mut self, value: T) {
        self.ensure_capacity(self.len() + 1);
        match &mut self.repr {
            Inline { len, buf } => {
                buf[*len as usize] = value;
                *len += 1;
            }
            Shared(buffer) => CowVec::unshare(buffer).push(value),
        }
    }

    pub fn pop(&mut self) -> Option<T> {
        let value = self.last()?;
        self.truncate(self.len() - 1);
        Some(value)
    }

    /// Shortens the sequence to `len` elements, going back inline when they fit.
    pub fn truncate(&mut self, len: usize) {
        if len >= self.len() {
            return;
        }
        match &mut self.repr {
            Inline { len: inline_len, .. } => *inline_len = len as u8,
            Shared(buffer) if len <= INLINE_CAPACITY => {
                trace!("returning {} elements to inline storage", len);
                let mut buf = [T::default(); INLINE_CAPACITY];
                buf[..len].copy_from_slice(&buffer[..len]);
                self.repr = Inline { len: len as u8, buf };
            }
            Shared(buffer) => CowVec::unshare(buffer).truncate(len),
        }
    }

    /// Grows with default values or shrinks to exactly `len` elements.
    pub fn resize(&mut self, len: usize) {
        let old_len = self.len();
        if len <= old_len {
            self.truncate(len);
            return;
        }
        self.ensure_capacity(len);
        match &mut self.repr {
            Inline { len: inline_len, buf } => {
                buf[old_len..len].fill(T::default());
                *inline_len = len as u8;
            }
            Shared(buffer) => CowVec::unshare(buffer).resize(len, T::default()),
        }
    }

    /// Drops every element and releases the heap buffer, if any.
    pub fn clear(&mut self) {
        *self = CowVec::new();
    }
}

impl<T: Copy + Default> Index<usize> for CowVec<T> {
    type Output = T;

    fn index(&self, i: usize) -> &T {
        &self.as_slice()[i]
    }
}

impl<T: Copy + Default> IndexMut<usize> for CowVec<T> {
    fn index_mut(&mut self, i: usize) -> &mut T {
        self.get_mut(i)
    }
}

impl<'a, T: Copy + Default> IntoIterator for &'a CowVec<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Copy + Default + PartialEq> PartialEq for CowVec<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Copy + Default + Eq> Eq for CowVec<T> {}

impl<T: Copy + Default + Hash> Hash for CowVec<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<T: Copy + Default + Debug> Debug for CowVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}
