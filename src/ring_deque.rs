//! A [`RingDeque`] is a double-ended queue backed by a circular buffer whose length is always a power of two.
//! Indices wrap with a bitmask instead of a modulo, and the buffer doubles on the insert that would otherwise fill it,
//! so a deque whose head meets its tail is always empty, never full.

use crate::settings::{capacity_for, DropBehavior, FrontToBack, MIN_CAPACITY};
use std::alloc::Layout;
use std::fmt::Debug;
use std::marker::PhantomData;
use std::ops::{Index, IndexMut};
use std::ptr::{self, NonNull};

/// A double-ended queue with amortized O(1) pushes and pops at both ends and O(1) access by logical index.
///
/// The backing buffer starts at [`MIN_CAPACITY`] slots and doubles whenever an insert would leave it completely full.
/// Growing lays the elements out again from slot 0, so their logical order never changes.
/// References handed out by [`get`](RingDeque::get), [`front`](RingDeque::front) and friends borrow the deque,
/// which keeps them from outliving the next mutation.
///
/// # Examples
/// ```
/// use ring_deque::RingDeque;
/// let mut deque = RingDeque::new();
/// deque.push_back(2);
/// deque.push_front(1);
/// deque.push_back(3);
/// assert_eq!(deque.to_vec(), vec![1, 2, 3]);
/// ```
///
/// # Drop Order
/// The default drop order is front-to-back, meaning that elements are dropped in the same order as iteration would happen.
/// This can be changed to back-to-front by using the [`BackToFront`](crate::BackToFront) drop order.
///
/// # Concurrency
/// There is no internal locking. Sharing a deque across threads for mutation needs an external lock.
pub struct RingDeque<T, DropOrder = FrontToBack>
where
    DropOrder: DropBehavior,
{
    ptr: NonNull<T>,
    head: usize,
    tail: usize,
    mask: usize,
    _marker: PhantomData<(T, DropOrder)>,
}

unsafe impl<T: Send, DropOrder: DropBehavior> Send for RingDeque<T, DropOrder> {}
unsafe impl<T: Sync, DropOrder: DropBehavior> Sync for RingDeque<T, DropOrder> {}

impl<T: Debug, DropOrder: DropBehavior> Debug for RingDeque<T, DropOrder> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> RingDeque<T, FrontToBack> {
    /// Creates a new, empty `RingDeque` with [`MIN_CAPACITY`] slots.
    ///
    /// # Examples
    /// ```
    /// # use ring_deque::RingDeque;
    /// let deque: RingDeque<i32> = RingDeque::new();
    /// assert!(deque.is_empty());
    /// assert_eq!(deque.capacity(), 16);
    /// ```
    pub fn new() -> Self {
        Self::with_backing(MIN_CAPACITY)
    }

    /// Creates a new, empty `RingDeque` that can hold at least `hint` elements before it has to grow.
    ///
    /// The backing length is the smallest power of two strictly greater than `hint`, and never less than [`MIN_CAPACITY`].
    /// A hint of 0 or 1 therefore still yields 16 slots.
    ///
    /// # Panics
    /// Panics if the rounded capacity overflows `usize` or the allocation size exceeds `isize::MAX`.
    ///
    /// # Examples
    /// ```
    /// # use ring_deque::RingDeque;
    /// assert_eq!(RingDeque::<u8>::with_capacity(0).capacity(), 16);
    /// assert_eq!(RingDeque::<u8>::with_capacity(16).capacity(), 32);
    /// assert_eq!(RingDeque::<u8>::with_capacity(100).capacity(), 128);
    /// ```
    pub fn with_capacity(hint: usize) -> Self {
        Self::with_backing(capacity_for(hint))
    }

    /// Creates a new, empty `RingDeque` with a specified drop order.
    ///
    /// # Examples
    /// ```
    /// # use ring_deque::{BackToFront, RingDeque};
    /// let mut deque = RingDeque::new_with_drop_order::<BackToFront>();
    /// deque.push_back(1);
    /// deque.push_back(2);
    /// assert_eq!(deque.to_vec(), vec![1, 2]);
    /// ```
    pub fn new_with_drop_order<D>() -> RingDeque<T, D>
    where
        D: DropBehavior,
    {
        RingDeque::with_backing(MIN_CAPACITY)
    }
}

impl<T, DropOrder> RingDeque<T, DropOrder>
where
    DropOrder: DropBehavior,
{
    /// Changes the drop order of the `RingDeque` without touching its buffer.
    pub fn with_drop_order<D>(self) -> RingDeque<T, D>
    where
        D: DropBehavior,
    {
        let this = std::mem::ManuallyDrop::new(self);
        RingDeque {
            ptr: this.ptr,
            head: this.head,
            tail: this.tail,
            mask: this.mask,
            _marker: PhantomData,
        }
    }

    // `cap` must already be a power of two.
    fn with_backing(cap: usize) -> Self {
        debug_assert!(cap.is_power_of_two());
        RingDeque {
            ptr: Self::allocate(cap),
            head: 0,
            tail: 0,
            mask: cap - 1,
            _marker: PhantomData,
        }
    }

    fn allocate(cap: usize) -> NonNull<T> {
        let layout = match Layout::array::<T>(cap) {
            Ok(layout) => layout,
            Err(_) => panic!("capacity overflow"),
        };
        if layout.size() == 0 {
            // zero-sized elements never touch the allocator
            return NonNull::dangling();
        }
        let ptr = unsafe { std::alloc::alloc(layout) };
        match NonNull::new(ptr as *mut T) {
            Some(p) => p,
            None => std::alloc::handle_alloc_error(layout),
        }
    }

    /// # Safety
    /// `ptr` must have come from [`Self::allocate`] with the same `cap`, and every live element must already be moved out.
    unsafe fn deallocate(ptr: NonNull<T>, cap: usize) {
        if let Ok(layout) = Layout::array::<T>(cap) {
            if layout.size() != 0 {
                std::alloc::dealloc(ptr.as_ptr() as *mut u8, layout);
            }
        }
    }

    // Swaps in a new buffer, moving the cursors and the mask together.
    fn replace_buffer(&mut self, ptr: NonNull<T>, cap: usize, len: usize) {
        self.ptr = ptr;
        self.mask = cap - 1;
        self.head = 0;
        self.tail = len;
    }

    /// # Safety
    /// `idx` must be less than the capacity.
    #[inline]
    unsafe fn slot(&self, idx: usize) -> *mut T {
        debug_assert!(idx <= self.mask);
        self.ptr.as_ptr().add(idx)
    }

    #[inline]
    fn wrap_add(&self, idx: usize, n: usize) -> usize {
        idx.wrapping_add(n) & self.mask
    }

    #[inline]
    fn wrap_sub(&self, idx: usize, n: usize) -> usize {
        idx.wrapping_sub(n) & self.mask
    }

    // Only called right after an insert made `head == tail`, i.e. every slot holds a live element.
    // The two runs `[head, cap)` and `[0, head)` are copied, in that order, to the start of a buffer twice as long.
    fn grow(&mut self) {
        debug_assert_eq!(self.head, self.tail);
        let old_cap = self.capacity();
        let new_cap = match old_cap.checked_mul(2) {
            Some(cap) => cap,
            None => panic!("capacity overflow"),
        };
        let new_ptr = Self::allocate(new_cap);

        let head_len = old_cap - self.head;
        unsafe {
            ptr::copy_nonoverlapping(self.slot(self.head), new_ptr.as_ptr(), head_len);
            ptr::copy_nonoverlapping(self.slot(0), new_ptr.as_ptr().add(head_len), self.head);
            Self::deallocate(self.ptr, old_cap);
        }
        self.replace_buffer(new_ptr, new_cap, old_cap);

        log::trace!("ring deque grew from {} to {} slots", old_cap, new_cap);
    }

    /// Appends an element to the back of the `RingDeque`, growing the buffer if this fills it.
    ///
    /// # Examples
    /// ```
    /// # use ring_deque::RingDeque;
    /// let mut deque: RingDeque<i32> = RingDeque::from([42, 10]);
    /// deque.push_back(100);
    /// assert_eq!(deque.pop_back(), Some(100));
    /// ```
    #[inline]
    pub fn push_back(&mut self, elem: T) {
        unsafe {
            ptr::write(self.slot(self.tail), elem);
        }
        self.tail = self.wrap_add(self.tail, 1);
        if self.tail == self.head {
            self.grow();
        }
    }

    /// Prepends an element to the front of the `RingDeque`, growing the buffer if this fills it.
    ///
    /// # Examples
    /// ```
    /// # use ring_deque::RingDeque;
    /// let mut deque: RingDeque<i32> = RingDeque::from([42, 10]);
    /// deque.push_front(100);
    /// assert_eq!(deque.pop_front(), Some(100));
    /// ```
    #[inline]
    pub fn push_front(&mut self, elem: T) {
        self.head = self.wrap_sub(self.head, 1);
        unsafe {
            ptr::write(self.slot(self.head), elem);
        }
        if self.head == self.tail {
            self.grow();
        }
    }

    /// Removes the last element and returns it, or `None` if the `RingDeque` is empty.
    ///
    /// # Examples
    /// ```
    /// # use ring_deque::RingDeque;
    /// let mut deque: RingDeque<i32> = RingDeque::from([42, 10]);
    /// assert_eq!(deque.pop_back(), Some(10));
    /// assert_eq!(deque.pop_back(), Some(42));
    /// assert_eq!(deque.pop_back(), None);
    /// ```
    #[inline]
    pub fn pop_back(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        self.tail = self.wrap_sub(self.tail, 1);
        // the slot is outside the live range from here on, so reading moves ownership out of the buffer
        unsafe { Some(ptr::read(self.slot(self.tail))) }
    }

    /// Removes the first element and returns it, or `None` if the `RingDeque` is empty.
    ///
    /// # Examples
    /// ```
    /// # use ring_deque::RingDeque;
    /// let mut deque: RingDeque<i32> = RingDeque::from([42, 10]);
    /// assert_eq!(deque.pop_front(), Some(42));
    /// assert_eq!(deque.pop_front(), Some(10));
    /// assert_eq!(deque.pop_front(), None);
    /// ```
    #[inline]
    pub fn pop_front(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let elem = unsafe { ptr::read(self.slot(self.head)) };
        self.head = self.wrap_add(self.head, 1);
        Some(elem)
    }

    /// Returns a reference to the first element, or `None` if the `RingDeque` is empty.
    ///
    /// # Examples
    /// ```
    /// # use ring_deque::RingDeque;
    /// let mut deque = RingDeque::new();
    /// assert_eq!(deque.front(), None);
    /// deque.push_back(1);
    /// deque.push_back(2);
    /// assert_eq!(deque.front(), Some(&1));
    /// ```
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.get(0)
    }

    /// Returns a reference to the last element, or `None` if the `RingDeque` is empty.
    ///
    /// # Examples
    /// ```
    /// # use ring_deque::RingDeque;
    /// let mut deque = RingDeque::new();
    /// assert_eq!(deque.back(), None);
    /// deque.push_back(1);
    /// deque.push_back(2);
    /// assert_eq!(deque.back(), Some(&2));
    /// ```
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.get(self.len().wrapping_sub(1))
    }

    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.get_mut(0)
    }

    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        let last = self.len().wrapping_sub(1);
        self.get_mut(last)
    }

    /// Returns a reference to the element at logical `index`, where index 0 is the front.
    /// Returns `None` if `index >= len()`.
    ///
    /// # Examples
    /// ```
    /// # use ring_deque::RingDeque;
    /// let mut deque = RingDeque::from([2, 3]);
    /// deque.push_front(1);
    /// assert_eq!(deque.get(0), Some(&1));
    /// assert_eq!(deque.get(2), Some(&3));
    /// assert_eq!(deque.get(3), None);
    /// ```
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        if index < self.len() {
            unsafe { Some(&*self.slot(self.wrap_add(self.head, index))) }
        } else {
            None
        }
    }

    /// Returns a mutable reference to the element at logical `index`, or `None` if it is out of range.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index < self.len() {
            unsafe { Some(&mut *self.slot(self.wrap_add(self.head, index))) }
        } else {
            None
        }
    }

    /// Returns the number of elements in the `RingDeque`.
    ///
    /// # Examples
    /// ```
    /// # use ring_deque::RingDeque;
    /// let mut deque = RingDeque::new();
    /// deque.push_back(1);
    /// deque.push_front(0);
    /// assert_eq!(deque.len(), 2);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.tail.wrapping_sub(self.head) & self.mask
    }

    /// Returns `true` if the `RingDeque` holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head == self.tail
    }

    /// Returns the length of the backing buffer. This is always a power of two,
    /// and always strictly greater than [`len`](RingDeque::len).
    ///
    /// # Examples
    /// ```
    /// # use ring_deque::RingDeque;
    /// let mut deque = RingDeque::new();
    /// assert_eq!(deque.capacity(), 16);
    /// deque.extend(0..16);
    /// assert_eq!(deque.capacity(), 32);
    /// ```
    #[inline]
    pub fn capacity(&self) -> usize {
        self.mask + 1
    }

    /// Removes all elements, dropping them in the order given by the deque's drop order,
    /// and resets the buffer to [`MIN_CAPACITY`] slots regardless of how large it had grown.
    ///
    /// # Examples
    /// ```
    /// # use ring_deque::RingDeque;
    /// let mut deque: RingDeque<i32> = (0..100).collect();
    /// deque.clear();
    /// assert!(deque.is_empty());
    /// assert_eq!(deque.capacity(), 16);
    /// ```
    pub fn clear(&mut self) {
        self.clear_with_order(DropOrder::IS_INVERTED);
    }

    /// Like [`clear`](RingDeque::clear), but picks the drop order for this call only.
    pub fn clear_with_order(&mut self, drop_from_back: bool) {
        while (if drop_from_back {
            self.pop_back()
        } else {
            self.pop_front()
        })
        .is_some()
        {
            // drop the element
        }

        let old_cap = self.capacity();
        if old_cap == MIN_CAPACITY {
            self.head = 0;
            self.tail = 0;
            return;
        }
        let new_ptr = Self::allocate(MIN_CAPACITY);
        unsafe {
            Self::deallocate(self.ptr, old_cap);
        }
        self.replace_buffer(new_ptr, MIN_CAPACITY, 0);
        log::trace!("ring deque cleared, released {} slots", old_cap);
    }

    /// Appends every element of `items` to the back, in order.
    ///
    /// # Examples
    /// ```
    /// # use ring_deque::RingDeque;
    /// let mut deque = RingDeque::from([1]);
    /// deque.push_all([2, 3]);
    /// assert_eq!(deque.to_vec(), vec![1, 2, 3]);
    /// ```
    pub fn push_all<I: IntoIterator<Item = T>>(&mut self, items: I) {
        for item in items {
            self.push_back(item);
        }
    }

    /// Returns the contents as two slices, the first starting at the front.
    /// The second slice is empty unless the live range wraps past the end of the buffer.
    ///
    /// # Examples
    /// ```
    /// # use ring_deque::RingDeque;
    /// let mut deque = RingDeque::new();
    /// deque.push_back(2);
    /// deque.push_front(1);
    /// assert_eq!(deque.as_slices(), (&[1][..], &[2][..]));
    /// ```
    pub fn as_slices(&self) -> (&[T], &[T]) {
        unsafe {
            if self.head <= self.tail {
                (
                    std::slice::from_raw_parts(self.slot(self.head), self.tail - self.head),
                    &[],
                )
            } else {
                (
                    std::slice::from_raw_parts(self.slot(self.head), self.capacity() - self.head),
                    std::slice::from_raw_parts(self.slot(0), self.tail),
                )
            }
        }
    }

    /// Mutable counterpart of [`as_slices`](RingDeque::as_slices).
    pub fn as_mut_slices(&mut self) -> (&mut [T], &mut [T]) {
        unsafe {
            if self.head <= self.tail {
                (
                    std::slice::from_raw_parts_mut(self.slot(self.head), self.tail - self.head),
                    &mut [],
                )
            } else {
                (
                    std::slice::from_raw_parts_mut(self.slot(self.head), self.capacity() - self.head),
                    std::slice::from_raw_parts_mut(self.slot(0), self.tail),
                )
            }
        }
    }

    /// Returns a front-to-back iterator over references to the elements.
    ///
    /// # Examples
    /// ```
    /// # use ring_deque::RingDeque;
    /// let mut deque = RingDeque::from([2, 3]);
    /// deque.push_front(1);
    /// let doubled: Vec<i32> = deque.iter().map(|x| x * 2).collect();
    /// assert_eq!(doubled, vec![2, 4, 6]);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        let (first, second) = self.as_slices();
        Iter {
            first: first.iter(),
            second: second.iter(),
        }
    }

    /// Returns a front-to-back iterator over mutable references to the elements.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        let (first, second) = self.as_mut_slices();
        IterMut {
            first: first.iter_mut(),
            second: second.iter_mut(),
        }
    }

    /// Copies the elements, front to back, into a new `Vec`.
    /// The result is a snapshot and does not follow later changes to the deque.
    ///
    /// # Examples
    /// ```
    /// # use ring_deque::RingDeque;
    /// let mut deque = RingDeque::new();
    /// deque.push_front(1);
    /// deque.push_front(2);
    /// deque.push_front(3);
    /// assert_eq!(deque.to_vec(), vec![3, 2, 1]);
    /// ```
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}

impl<T, DropOrder: DropBehavior> Default for RingDeque<T, DropOrder> {
    fn default() -> Self {
        Self::with_backing(MIN_CAPACITY)
    }
}

impl<T, DropOrder: DropBehavior> Drop for RingDeque<T, DropOrder> {
    fn drop(&mut self) {
        while (if DropOrder::IS_INVERTED {
            self.pop_back()
        } else {
            self.pop_front()
        })
        .is_some()
        {}
        unsafe {
            Self::deallocate(self.ptr, self.capacity());
        }
    }
}

impl<T: Clone, DropOrder: DropBehavior> Clone for RingDeque<T, DropOrder> {
    // keeps the source's capacity, so cloning never grows
    fn clone(&self) -> Self {
        let mut out = Self::with_backing(self.capacity());
        for item in self.iter() {
            out.push_back(item.clone());
        }
        out
    }
}

impl<T, DropOrder: DropBehavior> Index<usize> for RingDeque<T, DropOrder> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        let len = self.len();
        match self.get(index) {
            Some(elem) => elem,
            None => panic!("index out of bounds: the len is {} but the index is {}", len, index),
        }
    }
}

impl<T, DropOrder: DropBehavior> IndexMut<usize> for RingDeque<T, DropOrder> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        let len = self.len();
        match self.get_mut(index) {
            Some(elem) => elem,
            None => panic!("index out of bounds: the len is {} but the index is {}", len, index),
        }
    }
}

/// A borrowing iterator over a [`RingDeque`], created by [`RingDeque::iter`].
pub struct Iter<'a, T> {
    first: std::slice::Iter<'a, T>,
    second: std::slice::Iter<'a, T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.first.next().or_else(|| self.second.next())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.first.len() + self.second.len();
        (len, Some(len))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.second.next_back().or_else(|| self.first.next_back())
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}
impl<'a, T> std::iter::FusedIterator for Iter<'a, T> {}

/// A mutably borrowing iterator over a [`RingDeque`], created by [`RingDeque::iter_mut`].
pub struct IterMut<'a, T> {
    first: std::slice::IterMut<'a, T>,
    second: std::slice::IterMut<'a, T>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        match self.first.next() {
            Some(elem) => Some(elem),
            None => self.second.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.first.len() + self.second.len();
        (len, Some(len))
    }
}

impl<'a, T> DoubleEndedIterator for IterMut<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        match self.second.next_back() {
            Some(elem) => Some(elem),
            None => self.first.next_back(),
        }
    }
}

impl<'a, T> ExactSizeIterator for IterMut<'a, T> {}
impl<'a, T> std::iter::FusedIterator for IterMut<'a, T> {}

/// An iterator over the elements owned by a [`RingDeque`]. It pops them from the appropriate side as it goes,
/// and it will drop all remaining elements of the `RingDeque` when it is dropped.
pub struct IntoIter<T, DropOrder>
where
    DropOrder: DropBehavior,
{
    deque: RingDeque<T, DropOrder>,
}

impl<T, DropOrder: DropBehavior> IntoIterator for RingDeque<T, DropOrder> {
    type Item = T;
    type IntoIter = IntoIter<T, DropOrder>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter { deque: self }
    }
}

impl<'a, T, DropOrder: DropBehavior> IntoIterator for &'a RingDeque<T, DropOrder> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, DropOrder: DropBehavior> IntoIterator for &'a mut RingDeque<T, DropOrder> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T, DropOrder: DropBehavior> Iterator for IntoIter<T, DropOrder> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.deque.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.deque.len(), Some(self.deque.len()))
    }
}

impl<T, DropOrder: DropBehavior> DoubleEndedIterator for IntoIter<T, DropOrder> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.deque.pop_back()
    }
}

impl<T, DropOrder: DropBehavior> ExactSizeIterator for IntoIter<T, DropOrder> {}
impl<T, DropOrder: DropBehavior> std::iter::FusedIterator for IntoIter<T, DropOrder> {}

impl<T, DropOrder: DropBehavior> FromIterator<T> for RingDeque<T, DropOrder> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut deque = Self::with_backing(capacity_for(iter.size_hint().0));
        deque.push_all(iter);
        deque
    }
}

impl<T, DropOrder: DropBehavior> Extend<T> for RingDeque<T, DropOrder> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.push_all(iter);
    }
}

impl<T> From<Vec<T>> for RingDeque<T> {
    fn from(vec: Vec<T>) -> Self {
        vec.into_iter().collect()
    }
}

impl<T, const N: usize> From<[T; N]> for RingDeque<T> {
    fn from(array: [T; N]) -> Self {
        array.into_iter().collect()
    }
}

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
#[doc(hidden)]
pub(crate) mod serde_impls {
    use super::*;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    impl<T, DropOrder> Serialize for RingDeque<T, DropOrder>
    where
        T: Serialize,
        DropOrder: DropBehavior,
    {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_seq(self.iter())
        }
    }

    impl<'src, T, DropOrder> Deserialize<'src> for RingDeque<T, DropOrder>
    where
        T: Deserialize<'src>,
        DropOrder: DropBehavior,
    {
        fn deserialize<D: Deserializer<'src>>(deserializer: D) -> Result<Self, D::Error> {
            let vec = <Vec<T> as Deserialize<'src>>::deserialize(deserializer)?;
            Ok(RingDeque::from(vec).with_drop_order())
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_serde() {
            let input_sequences = [vec![0, 1, 2, 3, 4, 5, 6], vec![3, 2, 1], vec![], (0..40).collect()];
            for sequence in input_sequences.iter() {
                let mut deque = RingDeque::from(sequence.clone());
                // shift the live range so the serialized form has to cross the wrap point
                if let Some(first) = deque.pop_front() {
                    deque.push_back(first);
                }
                let serialized = serde_json::to_string(&deque).unwrap();
                let deserialized: RingDeque<i32> = serde_json::from_str(&serialized).unwrap();
                assert_eq!(deque.to_vec(), deserialized.to_vec());
            }
        }
    }
}
