//! Slot allocator that backs the nodes of a tree.

use std::mem;
use std::ops::{Index, IndexMut};

/// Number of slots per chunk used when no chunk size is given.
pub const DEFAULT_CHUNK_SIZE: usize = 1024;

/// A copyable reference to a slot in a `TypedArena<T>`.
///
/// A handle is only meaningful for the arena that produced it. Handles are compared by slot, so
/// two handles are equal exactly when they name the same slot.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Handle(usize);

impl Handle {
    /// Returns the position of the slot in allocation order.
    pub fn slot(self) -> usize {
        self.0
    }
}

enum Block<T> {
    Occupied(T),
    Vacant(Option<Handle>),
}

/// An allocator for a single type of object that hands out `Handle`s instead of references.
///
/// Objects are stored in chunks of a fixed size, so growing the arena never moves objects that
/// are already allocated. Freed slots are threaded onto a free list and are reused by later
/// allocations before a new chunk is requested. All objects are dropped with the arena.
///
/// # Examples
///
/// ```
/// use rb_collections::arena::TypedArena;
///
/// let mut arena = TypedArena::new(1024);
///
/// let x = arena.allocate(1);
/// assert_eq!(arena[x], 1);
///
/// arena[x] += 1;
/// assert_eq!(arena[x], 2);
///
/// assert_eq!(arena.free(&x), 2);
/// assert!(arena.is_empty());
/// ```
pub struct TypedArena<T> {
    head: Option<Handle>,
    chunks: Vec<Vec<Block<T>>>,
    chunk_size: usize,
    len: usize,
    slots: usize,
}

impl<T> TypedArena<T> {
    fn locate(&self, handle: Handle) -> Option<(usize, usize)> {
        let chunk_index = handle.0 / self.chunk_size;
        let block_index = handle.0 % self.chunk_size;
        if chunk_index < self.chunks.len() && block_index < self.chunks[chunk_index].len() {
            Some((chunk_index, block_index))
        } else {
            None
        }
    }

    /// Constructs a new, empty `TypedArena<T>` that holds `chunk_size` objects per chunk.
    ///
    /// # Panics
    ///
    /// Panics if `chunk_size` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use rb_collections::arena::TypedArena;
    ///
    /// let arena: TypedArena<u32> = TypedArena::new(64);
    /// assert_eq!(arena.chunk_size(), 64);
    /// ```
    pub fn new(chunk_size: usize) -> Self {
        assert!(chunk_size > 0, "Error: chunk size must be positive.");
        TypedArena {
            head: None,
            chunks: Vec::new(),
            chunk_size,
            len: 0,
            slots: 0,
        }
    }

    /// Returns the number of objects per chunk.
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Returns the number of live objects in the arena.
    ///
    /// # Examples
    ///
    /// ```
    /// use rb_collections::arena::TypedArena;
    ///
    /// let mut arena = TypedArena::new(16);
    /// arena.allocate('a');
    /// assert_eq!(arena.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the arena holds no live objects.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Moves `value` into the arena and returns the handle of its slot. A previously freed slot
    /// is reused if one exists.
    ///
    /// # Examples
    ///
    /// ```
    /// use rb_collections::arena::TypedArena;
    ///
    /// let mut arena = TypedArena::new(16);
    /// let x = arena.allocate(0);
    /// assert_eq!(arena.get(&x), Some(&0));
    /// ```
    pub fn allocate(&mut self, value: T) -> Handle {
        self.allocate_with(|_| value)
    }

    /// Allocates a slot and fills it with the value returned by `f`, which receives the handle of
    /// the slot being filled. Useful for objects that refer to themselves.
    ///
    /// # Examples
    ///
    /// ```
    /// use rb_collections::arena::TypedArena;
    ///
    /// let mut arena = TypedArena::new(16);
    /// let x = arena.allocate_with(|handle| handle);
    /// assert_eq!(arena[x], x);
    /// ```
    pub fn allocate_with<F>(&mut self, f: F) -> Handle
    where
        F: FnOnce(Handle) -> T,
    {
        self.len += 1;

        match self.head.take() {
            None => {
                if self.slots == self.chunks.len() * self.chunk_size {
                    self.chunks.push(Vec::with_capacity(self.chunk_size));
                }
                let handle = Handle(self.slots);
                self.slots += 1;
                let last = self.chunks.len() - 1;
                self.chunks[last].push(Block::Occupied(f(handle)));
                handle
            },
            Some(handle) => {
                let (chunk_index, block_index) =
                    self.locate(handle).expect("Expected free list to hold valid handles.");
                let vacant_block = mem::replace(
                    &mut self.chunks[chunk_index][block_index],
                    Block::Occupied(f(handle)),
                );
                match vacant_block {
                    Block::Vacant(next) => self.head = next,
                    Block::Occupied(_) => panic!("Expected a vacant block on the free list."),
                }
                handle
            },
        }
    }

    /// Removes the object in a slot and returns it. The slot is pushed onto the free list.
    ///
    /// # Panics
    ///
    /// Panics if `handle` does not name an occupied slot.
    ///
    /// # Examples
    ///
    /// ```
    /// use rb_collections::arena::TypedArena;
    ///
    /// let mut arena = TypedArena::new(16);
    /// let x = arena.allocate(0);
    /// assert_eq!(arena.free(&x), 0);
    /// assert_eq!(arena.get(&x), None);
    /// ```
    pub fn free(&mut self, handle: &Handle) -> T {
        let (chunk_index, block_index) = match self.locate(*handle) {
            Some(position) => position,
            None => panic!("Error: attempting to free invalid block."),
        };
        let block = &mut self.chunks[chunk_index][block_index];
        if let Block::Vacant(_) = block {
            panic!("Error: attempting to free vacant block.");
        }
        match mem::replace(block, Block::Vacant(self.head.take())) {
            Block::Occupied(value) => {
                self.len -= 1;
                self.head = Some(*handle);
                value
            },
            Block::Vacant(_) => unreachable!(),
        }
    }

    /// Returns an immutable reference to the object in a slot, or `None` if the handle is out of
    /// range or the slot is vacant.
    pub fn get(&self, handle: &Handle) -> Option<&T> {
        let (chunk_index, block_index) = self.locate(*handle)?;
        match self.chunks[chunk_index][block_index] {
            Block::Occupied(ref value) => Some(value),
            Block::Vacant(_) => None,
        }
    }

    /// Returns a mutable reference to the object in a slot, or `None` if the handle is out of
    /// range or the slot is vacant.
    pub fn get_mut(&mut self, handle: &Handle) -> Option<&mut T> {
        let (chunk_index, block_index) = self.locate(*handle)?;
        match self.chunks[chunk_index][block_index] {
            Block::Occupied(ref mut value) => Some(value),
            Block::Vacant(_) => None,
        }
    }
}

impl<T> Index<Handle> for TypedArena<T> {
    type Output = T;

    fn index(&self, handle: Handle) -> &Self::Output {
        self.get(&handle).expect("Error: handle out of bounds.")
    }
}

impl<T> IndexMut<Handle> for TypedArena<T> {
    fn index_mut(&mut self, handle: Handle) -> &mut Self::Output {
        self.get_mut(&handle).expect("Error: handle out of bounds.")
    }
}
