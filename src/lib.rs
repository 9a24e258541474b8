//! # block-deque
//!
//! A value-semantic double-ended sequence container backed by an unrolled
//! linked list: a doubly linked list of bounded-capacity blocks, each a
//! small double-ended ring.
//!
//! `BlockDeque` sits between a contiguous array and a plain linked list.
//! A contiguous sequence pays O(n) to insert or erase anywhere but the
//! ends; a linked list pays a pointer chase per element. Splitting the
//! sequence into blocks of at most `CAP` elements bounds the shift cost of
//! a positional insert/erase to one block and the cost of locating an
//! index to a walk over whole blocks, while push/pop at either end stay
//! O(1) amortized.
//!
//! ## Key Features
//!
//! * **Bounded blocks:** internal blocks always hold `1..=CAP` elements;
//!   an insertion into a full block splits it locally, a shrinking
//!   operation re-merges around the block it touched. Rebalancing never
//!   rescans the list.
//! * **Ring blocks:** every block is a double-ended ring, so `push_front`
//!   and `pop_front` are O(1) without any privileged first-block layout.
//! * **Checked cursors:** positions are plain `Copy` [`Cursor`] values
//!   carrying the owning container's id and the target block's generation.
//!   A cursor whose block has been destroyed, split or merged away, or
//!   one used with the wrong container, reports
//!   [`Error::InvalidCursor`] instead of touching the wrong element.
//! * **Value semantics:** `Clone` deep-copies block by block; clones are
//!   fully independent, including cursor identity.
//!
//! ## Example
//!
//! ```rust
//! use block_deque::BlockDeque;
//!
//! let mut deque: BlockDeque<i32, 8> = BlockDeque::new();
//! for v in 1..=5 {
//!     deque.push_back(v);
//! }
//! deque.push_front(0);
//! assert_eq!(deque.len(), 6);
//! assert_eq!(deque.front(), Ok(&0));
//! assert_eq!(deque.back(), Ok(&5));
//!
//! // Positional insert through a cursor; the cursor comes back re-anchored.
//! let pos = deque.cursor_at(3).unwrap();
//! let inserted = deque.insert(pos, 99).unwrap();
//! assert_eq!(deque.get_at(inserted), Ok(&99));
//! assert_eq!(deque.iter().copied().collect::<Vec<_>>(), vec![0, 1, 2, 99, 3, 4, 5]);
//!
//! // Erase returns the successor position.
//! let successor = deque.erase(inserted).unwrap();
//! assert_eq!(deque.get_at(successor), Ok(&3));
//! ```
//!
//! ## Cursor validity
//!
//! ```rust
//! use block_deque::{BlockDeque, Error};
//!
//! let mut deque: BlockDeque<i32, 4> = (0..5).collect();
//! let held = deque.cursor_at(4).unwrap();
//!
//! // Erasing in the first block lets its neighbor merge away; the held
//! // cursor's block is gone and the cursor reports it.
//! deque.erase(deque.begin()).unwrap();
//! assert_eq!(deque.get_at(held), Err(Error::InvalidCursor));
//!
//! // Cursors never cross containers.
//! let other: BlockDeque<i32, 4> = (0..5).collect();
//! assert_eq!(deque.distance(deque.begin(), other.begin()), Err(Error::InvalidCursor));
//! ```
//!
//! ## Choosing `CAP`
//!
//! The block capacity is a compile-time tuning knob: larger blocks mean
//! fewer blocks to walk on random access but longer in-block shifts on
//! positional insert/erase. The default of 256 is a practical middle
//! ground; sizes near the square root of the expected length are the
//! asymptotic sweet spot.

// --- Module Declarations ---

mod arena;
mod block;
mod cursor;
mod deque;
mod error;
mod list;

// --- Re-exports ---

pub use cursor::Cursor;
pub use deque::{BlockDeque, IntoIter, Iter};
pub use error::Error;
