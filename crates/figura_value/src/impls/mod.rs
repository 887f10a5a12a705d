//! Provide [`Typed`] and [`Literal`] implementations, and utilities for
//! writing them.
//!
//! - [`TypeDescCell`]: Used to implement [`Typed`] for non-generic types.
//! - [`GenericTypeDescCell`]: Used to implement [`Typed`] for generic types.
//! - [`Complex64`], [`Complex128`]: complex numbers.
//!
//! ## Implemented Menu
//!
//! | Rust | declared type |
//! |------|---------------|
//! | `bool` | `bool` |
//! | `i8`-`i64`, `isize` | `int8`-`int64`, `int` |
//! | `u8`-`u64`, `usize` | `uint8`-`uint64`, `uint` |
//! | `f32`, `f64` | `float32`, `float64` |
//! | [`Complex64`], [`Complex128`] | `complex64`, `complex128` |
//! | `char` | `int32` (a rune, rendered as its codepoint) |
//! | `str`, `String`, `Cow<'static, str>` | `string` |
//! | `()` | `struct{}` |
//! | [`Value`](crate::Value) | `interface{}` (the value keeps its own type) |
//! | `[T; N]` | `[N]T` |
//! | `[T]`, `Vec<T>`, `VecDeque<T>` | `[]T` |
//! | `HashMap<K, V>` (std and hashbrown), `BTreeMap<K, V>` | `map[K]V` |
//! | `HashSet<T>` (std and hashbrown), `BTreeSet<T>` | `map[T]struct{}` |
//! | `Box<T>`, `Rc<T>`, `Arc<T>`, `Option<T>` | `*T` (`None` is a nil reference) |
//! | `chrono::DateTime<Tz>`, `NaiveDateTime` | `time.Time` (opaque, `chrono` feature) |
//!
//! [`Typed`]: crate::info::Typed
//! [`Literal`]: crate::Literal

// -----------------------------------------------------------------------------
// Modules

mod cell;
mod collections;
mod complex;
mod pointer;
mod primitive;

#[cfg(feature = "chrono")]
mod date_time;

// -----------------------------------------------------------------------------
// Exports

pub use cell::{GenericTypeDescCell, TypeDescCell};
pub use complex::{Complex64, Complex128};

#[cfg(feature = "chrono")]
pub use date_time::TIME_PATH;
