//! Small generic vector math.
//!
//! This crate provides 2-, 3- and 4-component vectors ([`Vector2`], [`Vector3`], [`Vector4`])
//! over [`i32`], [`f32`] and [`f64`] elements, plus a few [angle helpers](angle).
//!
//! # Goals & Non-Goals
//!
//! - Vectors are plain [`Copy`] values. All three arities share one const-generic
//!   [`Vector<T, N>`] type, so the operator set only exists once.
//! - The element type is restricted to the [`Element`] types. Other types are rejected at compile
//!   time.
//! - Operations never panic on mathematically undefined input. Division by zero and out-of-range
//!   reads produce the [`Element::NAN`] sentinel, normalizing a zero-length vector produces the
//!   zero vector. Events like these are reported through the [`log`] facade. Writing through an
//!   out-of-range index panics like array indexing does; [`Vector::get_mut`] is the checked
//!   alternative.
//! - No matrices, quaternions or dynamically-sized vectors.
//!
//! # Features
//!
//! - `bytemuck` (default): implements [`bytemuck::Pod`] and [`bytemuck::Zeroable`] for vectors.
//! - `approx` (default): implements the [`approx`] comparison traits for vectors.

pub mod angle;
mod axis;
mod error;
mod traits;
mod vector;

pub use axis::*;
pub use error::*;
pub use traits::*;
pub use vector::*;
