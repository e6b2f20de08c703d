//! Report rendering surfaces.
//!
//! Each renderer walks the fixed block sequence of a
//! [`Report`](crate::model::Report) top to bottom and returns the finished
//! document as a `String`. Rendering is pure: the same report always
//! produces byte-identical output.

pub mod html;
pub mod svg;
pub mod text;
