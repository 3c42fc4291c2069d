//! Deferred canvas-op recording and playback.
//!
//! Drawing instructions are captured as immutable typed records in a
//! [`DisplayList`] and replayed later, in order, against any [`Surface`]
//! implementation. Records that reference [`PropertyCell`]s resolve the
//! current cell values at playback time, so externally animated geometry and
//! paints change visual output without re-recording the sequence.
#![forbid(unsafe_code)]

pub mod error;
pub mod geom;
pub mod image;
pub mod list;
pub mod ops;
pub mod paint;
pub mod property;
mod ripple;
pub mod shader;
pub mod surface;

pub use error::{EncoreError, EncoreResult};
pub use geom::{Mesh, PointMode, Region, RoundRect};
pub use image::{Image, Lattice};
pub use list::DisplayList;
pub use ops::{CanvasOp, Drawable, OpKind};
pub use paint::{BlendMode, Color, FilterMode, Paint, PaintStyle, StrokeCap, StrokeJoin};
pub use property::{PaintCell, PropertyCell, ValueCell};
pub use shader::{Shader, ShaderBuilder, ShaderEffect, UniformSlot, UniformType, UniformValue};
pub use surface::{ClipOp, Surface};
