use kurbo::{Point, Rect};

use crate::{
    error::{EncoreError, EncoreResult},
    paint::Color,
};

/// How a point set passed to `Surface::draw_points` is interpreted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum PointMode {
    /// Each point is drawn individually.
    Points,
    /// Consecutive pairs form independent line segments.
    Lines,
}

/// Rounded rectangle with a single x/y corner radius pair.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RoundRect {
    pub rect: Rect,
    pub rx: f64,
    pub ry: f64,
}

impl RoundRect {
    pub const fn new(rect: Rect, rx: f64, ry: f64) -> Self {
        Self { rect, rx, ry }
    }
}

/// Ordered set of axis-aligned rectangles.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Region {
    rects: Vec<Rect>,
}

impl Region {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rects(rects: Vec<Rect>) -> Self {
        Self { rects }
    }

    pub fn rects(&self) -> &[Rect] {
        &self.rects
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    /// Union of all member rectangles, or `None` for an empty region.
    pub fn bounds(&self) -> Option<Rect> {
        let mut iter = self.rects.iter();
        let first = *iter.next()?;
        Some(iter.fold(first, |acc, r| acc.union(*r)))
    }
}

/// Triangle mesh with optional per-vertex colors and optional indices.
///
/// Without indices, every consecutive triple of positions forms a triangle.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Mesh {
    positions: Vec<Point>,
    colors: Option<Vec<Color>>,
    indices: Option<Vec<u16>>,
}

impl Mesh {
    pub fn new(
        positions: Vec<Point>,
        colors: Option<Vec<Color>>,
        indices: Option<Vec<u16>>,
    ) -> EncoreResult<Self> {
        if let Some(colors) = &colors
            && colors.len() != positions.len()
        {
            return Err(EncoreError::validation(format!(
                "mesh has {} positions but {} colors",
                positions.len(),
                colors.len()
            )));
        }
        match &indices {
            Some(indices) => {
                if indices.len() % 3 != 0 {
                    return Err(EncoreError::validation(
                        "mesh index count must be a multiple of 3",
                    ));
                }
                if let Some(&bad) = indices.iter().find(|&&i| usize::from(i) >= positions.len()) {
                    return Err(EncoreError::validation(format!(
                        "mesh index {bad} is out of range for {} positions",
                        positions.len()
                    )));
                }
            }
            None => {
                if positions.len() % 3 != 0 {
                    return Err(EncoreError::validation(
                        "unindexed mesh position count must be a multiple of 3",
                    ));
                }
            }
        }
        Ok(Self {
            positions,
            colors,
            indices,
        })
    }

    pub fn positions(&self) -> &[Point] {
        &self.positions
    }

    pub fn colors(&self) -> Option<&[Color]> {
        self.colors.as_deref()
    }

    pub fn indices(&self) -> Option<&[u16]> {
        self.indices.as_deref()
    }

    pub fn triangle_count(&self) -> usize {
        match &self.indices {
            Some(indices) => indices.len() / 3,
            None => self.positions.len() / 3,
        }
    }
}
