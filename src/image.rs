use kurbo::Rect;

use crate::error::{EncoreError, EncoreResult};

/// Pre-decoded raster resource: premultiplied RGBA8 pixels.
///
/// Decoding is a collaborator's concern; records hold images behind `Arc` and
/// only read them at playback time.
#[derive(Clone, PartialEq, Eq)]
pub struct Image {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Image {
    pub fn from_premul_rgba8(width: u32, height: u32, pixels: Vec<u8>) -> EncoreResult<Self> {
        if width == 0 || height == 0 {
            return Err(EncoreError::resource("image dimensions must be > 0"));
        }
        let expected = u64::from(width) * u64::from(height) * 4;
        if pixels.len() as u64 != expected {
            return Err(EncoreError::resource(format!(
                "image buffer is {} bytes, expected {expected} for {width}x{height} rgba8",
                pixels.len()
            )));
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }
}

impl std::fmt::Debug for Image {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Image")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("bytes", &self.pixels.len())
            .finish()
    }
}

/// Grid divisions for nine-patch style image scaling.
///
/// `x_divs`/`y_divs` split the source into stretchable and fixed cells;
/// `bounds` optionally restricts the source area.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Lattice {
    pub x_divs: Vec<u32>,
    pub y_divs: Vec<u32>,
    pub bounds: Option<Rect>,
}

impl Lattice {
    pub fn new(x_divs: Vec<u32>, y_divs: Vec<u32>) -> Self {
        Self {
            x_divs,
            y_divs,
            bounds: None,
        }
    }

    /// Check the divisions against the dimensions of the image this lattice
    /// will be applied to.
    pub fn validate(&self, width: u32, height: u32) -> EncoreResult<()> {
        check_divs("x", &self.x_divs, width)?;
        check_divs("y", &self.y_divs, height)?;
        if let Some(bounds) = self.bounds {
            let image = Rect::new(0.0, 0.0, f64::from(width), f64::from(height));
            if bounds.union(image) != image {
                return Err(EncoreError::validation(
                    "lattice bounds exceed the image rect",
                ));
            }
        }
        Ok(())
    }
}

fn check_divs(axis: &str, divs: &[u32], limit: u32) -> EncoreResult<()> {
    if !divs.windows(2).all(|w| w[0] < w[1]) {
        return Err(EncoreError::validation(format!(
            "lattice {axis}_divs must be strictly increasing"
        )));
    }
    if let Some(&last) = divs.last()
        && last >= limit
    {
        return Err(EncoreError::validation(format!(
            "lattice {axis}_div {last} is outside the image (limit {limit})"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_rejects_wrong_buffer_length() {
        assert!(Image::from_premul_rgba8(2, 2, vec![0; 15]).is_err());
        assert!(Image::from_premul_rgba8(0, 2, vec![]).is_err());
        assert!(Image::from_premul_rgba8(2, 2, vec![0; 16]).is_ok());
    }

    #[test]
    fn lattice_rejects_unsorted_or_out_of_range_divs() {
        assert!(Lattice::new(vec![4, 2], vec![]).validate(8, 8).is_err());
        assert!(Lattice::new(vec![2, 9], vec![]).validate(8, 8).is_err());
        assert!(Lattice::new(vec![2, 4], vec![1, 7]).validate(8, 8).is_ok());
    }

    #[test]
    fn lattice_rejects_bounds_outside_image() {
        let mut lattice = Lattice::new(vec![], vec![]);
        lattice.bounds = Some(Rect::new(0.0, 0.0, 9.0, 4.0));
        assert!(lattice.validate(8, 8).is_err());
        lattice.bounds = Some(Rect::new(1.0, 1.0, 7.0, 7.0));
        assert!(lattice.validate(8, 8).is_ok());
    }
}
