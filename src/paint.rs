use crate::shader::Shader;

/// RGBA color with f32 components in 0..=1.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);
    pub const RED: Self = Self::new(1.0, 0.0, 0.0, 1.0);
    pub const GREEN: Self = Self::new(0.0, 1.0, 0.0, 1.0);
    pub const BLUE: Self = Self::new(0.0, 0.0, 1.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: f32::from(r) / 255.0,
            g: f32::from(g) / 255.0,
            b: f32::from(b) / 255.0,
            a: f32::from(a) / 255.0,
        }
    }

    pub const fn with_alpha(self, a: f32) -> Self {
        Self {
            r: self.r,
            g: self.g,
            b: self.b,
            a,
        }
    }
}

/// Porter-Duff style compositing mode applied by a draw call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum BlendMode {
    Clear,
    Src,
    Dst,
    #[default]
    SrcOver,
    DstOver,
    SrcIn,
    DstIn,
    SrcOut,
    DstOut,
    SrcAtop,
    DstAtop,
    Xor,
    Plus,
    Modulate,
    Screen,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum PaintStyle {
    #[default]
    Fill,
    Stroke,
    StrokeAndFill,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum StrokeCap {
    #[default]
    Butt,
    Round,
    Square,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum StrokeJoin {
    #[default]
    Miter,
    Round,
    Bevel,
}

/// Sampling mode used when a draw call reads image pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum FilterMode {
    #[default]
    Nearest,
    Linear,
}

/// Style descriptor captured by draw records.
///
/// The shader slot is a runtime resource and is not serialized; everything
/// else is plain data.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Paint {
    pub color: Color,
    pub blend: BlendMode,
    pub style: PaintStyle,
    pub stroke_width: f64,
    pub stroke_cap: StrokeCap,
    pub stroke_join: StrokeJoin,
    pub stroke_miter: f64,
    pub anti_alias: bool,
    #[serde(skip)]
    pub shader: Option<Shader>,
}

impl Default for Paint {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            blend: BlendMode::SrcOver,
            style: PaintStyle::Fill,
            stroke_width: 0.0,
            stroke_cap: StrokeCap::Butt,
            stroke_join: StrokeJoin::Miter,
            stroke_miter: 4.0,
            anti_alias: true,
            shader: None,
        }
    }
}

impl Paint {
    pub fn fill(color: Color) -> Self {
        Self {
            color,
            ..Self::default()
        }
    }

    pub fn stroke(color: Color, width: f64) -> Self {
        Self {
            color,
            style: PaintStyle::Stroke,
            stroke_width: width,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_paint_is_filled_src_over() {
        let p = Paint::default();
        assert_eq!(p.style, PaintStyle::Fill);
        assert_eq!(p.blend, BlendMode::SrcOver);
        assert_eq!(p.color, Color::BLACK);
        assert!(p.shader.is_none());
    }

    #[test]
    fn json_roundtrip_drops_shader() {
        use crate::shader::{ShaderBuilder, ShaderEffect, UniformSlot};
        use std::sync::Arc;

        let effect =
            Arc::new(ShaderEffect::with_uniforms(vec![UniformSlot::float("in_radius")]).unwrap());
        let mut paint = Paint::stroke(Color::RED, 2.0);
        paint.shader = Some(ShaderBuilder::new(effect).build());

        let s = serde_json::to_string(&paint).unwrap();
        let de: Paint = serde_json::from_str(&s).unwrap();
        assert_eq!(de.color, Color::RED);
        assert_eq!(de.style, PaintStyle::Stroke);
        assert!(de.shader.is_none());
    }

    #[test]
    fn rgba8_conversion_is_normalized() {
        let c = Color::from_rgba8(255, 0, 0, 128);
        assert_eq!(c.r, 1.0);
        assert!((c.a - 128.0 / 255.0).abs() < 1e-6);
    }
}
