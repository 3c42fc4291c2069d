//! The closed catalog of canvas operations.
//!
//! Each record captures the exact immutable arguments of one drawing call.
//! Playable records implement [`Drawable`]; the `assert_drawable!` block below
//! is the compile-time registry of that capability, so a record claiming to be
//! playable without the right method shape fails the build. The grouping
//! markers and the layer/node kinds carry no playback method: they are
//! consumed by an outer tree walker, and the direct playback loop skips them.

use std::sync::Arc;

use kurbo::{BezPath, Point, Rect};

use crate::{
    geom::{Mesh, PointMode, Region, RoundRect},
    image::{Image, Lattice},
    list::DisplayList,
    paint::{BlendMode, Color, FilterMode, Paint},
    property::{PaintCell, ValueCell},
    ripple,
    shader::{ShaderBuilder, ShaderEffect},
    surface::{ClipOp, Surface},
};

/// Playback contract: reissue the captured call against a surface.
///
/// This one shape is the only thing the playback engine relies on.
pub trait Drawable {
    fn draw(&self, surface: &mut dyn Surface);
}

/// Tag identifying which record shape a [`CanvasOp`] holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OpKind {
    Save,
    SaveLayer,
    SaveBehind,
    Restore,
    BeginGroup,
    EndGroup,
    ClipRect,
    ClipPath,
    DrawRect,
    DrawOval,
    DrawCircle,
    DrawRoundRect,
    DrawDoubleRoundRect,
    DrawArc,
    DrawPath,
    DrawLine,
    DrawPoint,
    DrawPoints,
    DrawLines,
    DrawMesh,
    DrawColor,
    DrawPaint,
    DrawRegion,
    DrawImage,
    DrawImageRect,
    DrawImageLattice,
    DrawPicture,
    DrawLayer,
    DrawRenderNode,
    DrawRoundRectProperty,
    DrawCircleProperty,
    DrawRipple,
}

// ----------------------------------------------
//   State records
// ----------------------------------------------

#[derive(Clone, Copy, Debug, Default)]
pub struct Save;

impl Drawable for Save {
    fn draw(&self, surface: &mut dyn Surface) {
        surface.save();
    }
}

#[derive(Clone, Debug, Default)]
pub struct SaveLayer {
    pub bounds: Option<Rect>,
    pub paint: Option<Paint>,
}

impl Drawable for SaveLayer {
    fn draw(&self, surface: &mut dyn Surface) {
        surface.save_layer(self.bounds, self.paint.as_ref());
    }
}

#[derive(Clone, Copy, Debug)]
pub struct SaveBehind {
    pub bounds: Rect,
}

impl Drawable for SaveBehind {
    fn draw(&self, surface: &mut dyn Surface) {
        surface.save_behind(self.bounds);
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct Restore;

impl Drawable for Restore {
    fn draw(&self, surface: &mut dyn Surface) {
        surface.restore();
    }
}

// ----------------------------------------------
//   Clip records
// ----------------------------------------------

#[derive(Clone, Copy, Debug)]
pub struct ClipRect {
    pub rect: Rect,
    pub op: ClipOp,
}

impl Drawable for ClipRect {
    fn draw(&self, surface: &mut dyn Surface) {
        surface.clip_rect(self.rect, self.op);
    }
}

#[derive(Clone, Debug)]
pub struct ClipPath {
    pub path: BezPath,
    pub op: ClipOp,
}

impl Drawable for ClipPath {
    fn draw(&self, surface: &mut dyn Surface) {
        surface.clip_path(&self.path, self.op);
    }
}

// ----------------------------------------------
//   Draw records
// ----------------------------------------------

#[derive(Clone, Debug)]
pub struct DrawRect {
    pub rect: Rect,
    pub paint: Paint,
}

impl Drawable for DrawRect {
    fn draw(&self, surface: &mut dyn Surface) {
        surface.draw_rect(self.rect, &self.paint);
    }
}

#[derive(Clone, Debug)]
pub struct DrawOval {
    pub oval: Rect,
    pub paint: Paint,
}

impl Drawable for DrawOval {
    fn draw(&self, surface: &mut dyn Surface) {
        surface.draw_oval(self.oval, &self.paint);
    }
}

#[derive(Clone, Debug)]
pub struct DrawCircle {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    pub paint: Paint,
}

impl Drawable for DrawCircle {
    fn draw(&self, surface: &mut dyn Surface) {
        surface.draw_circle(self.cx, self.cy, self.radius, &self.paint);
    }
}

#[derive(Clone, Debug)]
pub struct DrawRoundRect {
    pub round_rect: RoundRect,
    pub paint: Paint,
}

impl Drawable for DrawRoundRect {
    fn draw(&self, surface: &mut dyn Surface) {
        surface.draw_round_rect(self.round_rect, &self.paint);
    }
}

#[derive(Clone, Debug)]
pub struct DrawDoubleRoundRect {
    pub outer: RoundRect,
    pub inner: RoundRect,
    pub paint: Paint,
}

impl Drawable for DrawDoubleRoundRect {
    fn draw(&self, surface: &mut dyn Surface) {
        surface.draw_double_round_rect(self.outer, self.inner, &self.paint);
    }
}

#[derive(Clone, Debug)]
pub struct DrawArc {
    pub oval: Rect,
    pub start_deg: f64,
    pub sweep_deg: f64,
    pub use_center: bool,
    pub paint: Paint,
}

impl Drawable for DrawArc {
    fn draw(&self, surface: &mut dyn Surface) {
        surface.draw_arc(
            self.oval,
            self.start_deg,
            self.sweep_deg,
            self.use_center,
            &self.paint,
        );
    }
}

#[derive(Clone, Debug)]
pub struct DrawPath {
    pub path: BezPath,
    pub paint: Paint,
}

impl Drawable for DrawPath {
    fn draw(&self, surface: &mut dyn Surface) {
        surface.draw_path(&self.path, &self.paint);
    }
}

#[derive(Clone, Debug)]
pub struct DrawLine {
    pub p0: Point,
    pub p1: Point,
    pub paint: Paint,
}

impl Drawable for DrawLine {
    fn draw(&self, surface: &mut dyn Surface) {
        surface.draw_line(self.p0, self.p1, &self.paint);
    }
}

#[derive(Clone, Debug)]
pub struct DrawPoint {
    pub x: f64,
    pub y: f64,
    pub paint: Paint,
}

impl Drawable for DrawPoint {
    fn draw(&self, surface: &mut dyn Surface) {
        surface.draw_points(PointMode::Points, &[Point::new(self.x, self.y)], &self.paint);
    }
}

/// Point set drawn as individual points. The buffer is shared with whoever
/// recorded it.
#[derive(Clone, Debug)]
pub struct DrawPoints {
    pub points: Arc<[Point]>,
    pub paint: Paint,
}

impl Drawable for DrawPoints {
    fn draw(&self, surface: &mut dyn Surface) {
        surface.draw_points(PointMode::Points, &self.points, &self.paint);
    }
}

/// Point set drawn as independent line segments, consecutive pairs each
/// forming one segment.
#[derive(Clone, Debug)]
pub struct DrawLines {
    pub points: Arc<[Point]>,
    pub paint: Paint,
}

impl Drawable for DrawLines {
    fn draw(&self, surface: &mut dyn Surface) {
        surface.draw_points(PointMode::Lines, &self.points, &self.paint);
    }
}

#[derive(Clone, Debug)]
pub struct DrawMesh {
    pub mesh: Arc<Mesh>,
    pub blend: BlendMode,
    pub paint: Paint,
}

impl Drawable for DrawMesh {
    fn draw(&self, surface: &mut dyn Surface) {
        surface.draw_mesh(&self.mesh, self.blend, &self.paint);
    }
}

#[derive(Clone, Copy, Debug)]
pub struct DrawColor {
    pub color: Color,
    pub blend: BlendMode,
}

impl Drawable for DrawColor {
    fn draw(&self, surface: &mut dyn Surface) {
        surface.draw_color(self.color, self.blend);
    }
}

#[derive(Clone, Debug)]
pub struct DrawPaint {
    pub paint: Paint,
}

impl Drawable for DrawPaint {
    fn draw(&self, surface: &mut dyn Surface) {
        surface.draw_paint(&self.paint);
    }
}

#[derive(Clone, Debug)]
pub struct DrawRegion {
    pub region: Region,
    pub paint: Paint,
}

impl Drawable for DrawRegion {
    fn draw(&self, surface: &mut dyn Surface) {
        surface.draw_region(&self.region, &self.paint);
    }
}

#[derive(Clone, Debug)]
pub struct DrawImage {
    pub image: Arc<Image>,
    pub left: f64,
    pub top: f64,
    pub filter: FilterMode,
    pub paint: Paint,
}

impl Drawable for DrawImage {
    fn draw(&self, surface: &mut dyn Surface) {
        surface.draw_image(&self.image, self.left, self.top, self.filter, &self.paint);
    }
}

#[derive(Clone, Debug)]
pub struct DrawImageRect {
    pub image: Arc<Image>,
    pub src: Rect,
    pub dst: Rect,
    pub filter: FilterMode,
    pub paint: Paint,
}

impl Drawable for DrawImageRect {
    fn draw(&self, surface: &mut dyn Surface) {
        surface.draw_image_rect(&self.image, self.src, self.dst, self.filter, &self.paint);
    }
}

#[derive(Clone, Debug)]
pub struct DrawImageLattice {
    pub image: Arc<Image>,
    pub lattice: Lattice,
    pub dst: Rect,
    pub filter: FilterMode,
    pub paint: Paint,
}

impl Drawable for DrawImageLattice {
    fn draw(&self, surface: &mut dyn Surface) {
        surface.draw_image_lattice(&self.image, &self.lattice, self.dst, self.filter, &self.paint);
    }
}

/// Replays a recorded sub-list in place, against the same surface.
#[derive(Clone, Debug)]
pub struct DrawPicture {
    pub picture: Arc<DisplayList>,
}

impl Drawable for DrawPicture {
    fn draw(&self, surface: &mut dyn Surface) {
        self.picture.playback(surface);
    }
}

// ----------------------------------------------
//   Tree records (no playback method)
// ----------------------------------------------

/// Handle to an externally composited layer. The record keeps the layer alive
/// through playback; drawing it requires tree context the direct loop does
/// not have.
#[derive(Debug)]
pub struct LayerHandle {
    pub width: u32,
    pub height: u32,
}

#[derive(Clone, Debug)]
pub struct DrawLayer {
    pub layer: Arc<LayerHandle>,
}

/// Handle to a node in the retained render tree, resolved by the outer tree
/// walker.
#[derive(Debug)]
pub struct RenderNodeHandle {
    pub id: u64,
}

#[derive(Clone, Debug)]
pub struct DrawRenderNode {
    pub node: Arc<RenderNodeHandle>,
}

// ----------------------------------------------
//   Property-bound draw records
// ----------------------------------------------

/// Rounded rectangle whose geometry and paint track externally animated
/// cells. Cell values are read at playback time, not at record time.
#[derive(Clone, Debug)]
pub struct DrawRoundRectProperty {
    pub left: ValueCell,
    pub top: ValueCell,
    pub right: ValueCell,
    pub bottom: ValueCell,
    pub rx: ValueCell,
    pub ry: ValueCell,
    pub paint: PaintCell,
}

impl Drawable for DrawRoundRectProperty {
    fn draw(&self, surface: &mut dyn Surface) {
        let rect = Rect::new(
            f64::from(self.left.get()),
            f64::from(self.top.get()),
            f64::from(self.right.get()),
            f64::from(self.bottom.get()),
        );
        let round_rect = RoundRect::new(rect, f64::from(self.rx.get()), f64::from(self.ry.get()));
        surface.draw_round_rect(round_rect, &self.paint.get());
    }
}

/// Circle whose center, radius, and paint track externally animated cells.
#[derive(Clone, Debug)]
pub struct DrawCircleProperty {
    pub x: ValueCell,
    pub y: ValueCell,
    pub radius: ValueCell,
    pub paint: PaintCell,
}

impl Drawable for DrawCircleProperty {
    fn draw(&self, surface: &mut dyn Surface) {
        surface.draw_circle(
            f64::from(self.x.get()),
            f64::from(self.y.get()),
            f64::from(self.radius.get()),
            &self.paint.get(),
        );
    }
}

/// Procedural ripple: derives the effect's uniform set from the current cell
/// values, attaches the built shader to the paint, and draws a single filled
/// circle with the resolved center and radius.
#[derive(Clone, Debug)]
pub struct DrawRipple {
    pub x: ValueCell,
    pub y: ValueCell,
    pub radius: ValueCell,
    pub progress: ValueCell,
    pub turbulence_phase: ValueCell,
    pub paint: PaintCell,
    pub effect: Arc<ShaderEffect>,
}

impl Drawable for DrawRipple {
    fn draw(&self, surface: &mut dyn Surface) {
        let x = self.x.get();
        let y = self.y.get();
        let radius = self.radius.get();

        let mut builder = ShaderBuilder::new(Arc::clone(&self.effect));
        ripple::bind_uniforms(
            &mut builder,
            x,
            y,
            radius,
            self.progress.get(),
            self.turbulence_phase.get(),
        );

        let mut paint = self.paint.get();
        paint.shader = Some(builder.build());
        surface.draw_circle(f64::from(x), f64::from(y), f64::from(radius), &paint);
    }
}

// Compile-time registry of playable record shapes. Removing a `Drawable`
// impl, or changing its signature away from the trait, fails this block.
macro_rules! assert_drawable {
    ($($op:ty),+ $(,)?) => {
        const _: () = {
            const fn assert_drawable<T: Drawable>() {}
            $(assert_drawable::<$op>();)+
        };
    };
}

assert_drawable!(
    Save,
    SaveLayer,
    SaveBehind,
    Restore,
    ClipRect,
    ClipPath,
    DrawRect,
    DrawOval,
    DrawCircle,
    DrawRoundRect,
    DrawDoubleRoundRect,
    DrawArc,
    DrawPath,
    DrawLine,
    DrawPoint,
    DrawPoints,
    DrawLines,
    DrawMesh,
    DrawColor,
    DrawPaint,
    DrawRegion,
    DrawImage,
    DrawImageRect,
    DrawImageLattice,
    DrawPicture,
    DrawRoundRectProperty,
    DrawCircleProperty,
    DrawRipple,
);

/// One recorded canvas operation: the closed sum over every record shape.
#[derive(Clone, Debug)]
pub enum CanvasOp {
    Save(Save),
    SaveLayer(SaveLayer),
    SaveBehind(SaveBehind),
    Restore(Restore),
    /// Grouping marker, consumed by the outer tree walker.
    BeginGroup,
    /// Grouping marker, consumed by the outer tree walker.
    EndGroup,
    ClipRect(ClipRect),
    ClipPath(ClipPath),
    DrawRect(DrawRect),
    DrawOval(DrawOval),
    DrawCircle(DrawCircle),
    DrawRoundRect(DrawRoundRect),
    DrawDoubleRoundRect(DrawDoubleRoundRect),
    DrawArc(DrawArc),
    DrawPath(DrawPath),
    DrawLine(DrawLine),
    DrawPoint(DrawPoint),
    DrawPoints(DrawPoints),
    DrawLines(DrawLines),
    DrawMesh(DrawMesh),
    DrawColor(DrawColor),
    DrawPaint(DrawPaint),
    DrawRegion(DrawRegion),
    DrawImage(DrawImage),
    DrawImageRect(DrawImageRect),
    DrawImageLattice(DrawImageLattice),
    DrawPicture(DrawPicture),
    DrawLayer(DrawLayer),
    DrawRenderNode(DrawRenderNode),
    DrawRoundRectProperty(DrawRoundRectProperty),
    DrawCircleProperty(DrawCircleProperty),
    DrawRipple(DrawRipple),
}

impl CanvasOp {
    pub fn kind(&self) -> OpKind {
        match self {
            Self::Save(_) => OpKind::Save,
            Self::SaveLayer(_) => OpKind::SaveLayer,
            Self::SaveBehind(_) => OpKind::SaveBehind,
            Self::Restore(_) => OpKind::Restore,
            Self::BeginGroup => OpKind::BeginGroup,
            Self::EndGroup => OpKind::EndGroup,
            Self::ClipRect(_) => OpKind::ClipRect,
            Self::ClipPath(_) => OpKind::ClipPath,
            Self::DrawRect(_) => OpKind::DrawRect,
            Self::DrawOval(_) => OpKind::DrawOval,
            Self::DrawCircle(_) => OpKind::DrawCircle,
            Self::DrawRoundRect(_) => OpKind::DrawRoundRect,
            Self::DrawDoubleRoundRect(_) => OpKind::DrawDoubleRoundRect,
            Self::DrawArc(_) => OpKind::DrawArc,
            Self::DrawPath(_) => OpKind::DrawPath,
            Self::DrawLine(_) => OpKind::DrawLine,
            Self::DrawPoint(_) => OpKind::DrawPoint,
            Self::DrawPoints(_) => OpKind::DrawPoints,
            Self::DrawLines(_) => OpKind::DrawLines,
            Self::DrawMesh(_) => OpKind::DrawMesh,
            Self::DrawColor(_) => OpKind::DrawColor,
            Self::DrawPaint(_) => OpKind::DrawPaint,
            Self::DrawRegion(_) => OpKind::DrawRegion,
            Self::DrawImage(_) => OpKind::DrawImage,
            Self::DrawImageRect(_) => OpKind::DrawImageRect,
            Self::DrawImageLattice(_) => OpKind::DrawImageLattice,
            Self::DrawPicture(_) => OpKind::DrawPicture,
            Self::DrawLayer(_) => OpKind::DrawLayer,
            Self::DrawRenderNode(_) => OpKind::DrawRenderNode,
            Self::DrawRoundRectProperty(_) => OpKind::DrawRoundRectProperty,
            Self::DrawCircleProperty(_) => OpKind::DrawCircleProperty,
            Self::DrawRipple(_) => OpKind::DrawRipple,
        }
    }

    /// The record's playback view, or `None` for the kinds the direct loop
    /// skips (grouping markers, layers, render nodes).
    pub fn as_drawable(&self) -> Option<&dyn Drawable> {
        match self {
            Self::Save(op) => Some(op),
            Self::SaveLayer(op) => Some(op),
            Self::SaveBehind(op) => Some(op),
            Self::Restore(op) => Some(op),
            Self::BeginGroup | Self::EndGroup => None,
            Self::ClipRect(op) => Some(op),
            Self::ClipPath(op) => Some(op),
            Self::DrawRect(op) => Some(op),
            Self::DrawOval(op) => Some(op),
            Self::DrawCircle(op) => Some(op),
            Self::DrawRoundRect(op) => Some(op),
            Self::DrawDoubleRoundRect(op) => Some(op),
            Self::DrawArc(op) => Some(op),
            Self::DrawPath(op) => Some(op),
            Self::DrawLine(op) => Some(op),
            Self::DrawPoint(op) => Some(op),
            Self::DrawPoints(op) => Some(op),
            Self::DrawLines(op) => Some(op),
            Self::DrawMesh(op) => Some(op),
            Self::DrawColor(op) => Some(op),
            Self::DrawPaint(op) => Some(op),
            Self::DrawRegion(op) => Some(op),
            Self::DrawImage(op) => Some(op),
            Self::DrawImageRect(op) => Some(op),
            Self::DrawImageLattice(op) => Some(op),
            Self::DrawPicture(op) => Some(op),
            Self::DrawLayer(_) | Self::DrawRenderNode(_) => None,
            Self::DrawRoundRectProperty(op) => Some(op),
            Self::DrawCircleProperty(op) => Some(op),
            Self::DrawRipple(op) => Some(op),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_matches_variant() {
        let op = CanvasOp::DrawCircle(DrawCircle {
            cx: 1.0,
            cy: 2.0,
            radius: 3.0,
            paint: Paint::default(),
        });
        assert_eq!(op.kind(), OpKind::DrawCircle);
        assert_eq!(CanvasOp::BeginGroup.kind(), OpKind::BeginGroup);
    }

    #[test]
    fn markers_and_tree_kinds_are_not_drawable() {
        assert!(CanvasOp::BeginGroup.as_drawable().is_none());
        assert!(CanvasOp::EndGroup.as_drawable().is_none());
        let layer = CanvasOp::DrawLayer(DrawLayer {
            layer: Arc::new(LayerHandle {
                width: 16,
                height: 16,
            }),
        });
        assert!(layer.as_drawable().is_none());
        let node = CanvasOp::DrawRenderNode(DrawRenderNode {
            node: Arc::new(RenderNodeHandle { id: 7 }),
        });
        assert!(node.as_drawable().is_none());
    }

    #[test]
    fn state_ops_are_drawable() {
        assert!(CanvasOp::Save(Save).as_drawable().is_some());
        assert!(CanvasOp::Restore(Restore).as_drawable().is_some());
    }
}
