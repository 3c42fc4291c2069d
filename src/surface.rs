use std::sync::Arc;

use kurbo::{BezPath, Point, Rect};

use crate::{
    geom::{Mesh, PointMode, Region, RoundRect},
    image::{Image, Lattice},
    paint::{BlendMode, Color, FilterMode, Paint},
};

/// How a clip shape combines with the current clip.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ClipOp {
    Difference,
    Intersect,
}

/// Destination rendering target for playback.
///
/// Implementations own the save/restore stack: each save-family call pushes a
/// restorable state, each `restore` pops exactly one. The playback engine
/// issues calls in sequence order and never validates balance; an unbalanced
/// sequence surfaces through the implementation's own contract.
///
/// `clip_path` is always antialiased. Sub-pictures need no method here: a
/// recorded sub-list replays by recursing into playback on the same surface.
pub trait Surface {
    fn save(&mut self);
    fn save_layer(&mut self, bounds: Option<Rect>, paint: Option<&Paint>);
    fn save_behind(&mut self, bounds: Rect);
    fn restore(&mut self);

    fn clip_rect(&mut self, rect: Rect, op: ClipOp);
    fn clip_path(&mut self, path: &BezPath, op: ClipOp);

    fn draw_rect(&mut self, rect: Rect, paint: &Paint);
    fn draw_oval(&mut self, oval: Rect, paint: &Paint);
    fn draw_circle(&mut self, cx: f64, cy: f64, radius: f64, paint: &Paint);
    fn draw_round_rect(&mut self, round_rect: RoundRect, paint: &Paint);
    fn draw_double_round_rect(&mut self, outer: RoundRect, inner: RoundRect, paint: &Paint);
    fn draw_arc(
        &mut self,
        oval: Rect,
        start_deg: f64,
        sweep_deg: f64,
        use_center: bool,
        paint: &Paint,
    );
    fn draw_path(&mut self, path: &BezPath, paint: &Paint);
    fn draw_line(&mut self, p0: Point, p1: Point, paint: &Paint);
    fn draw_points(&mut self, mode: PointMode, points: &[Point], paint: &Paint);
    fn draw_color(&mut self, color: Color, blend: BlendMode);
    fn draw_paint(&mut self, paint: &Paint);
    fn draw_region(&mut self, region: &Region, paint: &Paint);

    fn draw_image(&mut self, image: &Arc<Image>, left: f64, top: f64, filter: FilterMode, paint: &Paint);
    fn draw_image_rect(
        &mut self,
        image: &Arc<Image>,
        src: Rect,
        dst: Rect,
        filter: FilterMode,
        paint: &Paint,
    );
    fn draw_image_lattice(
        &mut self,
        image: &Arc<Image>,
        lattice: &Lattice,
        dst: Rect,
        filter: FilterMode,
        paint: &Paint,
    );
    fn draw_mesh(&mut self, mesh: &Arc<Mesh>, blend: BlendMode, paint: &Paint);
}
