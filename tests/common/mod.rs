use std::sync::Arc;

use encore::{
    BlendMode, ClipOp, Color, FilterMode, Image, Lattice, Mesh, Paint, PointMode, Region,
    RoundRect, Surface,
};
use kurbo::{BezPath, Point, Rect};

/// One primitive call observed by [`TraceSurface`], with the exact arguments
/// it was invoked with.
#[derive(Clone, Debug, PartialEq)]
pub enum SurfaceCall {
    Save,
    SaveLayer {
        bounds: Option<Rect>,
        paint: Option<Paint>,
    },
    SaveBehind {
        bounds: Rect,
    },
    Restore,
    ClipRect {
        rect: Rect,
        op: ClipOp,
    },
    ClipPath {
        path: BezPath,
        op: ClipOp,
    },
    DrawRect {
        rect: Rect,
        paint: Paint,
    },
    DrawOval {
        oval: Rect,
        paint: Paint,
    },
    DrawCircle {
        cx: f64,
        cy: f64,
        radius: f64,
        paint: Paint,
    },
    DrawRoundRect {
        round_rect: RoundRect,
        paint: Paint,
    },
    DrawDoubleRoundRect {
        outer: RoundRect,
        inner: RoundRect,
        paint: Paint,
    },
    DrawArc {
        oval: Rect,
        start_deg: f64,
        sweep_deg: f64,
        use_center: bool,
        paint: Paint,
    },
    DrawPath {
        path: BezPath,
        paint: Paint,
    },
    DrawLine {
        p0: Point,
        p1: Point,
        paint: Paint,
    },
    DrawPoints {
        mode: PointMode,
        points: Vec<Point>,
        paint: Paint,
    },
    DrawColor {
        color: Color,
        blend: BlendMode,
    },
    DrawPaint {
        paint: Paint,
    },
    DrawRegion {
        region: Region,
        paint: Paint,
    },
    DrawImage {
        image: Arc<Image>,
        left: f64,
        top: f64,
        filter: FilterMode,
        paint: Paint,
    },
    DrawImageRect {
        image: Arc<Image>,
        src: Rect,
        dst: Rect,
        filter: FilterMode,
        paint: Paint,
    },
    DrawImageLattice {
        image: Arc<Image>,
        lattice: Lattice,
        dst: Rect,
        filter: FilterMode,
        paint: Paint,
    },
    DrawMesh {
        mesh: Arc<Mesh>,
        blend: BlendMode,
        paint: Paint,
    },
}

/// Install a subscriber so playback spans show up in test output.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::TRACE)
        .try_init();
}

/// Surface implementation that records every primitive call in order.
#[derive(Debug, Default)]
pub struct TraceSurface {
    pub calls: Vec<SurfaceCall>,
}

impl TraceSurface {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Surface for TraceSurface {
    fn save(&mut self) {
        self.calls.push(SurfaceCall::Save);
    }

    fn save_layer(&mut self, bounds: Option<Rect>, paint: Option<&Paint>) {
        self.calls.push(SurfaceCall::SaveLayer {
            bounds,
            paint: paint.cloned(),
        });
    }

    fn save_behind(&mut self, bounds: Rect) {
        self.calls.push(SurfaceCall::SaveBehind { bounds });
    }

    fn restore(&mut self) {
        self.calls.push(SurfaceCall::Restore);
    }

    fn clip_rect(&mut self, rect: Rect, op: ClipOp) {
        self.calls.push(SurfaceCall::ClipRect { rect, op });
    }

    fn clip_path(&mut self, path: &BezPath, op: ClipOp) {
        self.calls.push(SurfaceCall::ClipPath {
            path: path.clone(),
            op,
        });
    }

    fn draw_rect(&mut self, rect: Rect, paint: &Paint) {
        self.calls.push(SurfaceCall::DrawRect {
            rect,
            paint: paint.clone(),
        });
    }

    fn draw_oval(&mut self, oval: Rect, paint: &Paint) {
        self.calls.push(SurfaceCall::DrawOval {
            oval,
            paint: paint.clone(),
        });
    }

    fn draw_circle(&mut self, cx: f64, cy: f64, radius: f64, paint: &Paint) {
        self.calls.push(SurfaceCall::DrawCircle {
            cx,
            cy,
            radius,
            paint: paint.clone(),
        });
    }

    fn draw_round_rect(&mut self, round_rect: RoundRect, paint: &Paint) {
        self.calls.push(SurfaceCall::DrawRoundRect {
            round_rect,
            paint: paint.clone(),
        });
    }

    fn draw_double_round_rect(&mut self, outer: RoundRect, inner: RoundRect, paint: &Paint) {
        self.calls.push(SurfaceCall::DrawDoubleRoundRect {
            outer,
            inner,
            paint: paint.clone(),
        });
    }

    fn draw_arc(
        &mut self,
        oval: Rect,
        start_deg: f64,
        sweep_deg: f64,
        use_center: bool,
        paint: &Paint,
    ) {
        self.calls.push(SurfaceCall::DrawArc {
            oval,
            start_deg,
            sweep_deg,
            use_center,
            paint: paint.clone(),
        });
    }

    fn draw_path(&mut self, path: &BezPath, paint: &Paint) {
        self.calls.push(SurfaceCall::DrawPath {
            path: path.clone(),
            paint: paint.clone(),
        });
    }

    fn draw_line(&mut self, p0: Point, p1: Point, paint: &Paint) {
        self.calls.push(SurfaceCall::DrawLine {
            p0,
            p1,
            paint: paint.clone(),
        });
    }

    fn draw_points(&mut self, mode: PointMode, points: &[Point], paint: &Paint) {
        self.calls.push(SurfaceCall::DrawPoints {
            mode,
            points: points.to_vec(),
            paint: paint.clone(),
        });
    }

    fn draw_color(&mut self, color: Color, blend: BlendMode) {
        self.calls.push(SurfaceCall::DrawColor { color, blend });
    }

    fn draw_paint(&mut self, paint: &Paint) {
        self.calls.push(SurfaceCall::DrawPaint {
            paint: paint.clone(),
        });
    }

    fn draw_region(&mut self, region: &Region, paint: &Paint) {
        self.calls.push(SurfaceCall::DrawRegion {
            region: region.clone(),
            paint: paint.clone(),
        });
    }

    fn draw_image(
        &mut self,
        image: &Arc<Image>,
        left: f64,
        top: f64,
        filter: FilterMode,
        paint: &Paint,
    ) {
        self.calls.push(SurfaceCall::DrawImage {
            image: Arc::clone(image),
            left,
            top,
            filter,
            paint: paint.clone(),
        });
    }

    fn draw_image_rect(
        &mut self,
        image: &Arc<Image>,
        src: Rect,
        dst: Rect,
        filter: FilterMode,
        paint: &Paint,
    ) {
        self.calls.push(SurfaceCall::DrawImageRect {
            image: Arc::clone(image),
            src,
            dst,
            filter,
            paint: paint.clone(),
        });
    }

    fn draw_image_lattice(
        &mut self,
        image: &Arc<Image>,
        lattice: &Lattice,
        dst: Rect,
        filter: FilterMode,
        paint: &Paint,
    ) {
        self.calls.push(SurfaceCall::DrawImageLattice {
            image: Arc::clone(image),
            lattice: lattice.clone(),
            dst,
            filter,
            paint: paint.clone(),
        });
    }

    fn draw_mesh(&mut self, mesh: &Arc<Mesh>, blend: BlendMode, paint: &Paint) {
        self.calls.push(SurfaceCall::DrawMesh {
            mesh: Arc::clone(mesh),
            blend,
            paint: paint.clone(),
        });
    }
}
