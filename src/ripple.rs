//! Uniform binding for the procedural ripple effect.
//!
//! The constants and formulas here are a fixed contract shared with the
//! companion shader implementation; both must derive identical uniform values
//! from the same inputs. Do not retune them.

use crate::shader::ShaderBuilder;

const PI: f32 = std::f32::consts::PI;
const PI_ROTATE_RIGHT: f32 = PI * 0.0078125;
const PI_ROTATE_LEFT: f32 = PI * -0.0078125;
const SCALE: f32 = 1.5;

// Per-circle turbulence offsets: fixed base magnitude at a fixed phase angle.
// `cos` is not const, so these are functions over the named constants.
fn circle_x_1() -> f32 {
    0.01 * (SCALE * 0.55).cos()
}
fn circle_y_1() -> f32 {
    0.01 * (SCALE * 0.55).sin()
}
fn circle_x_2() -> f32 {
    -0.0066 * (SCALE * 0.45).cos()
}
fn circle_y_2() -> f32 {
    -0.0066 * (SCALE * 0.45).sin()
}
fn circle_x_3() -> f32 {
    -0.0066 * (SCALE * 0.35).cos()
}
fn circle_y_3() -> f32 {
    -0.0066 * (SCALE * 0.35).sin()
}

/// Write the ripple uniform set for the given resolved property values.
///
/// Slots the effect does not declare are skipped by the builder.
pub(crate) fn bind_uniforms(
    builder: &mut ShaderBuilder,
    x: f32,
    y: f32,
    radius: f32,
    progress: f32,
    turbulence_phase: f32,
) {
    builder.set_float2("in_origin", x, y);
    builder.set_float("in_radius", radius);
    builder.set_float("in_progress", progress);
    builder.set_float("in_turbulencePhase", turbulence_phase);

    let t = turbulence_phase;
    builder.set_float2(
        "in_tCircle1",
        SCALE * 0.5 + t * circle_x_1(),
        SCALE * 0.5 + t * circle_y_1(),
    );
    builder.set_float2(
        "in_tCircle2",
        SCALE * 0.2 + t * circle_x_2(),
        SCALE * 0.2 + t * circle_y_2(),
    );
    builder.set_float2(
        "in_tCircle3",
        SCALE + t * circle_x_3(),
        SCALE + t * circle_y_3(),
    );

    let rotation1 = t * PI_ROTATE_RIGHT + 1.7 * PI;
    builder.set_float2("in_tRotation1", rotation1.cos(), rotation1.sin());
    let rotation2 = t * PI_ROTATE_LEFT + 2.0 * PI;
    builder.set_float2("in_tRotation2", rotation2.cos(), rotation2.sin());
    let rotation3 = t * PI_ROTATE_RIGHT + 2.75 * PI;
    builder.set_float2("in_tRotation3", rotation3.cos(), rotation3.sin());
}
