//! SVG rendering of an instance and its selection.
//!
//! Every input point becomes an unfilled circle of the instance radius;
//! unselected ones are drawn first in `other_color`, selected ones on top in
//! `chosen_color`. The bounding box grown by one radius on each side is scaled
//! into an `image_size` square with the Y axis flipped (Y-up to Y-down).

use std::collections::BTreeSet;
use std::fmt::Write as _;

use disks::geom::Point;
use nalgebra::Vector2;

use crate::instance::Instance;

/// Rendering options.
#[derive(Clone, Copy, Debug)]
pub struct SvgCfg {
    /// Side length of the target square in pixels.
    pub image_size: u32,
    pub stroke_width: f64,
    pub other_color: &'static str,
    pub chosen_color: &'static str,
}

impl Default for SvgCfg {
    fn default() -> Self {
        Self {
            image_size: 1000,
            stroke_width: 2.0,
            other_color: "black",
            chosen_color: "blue",
        }
    }
}

/// Affine map from instance coordinates to image pixels.
struct Frame {
    origin: Vector2<f64>, // (min x - r, max y + r)
    scale: f64,           // pixels per unit length
}

impl Frame {
    fn fit(points: &[Vector2<f64>], radius: f64, image_size: u32) -> (Self, Vector2<f64>) {
        let (mut lo, mut hi) = match points.first() {
            Some(&p) => (p, p),
            None => (Vector2::zeros(), Vector2::zeros()),
        };
        for p in points {
            lo = lo.inf(p);
            hi = hi.sup(p);
        }
        let pad = Vector2::repeat(radius);
        let (lo, hi) = (lo - pad, hi + pad);
        let extent = (hi - lo).max();
        let side = image_size as f64;
        let (scale, canvas) = if extent > 0.0 {
            (side / extent, (hi - lo) / extent * side)
        } else {
            (1.0, Vector2::zeros())
        };
        let frame = Frame {
            origin: Vector2::new(lo.x, hi.y),
            scale,
        };
        (frame, canvas)
    }

    fn map(&self, p: Vector2<f64>) -> Vector2<f64> {
        Vector2::new(p.x - self.origin.x, self.origin.y - p.y) * self.scale
    }
}

/// Render `instance` with `selection` highlighted.
pub fn svg(instance: &Instance, selection: &[Point], cfg: SvgCfg) -> String {
    let unit = instance.unit;
    let radius = instance.radius as f64 * unit;
    let reals: Vec<Vector2<f64>> = instance.points.iter().map(|p| p.to_real(unit)).collect();
    let (frame, canvas) = Frame::fit(&reals, radius, cfg.image_size);
    let r_px = radius * frame.scale;
    let chosen: BTreeSet<Point> = selection.iter().copied().collect();

    let mut out = String::new();
    let _ = writeln!(out, r#"<?xml version="1.0" encoding="utf-8"?>"#);
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" version="1.1" width="{}" height="{}">"#,
        canvas.x, canvas.y
    );
    let others = instance
        .points
        .iter()
        .zip(&reals)
        .filter(|(p, _)| !chosen.contains(*p));
    for (_, &v) in others {
        circle(&mut out, frame.map(v), v, r_px, cfg.other_color, cfg.stroke_width);
    }
    for p in selection {
        let v = p.to_real(unit);
        circle(&mut out, frame.map(v), v, r_px, cfg.chosen_color, cfg.stroke_width);
    }
    let _ = writeln!(out, "</svg>");
    out
}

fn circle(out: &mut String, at: Vector2<f64>, label: Vector2<f64>, r: f64, color: &str, width: f64) {
    let _ = writeln!(
        out,
        r#" <circle stroke="{color}" fill="none" stroke-width="{width}" cx="{}" cy="{}" r="{r}">"#,
        at.x, at.y
    );
    let _ = writeln!(out, "  <title>({},{})</title>", label.x, label.y);
    let _ = writeln!(out, " </circle>");
}
