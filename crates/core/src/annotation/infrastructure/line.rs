use crate::shared::point::Point;

/// Clips the segment `a`-`b` to the rectangle `[0, max_x] x [0, max_y]`
/// (Liang-Barsky). Returns `None` when no part of it is inside.
///
/// Endpoints already inside the rectangle are returned unchanged.
pub fn clip_segment(
    a: (f64, f64),
    b: (f64, f64),
    max_x: f64,
    max_y: f64,
) -> Option<((f64, f64), (f64, f64))> {
    let (dx, dy) = (b.0 - a.0, b.1 - a.1);
    let p = [-dx, dx, -dy, dy];
    let q = [a.0, max_x - a.0, a.1, max_y - a.1];

    let mut t0: f64 = 0.0;
    let mut t1: f64 = 1.0;
    for (p, q) in p.into_iter().zip(q) {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            if r > t1 {
                return None;
            }
            t0 = t0.max(r);
        } else {
            if r < t0 {
                return None;
            }
            t1 = t1.min(r);
        }
    }

    let start = if t0 > 0.0 {
        (a.0 + t0 * dx, a.1 + t0 * dy)
    } else {
        a
    };
    let end = if t1 < 1.0 {
        (a.0 + t1 * dx, a.1 + t1 * dy)
    } else {
        b
    };
    Some((start, end))
}

/// Pixels of a straight line, both endpoints included (Bresenham).
pub struct LinePixels {
    x: i64,
    y: i64,
    x1: i64,
    y1: i64,
    dx: i64,
    dy: i64,
    sx: i64,
    sy: i64,
    err: i64,
    done: bool,
}

impl LinePixels {
    pub fn new(from: (i64, i64), to: (i64, i64)) -> Self {
        let dx = (to.0 - from.0).abs();
        let dy = -(to.1 - from.1).abs();
        Self {
            x: from.0,
            y: from.1,
            x1: to.0,
            y1: to.1,
            dx,
            dy,
            sx: if from.0 < to.0 { 1 } else { -1 },
            sy: if from.1 < to.1 { 1 } else { -1 },
            err: dx + dy,
            done: false,
        }
    }
}

impl Iterator for LinePixels {
    type Item = (i64, i64);

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let current = (self.x, self.y);
        if self.x == self.x1 && self.y == self.y1 {
            self.done = true;
            return Some(current);
        }
        let e2 = 2 * self.err;
        if e2 >= self.dy {
            self.err += self.dy;
            self.x += self.sx;
        }
        if e2 <= self.dx {
            self.err += self.dx;
            self.y += self.sy;
        }
        Some(current)
    }
}

/// Pixels of the segment `a`-`b` that fall on a `width` x `height` canvas.
pub fn clipped_line(a: Point, b: Point, width: u32, height: u32) -> Option<LinePixels> {
    if width == 0 || height == 0 {
        return None;
    }
    let (start, end) = clip_segment(
        (a.x as f64, a.y as f64),
        (b.x as f64, b.y as f64),
        (width - 1) as f64,
        (height - 1) as f64,
    )?;
    let round = |p: (f64, f64)| (p.0.round() as i64, p.1.round() as i64);
    Some(LinePixels::new(round(start), round(end)))
}
