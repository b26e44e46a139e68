//! Crossing oracle for candidate edges of the abstract graph.
//!
//! Contact rules (exact orientation signs, no tolerance):
//! 1. A zero-length segment never crosses anything.
//! 2. Collinear segments cross iff their overlap has positive length.
//! 3. Otherwise, segments sharing an endpoint do not cross.
//! 4. A strict sign change on both segments is a crossing.
//! 5. Any remaining contact (an endpoint touching the other segment) is not.

use nalgebra::{Matrix2, Vector2};

use crate::graph::Graph;

/// Signed area of the parallelogram spanned by `a` and `b`.
///
/// Positive for a→b counterclockwise, negative otherwise.
#[inline]
pub fn parallelogram_area(a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    Matrix2::from_columns(&[a, b]).determinant()
}

/// Sign of the turn `p → q → r`.
#[inline]
fn orient(p: Vector2<f64>, q: Vector2<f64>, r: Vector2<f64>) -> f64 {
    parallelogram_area(q - p, r - p)
}

/// Overlap length of collinear segments `ab` and `cd`, measured along `ab`.
fn collinear_overlap(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>, d: Vector2<f64>) -> f64 {
    let dir = b - a;
    let len2 = dir.norm_squared();
    let t = |p: Vector2<f64>| (p - a).dot(&dir) / len2;
    let (tc, td) = (t(c), t(d));
    let lo = tc.min(td).max(0.0);
    let hi = tc.max(td).min(1.0);
    hi - lo
}

/// True iff segment `ab` crosses segment `cd` under the contact rules above.
pub fn segments_cross(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>, d: Vector2<f64>) -> bool {
    if a == b || c == d {
        return false;
    }
    let o1 = orient(a, b, c);
    let o2 = orient(a, b, d);
    let o3 = orient(c, d, a);
    let o4 = orient(c, d, b);
    if o1 == 0.0 && o2 == 0.0 {
        return collinear_overlap(a, b, c, d) > 0.0;
    }
    if a == c || a == d || b == c || b == d {
        return false;
    }
    o1 * o2 < 0.0 && o3 * o4 < 0.0
}

/// True iff segment `ab` crosses any edge of `graph` (by vertex coordinates).
///
/// O(ecount) scan; pure.
pub fn crosses_any(graph: &Graph, a: Vector2<f64>, b: Vector2<f64>) -> bool {
    (0..graph.ecount()).any(|e| {
        let (c, d) = graph.segment(e);
        segments_cross(a, b, c, d)
    })
}
