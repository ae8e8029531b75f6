use super::{Point3, Vector3};

/// Tests whether the quadrilateral `a-b-c-d` is convex.
///
/// The four points are assumed coplanar and listed in boundary order. A quad is
/// convex exactly when its two diagonals intersect, i.e. diagonal `BD`
/// separates `A` from `C` and diagonal `AC` separates `B` from `D`.
///
/// Edge and diagonal vectors are normalized before the cross products so the
/// sign tests are not dominated by one long edge. A zero-length edge or
/// diagonal makes the quad non-convex.
#[must_use]
pub fn is_convex_quad(a: &Point3, b: &Point3, c: &Point3, d: &Point3) -> bool {
    let Some(bd) = unit(b, d) else { return false };
    let Some(ba) = unit(b, a) else { return false };
    let Some(bc) = unit(b, c) else { return false };

    let bda = bd.cross(&ba);
    let bdc = bd.cross(&bc);
    if bda.dot(&bdc) >= 0.0 {
        return false;
    }

    let Some(ac) = unit(a, c) else { return false };
    let Some(ad) = unit(a, d) else { return false };
    let Some(ab) = unit(a, b) else { return false };

    let acd = ac.cross(&ad);
    let acb = ac.cross(&ab);
    acd.dot(&acb) < 0.0
}

fn unit(from: &Point3, to: &Point3) -> Option<Vector3> {
    (to - from).try_normalize(0.0)
}
