//! Field evaluation.
//!
//! Evaluation is a pure function of `(scene, object, point)`. The only
//! allocation is the per-call buffer of operation results.

use crate::coords::Vec2;
use crate::error::EvalError;
use crate::scene::{ArgumentIndex, ArgumentKind, Object, Primitive, Scene};

/// Distance to `primitive` at `point`, with the scene's scale applied.
#[inline]
pub fn evaluate_primitive(scene: &Scene, primitive: &Primitive, point: Vec2) -> f32 {
    match scene.effective_scale() {
        Some(scale) => primitive.scaled_distance(point, scale),
        None => primitive.distance(point),
    }
}

/// Field value of `object` at `point`.
///
/// - No operations: the distance to the last primitive, or `+inf` when the
///   object has no primitives either.
/// - Otherwise operations run in index order and the last result is returned.
///
/// An `object_operation` argument reading the current or a later operation
/// yields NaN. Indices past the end of their list are an error.
pub fn evaluate_object(scene: &Scene, object: &Object, point: Vec2) -> Result<f32, EvalError> {
    if object.operations.is_empty() {
        return Ok(object
            .primitives
            .last()
            .map_or(f32::INFINITY, |primitive| evaluate_primitive(scene, primitive, point)));
    }

    let mut results = vec![f32::NAN; object.operations.len()];

    for index in 0..object.operations.len() {
        let value = object.operations[index]
            .apply(|arg| resolve(scene, object, &results, arg, point))?;
        results[index] = value;
    }

    Ok(results[results.len() - 1])
}

fn resolve(
    scene: &Scene,
    object: &Object,
    results: &[f32],
    arg: ArgumentIndex,
    point: Vec2,
) -> Result<f32, EvalError> {
    let index = arg.value as usize;
    match arg.kind {
        ArgumentKind::ObjectPrimitive => object
            .primitives
            .get(index)
            .map(|primitive| evaluate_primitive(scene, primitive, point))
            .ok_or(EvalError::ObjectPrimitiveOutOfBounds {
                index: arg.value,
                len: object.primitives.len(),
            }),
        ArgumentKind::ScenePrimitive => scene
            .primitives
            .get(index)
            .map(|primitive| evaluate_primitive(scene, primitive, point))
            .ok_or(EvalError::ScenePrimitiveOutOfBounds {
                index: arg.value,
                len: scene.primitives.len(),
            }),
        ArgumentKind::ObjectOperation => results.get(index).copied().ok_or(
            EvalError::OperationOutOfBounds {
                index: arg.value,
                len: results.len(),
            },
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Circle, Plane};
    use crate::scene::Operation;

    const EPS: f32 = 1e-5;

    fn approx(a: f32, b: f32) -> bool { (a - b).abs() <= EPS }

    fn eval(scene: &Scene, object: &Object, x: f32, y: f32) -> f32 {
        evaluate_object(scene, object, Vec2::new(x, y)).unwrap()
    }

    /// 32x32 square at (16, 16)..(48, 48) with a radius 12 hole at its center.
    fn square_with_hole() -> Object {
        let mut object = Object::new();
        let left = object.push_primitive(Plane::from_point_and_normal(Vec2::new(16.0, 16.0), Vec2::new(-1.0, 0.0)));
        let top = object.push_primitive(Plane::from_point_and_normal(Vec2::new(16.0, 16.0), Vec2::new(0.0, -1.0)));
        let right = object.push_primitive(Plane::from_point_and_normal(Vec2::new(48.0, 48.0), Vec2::new(1.0, 0.0)));
        let bottom = object.push_primitive(Plane::from_point_and_normal(Vec2::new(48.0, 48.0), Vec2::new(0.0, 1.0)));
        let hole = object.push_primitive(Circle::new(Vec2::new(32.0, 32.0), 12.0));

        let a = object.max(left, top);
        let b = object.max(right, bottom);
        let square = object.max(a, b);
        object.subtract(square, hole);
        object
    }

    // ── empty objects ─────────────────────────────────────────────────────

    #[test]
    fn empty_object_is_infinite() {
        let scene = Scene::new();
        let object = Object::new();
        for (x, y) in [(0.0, 0.0), (-1e6, 3.0), (5.0, 5.0)] {
            assert_eq!(eval(&scene, &object, x, y), f32::INFINITY);
        }
    }

    #[test]
    fn operationless_object_uses_last_primitive() {
        let scene = Scene::new();
        let mut object = Object::new();
        object.push_primitive(7.0f32);
        object.push_primitive(Circle::new(Vec2::zero(), 1.0));
        assert_eq!(eval(&scene, &object, 3.0, 0.0), 2.0);
    }

    // ── CSG ───────────────────────────────────────────────────────────────

    #[test]
    fn min_max_neg_match_primitive_values() {
        let scene = Scene::new();
        let a = Primitive::from(Circle::new(Vec2::new(1.0, 2.0), 3.0));
        let b = Primitive::from(Plane::new(Vec2::new(0.6, -0.8), 1.5));

        for (x, y) in [(0.0, 0.0), (4.0, -2.0), (-3.5, 7.25), (1.0, 2.0)] {
            let p = Vec2::new(x, y);
            let (da, db) = (a.distance(p), b.distance(p));

            let ops: [(fn(ArgumentIndex, ArgumentIndex) -> Operation, f32); 2] =
                [(Operation::Min, da.min(db)), (Operation::Max, da.max(db))];
            for (op, expected) in ops {
                let mut object = Object::new();
                let ia = object.push_primitive(a);
                let ib = object.push_primitive(b);
                object.push_operation(op(ia, ib));
                assert_eq!(eval(&scene, &object, x, y), expected);
            }

            let mut object = Object::new();
            let ia = object.push_primitive(a);
            object.neg(ia);
            assert_eq!(eval(&scene, &object, x, y), -da);
        }
    }

    #[test]
    fn de_morgan() {
        let scene = Scene::new();
        let mut lhs = Object::new();
        let a = lhs.push_primitive(Circle::new(Vec2::new(-1.0, 0.0), 2.0));
        let b = lhs.push_primitive(Circle::new(Vec2::new(2.0, 1.0), 1.5));
        let na = lhs.neg(a);
        let nb = lhs.neg(b);
        lhs.max(na, nb);

        let mut rhs = Object::new();
        let a = rhs.push_primitive(Circle::new(Vec2::new(-1.0, 0.0), 2.0));
        let b = rhs.push_primitive(Circle::new(Vec2::new(2.0, 1.0), 1.5));
        let u = rhs.min(a, b);
        rhs.neg(u);

        for ix in -5..=5 {
            for iy in -5..=5 {
                let (x, y) = (ix as f32 * 0.7, iy as f32 * 0.7);
                assert!(approx(eval(&scene, &lhs, x, y), eval(&scene, &rhs, x, y)));
            }
        }
    }

    // ── end to end ────────────────────────────────────────────────────────

    #[test]
    fn square_with_hole_regions() {
        let scene = Scene::new();
        let object = square_with_hole();
        // Center of the hole is outside the solid.
        assert!(eval(&scene, &object, 32.0, 32.0) > 0.0);
        assert!(approx(eval(&scene, &object, 32.0, 32.0), 12.0));
        // Corner region, away from the hole, is inside.
        assert!(eval(&scene, &object, 18.0, 18.0) < 0.0);
        // Edge midpoint: the hole is 4 units away, the boundary is here.
        assert!(approx(eval(&scene, &object, 32.0, 16.0), 0.0));
        // Well outside the square.
        assert!(eval(&scene, &object, 0.0, 0.0) > 0.0);
    }

    // ── references ────────────────────────────────────────────────────────

    #[test]
    fn shared_primitive_reference() {
        let mut scene = Scene::new();
        let shared = scene.push_shared(Circle::new(Vec2::zero(), 5.0));
        let mut object = Object::new();
        let local = object.push_primitive(Circle::new(Vec2::new(20.0, 0.0), 5.0));
        object.min(local, shared);
        assert_eq!(eval(&scene, &object, 0.0, 0.0), -5.0);
        assert_eq!(eval(&scene, &object, 20.0, 0.0), -5.0);
    }

    #[test]
    fn forward_reference_is_nan() {
        let scene = Scene::new();
        let mut object = Object::new();
        let a = object.push_primitive(1.0f32);
        // Operation 0 reads operation 1 before it ran.
        let early = object.neg(ArgumentIndex::object_operation(1));
        object.max(a, early);
        assert!(eval(&scene, &object, 0.0, 0.0).is_nan());
    }

    #[test]
    fn self_reference_is_nan() {
        let scene = Scene::new();
        let mut object = Object::new();
        object.neg(ArgumentIndex::object_operation(0));
        assert!(eval(&scene, &object, 0.0, 0.0).is_nan());
    }

    #[test]
    fn out_of_bounds_is_error() {
        let scene = Scene::new();

        let mut object = Object::new();
        object.neg(ArgumentIndex::object_primitive(0));
        assert_eq!(
            evaluate_object(&scene, &object, Vec2::zero()),
            Err(EvalError::ObjectPrimitiveOutOfBounds { index: 0, len: 0 })
        );

        let mut object = Object::new();
        object.neg(ArgumentIndex::scene_primitive(4));
        assert_eq!(
            evaluate_object(&scene, &object, Vec2::zero()),
            Err(EvalError::ScenePrimitiveOutOfBounds { index: 4, len: 0 })
        );

        let mut object = Object::new();
        object.neg(ArgumentIndex::object_operation(1));
        assert_eq!(
            evaluate_object(&scene, &object, Vec2::zero()),
            Err(EvalError::OperationOutOfBounds { index: 1, len: 1 })
        );
    }

    // ── scale ─────────────────────────────────────────────────────────────

    #[test]
    fn scale_applies_to_local_and_shared_primitives() {
        let mut scene = Scene::new().with_scale(Vec2::new(3.0, 1.0));
        let shared = scene.push_shared(Circle::new(Vec2::new(10.0, 0.0), 2.0));

        let mut object = Object::new();
        let local = object.push_primitive(Circle::new(Vec2::new(10.0, 0.0), 2.0));
        object.neg(local);
        let mut shared_only = Object::new();
        shared_only.neg(shared);

        // Both circles become ellipses centered at (30, 0) with radii (6, 2).
        for object in [&object, &shared_only] {
            assert!(approx(eval(&scene, object, 30.0, 0.0), 2.0));
            assert!(approx(eval(&scene, object, 37.0, 0.0), -1.0));
            assert!(approx(eval(&scene, object, 30.0, 3.0), -1.0));
        }
    }

    #[test]
    fn scale_moves_planes_geometrically() {
        let scene = Scene::new().with_scale(Vec2::new(3.0, 1.0));
        let object = square_with_hole();
        // The square now spans x in [48, 144], y in [16, 48].
        assert!(approx(eval(&scene, &object, 48.0, 20.0), 0.0));
        assert!(eval(&scene, &object, 50.0, 20.0) < 0.0);
        assert!(eval(&scene, &object, 40.0, 20.0) > 0.0);
        // Hole center moved to (96, 32).
        assert!(eval(&scene, &object, 96.0, 32.0) > 0.0);
    }

    fn single(primitive: impl Into<Primitive>) -> Object {
        let mut object = Object::new();
        object.push_primitive(primitive);
        object
    }

    #[test]
    fn mirrored_scale_keeps_circle_inside() {
        let scene = Scene::new().with_scale(Vec2::new(1.0, -1.0));
        let circle = single(Circle::new(Vec2::new(0.0, 5.0), 1.0));
        assert!(approx(eval(&scene, &circle, 0.0, -5.0), -1.0));
        assert!(approx(eval(&scene, &circle, 0.0, -7.0), 1.0));

        // Mirrored and stretched: an ellipse at (-3, 0) with radii (3, 1).
        let scene = Scene::new().with_scale(Vec2::new(-3.0, 1.0));
        let circle = single(Circle::new(Vec2::new(1.0, 0.0), 1.0));
        assert!(approx(eval(&scene, &circle, -3.0, 0.0), -1.0));
        assert!(approx(eval(&scene, &circle, -7.0, 0.0), 1.0));
        assert!(approx(eval(&scene, &circle, -3.0, 2.0), 1.0));
    }

    #[test]
    fn mirrored_scale_keeps_plane_solid_side() {
        // Solid below y = 2; mirrored it is solid above y = -2.
        let scene = Scene::new().with_scale(Vec2::new(1.0, -1.0));
        let plane = single(Plane::new(Vec2::new(0.0, 1.0), 2.0));
        assert!(approx(eval(&scene, &plane, 0.0, 0.0), -2.0));
        assert!(approx(eval(&scene, &plane, 0.0, -3.0), 1.0));

        // Solid left of x = 1; under (-3, 1) it is solid right of x = -3.
        let scene = Scene::new().with_scale(Vec2::new(-3.0, 1.0));
        let plane = single(Plane::new(Vec2::new(1.0, 0.0), 1.0));
        assert!(approx(eval(&scene, &plane, 0.0, 0.0), -3.0));
        assert!(approx(eval(&scene, &plane, -5.0, 0.0), 2.0));
    }

    #[test]
    fn mirrored_square_with_hole() {
        // The square now spans y in [-48, -16] with the hole at (32, -32).
        let scene = Scene::new().with_scale(Vec2::new(1.0, -1.0));
        let object = square_with_hole();
        assert!(eval(&scene, &object, 20.0, -20.0) < 0.0);
        assert!(eval(&scene, &object, 20.0, 20.0) > 0.0);
        assert!(eval(&scene, &object, 32.0, -32.0) > 0.0);
        assert!(approx(eval(&scene, &object, 16.0, -20.0), 0.0));
    }

    #[test]
    fn evaluation_does_not_touch_scene() {
        let mut scene = Scene::new().with_scale(Vec2::new(2.0, 1.0));
        scene.push_object(square_with_hole());
        let before = scene.clone();
        let _ = scene.evaluate(0, Vec2::new(1.0, 2.0));
        assert_eq!(scene, before);
    }
}
