use dito3d_f64::bounding_volume::OrientedBoundingBox;
use dito3d_f64::dito::{compute_obb, DitoOutcome, DitoWorkspace};
use dito3d_f64::math::{Point, Real, Rotation, Vector};

fn unit_cube() -> Vec<Point<Real>> {
    vec![
        Point::new(0.0, 0.0, 0.0),
        Point::new(1.0, 0.0, 0.0),
        Point::new(0.0, 1.0, 0.0),
        Point::new(1.0, 1.0, 0.0),
        Point::new(0.0, 0.0, 1.0),
        Point::new(1.0, 0.0, 1.0),
        Point::new(0.0, 1.0, 1.0),
        Point::new(1.0, 1.0, 1.0),
    ]
}

fn sheared_prism() -> Vec<Point<Real>> {
    let base = [(0.0, 1.0), (2.0, 5.0), (4.0, 4.0), (2.0, 0.0)];
    [0.0, 1.0]
        .iter()
        .flat_map(|z| base.iter().map(move |(x, y)| Point::new(*x, *y, *z)))
        .collect()
}

#[test]
fn unit_cube_is_its_own_box() {
    let mut workspace = DitoWorkspace::new();
    let obb = workspace.compute(&unit_cube());

    assert_eq!(workspace.outcome(), DitoOutcome::RefinementRejected);
    assert_eq!(
        obb,
        OrientedBoundingBox::new(
            Point::new(0.5, 0.5, 0.5),
            Vector::new(0.5, 0.5, 0.5),
            Rotation::identity()
        )
    );
    assert_eq!(obb.quaternion_xyzw(), [0.0, 0.0, 0.0, 1.0]);
}

#[test]
fn sheared_prism_gets_a_tilted_box() {
    let pts = sheared_prism();
    let mut workspace = DitoWorkspace::new();
    let obb = workspace.compute(&pts);

    assert_eq!(workspace.outcome(), DitoOutcome::Refined);

    // The box is aligned with the sides of the quad and with `z`.
    let axes = obb.axes();
    let side = Vector::new(1.0, 2.0, 0.0).normalize();
    approx::assert_relative_eq!(axes[0].dot(&side).abs(), 1.0, epsilon = 1.0e-9);
    approx::assert_relative_eq!(axes[1].z.abs(), 1.0, epsilon = 1.0e-9);
    approx::assert_relative_eq!(
        obb.half_extents,
        Vector::new(5.0f64.sqrt(), 0.5, 5.0f64.sqrt() / 2.0),
        epsilon = 1.0e-9
    );
    approx::assert_relative_eq!(obb.center, Point::new(2.0, 2.5, 0.5), epsilon = 1.0e-9);
    approx::assert_relative_eq!(obb.half_area(), 10.0 + 5.0f64.sqrt() * 3.0, epsilon = 1.0e-9);

    // The quality was computed from the extents along the winning axes.
    let aabb_quality = workspace.extremal_points().unwrap().aabb().half_area();
    assert_eq!(aabb_quality, 29.0);
    assert!(obb.half_area() < aabb_quality);

    for pt in &pts {
        assert!(obb.loosened(1.0e-9).contains_point(pt));
    }
}

#[test]
fn uniform_points_in_a_box() {
    let mut rng = oorandom::Rand64::new(42);
    let pts: Vec<Point<Real>> = (0..100_000)
        .map(|_| {
            Point::new(
                1.0 + rng.rand_float() * 5.0,
                2.0 + rng.rand_float() * 3.0,
                3.0 + rng.rand_float() * 1.0,
            )
        })
        .collect();

    let obb = compute_obb(&pts);

    approx::assert_relative_eq!(obb.center, Point::new(3.5, 3.5, 3.5), epsilon = 1.0e-2);
    approx::assert_relative_eq!(obb.half_extents, Vector::new(2.5, 1.5, 0.5), epsilon = 1.0e-2);
    assert!(obb.rotation.angle() < 1.0e-2);
}
