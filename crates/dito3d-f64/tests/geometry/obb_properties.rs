use dito3d_f64::bounding_volume::Aabb;
use dito3d_f64::dito::{compute_obb, DitoOutcome, DitoWorkspace};
use dito3d_f64::math::{Isometry, Point, Real, Vector};

/// Random point clouds of various sizes and shapes: some are stretched and
/// rotated so that the best box is far from axis-aligned.
fn random_clouds() -> Vec<Vec<Point<Real>>> {
    let mut rng = oorandom::Rand64::new(1234);
    let mut clouds = Vec::new();

    for i in 0..60 {
        let count = [3, 5, 13, 14, 15, 40, 200][i % 7];
        let scale = Vector::new(
            0.1 + rng.rand_float() * 10.0,
            0.1 + rng.rand_float() * 3.0,
            0.1 + rng.rand_float(),
        );
        let pos = Isometry::new(
            Vector::from_fn(|_, _| rng.rand_float() * 20.0 - 10.0),
            Vector::from_fn(|_, _| rng.rand_float() * 6.0 - 3.0),
        );

        let cloud: Vec<Point<Real>> = (0..count)
            .map(|_| {
                let local = Vector::from_fn(|_, _| rng.rand_float() * 2.0 - 1.0);
                pos * Point::from(local.component_mul(&scale))
            })
            .collect();
        clouds.push(cloud);
    }

    clouds
}

/// Point clouds that are flat or thin up to a tiny offset, on both sides of
/// the threshold deciding whether a point is off a line or off a plane.
/// One cloud in four is built along the coordinate axes.
fn near_degenerate_clouds() -> Vec<Vec<Point<Real>>> {
    let mut rng = oorandom::Rand64::new(4321);
    let mut clouds = Vec::new();

    for i in 0..48 {
        let count = [3, 6, 13, 14, 30, 150][i % 6];
        let offset = [1.0e-7, 5.0e-7, 2.0e-6, 1.0e-5, 1.0e-4, 2.0e-3][(i / 6) % 6];
        let pos = if i % 4 == 0 {
            Isometry::translation(1.0, -2.0, 3.0)
        } else {
            Isometry::new(
                Vector::from_fn(|_, _| rng.rand_float() * 20.0 - 10.0),
                Vector::from_fn(|_, _| rng.rand_float() * 6.0 - 3.0),
            )
        };
        let thin = i % 2 == 0;

        let cloud: Vec<Point<Real>> = (0..count)
            .map(|_| {
                let along = rng.rand_float() * 20.0 - 10.0;
                let local = if thin {
                    Vector::new(
                        along,
                        (rng.rand_float() * 2.0 - 1.0) * offset,
                        (rng.rand_float() * 2.0 - 1.0) * offset,
                    )
                } else {
                    Vector::new(
                        along,
                        rng.rand_float() * 8.0 - 4.0,
                        (rng.rand_float() * 2.0 - 1.0) * offset,
                    )
                };
                pos * Point::from(local)
            })
            .collect();
        clouds.push(cloud);
    }

    clouds
}

#[test]
fn near_degenerate_clouds_are_bounded_and_never_worse_than_the_aabb() {
    let mut workspace = DitoWorkspace::new();

    for pts in near_degenerate_clouds() {
        let obb = workspace.compute(&pts);
        let aabb = Aabb::from_points(&pts);

        assert_ne!(workspace.outcome(), DitoOutcome::Empty);
        assert!(
            obb.half_area() <= aabb.half_area(),
            "{:?} box {:?} is worse than the AABB {:?}",
            workspace.outcome(),
            obb,
            aabb
        );

        let loose = obb.loosened(1.0e-7);
        for pt in &pts {
            assert!(loose.contains_point(pt), "Point {:?} is outside of {:?}", pt, obb);
        }
    }
}

#[test]
fn every_point_is_contained() {
    for pts in random_clouds() {
        let obb = compute_obb(&pts).loosened(1.0e-7);

        for pt in &pts {
            assert!(
                obb.contains_point(pt),
                "Point {:?} is outside of {:?}",
                pt,
                obb
            );
        }
    }
}

#[test]
fn never_worse_than_the_aabb() {
    let mut workspace = DitoWorkspace::new();

    for pts in random_clouds() {
        let obb = workspace.compute(&pts);
        let aabb = Aabb::from_points(&pts);

        assert!(obb.half_area() <= aabb.half_area());
        assert_eq!(workspace.extremal_points().unwrap().aabb(), aabb);

        match workspace.outcome() {
            DitoOutcome::Refined => assert!(obb.half_area() < aabb.half_area()),
            DitoOutcome::RefinementRejected => {
                approx::assert_relative_eq!(obb.aabb().mins, aabb.mins, epsilon = 1.0e-9);
                approx::assert_relative_eq!(obb.aabb().maxs, aabb.maxs, epsilon = 1.0e-9);
            }
            DitoOutcome::LineAligned => assert!(obb.half_area() <= aabb.half_area()),
            DitoOutcome::Empty | DitoOutcome::AxisAligned => {
                panic!("Unexpected outcome for a random cloud: {:?}", workspace.outcome())
            }
        }
    }
}

#[test]
fn box_is_well_formed() {
    for pts in random_clouds() {
        let obb = compute_obb(&pts);

        assert!(obb.half_extents.iter().all(|h| *h >= 0.0));
        approx::assert_relative_eq!(obb.rotation.quaternion().norm(), 1.0, epsilon = 1.0e-9);

        let axes = obb.axes();
        approx::assert_relative_eq!(axes[0].cross(&axes[1]), axes[2], epsilon = 1.0e-9);

        let half_axes = obb.half_axes_column_major();
        for i in 0..3 {
            let column = Vector::new(half_axes[i * 3], half_axes[i * 3 + 1], half_axes[i * 3 + 2]);
            approx::assert_relative_eq!(column.norm(), obb.half_extents[i], epsilon = 1.0e-9);
        }
    }
}

#[test]
fn computation_is_deterministic() {
    let mut reused = DitoWorkspace::new();

    for pts in random_clouds() {
        let first = compute_obb(&pts);
        let second = compute_obb(&pts);
        assert_eq!(first, second);

        let from_reused = reused.compute(&pts);
        assert_eq!(first, from_reused);
    }
}

#[test]
fn elongated_rotated_cloud_is_refined() {
    let rot = Isometry::rotation(Vector::new(0.3, 0.5, 0.7));
    let pts: Vec<Point<Real>> = (0..1000)
        .map(|i| {
            let t = i as Real / 1000.0;
            let local = Vector::new(
                10.0 * (t - 0.5),
                (t * 37.0).sin(),
                0.5 * (t * 91.0).cos(),
            );
            rot * Point::from(local)
        })
        .collect();

    let mut workspace = DitoWorkspace::new();
    let obb = workspace.compute(&pts);

    assert_eq!(workspace.outcome(), DitoOutcome::Refined);
    assert!(obb.volume() < Aabb::from_points(&pts).volume());
}
