use dito3d::bounding_volume::details::point_source_aabb;
use dito3d::dito::{compute_obb, compute_obb_from_flat, DitoOutcome, DitoWorkspace};
use dito3d::math::{Isometry, Point, Real, Vector};

/// Seeded clouds mixing full-volume, thin and flat shapes. The offsets of
/// the thin and flat ones sit around the single-precision rounding of their
/// coordinates.
fn clouds() -> Vec<Vec<Point<Real>>> {
    let mut rng = oorandom::Rand32::new(77);
    let mut clouds = Vec::new();

    for i in 0..45 {
        let count = [3, 9, 14, 40, 300][i % 5];
        let offset = [1.0, 1.0e-2, 1.0e-4, 1.0e-6, 0.0][(i / 5) % 5];
        let pos = if i % 3 == 0 {
            Isometry::translation(-4.0, 2.0, 0.5)
        } else {
            Isometry::new(
                Vector::from_fn(|_, _| rng.rand_float() * 10.0 - 5.0),
                Vector::from_fn(|_, _| rng.rand_float() * 6.0 - 3.0),
            )
        };
        let width = if i % 2 == 0 { offset } else { 3.0 };

        let cloud: Vec<Point<Real>> = (0..count)
            .map(|_| {
                let local = Vector::new(
                    rng.rand_float() * 16.0 - 8.0,
                    (rng.rand_float() * 2.0 - 1.0) * width,
                    (rng.rand_float() * 2.0 - 1.0) * offset,
                );
                pos * Point::from(local)
            })
            .collect();
        clouds.push(cloud);
    }

    clouds
}

#[test]
fn every_point_is_contained() {
    for pts in clouds() {
        let obb = compute_obb(&pts).loosened(1.0e-4);

        for pt in &pts {
            assert!(obb.contains_point(pt), "Point {:?} is outside of {:?}", pt, obb);
        }
    }
}

#[test]
fn never_worse_than_the_aabb() {
    let mut workspace = DitoWorkspace::new();

    for pts in clouds() {
        let obb = workspace.compute(&pts);
        let aabb = point_source_aabb(&pts);

        assert_ne!(workspace.outcome(), DitoOutcome::Empty);
        assert!(
            obb.half_area() <= aabb.half_area(),
            "{:?} box {:?} is worse than the AABB {:?}",
            workspace.outcome(),
            obb,
            aabb
        );

        if workspace.outcome().is_axis_aligned() {
            approx::assert_relative_eq!(obb.aabb().mins, aabb.mins, epsilon = 1.0e-5);
            approx::assert_relative_eq!(obb.aabb().maxs, aabb.maxs, epsilon = 1.0e-5);
        }
    }
}

#[test]
fn computation_is_deterministic() {
    let mut reused = DitoWorkspace::new();

    for pts in clouds() {
        let first = compute_obb(&pts);
        assert_eq!(first, compute_obb(&pts));
        assert_eq!(first, reused.compute(&pts));

        let flat: Vec<Real> = pts.iter().flat_map(|pt| [pt.x, pt.y, pt.z]).collect();
        assert_eq!(compute_obb_from_flat(&flat), Ok(first));
    }
}

#[test]
fn rotation_is_a_unit_quaternion() {
    for pts in clouds() {
        let obb = compute_obb(&pts);
        let [x, y, z, w] = obb.quaternion_xyzw();

        approx::assert_relative_eq!(x * x + y * y + z * z + w * w, 1.0, epsilon = 1.0e-5);
        assert!(obb.half_extents.iter().all(|h| *h >= 0.0));
    }
}
