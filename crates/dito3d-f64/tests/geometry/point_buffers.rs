use dito3d_f64::dito::{compute_obb, compute_obb_from_flat, compute_obb_strided};
use dito3d_f64::math::{Point, Real};
use dito3d_f64::points::{PointBufferError, StridedPoints};

fn random_positions(count: usize) -> Vec<Point<Real>> {
    let mut rng = oorandom::Rand64::new(7);
    (0..count)
        .map(|_| {
            Point::new(
                rng.rand_float() * 4.0 - 2.0,
                rng.rand_float() * 0.5,
                rng.rand_float() * 9.0 + 1.0,
            )
        })
        .collect()
}

#[test]
fn interleaved_buffer_matches_packed_buffer() {
    let positions = random_positions(250);

    let packed: Vec<Real> = positions.iter().flat_map(|p| [p.x, p.y, p.z]).collect();

    // [u, v, x, y, z, nx, ny, nz] vertices, followed by a truncated vertex.
    let mut interleaved: Vec<Real> = positions
        .iter()
        .flat_map(|p| [0.25, 0.75, p.x, p.y, p.z, 0.0, 0.0, 1.0])
        .collect();
    interleaved.extend_from_slice(&[0.25, 0.75, 100.0, 100.0]);

    let from_points = compute_obb(&positions);
    let from_packed = compute_obb_from_flat(&packed).unwrap();
    let from_interleaved = compute_obb_strided(&interleaved, 2, 8).unwrap();

    assert_eq!(from_packed, from_points);
    assert_eq!(from_interleaved, from_points);

    let view = StridedPoints::new(&interleaved, 2, 8).unwrap();
    assert_eq!(compute_obb(&view), from_points);
}

#[test]
fn small_interleaved_buffer_uses_the_same_search_set() {
    let positions = random_positions(6);
    let interleaved: Vec<Real> = positions
        .iter()
        .flat_map(|p| [p.x, p.y, p.z, -1.0])
        .collect();

    assert_eq!(
        compute_obb_strided(&interleaved, 0, 4).unwrap(),
        compute_obb(&positions)
    );
}

#[test]
fn invalid_layouts_are_rejected() {
    let coords: Vec<Real> = vec![1.0; 10];

    assert_eq!(
        compute_obb_from_flat(&coords),
        Err(PointBufferError::TruncatedPoint { len: 10 })
    );
    assert_eq!(
        compute_obb_strided(&coords, 0, 2),
        Err(PointBufferError::InvalidStride { stride: 2 })
    );
    assert_eq!(
        compute_obb_strided(&coords, 11, 3),
        Err(PointBufferError::OffsetOutOfBounds { offset: 11, len: 10 })
    );

    let err = compute_obb_strided(&coords, 0, 0).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid stride 0: a point needs at least 3 scalar components."
    );
}
