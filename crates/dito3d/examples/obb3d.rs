use dito3d::bounding_volume::OrientedBoundingBox;
use dito3d::dito::{compute_obb_from_flat, DitoWorkspace};
use dito3d::math::{Point, Real};

fn main() {
    let mut workspace = DitoWorkspace::new();

    /*
     * A unit cube: the best box is the axis-aligned one.
     */
    let cube: Vec<Point<Real>> = (0..8)
        .map(|i| Point::new((i & 1) as Real, ((i >> 1) & 1) as Real, ((i >> 2) & 1) as Real))
        .collect();
    let obb = workspace.compute(&cube);
    print_obb("unit cube", &obb);
    println!("    outcome: {:?}", workspace.outcome());

    /*
     * A sheared quad extruded along `z`, given as a flat coordinate buffer.
     */
    let prism: [Real; 24] = [
        0.0, 1.0, 0.0, 2.0, 5.0, 0.0, 4.0, 4.0, 0.0, 2.0, 0.0, 0.0, //
        0.0, 1.0, 1.0, 2.0, 5.0, 1.0, 4.0, 4.0, 1.0, 2.0, 0.0, 1.0,
    ];
    match compute_obb_from_flat(&prism) {
        Ok(obb) => print_obb("sheared prism", &obb),
        Err(err) => println!("sheared prism: {}", err),
    }

    /*
     * Random points uniformly distributed in [1, 6] x [2, 5] x [3, 4].
     */
    let mut rng = oorandom::Rand32::new(0);
    let random: Vec<Point<Real>> = (0..100_000)
        .map(|_| {
            Point::new(
                1.0 + rng.rand_float() * 5.0,
                2.0 + rng.rand_float() * 3.0,
                3.0 + rng.rand_float(),
            )
        })
        .collect();
    let obb = workspace.compute(&random);
    print_obb("random box", &obb);
    println!("    outcome: {:?}", workspace.outcome());
}

fn print_obb(name: &str, obb: &OrientedBoundingBox) {
    println!("{}:", name);
    println!("    center:       {:?}", obb.center.coords.as_slice());
    println!("    half-extents: {:?}", obb.half_extents.as_slice());
    println!("    quaternion:   {:?}", obb.quaternion_xyzw());
    println!("    half-axes:    {:?}", obb.half_axes_column_major());
    println!("    volume: {}, half area: {}", obb.volume(), obb.half_area());
}
