//! Randomized checks of the grid invariants. Everything is seeded, so a
//! failure will reproduce on every run.

use hexmap::{
    area_len, AxialCoordinates, CubeCoordinates, CubeSet, Direction,
    HexDirection, HexGrid, OffsetCoordinates, Vec2D,
};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;
use strum::IntoEnumIterator;

const SEED: u64 = 0x6865_786d_6170;
const SAMPLES: usize = 500;

fn rng() -> Pcg64 {
    Pcg64::seed_from_u64(SEED)
}

fn random_cube(rng: &mut impl Rng) -> CubeCoordinates {
    CubeCoordinates::new_qr(
        rng.gen_range(-1000..=1000),
        rng.gen_range(-1000..=1000),
    )
}

fn random_direction(rng: &mut impl Rng) -> Direction {
    Direction::CLOCKWISE[rng.gen_range(0..6)]
}

#[test]
fn test_conversion_round_trips() {
    let mut rng = rng();
    for _ in 0..SAMPLES {
        let cube = random_cube(&mut rng);
        assert_eq!(cube.q() + cube.r() + cube.s(), 0);
        assert_eq!(cube.to_axial().to_cubic(), cube);
        assert_eq!(cube.to_offset().to_cubic(), cube);
        assert_eq!(cube.to_key().parse(), Ok(cube));
        assert_eq!(CubeCoordinates::from_bytes(&cube.to_bytes()), Ok(cube));

        let offset = OffsetCoordinates::new(
            rng.gen_range(-500..500),
            rng.gen_range(-500..500),
        );
        assert_eq!(offset.to_cubic().to_offset(), offset);
        let axial = AxialCoordinates::new(
            rng.gen_range(-500..500),
            rng.gen_range(-500..500),
        );
        assert_eq!(axial.to_cubic().to_axial(), axial);
    }
}

#[test]
fn test_neighbor_distance() {
    let mut rng = rng();
    for _ in 0..SAMPLES {
        let cube = random_cube(&mut rng);
        for (neighbor, direction) in
            cube.neighbors().iter().zip(Direction::iter())
        {
            assert_eq!(cube.distance_to(*neighbor), 1);
            assert_eq!(cube.neighbor(direction), *neighbor);
            assert_eq!(neighbor.neighbor(direction.opposite()), cube);
        }
        for diagonal in cube.diagonals().iter() {
            assert_eq!(cube.distance_to(*diagonal), 2);
        }
    }
}

#[test]
fn test_distance_is_a_metric() {
    let mut rng = rng();
    for _ in 0..SAMPLES {
        let a = random_cube(&mut rng);
        let b = random_cube(&mut rng);
        let c = random_cube(&mut rng);
        assert_eq!(a.distance_to(a), 0);
        assert_eq!(a.distance_to(b), b.distance_to(a));
        assert!(a.distance_to(c) <= a.distance_to(b) + b.distance_to(c));

        // Half the Manhattan distance in cube space
        let diff = a - b;
        let manhattan = diff.q().unsigned_abs()
            + diff.r().unsigned_abs()
            + diff.s().unsigned_abs();
        assert_eq!(2 * a.distance_to(b), manhattan as usize);
    }
}

#[test]
fn test_line_is_contiguous() {
    let mut rng = rng();
    for _ in 0..100 {
        let a = random_cube(&mut rng);
        let b = a + CubeCoordinates::new_qr(
            rng.gen_range(-30..=30),
            rng.gen_range(-30..=30),
        );
        let line = a.line_to(b);
        assert_eq!(line.len(), a.distance_to(b) + 1);
        assert_eq!(line.first(), Some(&a));
        assert_eq!(line.last(), Some(&b));
        for pair in line.windows(2) {
            assert_eq!(pair[0].distance_to(pair[1]), 1, "gap in {:?}", line);
        }
    }
}

#[test]
fn test_ring_spiral_area() {
    let mut rng = rng();
    for _ in 0..50 {
        let center = random_cube(&mut rng);
        let range = rng.gen_range(1..=8);
        let start = random_direction(&mut rng);

        let ring = center.ring_around(range, start).unwrap();
        assert_eq!(ring.len(), 6 * range as usize);
        assert_eq!(ring[0], center + start.offset() * range);
        assert!(ring
            .iter()
            .all(|cell| center.distance_to(*cell) == range as usize));
        let ring_set: CubeSet = ring.iter().copied().collect();
        assert_eq!(ring_set.len(), ring.len());

        let spiral = center.spiral_around_outward(range, start).unwrap();
        assert_eq!(spiral.len(), area_len(range as usize));
        let inward = center.spiral_around_inward(range, start).unwrap();
        assert_eq!(inward.len(), spiral.len());

        let area = center.area_around(range).unwrap();
        let spiral_set: CubeSet = spiral.into_iter().collect();
        let inward_set: CubeSet = inward.into_iter().collect();
        let area_set: CubeSet = area.iter().copied().collect();
        assert_eq!(area.len(), area_set.len());
        assert_eq!(spiral_set, area_set);
        assert_eq!(inward_set, area_set);
    }
}

#[test]
fn test_point_round_trip() {
    let mut rng = rng();
    for _ in 0..SAMPLES {
        let grid = HexGrid::new(rng.gen_range(0.5..50.0));
        let cube = random_cube(&mut rng);
        let center = grid.axial_to_point(cube.to_axial());
        assert_eq!(grid.point_to_cubic(center), cube);
    }
}

#[test]
fn test_direction_in_hex_matches_angle() {
    let mut rng = rng();
    let grid = HexGrid::new(2.0);
    for _ in 0..SAMPLES {
        let cube = CubeCoordinates::new_qr(
            rng.gen_range(-50..=50),
            rng.gen_range(-50..=50),
        );
        let center = grid.axial_to_point(cube.to_axial());

        // Stay well inside the hex's inscribed circle, so the point can't
        // land in a different hex
        let degrees: f64 = rng.gen_range(0.0..360.0);
        let distance = rng.gen_range(0.05..0.8) * grid.hex_radius();
        let point = center + Vec2D::new(distance, 0.0).rotate(degrees);

        // Each direction owns a 60 degree wedge centered on its side. With y
        // pointing down, clockwise on screen is increasing angle.
        let sector = ((degrees + 30.0) / 60.0).floor() as usize % 6;
        let wedge_edge = (degrees + 30.0) % 60.0;
        if wedge_edge < 0.01 || wedge_edge > 59.99 {
            // Too close to call
            continue;
        }

        assert_eq!(
            grid.point_to_direction_in_hex(point),
            Ok(Direction::CLOCKWISE[sector]),
            "point {} at {} degrees from the center of {}",
            point,
            degrees,
            cube
        );
    }
}

#[test]
fn test_direction_in_hex_never_leaves_hull() {
    let mut rng = rng();
    let grid = HexGrid::new(3.0);
    for _ in 0..SAMPLES * 10 {
        let point = Vec2D::new(
            rng.gen_range(-200.0..200.0),
            rng.gen_range(-200.0..200.0),
        );
        assert!(
            grid.point_to_direction_in_hex(point).is_ok(),
            "no direction for {}",
            point
        );
    }
}

#[test]
fn test_direction_in_hex_on_pixel_grid() {
    // Integer pixels land exactly on hex borders all the time, unlike random
    // floats
    for &radius in &[2.0, 10.0, 32.0] {
        let grid = HexGrid::new(radius);
        for x in 0..400 {
            for y in 0..400 {
                let point = Vec2D::new(f64::from(x), f64::from(y));
                assert!(
                    grid.point_to_direction_in_hex(point).is_ok(),
                    "no direction for {} with radius {}",
                    point,
                    radius
                );
            }
        }
    }
}
