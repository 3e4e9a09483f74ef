use flo_morph_curves::*;
use flo_morph_curves::polygon::*;

fn square() -> Vec<Coord2> {
    vec![Coord2(0.0, 0.0), Coord2(10.0, 0.0), Coord2(10.0, 10.0), Coord2(0.0, 10.0)]
}

fn pentagram() -> Vec<Coord2> {
    // Vertices of a regular pentagon, visited in the order that draws a star
    let pentagon: Vec<_> = (0..5)
        .map(|idx| {
            let angle = std::f64::consts::PI/2.0 + (idx as f64)*std::f64::consts::PI*2.0/5.0;
            Coord2(angle.cos(), angle.sin())
        })
        .collect();

    vec![pentagon[0], pentagon[2], pentagon[4], pentagon[1], pentagon[3]]
}

#[test]
fn square_area() {
    assert!((polygon_area(&square()).abs() - 100.0).abs() < 0.0001);
}

#[test]
fn reversed_square_has_negative_area() {
    let mut reversed = square();
    reversed.reverse();

    assert!(polygon_area(&square()) > 0.0);
    assert!(polygon_area(&reversed) < 0.0);
}

#[test]
fn square_edges_close_the_shape() {
    let edges: Vec<_> = polygon_edges(&square()).collect();

    assert!(edges.len() == 4);
    assert!(edges[3] == (Coord2(0.0, 10.0), Coord2(0.0, 0.0)));
}

#[test]
fn square_centroid() {
    assert!(polygon_centroid(&square()).distance_to(&Coord2(5.0, 5.0)) < 0.0001);
}

#[test]
fn square_contains_center() {
    assert!(polygon_contains_point(&square(), &Coord2(5.0, 5.0), FillRule::NonZero));
    assert!(polygon_contains_point(&square(), &Coord2(5.0, 5.0), FillRule::EvenOdd));
}

#[test]
fn square_does_not_contain_outside_point() {
    assert!(!polygon_contains_point(&square(), &Coord2(15.0, 5.0), FillRule::NonZero));
    assert!(!polygon_contains_point(&square(), &Coord2(-5.0, 5.0), FillRule::EvenOdd));
    assert!(!polygon_contains_point(&square(), &Coord2(5.0, 50.0), FillRule::NonZero));
}

#[test]
fn ray_through_vertex_is_counted_once() {
    // A diamond with a vertex level with the test point
    let diamond = vec![Coord2(5.0, 0.0), Coord2(10.0, 5.0), Coord2(5.0, 10.0), Coord2(0.0, 5.0)];

    assert!(polygon_contains_point(&diamond, &Coord2(5.0, 5.0), FillRule::EvenOdd));
    assert!(!polygon_contains_point(&diamond, &Coord2(-1.0, 5.0), FillRule::EvenOdd));
}

#[test]
fn pentagram_center_depends_on_fill_rule() {
    let star = pentagram();

    assert!(polygon_contains_point(&star, &Coord2(0.0, 0.0), FillRule::NonZero));
    assert!(!polygon_contains_point(&star, &Coord2(0.0, 0.0), FillRule::EvenOdd));
}

#[test]
fn too_few_points_contain_nothing() {
    let line = vec![Coord2(0.0, 0.0), Coord2(10.0, 10.0)];

    assert!(!polygon_contains_point(&line, &Coord2(5.0, 5.0), FillRule::NonZero));
}

#[test]
fn signed_distance_inside_and_outside() {
    assert!((signed_distance_to_polygon(&square(), &Coord2(3.0, 5.0)) - 3.0).abs() < 0.0001);
    assert!((signed_distance_to_polygon(&square(), &Coord2(13.0, 5.0)) + 3.0).abs() < 0.0001);
}

#[test]
fn pole_of_square_is_center() {
    let pole = pole_of_inaccessibility(&square(), 0.01, 10_000);

    assert!(pole.point.distance_to(&Coord2(5.0, 5.0)) < 0.01);
    assert!((pole.distance - 5.0).abs() < 0.01);
    assert!(pole.complete);
    assert!(!pole.degenerate);
}

#[test]
fn pole_of_l_shape_is_inside() {
    let l_shape = vec![
        Coord2(0.0, 0.0), Coord2(10.0, 0.0), Coord2(10.0, 4.0),
        Coord2(4.0, 4.0), Coord2(4.0, 10.0), Coord2(0.0, 10.0)
    ];
    let pole    = pole_of_inaccessibility(&l_shape, 0.01, 10_000);

    assert!(polygon_contains_point(&l_shape, &pole.point, FillRule::EvenOdd));
    // Largest circle fits in the corner, touching both outer walls and the inside corner
    assert!(pole.distance > 2.3);
    assert!(pole.distance < 2.35);
}

#[test]
fn pole_search_stops_at_cell_limit() {
    let l_shape = vec![
        Coord2(0.0, 0.0), Coord2(10.0, 0.0), Coord2(10.0, 4.0),
        Coord2(4.0, 4.0), Coord2(4.0, 10.0), Coord2(0.0, 10.0)
    ];
    let pole    = pole_of_inaccessibility(&l_shape, 0.000001, 5);

    assert!(!pole.complete);
    assert!(pole.cells_searched <= 5);
}

#[test]
fn thin_polygon_stays_within_cell_limit() {
    let strip   = vec![Coord2(0.0, 0.0), Coord2(1000.0, 0.0), Coord2(1000.0, 1.0), Coord2(0.0, 1.0)];
    let pole    = pole_of_inaccessibility(&strip, 0.01, 100);

    assert!(pole.cells_searched <= 100);
    assert!(!pole.degenerate);
    assert!(polygon_contains_point(&strip, &pole.point, FillRule::NonZero));
    assert!(pole.distance > 0.49);
}

#[test]
fn collinear_points_are_degenerate() {
    let line    = vec![Coord2(0.0, 0.0), Coord2(5.0, 5.0), Coord2(10.0, 10.0)];
    let pole    = pole_of_inaccessibility(&line, 0.01, 10_000);

    assert!(pole.degenerate);
    assert!(pole.point.distance_to(&Coord2(5.0, 5.0)) < 0.0001);
}
