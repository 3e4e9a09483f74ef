use flo_morph_curves::*;
use flo_morph_curves::line::*;
use flo_morph_curves::bezier::*;

#[test]
fn points_on_line_are_on_line() {
    let lines = vec![
        (Coord2(2.0, 3.0), Coord2(7.0, 6.0)),
        (Coord2(7.0, 6.0), Coord2(2.0, 3.0)),
        (Coord2(2.0, 3.0), Coord2(7.0, 3.0)),
        (Coord2(2.0, 3.0), Coord2(2.0, 6.0))
    ];

    for line in lines {
        let (a, b, c) = line_coefficients_2d(&line);

        for t in 0..=16 {
            let t       = (t as f64) / 16.0;
            let point   = line.point_at_pos(t);

            assert!((a*point.x() + b*point.y() + c).abs() < 0.001);
        }
    }
}

#[test]
fn distance_to_line_is_signed() {
    let line = (Coord2(0.0, 0.0), Coord2(10.0, 0.0));

    let above = signed_distance_to_line(&line, &Coord2(5.0, 3.0));
    let below = signed_distance_to_line(&line, &Coord2(5.0, -3.0));

    assert!((above.abs() - 3.0).abs() < 0.0001);
    assert!((below.abs() - 3.0).abs() < 0.0001);
    assert!(above.signum() != below.signum());
}

#[test]
fn crossing_lines_intersect() {
    let line1 = (Coord2(0.0, 0.0), Coord2(10.0, 10.0));
    let line2 = (Coord2(10.0, 0.0), Coord2(0.0, 10.0));

    let (t1, t2, point) = line_intersects_line(&line1, &line2).unwrap();

    assert!((t1 - 0.5).abs() < 0.0001);
    assert!((t2 - 0.5).abs() < 0.0001);
    assert!(point.distance_to(&Coord2(5.0, 5.0)) < 0.0001);
}

#[test]
fn lines_that_would_cross_if_longer_do_not_intersect() {
    let line1 = (Coord2(0.0, 0.0), Coord2(1.0, 1.0));
    let line2 = (Coord2(10.0, 0.0), Coord2(0.0, 10.0));

    assert!(line_intersects_line(&line1, &line2).is_none());
}

#[test]
fn parallel_lines_do_not_intersect() {
    let line1 = (Coord2(0.0, 0.0), Coord2(10.0, 0.0));
    let line2 = (Coord2(0.0, 1.0), Coord2(10.0, 1.0));

    assert!(line_intersects_line(&line1, &line2).is_none());
}

#[test]
fn lines_meeting_at_end_points_intersect() {
    let line1 = (Coord2(0.0, 0.0), Coord2(10.0, 0.0));
    let line2 = (Coord2(10.0, 0.0), Coord2(10.0, 10.0));

    let (t1, t2, _point) = line_intersects_line(&line1, &line2).unwrap();

    assert!(t1 == 1.0);
    assert!(t2 == 0.0);
}

#[test]
fn nearest_point_projects_onto_line() {
    let line            = (Coord2(0.0, 0.0), Coord2(10.0, 0.0));
    let (t, nearest)    = nearest_point_on_line(&line, &Coord2(5.0, 5.0));

    assert!(t == 0.5);
    assert!(nearest == Coord2(5.0, 0.0));
}

#[test]
fn nearest_point_is_clamped_to_ends() {
    let line            = (Coord2(0.0, 0.0), Coord2(10.0, 0.0));
    let (t, nearest)    = nearest_point_on_line(&line, &Coord2(-4.0, 2.0));

    assert!(t == 0.0);
    assert!(nearest == Coord2(0.0, 0.0));

    let (t, nearest)    = nearest_point_on_line(&line, &Coord2(14.0, -2.0));

    assert!(t == 1.0);
    assert!(nearest == Coord2(10.0, 0.0));
}

#[test]
fn line_to_curve_has_same_points() {
    let line                    = (Coord2(1.0, 2.0), Coord2(7.0, 5.0));
    let curve: Curve<Coord2>    = line_to_bezier(&line);

    for t in 0..=10 {
        let t = (t as f64) / 10.0;
        assert!(curve.point_at_pos(t).distance_to(&line.point_at_pos(t)) < 0.0001);
    }
}
