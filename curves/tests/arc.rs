use flo_morph_curves::*;
use flo_morph_curves::arc::*;
use flo_morph_curves::line::*;
use flo_morph_curves::bezier::*;

use std::f64::consts::PI;

fn semicircle() -> EllipticalArc {
    EllipticalArc::new(Coord2(0.0, 0.0), (5.0, 5.0), 0.0, false, true, Coord2(10.0, 0.0))
}

#[test]
fn semicircle_center() {
    match semicircle().center_parameterization() {
        ArcParameterization::CenterParameters(center_arc) => {
            assert!(center_arc.center.distance_to(&Coord2(5.0, 0.0)) < 0.0001);
            assert!((center_arc.delta_theta.abs() - PI).abs() < 0.0001);
        }

        _ => assert!(false)
    }
}

#[test]
fn semicircle_midpoint() {
    let mid = semicircle().point_at_pos(0.5);

    assert!(mid.distance_to(&Coord2(5.0, -5.0)) < 0.0001);
}

#[test]
fn end_points_are_on_arc() {
    let arc = EllipticalArc::new(Coord2(1.0, 2.0), (8.0, 4.0), 30.0, true, false, Coord2(6.0, 5.0));

    assert!(arc.point_at_pos(0.0).distance_to(&Coord2(1.0, 2.0)) < 0.0001);
    assert!(arc.point_at_pos(1.0).distance_to(&Coord2(6.0, 5.0)) < 0.0001);
}

#[test]
fn radii_are_scaled_up_when_too_small() {
    let arc = EllipticalArc::new(Coord2(0.0, 0.0), (1.0, 1.0), 0.0, false, true, Coord2(10.0, 0.0));

    match arc.center_parameterization() {
        ArcParameterization::CenterParameters(center_arc) => {
            assert!((center_arc.radii.0 - 5.0).abs() < 0.0001);
            assert!((center_arc.radii.1 - 5.0).abs() < 0.0001);
        }

        _ => assert!(false)
    }
}

#[test]
fn zero_radius_is_a_line() {
    let arc = EllipticalArc::new(Coord2(0.0, 0.0), (0.0, 5.0), 0.0, false, true, Coord2(10.0, 0.0));

    assert!(arc.center_parameterization() == ArcParameterization::LineTo);
    assert!(arc.point_at_pos(0.5) == Coord2(5.0, 0.0));
}

#[test]
fn same_end_points_are_omitted() {
    let arc = EllipticalArc::new(Coord2(3.0, 3.0), (5.0, 5.0), 0.0, false, true, Coord2(3.0, 3.0));

    assert!(arc.center_parameterization() == ArcParameterization::Omit);
}

#[test]
fn semicircle_bounds() {
    let bounds: Bounds<Coord2> = semicircle().bounding_box();

    assert!(bounds.min().distance_to(&Coord2(0.0, -5.0)) < 0.0001);
    assert!(bounds.max().distance_to(&Coord2(10.0, 0.0)) < 0.0001);
}

#[test]
fn semicircle_length() {
    let length = semicircle().arc_length(0.0001);

    assert!((length - 5.0*PI).abs() < 0.01);
}

#[test]
fn curves_follow_arc() {
    let arc     = EllipticalArc::new(Coord2(1.0, 2.0), (8.0, 4.0), 30.0, true, false, Coord2(6.0, 5.0));
    let curves  = arc.to_curves();

    assert!(curves.len() >= 2);
    assert!(curves[0].start_point().distance_to(&arc.from) < 0.0001);
    assert!(curves[curves.len()-1].end_point().distance_to(&arc.to) < 0.0001);

    for curve in curves.iter() {
        let (_t, nearest) = nearest_point_on_arc(&arc, &curve.point_at_pos(0.5));
        assert!(nearest.distance_to(&curve.point_at_pos(0.5)) < 0.01);
    }
}

#[test]
fn section_of_arc() {
    let arc     = semicircle();
    let section = arc.section(0.25, 0.75);

    assert!(section.point_at_pos(0.0).distance_to(&arc.point_at_pos(0.25)) < 0.0001);
    assert!(section.point_at_pos(0.5).distance_to(&arc.point_at_pos(0.5)) < 0.0001);
    assert!(section.point_at_pos(1.0).distance_to(&arc.point_at_pos(0.75)) < 0.0001);
}

#[test]
fn reversed_arc_runs_backwards() {
    let arc         = semicircle();
    let reversed    = arc.reverse();

    for x in 0..=10 {
        let t = (x as f64)/10.0;
        assert!(arc.point_at_pos(t).distance_to(&reversed.point_at_pos(1.0-t)) < 0.0001);
    }
}

#[test]
fn nearest_point_on_semicircle() {
    let (t, nearest) = nearest_point_on_arc(&semicircle(), &Coord2(5.0, -10.0));

    assert!((t - 0.5).abs() < 0.001);
    assert!(nearest.distance_to(&Coord2(5.0, -5.0)) < 0.001);
}

#[test]
fn nearest_point_is_clamped_to_sweep() {
    // The semicircle sweeps through negative y values, so points below it project onto the end points
    let (t, nearest) = nearest_point_on_arc(&semicircle(), &Coord2(1.0, 8.0));

    assert!(t == 0.0);
    assert!(nearest.distance_to(&Coord2(0.0, 0.0)) < 0.0001);
}

#[test]
fn vertical_line_crosses_semicircle_once() {
    let line            = (Coord2(5.0, -20.0), Coord2(5.0, 20.0));
    let intersections   = arc_intersects_line(&semicircle(), &line);

    assert!(intersections.len() == 1);
    assert!((intersections[0].0 - 0.5).abs() < 0.0001);
    assert!(intersections[0].2.distance_to(&Coord2(5.0, -5.0)) < 0.0001);
    assert!(line.point_at_pos(intersections[0].1).distance_to(&Coord2(5.0, -5.0)) < 0.0001);
}

#[test]
fn horizontal_line_crosses_semicircle_twice() {
    let line            = (Coord2(-5.0, -3.0), Coord2(15.0, -3.0));
    let intersections   = arc_intersects_line(&semicircle(), &line);

    assert!(intersections.len() == 2);
    assert!(intersections[0].2.distance_to(&Coord2(1.0, -3.0)) < 0.0001);
    assert!(intersections[1].2.distance_to(&Coord2(9.0, -3.0)) < 0.0001);
}

#[test]
fn line_on_other_side_misses_semicircle() {
    let line = (Coord2(-5.0, 3.0), Coord2(15.0, 3.0));

    assert!(arc_intersects_line(&semicircle(), &line).len() == 0);
}
