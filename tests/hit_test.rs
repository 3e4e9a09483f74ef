use flo_morph::*;

fn square() -> Path {
    Path::parse("M 0 0 L 10 0 L 10 10 L 0 10 Z").unwrap()
}

fn every_kind_of_hit() -> HitOptions {
    HitOptions::new()
        .with_point_tolerance(1.0)
        .with_segment_tolerance(1.0)
        .with_shapes(true)
}

#[test]
fn point_inside_square_hits_shape() {
    let result = square().hit_test(&Coord2(5.0, 5.0), &every_kind_of_hit()).unwrap();

    assert!(result.shape_hits == vec![0]);
    assert!(!result.is_end_point_hit());
    assert!(!result.is_segment_hit());
    assert!(result.is_hit());
}

#[test]
fn point_far_away_hits_nothing() {
    let result = square().hit_test(&Coord2(50.0, 50.0), &every_kind_of_hit()).unwrap();

    assert!(!result.is_hit());
    assert!(result == HitResult::default());
}

#[test]
fn nothing_is_tested_by_default() {
    let result = square().hit_test(&Coord2(5.0, 5.0), &HitOptions::new()).unwrap();

    assert!(!result.is_hit());
}

#[test]
fn end_point_hit() {
    let result = square().hit_test(&Coord2(10.5, 0.2), &HitOptions::new().with_point_tolerance(1.0)).unwrap();

    assert!(result.end_point_hits.len() == 1);
    assert!(result.end_point_hits[0].index == PathIndex::new(0, 1));
    assert!(result.end_point_hits[0].projection.point == Coord2(10.0, 0.0));
    assert!(result.end_point_hits[0].projection.t == 1.0);
}

#[test]
fn end_point_hits_include_start_of_sub_path() {
    // The move and the close both end at the origin
    let result  = square().hit_test(&Coord2(0.2, 0.2), &HitOptions::new().with_point_tolerance(1.0)).unwrap();
    let indexes = result.end_point_hits.iter().map(|hit| hit.index).collect::<Vec<_>>();

    assert!(indexes == vec![PathIndex::new(0, 0), PathIndex::new(0, 4)]);
}

#[test]
fn segment_hit() {
    let result = square().hit_test(&Coord2(5.0, 0.5), &HitOptions::new().with_segment_tolerance(1.0)).unwrap();

    assert!(result.segment_hits.len() == 1);
    assert!(result.segment_hits[0].index == PathIndex::new(0, 1));
    assert!(result.segment_hits[0].projection.point.distance_to(&Coord2(5.0, 0.0)) < 0.0001);
    assert!((result.segment_hits[0].projection.distance - 0.5).abs() < 0.0001);
}

#[test]
fn segment_outside_tolerance_is_not_hit() {
    let result = square().hit_test(&Coord2(5.0, 2.0), &HitOptions::new().with_segment_tolerance(1.0)).unwrap();

    assert!(!result.is_segment_hit());
}

#[test]
fn range_function_can_filter_by_command() {
    // Only lines count: the point is on top of the close command
    let options = HitOptions::new()
        .with_segment_in_range(|distance, cmd| cmd.command_type() == CommandType::LineTo && distance < 1.0);
    let result  = square().hit_test(&Coord2(0.0, 5.0), &options).unwrap();

    assert!(!result.is_segment_hit());
}

#[test]
fn shape_hit_on_curved_shape() {
    let circle  = Path::parse("M 0 5 A 5 5 0 0 1 10 5 A 5 5 0 0 1 0 5 Z").unwrap();
    let options = HitOptions::new().with_shapes(true);

    assert!(circle.hit_test(&Coord2(5.0, 5.0), &options).unwrap().shape_hits == vec![0]);
    assert!(circle.hit_test(&Coord2(5.0, 1.0), &options).unwrap().shape_hits == vec![0]);
    assert!(!circle.hit_test(&Coord2(0.5, 0.5), &options).unwrap().is_shape_hit());
}

#[test]
fn open_sub_path_is_not_a_shape() {
    let path = Path::parse("M 0 0 L 10 0 L 10 10 L 0 10").unwrap();

    assert!(!path.hit_test(&Coord2(5.0, 5.0), &HitOptions::new().with_shapes(true)).unwrap().is_shape_hit());
}

#[test]
fn restricted_to_sub_paths() {
    let path = Path::parse("M 0 0 L 10 0 L 10 10 L 0 10 Z M 20 0 L 30 0 L 30 10 L 20 10 Z").unwrap();

    assert!(path.hit_test(&Coord2(25.0, 5.0), &HitOptions::new().with_shapes(true)).unwrap().shape_hits == vec![1]);
    assert!(!path.hit_test(&Coord2(25.0, 5.0), &HitOptions::new().with_shapes(true).restricted_to(vec![0])).unwrap().is_hit());
}

#[test]
fn restricted_to_missing_sub_path_is_an_error() {
    let options = HitOptions::new().with_shapes(true).restricted_to(vec![0, 3]);

    match square().hit_test(&Coord2(5.0, 5.0), &options) {
        Err(PathError::IndexError { sub_idx: 3, cmd_idx: None })    => { }
        _                                                           => assert!(false)
    }
}

#[test]
fn fill_rule_decides_inside_of_star() {
    let star        = Path::parse("M 0 10 L -5.878 -8.09 L 9.511 3.09 L -9.511 3.09 L 5.878 -8.09 Z").unwrap();
    let non_zero    = HitOptions::new().with_shapes(true).with_fill_rule(FillRule::NonZero);
    let even_odd    = HitOptions::new().with_shapes(true).with_fill_rule(FillRule::EvenOdd);

    assert!(star.hit_test(&Coord2(0.0, 0.0), &non_zero).unwrap().is_shape_hit());
    assert!(!star.hit_test(&Coord2(0.0, 0.0), &even_odd).unwrap().is_shape_hit());

    // The points of the star are inside with either rule
    assert!(star.hit_test(&Coord2(0.0, 8.0), &non_zero).unwrap().is_shape_hit());
    assert!(star.hit_test(&Coord2(0.0, 8.0), &even_odd).unwrap().is_shape_hit());
}

#[test]
fn all_kinds_of_hit_at_once() {
    let result = square().hit_test(&Coord2(9.8, 0.2), &every_kind_of_hit()).unwrap();

    assert!(result.is_end_point_hit());
    assert!(result.is_segment_hit());
    assert!(result.is_shape_hit());
}
