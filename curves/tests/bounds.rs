use flo_morph_curves::*;

#[test]
fn overlapping_rects() {
    let r1 = (Coord2(30.0, 30.0), Coord2(60.0, 40.0));
    let r2 = (Coord2(20.0, 25.0), Coord2(35.0, 35.0));

    assert!(r1.overlaps(&r2));
}

#[test]
fn non_overlapping_rects() {
    let r1 = (Coord2(30.0, 30.0), Coord2(60.0, 40.0));
    let r2 = (Coord2(9.0, 10.0), Coord2(20.0, 25.0));

    assert!(!r1.overlaps(&r2));
}

#[test]
fn touching_rects() {
    let r1 = (Coord2(30.0, 30.0), Coord2(60.0, 40.0));
    let r2 = (Coord2(20.0, 25.0), Coord2(30.0, 30.0));

    assert!(!r1.overlaps(&r2));
}

#[test]
fn overlap_interior_rect() {
    let r1 = (Coord2(30.0, 30.0), Coord2(60.0, 50.0));
    let r2 = (Coord2(35.0, 35.0), Coord2(55.0, 45.0));

    assert!(r1.overlaps(&r2));
}

#[test]
fn from_points() {
    let r = Bounds::<Coord2>::bounds_for_points(vec![
        Coord2(30.0, 30.0),
        Coord2(60.0, 40.0),
        Coord2(45.0, 70.0),
        Coord2(10.0, 35.0)
    ]).unwrap();

    assert!(r.min() == Coord2(10.0, 30.0));
    assert!(r.max() == Coord2(60.0, 70.00));
    assert!(r.width() == 50.0);
    assert!(r.height() == 40.0);
}

#[test]
fn no_points_no_bounds() {
    let r = Bounds::<Coord2>::bounds_for_points(vec![]);

    assert!(r.is_none());
}

#[test]
fn bounds_are_normalized() {
    let r = Bounds::from_min_max(Coord2(10.0, 5.0), Coord2(0.0, 20.0));

    assert!(r.min() == Coord2(0.0, 5.0));
    assert!(r.max() == Coord2(10.0, 20.0));
}

#[test]
fn union_contains_both() {
    let r1 = Bounds::from_min_max(Coord2(0.0, 0.0), Coord2(10.0, 10.0));
    let r2 = Bounds::from_min_max(Coord2(5.0, -5.0), Coord2(20.0, 5.0));
    let u  = r1.union_bounds(r2);

    assert!(u.min() == Coord2(0.0, -5.0));
    assert!(u.max() == Coord2(20.0, 10.0));
    assert!(u.contains_point(&Coord2(15.0, 8.0)));
    assert!(!u.contains_point(&Coord2(21.0, 8.0)));
}
