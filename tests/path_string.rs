use flo_morph::*;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn canonical(path_string: &str) -> String {
    Path::parse(path_string).unwrap().path_string().to_string()
}

#[test]
fn absolute_path_round_trips() {
    init_logging();

    assert!(canonical("M 0 0 L 10 0 L 10 10 L 0 10 Z") == "M 0 0 L 10 0 L 10 10 L 0 10 Z");
    assert!(canonical("M 0 0 C 0 10 10 10 10 0") == "M 0 0 C 0 10 10 10 10 0");
    assert!(canonical("M 0 0 Q 5 10 10 0") == "M 0 0 Q 5 10 10 0");
    assert!(canonical("M 0 0 A 5 5 0 0 1 10 0") == "M 0 0 A 5 5 0 0 1 10 0");
}

#[test]
fn canonical_string_parses_to_same_path() {
    let path        = Path::parse("m 1 1 c 0 10 10 10 10 0 s 10 -10 10 0 z").unwrap();
    let reparsed    = Path::parse(path.path_string()).unwrap();

    assert!(path.approx_eq(&reparsed, 0.001));
    assert!(reparsed.path_string() == path.path_string());
}

#[test]
fn commas_and_missing_spaces() {
    assert!(canonical("M0,0L10,0L10,10") == "M 0 0 L 10 0 L 10 10");
}

#[test]
fn relative_commands() {
    assert!(canonical("m 10 10 l 5 0 l 0 5 z") == "M 10 10 L 15 10 L 15 15 Z");
}

#[test]
fn relative_move_after_close() {
    // Closing the subpath moves the current point back to its start
    assert!(canonical("M 0 0 L 10 0 Z m 5 5 l 1 0") == "M 0 0 L 10 0 Z M 5 5 L 6 5");
}

#[test]
fn horizontal_and_vertical_lines() {
    assert!(canonical("M 0 0 H 10 V 10 h -10 z") == "M 0 0 L 10 0 L 10 10 L 0 10 Z");
}

#[test]
fn extra_move_coordinates_are_lines() {
    assert!(canonical("M 0 0 10 0 10 10") == "M 0 0 L 10 0 L 10 10");
    assert!(canonical("m 1 1 2 0") == "M 1 1 L 3 1");
}

#[test]
fn smooth_cubic_reflects_control_point() {
    assert!(canonical("M 0 0 C 0 10 10 10 10 0 S 20 -10 20 0") == "M 0 0 C 0 10 10 10 10 0 C 10 -10 20 -10 20 0");
}

#[test]
fn smooth_cubic_without_previous_curve() {
    assert!(canonical("M 0 0 S 10 10 20 0") == "M 0 0 C 0 0 10 10 20 0");
    assert!(canonical("M 0 0 Q 5 10 10 0 S 15 10 20 0") == "M 0 0 Q 5 10 10 0 C 10 0 15 10 20 0");
}

#[test]
fn smooth_quadratic_reflects_control_point() {
    assert!(canonical("M 0 0 Q 5 10 10 0 T 20 0") == "M 0 0 Q 5 10 10 0 Q 15 -10 20 0");
    assert!(canonical("M 0 0 Q 5 10 10 0 T 20 0 T 30 0") == "M 0 0 Q 5 10 10 0 Q 15 -10 20 0 Q 25 10 30 0");
}

#[test]
fn arc_radii_are_positive() {
    assert!(canonical("M 0 0 A -5 5 0 0 1 10 0") == "M 0 0 A 5 5 0 0 1 10 0");
}

#[test]
fn zero_radius_arc_is_a_line() {
    assert!(canonical("M 0 0 A 0 5 0 0 1 10 0") == "M 0 0 L 10 0");
}

#[test]
fn arc_to_same_point_is_dropped() {
    assert!(canonical("M 0 0 L 10 0 A 5 5 0 0 1 10 0") == "M 0 0 L 10 0");
}

#[test]
fn arc_flags_must_be_zero_or_one() {
    match Path::parse("M 0 0 A 5 5 0 2 1 10 0") {
        Err(PathError::ParseError(_))   => { }
        _                               => assert!(false)
    }
}

#[test]
fn drawing_after_close_starts_new_sub_path() {
    let path = Path::parse("M 0 0 L 10 0 L 10 10 Z L 0 10").unwrap();

    assert!(path.sub_paths().len() == 2);
    assert!(path.path_string() == "M 0 0 L 10 0 L 10 10 Z M 0 0 L 0 10");
}

#[test]
fn each_move_starts_a_sub_path() {
    let path = Path::parse("M 0 0 L 10 0 M 20 20 L 30 30 M 50 50").unwrap();

    assert!(path.sub_paths().len() == 3);
    assert!(path.sub_paths()[2].len() == 1);
    assert!(path.command_count() == 5);
}

#[test]
fn repeated_close_is_ignored() {
    assert!(canonical("M 0 0 L 10 0 L 10 10 Z Z") == "M 0 0 L 10 0 L 10 10 Z");
}

#[test]
fn drawing_before_move_is_an_error() {
    match Path::parse("L 10 10") {
        Err(PathError::ParseError(_))   => { }
        _                               => assert!(false)
    }
}

#[test]
fn wrong_number_of_arguments_is_an_error() {
    match Path::parse("M 0 0 L 10") {
        Err(PathError::ParseError(_))   => { }
        _                               => assert!(false)
    }
}

#[test]
fn unknown_command_is_an_error() {
    match Path::parse("M 0 0 X 10 10") {
        Err(PathError::ParseError(_))   => { }
        _                               => assert!(false)
    }
}

#[test]
fn empty_string_is_empty_path() {
    let path = Path::parse("").unwrap();

    assert!(path.sub_paths().len() == 0);
    assert!(path.path_string() == "");
    assert!(path.bounding_box().is_none());
}

#[test]
fn numbers_are_rounded_to_precision() {
    assert!(canonical("M 0.1 0.2 L 1.23456 2") == "M 0.1 0.2 L 1.235 2");

    let options = PathOptions { precision: 2, ..PathOptions::default() };
    let path    = Path::parse_with_options("M 0.12345 0 L 1 1", options).unwrap();

    assert!(path.path_string() == "M 0.12 0 L 1 1");
}

#[test]
fn coordinates_keep_full_precision() {
    let options = PathOptions { precision: 6, ..PathOptions::default() };
    let path    = Path::parse_with_options("M 0 0 L 1000.123456 0.1 L 16777217 0", options).unwrap();

    assert!(path.path_string() == "M 0 0 L 1000.123456 0.1 L 16777217 0");
}

#[test]
fn large_coordinates_round_trip() {
    let path        = Path::parse("M 0 0 L 1e40 0").unwrap();
    let reparsed    = Path::parse(path.path_string()).unwrap();

    assert!(path.path_length().is_finite());
    assert!(reparsed.path_string() == path.path_string());
    assert!(reparsed.command(0, 1).unwrap().end_point() == Coord2(1e40, 0.0));
}

#[test]
fn out_of_range_numbers_are_an_error() {
    match Path::parse("M 0 0 L 1e400 0") {
        Err(PathError::ParseError(_))   => { }
        _                               => assert!(false)
    }

    match Path::parse("M 0 0 A 1e999 5 0 0 1 10 0") {
        Err(PathError::ParseError(_))   => { }
        _                               => assert!(false)
    }
}

#[test]
fn options_can_be_changed_after_parsing() {
    let path        = Path::parse("M 0 0 L 3.14159 0").unwrap();
    let rounded     = path.with_options(PathOptions { precision: 1, ..PathOptions::default() }).unwrap();

    assert!(path.path_string() == "M 0 0 L 3.142 0");
    assert!(rounded.path_string() == "M 0 0 L 3.1 0");
}

#[test]
fn invalid_options_are_rejected() {
    let options = PathOptions { precision: 40, ..PathOptions::default() };

    match Path::parse_with_options("M 0 0 L 1 1", options) {
        Err(PathError::ConfigurationError(_))   => { }
        _                                       => assert!(false)
    }
}

#[test]
fn display_and_from_str() {
    let path: Path = "M 0 0 L 10 0".parse().unwrap();

    assert!(format!("{}", path) == "M 0 0 L 10 0");
}
