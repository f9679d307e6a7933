use ghostfleet::{GameError, Layout, Orientation, ShipRecord};

#[test]
fn test_parse_header_and_records() {
    let layout = Layout::parse("10 x 8\nA 4 B b H 9\nB 3 D f V 12\n").unwrap();
    assert_eq!(layout.num_lines, 10);
    assert_eq!(layout.num_columns, 8);
    assert_eq!(
        layout.ships,
        vec![
            ShipRecord {
                symbol: 'A',
                size: 4,
                row: 'B',
                col: 'b',
                orientation: Orientation::Horizontal,
                color: 9,
            },
            ShipRecord {
                symbol: 'B',
                size: 3,
                row: 'D',
                col: 'f',
                orientation: Orientation::Vertical,
                color: 12,
            },
        ]
    );
}

#[test]
fn test_blank_lines_are_skipped() {
    let layout = Layout::parse("\n5 x 5\n\nA 2 B b H 1\n\n\n").unwrap();
    assert_eq!(layout.num_lines, 5);
    assert_eq!(layout.ships.len(), 1);
}

#[test]
fn test_trailing_partial_record_is_dropped() {
    // an exhausted stream must never corrupt the ships parsed before it
    let layout = Layout::parse("5 x 5\nA 2 B b H 1\nB 3\n").unwrap();
    assert_eq!(layout.ships.len(), 1);
    assert_eq!(layout.ships[0].symbol, 'A');
}

#[test]
fn test_malformed_record_mid_stream_is_an_error() {
    let err = Layout::parse("5 x 5\nA two B b H 1\nB 2 D d V 1").unwrap_err();
    assert_eq!(err, GameError::MalformedLayout { line: 2 });
}

#[test]
fn test_bad_orientation_is_an_error() {
    let err = Layout::parse("5 x 5\nA 2 B b X 1\nB 2 D d V 1").unwrap_err();
    assert_eq!(err, GameError::MalformedLayout { line: 2 });
}

#[test]
fn test_zero_size_ship_is_an_error() {
    let err = Layout::parse("5 x 5\nA 0 B b H 1\nB 2 D d V 1").unwrap_err();
    assert_eq!(err, GameError::MalformedLayout { line: 2 });
}

#[test]
fn test_header_without_separator_is_an_error() {
    let err = Layout::parse("5 5\nA 2 B b H 1").unwrap_err();
    assert_eq!(err, GameError::MalformedLayout { line: 1 });
}

#[test]
fn test_dimensions_past_letter_range_are_an_error() {
    let err = Layout::parse("27 x 5").unwrap_err();
    assert_eq!(err, GameError::MalformedLayout { line: 1 });
    let err = Layout::parse("5 x 0").unwrap_err();
    assert_eq!(err, GameError::MalformedLayout { line: 1 });
}

#[test]
fn test_empty_input_is_an_error() {
    assert_eq!(
        Layout::parse("").unwrap_err(),
        GameError::MalformedLayout { line: 1 }
    );
}

#[test]
fn test_fleet_with_no_ships_parses() {
    let layout = Layout::parse("5 x 5").unwrap();
    assert!(layout.ships.is_empty());
}
