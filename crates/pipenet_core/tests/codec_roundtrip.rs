use pipenet_core::{
    load_from_path, read_inventory, save_to_path, write_inventory, CodecError, Inventory,
    PipeDraft, StationDraft,
};
use std::io::Cursor;

fn fixture() -> Inventory {
    let mut inventory = Inventory::new();
    inventory
        .add_pipe(PipeDraft {
            name: "North export line".to_string(),
            length_km: 123.75,
            diameter_mm: 1420,
        })
        .unwrap();
    inventory
        .add_pipe(PipeDraft {
            name: "Spur 7".to_string(),
            length_km: 0.8,
            diameter_mm: 530,
        })
        .unwrap();
    inventory
        .add_station(StationDraft {
            name: "CS Alpha".to_string(),
            total_workshops: 10,
            active_workshops: 7,
            station_class: 2,
        })
        .unwrap();
    let position = inventory.find_pipe(2).unwrap();
    inventory.with_pipe_mut(position, |pipe| pipe.under_repair = true);
    inventory
}

#[test]
fn save_and_load_round_trips_the_whole_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("inventory.txt");

    let original = fixture();
    save_to_path(&original, &path).unwrap();
    let loaded = load_from_path(&path).unwrap();

    assert_eq!(loaded, original);
}

#[test]
fn allocator_counters_survive_save_load_and_deletion() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("inventory.txt");

    let mut original = fixture();
    // Delete pipe 2; its ID must stay burned after a reload.
    let position = original.find_pipe(2).unwrap();
    original.remove_pipe_at(position).unwrap();
    save_to_path(&original, &path).unwrap();

    let mut loaded = load_from_path(&path).unwrap();
    let new_id = loaded
        .add_pipe(PipeDraft {
            name: "replacement".to_string(),
            length_km: 1.0,
            diameter_mm: 100,
        })
        .unwrap();
    assert_eq!(new_id, 3);
}

#[test]
fn written_layout_is_the_expected_line_format() {
    let mut buffer = Vec::new();
    write_inventory(&mut buffer, &fixture()).unwrap();
    let text = String::from_utf8(buffer).unwrap();

    let expected = "\
NEXT_PIPE_ID 3
NEXT_STATION_ID 2
PIPES 2
1
North export line
123.75
1420
0
2
Spur 7
0.8
530
1
STATIONS 1
1
CS Alpha
10
7
2
";
    assert_eq!(text, expected);
}

#[test]
fn legacy_file_without_counters_resets_allocators_to_one() {
    let inventory = read_inventory(Cursor::new("PIPES 0\nSTATIONS 0\n")).unwrap();
    assert!(inventory.is_empty());
    assert_eq!(inventory.next_pipe_id(), 1);
    assert_eq!(inventory.next_station_id(), 1);
}

#[test]
fn legacy_file_with_records_advances_allocators_past_seen_ids() {
    let text = "\
PIPES 1
4
Old main
15.5
700
0
STATIONS 1
2
Old station
3
1
1
";
    let mut inventory = read_inventory(Cursor::new(text)).unwrap();
    assert_eq!(inventory.next_pipe_id(), 5);
    assert_eq!(inventory.next_station_id(), 3);

    let id = inventory
        .add_pipe(PipeDraft {
            name: "fresh".to_string(),
            length_km: 1.0,
            diameter_mm: 100,
        })
        .unwrap();
    assert_eq!(id, 5);
}

#[test]
fn mismatched_pipes_header_is_fatal() {
    let err = read_inventory(Cursor::new("TUBES 0\nSTATIONS 0\n")).unwrap_err();
    assert!(matches!(
        err,
        CodecError::BadSectionHeader {
            expected: "PIPES",
            ..
        }
    ));
}

#[test]
fn corrupt_stations_header_fails_the_load_without_partial_state() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("inventory.txt");

    let original = fixture();
    save_to_path(&original, &path).unwrap();

    let text = std::fs::read_to_string(&path)
        .unwrap()
        .replace("STATIONS 1", "STATIONZ 1");
    std::fs::write(&path, text).unwrap();

    // The valid PIPES section parses, then the bad header aborts the whole
    // load. A live store would be swapped only on Ok, so it keeps its data.
    let err = load_from_path(&path).unwrap_err();
    assert!(matches!(
        err,
        CodecError::BadSectionHeader {
            expected: "STATIONS",
            ..
        }
    ));
}

#[test]
fn truncated_file_reports_unexpected_eof() {
    let err = read_inventory(Cursor::new("NEXT_PIPE_ID 3\nNEXT_STATION_ID 2\nPIPES 1\n7\nLonely\n"))
        .unwrap_err();
    assert!(matches!(err, CodecError::UnexpectedEof { .. }));
}

#[test]
fn malformed_scalars_report_the_offending_line() {
    let text = "\
NEXT_PIPE_ID 2
NEXT_STATION_ID 1
PIPES 1
1
Bent pipe
twelve
500
0
STATIONS 0
";
    let err = read_inventory(Cursor::new(text)).unwrap_err();
    match err {
        CodecError::InvalidField { line, message } => {
            assert_eq!(line, 6);
            assert!(message.contains("pipe length"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn repair_flag_must_be_zero_or_one() {
    let text = "\
PIPES 1
1
Flagged
1.0
100
yes
STATIONS 0
";
    let err = read_inventory(Cursor::new(text)).unwrap_err();
    assert!(matches!(err, CodecError::InvalidField { .. }));
}

#[test]
fn overcommitted_station_is_clamped_on_load() {
    let file = "\
PIPES 0
STATIONS 1
1
Greedy
3
9
1
";
    let inventory = read_inventory(Cursor::new(file)).unwrap();
    let station = &inventory.stations()[0];
    assert_eq!(station.total_workshops, 3);
    assert_eq!(station.active_workshops, 3);
}

#[test]
fn missing_file_reports_io_error_and_changes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_from_path(&dir.path().join("absent.txt")).unwrap_err();
    assert!(matches!(err, CodecError::Io(_)));
}

#[test]
fn names_with_spaces_round_trip() {
    let mut inventory = Inventory::new();
    inventory
        .add_pipe(PipeDraft {
            name: "  padded   name with  spaces".to_string(),
            length_km: 2.5,
            diameter_mm: 300,
        })
        .unwrap();

    let mut buffer = Vec::new();
    write_inventory(&mut buffer, &inventory).unwrap();
    let loaded = read_inventory(Cursor::new(buffer)).unwrap();
    assert_eq!(loaded, inventory);
}
