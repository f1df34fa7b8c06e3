use pipenet_core::{select_pipes, select_stations, Inventory, PipeDraft, StationDraft, TokenWarning};

fn inventory_with_pipes(count: usize) -> Inventory {
    let mut inventory = Inventory::new();
    for i in 0..count {
        inventory
            .add_pipe(PipeDraft {
                name: format!("pipe-{i}"),
                length_km: 1.0 + i as f64,
                diameter_mm: 100,
            })
            .unwrap();
    }
    inventory
}

#[test]
fn duplicate_tokens_resolve_to_distinct_sorted_positions() {
    let inventory = inventory_with_pipes(5);
    let resolved = select_pipes(&inventory, "3,3,1,5");

    assert_eq!(resolved.selection.positions(), &[0, 2, 4]);
    assert_eq!(resolved.selection.len(), 3);
    assert!(resolved.warnings.is_empty());
}

#[test]
fn wildcard_selects_every_position() {
    let inventory = inventory_with_pipes(4);
    for input in ["all", "ALL", "  aLl "] {
        let resolved = select_pipes(&inventory, input);
        assert_eq!(resolved.selection.positions(), &[0, 1, 2, 3]);
    }
}

#[test]
fn malformed_and_unknown_tokens_warn_but_do_not_abort() {
    let inventory = inventory_with_pipes(3);
    let resolved = select_pipes(&inventory, "2, x, 17, -4, 1");

    assert_eq!(resolved.selection.positions(), &[0, 1]);
    assert_eq!(
        resolved.warnings,
        vec![
            TokenWarning::Unparsable("x".to_string()),
            TokenWarning::UnknownId(17),
            TokenWarning::Unparsable("-4".to_string()),
        ]
    );
}

#[test]
fn all_invalid_tokens_yield_empty_selection() {
    let inventory = inventory_with_pipes(3);
    let resolved = select_pipes(&inventory, "nope, 99");

    assert!(resolved.selection.is_empty());
    assert_eq!(resolved.warnings.len(), 2);
}

#[test]
fn selection_tracks_current_positions_not_insertion_ids() {
    let mut inventory = inventory_with_pipes(3);
    inventory.remove_pipe_at(0).unwrap();

    // IDs 2 and 3 now sit at positions 0 and 1.
    let resolved = select_pipes(&inventory, "2,3");
    assert_eq!(resolved.selection.positions(), &[0, 1]);

    let resolved = select_pipes(&inventory, "1");
    assert!(resolved.selection.is_empty());
    assert_eq!(resolved.warnings, vec![TokenWarning::UnknownId(1)]);
}

#[test]
fn station_tokens_resolve_against_station_collection() {
    let mut inventory = inventory_with_pipes(2);
    inventory
        .add_station(StationDraft {
            name: "cs".to_string(),
            total_workshops: 4,
            active_workshops: 2,
            station_class: 1,
        })
        .unwrap();

    let resolved = select_stations(&inventory, "1");
    assert_eq!(resolved.selection.positions(), &[0]);

    // Pipe ID 2 does not exist among stations.
    let resolved = select_stations(&inventory, "2");
    assert_eq!(resolved.warnings, vec![TokenWarning::UnknownId(2)]);
}
