use pipenet_core::{
    apply_pipe_edit, apply_station_edit, remove_selected_pipes, remove_selected_stations,
    select_pipes, Inventory, PipeBatchEdit, PipeDraft, Selection, StationBatchEdit, StationDraft,
};

fn pipes(count: usize) -> Inventory {
    let mut inventory = Inventory::new();
    for i in 0..count {
        inventory
            .add_pipe(PipeDraft {
                name: format!("pipe-{i}"),
                length_km: 2.0,
                diameter_mm: 200,
            })
            .unwrap();
    }
    inventory
}

fn stations(capacities: &[(u32, u32)]) -> Inventory {
    let mut inventory = Inventory::new();
    for (i, &(total, active)) in capacities.iter().enumerate() {
        inventory
            .add_station(StationDraft {
                name: format!("cs-{i}"),
                total_workshops: total,
                active_workshops: active,
                station_class: 1,
            })
            .unwrap();
    }
    inventory
}

#[test]
fn set_diameter_applies_to_every_selected_pipe() {
    let mut inventory = pipes(4);
    let selection = Selection::from_positions(vec![0, 2]);

    let count = apply_pipe_edit(&mut inventory, &selection, PipeBatchEdit::SetDiameter(800));
    assert_eq!(count, 2);

    let diameters: Vec<u32> = inventory.pipes().iter().map(|p| p.diameter_mm).collect();
    assert_eq!(diameters, vec![800, 200, 800, 200]);
}

#[test]
fn toggle_repair_inverts_per_record() {
    let mut inventory = pipes(2);
    inventory.with_pipe_mut(0, |pipe| pipe.under_repair = true);
    let selection = Selection::all(2);

    apply_pipe_edit(&mut inventory, &selection, PipeBatchEdit::ToggleRepair);
    assert!(!inventory.pipes()[0].under_repair);
    assert!(inventory.pipes()[1].under_repair);
}

#[test]
fn start_workshop_skips_saturated_stations_without_error() {
    let mut inventory = stations(&[(3, 3), (3, 1)]);
    let selection = Selection::all(2);

    let count = apply_station_edit(&mut inventory, &selection, StationBatchEdit::StartWorkshop);

    // Reported count is the selection size, not the changed-record count.
    assert_eq!(count, 2);
    assert_eq!(inventory.stations()[0].active_workshops, 3);
    assert_eq!(inventory.stations()[1].active_workshops, 2);
}

#[test]
fn stop_workshop_skips_idle_stations() {
    let mut inventory = stations(&[(3, 0), (3, 2)]);
    let selection = Selection::all(2);

    apply_station_edit(&mut inventory, &selection, StationBatchEdit::StopWorkshop);
    assert_eq!(inventory.stations()[0].active_workshops, 0);
    assert_eq!(inventory.stations()[1].active_workshops, 1);
}

#[test]
fn set_class_overwrites_unconditionally() {
    let mut inventory = stations(&[(3, 1), (4, 2), (5, 3)]);
    let selection = Selection::from_positions(vec![1, 2]);

    apply_station_edit(&mut inventory, &selection, StationBatchEdit::SetClass(7));
    let classes: Vec<u32> = inventory.stations().iter().map(|s| s.station_class).collect();
    assert_eq!(classes, vec![1, 7, 7]);
}

#[test]
fn batch_delete_removes_exactly_the_selected_records() {
    let mut inventory = pipes(5);

    // Selecting positions 0, 2 and 4 must delete IDs 1, 3 and 5 even though
    // removal shifts positions mid-batch.
    let selection = Selection::from_positions(vec![0, 4, 2]);
    let removed = remove_selected_pipes(&mut inventory, &selection);

    assert_eq!(removed, 3);
    let survivors: Vec<u64> = inventory.pipes().iter().map(|p| p.id).collect();
    assert_eq!(survivors, vec![2, 4]);
}

#[test]
fn delete_all_empties_the_collection() {
    let mut inventory = stations(&[(2, 1), (2, 2)]);
    let removed = remove_selected_stations(&mut inventory, &Selection::all(2));
    assert_eq!(removed, 2);
    assert_eq!(inventory.station_count(), 0);
}

#[test]
fn token_selection_feeds_batch_delete_end_to_end() {
    let mut inventory = pipes(4);
    let resolved = select_pipes(&inventory, "4,1,4");

    let removed = remove_selected_pipes(&mut inventory, &resolved.selection);
    assert_eq!(removed, 2);

    let survivors: Vec<u64> = inventory.pipes().iter().map(|p| p.id).collect();
    assert_eq!(survivors, vec![2, 3]);
}

#[test]
fn empty_selection_touches_nothing() {
    let mut inventory = pipes(3);
    let before = inventory.clone();

    let selection = Selection::default();
    assert_eq!(
        apply_pipe_edit(&mut inventory, &selection, PipeBatchEdit::SetRepair(true)),
        0
    );
    assert_eq!(remove_selected_pipes(&mut inventory, &selection), 0);
    assert_eq!(inventory, before);
}
