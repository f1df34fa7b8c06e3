//! Interactive menu front end for the PipeNet inventory.
//!
//! # Responsibility
//! - Drive the command loop: one command fully processed before the next.
//! - Acquire validated input and hand the core range-checked values only.
//! - Surface every per-operation error as a user-visible message; nothing
//!   propagates past the operation that detected it.

mod input;

use clap::Parser;
use log::warn;
use pipenet_core::{
    adjust_workshops, apply_pipe_edit, apply_station_edit, pipes_by_name, pipes_by_repair,
    remove_selected_pipes, remove_selected_stations, select_pipes, select_stations,
    stations_by_idle_percent, stations_by_name, toggle_pipe_repair, update_pipe, update_station,
    Inventory, NumericCmp, PipeBatchEdit, PipeDraft, PipeUpdate, Selection, StationBatchEdit,
    StationDraft, StationUpdate, TokenSelection, WorkshopAction,
};
use std::io;
use std::path::{Path, PathBuf};

/// Interactive pipeline and compressor-station inventory.
#[derive(Debug, Parser)]
#[command(name = "pipenet", version)]
struct Args {
    /// Directory for rotating log files. Defaults to a per-process temp
    /// location.
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// Log level: trace|debug|info|warn|error.
    #[arg(long)]
    log_level: Option<String>,
}

fn main() {
    let args = Args::parse();

    let log_dir = args
        .log_dir
        .unwrap_or_else(|| std::env::temp_dir().join("pipenet-logs"));
    let log_level = args
        .log_level
        .unwrap_or_else(|| pipenet_core::default_log_level().to_string());
    if let Err(err) = pipenet_core::init_logging(&log_level, &log_dir) {
        eprintln!("warning: file logging disabled: {err}");
    }

    println!(
        "PipeNet inventory (core {}). Type the number of an action.",
        pipenet_core::core_version()
    );

    let mut inventory = Inventory::new();
    if let Err(err) = run(&mut inventory) {
        if err.kind() == io::ErrorKind::UnexpectedEof {
            println!("\nInput closed. Bye.");
        } else {
            eprintln!("terminal error: {err}");
        }
    }
}

fn run(inventory: &mut Inventory) -> io::Result<()> {
    loop {
        println!(
            "\n=== PipeNet inventory ===\n\
             1. Add pipe\n\
             2. Add station\n\
             3. View all records\n\
             4. Edit pipe\n\
             5. Edit station\n\
             6. Batch edit pipes\n\
             7. Batch edit stations\n\
             8. Search pipes\n\
             9. Search stations\n\
             10. Save to file\n\
             11. Load from file\n\
             0. Quit"
        );
        match input::read_u32("Choose an action: ", 0, 11)? {
            1 => add_pipe(inventory)?,
            2 => add_station(inventory)?,
            3 => view_all(inventory),
            4 => edit_pipe(inventory)?,
            5 => edit_station(inventory)?,
            6 => batch_edit_pipes(inventory)?,
            7 => batch_edit_stations(inventory)?,
            8 => search_pipes(inventory)?,
            9 => search_stations(inventory)?,
            10 => save(inventory)?,
            11 => load(inventory)?,
            0 => {
                println!("Bye.");
                return Ok(());
            }
            _ => unreachable!("read_u32 enforces the menu range"),
        }
    }
}

fn add_pipe(inventory: &mut Inventory) -> io::Result<()> {
    let draft = PipeDraft {
        name: input::read_nonempty_line("Pipe name: ")?,
        length_km: input::read_f64("Length (km): ", 0.001, f64::MAX)?,
        diameter_mm: input::read_u32("Diameter (mm): ", 1, u32::MAX)?,
    };
    match inventory.add_pipe(draft) {
        Ok(id) => println!("Pipe added with ID {id}."),
        Err(err) => println!("Cannot add pipe: {err}"),
    }
    Ok(())
}

fn add_station(inventory: &mut Inventory) -> io::Result<()> {
    let name = input::read_nonempty_line("Station name: ")?;
    let total_workshops = input::read_u32("Total workshops: ", 1, u32::MAX)?;
    let active_workshops = input::read_u32("Active workshops: ", 0, total_workshops)?;
    let station_class = input::read_u32("Station class: ", 1, u32::MAX)?;
    let draft = StationDraft {
        name,
        total_workshops,
        active_workshops,
        station_class,
    };
    match inventory.add_station(draft) {
        Ok(id) => println!("Station added with ID {id}."),
        Err(err) => println!("Cannot add station: {err}"),
    }
    Ok(())
}

fn view_all(inventory: &Inventory) {
    if inventory.is_empty() {
        println!("No records yet.");
        return;
    }
    if inventory.pipe_count() > 0 {
        println!("\n=== Pipes ===");
        for pipe in inventory.pipes() {
            println!("{pipe}");
        }
    }
    if inventory.station_count() > 0 {
        println!("\n=== Compressor stations ===");
        for station in inventory.stations() {
            println!("{station}");
        }
    }
}

fn edit_pipe(inventory: &mut Inventory) -> io::Result<()> {
    if inventory.pipe_count() == 0 {
        println!("No pipes available.");
        return Ok(());
    }
    for pipe in inventory.pipes() {
        println!("{pipe}");
    }
    let id = input::read_id("Pipe ID to edit: ")?;
    println!("1. Toggle repair status\n2. Edit parameters");
    match input::read_u32("Choose an action: ", 1, 2)? {
        1 => match toggle_pipe_repair(inventory, id) {
            Ok(true) => println!("Pipe {id} is now under repair."),
            Ok(false) => println!("Pipe {id} is now in service."),
            Err(err) => println!("{err}"),
        },
        _ => {
            let update = PipeUpdate {
                name: input::read_nonempty_line("New name: ")?,
                length_km: input::read_f64("New length (km): ", 0.001, f64::MAX)?,
                diameter_mm: input::read_u32("New diameter (mm): ", 1, u32::MAX)?,
            };
            match update_pipe(inventory, id, update) {
                Ok(()) => println!("Pipe {id} updated."),
                Err(err) => println!("{err}"),
            }
        }
    }
    Ok(())
}

fn edit_station(inventory: &mut Inventory) -> io::Result<()> {
    if inventory.station_count() == 0 {
        println!("No stations available.");
        return Ok(());
    }
    for station in inventory.stations() {
        println!("{station}");
    }
    let id = input::read_id("Station ID to edit: ")?;
    println!("1. Start/stop a workshop\n2. Edit parameters");
    match input::read_u32("Choose an action: ", 1, 2)? {
        1 => {
            println!("1. Start a workshop\n2. Stop a workshop");
            let action = match input::read_u32("Choose an action: ", 1, 2)? {
                1 => WorkshopAction::Start,
                _ => WorkshopAction::Stop,
            };
            match adjust_workshops(inventory, id, action) {
                Ok(true) => println!("Done."),
                Ok(false) => println!("No change: station is already at that bound."),
                Err(err) => println!("{err}"),
            }
        }
        _ => {
            let update = StationUpdate {
                name: input::read_nonempty_line("New name: ")?,
                total_workshops: input::read_u32("New total workshops: ", 1, u32::MAX)?,
                station_class: input::read_u32("New station class: ", 1, u32::MAX)?,
            };
            match update_station(inventory, id, update) {
                Ok(()) => println!("Station {id} updated (active workshops clamped if needed)."),
                Err(err) => println!("{err}"),
            }
        }
    }
    Ok(())
}

/// Resolves a token selection and reports skipped tokens. Returns `None`
/// when nothing was selected (operation aborted, no records touched).
fn resolve_selection(resolved: TokenSelection) -> Option<Selection> {
    for warning in &resolved.warnings {
        println!("{warning}");
        warn!("event=selection_warning module=cli detail={warning}");
    }
    if resolved.selection.is_empty() {
        println!("Nothing selected; operation aborted.");
        return None;
    }
    Some(resolved.selection)
}

fn batch_edit_pipes(inventory: &mut Inventory) -> io::Result<()> {
    if inventory.pipe_count() == 0 {
        println!("No pipes available.");
        return Ok(());
    }
    for pipe in inventory.pipes() {
        println!("{pipe}");
    }
    let tokens = input::read_selection("Pipe IDs (comma-separated) or `all`: ")?;
    let Some(selection) = resolve_selection(select_pipes(inventory, &tokens)) else {
        return Ok(());
    };
    println!(
        "1. Set diameter\n2. Mark under repair\n3. Mark in service\n4. Toggle repair\n5. Delete"
    );
    match input::read_u32("Choose an action: ", 1, 5)? {
        1 => {
            let diameter_mm = input::read_u32("New diameter (mm): ", 1, u32::MAX)?;
            let count = apply_pipe_edit(inventory, &selection, PipeBatchEdit::SetDiameter(diameter_mm));
            println!("Updated {count} pipes.");
        }
        2 => {
            let count = apply_pipe_edit(inventory, &selection, PipeBatchEdit::SetRepair(true));
            println!("Updated {count} pipes.");
        }
        3 => {
            let count = apply_pipe_edit(inventory, &selection, PipeBatchEdit::SetRepair(false));
            println!("Updated {count} pipes.");
        }
        4 => {
            let count = apply_pipe_edit(inventory, &selection, PipeBatchEdit::ToggleRepair);
            println!("Updated {count} pipes.");
        }
        _ => {
            let removed = remove_selected_pipes(inventory, &selection);
            println!("Deleted {removed} pipes.");
        }
    }
    Ok(())
}

fn batch_edit_stations(inventory: &mut Inventory) -> io::Result<()> {
    if inventory.station_count() == 0 {
        println!("No stations available.");
        return Ok(());
    }
    for station in inventory.stations() {
        println!("{station}");
    }
    let tokens = input::read_selection("Station IDs (comma-separated) or `all`: ")?;
    let Some(selection) = resolve_selection(select_stations(inventory, &tokens)) else {
        return Ok(());
    };
    println!("1. Start a workshop each\n2. Stop a workshop each\n3. Set class\n4. Delete");
    match input::read_u32("Choose an action: ", 1, 4)? {
        1 => {
            let count = apply_station_edit(inventory, &selection, StationBatchEdit::StartWorkshop);
            println!("Processed {count} stations (saturated ones left unchanged).");
        }
        2 => {
            let count = apply_station_edit(inventory, &selection, StationBatchEdit::StopWorkshop);
            println!("Processed {count} stations (idle ones left unchanged).");
        }
        3 => {
            let station_class = input::read_u32("New station class: ", 1, u32::MAX)?;
            let count =
                apply_station_edit(inventory, &selection, StationBatchEdit::SetClass(station_class));
            println!("Updated {count} stations.");
        }
        _ => {
            let removed = remove_selected_stations(inventory, &selection);
            println!("Deleted {removed} stations.");
        }
    }
    Ok(())
}

fn search_pipes(inventory: &Inventory) -> io::Result<()> {
    if inventory.pipe_count() == 0 {
        println!("No pipes exist yet.");
        return Ok(());
    }
    println!("1. By name\n2. By repair status");
    let selection = match input::read_u32("Choose a filter: ", 1, 2)? {
        1 => {
            let term = input::read_nonempty_line("Name contains: ")?;
            pipes_by_name(inventory, &term)
        }
        _ => {
            println!("1. Under repair\n2. In service");
            let under_repair = input::read_u32("Choose a status: ", 1, 2)? == 1;
            pipes_by_repair(inventory, under_repair)
        }
    };
    if selection.is_empty() {
        println!("No pipes matched the filter.");
        return Ok(());
    }
    println!("Matched {} pipes:", selection.len());
    for &position in selection.positions() {
        if let Some(pipe) = inventory.pipe_at(position) {
            println!("{pipe}");
        }
    }
    Ok(())
}

fn search_stations(inventory: &Inventory) -> io::Result<()> {
    if inventory.station_count() == 0 {
        println!("No stations exist yet.");
        return Ok(());
    }
    println!("1. By name\n2. By idle workshop percentage");
    let selection = match input::read_u32("Choose a filter: ", 1, 2)? {
        1 => {
            let term = input::read_nonempty_line("Name contains: ")?;
            stations_by_name(inventory, &term)
        }
        _ => {
            println!("1. Greater than\n2. Less than\n3. Approximately equal");
            let cmp = match input::read_u32("Choose a comparison: ", 1, 3)? {
                1 => NumericCmp::Greater,
                2 => NumericCmp::Less,
                _ => NumericCmp::Approx,
            };
            let target = input::read_f64("Idle percentage (0-100): ", 0.0, 100.0)?;
            stations_by_idle_percent(inventory, cmp, target)
        }
    };
    if selection.is_empty() {
        println!("No stations matched the filter.");
        return Ok(());
    }
    println!("Matched {} stations:", selection.len());
    for &position in selection.positions() {
        if let Some(station) = inventory.station_at(position) {
            println!("{station}");
        }
    }
    Ok(())
}

fn read_save_path() -> io::Result<PathBuf> {
    let mut name = input::read_nonempty_line("File name: ")?;
    if !name.contains('.') {
        name.push_str(".txt");
    }
    Ok(PathBuf::from(name))
}

fn display_path(path: &Path) -> String {
    std::fs::canonicalize(path)
        .unwrap_or_else(|_| path.to_path_buf())
        .display()
        .to_string()
}

fn save(inventory: &Inventory) -> io::Result<()> {
    let path = read_save_path()?;
    match pipenet_core::save_to_path(inventory, &path) {
        Ok(()) => println!("Data saved to {}.", display_path(&path)),
        Err(err) => println!("Save failed: {err}"),
    }
    Ok(())
}

fn load(inventory: &mut Inventory) -> io::Result<()> {
    let path = read_save_path()?;
    match pipenet_core::load_from_path(&path) {
        Ok(loaded) => {
            println!(
                "Loaded {} pipes and {} stations from {}.",
                loaded.pipe_count(),
                loaded.station_count(),
                display_path(&path)
            );
            *inventory = loaded;
        }
        Err(err) => println!("Load failed; keeping current data: {err}"),
    }
    Ok(())
}
