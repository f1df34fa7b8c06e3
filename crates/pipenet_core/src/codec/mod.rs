//! Line-oriented persistence codec for the whole inventory.
//!
//! # Responsibility
//! - Serialize the store (records plus allocator counters) to a
//!   deterministic newline-separated text layout, and restore it.
//! - Detect the legacy layout that predates allocator counter headers.
//!
//! # Invariants
//! - Decoding builds a fresh [`Inventory`]; the live store is only replaced
//!   by the caller on full success, so a partial parse never leaks.
//! - A mismatched `PIPES`/`STATIONS` section header is fatal to the load.
//! - Legacy files (no `NEXT_*_ID` lines) re-initialize both allocators to 1
//!   and then advance them past every decoded record ID.
//!
//! # Format
//! ```text
//! NEXT_PIPE_ID <int>
//! NEXT_STATION_ID <int>
//! PIPES <count>
//!   <id> / <name> / <length> / <diameter> / <underRepair 0|1>, one per line
//! STATIONS <count>
//!   <id> / <name> / <total> / <active> / <class>, one per line
//! ```

use crate::model::pipe::Pipe;
use crate::model::station::CompressorStation;
use crate::model::RecordId;
use crate::store::inventory::Inventory;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

const NEXT_PIPE_ID_HEADER: &str = "NEXT_PIPE_ID";
const NEXT_STATION_ID_HEADER: &str = "NEXT_STATION_ID";
const PIPES_HEADER: &str = "PIPES";
const STATIONS_HEADER: &str = "STATIONS";

/// Result type for codec APIs.
pub type CodecResult<T> = Result<T, CodecError>;

/// Codec error for save/load operations.
///
/// All variants are fatal to the single operation that raised them; the
/// caller keeps its previous in-memory state.
#[derive(Debug)]
pub enum CodecError {
    /// Underlying file or stream failure.
    Io(std::io::Error),
    /// A structural section header did not match the expected literal.
    BadSectionHeader { expected: &'static str, found: String },
    /// The file ended before the declared layout was complete.
    UnexpectedEof { line: usize },
    /// A scalar field failed to parse.
    InvalidField { line: usize, message: String },
    /// A decoded record violated a model invariant.
    InvalidRecord { line: usize, message: String },
}

impl Display for CodecError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "{err}"),
            Self::BadSectionHeader { expected, found } => {
                write!(f, "bad save-file format: expected `{expected}` section header, found `{found}`")
            }
            Self::UnexpectedEof { line } => {
                write!(f, "save file ended unexpectedly at line {line}")
            }
            Self::InvalidField { line, message } => {
                write!(f, "invalid value at line {line}: {message}")
            }
            Self::InvalidRecord { line, message } => {
                write!(f, "invalid record ending at line {line}: {message}")
            }
        }
    }
}

impl Error for CodecError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CodecError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

/// Serializes the inventory to a file, creating or truncating it.
///
/// No atomic-rename or fsync durability is attempted; a crash mid-write can
/// leave a truncated file.
pub fn save_to_path(inventory: &Inventory, path: &Path) -> CodecResult<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_inventory(&mut writer, inventory)?;
    writer.flush()?;
    info!(
        "event=inventory_saved module=codec pipes={} stations={} path={}",
        inventory.pipe_count(),
        inventory.station_count(),
        path.display()
    );
    Ok(())
}

/// Deserializes a file into a fresh inventory.
///
/// The caller swaps the result into the live store only on `Ok`, so a
/// malformed file never leaves the store half-loaded.
pub fn load_from_path(path: &Path) -> CodecResult<Inventory> {
    let file = File::open(path)?;
    let inventory = read_inventory(BufReader::new(file))?;
    info!(
        "event=inventory_loaded module=codec pipes={} stations={} path={}",
        inventory.pipe_count(),
        inventory.station_count(),
        path.display()
    );
    Ok(inventory)
}

/// Writes the full store in the deterministic line layout.
pub fn write_inventory<W: Write>(writer: &mut W, inventory: &Inventory) -> CodecResult<()> {
    writeln!(writer, "{NEXT_PIPE_ID_HEADER} {}", inventory.next_pipe_id())?;
    writeln!(
        writer,
        "{NEXT_STATION_ID_HEADER} {}",
        inventory.next_station_id()
    )?;

    writeln!(writer, "{PIPES_HEADER} {}", inventory.pipe_count())?;
    for pipe in inventory.pipes() {
        writeln!(writer, "{}", pipe.id)?;
        writeln!(writer, "{}", pipe.name)?;
        writeln!(writer, "{}", pipe.length_km)?;
        writeln!(writer, "{}", pipe.diameter_mm)?;
        writeln!(writer, "{}", u8::from(pipe.under_repair))?;
    }

    writeln!(writer, "{STATIONS_HEADER} {}", inventory.station_count())?;
    for station in inventory.stations() {
        writeln!(writer, "{}", station.id)?;
        writeln!(writer, "{}", station.name)?;
        writeln!(writer, "{}", station.total_workshops)?;
        writeln!(writer, "{}", station.active_workshops)?;
        writeln!(writer, "{}", station.station_class)?;
    }

    Ok(())
}

/// Reads the full store from the line layout, accepting both the current
/// format and the legacy variant without allocator headers.
pub fn read_inventory<R: BufRead>(reader: R) -> CodecResult<Inventory> {
    let lines = reader.lines().collect::<Result<Vec<String>, _>>()?;
    let mut cursor = Lines::new(lines);

    // Two-phase legacy detection: peek the first line, branch on whether it
    // carries the allocator header, only then consume.
    let has_counters = cursor
        .peek()
        .is_some_and(|line| line.starts_with(NEXT_PIPE_ID_HEADER));

    let mut inventory = if has_counters {
        let next_pipe_id = parse_header(&mut cursor, NEXT_PIPE_ID_HEADER)?;
        let next_station_id = parse_header(&mut cursor, NEXT_STATION_ID_HEADER)?;
        Inventory::resume_ids(next_pipe_id, next_station_id)
    } else {
        warn!("event=legacy_save_format module=codec detail=no_allocator_headers");
        Inventory::new()
    };

    let pipe_count = parse_header(&mut cursor, PIPES_HEADER)?;
    for _ in 0..pipe_count {
        let pipe = read_pipe(&mut cursor)?;
        let line = cursor.line_no();
        inventory
            .restore_pipe(pipe)
            .map_err(|err| CodecError::InvalidRecord {
                line,
                message: err.to_string(),
            })?;
    }

    let station_count = parse_header(&mut cursor, STATIONS_HEADER)?;
    for _ in 0..station_count {
        let station = read_station(&mut cursor)?;
        let line = cursor.line_no();
        inventory
            .restore_station(station)
            .map_err(|err| CodecError::InvalidRecord {
                line,
                message: err.to_string(),
            })?;
    }

    Ok(inventory)
}

fn read_pipe(cursor: &mut Lines) -> CodecResult<Pipe> {
    let id: RecordId = parse_value(cursor, "pipe id")?;
    let name = cursor.next_line()?.to_string();
    let length_km: f64 = parse_value(cursor, "pipe length")?;
    let diameter_mm: u32 = parse_value(cursor, "pipe diameter")?;
    let under_repair = parse_flag(cursor, "pipe repair flag")?;
    Ok(Pipe {
        id,
        name,
        length_km,
        diameter_mm,
        under_repair,
    })
}

fn read_station(cursor: &mut Lines) -> CodecResult<CompressorStation> {
    let id: RecordId = parse_value(cursor, "station id")?;
    let name = cursor.next_line()?.to_string();
    let total_workshops: u32 = parse_value(cursor, "station total workshops")?;
    let mut active_workshops: u32 = parse_value(cursor, "station active workshops")?;
    let station_class: u32 = parse_value(cursor, "station class")?;

    // Old writers could persist more active workshops than the capacity.
    // Clamp on decode so the invariant holds from the first live moment.
    if active_workshops > total_workshops {
        warn!(
            "event=station_clamped_on_load module=codec id={id} active={active_workshops} total={total_workshops}"
        );
        active_workshops = total_workshops;
    }

    Ok(CompressorStation {
        id,
        name,
        total_workshops,
        active_workshops,
        station_class,
    })
}

/// Parses a `<LITERAL> <count>` line, failing on a header mismatch.
fn parse_header(cursor: &mut Lines, expected: &'static str) -> CodecResult<u64> {
    let line_no = cursor.line_no() + 1;
    let line = cursor.next_line()?;
    let (header, value) = line.split_once(' ').unwrap_or((line, ""));
    if header != expected {
        return Err(CodecError::BadSectionHeader {
            expected,
            found: header.to_string(),
        });
    }
    value
        .trim()
        .parse::<u64>()
        .map_err(|_| CodecError::InvalidField {
            line: line_no,
            message: format!("`{expected}` count `{value}` is not a non-negative integer"),
        })
}

fn parse_value<T: std::str::FromStr>(cursor: &mut Lines, field: &str) -> CodecResult<T> {
    let line_no = cursor.line_no() + 1;
    let line = cursor.next_line()?;
    line.trim().parse::<T>().map_err(|_| CodecError::InvalidField {
        line: line_no,
        message: format!("{field} `{line}` is not valid"),
    })
}

fn parse_flag(cursor: &mut Lines, field: &str) -> CodecResult<bool> {
    let line_no = cursor.line_no() + 1;
    let line = cursor.next_line()?;
    match line.trim() {
        "0" => Ok(false),
        "1" => Ok(true),
        other => Err(CodecError::InvalidField {
            line: line_no,
            message: format!("{field} `{other}` must be 0 or 1"),
        }),
    }
}

/// Line cursor with 1-based position tracking for error reporting.
struct Lines {
    lines: Vec<String>,
    next: usize,
}

impl Lines {
    fn new(lines: Vec<String>) -> Self {
        Self { lines, next: 0 }
    }

    fn peek(&self) -> Option<&str> {
        self.lines.get(self.next).map(String::as_str)
    }

    fn next_line(&mut self) -> CodecResult<&str> {
        let line = self
            .lines
            .get(self.next)
            .ok_or(CodecError::UnexpectedEof {
                line: self.next + 1,
            })?;
        self.next += 1;
        Ok(line)
    }

    /// Number of lines consumed so far (equals the 1-based number of the
    /// last line read).
    fn line_no(&self) -> usize {
        self.next
    }
}
