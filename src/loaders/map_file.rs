//! Plain-text map files.
//!
//! ```text
//! origin_x origin_y width height meters_per_cell
//! v v v ... (width values)      <- row j = 0
//! ...                           <- height rows in total
//! ```
//!
//! Values are signed 8-bit log-odds. Blank lines are ignored.

use std::path::Path;

use glam::Vec2;

use crate::grid::OccupancyGrid;
use crate::types::{MapInfo, PlannerError};

pub fn load_map(path: impl AsRef<Path>) -> Result<OccupancyGrid, PlannerError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)?;
    let grid = parse_map(&text)?;
    log::info!(
        "loaded {}x{} map at {} m/cell with {} occupied cells from {}",
        grid.width(),
        grid.height(),
        grid.info().resolution,
        grid.occupied_count(),
        path.display()
    );
    Ok(grid)
}

pub fn parse_map(text: &str) -> Result<OccupancyGrid, PlannerError> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line))
        .filter(|(_, line)| !line.trim().is_empty());

    let (header_line, header) = lines.next().ok_or_else(|| PlannerError::Parse {
        line: 1,
        message: "missing header".to_string(),
    })?;
    let info = parse_header(header_line, header)?;
    info.validate()?;

    let width = info.width as usize;
    let mut data = Vec::with_capacity(info.cell_count());
    for row in 0..info.height {
        let (line_no, line) = lines.next().ok_or_else(|| PlannerError::Parse {
            line: header_line + row as usize + 1,
            message: format!("expected {} rows, found {}", info.height, row),
        })?;

        let start = data.len();
        for token in line.split_whitespace() {
            let value = token.parse::<i8>().map_err(|e| PlannerError::Parse {
                line: line_no,
                message: format!("invalid cell value {token:?}: {e}"),
            })?;
            data.push(value);
        }
        let found = data.len() - start;
        if found != width {
            return Err(PlannerError::Parse {
                line: line_no,
                message: format!("expected {width} values, found {found}"),
            });
        }
    }

    if let Some((line_no, _)) = lines.next() {
        log::warn!("ignoring trailing data from line {line_no}");
    }

    OccupancyGrid::new(info, data)
}

fn parse_header(line_no: usize, header: &str) -> Result<MapInfo, PlannerError> {
    let fields: Vec<&str> = header.split_whitespace().collect();
    if fields.len() != 5 {
        return Err(PlannerError::Parse {
            line: line_no,
            message: format!(
                "header needs origin_x origin_y width height meters_per_cell, got {} fields",
                fields.len()
            ),
        });
    }

    let number = |idx: usize, name: &str| -> Result<f64, PlannerError> {
        fields[idx].parse::<f64>().map_err(|e| PlannerError::Parse {
            line: line_no,
            message: format!("invalid {name} {:?}: {e}", fields[idx]),
        })
    };

    let origin_x = number(0, "origin_x")?;
    let origin_y = number(1, "origin_y")?;
    let width = dimension(number(2, "width")?, "width")?;
    let height = dimension(number(3, "height")?, "height")?;
    let resolution = number(4, "meters_per_cell")?;

    Ok(MapInfo {
        width,
        height,
        resolution: resolution as f32,
        origin: Vec2::new(origin_x as f32, origin_y as f32),
    })
}

/// Dimensions may be written as `100` or `100.0`.
fn dimension(value: f64, name: &str) -> Result<u32, PlannerError> {
    if !value.is_finite() || value.fract() != 0.0 || value <= 0.0 || value > f64::from(u32::MAX) {
        return Err(PlannerError::InvalidMetadata(format!(
            "{name} must be a positive integer, got {value}"
        )));
    }
    Ok(value as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Cell;

    #[test]
    fn parses_header_and_rows() {
        let text = "-2.525 -2.525 3 2 0.05\n0 0 100\n-5 1 0\n";
        let grid = parse_map(text).unwrap();
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.info().resolution, 0.05);
        assert_eq!(grid.info().origin, Vec2::new(-2.525, -2.525));
        assert_eq!(grid.get(Cell::new(2, 0)), Some(&100));
        assert_eq!(grid.get(Cell::new(0, 1)), Some(&-5));
        assert!(grid.is_occupied(Cell::new(1, 1)));
    }

    #[test]
    fn accepts_float_dimensions_and_blank_lines() {
        let text = "0 0 2.0 1.0 1\n\n1 0\n\n";
        let grid = parse_map(text).unwrap();
        assert_eq!((grid.width(), grid.height()), (2, 1));
    }

    #[test]
    fn rejects_bad_input() {
        assert!(matches!(parse_map(""), Err(PlannerError::Parse { line: 1, .. })));
        assert!(parse_map("0 0 2 2\n0 0\n0 0\n").is_err());
        assert!(matches!(
            parse_map("0 0 0 2 1\n"),
            Err(PlannerError::InvalidMetadata(_))
        ));
        assert!(matches!(
            parse_map("0 0 2 2 0\n0 0\n0 0\n"),
            Err(PlannerError::InvalidMetadata(_))
        ));
        assert!(matches!(
            parse_map("0 0 2 2 1\n0 0\n0\n"),
            Err(PlannerError::Parse { line: 3, .. })
        ));
        assert!(matches!(
            parse_map("0 0 2 2 1\n0 0\n"),
            Err(PlannerError::Parse { line: 3, .. })
        ));
        assert!(matches!(
            parse_map("0 0 2 1 1\n0 200\n"),
            Err(PlannerError::Parse { line: 2, .. })
        ));
        assert!(parse_map("0 0 2.5 1 1\n0 0\n").is_err());
    }

    #[test]
    fn header_matches_map_string() {
        let text = "-2.525 -2.525 2 1 0.05\n0 7\n";
        let grid = parse_map(text).unwrap();
        assert_eq!(grid.as_map_string(), "-2.525 -2.525 2 1 0.05 0 7");
    }
}
