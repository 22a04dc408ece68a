use std::path::Path;

use image::{Rgb, RgbImage};

use crate::grid::OccupancyGrid;
use crate::search::SearchResult;
use crate::types::{Cell, PlannerError};

const FREE_COLOR: Rgb<u8> = Rgb([254, 254, 254]);
const OCCUPIED_COLOR: Rgb<u8> = Rgb([0, 0, 0]);
const VISITED_COLOR: Rgb<u8> = Rgb([170, 200, 240]);
const PATH_COLOR: Rgb<u8> = Rgb([220, 30, 30]);
const START_COLOR: Rgb<u8> = Rgb([30, 180, 60]);
const GOAL_COLOR: Rgb<u8> = Rgb([200, 40, 200]);

/// Render a search result over its map, one pixel per cell.
///
/// Layers, bottom to top: occupancy, expanded cells, path, start and goal.
/// Row `j = 0` is written to the **bottom** of the image.
pub fn plan_to_image(
    grid: &OccupancyGrid,
    result: &SearchResult,
    start: Cell,
    goal: Cell,
) -> RgbImage {
    let width = grid.width();
    let height = grid.height();
    let mut img = RgbImage::new(width, height);

    for j in 0..height as i32 {
        for i in 0..width as i32 {
            let color = if grid.is_occupied(Cell::new(i, j)) {
                OCCUPIED_COLOR
            } else {
                FREE_COLOR
            };
            put_cell(&mut img, Cell::new(i, j), color);
        }
    }

    for &cell in &result.visited_cells {
        put_cell(&mut img, cell, VISITED_COLOR);
    }
    for &cell in &result.path {
        put_cell(&mut img, cell, PATH_COLOR);
    }
    put_cell(&mut img, start, START_COLOR);
    put_cell(&mut img, goal, GOAL_COLOR);

    img
}

pub fn save_plan_image(
    path: impl AsRef<Path>,
    grid: &OccupancyGrid,
    result: &SearchResult,
    start: Cell,
    goal: Cell,
) -> Result<(), PlannerError> {
    plan_to_image(grid, result, start, goal).save(path.as_ref())?;
    Ok(())
}

/// Off-image cells are skipped.
fn put_cell(img: &mut RgbImage, cell: Cell, color: Rgb<u8>) {
    let (width, height) = img.dimensions();
    if cell.i < 0 || cell.j < 0 || cell.i as u32 >= width || cell.j as u32 >= height {
        return;
    }
    // Flip vertically so larger j is higher up.
    let y_img = height - 1 - cell.j as u32;
    img.put_pixel(cell.i as u32, y_img, color);
}
