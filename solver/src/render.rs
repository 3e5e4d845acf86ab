//! ASCII overlay of a search result on its grid.
//!
//! `#` blocked, `*` on the path, `+` visited but off the path, otherwise the
//! cell's own symbol (`.` when open). `S` and `G` are drawn last.

use colored::Colorize;

use crate::algorithms::pathfinding::SearchResult;
use crate::maze::{Cell, Grid};

pub const PATH: char = '*';
pub const VISITED: char = '+';
pub const START: char = 'S';
pub const GOAL: char = 'G';

pub fn render(grid: &Grid, result: &SearchResult) -> String {
    let mut on_path = vec![false; grid.len()];
    for &id in &result.path {
        on_path[id] = true;
    }

    let mut canvas: Vec<char> = (0..grid.len())
        .map(|id| match grid.cell(id) {
            Cell::Blocked => Cell::BLOCKED,
            _ if on_path[id] => PATH,
            _ if result.visited[id] => VISITED,
            cell => cell.as_char(),
        })
        .collect();

    canvas[grid.start_index()] = START;
    canvas[grid.goal_index()] = GOAL;

    let mut out = String::with_capacity(grid.len() + grid.height());
    for row in canvas.chunks(grid.width()) {
        out.extend(row);
        out.push('\n');
    }
    out
}

pub fn status_line(result: &SearchResult) -> String {
    match result.steps() {
        Some(steps) => format!(
            "{}: {} steps, {} cells visited",
            "path found".green().bold(),
            steps,
            result.visited_count()
        ),
        None => format!(
            "{}: {} cells visited",
            "no path found".red().bold(),
            result.visited_count()
        ),
    }
}
