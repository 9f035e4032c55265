//! Text rendering of a board
//!
//! Hex rows are indented by their distance from the middle row so the
//! diamond-shaped storage grid prints as a hexagon.

use reversi_core::{Board, Tile, Topology};

pub fn render(board: &Board, topology: Topology, side_len: usize) -> String {
    board
        .rows()
        .enumerate()
        .map(|(row, cells)| {
            let indent = match topology {
                Topology::Hex => row.abs_diff(side_len - 1),
                Topology::Square => 0,
            };
            let tiles: Vec<String> = cells.iter().flatten().map(Tile::to_string).collect();
            format!("{}{}", " ".repeat(indent), tiles.join(" "))
        })
        .collect::<Vec<_>>()
        .join("\n")
}
