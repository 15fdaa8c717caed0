use crate::types::{CellInfo, GridStats};

pub fn compute_stats(cells: &[CellInfo]) -> GridStats {
    let total = cells.len();
    let occupied = cells.iter().filter(|cell| cell.occupied).count();
    let level = if total == 0 {
        0
    } else {
        ((occupied as f64 / total as f64) * 100.0).round() as u32
    };

    GridStats {
        total,
        occupied,
        free: total - occupied,
        level,
    }
}
