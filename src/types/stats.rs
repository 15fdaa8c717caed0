#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GridStats {
    pub total: usize,
    pub occupied: usize,
    pub free: usize,
    /// Occupancy in whole percent
    pub level: u32,
}

impl GridStats {
    pub fn level_label(&self) -> String {
        format!("{}%", self.level)
    }
}
