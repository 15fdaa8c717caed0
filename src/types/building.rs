/// Building types the server knows how to rent out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildingKind {
    Shop = 1,
    Hospital = 2,
    Museum = 3,
    PostOffice = 4,
    Hotel = 5,
}

impl BuildingKind {
    pub const ALL: [BuildingKind; 5] = [
        BuildingKind::Shop,
        BuildingKind::Hospital,
        BuildingKind::Museum,
        BuildingKind::PostOffice,
        BuildingKind::Hotel,
    ];

    pub fn from_type_id(raw: &str) -> Option<BuildingKind> {
        let id: u32 = raw.trim().parse().ok()?;
        Self::ALL.into_iter().find(|kind| *kind as u32 == id)
    }

    pub fn name(self) -> &'static str {
        match self {
            BuildingKind::Shop => "🏪 Магазин",
            BuildingKind::Hospital => "🏥 Больница",
            BuildingKind::Museum => "🏛️ Музей",
            BuildingKind::PostOffice => "📮 Почта",
            BuildingKind::Hotel => "🏨 Отель",
        }
    }

    /// Rental price charged by the server
    pub fn price(self) -> u32 {
        match self {
            BuildingKind::Shop => 100,
            BuildingKind::Hospital => 150,
            BuildingKind::Museum => 200,
            BuildingKind::PostOffice => 120,
            BuildingKind::Hotel => 180,
        }
    }

    pub fn hint(self, currency: &str) -> String {
        format!("{} — {} {}", self.name(), self.price(), currency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_ids_resolve() {
        assert_eq!(BuildingKind::from_type_id("1"), Some(BuildingKind::Shop));
        assert_eq!(BuildingKind::from_type_id(" 5 "), Some(BuildingKind::Hotel));
        assert_eq!(BuildingKind::from_type_id("0"), None);
        assert_eq!(BuildingKind::from_type_id("6"), None);
        assert_eq!(BuildingKind::from_type_id("shop"), None);
    }

    #[test]
    fn test_hint_includes_price() {
        assert_eq!(BuildingKind::Museum.hint("руб."), "🏛️ Музей — 200 руб.");
    }
}
