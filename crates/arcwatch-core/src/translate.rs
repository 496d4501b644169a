//! Static localized labels for event and map names.
//!
//! These tables are reference data for display layers; the classifiers never
//! apply them. Plain slice lookups keep the tables immutable and free of
//! global state.

/// Localized display labels for known event names.
pub const EVENT_LABELS: &[(&str, &str)] = &[
    ("Electromagnetic Storm", "⚡ Электромагнитная буря"),
    ("Harvester", "🪴 Сборщик"),
    ("Lush Blooms", "🌿 Повышенная растительность"),
    ("Matriarch", "👑 Матриарх"),
    ("Night Raid", "🌙 Ночной рейд"),
    ("Uncovered Caches", "💰 Обнаруженные тайники"),
    ("Launch Tower Loot", "🚀 Добыча с пусковой башни"),
    ("Hidden Bunker", "🏚️ Скрытый бункер"),
    ("Husk Graveyard", "💀 Кладбище ARC"),
    ("Prospecting Probes", "📡 Геологические зонды"),
    ("Cold Snap", "❄️ Холодная вспышка"),
    ("Locked Gate", "🔒 Закрытые врата"),
];

/// Localized display labels for known map names.
pub const MAP_LABELS: &[(&str, &str)] = &[
    ("Dam", "Плотина"),
    ("Buried City", "Погребённый город"),
    ("Spaceport", "Космопорт"),
    ("Blue Gate", "Синие врата"),
    ("Stella Montis", "Стелла Монти"),
];

/// Looks up the localized label for an event name.
pub fn event_label(name: &str) -> Option<&'static str> {
    lookup(EVENT_LABELS, name)
}

/// Looks up the localized label for a map name.
pub fn map_label(name: &str) -> Option<&'static str> {
    lookup(MAP_LABELS, name)
}

fn lookup(table: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, label)| *label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_event_names_resolve() {
        assert_eq!(event_label("Matriarch"), Some("👑 Матриарх"));
        assert_eq!(event_label("Night Raid"), Some("🌙 Ночной рейд"));
    }

    #[test]
    fn known_map_names_resolve() {
        assert_eq!(map_label("Dam"), Some("Плотина"));
        assert_eq!(map_label("Stella Montis"), Some("Стелла Монти"));
    }

    #[test]
    fn unknown_names_are_none() {
        assert_eq!(event_label("Meteor Shower"), None);
        assert_eq!(map_label("Atlantis"), None);
        // Lookups are case-sensitive, matching the wire names exactly.
        assert_eq!(event_label("matriarch"), None);
    }
}
