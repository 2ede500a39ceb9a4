use super::{Catalog, TranslationStatus};

/// Completion counters for one catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CatalogStats {
    pub finished: usize,
    pub unfinished: usize,
    pub obsolete: usize,
}

impl CatalogStats {
    /// Entries used at runtime or waiting for translation.
    pub fn active(&self) -> usize {
        self.finished + self.unfinished
    }

    pub fn total(&self) -> usize {
        self.active() + self.obsolete
    }

    /// Percentage of active entries that are finished; 100 for an empty catalog.
    pub fn completion(&self) -> f64 {
        if self.active() == 0 {
            100.0
        } else {
            self.finished as f64 * 100.0 / self.active() as f64
        }
    }
}

impl std::ops::AddAssign for CatalogStats {
    fn add_assign(&mut self, other: Self) {
        self.finished += other.finished;
        self.unfinished += other.unfinished;
        self.obsolete += other.obsolete;
    }
}

impl Catalog {
    pub fn stats(&self) -> CatalogStats {
        let mut stats = CatalogStats::default();
        for (_, entry) in self.entries() {
            match entry.status {
                TranslationStatus::Final => stats.finished += 1,
                TranslationStatus::Unfinished => stats.unfinished += 1,
                TranslationStatus::Obsolete => stats.obsolete += 1,
            }
        }
        stats
    }
}
