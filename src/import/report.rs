use std::collections::BTreeMap;
use std::fmt;

use crate::entities::ganado::{self, SexoGanado};

/// Statistics for one import run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImportReport {
    pub contest_name: String,
    pub processed: usize,
    pub created: usize,
    pub errors: usize,
    pub owners_created: usize,
    pub stables_created: usize,
    pub deleted_before_import: u64,
    pub by_sex: BTreeMap<SexoGanado, usize>,
    pub by_breed: BTreeMap<String, usize>,
}

impl ImportReport {
    pub fn new(contest_name: impl Into<String>) -> Self {
        Self {
            contest_name: contest_name.into(),
            ..Default::default()
        }
    }

    pub fn record_created(&mut self, animal: &ganado::Model) {
        self.created += 1;
        *self.by_sex.entry(animal.sexo).or_default() += 1;
        *self.by_breed.entry(animal.raza.clone()).or_default() += 1;
    }

    pub fn record_error(&mut self) {
        self.errors += 1;
    }

    /// Share of created animals, rounded to a whole percent.
    pub fn percent_of_created(&self, count: usize) -> u32 {
        if self.created == 0 {
            return 0;
        }
        ((count as f64 / self.created as f64) * 100.0).round() as u32
    }

    /// Emits the summary as a structured event.
    pub fn log(&self) {
        tracing::info!(
            contest = %self.contest_name,
            processed = self.processed,
            created = self.created,
            errors = self.errors,
            owners_created = self.owners_created,
            stables_created = self.stables_created,
            "Import finished"
        );
    }
}

impl fmt::Display for ImportReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(50);
        writeln!(f, "IMPORT STATISTICS: {}", self.contest_name)?;
        writeln!(f, "{rule}")?;
        if self.deleted_before_import > 0 {
            writeln!(f, "Animals removed before import: {}", self.deleted_before_import)?;
        }
        writeln!(f, "Rows processed:   {}", self.processed)?;
        writeln!(f, "Animals created:  {}", self.created)?;
        writeln!(f, "Owners created:   {}", self.owners_created)?;
        writeln!(f, "Stables created:  {}", self.stables_created)?;
        writeln!(f, "Errors:           {}", self.errors)?;
        writeln!(f, "{rule}")?;

        writeln!(f)?;
        writeln!(f, "BY SEX")?;
        for (sex, count) in &self.by_sex {
            writeln!(f, "{}: {} ({}%)", sex.as_str(), count, self.percent_of_created(*count))?;
        }

        writeln!(f)?;
        writeln!(f, "BY BREED")?;
        for (breed, count) in &self.by_breed {
            writeln!(f, "{}: {} ({}%)", breed, count, self.percent_of_created(*count))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report_with(created: usize, by_sex: &[(SexoGanado, usize)], by_breed: &[(&str, usize)]) -> ImportReport {
        ImportReport {
            contest_name: "Feria 2024".into(),
            processed: created + 1,
            created,
            errors: 1,
            by_sex: by_sex.iter().copied().collect(),
            by_breed: by_breed.iter().map(|(b, c)| (b.to_string(), *c)).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn percentages_round_to_whole_numbers() {
        let report = report_with(3, &[], &[]);
        assert_eq!(report.percent_of_created(1), 33);
        assert_eq!(report.percent_of_created(2), 67);
        assert_eq!(report.percent_of_created(3), 100);
    }

    #[test]
    fn percentages_are_zero_without_created_rows() {
        let report = ImportReport::new("Vacía");
        assert_eq!(report.percent_of_created(0), 0);
    }

    #[test]
    fn display_lists_counts_and_distributions() {
        let report = report_with(
            4,
            &[(SexoGanado::Macho, 1), (SexoGanado::Hembra, 3)],
            &[("Holstein", 2), ("Jersey", 2)],
        );

        let text = report.to_string();
        assert!(text.contains("Feria 2024"));
        assert!(text.contains("Rows processed:   5"));
        assert!(text.contains("Animals created:  4"));
        assert!(text.contains("Errors:           1"));
        assert!(text.contains("MACHO: 1 (25%)"));
        assert!(text.contains("HEMBRA: 3 (75%)"));
        assert!(text.contains("Holstein: 2 (50%)"));
        assert!(!text.contains("removed before import"));
    }
}
