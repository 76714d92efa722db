//! Status aggregation for the dashboard ("Indicadores").
//!
//! Percentages are rounded per bucket, independently of each other, so the
//! four buckets are not guaranteed to add up to exactly 100.

use serde::{Deserialize, Serialize};

use crate::status::PlanoStatus;

/// Counts of plan actions per status over an unfiltered set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusSummary {
    pub total: u64,
    pub planejado: u64,
    pub em_andamento: u64,
    pub concluido: u64,
    pub atrasado: u64,
}

/// One dashboard card: a status with its count and rounded share.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusBucket {
    pub status: PlanoStatus,
    pub count: u64,
    pub percentage: u32,
}

impl StatusSummary {
    /// Count every status in `statuses`.
    pub fn from_statuses<I>(statuses: I) -> Self
    where
        I: IntoIterator<Item = PlanoStatus>,
    {
        let mut summary = Self::default();
        for status in statuses {
            summary.total += 1;
            match status {
                PlanoStatus::Planejado => summary.planejado += 1,
                PlanoStatus::EmAndamento => summary.em_andamento += 1,
                PlanoStatus::Concluido => summary.concluido += 1,
                PlanoStatus::Atrasado => summary.atrasado += 1,
            }
        }
        summary
    }

    pub fn count(&self, status: PlanoStatus) -> u64 {
        match status {
            PlanoStatus::Planejado => self.planejado,
            PlanoStatus::EmAndamento => self.em_andamento,
            PlanoStatus::Concluido => self.concluido,
            PlanoStatus::Atrasado => self.atrasado,
        }
    }

    /// Share of `status` in whole percent. Zero when there are no rows.
    pub fn percentage(&self, status: PlanoStatus) -> u32 {
        percentage(self.count(status), self.total)
    }

    /// One bucket per status, in [`PlanoStatus::ALL`] order.
    pub fn buckets(&self) -> [StatusBucket; 4] {
        PlanoStatus::ALL.map(|status| StatusBucket {
            status,
            count: self.count(status),
            percentage: self.percentage(status),
        })
    }

    /// "Taxa de Conclusão".
    pub fn completion_rate(&self) -> u32 {
        self.percentage(PlanoStatus::Concluido)
    }

    /// "Ações em Execução".
    pub fn in_progress_rate(&self) -> u32 {
        self.percentage(PlanoStatus::EmAndamento)
    }

    /// "Taxa de Atraso".
    pub fn late_rate(&self) -> u32 {
        self.percentage(PlanoStatus::Atrasado)
    }
}

/// `round(100 * count / total)`, with `total == 0` yielding 0.
///
/// Halves round away from zero, which for these non-negative inputs is the
/// same as rounding half up.
pub fn percentage(count: u64, total: u64) -> u32 {
    if total == 0 {
        return 0;
    }
    ((count as f64 / total as f64) * 100.0).round() as u32
}
