//! Equality filters for the plan listing.
//!
//! A filter is a conjunction of optional equality constraints. `None` means
//! "no constraint on this field" and is distinct from any concrete value.

use serde::{Deserialize, Serialize};

use crate::status::PlanoStatus;
use crate::types::DbId;

/// Filters accepted by `GET /plano-anual`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanoFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regional_id: Option<DbId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub responsavel_id: Option<DbId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<PlanoStatus>,
}

impl PlanoFilter {
    pub fn is_empty(&self) -> bool {
        self.regional_id.is_none() && self.responsavel_id.is_none() && self.status.is_none()
    }

    /// Whether a row with the given fields satisfies every supplied constraint.
    pub fn matches(&self, regional_id: DbId, responsavel_id: DbId, status: PlanoStatus) -> bool {
        self.regional_id.is_none_or(|id| id == regional_id)
            && self.responsavel_id.is_none_or(|id| id == responsavel_id)
            && self.status.is_none_or(|s| s == status)
    }

    /// Change the regional constraint.
    ///
    /// The responsável constraint is always dropped: the previous choice may
    /// not belong to the new regional.
    pub fn select_regional(&mut self, regional_id: Option<DbId>) {
        self.regional_id = regional_id;
        self.responsavel_id = None;
    }

    pub fn select_responsavel(&mut self, responsavel_id: Option<DbId>) {
        self.responsavel_id = responsavel_id;
    }

    pub fn select_status(&mut self, status: Option<PlanoStatus>) {
        self.status = status;
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Anything that belongs to exactly one regional.
pub trait BelongsToRegional {
    fn regional_id(&self) -> DbId;
}

/// The responsáveis a picker should offer for the selected regional.
///
/// With no regional selected every responsável is offered.
pub fn options_for_regional<T: BelongsToRegional>(items: &[T], regional_id: Option<DbId>) -> Vec<&T> {
    items
        .iter()
        .filter(|item| regional_id.is_none_or(|id| item.regional_id() == id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use PlanoStatus::*;

    struct Row {
        regional_id: DbId,
        responsavel_id: DbId,
        status: PlanoStatus,
    }

    impl BelongsToRegional for Row {
        fn regional_id(&self) -> DbId {
            self.regional_id
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { regional_id: 1, responsavel_id: 10, status: Planejado },
            Row { regional_id: 1, responsavel_id: 11, status: Concluido },
            Row { regional_id: 2, responsavel_id: 20, status: Planejado },
        ]
    }

    fn apply(filter: &PlanoFilter) -> Vec<usize> {
        rows()
            .iter()
            .enumerate()
            .filter(|(_, r)| filter.matches(r.regional_id, r.responsavel_id, r.status))
            .map(|(i, _)| i)
            .collect()
    }

    #[test]
    fn empty_filter_matches_everything() {
        assert!(PlanoFilter::default().is_empty());
        assert_eq!(apply(&PlanoFilter::default()), vec![0, 1, 2]);
    }

    #[test]
    fn filters_are_conjunctive() {
        let filter = PlanoFilter {
            regional_id: Some(1),
            responsavel_id: None,
            status: Some(Planejado),
        };
        assert_eq!(apply(&filter), vec![0]);
    }

    #[test]
    fn single_field_filters() {
        let by_status = PlanoFilter { status: Some(Planejado), ..Default::default() };
        assert_eq!(apply(&by_status), vec![0, 2]);

        let by_responsavel = PlanoFilter { responsavel_id: Some(11), ..Default::default() };
        assert_eq!(apply(&by_responsavel), vec![1]);
    }

    #[test]
    fn selecting_regional_resets_responsavel() {
        let mut filter = PlanoFilter::default();
        filter.select_regional(Some(1));
        filter.select_responsavel(Some(10));
        filter.select_status(Some(Atrasado));

        filter.select_regional(Some(2));
        assert_eq!(filter.regional_id, Some(2));
        assert_eq!(filter.responsavel_id, None);
        assert_eq!(filter.status, Some(Atrasado));
    }

    #[test]
    fn clear_removes_every_constraint() {
        let mut filter = PlanoFilter {
            regional_id: Some(1),
            responsavel_id: Some(2),
            status: Some(Concluido),
        };
        filter.clear();
        assert!(filter.is_empty());
    }

    #[test]
    fn options_follow_selected_regional() {
        let rows = rows();
        assert_eq!(options_for_regional(&rows, None).len(), 3);

        let only_first = options_for_regional(&rows, Some(1));
        assert_eq!(only_first.len(), 2);
        assert!(only_first.iter().all(|r| r.regional_id == 1));

        assert!(options_for_regional(&rows, Some(99)).is_empty());
    }

    #[test]
    fn unset_fields_are_omitted_when_serialized() {
        let filter = PlanoFilter { status: Some(EmAndamento), ..Default::default() };
        let json = serde_json::to_value(filter).unwrap();
        assert_eq!(json, serde_json::json!({ "status": "Em andamento" }));
    }
}
