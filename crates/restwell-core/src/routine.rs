//! Night-routine checklist.
//!
//! Five fixed items, independently toggleable. The completion ratio is
//! derived on every read -- there is no stored counter to drift.

use chrono::Utc;
use serde::Serialize;

use crate::events::Event;

#[derive(Debug, Clone, Serialize)]
pub struct RoutineItem {
    pub id: u32,
    pub label: &'static str,
    pub completed: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct RoutineChecklist {
    items: Vec<RoutineItem>,
}

impl Default for RoutineChecklist {
    fn default() -> Self {
        let labels = [
            "Dim the lights",
            "Put away devices",
            "Gentle stretching",
            "Breathing exercise",
            "Read or meditate",
        ];
        Self {
            items: labels
                .iter()
                .enumerate()
                .map(|(i, &label)| RoutineItem {
                    id: i as u32 + 1,
                    label,
                    completed: false,
                })
                .collect(),
        }
    }
}

impl RoutineChecklist {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[RoutineItem] {
        &self.items
    }

    pub fn completed_count(&self) -> usize {
        self.items.iter().filter(|i| i.completed).count()
    }

    /// 0.0 .. 1.0 completion ratio, recomputed on each call.
    pub fn progress(&self) -> f64 {
        if self.items.is_empty() {
            return 0.0;
        }
        self.completed_count() as f64 / self.items.len() as f64
    }

    /// Flip one item. Unknown ids are a silent no-op; the id set is fixed
    /// and under the view's control.
    pub fn toggle(&mut self, id: u32) -> Option<Event> {
        let item = self.items.iter_mut().find(|i| i.id == id)?;
        item.completed = !item.completed;
        Some(Event::RoutineToggled {
            id,
            completed: item.completed,
            at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_checklist_has_5_items() {
        let list = RoutineChecklist::new();
        assert_eq!(list.items().len(), 5);
        assert_eq!(list.completed_count(), 0);
        assert_eq!(list.progress(), 0.0);
    }

    #[test]
    fn toggle_is_its_own_inverse() {
        let mut list = RoutineChecklist::new();
        list.toggle(3);
        assert!(list.items()[2].completed);
        list.toggle(3);
        assert!(!list.items()[2].completed);
    }

    #[test]
    fn unknown_id_is_a_no_op() {
        let mut list = RoutineChecklist::new();
        assert!(list.toggle(42).is_none());
        assert_eq!(list.completed_count(), 0);
    }

    #[test]
    fn full_completion_gives_ratio_one() {
        let mut list = RoutineChecklist::new();
        for id in 1..=5 {
            list.toggle(id);
        }
        assert_eq!(list.progress(), 1.0);
    }

    #[test]
    fn single_toggle_gives_one_fifth() {
        let mut list = RoutineChecklist::new();
        list.toggle(1);
        assert_eq!(list.progress(), 0.2);
    }
}
