use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

/// A to-do item as the client works with it. The remote store's row shape
/// lives in [`crate::record`]; the two are translated at that boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: Uuid,

    /// Owning user. Stamped at creation, used only for store scoping.
    pub owner: Uuid,

    pub title: String,

    /// Optional free text; empty means absent.
    pub description: String,

    pub due_date: NaiveDate,

    pub completed: bool,

    /// Assigned by the store at insert, immutable afterwards.
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Completed tasks are never overdue.
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        !self.completed && self.due_date < today
    }
}

/// The editable fields, as produced by a validated form submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub due_date: NaiveDate,
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, TimeZone, Utc};
    use uuid::Uuid;

    use super::Task;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    fn task(due: NaiveDate, completed: bool) -> Task {
        Task {
            id: Uuid::new_v4(),
            owner: Uuid::new_v4(),
            title: "t".to_string(),
            description: String::new(),
            due_date: due,
            completed,
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn overdue_only_before_today_and_only_while_pending() {
        let today = date(2024, 2, 10);

        assert!(task(date(2024, 2, 9), false).is_overdue(today));
        assert!(!task(date(2024, 2, 10), false).is_overdue(today));
        assert!(!task(date(2024, 2, 11), false).is_overdue(today));
        assert!(!task(date(2024, 2, 9), true).is_overdue(today));
    }
}
