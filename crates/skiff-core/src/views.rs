use tracing::trace;

use crate::task::Task;

/// UI-only status selector.
/// Transient: never persisted.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Default,
)]
pub enum StatusFilter {
  #[default]
  All,
  Pending,
  Completed
}

impl StatusFilter {
  pub fn as_key(
    self
  ) -> &'static str {
    match self {
      | Self::All => "all",
      | Self::Pending => "pending",
      | Self::Completed => {
        "completed"
      }
    }
  }

  pub fn from_key(
    key: &str
  ) -> Self {
    match key {
      | "pending" => Self::Pending,
      | "completed" => {
        Self::Completed
      }
      | _ => Self::All
    }
  }
}

/// Why a rendered list came up
/// empty; each variant gets its
/// own copy in the UI.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum EmptyReason {
  NoTasks,
  NoSearchMatches,
  NoStatusMatches(StatusFilter)
}

/// The search term wins over the
/// status filter when both could
/// explain an empty view.
pub fn empty_reason(
  term: &str,
  filter: StatusFilter
) -> EmptyReason {
  if !term.trim().is_empty() {
    EmptyReason::NoSearchMatches
  } else if filter
    != StatusFilter::All
  {
    EmptyReason::NoStatusMatches(
      filter
    )
  } else {
    EmptyReason::NoTasks
  }
}

pub fn matches(
  task: &Task,
  term: &str,
  filter: StatusFilter
) -> bool {
  let status_ok = match filter {
    | StatusFilter::All => true,
    | StatusFilter::Pending => {
      !task.completed
    }
    | StatusFilter::Completed => {
      task.completed
    }
  };
  if !status_ok {
    return false;
  }

  let q = term.to_ascii_lowercase();
  if q.is_empty() {
    return true;
  }

  let ok = task
    .title
    .to_ascii_lowercase()
    .contains(&q)
    || task
      .description
      .to_ascii_lowercase()
      .contains(&q);

  trace!(
    id = %task.id,
    term,
    ok,
    "search match"
  );
  ok
}

pub fn filter_visible_tasks(
  tasks: &[Task],
  term: &str,
  filter: StatusFilter
) -> Vec<Task> {
  tasks
    .iter()
    .filter(|task| {
      matches(task, term, filter)
    })
    .cloned()
    .collect()
}

/// Splits an already-filtered list
/// into the two rendered sections:
/// pending sorted by due date
/// ascending, completed sorted by
/// creation time descending.
pub fn split_sorted(
  visible: &[Task]
) -> (Vec<Task>, Vec<Task>) {
  let mut pending: Vec<Task> =
    visible
      .iter()
      .filter(|task| !task.completed)
      .cloned()
      .collect();
  pending.sort_by_key(|task| {
    task.due_date
  });

  let mut completed: Vec<Task> =
    visible
      .iter()
      .filter(|task| task.completed)
      .cloned()
      .collect();
  completed.sort_by(|a, b| {
    b.created_at.cmp(&a.created_at)
  });

  (pending, completed)
}

#[cfg(test)]
mod tests {
  use chrono::{
    NaiveDate,
    TimeZone,
    Utc
  };
  use uuid::Uuid;

  use super::{
    EmptyReason,
    StatusFilter,
    empty_reason,
    filter_visible_tasks,
    split_sorted
  };
  use crate::task::Task;

  fn task(
    id: u128,
    title: &str,
    completed: bool,
    due: (i32, u32, u32),
    created_second: u32
  ) -> Task {
    Task {
      id: Uuid::from_u128(id),
      owner: Uuid::from_u128(9),
      title: title.to_string(),
      description: String::new(),
      due_date:
        NaiveDate::from_ymd_opt(
          due.0, due.1, due.2
        )
        .expect("valid date"),
      completed,
      created_at: Utc
        .with_ymd_and_hms(
          2024,
          1,
          1,
          0,
          0,
          created_second
        )
        .unwrap()
    }
  }

  fn alpha_beta() -> Vec<Task> {
    vec![
      task(
        1,
        "Alpha",
        false,
        (2024, 1, 5),
        1
      ),
      task(
        2,
        "Beta",
        true,
        (2024, 1, 5),
        2
      ),
    ]
  }

  #[test]
  fn status_filter_selects_exactly()
  {
    let tasks = alpha_beta();

    let completed =
      filter_visible_tasks(
        &tasks,
        "",
        StatusFilter::Completed
      );
    let titles: Vec<_> = completed
      .iter()
      .map(|t| t.title.as_str())
      .collect();
    assert_eq!(titles, ["Beta"]);
  }

  #[test]
  fn search_is_case_insensitive() {
    let tasks = alpha_beta();

    let found = filter_visible_tasks(
      &tasks,
      "alp",
      StatusFilter::All
    );
    let titles: Vec<_> = found
      .iter()
      .map(|t| t.title.as_str())
      .collect();
    assert_eq!(titles, ["Alpha"]);
  }

  #[test]
  fn search_covers_description() {
    let mut tasks = alpha_beta();
    tasks[1].description =
      "pick up MILK".to_string();

    let found = filter_visible_tasks(
      &tasks,
      "milk",
      StatusFilter::All
    );
    assert_eq!(found.len(), 1);
    assert_eq!(
      found[0].title,
      "Beta"
    );
  }

  #[test]
  fn pending_orders_by_due_ascending()
  {
    let tasks = vec![
      task(
        1,
        "March",
        false,
        (2024, 3, 1),
        1
      ),
      task(
        2,
        "January",
        false,
        (2024, 1, 1),
        2
      ),
    ];

    let (pending, _) =
      split_sorted(&tasks);
    let titles: Vec<_> = pending
      .iter()
      .map(|t| t.title.as_str())
      .collect();
    assert_eq!(
      titles,
      ["January", "March"]
    );
  }

  #[test]
  fn completed_orders_newest_first()
  {
    let tasks = vec![
      task(
        1,
        "Older",
        true,
        (2024, 1, 1),
        1
      ),
      task(
        2,
        "Newer",
        true,
        (2024, 1, 1),
        2
      ),
    ];

    let (_, completed) =
      split_sorted(&tasks);
    let titles: Vec<_> = completed
      .iter()
      .map(|t| t.title.as_str())
      .collect();
    assert_eq!(
      titles,
      ["Newer", "Older"]
    );
  }

  #[test]
  fn empty_reason_prefers_search() {
    assert_eq!(
      empty_reason(
        "milk",
        StatusFilter::Completed
      ),
      EmptyReason::NoSearchMatches
    );
    assert_eq!(
      empty_reason(
        "",
        StatusFilter::Pending
      ),
      EmptyReason::NoStatusMatches(
        StatusFilter::Pending
      )
    );
    assert_eq!(
      empty_reason(
        "",
        StatusFilter::All
      ),
      EmptyReason::NoTasks
    );
  }

  #[test]
  fn filter_key_round_trip() {
    for filter in [
      StatusFilter::All,
      StatusFilter::Pending,
      StatusFilter::Completed,
    ] {
      assert_eq!(
        StatusFilter::from_key(
          filter.as_key()
        ),
        filter
      );
    }
  }
}
