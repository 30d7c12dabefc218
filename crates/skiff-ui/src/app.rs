use std::cell::RefCell;
use std::rc::Rc;

use chrono::{
  Local,
  NaiveDate
};
use gloo::timers::future::TimeoutFuture;
use skiff_core::book::TaskBook;
use skiff_core::form::{
  DUE_DATE_FORMAT,
  build_draft
};
use skiff_core::record::{
  CompletedPatch,
  NewTaskRecord,
  TaskFieldsPatch
};
use skiff_core::task::{
  Task,
  TaskDraft
};
use skiff_core::views::StatusFilter;
use uuid::Uuid;
use wasm_bindgen::JsValue;
use yew::{
  Callback,
  Html,
  Reducible,
  TargetCast,
  UseReducerHandle,
  function_component,
  html,
  use_effect_with,
  use_mut_ref,
  use_reducer,
  use_state
};

use crate::api::{
  self,
  Session,
  StoreConfig
};
use crate::components::{
  SignIn,
  TaskList,
  Toast,
  ToastHost,
  ToastKind,
  Toolbar
};

const SESSION_STORAGE_KEY: &str =
  "skiff.session.v1";
const REMOTE_CONFIG_TOML: &str =
  include_str!("../assets/remote.toml");

#[derive(Clone, PartialEq)]
struct ModalState {
  mode:              ModalMode,
  draft_title:       String,
  draft_description: String,
  draft_due:         String,
  title_error:       Option<String>,
  due_error:         Option<String>
}

#[derive(Clone, PartialEq)]
enum ModalMode {
  Add,
  Edit(Uuid)
}

impl ModalState {
  fn add(today: NaiveDate) -> Self {
    Self {
      mode:              ModalMode::Add,
      draft_title:       String::new(),
      draft_description: String::new(),
      draft_due:         today
        .format(DUE_DATE_FORMAT)
        .to_string(),
      title_error:       None,
      due_error:         None
    }
  }

  fn edit(task: &Task) -> Self {
    Self {
      mode:              ModalMode::Edit(
        task.id
      ),
      draft_title:       task
        .title
        .clone(),
      draft_description: task
        .description
        .clone(),
      draft_due:         task
        .due_date
        .format(DUE_DATE_FORMAT)
        .to_string(),
      title_error:       None,
      due_error:         None
    }
  }
}

/// Wraps the core task book so the
/// root component can apply
/// confirmed mutations against the
/// current state, never a stale
/// render's snapshot.
#[derive(
  Clone, PartialEq, Default,
)]
struct BookState {
  book: TaskBook
}

enum BookAction {
  Replace(Vec<Task>),
  Clear,
  InsertNewest(Task),
  ApplyEdit(Uuid, TaskDraft),
  ApplyToggle(Uuid),
  Remove(Uuid)
}

impl Reducible for BookState {
  type Action = BookAction;

  fn reduce(
    self: Rc<Self>,
    action: Self::Action
  ) -> Rc<Self> {
    let mut book = self.book.clone();
    match action {
      | BookAction::Replace(tasks) => {
        book =
          TaskBook::from_tasks(tasks);
      }
      | BookAction::Clear => {
        book = TaskBook::default();
      }
      | BookAction::InsertNewest(
        task
      ) => {
        book.insert_newest(task);
      }
      | BookAction::ApplyEdit(
        id,
        draft
      ) => {
        book.apply_edit(id, &draft);
      }
      | BookAction::ApplyToggle(
        id
      ) => {
        book.apply_toggle(id);
      }
      | BookAction::Remove(id) => {
        book.remove(id);
      }
    }
    Rc::new(Self {
      book
    })
  }
}

#[derive(
  Clone, PartialEq, Default,
)]
struct ToastStack {
  toasts: Vec<Toast>
}

enum ToastAction {
  Push(Toast),
  Dismiss(u64)
}

impl Reducible for ToastStack {
  type Action = ToastAction;

  fn reduce(
    self: Rc<Self>,
    action: Self::Action
  ) -> Rc<Self> {
    let mut toasts =
      self.toasts.clone();
    match action {
      | ToastAction::Push(toast) => {
        toasts.push(toast);
      }
      | ToastAction::Dismiss(id) => {
        toasts.retain(|toast| {
          toast.id != id
        });
      }
    }
    Rc::new(Self {
      toasts
    })
  }
}

#[function_component(App)]
pub fn app() -> Html {
  let config =
    use_state(load_remote_config);
  let session =
    use_state(restore_session);
  let auth_email =
    use_state(String::new);
  let auth_busy = use_state(|| false);

  let book =
    use_reducer(BookState::default);
  let tasks_loading =
    use_state(|| true);
  let search = use_state(String::new);
  let status_filter = use_state(
    StatusFilter::default
  );
  let modal =
    use_state(|| None::<ModalState>);
  let modal_busy =
    use_state(|| false);
  let confirm_delete =
    use_state(|| None::<Uuid>);

  let toasts =
    use_reducer(ToastStack::default);
  let toast_seq =
    use_mut_ref(|| 0_u64);

  {
    use_effect_with((), move |_| {
      tracing::info!(
        "frontend mounted"
      );
      || ()
    });
  }

  {
    let session_snapshot =
      (*session).clone();
    let config_snapshot =
      (*config).clone();
    let book = book.clone();
    let tasks_loading =
      tasks_loading.clone();
    let toasts = toasts.clone();
    let toast_seq = toast_seq.clone();

    use_effect_with(
      session_snapshot
        .as_ref()
        .map(|active| active.user_id),
      move |user_id| {
        match user_id {
          | Some(user_id) => {
            tracing::info!(
              user = %user_id,
              "refreshing task list"
            );
            tasks_loading.set(true);

            if let Some(active) =
              session_snapshot
            {
              wasm_bindgen_futures::spawn_local(async move {
                match api::list_tasks(
                  &config_snapshot,
                  &active
                )
                .await
                {
                  | Ok(records) => {
                    let tasks: Vec<Task> = records
                      .into_iter()
                      .map(Task::from)
                      .collect();
                    tracing::debug!(
                      total = tasks.len(),
                      "task list refreshed"
                    );
                    book.dispatch(
                      BookAction::Replace(tasks)
                    );
                  }
                  | Err(error) => {
                    tracing::error!(
                      %error,
                      "task list fetch failed"
                    );
                    push_toast(
                      &toasts,
                      &toast_seq,
                      config_snapshot.toast_ttl_ms,
                      ToastKind::Error,
                      "Failed to fetch tasks".to_string()
                    );
                    book.dispatch(BookAction::Clear);
                  }
                }
                tasks_loading.set(false);
              });
            }
          }
          | None => {
            book.dispatch(
              BookAction::Clear
            );
          }
        }

        || ()
      }
    );
  }

  let on_email_change = {
    let auth_email = auth_email.clone();
    Callback::from(
      move |value: String| {
        auth_email.set(value);
      }
    )
  };

  let on_auth_submit = {
    let auth_email = auth_email.clone();
    let auth_busy = auth_busy.clone();
    let config = config.clone();
    let toasts = toasts.clone();
    let toast_seq = toast_seq.clone();

    Callback::from(move |_| {
      if *auth_busy {
        return;
      }
      let email = (*auth_email)
        .trim()
        .to_string();
      if email.is_empty() {
        return;
      }

      auth_busy.set(true);
      tracing::info!(
        "requesting login link"
      );

      let config_snapshot =
        (*config).clone();
      let auth_email =
        auth_email.clone();
      let auth_busy =
        auth_busy.clone();
      let toasts = toasts.clone();
      let toast_seq =
        toast_seq.clone();

      wasm_bindgen_futures::spawn_local(async move {
        match api::request_login_link(
          &config_snapshot,
          &email
        )
        .await
        {
          | Ok(()) => {
            push_toast(
              &toasts,
              &toast_seq,
              config_snapshot.toast_ttl_ms,
              ToastKind::Success,
              "Check your email for the login link!".to_string()
            );
            auth_email
              .set(String::new());
          }
          | Err(error) => {
            tracing::error!(
              %error,
              "login link request failed"
            );
            push_toast(
              &toasts,
              &toast_seq,
              config_snapshot.toast_ttl_ms,
              ToastKind::Error,
              "Failed to send login link".to_string()
            );
          }
        }
        auth_busy.set(false);
      });
    })
  };

  let on_sign_out = {
    let config = config.clone();
    let session = session.clone();
    let search = search.clone();
    let status_filter =
      status_filter.clone();
    let modal = modal.clone();
    let confirm_delete =
      confirm_delete.clone();

    Callback::from(move |_| {
      let Some(active) =
        (*session).clone()
      else {
        return;
      };

      let config_snapshot =
        (*config).clone();
      wasm_bindgen_futures::spawn_local(async move {
        if let Err(error) = api::sign_out(
          &config_snapshot,
          &active
        )
        .await
        {
          tracing::warn!(
            %error,
            "server-side logout failed; clearing local session anyway"
          );
        }
      });

      clear_stored_session();
      session.set(None);
      search.set(String::new());
      status_filter
        .set(StatusFilter::All);
      modal.set(None);
      confirm_delete.set(None);
      tracing::info!("signed out");
    })
  };

  let on_search = {
    let search = search.clone();
    Callback::from(
      move |term: String| {
        search.set(term);
      }
    )
  };

  let on_filter = {
    let status_filter =
      status_filter.clone();
    Callback::from(
      move |filter: StatusFilter| {
        tracing::debug!(
          filter = filter.as_key(),
          "status filter changed"
        );
        status_filter.set(filter);
      }
    )
  };

  let on_open_add = {
    let modal = modal.clone();
    Callback::from(move |_| {
      modal.set(Some(
        ModalState::add(
          Local::now().date_naive()
        )
      ));
    })
  };

  let on_edit_request = {
    let book = book.clone();
    let modal = modal.clone();
    Callback::from(move |id: Uuid| {
      if let Some(task) =
        book.book.get(id)
      {
        modal.set(Some(
          ModalState::edit(task)
        ));
      }
    })
  };

  let on_modal_close = {
    let modal = modal.clone();
    Callback::from(move |_| {
      modal.set(None);
    })
  };

  let on_modal_submit = {
    let modal = modal.clone();
    let modal_busy =
      modal_busy.clone();
    let session = session.clone();
    let config = config.clone();
    let book = book.clone();
    let toasts = toasts.clone();
    let toast_seq = toast_seq.clone();

    Callback::from(move |_| {
      if *modal_busy {
        return;
      }
      let Some(state) =
        (*modal).clone()
      else {
        return;
      };

      let draft = match build_draft(
        &state.draft_title,
        &state.draft_description,
        &state.draft_due
      ) {
        | Ok(draft) => draft,
        | Err(errors) => {
          let mut next = state;
          next.title_error =
            errors.title;
          next.due_error =
            errors.due_date;
          modal.set(Some(next));
          return;
        }
      };

      let Some(active) =
        (*session).clone()
      else {
        tracing::warn!(
          "mutation attempted without a session"
        );
        push_toast(
          &toasts,
          &toast_seq,
          config.toast_ttl_ms,
          ToastKind::Error,
          "You must be signed in to change tasks".to_string()
        );
        return;
      };

      modal_busy.set(true);
      let config_snapshot =
        (*config).clone();
      let modal = modal.clone();
      let modal_busy =
        modal_busy.clone();
      let book = book.clone();
      let toasts = toasts.clone();
      let toast_seq =
        toast_seq.clone();

      match state.mode {
        | ModalMode::Add => {
          wasm_bindgen_futures::spawn_local(async move {
            let record = NewTaskRecord::from_draft(
              active.user_id,
              &draft
            );
            match api::insert_task(
              &config_snapshot,
              &active,
              &record
            )
            .await
            {
              | Ok(stored) => {
                book.dispatch(
                  BookAction::InsertNewest(Task::from(stored))
                );
                push_toast(
                  &toasts,
                  &toast_seq,
                  config_snapshot.toast_ttl_ms,
                  ToastKind::Success,
                  "Task added".to_string()
                );
                modal.set(None);
              }
              | Err(error) => {
                tracing::error!(
                  %error,
                  "task insert failed"
                );
                push_toast(
                  &toasts,
                  &toast_seq,
                  config_snapshot.toast_ttl_ms,
                  ToastKind::Error,
                  "Failed to add task".to_string()
                );
              }
            }
            modal_busy.set(false);
          });
        }
        | ModalMode::Edit(id) => {
          wasm_bindgen_futures::spawn_local(async move {
            let patch = TaskFieldsPatch::from_draft(&draft);
            match api::update_task(
              &config_snapshot,
              &active,
              id,
              &patch
            )
            .await
            {
              | Ok(()) => {
                book.dispatch(
                  BookAction::ApplyEdit(id, draft)
                );
                push_toast(
                  &toasts,
                  &toast_seq,
                  config_snapshot.toast_ttl_ms,
                  ToastKind::Success,
                  "Task updated".to_string()
                );
                modal.set(None);
              }
              | Err(error) => {
                tracing::error!(
                  %error,
                  "task update failed"
                );
                push_toast(
                  &toasts,
                  &toast_seq,
                  config_snapshot.toast_ttl_ms,
                  ToastKind::Error,
                  "Failed to update task".to_string()
                );
              }
            }
            modal_busy.set(false);
          });
        }
      }
    })
  };

  let on_toggle = {
    let book = book.clone();
    let session = session.clone();
    let config = config.clone();
    let toasts = toasts.clone();
    let toast_seq = toast_seq.clone();

    Callback::from(move |id: Uuid| {
      // Unknown ids are a no-op.
      let Some(task) =
        book.book.get(id).cloned()
      else {
        return;
      };
      let Some(active) =
        (*session).clone()
      else {
        tracing::warn!(
          "mutation attempted without a session"
        );
        return;
      };

      let next = !task.completed;
      let config_snapshot =
        (*config).clone();
      let book = book.clone();
      let toasts = toasts.clone();
      let toast_seq =
        toast_seq.clone();

      wasm_bindgen_futures::spawn_local(async move {
        let patch = CompletedPatch {
          completed: next
        };
        match api::update_task(
          &config_snapshot,
          &active,
          id,
          &patch
        )
        .await
        {
          | Ok(()) => {
            book.dispatch(
              BookAction::ApplyToggle(id)
            );
            push_toast(
              &toasts,
              &toast_seq,
              config_snapshot.toast_ttl_ms,
              ToastKind::Success,
              if next {
                "Task completed".to_string()
              } else {
                "Task marked as pending".to_string()
              }
            );
          }
          | Err(error) => {
            tracing::error!(
              %error,
              "task toggle failed"
            );
            push_toast(
              &toasts,
              &toast_seq,
              config_snapshot.toast_ttl_ms,
              ToastKind::Error,
              "Failed to update task status".to_string()
            );
          }
        }
      });
    })
  };

  let on_delete_request = {
    let confirm_delete =
      confirm_delete.clone();
    Callback::from(move |id: Uuid| {
      confirm_delete.set(Some(id));
    })
  };

  let on_cancel_delete = {
    let confirm_delete =
      confirm_delete.clone();
    Callback::from(move |_| {
      confirm_delete.set(None);
    })
  };

  let on_confirm_delete = {
    let confirm_delete =
      confirm_delete.clone();
    let session = session.clone();
    let config = config.clone();
    let book = book.clone();
    let toasts = toasts.clone();
    let toast_seq = toast_seq.clone();

    Callback::from(move |_| {
      let Some(id) = *confirm_delete
      else {
        return;
      };
      confirm_delete.set(None);

      let Some(active) =
        (*session).clone()
      else {
        tracing::warn!(
          "mutation attempted without a session"
        );
        return;
      };

      let config_snapshot =
        (*config).clone();
      let book = book.clone();
      let toasts = toasts.clone();
      let toast_seq =
        toast_seq.clone();

      wasm_bindgen_futures::spawn_local(async move {
        match api::delete_task(
          &config_snapshot,
          &active,
          id
        )
        .await
        {
          | Ok(()) => {
            book.dispatch(
              BookAction::Remove(id)
            );
            push_toast(
              &toasts,
              &toast_seq,
              config_snapshot.toast_ttl_ms,
              ToastKind::Success,
              "Task deleted".to_string()
            );
          }
          | Err(error) => {
            tracing::error!(
              %error,
              "task delete failed"
            );
            push_toast(
              &toasts,
              &toast_seq,
              config_snapshot.toast_ttl_ms,
              ToastKind::Error,
              "Failed to delete task".to_string()
            );
          }
        }
      });
    })
  };

  let today =
    Local::now().date_naive();

  let workspace = if let Some(
    active
  ) = (*session).clone()
  {
    html! {
      <div class="workspace">
        <Toolbar
          search={(*search).clone()}
          status_filter={*status_filter}
          account={active.email.clone()}
          on_search={on_search}
          on_filter={on_filter}
          on_add={on_open_add}
          on_sign_out={on_sign_out}
        />
        <TaskList
          tasks={book.book.tasks().to_vec()}
          search={(*search).clone()}
          status_filter={*status_filter}
          loading={*tasks_loading}
          today={today}
          on_toggle={on_toggle}
          on_edit={on_edit_request}
          on_delete={on_delete_request}
        />
      </div>
    }
  } else {
    html! {
      <SignIn
        email={(*auth_email).clone()}
        busy={*auth_busy}
        on_email_change={on_email_change}
        on_submit={on_auth_submit}
      />
    }
  };

  let modal_view = if let Some(
    state
  ) = (*modal).clone()
  {
    let on_title_input = {
      let modal = modal.clone();
      Callback::from(move |e: web_sys::InputEvent| {
        let input: web_sys::HtmlInputElement = e.target_unchecked_into();
        if let Some(mut current) = (*modal).clone() {
          current.draft_title = input.value();
          current.title_error = None;
          modal.set(Some(current));
        }
      })
    };
    let on_description_input = {
      let modal = modal.clone();
      Callback::from(move |e: web_sys::InputEvent| {
        let area: web_sys::HtmlTextAreaElement = e.target_unchecked_into();
        if let Some(mut current) = (*modal).clone() {
          current.draft_description = area.value();
          modal.set(Some(current));
        }
      })
    };
    let on_due_input = {
      let modal = modal.clone();
      Callback::from(move |e: web_sys::InputEvent| {
        let input: web_sys::HtmlInputElement = e.target_unchecked_into();
        if let Some(mut current) = (*modal).clone() {
          current.draft_due = input.value();
          current.due_error = None;
          modal.set(Some(current));
        }
      })
    };

    let heading = match state.mode {
      | ModalMode::Add => {
        "Add New Task"
      }
      | ModalMode::Edit(_) => {
        "Edit Task"
      }
    };
    let submit_label =
      match state.mode {
        | ModalMode::Add => {
          "Add Task"
        }
        | ModalMode::Edit(_) => {
          "Save Changes"
        }
      };

    html! {
      <div class="modal-backdrop">
        <div class="modal">
          <div class="modal-header">
            <h2>{ heading }</h2>
            <button
              class="close"
              aria-label="Close"
              onclick={on_modal_close.clone()}
            >
              { "×" }
            </button>
          </div>
          <div class="modal-body">
            <div class="field">
              <label for="title">{ "Title*" }</label>
              <input
                id="title"
                type="text"
                placeholder="Task title"
                value={state.draft_title.clone()}
                oninput={on_title_input}
              />
              {
                if let Some(error) = state.title_error.clone() {
                  html! { <p class="field-error">{ error }</p> }
                } else {
                  html! {}
                }
              }
            </div>
            <div class="field">
              <label for="description">{ "Description" }</label>
              <textarea
                id="description"
                rows="3"
                placeholder="Task description (optional)"
                value={state.draft_description.clone()}
                oninput={on_description_input}
              />
            </div>
            <div class="field">
              <label for="due-date">{ "Due Date*" }</label>
              <input
                id="due-date"
                type="date"
                value={state.draft_due.clone()}
                oninput={on_due_input}
              />
              {
                if let Some(error) = state.due_error.clone() {
                  html! { <p class="field-error">{ error }</p> }
                } else {
                  html! {}
                }
              }
            </div>
            <div class="modal-actions">
              <button class="btn" onclick={on_modal_close.clone()}>
                { "Cancel" }
              </button>
              <button
                class="btn primary"
                disabled={*modal_busy}
                onclick={on_modal_submit.clone()}
              >
                { submit_label }
              </button>
            </div>
          </div>
        </div>
      </div>
    }
  } else {
    html! {}
  };

  let confirm_view = if let Some(
    id
  ) = *confirm_delete
  {
    match book.book.get(id) {
      | Some(task) => {
        let prompt = format!(
          "Are you sure you want to delete \"{}\"? This action cannot be undone.",
          task.title
        );
        html! {
          <div class="modal-backdrop">
            <div class="modal confirm">
              <h3>{ "Delete Task" }</h3>
              <p>{ prompt }</p>
              <div class="modal-actions">
                <button class="btn" onclick={on_cancel_delete.clone()}>
                  { "Cancel" }
                </button>
                <button class="btn danger" onclick={on_confirm_delete.clone()}>
                  { "Delete" }
                </button>
              </div>
            </div>
          </div>
        }
      }
      | None => html! {}
    }
  } else {
    html! {}
  };

  html! {
    <div class="app-shell">
      { workspace }
      { modal_view }
      { confirm_view }
      <ToastHost
        toasts={toasts.toasts.clone()}
      />
    </div>
  }
}

fn push_toast(
  stack: &UseReducerHandle<
    ToastStack
  >,
  seq: &Rc<RefCell<u64>>,
  ttl_ms: u32,
  kind: ToastKind,
  message: String
) {
  let id = {
    let mut next = seq.borrow_mut();
    *next += 1;
    *next
  };
  stack.dispatch(ToastAction::Push(
    Toast {
      id,
      kind,
      message
    }
  ));

  let stack = stack.clone();
  wasm_bindgen_futures::spawn_local(
    async move {
      TimeoutFuture::new(ttl_ms)
        .await;
      stack.dispatch(
        ToastAction::Dismiss(id)
      );
    }
  );
}

fn load_remote_config() -> StoreConfig
{
  let parsed = toml::from_str::<
    StoreConfig
  >(REMOTE_CONFIG_TOML);

  match parsed {
    | Ok(config) => {
      sanitize_remote_config(config)
    }
    | Err(error) => {
      tracing::error!(
        %error,
        "failed parsing embedded remote config"
      );
      sanitize_remote_config(
        StoreConfig::default()
      )
    }
  }
}

fn sanitize_remote_config(
  mut config: StoreConfig
) -> StoreConfig {
  while config.endpoint.ends_with('/')
  {
    config.endpoint.pop();
  }
  if config.endpoint.is_empty() {
    tracing::warn!(
      "remote endpoint is not configured; every remote call will fail"
    );
  }
  if config.table.trim().is_empty() {
    config.table =
      "tasks".to_string();
  }
  config.toast_ttl_ms = config
    .toast_ttl_ms
    .clamp(1_000, 30_000);
  config
}

/// A login redirect in the URL
/// fragment wins over a stored
/// session; the fragment is
/// persisted and then stripped
/// from the address bar.
fn restore_session() -> Option<Session>
{
  if let Some(session) =
    session_from_fragment()
  {
    store_session(&session);
    strip_location_fragment();
    tracing::info!(
      user = %session.user_id,
      "captured session from login redirect"
    );
    return Some(session);
  }

  load_stored_session()
}

fn session_from_fragment()
-> Option<Session> {
  let window = web_sys::window()?;
  let hash =
    window.location().hash().ok()?;
  let raw = hash.strip_prefix('#')?;
  if raw.is_empty() {
    return None;
  }

  let params =
    web_sys::UrlSearchParams::new_with_str(raw).ok()?;
  let access =
    params.get("access_token")?;
  let refresh = params
    .get("refresh_token")
    .unwrap_or_default();

  match api::session_from_tokens(
    &access, &refresh
  ) {
    | Ok(session) => Some(session),
    | Err(error) => {
      tracing::error!(
        %error,
        "discarding unusable login redirect"
      );
      None
    }
  }
}

fn strip_location_fragment() {
  let Some(window) =
    web_sys::window()
  else {
    return;
  };

  let location = window.location();
  let path = location
    .pathname()
    .unwrap_or_else(|_| {
      "/".to_string()
    });
  let search = location
    .search()
    .unwrap_or_default();

  if let Ok(history) =
    window.history()
  {
    let _ = history
      .replace_state_with_url(
        &JsValue::NULL,
        "",
        Some(&format!(
          "{path}{search}"
        ))
      );
  }
}

fn load_stored_session()
-> Option<Session> {
  let raw = web_sys::window()
    .and_then(|window| {
      window
        .local_storage()
        .ok()
        .flatten()
    })
    .and_then(|storage| {
      storage
        .get_item(SESSION_STORAGE_KEY)
        .ok()
        .flatten()
    })?;

  match serde_json::from_str::<
    Session
  >(&raw)
  {
    | Ok(session) => Some(session),
    | Err(error) => {
      tracing::error!(
        %error,
        "failed parsing stored session"
      );
      None
    }
  }
}

fn store_session(session: &Session) {
  if let Some(storage) =
    web_sys::window().and_then(
      |window| {
        window
          .local_storage()
          .ok()
          .flatten()
      }
    )
    && let Ok(json) =
      serde_json::to_string(session)
  {
    let _ = storage.set_item(
      SESSION_STORAGE_KEY,
      &json
    );
  }
}

fn clear_stored_session() {
  if let Some(storage) =
    web_sys::window().and_then(
      |window| {
        window
          .local_storage()
          .ok()
          .flatten()
      }
    )
  {
    let _ = storage.remove_item(
      SESSION_STORAGE_KEY
    );
  }
}
