use chrono::NaiveDate;
use skiff_core::task::Task;
use skiff_core::views::{
    EmptyReason, StatusFilter, empty_reason, filter_visible_tasks, split_sorted,
};
use uuid::Uuid;
use yew::{Callback, Html, Properties, TargetCast, classes, function_component, html};

#[derive(Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    fn as_class(self) -> &'static str {
        match self {
            ToastKind::Success => "toast success",
            ToastKind::Error => "toast error",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastHostProps {
    pub toasts: Vec<Toast>,
}

#[function_component(ToastHost)]
pub fn toast_host(props: &ToastHostProps) -> Html {
    html! {
        <div class="toast-host">
            {
                for props.toasts.iter().map(|toast| html! {
                    <div class={toast.kind.as_class()}>{ &toast.message }</div>
                })
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SignInProps {
    pub email: String,
    pub busy: bool,
    pub on_email_change: Callback<String>,
    pub on_submit: Callback<()>,
}

#[function_component(SignIn)]
pub fn sign_in(props: &SignInProps) -> Html {
    let oninput = {
        let on_email_change = props.on_email_change.clone();
        Callback::from(move |e: web_sys::InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            on_email_change.emit(input.value());
        })
    };

    let onsubmit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: web_sys::SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    html! {
        <div class="signin-screen">
            <div class="panel signin">
                <h1>{ "Skiff Tasks" }</h1>
                <p class="muted">{ "Enter your email to sign in or create an account" }</p>

                <form {onsubmit}>
                    <div class="field">
                        <label for="email">{ "Email address" }</label>
                        <input
                            id="email"
                            type="email"
                            required={true}
                            placeholder="you@example.com"
                            value={props.email.clone()}
                            {oninput}
                        />
                    </div>
                    <button class="btn primary wide" type="submit" disabled={props.busy}>
                        { if props.busy { "Sending..." } else { "Send Magic Link" } }
                    </button>
                </form>

                <p class="muted small">
                    { "We'll send you a magic link for a password-free sign in experience." }
                </p>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ToolbarProps {
    pub search: String,
    pub status_filter: StatusFilter,
    pub account: Option<String>,
    pub on_search: Callback<String>,
    pub on_filter: Callback<StatusFilter>,
    pub on_add: Callback<()>,
    pub on_sign_out: Callback<()>,
}

#[function_component(Toolbar)]
pub fn toolbar(props: &ToolbarProps) -> Html {
    let make_filter = |filter: StatusFilter, label: &str| {
        let active = props.status_filter == filter;
        let class = if active { "filter active" } else { "filter" };
        let on_filter = props.on_filter.clone();
        html! {
            <button class={class} onclick={move |_| on_filter.emit(filter)}>
                { label }
            </button>
        }
    };

    let on_search_input = {
        let on_search = props.on_search.clone();
        Callback::from(move |e: web_sys::InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            on_search.emit(input.value());
        })
    };

    let on_add = props.on_add.clone();
    let on_sign_out = props.on_sign_out.clone();

    html! {
        <div class="toolbar">
            <div class="toolbar-row">
                <h1>{ "Skiff Tasks" }</h1>
                <div class="toolbar-account">
                    {
                        if let Some(account) = props.account.clone() {
                            html! { <span class="muted">{ account }</span> }
                        } else {
                            html! {}
                        }
                    }
                    <button class="btn" onclick={move |_| on_sign_out.emit(())}>
                        { "Sign out" }
                    </button>
                    <button class="btn primary" onclick={move |_| on_add.emit(())}>
                        { "Add Task" }
                    </button>
                </div>
            </div>
            <div class="toolbar-row">
                <input
                    class="search"
                    type="text"
                    placeholder="Search tasks..."
                    value={props.search.clone()}
                    oninput={on_search_input}
                />
                <div class="filter-group">
                    { make_filter(StatusFilter::All, "All") }
                    { make_filter(StatusFilter::Pending, "Pending") }
                    { make_filter(StatusFilter::Completed, "Completed") }
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TaskListProps {
    pub tasks: Vec<Task>,
    pub search: String,
    pub status_filter: StatusFilter,
    pub loading: bool,
    pub today: NaiveDate,
    pub on_toggle: Callback<Uuid>,
    pub on_edit: Callback<Uuid>,
    pub on_delete: Callback<Uuid>,
}

#[function_component(TaskList)]
pub fn task_list(props: &TaskListProps) -> Html {
    if props.loading {
        return html! {
            <div class="list-state">
                <div class="spinner"></div>
                <p class="muted">{ "Loading tasks..." }</p>
            </div>
        };
    }

    // Derived on every render: pure function of the canonical list and the
    // two filter inputs.
    let visible = filter_visible_tasks(&props.tasks, &props.search, props.status_filter);

    if visible.is_empty() {
        return html! {
            <div class="list-state">
                <h3>{ "No tasks found" }</h3>
                <p class="muted">{ empty_copy(empty_reason(&props.search, props.status_filter)) }</p>
            </div>
        };
    }

    let (pending, completed) = split_sorted(&visible);

    html! {
        <div>
            {
                if pending.is_empty() {
                    html! {}
                } else {
                    html! {
                        <div class="task-section">
                            <h2>
                                <span class="dot pending"></span>
                                { format!("Pending Tasks ({})", pending.len()) }
                            </h2>
                            { for pending.iter().map(|task| task_row(task, props)) }
                        </div>
                    }
                }
            }
            {
                if completed.is_empty() {
                    html! {}
                } else {
                    html! {
                        <div class="task-section">
                            <h2>
                                <span class="dot done"></span>
                                { format!("Completed Tasks ({})", completed.len()) }
                            </h2>
                            { for completed.iter().map(|task| task_row(task, props)) }
                        </div>
                    }
                }
            }
        </div>
    }
}

fn task_row(task: &Task, props: &TaskListProps) -> Html {
    let id = task.id;
    let overdue = task.is_overdue(props.today);
    let on_toggle = props.on_toggle.clone();
    let on_edit = props.on_edit.clone();
    let on_delete = props.on_delete.clone();

    let toggle_label = if task.completed {
        "Mark as incomplete"
    } else {
        "Mark as complete"
    };

    html! {
        <div class={classes!(
            "task-row",
            task.completed.then_some("done"),
            overdue.then_some("overdue"),
        )}>
            <button
                class="toggle"
                aria-label={toggle_label}
                onclick={move |_| on_toggle.emit(id)}
            >
                { if task.completed { "✓" } else { "" } }
            </button>
            <div class="task-body">
                <div class="task-title">{ &task.title }</div>
                {
                    if task.description.is_empty() {
                        html! {}
                    } else {
                        html! { <p class="task-description">{ &task.description }</p> }
                    }
                }
                <div class="task-due">
                    { if overdue { "Overdue: " } else { "" } }
                    { format_due(task.due_date) }
                </div>
            </div>
            <div class="task-actions">
                <button class="btn" aria-label="Edit task" onclick={move |_| on_edit.emit(id)}>
                    { "Edit" }
                </button>
                <button
                    class="btn danger"
                    aria-label="Delete task"
                    onclick={move |_| on_delete.emit(id)}
                >
                    { "Delete" }
                </button>
            </div>
        </div>
    }
}

fn format_due(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

fn empty_copy(reason: EmptyReason) -> String {
    match reason {
        EmptyReason::NoTasks => {
            "You don't have any tasks yet. Add a new task to get started!".to_string()
        }
        EmptyReason::NoSearchMatches => {
            "No tasks match your search. Try a different search term.".to_string()
        }
        EmptyReason::NoStatusMatches(filter) => {
            format!("You don't have any {} tasks.", filter.as_key())
        }
    }
}
