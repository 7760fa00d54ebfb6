use serde::Serialize;

use crate::model::list::TaskList;
use crate::model::task::Task;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct TaskJson {
    pub id: i64,
    pub text: String,
    pub complete: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
}

impl From<&Task> for TaskJson {
    fn from(task: &Task) -> Self {
        TaskJson {
            id: task.id.0,
            text: task.text.clone(),
            complete: task.complete,
            due_date: task.due_date_label(),
            priority: task.priority.clone(),
        }
    }
}

#[derive(Serialize)]
pub struct TaskPageJson {
    pub list: String,
    pub tasks: Vec<TaskJson>,
}

// ---------------------------------------------------------------------------
// Plain-text output
// ---------------------------------------------------------------------------

/// One task per line: `[x] 42  Buy milk  2024-05-01  !high`
pub fn task_line(task: &Task) -> String {
    let checkbox = if task.complete { "[x]" } else { "[ ]" };
    let mut line = format!("{} {}  {}", checkbox, task.id, task.text);
    if let Some(date) = task.due_date_label() {
        line.push_str(&format!("  {}", date));
    }
    if let Some(priority) = &task.priority {
        line.push_str(&format!("  !{}", priority));
    }
    line
}

pub fn print_tasks(list: &TaskList, tasks: &[&Task], json: bool) {
    if json {
        let page = TaskPageJson {
            list: list.name.clone(),
            tasks: tasks.iter().map(|t| TaskJson::from(*t)).collect(),
        };
        println!("{}", serde_json::to_string_pretty(&page).unwrap_or_default());
        return;
    }
    println!("{}:", list.name);
    if tasks.is_empty() {
        println!("  (no tasks)");
        return;
    }
    for task in tasks {
        println!("  {}", task_line(task));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use crate::model::task::TaskId;

    #[test]
    fn task_line_full() {
        let mut task = Task::new(TaskId(42), "Buy milk");
        task.due_date = NaiveDate::from_ymd_opt(2024, 5, 1);
        task.priority = Some("high".into());
        assert_eq!(task_line(&task), "[ ] 42  Buy milk  2024-05-01  !high");
    }

    #[test]
    fn task_line_minimal_complete() {
        let mut task = Task::new(TaskId(7), "done thing");
        task.complete = true;
        assert_eq!(task_line(&task), "[x] 7  done thing");
    }

    #[test]
    fn task_json_skips_empty_fields() {
        let task = Task::new(TaskId(1), "x");
        let json = serde_json::to_value(TaskJson::from(&task)).unwrap();
        assert!(json.get("due_date").is_none());
        assert!(json.get("priority").is_none());
    }
}
