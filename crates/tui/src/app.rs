//! UI state container
//!
//! All mutations happen here, synchronously, against the in-memory list.
//! Persistence is the caller's concern: each method reports whether the
//! list changed so the event loop can fire a save.

use todo_core::task::Task;

/// Derived display values, recomputed on every render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Counts {
    pub total: usize,
    pub completed: usize,
    pub remaining: usize,
}

/// In-memory UI state: the task list, the input buffer, a loading flag,
/// and the keyboard selection cursor.
pub struct App {
    pub tasks: Vec<Task>,
    pub input: String,
    pub loading: bool,
    pub selected: usize,
}

impl App {
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            input: String::new(),
            loading: true,
            selected: 0,
        }
    }

    /// Install the loaded list and leave the loading state
    pub fn set_tasks(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
        self.loading = false;
        self.clamp_selection();
    }

    /// Append a task from the input buffer
    ///
    /// A buffer that trims to empty is a no-op and the buffer is kept.
    /// Returns true when the list changed.
    pub fn add(&mut self) -> bool {
        let text = self.input.trim();
        if text.is_empty() {
            return false;
        }

        self.tasks.push(Task::new(text));
        self.input.clear();
        self.selected = self.tasks.len() - 1;
        true
    }

    /// Flip the completed flag of the task with `id`, in place
    ///
    /// Unknown ids are a no-op. Returns true when the list changed.
    pub fn toggle(&mut self, id: &str) -> bool {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.completed = !task.completed;
                true
            }
            None => false,
        }
    }

    /// Remove the task with `id`
    ///
    /// Unknown ids are a no-op. Returns true when the list changed.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        let changed = self.tasks.len() != before;
        if changed {
            self.clamp_selection();
        }
        changed
    }

    /// Id of the task under the selection cursor
    pub fn selected_id(&self) -> Option<String> {
        self.tasks.get(self.selected).map(|t| t.id.clone())
    }

    pub fn select_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_down(&mut self) {
        if self.selected + 1 < self.tasks.len() {
            self.selected += 1;
        }
    }

    pub fn counts(&self) -> Counts {
        let completed = self.tasks.iter().filter(|t| t.completed).count();
        Counts {
            total: self.tasks.len(),
            completed,
            remaining: self.tasks.len() - completed,
        }
    }

    fn clamp_selection(&mut self) {
        if self.selected >= self.tasks.len() {
            self.selected = self.tasks.len().saturating_sub(1);
        }
    }
}
