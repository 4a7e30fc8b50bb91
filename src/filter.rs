//! Filter Utilities
//!
//! Helper functions for deciding which todos the list renders.

use crate::models::{Filter, Todo};

/// Todos matching `filter`, in their original order
pub fn filter_todos(todos: &[Todo], filter: Filter) -> Vec<Todo> {
    todos
        .iter()
        .filter(|todo| filter.matches(todo))
        .cloned()
        .collect()
}

/// Active/completed split of a collection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TodoCounts {
    pub active: usize,
    pub completed: usize,
}

impl TodoCounts {
    pub fn of(todos: &[Todo]) -> Self {
        let completed = todos.iter().filter(|todo| todo.completed).count();
        Self {
            active: todos.len() - completed,
            completed,
        }
    }

    pub fn total(&self) -> usize {
        self.active + self.completed
    }

    /// Non-empty and nothing left to do
    pub fn all_completed(&self) -> bool {
        self.total() > 0 && self.active == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_todo(id: u32, completed: bool) -> Todo {
        Todo {
            id,
            user_id: 1,
            title: format!("Todo {}", id),
            completed,
        }
    }

    fn ids(todos: &[Todo]) -> Vec<u32> {
        todos.iter().map(|todo| todo.id).collect()
    }

    fn sample() -> Vec<Todo> {
        vec![
            make_todo(1, false),
            make_todo(2, true),
            make_todo(3, false),
            make_todo(4, true),
            make_todo(5, false),
        ]
    }

    #[test]
    fn test_filter_keeps_order() {
        let todos = sample();

        assert_eq!(ids(&filter_todos(&todos, Filter::All)), vec![1, 2, 3, 4, 5]);
        assert_eq!(ids(&filter_todos(&todos, Filter::Active)), vec![1, 3, 5]);
        assert_eq!(ids(&filter_todos(&todos, Filter::Completed)), vec![2, 4]);
    }

    #[test]
    fn test_filter_is_idempotent_and_pure() {
        let todos = sample();
        let before = todos.clone();

        for filter in Filter::VARIANTS {
            let once = filter_todos(&todos, filter);
            let twice = filter_todos(&once, filter);
            assert_eq!(once, twice);
        }
        assert_eq!(todos, before);
    }

    #[test]
    fn test_counts_add_up() {
        let todos = sample();
        let counts = TodoCounts::of(&todos);

        assert_eq!(counts, TodoCounts { active: 3, completed: 2 });
        assert_eq!(counts.total(), todos.len());
        assert_eq!(
            filter_todos(&todos, Filter::Active).len() + filter_todos(&todos, Filter::Completed).len(),
            todos.len()
        );
    }

    #[test]
    fn test_all_completed() {
        assert!(!TodoCounts::of(&[]).all_completed());
        assert!(!TodoCounts::of(&sample()).all_completed());
        assert!(TodoCounts::of(&[make_todo(1, true), make_todo(2, true)]).all_completed());
    }
}
