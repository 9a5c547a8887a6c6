//! Task store - kanban cards grouped into board columns.

use crate::{
    data::DataSource,
    entities::{KanbanTask, TaskStatus},
};
use tracing::debug;

/// Read-only view over the kanban tasks.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TaskStore {
    tasks: Vec<KanbanTask>,
}

impl TaskStore {
    /// Builds a store populated from `source`.
    #[must_use]
    pub fn from_source(source: &dyn DataSource) -> Self {
        let mut store = Self::default();
        store.fetch_tasks(source);
        store
    }

    /// Re-assigns the task list from `source`.
    pub fn fetch_tasks(&mut self, source: &dyn DataSource) {
        self.tasks = source.kanban_tasks();
        debug!(tasks = self.tasks.len(), "Fetched tasks");
    }

    #[must_use]
    pub fn tasks(&self) -> &[KanbanTask] {
        &self.tasks
    }

    /// Tasks in one column, in source order.
    pub fn tasks_by_status(&self, status: TaskStatus) -> impl Iterator<Item = &KanbanTask> {
        self.tasks.iter().filter(move |t| t.status == status)
    }

    /// Number of tasks in one column.
    #[must_use]
    pub fn count_by_status(&self, status: TaskStatus) -> usize {
        self.tasks_by_status(status).count()
    }

    /// The full board: to do, in progress, done.
    #[must_use]
    pub fn board(&self) -> [(TaskStatus, Vec<&KanbanTask>); 3] {
        TaskStatus::COLUMNS.map(|status| (status, self.tasks_by_status(status).collect()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::MockData;

    #[test]
    fn test_board_column_order() {
        let store = TaskStore::from_source(&MockData);
        let statuses: Vec<_> = store.board().iter().map(|(s, _)| *s).collect();
        assert_eq!(
            statuses,
            [TaskStatus::Todo, TaskStatus::InProgress, TaskStatus::Done]
        );
    }

    #[test]
    fn test_board_partitions_every_task() {
        let store = TaskStore::from_source(&MockData);
        let board = store.board();
        let total: usize = board.iter().map(|(_, tasks)| tasks.len()).sum();
        assert_eq!(total, store.tasks().len());
        assert!(
            board
                .iter()
                .all(|(status, tasks)| tasks.iter().all(|t| t.status == *status))
        );
    }

    #[test]
    fn test_count_by_status() {
        let store = TaskStore::from_source(&MockData);
        assert_eq!(store.count_by_status(TaskStatus::Todo), 3);
        assert_eq!(store.count_by_status(TaskStatus::InProgress), 3);
        assert_eq!(store.count_by_status(TaskStatus::Done), 2);
    }

    #[test]
    fn test_column_keeps_source_order() {
        let store = TaskStore::from_source(&MockData);
        let todo: Vec<_> = store
            .tasks_by_status(TaskStatus::Todo)
            .map(|t| t.id)
            .collect();
        assert_eq!(todo, [4, 5, 7]);
    }
}
