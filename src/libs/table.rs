use super::task::Task;

/// Rows on screen plus the search filter and the selected row.
///
/// Search only hides rows; [`TaskTable::display`] replaces them and shows
/// every row again.
#[derive(Debug, Default)]
pub struct TaskTable {
    rows: Vec<Task>,
    hidden: Vec<bool>,
    selected: Option<usize>,
    query: String,
}

impl TaskTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the rows, clearing search and selection.
    pub fn display(&mut self, records: Vec<Task>) {
        self.hidden = vec![false; records.len()];
        self.rows = records;
        self.selected = None;
        self.query.clear();
    }

    /// Hides every row that has no cell containing `query`, ignoring case.
    /// Returns the number of rows left visible.
    pub fn search(&mut self, query: &str) -> usize {
        let needle = query.to_lowercase();
        for (row, hidden) in self.rows.iter().zip(self.hidden.iter_mut()) {
            *hidden = !row_matches(row, &needle);
        }
        self.query = query.to_string();

        if self.selected.is_some_and(|i| self.hidden[i]) {
            self.selected = None;
        }
        self.visible_count()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn rows(&self) -> &[Task] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn is_hidden(&self, row: usize) -> bool {
        self.hidden.get(row).copied().unwrap_or(true)
    }

    /// Visible rows with their index into [`TaskTable::rows`].
    pub fn visible_rows(&self) -> impl Iterator<Item = (usize, &Task)> {
        self.rows.iter().enumerate().filter(|(i, _)| !self.hidden[*i])
    }

    pub fn visible_count(&self) -> usize {
        self.hidden.iter().filter(|h| !**h).count()
    }

    /// Selects a visible row. Hidden or out-of-range rows are ignored.
    pub fn select(&mut self, row: usize) -> Option<&Task> {
        if self.is_hidden(row) {
            return None;
        }
        self.selected = Some(row);
        self.rows.get(row)
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_task(&self) -> Option<&Task> {
        self.selected.and_then(|i| self.rows.get(i))
    }

    /// The next visible row after the selection, wrapping around.
    pub fn next_visible(&self) -> Option<usize> {
        let visible: Vec<usize> = self.visible_rows().map(|(i, _)| i).collect();
        match self.selected.and_then(|s| visible.iter().position(|&i| i == s)) {
            Some(pos) => visible.get((pos + 1) % visible.len()).copied(),
            None => visible.first().copied(),
        }
    }

    /// The previous visible row before the selection, wrapping around.
    pub fn previous_visible(&self) -> Option<usize> {
        let visible: Vec<usize> = self.visible_rows().map(|(i, _)| i).collect();
        match self.selected.and_then(|s| visible.iter().position(|&i| i == s)) {
            Some(pos) => visible.get((pos + visible.len() - 1) % visible.len()).copied(),
            None => visible.last().copied(),
        }
    }
}

fn row_matches(task: &Task, needle: &str) -> bool {
    task.cells().iter().any(|cell| cell.to_lowercase().contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn task(id: i64, name: &str, priority: &str) -> Task {
        Task {
            id,
            task_name: name.to_string(),
            description: String::new(),
            priority: priority.to_string(),
            status: "new".to_string(),
            deadline: "2099-01-01".to_string(),
            comment: String::new(),
            created: Some(NaiveDateTime::parse_from_str("2024-01-01 00:00:00", "%Y-%m-%d %H:%M:%S").unwrap()),
        }
    }

    fn table() -> TaskTable {
        let mut table = TaskTable::new();
        table.display(vec![task(1, "Buy milk", "low"), task(2, "Fix roof", "high"), task(3, "Call Anna", "medium")]);
        table
    }

    #[test]
    fn search_is_case_insensitive_across_cells() {
        let mut table = table();
        assert_eq!(table.search("HIGH"), 1);
        assert!(table.is_hidden(0));
        assert!(!table.is_hidden(1));
        assert!(table.is_hidden(2));

        assert_eq!(table.search("anna"), 1);
        assert_eq!(table.visible_rows().map(|(i, _)| i).collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn search_matches_the_id_column() {
        let mut table = table();
        assert_eq!(table.search("3"), 1);
        assert_eq!(table.visible_rows().next().map(|(_, t)| t.id), Some(3));
    }

    #[test]
    fn empty_search_shows_every_row() {
        let mut table = table();
        table.search("roof");
        assert_eq!(table.search(""), 3);
    }

    #[test]
    fn hidden_rows_cannot_be_selected() {
        let mut table = table();
        table.select(0);
        table.search("roof");
        assert_eq!(table.selected_index(), None);
        assert!(table.select(0).is_none());
        assert_eq!(table.select(1).map(|t| t.id), Some(2));
    }

    #[test]
    fn navigation_wraps_over_visible_rows() {
        let mut table = table();
        assert_eq!(table.next_visible(), Some(0));
        table.select(2);
        assert_eq!(table.next_visible(), Some(0));
        assert_eq!(table.previous_visible(), Some(1));

        table.search("l"); // "Fix roof" row has no 'l'
        assert_eq!(table.selected_index(), Some(2));
        assert_eq!(table.next_visible(), Some(0));
        assert_eq!(table.previous_visible(), Some(0));
    }

    #[test]
    fn display_resets_search_and_selection() {
        let mut table = table();
        table.select(1);
        table.search("roof");
        table.display(vec![task(4, "New", "low")]);
        assert_eq!(table.query(), "");
        assert_eq!(table.selected_index(), None);
        assert_eq!(table.visible_count(), 1);
    }
}
