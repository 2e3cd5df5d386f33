#[cfg(test)]
mod tests {
    use chrono::Utc;
    use taskman::db::tasks::Tasks;
    use taskman::libs::error::DbError;
    use taskman::libs::task::{Priority, Status, TaskDraft, TaskFilter};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct TasksTestContext {
        temp_dir: TempDir,
        tasks: Tasks,
    }

    impl TestContext for TasksTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let tasks = Tasks::open(temp_dir.path().join("scheduler.db")).unwrap();
            TasksTestContext { temp_dir, tasks }
        }
    }

    fn draft(name: &str, priority: &str, status: &str, deadline: &str) -> TaskDraft {
        TaskDraft::new(name, "", priority, status, deadline, "")
    }

    #[test_context(TasksTestContext)]
    #[test]
    fn test_insert_then_select_all(ctx: &mut TasksTestContext) {
        let task = TaskDraft::new("Buy milk", "2% fat", "low", "new", "2099-01-01", "from the corner shop");
        let id = ctx.tasks.insert(&task).unwrap();

        let all = ctx.tasks.select_all().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, id);
        assert_eq!(all[0].draft(), task);

        // CURRENT_TIMESTAMP is UTC
        let age = Utc::now().naive_utc() - all[0].created.unwrap();
        assert!(age.num_minutes().abs() < 5);
    }

    #[test_context(TasksTestContext)]
    #[test]
    fn test_insert_assigns_fresh_ids(ctx: &mut TasksTestContext) {
        let first = ctx.tasks.insert(&draft("One", "low", "new", "2099-01-01")).unwrap();
        let second = ctx.tasks.insert(&draft("One", "low", "new", "2099-01-01")).unwrap();
        assert_ne!(first, second);
        assert_eq!(ctx.tasks.select_all().unwrap().len(), 2);
    }

    #[test_context(TasksTestContext)]
    #[test]
    fn test_update_changes_only_that_row(ctx: &mut TasksTestContext) {
        let a = ctx.tasks.insert(&draft("Task A", "low", "new", "2099-01-01")).unwrap();
        let b = ctx.tasks.insert(&draft("Task B", "medium", "new", "2099-02-01")).unwrap();
        let before_b = ctx.tasks.get_by_id(b).unwrap().unwrap();

        let changed = TaskDraft::new("Task A2", "more detail", "high", "resolved", "2099-03-01", "done");
        assert_eq!(ctx.tasks.update(a, &changed).unwrap(), 1);

        let after_a = ctx.tasks.get_by_id(a).unwrap().unwrap();
        assert_eq!(after_a.draft(), changed);
        assert_eq!(ctx.tasks.get_by_id(b).unwrap().unwrap(), before_b);
    }

    #[test_context(TasksTestContext)]
    #[test]
    fn test_select_all_tolerates_odd_created_values(ctx: &mut TasksTestContext) {
        let id = ctx.tasks.insert(&draft("Normal", "low", "new", "2099-01-01")).unwrap();

        let raw = rusqlite::Connection::open(ctx.temp_dir.path().join("scheduler.db")).unwrap();
        raw.execute(
            "INSERT INTO scheduler (task_name, deadline, created) VALUES ('No timestamp', '2099-02-01', NULL)",
            [],
        )
        .unwrap();
        raw.execute(
            "INSERT INTO scheduler (task_name, deadline, created) VALUES ('Bad timestamp', '2099-03-01', 'yesterday')",
            [],
        )
        .unwrap();

        let all = ctx.tasks.select_all().unwrap();
        let names: Vec<&str> = all.iter().map(|t| t.task_name.as_str()).collect();
        assert_eq!(names, vec!["Normal", "No timestamp", "Bad timestamp"]);
        assert_eq!(all[0].id, id);
        assert!(all[0].created.is_some());
        assert_eq!(all[1].created, None);
        assert_eq!(all[2].created, None);
        assert_eq!(all[1].description, "");
    }

    #[test_context(TasksTestContext)]
    #[test]
    fn test_update_keeps_created(ctx: &mut TasksTestContext) {
        let id = ctx.tasks.insert(&draft("Task", "low", "new", "2099-01-01")).unwrap();
        let created = ctx.tasks.get_by_id(id).unwrap().unwrap().created;

        ctx.tasks.update(id, &draft("Renamed", "low", "new", "2099-01-01")).unwrap();
        assert_eq!(ctx.tasks.get_by_id(id).unwrap().unwrap().created, created);
    }

    #[test_context(TasksTestContext)]
    #[test]
    fn test_update_missing_id_is_noop(ctx: &mut TasksTestContext) {
        ctx.tasks.insert(&draft("Task", "low", "new", "2099-01-01")).unwrap();
        assert_eq!(ctx.tasks.update(999, &draft("Ghost", "low", "new", "2099-01-01")).unwrap(), 0);
        assert_eq!(ctx.tasks.select_all().unwrap()[0].task_name, "Task");
    }

    #[test_context(TasksTestContext)]
    #[test]
    fn test_delete_removes_exactly_that_row(ctx: &mut TasksTestContext) {
        let a = ctx.tasks.insert(&draft("Task A", "low", "new", "2099-01-01")).unwrap();
        let b = ctx.tasks.insert(&draft("Task B", "low", "new", "2099-01-02")).unwrap();

        assert_eq!(ctx.tasks.delete(a).unwrap(), 1);
        let remaining = ctx.tasks.select_all().unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, b);

        // Deleting again is not an error
        assert_eq!(ctx.tasks.delete(a).unwrap(), 0);
        assert_eq!(ctx.tasks.select_all().unwrap().len(), 1);
    }

    #[test_context(TasksTestContext)]
    #[test]
    fn test_select_all_orders_by_deadline(ctx: &mut TasksTestContext) {
        for deadline in ["2099-05-01", "2031-01-01", "", "2050-12-31", "2031-01-01"] {
            ctx.tasks.insert(&draft("Task", "low", "new", deadline)).unwrap();
        }

        let deadlines: Vec<String> = ctx.tasks.select_all().unwrap().into_iter().map(|t| t.deadline).collect();
        assert_eq!(deadlines, vec!["", "2031-01-01", "2031-01-01", "2050-12-31", "2099-05-01"]);
        assert!(deadlines.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test_context(TasksTestContext)]
    #[test]
    fn test_select_where_is_conjunctive(ctx: &mut TasksTestContext) {
        ctx.tasks.insert(&draft("Fix roof", "high", "new", "2099-01-01")).unwrap();
        ctx.tasks.insert(&draft("Fix door", "high", "resolved", "2099-01-02")).unwrap();
        ctx.tasks.insert(&draft("Paint wall", "low", "new", "2099-01-03")).unwrap();

        let high = ctx.tasks.select_where(&[TaskFilter::Priority(Priority::High)]).unwrap();
        assert_eq!(high.len(), 2);

        let high_new = ctx
            .tasks
            .select_where(&[TaskFilter::Priority(Priority::High), TaskFilter::Status(Status::New)])
            .unwrap();
        assert_eq!(high_new.len(), 1);
        assert_eq!(high_new[0].task_name, "Fix roof");

        let by_name = ctx.tasks.select_where(&[TaskFilter::TaskName("Paint wall".to_string())]).unwrap();
        assert_eq!(by_name.len(), 1);

        let by_id = ctx.tasks.select_where(&[TaskFilter::Id(by_name[0].id)]).unwrap();
        assert_eq!(by_id, by_name);

        assert!(ctx.tasks.select_where(&[TaskFilter::Comment("nothing".to_string())]).unwrap().is_empty());
    }

    #[test_context(TasksTestContext)]
    #[test]
    fn test_select_where_rejects_empty_filter(ctx: &mut TasksTestContext) {
        assert!(matches!(ctx.tasks.select_where(&[]), Err(DbError::Query(_))));
    }

    #[test_context(TasksTestContext)]
    #[test]
    fn test_storage_accepts_arbitrary_priority_text(ctx: &mut TasksTestContext) {
        let id = ctx.tasks.insert(&draft("Odd", "urgent!!", "someday", "not a date")).unwrap();
        let task = ctx.tasks.get_by_id(id).unwrap().unwrap();
        assert_eq!(task.priority, "urgent!!");
        assert_eq!(task.status, "someday");
        assert_eq!(task.deadline, "not a date");
    }

    #[test_context(TasksTestContext)]
    #[test]
    fn test_schema_is_idempotent_and_persistent(ctx: &mut TasksTestContext) {
        ctx.tasks.insert(&draft("Kept", "low", "new", "2099-01-01")).unwrap();
        ctx.tasks.ensure_schema().unwrap();
        ctx.tasks.close().unwrap();

        let reopened = Tasks::open(ctx.temp_dir.path().join("scheduler.db")).unwrap();
        reopened.ensure_schema().unwrap();
        let all = reopened.select_all().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].task_name, "Kept");
    }

    #[test_context(TasksTestContext)]
    #[test]
    fn test_close_is_idempotent(ctx: &mut TasksTestContext) {
        assert!(ctx.tasks.is_open());
        ctx.tasks.close().unwrap();
        ctx.tasks.close().unwrap();
        assert!(!ctx.tasks.is_open());

        assert!(matches!(ctx.tasks.select_all(), Err(DbError::Closed)));
        assert!(matches!(ctx.tasks.insert(&draft("Late", "low", "new", "")), Err(DbError::Closed)));
    }

    #[test_context(TasksTestContext)]
    #[test]
    fn test_get_by_id_missing(ctx: &mut TasksTestContext) {
        assert!(ctx.tasks.get_by_id(42).unwrap().is_none());
    }
}
