//! Repository Integration Tests
//!
//! Tests for TodoRepository with in-memory SQLite database.

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use crate::domain::{DomainError, Todo};
    use crate::repository::{init_db, Repository, TodoRepository};

    async fn setup_test_db() -> TodoRepository {
        // Use in-memory database for tests
        let db_path = PathBuf::from(":memory:");
        let db_state = init_db(&db_path).await.expect("Failed to init test DB");
        TodoRepository::new(db_state.connection())
    }

    #[tokio::test]
    async fn test_create_todo() {
        let repo = setup_test_db().await;

        let todo = Todo::new(0, "Buy milk".to_string(), "2%".to_string(), false);
        let created = repo.create(&todo).await.expect("Failed to create");

        assert!(created.id > 0);
        assert_eq!(created.title, "Buy milk");
        assert_eq!(created.description, "2%");
        assert!(!created.is_done);
        assert!(created.created_at.is_some());
    }

    #[tokio::test]
    async fn test_find_by_id() {
        let repo = setup_test_db().await;

        let todo = Todo::new(0, "Find me".to_string(), String::new(), true);
        let created = repo.create(&todo).await.expect("Failed to create");

        let found = repo.find_by_id(created.id).await.expect("Find failed");
        assert!(found.is_some());
        let found = found.unwrap();
        assert_eq!(found.title, "Find me");
        assert!(found.is_important);
    }

    #[tokio::test]
    async fn test_find_missing_is_none() {
        let repo = setup_test_db().await;
        let found = repo.find_by_id(999).await.expect("Find failed");
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_list_todos() {
        let repo = setup_test_db().await;

        repo.create(&Todo::new(0, "Todo 1".to_string(), String::new(), false))
            .await
            .unwrap();
        repo.create(&Todo::new(0, "Todo 2".to_string(), String::new(), false))
            .await
            .unwrap();

        let todos = repo.list().await.expect("List failed");
        assert_eq!(todos.len(), 2);
        assert_eq!(todos[0].title, "Todo 1");
    }

    #[tokio::test]
    async fn test_update_todo() {
        let repo = setup_test_db().await;

        let todo = Todo::new(0, "Original".to_string(), String::new(), false);
        let mut created = repo.create(&todo).await.unwrap();

        created.title = "Updated".to_string();
        created.is_important = true;

        let updated = repo.update(&created).await.expect("Update failed");
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.title, "Updated");
        assert!(updated.is_important);
        assert!(!updated.is_done);
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let repo = setup_test_db().await;

        let ghost = Todo::new(42, "Ghost".to_string(), String::new(), false);
        let err = repo.update(&ghost).await.expect_err("Update should fail");
        assert!(matches!(err, DomainError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_delete_todo() {
        let repo = setup_test_db().await;

        let todo = Todo::new(0, "To delete".to_string(), String::new(), false);
        let created = repo.create(&todo).await.unwrap();

        repo.delete(created.id).await.expect("Delete failed");

        let found = repo.find_by_id(created.id).await.expect("Find failed");
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_delete_missing_is_not_found() {
        let repo = setup_test_db().await;
        let err = repo.delete(7).await.expect_err("Delete should fail");
        assert!(matches!(err, DomainError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_writes_stamp_timestamps() {
        let repo = setup_test_db().await;
        let before = chrono::Utc::now().timestamp();

        let mut created = repo
            .create(&Todo::new(0, "Stamped".to_string(), String::new(), false))
            .await
            .unwrap();

        assert!(created.created_at.unwrap() >= before);
        assert!(created.updated_at.unwrap() >= before);

        created.title = "Restamped".to_string();
        let updated = repo.update(&created).await.unwrap();

        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at.unwrap() >= created.updated_at.unwrap());
    }

    #[tokio::test]
    async fn test_file_backed_db_persists_across_reopen() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let db_path = dir.path().join("todos.db");

        let created = {
            let db_state = init_db(&db_path).await.expect("Failed to init DB");
            let repo = TodoRepository::new(db_state.connection());
            repo.create(&Todo::new(0, "Keep me".to_string(), String::new(), true))
                .await
                .unwrap()
        };

        // Reopen re-runs migrations and must find the same document
        let db_state = init_db(&db_path).await.expect("Failed to reopen DB");
        let repo = TodoRepository::new(db_state.connection());
        let found = repo.find_by_id(created.id).await.unwrap();
        assert_eq!(found, Some(created));
    }

    #[tokio::test]
    async fn test_done_flag_persists() {
        let repo = setup_test_db().await;

        let mut created = repo
            .create(&Todo::new(0, "Finish me".to_string(), String::new(), false))
            .await
            .unwrap();
        created.is_done = true;

        repo.update(&created).await.expect("Update failed");

        let found = repo.find_by_id(created.id).await.unwrap().unwrap();
        assert!(found.is_done);
    }
}
