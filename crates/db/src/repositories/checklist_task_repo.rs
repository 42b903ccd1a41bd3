//! Repository for the `checklist_tasks` table.

use campops_core::types::DbId;
use sqlx::PgPool;

use crate::error::{DbError, DbResult};
use crate::models::checklist::{ChecklistTask, CreateChecklistTask, UpdateChecklistTask};

const ENTITY: &str = "checklist_tasks";

const COLUMNS: &str = "\
    id, project_id, team_id, area_id, name, short_description, priority, \
    done, due_date, created_at, updated_at";

/// Provides CRUD operations for checklist tasks.
pub struct ChecklistTaskRepo;

impl ChecklistTaskRepo {
    /// Insert a new task, returning the created row. `done` defaults to
    /// false.
    pub async fn create(pool: &PgPool, input: &CreateChecklistTask) -> DbResult<ChecklistTask> {
        let query = format!(
            "INSERT INTO checklist_tasks \
                 (project_id, team_id, area_id, name, short_description, priority, due_date) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ChecklistTask>(&query)
            .bind(input.project_id)
            .bind(input.team_id)
            .bind(input.area_id)
            .bind(&input.name)
            .bind(&input.short_description)
            .bind(input.priority)
            .bind(input.due_date)
            .fetch_one(pool)
            .await
            .map_err(DbError::classify(ENTITY))
    }

    /// Find a task by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> DbResult<Option<ChecklistTask>> {
        let query = format!("SELECT {COLUMNS} FROM checklist_tasks WHERE id = $1");
        sqlx::query_as::<_, ChecklistTask>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(DbError::classify(ENTITY))
    }

    /// List the tasks of a project, due soonest first.
    pub async fn list_by_project(pool: &PgPool, project_id: DbId) -> DbResult<Vec<ChecklistTask>> {
        let query = format!(
            "SELECT {COLUMNS} FROM checklist_tasks \
             WHERE project_id = $1 ORDER BY due_date ASC NULLS LAST, id ASC"
        );
        sqlx::query_as::<_, ChecklistTask>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
            .map_err(DbError::classify(ENTITY))
    }

    /// List the unfinished tasks of a project, due soonest first.
    pub async fn list_open_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> DbResult<Vec<ChecklistTask>> {
        let query = format!(
            "SELECT {COLUMNS} FROM checklist_tasks \
             WHERE project_id = $1 AND NOT done \
             ORDER BY due_date ASC NULLS LAST, id ASC"
        );
        sqlx::query_as::<_, ChecklistTask>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
            .map_err(DbError::classify(ENTITY))
    }

    /// Update a task. Errors with `NotFound` if the ID does not exist.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateChecklistTask,
    ) -> DbResult<ChecklistTask> {
        let query = format!(
            "UPDATE checklist_tasks SET \
                team_id = COALESCE($2, team_id), \
                area_id = COALESCE($3, area_id), \
                name = COALESCE($4, name), \
                short_description = COALESCE($5, short_description), \
                priority = COALESCE($6, priority), \
                done = COALESCE($7, done), \
                due_date = COALESCE($8, due_date) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ChecklistTask>(&query)
            .bind(id)
            .bind(input.team_id)
            .bind(input.area_id)
            .bind(&input.name)
            .bind(&input.short_description)
            .bind(input.priority)
            .bind(input.done)
            .bind(input.due_date)
            .fetch_optional(pool)
            .await
            .map_err(DbError::classify(ENTITY))?
            .ok_or(DbError::NotFound { entity: ENTITY, id })
    }

    /// Flip the done flag. Errors with `NotFound` if the ID does not
    /// exist.
    pub async fn set_done(pool: &PgPool, id: DbId, done: bool) -> DbResult<ChecklistTask> {
        let query = format!(
            "UPDATE checklist_tasks SET done = $2 WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ChecklistTask>(&query)
            .bind(id)
            .bind(done)
            .fetch_optional(pool)
            .await
            .map_err(DbError::classify(ENTITY))?
            .ok_or(DbError::NotFound { entity: ENTITY, id })
    }

    /// Delete a task. Errors with `NotFound` if the ID does not exist.
    pub async fn delete(pool: &PgPool, id: DbId) -> DbResult<()> {
        let result = sqlx::query("DELETE FROM checklist_tasks WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await
            .map_err(DbError::classify(ENTITY))?;
        if result.rows_affected() == 0 {
            return Err(DbError::NotFound { entity: ENTITY, id });
        }
        Ok(())
    }
}
