//! Student registry service

use crate::{
    error::AppResult,
    models::{Student, StudentInput},
    repository::Repository,
};

#[derive(Clone)]
pub struct StudentsService {
    repository: Repository,
}

impl StudentsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Student>> {
        self.repository.students.list().await
    }

    /// Register a new student
    pub async fn create(&self, data: &StudentInput) -> AppResult<i32> {
        let id = self.repository.students.create(data).await?;
        tracing::info!(student_id = id, "Student created");
        Ok(id)
    }

    pub async fn update(&self, id: i32, data: &StudentInput) -> AppResult<()> {
        self.repository.students.update(id, data).await?;
        tracing::info!(student_id = id, "Student updated");
        Ok(())
    }

    /// Delete a student. Fails if the database still references them from a loan.
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.students.delete(id).await?;
        tracing::info!(student_id = id, "Student deleted");
        Ok(())
    }
}
