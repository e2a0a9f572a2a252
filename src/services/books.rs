//! Book catalog service

use crate::{
    error::AppResult,
    models::{Book, BookInput},
    repository::Repository,
};

#[derive(Clone)]
pub struct BooksService {
    repository: Repository,
}

impl BooksService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Book>> {
        self.repository.books.list().await
    }

    /// Register a new book
    pub async fn create(&self, data: &BookInput) -> AppResult<i32> {
        let id = self.repository.books.create(data).await?;
        tracing::info!(book_id = id, title = %data.title, "Book created");
        Ok(id)
    }

    pub async fn update(&self, id: i32, data: &BookInput) -> AppResult<()> {
        self.repository.books.update(id, data).await?;
        tracing::info!(book_id = id, "Book updated");
        Ok(())
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.books.delete(id).await?;
        tracing::info!(book_id = id, "Book deleted");
        Ok(())
    }
}
