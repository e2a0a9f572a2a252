//! Data models for BibliOn

pub mod book;
pub mod loan;
pub mod student;

// Re-export commonly used types
pub use book::{Book, BookInput};
pub use loan::{Loan, LoanInput};
pub use student::{Student, StudentInput};
