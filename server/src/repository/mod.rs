//! Repository Layer
//!
//! Data access abstractions and implementations.

mod traits;
mod db;
mod employee_repo;
mod seed;


pub use traits::TaskStore;
pub use db::DbPool;
pub use employee_repo::EmployeeRepository;
pub use seed::{load_seed_file, seed_employees};
