pub mod repository;
pub mod types;

pub use repository::Repository;

#[derive(Clone)]
pub struct Environment {
    pub repository: Repository,
}

impl std::fmt::Debug for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Environment")
            .field("directory", &self.repository.directory())
            .finish()
    }
}

impl Environment {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }
}
