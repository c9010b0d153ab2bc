mod new_repository;
mod repository;
mod repository_visibility;

pub use new_repository::GhNewRepository;
pub use repository::GhRepository;
pub use repository_visibility::GhRepositoryVisibility;
