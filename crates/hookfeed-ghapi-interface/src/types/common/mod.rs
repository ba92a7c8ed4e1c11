mod branch;
mod commit;
mod commit_user;
mod repository;
mod user;

pub use branch::GhBranch;
pub use commit::GhCommit;
pub use commit_user::GhCommitUser;
pub use repository::GhRepository;
pub use user::GhUser;
