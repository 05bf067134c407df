//! Request/response records mirroring the backend resources. The client
//! trusts whatever the server returns; invariants live server-side.

pub mod board_column;
pub mod login;
pub mod project;
pub mod tag;
pub mod task;
pub mod user;
pub mod user_project;

pub use board_column::{BoardColumnRequest, BoardColumnResponse, BoardColumnUpdate};
pub use login::{LoginRequest, LoginResponse};
pub use project::{CreatedProject, ProjectRequest, ProjectResponse, UserSimplified};
pub use tag::{TagRequest, TagResponse, TagUpdate};
pub use task::{Priority, TaskRequest, TaskResponse, TaskStatus, TaskUpdate};
pub use user::{Position, UserRequest, UserResponse};
pub use user_project::{Role, UserProjectRequest, UserProjectResponse};
