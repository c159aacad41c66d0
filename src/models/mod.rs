pub mod task;
pub mod user;

pub use task::{NewTask, Task, TaskInput, DEFAULT_ACTION};
pub use user::{Credentials, User, UserProfile};
