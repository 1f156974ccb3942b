pub mod error;
pub mod message_log;
pub mod project_store;
pub mod seed;
pub mod throttle_policy;

pub use error::{Result, StoreError};
pub use message_log::{MessageLog, Submission};
pub use project_store::ProjectStore;
pub use seed::sample_projects;
pub use throttle_policy::ThrottlePolicy;
