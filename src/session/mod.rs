mod coordinator;

pub use coordinator::{Session, SessionView};
