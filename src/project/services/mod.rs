//! Application services for the observable project store.

mod store;

pub use store::{
    InMemoryProjectStore, MoveOutcome, ProjectStore, ProjectStoreError, ProjectStoreResult,
    SubscriptionId,
};
