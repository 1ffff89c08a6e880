//! # Store Messages
//!
//! Requests a [`ResourceClient`](super::ResourceClient) sends to its
//! [`ResourceActor`](super::ResourceActor). Each carries a oneshot sender for the reply.

use super::entity::ActorEntity;
use super::error::FrameworkError;
use std::fmt;
use tokio::sync::oneshot;

/// One-shot reply channel.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Predicate used by [`ResourceRequest::List`] to select entities.
pub struct Filter<T>(Box<dyn Fn(&T) -> bool + Send + Sync>);

impl<T> Filter<T> {
    pub fn new(predicate: impl Fn(&T) -> bool + Send + Sync + 'static) -> Self {
        Self(Box::new(predicate))
    }

    /// Matches every entity.
    pub fn all() -> Self {
        Self::new(|_| true)
    }

    pub fn matches(&self, item: &T) -> bool {
        (self.0)(item)
    }
}

impl<T> fmt::Debug for Filter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Filter(..)")
    }
}

/// The CRUD + List + Action vocabulary every store understands.
///
/// - **Create** allocates an id and runs `from_create_params` then `on_create`.
/// - **Get** returns a clone of one entity, or `None`.
/// - **List** returns clones of every entity matching a [`Filter`], in id order.
/// - **Update** runs `on_update` and returns the new state.
/// - **Delete** runs `on_delete` then removes.
/// - **Action** runs `handle_action` for resource-specific operations.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        filter: Filter<T>,
        respond_to: Response<Vec<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}
