//! Mutation helper shared by the list screens.

use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{ApiError, ApiResult};
use crate::list_ops::Keyed;
use crate::screen::{Change, ListState};

/// Claim the screen's mutation slot, run `request` and apply the change
/// `on_done` derives from its result (`None` leaves the entries alone).
/// Returns false without sending anything when the slot is taken.
pub fn spawn_mutation<T, R, F, D>(state: RwSignal<ListState<T>>, request: F, on_done: D) -> bool
where
    T: Keyed + Clone + Send + Sync + 'static,
    R: 'static,
    F: Future<Output = ApiResult<R>> + 'static,
    D: FnOnce(ApiResult<R>) -> Option<Change<T>> + 'static,
{
    let claimed = state.try_update(|s| s.begin_mutation()).unwrap_or(false);
    if !claimed {
        log::debug!("[Screen] mutation skipped, another one is running");
        return false;
    }
    spawn_local(async move {
        let change = on_done(request.await);
        state.try_update(|s| match change {
            Some(change) => s.commit(change),
            None => s.abort_mutation(),
        });
    });
    true
}

/// Change for a finished delete. `close` runs only on success, so a failed
/// delete leaves its confirm dialog open.
pub fn settle_delete<T, C, E>(result: ApiResult<()>, id: u32, close: C, on_error: E) -> Option<Change<T>>
where
    C: FnOnce(),
    E: FnOnce(ApiError),
{
    match result {
        Ok(()) => {
            close();
            Some(Change::Remove(id))
        }
        Err(e) => {
            on_error(e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::models::Friend;

    #[test]
    fn test_delete_success_closes_dialog() {
        let closed = Cell::new(false);
        let change = settle_delete::<Friend, _, _>(Ok(()), 4, || closed.set(true), |_| panic!("no error"));
        assert_eq!(change, Some(Change::Remove(4)));
        assert!(closed.get());
    }

    #[test]
    fn test_delete_failure_keeps_dialog_open() {
        let closed = Cell::new(false);
        let reported = Cell::new(None);
        let error = ApiError::Status { status: 500, detail: None };
        let change = settle_delete::<Friend, _, _>(
            Err(error.clone()),
            4,
            || closed.set(true),
            |e| reported.set(Some(e)),
        );
        assert_eq!(change, None);
        assert!(!closed.get());
        assert_eq!(reported.into_inner(), Some(error));
    }
}
