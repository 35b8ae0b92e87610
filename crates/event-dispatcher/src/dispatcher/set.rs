//! Ordered listener sets keyed by identity

use std::{any::Any, sync::Arc};

use tracing::trace;

use crate::listener::{EventListener, Listener, ListenerRef};

/// Whether two handles point at the same listener
///
/// Only the data address is compared, so two handles created through different
/// trait-object coercions of the same allocation are still equal.
pub fn same_listener(a: &ListenerRef, b: &ListenerRef) -> bool {
    address(a) == address(b)
}

/// Data address of the allocation behind a listener handle
pub(crate) fn address<L: ?Sized>(listener: &Arc<L>) -> *const () {
    Arc::as_ptr(listener) as *const ()
}

/// Distinct listeners of `listeners`, in order of first occurrence
///
/// Repeats are removed wherever they appear, adjacent or not.
pub fn unique_listeners<I>(listeners: I) -> Vec<ListenerRef>
where
    I: IntoIterator<Item = ListenerRef>,
{
    let mut unique: Vec<ListenerRef> = Vec::new();
    for listener in listeners {
        if !unique.iter().any(|seen| same_listener(seen, &listener)) {
            unique.push(listener);
        }
    }
    unique
}

/// Whether a dynamically typed `candidate` can be bound to a dispatcher
///
/// Accepted values are a [`ListenerRef`] or an `Arc<EventListener>`. Other
/// [`crate::Listener`] implementations must be erased to [`ListenerRef`] before
/// they are boxed as `dyn Any`; statically typed handles of any listener type are
/// bound directly through [`IntoListeners`] without going through this check.
pub fn accept(candidate: &dyn Any) -> bool {
    candidate.is::<ListenerRef>() || candidate.is::<Arc<EventListener>>()
}

fn into_listener(candidate: Box<dyn Any>) -> Option<ListenerRef> {
    let candidate = match candidate.downcast::<ListenerRef>() {
        Ok(listener) => return Some(*listener),
        Err(other) => other,
    };
    match candidate.downcast::<Arc<EventListener>>() {
        Ok(listener) => {
            let listener: ListenerRef = *listener;
            Some(listener)
        }
        Err(_) => None,
    }
}

/// Input accepted wherever the dispatcher takes "a listener or a list of listeners"
///
/// Conversions normalise to a duplicate-free list in first-occurrence order.
/// Dynamically typed candidates that are not listeners are dropped silently.
pub trait IntoListeners {
    fn into_listeners(self) -> Vec<ListenerRef>;
}

impl IntoListeners for ListenerRef {
    fn into_listeners(self) -> Vec<ListenerRef> {
        vec![self]
    }
}

impl IntoListeners for &ListenerRef {
    fn into_listeners(self) -> Vec<ListenerRef> {
        vec![self.clone()]
    }
}

impl<L: Listener + 'static> IntoListeners for Arc<L> {
    fn into_listeners(self) -> Vec<ListenerRef> {
        let listener: ListenerRef = self;
        vec![listener]
    }
}

impl<L: Listener + 'static> IntoListeners for &Arc<L> {
    fn into_listeners(self) -> Vec<ListenerRef> {
        self.clone().into_listeners()
    }
}

impl IntoListeners for Vec<ListenerRef> {
    fn into_listeners(self) -> Vec<ListenerRef> {
        unique_listeners(self)
    }
}

impl IntoListeners for &[ListenerRef] {
    fn into_listeners(self) -> Vec<ListenerRef> {
        unique_listeners(self.iter().cloned())
    }
}

impl IntoListeners for &Vec<ListenerRef> {
    fn into_listeners(self) -> Vec<ListenerRef> {
        self.as_slice().into_listeners()
    }
}

impl<const N: usize> IntoListeners for [ListenerRef; N] {
    fn into_listeners(self) -> Vec<ListenerRef> {
        unique_listeners(self)
    }
}

impl IntoListeners for Box<dyn Any> {
    fn into_listeners(self) -> Vec<ListenerRef> {
        vec![self].into_listeners()
    }
}

impl IntoListeners for Vec<Box<dyn Any>> {
    fn into_listeners(self) -> Vec<ListenerRef> {
        let total = self.len();
        let accepted: Vec<ListenerRef> = self.into_iter().filter_map(into_listener).collect();
        if accepted.len() < total {
            trace!(
                dropped = total - accepted.len(),
                "Dropped candidates that are not listeners"
            );
        }
        unique_listeners(accepted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listener() -> ListenerRef {
        Arc::new(EventListener::new())
    }

    #[test]
    fn test_unique_keeps_first_occurrence_order() {
        let a = listener();
        let b = listener();
        let c = listener();

        let unique = unique_listeners(vec![
            a.clone(),
            b.clone(),
            a.clone(),
            c.clone(),
            b.clone(),
            a.clone(),
        ]);

        assert_eq!(unique.len(), 3);
        assert!(same_listener(&unique[0], &a));
        assert!(same_listener(&unique[1], &b));
        assert!(same_listener(&unique[2], &c));
    }

    #[test]
    fn test_unique_of_empty() {
        assert!(unique_listeners(Vec::new()).is_empty());
    }

    #[test]
    fn test_equal_state_is_not_identity() {
        let a = listener();
        let b = listener();
        assert!(!same_listener(&a, &b));
        assert!(same_listener(&a, &a.clone()));
    }

    #[test]
    fn test_concrete_and_trait_handles_are_same_listener() {
        let concrete = Arc::new(EventListener::new());
        let as_trait: ListenerRef = concrete.clone();
        let from_concrete = concrete.into_listeners();

        assert!(same_listener(&as_trait, &from_concrete[0]));
    }

    #[test]
    fn test_accept() {
        let listener = listener();
        let concrete = Arc::new(EventListener::new());

        assert!(accept(&listener));
        assert!(accept(&concrete));
        assert!(!accept(&42_u32));
        assert!(!accept(&"listener"));
        assert!(!accept(&vec![1, 2, 3]));
    }

    #[test]
    fn test_candidates_drop_non_listeners() {
        let a = listener();
        let b = Arc::new(EventListener::new());
        let candidates: Vec<Box<dyn Any>> = vec![
            Box::new(a.clone()),
            Box::new("not a listener"),
            Box::new(b.clone()),
            Box::new(a.clone()),
            Box::new(7_i64),
        ];

        let listeners = candidates.into_listeners();
        let b: ListenerRef = b;

        assert_eq!(listeners.len(), 2);
        assert!(same_listener(&listeners[0], &a));
        assert!(same_listener(&listeners[1], &b));
    }

    #[test]
    fn test_single_non_listener_candidate_is_empty() {
        let candidate: Box<dyn Any> = Box::new(3.5_f64);
        assert!(candidate.into_listeners().is_empty());
    }

    #[test]
    fn test_slice_input_is_deduplicated() {
        let a = listener();
        let list = vec![a.clone(), a.clone()];
        assert_eq!(list.as_slice().into_listeners().len(), 1);
        assert_eq!((&list).into_listeners().len(), 1);
    }
}
