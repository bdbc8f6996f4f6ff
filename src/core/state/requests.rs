//! Bookkeeping for in-flight backend requests.
//!
//! Every request gets an id. A reply whose id is no longer tracked is stale
//! and gets dropped. Page loads are forgotten whenever a newer load starts or
//! the page is left; mutations stay tracked until their reply arrives.

use std::collections::HashMap;

use crate::{core::api::RequestId, domain::term::Term};

/// Which part of the state a reply is for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestTarget {
    Dashboard,
    CourseList,
    CourseDetail,
    InstanceList,
    InstanceDetail,
    CourseFormOptions,
    InstanceFormOptions,
    DeleteCourse { course_id: String },
    DeleteInstance { term: Term, course_id: String },
    CreateCourse,
    CreateInstance,
}

impl RequestTarget {
    pub fn is_load(&self) -> bool {
        !matches!(
            self,
            RequestTarget::DeleteCourse { .. }
                | RequestTarget::DeleteInstance { .. }
                | RequestTarget::CreateCourse
                | RequestTarget::CreateInstance
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestTracker {
    next_id: RequestId,
    pending: HashMap<RequestId, RequestTarget>,
}

impl RequestTracker {
    /// Starts a page load, superseding any load still pending
    pub fn begin_load(&mut self, target: RequestTarget) -> RequestId {
        self.forget_loads();
        self.register(target)
    }

    pub fn begin_mutation(&mut self, target: RequestTarget) -> RequestId {
        self.register(target)
    }

    fn register(&mut self, target: RequestTarget) -> RequestId {
        self.next_id += 1;
        let id = self.next_id;
        self.pending.insert(id, target);
        id
    }

    /// Resolves a reply. `None` means the reply is stale.
    pub fn take(&mut self, id: RequestId) -> Option<RequestTarget> {
        self.pending.remove(&id)
    }

    pub fn forget_loads(&mut self) {
        self.pending.retain(|_, target| !target.is_load());
    }

    pub fn is_pending(&self, target: &RequestTarget) -> bool {
        self.pending.values().any(|t| t == target)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_ids_are_unique_and_taken_once() {
        let mut tracker = RequestTracker::default();
        let a = tracker.begin_load(RequestTarget::Dashboard);
        let b = tracker.begin_mutation(RequestTarget::CreateCourse);
        assert_ne!(a, b);
        assert_eq!(tracker.take(a), Some(RequestTarget::Dashboard));
        assert_eq!(tracker.take(a), None);
        assert_eq!(tracker.take(b), Some(RequestTarget::CreateCourse));
        assert!(tracker.is_empty());
    }

    #[test]
    fn test_new_load_supersedes_old_load() {
        let mut tracker = RequestTracker::default();
        let old = tracker.begin_load(RequestTarget::InstanceList);
        let new = tracker.begin_load(RequestTarget::InstanceList);
        assert_eq!(tracker.take(old), None);
        assert_eq!(tracker.take(new), Some(RequestTarget::InstanceList));
    }

    #[test]
    fn test_forget_loads_keeps_mutations() {
        let mut tracker = RequestTracker::default();
        let load = tracker.begin_load(RequestTarget::CourseList);
        let delete = tracker.begin_mutation(RequestTarget::DeleteCourse {
            course_id: "CS101".into(),
        });
        tracker.forget_loads();
        assert_eq!(tracker.len(), 1);
        assert_eq!(tracker.take(load), None);
        assert!(tracker.take(delete).is_some());
    }

    #[test]
    fn test_is_pending() {
        let mut tracker = RequestTracker::default();
        tracker.begin_mutation(RequestTarget::CreateInstance);
        assert!(tracker.is_pending(&RequestTarget::CreateInstance));
        assert!(!tracker.is_pending(&RequestTarget::CreateCourse));
    }
}
