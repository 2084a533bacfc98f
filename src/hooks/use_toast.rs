// ============================================================================
// USE TOAST - fire-and-forget notifications
// ============================================================================
// The queue itself is pure and reducer-backed; rendering and auto-dismiss
// live in components/toaster.rs.
// ============================================================================

use std::rc::Rc;

use yew::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ToastVariant {
    Default,
    Destructive,
}

#[derive(Clone, PartialEq, Debug)]
pub struct Toast {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

#[derive(Clone, PartialEq, Debug, Default)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    next_id: u32,
}

impl ToastQueue {
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    fn pushed(&self, title: String, description: String, variant: ToastVariant) -> Self {
        let mut next = self.clone();
        next.toasts.push(Toast {
            id: next.next_id,
            title,
            description,
            variant,
        });
        next.next_id += 1;
        next
    }

    fn dismissed(&self, id: u32) -> Self {
        let mut next = self.clone();
        next.toasts.retain(|t| t.id != id);
        next
    }
}

pub enum ToastAction {
    Push {
        title: String,
        description: String,
        variant: ToastVariant,
    },
    Dismiss(u32),
}

impl Reducible for ToastQueue {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            ToastAction::Push {
                title,
                description,
                variant,
            } => Rc::new(self.pushed(title, description, variant)),
            ToastAction::Dismiss(id) => Rc::new(self.dismissed(id)),
        }
    }
}

/// Cheap handle components grab from context to fire notifications.
/// Dispatch-only, so pushing a toast never re-renders the caller.
#[derive(Clone, PartialEq)]
pub struct ToastHandle {
    dispatcher: UseReducerDispatcher<ToastQueue>,
}

impl ToastHandle {
    pub fn new(dispatcher: UseReducerDispatcher<ToastQueue>) -> Self {
        Self { dispatcher }
    }

    pub fn toast(&self, title: &str, description: &str) {
        self.dispatcher.dispatch(ToastAction::Push {
            title: title.to_string(),
            description: description.to_string(),
            variant: ToastVariant::Default,
        });
    }

    pub fn toast_destructive(&self, title: &str, description: &str) {
        self.dispatcher.dispatch(ToastAction::Push {
            title: title.to_string(),
            description: description.to_string(),
            variant: ToastVariant::Destructive,
        });
    }

    pub fn dismiss(&self, id: u32) {
        self.dispatcher.dispatch(ToastAction::Dismiss(id));
    }
}

#[hook]
pub fn use_toast() -> ToastHandle {
    use_context::<ToastHandle>().expect("use_toast called outside of ToastProvider")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_assigns_unique_monotonic_ids() {
        let queue = ToastQueue::default()
            .pushed("A".into(), "first".into(), ToastVariant::Default)
            .pushed("B".into(), "second".into(), ToastVariant::Destructive);

        let ids: Vec<u32> = queue.toasts().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![0, 1]);
        assert_eq!(queue.toasts()[1].variant, ToastVariant::Destructive);
    }

    #[test]
    fn dismiss_removes_exactly_one_entry() {
        let queue = ToastQueue::default()
            .pushed("A".into(), String::new(), ToastVariant::Default)
            .pushed("B".into(), String::new(), ToastVariant::Default)
            .dismissed(0);

        assert_eq!(queue.toasts().len(), 1);
        assert_eq!(queue.toasts()[0].title, "B");
    }

    #[test]
    fn ids_are_not_reused_after_dismiss() {
        let queue = ToastQueue::default()
            .pushed("A".into(), String::new(), ToastVariant::Default)
            .dismissed(0)
            .pushed("B".into(), String::new(), ToastVariant::Default);

        assert_eq!(queue.toasts()[0].id, 1);
    }
}
