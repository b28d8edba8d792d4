use std::cell::RefCell;
use std::rc::Rc;

use yew::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub enum Notice {
    Success(String),
    Error(String),
}

/// Feedback line plus an in-flight latch for one submit action. The latch is
/// a ref cell so a second click before the next render is still refused.
#[derive(Clone)]
pub struct FormState {
    pub notice: UseStateHandle<Option<Notice>>,
    pending: UseStateHandle<bool>,
    latch: Rc<RefCell<bool>>,
}

impl FormState {
    /// Returns false if a submission is already in flight.
    pub fn try_begin(&self) -> bool {
        if *self.latch.borrow() {
            return false;
        }
        *self.latch.borrow_mut() = true;
        self.pending.set(true);
        self.notice.set(None);
        true
    }

    pub fn succeed(&self, message: impl Into<String>) {
        self.release();
        self.notice.set(Some(Notice::Success(message.into())));
    }

    pub fn fail(&self, message: impl Into<String>) {
        self.release();
        self.notice.set(Some(Notice::Error(message.into())));
    }

    pub fn is_pending(&self) -> bool {
        *self.pending
    }

    fn release(&self) {
        *self.latch.borrow_mut() = false;
        self.pending.set(false);
    }
}

impl PartialEq for FormState {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.latch, &other.latch)
            && self.notice == other.notice
            && self.pending == other.pending
    }
}

#[hook]
pub fn use_form_state() -> FormState {
    let notice = use_state(|| None::<Notice>);
    let pending = use_state(|| false);
    let latch = use_mut_ref(|| false);

    FormState { notice, pending, latch }
}
