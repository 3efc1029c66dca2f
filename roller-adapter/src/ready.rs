use std::cell::RefCell;
use std::fmt;

/// What a ready subscriber learns about the mounted carousel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReadyInfo {
    pub container_id: String,
    pub items: usize,
}

type Subscriber = Box<dyn FnOnce(&ReadyInfo)>;

enum ReadyState {
    Pending(Vec<Subscriber>),
    Fired(ReadyInfo),
}

/// Announces that the carousel is mounted and dependent theming may run.
///
/// Fires at most once. Subscribers added after it fired run immediately.
pub struct ReadySignal {
    state: RefCell<ReadyState>,
}

impl Default for ReadySignal {
    fn default() -> Self {
        Self {
            state: RefCell::new(ReadyState::Pending(Vec::new())),
        }
    }
}

impl ReadySignal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, f: impl FnOnce(&ReadyInfo) + 'static) {
        let fired = match &mut *self.state.borrow_mut() {
            ReadyState::Pending(subs) => {
                subs.push(Box::new(f));
                return;
            }
            ReadyState::Fired(info) => info.clone(),
        };
        f(&fired);
    }

    /// Returns `false` if the signal had already fired.
    pub fn fire(&self, info: ReadyInfo) -> bool {
        match self.state.replace(ReadyState::Fired(info.clone())) {
            ReadyState::Pending(subs) => {
                for f in subs {
                    f(&info);
                }
                true
            }
            ReadyState::Fired(first) => {
                self.state.replace(ReadyState::Fired(first));
                false
            }
        }
    }

    pub fn is_fired(&self) -> bool {
        matches!(&*self.state.borrow(), ReadyState::Fired(_))
    }

    pub fn info(&self) -> Option<ReadyInfo> {
        match &*self.state.borrow() {
            ReadyState::Fired(info) => Some(info.clone()),
            ReadyState::Pending(_) => None,
        }
    }
}

impl fmt::Debug for ReadySignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &*self.state.borrow() {
            ReadyState::Pending(subs) => f
                .debug_struct("ReadySignal")
                .field("subscribers", &subs.len())
                .finish(),
            ReadyState::Fired(info) => f.debug_struct("ReadySignal").field("fired", info).finish(),
        }
    }
}
