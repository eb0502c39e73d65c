use std::{
    any::Any,
    cell::RefCell,
    collections::HashSet,
    rc::Rc,
    sync::{
        atomic::{AtomicU64, Ordering},
        mpsc,
    },
};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct NodeId(u64);

static NEXT_NODE_ID: AtomicU64 = AtomicU64::new(0);
impl NodeId {
    pub fn new() -> Self {
        Self(NEXT_NODE_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::new()
    }
}

thread_local! {
    static SUBSCRIBER_STACK: RefCell<Vec<NodeId>> = RefCell::new(Vec::new());
    static DIRTY_NODES_TX: RefCell<Option<mpsc::Sender<NodeId>>> = RefCell::new(None);
}

struct SignalInner<T> {
    value: T,
    subscribers: HashSet<NodeId>,
}

#[derive(Clone)]
pub struct ReadSignal<T: 'static> {
    inner: Rc<RefCell<SignalInner<T>>>,
}

#[derive(Clone)]
pub struct WriteSignal<T: 'static> {
    inner: Rc<RefCell<SignalInner<T>>>,
}

pub fn create_signal<T: Any + Clone>(value: T) -> (ReadSignal<T>, WriteSignal<T>) {
    let inner = Rc::new(RefCell::new(SignalInner {
        value,
        subscribers: HashSet::new(),
    }));

    (
        ReadSignal {
            inner: inner.clone(),
        },
        WriteSignal { inner },
    )
}

impl<T: Clone> ReadSignal<T> {
    pub fn get(&self) -> T {
        SUBSCRIBER_STACK.with(|stack| {
            if let Some(node) = stack.borrow().last() {
                self.inner.borrow_mut().subscribers.insert(*node);
            }
        });
        self.inner.borrow().value.clone()
    }
}

impl<T: 'static> WriteSignal<T> {
    fn notify_subscribers(&self) {
        let subscribers = self.inner.borrow().subscribers.clone();
        DIRTY_NODES_TX.with(|tx_cell| {
            if let Some(tx) = tx_cell.borrow().as_ref() {
                for node in subscribers {
                    let _ = tx.send(node);
                }
            }
        });
    }

    pub fn set(&self, new_value: T) {
        self.inner.borrow_mut().value = new_value;
        self.notify_subscribers();
    }

    pub fn update<F>(&self, updater: F)
    where
        F: FnOnce(&mut T),
    {
        updater(&mut self.inner.borrow_mut().value);
        self.notify_subscribers();
    }
}

/// Marks the node whose widget is currently measuring, so signal reads
/// during the pass subscribe it for invalidation.
pub struct ScopedNodeContext(());

impl ScopedNodeContext {
    pub fn new(id: NodeId) -> Self {
        SUBSCRIBER_STACK.with(|stack| {
            stack.borrow_mut().push(id);
        });
        Self(())
    }
}

impl Drop for ScopedNodeContext {
    fn drop(&mut self) {
        SUBSCRIBER_STACK.with(|stack| {
            stack.borrow_mut().pop();
        });
    }
}

pub fn init_reactivity(tx: mpsc::Sender<NodeId>) {
    DIRTY_NODES_TX.with(|tx_cell| *tx_cell.borrow_mut() = Some(tx));
}
