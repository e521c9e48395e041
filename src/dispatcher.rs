//! Single-listener event dispatch.
//!
//! The dispatcher owns exactly one active listener and delivers events to it
//! synchronously, in order. Events can be delivered immediately with
//! `dispatch` or buffered with `enqueue` and delivered later with `drain`.
//!
//! Screen transitions are two-phase. A request only parks the next listener;
//! on commit the current listener gets `handle_pending_screen_transition`,
//! then the parked listener takes its place.
//!
//! ```text
//! producer → enqueue/dispatch → Dispatcher → active listener
//!                                   ↑
//!                    TransitionHandle::request(next)
//! ```

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;

use crate::config::Config;
use crate::error::{DispatchError, DispatchResult};
use crate::events::UiEvent;
use crate::listener::UiEventListener;
use crate::log;
use crate::tick::TickMonitor;

type ListenerSlot = Rc<RefCell<Option<Box<dyn UiEventListener>>>>;

/// Shared handle for requesting a screen transition.
///
/// Listeners can keep a clone and request the next screen from inside a
/// handler. The request takes effect when the dispatcher commits it, never
/// during the delivery that made it. A newer request replaces an older one.
#[derive(Clone, Default)]
pub struct TransitionHandle {
    slot: ListenerSlot,
}

impl TransitionHandle {
    /// Park `next` as the listener to activate on the next commit
    pub fn request(&self, next: Box<dyn UiEventListener>) {
        // Drop the replaced listener only after the slot is released.
        let replaced = self.slot.replace(Some(next));
        drop(replaced);
    }

    pub fn is_pending(&self) -> bool {
        self.slot.borrow().is_some()
    }

    /// Withdraw a pending request, handing back the parked listener
    pub fn cancel(&self) -> Option<Box<dyn UiEventListener>> {
        self.slot.borrow_mut().take()
    }
}

impl fmt::Debug for TransitionHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransitionHandle")
            .field("pending", &self.is_pending())
            .finish()
    }
}

/// Delivers events to the one active listener.
pub struct Dispatcher {
    listener: Option<Box<dyn UiEventListener>>,
    transitions: TransitionHandle,
    queue: VecDeque<UiEvent>,
    capacity: usize,
    monitor: TickMonitor,
    log_events: bool,
}

impl Dispatcher {
    /// Create a dispatcher with no listener registered
    pub fn new(config: &Config) -> Self {
        let capacity = config.queue_capacity.max(1);
        Self {
            listener: None,
            transitions: TransitionHandle::default(),
            queue: VecDeque::with_capacity(capacity),
            capacity,
            monitor: TickMonitor::new(config.tick_budget()),
            log_events: config.log_events,
        }
    }

    /// Register the initial listener (for builder pattern)
    pub fn with_listener(mut self, listener: Box<dyn UiEventListener>) -> Self {
        self.register(listener);
        self
    }

    /// Make `listener` the active listener.
    ///
    /// Returns the previously active listener, if any. It receives no
    /// further events from this dispatcher.
    pub fn register(
        &mut self,
        listener: Box<dyn UiEventListener>,
    ) -> Option<Box<dyn UiEventListener>> {
        self.listener.replace(listener)
    }

    /// Remove the active listener and hand it back.
    pub fn unregister(&mut self) -> Option<Box<dyn UiEventListener>> {
        self.listener.take()
    }

    pub fn has_listener(&self) -> bool {
        self.listener.is_some()
    }

    /// Deliver one event to the active listener right away.
    pub fn dispatch(&mut self, event: UiEvent) -> DispatchResult<()> {
        let listener = self.listener.as_mut().ok_or(DispatchError::NoListener)?;

        if self.log_events {
            log::log_event(&event.to_string());
        }

        match event {
            UiEvent::Tick => {
                let timing = self.monitor.start();
                listener.handle_event(&event);
                if self.monitor.finish(timing) {
                    log::warn(&format!(
                        "Tick handler overran budget: {:?} > {:?}",
                        self.monitor.last().unwrap_or_default(),
                        self.monitor.budget()
                    ));
                }
            }
            other => listener.handle_event(&other),
        }

        Ok(())
    }

    /// Queue an event for the next `drain`.
    pub fn enqueue(&mut self, event: UiEvent) -> DispatchResult<()> {
        if self.queue.len() >= self.capacity {
            return Err(DispatchError::QueueFull {
                capacity: self.capacity,
            });
        }
        self.queue.push_back(event);
        Ok(())
    }

    /// Deliver all queued events in arrival order.
    ///
    /// Returns the number of events delivered. Without a listener nothing is
    /// delivered and the queue is left untouched.
    pub fn drain(&mut self) -> DispatchResult<usize> {
        if !self.has_listener() {
            return Err(DispatchError::NoListener);
        }

        let mut delivered = 0;
        while let Some(event) = self.queue.pop_front() {
            self.dispatch(event)?;
            delivered += 1;
        }
        Ok(delivered)
    }

    /// Number of events waiting in the queue
    pub fn queued(&self) -> usize {
        self.queue.len()
    }

    /// Deliver one system tick, then commit any pending transition.
    ///
    /// With no active listener a pending transition is committed first, so
    /// the parked listener becomes active and receives this tick.
    pub fn tick(&mut self) -> DispatchResult<()> {
        if !self.has_listener() {
            self.commit_transition();
        }
        self.dispatch(UiEvent::Tick)?;
        // The replaced listener is dropped here.
        self.commit_transition();
        Ok(())
    }

    /// A handle listeners can use to request the next screen
    pub fn transitions(&self) -> TransitionHandle {
        self.transitions.clone()
    }

    /// Request a transition to `next`, committed on the next tick.
    pub fn request_transition(&mut self, next: Box<dyn UiEventListener>) {
        self.transitions.request(next);
    }

    pub fn has_pending_transition(&self) -> bool {
        self.transitions.is_pending()
    }

    /// Carry out a pending transition.
    ///
    /// The current listener is told via `handle_pending_screen_transition`
    /// before it is replaced. Returns the replaced listener, or `None` when
    /// nothing was pending or no listener was active.
    pub fn commit_transition(&mut self) -> Option<Box<dyn UiEventListener>> {
        if !self.transitions.is_pending() {
            return None;
        }

        if let Some(current) = self.listener.as_mut() {
            let event = UiEvent::PendingScreenTransition;
            if self.log_events {
                log::log_event(&event.to_string());
            }
            current.handle_event(&event);
        }

        // Taken after notifying, so a request made by the handler wins.
        let next = self.transitions.cancel()?;
        log::log("Screen transition committed");
        self.register(next)
    }

    pub fn tick_monitor(&self) -> &TickMonitor {
        &self.monitor
    }

    pub fn tick_monitor_mut(&mut self) -> &mut TickMonitor {
        &mut self.monitor
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl Drop for Dispatcher {
    fn drop(&mut self) {
        // A parked listener may hold a handle to its own slot.
        drop(self.transitions.cancel());
    }
}

impl fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field("has_listener", &self.has_listener())
            .field("pending_transition", &self.has_pending_transition())
            .field("queued", &self.queue.len())
            .field("capacity", &self.capacity)
            .field("monitor", &self.monitor)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{ClickEvent, DragEvent, GestureEvent, KeyCode};
    use std::cell::Cell;
    use std::time::Duration;

    type Log = Rc<RefCell<Vec<String>>>;

    /// Records every call, including its own drop.
    struct Recorder {
        name: &'static str,
        log: Log,
    }

    impl Recorder {
        fn boxed(name: &'static str, log: &Log) -> Box<dyn UiEventListener> {
            Box::new(Recorder {
                name,
                log: log.clone(),
            })
        }

        fn note(&self, what: String) {
            self.log.borrow_mut().push(format!("{} {}", self.name, what));
        }
    }

    impl UiEventListener for Recorder {
        fn handle_click_event(&mut self, event: &ClickEvent) {
            self.note(format!("click {}", event.x));
        }
        fn handle_drag_event(&mut self, event: &DragEvent) {
            self.note(format!("drag {}", event.delta_x()));
        }
        fn handle_gesture_event(&mut self, event: &GestureEvent) {
            self.note(format!("gesture {}", event.velocity));
        }
        fn handle_key_event(&mut self, code: KeyCode) {
            self.note(format!("key {}", code.value()));
        }
        fn handle_tick_event(&mut self) {
            self.note("tick".to_string());
        }
        fn handle_pending_screen_transition(&mut self) {
            self.note("pending".to_string());
        }
    }

    impl Drop for Recorder {
        fn drop(&mut self) {
            self.note("dropped".to_string());
        }
    }

    fn new_log() -> Log {
        Rc::new(RefCell::new(Vec::new()))
    }

    #[test]
    fn test_dispatch_without_listener() {
        let mut dispatcher = Dispatcher::default();
        assert!(!dispatcher.has_listener());
        assert_eq!(dispatcher.dispatch(UiEvent::Tick), Err(DispatchError::NoListener));
        assert_eq!(dispatcher.tick(), Err(DispatchError::NoListener));
    }

    #[test]
    fn test_tick_counter_ignores_clicks() {
        struct TickCounter(Rc<Cell<u32>>);

        impl UiEventListener for TickCounter {
            fn handle_tick_event(&mut self) {
                self.0.set(self.0.get() + 1);
            }
        }

        let counter = Rc::new(Cell::new(0));
        let mut dispatcher =
            Dispatcher::default().with_listener(Box::new(TickCounter(counter.clone())));

        for i in 0..5 {
            dispatcher.dispatch(UiEvent::Tick).unwrap();
            if i < 3 {
                dispatcher
                    .dispatch(UiEvent::Click(ClickEvent::pressed(i, i)))
                    .unwrap();
                assert_eq!(counter.get(), (i + 1) as u32);
            }
        }

        assert_eq!(counter.get(), 5);
    }

    #[test]
    fn test_pending_transition_flag_set_once() {
        struct TransitionFlag(Rc<Cell<u32>>);

        impl UiEventListener for TransitionFlag {
            fn handle_pending_screen_transition(&mut self) {
                self.0.set(self.0.get() + 1);
            }
        }

        let flag = Rc::new(Cell::new(0));
        let mut dispatcher =
            Dispatcher::default().with_listener(Box::new(TransitionFlag(flag.clone())));

        dispatcher.dispatch(UiEvent::Tick).unwrap();
        dispatcher.dispatch(UiEvent::key(b'a')).unwrap();
        assert_eq!(flag.get(), 0);

        dispatcher.dispatch(UiEvent::PendingScreenTransition).unwrap();
        assert_eq!(flag.get(), 1);

        dispatcher
            .dispatch(UiEvent::Drag(DragEvent::new(0, 0, 3, 3)))
            .unwrap();
        dispatcher.dispatch(UiEvent::Tick).unwrap();
        assert_eq!(flag.get(), 1);
    }

    #[test]
    fn test_clicks_delivered_in_order() {
        let log = new_log();
        let mut dispatcher = Dispatcher::default().with_listener(Recorder::boxed("a", &log));

        for x in [5, 1, 9, 1] {
            dispatcher
                .dispatch(UiEvent::Click(ClickEvent::released(x, 0)))
                .unwrap();
        }

        assert_eq!(*log.borrow(), vec!["a click 5", "a click 1", "a click 9", "a click 1"]);
    }

    #[test]
    fn test_drop_invokes_no_handler() {
        let log = new_log();
        let dispatcher = Dispatcher::default().with_listener(Recorder::boxed("a", &log));
        drop(dispatcher);
        assert_eq!(*log.borrow(), vec!["a dropped"]);

        let log = new_log();
        let mut dispatcher = Dispatcher::default().with_listener(Recorder::boxed("b", &log));
        let listener = dispatcher.unregister();
        assert!(!dispatcher.has_listener());
        drop(listener);
        assert_eq!(*log.borrow(), vec!["b dropped"]);
    }

    #[test]
    fn test_register_replaces_active_listener() {
        let log = new_log();
        let mut dispatcher = Dispatcher::default();

        assert!(dispatcher.register(Recorder::boxed("a", &log)).is_none());
        dispatcher.dispatch(UiEvent::key(1u8)).unwrap();

        let previous = dispatcher.register(Recorder::boxed("b", &log));
        assert!(previous.is_some());
        dispatcher.dispatch(UiEvent::key(2u8)).unwrap();
        drop(previous);

        assert_eq!(*log.borrow(), vec!["a key 1", "b key 2", "a dropped"]);
    }

    #[test]
    fn test_queue_capacity_and_fifo_drain() {
        let log = new_log();
        let config = Config {
            queue_capacity: 3,
            ..Config::default()
        };
        let mut dispatcher = Dispatcher::new(&config);

        dispatcher.enqueue(UiEvent::key(1u8)).unwrap();
        dispatcher
            .enqueue(UiEvent::Gesture(GestureEvent::swipe_vertical(-4, 0, 0)))
            .unwrap();
        dispatcher.enqueue(UiEvent::Tick).unwrap();
        assert_eq!(
            dispatcher.enqueue(UiEvent::Tick),
            Err(DispatchError::QueueFull { capacity: 3 })
        );

        // Nothing is lost while no listener is registered.
        assert_eq!(dispatcher.drain(), Err(DispatchError::NoListener));
        assert_eq!(dispatcher.queued(), 3);

        dispatcher.register(Recorder::boxed("a", &log));
        assert_eq!(dispatcher.drain(), Ok(3));
        assert_eq!(dispatcher.queued(), 0);
        assert_eq!(*log.borrow(), vec!["a key 1", "a gesture -4", "a tick"]);
    }

    #[test]
    fn test_commit_transition_notifies_old_listener_once() {
        let log = new_log();
        let mut dispatcher = Dispatcher::default().with_listener(Recorder::boxed("a", &log));

        assert!(dispatcher.commit_transition().is_none());

        dispatcher.request_transition(Recorder::boxed("b", &log));
        assert!(dispatcher.has_pending_transition());

        // Pending transitions wait until after the tick.
        dispatcher.tick().unwrap();
        assert!(!dispatcher.has_pending_transition());

        dispatcher.dispatch(UiEvent::key(7u8)).unwrap();

        assert_eq!(
            *log.borrow(),
            vec!["a tick", "a pending", "a dropped", "b key 7"]
        );
    }

    #[test]
    fn test_listener_requests_transition_through_handle() {
        struct Menu {
            transitions: TransitionHandle,
            log: Log,
        }

        impl UiEventListener for Menu {
            fn handle_key_event(&mut self, code: KeyCode) {
                if code == KeyCode::ENTER {
                    self.transitions.request(Recorder::boxed("first", &self.log));
                    self.transitions.request(Recorder::boxed("second", &self.log));
                }
            }
        }

        let log = new_log();
        let mut dispatcher = Dispatcher::default();
        let menu = Menu {
            transitions: dispatcher.transitions(),
            log: log.clone(),
        };
        dispatcher.register(Box::new(menu));

        dispatcher.dispatch(UiEvent::key(KeyCode::ENTER)).unwrap();
        assert!(dispatcher.has_pending_transition());
        assert!(dispatcher.commit_transition().is_some());

        dispatcher.dispatch(UiEvent::Tick).unwrap();
        assert_eq!(*log.borrow(), vec!["first dropped", "second tick"]);
    }

    #[test]
    fn test_cancelled_transition_is_not_committed() {
        let log = new_log();
        let mut dispatcher = Dispatcher::default().with_listener(Recorder::boxed("a", &log));
        let handle = dispatcher.transitions();

        handle.request(Recorder::boxed("b", &log));
        assert!(handle.cancel().is_some());
        dispatcher.tick().unwrap();

        assert_eq!(*log.borrow(), vec!["b dropped", "a tick"]);
    }

    #[test]
    fn test_drop_releases_parked_listener() {
        struct Parked {
            _transitions: TransitionHandle,
            dropped: Rc<Cell<bool>>,
        }

        impl UiEventListener for Parked {}

        impl Drop for Parked {
            fn drop(&mut self) {
                self.dropped.set(true);
            }
        }

        let dropped = Rc::new(Cell::new(false));
        let log = new_log();
        let mut dispatcher = Dispatcher::default().with_listener(Recorder::boxed("a", &log));
        let parked = Box::new(Parked {
            _transitions: dispatcher.transitions(),
            dropped: dropped.clone(),
        });
        dispatcher.request_transition(parked);

        drop(dispatcher);
        assert!(dropped.get());
        assert_eq!(*log.borrow(), vec!["a dropped"]);
    }

    #[test]
    fn test_replaced_request_may_touch_handle_on_drop() {
        struct Inspecting {
            transitions: TransitionHandle,
            saw_pending: Rc<Cell<Option<bool>>>,
        }

        impl UiEventListener for Inspecting {}

        impl Drop for Inspecting {
            fn drop(&mut self) {
                self.saw_pending.set(Some(self.transitions.is_pending()));
            }
        }

        let log = new_log();
        let saw_pending = Rc::new(Cell::new(None));
        let dispatcher = Dispatcher::default();
        let handle = dispatcher.transitions();

        handle.request(Box::new(Inspecting {
            transitions: handle.clone(),
            saw_pending: saw_pending.clone(),
        }));
        handle.request(Recorder::boxed("b", &log));

        assert_eq!(saw_pending.get(), Some(true));
        assert!(handle.is_pending());
    }

    #[test]
    fn test_routed_listener_sees_every_delivery() {
        struct Routed(Log);

        impl UiEventListener for Routed {
            fn handle_event(&mut self, event: &UiEvent) {
                self.0.borrow_mut().push(event.to_string());
            }
        }

        let log = new_log();
        let mut dispatcher = Dispatcher::default().with_listener(Box::new(Routed(log.clone())));

        dispatcher.dispatch(UiEvent::key(b'x')).unwrap();
        dispatcher.dispatch(UiEvent::Tick).unwrap();
        dispatcher.request_transition(Recorder::boxed("b", &log));
        dispatcher.tick().unwrap();

        assert_eq!(
            *log.borrow(),
            vec!["key 'x' (120)", "tick", "tick", "pending screen transition"]
        );
        assert_eq!(dispatcher.tick_monitor().count(), 2);
    }

    #[test]
    fn test_tick_without_listener_commits_pending_transition() {
        let log = new_log();
        let mut dispatcher = Dispatcher::default();

        dispatcher.request_transition(Recorder::boxed("b", &log));
        dispatcher.tick().unwrap();

        assert!(dispatcher.has_listener());
        assert!(!dispatcher.has_pending_transition());
        assert_eq!(*log.borrow(), vec!["b tick"]);
    }

    #[test]
    fn test_slow_tick_counts_as_overrun() {
        struct Slow;

        impl UiEventListener for Slow {
            fn handle_tick_event(&mut self) {
                std::thread::sleep(Duration::from_millis(3));
            }
        }

        let config = Config {
            tick_budget_ms: 0,
            ..Config::default()
        };
        let mut dispatcher = Dispatcher::new(&config).with_listener(Box::new(Slow));

        dispatcher.tick().unwrap();
        dispatcher.dispatch(UiEvent::key(0u8)).unwrap();

        assert_eq!(dispatcher.tick_monitor().count(), 1);
        assert_eq!(dispatcher.tick_monitor().overruns(), 1);
    }
}
