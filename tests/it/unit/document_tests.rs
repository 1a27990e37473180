//! Unit tests for the document event hub, through the public API.

use panel_resize::events::{EventContext, ListenScope, Listener};
use panel_resize::input::EventKind;
use panel_resize::{Document, EventOrigin, HandleId, RawEvent};
use parking_lot::Mutex;
use std::sync::Arc;

fn logger(log: &Arc<Mutex<Vec<&'static str>>>, name: &'static str) -> Listener {
    let log = log.clone();
    Arc::new(move |_: &RawEvent, _: &mut EventContext| log.lock().push(name))
}

#[test]
fn test_listeners_run_in_registration_order() {
    let doc = Document::new();
    let log = Arc::new(Mutex::new(Vec::new()));
    let _a = doc.listen(ListenScope::Document, EventKind::MouseUp, logger(&log, "first"));
    let _b = doc.listen(ListenScope::Handle(HandleId(2)), EventKind::MouseUp, logger(&log, "second"));
    let _c = doc.listen(ListenScope::Document, EventKind::MouseUp, logger(&log, "third"));

    doc.dispatch(EventOrigin::Handle(HandleId(2)), &RawEvent::mouse_up(0.0));
    assert_eq!(*log.lock(), vec!["first", "second", "third"]);
}

#[test]
fn test_listener_may_dispatch_reentrantly() {
    let doc = Document::new();
    let log = Arc::new(Mutex::new(Vec::new()));
    let _inner = doc.listen(ListenScope::Document, EventKind::MouseMove, logger(&log, "move"));

    let relay = doc.clone();
    let forward: Listener = Arc::new(move |_: &RawEvent, _: &mut EventContext| {
        relay.dispatch(EventOrigin::Document, &RawEvent::mouse_move(1.0));
    });
    let _outer = doc.listen(ListenScope::Document, EventKind::MouseUp, forward);

    let outcome = doc.dispatch(EventOrigin::Document, &RawEvent::mouse_up(0.0));
    assert_eq!(outcome.delivered, 1);
    assert_eq!(*log.lock(), vec!["move"]);
}

#[test]
fn test_prevent_default_reported() {
    let doc = Document::new();
    let prevent: Listener = Arc::new(|_: &RawEvent, cx: &mut EventContext| cx.prevent_default());
    let _sub = doc.listen(ListenScope::Document, EventKind::TouchMove, prevent);

    let outcome = doc.dispatch(
        EventOrigin::Document,
        &RawEvent::touch(panel_resize::input::TouchKind::Move, 5.0),
    );
    assert!(outcome.default_prevented);
}

#[test]
fn test_unsubscribe_is_immediate() {
    let doc = Document::new();
    let log = Arc::new(Mutex::new(Vec::new()));
    let sub = doc.listen(ListenScope::Document, EventKind::MouseDown, logger(&log, "down"));
    assert!(sub.is_live());
    sub.unsubscribe();
    doc.dispatch(EventOrigin::Document, &RawEvent::mouse_down(0.0));
    assert!(log.lock().is_empty());
    assert_eq!(doc.listener_count(), 0);
}
