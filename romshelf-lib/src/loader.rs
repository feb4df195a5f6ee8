//! Background listing loads.
//!
//! The session lives on the caller's thread. A load fetches on a worker
//! thread and sends the result back over a channel tagged with its
//! [`LoadTicket`]; the session decides whether the result is still wanted.

use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use romshelf_core::{LoadOutcome, LoadState, LoadTicket, RawRow, Session};
use romshelf_source::{DatasetSource, SourceError};

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// A finished fetch, as sent by a worker thread.
struct Fetched {
    ticket: LoadTicket,
    console: String,
    result: Result<Vec<RawRow>, SourceError>,
}

/// What happened when a fetch result reached the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadEvent {
    pub console: String,
    pub ticket: LoadTicket,
    pub outcome: LoadOutcome,
}

/// Runs fetches off the session's thread.
pub struct Loader {
    source: Arc<dyn DatasetSource>,
    tx: Sender<Fetched>,
    rx: Receiver<Fetched>,
    worker: Option<JoinHandle<()>>,
}

impl Loader {
    pub fn new(source: Arc<dyn DatasetSource>) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            source,
            tx,
            rx,
            worker: None,
        }
    }

    /// Begin loading `console` and fetch it in the background.
    pub fn start(&mut self, session: &mut Session, console: &str) -> LoadTicket {
        let ticket = session.begin_load(console);
        let source = Arc::clone(&self.source);
        let tx = self.tx.clone();
        let console = console.to_string();

        self.worker = Some(thread::spawn(move || {
            let result = source.fetch(&console);
            // The receiver only goes away when the loader is dropped.
            let _ = tx.send(Fetched {
                ticket,
                console,
                result,
            });
        }));
        ticket
    }

    /// Apply every result that has already arrived.
    pub fn poll(&self, session: &mut Session) -> Vec<LoadEvent> {
        let mut events = Vec::new();
        while let Ok(fetched) = self.rx.try_recv() {
            events.push(deliver(session, fetched));
        }
        events
    }

    /// Block until the session's pending load completes, calling `tick`
    /// while waiting. Stale results arriving meanwhile are applied (and
    /// ignored by the session) along the way.
    ///
    /// Returns the event for the pending load, or `None` if nothing was
    /// pending.
    pub fn wait(&mut self, session: &mut Session, mut tick: impl FnMut()) -> Option<LoadEvent> {
        loop {
            let LoadState::Loading { ticket: pending, .. } = session.load_state() else {
                return None;
            };
            let pending = *pending;

            match self.rx.recv_timeout(POLL_INTERVAL) {
                Ok(fetched) => {
                    let event = deliver(session, fetched);
                    if event.ticket == pending {
                        return Some(event);
                    }
                }
                Err(RecvTimeoutError::Timeout) => {
                    if self.worker.as_ref().is_some_and(JoinHandle::is_finished) {
                        // A finished worker has always sent already, unless it panicked.
                        match self.rx.try_recv() {
                            Ok(fetched) => {
                                let event = deliver(session, fetched);
                                if event.ticket == pending {
                                    return Some(event);
                                }
                                continue;
                            }
                            Err(_) => {
                                log::warn!("Loader thread stopped without a result");
                                self.worker = None;
                                session.go_home();
                                return None;
                            }
                        }
                    }
                    tick();
                }
                Err(RecvTimeoutError::Disconnected) => return None,
            }
        }
    }
}

/// Fetch and apply a load on the current thread.
pub fn load_blocking(
    source: &dyn DatasetSource,
    session: &mut Session,
    console: &str,
) -> LoadOutcome {
    let ticket = session.begin_load(console);
    session.finish_load(ticket, source.fetch(console))
}

fn deliver(session: &mut Session, fetched: Fetched) -> LoadEvent {
    let Fetched {
        ticket,
        console,
        result,
    } = fetched;
    let outcome = session.finish_load(ticket, result);
    log::debug!("load {ticket} for {console}: {outcome:?}");
    LoadEvent {
        console,
        ticket,
        outcome,
    }
}
