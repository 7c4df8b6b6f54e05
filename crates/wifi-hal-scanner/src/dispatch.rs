//! Single-consumer event loop used as the scanner's scheduling context.
//!
//! Backends post [`Message`]s through a cloneable [`LoopHandle`]; the owner
//! of the [`EventLoop`] delivers them, one at a time and in order, to a
//! [`MessageHandler`]. Nothing here spawns threads: the loop runs wherever its
//! owner awaits or drains it.

use tokio::sync::mpsc::{self, error::TryRecvError, UnboundedReceiver, UnboundedSender};

/// A message posted to the event loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Message {
    /// Message code.
    pub what: u32,
    /// First argument.
    pub arg1: i32,
    /// Second argument.
    pub arg2: i32,
}

impl Message {
    /// A message with no arguments.
    pub const fn new(what: u32) -> Self {
        Self {
            what,
            arg1: 0,
            arg2: 0,
        }
    }

    /// A message with both arguments set.
    pub const fn with_args(what: u32, arg1: i32, arg2: i32) -> Self {
        Self { what, arg1, arg2 }
    }
}

/// Consumes messages delivered by an [`EventLoop`].
pub trait MessageHandler {
    /// Handle one message. Returns `true` if the message was consumed.
    fn handle_message(&mut self, msg: &Message) -> bool;
}

/// Create a connected handle/loop pair.
pub fn channel() -> (LoopHandle, EventLoop) {
    let (tx, rx) = mpsc::unbounded_channel();
    (LoopHandle { tx }, EventLoop { rx })
}

/// Sending side of the event loop. Cheap to clone.
#[derive(Debug, Clone)]
pub struct LoopHandle {
    tx: UnboundedSender<Message>,
}

impl LoopHandle {
    /// Queue a message. Returns `false` if the loop has been dropped.
    pub fn post(&self, msg: Message) -> bool {
        self.tx.send(msg).is_ok()
    }

    /// Whether the loop has been dropped.
    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

/// Receiving side of the event loop.
#[derive(Debug)]
pub struct EventLoop {
    rx: UnboundedReceiver<Message>,
}

impl EventLoop {
    /// Deliver messages until every [`LoopHandle`] is dropped.
    ///
    /// Returns the number of messages delivered.
    pub async fn run<H: MessageHandler + ?Sized>(&mut self, handler: &mut H) -> usize {
        let mut delivered = 0;
        while let Some(msg) = self.rx.recv().await {
            deliver(handler, &msg);
            delivered += 1;
        }
        delivered
    }

    /// Deliver every message already queued, without waiting.
    ///
    /// Returns the number of messages delivered.
    pub fn dispatch_pending<H: MessageHandler + ?Sized>(&mut self, handler: &mut H) -> usize {
        let mut delivered = 0;
        loop {
            match self.rx.try_recv() {
                Ok(msg) => {
                    deliver(handler, &msg);
                    delivered += 1;
                }
                Err(TryRecvError::Empty | TryRecvError::Disconnected) => return delivered,
            }
        }
    }
}

fn deliver<H: MessageHandler + ?Sized>(handler: &mut H, msg: &Message) {
    if !handler.handle_message(msg) {
        tracing::trace!(what = msg.what, "message not handled, dropping");
    }
}
