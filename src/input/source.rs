use std::sync::{Arc, Mutex};

use crate::game::Command;

/// Non-blocking feed of commands into the engine, at most one per tick.
pub trait CommandSource: Send {
    /// Take the latest pending command, if any. Must never block.
    fn poll(&mut self) -> Option<Command>;
}

/// Single-slot last-value cell shared between a producer thread (recognizer,
/// input loop) and the tick loop.
///
/// This is the only legal cross-thread touchpoint: the producer publishes,
/// overwriting anything unconsumed (commands coalesce, latest wins), and the
/// engine side takes with get-and-clear semantics.
#[derive(Debug, Clone, Default)]
pub struct CommandSlot {
    cell: Arc<Mutex<Option<Command>>>,
}

impl CommandSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn publish(&self, command: Command) {
        *self.cell.lock().expect("command slot poisoned") = Some(command);
    }

    pub fn take(&self) -> Option<Command> {
        self.cell.lock().expect("command slot poisoned").take()
    }
}

impl CommandSource for CommandSlot {
    fn poll(&mut self) -> Option<Command> {
        self.take()
    }
}
