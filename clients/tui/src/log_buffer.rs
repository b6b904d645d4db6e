use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use log::{Log, Metadata, Record};

const MAX_BUFFERED: usize = 50;

/// Captures `log::` records into a shared buffer so the draw loop can show
/// them in the log panel instead of corrupting the terminal.
pub struct BufferLogger {
    buffer: Arc<Mutex<VecDeque<String>>>,
}

impl BufferLogger {
    pub fn new() -> (Self, Arc<Mutex<VecDeque<String>>>) {
        let buffer = Arc::new(Mutex::new(VecDeque::new()));
        let logger = BufferLogger {
            buffer: Arc::clone(&buffer),
        };
        (logger, buffer)
    }
}

impl Log for BufferLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        if let Ok(mut buffer) = self.buffer.lock() {
            buffer.push_back(format!("{}", record.args()));
            while buffer.len() > MAX_BUFFERED {
                buffer.pop_front();
            }
        }
    }

    fn flush(&self) {}
}
