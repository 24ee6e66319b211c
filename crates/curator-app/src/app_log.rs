use std::collections::VecDeque;
use std::io::{self, Write};
use std::sync::{Arc, Mutex, OnceLock};

use tracing_subscriber::fmt::MakeWriter;

const MAX_LINES: usize = 500;

static BUFFER: OnceLock<Arc<Mutex<VecDeque<String>>>> = OnceLock::new();

fn buffer() -> Arc<Mutex<VecDeque<String>>> {
    BUFFER.get_or_init(|| Arc::new(Mutex::new(VecDeque::with_capacity(MAX_LINES)))).clone()
}

fn push_lines(text: &str) {
    let buf = buffer();
    let mut guard = match buf.lock() {
        Ok(g) => g,
        Err(_) => return,
    };
    for line in text.lines() {
        if line.is_empty() {
            continue;
        }
        guard.push_back(line.to_string());
        while guard.len() > MAX_LINES {
            let _ = guard.pop_front();
        }
    }
}

/// The newest `limit` captured log lines, oldest first.
pub fn recent_lines(limit: usize) -> Vec<String> {
    let buf = buffer();
    let guard = match buf.lock() {
        Ok(g) => g,
        Err(_) => return Vec::new(),
    };
    let skip = guard.len().saturating_sub(limit);
    guard.iter().skip(skip).cloned().collect()
}

/// Routes tracing output into the in-app ring buffer instead of the terminal,
/// which is in raw mode while the UI runs.
#[derive(Clone, Default)]
pub struct ActivityMakeWriter;

impl<'a> MakeWriter<'a> for ActivityMakeWriter {
    type Writer = ActivityWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ActivityWriter
    }
}

pub struct ActivityWriter;

impl Write for ActivityWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        push_lines(&String::from_utf8_lossy(buf));
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
