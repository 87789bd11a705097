// line_reader.rs

use crate::event_loop::SpinnerEvent;
use crossbeam::channel::Sender;
use log::{error, info, trace};
use std::io::BufRead;
use std::thread;

/// Strips the line terminator. Only `\n` is removed; a `\r` stays part of the line.
pub fn strip_newline(mut raw: Vec<u8>) -> String {
    if raw.last() == Some(&b'\n') {
        raw.pop();
    }
    String::from_utf8_lossy(&raw).into_owned()
}

/// Reads `reader` line by line on its own thread, forwarding each line to the
/// event loop. Sends `InputClosed` once when the input ends or fails.
pub fn spawn_line_reader<R>(
    mut reader: R,
    event_tx: Sender<SpinnerEvent>,
) -> thread::JoinHandle<()>
where
    R: BufRead + Send + 'static,
{
    thread::spawn(move || {
        info!("Line reader thread started");
        loop {
            let mut raw = Vec::new();
            match reader.read_until(b'\n', &mut raw) {
                Ok(0) => {
                    info!("Input reached EOF");
                    break;
                }
                Ok(n) => {
                    trace!("Read {} bytes from input", n);
                    if event_tx.send(SpinnerEvent::Line(strip_newline(raw))).is_err() {
                        // Event loop already exited.
                        return;
                    }
                }
                Err(e) => {
                    error!("Error reading input: {}", e);
                    break;
                }
            }
        }
        let _ = event_tx.send(SpinnerEvent::InputClosed);
    })
}
