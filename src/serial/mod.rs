//! Bridge between the button/lamp panel on a serial link and the rest of
//! the application.
//!
//! One background task polls the device for button reports and publishes
//! them on the [`EventHub`]; a second task drains a command queue onto the
//! device. When no device can be opened at startup the bridge degrades to a
//! logged no-op and the rest of the application runs unaffected.

mod protocol;

use std::io::ErrorKind;
use std::time::Duration;

use tokio::{
    io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader},
    sync::mpsc,
    time::{sleep, timeout},
};
use tokio_serial::SerialPortBuilderExt;
use tracing::{debug, error, info, warn};

use crate::{services::events, state::EventHub};

pub use self::protocol::PanelCommand;

/// Upper bound on one device read so a silent panel never wedges the poll task.
const READ_TIMEOUT: Duration = Duration::from_secs(1);
/// Pause between poll iterations to bound CPU usage.
const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Handle for issuing commands to the panel.
///
/// Holds the sending side of the writer task's queue when a device was
/// opened. Without a device every send is a logged no-op, so callers never
/// have to care whether hardware is attached.
#[derive(Clone)]
pub struct SerialBridge {
    commands: Option<mpsc::UnboundedSender<PanelCommand>>,
}

impl SerialBridge {
    /// Bridge wired to a writer task through the given queue.
    pub fn connected(commands: mpsc::UnboundedSender<PanelCommand>) -> Self {
        Self {
            commands: Some(commands),
        }
    }

    /// Bridge in device-absent mode: every send is dropped.
    pub fn disconnected() -> Self {
        Self { commands: None }
    }

    /// Whether a device was opened at startup.
    pub fn is_connected(&self) -> bool {
        self.commands.is_some()
    }

    /// Queue a command for the device. Never blocks and never fails; the
    /// writer task does not wait for any acknowledgment from the firmware.
    pub fn send(&self, command: PanelCommand) {
        match &self.commands {
            Some(tx) => {
                if tx.send(command).is_err() {
                    warn!(?command, "panel writer task gone; command dropped");
                }
            }
            None => debug!(?command, "panel absent; command dropped"),
        }
    }
}

/// Open the panel device and spawn its reader and writer tasks.
///
/// A failed open logs a warning and returns a disconnected bridge; the
/// process keeps running with hardware I/O disabled.
pub fn connect(port: &str, baud: u32, hub: EventHub) -> SerialBridge {
    let stream = match tokio_serial::new(port, baud).open_native_async() {
        Ok(stream) => stream,
        Err(err) => {
            warn!(port, error = %err, "could not open panel device; hardware disabled");
            return SerialBridge::disconnected();
        }
    };
    info!(port, baud, "panel device connected");

    let (read_half, write_half) = tokio::io::split(stream);
    let (command_tx, command_rx) = mpsc::unbounded_channel();

    tokio::spawn(run_writer(write_half, command_rx));
    tokio::spawn(poll_device(read_half, hub));

    SerialBridge::connected(command_tx)
}

/// Drain the command queue onto the device, one word per line.
async fn run_writer<W>(mut device: W, mut commands: mpsc::UnboundedReceiver<PanelCommand>)
where
    W: AsyncWrite + Unpin,
{
    while let Some(command) = commands.recv().await {
        let frame = format!("{}\n", command.wire_word());
        if let Err(err) = device.write_all(frame.as_bytes()).await {
            warn!(?command, error = %err, "failed to write panel command");
        }
    }
}

/// Read button reports from the device until it goes away, broadcasting
/// each recognized line.
///
/// An undecodable line is skipped; end-of-stream or any other I/O error
/// means the device was detached, which stops the loop for good. The loop
/// is not restarted: button events stay disabled for the rest of the
/// process.
async fn poll_device<R>(device: R, hub: EventHub)
where
    R: AsyncRead + Unpin,
{
    let mut lines = BufReader::new(device).lines();
    loop {
        // next_line is cancel safe, so the timeout cannot lose buffered input.
        match timeout(READ_TIMEOUT, lines.next_line()).await {
            Err(_) => {}
            Ok(Ok(Some(line))) => {
                if let Some(raw) = protocol::parse_button_line(&line) {
                    info!(raw, "button pressed");
                    events::broadcast_button_pressed(&hub, raw);
                }
            }
            Ok(Ok(None)) => {
                error!("panel device closed its stream; button events disabled");
                break;
            }
            Ok(Err(err)) if err.kind() == ErrorKind::InvalidData => {
                warn!(error = %err, "undecodable line from panel; skipping");
            }
            Ok(Err(err)) => {
                error!(error = %err, "panel read failed; button events disabled");
                break;
            }
        }
        sleep(POLL_INTERVAL).await;
    }
}
