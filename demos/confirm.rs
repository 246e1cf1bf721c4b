//! Confirm Dialog Example
//!
//! The basic show/await/close handshake against a minimal headless shell:
//! - a channel-backed render notifier driving a render task
//! - a confirm dialog opened with a message parameter
//! - hosted content ending the interaction through its `DialogHandle`

use std::fs::File;
use std::time::Duration;

use simplelog::{Config, LevelFilter, WriteLogger};
use tokio::sync::mpsc;
use transom::content::DialogContent;
use transom::context::DialogContext;
use transom::options::Options;
use transom::register_content;
use transom::result::DialogResult;

struct ConfirmContent;

impl DialogContent for ConfirmContent {
    const NAME: &'static str = "confirm";
}

register_content!(ConfirmContent);

/// Paints the dialog state once per render notification. Exits after
/// painting a closed state, which in this demo means the cycle is over.
async fn run_shell(ctx: DialogContext, mut redraw: mpsc::UnboundedReceiver<()>) {
    while redraw.recv().await.is_some() {
        match ctx.active_content() {
            Some(content) => {
                let message = ctx
                    .options()
                    .and_then(|o| o.control_parameters().get::<String>("message").cloned())
                    .unwrap_or_default();
                println!("[shell] dialog open: {} ({})", content, message);
            }
            None => {
                println!("[shell] dialog closed");
                break;
            }
        }
    }
}

#[tokio::main]
async fn main() {
    // Set up file logging
    let log_file = File::create("confirm.log").expect("Failed to create log file");
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let ctx = DialogContext::new();

    let (redraw_tx, redraw_rx) = mpsc::unbounded_channel();
    ctx.set_render_notifier(move || {
        let _ = redraw_tx.send(());
    });
    let shell = tokio::spawn(run_shell(ctx.clone(), redraw_rx));

    let pending = ctx.show::<ConfirmContent>(
        Options::new().param("message", "Delete 3 records?".to_string()),
    );

    // Stands in for the user pressing the confirm button.
    let handle = ctx.handle();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(100)).await;
        handle.close(DialogResult::ok_with(true));
    });

    let result = pending.await;
    let confirmed = result.data::<bool>().copied().unwrap_or(false);
    log::info!("Confirm result: {:?}", result);
    println!("confirmed: {}", confirmed);

    shell.await.expect("shell task panicked");
}
