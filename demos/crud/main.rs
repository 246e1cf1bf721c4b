//! CRUD Dialog Example
//!
//! The full dialog lifecycle against a headless shell:
//! - an in-memory record service
//! - an edit-form content component with dirty tracking
//! - `show` with an `id` parameter, resolved by `ok_with("saved")`
//! - `dismiss` for the cancel path
//! - a create path with no `id` parameter

mod edit_form;
mod service;

use std::fs::File;

use edit_form::{EditForm, EditFormContent};
use service::RecordService;
use simplelog::{Config, LevelFilter, WriteLogger};
use tokio::sync::mpsc;
use transom::context::DialogContext;
use transom::options::Options;

/// Paints the dialog state once per render notification.
async fn run_shell(ctx: DialogContext, mut redraw: mpsc::UnboundedReceiver<()>) {
    while redraw.recv().await.is_some() {
        match ctx.active_content() {
            Some(content) => println!("[shell] dialog open: {}", content),
            None => println!("[shell] dialog closed"),
        }
    }
}

#[tokio::main]
async fn main() {
    // Set up file logging
    let log_file = File::create("crud.log").expect("Failed to create log file");
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let service = RecordService::new();
    let ada = service.create("Ada Lovelace".to_string(), "analyst".to_string());
    let grace = service.create("Grace Hopper".to_string(), "compilers".to_string());

    let ctx = DialogContext::new();
    let (redraw_tx, redraw_rx) = mpsc::unbounded_channel();
    ctx.set_render_notifier(move || {
        let _ = redraw_tx.send(());
    });
    let shell = tokio::spawn(run_shell(ctx.clone(), redraw_rx));

    // Edit an existing record and save it.
    let pending = ctx.show::<EditFormContent>(Options::new().param("id", ada.id));
    let content_ctx = ctx.clone();
    let content_service = service.clone();
    tokio::spawn(async move {
        let options = content_ctx.options().expect("options present while open");
        let mut form = EditForm::new(
            Some(content_ctx.handle()),
            options.as_ref(),
            content_service,
        );
        form.set_notes("wrote the first program".to_string());
        form.save();
    });
    let result = pending.await;
    log::info!("edit dialog resolved: {:?}", result);
    println!(
        "edit result: {:?} ({:?})",
        result.kind(),
        result.data::<String>()
    );

    // Open the same form through the dynamic entry point and abandon it.
    let pending = ctx
        .show_named("edit_form", Options::new().param("id", grace.id))
        .expect("edit_form is registered");
    let content_ctx = ctx.clone();
    let content_service = service.clone();
    tokio::spawn(async move {
        let options = content_ctx.options().expect("options present while open");
        let form = EditForm::new(
            Some(content_ctx.handle()),
            options.as_ref(),
            content_service,
        );
        form.cancel();
    });
    let result = pending.await;
    println!("cancel result: {:?}", result.kind());

    // No id parameter: the form creates a record on save.
    let pending = ctx.show::<EditFormContent>(Options::new());
    let content_ctx = ctx.clone();
    let content_service = service.clone();
    tokio::spawn(async move {
        let options = content_ctx.options().expect("options present while open");
        let mut form = EditForm::new(
            Some(content_ctx.handle()),
            options.as_ref(),
            content_service,
        );
        form.set_name("Margaret Hamilton".to_string());
        form.set_notes("flight software".to_string());
        form.save();
    });
    let result = pending.await;
    println!("create result: {:?}", result.kind());

    service.delete(grace.id);

    println!("records:");
    for record in service.list() {
        println!("  {}: {} ({})", record.id, record.name, record.notes);
    }

    // Detach the shell: replacing the notifier drops the redraw sender, so
    // the render task drains its queue and exits.
    ctx.set_render_notifier(|| {});
    shell.await.expect("shell task panicked");
}
