//! Edit-form dialog content for the CRUD demo.

use transom::content::DialogContent;
use transom::context::DialogHandle;
use transom::options::DialogOptions;
use transom::register_content;
use transom::result::DialogResult;

use crate::service::{Record, RecordService};

/// Content descriptor type for the edit form.
pub struct EditFormContent;

impl DialogContent for EditFormContent {
    const NAME: &'static str = "edit_form";
}

register_content!(EditFormContent);

/// The running form: the state a shell would bind its inputs against.
///
/// With an `id` parameter the form edits that record; without one it
/// creates a new record on save.
pub struct EditForm {
    handle: DialogHandle,
    service: RecordService,
    original: Option<Record>,
    name: String,
    notes: String,
}

impl EditForm {
    /// Build the form from the open dialog's options.
    ///
    /// The form is only meaningful inside a dialog host, so a missing
    /// handle is a programming error and fails fast.
    pub fn new(
        handle: Option<DialogHandle>,
        options: &dyn DialogOptions,
        service: RecordService,
    ) -> Self {
        let handle = handle.expect("EditForm requires a dialog host");
        let original = options
            .control_parameters()
            .get::<i64>("id")
            .and_then(|id| service.get(*id));
        let (name, notes) = match &original {
            Some(record) => (record.name.clone(), record.notes.clone()),
            None => (String::new(), String::new()),
        };
        Self {
            handle,
            service,
            original,
            name,
            notes,
        }
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_notes(&mut self, notes: impl Into<String>) {
        self.notes = notes.into();
    }

    /// Whether the form differs from the record it loaded.
    pub fn is_dirty(&self) -> bool {
        match &self.original {
            Some(record) => record.name != self.name || record.notes != self.notes,
            None => !self.name.is_empty() || !self.notes.is_empty(),
        }
    }

    /// Persist the form and close the dialog with an `ok` result.
    ///
    /// A clean form has nothing to save and dismisses instead.
    pub fn save(self) {
        if !self.is_dirty() {
            log::info!("edit form: nothing changed, dismissing");
            self.handle.dismiss();
            return;
        }
        let saved = match self.original {
            Some(original) => {
                let record = Record {
                    id: original.id,
                    name: self.name,
                    notes: self.notes,
                };
                self.service.update(record.clone());
                record
            }
            None => self.service.create(self.name, self.notes),
        };
        log::info!("edit form: saved record {}", saved.id);
        self.handle.close(DialogResult::ok_with("saved".to_string()));
    }

    /// Close without persisting anything.
    pub fn cancel(self) {
        log::info!("edit form: cancelled (dirty: {})", self.is_dirty());
        self.handle.dismiss();
    }
}
