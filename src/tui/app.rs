//! Application state for the TUI
//!
//! The App owns the wizard store and the shell, and tracks which field has
//! focus, the text editor for that field, toasts, the modal dialog and any
//! attachment writes still running in the background.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::storage::{BlobStore, BlobWriter, PendingWrite};
use crate::submission::SubmissionSink;
use crate::wizard::{Screen, Shell, StepOutcome, WizardStore};

use super::form::{form, form_mut, FieldKind, StepForm};
use super::widgets::{Notification, NotificationQueue, TextInput};

/// Currently active dialog (if any)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    /// Acknowledgement after a successful submission
    Submitted { company: String },
}

/// Main application state
pub struct App {
    pub store: WizardStore,
    pub blobs: Arc<dyn BlobStore>,
    /// Orders logo writes into `blobs`
    writer: BlobWriter,
    pub sink: Box<dyn SubmissionSink>,
    pub shell: Shell,

    /// Index of the focused field on the mounted screen
    pub focus: usize,
    /// Editor for the focused field when it is textual
    pub editor: TextInput,

    pub notifications: NotificationQueue,
    pub active_dialog: ActiveDialog,
    pub should_quit: bool,

    /// Attachment writes that have not been reaped yet
    pending_writes: Vec<PendingWrite>,
}

impl App {
    pub fn new(store: WizardStore, blobs: Arc<dyn BlobStore>, sink: Box<dyn SubmissionSink>) -> Self {
        let shell = Shell::new(&store, blobs.as_ref());
        let writer = BlobWriter::new(Arc::clone(&blobs));
        let mut app = Self {
            store,
            blobs,
            writer,
            sink,
            shell,
            focus: 0,
            editor: TextInput::new(),
            notifications: NotificationQueue::new(),
            active_dialog: ActiveDialog::None,
            should_quit: false,
            pending_writes: Vec::new(),
        };
        app.load_editor();
        app
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn form(&self) -> &dyn StepForm {
        form(self.shell.screen())
    }

    pub fn form_mut(&mut self) -> &mut dyn StepForm {
        form_mut(self.shell.screen_mut())
    }

    /// Kind of the focused field
    pub fn focused_kind(&self) -> Option<FieldKind> {
        self.form().fields().get(self.focus).map(|f| f.kind)
    }

    /// Load the focused field's text into the editor
    fn load_editor(&mut self) {
        let text = self.form().text(self.focus);
        self.editor.set_content(text);
    }

    pub fn focus_next(&mut self) {
        let count = self.form().field_count();
        if count > 0 {
            self.focus = (self.focus + 1) % count;
            self.load_editor();
        }
    }

    pub fn focus_prev(&mut self) {
        let count = self.form().field_count();
        if count > 0 {
            self.focus = (self.focus + count - 1) % count;
            self.load_editor();
        }
    }

    /// Write the editor's content back into the focused field
    pub fn commit_editor(&mut self) {
        let focus = self.focus;
        let value = self.editor.value().to_string();
        self.form_mut().set_text(focus, &value);
    }

    /// Remount the screen if the store moved and reset focus
    fn sync_screen(&mut self) {
        if self.shell.sync(&self.store, self.blobs.as_ref()) {
            self.focus = 0;
            self.load_editor();
        }
    }

    /// Next / Submit on the mounted step
    pub fn submit_step(&mut self) {
        let outcome = match self.shell.screen_mut() {
            Screen::Company(c) => Ok(c.submit(&mut self.store, &self.writer)),
            Screen::Address(c) => Ok(c.submit(&mut self.store)),
            Screen::Services(c) => c.submit(&mut self.store, self.sink.as_ref()),
        };

        match outcome {
            Ok(StepOutcome::Invalid) => {
                if let Some(index) = self.form().first_error() {
                    self.focus = index;
                    self.load_editor();
                }
                self.notifications
                    .push(Notification::warning("Please fix the highlighted fields"));
            }
            Ok(StepOutcome::Advanced { pending_write, .. }) => {
                if let Some(write) = pending_write {
                    self.pending_writes.push(write);
                }
            }
            Ok(StepOutcome::Submitted(submission)) => {
                self.active_dialog = ActiveDialog::Submitted {
                    company: submission.step1.company_name,
                };
            }
            Err(e) => {
                self.notifications
                    .push(Notification::error(format!("Submission failed: {}", e)));
            }
        }

        self.sync_screen();
    }

    /// Previous on the mounted step (no-op on the first step)
    pub fn previous_step(&mut self) {
        match self.shell.screen_mut() {
            Screen::Company(_) => return,
            Screen::Address(c) => {
                c.previous(&mut self.store);
            }
            Screen::Services(c) => {
                c.previous(&mut self.store);
            }
        }
        self.sync_screen();
    }

    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    pub fn has_dialog(&self) -> bool {
        !matches!(self.active_dialog, ActiveDialog::None)
    }

    /// Number of attachment writes not yet reaped
    pub fn pending_write_count(&self) -> usize {
        self.pending_writes.len()
    }

    /// Collect finished attachment writes and report failures
    pub fn reap_writes(&mut self) {
        let (finished, running): (Vec<_>, Vec<_>) = std::mem::take(&mut self.pending_writes)
            .into_iter()
            .partition(PendingWrite::is_finished);
        self.pending_writes = running;

        for write in finished {
            self.report_write(write);
        }
    }

    /// Wait for every outstanding attachment write
    pub fn finish_writes(&mut self) {
        for write in std::mem::take(&mut self.pending_writes) {
            debug!(key = write.key(), "waiting for attachment write");
            self.report_write(write);
        }
    }

    fn report_write(&mut self, write: PendingWrite) {
        let key = write.key().to_string();
        if let Err(e) = write.wait() {
            warn!(key = %key, error = %e, "attachment write failed");
            self.notifications
                .push(Notification::warning(format!("Logo was not saved: {}", e)));
        }
    }

    /// Periodic housekeeping
    pub fn tick(&mut self) {
        self.reap_writes();
        self.notifications.remove_expired();
    }
}
