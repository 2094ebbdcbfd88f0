//! The editor runtime seen by commands.

use crate::document::{Document, TextEditor};

/// Services a hosting editor provides to commands.
pub trait EditorHost {
    /// The focused editor, if a document is open.
    fn active_editor(&mut self) -> Option<&mut dyn TextEditor>;

    /// Surface an error to the user.
    fn show_error_message(&mut self, message: &str);
}

/// Host backed by at most one in-memory document.
///
/// Error messages are recorded instead of displayed.
#[derive(Debug, Default)]
pub struct MemoryHost {
    document: Option<Document>,
    errors: Vec<String>,
}

impl MemoryHost {
    /// A host with no open document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A host with `document` open in the active editor.
    #[must_use]
    pub fn with_document(document: Document) -> Self {
        Self {
            document: Some(document),
            errors: Vec::new(),
        }
    }

    /// The open document.
    #[must_use]
    pub fn document(&self) -> Option<&Document> {
        self.document.as_ref()
    }

    /// Close the editor, returning its document.
    pub fn take_document(&mut self) -> Option<Document> {
        self.document.take()
    }

    /// Messages shown so far, oldest first.
    #[must_use]
    pub fn error_messages(&self) -> &[String] {
        &self.errors
    }
}

impl EditorHost for MemoryHost {
    fn active_editor(&mut self) -> Option<&mut dyn TextEditor> {
        self.document
            .as_mut()
            .map(|document| document as &mut dyn TextEditor)
    }

    fn show_error_message(&mut self, message: &str) {
        tracing::debug!(error = message, "command reported an error");
        self.errors.push(message.to_string());
    }
}
