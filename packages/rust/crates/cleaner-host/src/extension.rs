//! The cleaner commands and their activation lifecycle.

use cleaner_edit::{
    ConstructorStyle, EditError, ImportStyle, TextEdit, clean_constructor, reorder_imports,
};
use tracing::{debug, info};

use crate::error::HostError;
use crate::host::EditorHost;
use crate::registry::CommandRegistry;

/// Reorders the leading import block.
pub const IMPORT_CLEANER: &str = "extension.importCleaner";
/// Regenerates the first constructor.
pub const CONSTRUCTOR_CLEANER: &str = "extension.constructorCleaner";
/// Advertised but does nothing yet.
pub const COMPONENT_CLEANER: &str = "extension.componentCleaner";

const NO_EDITOR_IMPORTS: &str = "No file is open, can't reorder imports";
const NO_EDITOR_CONSTRUCTOR: &str = "No file is open, can't clean constructor";

/// Formatting policy shared by the registered commands.
#[derive(Debug, Clone, Default)]
pub struct Extension {
    /// Policy for [`IMPORT_CLEANER`].
    pub imports: ImportStyle,
    /// Policy for [`CONSTRUCTOR_CLEANER`].
    pub constructor: ConstructorStyle,
}

impl Extension {
    /// Create an extension with the given styles.
    #[must_use]
    pub fn new(imports: ImportStyle, constructor: ConstructorStyle) -> Self {
        Self {
            imports,
            constructor,
        }
    }

    /// Register all three commands.
    ///
    /// Either every command is registered or none is.
    ///
    /// # Errors
    /// [`HostError::DuplicateCommand`] if any id is already taken.
    pub fn activate(&self, registry: &mut CommandRegistry) -> Result<Subscriptions, HostError> {
        let mut subscriptions = Subscriptions::default();
        match self.register_all(registry, &mut subscriptions) {
            Ok(()) => {
                info!("ng-cleaner extension is now active");
                Ok(subscriptions)
            }
            Err(err) => {
                subscriptions.dispose(registry);
                Err(err)
            }
        }
    }

    fn register_all(
        &self,
        registry: &mut CommandRegistry,
        subscriptions: &mut Subscriptions,
    ) -> Result<(), HostError> {
        let imports = self.imports.clone();
        registry.register(IMPORT_CLEANER, move |host| import_cleaner(host, &imports))?;
        subscriptions.ids.push(IMPORT_CLEANER.to_string());

        let constructor = self.constructor.clone();
        registry.register(CONSTRUCTOR_CLEANER, move |host| {
            constructor_cleaner(host, &constructor)
        })?;
        subscriptions.ids.push(CONSTRUCTOR_CLEANER.to_string());

        registry.register(COMPONENT_CLEANER, component_cleaner)?;
        subscriptions.ids.push(COMPONENT_CLEANER.to_string());
        Ok(())
    }
}

/// Commands registered by one activation.
#[derive(Debug, Default)]
pub struct Subscriptions {
    ids: Vec<String>,
}

impl Subscriptions {
    /// Ids registered by the activation.
    #[must_use]
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    /// Deregister every command of the activation.
    pub fn dispose(self, registry: &mut CommandRegistry) {
        for id in &self.ids {
            registry.unregister(id);
        }
        debug!(count = self.ids.len(), "disposed subscriptions");
    }
}

/// Reorder imports in the active editor.
///
/// # Errors
/// Only host failures while applying the edit.
pub fn import_cleaner(host: &mut dyn EditorHost, style: &ImportStyle) -> Result<(), HostError> {
    run_edit(host, NO_EDITOR_IMPORTS, |text| reorder_imports(text, style))
}

/// Clean the first constructor in the active editor.
///
/// # Errors
/// Only host failures while applying the edit.
pub fn constructor_cleaner(
    host: &mut dyn EditorHost,
    style: &ConstructorStyle,
) -> Result<(), HostError> {
    run_edit(host, NO_EDITOR_CONSTRUCTOR, |text| {
        clean_constructor(text, style)
    })
}

/// Placeholder for component cleanup. Never edits.
///
/// # Errors
/// Never fails.
pub fn component_cleaner(_host: &mut dyn EditorHost) -> Result<(), HostError> {
    debug!(command = COMPONENT_CLEANER, "component cleaner is not implemented");
    Ok(())
}

/// Read the active document, compute one edit and apply it.
///
/// A missing editor or a declined transformation is shown to the user and is
/// not an error.
fn run_edit<F>(host: &mut dyn EditorHost, no_editor: &str, transform: F) -> Result<(), HostError>
where
    F: FnOnce(&str) -> Result<TextEdit, EditError>,
{
    let message = match host.active_editor() {
        None => no_editor.to_string(),
        Some(editor) => match transform(&editor.text()) {
            Ok(edit) => return editor.apply_edit(edit),
            Err(err) => err.to_string(),
        },
    };
    host.show_error_message(&message);
    Ok(())
}
