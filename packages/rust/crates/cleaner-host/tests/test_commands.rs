//! Tests for command dispatch against an in-memory host.

use cleaner_host::{
    COMPONENT_CLEANER, CONSTRUCTOR_CLEANER, CommandRegistry, Document, Extension, HostError,
    IMPORT_CLEANER, MemoryHost,
};

fn activated() -> CommandRegistry {
    let mut registry = CommandRegistry::new();
    Extension::default()
        .activate(&mut registry)
        .expect("Should activate");
    registry
}

#[test]
fn test_activation_registers_three_commands() {
    let registry = activated();
    assert_eq!(
        registry.command_ids(),
        [COMPONENT_CLEANER, CONSTRUCTOR_CLEANER, IMPORT_CLEANER]
    );
}

#[test]
fn test_dispose_deregisters() {
    let mut registry = CommandRegistry::new();
    let subscriptions = Extension::default()
        .activate(&mut registry)
        .expect("Should activate");
    assert_eq!(subscriptions.ids().len(), 3);

    subscriptions.dispose(&mut registry);
    assert!(registry.is_empty());
}

#[test]
fn test_failed_activation_rolls_back() {
    let mut registry = CommandRegistry::new();
    registry
        .register(COMPONENT_CLEANER, |_| Ok(()))
        .expect("Should register");

    let err = Extension::default()
        .activate(&mut registry)
        .expect_err("Should fail");
    assert_eq!(err, HostError::DuplicateCommand(COMPONENT_CLEANER.to_string()));
    assert_eq!(registry.command_ids(), [COMPONENT_CLEANER]);
}

#[test]
fn test_import_cleaner_applies_one_edit() {
    let registry = activated();
    let mut host = MemoryHost::with_document(Document::new(
        "import { A } from './b';\nimport { C } from './a';\nconsole.log('x');",
    ));

    registry.execute(IMPORT_CLEANER, &mut host).expect("Should run");

    let document = host.document().expect("document");
    assert_eq!(
        document.as_str(),
        "import { C } from './a';\nimport { A } from './b';\nconsole.log('x');"
    );
    assert_eq!(document.version(), 1);
    assert!(host.error_messages().is_empty());
}

#[test]
fn test_no_import_leaves_document_unchanged() {
    let registry = activated();
    let text = "const a = 1;\n";
    let mut host = MemoryHost::with_document(Document::new(text));

    registry.execute(IMPORT_CLEANER, &mut host).expect("Should run");

    let document = host.document().expect("document");
    assert_eq!(document.as_str(), text);
    assert_eq!(document.version(), 0);
    assert_eq!(host.error_messages(), ["No import found, can't reorder"]);
}

#[test]
fn test_no_constructor_leaves_document_unchanged() {
    let registry = activated();
    let text = "export class Empty {}\n";
    let mut host = MemoryHost::with_document(Document::new(text));

    registry
        .execute(CONSTRUCTOR_CLEANER, &mut host)
        .expect("Should run");

    assert_eq!(host.document().expect("document").as_str(), text);
    assert_eq!(host.error_messages(), ["No constructor found, can't clean"]);
}

#[test]
fn test_no_active_editor() {
    let registry = activated();
    let mut host = MemoryHost::new();

    registry.execute(IMPORT_CLEANER, &mut host).expect("Should run");
    registry
        .execute(CONSTRUCTOR_CLEANER, &mut host)
        .expect("Should run");

    assert_eq!(
        host.error_messages(),
        [
            "No file is open, can't reorder imports",
            "No file is open, can't clean constructor",
        ]
    );
}

#[test]
fn test_constructor_cleaner_rewrites_in_place() {
    let registry = activated();
    let mut host = MemoryHost::with_document(Document::new(
        "class A {\n  constructor(private a: A) {\n  }\n}\n",
    ));

    registry
        .execute(CONSTRUCTOR_CLEANER, &mut host)
        .expect("Should run");

    assert_eq!(
        host.document().expect("document").as_str(),
        "class A {\n  constructor(private a: A) {\n    this.a = a;\n  }\n}\n"
    );
}

#[test]
fn test_component_cleaner_is_a_no_op() {
    let registry = activated();
    let text = "constructor() {}\n";
    let mut host = MemoryHost::with_document(Document::new(text));

    registry
        .execute(COMPONENT_CLEANER, &mut host)
        .expect("Should run");

    let document = host.document().expect("document");
    assert_eq!(document.as_str(), text);
    assert_eq!(document.version(), 0);
    assert!(host.error_messages().is_empty());
}
