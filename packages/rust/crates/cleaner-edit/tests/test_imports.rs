//! Tests for the import reorderer.

use cleaner_edit::{EditError, ImportStyle, Range, reorder_imports};

fn run(text: &str) -> String {
    let edit = reorder_imports(text, &ImportStyle::default()).expect("Should reorder");
    edit.apply_to(text)
}

#[test]
fn test_end_to_end_reorders_and_keeps_code() {
    let text = "import { A } from './b';\nimport { C } from './a';\nconsole.log('x');";
    let out = run(text);

    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[0], "import { C } from './a';");
    assert_eq!(lines[1], "import { A } from './b';");
    assert_eq!(lines[2], "console.log('x');");
}

#[test]
fn test_sorts_by_from_value() {
    let text = "import { B } from './b';\nimport { A } from './a';\nimport { C } from './c';";
    let out = run(text);

    let a = out.find("'./a'").expect("a");
    let b = out.find("'./b'").expect("b");
    let c = out.find("'./c'").expect("c");
    assert!(a < b && b < c);
}

#[test]
fn test_region_ends_at_last_import() {
    let import_b = "import { B } from './b';";
    let text = format!("import {{ A }} from './a';\n\n{import_b}\ncodeLine();");
    let edit = reorder_imports(&text, &ImportStyle::default()).expect("Should reorder");

    assert_eq!(edit.range, Range::lines(0, 2, import_b.len()));
    assert!(edit.apply_to(&text).ends_with("\ncodeLine();"));
}

#[test]
fn test_no_import_found() {
    let text = "const a = 1;\nexport default a;";
    assert_eq!(
        reorder_imports(text, &ImportStyle::default()),
        Err(EditError::NoImportFound)
    );
}

#[test]
fn test_angular_component_header() {
    let text = "\
import { Component, OnInit } from '@angular/core';
import {Observable} from \"rxjs\";
// services
import { UserService }   from './user.service';
import * as lodash from 'lodash';

@Component({ selector: 'app-root' })
export class AppComponent {}";

    let expected = "\
// services

import { Component, OnInit } from '@angular/core';

import * as lodash           from 'lodash';
import { Observable }        from 'rxjs';

import { UserService }       from './user.service';

@Component({ selector: 'app-root' })
export class AppComponent {}";

    assert_eq!(run(text), expected);
}

#[test]
fn test_second_run_is_stable() {
    let text = "\
import * as vscode from 'vscode';
import { ConstructorHelper } from './helpers/constructor.helper';
import { ImportHelper } from './helpers/import.helper';
import { Injectable } from '@angular/core';

export function activate() {}";

    let once = run(text);
    let twice = run(&once);
    assert_eq!(once, twice);

    let with_default = "import VeryLongDefaultName from './z';\nimport { A } from './a';\nrun();";
    let once = run(with_default);
    assert_eq!(
        once,
        "import { A } from './a';\nimport VeryLongDefaultName from './z';\nrun();"
    );
    assert_eq!(run(&once), once);
}

#[test]
fn test_without_alignment_or_separators() {
    let style = ImportStyle {
        align_from: false,
        separate_groups: false,
        semicolons: false,
        ..ImportStyle::default()
    };
    let text = "import { LongName } from './z';\nimport { A } from 'pkg';";
    let edit = reorder_imports(text, &style).expect("Should reorder");

    assert_eq!(
        edit.new_text,
        "import { A } from 'pkg'\nimport { LongName } from './z'"
    );
}

#[test]
fn test_crlf_region_is_normalized() {
    let text = "import { B } from './b';\r\nimport { A } from './a';\r\nrest();\r\n";
    let out = run(text);
    assert_eq!(out, "import { A } from './a';\nimport { B } from './b';\nrest();\r\n");
}
