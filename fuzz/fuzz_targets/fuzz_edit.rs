//! Fuzz target for edit application.
//!
//! Drives both fields through arbitrary edit sequences and checks that the
//! display text and cursor stay consistent after every step.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use cc_input::{apply_edit, extract_digits, DateFormat, DisplayState, Edit, FieldFormat, NumberFormat};

#[derive(Debug, Arbitrary)]
enum FuzzEdit {
    Insert { offset: u8, ch: char },
    DeleteBackward { offset: u8 },
    DeleteForward { offset: u8 },
    Paste { start: u8, end: u8, text: String },
    ReplaceAll { text: String },
}

impl From<FuzzEdit> for Edit {
    fn from(edit: FuzzEdit) -> Self {
        match edit {
            FuzzEdit::Insert { offset, ch } => Edit::insert(offset.into(), ch),
            FuzzEdit::DeleteBackward { offset } => Edit::delete_backward(offset.into()),
            FuzzEdit::DeleteForward { offset } => Edit::delete_forward(offset.into()),
            FuzzEdit::Paste { start, end, text } => Edit::paste_over(start.into(), end.into(), text),
            FuzzEdit::ReplaceAll { text } => Edit::replace_all(text),
        }
    }
}

fn run<F: FieldFormat>(format: &F, edits: &[Edit]) {
    let mut state = DisplayState::empty();
    for edit in edits {
        let outcome = apply_edit(format, &state, edit);
        assert!(outcome.state.cursor() <= outcome.state.len());
        assert!(outcome.digits.len() <= format.max_length(&outcome.digits));
        assert_eq!(extract_digits(outcome.state.text()), outcome.digits);
        state = outcome.state;
    }
}

fuzz_target!(|edits: Vec<FuzzEdit>| {
    let edits: Vec<Edit> = edits.into_iter().map(Edit::from).collect();
    run(&NumberFormat::new(), &edits);
    run(&DateFormat::new(), &edits);
});
