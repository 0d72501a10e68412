//! Edit application and cursor remapping.
//!
//! This is where a raw edit on the display text becomes a new logical value,
//! a new display text and a new cursor. Separators are synthetic: an edit is
//! first translated into logical terms (how many digits precede the edit
//! point), applied to the digit sequence, and the result is re-rendered. The
//! cursor is then mapped back into the new display text.
//!
//! Separator handling:
//!
//! - typing a digit on a separator inserts it at that logical position;
//! - typing the separator glyph right in front of an existing separator
//!   steps over it, any other separator or non-digit input is ignored;
//! - backspace right after a separator deletes the digit before the
//!   separator, forward delete right before one deletes the digit after it.
//!
//! [`apply_edit`] is total: out-of-range offsets are clamped, digits that do
//! not fit are dropped and inapplicable input is ignored.

use std::fmt;

use crate::digits::{digits_before, extract_digits, LogicalValue};
use crate::edit::{DisplayState, Edit};
use crate::format::{display_offset, format_groups};

/// The rules of one kind of field: grouping, length limit and admission of
/// typed digits.
pub trait FieldFormat {
    /// What listeners receive when the field's content changes.
    type Value: Clone + PartialEq + fmt::Debug;

    /// Separator glyph inserted between groups.
    fn separator(&self) -> char;

    /// Group lengths used to render `digits`.
    fn grouping(&self, digits: &LogicalValue) -> &'static [usize];

    /// Most digits the field holds once its content is `digits`.
    fn max_length(&self, digits: &LogicalValue) -> usize;

    /// Returns how many leading digits of `inserted` to keep when it is
    /// inserted into `current` at logical offset `at`.
    ///
    /// The default keeps as many digits as fit under the maximum length of
    /// the value the insertion would produce.
    fn admit(&self, current: &LogicalValue, at: usize, inserted: &str) -> usize {
        let merged = current.spliced(at, inserted);
        let room = self.max_length(&merged).saturating_sub(current.len());
        inserted.len().min(room)
    }

    /// The value reported to listeners for `digits`.
    fn value(&self, digits: &LogicalValue) -> Self::Value;
}

/// Result of applying one edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditOutcome<V> {
    /// New display text and cursor.
    pub state: DisplayState,
    /// New logical value.
    pub digits: LogicalValue,
    /// New listener value (number and brand, or date).
    pub value: V,
}

/// Cursor position in logical terms.
#[derive(Debug, Clone, Copy)]
struct LogicalCursor {
    /// Digits before the cursor.
    offset: usize,
    /// Keep the cursor behind a separator that sits exactly at `offset`.
    after_separator: bool,
}

impl LogicalCursor {
    fn before(offset: usize) -> Self {
        Self {
            offset,
            after_separator: false,
        }
    }
}

#[derive(Debug)]
enum Step {
    /// The digit sequence changed.
    Changed {
        digits: LogicalValue,
        cursor: LogicalCursor,
    },
    /// The digit sequence is untouched; the cursor goes to this display offset.
    Unchanged { cursor: usize },
}

/// Applies `edit` to `previous` under the rules of `format`.
///
/// # Example
///
/// ```
/// use cc_input::cursor::apply_edit;
/// use cc_input::edit::{DisplayState, Edit};
/// use cc_input::number::NumberFormat;
///
/// let format = NumberFormat::new();
/// let before = DisplayState::new("4242", 4);
/// let after = apply_edit(&format, &before, &Edit::insert(4, '1'));
/// assert_eq!(after.state.text(), "4242 1");
/// assert_eq!(after.state.cursor(), 6);
/// ```
pub fn apply_edit<F>(format: &F, previous: &DisplayState, edit: &Edit) -> EditOutcome<F::Value>
where
    F: FieldFormat + ?Sized,
{
    let text = previous.text();
    let len = previous.len();
    let old = extract_digits(text);

    let step = match edit {
        Edit::Insert { offset, ch } => insert_char(format, text, &old, (*offset).min(len), *ch),
        Edit::DeleteBackward { offset } => delete_backward(text, &old, (*offset).min(len)),
        Edit::DeleteForward { offset } => delete_forward(text, &old, (*offset).min(len)),
        Edit::Paste {
            start,
            end,
            text: pasted,
        } => {
            let (start, end) = if start <= end {
                (*start, *end)
            } else {
                (*end, *start)
            };
            replace_range(format, text, &old, start.min(len), end.min(len), pasted)
        }
        Edit::ReplaceAll { text: pasted } => replace_range(format, text, &old, 0, len, pasted),
    };

    let outcome = finish(format, previous, old, step);
    tracing::trace!(
        kind = edit.kind(),
        digits = outcome.digits.len(),
        text_len = outcome.state.len(),
        cursor = outcome.state.cursor(),
        "edit applied"
    );
    outcome
}

/// Renders `digits` the way `format` displays them.
pub fn render<F>(format: &F, digits: &LogicalValue) -> String
where
    F: FieldFormat + ?Sized,
{
    format_groups(digits.as_str(), format.grouping(digits), format.separator())
}

fn insert_char<F>(format: &F, text: &str, old: &LogicalValue, offset: usize, ch: char) -> Step
where
    F: FieldFormat + ?Sized,
{
    if ch.is_ascii_digit() {
        let at = digits_before(text, offset);
        let mut buf = [0u8; 4];
        let inserted: &str = ch.encode_utf8(&mut buf);
        let keep = format.admit(old, at, inserted);
        if keep == 0 {
            tracing::trace!(at, "digit rejected");
            return Step::Unchanged { cursor: offset };
        }
        return Step::Changed {
            digits: old.spliced(at, inserted),
            cursor: LogicalCursor::before(at + 1),
        };
    }

    if ch == format.separator() && text.chars().nth(offset) == Some(ch) {
        tracing::trace!(offset, "separator typed over existing separator");
        return Step::Unchanged { cursor: offset + 1 };
    }

    Step::Unchanged { cursor: offset }
}

fn delete_backward(text: &str, old: &LogicalValue, offset: usize) -> Step {
    let at = digits_before(text, offset);
    let previous_char = offset.checked_sub(1).and_then(|i| text.chars().nth(i));

    match previous_char {
        None => Step::Unchanged { cursor: offset },
        Some(_) if at == 0 => Step::Unchanged { cursor: offset },
        Some(c) => {
            if !c.is_ascii_digit() {
                // The separator only exists because of the digit before it.
                tracing::trace!(offset, "backspace over separator");
            }
            let mut digits = old.clone();
            digits.remove(at - 1);
            Step::Changed {
                digits,
                cursor: LogicalCursor::before(at - 1),
            }
        }
    }
}

fn delete_forward(text: &str, old: &LogicalValue, offset: usize) -> Step {
    let at = digits_before(text, offset);
    let next_char = text.chars().nth(offset);

    match next_char {
        None => Step::Unchanged { cursor: offset },
        Some(_) if at >= old.len() => Step::Unchanged { cursor: offset },
        Some(c) => {
            if !c.is_ascii_digit() {
                tracing::trace!(offset, "forward delete over separator");
            }
            let after_separator = offset
                .checked_sub(1)
                .and_then(|i| text.chars().nth(i))
                .is_some_and(|c| !c.is_ascii_digit());
            let mut digits = old.clone();
            digits.remove(at);
            Step::Changed {
                digits,
                cursor: LogicalCursor {
                    offset: at,
                    after_separator,
                },
            }
        }
    }
}

fn replace_range<F>(
    format: &F,
    text: &str,
    old: &LogicalValue,
    start: usize,
    end: usize,
    pasted: &str,
) -> Step
where
    F: FieldFormat + ?Sized,
{
    let from = digits_before(text, start);
    let to = digits_before(text, end);

    let mut remaining = old.clone();
    remaining.remove_range(from, to);

    let inserted = extract_digits(pasted);
    let keep = format.admit(&remaining, from, inserted.as_str());
    if keep < inserted.len() {
        tracing::trace!(
            pasted = inserted.len(),
            kept = keep,
            "pasted digits truncated"
        );
    }

    if keep == 0 && from == to {
        return Step::Unchanged { cursor: start };
    }

    Step::Changed {
        digits: remaining.spliced(from, &inserted.as_str()[..keep]),
        cursor: LogicalCursor::before(from + keep),
    }
}

fn finish<F>(
    format: &F,
    previous: &DisplayState,
    old: LogicalValue,
    step: Step,
) -> EditOutcome<F::Value>
where
    F: FieldFormat + ?Sized,
{
    match step {
        Step::Changed { mut digits, cursor } => {
            let max = format.max_length(&digits);
            digits.truncate(max);

            let grouping = format.grouping(&digits);
            let logical = cursor.offset.min(digits.len());
            let mut position = display_offset(grouping, logical);
            if cursor.after_separator
                && logical < digits.len()
                && display_offset(grouping, logical + 1) == position + 2
            {
                position += 1;
            }

            let text = format_groups(digits.as_str(), grouping, format.separator());
            let value = format.value(&digits);
            EditOutcome {
                state: DisplayState::new(text, position),
                digits,
                value,
            }
        }
        Step::Unchanged { cursor } => {
            let mut digits = old;
            let max = format.max_length(&digits);
            digits.truncate(max);

            let text = render(format, &digits);
            let state = if text == previous.text() {
                previous.with_cursor(cursor)
            } else {
                // The host handed over text that is not in canonical form.
                let logical = digits_before(previous.text(), cursor).min(digits.len());
                let position = display_offset(format.grouping(&digits), logical);
                DisplayState::new(text, position)
            };
            let value = format.value(&digits);
            EditOutcome {
                state,
                digits,
                value,
            }
        }
    }
}
