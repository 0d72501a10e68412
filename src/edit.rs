//! Edit descriptors and display snapshots exchanged with the host widget.
//!
//! The host forwards what the user did as an [`Edit`] (with char offsets
//! into the current display text) and reads back a [`DisplayState`]. A
//! [`Keystroke`] is the cursor-relative form of the same events, as a text
//! widget receives them; [`crate::field::Field::press`] turns keystrokes into
//! edits.

use std::fmt;
use std::str::FromStr;
use zeroize::Zeroize;

use crate::error::KeystrokeParseError;
use crate::mask::{mask_display, mask_string};

/// Display text of a field together with its cursor.
///
/// The cursor is a char offset in `0..=text.chars().count()`.
#[derive(Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DisplayState {
    text: String,
    cursor: usize,
}

impl DisplayState {
    /// Creates a state, clamping `cursor` to the end of `text`.
    pub fn new(text: impl Into<String>, cursor: usize) -> Self {
        let text = text.into();
        let cursor = cursor.min(text.chars().count());
        Self { text, cursor }
    }

    /// Creates an empty state with the cursor at 0.
    #[inline]
    pub const fn empty() -> Self {
        Self {
            text: String::new(),
            cursor: 0,
        }
    }

    /// Returns the display text.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the cursor offset in chars.
    #[inline]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Returns the length of the display text in chars.
    #[inline]
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    /// Returns true if the display text is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Returns the same text with the cursor moved (and clamped) to `cursor`.
    pub fn with_cursor(&self, cursor: usize) -> Self {
        Self::new(self.text.clone(), cursor)
    }
}

impl fmt::Debug for DisplayState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DisplayState")
            .field("text", &mask_display(&self.text))
            .field("cursor", &self.cursor)
            .finish()
    }
}

impl Drop for DisplayState {
    fn drop(&mut self) {
        self.text.zeroize();
    }
}

/// A single edit applied to a field's display text.
///
/// Offsets are char offsets into the display text the edit was made on.
/// Out-of-range offsets are clamped, never rejected.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum Edit {
    /// One character typed at `offset`.
    Insert {
        /// Cursor offset the character was typed at.
        offset: usize,
        /// The typed character.
        ch: char,
    },

    /// Backspace with the cursor at `offset`.
    DeleteBackward {
        /// Cursor offset when the key was pressed.
        offset: usize,
    },

    /// Forward delete with the cursor at `offset`.
    DeleteForward {
        /// Cursor offset when the key was pressed.
        offset: usize,
    },

    /// Text pasted over the selection `start..end` (`start == end` for a
    /// plain cursor).
    Paste {
        /// Selection start.
        start: usize,
        /// Selection end.
        end: usize,
        /// The pasted text, digits and anything else.
        text: String,
    },

    /// The whole field content replaced, as by a programmatic `set_text`.
    ReplaceAll {
        /// The new raw text.
        text: String,
    },
}

impl Edit {
    /// A character typed at `offset`.
    #[inline]
    pub fn insert(offset: usize, ch: char) -> Self {
        Self::Insert { offset, ch }
    }

    /// Backspace at `offset`.
    #[inline]
    pub fn delete_backward(offset: usize) -> Self {
        Self::DeleteBackward { offset }
    }

    /// Forward delete at `offset`.
    #[inline]
    pub fn delete_forward(offset: usize) -> Self {
        Self::DeleteForward { offset }
    }

    /// `text` pasted at the cursor `offset`.
    #[inline]
    pub fn paste(offset: usize, text: impl Into<String>) -> Self {
        Self::Paste {
            start: offset,
            end: offset,
            text: text.into(),
        }
    }

    /// `text` pasted over the selection `start..end`.
    #[inline]
    pub fn paste_over(start: usize, end: usize, text: impl Into<String>) -> Self {
        Self::Paste {
            start,
            end,
            text: text.into(),
        }
    }

    /// The whole content replaced by `text`.
    #[inline]
    pub fn replace_all(text: impl Into<String>) -> Self {
        Self::ReplaceAll { text: text.into() }
    }

    /// Short name of the edit kind, for logs.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Insert { .. } => "insert",
            Self::DeleteBackward { .. } => "delete_backward",
            Self::DeleteForward { .. } => "delete_forward",
            Self::Paste { .. } => "paste",
            Self::ReplaceAll { .. } => "replace_all",
        }
    }
}

impl fmt::Debug for Edit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Insert { offset, ch } => {
                let shown = if ch.is_ascii_digit() { '*' } else { *ch };
                f.debug_struct("Insert")
                    .field("offset", offset)
                    .field("ch", &shown)
                    .finish()
            }
            Self::DeleteBackward { offset } => f
                .debug_struct("DeleteBackward")
                .field("offset", offset)
                .finish(),
            Self::DeleteForward { offset } => f
                .debug_struct("DeleteForward")
                .field("offset", offset)
                .finish(),
            Self::Paste { start, end, text } => f
                .debug_struct("Paste")
                .field("start", start)
                .field("end", end)
                .field("text", &mask_string(text))
                .finish(),
            Self::ReplaceAll { text } => f
                .debug_struct("ReplaceAll")
                .field("text", &mask_string(text))
                .finish(),
        }
    }
}

/// A key event as a text widget receives it, relative to the current cursor.
///
/// Parsed from a compact textual form, one keystroke per token:
///
/// | Text | Keystroke |
/// |------|-----------|
/// | `type:4242` | [`Text`](Keystroke::Text) - each char typed in turn |
/// | `key:3` | [`Char`](Keystroke::Char) |
/// | `bs`, `backspace` | [`Backspace`](Keystroke::Backspace) |
/// | `del`, `delete` | [`Delete`](Keystroke::Delete) |
/// | `left`, `right`, `home`, `end` | cursor movement |
/// | `paste:...` | [`Paste`](Keystroke::Paste) at the cursor |
/// | `set:...` | [`SetText`](Keystroke::SetText) |
/// | `cursor:N` | [`Cursor`](Keystroke::Cursor) |
///
/// # Example
///
/// ```
/// use cc_input::edit::Keystroke;
///
/// assert_eq!("key:3".parse(), Ok(Keystroke::Char('3')));
/// assert_eq!("bs".parse(), Ok(Keystroke::Backspace));
/// assert_eq!("cursor:10".parse(), Ok(Keystroke::Cursor(10)));
/// assert!("tab".parse::<Keystroke>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Keystroke {
    /// One character typed at the cursor.
    Char(char),
    /// Several characters typed one after another.
    Text(String),
    /// Backspace.
    Backspace,
    /// Forward delete.
    Delete,
    /// Cursor one char to the left.
    Left,
    /// Cursor one char to the right.
    Right,
    /// Cursor to the start of the text.
    Home,
    /// Cursor to the end of the text.
    End,
    /// Clipboard text pasted at the cursor.
    Paste(String),
    /// Whole content replaced.
    SetText(String),
    /// Cursor placed at a char offset.
    Cursor(usize),
}

impl FromStr for Keystroke {
    type Err = KeystrokeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(KeystrokeParseError::Empty);
        }

        let (name, arg) = match s.split_once(':') {
            Some((name, arg)) => (name, Some(arg)),
            None => (s, None),
        };

        match (name, arg) {
            ("bs" | "backspace", None) => Ok(Self::Backspace),
            ("del" | "delete", None) => Ok(Self::Delete),
            ("left", None) => Ok(Self::Left),
            ("right", None) => Ok(Self::Right),
            ("home", None) => Ok(Self::Home),
            ("end", None) => Ok(Self::End),
            ("type", Some(text)) => Ok(Self::Text(text.to_string())),
            ("paste", Some(text)) => Ok(Self::Paste(text.to_string())),
            ("set", Some(text)) => Ok(Self::SetText(text.to_string())),
            ("key", Some(arg)) => {
                let mut chars = arg.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Ok(Self::Char(c)),
                    _ => Err(KeystrokeParseError::NotOneChar(arg.to_string())),
                }
            }
            ("cursor", Some(arg)) => arg
                .trim()
                .parse()
                .map(Self::Cursor)
                .map_err(|_| KeystrokeParseError::InvalidOffset(arg.to_string())),
            ("type", None) => Err(KeystrokeParseError::MissingArgument { key: "type" }),
            ("paste", None) => Err(KeystrokeParseError::MissingArgument { key: "paste" }),
            ("set", None) => Err(KeystrokeParseError::MissingArgument { key: "set" }),
            ("key", None) => Err(KeystrokeParseError::MissingArgument { key: "key" }),
            ("cursor", None) => Err(KeystrokeParseError::MissingArgument { key: "cursor" }),
            _ => Err(KeystrokeParseError::UnknownKey(s.to_string())),
        }
    }
}
