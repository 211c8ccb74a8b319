//! Fixed-width row layout.
//!
//! A row occupies exactly [`ROW_SIZE`] bytes:
//!
//! | field    | offset            | width            |
//! |----------|-------------------|------------------|
//! | id       | [`ID_OFFSET`]       | [`ID_SIZE`] (u32 LE) |
//! | username | [`USERNAME_OFFSET`] | [`USERNAME_SIZE`]    |
//! | email    | [`EMAIL_OFFSET`]    | [`EMAIL_SIZE`]       |
//!
//! Text shorter than its column is zero-filled.

use std::fmt;

use byteorder::{ByteOrder, LittleEndian};

use crate::error::TextError;
use crate::{EMAIL_OFFSET, EMAIL_SIZE, ID_OFFSET, ROW_SIZE, USERNAME_OFFSET, USERNAME_SIZE};

/// Owned text of at most `MAX` bytes with no NUL byte, so it always fits its
/// column and survives the zero fill.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct BoundedText<const MAX: usize>(String);

pub type Username = BoundedText<USERNAME_SIZE>;
pub type Email = BoundedText<EMAIL_SIZE>;

impl<const MAX: usize> BoundedText<MAX> {
    pub fn new(text: impl Into<String>) -> Result<Self, TextError> {
        let text = text.into();
        if text.len() > MAX {
            return Err(TextError::TooLong {
                max: MAX,
                len: text.len(),
            });
        }
        if text.as_bytes().contains(&0) {
            return Err(TextError::EmbeddedNul);
        }
        Ok(Self(text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn write_to(&self, field: &mut [u8]) {
        let bytes = self.0.as_bytes();
        field[..bytes.len()].copy_from_slice(bytes);
        field[bytes.len()..].fill(0);
    }

    fn read_from(field: &[u8]) -> Self {
        let end = field.iter().rposition(|&b| b != 0).map_or(0, |i| i + 1);
        // Slots written by `write_to` are always valid UTF-8; anything else
        // keeps only its leading valid run.
        let text = field[..end]
            .utf8_chunks()
            .next()
            .map_or("", |chunk| chunk.valid());
        Self(text.to_owned())
    }
}

impl<const MAX: usize> fmt::Display for BoundedText<MAX> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    pub id: u32,
    pub username: Username,
    pub email: Email,
}

impl Row {
    pub fn new(id: u32, username: &str, email: &str) -> Result<Self, TextError> {
        Ok(Self {
            id,
            username: Username::new(username)?,
            email: Email::new(email)?,
        })
    }

    /// Writes the row into `slot`, which must be exactly [`ROW_SIZE`] bytes.
    pub fn serialize(&self, slot: &mut [u8]) {
        debug_assert_eq!(slot.len(), ROW_SIZE);
        LittleEndian::write_u32(&mut slot[ID_OFFSET..USERNAME_OFFSET], self.id);
        self.username.write_to(&mut slot[USERNAME_OFFSET..EMAIL_OFFSET]);
        self.email.write_to(&mut slot[EMAIL_OFFSET..EMAIL_OFFSET + EMAIL_SIZE]);
    }

    pub fn deserialize(slot: &[u8]) -> Self {
        debug_assert_eq!(slot.len(), ROW_SIZE);
        Self {
            id: LittleEndian::read_u32(&slot[ID_OFFSET..USERNAME_OFFSET]),
            username: Username::read_from(&slot[USERNAME_OFFSET..EMAIL_OFFSET]),
            email: Email::read_from(&slot[EMAIL_OFFSET..EMAIL_OFFSET + EMAIL_SIZE]),
        }
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.id, self.username, self.email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roundtrip(row: &Row) -> Row {
        let mut slot = [0xAAu8; ROW_SIZE];
        row.serialize(&mut slot);
        Row::deserialize(&slot)
    }

    #[test]
    fn layout_matches_declared_widths() {
        assert_eq!(ROW_SIZE, 291);
        assert_eq!(USERNAME_OFFSET, 4);
        assert_eq!(EMAIL_OFFSET, 36);
    }

    #[test]
    fn it_round_trips_short_text_without_padding() {
        let row = Row::new(7, "bob", "bob@example.com").unwrap();
        let decoded = roundtrip(&row);
        assert_eq!(decoded, row);
        assert_eq!(decoded.username.as_str(), "bob");
    }

    #[test]
    fn it_round_trips_maximum_length_text() {
        let username = "u".repeat(USERNAME_SIZE);
        let email = "e".repeat(EMAIL_SIZE);
        let row = Row::new(u32::MAX, &username, &email).unwrap();
        assert_eq!(roundtrip(&row), row);
    }

    #[test]
    fn it_round_trips_empty_and_multibyte_text() {
        let row = Row::new(0, "", "żółw@example.com").unwrap();
        assert_eq!(roundtrip(&row), row);
    }

    #[test]
    fn it_writes_fields_at_fixed_offsets() {
        let row = Row::new(0x0102_0304, "ab", "c").unwrap();
        let mut slot = [0xFFu8; ROW_SIZE];
        row.serialize(&mut slot);

        assert_eq!(&slot[0..4], &[0x04, 0x03, 0x02, 0x01]);
        assert_eq!(&slot[4..6], b"ab");
        assert!(slot[6..36].iter().all(|&b| b == 0));
        assert_eq!(slot[36], b'c');
        assert!(slot[37..].iter().all(|&b| b == 0));
    }

    #[test]
    fn it_rejects_text_over_the_column_width() {
        let err = Username::new("a".repeat(USERNAME_SIZE + 1)).unwrap_err();
        assert_eq!(
            err,
            TextError::TooLong {
                max: USERNAME_SIZE,
                len: USERNAME_SIZE + 1
            }
        );
        assert!(Email::new("a".repeat(EMAIL_SIZE)).is_ok());
    }

    #[test]
    fn it_rejects_embedded_nul() {
        assert_eq!(Username::new("a\0b"), Err(TextError::EmbeddedNul));
    }

    #[test]
    fn zeroed_slot_decodes_to_default_row() {
        assert_eq!(Row::deserialize(&[0u8; ROW_SIZE]), Row::default());
    }

    #[test]
    fn it_displays_as_tuple() {
        let row = Row::new(1, "user1", "person1@example.com").unwrap();
        assert_eq!(row.to_string(), "(1, user1, person1@example.com)");
    }
}
