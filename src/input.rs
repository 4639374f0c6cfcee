//! Key input parser
//!
//! Turns raw terminal bytes into key events for keyboard-driven
//! navigation. Handles:
//! - Regular characters (UTF-8)
//! - Arrow keys and other CSI / SS3 escape sequences
//! - Enter, Tab, Backspace, and a lone Escape

/// A parsed input event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// A regular character
    Char(char),

    /// A key press
    Key(Key),

    /// A character typed with Alt held (ESC prefix)
    Alt(char),
}

/// Special keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    Insert,
    Delete,
    Escape,
    Enter,
    Tab,
    Backspace,
    F1, F2, F3, F4, F5, F6, F7, F8, F9, F10, F11, F12,
}

/// Input parser state machine
pub struct InputParser {
    /// Buffer for incomplete escape sequences
    buffer: Vec<u8>,
}

impl InputParser {
    pub fn new() -> Self {
        Self {
            buffer: Vec::with_capacity(32),
        }
    }

    /// Parse input bytes into events.
    ///
    /// Incomplete sequences stay buffered until the next call.
    pub fn parse(&mut self, data: &[u8]) -> Vec<InputEvent> {
        let mut events = Vec::new();
        self.buffer.extend_from_slice(data);

        while !self.buffer.is_empty() {
            match self.try_parse_one() {
                ParseResult::Event(event) => {
                    events.push(event);
                }
                ParseResult::Incomplete => {
                    // Need more data
                    break;
                }
                ParseResult::Invalid(skip) => {
                    self.buffer.drain(0..skip.min(self.buffer.len()));
                }
            }
        }

        events
    }

    /// True when the buffer holds a lone ESC that may still start a sequence
    pub fn has_pending_escape(&self) -> bool {
        self.buffer == [0x1b]
    }

    /// Resolve a buffered ESC that no sequence followed.
    ///
    /// Only call this once no further input arrived within a short
    /// timeout: the rest of an escape sequence may come in a later read.
    pub fn take_pending_escape(&mut self) -> Option<InputEvent> {
        if self.has_pending_escape() {
            self.buffer.clear();
            Some(InputEvent::Key(Key::Escape))
        } else {
            None
        }
    }

    /// Try to parse one event from the buffer
    fn try_parse_one(&mut self) -> ParseResult {
        if self.buffer.is_empty() {
            return ParseResult::Incomplete;
        }

        let first = self.buffer[0];

        // Escape sequence
        if first == 0x1b {
            return self.parse_escape();
        }

        // Control characters (< 32) and DEL (0x7f)
        if first < 32 || first == 0x7f {
            let event = match first {
                0x0d | 0x0a => InputEvent::Key(Key::Enter),
                0x09 => InputEvent::Key(Key::Tab),
                0x7f | 0x08 => InputEvent::Key(Key::Backspace),
                _ => InputEvent::Char(first as char), // Ctrl+letter
            };
            self.buffer.remove(0);
            return ParseResult::Event(event);
        }

        // Regular character (handle UTF-8)
        match self.decode_utf8() {
            Utf8::Char(ch, len) => {
                self.buffer.drain(0..len);
                ParseResult::Event(InputEvent::Char(ch))
            }
            Utf8::Incomplete => ParseResult::Incomplete,
            Utf8::Invalid => ParseResult::Invalid(1),
        }
    }

    /// Parse an escape sequence
    fn parse_escape(&mut self) -> ParseResult {
        if self.buffer.len() < 2 {
            return ParseResult::Incomplete;
        }

        match self.buffer[1] {
            // CSI sequence: ESC [
            b'[' => self.parse_csi(),
            // SS3 sequence: ESC O (arrows in application mode, F1-F4)
            b'O' => self.parse_ss3(),
            // ESC ESC: the first one was a lone Escape
            0x1b => {
                self.buffer.remove(0);
                ParseResult::Event(InputEvent::Key(Key::Escape))
            }
            // Alt+key
            c if c >= 32 && c < 0x7f => {
                self.buffer.drain(0..2);
                ParseResult::Event(InputEvent::Alt(c as char))
            }
            _ => ParseResult::Invalid(1),
        }
    }

    /// Parse CSI (Control Sequence Introducer) sequence: ESC [
    fn parse_csi(&mut self) -> ParseResult {
        if self.buffer.len() < 3 {
            return ParseResult::Incomplete;
        }

        // Find the end of the sequence (a letter)
        let end = self.buffer[2..].iter().position(|&b| b.is_ascii_alphabetic() || b == b'~');

        match end {
            None => ParseResult::Incomplete,
            Some(pos) => {
                let end_idx = 2 + pos;
                let final_byte = self.buffer[end_idx];
                let event = decode_csi(&self.buffer[2..end_idx], final_byte);
                self.buffer.drain(0..=end_idx);

                event.map(ParseResult::Event).unwrap_or(ParseResult::Invalid(0))
            }
        }
    }

    /// Parse SS3 sequence: ESC O
    fn parse_ss3(&mut self) -> ParseResult {
        if self.buffer.len() < 3 {
            return ParseResult::Incomplete;
        }

        let key = match self.buffer[2] {
            b'P' => Some(Key::F1),
            b'Q' => Some(Key::F2),
            b'R' => Some(Key::F3),
            b'S' => Some(Key::F4),
            b'A' => Some(Key::Up),
            b'B' => Some(Key::Down),
            b'C' => Some(Key::Right),
            b'D' => Some(Key::Left),
            b'H' => Some(Key::Home),
            b'F' => Some(Key::End),
            _ => None,
        };

        self.buffer.drain(0..3);
        key.map(|k| ParseResult::Event(InputEvent::Key(k)))
            .unwrap_or(ParseResult::Invalid(0))
    }

    /// Decode a UTF-8 character from the front of the buffer
    fn decode_utf8(&self) -> Utf8 {
        let first = self.buffer[0];

        // ASCII
        if first < 128 {
            return Utf8::Char(first as char, 1);
        }

        // Determine expected length
        let len = if first & 0xE0 == 0xC0 { 2 }
            else if first & 0xF0 == 0xE0 { 3 }
            else if first & 0xF8 == 0xF0 { 4 }
            else { return Utf8::Invalid };

        if self.buffer.len() < len {
            return Utf8::Incomplete;
        }

        match std::str::from_utf8(&self.buffer[0..len]).ok().and_then(|s| s.chars().next()) {
            Some(ch) => Utf8::Char(ch, len),
            None => Utf8::Invalid,
        }
    }
}

impl Default for InputParser {
    fn default() -> Self {
        Self::new()
    }
}

enum ParseResult {
    Event(InputEvent),
    Incomplete,
    Invalid(usize),
}

enum Utf8 {
    Char(char, usize),
    Incomplete,
    Invalid,
}

/// Decode CSI parameters into an event
fn decode_csi(params: &[u8], final_byte: u8) -> Option<InputEvent> {
    let key = match final_byte {
        b'A' => Key::Up,
        b'B' => Key::Down,
        b'C' => Key::Right,
        b'D' => Key::Left,
        b'H' => Key::Home,
        b'F' => Key::End,
        b'~' => {
            // Parse the number before ~
            let num: u8 = params
                .iter()
                .take_while(|&&b| b.is_ascii_digit())
                .fold(0u8, |acc, &b| acc.saturating_mul(10).saturating_add(b - b'0'));
            match num {
                1 | 7 => Key::Home,
                2 => Key::Insert,
                3 => Key::Delete,
                4 | 8 => Key::End,
                5 => Key::PageUp,
                6 => Key::PageDown,
                15 => Key::F5,
                17 => Key::F6,
                18 => Key::F7,
                19 => Key::F8,
                20 => Key::F9,
                21 => Key::F10,
                23 => Key::F11,
                24 => Key::F12,
                _ => return None,
            }
        }
        _ => return None,
    };
    Some(InputEvent::Key(key))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_char() {
        let mut parser = InputParser::new();
        let events = parser.parse(b"a");
        assert_eq!(events, vec![InputEvent::Char('a')]);
    }

    #[test]
    fn test_parse_arrow_keys() {
        let mut parser = InputParser::new();

        let events = parser.parse(b"\x1b[A");
        assert_eq!(events, vec![InputEvent::Key(Key::Up)]);

        let events = parser.parse(b"\x1b[B");
        assert_eq!(events, vec![InputEvent::Key(Key::Down)]);

        // Application cursor mode
        let events = parser.parse(b"\x1bOC\x1bOD");
        assert_eq!(
            events,
            vec![InputEvent::Key(Key::Right), InputEvent::Key(Key::Left)]
        );
    }

    #[test]
    fn test_parse_enter_and_tilde_keys() {
        let mut parser = InputParser::new();
        let events = parser.parse(b"\r\x1b[3~\x1b[24~");
        assert_eq!(
            events,
            vec![
                InputEvent::Key(Key::Enter),
                InputEvent::Key(Key::Delete),
                InputEvent::Key(Key::F12),
            ]
        );
    }

    #[test]
    fn test_parse_split_sequence() {
        let mut parser = InputParser::new();
        assert!(parser.parse(b"\x1b[").is_empty());
        assert_eq!(parser.take_pending_escape(), None);
        assert_eq!(parser.parse(b"D"), vec![InputEvent::Key(Key::Left)]);
    }

    #[test]
    fn test_escape_split_across_reads() {
        let mut parser = InputParser::new();
        assert!(parser.parse(b"\x1b").is_empty());
        assert!(parser.has_pending_escape());

        // The rest of the arrow arrives in the next read
        assert_eq!(parser.parse(b"[A"), vec![InputEvent::Key(Key::Up)]);
        assert!(!parser.has_pending_escape());
        assert_eq!(parser.take_pending_escape(), None);
    }

    #[test]
    fn test_alt_key_is_not_plain_char() {
        let mut parser = InputParser::new();
        assert_eq!(parser.parse(b"\x1bq"), vec![InputEvent::Alt('q')]);
    }

    #[test]
    fn test_lone_escape() {
        let mut parser = InputParser::new();
        assert!(parser.parse(b"\x1b").is_empty());
        assert_eq!(parser.take_pending_escape(), Some(InputEvent::Key(Key::Escape)));
        assert_eq!(parser.take_pending_escape(), None);

        let events = parser.parse(b"\x1b\x1b[A");
        assert_eq!(
            events,
            vec![InputEvent::Key(Key::Escape), InputEvent::Key(Key::Up)]
        );
    }

    #[test]
    fn test_parse_multiple() {
        let mut parser = InputParser::new();
        let events = parser.parse("ab\u{e9}\x1b[A".as_bytes());
        assert_eq!(events.len(), 4);
        assert_eq!(events[0], InputEvent::Char('a'));
        assert_eq!(events[1], InputEvent::Char('b'));
        assert_eq!(events[2], InputEvent::Char('é'));
        assert_eq!(events[3], InputEvent::Key(Key::Up));
    }
}
