use crate::key::Key;

#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub enum CSI {
    CUU(usize),
    CUD(usize),
    CUF(usize),
    CUB(usize),
    CUP(usize, usize),
    SGR(usize),
    SM(usize),
    RM(usize),
    Insert,
    Delete,
    Unknown(u8),
}

impl CSI {
    fn new(byte: u8, arg1: Option<usize>, arg2: Option<usize>) -> Self {
        match byte as char {
            'A' => Self::CUU(arg1.unwrap_or(1)),
            'B' => Self::CUD(arg1.unwrap_or(1)),
            'C' => Self::CUF(arg1.unwrap_or(1)),
            'D' => Self::CUB(arg1.unwrap_or(1)),
            'H' => Self::CUP(arg1.unwrap_or(1), arg2.unwrap_or(1)),
            'm' => Self::SGR(arg1.unwrap_or(0)),
            'h' => arg1.map_or(Self::Unknown(byte), Self::SM),
            'l' => arg1.map_or(Self::Unknown(byte), Self::RM),
            '~' => match arg1 {
                Some(2) => Self::Insert,
                Some(3) => Self::Delete,
                _ => Self::Unknown(byte),
            },
            _ => Self::Unknown(byte),
        }
    }

    /// Key code for sequences sent by the keyboard
    pub fn key(&self) -> Option<Key> {
        match self {
            CSI::CUU(_) => Some(Key::Up),
            CSI::CUD(_) => Some(Key::Down),
            CSI::CUF(_) => Some(Key::Right),
            CSI::CUB(_) => Some(Key::Left),
            CSI::Insert => Some(Key::Insert),
            CSI::Delete => Some(Key::Delete),
            _ => None,
        }
    }
}

#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub enum Action {
    Ignore,
    /// Byte outside any escape sequence
    Byte(u8),
    EscapeSequence(u8),
    ControlSequenceIntroducer(CSI),
}

#[derive(Debug, Eq, PartialEq)]
enum State {
    Ground,
    EscapeSequence,
    CSIStart,
    CSIArg1(Option<usize>),
    CSIArg2(Option<usize>, Option<usize>),
}

/// ANSI escape sequence parser
pub struct Parser {
    state: State,
}

impl Parser {
    pub fn new() -> Self {
        Self {
            state: State::Ground,
        }
    }

    pub fn advance(&mut self, byte: u8) -> Action {
        match self.state {
            State::Ground => match byte {
                0x1b => {
                    self.state = State::EscapeSequence;
                    Action::Ignore
                }
                _ => Action::Byte(byte),
            },
            State::EscapeSequence => {
                if byte == 0x5b {
                    self.state = State::CSIStart;
                    Action::Ignore
                } else {
                    self.state = State::Ground;
                    Action::EscapeSequence(byte)
                }
            }
            State::CSIStart => match byte {
                0x30..=0x39 => {
                    let value: usize = (byte - 0x30) as usize;
                    self.state = State::CSIArg1(Some(value));
                    Action::Ignore
                }
                0x3b => {
                    self.state = State::CSIArg2(None, None);
                    Action::Ignore
                }
                0x40..=0x7e => {
                    self.state = State::Ground;
                    Action::ControlSequenceIntroducer(CSI::new(byte, None, None))
                }
                _ => Action::Ignore,
            },
            State::CSIArg1(value) => match byte {
                0x30..=0x39 => {
                    let value = value
                        .unwrap_or(0)
                        .saturating_mul(10)
                        .saturating_add((byte - 0x30) as usize);
                    self.state = State::CSIArg1(Some(value));
                    Action::Ignore
                }
                0x3b => {
                    self.state = State::CSIArg2(value, None);
                    Action::Ignore
                }
                0x40..=0x7e => {
                    self.state = State::Ground;
                    Action::ControlSequenceIntroducer(CSI::new(byte, value, None))
                }
                _ => Action::Ignore,
            },
            State::CSIArg2(arg1, arg2) => match byte {
                0x30..=0x39 => {
                    let arg2 = arg2
                        .unwrap_or(0)
                        .saturating_mul(10)
                        .saturating_add((byte - 0x30) as usize);
                    self.state = State::CSIArg2(arg1, Some(arg2));
                    Action::Ignore
                }
                0x40..=0x7e => {
                    self.state = State::Ground;
                    Action::ControlSequenceIntroducer(CSI::new(byte, arg1, arg2))
                }
                _ => Action::Ignore,
            },
        }
    }
}
