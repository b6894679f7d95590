use smallvec::SmallVec;

use crate::foundation::{
    core::Point,
    error::{RevealError, RevealResult},
};

/// Drawing operators of the path mini-language.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operator {
    Move,
    Line,
    Horizontal,
    Vertical,
    Cubic,
    SmoothCubic,
    Quad,
    SmoothQuad,
    Arc,
    Close,
}

impl Operator {
    /// Decode an operator letter; the flag is `true` for the relative (lowercase) form.
    pub fn from_letter(c: char) -> Option<(Self, bool)> {
        let op = match c.to_ascii_uppercase() {
            'M' => Self::Move,
            'L' => Self::Line,
            'H' => Self::Horizontal,
            'V' => Self::Vertical,
            'C' => Self::Cubic,
            'S' => Self::SmoothCubic,
            'Q' => Self::Quad,
            'T' => Self::SmoothQuad,
            'A' => Self::Arc,
            'Z' => Self::Close,
            _ => return None,
        };
        Some((op, c.is_ascii_lowercase()))
    }

    pub fn letter(self, relative: bool) -> char {
        let c = match self {
            Self::Move => 'M',
            Self::Line => 'L',
            Self::Horizontal => 'H',
            Self::Vertical => 'V',
            Self::Cubic => 'C',
            Self::SmoothCubic => 'S',
            Self::Quad => 'Q',
            Self::SmoothQuad => 'T',
            Self::Arc => 'A',
            Self::Close => 'Z',
        };
        if relative { c.to_ascii_lowercase() } else { c }
    }

    /// Operands consumed by one invocation.
    pub fn arity(self) -> usize {
        match self {
            Self::Close => 0,
            Self::Horizontal | Self::Vertical => 1,
            Self::Move | Self::Line | Self::SmoothQuad => 2,
            Self::SmoothCubic | Self::Quad => 4,
            Self::Cubic => 6,
            Self::Arc => 7,
        }
    }
}

/// One parsed drawing command.
///
/// Every operator carries exactly [`Operator::arity`] operands, except `Move`, which keeps
/// all of its coordinate pairs: the first pair moves, the rest are implicit line-tos.
#[derive(Clone, Debug, PartialEq)]
pub struct Command {
    pub operator: Operator,
    pub relative: bool,
    pub operands: SmallVec<[f64; 7]>,
}

impl Command {
    /// The `i`-th coordinate pair of the operand list.
    pub fn point(&self, i: usize) -> Point {
        Point::new(self.operands[2 * i], self.operands[2 * i + 1])
    }

    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.operands
            .chunks_exact(2)
            .map(|pair| Point::new(pair[0], pair[1]))
    }
}

/// Tokenize path data into commands, expanding implicit operator repetition.
pub fn parse_path(d: &str) -> RevealResult<Vec<Command>> {
    let mut out = Vec::new();
    for (letter, body) in split_commands(d)? {
        let (operator, relative) =
            Operator::from_letter(letter).ok_or_else(|| RevealError::unsupported_operator(letter))?;

        let operands = if operator == Operator::Arc {
            scan_arc_operands(body)?
        } else {
            scan_numbers(body)?
        };

        expand(letter, operator, relative, &operands, &mut out)?;
    }
    Ok(out)
}

/// Split at operator letters. `e`/`E` never start a command: they belong to exponents.
fn split_commands(d: &str) -> RevealResult<Vec<(char, &str)>> {
    let mut out = Vec::new();
    let mut current: Option<(char, usize)> = None;

    for (i, c) in d.char_indices() {
        if !c.is_ascii_alphabetic() || c == 'e' || c == 'E' {
            continue;
        }
        match current {
            Some((letter, start)) => out.push((letter, &d[start..i])),
            None => {
                let lead = &d[..i];
                if !lead.trim_matches(is_separator).is_empty() {
                    return Err(RevealError::parse(format!(
                        "path data must start with a command, found '{}'",
                        lead.trim()
                    )));
                }
            }
        }
        current = Some((c, i + c.len_utf8()));
    }

    match current {
        Some((letter, start)) => out.push((letter, &d[start..])),
        None if !d.trim_matches(is_separator).is_empty() => {
            return Err(RevealError::parse(format!(
                "path data contains no command: '{}'",
                d.trim()
            )));
        }
        None => {}
    }
    Ok(out)
}

fn expand(
    letter: char,
    operator: Operator,
    relative: bool,
    operands: &[f64],
    out: &mut Vec<Command>,
) -> RevealResult<()> {
    let arity = operator.arity();

    if arity == 0 {
        if !operands.is_empty() {
            return Err(RevealError::parse(format!(
                "'{letter}' takes no operands, got {}",
                operands.len()
            )));
        }
        out.push(Command {
            operator,
            relative,
            operands: SmallVec::new(),
        });
        return Ok(());
    }

    if operands.is_empty() {
        return Err(RevealError::parse(format!("'{letter}' expects operands")));
    }
    if operands.len() % arity != 0 {
        return Err(RevealError::parse(format!(
            "'{letter}' expects a multiple of {arity} operands, got {}",
            operands.len()
        )));
    }

    if operator == Operator::Move {
        out.push(Command {
            operator,
            relative,
            operands: SmallVec::from_slice(operands),
        });
    } else {
        out.extend(operands.chunks_exact(arity).map(|group| Command {
            operator,
            relative,
            operands: SmallVec::from_slice(group),
        }));
    }
    Ok(())
}

fn is_separator(c: char) -> bool {
    c.is_ascii_whitespace() || c == ','
}

fn scan_numbers(body: &str) -> RevealResult<Vec<f64>> {
    let mut sc = Scanner::new(body);
    let mut out = Vec::new();
    while !sc.at_end() {
        out.push(sc.number()?);
    }
    Ok(out)
}

/// Arc operands are read positionally: flags are single `0`/`1` characters that may run
/// straight into the next number (`a25 25 0 1150 0`).
fn scan_arc_operands(body: &str) -> RevealResult<Vec<f64>> {
    let mut sc = Scanner::new(body);
    let mut out = Vec::new();
    while !sc.at_end() {
        out.push(sc.number()?);
        out.push(sc.number()?);
        out.push(sc.number()?);
        out.push(sc.flag()?);
        out.push(sc.flag()?);
        out.push(sc.number()?);
        out.push(sc.number()?);
    }
    Ok(out)
}

struct Scanner<'a> {
    src: &'a str,
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Scanner<'a> {
    fn new(src: &'a str) -> Self {
        Self {
            src,
            bytes: src.as_bytes(),
            pos: 0,
        }
    }

    fn skip_separators(&mut self) {
        while self.pos < self.bytes.len() && is_separator(char::from(self.bytes[self.pos])) {
            self.pos += 1;
        }
    }

    fn at_end(&mut self) -> bool {
        self.skip_separators();
        self.pos >= self.bytes.len()
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn eat_digits(&mut self) -> usize {
        let start = self.pos;
        while self.peek().is_some_and(|b| b.is_ascii_digit()) {
            self.pos += 1;
        }
        self.pos - start
    }

    /// `[-+]?[0-9]*\.?[0-9]*([eE][-+]?[0-9]+)?` with at least one mantissa digit.
    fn number(&mut self) -> RevealResult<f64> {
        self.skip_separators();
        let start = self.pos;

        if matches!(self.peek(), Some(b'+' | b'-')) {
            self.pos += 1;
        }
        let mut digits = self.eat_digits();
        if self.peek() == Some(b'.') {
            self.pos += 1;
            digits += self.eat_digits();
        }
        if digits == 0 {
            return Err(self.invalid_token(start));
        }

        if matches!(self.peek(), Some(b'e' | b'E')) {
            let mark = self.pos;
            self.pos += 1;
            if matches!(self.peek(), Some(b'+' | b'-')) {
                self.pos += 1;
            }
            if self.eat_digits() == 0 {
                self.pos = mark;
            }
        }

        let token = &self.src[start..self.pos];
        let value = token
            .parse::<f64>()
            .map_err(|e| RevealError::parse(format!("invalid number '{token}': {e}")))?;
        if !value.is_finite() {
            return Err(RevealError::parse(format!(
                "number '{token}' is out of range"
            )));
        }
        Ok(value)
    }

    fn flag(&mut self) -> RevealResult<f64> {
        self.skip_separators();
        match self.peek() {
            Some(b'0') => {
                self.pos += 1;
                Ok(0.0)
            }
            Some(b'1') => {
                self.pos += 1;
                Ok(1.0)
            }
            Some(_) => Err(RevealError::parse(format!(
                "arc flag must be 0 or 1 at byte {} of '{}'",
                self.pos,
                self.src.trim()
            ))),
            None => Err(RevealError::parse(format!(
                "arc expects 7 operands per segment in '{}'",
                self.src.trim()
            ))),
        }
    }

    fn invalid_token(&self, start: usize) -> RevealError {
        let rest = &self.src[start..];
        match rest.chars().next() {
            Some(c) => RevealError::parse(format!("invalid number token '{c}' in '{}'", self.src.trim())),
            None => RevealError::parse(format!("missing operand in '{}'", self.src.trim())),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/path/command.rs"]
mod tests;
