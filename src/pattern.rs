use std::str::FromStr;

use crate::{
    CalendarDate, DAY_LETTER, MONTH_LETTER, ParseError, QUOTE, TWO_DIGIT_YEAR_BASE, WEEKDAY_LETTER,
    Weekday, WeekdayStyle, YEAR_LETTER, prelude::*,
};

/// One compiled element of a [`FormatPattern`].
#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    /// `yyyy`
    Year4,
    /// `yy`
    Year2,
    /// `MM`
    Month2,
    /// `M`
    Month,
    /// `dd`
    Day2,
    /// `d`
    Day,
    /// `EEEE`
    WeekdayFull,
    /// `E`
    WeekdayShort,
    Literal(String),
}

/// Error type for pattern compilation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PatternError {
    #[error("Empty format pattern")]
    Empty,

    /// A letter run that is not part of the supported token set.
    #[error("Unsupported pattern token '{token}' at position {position}")]
    UnsupportedToken { token: String, position: usize },

    #[error("Unterminated quoted literal starting at position {0}")]
    UnterminatedLiteral(usize),
}

/// A compiled date pattern such as `yyyy-MM-dd` or `yyyy년 M월 d일 (E)`.
///
/// ASCII letters are reserved for tokens; everything else is literal text.
/// Letters can be used literally inside single quotes, and `''` stands for
/// a single quote.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display(fmt = "{pattern}")]
pub struct FormatPattern {
    pattern: String,
    tokens:  Vec<Token>,
}

impl FormatPattern {
    /// Compiles `pattern` into tokens.
    ///
    /// # Errors
    /// Returns `PatternError` if the pattern is blank, contains an unsupported
    /// letter run, or leaves a quote open.
    pub fn compile(pattern: &str) -> Result<Self, PatternError> {
        if pattern.trim().is_empty() {
            return Err(PatternError::Empty);
        }

        let chars: Vec<(usize, char)> = pattern.char_indices().collect();
        let mut tokens = Vec::new();
        let mut i = 0;

        while let Some(&(position, c)) = chars.get(i) {
            if c.is_ascii_alphabetic() {
                let run = chars[i..].iter().take_while(|&&(_, other)| other == c).count();
                tokens.push(Self::letter_token(c, run, position)?);
                i += run;
            } else if c == QUOTE {
                let (literal, consumed) = Self::quoted_literal(&chars[i..], position)?;
                push_literal(&mut tokens, &literal);
                i += consumed;
            } else {
                push_literal(&mut tokens, c.encode_utf8(&mut [0; 4]));
                i += 1;
            }
        }

        Ok(Self {
            pattern: pattern.to_owned(),
            tokens,
        })
    }

    /// The `yyyy-MM-dd` pattern, built without going through the compiler.
    pub fn iso() -> Self {
        Self {
            pattern: crate::ISO_PATTERN.to_owned(),
            tokens:  vec![
                Token::Year4,
                Token::Literal(crate::DATE_SEPARATOR.to_string()),
                Token::Month2,
                Token::Literal(crate::DATE_SEPARATOR.to_string()),
                Token::Day2,
            ],
        }
    }

    /// The pattern text this was compiled from.
    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    fn letter_token(letter: char, run: usize, position: usize) -> Result<Token, PatternError> {
        let token = match (letter, run) {
            (YEAR_LETTER, 4) => Token::Year4,
            (YEAR_LETTER, 2) => Token::Year2,
            (MONTH_LETTER, 2) => Token::Month2,
            (MONTH_LETTER, 1) => Token::Month,
            (DAY_LETTER, 2) => Token::Day2,
            (DAY_LETTER, 1) => Token::Day,
            (WEEKDAY_LETTER, 4) => Token::WeekdayFull,
            (WEEKDAY_LETTER, 1) => Token::WeekdayShort,
            _ => {
                return Err(PatternError::UnsupportedToken {
                    token: letter.to_string().repeat(run),
                    position,
                });
            },
        };
        Ok(token)
    }

    /// Reads a quoted section starting at `chars[0] == QUOTE`.
    /// Returns the literal text and the number of chars consumed.
    fn quoted_literal(chars: &[(usize, char)], position: usize) -> Result<(String, usize), PatternError> {
        // '' outside a quoted section is a single quote
        if matches!(chars.get(1), Some(&(_, QUOTE))) {
            return Ok((QUOTE.to_string(), 2));
        }

        let mut literal = String::new();
        let mut i = 1;
        loop {
            match (chars.get(i), chars.get(i + 1)) {
                (Some(&(_, QUOTE)), Some(&(_, QUOTE))) => {
                    literal.push(QUOTE);
                    i += 2;
                },
                (Some(&(_, QUOTE)), _) => return Ok((literal, i + 1)),
                (Some(&(_, c)), _) => {
                    literal.push(c);
                    i += 1;
                },
                (None, _) => return Err(PatternError::UnterminatedLiteral(position)),
            }
        }
    }

    /// Renders `date` with this pattern.
    pub fn format(&self, date: &CalendarDate) -> String {
        let mut out = String::with_capacity(self.pattern.len() + 8);
        for token in &self.tokens {
            match token {
                Token::Year4 => out.push_str(&format!("{:04}", date.year())),
                Token::Year2 => out.push_str(&format!("{:02}", date.year() % 100)),
                Token::Month2 => out.push_str(&format!("{:02}", date.month())),
                Token::Month => out.push_str(&date.month().to_string()),
                Token::Day2 => out.push_str(&format!("{:02}", date.day())),
                Token::Day => out.push_str(&date.day().to_string()),
                Token::WeekdayFull => out.push_str(date.weekday().korean_name(WeekdayStyle::Full)),
                Token::WeekdayShort => out.push_str(date.weekday().korean_name(WeekdayStyle::Short)),
                Token::Literal(text) => out.push_str(text),
            }
        }
        out
    }

    /// Parses `text`, which must match this pattern completely.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidFormat` when the text does not follow the
    /// pattern (or the pattern lacks a year, month or day field), and the
    /// component errors of [`CalendarDate::new`] when the fields do not form
    /// a real date.
    pub fn parse(&self, text: &str) -> Result<CalendarDate, ParseError> {
        let mut fields = Fields::default();
        let mut rest = text;

        for token in &self.tokens {
            rest = match token {
                Token::Year4 => {
                    let (value, rest) = take_digits(rest, 4, 4)?;
                    assign(&mut fields.year, value, "year")?;
                    rest
                },
                Token::Year2 => {
                    let (value, rest) = take_digits(rest, 2, 2)?;
                    assign(&mut fields.year, u32::from(TWO_DIGIT_YEAR_BASE) + value, "year")?;
                    rest
                },
                Token::Month2 | Token::Month => {
                    let min = if *token == Token::Month { 1 } else { 2 };
                    let (value, rest) = take_digits(rest, min, 2)?;
                    assign(&mut fields.month, value, "month")?;
                    rest
                },
                Token::Day2 | Token::Day => {
                    let min = if *token == Token::Day { 1 } else { 2 };
                    let (value, rest) = take_digits(rest, min, 2)?;
                    assign(&mut fields.day, value, "day")?;
                    rest
                },
                Token::WeekdayFull | Token::WeekdayShort => {
                    let style = if *token == Token::WeekdayFull {
                        WeekdayStyle::Full
                    } else {
                        WeekdayStyle::Short
                    };
                    let (weekday, rest) = take_weekday(rest, style)?;
                    assign(&mut fields.weekday, weekday, "weekday")?;
                    rest
                },
                Token::Literal(literal) => rest.strip_prefix(literal.as_str()).ok_or_else(|| {
                    ParseError::InvalidFormat(format!("expected '{literal}' at '{rest}' in '{text}'"))
                })?,
            };
        }

        if !rest.is_empty() {
            return Err(ParseError::InvalidFormat(format!("unparsed trailing text '{rest}' in '{text}'")));
        }

        fields.resolve(self)
    }
}

impl FromStr for FormatPattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::compile(s)
    }
}

impl TryFrom<&str> for FormatPattern {
    type Error = PatternError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::compile(value)
    }
}

/// Field values collected while parsing.
#[derive(Debug, Default)]
struct Fields {
    year:    Option<u32>,
    month:   Option<u32>,
    day:     Option<u32>,
    weekday: Option<Weekday>,
}

impl Fields {
    fn resolve(self, pattern: &FormatPattern) -> Result<CalendarDate, ParseError> {
        let missing = |field: &str| ParseError::InvalidFormat(format!("pattern '{pattern}' has no {field} field"));
        let year = self.year.ok_or_else(|| missing("year"))?;
        let month = self.month.ok_or_else(|| missing("month"))?;
        let day = self.day.ok_or_else(|| missing("day"))?;

        // At most 4 digits for the year and 2 for month and day
        let year = u16::try_from(year).map_err(|_| ParseError::InvalidFormat(year.to_string()))?;
        let month = u8::try_from(month).map_err(|_| ParseError::InvalidFormat(month.to_string()))?;
        let day = u8::try_from(day).map_err(|_| ParseError::InvalidFormat(day.to_string()))?;

        let date = CalendarDate::new(year, month, day)?;
        match self.weekday {
            Some(weekday) if weekday != date.weekday() => Err(ParseError::InvalidFormat(format!(
                "{date} is {}, not {weekday}",
                date.weekday()
            ))),
            _ => Ok(date),
        }
    }
}

fn push_literal(tokens: &mut Vec<Token>, text: &str) {
    if let Some(Token::Literal(last)) = tokens.last_mut() {
        last.push_str(text);
    } else {
        tokens.push(Token::Literal(text.to_owned()));
    }
}

/// Repeated fields in one pattern must agree.
fn assign<T: Copy + PartialEq + std::fmt::Display>(slot: &mut Option<T>, value: T, field: &str) -> Result<(), ParseError> {
    match *slot {
        Some(existing) if existing != value => Err(ParseError::InvalidFormat(format!(
            "conflicting {field} values {existing} and {value}"
        ))),
        _ => {
            *slot = Some(value);
            Ok(())
        },
    }
}

/// Takes between `min` and `max` leading ASCII digits.
fn take_digits(input: &str, min: usize, max: usize) -> Result<(u32, &str), ParseError> {
    let len = input.bytes().take(max).take_while(u8::is_ascii_digit).count();
    if len < min {
        return Err(ParseError::InvalidFormat(format!(
            "expected {min} to {max} digits at '{input}'"
        )));
    }
    let (digits, rest) = input.split_at(len);
    let value = digits
        .parse::<u32>()
        .map_err(|_| ParseError::InvalidFormat(digits.to_owned()))?;
    Ok((value, rest))
}

fn take_weekday(input: &str, style: WeekdayStyle) -> Result<(Weekday, &str), ParseError> {
    Weekday::ALL
        .into_iter()
        .find_map(|weekday| {
            input
                .strip_prefix(weekday.korean_name(style))
                .map(|rest| (weekday, rest))
        })
        .ok_or_else(|| ParseError::InvalidFormat(format!("expected a Korean weekday name at '{input}'")))
}
