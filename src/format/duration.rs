use super::config::DEFAULT_DURATION_FORMAT;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Unit {
    Days,
    Hours,
    Minutes,
    Seconds,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum Token {
    Field { unit: Unit, width: usize },
    Literal(String),
}

/// Compiled duration pattern built from `d`, `h`, `hh`, `m`, `mm`, `s`,
/// `ss`, punctuation and `'quoted'` text. Values are seconds.
///
/// The largest unit present absorbs everything above it, so `mm:ss` renders
/// 3725 seconds as `62:05`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct DurationPattern {
    tokens: Vec<Token>,
}

impl DurationPattern {
    /// Returns `None` for empty patterns, patterns without any unit token and
    /// patterns containing other letters.
    pub(crate) fn parse(pattern: &str) -> Option<Self> {
        let mut tokens = Vec::new();
        let mut chars = pattern.chars().peekable();
        let mut literal = String::new();

        while let Some(ch) = chars.next() {
            let unit = match ch {
                'd' => Unit::Days,
                'h' => Unit::Hours,
                'm' => Unit::Minutes,
                's' => Unit::Seconds,
                '\'' => {
                    loop {
                        match chars.next() {
                            Some('\'') => break,
                            Some(quoted) => literal.push(quoted),
                            None => return None,
                        }
                    }
                    continue;
                }
                ch if ch.is_alphabetic() => return None,
                ch => {
                    literal.push(ch);
                    continue;
                }
            };
            let mut width = 1;
            while chars.next_if_eq(&ch).is_some() {
                width += 1;
            }
            if width > 2 {
                return None;
            }
            if !literal.is_empty() {
                tokens.push(Token::Literal(std::mem::take(&mut literal)));
            }
            tokens.push(Token::Field { unit, width });
        }
        if !literal.is_empty() {
            tokens.push(Token::Literal(literal));
        }

        tokens
            .iter()
            .any(|token| matches!(token, Token::Field { .. }))
            .then_some(Self { tokens })
    }

    /// First parseable pattern among `candidates`, else the built-in default.
    pub(crate) fn pick<'a>(candidates: impl IntoIterator<Item = &'a str>) -> Self {
        candidates
            .into_iter()
            .find_map(Self::parse)
            .or_else(|| Self::parse(DEFAULT_DURATION_FORMAT))
            .unwrap_or(Self {
                tokens: vec![Token::Field {
                    unit: Unit::Seconds,
                    width: 1,
                }],
            })
    }

    pub(crate) fn format(&self, seconds: f64) -> String {
        if seconds.is_nan() {
            return String::new();
        }
        let has = |unit: Unit| {
            self.tokens
                .iter()
                .any(|token| matches!(token, Token::Field { unit: u, .. } if *u == unit))
        };

        let total = seconds.abs().round().min(u64::MAX as f64) as u64;
        let mut rest = total;
        let mut take = |unit: Unit, size: u64| {
            if has(unit) {
                let value = rest / size;
                rest %= size;
                value
            } else {
                0
            }
        };
        let days = take(Unit::Days, 86_400);
        let hours = take(Unit::Hours, 3_600);
        let minutes = take(Unit::Minutes, 60);
        let secs = take(Unit::Seconds, 1);

        let mut out = String::new();
        if seconds < 0.0 && total > 0 {
            out.push('-');
        }
        for token in &self.tokens {
            match token {
                Token::Literal(text) => out.push_str(text),
                &Token::Field { unit, width } => {
                    let value = match unit {
                        Unit::Days => days,
                        Unit::Hours => hours,
                        Unit::Minutes => minutes,
                        Unit::Seconds => secs,
                    };
                    out.push_str(&format!("{value:0width$}"));
                }
            }
        }
        out
    }
}
