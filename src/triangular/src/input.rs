use {
    derive_more::Display,
    std::io::{self, BufRead, BufReader, Read},
};

/// Used for `n` whenever no integer can be read.
pub const DEFAULT_N: i64 = 10;

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum FallbackReason {
    #[display("failed to read input: {_0}")]
    Unreadable(String),
    #[display("no input")]
    Empty,
    #[display("expected an integer, found {found:?}")]
    Malformed { found: String },
    #[display("{digits} does not fit in i64")]
    OutOfRange { digits: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Parsed,
    Fallback(FallbackReason),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Input {
    pub n: i64,
    pub source: Source,
}

impl Input {
    fn fallback(reason: FallbackReason) -> Self {
        Input {
            n: DEFAULT_N,
            source: Source::Fallback(reason),
        }
    }
}

/// The leading `[+-]?[0-9]*` run of the first token, and the byte that ended it.
struct Scanned {
    prefix: Vec<u8>,
    stop: Option<u8>,
}

fn peek(reader: &mut impl BufRead) -> io::Result<Option<u8>> {
    loop {
        match reader.fill_buf() {
            Ok(buf) => return Ok(buf.first().copied()),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
}

// Stops at the first byte that cannot extend the number; nothing past it is read.
fn scan(reader: &mut impl BufRead) -> io::Result<Scanned> {
    let mut prefix = Vec::new();
    let mut next = peek(reader)?;
    while next.is_some_and(|byte| byte.is_ascii_whitespace()) {
        reader.consume(1);
        next = peek(reader)?;
    }
    if let Some(sign @ (b'+' | b'-')) = next {
        prefix.push(sign);
        reader.consume(1);
        next = peek(reader)?;
    }
    while let Some(digit) = next.filter(u8::is_ascii_digit) {
        prefix.push(digit);
        reader.consume(1);
        next = peek(reader)?;
    }
    Ok(Scanned { prefix, stop: next })
}

/// Reads `n` from the leading digits of the first token, like a C `scanf("%lld")`.
///
/// Reading stops as soon as the number ends, so an open stream is never drained. Trailing
/// bytes in the token (`"12abc"`, `"1.5"`) are ignored.
pub fn read_n(input: &mut impl Read) -> Input {
    let Scanned { prefix, stop } = match scan(&mut BufReader::new(input)) {
        Ok(scanned) => scanned,
        Err(e) => return Input::fallback(FallbackReason::Unreadable(e.to_string())),
    };
    let has_sign = matches!(prefix.first(), Some(b'+' | b'-'));
    if prefix.len() == usize::from(has_sign) {
        if prefix.is_empty() && stop.is_none() {
            return Input::fallback(FallbackReason::Empty);
        }
        let mut found = prefix;
        found.extend(stop);
        return Input::fallback(FallbackReason::Malformed {
            found: String::from_utf8_lossy(&found).into_owned(),
        });
    }
    // only ASCII sign and digits made it into the prefix
    let digits = String::from_utf8_lossy(&prefix).into_owned();
    match digits.parse() {
        Ok(n) => Input {
            n,
            source: Source::Parsed,
        },
        Err(_) => Input::fallback(FallbackReason::OutOfRange { digits }),
    }
}

pub fn parse_n(text: &str) -> Input {
    read_n(&mut text.as_bytes())
}
