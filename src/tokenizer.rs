use crate::tokens::Tokens;

/// Boilerplate fragments that never identify anything.
fn is_ignored(s: &str) -> bool {
    matches!(
        s,
        "KHTML, like Gecko"
            | "U"
            | "compatible"
            | "Mozilla"
            | "WOW64"
            | "en"
            | "en-us"
            | "en-gb"
            | "ru-ru"
            | "Browser"
    )
}

/// Split a token that carried no `/value` into key and trailing version, for
/// the handful of keys that put their version after a space
/// (`Windows NT 10.0`, `Android 4.3`).
///
/// Chrome OS puts the architecture between key and version
/// (`CrOS x86_64 14541.0.0`); there the architecture becomes the value.
pub(crate) fn split_version(s: &str) -> (&str, &str) {
    let Some(i) = s.rfind(' ') else {
        return (s, "");
    };
    let head = &s[..i];
    match head {
        "Linux" | "Windows NT" | "Windows Phone OS" | "MSIE" | "Android" | "OpenHarmony" => {
            (head, &s[i + 1..])
        }
        "CrOS x86_64" | "CrOS aarch64" | "CrOS armv7l" => match head.rfind(' ') {
            Some(j) => (&head[..j], &head[j + 1..]),
            None => (s, ""),
        },
        _ => (s, ""),
    }
}

/// Per-token scanner state, reset on every flush.
#[derive(Debug, Default)]
struct Scan {
    /// A `/` was seen: characters go to the value buffer until a space.
    slash: bool,
    /// `http://` or `https://` was seen: `/` no longer splits key and value.
    url: bool,
}

/// Character-level scanner turning a User-Agent string into [`Tokens`].
///
/// The key and value buffers are kept between calls so a long-lived
/// tokenizer stops allocating once it has seen its longest token.
#[derive(Debug, Default)]
pub(crate) struct Tokenizer {
    key: String,
    value: String,
}

impl Tokenizer {
    pub fn new() -> Self {
        Self {
            key: String::with_capacity(64),
            value: String::with_capacity(32),
        }
    }

    /// Replace the contents of `tokens` with the tokens of `ua`.
    ///
    /// Never fails; fragments that make no sense are dropped or folded into
    /// the token being accumulated.
    pub fn tokenize(&mut self, ua: &str, tokens: &mut Tokens) {
        tokens.clear();
        self.key.clear();
        self.value.clear();

        let mut scan = Scan::default();
        let mut chars = ua.chars().peekable();

        while let Some(c) = chars.next() {
            match c {
                ')' | ';' | '(' | '[' | ']' => self.flush(tokens, &mut scan),
                ':' => {
                    if self.key.ends_with("http") || self.key.ends_with("https") {
                        self.key.push(':');
                    } else if chars.peek().is_some_and(|&next| next != ' ') {
                        // malformed `key:value`, meant as `key value`
                        self.key.push(' ');
                    }
                }
                ' ' if scan.slash => self.flush(tokens, &mut scan),
                _ if scan.slash => self.value.push(c),
                '/' if !scan.url => {
                    if chars.peek() == Some(&'/')
                        && (self.key.ends_with("http:") || self.key.ends_with("https:"))
                    {
                        self.key.push('/');
                        scan.url = true;
                    } else if is_ignored(&self.key) {
                        self.key.clear();
                    } else {
                        scan.slash = true;
                    }
                }
                _ => self.key.push(c),
            }
        }
        self.flush(tokens, &mut scan);
    }

    fn flush(&mut self, tokens: &mut Tokens, scan: &mut Scan) {
        let key = self.key.trim();
        if !key.is_empty() && !is_ignored(key) {
            let key = if scan.url {
                key.strip_prefix('+').unwrap_or(key)
            } else {
                key
            };

            let (key, value) = if self.value.is_empty() {
                split_version(key)
            } else {
                (key, self.value.trim())
            };
            tracing::trace!(key, value, "token");
            tokens.push(key, value);
        }

        self.key.clear();
        self.value.clear();
        *scan = Scan::default();
    }
}
