use aho_corasick::AhoCorasick;
use std::sync::LazyLock;

fn ascii_case_insensitive(needle: &str) -> AhoCorasick {
    AhoCorasick::builder()
        .ascii_case_insensitive(true)
        .build([needle])
        .expect("single literal needle")
}

static TABLET: LazyLock<AhoCorasick> = LazyLock::new(|| ascii_case_insensitive("tablet"));
static BOT: LazyLock<AhoCorasick> = LazyLock::new(|| ascii_case_insensitive("bot"));

/// Does `haystack` mention `tablet` in any ASCII casing?
pub(crate) fn contains_tablet(haystack: &str) -> bool {
    TABLET.is_match(haystack)
}

/// Does `haystack` mention `bot` in any ASCII casing?
pub(crate) fn contains_bot(haystack: &str) -> bool {
    BOT.is_match(haystack)
}
