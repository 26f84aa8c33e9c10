use crate::client::CLIENT_RULES;
use crate::names::client;
use crate::os::OS_RULES;
use crate::tokenizer::Tokenizer;
use crate::tokens::Tokens;
use crate::types::*;
use rayon::prelude::*;

/// Reusable classification engine.
///
/// Holds the tokenizer scratch buffers and the token sequence between calls,
/// so classifying many strings with one engine stops allocating for them
/// after the first few inputs.  `classify` takes `&mut self`: share nothing,
/// give every thread its own engine (see [`classify_batch`]).
#[derive(Debug)]
pub struct Classifier {
    tokenizer: Tokenizer,
    tokens: Tokens,
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Classifier {
    pub fn new() -> Self {
        Self {
            tokenizer: Tokenizer::new(),
            tokens: Tokens::with_capacity(8),
        }
    }

    /// Classify one User-Agent string.
    ///
    /// Total: any input, including the empty string, yields a record.  The
    /// same input always yields the same record, whatever was classified
    /// before.
    pub fn classify(&mut self, ua: &str) -> Classification {
        let mut record = Classification::new(ua);
        let tokens = &mut self.tokens;

        self.tokenizer.tokenize(ua, tokens);
        if let Some(url) = tokens.take_url() {
            record.url = url;
        }

        let os_rule = OS_RULES.apply_first(tokens, &mut record);
        let client_rule = CLIENT_RULES.apply_first(tokens, &mut record);
        finish(&mut record);

        tracing::debug!(
            ua,
            ?os_rule,
            ?client_rule,
            name = %record.name,
            version = %record.version,
            os = %record.os,
            form_factor = %record.form_factor(),
            "classified"
        );
        record
    }
}

/// Cross-cutting adjustments applied after both rule tables ran.
fn finish(record: &mut Classification) {
    if record.is_android() {
        record.mobile = true;
    }
    if record.tablet {
        record.mobile = false;
    }
    if !record.bot {
        record.bot = !record.url.is_empty()
            || matches!(
                record.name.as_str(),
                client::TWITTERBOT | client::FACEBOOK_EXTERNAL_HIT
            );
    }

    record.version_no = VersionNo::parse(&record.version);
    record.os_version_no = VersionNo::parse(&record.os_version);
}

/// Classify many strings in parallel, one engine per rayon worker split.
///
/// Output order matches input order.
pub fn classify_batch<S>(uas: &[S]) -> Vec<Classification>
where
    S: AsRef<str> + Sync,
{
    uas.par_iter()
        .map_init(Classifier::new, |classifier, ua| {
            classifier.classify(ua.as_ref())
        })
        .collect()
}

/// Split a User-Agent string into its raw tokens, before any rule has
/// consumed or relabelled them.
pub fn tokenize(ua: &str) -> Tokens {
    let mut tokens = Tokens::default();
    Tokenizer::new().tokenize(ua, &mut tokens);
    tokens
}
