use std::slice;

/// One `key/value` fragment of a User-Agent string.
///
/// `Chrome/91.0` becomes `key = "Chrome"`, `value = "91.0"`; a bare
/// `Macintosh` has an empty value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub key: String,
    pub value: String,
}

/// Ordered token sequence produced by the tokenizer.
///
/// Order mirrors textual appearance and keys may repeat.  Lookups always
/// return the first match.  The sequence is scratch state for a single
/// classification: the classifier removes or relabels tokens it has consumed
/// so later rules do not read them again.
#[derive(Debug, Clone, Default)]
pub struct Tokens {
    list: Vec<Token>,
}

impl Tokens {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            list: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn clear(&mut self) {
        self.list.clear();
    }

    pub(crate) fn push(&mut self, key: &str, value: &str) {
        self.list.push(Token {
            key: key.to_owned(),
            value: value.to_owned(),
        });
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, Token> {
        self.list.iter()
    }

    pub fn as_slice(&self) -> &[Token] {
        &self.list
    }

    /// Value of the first token with `key`, or `""`.
    pub fn get(&self, key: &str) -> &str {
        self.get_indexed(key).map_or("", |(_, v)| v)
    }

    /// Index and value of the first token with `key`.
    pub fn get_indexed(&self, key: &str) -> Option<(usize, &str)> {
        self.list
            .iter()
            .enumerate()
            .find(|(_, t)| t.key == key)
            .map(|(i, t)| (i, t.value.as_str()))
    }

    pub fn exists(&self, key: &str) -> bool {
        self.list.iter().any(|t| t.key == key)
    }

    pub fn exists_any(&self, keys: &[&str]) -> bool {
        keys.iter().any(|k| self.exists(k))
    }

    /// Non-empty value of the first token with `key`.
    pub fn get_non_empty(&self, key: &str) -> Option<&str> {
        Some(self.get(key)).filter(|v| !v.is_empty())
    }

    /// Does any key begin with `prefix`?
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.list.iter().any(|t| t.key.starts_with(prefix))
    }

    /// `Mobile` or `Mobile Safari` present.
    pub fn has_mobile_marker(&self) -> bool {
        self.exists_any(&["Mobile", "Mobile Safari"])
    }

    /// Remove and return the token at `index`.
    pub(crate) fn splice_out(&mut self, index: usize) -> Option<Token> {
        (index < self.list.len()).then(|| self.list.remove(index))
    }

    pub(crate) fn relabel(&mut self, index: usize, key: &str) {
        if let Some(token) = self.list.get_mut(index) {
            token.key.clear();
            token.key.push_str(key);
        }
    }

    /// Remove the first token whose key is an absolute `http(s)://` URL and
    /// return that URL.
    pub(crate) fn take_url(&mut self) -> Option<String> {
        let index = self
            .list
            .iter()
            .position(|t| t.key.starts_with("http://") || t.key.starts_with("https://"))?;
        self.splice_out(index).map(|t| t.key)
    }
}

impl<'a> IntoIterator for &'a Tokens {
    type Item = &'a Token;
    type IntoIter = slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.list.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Tokens {
        let mut t = Tokens::default();
        t.push("Linux", "");
        t.push("Android", "4.3");
        t.push("GT-I9300 Build", "JSS15J");
        t.push("Chrome", "59.0");
        t.push("Mobile Safari", "537.36");
        t.push("Chrome", "60.0");
        t
    }

    #[test]
    fn get_returns_first_match() {
        let t = sample();
        assert_eq!(t.get("Chrome"), "59.0");
        assert_eq!(t.get("Linux"), "");
        assert_eq!(t.get("Firefox"), "");
    }

    #[test]
    fn get_indexed() {
        let t = sample();
        assert_eq!(t.get_indexed("Android"), Some((1, "4.3")));
        assert_eq!(t.get_indexed("iPhone"), None);
    }

    #[test]
    fn get_non_empty_filters_bare_keys() {
        let t = sample();
        assert_eq!(t.get_non_empty("Linux"), None);
        assert_eq!(t.get_non_empty("Android"), Some("4.3"));
    }

    #[test]
    fn membership() {
        let t = sample();
        assert!(t.exists("Linux"));
        assert!(!t.exists("linux"));
        assert!(t.exists_any(&["Mobile", "Mobile Safari"]));
        assert!(t.has_mobile_marker());
        assert!(t.starts_with("GT-"));
        assert!(!t.starts_with("Instagram"));
    }

    #[test]
    fn splice_and_relabel() {
        let mut t = sample();
        let removed = t.splice_out(2).unwrap();
        assert_eq!(removed.key, "GT-I9300 Build");
        assert_eq!(t.len(), 5);
        assert_eq!(t.as_slice()[2].key, "Chrome");
        assert!(t.splice_out(42).is_none());

        t.relabel(0, "Tablet");
        assert!(t.exists("Tablet"));
        assert!(!t.exists("Linux"));
    }

    #[test]
    fn take_url_consumes_first_url() {
        let mut t = Tokens::default();
        t.push("Googlebot", "2.1");
        t.push("http://www.google.com/bot.html", "");
        t.push("https://example.com", "");
        assert_eq!(
            t.take_url().as_deref(),
            Some("http://www.google.com/bot.html")
        );
        assert_eq!(t.len(), 2);
        assert_eq!(t.take_url().as_deref(), Some("https://example.com"));
        assert_eq!(t.take_url(), None);
    }
}
