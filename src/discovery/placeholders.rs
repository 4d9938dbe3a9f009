//! Placeholder scanning
//!
//! A path template is tokenized exactly once into [`Segment`]s. Both the
//! filtering glob and the extraction regex are rendered from the same segment
//! list, so what matches and what extracts cannot drift apart.

use indexmap::IndexMap;

use super::error::DiscoveryError;

/// Ordered map from placeholder name to its resolved value.
///
/// Insertion order is first-occurrence order in the template. `None` means
/// the placeholder was not bound, which callers read as "all values".
pub type PlaceholderSet = IndexMap<String, Option<String>>;

/// One token of a path template
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Literal text, matched verbatim
    Literal(String),
    /// `{name}` token
    Placeholder(String),
    /// `**`, any run of characters including `/`
    AnyPath,
    /// `*`, any run of characters except `/`
    AnySegment,
    /// `?`, exactly one character except `/`
    AnyChar,
}

impl Segment {
    #[must_use]
    pub const fn is_literal(&self) -> bool {
        matches!(self, Self::Literal(_))
    }
}

/// A tokenized path template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedPattern {
    source: String,
    segments: Vec<(usize, Segment)>,
}

impl ScannedPattern {
    /// Tokenize `pattern`.
    ///
    /// # Errors
    /// Returns `DiscoveryError::MalformedPattern` for an unclosed or nested `{`,
    /// a stray `}`, or an identifier that is empty or contains non-word characters.
    pub fn scan(pattern: &str) -> Result<Self, DiscoveryError> {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut literal_start = 0;
        let mut chars = pattern.char_indices().peekable();

        while let Some((idx, ch)) = chars.next() {
            let token = match ch {
                '{' => {
                    let mut name = String::new();
                    loop {
                        match chars.next() {
                            Some((_, '}')) => break,
                            Some((pos, '{')) => {
                                return Err(DiscoveryError::malformed(
                                    pattern,
                                    format!("nested '{{' at byte {pos}"),
                                ));
                            }
                            Some((_, c)) => name.push(c),
                            None => {
                                return Err(DiscoveryError::malformed(
                                    pattern,
                                    format!("unclosed placeholder at byte {idx}"),
                                ));
                            }
                        }
                    }
                    if name.is_empty() {
                        return Err(DiscoveryError::malformed(
                            pattern,
                            format!("empty placeholder at byte {idx}"),
                        ));
                    }
                    if !name.chars().all(is_word_char) {
                        return Err(DiscoveryError::malformed(
                            pattern,
                            format!("placeholder '{name}' must contain only word characters"),
                        ));
                    }
                    Segment::Placeholder(name)
                }
                '}' => {
                    return Err(DiscoveryError::malformed(
                        pattern,
                        format!("unmatched '}}' at byte {idx}"),
                    ));
                }
                '*' => {
                    if chars.next_if(|&(_, c)| c == '*').is_some() {
                        Segment::AnyPath
                    } else {
                        Segment::AnySegment
                    }
                }
                '?' => Segment::AnyChar,
                _ => {
                    if literal.is_empty() {
                        literal_start = idx;
                    }
                    literal.push(ch);
                    continue;
                }
            };

            if !literal.is_empty() {
                segments.push((literal_start, Segment::Literal(std::mem::take(&mut literal))));
            }
            segments.push((idx, token));
        }

        if !literal.is_empty() {
            segments.push((literal_start, Segment::Literal(literal)));
        }

        Ok(Self {
            source: pattern.to_string(),
            segments,
        })
    }

    /// Anchor the template under `root` without rescanning it.
    ///
    /// The root is taken literally, so braces or wildcards in a directory
    /// name are never mistaken for tokens.
    #[must_use]
    pub fn under_root(&self, root: &str) -> Self {
        let mut prefix = root.trim_end_matches('/').to_string();
        prefix.push('/');
        let shift = prefix.len();

        let mut segments = Vec::with_capacity(self.segments.len() + 1);
        match self.segments.first() {
            Some((_, Segment::Literal(text))) => {
                segments.push((0, Segment::Literal(format!("{prefix}{text}"))));
                segments.extend(self.segments[1..].iter().map(|(i, s)| (i + shift, s.clone())));
            }
            _ => {
                segments.push((0, Segment::Literal(prefix.clone())));
                segments.extend(self.segments.iter().map(|(i, s)| (i + shift, s.clone())));
            }
        }

        Self {
            source: format!("{prefix}{}", self.source),
            segments,
        }
    }

    /// The template text as given
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Tokens in template order
    pub fn segments(&self) -> impl Iterator<Item = &Segment> {
        self.segments.iter().map(|(_, s)| s)
    }

    /// Placeholder names per occurrence, duplicates included
    pub fn occurrences(&self) -> impl Iterator<Item = &str> {
        self.segments().filter_map(|s| match s {
            Segment::Placeholder(name) => Some(name.as_str()),
            _ => None,
        })
    }

    /// Placeholder names deduplicated by first occurrence
    #[must_use]
    pub fn placeholder_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for name in self.occurrences() {
            if !names.contains(&name) {
                names.push(name);
            }
        }
        names
    }

    /// Fresh set with every declared placeholder unbound
    #[must_use]
    pub fn placeholder_set(&self) -> PlaceholderSet {
        self.placeholder_names()
            .into_iter()
            .map(|name| (name.to_string(), None))
            .collect()
    }

    #[must_use]
    pub fn has_placeholders(&self) -> bool {
        self.occurrences().next().is_some()
    }

    /// Byte offset of the first placeholder or wildcard.
    ///
    /// Everything before it is literal. `None` when the whole template is literal.
    #[must_use]
    pub fn literal_prefix_len(&self) -> Option<usize> {
        self.segments
            .iter()
            .find(|(_, s)| !s.is_literal())
            .map(|(idx, _)| *idx)
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_orders_placeholders_by_first_occurrence() {
        let scanned = ScannedPattern::scan("translations/{namespace}/{language}.json").unwrap();
        assert_eq!(scanned.placeholder_names(), vec!["namespace", "language"]);
        let set = scanned.placeholder_set();
        let keys: Vec<&String> = set.keys().collect();
        assert_eq!(keys, vec!["namespace", "language"]);
        assert!(set.values().all(Option::is_none));
    }

    #[test]
    fn test_scan_keeps_duplicate_occurrences() {
        let scanned = ScannedPattern::scan("{lang}/messages_{lang}.po").unwrap();
        assert_eq!(scanned.occurrences().collect::<Vec<_>>(), vec!["lang", "lang"]);
        assert_eq!(scanned.placeholder_names(), vec!["lang"]);
    }

    #[test]
    fn test_scan_segments() {
        let scanned = ScannedPattern::scan("src/**/*.{ext}?").unwrap();
        let segments: Vec<&Segment> = scanned.segments().collect();
        assert_eq!(
            segments,
            vec![
                &Segment::Literal("src/".into()),
                &Segment::AnyPath,
                &Segment::Literal("/".into()),
                &Segment::AnySegment,
                &Segment::Literal(".".into()),
                &Segment::Placeholder("ext".into()),
                &Segment::AnyChar,
            ]
        );
    }

    #[test]
    fn test_literal_prefix_len() {
        let scanned = ScannedPattern::scan("i18n/{namespace}/{language}.json").unwrap();
        assert_eq!(scanned.literal_prefix_len(), Some(5));

        let literal = ScannedPattern::scan("i18n/en.json").unwrap();
        assert_eq!(literal.literal_prefix_len(), None);
        assert!(!literal.has_placeholders());
    }

    #[test]
    fn test_unbalanced_braces_are_rejected() {
        for pattern in ["a/{language", "a/language}.json", "a/{lan{g}}", "a/{}", "a/{lang-code}"] {
            let err = ScannedPattern::scan(pattern).unwrap_err();
            assert!(
                matches!(err, DiscoveryError::MalformedPattern { .. }),
                "expected MalformedPattern for {pattern}"
            );
        }
    }

    #[test]
    fn test_under_root_treats_root_literally() {
        let scanned = ScannedPattern::scan("{language}.json").unwrap();
        let rooted = scanned.under_root("/tmp/odd {dir}*/");
        assert_eq!(rooted.source(), "/tmp/odd {dir}*/{language}.json");
        assert_eq!(rooted.placeholder_names(), vec!["language"]);
        assert_eq!(rooted.literal_prefix_len(), Some("/tmp/odd {dir}*/".len()));

        let merged = ScannedPattern::scan("locales/{language}.json").unwrap().under_root("/srv");
        assert_eq!(
            merged.segments().next(),
            Some(&Segment::Literal("/srv/locales/".into()))
        );
        assert_eq!(merged.literal_prefix_len(), Some("/srv/locales/".len()));
    }

    #[test]
    fn test_multibyte_offsets() {
        let scanned = ScannedPattern::scan("übersetzungen/{language}.json").unwrap();
        let idx = scanned.literal_prefix_len().unwrap();
        assert_eq!(&scanned.source()[..idx], "übersetzungen/");
    }
}
