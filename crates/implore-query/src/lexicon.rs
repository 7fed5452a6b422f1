//! Concept lexicon (concept key → synonyms).
//!
//! Matching is literal, case-sensitive substring containment against the raw
//! query. There is no tokenization, so `schoolyard` matches the `schools`
//! concept through its `school` synonym.

/// A concept key and the surface strings that also indicate it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Concept {
    pub key: String,
    pub synonyms: Vec<String>,
}

impl Concept {
    /// Create a concept, dropping repeated synonyms.
    pub fn new<I, S>(key: impl Into<String>, synonyms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut unique: Vec<String> = Vec::new();
        for synonym in synonyms {
            let synonym = synonym.into();
            if !unique.contains(&synonym) {
                unique.push(synonym);
            }
        }
        Self {
            key: key.into(),
            synonyms: unique,
        }
    }

    /// Whether the key itself or any synonym occurs in `query`.
    pub fn matches(&self, query: &str) -> bool {
        query.contains(self.key.as_str())
            || self.synonyms.iter().any(|s| query.contains(s.as_str()))
    }
}

/// Ordered mapping from concept keys to synonym sets.
///
/// Iteration follows insertion order, which is also the order matched keys
/// appear in an interpretation's `layers`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lexicon {
    concepts: Vec<Concept>,
}

impl Lexicon {
    /// Create an empty lexicon.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in layer lexicon.
    pub fn builtin() -> Self {
        let mut lexicon = Self::new();
        lexicon.insert("schools", ["school", "education", "academy"]);
        lexicon.insert("parks", ["park", "garden", "recreation"]);
        lexicon
    }

    /// Add a concept.
    ///
    /// An existing key keeps its position and has its synonyms replaced; the
    /// previous synonyms are returned.
    pub fn insert<I, S>(&mut self, key: impl Into<String>, synonyms: I) -> Option<Vec<String>>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let concept = Concept::new(key, synonyms);
        match self.concepts.iter_mut().find(|c| c.key == concept.key) {
            Some(existing) => Some(std::mem::replace(&mut existing.synonyms, concept.synonyms)),
            None => {
                self.concepts.push(concept);
                None
            }
        }
    }

    /// Look up a concept by key.
    pub fn get(&self, key: &str) -> Option<&Concept> {
        self.concepts.iter().find(|c| c.key == key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Concept keys in lexicon order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.concepts.iter().map(|c| c.key.as_str())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Concept> {
        self.concepts.iter()
    }

    pub fn len(&self) -> usize {
        self.concepts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.concepts.is_empty()
    }

    /// Keys of every concept mentioned in `query`, in lexicon order.
    pub fn matching<'a>(&'a self, query: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.concepts
            .iter()
            .filter(move |c| c.matches(query))
            .map(|c| c.key.as_str())
    }
}

impl<'a> IntoIterator for &'a Lexicon {
    type Item = &'a Concept;
    type IntoIter = std::slice::Iter<'a, Concept>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_order() {
        let lexicon = Lexicon::builtin();
        assert_eq!(lexicon.keys().collect::<Vec<_>>(), vec!["schools", "parks"]);
        assert_eq!(
            lexicon.get("parks").unwrap().synonyms,
            vec!["park", "garden", "recreation"]
        );
    }

    #[test]
    fn key_or_synonym_matches() {
        let lexicon = Lexicon::builtin();
        assert_eq!(lexicon.matching("all schools").collect::<Vec<_>>(), ["schools"]);
        assert_eq!(lexicon.matching("an academy").collect::<Vec<_>>(), ["schools"]);
        assert_eq!(lexicon.matching("nothing here").count(), 0);
    }

    #[test]
    fn substring_not_word_boundary() {
        let lexicon = Lexicon::builtin();
        assert_eq!(lexicon.matching("the schoolyard").collect::<Vec<_>>(), ["schools"]);
        assert_eq!(lexicon.matching("parking lots").collect::<Vec<_>>(), ["parks"]);
    }

    #[test]
    fn case_sensitive() {
        let lexicon = Lexicon::builtin();
        assert_eq!(lexicon.matching("Parks and Schools").count(), 0);
    }

    #[test]
    fn reinsert_keeps_position() {
        let mut lexicon = Lexicon::builtin();
        let previous = lexicon.insert("schools", ["college"]);
        assert_eq!(
            previous,
            Some(vec![
                "school".to_string(),
                "education".to_string(),
                "academy".to_string()
            ])
        );
        assert_eq!(lexicon.keys().collect::<Vec<_>>(), vec!["schools", "parks"]);
        assert!(lexicon.matching("a college").any(|k| k == "schools"));
        assert_eq!(lexicon.matching("an academy").count(), 0);
    }

    #[test]
    fn insert_owned_key() {
        let mut lexicon = Lexicon::new();
        let key = String::from("rivers");
        assert_eq!(lexicon.insert(key, vec![String::from("stream")]), None);
        assert_eq!(
            lexicon.insert(String::from("rivers"), ["creek"]),
            Some(vec!["stream".to_string()])
        );
        assert_eq!(lexicon.len(), 1);
        assert!(lexicon.matching("a creek").any(|k| k == "rivers"));
    }

    #[test]
    fn repeated_synonyms_collapse() {
        let concept = Concept::new("lakes", ["lake", "pond", "lake"]);
        assert_eq!(concept.synonyms, vec!["lake", "pond"]);
    }

    #[test]
    fn empty_lexicon_matches_nothing() {
        let lexicon = Lexicon::new();
        assert!(lexicon.is_empty());
        assert_eq!(lexicon.matching("parks and schools").count(), 0);
    }
}
