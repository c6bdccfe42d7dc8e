//! Topic phrases extracted from a claim

/// Upper bound on topics handed to the evidence fetcher
pub const MAX_TOPICS: usize = 3;

/// Ordered topic phrases, most salient first
///
/// Holds at most [`MAX_TOPICS`] entries; extra phrases are dropped on
/// construction. May be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TopicList(Vec<String>);

impl TopicList {
    /// Build a topic list from ranked phrases, keeping the first [`MAX_TOPICS`]
    pub fn from_ranked<I, S>(phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(phrases.into_iter().take(MAX_TOPICS).map(Into::into).collect())
    }

    /// Whether extraction yielded nothing
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of topics
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Topics as a slice, most salient first
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Space-joined search query
    pub fn to_query(&self) -> String {
        self.0.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncates_to_max() {
        let topics = TopicList::from_ranked(["a", "b", "c", "d", "e"]);
        assert_eq!(topics.len(), MAX_TOPICS);
        assert_eq!(topics.as_slice(), &["a", "b", "c"]);
    }

    #[test]
    fn test_query_joins_with_spaces() {
        let topics = TopicList::from_ranked(["tallest mountain", "mount everest"]);
        assert_eq!(topics.to_query(), "tallest mountain mount everest");
    }

    #[test]
    fn test_empty() {
        let topics = TopicList::from_ranked(Vec::<String>::new());
        assert!(topics.is_empty());
        assert_eq!(topics.to_query(), "");
    }
}
