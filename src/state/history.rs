use super::data::GenerationRecord;

/// The History store keeps every QR code generated this session.
/// Records are kept in insertion order (most recent last) and live
/// only in memory.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct History {
    records: Vec<GenerationRecord>,
}

impl History {
    /// Add a record to the end. Duplicate text is allowed.
    pub fn append(&mut self, record: GenerationRecord) {
        self.records.push(record);
    }

    /// Remove the record at `index`, shifting later records down.
    /// Out-of-range indexes are ignored.
    pub fn remove_at(&mut self, index: usize) -> Option<GenerationRecord> {
        if index < self.records.len() {
            Some(self.records.remove(index))
        } else {
            None
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&GenerationRecord> {
        self.records.get(index)
    }

    /// All records, oldest first
    pub fn all(&self) -> &[GenerationRecord] {
        &self.records
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::data::ImageArtifact;
    use crate::validate::validate;

    fn record(text: &str) -> GenerationRecord {
        GenerationRecord::new(validate(text).unwrap(), ImageArtifact::from_png(vec![0], 1))
    }

    fn texts(history: &History) -> Vec<&str> {
        history.all().iter().map(|r| r.source_text()).collect()
    }

    fn filled(n: usize) -> History {
        let mut history = History::default();
        for i in 0..n {
            history.append(record(&format!("item {i}")));
        }
        history
    }

    #[test]
    fn test_append_keeps_order_and_duplicates() {
        let mut history = History::default();
        history.append(record("a"));
        history.append(record("b"));
        history.append(record("a"));
        assert_eq!(texts(&history), vec!["a", "b", "a"]);
        assert_eq!(history.len(), 3);
    }

    #[test]
    fn test_remove_middle() {
        let mut history = filled(3);
        let removed = history.remove_at(1).unwrap();
        assert_eq!(removed.source_text(), "item 1");
        assert_eq!(texts(&history), vec!["item 0", "item 2"]);
    }

    #[test]
    fn test_remove_out_of_bounds_is_noop() {
        let mut history = filled(2);
        assert!(history.remove_at(2).is_none());
        assert!(history.remove_at(usize::MAX).is_none());
        assert_eq!(history.len(), 2);

        let mut empty = History::default();
        assert!(empty.remove_at(0).is_none());
        assert!(empty.is_empty());
    }

    #[test]
    fn test_removals_in_any_order_preserve_relative_order() {
        // Each pattern lists original indexes to remove, in removal order
        let patterns: [&[usize]; 4] = [&[0, 2, 4], &[5, 0, 3], &[3, 3, 3], &[1, 4, 0, 5, 2]];

        for pattern in patterns {
            let mut history = filled(6);
            let mut alive: Vec<usize> = (0..6).collect();

            for &original in pattern {
                let Some(position) = alive.iter().position(|&i| i == original) else {
                    continue;
                };
                history.remove_at(position);
                alive.remove(position);
            }

            let expected: Vec<String> = alive.iter().map(|i| format!("item {i}")).collect();
            assert_eq!(texts(&history), expected, "pattern {pattern:?}");
        }
    }

    #[test]
    fn test_all_is_idempotent() {
        let history = filled(4);
        let first = history.all().to_vec();
        let second = history.all().to_vec();
        assert_eq!(first, second);
    }
}
