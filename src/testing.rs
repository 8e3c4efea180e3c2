//! Sample word lists shared by unit tests.

use crate::content::WordStore;
use crate::domain::Entry;

/// Four words, two with examples
pub fn sample_store() -> WordStore {
  store(vec![
    Entry::new("abate", "to lessen", Some("The storm abated by morning.".to_string())),
    Entry::new("zenith", "peak", None),
    Entry::new("laconic", "using very few words", Some("His laconic reply ended the talk.".to_string())),
    Entry::new("obdurate", "stubbornly refusing to change", None),
  ])
}

/// The two-word list used by the exhaustion scenarios
pub fn two_word_store() -> WordStore {
  store(vec![
    Entry::new("abate", "to lessen", None),
    Entry::new("zenith", "peak", None),
  ])
}

pub fn single_word_store() -> WordStore {
  store(vec![Entry::new("abate", "to lessen", None)])
}

fn store(entries: Vec<Entry>) -> WordStore {
  WordStore::from_entries(entries).expect("sample entries are non-empty")
}
