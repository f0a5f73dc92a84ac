// Copyright (C) 2020-2026 Andy Kurnia.

use super::{error, trie};

fn normalize_word(s: &str) -> error::Returns<Option<String>> {
    let s = s.trim();
    if s.is_empty() {
        return Ok(None);
    }
    if s.chars().any(char::is_whitespace) {
        return_error!(format!("invalid word {:?}", s));
    }
    Ok(Some(s.to_lowercase()))
}

fn sorted_words(mut words: Vec<String>) -> Box<[String]> {
    words.sort_unstable();
    words.dedup();
    words.into_boxed_slice()
}

// one word per line.
pub fn read_words(giant_string: &str) -> error::Returns<Box<[String]>> {
    let mut words = Vec::new();
    for s in giant_string.lines() {
        if let Some(word) = normalize_word(s)? {
            words.push(word);
        }
    }
    Ok(sorted_words(words))
}

// the word is the first column, other columns are ignored.
pub fn read_words_csv<R: std::io::Read>(f: R) -> error::Returns<Box<[String]>> {
    let mut words = Vec::new();
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(f);
    for result in csv_reader.records() {
        let record = result?;
        if let Some(word) = normalize_word(record.get(0).unwrap_or(""))? {
            words.push(word);
        }
    }
    Ok(sorted_words(words))
}

pub fn build<S: AsRef<str>>(words: &[S]) -> trie::Trie {
    let trie = words.iter().collect::<trie::Trie>();
    tracing::info!(num_words = trie.len(), "built dictionary");
    trie
}

// .csv files are read as csv, everything else as plain text.
pub fn read_words_from_path(path: &str) -> error::Returns<Box<[String]>> {
    if path.ends_with(".csv") {
        read_words_csv(std::fs::File::open(path)?)
    } else {
        read_words(&std::fs::read_to_string(path)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_words_are_cleaned() {
        let words = read_words("Zehn\n\n  zahn \nzehn\r\nacht\n").unwrap();
        assert_eq!(&words[..], &["acht", "zahn", "zehn"]);
        assert!(read_words("zwei worte\n").is_err());
        assert!(read_words("").unwrap().is_empty());
    }

    #[test]
    fn csv_takes_first_column() {
        let words = read_words_csv("zehn,10\nACHT,8\n\nelf\n".as_bytes()).unwrap();
        assert_eq!(&words[..], &["acht", "elf", "zehn"]);
        assert!(read_words_csv("\"neun zehn\",19\n".as_bytes()).is_err());
    }

    #[test]
    fn build_inserts_every_word() {
        let trie = build(&read_words("zehn\nzahn\nzeh\n").unwrap());
        assert_eq!(trie.len(), 3);
        assert!(trie.contains("zeh"));
        assert!(trie.contains("zahn"));
        assert!(!trie.contains("ze"));
    }
}
