//! Loading word lists (one word per line) into a DAWG.
//!
//! Lines whose first non-blank character is `#` are comments. Blank lines are
//! skipped and trailing whitespace is trimmed.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use super::builder::Builder;
use super::error::LoadError;
use super::index::Dawg;

/// Options controlling how a word list is read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadOptions {
    /// Sort and deduplicate the words before building. Without this the list
    /// must already be sorted.
    pub sort: bool,
    /// Lowercase every word before building.
    pub lowercase: bool,
}

impl LoadOptions {
    /// True if the words can stream straight into the builder.
    fn is_streaming(&self) -> bool {
        !self.sort && !self.lowercase
    }
}

/// Returns true if this line is a comment.
pub fn is_comment(line: &str) -> bool {
    line.trim_start().starts_with('#')
}

/// Reads every word from `reader`, applying `options`.
pub fn read_words(reader: impl BufRead, options: &LoadOptions) -> io::Result<Vec<String>> {
    let mut words = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let word = line.trim_end();
        if word.is_empty() || is_comment(word) {
            continue;
        }
        words.push(if options.lowercase {
            word.to_lowercase()
        } else {
            word.to_owned()
        });
    }
    if options.sort {
        words.sort_unstable();
        words.dedup();
    }
    Ok(words)
}

/// Builds a DAWG from a word list read from `reader`.
///
/// # Examples
///
/// ```
/// use prefix_dawg::dawg::wordlist::{build_dawg_from_reader, LoadOptions};
///
/// let list = "# fruit\nbanana\napple\n\ncherry\n";
/// let options = LoadOptions { sort: true, ..LoadOptions::default() };
/// let dawg = build_dawg_from_reader(list.as_bytes(), &options).unwrap();
/// assert_eq!(dawg.words_with_prefix(""), ["apple", "banana", "cherry"]);
/// ```
#[tracing::instrument(level = "debug", skip_all, fields(sort = options.sort, lowercase = options.lowercase))]
pub fn build_dawg_from_reader(
    mut reader: impl BufRead,
    options: &LoadOptions,
) -> Result<Dawg<char>, LoadError> {
    let mut builder = Builder::new();
    if options.is_streaming() {
        // read_line into one reused buffer avoids allocating a String per line.
        let mut buf = String::with_capacity(80);
        while reader.read_line(&mut buf)? > 0 {
            let word = buf.trim_end();
            if !word.is_empty() && !is_comment(word) {
                builder.insert(word)?;
            }
            buf.clear();
        }
    } else {
        for word in read_words(reader, options)? {
            builder.insert(word)?;
        }
    }
    tracing::debug!(words = builder.word_count(), "word list read");
    Ok(builder.finish())
}

/// Builds a DAWG from a word list file.
///
/// # Examples
///
/// ```no_run
/// use prefix_dawg::dawg::wordlist::{build_dawg_from_file, LoadOptions};
///
/// let dawg = build_dawg_from_file("wordlist.txt", &LoadOptions::default()).unwrap();
/// ```
#[tracing::instrument(level = "debug", skip_all, fields(path = %path.as_ref().display()))]
pub fn build_dawg_from_file(
    path: impl AsRef<Path>,
    options: &LoadOptions,
) -> Result<Dawg<char>, LoadError> {
    let file = File::open(path.as_ref())?;
    build_dawg_from_reader(BufReader::new(file), options)
}

#[cfg(test)]
mod test {
    use std::io::Write;

    use super::super::error::DawgError;
    use super::*;

    #[test]
    fn comment_that_starts_with_pound() {
        assert!(is_comment("# This is a comment"));
    }

    #[test]
    fn comment_with_whitespace_before_pound() {
        assert!(is_comment("        # This is a comment with whitespace"));
    }

    #[test]
    fn non_comment() {
        assert!(!is_comment("REVERBERATE"));
    }

    #[test]
    fn non_comment_whitespace() {
        assert!(!is_comment(" REVERBERATE"));
    }

    #[test]
    fn read_words_skips_blanks_and_comments() {
        let list = "alpha\n# note\n\n  \nbeta  \r\ngamma";
        let words = read_words(list.as_bytes(), &LoadOptions::default()).unwrap();
        assert_eq!(words, ["alpha", "beta", "gamma"]);
    }

    #[test]
    fn read_words_sorts_and_lowercases() {
        let list = "Zulu\nalfa\nALFA\nbravo\n";
        let options = LoadOptions {
            sort: true,
            lowercase: true,
        };
        let words = read_words(list.as_bytes(), &options).unwrap();
        assert_eq!(words, ["alfa", "bravo", "zulu"]);
    }

    #[test]
    fn streaming_rejects_unsorted_list() {
        let list = "bravo\nalfa\n";
        let err = build_dawg_from_reader(list.as_bytes(), &LoadOptions::default()).unwrap_err();
        match err {
            LoadError::Build(DawgError::OutOfOrder { previous, word }) => {
                assert_eq!(previous, "bravo".chars().collect::<Vec<_>>());
                assert_eq!(word, "alfa".chars().collect::<Vec<_>>());
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn sorting_accepts_unsorted_list() {
        let list = "bravo\nalfa\nbravo\n";
        let options = LoadOptions {
            sort: true,
            ..LoadOptions::default()
        };
        let dawg = build_dawg_from_reader(list.as_bytes(), &options).unwrap();
        assert_eq!(dawg.word_count(), 2);
        assert!(dawg.contains("alfa"));
        assert!(dawg.contains("bravo"));
    }

    #[test]
    fn all_words_from_file() {
        let words = ["BAKE", "BAKED", "BAKER", "CAKE", "CAKED", "FAKE", "LAKE", "ÅTMINSTONE"];
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# sorted word list").unwrap();
        for word in words {
            writeln!(file, "{word}").unwrap();
        }
        file.flush().unwrap();

        let dawg = build_dawg_from_file(file.path(), &LoadOptions::default()).unwrap();
        for word in words {
            assert!(dawg.contains(word), "{word}");
        }
        assert!(!dawg.contains("# sorted word list"));
        assert!(!dawg.contains("ÅTMINSTON"));
        assert!(!dawg.contains("BAKERS"));
        assert_eq!(dawg.word_count(), words.len());
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = build_dawg_from_file(dir.path().join("missing.txt"), &LoadOptions::default())
            .unwrap_err();
        assert!(matches!(err, LoadError::Io(_)));
    }
}
