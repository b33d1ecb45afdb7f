
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::time::Instant;

use anyhow::Context;
use log::{debug, info};

use crate::counter::WordCounter;
use crate::BenchReport;

// The input file is fixed, every benchmark binary reads the same one
pub const WORDS_PATH: &str = "words.txt";

pub fn tokenize(line: &str) -> impl Iterator<Item = &str> {
    line.split_whitespace()
}

pub fn count_words<C, R>(reader: R, counter: &mut C) -> io::Result<()>
where
    C: WordCounter,
    R: BufRead,
{
    let mut lines = 0u64;
    for line in reader.lines() {
        for word in tokenize(&line?) {
            counter.add(word);
        }
        lines += 1;
    }
    debug!("[Benchmark] Processed #{} line(s) of input", lines);
    Ok(())
}

pub fn run<C>(path: &Path) -> anyhow::Result<BenchReport>
where
    C: WordCounter,
{
    let file = File::open(path)
        .with_context(|| format!("Failed to open input file `{}`", path.display()))?;
    let mut counter = C::default();
    count_words(BufReader::new(file), &mut counter)
        .with_context(|| format!("Failed to read input file `{}`", path.display()))?;
    Ok(BenchReport::new(counter.distinct(), counter.total()))
}

pub fn bench<C>() -> anyhow::Result<()>
where
    C: WordCounter,
{
    let start = Instant::now();
    let report = run::<C>(Path::new(WORDS_PATH))?;
    println!("{}", report.distinct);
    println!("{}", report.total);
    println!("{}", start.elapsed().as_secs_f32());
    info!(
        "[Benchmark] Counted #{} distinct word(s), #{} word(s) in total",
        report.distinct, report.total
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::io::Cursor;

    use super::*;

    fn count(input: &str) -> BenchReport {
        let mut counter = HashMap::<String, u64>::default();
        count_words(Cursor::new(input), &mut counter).unwrap();
        BenchReport::new(counter.distinct(), counter.total())
    }

    #[test]
    fn tokenize_splits_on_whitespace_runs() {
        let words = tokenize(" a\t bb   c ").collect::<Vec<&str>>();
        assert_eq!(words, vec!["a", "bb", "c"]);
    }

    #[test]
    fn tokenize_yields_nothing_for_blank_line() {
        assert_eq!(tokenize(" \t ").count(), 0);
    }

    #[test]
    fn counts_repeated_words() {
        let report = count("a b a\nc a\n");
        assert_eq!(report.distinct, 3);
        assert_eq!(report.total, 4);
    }

    #[test]
    fn empty_input_counts_nothing() {
        assert_eq!(count(""), BenchReport::new(0, 0));
    }

    #[test]
    fn whitespace_only_input_counts_nothing() {
        assert_eq!(count(" \n\t\n   \n"), BenchReport::new(0, 0));
    }

    #[test]
    fn total_matches_token_count() {
        let input = "the quick brown fox jumps over the lazy dog\nthe end\n";
        let tokens = input.lines().flat_map(tokenize).count() as u64;
        let report = count(input);
        assert_eq!(report.total, tokens);
        assert_eq!(report.distinct, 9);
    }

    #[test]
    fn run_fails_on_missing_file() {
        let err = run::<HashMap<String, u64>>(Path::new("no-such-words.txt")).unwrap_err();
        assert!(err.to_string().contains("no-such-words.txt"));
    }
}
