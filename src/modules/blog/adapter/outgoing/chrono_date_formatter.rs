use crate::modules::blog::application::ports::outgoing::DateFormatter;
use crate::modules::content::domain::validation::parse_post_date;

/// Formats dates with chrono, accepting the date-fns style patterns the
/// content document uses (`yyyy`, `MMMM`, `dd`, `EEE`, quoted literals).
#[derive(Debug, Clone, Copy, Default)]
pub struct ChronoDateFormatter;

impl ChronoDateFormatter {
    fn token(letter: char, run: usize) -> Option<&'static str> {
        let spec = match (letter, run) {
            ('y', 2) => "%y",
            ('y', _) => "%Y",
            ('M', 1) => "%-m",
            ('M', 2) => "%m",
            ('M', 3) => "%b",
            ('M', _) => "%B",
            ('d', 1) => "%-d",
            ('d', _) => "%d",
            ('E', 1..=3) => "%a",
            ('E', _) => "%A",
            _ => return None,
        };
        Some(spec)
    }

    fn push_literal(out: &mut String, ch: char) {
        if ch == '%' {
            out.push_str("%%");
        } else {
            out.push(ch);
        }
    }

    /// Translates a date-fns pattern into a strftime string.
    pub fn to_strftime(pattern: &str) -> String {
        let chars: Vec<char> = pattern.chars().collect();
        let mut out = String::with_capacity(pattern.len() * 2);
        let mut i = 0;

        while i < chars.len() {
            let ch = chars[i];

            if ch == '\'' {
                i += 1;
                while i < chars.len() && chars[i] != '\'' {
                    Self::push_literal(&mut out, chars[i]);
                    i += 1;
                }
                i += 1;
                continue;
            }

            let mut run = 1;
            while i + run < chars.len() && chars[i + run] == ch {
                run += 1;
            }

            match Self::token(ch, run) {
                Some(spec) => out.push_str(spec),
                None => (0..run).for_each(|_| Self::push_literal(&mut out, ch)),
            }
            i += run;
        }

        out
    }
}

impl DateFormatter for ChronoDateFormatter {
    fn format(&self, date: &str, pattern: &str) -> String {
        match parse_post_date(date) {
            Some(parsed) => parsed.format(&Self::to_strftime(pattern)).to_string(),
            None => date.to_string(),
        }
    }
}
