use colored::Colorize;
use lazy_static::lazy_static;
use regex::Regex;

use roman_calc::Answer;

lazy_static! {
    static ref QUOTED_TEXT: Regex = Regex::new(r"`([^`]*)`").unwrap();
}

fn transform_quoted_text<F: Fn(&str) -> String>(s: &str, transform: F) -> String {
    let mut result = String::new();
    let mut last_match_end = 0;

    for capture in QUOTED_TEXT.captures_iter(s) {
        let (Some(whole), Some(inner)) = (capture.get(0), capture.get(1)) else {
            continue;
        };

        result.push_str(&s[last_match_end..whole.start()]);
        result.push_str(&transform(inner.as_str()));
        last_match_end = whole.end();
    }

    result.push_str(&s[last_match_end..]);
    result
}

pub struct ColoredAnswer {
    answer: Answer,
}

impl ColoredAnswer {
    pub fn new(answer: Answer) -> Self {
        Self { answer }
    }
}

impl std::fmt::Display for ColoredAnswer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.answer {
            Answer::Roman(numeral) => write!(f, "{}", numeral.to_string().bright_blue()),
            Answer::Arabic(value) => write!(f, "{}", value.to_string().bright_green()),
        }
    }
}

#[derive(Debug)]
pub struct ColoredError<T: std::error::Error> {
    error: T,
}

impl<T: std::error::Error> ColoredError<T> {
    pub fn new(error: T) -> Self {
        Self { error }
    }
}

impl<T: std::error::Error> std::fmt::Display for ColoredError<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let highlight = |s: &str| s.bright_yellow().to_string();
        write!(f, "{}", transform_quoted_text(&self.error.to_string(), highlight))
    }
}

#[cfg(test)]
mod tests {
    use super::transform_quoted_text;

    #[test]
    fn test_transform_quoted_text() {
        let upper = |s: &str| s.to_uppercase();
        assert_eq!(
            transform_quoted_text("Invalid input format: `abc`", upper),
            "Invalid input format: ABC"
        );
        assert_eq!(transform_quoted_text("`i` and `v`!", upper), "I and V!");
        assert_eq!(transform_quoted_text("no quotes", upper), "no quotes");
    }
}
