use std::collections::BTreeMap;

/// Minimum movie description length in characters.
pub const MIN_DESCRIPTION_LEN: usize = 10;

/// Valid star-rating bounds, inclusive. The upstream catalog rejected only
/// ratings outside 1..=6 while its error text claimed 1–5; the text wins here.
pub const STARS_MIN: i16 = 1;
pub const STARS_MAX: i16 = 5;

/// Field-scoped validation failures. Rules accumulate their violations here so
/// every broken rule is reported together instead of failing on the first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: BTreeMap<&'static str, Vec<String>>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.entry(field).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn as_map(&self) -> &BTreeMap<&'static str, Vec<String>> {
        &self.errors
    }
}

pub fn validate_director_name(name: &str, errors: &mut ValidationErrors) {
    if name.trim().is_empty() {
        errors.push("name", "Name is required.");
    }
}

pub fn validate_movie_title(title: &str, errors: &mut ValidationErrors) {
    if title.trim().is_empty() {
        errors.push("title", "Title is required.");
    }
}

pub fn validate_movie_description(description: &str, errors: &mut ValidationErrors) {
    if description.chars().count() < MIN_DESCRIPTION_LEN {
        errors.push(
            "description",
            "Description should be at least 10 characters long.",
        );
    }
}

pub fn validate_review_text(text: &str, errors: &mut ValidationErrors) {
    if text.trim().is_empty() {
        errors.push("text", "Review text cannot be empty.");
    }
}

pub fn validate_review_stars(stars: i16, errors: &mut ValidationErrors) {
    if !(STARS_MIN..=STARS_MAX).contains(&stars) {
        errors.push("stars", "Rating should be between 1 and 5.");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(f: impl FnOnce(&mut ValidationErrors)) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        f(&mut errors);
        errors
    }

    #[test]
    fn should_reject_empty_director_name() {
        let errors = run(|e| validate_director_name("", e));
        assert_eq!(errors.as_map()["name"], vec!["Name is required."]);
    }

    #[test]
    fn should_reject_whitespace_director_name() {
        assert!(!run(|e| validate_director_name("   ", e)).is_empty());
    }

    #[test]
    fn should_accept_director_name() {
        assert!(run(|e| validate_director_name("Nolan", e)).is_empty());
    }

    #[test]
    fn should_reject_nine_char_description() {
        let errors = run(|e| validate_movie_description("123456789", e));
        assert_eq!(
            errors.as_map()["description"],
            vec!["Description should be at least 10 characters long."]
        );
    }

    #[test]
    fn should_accept_ten_char_description() {
        assert!(run(|e| validate_movie_description("1234567890", e)).is_empty());
    }

    #[test]
    fn should_count_description_length_in_chars_not_bytes() {
        // 10 multi-byte characters
        assert!(run(|e| validate_movie_description("кинокартина", e)).is_empty());
    }

    #[test]
    fn should_reject_whitespace_only_review_text() {
        let errors = run(|e| validate_review_text("   ", e));
        assert_eq!(errors.as_map()["text"], vec!["Review text cannot be empty."]);
    }

    #[test]
    fn should_accept_review_text_with_surrounding_whitespace() {
        assert!(run(|e| validate_review_text("  great  ", e)).is_empty());
    }

    #[test]
    fn should_reject_zero_stars() {
        assert!(!run(|e| validate_review_stars(0, e)).is_empty());
    }

    #[test]
    fn should_reject_six_stars() {
        assert!(!run(|e| validate_review_stars(6, e)).is_empty());
    }

    #[test]
    fn should_accept_boundary_stars() {
        assert!(run(|e| validate_review_stars(1, e)).is_empty());
        assert!(run(|e| validate_review_stars(5, e)).is_empty());
    }

    #[test]
    fn should_accumulate_multiple_violations() {
        let mut errors = ValidationErrors::new();
        validate_movie_title("", &mut errors);
        validate_movie_description("short", &mut errors);
        assert_eq!(errors.as_map().len(), 2);
    }
}
