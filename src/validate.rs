use serde::Serialize;

use crate::entity::review::Rating;

/// A review submission that passed validation.
#[derive(Clone, Debug, PartialEq)]
pub struct ReviewInput {
    pub name: String,
    pub comment: String,
    pub rating: Rating,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

const REQUIRED: &str = "This field is required.";
const INVALID_CHOICE: &str = "Not a valid choice.";

/// Checks the raw review form fields. Returns the trimmed values when all
/// three are present and the rating is one of `good`/`bad`, otherwise one
/// error per failed field.
pub fn validate_review(
    name: &str,
    comment: &str,
    rating: &str,
) -> Result<ReviewInput, Vec<FieldError>> {
    let mut errors = Vec::new();

    let name = name.trim();
    if name.is_empty() {
        errors.push(FieldError {
            field: "name",
            message: REQUIRED,
        });
    }

    let comment = comment.trim();
    if comment.is_empty() {
        errors.push(FieldError {
            field: "comment",
            message: REQUIRED,
        });
    }

    let rating = match rating.trim() {
        "good" => Some(Rating::Good),
        "bad" => Some(Rating::Bad),
        "" => {
            errors.push(FieldError {
                field: "rating",
                message: REQUIRED,
            });
            None
        }
        _ => {
            errors.push(FieldError {
                field: "rating",
                message: INVALID_CHOICE,
            });
            None
        }
    };

    match rating {
        Some(rating) if errors.is_empty() => Ok(ReviewInput {
            name: name.to_string(),
            comment: comment.to_string(),
            rating,
        }),
        _ => Err(errors),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_a_complete_submission() {
        let input = validate_review("Alice", "Great crust", "good").unwrap();
        assert_eq!(input.name, "Alice");
        assert_eq!(input.comment, "Great crust");
        assert_eq!(input.rating, Rating::Good);
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let input = validate_review("  Bob ", " soggy base\n", "bad").unwrap();
        assert_eq!(input.name, "Bob");
        assert_eq!(input.comment, "soggy base");
        assert_eq!(input.rating, Rating::Bad);
    }

    #[test]
    fn rejects_empty_name() {
        let errors = validate_review("", "x", "good").unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "name");
        assert_eq!(errors[0].message, REQUIRED);
    }

    #[test]
    fn rejects_whitespace_only_comment() {
        let errors = validate_review("Alice", "   ", "bad").unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "comment");
    }

    #[test]
    fn rejects_unknown_rating() {
        let errors = validate_review("Alice", "fine", "excellent").unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "rating");
        assert_eq!(errors[0].message, INVALID_CHOICE);
    }

    #[test]
    fn reports_every_missing_field() {
        let errors = validate_review("", "", "").unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, ["name", "comment", "rating"]);
        assert!(errors.iter().all(|e| e.message == REQUIRED));
    }
}
