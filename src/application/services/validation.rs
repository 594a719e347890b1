//! Field checks applied before anything reaches a repository.

use chrono::NaiveDate;

use crate::domain::{DomainError, Film, User};

/// Longest accepted film description, in characters.
pub const MAX_DESCRIPTION_LENGTH: usize = 200;

/// Date of the first public film screening. Nothing can be released earlier.
pub fn earliest_release_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1895, 12, 28).unwrap_or(NaiveDate::MIN)
}

pub fn validate_user(user: &User, today: NaiveDate) -> Result<(), DomainError> {
    if user.email().trim().is_empty() || !user.email().contains('@') {
        return Err(DomainError::invalid_input(format!(
            "email must be present and contain '@', got '{}'",
            user.email()
        )));
    }
    if user.login().is_empty() || user.login().chars().any(char::is_whitespace) {
        return Err(DomainError::invalid_input(
            "login must not be empty or contain whitespace",
        ));
    }
    if user.birthday() > today {
        return Err(DomainError::invalid_input(format!(
            "birthday cannot be in the future, got {}",
            user.birthday()
        )));
    }
    Ok(())
}

pub fn validate_film(film: &Film) -> Result<(), DomainError> {
    if film.name().trim().is_empty() {
        return Err(DomainError::invalid_input("film name cannot be blank"));
    }
    let description_length = film.description().chars().count();
    if description_length > MAX_DESCRIPTION_LENGTH {
        return Err(DomainError::invalid_input(format!(
            "description is limited to {} characters, got {}",
            MAX_DESCRIPTION_LENGTH, description_length
        )));
    }
    let earliest = earliest_release_date();
    if film.release_date() < earliest {
        return Err(DomainError::invalid_input(format!(
            "release date cannot be earlier than {}, got {}",
            earliest,
            film.release_date()
        )));
    }
    if film.duration() <= 0 {
        return Err(DomainError::invalid_input(format!(
            "duration must be positive, got {}",
            film.duration()
        )));
    }
    Ok(())
}
