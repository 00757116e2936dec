//! Value generators for the individual placeholder kinds.
//!
//! Every generator that consumes randomness takes a `&mut impl Rng` so the
//! caller decides the random source: the thread-local generator in
//! production, a seeded `StdRng` in tests or for reproducible batches.

use chrono::Local;
use rand::distr::Alphanumeric;
use rand::Rng;
use uuid::Uuid;

/// First-name pool for `${NAME}`, `${FIRSTNAME}` and `${EMAIL}`.
pub const FIRST_NAMES: &[&str] = &[
    "James", "Mary", "John", "Patricia", "Robert", "Jennifer", "Michael", "Linda", "David",
    "Elizabeth", "William", "Barbara", "Richard", "Susan", "Joseph", "Jessica", "Thomas", "Sarah",
    "Charles", "Karen", "Daniel", "Nancy", "Matthew", "Lisa", "Anthony", "Betty", "Mark", "Helen",
];

/// Last-name pool for `${NAME}`, `${LASTNAME}` and `${EMAIL}`.
pub const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson", "Thomas", "Taylor",
    "Moore", "Jackson", "Martin", "Lee", "Perez", "Thompson", "White", "Harris", "Sanchez",
    "Clark", "Lewis",
];

/// Domain pool for `${EMAIL}`.
pub const EMAIL_DOMAINS: &[&str] = &["example.com", "test.com", "demo.com", "mail.com"];

/// Upper bound on `${STRING:length}` output, to bound memory.
pub const MAX_STRING_LENGTH: i64 = 1000;

/// Fallback range for `${NUMBER:...}` with unparseable bounds.
pub const NUMBER_FALLBACK_RANGE: (i64, i64) = (0, 99);

fn pick<'a, R: Rng>(rng: &mut R, pool: &[&'a str]) -> &'a str {
    pool[rng.random_range(0..pool.len())]
}

/// Generate an identifier: a random integer in [1, 999_999_999].
pub fn id<R: Rng>(rng: &mut R) -> String {
    rng.random_range(1i64..=999_999_999).to_string()
}

/// Generate a fresh random UUID in canonical hyphenated form.
pub fn uuid() -> String {
    Uuid::new_v4().to_string()
}

/// Generate an 8-character alphanumeric token from a fresh UUID.
pub fn token() -> String {
    Uuid::new_v4().simple().to_string()[..8].to_string()
}

/// Generate a random integer in [1, 999_999].
///
/// The upper bound is inclusive at 999_999.
pub fn number<R: Rng>(rng: &mut R) -> String {
    rng.random_range(1i64..=999_999).to_string()
}

/// Generate a random integer in the inclusive range [min, max].
/// Reversed bounds are swapped before sampling.
pub fn number_between<R: Rng>(rng: &mut R, min: i64, max: i64) -> String {
    let (min, max) = if min > max { (max, min) } else { (min, max) };
    rng.random_range(min..=max).to_string()
}

/// Generate a monetary amount in [0.01, 9999.99] with two fraction digits.
pub fn amount<R: Rng>(rng: &mut R) -> String {
    format_cents(rng.random_range(1i64..=999_999))
}

/// Generate a monetary amount in [min, max) with two fraction digits.
///
/// Sampling happens on whole cents so the output always carries exactly
/// two fraction digits and never rounds past `max`. Reversed bounds are
/// swapped; a degenerate range yields `min` itself.
pub fn amount_between<R: Rng>(rng: &mut R, min: f64, max: f64) -> String {
    let (min, max) = if min > max { (max, min) } else { (min, max) };
    let min_cents = (min * 100.0).round() as i64;
    let max_cents = (max * 100.0).round() as i64;
    if min_cents >= max_cents {
        return format_cents(min_cents);
    }
    format_cents(rng.random_range(min_cents..max_cents))
}

fn format_cents(cents: i64) -> String {
    format!("{:.2}", cents as f64 / 100.0)
}

/// Generate a full name, first and last drawn independently from the pools.
pub fn full_name<R: Rng>(rng: &mut R) -> String {
    format!("{} {}", pick(rng, FIRST_NAMES), pick(rng, LAST_NAMES))
}

/// Generate a first name from the pool.
pub fn first_name<R: Rng>(rng: &mut R) -> String {
    pick(rng, FIRST_NAMES).to_string()
}

/// Generate a last name from the pool.
pub fn last_name<R: Rng>(rng: &mut R) -> String {
    pick(rng, LAST_NAMES).to_string()
}

/// Generate an email address of the form `first.last@domain`.
///
/// The names are drawn independently from the pools and lower-cased; the
/// domain comes from a fixed pool. No correlation with `${NAME}` values
/// elsewhere in the same template is attempted.
pub fn email<R: Rng>(rng: &mut R) -> String {
    format!(
        "{}.{}@{}",
        pick(rng, FIRST_NAMES).to_lowercase(),
        pick(rng, LAST_NAMES).to_lowercase(),
        pick(rng, EMAIL_DOMAINS)
    )
}

/// Generate a phone number of the form `###-###-####`.
pub fn phone<R: Rng>(rng: &mut R) -> String {
    format!(
        "{}-{}-{}",
        rng.random_range(100..=999),
        rng.random_range(100..=999),
        rng.random_range(1000..=9999)
    )
}

/// Generate a random alphanumeric string of exactly `length` characters.
///
/// A non-positive length yields an empty string; the length is capped at
/// [`MAX_STRING_LENGTH`].
pub fn alphanumeric<R: Rng>(rng: &mut R, length: i64) -> String {
    if length <= 0 {
        return String::new();
    }
    let length = length.min(MAX_STRING_LENGTH) as usize;
    (&mut *rng)
        .sample_iter(Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}

/// Current local date, ISO-8601 calendar format.
pub fn current_date() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}

/// Current local time of day with millisecond precision.
pub fn current_time() -> String {
    Local::now().format("%H:%M:%S%.3f").to_string()
}

/// Current local date-time, combined ISO-8601 format.
pub fn current_timestamp() -> String {
    Local::now().format("%Y-%m-%dT%H:%M:%S%.3f").to_string()
}
