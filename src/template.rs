//! Template scanning and placeholder substitution.
//!
//! A template is plain text carrying zero or more `${...}` placeholders.
//! [`substitute`] replaces every recognized placeholder with a freshly
//! generated value and echoes everything else back verbatim, so the call
//! can never fail. The keyword portion of a placeholder is matched
//! case-insensitively; `TYPE:PARAM` placeholders (`${NUMBER:1-100}`,
//! `${AMOUNT:10-1000}`, `${STRING:16}`) parameterize the generator.

use crate::generator;
use rand::Rng;
use regex::{Captures, Regex};
use std::sync::OnceLock;

fn placeholder_regex() -> &'static Regex {
    static PLACEHOLDER: OnceLock<Regex> = OnceLock::new();
    PLACEHOLDER.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").unwrap())
}

/// Substitutes all placeholders in `template` using the thread-local
/// random generator.
///
/// # Arguments
/// * `template` - Template text with zero or more `${...}` placeholders
///
/// # Returns
/// * `String` - The template with every recognized placeholder replaced;
///   unrecognized or malformed placeholders are left untouched
///
/// Each call draws fresh random values, so two calls on the same template
/// yield different output (except for pure-literal or pure-passthrough
/// templates). Safe to call concurrently from any number of threads.
pub fn substitute(template: &str) -> String {
    substitute_with(&mut rand::rng(), template)
}

/// Substitutes all placeholders in `template` drawing randomness from the
/// given generator. A seeded `StdRng` makes the output reproducible.
pub fn substitute_with<R: Rng>(rng: &mut R, template: &str) -> String {
    if !template.contains("${") {
        return template.to_string();
    }

    // Single pass over the input; generated values are never re-scanned,
    // so there is no recursive expansion.
    placeholder_regex()
        .replace_all(template, |caps: &Captures| {
            let expr = &caps[1];
            match resolve(rng, expr) {
                Some(value) => value,
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}

/// Resolves a single placeholder expression to a generated value.
/// Returns `None` for unrecognized or malformed expressions, which the
/// caller echoes back as literal `${...}` text.
fn resolve<R: Rng>(rng: &mut R, expr: &str) -> Option<String> {
    let expr = expr.trim();
    match expr.split_once(':') {
        Some((kind, param)) => resolve_custom(rng, kind.trim(), param.trim()),
        None => resolve_keyword(rng, expr),
    }
}

/// Fixed-keyword generator table for bare placeholders.
fn resolve_keyword<R: Rng>(rng: &mut R, keyword: &str) -> Option<String> {
    let value = match keyword.to_ascii_uppercase().as_str() {
        "ID" => generator::id(rng),
        "UUID" => generator::uuid(),
        "RANDOM" => generator::token(),
        "NUMBER" => generator::number(rng),
        "AMOUNT" | "PRICE" => generator::amount(rng),
        "NAME" => generator::full_name(rng),
        "FIRSTNAME" | "FIRST_NAME" => generator::first_name(rng),
        "LASTNAME" | "LAST_NAME" => generator::last_name(rng),
        "EMAIL" => generator::email(rng),
        "PHONE" => generator::phone(rng),
        "DATE" => generator::current_date(),
        "TIME" => generator::current_time(),
        "TIMESTAMP" => generator::current_timestamp(),
        _ => return None,
    };
    Some(value)
}

/// Parameterized generator table for `TYPE:PARAM` placeholders.
fn resolve_custom<R: Rng>(rng: &mut R, kind: &str, param: &str) -> Option<String> {
    let value = match kind.to_ascii_uppercase().as_str() {
        "NUMBER" => match parse_int_range(param) {
            Some((min, max)) => generator::number_between(rng, min, max),
            None => {
                let (min, max) = generator::NUMBER_FALLBACK_RANGE;
                generator::number_between(rng, min, max)
            }
        },
        "AMOUNT" => match parse_float_range(param) {
            Some((min, max)) => generator::amount_between(rng, min, max),
            None => generator::amount(rng),
        },
        // A length that does not parse as an integer is a malformed
        // placeholder and falls through to passthrough.
        "STRING" => generator::alphanumeric(rng, param.parse().ok()?),
        _ => return None,
    };
    Some(value)
}

fn parse_int_range(param: &str) -> Option<(i64, i64)> {
    let (min, max) = param.split_once('-')?;
    Some((min.trim().parse().ok()?, max.trim().parse().ok()?))
}

fn parse_float_range(param: &str) -> Option<(f64, f64)> {
    let (min, max) = param.split_once('-')?;
    let min: f64 = min.trim().parse().ok()?;
    let max: f64 = max.trim().parse().ok()?;
    if !min.is_finite() || !max.is_finite() {
        return None;
    }
    Some((min, max))
}
