//! Text formatting shared by the assemblers and encoders.

use chrono::NaiveDate;

use super::types::{Address, Kit};

/// Formats a CPF as `XXX.XXX.XXX-XX`.
///
/// Non-digit characters are dropped first, so already formatted input is
/// accepted. Values that do not hold exactly 11 digits are returned as given.
#[must_use]
pub fn format_cpf(cpf: &str) -> String {
    let digits: String = cpf.chars().filter(char::is_ascii_digit).collect();
    if digits.len() != 11 {
        return cpf.to_string();
    }
    format!(
        "{}.{}.{}-{}",
        &digits[0..3],
        &digits[3..6],
        &digits[6..9],
        &digits[9..11]
    )
}

/// `street, number[, complement]`.
#[must_use]
pub fn address_line1(address: &Address) -> String {
    let mut line = format!("{}, {}", address.street, address.number);
    if let Some(complement) = address
        .complement
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty())
    {
        line.push_str(", ");
        line.push_str(complement);
    }
    line
}

/// `street, number[, complement] - neighborhood, city/state`.
#[must_use]
pub fn single_line_address(address: &Address) -> String {
    format!(
        "{} - {}, {}/{}",
        address_line1(address),
        address.neighborhood,
        address.city,
        address.state
    )
}

/// `name (size), name (size), ...`.
#[must_use]
pub fn kits_summary(kits: &[Kit]) -> String {
    kits.iter()
        .map(|kit| format!("{} ({})", kit.athlete_name, kit.shirt_size))
        .collect::<Vec<_>>()
        .join(", ")
}

/// `DD/MM/YYYY`.
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

const ELLIPSIS: &str = "...";

/// Cuts `text` to `max_chars` characters, ending in `...` when cut.
///
/// Limits too short to hold the ellipsis cut without it.
#[must_use]
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    if max_chars < ELLIPSIS.len() {
        return text.chars().take(max_chars).collect();
    }
    let mut cut: String = text.chars().take(max_chars - ELLIPSIS.len()).collect();
    cut.push_str(ELLIPSIS);
    cut
}

/// Lowercase ASCII slug: `"Corrida de São João 2025"` → `"corrida-de-sao-joao-2025"`.
#[must_use]
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_dash = false;

    for ch in text.chars().map(fold_accent) {
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }

    slug
}

fn fold_accent(ch: char) -> char {
    match ch {
        'á' | 'à' | 'â' | 'ã' | 'ä' | 'Á' | 'À' | 'Â' | 'Ã' | 'Ä' => 'a',
        'é' | 'è' | 'ê' | 'ë' | 'É' | 'È' | 'Ê' | 'Ë' => 'e',
        'í' | 'ì' | 'î' | 'ï' | 'Í' | 'Ì' | 'Î' | 'Ï' => 'i',
        'ó' | 'ò' | 'ô' | 'õ' | 'ö' | 'Ó' | 'Ò' | 'Ô' | 'Õ' | 'Ö' => 'o',
        'ú' | 'ù' | 'û' | 'ü' | 'Ú' | 'Ù' | 'Û' | 'Ü' => 'u',
        'ç' | 'Ç' => 'c',
        'ñ' | 'Ñ' => 'n',
        other => other,
    }
}
