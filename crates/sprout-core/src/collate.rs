//! Locale-aware text comparison helpers.
//!
//! Plant-type labels and project names are Portuguese, so a plain byte
//! comparison would put "Óleo" after "Zona" and "alface" after "Tomate". The
//! comparison here folds case and Latin diacritics for the primary key and
//! falls back to the raw text only to break exact primary ties.

use std::cmp::Ordering;

/// Fold a single character to its unaccented lowercase base form.
fn fold_char(c: char) -> char {
    match c {
        'á' | 'à' | 'â' | 'ã' | 'ä' | 'å' | 'Á' | 'À' | 'Â' | 'Ã' | 'Ä' | 'Å' => 'a',
        'é' | 'è' | 'ê' | 'ë' | 'É' | 'È' | 'Ê' | 'Ë' => 'e',
        'í' | 'ì' | 'î' | 'ï' | 'Í' | 'Ì' | 'Î' | 'Ï' => 'i',
        'ó' | 'ò' | 'ô' | 'õ' | 'ö' | 'Ó' | 'Ò' | 'Ô' | 'Õ' | 'Ö' => 'o',
        'ú' | 'ù' | 'û' | 'ü' | 'Ú' | 'Ù' | 'Û' | 'Ü' => 'u',
        'ç' | 'Ç' => 'c',
        'ñ' | 'Ñ' => 'n',
        other => other.to_lowercase().next().unwrap_or(other),
    }
}

/// Case- and accent-folded form of `text`, used as the primary sort key and
/// for lenient parsing of enumerated labels.
pub fn fold(text: &str) -> String {
    text.chars().map(fold_char).collect()
}

/// Compare two strings the way a Portuguese-locale collator would for
/// ascending display order.
pub fn compare(a: &str, b: &str) -> Ordering {
    fold(a).cmp(&fold(b)).then_with(|| a.cmp(b))
}
