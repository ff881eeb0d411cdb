//! Display formatting for amounts, dates and rich text.

use chrono::NaiveDate;
use scraper::{ElementRef, Html};

/// Symbols for the currencies loans are commonly denominated in.
const CURRENCY_SYMBOLS: &[(&str, &str)] = &[
    ("USD", "$"),
    ("EUR", "€"),
    ("GBP", "£"),
    ("MWK", "MK"),
    ("ZAR", "R"),
    ("JPY", "¥"),
    ("CNY", "CN¥"),
    ("INR", "₹"),
];

/// Formats a whole-unit amount with thousands separators and the currency
/// symbol, e.g. `format_currency(1_000_000.0, "USD") == "$1,000,000"`.
///
/// Fractions are rounded half away from zero. Codes without a known symbol
/// are written out in front of the number.
pub fn format_currency(amount: f64, currency: &str) -> String {
    let code = currency.trim().to_uppercase();
    let rounded = amount.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    let digits = group_thousands(rounded.abs() as u128);
    match CURRENCY_SYMBOLS.iter().find(|(c, _)| *c == code) {
        Some((_, symbol)) => format!("{}{}{}", sign, symbol, digits),
        None if code.is_empty() => format!("{}{}", sign, digits),
        None => format!("{}{} {}", sign, code, digits),
    }
}

/// Inserts a comma every three digits from the right.
pub fn group_thousands(value: u128) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// `12 Jan 2024`
pub fn format_date(date: NaiveDate) -> String {
    date.format("%-d %b %Y").to_string()
}

/// Committee term for display. Either end may be unknown.
pub fn format_term(begin: Option<NaiveDate>, end: Option<NaiveDate>) -> String {
    match (begin, end) {
        (Some(begin), Some(end)) => format!("{} – {}", format_date(begin), format_date(end)),
        (Some(begin), None) => format!("{} – present", format_date(begin)),
        (None, Some(end)) => format!("until {}", format_date(end)),
        (None, None) => "unknown".to_string(),
    }
}

/// Elements followed by a line break in plain-text output.
const BLOCK_ELEMENTS: &[&str] = &[
    "p", "div", "li", "ul", "ol", "br", "h1", "h2", "h3", "h4", "h5", "h6", "tr", "table",
    "blockquote", "section", "article",
];

/// Elements whose text is never shown.
const HIDDEN_ELEMENTS: &[&str] = &["script", "style", "noscript", "template"];

/// Reduces trusted HTML to plain text for terminal display: the fragment is
/// parsed, text nodes are collected with entities decoded and block-level
/// elements end a line. The result is never emitted as markup.
pub fn strip_tags(html: &str) -> String {
    let fragment = Html::parse_fragment(html);
    let mut text = String::with_capacity(html.len());
    collect_text(fragment.root_element(), &mut text);
    text.replace('\u{a0}', " ")
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

fn collect_text(element: ElementRef<'_>, out: &mut String) {
    for child in element.children() {
        if let Some(text) = child.value().as_text() {
            out.push_str(text);
        } else if let Some(child) = ElementRef::wrap(child) {
            let name = child.value().name();
            if HIDDEN_ELEMENTS.contains(&name) {
                continue;
            }
            collect_text(child, out);
            if BLOCK_ELEMENTS.contains(&name) {
                out.push('\n');
            }
        }
    }
}
