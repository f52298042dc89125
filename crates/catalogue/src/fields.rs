//! Field constraints and small value types shared by the entities.

use core::str::FromStr;

use pdc_core::{DomainError, DomainResult, ValueObject};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub const NAME_MAX: usize = 255;
pub const DESCRIPTION_MAX: usize = 2550;
pub const URL_MAX: usize = 255;
pub const TEXT_MAX: usize = 255;

pub(crate) fn required_text(field: &'static str, value: String, max: usize) -> DomainResult<String> {
    if value.trim().is_empty() {
        return Err(DomainError::validation(field, "must not be blank"));
    }
    check_length(field, &value, max)?;
    Ok(value)
}

pub(crate) fn optional_text(
    field: &'static str,
    value: Option<String>,
    max: usize,
) -> DomainResult<Option<String>> {
    if let Some(v) = &value {
        check_length(field, v, max)?;
    }
    Ok(value)
}

/// Optional absolute URL (logo, movie).
pub(crate) fn optional_url(field: &'static str, value: Option<String>) -> DomainResult<Option<String>> {
    let Some(v) = value else {
        return Ok(None);
    };
    check_length(field, &v, URL_MAX)?;
    match url::Url::parse(&v) {
        Ok(parsed) if !parsed.cannot_be_a_base() => Ok(Some(v)),
        Ok(_) => Err(DomainError::validation(field, "must be a hierarchical URL")),
        Err(e) => Err(DomainError::validation(field, format!("must be a well-formed URL ({e})"))),
    }
}

fn check_length(field: &'static str, value: &str, max: usize) -> DomainResult<()> {
    let len = value.chars().count();
    if len > max {
        return Err(DomainError::validation(
            field,
            format!("must be at most {max} characters (got {len})"),
        ));
    }
    Ok(())
}

pub(crate) fn tax_percentage(value: u8) -> DomainResult<u8> {
    if value > 100 {
        return Err(DomainError::validation(
            "tax_percentage",
            format!("must be between 0 and 100 (got {value})"),
        ));
    }
    Ok(value)
}

/// Checks an ISO-8601 duration such as `PT10M` or `P1DT2H`.
pub fn validate_duration(field: &'static str, value: &str) -> DomainResult<()> {
    let invalid = |why: String| DomainError::validation(field, format!("invalid ISO-8601 duration `{value}`: {why}"));

    let rest = value
        .strip_prefix('P')
        .ok_or_else(|| invalid("must start with `P`".to_string()))?;
    let (date, time) = match rest.split_once('T') {
        Some((d, t)) => (d, Some(t)),
        None => (rest, None),
    };

    let mut components = duration_components(date, &['Y', 'M', 'W', 'D']).map_err(invalid)?;
    if let Some(time) = time {
        let n = duration_components(time, &['H', 'M', 'S']).map_err(invalid)?;
        if n == 0 {
            return Err(invalid("`T` must be followed by a time component".to_string()));
        }
        components += n;
    }
    if components == 0 {
        return Err(invalid("no components".to_string()));
    }
    Ok(())
}

fn duration_components(part: &str, designators: &[char]) -> Result<usize, String> {
    let mut count = 0;
    let mut next = 0;
    let mut number = String::new();

    for c in part.chars() {
        if c.is_ascii_digit() || c == '.' {
            number.push(c);
            continue;
        }
        let offset = designators[next..]
            .iter()
            .position(|d| *d == c)
            .ok_or_else(|| format!("unexpected `{c}`"))?;
        if !number.chars().any(|d| d.is_ascii_digit()) || number.matches('.').count() > 1 {
            return Err(format!("bad number before `{c}`"));
        }
        next += offset + 1;
        number.clear();
        count += 1;
    }

    if !number.is_empty() {
        return Err(format!("`{number}` has no designator"));
    }
    Ok(count)
}

/// A decimal amount in a three-letter currency (e.g. `99.99 EUR`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "MoneyFields")]
pub struct Money {
    amount: Decimal,
    currency: String,
}

impl Money {
    pub fn new(amount: Decimal, currency: impl Into<String>) -> DomainResult<Self> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(DomainError::validation("price", "must not be negative"));
        }
        let currency = currency.into();
        if currency.len() != 3 || !currency.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(DomainError::validation(
                "currency",
                format!("must be a three-letter ISO code (got `{currency}`)"),
            ));
        }
        Ok(Self { amount, currency })
    }

    /// Parses a textual amount such as `"150.0"`.
    pub fn parse(amount: &str, currency: impl Into<String>) -> DomainResult<Self> {
        let amount = Decimal::from_str(amount)
            .map_err(|e| DomainError::validation("price", format!("`{amount}` is not a decimal: {e}")))?;
        Self::new(amount, currency)
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }
}

impl ValueObject for Money {}

#[derive(Deserialize)]
struct MoneyFields {
    amount: Decimal,
    currency: String,
}

impl TryFrom<MoneyFields> for Money {
    type Error = DomainError;

    fn try_from(f: MoneyFields) -> DomainResult<Self> {
        Money::new(f.amount, f.currency)
    }
}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}

/// Product type tag. Unknown tags are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ProductType {
    Simple,
    Set,
    Person,
    Other(String),
}

impl ProductType {
    pub fn as_str(&self) -> &str {
        match self {
            ProductType::Simple => "simple",
            ProductType::Set => "set",
            ProductType::Person => "person",
            ProductType::Other(s) => s,
        }
    }
}

impl From<&str> for ProductType {
    fn from(value: &str) -> Self {
        match value {
            "simple" => ProductType::Simple,
            "set" => ProductType::Set,
            "person" => ProductType::Person,
            other => ProductType::Other(other.to_string()),
        }
    }
}

impl From<String> for ProductType {
    fn from(value: String) -> Self {
        ProductType::from(value.as_str())
    }
}

impl From<ProductType> for String {
    fn from(value: ProductType) -> Self {
        value.as_str().to_string()
    }
}

impl ValueObject for ProductType {}

/// Audience classification. Unknown values are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Audience {
    Public,
    Internal,
    Other(String),
}

impl Audience {
    pub fn as_str(&self) -> &str {
        match self {
            Audience::Public => "public",
            Audience::Internal => "internal",
            Audience::Other(s) => s,
        }
    }
}

impl From<&str> for Audience {
    fn from(value: &str) -> Self {
        match value {
            "public" => Audience::Public,
            "internal" => Audience::Internal,
            other => Audience::Other(other.to_string()),
        }
    }
}

impl From<String> for Audience {
    fn from(value: String) -> Self {
        Audience::from(value.as_str())
    }
}

impl From<Audience> for String {
    fn from(value: Audience) -> Self {
        value.as_str().to_string()
    }
}

impl ValueObject for Audience {}
