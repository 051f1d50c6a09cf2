use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::source::Source;
use crate::trace::ImportTrace;

/// Final record produced per import call.
///
/// `name` is always non-empty: when no strategy finds one, a merchant
/// placeholder is synthesized instead of failing the call. The other fields
/// stay `None` when nothing plausible was extracted. The record has no
/// identity of its own; the caller persists it with list/ownership metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractedProduct {
    pub name: String,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub image_url: Option<String>,
    pub source: Source,
    pub extracted_at: DateTime<Utc>,
}

/// One of the four extractable fields, used for merge bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Field {
    Name,
    Description,
    Price,
    ImageUrl,
}

/// Partial record produced by a single strategy attempt.
///
/// Absence is "no value", never an error: a strategy that finds nothing
/// returns an empty partial and the chain keeps going.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PartialProduct {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub image_url: Option<String>,
}

impl PartialProduct {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.price.is_none()
            && self.image_url.is_none()
    }

    /// Name, price and image all present. Description is opportunistic and
    /// never keeps a chain running on its own.
    pub fn is_satisfied(&self) -> bool {
        self.name.is_some() && self.price.is_some() && self.image_url.is_some()
    }

    /// Field-independent merge: take from `other` only the fields still
    /// missing here. A later strategy never overwrites an earlier one.
    /// Returns the fields actually taken.
    pub fn fill_from(&mut self, other: PartialProduct) -> Vec<Field> {
        let mut taken = Vec::new();
        if self.name.is_none() {
            if let Some(name) = other.name {
                self.name = Some(name);
                taken.push(Field::Name);
            }
        }
        if self.description.is_none() {
            if let Some(description) = other.description {
                self.description = Some(description);
                taken.push(Field::Description);
            }
        }
        if self.price.is_none() {
            if let Some(price) = other.price {
                self.price = Some(price);
                taken.push(Field::Price);
            }
        }
        if self.image_url.is_none() {
            if let Some(image_url) = other.image_url {
                self.image_url = Some(image_url);
                taken.push(Field::ImageUrl);
            }
        }
        taken
    }
}

/// Terminal outcome of a classified import call.
///
/// `Degraded` is the Amazon/Havan path where title extraction failed and the
/// caller gets a placeholder item instead of a rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImportStatus {
    Success,
    Degraded,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportOutcome {
    pub product: ExtractedProduct,
    pub status: ImportStatus,
    pub trace: ImportTrace,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub ok: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}
impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            ok: true,
            data: Some(data),
            error: None,
        }
    }
    pub fn err(msg: impl Into<String>) -> Self {
        Self {
            ok: false,
            data: None,
            error: Some(msg.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_from_takes_only_missing_fields() {
        let mut acc = PartialProduct {
            name: Some("Cadeira".into()),
            ..Default::default()
        };
        let taken = acc.fill_from(PartialProduct {
            name: Some("Outro nome".into()),
            price: Some(129.9),
            ..Default::default()
        });
        assert_eq!(taken, vec![Field::Price]);
        assert_eq!(acc.name.as_deref(), Some("Cadeira"));
        assert_eq!(acc.price, Some(129.9));
    }

    #[test]
    fn fields_merge_independently_across_strategies() {
        // Price from the first partial, name from a later one.
        let mut acc = PartialProduct::default();
        acc.fill_from(PartialProduct {
            price: Some(42.0),
            ..Default::default()
        });
        acc.fill_from(PartialProduct::default());
        acc.fill_from(PartialProduct {
            name: Some("Jogo de panelas".into()),
            ..Default::default()
        });
        assert_eq!(acc.name.as_deref(), Some("Jogo de panelas"));
        assert_eq!(acc.price, Some(42.0));
    }

    #[test]
    fn satisfied_ignores_description() {
        let acc = PartialProduct {
            name: Some("x".into()),
            price: Some(1.0),
            image_url: Some("https://img".into()),
            description: None,
        };
        assert!(acc.is_satisfied());
    }
}
