//! The daily log form.
//!
//! Every input is stored as the raw text the user typed, so anything can be
//! entered and read back unchanged. Each field also declares the type it is
//! meant to hold; `check`/`parse` report whether the text fits that type.
//! Those checks are hints for the form panel only. Submitting the form never
//! consults them.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Inputs of the daily log form, in display order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    SelectedShed,
    BirdCount,
    Mortality,
    FeedConsumed,
    WaterConsumed,
    Observations,
}

/// Declared value type of a form field
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    /// Required single-line text
    Text,
    /// Optional non-negative integer, `,` grouping allowed
    WholeNumber,
    /// Optional non-negative decimal, `,` grouping allowed
    Decimal,
    /// Optional multi-line text, never checked
    FreeText,
}

impl FormField {
    pub const ALL: [FormField; 6] = [
        FormField::SelectedShed,
        FormField::BirdCount,
        FormField::Mortality,
        FormField::FeedConsumed,
        FormField::WaterConsumed,
        FormField::Observations,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FormField::SelectedShed => "Select Shed",
            FormField::BirdCount => "Bird Count",
            FormField::Mortality => "Mortality",
            FormField::FeedConsumed => "Feed Consumed (kg)",
            FormField::WaterConsumed => "Water Consumed (L)",
            FormField::Observations => "Behavioral Observations",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            FormField::SelectedShed => "",
            FormField::BirdCount => "1,250",
            FormField::Mortality => "3",
            FormField::FeedConsumed => "850",
            FormField::WaterConsumed => "1,200",
            FormField::Observations => {
                "Note any unusual behavior, activity levels, feeding patterns..."
            }
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            FormField::SelectedShed => FieldKind::Text,
            FormField::BirdCount | FormField::Mortality => FieldKind::WholeNumber,
            FormField::FeedConsumed | FormField::WaterConsumed => FieldKind::Decimal,
            FormField::Observations => FieldKind::FreeText,
        }
    }

    /// Whether the user can type into the field. The shed is a fixed picker.
    pub fn is_editable(&self) -> bool {
        !matches!(self, FormField::SelectedShed)
    }

    pub fn index(&self) -> usize {
        Self::ALL
            .iter()
            .position(|f| f == self)
            .unwrap_or_default()
    }

    /// Next field, stopping at the last one
    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1).min(Self::ALL.len() - 1)]
    }

    /// Previous field, stopping at the first one
    pub fn prev(&self) -> Self {
        Self::ALL[self.index().saturating_sub(1)]
    }
}

impl std::fmt::Display for FormField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Why a field's text does not fit its declared type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FieldError {
    #[error("{field} is required")]
    Required { field: FormField },

    #[error("{field} should be a whole number, got '{value}'")]
    NotWholeNumber { field: FormField, value: String },

    #[error("{field} should be a number, got '{value}'")]
    NotDecimal { field: FormField, value: String },

    #[error("{field} cannot be negative")]
    Negative { field: FormField },
}

impl FieldError {
    pub fn field(&self) -> FormField {
        match self {
            FieldError::Required { field }
            | FieldError::NotWholeNumber { field, .. }
            | FieldError::NotDecimal { field, .. }
            | FieldError::Negative { field } => *field,
        }
    }
}

/// Typed view of a form whose fields all fit their declared types
#[derive(Clone, Debug, PartialEq)]
pub struct DailyLogEntry {
    pub shed: String,
    pub bird_count: Option<u32>,
    pub mortality: Option<u32>,
    pub feed_consumed_kg: Option<f64>,
    pub water_consumed_l: Option<f64>,
    pub observations: String,
}

/// Raw text of every form input
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyLogForm {
    pub selected_shed: String,
    pub bird_count: String,
    pub mortality: String,
    pub feed_consumed: String,
    pub water_consumed: String,
    pub observations: String,
}

impl Default for DailyLogForm {
    fn default() -> Self {
        Self {
            selected_shed: "Shed A - Broilers (Week 4)".to_string(),
            bird_count: String::new(),
            mortality: String::new(),
            feed_consumed: String::new(),
            water_consumed: String::new(),
            observations: String::new(),
        }
    }
}

impl DailyLogForm {
    /// Current text of a field
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::SelectedShed => &self.selected_shed,
            FormField::BirdCount => &self.bird_count,
            FormField::Mortality => &self.mortality,
            FormField::FeedConsumed => &self.feed_consumed,
            FormField::WaterConsumed => &self.water_consumed,
            FormField::Observations => &self.observations,
        }
    }

    pub fn get_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::SelectedShed => &mut self.selected_shed,
            FormField::BirdCount => &mut self.bird_count,
            FormField::Mortality => &mut self.mortality,
            FormField::FeedConsumed => &mut self.feed_consumed,
            FormField::WaterConsumed => &mut self.water_consumed,
            FormField::Observations => &mut self.observations,
        }
    }

    /// Replace a field's text verbatim
    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        *self.get_mut(field) = value.into();
    }

    /// Check one field against its declared type
    pub fn check(&self, field: FormField) -> Result<(), FieldError> {
        let raw = self.get(field);
        match field.kind() {
            FieldKind::Text => {
                if raw.trim().is_empty() {
                    Err(FieldError::Required { field })
                } else {
                    Ok(())
                }
            }
            FieldKind::WholeNumber => parse_whole(field, raw).map(|_| ()),
            FieldKind::Decimal => parse_decimal(field, raw).map(|_| ()),
            FieldKind::FreeText => Ok(()),
        }
    }

    /// Every field that does not fit its declared type, in display order
    pub fn problems(&self) -> Vec<FieldError> {
        FormField::ALL
            .iter()
            .filter_map(|field| self.check(*field).err())
            .collect()
    }

    /// Convert to typed values, or report every problem found
    pub fn parse(&self) -> Result<DailyLogEntry, Vec<FieldError>> {
        let problems = self.problems();
        if !problems.is_empty() {
            return Err(problems);
        }

        Ok(DailyLogEntry {
            shed: self.selected_shed.trim().to_string(),
            bird_count: parse_whole(FormField::BirdCount, &self.bird_count).ok().flatten(),
            mortality: parse_whole(FormField::Mortality, &self.mortality).ok().flatten(),
            feed_consumed_kg: parse_decimal(FormField::FeedConsumed, &self.feed_consumed)
                .ok()
                .flatten(),
            water_consumed_l: parse_decimal(FormField::WaterConsumed, &self.water_consumed)
                .ok()
                .flatten(),
            observations: self.observations.clone(),
        })
    }
}

fn normalize(raw: &str) -> String {
    raw.trim().replace(',', "")
}

fn parse_whole(field: FormField, raw: &str) -> Result<Option<u32>, FieldError> {
    let cleaned = normalize(raw);
    if cleaned.is_empty() {
        return Ok(None);
    }
    if cleaned.starts_with('-') && cleaned[1..].parse::<u32>().is_ok() {
        return Err(FieldError::Negative { field });
    }
    cleaned
        .parse::<u32>()
        .map(Some)
        .map_err(|_| FieldError::NotWholeNumber {
            field,
            value: raw.to_string(),
        })
}

fn parse_decimal(field: FormField, raw: &str) -> Result<Option<f64>, FieldError> {
    let cleaned = normalize(raw);
    if cleaned.is_empty() {
        return Ok(None);
    }
    match cleaned.parse::<f64>() {
        Ok(value) if !value.is_finite() => Err(FieldError::NotDecimal {
            field,
            value: raw.to_string(),
        }),
        Ok(value) if value < 0.0 => Err(FieldError::Negative { field }),
        Ok(value) => Ok(Some(value)),
        Err(_) => Err(FieldError::NotDecimal {
            field,
            value: raw.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_form() {
        let form = DailyLogForm::default();
        assert_eq!(form.get(FormField::SelectedShed), "Shed A - Broilers (Week 4)");
        assert_eq!(form.get(FormField::BirdCount), "");
        assert!(form.problems().is_empty());
    }

    #[test]
    fn test_set_keeps_raw_text() {
        let mut form = DailyLogForm::default();
        form.set(FormField::BirdCount, "lots");
        assert_eq!(form.bird_count, "lots");
        form.set(FormField::Observations, "hens quiet\nrooster loud");
        assert_eq!(form.get(FormField::Observations), "hens quiet\nrooster loud");
    }

    #[test]
    fn test_check_whole_numbers() {
        let mut form = DailyLogForm::default();
        form.set(FormField::BirdCount, "1,250");
        assert!(form.check(FormField::BirdCount).is_ok());

        form.set(FormField::Mortality, "three");
        assert_eq!(
            form.check(FormField::Mortality),
            Err(FieldError::NotWholeNumber {
                field: FormField::Mortality,
                value: "three".to_string()
            })
        );

        form.set(FormField::Mortality, "-2");
        assert_eq!(
            form.check(FormField::Mortality),
            Err(FieldError::Negative {
                field: FormField::Mortality
            })
        );

        form.set(FormField::Mortality, "2.5");
        assert!(form.check(FormField::Mortality).is_err());
    }

    #[test]
    fn test_check_decimals() {
        let mut form = DailyLogForm::default();
        form.set(FormField::FeedConsumed, "850.5");
        assert!(form.check(FormField::FeedConsumed).is_ok());

        form.set(FormField::WaterConsumed, "NaN");
        assert!(matches!(
            form.check(FormField::WaterConsumed),
            Err(FieldError::NotDecimal { .. })
        ));

        form.set(FormField::WaterConsumed, "-1");
        assert!(matches!(
            form.check(FormField::WaterConsumed),
            Err(FieldError::Negative { .. })
        ));
    }

    #[test]
    fn test_shed_required() {
        let mut form = DailyLogForm::default();
        form.set(FormField::SelectedShed, "   ");
        let problems = form.problems();
        assert_eq!(problems.len(), 1);
        assert_eq!(problems[0].field(), FormField::SelectedShed);
    }

    #[test]
    fn test_parse_entry() {
        let mut form = DailyLogForm::default();
        form.set(FormField::BirdCount, "1,250");
        form.set(FormField::Mortality, "3");
        form.set(FormField::FeedConsumed, "850");
        form.set(FormField::Observations, "normal");

        let entry = form.parse().unwrap();
        assert_eq!(entry.shed, "Shed A - Broilers (Week 4)");
        assert_eq!(entry.bird_count, Some(1250));
        assert_eq!(entry.mortality, Some(3));
        assert_eq!(entry.feed_consumed_kg, Some(850.0));
        assert_eq!(entry.water_consumed_l, None);
        assert_eq!(entry.observations, "normal");
    }

    #[test]
    fn test_parse_collects_all_problems() {
        let mut form = DailyLogForm::default();
        form.set(FormField::BirdCount, "abc");
        form.set(FormField::FeedConsumed, "lots");
        let problems = form.parse().unwrap_err();
        let fields: Vec<FormField> = problems.iter().map(FieldError::field).collect();
        assert_eq!(fields, vec![FormField::BirdCount, FormField::FeedConsumed]);
    }

    #[test]
    fn test_only_shed_is_read_only() {
        let read_only: Vec<FormField> = FormField::ALL
            .into_iter()
            .filter(|f| !f.is_editable())
            .collect();
        assert_eq!(read_only, vec![FormField::SelectedShed]);
    }

    #[test]
    fn test_field_navigation_clamps() {
        assert_eq!(FormField::SelectedShed.prev(), FormField::SelectedShed);
        assert_eq!(FormField::SelectedShed.next(), FormField::BirdCount);
        assert_eq!(FormField::Observations.next(), FormField::Observations);
    }
}
