use crate::core::error::OrderError;
use chrono::NaiveDate;
use serde::Deserialize;

/// Form fields for creating or editing an order. Dates arrive as
/// `YYYY-MM-DD` strings from the board form; all fields default to empty so
/// a partial submission is rejected here with a field name rather than at
/// body decoding.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct OrderForm {
    #[serde(default)]
    pub client: String,
    #[serde(default)]
    pub order_number: String,
    #[serde(default)]
    pub date_in: String,
    #[serde(default)]
    pub date_due: String,
    #[serde(default)]
    pub note: Option<String>,
}

/// Validated order fields, ready for the store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrderFields {
    pub client: String,
    pub order_number: String,
    pub date_in: NaiveDate,
    pub date_due: NaiveDate,
    pub note: Option<String>,
}

impl OrderForm {
    /// Reject blank required fields and unparseable dates. Surrounding
    /// whitespace is dropped; a blank note becomes None. Nothing is
    /// mutated on rejection.
    pub fn validate(self) -> Result<OrderFields, OrderError> {
        let client = self.client.trim();
        if client.is_empty() {
            return Err(OrderError::MissingField("client"));
        }

        let order_number = self.order_number.trim();
        if order_number.is_empty() {
            return Err(OrderError::MissingField("order_number"));
        }

        let date_in = parse_date("date_in", &self.date_in)?;
        let date_due = parse_date("date_due", &self.date_due)?;

        let note = self
            .note
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(str::to_string);

        Ok(OrderFields {
            client: client.to_string(),
            order_number: order_number.to_string(),
            date_in,
            date_due,
            note,
        })
    }
}

fn parse_date(field: &'static str, value: &str) -> Result<NaiveDate, OrderError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(OrderError::MissingField(field));
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| OrderError::InvalidDate {
        field,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> OrderForm {
        OrderForm {
            client: "Malharia Horizonte".to_string(),
            order_number: "PED-101".to_string(),
            date_in: "2026-08-01".to_string(),
            date_due: "2026-08-20".to_string(),
            note: Some("rush".to_string()),
        }
    }

    #[test]
    fn test_validate_accepts_filled_form() {
        let fields = filled_form().validate().unwrap();

        assert_eq!(fields.client, "Malharia Horizonte");
        assert_eq!(fields.order_number, "PED-101");
        assert_eq!(fields.date_in.to_string(), "2026-08-01");
        assert_eq!(fields.date_due.to_string(), "2026-08-20");
        assert_eq!(fields.note.as_deref(), Some("rush"));
    }

    #[test]
    fn test_validate_rejects_blank_client() {
        let mut form = filled_form();
        form.client = "   ".to_string();

        assert_eq!(form.validate(), Err(OrderError::MissingField("client")));
    }

    #[test]
    fn test_validate_rejects_blank_order_number() {
        let mut form = filled_form();
        form.order_number = String::new();

        assert_eq!(
            form.validate(),
            Err(OrderError::MissingField("order_number"))
        );
    }

    #[test]
    fn test_validate_rejects_missing_dates() {
        let mut form = filled_form();
        form.date_due = String::new();

        assert_eq!(form.validate(), Err(OrderError::MissingField("date_due")));
    }

    #[test]
    fn test_validate_rejects_bad_date() {
        let mut form = filled_form();
        form.date_in = "20/08/2026".to_string();

        assert_eq!(
            form.validate(),
            Err(OrderError::InvalidDate {
                field: "date_in",
                value: "20/08/2026".to_string(),
            })
        );
    }

    #[test]
    fn test_validate_trims_fields_and_drops_blank_note() {
        let mut form = filled_form();
        form.client = "  Malharia Horizonte  ".to_string();
        form.note = Some("   ".to_string());

        let fields = form.validate().unwrap();
        assert_eq!(fields.client, "Malharia Horizonte");
        assert_eq!(fields.note, None);
    }
}
