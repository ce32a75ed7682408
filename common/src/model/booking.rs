use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Identifier assigned by the bookings server.
///
/// The server is not consistent about the JSON type of ids (`roomId` is
/// entered as free text, `id` is usually numeric), so both shapes are kept
/// as received and rendered verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Identifier {
    Number(i64),
    Text(String),
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Number(n) => write!(f, "{}", n),
            Identifier::Text(s) => f.write_str(s),
        }
    }
}

/// A persisted reservation as returned by `GET /bookings` and the search endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Identifier>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub surname: String,
    #[serde(default)]
    pub email: String,
    /// Absent on some legacy records; a missing room never fails the listing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_id: Option<Identifier>,
    /// `YYYY-MM-DD`
    #[serde(default)]
    pub check_in_date: String,
    /// `YYYY-MM-DD`
    #[serde(default)]
    pub check_out_date: String,
}

impl Booking {
    /// List key for the row at `index`. Ids may be missing or repeated, so the
    /// position keeps keys unique.
    pub fn row_key(&self, index: usize) -> String {
        match &self.id {
            Some(id) => format!("{}-{}", id, index),
            None => format!("-{}", index),
        }
    }
}

/// `YYYY-MM-DD` from a year, a zero-based month (as JavaScript's `Date`
/// returns it) and a day of the month.
pub fn calendar_date(year: u32, month_index: u32, day: u32) -> String {
    format!("{:04}-{:02}-{:02}", year, month_index + 1, day)
}

/// The unsaved booking held by the creation form.
///
/// Every field is plain text because it mirrors an `<input>` value; the
/// server does all validation. Serialized as-is for `POST /bookings`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingDraft {
    pub title: String,
    pub first_name: String,
    pub surname: String,
    pub email: String,
    pub room_id: String,
    pub check_in_date: String,
    pub check_out_date: String,
}

impl BookingDraft {
    pub fn get(&self, field: BookingField) -> &str {
        match field {
            BookingField::Title => &self.title,
            BookingField::FirstName => &self.first_name,
            BookingField::Surname => &self.surname,
            BookingField::Email => &self.email,
            BookingField::RoomId => &self.room_id,
            BookingField::CheckInDate => &self.check_in_date,
            BookingField::CheckOutDate => &self.check_out_date,
        }
    }

    /// Overwrites exactly one field, leaving the others untouched.
    pub fn set(&mut self, field: BookingField, value: String) {
        let slot = match field {
            BookingField::Title => &mut self.title,
            BookingField::FirstName => &mut self.first_name,
            BookingField::Surname => &mut self.surname,
            BookingField::Email => &mut self.email,
            BookingField::RoomId => &mut self.room_id,
            BookingField::CheckInDate => &mut self.check_in_date,
            BookingField::CheckOutDate => &mut self.check_out_date,
        };
        *slot = value;
    }

    pub fn is_empty(&self) -> bool {
        BookingField::ALL.iter().all(|f| self.get(*f).is_empty())
    }
}

/// Names the editable fields of a [`BookingDraft`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BookingField {
    Title,
    FirstName,
    Surname,
    Email,
    RoomId,
    CheckInDate,
    CheckOutDate,
}

impl BookingField {
    /// Form order.
    pub const ALL: [BookingField; 7] = [
        BookingField::Title,
        BookingField::FirstName,
        BookingField::Surname,
        BookingField::Email,
        BookingField::RoomId,
        BookingField::CheckInDate,
        BookingField::CheckOutDate,
    ];

    /// The JSON key, also used as the `<input name>`.
    pub fn name(self) -> &'static str {
        match self {
            BookingField::Title => "title",
            BookingField::FirstName => "firstName",
            BookingField::Surname => "surname",
            BookingField::Email => "email",
            BookingField::RoomId => "roomId",
            BookingField::CheckInDate => "checkInDate",
            BookingField::CheckOutDate => "checkOutDate",
        }
    }

    pub fn is_date(self) -> bool {
        matches!(self, BookingField::CheckInDate | BookingField::CheckOutDate)
    }
}

impl fmt::Display for BookingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownField(pub String);

impl fmt::Display for UnknownField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown field `{}`", self.0)
    }
}

impl std::error::Error for UnknownField {}

impl FromStr for BookingField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BookingField::ALL
            .into_iter()
            .find(|f| f.name() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn booking_reads_camel_case_payload() {
        let json = r#"{"title":"Mr","firstName":"Jo","surname":"Lee","email":"j@x.com",
            "roomId":"1","checkInDate":"2024-01-01","checkOutDate":"2024-01-02"}"#;
        let booking: Booking = serde_json::from_str(json).unwrap();
        assert_eq!(booking.first_name, "Jo");
        assert_eq!(booking.room_id, Some(Identifier::Text("1".into())));
        assert_eq!(booking.check_out_date, "2024-01-02");
        assert!(booking.id.is_none());
    }

    #[test]
    fn numeric_ids_are_accepted() {
        let json = r#"{"id":7,"roomId":12}"#;
        let booking: Booking = serde_json::from_str(json).unwrap();
        assert_eq!(booking.id, Some(Identifier::Number(7)));
        assert_eq!(booking.room_id, Some(Identifier::Number(12)));
        assert!(booking.email.is_empty());
    }

    #[test]
    fn record_without_room_does_not_fail_the_listing() {
        let json = r#"[{"id":1,"firstName":"Jo","roomId":"2"},{"id":2,"firstName":"Sam"}]"#;
        let bookings: Vec<Booking> = serde_json::from_str(json).unwrap();
        assert_eq!(bookings.len(), 2);
        assert_eq!(bookings[0].room_id, Some(Identifier::Text("2".into())));
        assert!(bookings[1].room_id.is_none());
    }

    #[test]
    fn row_keys_stay_unique_for_repeated_ids() {
        let json = r#"[{"id":5,"roomId":"1"},{"id":5,"roomId":"2"},{"roomId":"3"}]"#;
        let bookings: Vec<Booking> = serde_json::from_str(json).unwrap();
        let keys: Vec<String> = bookings
            .iter()
            .enumerate()
            .map(|(i, b)| b.row_key(i))
            .collect();
        assert_eq!(keys, vec!["5-0", "5-1", "-2"]);
    }

    #[test]
    fn calendar_date_pads_and_shifts_month() {
        assert_eq!(calendar_date(2024, 0, 1), "2024-01-01");
        assert_eq!(calendar_date(2026, 11, 31), "2026-12-31");
        assert_eq!(calendar_date(2026, 9, 15), "2026-10-15");
    }

    #[test]
    fn draft_serializes_without_id() {
        let mut draft = BookingDraft::default();
        draft.set(BookingField::RoomId, "3".into());
        let value = serde_json::to_value(&draft).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), 7);
        assert_eq!(obj["roomId"], "3");
        assert!(!obj.contains_key("id"));
    }

    #[test]
    fn set_touches_only_the_named_field() {
        let mut draft = BookingDraft::default();
        draft.set(BookingField::Email, "a@b.c".into());
        draft.set(BookingField::Surname, "Lee".into());
        draft.set(BookingField::Email, "x@y.z".into());

        assert_eq!(draft.email, "x@y.z");
        assert_eq!(draft.surname, "Lee");
        assert!(draft.title.is_empty());
        assert!(draft.first_name.is_empty());
        assert!(draft.check_in_date.is_empty());
    }

    #[test]
    fn field_names_parse_back() {
        for field in BookingField::ALL {
            assert_eq!(field.name().parse::<BookingField>(), Ok(field));
        }
        assert_eq!(
            "checkin".parse::<BookingField>(),
            Err(UnknownField("checkin".into()))
        );
    }
}
