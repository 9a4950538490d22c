// Field helpers used by the form surfaces: phone masking, the earliest
// bookable appointment date and the WhatsApp contact link.

use chrono::{Days, NaiveDate, Utc};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use url::Url;

/// Characters left as-is by a URI component encoder
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Apply the Brazilian phone mask to whatever has been typed so far.
///
/// Non-digits are dropped, then:
/// - 11 or more digits: `(DD) DDDDD-DDDD`, extra digits kept after the mask
/// - 6 to 10 digits: `(DD) DDDD-` followed by up to four digits
/// - 2 to 5 digits: `(DD) ` followed by the rest
/// - fewer: the digits unchanged
pub fn format_phone_number(input: &str) -> String {
    let digits: String = input.chars().filter(char::is_ascii_digit).collect();
    let len = digits.len();

    if len >= 11 {
        format!(
            "({}) {}-{}{}",
            &digits[..2],
            &digits[2..7],
            &digits[7..11],
            &digits[11..]
        )
    } else if len >= 6 {
        format!("({}) {}-{}", &digits[..2], &digits[2..6], &digits[6..])
    } else if len >= 2 {
        format!("({}) {}", &digits[..2], &digits[2..])
    } else {
        digits
    }
}

/// Appointments can be booked from tomorrow onwards
pub fn min_appointment_date(today: NaiveDate) -> NaiveDate {
    today
        .checked_add_days(Days::new(1))
        .unwrap_or(NaiveDate::MAX)
}

/// `min` attribute value for date inputs, based on the current UTC date
pub fn min_appointment_date_attribute() -> String {
    min_appointment_date(Utc::now().date_naive())
        .format("%Y-%m-%d")
        .to_string()
}

/// Link that opens a WhatsApp chat with `number`, prefilled with `message`.
///
/// The message is encoded as a URI component, so spaces become `%20`.
pub fn whatsapp_link(number: &str, message: &str) -> Result<Url, url::ParseError> {
    let text = utf8_percent_encode(message, URI_COMPONENT);
    Url::parse(&format!("https://wa.me/{number}?text={text}"))
}
