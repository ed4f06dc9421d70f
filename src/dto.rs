use chrono::{DateTime, FixedOffset, Utc};
use rust_decimal::Decimal;
use rust_decimal::RoundingStrategy;
use serde::de::Deserializer;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A ledger entry keyed by a numeric id, as handled by the console loop.
///
/// Serializes to `{"id":…,"transactionDate":…,"amount":…}` with the timestamp
/// in millisecond precision plus offset, e.g. `2019-04-03T00:00:00.000+00:00`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: u32,
    #[serde(with = "iso_millis")]
    pub transaction_date: DateTime<Utc>,
    #[serde(
        serialize_with = "rust_decimal::serde::float::serialize",
        deserialize_with = "deserialize_decimal_4dp"
    )]
    pub amount: Decimal,
}

/// A record keyed by a GUID, as handled by the HTTP API.
///
/// The client-supplied offset in `operationDate` is preserved on the way back
/// out; the JSON shape is `{"id":…,"operationDate":…,"amount":…}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Entity {
    pub id: Uuid,
    pub operation_date: DateTime<FixedOffset>,
    #[serde(
        serialize_with = "rust_decimal::serde::float::serialize",
        deserialize_with = "deserialize_decimal_4dp"
    )]
    pub amount: Decimal,
}

/// Truncates an amount to 4 decimal places.
pub(crate) fn round_4dp(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(4, RoundingStrategy::ToZero)
}

fn deserialize_decimal_4dp<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    <Decimal as Deserialize>::deserialize(deserializer).map(round_4dp)
}

/// Fixed-width ISO-8601 timestamps: milliseconds and a numeric offset.
pub(crate) mod iso_millis {
    use chrono::{DateTime, Utc};
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f%:z";

    pub fn serialize<S>(timestamp: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&timestamp.format(FORMAT))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_str(&raw, FORMAT)
            .map(|timestamp| timestamp.with_timezone(&Utc))
            .map_err(Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};
    use rust_decimal_macros::dec;

    fn timestamp(year: i32, month: u32, day: u32) -> DateTime<Utc> {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_time(NaiveTime::MIN)
            .and_utc()
    }

    #[test]
    fn test_transaction_serializes_with_fixed_timestamp_format() {
        let transaction = Transaction {
            id: 7,
            transaction_date: timestamp(2019, 4, 3),
            amount: dec!(100.5),
        };
        assert_eq!(
            serde_json::to_string(&transaction).unwrap(),
            r#"{"id":7,"transactionDate":"2019-04-03T00:00:00.000+00:00","amount":100.5}"#
        );
    }

    #[test]
    fn test_transaction_round_trips() {
        let transaction = Transaction {
            id: 42,
            transaction_date: timestamp(2020, 12, 31),
            amount: dec!(0.25),
        };
        let json = serde_json::to_string(&transaction).unwrap();
        assert_eq!(serde_json::from_str::<Transaction>(&json).unwrap(), transaction);
    }

    #[test]
    fn test_entity_parses_full_precision_wire_shape() {
        // Full-precision fraction, non-UTC offset, amount as a JSON number.
        let json = r#"{
            "id": "cfaa0d3f-7fea-4423-9f69-ebff826e2f89",
            "operationDate": "2019-04-02T13:10:20.0263632+03:00",
            "amount": 23.05
        }"#;
        let entity: Entity = serde_json::from_str(json).unwrap();

        assert_eq!(
            entity.id,
            Uuid::parse_str("cfaa0d3f-7fea-4423-9f69-ebff826e2f89").unwrap()
        );
        assert_eq!(entity.operation_date.offset().local_minus_utc(), 3 * 3600);
        assert_eq!(entity.amount, dec!(23.05));
    }

    #[test]
    fn test_entity_keeps_client_offset_on_serialize() {
        let json = r#"{"id":"cfaa0d3f-7fea-4423-9f69-ebff826e2f89","operationDate":"2019-04-02T13:10:20+03:00","amount":23.05}"#;
        let entity: Entity = serde_json::from_str(json).unwrap();
        assert_eq!(serde_json::to_string(&entity).unwrap(), json);
    }

    #[test]
    fn test_amount_truncates_to_4_decimal_places() {
        let entity: Entity = serde_json::from_str(
            r#"{"id":"cfaa0d3f-7fea-4423-9f69-ebff826e2f89","operationDate":"2019-04-02T13:10:20+03:00","amount":"0.123499999"}"#,
        )
        .unwrap();
        // Truncated toward zero, not rounded to nearest.
        assert_eq!(entity.amount, dec!(0.1234));
    }

    #[test]
    fn test_amount_accepts_numbers_and_strings() {
        let as_number: Transaction = serde_json::from_str(
            r#"{"id":1,"transactionDate":"2019-04-03T00:00:00.000+00:00","amount":100.5}"#,
        )
        .unwrap();
        let as_string: Transaction = serde_json::from_str(
            r#"{"id":1,"transactionDate":"2019-04-03T00:00:00.000+00:00","amount":"100.5"}"#,
        )
        .unwrap();
        assert_eq!(as_number, as_string);
    }

    #[test]
    fn test_malformed_guid_is_rejected() {
        let result: Result<Entity, _> = serde_json::from_str(
            r#"{"id":"not-a-guid","operationDate":"2019-04-02T13:10:20+03:00","amount":1}"#,
        );
        assert!(result.is_err());
    }
}
