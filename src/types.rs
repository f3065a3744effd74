//! Core types exchanged with the Payriff gateway

use crate::config::ResolvedConfig;
use crate::{PayriffError, Result};
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

/// Language of the hosted payment page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Language {
    #[default]
    Az,
    En,
    Ru,
}

impl Language {
    /// Get the wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Az => "AZ",
            Language::En => "EN",
            Language::Ru => "RU",
        }
    }
}

/// Currency of an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Azn,
    Usd,
    Eur,
}

impl Currency {
    /// Get the ISO 4217 code
    pub fn as_str(&self) -> &'static str {
        match self {
            Currency::Azn => "AZN",
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
        }
    }
}

/// Payment operation kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Operation {
    /// Single step charge
    Purchase,
    /// Reserve funds now, capture later with `complete`
    PreAuth,
}

impl Operation {
    /// Get the wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Purchase => "PURCHASE",
            Operation::PreAuth => "PRE_AUTH",
        }
    }
}

/// Payment status of an order or transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    Created,
    Approved,
    Canceled,
    Declined,
    Refunded,
    PreauthApproved,
    Expired,
    Reverse,
    PartialRefund,
}

/// Business result code carried by every envelope
///
/// Codes the gateway documents get their own variant; anything else is kept
/// verbatim in [`ResultCode::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ResultCode {
    /// `00000`
    Success,
    /// `00`
    SuccessGateway,
    /// `APPROVED`
    Approved,
    /// `PREAUTH-APPROVED`
    PreauthApproved,
    /// `01000`
    Warning,
    /// `15000`
    Error,
    /// `15400`
    InvalidParameters,
    /// `14010`
    Unauthorized,
    /// `14013`
    TokenNotPresent,
    /// `14014`
    InvalidToken,
    /// Undocumented code
    Other(String),
}

impl ResultCode {
    /// Get the wire representation
    pub fn as_str(&self) -> &str {
        match self {
            ResultCode::Success => "00000",
            ResultCode::SuccessGateway => "00",
            ResultCode::Approved => "APPROVED",
            ResultCode::PreauthApproved => "PREAUTH-APPROVED",
            ResultCode::Warning => "01000",
            ResultCode::Error => "15000",
            ResultCode::InvalidParameters => "15400",
            ResultCode::Unauthorized => "14010",
            ResultCode::TokenNotPresent => "14013",
            ResultCode::InvalidToken => "14014",
            ResultCode::Other(code) => code,
        }
    }

    /// True for `00000` and `00` only
    pub fn is_success(&self) -> bool {
        matches!(self, ResultCode::Success | ResultCode::SuccessGateway)
    }
}

impl From<&str> for ResultCode {
    fn from(code: &str) -> Self {
        match code {
            "00000" => ResultCode::Success,
            "00" => ResultCode::SuccessGateway,
            "APPROVED" => ResultCode::Approved,
            "PREAUTH-APPROVED" => ResultCode::PreauthApproved,
            "01000" => ResultCode::Warning,
            "15000" => ResultCode::Error,
            "15400" => ResultCode::InvalidParameters,
            "14010" => ResultCode::Unauthorized,
            "14013" => ResultCode::TokenNotPresent,
            "14014" => ResultCode::InvalidToken,
            other => ResultCode::Other(other.to_string()),
        }
    }
}

impl From<String> for ResultCode {
    fn from(code: String) -> Self {
        match ResultCode::from(code.as_str()) {
            ResultCode::Other(_) => ResultCode::Other(code),
            known => known,
        }
    }
}

impl From<ResultCode> for String {
    fn from(code: ResultCode) -> Self {
        match code {
            ResultCode::Other(code) => code,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for ResultCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Check whether a result code reports success
pub fn is_successful(code: &ResultCode) -> bool {
    code.is_success()
}

/// Decode `null` the same as a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Request body for `POST /orders`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateOrderRequest {
    /// Order amount in major currency units
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub description: String,
    pub operation: Operation,
    /// Ask the gateway to store the card for later auto-pay
    #[serde(rename = "cardSave")]
    pub card_save: bool,
    /// Falls back to the client's default language
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<Language>,
    /// Falls back to the client's default currency
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<Currency>,
    /// Falls back to the client's default callback URL
    #[serde(rename = "callbackUrl", skip_serializing_if = "Option::is_none")]
    pub callback_url: Option<String>,
}

impl CreateOrderRequest {
    /// Create a new order request without card saving
    pub fn new(amount: Decimal, description: impl Into<String>, operation: Operation) -> Self {
        Self {
            amount,
            description: description.into(),
            operation,
            card_save: false,
            language: None,
            currency: None,
            callback_url: None,
        }
    }

    /// Set the card-save flag
    pub fn with_card_save(mut self, card_save: bool) -> Self {
        self.card_save = card_save;
        self
    }

    /// Set the payment page language
    pub fn with_language(mut self, language: Language) -> Self {
        self.language = Some(language);
        self
    }

    /// Set the order currency
    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = Some(currency);
        self
    }

    /// Set the callback URL
    pub fn with_callback_url(mut self, url: impl Into<String>) -> Self {
        self.callback_url = Some(url.into());
        self
    }

    pub(crate) fn fill_defaults(mut self, config: &ResolvedConfig) -> Self {
        self.language = self.language.or(Some(config.language));
        self.currency = self.currency.or(Some(config.currency));
        if self.callback_url.is_none() {
            self.callback_url = config.callback_url.clone();
        }
        self
    }
}

/// Payload returned by `POST /orders`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderPayload {
    #[serde(rename = "orderId")]
    pub order_id: String,
    /// Hosted payment page the customer should be sent to
    #[serde(rename = "paymentUrl")]
    pub payment_url: String,
    #[serde(rename = "transactionId")]
    pub transaction_id: i64,
}

/// Masked details of the card used in a transaction
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDetails {
    #[serde(rename = "maskedPan", default, deserialize_with = "null_as_default")]
    pub masked_pan: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub brand: String,
    #[serde(rename = "cardHolderName", default, deserialize_with = "null_as_default")]
    pub card_holder_name: String,
}

/// Installment plan attached to a transaction
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Installment {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub period: Option<String>,
}

/// A single payment attempt belonging to an order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub uuid: String,
    #[serde(rename = "createdDate", default, deserialize_with = "null_as_default")]
    pub created_date: String,
    pub status: Status,
    #[serde(default, deserialize_with = "null_as_default")]
    pub channel: String,
    #[serde(rename = "channelType", default, deserialize_with = "null_as_default")]
    pub channel_type: String,
    #[serde(rename = "requestRrn", default, deserialize_with = "null_as_default")]
    pub request_rrn: String,
    #[serde(rename = "responseRrn")]
    pub response_rrn: Option<String>,
    /// Masked card number
    #[serde(default, deserialize_with = "null_as_default")]
    pub pan: String,
    #[serde(rename = "paymentWay", default, deserialize_with = "null_as_default")]
    pub payment_way: String,
    #[serde(rename = "cardDetails", default, deserialize_with = "null_as_default")]
    pub card_details: CardDetails,
    /// Saved card identifier, usable with auto-pay
    #[serde(rename = "cardUuid", skip_serializing_if = "Option::is_none")]
    pub card_uuid: Option<String>,
    #[serde(rename = "merchantCategory", default, deserialize_with = "null_as_default")]
    pub merchant_category: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub installment: Installment,
    #[serde(rename = "deliveryAddress")]
    pub delivery_address: Option<String>,
}

/// Full state of an order, returned by order lookup and auto-pay
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderInfo {
    #[serde(rename = "orderId")]
    pub order_id: String,
    #[serde(rename = "invoiceUuid")]
    pub invoice_uuid: Option<String>,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    #[serde(rename = "currencyType")]
    pub currency_type: Currency,
    #[serde(rename = "merchantName", default, deserialize_with = "null_as_default")]
    pub merchant_name: String,
    #[serde(
        rename = "commissionRate",
        default,
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub commission_rate: Option<Decimal>,
    #[serde(rename = "operationType")]
    pub operation_type: Operation,
    #[serde(rename = "paymentStatus")]
    pub payment_status: Status,
    /// Whether the order was charged through auto-pay
    pub auto: bool,
    #[serde(rename = "createdDate", default, deserialize_with = "null_as_default")]
    pub created_date: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    /// Transactions in the order the gateway reported them
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub transactions: Vec<Transaction>,
}

/// Request body for `POST /refund`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RefundRequest {
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    #[serde(rename = "orderId")]
    pub order_id: String,
}

impl RefundRequest {
    /// Create a new refund request
    pub fn new(amount: Decimal, order_id: impl Into<String>) -> Self {
        Self {
            amount,
            order_id: order_id.into(),
        }
    }
}

/// Request body for `POST /complete`, capturing a pre-authorized order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompleteRequest {
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    #[serde(rename = "orderId")]
    pub order_id: String,
}

impl CompleteRequest {
    /// Create a new complete request
    pub fn new(amount: Decimal, order_id: impl Into<String>) -> Self {
        Self {
            amount,
            order_id: order_id.into(),
        }
    }
}

/// Request body for `POST /autoPay`, charging a saved card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AutoPayRequest {
    #[serde(rename = "cardUuid")]
    pub card_uuid: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub description: String,
    pub operation: Operation,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<Currency>,
    #[serde(rename = "callbackUrl", skip_serializing_if = "Option::is_none")]
    pub callback_url: Option<String>,
}

impl AutoPayRequest {
    /// Create a new auto-pay request
    pub fn new(
        card_uuid: impl Into<String>,
        amount: Decimal,
        description: impl Into<String>,
        operation: Operation,
    ) -> Self {
        Self {
            card_uuid: card_uuid.into(),
            amount,
            description: description.into(),
            operation,
            currency: None,
            callback_url: None,
        }
    }

    /// Set the charge currency
    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = Some(currency);
        self
    }

    /// Set the callback URL
    pub fn with_callback_url(mut self, url: impl Into<String>) -> Self {
        self.callback_url = Some(url.into());
        self
    }

    pub(crate) fn fill_defaults(mut self, config: &ResolvedConfig) -> Self {
        self.currency = self.currency.or(Some(config.currency));
        if self.callback_url.is_none() {
            self.callback_url = config.callback_url.clone();
        }
        self
    }
}

/// Response envelope wrapping every gateway answer
///
/// The payload is `None` when the gateway sends `null` or omits it, which is
/// common for business failures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub code: ResultCode,
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub route: String,
    #[serde(rename = "internalMessage", default)]
    pub internal_message: Option<String>,
    #[serde(rename = "responseId", default, deserialize_with = "null_as_default")]
    pub response_id: String,
    #[serde(default)]
    pub payload: Option<T>,
}

/// Envelope as decoded by the dispatcher, payload still untyped
pub type Envelope = ApiResponse<Value>;

impl<T> ApiResponse<T> {
    /// Check the envelope's result code
    pub fn is_successful(&self) -> bool {
        self.code.is_success()
    }

    /// Replace the payload, keeping the envelope metadata
    pub fn with_payload<U>(self, payload: Option<U>) -> ApiResponse<U> {
        ApiResponse {
            code: self.code,
            message: self.message,
            route: self.route,
            internal_message: self.internal_message,
            response_id: self.response_id,
            payload,
        }
    }
}

impl ApiResponse<Value> {
    /// Decode the untyped payload into `T`
    pub fn decode_payload<T: DeserializeOwned>(mut self) -> Result<ApiResponse<T>> {
        let payload = match self.payload.take() {
            Some(value) => Some(serde_json::from_value(value).map_err(PayriffError::Decode)?),
            None => None,
        };
        Ok(self.with_payload(payload))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::str::FromStr;

    #[test]
    fn test_enum_wire_names() {
        assert_eq!(json!(Operation::PreAuth), json!("PRE_AUTH"));
        assert_eq!(json!(Status::PreauthApproved), json!("PREAUTH_APPROVED"));
        assert_eq!(json!(Status::PartialRefund), json!("PARTIAL_REFUND"));
        assert_eq!(json!(Language::Ru), json!("RU"));
        assert_eq!(json!(Currency::Eur), json!("EUR"));
        assert_eq!(Operation::Purchase.as_str(), "PURCHASE");
    }

    #[test]
    fn test_result_code_mapping() {
        assert_eq!(ResultCode::from("00000"), ResultCode::Success);
        assert_eq!(ResultCode::from("15400"), ResultCode::InvalidParameters);
        assert_eq!(
            ResultCode::from("99999"),
            ResultCode::Other("99999".to_string())
        );
        assert_eq!(String::from(ResultCode::TokenNotPresent), "14013");
        assert_eq!(ResultCode::PreauthApproved.to_string(), "PREAUTH-APPROVED");

        let code: ResultCode = serde_json::from_value(json!("14014")).unwrap();
        assert_eq!(code, ResultCode::InvalidToken);
        assert_eq!(json!(ResultCode::Other("X1".into())), json!("X1"));
    }

    #[test]
    fn test_is_successful() {
        assert!(is_successful(&ResultCode::from("00000")));
        assert!(is_successful(&ResultCode::from("00")));

        for code in [
            "APPROVED",
            "PREAUTH-APPROVED",
            "01000",
            "15000",
            "15400",
            "14010",
            "14013",
            "14014",
            "",
        ] {
            assert!(!is_successful(&ResultCode::from(code)), "code {code}");
        }
    }

    #[test]
    fn test_create_order_request_round_trip() {
        let request = CreateOrderRequest::new(
            Decimal::from_str("10.99").unwrap(),
            "Premium plan",
            Operation::PreAuth,
        )
        .with_card_save(true)
        .with_language(Language::En)
        .with_currency(Currency::Usd)
        .with_callback_url("https://shop.example/callback");

        let encoded = serde_json::to_string(&request).unwrap();
        let decoded: CreateOrderRequest = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, request);
    }

    #[test]
    fn test_create_order_request_wire_format() {
        let request =
            CreateOrderRequest::new(Decimal::from_str("10.99").unwrap(), "x", Operation::Purchase);

        let body = serde_json::to_string(&request).unwrap();
        assert!(body.contains(r#""amount":10.99"#), "{body}");
        assert!(body.contains(r#""operation":"PURCHASE""#), "{body}");
        assert!(body.contains(r#""cardSave":false"#), "{body}");
        assert!(!body.contains("language"));
        assert!(!body.contains("callbackUrl"));
    }

    #[test]
    fn test_fill_defaults_keeps_explicit_values() {
        let config = ResolvedConfig {
            callback_url: Some("https://default.example/cb".to_string()),
            language: Language::Ru,
            currency: Currency::Eur,
            ..ResolvedConfig::default()
        };

        let filled = CreateOrderRequest::new(Decimal::ONE, "x", Operation::Purchase)
            .with_currency(Currency::Usd)
            .fill_defaults(&config);
        assert_eq!(filled.language, Some(Language::Ru));
        assert_eq!(filled.currency, Some(Currency::Usd));
        assert_eq!(
            filled.callback_url.as_deref(),
            Some("https://default.example/cb")
        );

        let filled = AutoPayRequest::new("card-1", Decimal::ONE, "x", Operation::Purchase)
            .with_callback_url("https://own.example/cb")
            .fill_defaults(&config);
        assert_eq!(filled.currency, Some(Currency::Eur));
        assert_eq!(filled.callback_url.as_deref(), Some("https://own.example/cb"));
    }

    #[test]
    fn test_order_info_decoding() {
        let info: OrderInfo = serde_json::from_value(json!({
            "orderId": "O1",
            "invoiceUuid": null,
            "amount": 25.5,
            "currencyType": "AZN",
            "merchantName": "Shop",
            "commissionRate": 1.5,
            "operationType": "PURCHASE",
            "paymentStatus": "APPROVED",
            "auto": false,
            "createdDate": "2024-05-01T10:00:00",
            "description": "Order",
            "transactions": [{
                "uuid": "T1",
                "createdDate": "2024-05-01T10:00:01",
                "status": "APPROVED",
                "channel": "WEB",
                "channelType": "ECOM",
                "requestRrn": "111",
                "responseRrn": null,
                "pan": "4169********1234",
                "paymentWay": "CARD",
                "cardDetails": {
                    "maskedPan": "4169********1234",
                    "brand": "VISA",
                    "cardHolderName": "JOHN DOE"
                },
                "merchantCategory": "5999",
                "installment": { "type": null, "period": null },
                "deliveryAddress": null
            }]
        }))
        .unwrap();

        assert_eq!(info.amount, Decimal::from_str("25.5").unwrap());
        assert_eq!(info.commission_rate, Some(Decimal::from_str("1.5").unwrap()));
        assert_eq!(info.payment_status, Status::Approved);
        assert_eq!(info.transactions.len(), 1);
        assert_eq!(info.transactions[0].card_details.brand, "VISA");
        assert_eq!(info.transactions[0].response_rrn, None);
        assert_eq!(info.transactions[0].card_uuid, None);
    }

    #[test]
    fn test_order_info_without_transactions() {
        let info: OrderInfo = serde_json::from_value(json!({
            "orderId": "O2",
            "amount": 3,
            "currencyType": "USD",
            "merchantName": "Shop",
            "operationType": "PRE_AUTH",
            "paymentStatus": "PREAUTH_APPROVED",
            "auto": true,
            "createdDate": "2024-05-01T10:00:00",
            "description": "Order"
        }))
        .unwrap();

        assert!(info.transactions.is_empty());
        assert_eq!(info.invoice_uuid, None);
        assert_eq!(info.commission_rate, None);
        assert_eq!(info.amount, Decimal::from(3));
    }

    #[test]
    fn test_order_info_null_fields_decode_as_defaults() {
        let info: OrderInfo = serde_json::from_value(json!({
            "orderId": "O3",
            "amount": 5.5,
            "currencyType": "AZN",
            "merchantName": null,
            "operationType": "PURCHASE",
            "paymentStatus": "CREATED",
            "auto": false,
            "createdDate": null,
            "description": null,
            "transactions": null
        }))
        .unwrap();

        assert!(info.transactions.is_empty());
        assert_eq!(info.description, "");
        assert_eq!(info.merchant_name, "");
        assert_eq!(info.created_date, "");
    }

    #[test]
    fn test_transaction_null_fields_decode_as_defaults() {
        let transaction: Transaction = serde_json::from_value(json!({
            "uuid": "T1",
            "createdDate": "2024-05-01T10:00:00",
            "status": "DECLINED",
            "channel": null,
            "channelType": "WEB",
            "requestRrn": null,
            "responseRrn": null,
            "pan": "4169********1234",
            "paymentWay": "CARD",
            "cardDetails": {
                "maskedPan": "4169********1234",
                "brand": "VISA",
                "cardHolderName": null
            },
            "merchantCategory": null,
            "installment": null
        }))
        .unwrap();

        assert_eq!(transaction.status, Status::Declined);
        assert_eq!(transaction.channel, "");
        assert_eq!(transaction.request_rrn, "");
        assert_eq!(transaction.card_details.brand, "VISA");
        assert_eq!(transaction.card_details.card_holder_name, "");
        assert_eq!(transaction.installment, Installment::default());

        let transaction: Transaction = serde_json::from_value(json!({
            "uuid": "T2",
            "status": "APPROVED",
            "cardDetails": null
        }))
        .unwrap();
        assert_eq!(transaction.card_details, CardDetails::default());
    }

    #[test]
    fn test_envelope_null_metadata() {
        let envelope: Envelope = serde_json::from_value(json!({
            "code": "15400",
            "message": null,
            "route": null,
            "responseId": null,
            "internalMessage": null,
            "payload": null
        }))
        .unwrap();

        assert_eq!(envelope.message, "");
        assert_eq!(envelope.route, "");
        assert_eq!(envelope.response_id, "");
        assert!(!envelope.is_successful());
    }

    #[test]
    fn test_envelope_decode_payload() {
        let envelope: Envelope = serde_json::from_value(json!({
            "code": "00000",
            "message": "Operation performed successfully",
            "route": "/api/v3/orders",
            "internalMessage": null,
            "responseId": "r-1",
            "payload": { "orderId": "O1", "paymentUrl": "https://pay/O1", "transactionId": 7 }
        }))
        .unwrap();

        let typed = envelope.decode_payload::<OrderPayload>().unwrap();
        assert!(typed.is_successful());
        assert_eq!(typed.response_id, "r-1");
        assert_eq!(
            typed.payload,
            Some(OrderPayload {
                order_id: "O1".to_string(),
                payment_url: "https://pay/O1".to_string(),
                transaction_id: 7,
            })
        );
    }

    #[test]
    fn test_envelope_null_payload_and_shape_mismatch() {
        let envelope: Envelope = serde_json::from_value(json!({
            "code": "15400",
            "message": "Invalid parameters",
            "payload": null
        }))
        .unwrap();
        let typed = envelope.decode_payload::<OrderPayload>().unwrap();
        assert_eq!(typed.code, ResultCode::InvalidParameters);
        assert_eq!(typed.payload, None);
        assert_eq!(typed.route, "");

        let envelope: Envelope = serde_json::from_value(json!({
            "code": "00000",
            "payload": { "unexpected": true }
        }))
        .unwrap();
        let err = envelope.decode_payload::<OrderPayload>().unwrap_err();
        assert!(err.is_decode());
    }
}
