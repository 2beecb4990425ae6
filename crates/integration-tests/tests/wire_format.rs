//! Integration tests for the exact shape of the order envelope.

use pie_order_core::{OrderAssembler, OrderDocument, PaymentRecord};
use pie_order_integration_tests::{sample_profile, sample_profile_with_card, sample_request};
use rust_decimal::Decimal;
use serde_json::json;

#[test]
#[allow(clippy::unwrap_used)]
fn test_envelope_matches_service_layout() {
    let profile = sample_profile();
    let document = OrderAssembler::new(&profile).assemble(sample_request()).unwrap();

    let expected = json!({
        "Order": {
            "Address": {
                "Street": "1 Main St",
                "City": "Springfield",
                "Region": "IL",
                "PostalCode": "62701",
                "Type": "House",
                "DeliveryInstructions": ""
            },
            "Coupons": [],
            "CustomerID": "",
            "Email": "pat@example.com",
            "Extension": "",
            "FirstName": "Pat",
            "LastName": "Doe",
            "LanguageCode": "en",
            "OrderChannel": "OLO",
            "OrderID": "",
            "OrderMethod": "Web",
            "OrderTaker": {},
            "Payments": [{
                "Type": "DoorCredit",
                "Amount": 0.0,
                "Number": "",
                "CardType": "",
                "Expiration": "",
                "SecurityCode": "",
                "PostalCode": "",
                "ProviderID": ""
            }],
            "Phone": "5555550100",
            "PhonePrefix": "",
            "Products": [{
                "Code": "14SCREEN",
                "Qty": 1,
                "ID": 0,
                "isNew": true,
                "ShowBestPriceMessage": false,
                "Options": {"P": {"1/2": "1"}}
            }],
            "ServiceMethod": "Delivery",
            "SourceOrganizationURI": "order.dominos.com",
            "StoreID": "4336",
            "Tags": {},
            "Version": "1.0",
            "NoCombine": true,
            "Partners": {},
            "HotspotsLite": false,
            "OrderInfoCollection": [],
            "NewUser": true
        }
    });

    assert_eq!(document.to_envelope().unwrap(), expected);
}

#[test]
#[allow(clippy::unwrap_used)]
fn test_each_option_has_exactly_one_key() {
    let profile = sample_profile();
    let document = OrderAssembler::new(&profile).assemble(sample_request()).unwrap();
    let envelope = document.to_envelope().unwrap();

    let options = envelope["Order"]["Products"][0]["Options"].as_object().unwrap();
    for (code, option) in options {
        let keys = option.as_object().unwrap();
        assert_eq!(keys.len(), 1, "option {code} should set one placement");
    }
}

#[test]
#[allow(clippy::unwrap_used)]
fn test_envelope_decodes_back() {
    let profile = sample_profile();
    let document = OrderAssembler::new(&profile).assemble(sample_request()).unwrap();

    let text = serde_json::to_string(&document.to_envelope().unwrap()).unwrap();
    assert_eq!(OrderDocument::from_envelope(&text).unwrap(), document);
}

#[test]
#[allow(clippy::unwrap_used)]
fn test_card_payment_decodes_back() {
    let profile = sample_profile_with_card();
    for amount in [Decimal::new(1999, 2), Decimal::new(10, 2), Decimal::new(123_456_789_012, 2)] {
        let mut request = sample_request();
        request.payments = vec![profile.card_payment(amount).unwrap().unwrap()];
        let document = OrderAssembler::new(&profile).assemble(request).unwrap();

        let text = serde_json::to_string(&document.to_envelope().unwrap()).unwrap();
        let decoded = OrderDocument::from_envelope(&text).unwrap();
        assert_eq!(decoded.payments()[0].amount, amount);
        assert_eq!(decoded, document);
    }
}

#[test]
#[allow(clippy::unwrap_used)]
fn test_amount_that_cannot_travel_exactly_is_rejected() {
    let profile = sample_profile_with_card();
    for amount in [
        Decimal::new(12_345_678_901_234_567, 4),
        Decimal::new(1_234_567_890_123_456_789, 1),
    ] {
        let err = profile.card_payment(amount).unwrap_err();
        assert_eq!(err.field(), Some("Amount"));

        let mut request = sample_request();
        request.payments = vec![PaymentRecord {
            amount,
            ..PaymentRecord::default()
        }];
        let err = OrderAssembler::new(&profile).assemble(request).unwrap_err();
        assert_eq!(err.field(), Some("Amount"));
    }
}

#[test]
#[allow(clippy::unwrap_used)]
fn test_option_with_two_placements_is_rejected() {
    let profile = sample_profile();
    let document = OrderAssembler::new(&profile).assemble(sample_request()).unwrap();
    let mut envelope = document.to_envelope().unwrap();

    envelope["Order"]["Products"][0]["Options"]["P"]["1/1"] = json!("1");
    let text = serde_json::to_string(&envelope).unwrap();
    assert!(OrderDocument::from_envelope(&text).is_err());
}
