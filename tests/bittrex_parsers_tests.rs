use anyhow::Result;
use rust_decimal_macros::dec;
use serde_json::json;

use market_depth::infrastructure::exchange::bittrex::BittrexParser;
use market_depth::OrderBookEntry;

#[test]
fn test_parse_order_book_json() -> Result<()> {
    let json_data = json!({
        "success": true,
        "message": "",
        "result": {
            "buy": [
                {"Quantity": 10.0, "Rate": 99.5},
                {"Quantity": 5, "Rate": 98.25}
            ],
            "sell": [
                {"Quantity": 3.0, "Rate": 100.5},
                {"Quantity": 0.125, "Rate": 101.75}
            ]
        }
    });

    let book = BittrexParser::parse_order_book(&json_data)?;

    // Order from the exchange is kept, best price first
    assert_eq!(
        book.bids,
        vec![
            OrderBookEntry::new(dec!(99.5), dec!(10)),
            OrderBookEntry::new(dec!(98.25), dec!(5)),
        ]
    );
    assert_eq!(
        book.asks,
        vec![
            OrderBookEntry::new(dec!(100.5), dec!(3)),
            OrderBookEntry::new(dec!(101.75), dec!(0.125)),
        ]
    );
    assert_eq!(book.mid_price()?, dec!(100));

    Ok(())
}

#[test]
fn test_parse_order_book_with_null_side() -> Result<()> {
    let json_data = json!({
        "success": true,
        "message": "",
        "result": {
            "buy": [{"Quantity": 1.0, "Rate": 0.5}],
            "sell": null
        }
    });

    let book = BittrexParser::parse_order_book(&json_data)?;

    assert_eq!(book.bids.len(), 1);
    assert!(book.asks.is_empty());
    assert!(book.mid_price().is_err());

    Ok(())
}

#[test]
fn test_parse_ticker_json_quantizes_prices() -> Result<()> {
    let json_data = json!({
        "success": true,
        "message": "",
        "result": {"Bid": 0.0699, "Ask": 0.0701, "Last": 0.07}
    });

    let ticker = BittrexParser::parse_ticker(&json_data)?;

    assert_eq!(ticker.last.to_string(), "0.07000000");
    assert_eq!(ticker.bid.to_string(), "0.06990000");
    assert_eq!(ticker.ask.to_string(), "0.07010000");

    Ok(())
}

#[test]
fn test_unsuccessful_response_is_an_error() {
    let json_data = json!({
        "success": false,
        "message": "INVALID_MARKET",
        "result": null
    });

    let err = BittrexParser::parse_order_book(&json_data).unwrap_err();
    assert!(err.to_string().contains("INVALID_MARKET"));

    let err = BittrexParser::parse_ticker(&json_data).unwrap_err();
    assert!(err.to_string().contains("INVALID_MARKET"));
}

#[test]
fn test_missing_result_is_an_error() {
    let json_data = json!({"success": true, "message": ""});
    assert!(BittrexParser::parse_order_book(&json_data).is_err());
}

#[test]
fn test_malformed_entry_is_an_error() {
    let json_data = json!({
        "success": true,
        "message": "",
        "result": {
            "buy": [{"Quantity": "lots", "Rate": 1.0}],
            "sell": []
        }
    });
    assert!(BittrexParser::parse_order_book(&json_data).is_err());
}
