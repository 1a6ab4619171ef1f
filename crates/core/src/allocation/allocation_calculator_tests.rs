#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use crate::allocation::{build_allocation, weight_pct};
    use crate::holdings::HoldingView;

    fn view(symbol: &str, market_value: Decimal) -> HoldingView {
        HoldingView {
            symbol: symbol.to_string(),
            shares: dec!(1),
            current_price: market_value,
            market_value,
            average_cost: Decimal::ZERO,
            profit_loss: Decimal::ZERO,
            profit_loss_per_share: Decimal::ZERO,
            percent_gain: Decimal::ZERO,
            weight_pct: Decimal::ZERO,
        }
    }

    #[test]
    fn test_weight_is_rounded_to_two_decimals() {
        assert_eq!(weight_pct(dec!(1000), dec!(3000)), dec!(33.33));
        assert_eq!(weight_pct(dec!(2500), dec!(10000)), dec!(25.00));
    }

    #[test]
    fn test_weight_with_zero_total_is_zero() {
        assert_eq!(weight_pct(dec!(1000), Decimal::ZERO), Decimal::ZERO);
    }

    #[test]
    fn test_cash_dilutes_the_slices() {
        let holdings = vec![view("AAPL", dec!(4000)), view("MSFT", dec!(1000))];
        // Total includes 5000 of cash on top of the positions.
        let slices = build_allocation(&holdings, dec!(10000));

        assert_eq!(slices.len(), 2);
        assert_eq!(slices[0].symbol, "AAPL");
        assert_eq!(slices[0].weight_pct, dec!(40.00));
        assert_eq!(slices[1].weight_pct, dec!(10.00));

        let summed: Decimal = slices.iter().map(|s| s.weight_pct).sum();
        assert!(summed < dec!(100));
    }

    #[test]
    fn test_empty_holdings_produce_no_slices() {
        assert!(build_allocation(&[], dec!(100000)).is_empty());
    }
}
