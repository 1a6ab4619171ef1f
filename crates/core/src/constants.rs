use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Opening cash balance for a newly provisioned portfolio
pub const DEFAULT_CASH_BALANCE: Decimal = dec!(100000.00);

/// Decimal precision for stored amounts
pub const DECIMAL_PRECISION: u32 = 6;

/// Decimal precision for percentages shown to users
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Short trailing SMA window over the portfolio value series (days)
pub const PORTFOLIO_SMA_SHORT: usize = 7;

/// Long trailing SMA window over the portfolio value series (days)
pub const PORTFOLIO_SMA_LONG: usize = 30;

/// Trailing SMA windows over a looked-up symbol's closing prices (days)
pub const CLOSE_SMA_WINDOWS: [usize; 4] = [20, 50, 150, 200];

/// Trailing moving-average window over a looked-up symbol's volumes (days)
pub const VOLUME_MA_WINDOW: usize = 30;

/// Longest ticker symbol accepted from user input
pub const MAX_SYMBOL_LENGTH: usize = 10;
