/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 5/11/25
******************************************************************************/

//! Interactive command loop.
//!
//! One cycle per iteration: display the menu, read a selection, prompt for
//! the operation's fields, validate locally, call the bound service, render
//! the outcome, append one log record. A failure in any iteration is
//! reported and the loop continues; only an explicit exit or a closed input
//! stream terminates it.
//!
//! The loop is written against injected `BufRead`/`Write` streams and the
//! [`Services`] trait objects, so tests drive it with scripted input and
//! counting stubs.

use crate::application::models::order::{NewOrderRequest, Side, normalize_symbol};
use crate::application::services::Services;
use crate::error::AppError;
use crate::presentation::{account, market, order};
use std::io::{self, BufRead, Write};
use tracing::{error, info, warn};

/// Menu rendering and selection parsing
pub mod menu;

/// Input reading and local parsing
pub mod input;

use input::{parse_decimal, parse_order_id, prompt};
use menu::MenuChoice;

/// Runs menu cycles until the user exits or the input stream closes.
pub async fn run<R: BufRead, W: Write>(
    services: &Services,
    input: &mut R,
    out: &mut W,
) -> io::Result<()> {
    writeln!(out, "Connected to the Binance Futures Testnet.")?;

    loop {
        write!(out, "{}", menu::render_menu())?;
        let Some(raw) = prompt(input, out, "Select an option (1-9): ")? else {
            writeln!(out)?;
            info!("SESSION CLOSED input stream ended");
            break;
        };

        let Ok(choice) = raw.parse::<MenuChoice>() else {
            writeln!(out, "Invalid choice. Enter a number between 1 and 9.")?;
            continue;
        };

        match choice {
            MenuChoice::Exit => {
                writeln!(out, "Goodbye.")?;
                info!("SESSION CLOSED by user");
                break;
            }
            MenuChoice::AccountInfo => account_info(services, out).await?,
            MenuChoice::CurrentPrice => current_price(services, input, out).await?,
            MenuChoice::MarketOrder => market_order(services, input, out).await?,
            MenuChoice::LimitOrder => limit_order(services, input, out).await?,
            MenuChoice::StopLimitOrder => stop_limit_order(services, input, out).await?,
            MenuChoice::OrderStatus => order_status(services, input, out).await?,
            MenuChoice::CancelOrder => cancel_order(services, input, out).await?,
            MenuChoice::OpenOrders => open_orders(services, input, out).await?,
        }
    }

    Ok(())
}

async fn account_info<W: Write>(services: &Services, out: &mut W) -> io::Result<()> {
    match services.account.get_account().await {
        Ok(info) => {
            info!(
                "ACCOUNT balance={:.2} available={:.2} pnl={:.2} open_positions={}",
                info.total_wallet_balance,
                info.available_balance,
                info.total_unrealized_profit,
                info.open_positions().count()
            );
            writeln!(out, "{}", account::render_account(&info))
        }
        Err(e) => report_failure(out, "ACCOUNT FAILED", "Could not fetch account info", &e),
    }
}

async fn current_price<R: BufRead, W: Write>(
    services: &Services,
    input: &mut R,
    out: &mut W,
) -> io::Result<()> {
    let Some(symbol) = prompt(input, out, "Symbol (e.g. BTCUSDT): ")? else {
        return Ok(());
    };
    let symbol = match normalize_symbol(&symbol) {
        Ok(symbol) => symbol,
        Err(e) => return report_validation(out, "price", &e),
    };

    match services.market.get_price(&symbol).await {
        Ok(ticker) => {
            info!("PRICE symbol={} price={}", ticker.symbol, ticker.price);
            writeln!(out, "{}", market::render_price(&ticker))
        }
        Err(e) => report_failure(out, "PRICE FAILED", "Could not fetch price", &e),
    }
}

async fn market_order<R: BufRead, W: Write>(
    services: &Services,
    input: &mut R,
    out: &mut W,
) -> io::Result<()> {
    writeln!(out, "-- Market order --")?;
    let Some(symbol) = prompt(input, out, "Symbol (e.g. BTCUSDT): ")? else {
        return Ok(());
    };
    let Some(side) = prompt(input, out, "Side (BUY/SELL): ")? else {
        return Ok(());
    };
    let Some(quantity) = prompt(input, out, "Quantity: ")? else {
        return Ok(());
    };

    let request = side
        .parse::<Side>()
        .and_then(|side| Ok((side, parse_decimal("quantity", &quantity)?)))
        .and_then(|(side, quantity)| NewOrderRequest::market(&symbol, side, quantity));

    match request {
        Ok(request) => place_order(services, out, request).await,
        Err(e) => report_validation(out, "market order", &e),
    }
}

async fn limit_order<R: BufRead, W: Write>(
    services: &Services,
    input: &mut R,
    out: &mut W,
) -> io::Result<()> {
    writeln!(out, "-- Limit order --")?;
    let Some(symbol) = prompt(input, out, "Symbol (e.g. BTCUSDT): ")? else {
        return Ok(());
    };
    let Some(side) = prompt(input, out, "Side (BUY/SELL): ")? else {
        return Ok(());
    };
    let Some(quantity) = prompt(input, out, "Quantity: ")? else {
        return Ok(());
    };
    let Some(price) = prompt(input, out, "Limit price: ")? else {
        return Ok(());
    };

    let request = side.parse::<Side>().and_then(|side| {
        let quantity = parse_decimal("quantity", &quantity)?;
        let price = parse_decimal("price", &price)?;
        NewOrderRequest::limit(&symbol, side, quantity, price)
    });

    match request {
        Ok(request) => place_order(services, out, request).await,
        Err(e) => report_validation(out, "limit order", &e),
    }
}

async fn stop_limit_order<R: BufRead, W: Write>(
    services: &Services,
    input: &mut R,
    out: &mut W,
) -> io::Result<()> {
    writeln!(out, "-- Stop-limit order --")?;
    let Some(symbol) = prompt(input, out, "Symbol (e.g. BTCUSDT): ")? else {
        return Ok(());
    };
    let Some(side) = prompt(input, out, "Side (BUY/SELL): ")? else {
        return Ok(());
    };
    let Some(quantity) = prompt(input, out, "Quantity: ")? else {
        return Ok(());
    };
    let Some(stop_price) = prompt(input, out, "Stop price: ")? else {
        return Ok(());
    };
    let Some(price) = prompt(input, out, "Limit price: ")? else {
        return Ok(());
    };

    let request = side.parse::<Side>().and_then(|side| {
        let quantity = parse_decimal("quantity", &quantity)?;
        let stop_price = parse_decimal("stop price", &stop_price)?;
        let price = parse_decimal("price", &price)?;
        NewOrderRequest::stop_limit(&symbol, side, quantity, stop_price, price)
    });

    match request {
        Ok(request) => place_order(services, out, request).await,
        Err(e) => report_validation(out, "stop-limit order", &e),
    }
}

/// Forwards a validated order and reports the outcome.
///
/// Exactly one log record per attempt: `ORDER SUCCESS` carries the
/// exchange-assigned id, `ORDER FAILED` carries the request parameters and
/// the error. Exchange rejections are surfaced verbatim behind the local
/// label.
async fn place_order<W: Write>(
    services: &Services,
    out: &mut W,
    request: NewOrderRequest,
) -> io::Result<()> {
    match services.order.place_order(&request).await {
        Ok(response) => {
            info!(
                "ORDER SUCCESS symbol={} side={} type={} qty={} orderId={} status={}",
                request.symbol,
                request.side,
                request.kind.wire_type(),
                request.quantity,
                response.order_id,
                response.status
            );
            writeln!(out, "Order placed successfully.")?;
            writeln!(out, "{}", order::render_order(&response))
        }
        Err(e) => {
            error!(
                "ORDER FAILED symbol={} side={} type={} qty={}: {}",
                request.symbol,
                request.side,
                request.kind.wire_type(),
                request.quantity,
                e
            );
            writeln!(out, "Order failed: {e}")
        }
    }
}

async fn order_status<R: BufRead, W: Write>(
    services: &Services,
    input: &mut R,
    out: &mut W,
) -> io::Result<()> {
    let Some((symbol, order_id)) = prompt_order_ref(input, out)? else {
        return Ok(());
    };
    let (symbol, order_id) =
        match normalize_symbol(&symbol).and_then(|s| Ok((s, parse_order_id(&order_id)?))) {
            Ok(parsed) => parsed,
            Err(e) => return report_validation(out, "order status", &e),
        };

    match services.order.get_order(&symbol, order_id).await {
        Ok(response) => {
            info!(
                "STATUS symbol={} orderId={} status={}",
                response.symbol, response.order_id, response.status
            );
            writeln!(out, "{}", order::render_order(&response))
        }
        Err(e) => report_failure(out, "STATUS FAILED", "Could not fetch order", &e),
    }
}

async fn cancel_order<R: BufRead, W: Write>(
    services: &Services,
    input: &mut R,
    out: &mut W,
) -> io::Result<()> {
    let Some((symbol, order_id)) = prompt_order_ref(input, out)? else {
        return Ok(());
    };
    let (symbol, order_id) =
        match normalize_symbol(&symbol).and_then(|s| Ok((s, parse_order_id(&order_id)?))) {
            Ok(parsed) => parsed,
            Err(e) => return report_validation(out, "cancel order", &e),
        };

    match services.order.cancel_order(&symbol, order_id).await {
        Ok(response) => {
            info!(
                "CANCEL SUCCESS symbol={} orderId={} status={}",
                response.symbol, response.order_id, response.status
            );
            writeln!(out, "Order {} cancelled.", response.order_id)
        }
        Err(e) => {
            error!("CANCEL FAILED symbol={} orderId={}: {}", symbol, order_id, e);
            writeln!(out, "Cancel failed: {e}")
        }
    }
}

async fn open_orders<R: BufRead, W: Write>(
    services: &Services,
    input: &mut R,
    out: &mut W,
) -> io::Result<()> {
    let Some(symbol) = prompt(input, out, "Symbol (blank for all): ")? else {
        return Ok(());
    };
    let filter = if symbol.is_empty() {
        None
    } else {
        match normalize_symbol(&symbol) {
            Ok(symbol) => Some(symbol),
            Err(e) => return report_validation(out, "open orders", &e),
        }
    };

    match services.account.get_open_orders(filter.as_deref()).await {
        Ok(orders) => {
            info!(
                "OPEN ORDERS count={} symbol={}",
                orders.len(),
                filter.as_deref().unwrap_or("*")
            );
            writeln!(out, "{}", order::render_open_orders(&orders))
        }
        Err(e) => report_failure(out, "OPEN ORDERS FAILED", "Could not fetch open orders", &e),
    }
}

fn prompt_order_ref<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
) -> io::Result<Option<(String, String)>> {
    let Some(symbol) = prompt(input, out, "Symbol (e.g. BTCUSDT): ")? else {
        return Ok(None);
    };
    let Some(order_id) = prompt(input, out, "Order id: ")? else {
        return Ok(None);
    };
    Ok(Some((symbol, order_id)))
}

/// One record, one user-visible message, no network traffic happened.
fn report_validation<W: Write>(out: &mut W, operation: &str, e: &AppError) -> io::Result<()> {
    warn!("VALIDATION FAILED op={}: {}", operation, e);
    writeln!(out, "Validation error: {e}")
}

/// One record, one user-visible message, loop continues.
fn report_failure<W: Write>(
    out: &mut W,
    log_label: &str,
    user_label: &str,
    e: &AppError,
) -> io::Result<()> {
    error!("{}: {}", log_label, e);
    writeln!(out, "{user_label}: {e}")
}
