use crate::application::models::order::OrderResponse;
use chrono::DateTime;
use prettytable::{Cell, Row, Table, format};

/// Renders one order as a detail table, the view used after placement and
/// for status queries.
#[must_use]
pub fn render_order(order: &OrderResponse) -> String {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_BOX_CHARS);

    table.add_row(Row::new(vec![
        Cell::new("ORDER ID"),
        Cell::new(&order.order_id.to_string()),
    ]));
    table.add_row(Row::new(vec![Cell::new("SYMBOL"), Cell::new(&order.symbol)]));
    table.add_row(Row::new(vec![Cell::new("SIDE"), Cell::new(&order.side)]));
    table.add_row(Row::new(vec![
        Cell::new("TYPE"),
        Cell::new(&order.order_type),
    ]));
    table.add_row(Row::new(vec![Cell::new("STATUS"), Cell::new(&order.status)]));
    table.add_row(Row::new(vec![
        Cell::new("QUANTITY"),
        Cell::new(&format!("{}", order.orig_qty)),
    ]));
    table.add_row(Row::new(vec![
        Cell::new("EXECUTED"),
        Cell::new(&format!("{}", order.executed_qty)),
    ]));
    table.add_row(Row::new(vec![
        Cell::new("PRICE"),
        Cell::new(&render_price(order.price)),
    ]));
    if let Some(avg) = order.avg_price.filter(|p| *p > 0.0) {
        table.add_row(Row::new(vec![
            Cell::new("AVG PRICE"),
            Cell::new(&format!("{avg:.2}")),
        ]));
    }
    if let Some(stop) = order.stop_price.filter(|p| *p > 0.0) {
        table.add_row(Row::new(vec![
            Cell::new("STOP PRICE"),
            Cell::new(&format!("{stop:.2}")),
        ]));
    }
    if let Some(ts) = order.update_time.or(order.time) {
        table.add_row(Row::new(vec![
            Cell::new("UPDATED"),
            Cell::new(&render_timestamp(ts)),
        ]));
    }

    table.to_string()
}

/// Renders a set of open orders as one row per order.
#[must_use]
pub fn render_open_orders(orders: &[OrderResponse]) -> String {
    if orders.is_empty() {
        return "No open orders.".to_string();
    }

    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_BOX_CHARS);
    table.add_row(Row::new(vec![
        Cell::new("ORDER ID"),
        Cell::new("SYMBOL"),
        Cell::new("SIDE"),
        Cell::new("TYPE"),
        Cell::new("QTY"),
        Cell::new("PRICE"),
        Cell::new("STATUS"),
    ]));
    for order in orders {
        table.add_row(Row::new(vec![
            Cell::new(&order.order_id.to_string()),
            Cell::new(&order.symbol),
            Cell::new(&order.side),
            Cell::new(&order.order_type),
            Cell::new(&format!("{}", order.orig_qty)),
            Cell::new(&render_price(order.price)),
            Cell::new(&order.status),
        ]));
    }

    table.to_string()
}

fn render_price(price: f64) -> String {
    if price > 0.0 {
        format!("{price:.2}")
    } else {
        "MARKET".to_string()
    }
}

fn render_timestamp(millis: i64) -> String {
    DateTime::from_timestamp_millis(millis)
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| millis.to_string())
}
