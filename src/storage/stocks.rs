//! The `stocks` table and the trade record stored in it

use rusqlite::{params, Transaction};

/// No `IF NOT EXISTS`: creating the table again in the same file must fail.
const CREATE_STOCKS_TABLE: &str =
    "CREATE TABLE stocks (date text, trans text, symbol text, qty real, price real)";

const INSERT_TRADE: &str =
    "INSERT INTO stocks (date, trans, symbol, qty, price) VALUES (?1, ?2, ?3, ?4, ?5)";

/// One row of the `stocks` table
#[derive(Debug, Clone, PartialEq)]
pub struct Trade {
    /// Trade date (ISO-8601)
    pub date: String,
    /// Transaction kind, e.g. `BUY`
    pub trans: String,
    /// Ticker symbol
    pub symbol: String,
    /// Quantity
    pub qty: f64,
    /// Unit price
    pub price: f64,
}

impl Trade {
    /// The one trade this tool records.
    pub fn rhat_purchase() -> Self {
        Self {
            date: "2006-01-05".to_string(),
            trans: "BUY".to_string(),
            symbol: "RHAT".to_string(),
            qty: 100.0,
            price: 35.14,
        }
    }
}

pub(crate) fn create_table(tx: &Transaction<'_>) -> rusqlite::Result<()> {
    tx.execute(CREATE_STOCKS_TABLE, [])?;
    Ok(())
}

pub(crate) fn insert_trade(tx: &Transaction<'_>, trade: &Trade) -> rusqlite::Result<usize> {
    tx.execute(
        INSERT_TRADE,
        params![trade.date, trade.trans, trade.symbol, trade.qty, trade.price],
    )
}

#[cfg(test)]
pub(crate) fn load_trades(conn: &rusqlite::Connection) -> rusqlite::Result<Vec<Trade>> {
    let mut stmt = conn.prepare("SELECT date, trans, symbol, qty, price FROM stocks")?;
    let rows = stmt.query_map([], |row| {
        Ok(Trade {
            date: row.get(0)?,
            trans: row.get(1)?,
            symbol: row.get(2)?,
            qty: row.get(3)?,
            price: row.get(4)?,
        })
    })?;
    rows.collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;

    #[test]
    fn test_rhat_purchase_literal() {
        let trade = Trade::rhat_purchase();
        assert_eq!(trade.date, "2006-01-05");
        assert_eq!(trade.trans, "BUY");
        assert_eq!(trade.symbol, "RHAT");
        assert_eq!(trade.qty, 100.0);
        assert!((trade.price - 35.14).abs() < f64::EPSILON);
    }

    #[test]
    fn test_declared_column_types() {
        let mut conn = Connection::open_in_memory().unwrap();
        let tx = conn.transaction().unwrap();
        create_table(&tx).unwrap();
        tx.commit().unwrap();

        let mut stmt = conn.prepare("PRAGMA table_info(stocks)").unwrap();
        let columns: Vec<(String, String)> = stmt
            .query_map([], |row| Ok((row.get(1)?, row.get(2)?)))
            .unwrap()
            .collect::<rusqlite::Result<_>>()
            .unwrap();

        let expected = [
            ("date", "text"),
            ("trans", "text"),
            ("symbol", "text"),
            ("qty", "real"),
            ("price", "real"),
        ];
        assert_eq!(columns.len(), expected.len());
        for ((name, ty), (exp_name, exp_ty)) in columns.iter().zip(expected) {
            assert_eq!(name, exp_name);
            assert_eq!(ty.to_lowercase(), exp_ty);
        }
    }

    #[test]
    fn test_create_table_twice_fails() {
        let mut conn = Connection::open_in_memory().unwrap();
        let tx = conn.transaction().unwrap();
        create_table(&tx).unwrap();
        let err = create_table(&tx).unwrap_err();
        assert!(err.to_string().contains("already exists"));
    }

    #[test]
    fn test_insert_and_load() {
        let mut conn = Connection::open_in_memory().unwrap();
        let tx = conn.transaction().unwrap();
        create_table(&tx).unwrap();
        let inserted = insert_trade(&tx, &Trade::rhat_purchase()).unwrap();
        tx.commit().unwrap();

        assert_eq!(inserted, 1);
        assert_eq!(load_trades(&conn).unwrap(), vec![Trade::rhat_purchase()]);
    }
}
