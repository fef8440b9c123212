use async_trait::async_trait;
use chrono::{Datelike, NaiveDate, TimeDelta, Timelike};
use mysql_async::consts::ColumnType;
use mysql_async::prelude::Queryable;
use mysql_async::{Conn, OptsBuilder, Params, Value};
use tokio::sync::Mutex;

use crate::config::ClientConfig;
use crate::error::{Result, ToolkitError};
use crate::traits::DatabaseDriver;
use crate::types::{RawQueryResult, SqlValue};

const SECONDS_PER_DAY: i64 = 86_400;

/// MySQL driver implementation using mysql_async.
///
/// Owns exactly one connection. mysql_async needs `&mut Conn` for every
/// call, so the connection sits behind a mutex and calls are serialized.
pub struct MySqlDriver {
    conn: Mutex<Option<Conn>>,
}

impl MySqlDriver {
    /// Connect to a MySQL database.
    ///
    /// The session runs with `autocommit = 0`; writes become durable on
    /// [`DatabaseDriver::commit`]. The client-side statement cache is
    /// disabled so every statement is prepared fresh.
    pub async fn connect(config: &ClientConfig) -> Result<Self> {
        config.validate()?;

        let db_name = (!config.db.is_empty()).then(|| config.db.clone());
        let opts = OptsBuilder::default()
            .ip_or_hostname(config.host.clone())
            .tcp_port(config.port)
            .user(Some(config.user.clone()))
            .pass(Some(config.password.clone()))
            .db_name(db_name)
            .stmt_cache_size(0)
            .setup(vec![
                format!("SET NAMES {}", config.charset),
                "SET autocommit = 0".to_string(),
            ]);

        let conn = Conn::new(opts)
            .await
            .map_err(|e| ToolkitError::ConnectionFailed(e.to_string()))?;

        tracing::debug!(
            host = %config.host,
            port = config.port,
            db = %config.db,
            "connected to mysql"
        );

        Ok(Self {
            conn: Mutex::new(Some(conn)),
        })
    }
}

#[async_trait]
impl DatabaseDriver for MySqlDriver {
    async fn execute(&self, sql: &str, params: &[SqlValue]) -> Result<RawQueryResult> {
        let params = if params.is_empty() {
            Params::Empty
        } else {
            Params::Positional(
                params
                    .iter()
                    .map(sql_value_to_mysql)
                    .collect::<Result<Vec<_>>>()?,
            )
        };

        let mut guard = self.conn.lock().await;
        let conn = guard.as_mut().ok_or(ToolkitError::ConnectionClosed)?;

        let rows: Vec<mysql_async::Row> = conn
            .exec(sql, params)
            .await
            .map_err(ToolkitError::from_mysql)?;

        // Extract column names and types
        let (columns, column_types): (Vec<String>, Vec<ColumnType>) = match rows.first() {
            Some(first) => first
                .columns_ref()
                .iter()
                .map(|c| (c.name_str().into_owned(), c.column_type()))
                .unzip(),
            None => (Vec::new(), Vec::new()),
        };

        let result_rows: Vec<Vec<SqlValue>> = rows
            .into_iter()
            .map(|mut row| {
                column_types
                    .iter()
                    .enumerate()
                    .map(|(i, column_type)| {
                        let value = row.take::<Value, usize>(i).unwrap_or(Value::NULL);
                        mysql_value_to_sql(value, *column_type)
                    })
                    .collect()
            })
            .collect();

        Ok(RawQueryResult {
            columns,
            rows: result_rows,
            affected_rows: conn.affected_rows(),
            last_insert_id: conn.last_insert_id(),
        })
    }

    async fn commit(&self) -> Result<()> {
        let mut guard = self.conn.lock().await;
        let conn = guard.as_mut().ok_or(ToolkitError::ConnectionClosed)?;
        conn.query_drop("COMMIT")
            .await
            .map_err(ToolkitError::from_mysql)
    }

    async fn close(&self) -> Result<()> {
        let conn = self.conn.lock().await.take();
        match conn {
            Some(conn) => conn
                .disconnect()
                .await
                .map_err(|e| ToolkitError::ConnectionFailed(e.to_string())),
            None => Ok(()),
        }
    }
}

/// Convert a SqlValue to a mysql_async parameter value.
///
/// Dates and times the binary protocol cannot represent are rejected rather
/// than wrapped.
fn sql_value_to_mysql(value: &SqlValue) -> Result<Value> {
    let value = match value {
        SqlValue::Null => Value::NULL,
        SqlValue::Text(s) => Value::Bytes(s.as_bytes().to_vec()),
        SqlValue::Bytes(b) => Value::Bytes(b.clone()),
        SqlValue::Int(i) => Value::Int(*i),
        SqlValue::UInt(u) => Value::UInt(*u),
        SqlValue::Double(f) => Value::Double(*f),
        SqlValue::Bool(b) => Value::Int(i64::from(*b)),
        SqlValue::Date(d) => {
            // month and day are bounded by chrono
            Value::Date(year(d.year())?, d.month() as u8, d.day() as u8, 0, 0, 0, 0)
        }
        SqlValue::DateTime(dt) => Value::Date(
            year(dt.year())?,
            dt.month() as u8,
            dt.day() as u8,
            dt.hour() as u8,
            dt.minute() as u8,
            dt.second() as u8,
            micros(dt.nanosecond())?,
        ),
        SqlValue::Time(delta) => {
            let negative = *delta < TimeDelta::zero();
            let delta = delta.abs();
            let secs = delta.num_seconds();
            let days = u32::try_from(secs / SECONDS_PER_DAY).map_err(|_| {
                ToolkitError::ValueOutOfRange(format!("time of {secs} seconds"))
            })?;
            Value::Time(
                negative,
                days,
                ((secs % SECONDS_PER_DAY) / 3_600) as u8,
                ((secs % 3_600) / 60) as u8,
                (secs % 60) as u8,
                micros(delta.subsec_nanos() as u32)?,
            )
        }
    };
    Ok(value)
}

fn year(year: i32) -> Result<u16> {
    u16::try_from(year).map_err(|_| ToolkitError::ValueOutOfRange(format!("year {year}")))
}

/// Leap-second nanoseconds (>= 1s) have no MySQL counterpart.
fn micros(nanos: u32) -> Result<u32> {
    let micros = nanos / 1_000;
    if micros >= 1_000_000 {
        return Err(ToolkitError::ValueOutOfRange(format!(
            "fractional second of {nanos}ns"
        )));
    }
    Ok(micros)
}

/// Convert a value read from a row into a SqlValue.
fn mysql_value_to_sql(value: Value, column_type: ColumnType) -> SqlValue {
    match value {
        Value::NULL => SqlValue::Null,
        Value::Bytes(bytes) => match String::from_utf8(bytes) {
            Ok(s) => SqlValue::Text(s),
            Err(e) => SqlValue::Bytes(e.into_bytes()),
        },
        Value::Int(i) => SqlValue::Int(i),
        Value::UInt(u) => SqlValue::UInt(u),
        Value::Float(f) => SqlValue::Double(f64::from(f)),
        Value::Double(f) => SqlValue::Double(f),
        Value::Date(year, month, day, hour, minute, second, micros) => {
            let Some(date) =
                NaiveDate::from_ymd_opt(i32::from(year), u32::from(month), u32::from(day))
            else {
                // Zero dates such as 0000-00-00 have no chrono counterpart
                return SqlValue::Text(format!(
                    "{year:04}-{month:02}-{day:02} {hour:02}:{minute:02}:{second:02}"
                ));
            };
            if column_type == ColumnType::MYSQL_TYPE_DATE {
                return SqlValue::Date(date);
            }
            match date.and_hms_micro_opt(
                u32::from(hour),
                u32::from(minute),
                u32::from(second),
                micros,
            ) {
                Some(dt) => SqlValue::DateTime(dt),
                None => SqlValue::Date(date),
            }
        }
        Value::Time(negative, days, hours, minutes, seconds, micros) => {
            let secs = i64::from(days) * SECONDS_PER_DAY
                + i64::from(hours) * 3_600
                + i64::from(minutes) * 60
                + i64::from(seconds);
            let delta = TimeDelta::seconds(secs) + TimeDelta::microseconds(i64::from(micros));
            SqlValue::Time(if negative { -delta } else { delta })
        }
    }
}
