//! Translation from native store error codes to the kinds the error middleware
//! knows how to answer. Each storage engine declares its own table.

use sea_orm::sqlx::postgres::PgDatabaseError;
use sea_orm::{DbErr, RuntimeErr};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreErrorKind {
    InvalidTextRepresentation,
    ForeignKeyViolation,
    NotNullViolation,
}

#[derive(Debug, Clone, Copy)]
pub struct StoreDialect {
    pub name: &'static str,
    codes: &'static [(&'static str, StoreErrorKind)],
}

impl StoreDialect {
    pub fn classify(&self, code: &str) -> Option<StoreErrorKind> {
        self.codes
            .iter()
            .find(|(native, _)| *native == code)
            .map(|(_, kind)| *kind)
    }
}

/// SQLSTATE codes
pub const POSTGRES: StoreDialect = StoreDialect {
    name: "postgres",
    codes: &[
        ("22P02", StoreErrorKind::InvalidTextRepresentation),
        ("23503", StoreErrorKind::ForeignKeyViolation),
        ("23502", StoreErrorKind::NotNullViolation),
    ],
};

/// Extended result codes (SQLITE_MISMATCH, SQLITE_CONSTRAINT_FOREIGNKEY, SQLITE_CONSTRAINT_NOTNULL)
pub const SQLITE: StoreDialect = StoreDialect {
    name: "sqlite",
    codes: &[
        ("20", StoreErrorKind::InvalidTextRepresentation),
        ("787", StoreErrorKind::ForeignKeyViolation),
        ("1299", StoreErrorKind::NotNullViolation),
    ],
};

pub static DIALECTS: [StoreDialect; 2] = [POSTGRES, SQLITE];

/// What the store itself reported, stripped of driver types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NativeError {
    pub code: String,
    pub message: String,
    pub detail: Option<String>,
}

pub fn native_error(err: &DbErr) -> Option<NativeError> {
    let runtime = match err {
        DbErr::Exec(runtime) | DbErr::Query(runtime) | DbErr::Conn(runtime) => runtime,
        _ => return None,
    };
    let RuntimeErr::SqlxError(sqlx_err) = runtime else {
        return None;
    };

    let db_err = sqlx_err.as_database_error()?;
    let code = db_err.code()?.into_owned();
    let detail = db_err
        .try_downcast_ref::<PgDatabaseError>()
        .and_then(|pg| pg.detail())
        .map(str::to_owned);

    Some(NativeError {
        code,
        message: db_err.message().to_string(),
        detail,
    })
}

pub fn classify(code: &str) -> Option<(&'static StoreDialect, StoreErrorKind)> {
    DIALECTS
        .iter()
        .find_map(|dialect| dialect.classify(code).map(|kind| (dialect, kind)))
}
