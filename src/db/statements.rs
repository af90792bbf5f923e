//! Parameterized statements for the users table.
//!
//! Building a statement never touches the database. Placeholders follow the
//! backend's style: `$n` on PostgreSQL, `?` elsewhere.

use std::collections::BTreeMap;

use sea_orm::{DatabaseBackend, Statement, Value};

use crate::models::User;

/// Fully qualified users table.
pub const USERS_TABLE: &str = "integra_partners.users";

/// Enum type backing the `user_status` column.
pub const USER_STATUS_TYPE: &str = "integra_partners.user_status";

/// Columns written by an insert, in insert order.
pub const INSERT_COLUMNS: [&str; 6] = [
    "user_name",
    "first_name",
    "last_name",
    "email",
    "user_status",
    "department",
];

/// Returned columns in decode order.
const RETURNED_COLUMNS: &str =
    "user_id, user_name, first_name, last_name, email, user_status, department";

/// Same as [`RETURNED_COLUMNS`] with the status enum read back as text.
const PG_RETURNED_COLUMNS: &str =
    "user_id, user_name, first_name, last_name, email, user_status::text AS user_status, department";

fn returned_columns(backend: DatabaseBackend) -> &'static str {
    match backend {
        DatabaseBackend::Postgres => PG_RETURNED_COLUMNS,
        _ => RETURNED_COLUMNS,
    }
}

/// Hands out placeholders in order for one statement.
struct Placeholders {
    backend: DatabaseBackend,
    next: usize,
}

impl Placeholders {
    fn new(backend: DatabaseBackend) -> Self {
        Self { backend, next: 1 }
    }

    /// Placeholder for a value bound to `column`.
    fn bind(&mut self, column: &str) -> String {
        let n = self.next;
        self.next += 1;
        match self.backend {
            DatabaseBackend::Postgres if column == "user_status" => {
                format!("${}::{}", n, USER_STATUS_TYPE)
            }
            DatabaseBackend::Postgres => format!("${}", n),
            _ => "?".to_string(),
        }
    }
}

/// Column/value pairs an update writes, kept in column-name order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SetClause {
    entries: BTreeMap<&'static str, Value>,
}

impl SetClause {
    /// Set-clause for updating `user`.
    ///
    /// Text fields are written only when non-empty. `department` is always
    /// written, even when empty.
    pub fn for_update(user: &User) -> Self {
        let mut clause = Self::default();
        clause.set_if_present("user_name", &user.user_name);
        clause.set_if_present("first_name", &user.first_name);
        clause.set_if_present("last_name", &user.last_name);
        clause.set_if_present("email", &user.email);
        clause.set_if_present("user_status", &user.user_status);
        // TODO: confirm with product whether an empty department should keep the stored value
        clause.set("department", user.department.clone());
        clause
    }

    pub fn set(&mut self, column: &'static str, value: impl Into<Value>) {
        self.entries.insert(column, value.into());
    }

    fn set_if_present(&mut self, column: &'static str, value: &str) {
        if !value.is_empty() {
            self.set(column, value.to_string());
        }
    }

    /// Columns in the order they are rendered.
    pub fn columns(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }

    pub fn contains(&self, column: &str) -> bool {
        self.entries.contains_key(column)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render as `col = $1, col = $2` and return the bound values in order.
    fn render(self, placeholders: &mut Placeholders) -> (String, Vec<Value>) {
        let mut assignments = Vec::with_capacity(self.entries.len());
        let mut values = Vec::with_capacity(self.entries.len());
        for (column, value) in self.entries {
            assignments.push(format!("{} = {}", column, placeholders.bind(column)));
            values.push(value);
        }
        (assignments.join(", "), values)
    }
}

/// Select every user. No ordering is applied.
pub fn list_users(backend: DatabaseBackend) -> Statement {
    let sql = format!("SELECT {} FROM {}", returned_columns(backend), USERS_TABLE);
    Statement::from_sql_and_values(backend, sql, Vec::<Value>::new())
}

/// Insert `user` (its id is ignored) and return the stored row.
pub fn insert_user(backend: DatabaseBackend, user: &User) -> Statement {
    let mut placeholders = Placeholders::new(backend);
    let slots: Vec<String> = INSERT_COLUMNS
        .iter()
        .map(|column| placeholders.bind(column))
        .collect();

    let sql = format!(
        "INSERT INTO {} ({}) VALUES ({}) RETURNING {}",
        USERS_TABLE,
        INSERT_COLUMNS.join(","),
        slots.join(","),
        returned_columns(backend)
    );

    let values: Vec<Value> = vec![
        user.user_name.clone().into(),
        user.first_name.clone().into(),
        user.last_name.clone().into(),
        user.email.clone().into(),
        user.user_status.clone().into(),
        user.department.clone().into(),
    ];

    Statement::from_sql_and_values(backend, sql, values)
}

/// Update the row with `user.user_id` from its [`SetClause`] and return the stored row.
pub fn update_user(backend: DatabaseBackend, user: &User) -> Statement {
    let mut placeholders = Placeholders::new(backend);
    let (assignments, mut values) = SetClause::for_update(user).render(&mut placeholders);
    let id_slot = placeholders.bind("user_id");
    values.push(user.user_id.into());

    let sql = format!(
        "UPDATE {} SET {} WHERE user_id = {} RETURNING {}",
        USERS_TABLE,
        assignments,
        id_slot,
        returned_columns(backend)
    );

    Statement::from_sql_and_values(backend, sql, values)
}

/// Delete the row with `user_id`. Existence is read from the affected row count.
pub fn delete_user(backend: DatabaseBackend, user_id: i32) -> Statement {
    let mut placeholders = Placeholders::new(backend);
    let sql = format!(
        "DELETE FROM {} WHERE user_id = {} RETURNING user_id",
        USERS_TABLE,
        placeholders.bind("user_id")
    );
    Statement::from_sql_and_values(backend, sql, [Value::from(user_id)])
}
