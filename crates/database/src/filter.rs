/// Builds a parameterized `WHERE` predicate from optional search criteria.
///
/// Each present criterion contributes one clause; clauses combine with AND.
/// The clause list and the bind list grow in lockstep, so a clause's `$n`
/// placeholder always refers to the bind value at position `n`. Nothing is
/// rendered until `where_clause` is called.
#[derive(Debug, Clone, Default)]
pub struct QueryFilter {
    clauses: Vec<String>,
    binds: Vec<String>,
}

impl QueryFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `column = $n` for a present, non-empty value. Absent or empty
    /// criteria contribute nothing and therefore restrict nothing.
    ///
    /// The column name is part of the query text and must come from the
    /// caller's own code, never from client input.
    pub fn eq(mut self, column: &str, value: Option<&str>) -> Self {
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            self.binds.push(value.to_string());
            self.clauses
                .push(format!("{column} = ${}", self.binds.len()));
        }
        self
    }

    /// Adds a literal clause with no bind parameter when `enabled` is set.
    /// Used for flag criteria such as `featured = true`.
    pub fn flag(mut self, clause: &str, enabled: bool) -> Self {
        if enabled {
            self.clauses.push(clause.to_string());
        }
        self
    }

    /// Renders the `WHERE ...` fragment, or an empty string when no
    /// criterion contributed a clause.
    pub fn where_clause(&self) -> String {
        if self.clauses.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", self.clauses.join(" AND "))
        }
    }

    /// The bind values, in exactly the order their placeholders were issued.
    pub fn binds(&self) -> &[String] {
        &self.binds
    }
}
