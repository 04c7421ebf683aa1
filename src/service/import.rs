//! Best-effort batch creation from `id,name,email` text.

use tracing::{debug, info};

use super::UserService;
use crate::text::{is_blank, trim};

/// Splits one row into trimmed fields.
///
/// Trailing fields that are empty before trimming are dropped (`"a,b,"` yields
/// two fields), but a whitespace-only field still counts (`"a,b, "` yields
/// three, the last one empty).
fn split_row(line: &str) -> Vec<&str> {
    let mut fields: Vec<&str> = line.split(',').collect();
    while fields.last().is_some_and(|f| f.is_empty()) {
        fields.pop();
    }
    fields.into_iter().map(trim).collect()
}

impl UserService {
    /// Creates users from newline-separated `id,name,email` rows.
    ///
    /// Rows with fewer than three fields, rows whose id is already registered
    /// and rows that fail to create are skipped; one bad row never aborts the
    /// batch. Extra fields are ignored.
    ///
    /// Returns the number of users created.
    pub fn import_csv(&mut self, data: &str) -> usize {
        if is_blank(data) {
            return 0;
        }

        let mut created = 0;
        for (line_no, line) in data.split('\n').enumerate() {
            let fields = split_row(line);
            let [id, name, email, ..] = fields[..] else {
                debug!(line_no, "Import: skipped short row");
                continue;
            };
            if self.users.contains_key(id) {
                debug!(line_no, id, "Import: skipped existing id");
                continue;
            }
            match self.create(id, name, email) {
                Ok(_) => created += 1,
                Err(e) => debug!(line_no, error = %e, "Import: skipped row"),
            }
        }

        info!(created, size = self.users.len(), "Import finished");
        created
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::User;

    #[test]
    fn split_row_drops_trailing_empty_fields() {
        assert_eq!(split_row("a, b ,c"), ["a", "b", "c"]);
        assert_eq!(split_row("a,b,"), ["a", "b"]);
        assert_eq!(split_row("a,,c"), ["a", "", "c"]);
        assert!(split_row("").is_empty());
        assert_eq!(split_row(" , , "), ["", "", ""]);
        assert_eq!(split_row("a,b,\r"), ["a", "b", ""]);
    }

    #[test]
    fn imports_well_formed_rows() {
        let mut service = UserService::new();
        let created = service.import_csv(
            "u1,Alice,alice@example.com\n \
             u2 , Bob , bob@example.com \n\
             u3,Carol,carol@example.com,extra",
        );
        assert_eq!(created, 3);

        let bob = service.find_by_id("u2").unwrap().snapshot();
        assert_eq!(bob.name(), "Bob");
        assert_eq!(bob.email(), "bob@example.com");
        assert!(service.find_by_id("u3").is_some());
    }

    #[test]
    fn skips_short_rows_and_blank_lines() {
        let mut service = UserService::new();
        let created = service.import_csv("u1,Alice\n\nu2,Bob,\nu3,Carol,carol@example.com\n");
        assert_eq!(created, 1);
        assert_eq!(service.total_count(), 1);
    }

    #[test]
    fn skips_existing_ids_without_touching_them() {
        let mut service = UserService::new();
        service.create("u1", "Alice", "alice@example.com").unwrap();
        service.record_login("u1");

        let created = service.import_csv("u1,Mallory,mallory@example.com\nu2,Bob,bob@example.com");
        assert_eq!(created, 1);

        let alice = service.find_by_id("u1").unwrap();
        assert_eq!(alice.with(|u| u.name().to_string()), "Alice");
        assert_eq!(alice.with(User::login_count), 1);
    }

    #[test]
    fn duplicate_rows_in_one_batch_count_once() {
        let mut service = UserService::new();
        let created = service.import_csv("u1,Alice,a@example.com\nu1,Alice,a@example.com");
        assert_eq!(created, 1);
    }

    #[test]
    fn failing_row_does_not_abort_batch() {
        let mut service = UserService::new();
        // Blank id makes create fail; the following row still goes in.
        let created = service.import_csv("  ,Nobody,nobody@example.com\nu2,Bob,bob@example.com");
        assert_eq!(created, 1);
        assert!(service.find_by_id("u2").is_some());
    }

    #[test]
    fn accepts_windows_line_endings() {
        let mut service = UserService::new();
        let created =
            service.import_csv("u1,Alice,alice@example.com\r\nu2,Bob,bob@example.com\r\n");
        assert_eq!(created, 2);
        assert_eq!(
            service.find_by_id("u1").unwrap().with(|u| u.email().to_string()),
            "alice@example.com"
        );
    }

    #[test]
    fn whitespace_only_email_field_still_counts() {
        let mut service = UserService::new();
        let created = service.import_csv("u1,Alice, \nu2,Bob,\r\n");
        assert_eq!(created, 2);
        assert_eq!(service.find_by_id("u1").unwrap().with(|u| u.email().to_string()), "");
        assert_eq!(service.find_by_id("u2").unwrap().with(|u| u.email().to_string()), "");
    }

    #[test]
    fn blank_input_creates_nothing() {
        let mut service = UserService::new();
        assert_eq!(service.import_csv(""), 0);
        assert_eq!(service.import_csv("  \n "), 0);
    }
}
