//! In-memory ticket store backed by a `Vec`.
//!
//! The store is the only owner of ticket state. Every successful mutation
//! writes the full collection through its [`Persistence`] before returning.
//! A failed write is returned to the caller but the in-memory change stays,
//! so memory and snapshot can diverge on that path.

use chrono::Utc;

use crate::error::{Result, TicketError};
use crate::model::{Comment, Status, Ticket};
use crate::query::{NewTicket, StatusCounts, StatusFilter};
use crate::snapshot::Persistence;
use crate::util;

/// Single-writer helpdesk ticket store.
///
/// Tickets are kept newest first.
pub struct TicketStore<P: Persistence> {
    tickets: Vec<Ticket>,
    persistence: P,
}

impl<P: Persistence> TicketStore<P> {
    // ========================================================================
    // Lifecycle
    // ========================================================================

    /// Load the collection through `persistence`.
    ///
    /// Seeds the sample tickets when no snapshot exists yet.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing snapshot cannot be read or parsed.
    pub fn open(persistence: P) -> Result<Self> {
        let tickets = persistence.load()?;
        tracing::debug!(count = tickets.len(), "ticket store opened");
        Ok(Self {
            tickets,
            persistence,
        })
    }

    /// Build a store around an explicit collection without reading anything.
    #[must_use]
    pub const fn with_tickets(tickets: Vec<Ticket>, persistence: P) -> Self {
        Self {
            tickets,
            persistence,
        }
    }

    #[must_use]
    pub const fn persistence(&self) -> &P {
        &self.persistence
    }

    /// Write the current collection.
    ///
    /// # Errors
    ///
    /// Returns the persistence error unchanged.
    pub fn save(&mut self) -> Result<()> {
        self.persistence.write(&self.tickets).inspect_err(|e| {
            tracing::warn!(error = %e, "snapshot save failed; in-memory state kept");
        })
    }

    /// Consume the store, returning its tickets.
    #[must_use]
    pub fn into_tickets(self) -> Vec<Ticket> {
        self.tickets
    }

    // ========================================================================
    // Mutations
    // ========================================================================

    /// Open a new ticket from the form fields.
    ///
    /// The ticket goes to the front of the collection with status `Open`
    /// and matching created/updated timestamps.
    ///
    /// # Errors
    ///
    /// Returns `IdCollision` if no free ID exists for this millisecond, or a
    /// persistence error if the save fails (the ticket is still added).
    pub fn create_ticket(&mut self, fields: &NewTicket) -> Result<Ticket> {
        let now = Utc::now();
        let id = util::generate_id(now, |candidate| self.contains(candidate))?;

        let ticket = Ticket {
            id,
            user_name: fields.user_name.clone(),
            user_email: fields.user_email.clone(),
            department: fields.department.clone(),
            issue_type: fields.issue_type.clone(),
            priority: fields.priority,
            description: fields.description.clone(),
            status: Status::Open,
            created_date: now,
            updated_date: now,
            comments: Vec::new(),
        };

        self.tickets.insert(0, ticket.clone());
        tracing::debug!(id = %ticket.id, priority = %ticket.priority, "ticket created");
        self.save()?;

        Ok(ticket)
    }

    /// Set a ticket's status and refresh its `updated_date`.
    ///
    /// # Errors
    ///
    /// Returns `TicketNotFound` if the ID is absent, or a persistence error.
    pub fn update_status(&mut self, id: &str, status: Status) -> Result<Ticket> {
        let idx = self.position(id)?;
        let ticket = &mut self.tickets[idx];
        let previous = ticket.status;
        ticket.status = status;
        ticket.updated_date = util::next_timestamp(ticket.updated_date);
        let updated = ticket.clone();

        tracing::debug!(id, from = %previous, to = %status, "status updated");
        self.save()?;

        Ok(updated)
    }

    /// Remove a ticket permanently.
    ///
    /// # Errors
    ///
    /// Returns `TicketNotFound` if the ID is absent, or a persistence error.
    pub fn delete_ticket(&mut self, id: &str) -> Result<Ticket> {
        let idx = self.position(id)?;
        let removed = self.tickets.remove(idx);

        tracing::debug!(id, "ticket deleted");
        self.save()?;

        Ok(removed)
    }

    /// Append an operator comment.
    ///
    /// Text is trimmed before storing. Blank text is refused before the
    /// ticket is even looked up.
    ///
    /// # Errors
    ///
    /// Returns `EmptyComment` for blank text, `TicketNotFound` if the ID is
    /// absent, or a persistence error.
    pub fn add_comment(&mut self, id: &str, text: &str) -> Result<Comment> {
        let text = text.trim();
        if text.is_empty() {
            return Err(TicketError::EmptyComment);
        }

        let idx = self.position(id)?;
        let ticket = &mut self.tickets[idx];
        let date = util::next_timestamp(ticket.updated_date);
        let comment = Comment::by_operator(text, date);
        ticket.comments.push(comment.clone());
        ticket.updated_date = date;

        tracing::debug!(id, count = ticket.comments.len(), "comment added");
        self.save()?;

        Ok(comment)
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// All tickets in store order (newest first).
    #[must_use]
    pub fn list_all(&self) -> &[Ticket] {
        &self.tickets
    }

    /// Tickets matching the status view, in store order.
    #[must_use]
    pub fn filter_by_status(&self, filter: impl Into<StatusFilter>) -> Vec<&Ticket> {
        let filter = filter.into();
        self.tickets.iter().filter(|t| filter.matches(t)).collect()
    }

    /// Case-insensitive substring search over ID, reporter name,
    /// description, issue type and department.
    ///
    /// Runs over the whole collection; it does not apply any status view.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&Ticket> {
        let query_lower = query.to_lowercase();
        self.tickets
            .iter()
            .filter(|ticket| {
                [
                    &ticket.id,
                    &ticket.user_name,
                    &ticket.description,
                    &ticket.issue_type,
                    &ticket.department,
                ]
                .iter()
                .any(|field| field.to_lowercase().contains(&query_lower))
            })
            .collect()
    }

    /// Get a single ticket by exact ID.
    ///
    /// # Errors
    ///
    /// Returns `TicketNotFound` if the ID is absent.
    pub fn get_ticket(&self, id: &str) -> Result<&Ticket> {
        self.tickets
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| TicketError::TicketNotFound { id: id.to_string() })
    }

    /// Recount every status bucket.
    #[must_use]
    pub fn aggregate_counts(&self) -> StatusCounts {
        StatusCounts::tally(&self.tickets)
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.tickets.iter().any(|t| t.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }

    // ========================================================================
    // Internal Helpers
    // ========================================================================

    fn position(&self, id: &str) -> Result<usize> {
        self.tickets
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| TicketError::TicketNotFound { id: id.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Priority;
    use crate::seed::sample_tickets;
    use crate::snapshot::MemorySnapshot;

    fn seeded() -> TicketStore<MemorySnapshot> {
        TicketStore::open(MemorySnapshot::new()).unwrap()
    }

    fn empty() -> TicketStore<MemorySnapshot> {
        TicketStore::with_tickets(Vec::new(), MemorySnapshot::new())
    }

    fn form(name: &str, priority: Priority) -> NewTicket {
        NewTicket {
            user_name: name.to_string(),
            user_email: format!("{}@company.com", name.to_lowercase()),
            department: "IT".to_string(),
            issue_type: "Network".to_string(),
            priority,
            description: format!("{name} cannot reach the VPN"),
        }
    }

    #[test]
    fn test_open_seeds_samples() {
        let store = seeded();
        assert_eq!(store.len(), 3);
        assert_eq!(
            store.aggregate_counts(),
            StatusCounts {
                open: 1,
                in_progress: 1,
                resolved_or_closed: 1,
                total: 3,
            }
        );
        // Seeding alone does not write a snapshot.
        assert_eq!(store.persistence().writes(), 0);
    }

    #[test]
    fn test_open_prefers_existing_snapshot() {
        let mut slot = MemorySnapshot::new();
        slot.write(&[]).unwrap();
        let store = TicketStore::open(slot).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_create_and_get() {
        let mut store = empty();
        let created = store.create_ticket(&form("Avery", Priority::High)).unwrap();

        let fetched = store.get_ticket(&created.id).unwrap();
        assert_eq!(fetched.status, Status::Open);
        assert_eq!(fetched.created_date, fetched.updated_date);
        assert!(fetched.comments.is_empty());
        assert_eq!(fetched.user_name, "Avery");
        assert_eq!(fetched.priority, Priority::High);
        assert!(created.id.starts_with("TKT-"));
        assert_eq!(created.id.len(), 12);
    }

    #[test]
    fn test_create_prepends_and_persists() {
        let mut store = seeded();
        let created = store.create_ticket(&form("Blake", Priority::Low)).unwrap();

        assert_eq!(store.list_all()[0].id, created.id);
        assert_eq!(store.list_all()[1].id, "TKT-100001");
        assert_eq!(store.persistence().writes(), 1);

        let persisted = store.persistence().read().unwrap().unwrap();
        assert_eq!(persisted, store.list_all());
    }

    #[test]
    fn test_create_accepts_blank_fields() {
        let mut store = empty();
        let blank = NewTicket {
            user_name: "  ".to_string(),
            ..NewTicket::default()
        };
        let created = store.create_ticket(&blank).unwrap();
        assert_eq!(created.user_name, "  ");
        assert_eq!(created.description, "");
    }

    #[test]
    fn test_many_creates_yield_distinct_ids() {
        let mut store = empty();
        for i in 0..50 {
            store
                .create_ticket(&form(&format!("User{i}"), Priority::Medium))
                .unwrap();
        }
        let mut ids: Vec<&str> = store.list_all().iter().map(|t| t.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 50);
    }

    #[test]
    fn test_update_status() {
        let mut store = seeded();
        let before = store.get_ticket("TKT-100001").unwrap().updated_date;

        let updated = store.update_status("TKT-100001", Status::InProgress).unwrap();
        assert_eq!(updated.status, Status::InProgress);

        let fetched = store.get_ticket("TKT-100001").unwrap();
        assert_eq!(fetched.status, Status::InProgress);
        assert!(fetched.updated_date > before);
        assert!(fetched.updated_date >= fetched.created_date);
        assert_eq!(store.persistence().writes(), 1);
    }

    #[test]
    fn test_update_status_twice_in_a_row_still_advances() {
        let mut store = empty();
        let created = store.create_ticket(&form("Casey", Priority::Medium)).unwrap();
        let first = store.update_status(&created.id, Status::Resolved).unwrap();
        let second = store.update_status(&created.id, Status::Closed).unwrap();
        assert!(first.updated_date > created.updated_date);
        assert!(second.updated_date > first.updated_date);
    }

    #[test]
    fn test_update_nonexistent() {
        let mut store = seeded();
        let result = store.update_status("TKT-99999999", Status::Closed);
        assert!(matches!(result, Err(TicketError::TicketNotFound { .. })));
        assert_eq!(store.persistence().writes(), 0);
    }

    #[test]
    fn test_delete_ticket() {
        let mut store = seeded();
        let total = store.aggregate_counts().total;

        let removed = store.delete_ticket("TKT-100002").unwrap();
        assert_eq!(removed.id, "TKT-100002");
        assert!(matches!(
            store.get_ticket("TKT-100002"),
            Err(TicketError::TicketNotFound { .. })
        ));
        assert_eq!(store.aggregate_counts().total, total - 1);
        assert_eq!(store.persistence().read().unwrap().unwrap().len(), 2);
    }

    #[test]
    fn test_delete_nonexistent() {
        let mut store = seeded();
        assert!(store.delete_ticket("TKT-nope").unwrap_err().is_not_found());
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_blank_comments_rejected_without_changes() {
        let mut store = seeded();
        let before = store.get_ticket("TKT-100002").unwrap().clone();

        for text in ["", "   ", "\n\t"] {
            let result = store.add_comment("TKT-100002", text);
            assert!(matches!(result, Err(TicketError::EmptyComment)));
        }

        assert_eq!(store.get_ticket("TKT-100002").unwrap(), &before);
        assert_eq!(store.persistence().writes(), 0);
    }

    #[test]
    fn test_blank_comment_rejected_before_lookup() {
        let mut store = seeded();
        let result = store.add_comment("TKT-missing", " ");
        assert!(matches!(result, Err(TicketError::EmptyComment)));
    }

    #[test]
    fn test_comment_on_missing_ticket() {
        let mut store = seeded();
        let result = store.add_comment("TKT-missing", "hello");
        assert!(matches!(result, Err(TicketError::TicketNotFound { .. })));
    }

    #[test]
    fn test_add_comment_appends_in_order() {
        let mut store = seeded();
        let original = store.get_ticket("TKT-100002").unwrap().clone();

        let comment = store.add_comment("TKT-100002", "  ok  ").unwrap();
        assert_eq!(comment.text, "ok");
        assert_eq!(comment.author, "IT Support");

        let ticket = store.get_ticket("TKT-100002").unwrap();
        assert_eq!(ticket.comments.len(), original.comments.len() + 1);
        assert_eq!(ticket.comments[..original.comments.len()], original.comments[..]);
        assert_eq!(ticket.comments.last().unwrap(), &comment);
        assert!(ticket.updated_date > original.updated_date);
        assert_eq!(ticket.updated_date, comment.date);
    }

    #[test]
    fn test_filter_by_status() {
        let mut store = seeded();
        store.update_status("TKT-100001", Status::Closed).unwrap();

        assert_eq!(
            store.filter_by_status(StatusFilter::All).len(),
            store.list_all().len()
        );

        let resolved = store.filter_by_status(Status::Resolved);
        assert_eq!(resolved.len(), 1);
        assert!(resolved.iter().all(|t| t.status == Status::Resolved));

        let closed = store.filter_by_status(Status::Closed);
        assert_eq!(closed.len(), 1);
        assert_eq!(closed[0].id, "TKT-100001");
    }

    #[test]
    fn test_filter_keeps_store_order() {
        let mut store = empty();
        let a = store.create_ticket(&form("A", Priority::Low)).unwrap();
        let b = store.create_ticket(&form("B", Priority::Low)).unwrap();
        let open: Vec<&str> = store
            .filter_by_status(Status::Open)
            .iter()
            .map(|t| t.id.as_str())
            .collect();
        assert_eq!(open, vec![b.id.as_str(), a.id.as_str()]);
    }

    #[test]
    fn test_search_fields_case_insensitive() {
        let store = seeded();

        let by_id = store.search("tkt-100003");
        assert_eq!(by_id.len(), 1);
        assert_eq!(by_id[0].id, "TKT-100003");

        assert_eq!(store.search("SARAH")[0].id, "TKT-100001");
        assert_eq!(store.search("quickbooks")[0].id, "TKT-100001");
        assert_eq!(store.search("hardware")[0].id, "TKT-100002");
        assert_eq!(store.search("hr")[0].id, "TKT-100003");
    }

    #[test]
    fn test_search_ignores_email_and_status() {
        let store = seeded();
        assert!(store.search("company.com").is_empty());
        assert!(store.search("in progress").is_empty());
    }

    #[test]
    fn test_search_no_match() {
        let store = seeded();
        assert!(store.search("zzz-no-such-thing").is_empty());
    }

    #[test]
    fn test_search_is_independent_of_status() {
        let mut store = seeded();
        store.update_status("TKT-100001", Status::Closed).unwrap();
        assert_eq!(store.search("payroll").len(), 1);
    }

    #[test]
    fn test_counts_merge_resolved_and_closed() {
        let mut store = seeded();
        store.update_status("TKT-100001", Status::Closed).unwrap();
        let counts = store.aggregate_counts();

        let resolved = store.filter_by_status(Status::Resolved).len();
        let closed = store.filter_by_status(Status::Closed).len();
        assert_eq!(counts.resolved_or_closed, resolved + closed);
        assert_eq!(counts.open, 0);
        assert_eq!(counts.total, 3);
    }

    #[test]
    fn test_create_then_close_bumps_done_count() {
        let mut store = seeded();
        let before = store.aggregate_counts().resolved_or_closed;

        let created = store.create_ticket(&form("A", Priority::High)).unwrap();
        store.update_status(&created.id, Status::Closed).unwrap();

        assert_eq!(store.aggregate_counts().resolved_or_closed, before + 1);
    }

    #[test]
    fn test_failed_save_keeps_memory_state() {
        let mut slot = MemorySnapshot::new();
        slot.write(&sample_tickets(Utc::now())).unwrap();
        slot.set_fail_writes(true);
        let mut store = TicketStore::open(slot).unwrap();

        let err = store.update_status("TKT-100001", Status::Resolved).unwrap_err();
        assert!(err.is_persistence());

        assert_eq!(
            store.get_ticket("TKT-100001").unwrap().status,
            Status::Resolved
        );
        let persisted = store.persistence().read().unwrap().unwrap();
        assert_eq!(persisted[0].status, Status::Open);
    }

    #[test]
    fn test_roundtrip_through_store() {
        let mut store = seeded();
        store.create_ticket(&form("Drew", Priority::Critical)).unwrap();
        store.add_comment("TKT-100001", "Escalated").unwrap();
        let snapshot = store.persistence().clone();
        let expected = store.into_tickets();

        let reopened = TicketStore::open(snapshot).unwrap();
        assert_eq!(reopened.list_all(), expected.as_slice());
    }
}
