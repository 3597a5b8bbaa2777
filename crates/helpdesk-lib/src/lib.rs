//! `helpdesk-lib` — In-process helpdesk ticket store.
//!
//! Tickets live in memory inside a [`TicketStore`]; every mutation writes the
//! whole collection as one JSON snapshot through a [`Persistence`] backend.
//!
//! # Quick Start
//!
//! ```no_run
//! use helpdesk_lib::{JsonFileSnapshot, NewTicket, Priority, Status, TicketStore};
//!
//! // Load the snapshot (sample tickets on first run)
//! let mut store = TicketStore::open(JsonFileSnapshot::new(".helpdesk/tickets.json")).unwrap();
//!
//! // Create
//! let ticket = store
//!     .create_ticket(&NewTicket {
//!         user_name: "Sarah Johnson".into(),
//!         user_email: "sarah.j@company.com".into(),
//!         department: "Finance".into(),
//!         issue_type: "Software".into(),
//!         priority: Priority::High,
//!         description: "QuickBooks times out".into(),
//!     })
//!     .unwrap();
//!
//! // Work it
//! store.add_comment(&ticket.id, "Restarted the license server").unwrap();
//! store.update_status(&ticket.id, Status::Resolved).unwrap();
//!
//! // Query
//! let counts = store.aggregate_counts();
//! assert_eq!(counts.total, store.list_all().len());
//! ```

pub mod error;
pub mod model;
pub mod query;
pub mod seed;
pub mod snapshot;
pub mod store;
pub mod util;

pub use error::{Result, TicketError, ValidationError};
pub use model::{Comment, Priority, Status, Ticket};
pub use query::{NewTicket, StatusCounts, StatusFilter};
pub use snapshot::{JsonFileSnapshot, MemorySnapshot, Persistence};
pub use store::TicketStore;
