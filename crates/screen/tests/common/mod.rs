//! Shared test harness: in-memory fake of the registrant store plus a
//! counting printer.
//!
//! The fake behaves like the remote service from the screens' point of
//! view: it assigns ids on create, answers mutations with the authoritative
//! record, and can be told to fail the next call to exercise the
//! nothing-applied-on-failure contract.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use regdesk_core::badge::BadgeRecord;
use regdesk_core::hall::Hall;
use regdesk_screen::Printer;
use regdesk_store::wire::{NewVisitor, VisitorPatch, VisitorRecord};
use regdesk_store::{StoreError, VisitorStore};

// ---------------------------------------------------------------------------
// Fake registrant store
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct FakeState {
    pub visitors: Vec<VisitorRecord>,
    pub halls: Vec<Hall>,
    pub next_id: i64,
    /// When true, the next store call fails once with a 500.
    pub fail_next: bool,
    /// Total store calls observed, across all endpoints.
    pub calls: usize,
}

#[derive(Debug, Default)]
pub struct FakeStore {
    pub state: Mutex<FakeState>,
}

impl FakeStore {
    /// Two visitors, two palette halls, and one hall with no palette entry.
    pub fn seeded() -> Self {
        let store = FakeStore::default();
        {
            let mut state = store.state.lock().unwrap();
            state.halls = vec![
                hall(1, "Blue Hall", 100, 60),
                hall(2, "Green Hall", 50, 50),
                hall(3, "Crystal Hall", 25, 25),
            ];
            state.visitors = vec![
                visitor_record("1", "Alex Chen", Some("1"), Some(1)),
                visitor_record("2", "Sarah Johnson", None, Some(1)),
            ];
            state.next_id = 3;
        }
        store
    }

    pub fn fail_next(&self) {
        self.state.lock().unwrap().fail_next = true;
    }

    pub fn calls(&self) -> usize {
        self.state.lock().unwrap().calls
    }

    fn check_failure(&self) -> Result<(), StoreError> {
        let mut state = self.state.lock().unwrap();
        state.calls += 1;
        if state.fail_next {
            state.fail_next = false;
            return Err(StoreError::Api {
                status: 500,
                body: "injected failure".to_string(),
            });
        }
        Ok(())
    }
}

pub fn hall(id: i64, name: &str, capacity: i64, availability: i64) -> Hall {
    Hall {
        id,
        name: name.to_string(),
        capacity,
        availability,
    }
}

pub fn visitor_record(
    id: &str,
    name: &str,
    attendance: Option<&str>,
    hall: Option<i64>,
) -> VisitorRecord {
    VisitorRecord {
        id: id.to_string(),
        name: name.to_string(),
        email: Some(format!(
            "{}@example.com",
            name.to_lowercase().replace(' ', ".")
        )),
        phone: Some("+1-555-0123".to_string()),
        organization: Some("Tech Innovations".to_string()),
        department: None,
        job_title: Some("Product Manager".to_string()),
        country: None,
        attendance: attendance.map(str::to_string),
        hall,
    }
}

#[async_trait]
impl VisitorStore for FakeStore {
    async fn list_visitors(&self) -> Result<Vec<VisitorRecord>, StoreError> {
        self.check_failure()?;
        Ok(self.state.lock().unwrap().visitors.clone())
    }

    async fn create_visitor(&self, visitor: &NewVisitor) -> Result<VisitorRecord, StoreError> {
        self.check_failure()?;
        let mut state = self.state.lock().unwrap();
        let id = state.next_id;
        state.next_id += 1;
        let record = VisitorRecord {
            id: id.to_string(),
            name: visitor.name.clone(),
            email: visitor.email.clone(),
            phone: visitor.phone.clone(),
            organization: visitor.organization.clone(),
            department: visitor.department.clone(),
            job_title: visitor.job_title.clone(),
            country: visitor.country.clone(),
            attendance: visitor.attendance.clone(),
            hall: visitor.hall,
        };
        state.visitors.push(record.clone());
        Ok(record)
    }

    async fn update_visitor(
        &self,
        id: &str,
        patch: &VisitorPatch,
    ) -> Result<VisitorRecord, StoreError> {
        self.check_failure()?;
        let mut state = self.state.lock().unwrap();
        let row = state
            .visitors
            .iter_mut()
            .find(|v| v.id == id)
            .ok_or(StoreError::Api {
                status: 404,
                body: "no such visitor".to_string(),
            })?;
        row.hall = patch.hall;
        Ok(row.clone())
    }

    async fn delete_visitor(&self, id: &str) -> Result<(), StoreError> {
        self.check_failure()?;
        let mut state = self.state.lock().unwrap();
        let before = state.visitors.len();
        state.visitors.retain(|v| v.id != id);
        if state.visitors.len() == before {
            return Err(StoreError::Api {
                status: 404,
                body: "no such visitor".to_string(),
            });
        }
        Ok(())
    }

    async fn list_halls(&self) -> Result<Vec<Hall>, StoreError> {
        self.check_failure()?;
        Ok(self.state.lock().unwrap().halls.clone())
    }
}

// ---------------------------------------------------------------------------
// Counting printer
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct CountingPrinter {
    count: AtomicUsize,
    last: Mutex<Option<BadgeRecord>>,
}

impl CountingPrinter {
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    pub fn last(&self) -> Option<BadgeRecord> {
        self.last.lock().unwrap().clone()
    }
}

impl Printer for CountingPrinter {
    fn print(&self, badge: &BadgeRecord) {
        self.count.fetch_add(1, Ordering::SeqCst);
        *self.last.lock().unwrap() = Some(badge.clone());
    }
}
