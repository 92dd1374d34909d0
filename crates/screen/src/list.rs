//! Visitor list screen: the management view's state engine.
//!
//! Owns the in-memory visitor collection, the hall list, and the operator
//! view state. Every mutation goes through the registrant store first and
//! reconciles local state from the store's authoritative response --
//! nothing is applied optimistically, so a failed round trip leaves the
//! screen exactly as it was.

use std::sync::Arc;

use regdesk_channel::BadgeChannel;
use regdesk_core::badge::BadgeRecord;
use regdesk_core::error::CoreError;
use regdesk_core::hall::{hall_by_name, Hall};
use regdesk_core::listview::{ListView, PageSize, PageWindow};
use regdesk_core::palette::HallPalette;
use regdesk_core::slug::{badge_key, badge_slug};
use regdesk_core::types::{HallId, VisitorId};
use regdesk_core::visitor::{Visitor, VisitorDraft};
use regdesk_store::wire::{NewVisitor, VisitorPatch};
use regdesk_store::VisitorStore;

use crate::error::{ScreenError, ScreenResult};

/// Route of the badge view a successful print action navigates to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadgeRoute {
    slug: String,
}

impl BadgeRoute {
    pub fn slug(&self) -> &str {
        &self.slug
    }

    /// Route path, e.g. `/badge/sarah-johnson-blue-hall`.
    pub fn path(&self) -> String {
        format!("/badge/{}", self.slug)
    }
}

/// The management view's state engine.
///
/// Single mutator thread of control: operations take `&mut self` and are
/// awaited in sequence. The busy flag additionally models the UI contract
/// that the triggering control is disabled while a request is in flight,
/// so rapid repeated clicks cannot race.
pub struct ListScreen {
    store: Arc<dyn VisitorStore>,
    channel: Arc<dyn BadgeChannel>,
    palette: HallPalette,
    visitors: Vec<Visitor>,
    halls: Vec<Hall>,
    view: ListView,
    busy: bool,
}

impl ListScreen {
    /// Create an unmounted screen with the stock palette.
    pub fn new(store: Arc<dyn VisitorStore>, channel: Arc<dyn BadgeChannel>) -> Self {
        Self::with_palette(store, channel, HallPalette::default())
    }

    /// Create an unmounted screen with a custom hall palette.
    pub fn with_palette(
        store: Arc<dyn VisitorStore>,
        channel: Arc<dyn BadgeChannel>,
        palette: HallPalette,
    ) -> Self {
        Self {
            store,
            channel,
            palette,
            visitors: Vec::new(),
            halls: Vec::new(),
            view: ListView::new(),
            busy: false,
        }
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    /// Whether a store round trip is in flight. Hosts disable mutating
    /// controls while this is true.
    pub fn busy(&self) -> bool {
        self.busy
    }

    pub fn visitors(&self) -> &[Visitor] {
        &self.visitors
    }

    pub fn halls(&self) -> &[Hall] {
        &self.halls
    }

    pub fn find(&self, id: &str) -> Option<&Visitor> {
        self.visitors.iter().find(|v| v.id == id)
    }

    pub fn query(&self) -> &str {
        self.view.query()
    }

    pub fn page_size(&self) -> PageSize {
        self.view.page_size()
    }

    /// The rows visible on the current page.
    pub fn visible(&self) -> Vec<&Visitor> {
        self.view.visible_slice(&self.visitors)
    }

    /// Row window summary for the pager line.
    pub fn window(&self) -> PageWindow {
        self.view.window(self.filtered_count())
    }

    pub fn can_go_prev(&self) -> bool {
        self.view.can_go_prev(self.filtered_count())
    }

    pub fn can_go_next(&self) -> bool {
        self.view.can_go_next(self.filtered_count())
    }

    /// Rows matching the current query.
    pub fn filtered_count(&self) -> usize {
        self.view.filtered(&self.visitors).len()
    }

    // -----------------------------------------------------------------------
    // View state
    // -----------------------------------------------------------------------

    /// Replace the search query and reset to the first page.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.view.set_query(query);
    }

    /// Replace the page size and reset to the first page.
    pub fn set_page_size(&mut self, page_size: PageSize) {
        self.view.set_page_size(page_size);
    }

    /// Jump to a page. Out-of-range targets are rejected, not clamped.
    pub fn go_to_page(&mut self, page: u32) -> ScreenResult<()> {
        let count = self.filtered_count();
        self.view.go_to_page(page, count)?;
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Store round trips
    // -----------------------------------------------------------------------

    /// Load halls and visitors from the store.
    ///
    /// Halls load first so visitor hall references resolve to names.
    pub async fn mount(&mut self) -> ScreenResult<()> {
        self.begin()?;
        let result = self.reload_all().await;
        self.busy = false;
        result
    }

    async fn reload_all(&mut self) -> ScreenResult<()> {
        let halls = self.store.list_halls().await.map_err(log_store_error)?;
        let records = self.store.list_visitors().await.map_err(log_store_error)?;
        self.visitors = records
            .into_iter()
            .map(|r| r.into_domain(&halls))
            .collect();
        self.halls = halls;
        tracing::debug!(
            visitors = self.visitors.len(),
            halls = self.halls.len(),
            "List screen loaded"
        );
        Ok(())
    }

    async fn reload_halls(&mut self) -> ScreenResult<()> {
        self.halls = self.store.list_halls().await.map_err(log_store_error)?;
        Ok(())
    }

    /// Create a visitor and return its server-assigned id.
    ///
    /// Validation happens synchronously before any network call; the local
    /// collection is extended only with the record the store returned.
    /// Halls are reloaded afterwards because the assignment may have
    /// changed availability.
    pub async fn add(&mut self, draft: VisitorDraft) -> ScreenResult<VisitorId> {
        draft.validate()?;
        let hall_id = self.resolve_hall(draft.hall.as_deref())?;
        self.begin()?;
        let result = self.add_inner(&draft, hall_id).await;
        self.busy = false;
        result
    }

    async fn add_inner(
        &mut self,
        draft: &VisitorDraft,
        hall_id: Option<HallId>,
    ) -> ScreenResult<VisitorId> {
        let body = NewVisitor::from_draft(draft, hall_id);
        let record = self
            .store
            .create_visitor(&body)
            .await
            .map_err(log_store_error)?;
        let visitor = record.into_domain(&self.halls);
        let id = visitor.id.clone();
        tracing::info!(visitor_id = %id, "Visitor created");
        self.visitors.push(visitor);
        self.reload_halls().await?;
        Ok(id)
    }

    /// Reassign (or clear) a visitor's hall.
    ///
    /// The collection entry is replaced with the store's confirmed record,
    /// not the local draft.
    pub async fn set_hall(&mut self, id: &str, hall: Option<&str>) -> ScreenResult<()> {
        if self.find(id).is_none() {
            return Err(not_found(id).into());
        }
        let hall_id = self.resolve_hall(hall)?;
        self.begin()?;
        let result = self.set_hall_inner(id, hall_id).await;
        self.busy = false;
        result
    }

    async fn set_hall_inner(&mut self, id: &str, hall_id: Option<HallId>) -> ScreenResult<()> {
        let patch = VisitorPatch {
            id: id.to_string(),
            hall: hall_id,
        };
        let record = self
            .store
            .update_visitor(id, &patch)
            .await
            .map_err(log_store_error)?;
        let confirmed = record.into_domain(&self.halls);
        tracing::info!(visitor_id = %id, hall = ?confirmed.hall, "Visitor hall updated");
        if let Some(slot) = self.visitors.iter_mut().find(|v| v.id == id) {
            *slot = confirmed;
        }
        self.reload_halls().await?;
        Ok(())
    }

    /// Delete a visitor. The row is dropped locally only after the store
    /// confirms.
    pub async fn remove(&mut self, id: &str) -> ScreenResult<()> {
        if self.find(id).is_none() {
            return Err(not_found(id).into());
        }
        self.begin()?;
        let result = self.remove_inner(id).await;
        self.busy = false;
        result
    }

    async fn remove_inner(&mut self, id: &str) -> ScreenResult<()> {
        self.store
            .delete_visitor(id)
            .await
            .map_err(log_store_error)?;
        self.visitors.retain(|v| v.id != id);
        tracing::info!(visitor_id = %id, "Visitor removed");
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Badge handoff
    // -----------------------------------------------------------------------

    /// The print action: freeze the visitor into a badge record, store it
    /// on the channel under `badge-{slug}`, and return the badge route.
    ///
    /// The route is only returned after a successful channel write -- the
    /// badge view has no fallback data source, so navigation must never
    /// happen without one.
    pub async fn print(&mut self, id: &str) -> ScreenResult<BadgeRoute> {
        let visitor = self.find(id).ok_or_else(|| not_found(id))?.clone();
        self.begin()?;
        let result = self.handoff(&visitor).await;
        self.busy = false;
        result
    }

    /// Create a visitor, then print it.
    ///
    /// The store write completes and returns before the badge record is
    /// built, so the handoff carries the server-issued id and the
    /// server-confirmed hall, never the local draft.
    pub async fn add_and_print(&mut self, draft: VisitorDraft) -> ScreenResult<BadgeRoute> {
        let id = self.add(draft).await?;
        self.print(&id).await
    }

    async fn handoff(&self, visitor: &Visitor) -> ScreenResult<BadgeRoute> {
        let record = BadgeRecord::compose(visitor, &self.palette);
        let slug = badge_slug(&visitor.name, visitor.hall.as_deref().unwrap_or(""));
        let key = badge_key(&slug);
        let payload = serde_json::to_string(&record)?;

        self.channel.put(&key, &payload).await.map_err(|err| {
            tracing::error!(key = %key, error = %err, "Badge handoff write failed");
            err
        })?;

        tracing::info!(slug = %slug, "Badge record stored");
        Ok(BadgeRoute { slug })
    }

    // -----------------------------------------------------------------------
    // Helpers
    // -----------------------------------------------------------------------

    fn begin(&mut self) -> ScreenResult<()> {
        if self.busy {
            return Err(ScreenError::Busy);
        }
        self.busy = true;
        Ok(())
    }

    /// Resolve a hall display name against the loaded hall list.
    fn resolve_hall(&self, hall: Option<&str>) -> Result<Option<HallId>, CoreError> {
        match hall {
            None => Ok(None),
            Some(name) => hall_by_name(&self.halls, name)
                .map(|h| Some(h.id))
                .ok_or_else(|| CoreError::Validation(format!("Unknown hall '{name}'"))),
        }
    }
}

fn not_found(id: &str) -> CoreError {
    CoreError::NotFound {
        entity: "visitor",
        id: id.to_string(),
    }
}

fn log_store_error(err: regdesk_store::StoreError) -> regdesk_store::StoreError {
    tracing::error!(error = %err, "Registrant store call failed");
    err
}
