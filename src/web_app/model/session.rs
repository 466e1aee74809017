// web_app/model/session.rs - Search page state container
//
// Owned by a single SearchPage instance. Every submission gets a ticket;
// only the completion holding the newest ticket may touch the results.

use super::{Notice, Product, SearchOutcome, is_submittable};

/// Identifies one submission
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

#[derive(Clone, Debug, Default)]
pub struct SearchSession {
    products: Vec<Product>,
    search_url: Option<String>,
    loading: bool,
    issued: u64,
}

impl SearchSession {
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn search_url(&self) -> Option<&str> {
        self.search_url.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Whether the submit control for `term` should be enabled
    pub fn can_submit(&self, term: &str) -> bool {
        !self.loading && is_submittable(term)
    }

    /// Start a submission and mark the session as loading.
    pub fn begin(&mut self) -> Ticket {
        self.issued += 1;
        self.loading = true;
        Ticket(self.issued)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.issued
    }

    /// Apply the outcome of a submission.
    ///
    /// Returns the notice to show, or `None` when a newer submission has
    /// superseded this one and the outcome was dropped.
    pub fn complete(&mut self, ticket: Ticket, outcome: SearchOutcome) -> Option<Notice> {
        if !self.is_current(ticket) {
            tracing::debug!("Dropping stale search outcome (ticket {:?}, latest {})", ticket, self.issued);
            return None;
        }

        self.loading = false;

        match outcome {
            SearchOutcome::Found(results) => {
                let count = results.products.len();
                self.products = results.products;
                self.search_url = results.search_url;
                Some(Notice::success(format!("Found {} products!", count)))
            }
            SearchOutcome::Failed(failure) => {
                tracing::warn!("Search failed: {:?}", failure);
                Some(Notice::error(failure.message()))
            }
        }
    }
}
