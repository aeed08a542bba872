//! Pagination bookkeeping
//!
//! The remote API pages results with opaque continuation tokens. This module
//! tracks the ordered history of those tokens so a caller can walk forward
//! and backward through a result set without re-issuing the original query.
//!
//! Every fetched page occupies one slot on the stack, holding the token that
//! page issued (the terminal page issues none but still takes its slot, which
//! keeps backward pops aligned with the page sequence). Invariant: the top
//! slot belongs to the current page, and its token fetches the next unseen
//! page. Rewinding pops the current page's slot plus the one under it; the
//! slot then on top carries the token that re-fetches the previous page.

use crate::types::SearchResponse;


// ============================================================================
// Token Stack
// ============================================================================

/// Ordered history of page slots, most-recent-last
///
/// Each slot is the continuation token the page issued, or `None` for the
/// terminal page.
#[derive(Debug, Clone, Default)]
pub struct TokenStack {
    slots: Vec<Option<String>>,
}

impl TokenStack {
    /// Create an empty stack
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a page slot; an empty token is normalized to `None`
    pub fn push(&mut self, token: Option<String>) {
        self.slots.push(token.filter(|t| !t.is_empty()));
    }

    /// Pop the most recent slot
    pub fn pop(&mut self) -> Option<Option<String>> {
        self.slots.pop()
    }

    /// Token held by the top slot, if any
    pub fn top(&self) -> Option<&str> {
        self.slots.last().and_then(|slot| slot.as_deref())
    }

    /// Check if the stack is empty
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of page slots held
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Drop all slots
    pub fn clear(&mut self) {
        self.slots.clear();
    }
}

// ============================================================================
// Rewind Outcome
// ============================================================================

/// Outcome of rewinding the session one page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rewind {
    /// Already at (or returned to) the first page; serve the cached
    /// first-page response without a network call
    FirstPage,
    /// Re-fetch the page identified by this token
    Refetch(String),
}

// ============================================================================
// Search Session
// ============================================================================

/// Bookkeeping for one logical search session
///
/// `original` holds the first-page response for the lifetime of the session
/// and is replaced only when a new search starts; `current` is overwritten
/// on every fetch.
#[derive(Debug, Clone, Default)]
pub struct SearchSession {
    tokens: TokenStack,
    original: Option<SearchResponse>,
    current: Option<SearchResponse>,
    exhausted: bool,
}

impl SearchSession {
    /// Create a fresh session
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset to a fresh first page; called when a new search starts
    pub fn reset(&mut self) {
        self.tokens.clear();
        self.original = None;
        self.current = None;
        self.exhausted = false;
    }

    /// Record a successful search-type response
    ///
    /// Applies the bookkeeping protocol: the first recorded response becomes
    /// the original, the page's slot is pushed whether or not it carries a
    /// token, a missing token marks the session exhausted, and the response
    /// becomes current.
    pub fn record(&mut self, response: SearchResponse) {
        if self.original.is_none() {
            self.original = Some(response.clone());
        }

        self.tokens.push(response.next_page_token.clone());
        if self.tokens.top().is_none() {
            self.exhausted = true;
        }

        self.current = Some(response);
    }

    /// Token that fetches the next unseen page
    pub fn next_token(&self) -> Option<&str> {
        self.tokens.top()
    }

    /// Rewind one page
    ///
    /// Clears the exhausted flag, then pops the current page's slot and the
    /// slot beneath it. An empty stack afterwards means the session is back
    /// at the first page.
    pub fn rewind(&mut self) -> Rewind {
        self.exhausted = false;
        self.tokens.pop();
        self.tokens.pop();

        match self.tokens.top() {
            Some(token) => Rewind::Refetch(token.to_string()),
            None => Rewind::FirstPage,
        }
    }

    /// First-page response of this session
    pub fn original(&self) -> Option<&SearchResponse> {
        self.original.as_ref()
    }

    /// Most recent response
    pub fn current(&self) -> Option<&SearchResponse> {
        self.current.as_ref()
    }

    /// Check if forward movement has hit end-of-results
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Page slot history, most-recent-last
    pub fn tokens(&self) -> &TokenStack {
        &self.tokens
    }
}
