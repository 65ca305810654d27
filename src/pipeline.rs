//! Feed payload to display snapshot: parse, reconcile against the roster,
//! rank.

use std::sync::Arc;

use serde::Serialize;
use utoipa::ToSchema;

use crate::diagnostics::Diagnostics;
use crate::dish::{self, AntennaRecord, StatusOrder};
use crate::feed::{FeedError, FeedSource, RawFeed, Station};
use crate::reference::{ReferenceData, SpacecraftRecord};

/// Complete view of the network: every roster antenna, ranked.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct DsnSnapshot {
    pub dishes: Vec<AntennaRecord>,
    pub stations: Vec<Station>,
    pub timestamp: String,
}

#[derive(Clone)]
pub struct Pipeline {
    reference: Arc<ReferenceData>,
    diagnostics: Arc<dyn Diagnostics>,
    order: StatusOrder,
}

impl Pipeline {
    pub fn new(
        reference: Arc<ReferenceData>,
        diagnostics: Arc<dyn Diagnostics>,
        order: StatusOrder,
    ) -> Self {
        Self {
            reference,
            diagnostics,
            order,
        }
    }

    pub fn reference(&self) -> &ReferenceData {
        &self.reference
    }

    /// The view before any feed has arrived.
    pub fn initial_snapshot(&self) -> DsnSnapshot {
        DsnSnapshot {
            dishes: dish::roster(&self.reference),
            stations: Vec::new(),
            timestamp: String::new(),
        }
    }

    pub fn process(&self, raw: &str) -> Result<DsnSnapshot, FeedError> {
        let feed = RawFeed::parse(raw)?;
        Ok(self.process_feed(feed))
    }

    pub fn process_feed(&self, feed: RawFeed) -> DsnSnapshot {
        let reported = feed.dish.into_vec();
        log::debug!("feed reported {} dishes", reported.len());

        let dishes = dish::reconcile(
            reported,
            dish::roster(&self.reference),
            &self.reference,
            self.diagnostics.as_ref(),
        );

        DsnSnapshot {
            dishes: dish::rank(dishes, self.order),
            stations: feed
                .station
                .into_vec()
                .into_iter()
                .map(Station::from)
                .collect(),
            timestamp: feed.timestamp.unwrap_or_default(),
        }
    }

    /// Await the payload from `source`, then process it.
    pub async fn process_source<S: FeedSource>(
        &self,
        source: &S,
    ) -> Result<DsnSnapshot, FeedError> {
        let text = source.fetch_text().await?;
        self.process(&text)
    }

    pub fn lookup_spacecraft(&self, id: &str, feed_name: &str) -> SpacecraftRecord {
        self.reference
            .spacecraft(id, feed_name, self.diagnostics.as_ref())
    }
}
