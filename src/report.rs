use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of one harvest run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HarvestReport {
    /// URL of the listing page that was harvested
    pub listing_url: String,

    /// Unique product links in first-seen order
    pub links: Vec<String>,

    /// Containers that yielded no link
    pub skipped: Vec<SkippedContainer>,
}

/// A container element that contributed no link
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkippedContainer {
    /// The element's id attribute
    pub container_id: String,

    /// Why no link was taken from it
    pub reason: SkipReason,
}

/// Why a container was skipped during extraction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkipReason {
    /// No anchor element inside the container
    NoAnchor,
    /// First anchor has no href attribute
    MissingHref,
    /// First anchor's href is an empty string
    EmptyHref,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::NoAnchor => write!(f, "no anchor element"),
            SkipReason::MissingHref => write!(f, "anchor has no href attribute"),
            SkipReason::EmptyHref => write!(f, "anchor href is empty"),
        }
    }
}

impl HarvestReport {
    /// Print the count line followed by one link per line
    pub fn print(&self) {
        println!("{} product links found:", self.links.len());
        for link in &self.links {
            println!("{}", link);
        }
    }
}
