//! Read-only analyses over scraped pages
//!
//! - Brand visibility and tone across a results page
//! - Heuristic comparison of a page against a competitor

mod audit;
mod brand;

pub use audit::{audit_pages, keyword_density, run_audit, AuditReport};
pub use brand::{analyze_brand_mentions, BrandMentionSummary, Sentiment};
