mod client;
mod estimate;
mod insurance_error;
mod models;

pub use client::{DisabledRateLookup, HonestPolicyClient, RateLookup};
pub use estimate::{estimate_insurance, ListingFacts};
pub use insurance_error::InsuranceError;
pub use models::{InsuranceEstimate, RateQuery};
