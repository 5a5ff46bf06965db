pub mod moxie_earnings;
pub mod moxie_earnings_query;
