// Static catalogs: careers, taxonomy, archetypes, questionnaire.
// Everything here is compiled in and read-only for the lifetime of the process.

pub mod archetypes;
pub mod careers;
pub mod handlers;
pub mod questionnaire;
pub mod taxonomy;
