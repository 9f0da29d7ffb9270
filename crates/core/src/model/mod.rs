mod card;
mod ids;
mod revisit;

pub use card::{Card, CardDraft, CardError, ValidatedCard};
pub use ids::CardId;
pub use revisit::{RevisitChoice, RevisitError};
