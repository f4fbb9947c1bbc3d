mod company;
mod event;

pub use company::{CreateCompany, UpdateCompany};
pub use event::{CreateEvent, UpdateEvent};
