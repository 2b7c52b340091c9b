pub mod measurement;
pub mod precipitation_form;
pub mod station;
