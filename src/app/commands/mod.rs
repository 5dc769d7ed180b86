pub mod batch;
pub mod doctor;
pub mod draft_loop;
pub mod generate;
pub mod insight;
