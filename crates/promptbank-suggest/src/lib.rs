pub mod coach;
pub mod engine;

pub use coach::reply;
pub use engine::suggest;
